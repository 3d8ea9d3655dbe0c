use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};

use crate::api::response::error_response;
use crate::features::AppState;
use crate::models::TalkModel;

use super::{
    commands::{
        CreateTalkCommand, CreateTalkError, DeleteTalkCommand, DeleteTalkError, UpdateTalkCommand,
        UpdateTalkError,
    },
    queries::{GetTalkError, GetTalkQuery, ListTalksError, ListTalksQuery},
};

/// Routes are mounted under `/camps/:moniker/talks`, so every handler
/// extracts the camp moniker from the enclosing path.
pub fn talks_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_talks).post(create_talk))
        .route("/:id", get(get_talk).put(update_talk).delete(delete_talk))
}

#[tracing::instrument(skip(state), fields(moniker = %moniker))]
async fn list_talks(
    State(state): State<AppState>,
    Path(moniker): Path<String>,
) -> Result<Response, TalkApiError> {
    let query = ListTalksQuery { moniker };

    let models = super::queries::list::handle(state.store.as_ref(), query).await?;

    tracing::debug!(count = models.len(), "Talks listed via API");

    Ok((StatusCode::OK, Json(models)).into_response())
}

#[tracing::instrument(skip(state), fields(moniker = %moniker, talk_id))]
async fn get_talk(
    State(state): State<AppState>,
    Path((moniker, talk_id)): Path<(String, i32)>,
) -> Result<Response, TalkApiError> {
    let query = GetTalkQuery { moniker, talk_id };

    let model = super::queries::get::handle(state.store.as_ref(), query).await?;

    Ok((StatusCode::OK, Json(model)).into_response())
}

#[tracing::instrument(skip(state, model), fields(moniker = %moniker))]
async fn create_talk(
    State(state): State<AppState>,
    Path(moniker): Path<String>,
    Json(model): Json<TalkModel>,
) -> Result<Response, TalkApiError> {
    let command = CreateTalkCommand { moniker, model };

    let response = super::commands::create::handle(state.store.as_ref(), command).await?;

    tracing::info!(talk_id = ?response.model.id, "Talk created via API");

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, response.location)],
        Json(response.model),
    )
        .into_response())
}

#[tracing::instrument(skip(state, model), fields(moniker = %moniker, talk_id))]
async fn update_talk(
    State(state): State<AppState>,
    Path((moniker, talk_id)): Path<(String, i32)>,
    Json(model): Json<TalkModel>,
) -> Result<Response, TalkApiError> {
    let command = UpdateTalkCommand {
        moniker,
        talk_id,
        model,
    };

    let model = super::commands::update::handle(state.store.as_ref(), command).await?;

    Ok((StatusCode::OK, Json(model)).into_response())
}

#[tracing::instrument(skip(state), fields(moniker = %moniker, talk_id))]
async fn delete_talk(
    State(state): State<AppState>,
    Path((moniker, talk_id)): Path<(String, i32)>,
) -> Result<Response, TalkApiError> {
    let command = DeleteTalkCommand { moniker, talk_id };

    super::commands::delete::handle(state.store.as_ref(), command).await?;

    Ok(StatusCode::OK.into_response())
}

/// Fixed error-kind to status-code lookup for the talks surface
#[derive(Debug)]
enum TalkApiError {
    List(ListTalksError),
    Get(GetTalkError),
    Create(CreateTalkError),
    Update(UpdateTalkError),
    Delete(DeleteTalkError),
}

impl From<ListTalksError> for TalkApiError {
    fn from(err: ListTalksError) -> Self {
        Self::List(err)
    }
}

impl From<GetTalkError> for TalkApiError {
    fn from(err: GetTalkError) -> Self {
        Self::Get(err)
    }
}

impl From<CreateTalkError> for TalkApiError {
    fn from(err: CreateTalkError) -> Self {
        Self::Create(err)
    }
}

impl From<UpdateTalkError> for TalkApiError {
    fn from(err: UpdateTalkError) -> Self {
        Self::Update(err)
    }
}

impl From<DeleteTalkError> for TalkApiError {
    fn from(err: DeleteTalkError) -> Self {
        Self::Delete(err)
    }
}

impl IntoResponse for TalkApiError {
    fn into_response(self) -> Response {
        match self {
            TalkApiError::List(ListTalksError::CampNotFound(_))
            | TalkApiError::Get(GetTalkError::NotFound { .. })
            | TalkApiError::Update(UpdateTalkError::NotFound { .. })
            | TalkApiError::Delete(DeleteTalkError::NotFound { .. }) => {
                error_response(StatusCode::NOT_FOUND, self.to_string())
            },

            TalkApiError::Create(CreateTalkError::CampNotFound(_))
            | TalkApiError::Create(CreateTalkError::SpeakerRequired)
            | TalkApiError::Create(CreateTalkError::SpeakerNotFound(_))
            | TalkApiError::Create(CreateTalkError::InvalidLink(_))
            | TalkApiError::Create(CreateTalkError::SaveFailed)
            | TalkApiError::Update(UpdateTalkError::SaveFailed)
            | TalkApiError::Delete(DeleteTalkError::SaveFailed) => {
                error_response(StatusCode::BAD_REQUEST, self.to_string())
            },

            TalkApiError::List(ListTalksError::Database(_))
            | TalkApiError::Get(GetTalkError::Database(_))
            | TalkApiError::Create(CreateTalkError::Database(_))
            | TalkApiError::Update(UpdateTalkError::Database(_))
            | TalkApiError::Delete(DeleteTalkError::Database(_)) => {
                tracing::error!("Database error in talks API: {}", self);
                error_response(StatusCode::INTERNAL_SERVER_ERROR, "Database Failure")
            },
        }
    }
}

impl std::fmt::Display for TalkApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::List(e) => write!(f, "{}", e),
            Self::Get(e) => write!(f, "{}", e),
            Self::Create(e) => write!(f, "{}", e),
            Self::Update(e) => write!(f, "{}", e),
            Self::Delete(e) => write!(f, "{}", e),
        }
    }
}
