use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, put},
    Json, Router,
};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::api::response::error_response;
use crate::features::AppState;
use crate::models::CampModel;

use super::{
    commands::{
        CreateCampCommand, CreateCampError, DeleteCampCommand, DeleteCampError, UpdateCampCommand,
        UpdateCampError,
    },
    queries::{
        GetCampError, GetCampQuery, ListCampsError, ListCampsQuery, SearchCampsError,
        SearchCampsQuery,
    },
};

/// Camps API surface version
///
/// v1.0 is the baseline; v1.1 adds lookup by moniker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiVersion {
    V1_0,
    V1_1,
}

pub fn camps_routes(version: ApiVersion) -> Router<AppState> {
    let moniker_routes = match version {
        ApiVersion::V1_0 => put(update_camp).delete(delete_camp),
        ApiVersion::V1_1 => get(get_camp).put(update_camp).delete(delete_camp),
    };

    Router::new()
        .route("/", get(list_camps).post(create_camp))
        .route("/search", get(search_camps))
        .route("/:moniker", moniker_routes)
}

#[derive(Debug, Deserialize)]
struct IncludeTalksParams {
    #[serde(rename = "includeTalks", default)]
    include_talks: bool,
}

#[derive(Debug, Deserialize)]
struct SearchParams {
    #[serde(rename = "theDate")]
    the_date: NaiveDate,
    #[serde(rename = "includeTalks", default)]
    include_talks: bool,
}

#[tracing::instrument(skip(state, params))]
async fn list_camps(
    State(state): State<AppState>,
    Query(params): Query<IncludeTalksParams>,
) -> Result<Response, CampApiError> {
    let query = ListCampsQuery {
        include_talks: params.include_talks,
    };

    let models = super::queries::list::handle(state.store.as_ref(), query).await?;

    tracing::debug!(count = models.len(), "Camps listed via API");

    Ok((StatusCode::OK, Json(models)).into_response())
}

#[tracing::instrument(skip(state), fields(moniker = %moniker))]
async fn get_camp(
    State(state): State<AppState>,
    Path(moniker): Path<String>,
) -> Result<Response, CampApiError> {
    let query = GetCampQuery { moniker };

    let model = super::queries::get::handle(state.store.as_ref(), query).await?;

    Ok((StatusCode::OK, Json(model)).into_response())
}

#[tracing::instrument(skip(state, params))]
async fn search_camps(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Response, CampApiError> {
    let query = SearchCampsQuery {
        date: params.the_date,
        include_talks: params.include_talks,
    };

    let models = super::queries::search::handle(state.store.as_ref(), query).await?;

    tracing::debug!(count = models.len(), "Camps searched via API");

    Ok((StatusCode::OK, Json(models)).into_response())
}

#[tracing::instrument(skip(state, model), fields(moniker = %model.moniker))]
async fn create_camp(
    State(state): State<AppState>,
    Json(model): Json<CampModel>,
) -> Result<Response, CampApiError> {
    let command = CreateCampCommand { model };

    let response = super::commands::create::handle(state.store.as_ref(), command).await?;

    tracing::info!(moniker = %response.model.moniker, "Camp created via API");

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, response.location)],
        Json(response.model),
    )
        .into_response())
}

#[tracing::instrument(skip(state, model), fields(moniker = %moniker))]
async fn update_camp(
    State(state): State<AppState>,
    Path(moniker): Path<String>,
    Json(model): Json<CampModel>,
) -> Result<Response, CampApiError> {
    let command = UpdateCampCommand { moniker, model };

    let model = super::commands::update::handle(state.store.as_ref(), command).await?;

    Ok((StatusCode::OK, Json(model)).into_response())
}

#[tracing::instrument(skip(state), fields(moniker = %moniker))]
async fn delete_camp(
    State(state): State<AppState>,
    Path(moniker): Path<String>,
) -> Result<Response, CampApiError> {
    let command = DeleteCampCommand { moniker };

    super::commands::delete::handle(state.store.as_ref(), command).await?;

    Ok(StatusCode::OK.into_response())
}

/// Fixed error-kind to status-code lookup for the camps surface
#[derive(Debug)]
enum CampApiError {
    List(ListCampsError),
    Get(GetCampError),
    Search(SearchCampsError),
    Create(CreateCampError),
    Update(UpdateCampError),
    Delete(DeleteCampError),
}

impl From<ListCampsError> for CampApiError {
    fn from(err: ListCampsError) -> Self {
        Self::List(err)
    }
}

impl From<GetCampError> for CampApiError {
    fn from(err: GetCampError) -> Self {
        Self::Get(err)
    }
}

impl From<SearchCampsError> for CampApiError {
    fn from(err: SearchCampsError) -> Self {
        Self::Search(err)
    }
}

impl From<CreateCampError> for CampApiError {
    fn from(err: CreateCampError) -> Self {
        Self::Create(err)
    }
}

impl From<UpdateCampError> for CampApiError {
    fn from(err: UpdateCampError) -> Self {
        Self::Update(err)
    }
}

impl From<DeleteCampError> for CampApiError {
    fn from(err: DeleteCampError) -> Self {
        Self::Delete(err)
    }
}

impl IntoResponse for CampApiError {
    fn into_response(self) -> Response {
        match self {
            CampApiError::Get(GetCampError::NotFound(_))
            | CampApiError::Delete(DeleteCampError::NotFound(_))
            | CampApiError::Search(SearchCampsError::NoMatches(_)) => {
                error_response(StatusCode::NOT_FOUND, self.to_string())
            },

            CampApiError::Create(CreateCampError::DuplicateMoniker(_))
            | CampApiError::Create(CreateCampError::InvalidMoniker(_))
            | CampApiError::Create(CreateCampError::SaveFailed)
            | CampApiError::Update(UpdateCampError::UnknownMoniker(_))
            | CampApiError::Update(UpdateCampError::SaveFailed)
            | CampApiError::Delete(DeleteCampError::SaveFailed) => {
                error_response(StatusCode::BAD_REQUEST, self.to_string())
            },

            CampApiError::List(ListCampsError::Database(_))
            | CampApiError::Get(GetCampError::Database(_))
            | CampApiError::Search(SearchCampsError::Database(_))
            | CampApiError::Create(CreateCampError::Database(_))
            | CampApiError::Update(UpdateCampError::Database(_))
            | CampApiError::Delete(DeleteCampError::Database(_)) => {
                tracing::error!("Database error in camps API: {}", self);
                error_response(StatusCode::INTERNAL_SERVER_ERROR, "Database Failure")
            },
        }
    }
}

impl std::fmt::Display for CampApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::List(e) => write!(f, "{}", e),
            Self::Get(e) => write!(f, "{}", e),
            Self::Search(e) => write!(f, "{}", e),
            Self::Create(e) => write!(f, "{}", e),
            Self::Update(e) => write!(f, "{}", e),
            Self::Delete(e) => write!(f, "{}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_moniker_message() {
        let err = CampApiError::Create(CreateCampError::DuplicateMoniker("atl".to_string()));
        assert_eq!(err.to_string(), "Moniker already Exists");
    }

    #[test]
    fn test_routes_structure() {
        let router = camps_routes(ApiVersion::V1_1);
        assert!(format!("{:?}", router).contains("Router"));
    }
}
