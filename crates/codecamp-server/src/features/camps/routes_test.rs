//! Integration tests for camp routes
//!
//! These tests exercise the versioned camps endpoints end to end
//! against the in-memory store.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        Router,
    };
    use serde_json::json;
    use tower::ServiceExt;

    use crate::config::Config;
    use crate::features::camps::{camps_routes, ApiVersion};
    use crate::features::AppState;
    use crate::models::{Location, NewCamp};
    use crate::store::memory::MemoryCampStore;
    use crate::store::CampStore;

    fn create_test_router(store: Arc<MemoryCampStore>, version: ApiVersion) -> Router {
        let state = AppState {
            store,
            config: Config::default().into_shared(),
        };
        camps_routes(version).with_state(state)
    }

    async fn seed_camp(store: &MemoryCampStore, moniker: &str, date: Option<&str>) {
        store
            .add_camp(&NewCamp {
                moniker: moniker.to_string(),
                name: format!("{moniker} Code Camp"),
                description: None,
                event_date_start: date.and_then(|d| d.parse().ok()),
                event_date_end: None,
                location: Location::default(),
            })
            .await
            .unwrap();
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_list_camps_endpoint() {
        let store = Arc::new(MemoryCampStore::new());
        seed_camp(&store, "ATL2024", None).await;
        seed_camp(&store, "SEA2024", None).await;
        let app = create_test_router(store, ApiVersion::V1_0);

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json.as_array().unwrap().len(), 2);
        assert_eq!(json[0]["Moniker"], "ATL2024");
    }

    #[tokio::test]
    async fn test_list_camps_with_include_talks() {
        let store = Arc::new(MemoryCampStore::new());
        seed_camp(&store, "ATL2024", None).await;
        let app = create_test_router(store, ApiVersion::V1_0);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/?includeTalks=true")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert!(json[0]["Talks"].is_array());
    }

    #[tokio::test]
    async fn test_get_camp_by_moniker() {
        let store = Arc::new(MemoryCampStore::new());
        seed_camp(&store, "ATL2024", None).await;
        let app = create_test_router(store, ApiVersion::V1_1);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/ATL2024")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["Name"], "ATL2024 Code Camp");
    }

    #[tokio::test]
    async fn test_get_camp_not_found() {
        let store = Arc::new(MemoryCampStore::new());
        let app = create_test_router(store, ApiVersion::V1_1);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/nonexistent")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_get_camp_not_routed_on_v1_0() {
        let store = Arc::new(MemoryCampStore::new());
        seed_camp(&store, "ATL2024", None).await;
        let app = create_test_router(store, ApiVersion::V1_0);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/ATL2024")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        // Lookup by moniker is a v1.1 capability
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_search_camps_by_date() {
        let store = Arc::new(MemoryCampStore::new());
        seed_camp(&store, "ATL2024", Some("2024-03-01")).await;
        seed_camp(&store, "SEA2024", Some("2024-06-01")).await;
        let app = create_test_router(store, ApiVersion::V1_0);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/search?theDate=2024-03-01")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json.as_array().unwrap().len(), 1);
        assert_eq!(json[0]["Moniker"], "ATL2024");
    }

    #[tokio::test]
    async fn test_search_camps_no_matches() {
        let store = Arc::new(MemoryCampStore::new());
        seed_camp(&store, "ATL2024", Some("2024-03-01")).await;
        let app = create_test_router(store, ApiVersion::V1_0);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/search?theDate=2099-01-01")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_create_camp_returns_location() {
        let store = Arc::new(MemoryCampStore::new());
        let app = create_test_router(store.clone(), ApiVersion::V1_1);

        let payload = json!({
            "Moniker": "ATL2024",
            "Name": "Atlanta Code Camp",
            "Venue": "Convention Center"
        });

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(payload.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "/api/camps/ATL2024"
        );
        let json = body_json(response).await;
        assert_eq!(json["Moniker"], "ATL2024");
        assert_eq!(json["Venue"], "Convention Center");

        // And the camp is retrievable afterwards
        assert!(store.get_camp("ATL2024").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_create_camp_duplicate_moniker() {
        let store = Arc::new(MemoryCampStore::new());
        seed_camp(&store, "ATL2024", None).await;
        let app = create_test_router(store, ApiVersion::V1_0);

        let payload = json!({
            "Moniker": "ATL2024",
            "Name": "Atlanta Code Camp"
        });

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(payload.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"]["message"], "Moniker already Exists");
    }

    #[tokio::test]
    async fn test_update_camp() {
        let store = Arc::new(MemoryCampStore::new());
        seed_camp(&store, "ATL2024", None).await;
        let app = create_test_router(store, ApiVersion::V1_0);

        let payload = json!({
            "Moniker": "ATL2024",
            "Name": "Atlanta Code Camp, Revised"
        });

        let response = app
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri("/ATL2024")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(payload.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["Name"], "Atlanta Code Camp, Revised");
    }

    #[tokio::test]
    async fn test_update_camp_unknown_moniker() {
        let store = Arc::new(MemoryCampStore::new());
        let app = create_test_router(store, ApiVersion::V1_0);

        let payload = json!({
            "Moniker": "nonexistent",
            "Name": "Nobody Home"
        });

        let response = app
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri("/nonexistent")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(payload.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_delete_camp() {
        let store = Arc::new(MemoryCampStore::new());
        seed_camp(&store, "ATL2024", None).await;
        let app = create_test_router(store.clone(), ApiVersion::V1_0);

        let response = app
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/ATL2024")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(store.get_camp("ATL2024").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_camp_not_found() {
        let store = Arc::new(MemoryCampStore::new());
        let app = create_test_router(store, ApiVersion::V1_0);

        let response = app
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/nonexistent")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
