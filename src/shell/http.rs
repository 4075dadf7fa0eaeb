use axum::{
    Json, Router,
    http::{HeaderName, Method, header},
    routing::{get, post},
};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::modules::events::core::event::Event;
use crate::modules::events::use_cases::add_event::inbound::http as add_http;
use crate::modules::events::use_cases::delete_event::inbound::http as delete_http;
use crate::modules::events::use_cases::list_events::inbound::http as list_http;
use crate::shell::state::AppState;

pub const API_VERSION: &str = "1.0.0";

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health))
        .route("/version", get(version))
        .route("/events", get(list_http::handle))
        .route("/event", post(add_http::handle).delete(delete_http::handle))
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// Any third-party page may call the API.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::ORIGIN,
            header::CONTENT_TYPE,
            header::ACCEPT,
            HeaderName::from_static("x-requested-with"),
        ])
}

async fn health() -> Json<Vec<Event>> {
    Json(Vec::new())
}

#[derive(Serialize)]
struct VersionBody {
    version: &'static str,
}

async fn version() -> Json<VersionBody> {
    Json(VersionBody {
        version: API_VERSION,
    })
}

#[cfg(test)]
mod shell_http_tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use std::sync::Arc;
    use tower::ServiceExt;

    use crate::modules::events::adapters::outbound::in_memory::InMemoryEvents;
    use crate::shell::state::AppState;

    use super::router;

    fn app() -> axum::Router {
        router(AppState::new(Arc::new(InMemoryEvents::new())))
    }

    #[tokio::test]
    async fn it_should_return_an_empty_array_from_the_health_endpoint() {
        let response = app()
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json, serde_json::json!([]));
    }

    #[tokio::test]
    async fn it_should_return_the_fixed_version() {
        let response = app()
            .oneshot(Request::get("/version").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json, serde_json::json!({ "version": "1.0.0" }));
    }

    #[tokio::test]
    async fn it_should_allow_any_origin_on_every_response() {
        let response = app()
            .oneshot(
                Request::get("/events")
                    .header("origin", "https://example.com")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response
                .headers()
                .get("access-control-allow-origin")
                .and_then(|value| value.to_str().ok()),
            Some("*")
        );
    }
}
