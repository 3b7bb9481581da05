// Router setup - Routes and HTTP middleware
use crate::infrastructure::config::ServerSettings;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{get_dashboard, health_check, list_devices};
use anyhow::Context;
use axum::{
    Router,
    http::{HeaderValue, Method},
    routing::get,
};
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

pub fn build_router(state: Arc<AppState>, settings: &ServerSettings) -> anyhow::Result<Router> {
    let cors = cors_layer(&settings.cors_allowed_origin)?;

    Ok(Router::new()
        .route("/healthz", get(health_check))
        .route("/devices", get(list_devices))
        .route("/devices/:id/dashboard", get(get_dashboard))
        .layer((TraceLayer::new_for_http(), CompressionLayer::new(), cors))
        .with_state(state))
}

/// The front-end is served from another origin, so every response carries CORS headers.
fn cors_layer(origin: &str) -> anyhow::Result<CorsLayer> {
    let allow_origin = if origin == "*" {
        AllowOrigin::any()
    } else {
        let origin = HeaderValue::from_str(origin)
            .with_context(|| format!("Invalid CORS origin `{}`", origin))?;
        AllowOrigin::exact(origin)
    };

    Ok(CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dashboard_service::DashboardService;
    use crate::application::device_service::DeviceService;
    use crate::application::environment_repository::testing::InMemoryRepository;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use tower::ServiceExt;

    fn router(cors_allowed_origin: &str) -> Router {
        let repository = Arc::new(InMemoryRepository::default());
        let state = Arc::new(AppState {
            device_service: DeviceService::new(repository.clone()),
            dashboard_service: DashboardService::new(repository),
        });
        let settings = ServerSettings {
            cors_allowed_origin: cors_allowed_origin.to_string(),
            ..Default::default()
        };
        build_router(state, &settings).unwrap()
    }

    fn request(uri: &str) -> Request<Body> {
        Request::builder()
            .uri(uri)
            .header(header::ORIGIN, "http://localhost:3000")
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn test_any_origin_allowed() {
        let response = router("*")
            .oneshot(request("/devices/rpi-4/dashboard?date=2024-03-01"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    }

    #[tokio::test]
    async fn test_error_response_has_cors_header() {
        let response = router("*")
            .oneshot(request("/devices/rpi-4/dashboard?date=yesterday"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    }

    #[tokio::test]
    async fn test_exact_origin_allowed() {
        let response = router("http://localhost:3000")
            .oneshot(request("/devices"))
            .await
            .unwrap();

        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "http://localhost:3000"
        );
    }

    #[test]
    fn test_invalid_origin() {
        assert!(cors_layer("http://bad\norigin").is_err());
    }
}
