use axum::{
    routing::{get, post},
    Extension, Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::debug;

use crate::api::handlers::health::{self, AppEnvironment};
use crate::api::handlers::{risk, route_not_found, vitals};
use crate::config::ServerConfig;
use crate::openapi::configure_swagger_routes;

/// Create the application router with the default vitals service
pub fn create_app(config: &ServerConfig) -> Router {
    create_app_with_service(vitals::create_service(), config)
}

/// Create the application router around a given vitals service
pub fn create_app_with_service(service: vitals::VitalsService, config: &ServerConfig) -> Router {
    debug!("Creating application router");

    // Classification and risk routes share the vitals service
    let api_routes = Router::new()
        .route("/vitals/classify", post(vitals::classify_vital))
        .route(
            "/vitals/classify/blood-pressure",
            post(vitals::classify_blood_pressure_text),
        )
        .route("/vitals/assess", post(vitals::assess_vital_snapshot))
        .route("/risk/assess", post(risk::assess_stroke_risk))
        .route("/risk/triage", post(risk::triage_case));

    debug!("API routes configured");

    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .layer(Extension(AppEnvironment(config.app_env.clone())));

    debug!("Public routes configured");

    let app = Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .with_state(service);

    // Configure the Swagger UI using the helper function
    let app = add_swagger_ui(app).fallback(route_not_found);
    debug!("Swagger UI merged");

    // Initialize health check service startup time
    health::initialize_server_start_time();

    app.layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Add Swagger UI to the router
pub fn add_swagger_ui(app: Router) -> Router {
    // Get Swagger UI routes
    let swagger = configure_swagger_routes();

    // Merge Swagger UI with the app router
    app.merge(swagger)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let app = create_app(&ServerConfig::default());

        let response = app
            .oneshot(Request::builder().uri("/api/v1/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "not_found");
    }

    #[tokio::test]
    async fn test_classify_requires_post() {
        let app = create_app(&ServerConfig::default());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/vitals/classify")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
