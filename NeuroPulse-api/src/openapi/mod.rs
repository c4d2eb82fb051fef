use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Configure Swagger UI endpoints
pub fn configure_swagger_routes() -> SwaggerUi {
    SwaggerUi::new("/api-docs")
        .url("/api-docs/openapi.json", ApiDoc::openapi())
}

// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health endpoints
        crate::api::handlers::health::health_check,

        // Vital sign endpoints
        crate::api::handlers::vitals::classify_vital,
        crate::api::handlers::vitals::classify_blood_pressure_text,
        crate::api::handlers::vitals::assess_vital_snapshot,

        // Risk endpoints
        crate::api::handlers::risk::assess_stroke_risk,
        crate::api::handlers::risk::triage_case
    ),
    components(
        schemas(
            // Entities
            crate::entities::common::ErrorResponse,
            crate::entities::vitals::PublicVitalReading,
            crate::entities::vitals::BloodPressureTextRequest,
            crate::entities::vitals::ClassificationResponse,
            crate::entities::vitals::PublicVitalSnapshot,
            crate::entities::vitals::SnapshotAssessmentResponse,
            crate::entities::risk::PublicRiskAssessmentRequest,
            crate::entities::risk::RiskAssessmentResponse,
            crate::entities::risk::PublicTrendSummary,
            crate::entities::risk::PublicStrokeCenterLevel,
            crate::entities::risk::PublicStrokeCenter,
            crate::entities::risk::PublicTriageRequest,
            crate::entities::risk::RoutingDecisionResponse,
            crate::entities::risk::TriageResponse,

            // Health handlers
            crate::api::handlers::health::HealthResponse
        )
    ),
    tags(
        (name = "health", description = "Health check endpoint"),
        (name = "vitals", description = "Vital sign classification endpoints"),
        (name = "risk", description = "Stroke risk, triage and routing endpoints")
    ),
    info(
        title = "NeuroPulse Vitals API",
        version = "0.1.0",
        description = "Severity classification for vital signs and stroke risk thresholds",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        ),
    ),
    servers(
        (url = "/", description = "Local development server")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_doc_generation() {
        let openapi = ApiDoc::openapi();

        assert_eq!(openapi.info.title, "NeuroPulse Vitals API");
        assert_eq!(openapi.info.version, "0.1.0");

        let tags = openapi.tags.as_ref().expect("tags should be defined");
        assert!(tags.iter().any(|tag| tag.name == "vitals"));
        assert!(tags.iter().any(|tag| tag.name == "risk"));

        let paths = &openapi.paths.paths;
        assert!(paths.contains_key("/health"));
        assert!(paths.contains_key("/api/v1/vitals/classify"));
        assert!(paths.contains_key("/api/v1/vitals/classify/blood-pressure"));
        assert!(paths.contains_key("/api/v1/vitals/assess"));
        assert!(paths.contains_key("/api/v1/risk/assess"));
        assert!(paths.contains_key("/api/v1/risk/triage"));
    }

    #[test]
    fn test_schemas_registered() {
        let openapi = ApiDoc::openapi();
        let components = openapi.components.expect("components should be defined");

        assert!(components.schemas.contains_key("PublicVitalReading"));
        assert!(components.schemas.contains_key("ClassificationResponse"));
        assert!(components.schemas.contains_key("RiskAssessmentResponse"));
        assert!(components.schemas.contains_key("TriageResponse"));
        assert!(components.schemas.contains_key("ErrorResponse"));
    }

    #[test]
    fn test_post_endpoints_document_error_response() {
        let openapi = ApiDoc::openapi();

        for path in [
            "/api/v1/vitals/classify",
            "/api/v1/vitals/classify/blood-pressure",
            "/api/v1/vitals/assess",
            "/api/v1/risk/assess",
            "/api/v1/risk/triage",
        ] {
            let item = &openapi.paths.paths[path];
            let post = item
                .operations
                .values()
                .next()
                .expect("operation should be defined");
            assert!(
                post.responses.responses.contains_key("400"),
                "{} should document 400",
                path
            );
        }
    }
}
