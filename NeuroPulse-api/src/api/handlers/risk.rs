use axum::{
    extract::{rejection::JsonRejection, Json, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use tracing::{info, instrument, warn};

use neuro_pulse_domain::entities::{
    CaseFeatures, RiskAssessment, RiskAssessmentRequest, RoutingDecision, StrokeCenter,
    StrokeCenterLevel, TrendSummary, TriageRequest, TriageResult,
};
use neuro_pulse_domain::services::VitalsServiceError;

use crate::api::handlers::reject_body;
use crate::api::handlers::vitals::{
    convert_to_domain_snapshot, convert_to_public_snapshot_assessment, VitalsService,
};
use crate::entities::common::ErrorResponse;
use crate::entities::risk::{
    PublicRiskAssessmentRequest, PublicStrokeCenter, PublicStrokeCenterLevel, PublicTrendSummary,
    PublicTriageRequest, RiskAssessmentResponse, RoutingDecisionResponse, TriageResponse,
};

/// Assess stroke risk from model probabilities and onset time
#[utoipa::path(
    post,
    path = "/api/v1/risk/assess",
    request_body = PublicRiskAssessmentRequest,
    responses(
        (status = 200, description = "Risk assessed", body = RiskAssessmentResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
    ),
    tag = "risk"
)]
#[instrument(skip(service))]
pub async fn assess_stroke_risk(
    State(service): State<VitalsService>,
    payload: Result<Json<PublicRiskAssessmentRequest>, JsonRejection>,
) -> Result<impl IntoResponse, Response> {
    let Json(request) = payload.map_err(reject_body)?;
    let domain_request = convert_to_domain_request(request);

    match service.assess_risk(&domain_request) {
        Ok(assessment) => {
            info!(
                category = assessment.category.as_str(),
                window = assessment.treatment_window.as_str(),
                "Stroke risk assessed"
            );
            Ok((StatusCode::OK, Json(convert_to_public_assessment(assessment, Utc::now()))))
        }
        Err(VitalsServiceError::ValidationError(message)) => {
            warn!("Invalid risk assessment request: {}", message);
            Err(ErrorResponse::validation_error(&message, None).into_response())
        }
    }
}

/// Triage a case: risk, snapshot findings, confidence, feature importance and destination
#[utoipa::path(
    post,
    path = "/api/v1/risk/triage",
    request_body = PublicTriageRequest,
    responses(
        (status = 200, description = "Case triaged", body = TriageResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
    ),
    tag = "risk"
)]
#[instrument(skip(service))]
pub async fn triage_case(
    State(service): State<VitalsService>,
    payload: Result<Json<PublicTriageRequest>, JsonRejection>,
) -> Result<impl IntoResponse, Response> {
    let Json(request) = payload.map_err(reject_body)?;

    match service.triage(&convert_to_domain_triage(request)) {
        Ok(result) => {
            info!(
                category = result.risk.category.as_str(),
                confidence = result.confidence,
                routed = result.destination.is_some(),
                "Case triaged"
            );
            Ok((StatusCode::OK, Json(convert_to_public_triage(result, Utc::now()))))
        }
        Err(VitalsServiceError::ValidationError(message)) => {
            warn!("Invalid triage request: {}", message);
            Err(ErrorResponse::validation_error(&message, None).into_response())
        }
    }
}

// Convert public request to domain request
fn convert_to_domain_request(request: PublicRiskAssessmentRequest) -> RiskAssessmentRequest {
    RiskAssessmentRequest {
        stroke_probability: request.stroke_probability,
        lvo_probability: request.lvo_probability,
        minutes_since_symptom_onset: request.minutes_since_symptom_onset,
        fast_score: request.fast_score,
    }
}

// Convert domain assessment to public response
fn convert_to_public_assessment(
    assessment: RiskAssessment,
    assessed_at: DateTime<Utc>,
) -> RiskAssessmentResponse {
    RiskAssessmentResponse {
        category: assessment.category.as_str().to_string(),
        display_color: assessment.display_color.as_str().to_string(),
        treatment_window: assessment.treatment_window.as_str().to_string(),
        treatment_window_note: assessment.treatment_window.note().to_string(),
        suspected_lvo: assessment.suspected_lvo,
        assessed_at,
    }
}

// Convert public triage request to domain request
fn convert_to_domain_triage(request: PublicTriageRequest) -> TriageRequest {
    TriageRequest {
        stroke_probability: request.stroke_probability,
        lvo_probability: request.lvo_probability,
        features: CaseFeatures {
            vitals: convert_to_domain_snapshot(request.vitals),
            fast_score: request.fast_score,
            minutes_since_symptom_onset: request.minutes_since_symptom_onset,
        },
        trend: request.trend.map(convert_to_domain_trend),
        centers: request.centers.into_iter().map(convert_to_domain_center).collect(),
    }
}

fn convert_to_domain_trend(trend: PublicTrendSummary) -> TrendSummary {
    TrendSummary {
        heart_rate_volatility: trend.heart_rate_volatility,
        systolic_bp_volatility: trend.systolic_bp_volatility,
        spo2_volatility: trend.spo2_volatility,
        gcs_deteriorating: trend.gcs_deteriorating,
    }
}

fn convert_to_domain_center(center: PublicStrokeCenter) -> StrokeCenter {
    StrokeCenter {
        hospital_id: center.hospital_id,
        level: match center.level {
            PublicStrokeCenterLevel::Primary => StrokeCenterLevel::Primary,
            PublicStrokeCenterLevel::Comprehensive => StrokeCenterLevel::Comprehensive,
        },
        travel_minutes: center.travel_minutes,
        additional_door_to_needle_minutes: center.additional_door_to_needle_minutes,
    }
}

// Convert domain triage result to public response
fn convert_to_public_triage(result: TriageResult, assessed_at: DateTime<Utc>) -> TriageResponse {
    TriageResponse {
        risk: convert_to_public_assessment(result.risk, assessed_at),
        snapshot: convert_to_public_snapshot_assessment(result.snapshot, assessed_at),
        confidence: result.confidence,
        feature_importance: result.feature_importance,
        destination: result.destination.map(convert_to_public_destination),
    }
}

fn convert_to_public_destination(decision: RoutingDecision) -> RoutingDecisionResponse {
    RoutingDecisionResponse {
        hospital_id: decision.hospital_id,
        destination: decision.destination.as_str().to_string(),
        travel_minutes: decision.travel_minutes,
        additional_door_to_needle_minutes: decision.additional_door_to_needle_minutes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use neuro_pulse_domain::entities::{DisplayColor, RiskCategory, TreatmentWindow};

    #[test]
    fn test_convert_to_public_assessment() {
        let assessment = RiskAssessment {
            category: RiskCategory::Critical,
            display_color: DisplayColor::Error,
            treatment_window: TreatmentWindow::OutsideStandard,
            suspected_lvo: true,
        };

        let response = convert_to_public_assessment(assessment, Utc::now());
        assert_eq!(response.category, "CRITICAL");
        assert_eq!(response.display_color, "error");
        assert_eq!(response.treatment_window, "OUTSIDE_STANDARD");
        assert!(response.treatment_window_note.starts_with("Outside standard"));
        assert!(response.suspected_lvo);
    }

    #[test]
    fn test_convert_to_domain_triage() {
        let request = PublicTriageRequest {
            stroke_probability: 0.7,
            lvo_probability: 0.5,
            vitals: Default::default(),
            fast_score: Some(2),
            minutes_since_symptom_onset: None,
            trend: Some(PublicTrendSummary {
                gcs_deteriorating: true,
                ..Default::default()
            }),
            centers: vec![PublicStrokeCenter {
                hospital_id: "north".to_string(),
                level: PublicStrokeCenterLevel::Comprehensive,
                travel_minutes: Some(30),
                additional_door_to_needle_minutes: None,
            }],
        };

        let domain = convert_to_domain_triage(request);
        assert_eq!(domain.features.fast_score, Some(2));
        assert!(domain.trend.is_some_and(|t| t.gcs_deteriorating));
        assert_eq!(domain.centers[0].level, StrokeCenterLevel::Comprehensive);
        assert_eq!(domain.centers[0].hospital_id, "north");
    }
}
