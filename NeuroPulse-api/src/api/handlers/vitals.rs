use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Json, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use tracing::{info, instrument};

// Import domain entities and services
use neuro_pulse_domain::entities::{
    ClassificationResult, SnapshotAssessment, VitalKind, VitalReading, VitalSnapshot,
};
use neuro_pulse_domain::services::{create_default_vitals_service, VitalsServiceTrait};

// Import our entities
use crate::api::handlers::reject_body;
use crate::entities::common::ErrorResponse;
use crate::entities::vitals::{
    BloodPressureTextRequest, ClassificationResponse, PublicVitalReading, PublicVitalSnapshot,
    SnapshotAssessmentResponse,
};

/// Service type for dependency injection
pub type VitalsService = Arc<dyn VitalsServiceTrait>;

/// Create a default service for the handlers to use
pub fn create_service() -> VitalsService {
    Arc::new(create_default_vitals_service())
}

/// Classify a single vital sign reading
#[utoipa::path(
    post,
    path = "/api/v1/vitals/classify",
    request_body = PublicVitalReading,
    responses(
        (status = 200, description = "Reading classified", body = ClassificationResponse),
        (status = 400, description = "Malformed body or unknown reading kind", body = ErrorResponse),
    ),
    tag = "vitals"
)]
#[instrument(skip(service))]
pub async fn classify_vital(
    State(service): State<VitalsService>,
    payload: Result<Json<PublicVitalReading>, JsonRejection>,
) -> Result<impl IntoResponse, Response> {
    let Json(reading) = payload.map_err(reject_body)?;
    let reading = convert_to_domain_reading(reading);
    let result = service.classify(&reading);

    info!(kind = %reading.kind(), tier = %result.tier, "Vital reading classified");

    let response = convert_to_public_classification(Some(reading.kind()), result, Utc::now());
    Ok((StatusCode::OK, Json(response)))
}

/// Classify a combined "systolic/diastolic" blood pressure value
///
/// Malformed values are not an error: the response is unclassified, with a
/// null display color and a dash label.
#[utoipa::path(
    post,
    path = "/api/v1/vitals/classify/blood-pressure",
    request_body = BloodPressureTextRequest,
    responses(
        (status = 200, description = "Blood pressure classified, or left unclassified", body = ClassificationResponse),
        (status = 400, description = "Malformed body", body = ErrorResponse),
    ),
    tag = "vitals"
)]
#[instrument(skip(service))]
pub async fn classify_blood_pressure_text(
    State(service): State<VitalsService>,
    payload: Result<Json<BloodPressureTextRequest>, JsonRejection>,
) -> Result<impl IntoResponse, Response> {
    let Json(request) = payload.map_err(reject_body)?;
    let result = service.classify_blood_pressure_text(&request.value);
    let kind = result.is_classified().then_some(VitalKind::BloodPressure);

    let response = convert_to_public_classification(kind, result, Utc::now());
    Ok((StatusCode::OK, Json(response)))
}

/// Classify every vital present in a snapshot
#[utoipa::path(
    post,
    path = "/api/v1/vitals/assess",
    request_body = PublicVitalSnapshot,
    responses(
        (status = 200, description = "Snapshot assessed", body = SnapshotAssessmentResponse),
        (status = 400, description = "Malformed body or mistyped field", body = ErrorResponse),
    ),
    tag = "vitals"
)]
#[instrument(skip(service))]
pub async fn assess_vital_snapshot(
    State(service): State<VitalsService>,
    payload: Result<Json<PublicVitalSnapshot>, JsonRejection>,
) -> Result<impl IntoResponse, Response> {
    let Json(snapshot) = payload.map_err(reject_body)?;
    let assessment = service.assess_snapshot(&convert_to_domain_snapshot(snapshot));

    info!(
        most_severe = ?assessment.most_severe,
        risk_factors = assessment.risk_factors.len(),
        "Vital snapshot assessed"
    );

    Ok((StatusCode::OK, Json(convert_to_public_snapshot_assessment(assessment, Utc::now()))))
}

// Convert public reading to domain reading
fn convert_to_domain_reading(reading: PublicVitalReading) -> VitalReading {
    match reading {
        PublicVitalReading::HeartRate { bpm } => VitalReading::HeartRate { bpm },
        PublicVitalReading::BloodPressure { systolic, diastolic } => {
            VitalReading::BloodPressure { systolic, diastolic }
        }
        PublicVitalReading::OxygenSaturation { pct } => VitalReading::OxygenSaturation { pct },
        PublicVitalReading::GlasgowComaScore { total } => VitalReading::GlasgowComaScore { total },
    }
}

// Convert public snapshot to domain snapshot
pub(crate) fn convert_to_domain_snapshot(snapshot: PublicVitalSnapshot) -> VitalSnapshot {
    VitalSnapshot {
        heart_rate_bpm: snapshot.heart_rate_bpm,
        systolic_bp_mmhg: snapshot.systolic_bp_mmhg,
        diastolic_bp_mmhg: snapshot.diastolic_bp_mmhg,
        spo2_pct: snapshot.spo2_pct,
        gcs_total: snapshot.gcs_total,
        face_droop: snapshot.face_droop,
        arm_weakness: snapshot.arm_weakness,
        speech_abnormality: snapshot.speech_abnormality,
    }
}

// Convert domain classification to public response
fn convert_to_public_classification(
    kind: Option<VitalKind>,
    result: ClassificationResult,
    classified_at: DateTime<Utc>,
) -> ClassificationResponse {
    ClassificationResponse {
        kind: kind.map(|k| k.as_str().to_string()),
        tier: result.tier.as_str().to_string(),
        label: result.label().to_string(),
        severity_rank: result.tier.severity_rank(),
        display_color: result.display_color.map(|c| c.as_str().to_string()),
        classified: result.is_classified(),
        classified_at,
    }
}

// Convert domain snapshot assessment to public response
pub(crate) fn convert_to_public_snapshot_assessment(
    assessment: SnapshotAssessment,
    assessed_at: DateTime<Utc>,
) -> SnapshotAssessmentResponse {
    let public = |kind: VitalKind, result: Option<ClassificationResult>| {
        result.map(|r| convert_to_public_classification(Some(kind), r, assessed_at))
    };

    SnapshotAssessmentResponse {
        heart_rate: public(VitalKind::HeartRate, assessment.heart_rate),
        blood_pressure: public(VitalKind::BloodPressure, assessment.blood_pressure),
        oxygen_saturation: public(VitalKind::OxygenSaturation, assessment.oxygen_saturation),
        glasgow_coma_score: public(VitalKind::GlasgowComaScore, assessment.glasgow_coma_score),
        most_severe: assessment.most_severe.map(|tier| tier.as_str().to_string()),
        risk_factors: assessment.risk_factors,
        assessed_at,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use neuro_pulse_domain::entities::{DisplayColor, SeverityTier};

    #[test]
    fn test_convert_to_domain_reading() {
        assert_eq!(
            convert_to_domain_reading(PublicVitalReading::BloodPressure { systolic: 120, diastolic: 80 }),
            VitalReading::BloodPressure { systolic: 120, diastolic: 80 }
        );
        assert_eq!(
            convert_to_domain_reading(PublicVitalReading::GlasgowComaScore { total: 9 }),
            VitalReading::GlasgowComaScore { total: 9 }
        );
    }

    #[test]
    fn test_convert_snapshot_keeps_fast_findings() {
        let snapshot = PublicVitalSnapshot {
            gcs_total: Some(14),
            face_droop: true,
            speech_abnormality: true,
            ..Default::default()
        };

        let domain = convert_to_domain_snapshot(snapshot);
        assert_eq!(domain.gcs_total, Some(14));
        assert!(domain.face_droop);
        assert!(!domain.arm_weakness);
        assert!(domain.speech_abnormality);
    }

    #[test]
    fn test_convert_classified_result() {
        let result = ClassificationResult::new(SeverityTier::VeryHigh, DisplayColor::Error);
        let response = convert_to_public_classification(Some(VitalKind::HeartRate), result, Utc::now());

        assert_eq!(response.kind.as_deref(), Some("heart_rate"));
        assert_eq!(response.tier, "very_high");
        assert_eq!(response.label, "Very High");
        assert_eq!(response.severity_rank, 2);
        assert_eq!(response.display_color.as_deref(), Some("error"));
        assert!(response.classified);
    }

    #[test]
    fn test_convert_unclassified_result() {
        let response =
            convert_to_public_classification(None, ClassificationResult::unclassified(), Utc::now());

        assert!(response.kind.is_none());
        assert_eq!(response.tier, "normal");
        assert_eq!(response.label, "—");
        assert!(response.display_color.is_none());
        assert!(!response.classified);
    }
}
