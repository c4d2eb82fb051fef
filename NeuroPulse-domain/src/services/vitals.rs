use std::collections::BTreeMap;

use thiserror::Error;
use tracing::{debug, warn};
use validator::Validate;

use crate::entities::classification::ClassificationResult;
use crate::entities::risk::{
    RiskAssessment, RiskAssessmentRequest, SnapshotAssessment, TriageRequest, TriageResult,
    VitalSnapshot,
};
use crate::entities::vital_reading::{BloodPressureValue, VitalReading};
use crate::services::{classifier, risk};

/// Vitals service errors
#[derive(Debug, Error)]
pub enum VitalsServiceError {
    /// Validation error
    #[error("Validation error: {0}")]
    ValidationError(String),
}

/// Trait for vitals service operations
pub trait VitalsServiceTrait: Send + Sync {
    /// Classify a single reading
    fn classify(&self, reading: &VitalReading) -> ClassificationResult;

    /// Classify a "systolic/diastolic" string; malformed input is unclassified
    fn classify_blood_pressure_text(&self, raw: &str) -> ClassificationResult;

    /// Classify every vital present in a snapshot
    fn assess_snapshot(&self, snapshot: &VitalSnapshot) -> SnapshotAssessment;

    /// Validate a risk assessment request
    fn validate_risk_request(&self, request: &RiskAssessmentRequest) -> Result<(), VitalsServiceError>;

    /// Validate and assess stroke risk
    fn assess_risk(&self, request: &RiskAssessmentRequest) -> Result<RiskAssessment, VitalsServiceError>;

    /// Validate and run a full case triage
    fn triage(&self, request: &TriageRequest) -> Result<TriageResult, VitalsServiceError>;
}

/// Default vitals service backed by the pure classifier
#[derive(Debug, Default, Clone)]
pub struct VitalsService;

impl VitalsService {
    /// Create a new vitals service
    pub fn new() -> Self {
        Self
    }
}

impl VitalsServiceTrait for VitalsService {
    fn classify(&self, reading: &VitalReading) -> ClassificationResult {
        let result = classifier::classify(reading);
        debug!(kind = %reading.kind(), tier = %result.tier, "Classified vital reading");
        result
    }

    fn classify_blood_pressure_text(&self, raw: &str) -> ClassificationResult {
        match raw.parse::<BloodPressureValue>() {
            Ok(value) => self.classify(&VitalReading::from(value)),
            Err(e) => {
                warn!("Leaving blood pressure unclassified: {}", e);
                ClassificationResult::unclassified()
            }
        }
    }

    fn assess_snapshot(&self, snapshot: &VitalSnapshot) -> SnapshotAssessment {
        let assessment = risk::assess_snapshot(snapshot);
        debug!(
            most_severe = ?assessment.most_severe,
            risk_factors = assessment.risk_factors.len(),
            "Assessed vital snapshot"
        );
        assessment
    }

    fn validate_risk_request(&self, request: &RiskAssessmentRequest) -> Result<(), VitalsServiceError> {
        let mut fields: BTreeMap<String, Vec<String>> = BTreeMap::new();

        if let Err(validation_errors) = request.validate() {
            for (field, errors) in validation_errors.field_errors() {
                let error_msgs = errors.iter().map(|err| match &err.message {
                    Some(msg) => msg.to_string(),
                    None => format!("Invalid {}", field),
                });
                fields.entry(field.to_string()).or_default().extend(error_msgs);
            }
        }

        // Range checks let NaN through
        let probabilities = [
            ("stroke_probability", "Stroke probability", request.stroke_probability),
            ("lvo_probability", "LVO probability", request.lvo_probability),
        ];
        for (field, name, value) in probabilities {
            if !value.is_finite() {
                fields
                    .entry(field.to_string())
                    .or_default()
                    .push(format!("{} must be a finite number", name));
            }
        }

        if fields.is_empty() {
            return Ok(());
        }

        // Flatten field errors into "field: msg, msg; field: msg"
        let message = fields
            .iter()
            .map(|(field, msgs)| format!("{}: {}", field, msgs.join(", ")))
            .collect::<Vec<_>>()
            .join("; ");

        Err(VitalsServiceError::ValidationError(message))
    }

    fn assess_risk(&self, request: &RiskAssessmentRequest) -> Result<RiskAssessment, VitalsServiceError> {
        self.validate_risk_request(request)?;

        let assessment = risk::assess_risk(request);
        debug!(
            category = assessment.category.as_str(),
            suspected_lvo = assessment.suspected_lvo,
            "Assessed stroke risk"
        );
        Ok(assessment)
    }

    fn triage(&self, request: &TriageRequest) -> Result<TriageResult, VitalsServiceError> {
        self.validate_risk_request(&request.risk_request())?;

        let result = risk::triage(request);
        debug!(
            category = result.risk.category.as_str(),
            confidence = result.confidence,
            destination = ?result.destination.as_ref().map(|d| d.hospital_id.as_str()),
            "Triaged case"
        );
        Ok(result)
    }
}

/// Factory function to create the default vitals service
pub fn create_default_vitals_service() -> VitalsService {
    VitalsService::new()
}
