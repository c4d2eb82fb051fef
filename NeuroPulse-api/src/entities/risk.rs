use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entities::vitals::{PublicVitalSnapshot, SnapshotAssessmentResponse};

/// Request payload for a stroke risk assessment
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PublicRiskAssessmentRequest {
    /// Probability of acute ischemic stroke (0.0-1.0)
    #[schema(minimum = 0.0, maximum = 1.0)]
    pub stroke_probability: f64,

    /// Probability of large vessel occlusion (0.0-1.0)
    #[schema(minimum = 0.0, maximum = 1.0)]
    pub lvo_probability: f64,

    /// Minutes since symptom onset, if known
    pub minutes_since_symptom_onset: Option<u32>,

    /// Field FAST exam score (0-5)
    pub fast_score: Option<u8>,
}

/// Stroke risk assessment result
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RiskAssessmentResponse {
    /// LOW, MODERATE, HIGH or CRITICAL
    pub category: String,

    /// success, warning or error
    pub display_color: String,

    /// UNKNOWN_ONSET, IV_TPA, EXTENDED_EVT or OUTSIDE_STANDARD
    pub treatment_window: String,

    /// Guidance text for the treatment window
    pub treatment_window_note: String,

    /// FAST score suggests a large vessel occlusion
    pub suspected_lvo: bool,

    /// When the assessment was computed
    pub assessed_at: DateTime<Utc>,
}

/// Recent vital trends, summarized by the caller
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, ToSchema)]
pub struct PublicTrendSummary {
    /// Coefficient of variation of heart rate
    pub heart_rate_volatility: Option<f64>,

    /// Coefficient of variation of systolic pressure
    pub systolic_bp_volatility: Option<f64>,

    /// Coefficient of variation of SpO2
    pub spo2_volatility: Option<f64>,

    /// GCS has dropped since the previous assessment
    #[serde(default)]
    pub gcs_deteriorating: bool,
}

/// Stroke capability of a hospital
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PublicStrokeCenterLevel {
    Primary,
    Comprehensive,
}

/// A candidate destination hospital
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PublicStrokeCenter {
    pub hospital_id: String,
    pub level: PublicStrokeCenterLevel,

    /// Estimated travel time in minutes
    pub travel_minutes: Option<u32>,

    /// Expected door-to-needle delay in minutes
    pub additional_door_to_needle_minutes: Option<u32>,
}

/// Request payload for a full case triage
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PublicTriageRequest {
    /// Probability of acute ischemic stroke (0.0-1.0)
    #[schema(minimum = 0.0, maximum = 1.0)]
    pub stroke_probability: f64,

    /// Probability of large vessel occlusion (0.0-1.0)
    #[schema(minimum = 0.0, maximum = 1.0)]
    pub lvo_probability: f64,

    /// Latest vitals and FAST findings
    #[serde(default)]
    pub vitals: PublicVitalSnapshot,

    /// Field FAST exam score (0-5)
    pub fast_score: Option<u8>,

    /// Minutes since symptom onset, if known
    pub minutes_since_symptom_onset: Option<u32>,

    pub trend: Option<PublicTrendSummary>,

    /// Hospitals that can take the patient
    #[serde(default)]
    pub centers: Vec<PublicStrokeCenter>,
}

/// Recommended destination
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RoutingDecisionResponse {
    pub hospital_id: String,

    /// PRIMARY_CENTER or COMPREHENSIVE_CENTER
    pub destination: String,

    pub travel_minutes: Option<u32>,
    pub additional_door_to_needle_minutes: Option<u32>,
}

/// Full case triage result
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TriageResponse {
    pub risk: RiskAssessmentResponse,
    pub snapshot: SnapshotAssessmentResponse,

    /// Confidence in the assessment (0.0-1.0)
    pub confidence: f64,

    /// Contributing features, normalized so the strongest is 1.0
    pub feature_importance: BTreeMap<String, f64>,

    /// Null when no suitable hospital was offered
    pub destination: Option<RoutingDecisionResponse>,
}
