use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::classification::{ClassificationResult, DisplayColor, SeverityTier};
use super::routing::{RoutingDecision, StrokeCenter};

/// Clinical stroke risk category derived from model probabilities
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskCategory {
    /// Continue monitoring
    Low,

    /// Standard evaluation
    Moderate,

    /// Urgent routing to a primary stroke center
    High,

    /// Immediate routing to a comprehensive stroke center
    Critical,
}

impl RiskCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            RiskCategory::Low => "LOW",
            RiskCategory::Moderate => "MODERATE",
            RiskCategory::High => "HIGH",
            RiskCategory::Critical => "CRITICAL",
        }
    }

    pub fn display_color(self) -> DisplayColor {
        match self {
            RiskCategory::Low => DisplayColor::Success,
            RiskCategory::Moderate => DisplayColor::Warning,
            RiskCategory::High | RiskCategory::Critical => DisplayColor::Error,
        }
    }
}

/// Treatment eligibility given minutes since symptom onset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TreatmentWindow {
    UnknownOnset,
    IvTpa,
    ExtendedEvt,
    OutsideStandard,
}

impl TreatmentWindow {
    pub fn as_str(self) -> &'static str {
        match self {
            TreatmentWindow::UnknownOnset => "UNKNOWN_ONSET",
            TreatmentWindow::IvTpa => "IV_TPA",
            TreatmentWindow::ExtendedEvt => "EXTENDED_EVT",
            TreatmentWindow::OutsideStandard => "OUTSIDE_STANDARD",
        }
    }

    /// Guidance text shown next to the window
    pub fn note(self) -> &'static str {
        match self {
            TreatmentWindow::UnknownOnset => "Unknown onset time (consider imaging-based decision).",
            TreatmentWindow::IvTpa => "Within typical IV tPA window.",
            TreatmentWindow::ExtendedEvt => "Within extended window for some EVT candidates.",
            TreatmentWindow::OutsideStandard => {
                "Outside standard IV tPA window; EVT may still be considered."
            }
        }
    }
}

/// Inputs for a stroke risk assessment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct RiskAssessmentRequest {
    /// Probability of acute ischemic stroke
    #[validate(range(min = 0.0, max = 1.0, message = "Stroke probability must be between 0 and 1"))]
    pub stroke_probability: f64,

    /// Probability of large vessel occlusion
    #[validate(range(min = 0.0, max = 1.0, message = "LVO probability must be between 0 and 1"))]
    pub lvo_probability: f64,

    /// Minutes since last known well, if known
    pub minutes_since_symptom_onset: Option<u32>,

    /// Field FAST exam score
    #[validate(range(min = 0, max = 5, message = "FAST score must be between 0 and 5"))]
    pub fast_score: Option<u8>,
}

/// Result of a stroke risk assessment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub category: RiskCategory,
    pub display_color: DisplayColor,
    pub treatment_window: TreatmentWindow,
    pub suspected_lvo: bool,
}

/// Vitals captured together; any of them may be missing from telemetry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VitalSnapshot {
    pub heart_rate_bpm: Option<u16>,
    pub systolic_bp_mmhg: Option<u16>,
    pub diastolic_bp_mmhg: Option<u16>,
    pub spo2_pct: Option<u8>,
    pub gcs_total: Option<u8>,

    /// Facial droop seen during the FAST exam
    #[serde(default)]
    pub face_droop: bool,

    /// Weakness in either or both arms
    #[serde(default)]
    pub arm_weakness: bool,

    /// Dysarthria or suspected aphasia
    #[serde(default)]
    pub speech_abnormality: bool,
}

/// Everything known about a case at assessment time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CaseFeatures {
    pub vitals: VitalSnapshot,
    pub fast_score: Option<u8>,
    pub minutes_since_symptom_onset: Option<u32>,
}

/// Summary of recent vital trends computed by the caller.
///
/// Volatility is the coefficient of variation over the caller's window.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TrendSummary {
    pub heart_rate_volatility: Option<f64>,
    pub systolic_bp_volatility: Option<f64>,
    pub spo2_volatility: Option<f64>,

    /// GCS has dropped since the previous assessment
    #[serde(default)]
    pub gcs_deteriorating: bool,
}

/// Inputs for a full case triage: risk, confidence, explanation and destination
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriageRequest {
    pub stroke_probability: f64,
    pub lvo_probability: f64,
    pub features: CaseFeatures,
    pub trend: Option<TrendSummary>,

    #[serde(default)]
    pub centers: Vec<StrokeCenter>,
}

impl TriageRequest {
    /// The risk portion of the triage, validated the same way as a standalone assessment
    pub fn risk_request(&self) -> RiskAssessmentRequest {
        RiskAssessmentRequest {
            stroke_probability: self.stroke_probability,
            lvo_probability: self.lvo_probability,
            minutes_since_symptom_onset: self.features.minutes_since_symptom_onset,
            fast_score: self.features.fast_score,
        }
    }
}

/// Result of a full case triage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriageResult {
    pub risk: RiskAssessment,
    pub snapshot: SnapshotAssessment,

    /// How much the inputs support the assessment, in `[0, 1]`
    pub confidence: f64,

    /// Relative weight of each present feature, normalized so the largest is 1
    pub feature_importance: BTreeMap<String, f64>,

    pub destination: Option<RoutingDecision>,
}

/// Per-vital classification of a snapshot plus the findings worth flagging
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SnapshotAssessment {
    pub heart_rate: Option<ClassificationResult>,
    pub blood_pressure: Option<ClassificationResult>,
    pub oxygen_saturation: Option<ClassificationResult>,
    pub glasgow_coma_score: Option<ClassificationResult>,

    /// Highest tier among the classified vitals
    pub most_severe: Option<SeverityTier>,

    pub risk_factors: Vec<String>,
}
