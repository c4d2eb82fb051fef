use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A single vital sign reading, tagged by `kind`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PublicVitalReading {
    /// Heart rate in beats per minute
    HeartRate { bpm: u16 },

    /// Blood pressure in mmHg
    BloodPressure { systolic: u16, diastolic: u16 },

    /// Oxygen saturation in percent
    OxygenSaturation { pct: u8 },

    /// Glasgow Coma Scale total
    GlasgowComaScore { total: u8 },
}

/// Blood pressure as a combined "systolic/diastolic" string
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BloodPressureTextRequest {
    /// For example "120/80"
    #[schema(example = "120/80")]
    pub value: String,
}

/// Classification of one reading
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ClassificationResponse {
    /// Reading kind, absent when the input could not be parsed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    /// Severity tier (normal, low, high, very_low, very_high)
    pub tier: String,

    /// Display label for the tier, or "—" when unclassified
    pub label: String,

    /// 0 normal, 1 low/high, 2 very low/very high
    pub severity_rank: u8,

    /// success, info, warning or error; null when unclassified
    pub display_color: Option<String>,

    /// Whether a classification was produced
    pub classified: bool,

    /// When the classification was computed
    pub classified_at: DateTime<Utc>,
}

/// Vitals taken together; every field is optional
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, ToSchema)]
pub struct PublicVitalSnapshot {
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

/// Per-vital classification of a snapshot
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SnapshotAssessmentResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heart_rate: Option<ClassificationResponse>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub blood_pressure: Option<ClassificationResponse>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub oxygen_saturation: Option<ClassificationResponse>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub glasgow_coma_score: Option<ClassificationResponse>,

    /// Highest tier among the classified vitals
    pub most_severe: Option<String>,

    /// Findings worth flagging, e.g. "Face droop" or "Reduced GCS (13)"
    pub risk_factors: Vec<String>,

    /// When the assessment was computed
    pub assessed_at: DateTime<Utc>,
}
