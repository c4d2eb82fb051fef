// Domain entities and value objects
pub mod classification;
pub mod risk;
pub mod routing;
pub mod vital_reading;

// Re-export common types for easier imports
pub use classification::{ClassificationResult, DisplayColor, RangeDirection, SeverityTier};
pub use risk::{
    CaseFeatures, RiskAssessment, RiskAssessmentRequest, RiskCategory, SnapshotAssessment,
    TreatmentWindow, TrendSummary, TriageRequest, TriageResult, VitalSnapshot,
};
pub use routing::{DestinationType, RoutingDecision, StrokeCenter, StrokeCenterLevel};
pub use vital_reading::{BloodPressureValue, ReadingParseError, VitalKind, VitalReading};
