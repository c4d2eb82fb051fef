//! NeuroPulse Domain
//!
//! Vital sign classification, stroke risk thresholds, confidence heuristics
//! and destination routing used by the NeuroPulse dashboard.

// Services that implement business logic
pub mod services;

// Domain entities
pub mod entities;

// Re-export the types most callers need
pub use entities::{
    BloodPressureValue, ClassificationResult, DisplayColor, ReadingParseError, SeverityTier,
    VitalKind, VitalReading,
};
pub use services::classifier::classify;
