//! Vital sign classification.
//!
//! Every function here is pure: the result depends only on the reading, so
//! callers may classify on every tick without caching.

use crate::entities::classification::{ClassificationResult, DisplayColor, SeverityTier};
use crate::entities::vital_reading::{BloodPressureValue, VitalReading};

/// Classify any reading by dispatching on its kind
pub fn classify(reading: &VitalReading) -> ClassificationResult {
    match *reading {
        VitalReading::HeartRate { bpm } => classify_heart_rate(bpm),
        VitalReading::BloodPressure { systolic, diastolic } => {
            classify_blood_pressure(systolic, diastolic)
        }
        VitalReading::OxygenSaturation { pct } => classify_oxygen_saturation(pct),
        VitalReading::GlasgowComaScore { total } => classify_glasgow_coma_score(total),
    }
}

/// Classify heart rate in beats per minute
pub fn classify_heart_rate(bpm: u16) -> ClassificationResult {
    if bpm >= 120 {
        ClassificationResult::new(SeverityTier::VeryHigh, DisplayColor::Error)
    } else if bpm > 100 {
        ClassificationResult::new(SeverityTier::High, DisplayColor::Warning)
    } else if bpm < 50 {
        ClassificationResult::new(SeverityTier::VeryLow, DisplayColor::Error)
    } else if bpm < 60 {
        ClassificationResult::new(SeverityTier::Low, DisplayColor::Warning)
    } else {
        ClassificationResult::new(SeverityTier::Normal, DisplayColor::Success)
    }
}

/// Classify blood pressure in mmHg.
///
/// Elevated pressure maps to `Error` rather than `Warning`, and mildly low
/// pressure to `Info`; these colors differ from the heart rate mapping on
/// purpose.
pub fn classify_blood_pressure(systolic: u16, diastolic: u16) -> ClassificationResult {
    if systolic >= 180 || diastolic >= 120 {
        ClassificationResult::new(SeverityTier::VeryHigh, DisplayColor::Error)
    } else if systolic >= 140 || diastolic >= 90 {
        ClassificationResult::new(SeverityTier::High, DisplayColor::Error)
    } else if systolic < 90 || diastolic < 60 {
        ClassificationResult::new(SeverityTier::VeryLow, DisplayColor::Error)
    } else if systolic < 100 || diastolic < 65 {
        ClassificationResult::new(SeverityTier::Low, DisplayColor::Info)
    } else {
        ClassificationResult::new(SeverityTier::Normal, DisplayColor::Success)
    }
}

/// Classify a "systolic/diastolic" string.
///
/// Unparseable input yields [`ClassificationResult::unclassified`].
pub fn classify_blood_pressure_text(raw: &str) -> ClassificationResult {
    match raw.parse::<BloodPressureValue>() {
        Ok(value) => classify_blood_pressure(value.systolic, value.diastolic),
        Err(_) => ClassificationResult::unclassified(),
    }
}

/// Classify peripheral oxygen saturation in percent
pub fn classify_oxygen_saturation(pct: u8) -> ClassificationResult {
    if pct < 90 {
        ClassificationResult::new(SeverityTier::VeryLow, DisplayColor::Error)
    } else if pct < 94 {
        ClassificationResult::new(SeverityTier::Low, DisplayColor::Warning)
    } else {
        ClassificationResult::new(SeverityTier::Normal, DisplayColor::Success)
    }
}

/// Classify a Glasgow Coma Scale total.
///
/// 13 and 14 are normal-tier but flagged `Info`, distinct from a full 15.
pub fn classify_glasgow_coma_score(total: u8) -> ClassificationResult {
    if total <= 8 {
        ClassificationResult::new(SeverityTier::VeryLow, DisplayColor::Error)
    } else if total < 13 {
        ClassificationResult::new(SeverityTier::Low, DisplayColor::Warning)
    } else if total < 15 {
        ClassificationResult::new(SeverityTier::Normal, DisplayColor::Info)
    } else {
        ClassificationResult::new(SeverityTier::Normal, DisplayColor::Success)
    }
}
