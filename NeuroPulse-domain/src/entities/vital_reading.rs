use std::fmt;
use std::num::IntErrorKind;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single physiological measurement taken at a point in time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum VitalReading {
    /// Heart rate in beats per minute
    HeartRate { bpm: u16 },

    /// Blood pressure in mmHg
    BloodPressure { systolic: u16, diastolic: u16 },

    /// Peripheral oxygen saturation, 0-100
    OxygenSaturation { pct: u8 },

    /// Glasgow Coma Scale total, 3-15
    GlasgowComaScore { total: u8 },
}

impl VitalReading {
    /// The kind of measurement this reading holds
    pub fn kind(&self) -> VitalKind {
        match self {
            VitalReading::HeartRate { .. } => VitalKind::HeartRate,
            VitalReading::BloodPressure { .. } => VitalKind::BloodPressure,
            VitalReading::OxygenSaturation { .. } => VitalKind::OxygenSaturation,
            VitalReading::GlasgowComaScore { .. } => VitalKind::GlasgowComaScore,
        }
    }
}

impl From<BloodPressureValue> for VitalReading {
    fn from(value: BloodPressureValue) -> Self {
        VitalReading::BloodPressure {
            systolic: value.systolic,
            diastolic: value.diastolic,
        }
    }
}

/// Fieldless discriminant of [`VitalReading`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VitalKind {
    HeartRate,
    BloodPressure,
    OxygenSaturation,
    GlasgowComaScore,
}

impl VitalKind {
    pub fn as_str(self) -> &'static str {
        match self {
            VitalKind::HeartRate => "heart_rate",
            VitalKind::BloodPressure => "blood_pressure",
            VitalKind::OxygenSaturation => "oxygen_saturation",
            VitalKind::GlasgowComaScore => "glasgow_coma_score",
        }
    }

    /// Unit the reading is expressed in
    pub fn unit(self) -> &'static str {
        match self {
            VitalKind::HeartRate => "bpm",
            VitalKind::BloodPressure => "mmHg",
            VitalKind::OxygenSaturation => "%",
            VitalKind::GlasgowComaScore => "points",
        }
    }
}

impl fmt::Display for VitalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors produced when parsing the combined "systolic/diastolic" field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReadingParseError {
    /// No '/' between the two components
    #[error("Missing '/' separator in blood pressure value: {0:?}")]
    MissingSeparator(String),

    /// A component is not an unsigned integer
    #[error("Invalid {component} component in blood pressure value: {value:?}")]
    InvalidComponent {
        component: &'static str,
        value: String,
    },
}

/// Blood pressure as carried by upstream telemetry, e.g. `"120/80"`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BloodPressureValue {
    /// Systolic blood pressure (the higher number)
    pub systolic: u16,

    /// Diastolic blood pressure (the lower number)
    pub diastolic: u16,
}

impl FromStr for BloodPressureValue {
    type Err = ReadingParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (systolic, diastolic) = s
            .split_once('/')
            .ok_or_else(|| ReadingParseError::MissingSeparator(s.to_string()))?;

        Ok(Self {
            systolic: parse_component("systolic", systolic)?,
            diastolic: parse_component("diastolic", diastolic)?,
        })
    }
}

impl fmt::Display for BloodPressureValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.systolic, self.diastolic)
    }
}

/// Oversized numbers saturate at `u16::MAX` so they still classify as extreme
fn parse_component(component: &'static str, raw: &str) -> Result<u16, ReadingParseError> {
    match raw.trim().parse::<u16>() {
        Ok(value) => Ok(value),
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => Ok(u16::MAX),
        Err(_) => Err(ReadingParseError::InvalidComponent {
            component,
            value: raw.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_blood_pressure_value() {
        let value: BloodPressureValue = "120/80".parse().unwrap();
        assert_eq!(value.systolic, 120);
        assert_eq!(value.diastolic, 80);

        // Whitespace around components is tolerated
        let value: BloodPressureValue = " 145 / 92 ".parse().unwrap();
        assert_eq!(value, BloodPressureValue { systolic: 145, diastolic: 92 });
        assert_eq!(value.to_string(), "145/92");
    }

    #[test]
    fn test_parse_blood_pressure_value_errors() {
        assert_eq!(
            "12080".parse::<BloodPressureValue>(),
            Err(ReadingParseError::MissingSeparator("12080".to_string()))
        );

        let err = "abc/80".parse::<BloodPressureValue>().unwrap_err();
        assert!(matches!(err, ReadingParseError::InvalidComponent { component: "systolic", .. }));

        let err = "120/".parse::<BloodPressureValue>().unwrap_err();
        assert!(matches!(err, ReadingParseError::InvalidComponent { component: "diastolic", .. }));

        assert!("-5/80".parse::<BloodPressureValue>().is_err());
        assert!("120/80/60".parse::<BloodPressureValue>().is_err());
    }

    #[test]
    fn test_parse_blood_pressure_value_saturates_oversized_numbers() {
        let value: BloodPressureValue = "70000/80".parse().unwrap();
        assert_eq!(value.systolic, u16::MAX);
        assert_eq!(value.diastolic, 80);

        let value: BloodPressureValue = "120/99999999999999999999".parse().unwrap();
        assert_eq!(value.diastolic, u16::MAX);

        // Negative numbers are still malformed
        assert!("-70000/80".parse::<BloodPressureValue>().is_err());
    }

    #[test]
    fn test_reading_serde_is_tagged_by_kind() {
        let reading = VitalReading::BloodPressure { systolic: 118, diastolic: 78 };
        let json = serde_json::to_value(reading).unwrap();
        assert_eq!(json["kind"], "blood_pressure");
        assert_eq!(json["systolic"], 118);

        let parsed: VitalReading =
            serde_json::from_str(r#"{"kind":"glasgow_coma_score","total":14}"#).unwrap();
        assert_eq!(parsed, VitalReading::GlasgowComaScore { total: 14 });
        assert_eq!(parsed.kind(), VitalKind::GlasgowComaScore);
        assert_eq!(parsed.kind().unit(), "points");
    }
}
