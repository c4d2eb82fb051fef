use serde::{Deserialize, Serialize};

/// Stroke capability of a receiving hospital
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StrokeCenterLevel {
    /// Can give IV tPA
    Primary,

    /// Can also perform endovascular thrombectomy
    Comprehensive,
}

/// A candidate destination as reported by hospital capacity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrokeCenter {
    pub hospital_id: String,
    pub level: StrokeCenterLevel,

    /// Estimated ambulance travel time
    pub travel_minutes: Option<u32>,

    /// Expected delay at the door before treatment can start
    pub additional_door_to_needle_minutes: Option<u32>,
}

/// Kind of center the patient is routed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DestinationType {
    PrimaryCenter,
    ComprehensiveCenter,
}

impl DestinationType {
    pub fn as_str(self) -> &'static str {
        match self {
            DestinationType::PrimaryCenter => "PRIMARY_CENTER",
            DestinationType::ComprehensiveCenter => "COMPREHENSIVE_CENTER",
        }
    }
}

/// Recommended destination hospital
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutingDecision {
    pub hospital_id: String,
    pub destination: DestinationType,
    pub travel_minutes: Option<u32>,
    pub additional_door_to_needle_minutes: Option<u32>,
}
