use crate::entities::routing::{DestinationType, RoutingDecision, StrokeCenter, StrokeCenterLevel};

/// Extra travel accepted to reach a comprehensive center when LVO is suspected
pub const COMPREHENSIVE_DETOUR_MINUTES: u32 = 15;

/// Pick the destination hospital for a case.
///
/// Suspected LVO goes to the first comprehensive center with a known travel
/// time, as long as it is no more than [`COMPREHENSIVE_DETOUR_MINUTES`]
/// further than the first primary center (or the primary travel time is
/// unknown). Everything else goes to the first primary center. Returns
/// `None` when no suitable center was offered.
pub fn choose_destination(suspected_lvo: bool, centers: &[StrokeCenter]) -> Option<RoutingDecision> {
    let primary = centers.iter().find(|c| c.level == StrokeCenterLevel::Primary);
    let comprehensive = centers.iter().find(|c| c.level == StrokeCenterLevel::Comprehensive);

    if suspected_lvo {
        if let Some(center) = comprehensive {
            if let Some(travel) = center.travel_minutes {
                let primary_travel = primary.and_then(|p| p.travel_minutes);
                let within_detour = primary_travel
                    .map_or(true, |primary| travel <= primary.saturating_add(COMPREHENSIVE_DETOUR_MINUTES));

                if within_detour {
                    return Some(decision(center, DestinationType::ComprehensiveCenter));
                }
            }
        }
    }

    primary.map(|center| decision(center, DestinationType::PrimaryCenter))
}

fn decision(center: &StrokeCenter, destination: DestinationType) -> RoutingDecision {
    RoutingDecision {
        hospital_id: center.hospital_id.clone(),
        destination,
        travel_minutes: center.travel_minutes,
        additional_door_to_needle_minutes: center.additional_door_to_needle_minutes,
    }
}
