pub mod classifier;
pub mod confidence;
pub mod risk;
pub mod routing;
pub mod vitals;

// Domain services
// This module contains business logic implementations.

// Re-export service traits and factory functions
pub use vitals::{create_default_vitals_service, VitalsService, VitalsServiceError, VitalsServiceTrait};
