// Public entities for the NeuroPulse API
// This module contains data structures that are shared across the application boundary

// Common entities for error handling
pub mod common;

// Vital sign classification entities
pub mod vitals;

// Stroke risk entities
pub mod risk;
