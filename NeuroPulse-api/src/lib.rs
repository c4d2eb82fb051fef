//! NeuroPulse vitals API
//!
//! HTTP layer over `neuro_pulse_domain`: routes, public entities, server
//! configuration and the OpenAPI document.

// Public modules
pub mod api;
pub mod config;
pub mod entities;
pub mod openapi;
