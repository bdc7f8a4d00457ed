//! Config Module
//!
//! Centralized configuration for the snow surface.

pub mod snow_config;

pub use snow_config::SnowConfig;
