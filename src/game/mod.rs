//! Game Module
//!
//! Game-side glue that binds the snowfield engine to a scene: configuration
//! and the contact-point interaction layer.

pub mod config;
pub mod interaction;

// Re-exports
pub use config::SnowConfig;
pub use interaction::{ContactPoint, SnowInteraction};
