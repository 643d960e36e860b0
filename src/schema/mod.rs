//! Schema module - Configuration types for metaball animations.

mod config;

pub use config::*;
