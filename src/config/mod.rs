//! Configuration module for stepper-sequencer.
//!
//! Provides types for loading and validating motor wiring, sensor wiring,
//! and rotation presets from TOML files (with `std` feature) or pre-parsed
//! data.

#[cfg(feature = "std")]
mod loader;
mod motor;
mod rotation;
mod system;
pub mod units;
mod validation;

pub use motor::MotorConfig;
pub use rotation::RotationConfig;
pub use system::{SensorConfig, SystemConfig};
pub use validation::validate_config;

#[cfg(feature = "std")]
pub use loader::{load_config, parse_config};

// Re-export unit types at config level
pub use units::{Degrees, Rpm, Seconds};
