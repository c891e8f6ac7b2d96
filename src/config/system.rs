//! System configuration - root configuration structure.

use heapless::{FnvIndexMap, String};
use serde::Deserialize;

use super::motor::MotorConfig;
use super::rotation::RotationConfig;

/// The door-contact sensor wiring.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct SensorConfig {
    /// Input line of the contact switch (pulled up by the platform layer).
    pub pin: u8,
}

/// Root configuration structure from TOML.
#[derive(Debug, Clone, Deserialize)]
pub struct SystemConfig {
    /// Named motor wirings.
    pub motors: FnvIndexMap<String<32>, MotorConfig, 8>,

    /// Optional door-contact sensor.
    #[serde(default)]
    pub sensor: Option<SensorConfig>,

    /// Named rotation presets.
    #[serde(default)]
    pub rotations: FnvIndexMap<String<32>, RotationConfig, 16>,
}

impl SystemConfig {
    /// Get a motor configuration by name.
    pub fn motor(&self, name: &str) -> Option<&MotorConfig> {
        self.motors
            .iter()
            .find(|(k, _)| k.as_str() == name)
            .map(|(_, v)| v)
    }

    /// Get a rotation preset by name.
    pub fn rotation(&self, name: &str) -> Option<&RotationConfig> {
        self.rotations
            .iter()
            .find(|(k, _)| k.as_str() == name)
            .map(|(_, v)| v)
    }

    /// List all motor names.
    pub fn motor_names(&self) -> impl Iterator<Item = &str> {
        self.motors.keys().map(|s| s.as_str())
    }

    /// List all rotation preset names.
    pub fn rotation_names(&self) -> impl Iterator<Item = &str> {
        self.rotations.keys().map(|s| s.as_str())
    }
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            motors: FnvIndexMap::new(),
            sensor: None,
            rotations: FnvIndexMap::new(),
        }
    }
}
