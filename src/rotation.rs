//! Rotation registry for named preset lookup.

use heapless::{FnvIndexMap, String};

use crate::config::RotationConfig;
use crate::error::{ConfigError, Error, Result};

/// Maximum number of presets in the registry.
pub const MAX_ROTATIONS: usize = 16;

/// Registry for named rotation presets.
#[derive(Debug, Default)]
pub struct RotationRegistry {
    rotations: FnvIndexMap<String<32>, RotationConfig, MAX_ROTATIONS>,
}

impl RotationRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            rotations: FnvIndexMap::new(),
        }
    }

    /// Load presets from a SystemConfig.
    pub fn from_config(config: &crate::config::SystemConfig) -> Self {
        let mut registry = Self::new();
        for (name, rotation) in &config.rotations {
            let _ = registry.register(name.as_str(), rotation.clone());
        }
        registry
    }

    /// Register a preset under a name.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is too long or the registry is full.
    pub fn register(&mut self, name: &str, rotation: RotationConfig) -> Result<()> {
        let name_str = String::try_from(name)
            .map_err(|_| Error::Config(ConfigError::RegistryFull))?;

        self.rotations
            .insert(name_str, rotation)
            .map_err(|_| Error::Config(ConfigError::RegistryFull))?;

        Ok(())
    }

    /// Get a preset by name.
    pub fn get(&self, name: &str) -> Option<&RotationConfig> {
        let name_str = String::try_from(name).ok()?;
        self.rotations.get(&name_str)
    }

    /// Get a preset by name, with an error if not found.
    pub fn get_or_error(&self, name: &str) -> Result<&RotationConfig> {
        self.get(name).ok_or_else(|| {
            Error::Config(ConfigError::RotationNotFound(
                String::try_from(name).unwrap_or_default(),
            ))
        })
    }

    /// Check if a preset exists.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Get the number of registered presets.
    pub fn len(&self) -> usize {
        self.rotations.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.rotations.is_empty()
    }

    /// Get an iterator over preset names.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.rotations.keys().map(|s| s.as_str())
    }

    /// Get an iterator over presets.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RotationConfig)> {
        self.rotations.iter().map(|(k, v)| (k.as_str(), v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::units::{Degrees, Rpm};
    use crate::motion::Direction;

    fn preset(angle: f32) -> RotationConfig {
        RotationConfig {
            motor: String::try_from("door").unwrap(),
            angle_degrees: Some(Degrees(angle)),
            rpm: Rpm::DEFAULT,
            direction: Direction::Clockwise,
            time_limit_secs: None,
            use_sensor: false,
        }
    }

    #[test]
    fn test_register_and_get() {
        let mut registry = RotationRegistry::new();
        registry.register("open", preset(90.0)).unwrap();

        assert!(registry.contains("open"));
        assert_eq!(registry.len(), 1);
        assert_eq!(
            registry.get("open").unwrap().angle_degrees,
            Some(Degrees(90.0))
        );
        assert!(registry.get("close").is_none());
    }

    #[test]
    fn test_get_or_error() {
        let mut registry = RotationRegistry::new();
        registry.register("open", preset(90.0)).unwrap();

        assert!(registry.get_or_error("open").is_ok());
        assert!(matches!(
            registry.get_or_error("missing"),
            Err(Error::Config(ConfigError::RotationNotFound(_))),
        ));
    }
}
