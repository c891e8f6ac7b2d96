//! Configuration loading from files (std only).

use std::fs;
use std::path::Path;

use crate::error::{ConfigError, Error, Result};

use super::SystemConfig;

/// Load configuration from a TOML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
///
/// # Example
///
/// ```rust,ignore
/// use stepper_sequencer::load_config;
///
/// let config = load_config("door.toml")?;
/// ```
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<SystemConfig> {
    let content = fs::read_to_string(path.as_ref()).map_err(|e| {
        let msg = heapless::String::try_from(e.to_string().as_str()).unwrap_or_default();
        Error::Config(ConfigError::IoError(msg))
    })?;

    parse_config(&content)
}

/// Parse configuration from a TOML string.
///
/// # Errors
///
/// Returns an error if the TOML is invalid or fails validation.
pub fn parse_config(content: &str) -> Result<SystemConfig> {
    let config: SystemConfig = toml::from_str(content).map_err(|e| {
        let msg = heapless::String::try_from(e.message()).unwrap_or_default();
        Error::Config(ConfigError::ParseError(msg))
    })?;

    // Validate the configuration
    super::validation::validate_config(&config)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_config() {
        let toml = r#"
[motors.door]
name = "Door"
in1 = 12
in2 = 16
in3 = 20
in4 = 21
"#;

        let config = parse_config(toml).unwrap();
        assert!(config.motor("door").is_some());
        assert!(config.sensor.is_none());
    }

    #[test]
    fn test_parse_with_sensor_and_rotation() {
        let toml = r#"
[motors.door]
name = "Door"
in1 = 12
in2 = 16
in3 = 20
in4 = 21

[sensor]
pin = 17

[rotations.close]
motor = "door"
angle_degrees = 360.0
rpm = 18.0
direction = "counter_clockwise"
time_limit_secs = 30.0
use_sensor = true
"#;

        let config = parse_config(toml).unwrap();
        assert_eq!(config.sensor.unwrap().pin, 17);

        let close = config.rotation("close").unwrap();
        assert_eq!(close.motor.as_str(), "door");
        assert!(close.use_sensor);
        assert_eq!(
            close.direction,
            crate::motion::Direction::CounterClockwise
        );
    }

    #[test]
    fn test_parse_defaults() {
        let toml = r#"
[motors.door]
name = "Door"
in1 = 12
in2 = 16
in3 = 20
in4 = 21

[rotations.nudge]
motor = "door"
angle_degrees = 5.0
"#;

        let config = parse_config(toml).unwrap();
        let nudge = config.rotation("nudge").unwrap();
        assert_eq!(nudge.rpm, crate::config::units::Rpm::DEFAULT);
        assert_eq!(nudge.direction, crate::motion::Direction::Clockwise);
        assert!(!nudge.use_sensor);
        assert!(nudge.time_limit_secs.is_none());
    }

    #[test]
    fn test_parse_rejects_invalid_wiring() {
        let toml = r#"
[motors.door]
name = "Door"
in1 = 12
in2 = 12
in3 = 20
in4 = 21
"#;

        assert!(parse_config(toml).is_err());
    }
}
