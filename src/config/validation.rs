//! Configuration validation.

use crate::error::{ConfigError, Error, Result};

use super::SystemConfig;

/// Validate a system configuration.
///
/// Checks:
/// - Every motor uses four distinct output lines
/// - The sensor line does not collide with any motor output line
/// - Every rotation preset names an existing motor
/// - Every rotation preset carries an angle or a time limit
/// - Presets that arm the sensor have a `[sensor]` section to arm
pub fn validate_config(config: &SystemConfig) -> Result<()> {
    for (_, motor) in config.motors.iter() {
        validate_motor(motor, config)?;
    }

    for (name, rotation) in config.rotations.iter() {
        validate_rotation(name.as_str(), rotation, config)?;
    }

    Ok(())
}

fn validate_motor(motor: &super::MotorConfig, config: &SystemConfig) -> Result<()> {
    let lines = motor.output_lines();

    for (i, line) in lines.iter().enumerate() {
        if lines[..i].contains(line) {
            return Err(Error::Config(ConfigError::DuplicateOutputLine(*line)));
        }
    }

    if let Some(sensor) = &config.sensor {
        if lines.contains(&sensor.pin) {
            return Err(Error::Config(ConfigError::SensorLineConflict(sensor.pin)));
        }
    }

    Ok(())
}

fn validate_rotation(
    name: &str,
    rotation: &super::RotationConfig,
    config: &SystemConfig,
) -> Result<()> {
    if config.motor(rotation.motor.as_str()).is_none() {
        return Err(Error::Config(ConfigError::MotorNotFound(
            rotation.motor.clone(),
        )));
    }

    // Same invariant the sequencer enforces at rotate time, caught before
    // any hardware is wired up
    if !rotation.has_bound() {
        return Err(Error::Config(ConfigError::UnboundedRotation(
            heapless::String::try_from(name).unwrap_or_default(),
        )));
    }

    if rotation.use_sensor && config.sensor.is_none() {
        return Err(Error::Config(ConfigError::SensorNotConfigured(
            heapless::String::try_from(name).unwrap_or_default(),
        )));
    }

    Ok(())
}
