//! Builder pattern for StepSequencer.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::config::{MotorConfig, SystemConfig};
use crate::error::{ConfigError, Error, Result};

use super::driver::StepSequencer;

/// Builder for creating StepSequencer instances.
pub struct StepSequencerBuilder<IN1, IN2, IN3, IN4, DELAY>
where
    IN1: OutputPin,
    IN2: OutputPin,
    IN3: OutputPin,
    IN4: OutputPin,
    DELAY: DelayNs,
{
    in1: Option<IN1>,
    in2: Option<IN2>,
    in3: Option<IN3>,
    in4: Option<IN4>,
    delay: Option<DELAY>,
    name: Option<heapless::String<32>>,
}

impl<IN1, IN2, IN3, IN4, DELAY> Default for StepSequencerBuilder<IN1, IN2, IN3, IN4, DELAY>
where
    IN1: OutputPin,
    IN2: OutputPin,
    IN3: OutputPin,
    IN4: OutputPin,
    DELAY: DelayNs,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<IN1, IN2, IN3, IN4, DELAY> StepSequencerBuilder<IN1, IN2, IN3, IN4, DELAY>
where
    IN1: OutputPin,
    IN2: OutputPin,
    IN3: OutputPin,
    IN4: OutputPin,
    DELAY: DelayNs,
{
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            in1: None,
            in2: None,
            in3: None,
            in4: None,
            delay: None,
            name: None,
        }
    }

    /// Set the first coil-lead line.
    pub fn in1(mut self, pin: IN1) -> Self {
        self.in1 = Some(pin);
        self
    }

    /// Set the second coil-lead line.
    pub fn in2(mut self, pin: IN2) -> Self {
        self.in2 = Some(pin);
        self
    }

    /// Set the third coil-lead line.
    pub fn in3(mut self, pin: IN3) -> Self {
        self.in3 = Some(pin);
        self
    }

    /// Set the fourth coil-lead line.
    pub fn in4(mut self, pin: IN4) -> Self {
        self.in4 = Some(pin);
        self
    }

    /// Set the delay provider.
    pub fn delay(mut self, delay: DELAY) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Set the motor name.
    pub fn name(mut self, name: &str) -> Self {
        self.name = heapless::String::try_from(name).ok();
        self
    }

    /// Take the name from a MotorConfig.
    ///
    /// The pins themselves stay with the platform layer: the configured
    /// line numbers tell it which lines to acquire and hand to the builder.
    pub fn from_motor_config(mut self, config: &MotorConfig) -> Self {
        self.name = Some(config.name.clone());
        self
    }

    /// Configure from SystemConfig by motor name.
    pub fn from_config(self, config: &SystemConfig, motor_name: &str) -> Result<Self> {
        let motor_config = config.motor(motor_name).ok_or_else(|| {
            Error::Config(ConfigError::MotorNotFound(
                heapless::String::try_from(motor_name).unwrap_or_default(),
            ))
        })?;

        Ok(self.from_motor_config(motor_config))
    }

    /// Build the StepSequencer, driving all four lines inactive.
    ///
    /// # Errors
    ///
    /// Returns an error if a required pin or the delay provider is missing,
    /// or if a line cannot be driven to the idle level.
    pub fn build(self) -> Result<StepSequencer<IN1, IN2, IN3, IN4, DELAY>> {
        let in1 = self.in1.ok_or_else(|| missing("in1 is required"))?;
        let in2 = self.in2.ok_or_else(|| missing("in2 is required"))?;
        let in3 = self.in3.ok_or_else(|| missing("in3 is required"))?;
        let in4 = self.in4.ok_or_else(|| missing("in4 is required"))?;
        let delay = self.delay.ok_or_else(|| missing("delay is required"))?;

        let name = self
            .name
            .unwrap_or_else(|| heapless::String::try_from("motor").unwrap());

        StepSequencer::new(in1, in2, in3, in4, delay, name)
    }
}

fn missing(what: &str) -> Error {
    Error::Config(ConfigError::ParseError(
        heapless::String::try_from(what).unwrap_or_default(),
    ))
}
