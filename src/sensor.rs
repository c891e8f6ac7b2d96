//! Door-contact sensor over an abstract digital input line.

use embedded_hal::digital::InputPin;

use crate::error::{HardwareError, Result};

/// Logical state of the door contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorState {
    /// Contact disturbed; the input line reads high. Used as the abort
    /// condition for a running rotation.
    Open,
    /// Contact at rest; the input line reads low.
    Closed,
}

/// Abort source sampled once per step by the sequencer.
///
/// [`ContactSensor`] is the stock implementation; tests substitute scripted
/// stubs.
pub trait Interrupt {
    /// Whether motion should stop now.
    fn is_tripped(&mut self) -> Result<bool>;
}

/// A single door-contact switch on one digital input line.
///
/// Contract: the platform layer configures the line with a pull-up bias, so
/// the undisturbed contact reads low ([`SensorState::Closed`]) and the
/// disturbed contact reads high ([`SensorState::Open`]). The sensor holds no
/// state beyond the wired line and may outlive the sequencer that samples
/// it.
#[derive(Debug)]
pub struct ContactSensor<PIN>
where
    PIN: InputPin,
{
    line: PIN,
}

impl<PIN> ContactSensor<PIN>
where
    PIN: InputPin,
{
    /// Bind an input line.
    pub fn new(line: PIN) -> Self {
        Self { line }
    }

    /// Sample the line once.
    ///
    /// No debouncing, no caching; the result reflects the instantaneous
    /// level. Pin failures propagate as
    /// [`HardwareError::InputPin`](crate::error::HardwareError::InputPin).
    pub fn read(&mut self) -> Result<SensorState> {
        let high = self
            .line
            .is_high()
            .map_err(|_| HardwareError::InputPin)?;
        Ok(if high {
            SensorState::Open
        } else {
            SensorState::Closed
        })
    }

    /// Release the underlying input line.
    pub fn release(self) -> PIN {
        self.line
    }
}

impl<PIN> Interrupt for ContactSensor<PIN>
where
    PIN: InputPin,
{
    fn is_tripped(&mut self) -> Result<bool> {
        Ok(self.read()? == SensorState::Open)
    }
}

#[cfg(test)]
mod tests {
    use embedded_hal_mock::eh1::digital::{Mock, State, Transaction};

    use super::*;

    #[test]
    fn test_high_reads_open() {
        let mut pin = Mock::new(&[Transaction::get(State::High)]);
        let mut sensor = ContactSensor::new(pin.clone());
        assert_eq!(sensor.read().unwrap(), SensorState::Open);
        pin.done();
    }

    #[test]
    fn test_low_reads_closed() {
        let mut pin = Mock::new(&[Transaction::get(State::Low)]);
        let mut sensor = ContactSensor::new(pin.clone());
        assert_eq!(sensor.read().unwrap(), SensorState::Closed);
        pin.done();
    }

    #[test]
    fn test_interrupt_maps_open_to_tripped() {
        let mut pin = Mock::new(&[
            Transaction::get(State::Low),
            Transaction::get(State::High),
        ]);
        let mut sensor = ContactSensor::new(pin.clone());
        assert!(!sensor.is_tripped().unwrap());
        assert!(sensor.is_tripped().unwrap());
        pin.done();
    }
}
