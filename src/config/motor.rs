//! Motor wiring configuration from TOML.

use heapless::String;
use serde::Deserialize;

/// Wiring of one four-coil motor.
///
/// The line numbers identify platform GPIO lines; the platform layer
/// acquires them and hands concrete pins to the
/// [`StepSequencerBuilder`](crate::motor::StepSequencerBuilder). All four
/// must be distinct (checked by [`validate_config`](super::validate_config)).
#[derive(Debug, Clone, Deserialize)]
pub struct MotorConfig {
    /// Human-readable name (max 32 chars).
    pub name: String<32>,

    /// Output line for the first coil lead.
    pub in1: u8,

    /// Output line for the second coil lead.
    pub in2: u8,

    /// Output line for the third coil lead.
    pub in3: u8,

    /// Output line for the fourth coil lead.
    pub in4: u8,
}

impl MotorConfig {
    /// The four output lines in coil order.
    pub fn output_lines(&self) -> [u8; 4] {
        [self.in1, self.in2, self.in3, self.in4]
    }
}
