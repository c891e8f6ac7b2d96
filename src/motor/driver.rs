//! Step sequencer driver.
//!
//! Owns the four coil output lines and runs the blocking stepping loop.
//! Generic over embedded-hal 1.0 pin and delay types.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::error::{Error, HardwareError, Result};
use crate::motion::{
    CancelToken, MotionPlan, MotionTicker, PhaseState, RotationRequest, StopReason,
};
use crate::rotation::RotationRegistry;
use crate::sensor::Interrupt;

/// Four-coil stepper sequencer over discrete GPIO.
///
/// Generic over:
/// - `IN1`..`IN4`: the four coil-lead output lines (each an `OutputPin`)
/// - `DELAY`: delay provider for the inter-step hold (`DelayNs`)
///
/// The phase index persists across [`rotate`](Self::rotate) calls, mirroring
/// the real shaft phase. Not thread-safe: `rotate` blocks the calling thread
/// for the whole motion and takes `&mut self`, so external synchronization
/// is required if the sequencer is shared.
pub struct StepSequencer<IN1, IN2, IN3, IN4, DELAY>
where
    IN1: OutputPin,
    IN2: OutputPin,
    IN3: OutputPin,
    IN4: OutputPin,
    DELAY: DelayNs,
{
    in1: IN1,
    in2: IN2,
    in3: IN3,
    in4: IN4,

    /// Delay provider for step timing.
    delay: DELAY,

    /// Position in the excitation cycle; survives between rotations.
    phase: PhaseState,

    /// Motor name for logging/debugging.
    name: heapless::String<32>,
}

impl<IN1, IN2, IN3, IN4, DELAY> StepSequencer<IN1, IN2, IN3, IN4, DELAY>
where
    IN1: OutputPin,
    IN2: OutputPin,
    IN3: OutputPin,
    IN4: OutputPin,
    DELAY: DelayNs,
{
    /// Create a sequencer and drive all four lines to the inactive level.
    ///
    /// A line that cannot be driven is a fatal setup-time error.
    pub(crate) fn new(
        in1: IN1,
        in2: IN2,
        in3: IN3,
        in4: IN4,
        delay: DELAY,
        name: heapless::String<32>,
    ) -> Result<Self> {
        let mut sequencer = Self {
            in1,
            in2,
            in3,
            in4,
            delay,
            phase: PhaseState::new(),
            name,
        };
        sequencer.cleanup()?;
        Ok(sequencer)
    }

    /// Get the motor name.
    #[inline]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Current position in the excitation cycle, in [0, 4).
    #[inline]
    pub fn phase_index(&self) -> u8 {
        self.phase.index()
    }

    /// Run one rotation request to termination (blocking).
    ///
    /// Validation happens before any output-line write; an unbounded request
    /// fails with [`RequestError::MissingBound`](crate::error::RequestError)
    /// and leaves the lines untouched.
    ///
    /// Each iteration, in strict order: cancellation check, sensor sample
    /// (if bound), phase emission, phase-index advance, blocking sleep,
    /// bookkeeping. Sensor trip, time limit, step exhaustion, and
    /// cancellation are all successful terminations, distinguished by the
    /// returned [`StopReason`]. Pin failures propagate unchanged; there are
    /// no retries.
    pub fn rotate(
        &mut self,
        request: &RotationRequest,
        mut interrupt: Option<&mut dyn Interrupt>,
        cancel: Option<&CancelToken>,
    ) -> Result<StopReason> {
        let plan = MotionPlan::from_request(request)?;
        let mut ticker = MotionTicker::new(&plan);

        loop {
            if ticker.steps_exhausted() {
                return Ok(StopReason::Complete);
            }
            if let Some(token) = cancel {
                if token.is_cancelled() {
                    return Ok(StopReason::Cancelled);
                }
            }
            if let Some(sensor) = interrupt.as_mut() {
                if sensor.is_tripped()? {
                    return Ok(StopReason::SensorTripped);
                }
            }

            self.emit(self.phase.pattern())?;
            self.phase.advance(plan.direction);
            self.delay.delay_ns(plan.step_interval_ns);

            ticker.record_step();
            if ticker.time_exceeded() {
                return Ok(StopReason::TimeLimit);
            }
        }
    }

    /// Run a named rotation preset from a registry.
    ///
    /// The sensor capability is only armed when the preset asks for it.
    pub fn execute(
        &mut self,
        name: &str,
        registry: &RotationRegistry,
        interrupt: Option<&mut dyn Interrupt>,
        cancel: Option<&CancelToken>,
    ) -> Result<StopReason> {
        let preset = registry.get_or_error(name)?;
        let request = preset.to_request();
        let armed = if preset.use_sensor { interrupt } else { None };
        self.rotate(&request, armed, cancel)
    }

    /// Drive all four lines to the inactive level.
    ///
    /// Idempotent; safe before any rotation and after a cancelled one. The
    /// phase index is preserved, so a later rotation resumes from the real
    /// shaft phase.
    pub fn cleanup(&mut self) -> Result<()> {
        self.emit([false; 4])
    }

    /// Release the underlying lines and delay provider, after driving the
    /// lines inactive.
    pub fn release(mut self) -> Result<(IN1, IN2, IN3, IN4, DELAY)> {
        self.cleanup()?;
        Ok((self.in1, self.in2, self.in3, self.in4, self.delay))
    }

    /// Apply one excitation pattern to the four coil leads.
    fn emit(&mut self, pattern: [bool; 4]) -> Result<()> {
        set_level(&mut self.in1, pattern[0])?;
        set_level(&mut self.in2, pattern[1])?;
        set_level(&mut self.in3, pattern[2])?;
        set_level(&mut self.in4, pattern[3])?;
        Ok(())
    }
}

fn set_level<PIN: OutputPin>(pin: &mut PIN, high: bool) -> Result<()> {
    let outcome = if high { pin.set_high() } else { pin.set_low() };
    outcome.map_err(|_| Error::Hardware(HardwareError::OutputPin))
}
