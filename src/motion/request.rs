//! Rotation requests, stop reasons, and cooperative cancellation.

use core::sync::atomic::{AtomicBool, Ordering};

use crate::config::units::{Degrees, Rpm, Seconds};

use super::phase::Direction;

/// A single rotation request, constructed per `rotate` call.
///
/// At least one of the angle and the time limit must be present; a request
/// with neither is rejected with
/// [`RequestError::MissingBound`](crate::error::RequestError::MissingBound)
/// before any output line is touched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationRequest {
    /// Rotation magnitude in degrees; the sign is ignored. `None` means no
    /// angle bound (motion governed by time limit and sensor only).
    pub angle: Option<Degrees>,

    /// Requested speed; clamped to the supported range at plan time.
    pub rpm: Rpm,

    /// Rotational sense.
    pub direction: Direction,

    /// Upper bound on wall-clock duration.
    pub time_limit: Option<Seconds>,
}

impl RotationRequest {
    /// Create a request with no bounds at the default speed.
    pub fn new(direction: Direction) -> Self {
        Self {
            angle: None,
            rpm: Rpm::DEFAULT,
            direction,
            time_limit: None,
        }
    }

    /// Set the rotation angle.
    pub fn angle(mut self, angle: Degrees) -> Self {
        self.angle = Some(angle);
        self
    }

    /// Set the speed.
    pub fn rpm(mut self, rpm: Rpm) -> Self {
        self.rpm = rpm;
        self
    }

    /// Set the wall-clock time limit.
    pub fn time_limit(mut self, limit: Seconds) -> Self {
        self.time_limit = Some(limit);
        self
    }
}

/// Why a rotation stopped.
///
/// Every variant is a successful termination; `rotate` returns
/// `Ok(StopReason)` for all of them. Hardware faults and invalid requests
/// surface as [`Error`](crate::error::Error) instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StopReason {
    /// The requested angle was reached (step budget exhausted).
    Complete,
    /// The wall-clock limit elapsed before the angle was reached.
    TimeLimit,
    /// The contact sensor reported the open state.
    SensorTripped,
    /// A cancellation signal was observed.
    Cancelled,
}

impl core::fmt::Display for StopReason {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            StopReason::Complete => write!(f, "requested angle reached"),
            StopReason::TimeLimit => write!(f, "time limit reached"),
            StopReason::SensorTripped => write!(f, "sensor tripped"),
            StopReason::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// Cooperative cancellation flag, observed once per step.
///
/// The sequencer never sets it; the caller shares it with a signal handler
/// or another thread and calls [`CancelToken::cancel`]. After cancellation
/// the output lines hold the last emitted pattern; restoring the idle state
/// is the caller's job via `cleanup`.
#[derive(Debug, Default)]
pub struct CancelToken {
    flag: AtomicBool,
}

impl CancelToken {
    /// Create an unset token.
    pub const fn new() -> Self {
        Self {
            flag: AtomicBool::new(false),
        }
    }

    /// Request cancellation of the running rotation.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    /// Whether cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }

    /// Clear the flag so the token can arm another rotation.
    pub fn reset(&self) {
        self.flag.store(false, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_defaults() {
        let request = RotationRequest::new(Direction::Clockwise);
        assert_eq!(request.angle, None);
        assert_eq!(request.time_limit, None);
        assert_eq!(request.rpm, Rpm::DEFAULT);
    }

    #[test]
    fn test_request_setters() {
        let request = RotationRequest::new(Direction::CounterClockwise)
            .angle(Degrees(360.0))
            .rpm(Rpm(18.0))
            .time_limit(Seconds(30.0));

        assert_eq!(request.angle, Some(Degrees(360.0)));
        assert_eq!(request.rpm, Rpm(18.0));
        assert_eq!(request.time_limit, Some(Seconds(30.0)));
        assert_eq!(request.direction, Direction::CounterClockwise);
    }

    #[test]
    fn test_cancel_token() {
        let token = CancelToken::new();
        assert!(!token.is_cancelled());
        token.cancel();
        assert!(token.is_cancelled());
        token.reset();
        assert!(!token.is_cancelled());
    }
}
