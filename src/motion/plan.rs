//! Motion plan derivation and loop bookkeeping.
//!
//! A [`MotionPlan`] is computed once per request, before any output-line
//! write: request validation, speed clamping, step-count derivation, and the
//! speed-to-delay conversion all happen here. A [`MotionTicker`] then tracks
//! the running loop against the plan's budgets.

use libm::{fabsf, floorf};

use crate::config::units::Rpm;
use crate::error::{RequestError, Result};

use super::phase::{Direction, PHASE_COUNT, STEPS_PER_REVOLUTION};
use super::request::RotationRequest;

/// Explicit termination policy for a planned rotation.
///
/// Makes the "loop until told to stop" cases distinct types instead of
/// inferring them from absent fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// Stop after a fixed number of steps.
    ByAngle(u32),
    /// Stop once the elapsed time exceeds the budget (nanoseconds); the
    /// step count is unbounded.
    ByTime(u64),
    /// Both bounds armed; whichever trips first stops the loop.
    ByAngleAndTime(u32, u64),
}

/// Computed plan for one rotation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MotionPlan {
    /// How the loop terminates (sensor and cancellation aside).
    pub termination: Termination,

    /// Rotational sense.
    pub direction: Direction,

    /// Hold interval between successive phase emissions, in nanoseconds.
    pub step_interval_ns: u32,
}

impl MotionPlan {
    /// Derive a plan from a request.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::MissingBound`] if the request carries neither
    /// an angle nor a time limit. No hardware has been touched at that
    /// point.
    pub fn from_request(request: &RotationRequest) -> Result<Self> {
        let steps = request.angle.map(|angle| {
            floorf(fabsf(angle.0) * STEPS_PER_REVOLUTION as f32 / 360.0) as u32
        });
        let time_ns = request.time_limit.map(|limit| limit.as_nanos());

        let termination = match (steps, time_ns) {
            (Some(steps), None) => Termination::ByAngle(steps),
            (None, Some(ns)) => Termination::ByTime(ns),
            (Some(steps), Some(ns)) => Termination::ByAngleAndTime(steps, ns),
            (None, None) => return Err(RequestError::MissingBound.into()),
        };

        Ok(Self {
            termination,
            direction: request.direction,
            step_interval_ns: step_interval_ns(request.rpm),
        })
    }

    /// Step budget, if the rotation is angle-bounded.
    #[inline]
    pub fn step_budget(&self) -> Option<u32> {
        match self.termination {
            Termination::ByAngle(steps) | Termination::ByAngleAndTime(steps, _) => Some(steps),
            Termination::ByTime(_) => None,
        }
    }

    /// Time budget in nanoseconds, if a wall-clock limit is armed.
    #[inline]
    pub fn time_budget_ns(&self) -> Option<u64> {
        match self.termination {
            Termination::ByTime(ns) | Termination::ByAngleAndTime(_, ns) => Some(ns),
            Termination::ByAngle(_) => None,
        }
    }
}

/// Inter-step hold interval for a requested speed.
///
/// `step_sleep = 60 / (rpm * steps_per_revolution / phase_count)` seconds,
/// with the rpm clamped first. Derived from the fixed 4-phase/2048-step
/// geometry; not independently configurable.
pub fn step_interval_ns(rpm: Rpm) -> u32 {
    let steps_per_minute =
        rpm.clamped().value() * (STEPS_PER_REVOLUTION as f32 / PHASE_COUNT as f32);
    (60.0e9 / steps_per_minute) as u32
}

/// Running bookkeeping for one rotation loop.
#[derive(Debug, Clone, Copy)]
pub struct MotionTicker {
    steps_emitted: u32,
    elapsed_ns: u64,
    step_budget: Option<u32>,
    time_budget_ns: Option<u64>,
    step_interval_ns: u32,
}

impl MotionTicker {
    /// Create a ticker for a plan.
    pub fn new(plan: &MotionPlan) -> Self {
        Self {
            steps_emitted: 0,
            elapsed_ns: 0,
            step_budget: plan.step_budget(),
            time_budget_ns: plan.time_budget_ns(),
            step_interval_ns: plan.step_interval_ns,
        }
    }

    /// Record one phase emission and its hold interval.
    pub fn record_step(&mut self) {
        self.steps_emitted += 1;
        self.elapsed_ns += self.step_interval_ns as u64;
    }

    /// Number of phase patterns emitted so far.
    #[inline]
    pub fn steps_emitted(&self) -> u32 {
        self.steps_emitted
    }

    /// Whether the step budget (if any) has been spent.
    #[inline]
    pub fn steps_exhausted(&self) -> bool {
        self.step_budget
            .map(|budget| self.steps_emitted >= budget)
            .unwrap_or(false)
    }

    /// Whether the elapsed time exceeds the time budget (if any).
    #[inline]
    pub fn time_exceeded(&self) -> bool {
        self.time_budget_ns
            .map(|budget| self.elapsed_ns > budget)
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::units::{Degrees, Seconds};
    use crate::error::{Error, RequestError};

    #[test]
    fn test_step_count_full_revolution() {
        let request = RotationRequest::new(Direction::Clockwise).angle(Degrees(360.0));
        let plan = MotionPlan::from_request(&request).unwrap();
        assert_eq!(plan.step_budget(), Some(STEPS_PER_REVOLUTION));
        assert_eq!(plan.time_budget_ns(), None);
    }

    #[test]
    fn test_step_count_floors() {
        // 90 degrees -> floor(90 * 2048 / 360) = floor(512.0) = 512
        let request = RotationRequest::new(Direction::Clockwise).angle(Degrees(90.0));
        let plan = MotionPlan::from_request(&request).unwrap();
        assert_eq!(plan.step_budget(), Some(512));

        // 0.1 degrees is below one step
        let request = RotationRequest::new(Direction::Clockwise).angle(Degrees(0.1));
        let plan = MotionPlan::from_request(&request).unwrap();
        assert_eq!(plan.step_budget(), Some(0));
    }

    #[test]
    fn test_angle_sign_ignored() {
        let positive = RotationRequest::new(Direction::Clockwise).angle(Degrees(45.0));
        let negative = RotationRequest::new(Direction::Clockwise).angle(Degrees(-45.0));
        assert_eq!(
            MotionPlan::from_request(&positive).unwrap().step_budget(),
            MotionPlan::from_request(&negative).unwrap().step_budget(),
        );
    }

    #[test]
    fn test_missing_bound_rejected() {
        let request = RotationRequest::new(Direction::Clockwise);
        assert_eq!(
            MotionPlan::from_request(&request),
            Err(Error::Request(RequestError::MissingBound)),
        );
    }

    #[test]
    fn test_termination_tri_state() {
        let by_angle = RotationRequest::new(Direction::Clockwise).angle(Degrees(360.0));
        assert!(matches!(
            MotionPlan::from_request(&by_angle).unwrap().termination,
            Termination::ByAngle(_)
        ));

        let by_time = RotationRequest::new(Direction::Clockwise).time_limit(Seconds(10.0));
        assert!(matches!(
            MotionPlan::from_request(&by_time).unwrap().termination,
            Termination::ByTime(_)
        ));

        let both = RotationRequest::new(Direction::Clockwise)
            .angle(Degrees(360.0))
            .time_limit(Seconds(10.0));
        assert!(matches!(
            MotionPlan::from_request(&both).unwrap().termination,
            Termination::ByAngleAndTime(_, _)
        ));
    }

    #[test]
    fn test_interval_formula() {
        // 60 / (18 * 512) seconds = 6_510_416 ns
        let ns = step_interval_ns(Rpm(18.0));
        assert!((ns as i64 - 6_510_416).abs() < 100, "got {}", ns);

        // Slowest speed: 60 / (0.1 * 512) = 1.171875 s
        let ns = step_interval_ns(Rpm(0.1));
        assert!((ns as i64 - 1_171_875_000).abs() < 1_000, "got {}", ns);
    }

    #[test]
    fn test_interval_uses_clamped_speed() {
        assert_eq!(step_interval_ns(Rpm(100.0)), step_interval_ns(Rpm::MAX));
        assert_eq!(step_interval_ns(Rpm(0.0)), step_interval_ns(Rpm::MIN));
    }

    #[test]
    fn test_ticker_budgets() {
        // 1 degree -> floor(2048 / 360) = 5 steps
        let request = RotationRequest::new(Direction::Clockwise)
            .angle(Degrees(1.0))
            .time_limit(Seconds(0.0));
        let plan = MotionPlan::from_request(&request).unwrap();
        let mut ticker = MotionTicker::new(&plan);

        assert_eq!(plan.step_budget(), Some(5));
        assert!(!ticker.steps_exhausted());
        assert!(!ticker.time_exceeded());

        ticker.record_step();
        // One emission already exceeds a zero time budget
        assert!(ticker.time_exceeded());
        assert!(!ticker.steps_exhausted());

        for _ in 0..4 {
            ticker.record_step();
        }
        assert!(ticker.steps_exhausted());
        assert_eq!(ticker.steps_emitted(), 5);
    }

    #[test]
    fn test_zero_step_budget_is_exhausted_immediately() {
        let request = RotationRequest::new(Direction::Clockwise).angle(Degrees(0.0));
        let plan = MotionPlan::from_request(&request).unwrap();
        let ticker = MotionTicker::new(&plan);
        assert!(ticker.steps_exhausted());
    }
}
