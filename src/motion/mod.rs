//! Motion module for stepper-sequencer.
//!
//! Provides the four-phase excitation table, rotation requests, and the
//! per-request motion plan with its loop bookkeeping.

mod phase;
mod plan;
mod request;

pub use phase::{
    Direction, PhaseState, FULL_STEP_SEQUENCE, PHASE_COUNT, STEPS_PER_REVOLUTION,
};
pub use plan::{step_interval_ns, MotionPlan, MotionTicker, Termination};
pub use request::{CancelToken, RotationRequest, StopReason};
