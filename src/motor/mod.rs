//! Motor module for stepper-sequencer.
//!
//! Provides the step sequencer driver that owns the four coil output lines.

mod builder;
mod driver;

pub use builder::StepSequencerBuilder;
pub use driver::StepSequencer;
