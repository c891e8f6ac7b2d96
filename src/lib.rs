//! # stepper-sequencer
//!
//! Four-phase stepper sequencing over discrete GPIO with embedded-hal 1.0
//! support.
//!
//! ## Features
//!
//! - **Four-phase full-step drive**: fixed cyclic excitation table for
//!   4-coil unipolar motors (2048 steps/revolution class)
//! - **embedded-hal 1.0**: `OutputPin` for the coil leads, `InputPin` for
//!   the door-contact sensor, `DelayNs` for timing
//! - **no_std compatible**: core library works without standard library
//! - **Bounded motion**: stop by angle, wall-clock limit, sensor trip, or
//!   cancellation token, with the reason reported to the caller
//! - **Configuration-driven**: wire pins and name rotation presets in TOML
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use stepper_sequencer::{
//!     Degrees, Direction, Rpm, RotationRequest, Seconds, StepSequencerBuilder,
//! };
//!
//! // Create the sequencer with embedded-hal pins; all four lines are
//! // driven low before any motion request.
//! let mut motor = StepSequencerBuilder::new()
//!     .name("door")
//!     .in1(in1).in2(in2).in3(in3).in4(in4)
//!     .delay(delay)
//!     .build()?;
//!
//! let request = RotationRequest::new(Direction::CounterClockwise)
//!     .angle(Degrees(360.0))
//!     .rpm(Rpm(18.0))
//!     .time_limit(Seconds(30.0));
//!
//! let reason = motor.rotate(&request, Some(&mut door_sensor), None)?;
//! motor.cleanup()?;
//! ```
//!
//! The caller is expected to invoke [`StepSequencer::cleanup`] after every
//! rotation, including the error and cancellation paths, so the lines are
//! left inactive. Platform-wide GPIO initialization (pin-numbering scheme,
//! process-level setup) belongs to the platform I/O layer, not this crate.
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables file I/O and TOML parsing
//! - `alloc`: Enables heap allocation for no_std with allocator
//! - `defmt`: Enables defmt logging for embedded targets

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]
// Allow large error types - necessary for no_std with heapless strings
#![allow(clippy::result_large_err)]

#[cfg(feature = "alloc")]
extern crate alloc;

// Core modules
pub mod config;
pub mod error;
pub mod motion;
pub mod motor;
pub mod rotation;
pub mod sensor;

// Re-exports for ergonomic API
pub use config::{validate_config, MotorConfig, RotationConfig, SensorConfig, SystemConfig};
pub use error::{Error, Result};
pub use motion::{
    CancelToken, Direction, MotionPlan, RotationRequest, StopReason, Termination,
    FULL_STEP_SEQUENCE, STEPS_PER_REVOLUTION,
};
pub use motor::{StepSequencer, StepSequencerBuilder};
pub use rotation::RotationRegistry;
pub use sensor::{ContactSensor, Interrupt, SensorState};

// Configuration loading (std only)
#[cfg(feature = "std")]
pub use config::{load_config, parse_config};

// Unit types
pub use config::units::{Degrees, Rpm, Seconds};
