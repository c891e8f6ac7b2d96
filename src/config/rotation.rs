//! Named rotation presets from TOML.

use heapless::String;
use serde::Deserialize;

use crate::motion::{Direction, RotationRequest};

use super::units::{Degrees, Rpm, Seconds};

/// A named rotation preset.
///
/// The configuration analogue of a [`RotationRequest`]: optional fields are
/// explicit optionals, never sentinel values. A preset must carry an angle,
/// a time limit, or both; `validate_config` rejects the rest.
#[derive(Debug, Clone, Deserialize)]
pub struct RotationConfig {
    /// Motor the preset drives.
    pub motor: String<32>,

    /// Rotation magnitude in degrees; absent means no angle bound.
    #[serde(default)]
    pub angle_degrees: Option<Degrees>,

    /// Speed; clamped to the supported range at plan time.
    #[serde(default)]
    pub rpm: Rpm,

    /// Rotational sense.
    #[serde(default)]
    pub direction: Direction,

    /// Upper bound on wall-clock duration.
    #[serde(default)]
    pub time_limit_secs: Option<Seconds>,

    /// Whether the door-contact sensor aborts this rotation.
    #[serde(default)]
    pub use_sensor: bool,
}

impl RotationConfig {
    /// Whether the preset carries at least one termination bound.
    pub fn has_bound(&self) -> bool {
        self.angle_degrees.is_some() || self.time_limit_secs.is_some()
    }

    /// Build the runtime request for this preset.
    pub fn to_request(&self) -> RotationRequest {
        RotationRequest {
            angle: self.angle_degrees,
            rpm: self.rpm,
            direction: self.direction,
            time_limit: self.time_limit_secs,
        }
    }
}
