//! Unit types for physical quantities.
//!
//! Provides type-safe representations of angles, rotational speed, and
//! durations to prevent unit confusion at compile time.

use serde::Deserialize;

/// Rotation angle in degrees.
///
/// Only the magnitude is meaningful for a rotation request; the sign is
/// ignored and direction travels separately.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize)]
#[serde(transparent)]
pub struct Degrees(pub f32);

impl Degrees {
    /// Create a new Degrees value.
    #[inline]
    pub const fn new(value: f32) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> f32 {
        self.0
    }
}

/// Rotational speed in revolutions per minute.
///
/// Values outside [`Rpm::MIN`], [`Rpm::MAX`] are silently clamped to the
/// nearest bound when a plan is derived; out-of-range speed is a permissive
/// policy, not an error.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize)]
#[serde(transparent)]
pub struct Rpm(pub f32);

impl Rpm {
    /// Slowest supported speed.
    pub const MIN: Self = Self(0.1);
    /// Fastest supported speed.
    pub const MAX: Self = Self(18.0);
    /// Speed used when a rotation preset does not name one.
    pub const DEFAULT: Self = Self(15.0);

    /// Create a new Rpm value (unclamped).
    #[inline]
    pub const fn new(value: f32) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> f32 {
        self.0
    }

    /// Clamp to the supported speed range.
    #[inline]
    pub fn clamped(self) -> Self {
        if self.0 > Self::MAX.0 {
            Self::MAX
        } else if self.0 < Self::MIN.0 {
            Self::MIN
        } else {
            self
        }
    }
}

impl Default for Rpm {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Wall-clock duration in seconds.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize)]
#[serde(transparent)]
pub struct Seconds(pub f32);

impl Seconds {
    /// Create a new Seconds value.
    #[inline]
    pub const fn new(value: f32) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> f32 {
        self.0
    }

    /// Convert to whole nanoseconds (negative durations saturate to zero).
    #[inline]
    pub fn as_nanos(self) -> u64 {
        (self.0 * 1_000_000_000.0) as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rpm_clamp_bounds() {
        assert_eq!(Rpm(25.0).clamped(), Rpm::MAX);
        assert_eq!(Rpm(0.0).clamped(), Rpm::MIN);
        assert_eq!(Rpm(-3.0).clamped(), Rpm::MIN);
        assert_eq!(Rpm(12.0).clamped(), Rpm(12.0));
        assert_eq!(Rpm::MIN.clamped(), Rpm::MIN);
        assert_eq!(Rpm::MAX.clamped(), Rpm::MAX);
    }

    #[test]
    fn test_seconds_to_nanos() {
        assert_eq!(Seconds(1.0).as_nanos(), 1_000_000_000);
        assert_eq!(Seconds(0.0).as_nanos(), 0);
        // Negative limits saturate rather than wrap
        assert_eq!(Seconds(-1.0).as_nanos(), 0);
    }
}
