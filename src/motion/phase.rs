//! Four-phase excitation table and phase-index arithmetic.
//!
//! The motor advances one physical step per change in the excitation
//! sequence. Full-step drive energizes two coils per phase for maximum
//! torque.

use serde::Deserialize;

/// Number of entries in the excitation cycle.
pub const PHASE_COUNT: usize = 4;

/// Steps per output-shaft revolution for this motor class.
///
/// Fixed by the physical gear ratio (4 phases x 512); not a runtime
/// parameter. The timing formula in [`crate::motion::MotionPlan`] assumes
/// this geometry.
pub const STEPS_PER_REVOLUTION: u32 = PHASE_COUNT as u32 * 512;

/// The fixed cyclic full-step excitation table, one pattern per phase.
///
/// Each pattern holds the levels applied simultaneously to the four coil
/// leads (IN1..IN4).
pub const FULL_STEP_SEQUENCE: [[bool; 4]; PHASE_COUNT] = [
    [true, true, false, false],
    [false, true, true, false],
    [false, false, true, true],
    [true, false, false, true],
];

/// Direction of shaft rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Clockwise; walks the excitation table backwards (index decrement).
    #[default]
    Clockwise,
    /// Counter-clockwise; walks the excitation table forwards (index
    /// increment).
    CounterClockwise,
}

impl Direction {
    /// Phase-index delta subtracted on each advance.
    #[inline]
    pub fn index_delta(self) -> i8 {
        match self {
            Direction::Clockwise => 1,
            Direction::CounterClockwise => -1,
        }
    }

    /// The opposite rotational sense.
    #[inline]
    pub fn reversed(self) -> Self {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }
}

/// Position within the cyclic excitation table.
///
/// Persists across rotation requests: the index mirrors the real shaft
/// phase, which does not reset between moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PhaseState {
    index: u8,
}

impl PhaseState {
    /// Start at the first table entry.
    #[inline]
    pub const fn new() -> Self {
        Self { index: 0 }
    }

    /// Current position in the excitation cycle, in [0, 4).
    #[inline]
    pub fn index(self) -> u8 {
        self.index
    }

    /// The excitation pattern for the current phase.
    #[inline]
    pub fn pattern(self) -> [bool; 4] {
        FULL_STEP_SEQUENCE[self.index as usize]
    }

    /// Advance one step: `index = (index - delta) mod 4`.
    #[inline]
    pub fn advance(&mut self, direction: Direction) {
        let next = self.index as i8 - direction.index_delta();
        self.index = next.rem_euclid(PHASE_COUNT as i8) as u8;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_shape() {
        assert_eq!(FULL_STEP_SEQUENCE.len(), PHASE_COUNT);
        // Full-step drive keeps exactly two coils energized per phase
        for pattern in FULL_STEP_SEQUENCE {
            assert_eq!(pattern.iter().filter(|&&on| on).count(), 2);
        }
    }

    #[test]
    fn test_counter_clockwise_walks_table_forward() {
        let mut phase = PhaseState::new();
        assert_eq!(phase.pattern(), [true, true, false, false]);

        phase.advance(Direction::CounterClockwise);
        assert_eq!(phase.index(), 1);
        assert_eq!(phase.pattern(), [false, true, true, false]);
    }

    #[test]
    fn test_clockwise_walks_table_backward() {
        let mut phase = PhaseState::new();
        phase.advance(Direction::Clockwise);
        assert_eq!(phase.index(), 3);
        assert_eq!(phase.pattern(), [true, false, false, true]);
    }

    #[test]
    fn test_cycle_wraps() {
        let mut phase = PhaseState::new();
        for _ in 0..PHASE_COUNT {
            phase.advance(Direction::CounterClockwise);
        }
        assert_eq!(phase.index(), 0);
    }

    #[test]
    fn test_directions_traverse_reversed_sequences() {
        let mut ccw = PhaseState::new();
        let mut cw = PhaseState::new();

        let forward: [u8; 8] = core::array::from_fn(|_| {
            ccw.advance(Direction::CounterClockwise);
            ccw.index()
        });
        let mut backward: [u8; 8] = core::array::from_fn(|_| {
            cw.advance(Direction::Clockwise);
            cw.index()
        });

        // Walking backwards visits the same indices in reverse cyclic order
        backward.reverse();
        let rotated: [u8; 8] = core::array::from_fn(|i| backward[(i + 1) % 8]);
        assert_eq!(forward, rotated);
    }

    #[test]
    fn test_reversed() {
        assert_eq!(Direction::Clockwise.reversed(), Direction::CounterClockwise);
        assert_eq!(Direction::CounterClockwise.reversed(), Direction::Clockwise);
    }
}
