// SPDX-License-Identifier: MPL-2.0
//! Slide transition state and the pure math behind it.
//!
//! The controller has two phases: `Idle` and `Sliding`. A slide ends when
//! its fixed-duration timer fires — completion is time-based, never tied to
//! a render event, so a dropped animation tick can never leave the
//! controller wedged. The eased offset computed here is used only for
//! drawing.

use std::time::{Duration, Instant};

/// Direction of a slide through the item list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    /// Signed index step.
    #[must_use]
    pub fn step(self) -> i64 {
        match self {
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }
}

/// One in-flight slide.
#[derive(Debug, Clone)]
pub struct Slide {
    pub direction: Direction,
    pub target_index: usize,
    /// Shared animation offset both frames travel; set once the incoming
    /// frame's geometry is known.
    pub travel: f32,
    /// When the animation started, i.e. when the incoming frame arrived.
    /// `None` while the incoming frame is still building.
    pub started_at: Option<Instant>,
}

/// Controller phase. Exactly one slide may be in flight.
#[derive(Debug, Clone, Default)]
pub enum Phase {
    #[default]
    Idle,
    Sliding(Slide),
}

impl Phase {
    #[must_use]
    pub fn is_sliding(&self) -> bool {
        matches!(self, Phase::Sliding(_))
    }
}

/// Wrap-around index stepping: `(current + dir + len) mod len`.
#[must_use]
pub fn next_index(current: usize, direction: Direction, len: usize) -> usize {
    debug_assert!(len > 0);
    let len = len as i64;
    let stepped = (current as i64 + direction.step()).rem_euclid(len);
    stepped as usize
}

/// Travel distance for a slide: the wider of the two holders plus a fixed
/// clearance, so neither frame is visible on both sides at once.
#[must_use]
pub fn travel_distance(current_width: u32, next_width: u32, margin: f32) -> f32 {
    current_width.max(next_width) as f32 + margin
}

/// Eased animation offset at `elapsed` into a slide of length `duration`.
/// Clamped to `travel` once the duration has passed.
#[must_use]
pub fn offset_at(elapsed: Duration, duration: Duration, travel: f32) -> f32 {
    if duration.is_zero() {
        return travel;
    }
    let t = (elapsed.as_secs_f32() / duration.as_secs_f32()).clamp(0.0, 1.0);
    travel * ease_out_cubic(t)
}

/// Cubic ease-out: fast start, settling arrival.
#[must_use]
pub fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_relative_eq;

    #[test]
    fn next_index_wraps_both_directions() {
        assert_eq!(next_index(2, Direction::Forward, 3), 0);
        assert_eq!(next_index(0, Direction::Backward, 3), 2);
        assert_eq!(next_index(1, Direction::Forward, 3), 2);
        assert_eq!(next_index(1, Direction::Backward, 3), 0);
    }

    #[test]
    fn travel_clears_the_wider_frame() {
        assert_relative_eq!(travel_distance(800, 600, 60.0), 860.0);
        assert_relative_eq!(travel_distance(600, 800, 60.0), 860.0);
    }

    #[test]
    fn ease_endpoints_are_stable() {
        assert_relative_eq!(ease_out_cubic(0.0), 0.0);
        assert_relative_eq!(ease_out_cubic(1.0), 1.0);
    }

    #[test]
    fn ease_is_monotonic() {
        let mut previous = 0.0;
        for i in 1..=20 {
            let value = ease_out_cubic(i as f32 / 20.0);
            assert!(value >= previous);
            previous = value;
        }
    }

    #[test]
    fn offset_clamps_past_duration() {
        let duration = Duration::from_millis(450);
        let late = offset_at(Duration::from_secs(5), duration, 860.0);
        assert_relative_eq!(late, 860.0);
    }

    #[test]
    fn offset_handles_zero_duration() {
        assert_relative_eq!(
            offset_at(Duration::ZERO, Duration::ZERO, 500.0),
            500.0
        );
    }

    #[test]
    fn phase_defaults_to_idle() {
        assert!(!Phase::default().is_sliding());
    }
}
