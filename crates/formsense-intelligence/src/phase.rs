// ABOUTME: Rep-phase state machine with two-threshold hysteresis and windowed trend detection
// ABOUTME: Counts a repetition exactly once per completed active-to-rest cycle
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormSense Contributors

use std::collections::VecDeque;

use formsense_core::models::RepPhase;

use crate::profiles::PhaseThresholds;

/// Outcome of feeding one sample to the tracker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseUpdate {
    /// Phase before the sample
    pub previous: RepPhase,
    /// Phase after the sample
    pub current: RepPhase,
    /// Whether this sample closed a repetition
    pub rep_completed: bool,
}

impl PhaseUpdate {
    /// Whether the phase changed on this sample
    #[must_use]
    pub fn phase_changed(&self) -> bool {
        self.previous != self.current
    }
}

/// Tracks the repetition phase from primary-measure samples
///
/// Cycle: `Up → Descending → Down → Ascending → Up`.
///
/// - Thresholds are tested against the newest sample, so a single frame that
///   jumps straight past a threshold still moves the phase.
/// - The sample window only decides the transitional phases: a move of more
///   than `deadband` between the oldest and newest sample, while the newest
///   sample sits inside the hysteresis band, counts as a trend. Leaving `Down`
///   additionally needs a window that never steps back toward the active
///   threshold, so wobble at the bottom keeps the phase at `Down`.
/// - Sinking past the active threshold again from `Ascending` re-enters `Down`.
/// - A rep completes on entering `Up` from `Down` or `Ascending`. Abandoning
///   a descent (`Descending → Up`) completes nothing.
#[derive(Debug, Clone)]
pub struct PhaseTracker {
    thresholds: PhaseThresholds,
    window: VecDeque<f64>,
    capacity: usize,
    deadband: f64,
    phase: RepPhase,
}

impl PhaseTracker {
    /// Create a tracker in the `Up` phase
    ///
    /// `capacity` is clamped to at least 2 samples.
    #[must_use]
    pub fn new(thresholds: PhaseThresholds, capacity: usize, deadband: f64) -> Self {
        let capacity = capacity.max(2);
        Self {
            thresholds,
            window: VecDeque::with_capacity(capacity),
            capacity,
            deadband,
            phase: RepPhase::Up,
        }
    }

    /// Current phase
    #[must_use]
    pub const fn phase(&self) -> RepPhase {
        self.phase
    }

    /// Samples currently in the window, oldest first
    pub fn samples(&self) -> impl Iterator<Item = f64> + '_ {
        self.window.iter().copied()
    }

    /// Return to `Up` with an empty window
    pub fn reset(&mut self) {
        self.window.clear();
        self.phase = RepPhase::Up;
    }

    /// Feed one sample
    pub fn update(&mut self, sample: f64) -> PhaseUpdate {
        if self.window.len() == self.capacity {
            self.window.pop_front();
        }
        self.window.push_back(sample);

        let previous = self.phase;
        let in_band =
            !self.thresholds.reached_active(sample) && !self.thresholds.reached_rest(sample);
        let trend = self.trend();

        let current = match previous {
            RepPhase::Up => {
                if self.thresholds.reached_active(sample) {
                    RepPhase::Down
                } else if in_band && trend == Some(Trend::TowardActive) {
                    RepPhase::Descending
                } else {
                    RepPhase::Up
                }
            }
            RepPhase::Descending => {
                if self.thresholds.reached_active(sample) {
                    RepPhase::Down
                } else if self.thresholds.reached_rest(sample) {
                    RepPhase::Up
                } else {
                    RepPhase::Descending
                }
            }
            RepPhase::Down => {
                if self.thresholds.reached_rest(sample) {
                    RepPhase::Up
                } else if in_band && trend == Some(Trend::TowardRest) && self.steady_rise() {
                    RepPhase::Ascending
                } else {
                    RepPhase::Down
                }
            }
            RepPhase::Ascending => {
                if self.thresholds.reached_rest(sample) {
                    RepPhase::Up
                } else if self.thresholds.reached_active(sample) {
                    RepPhase::Down
                } else {
                    RepPhase::Ascending
                }
            }
        };

        self.phase = current;
        PhaseUpdate {
            previous,
            current,
            rep_completed: current == RepPhase::Up
                && matches!(previous, RepPhase::Down | RepPhase::Ascending),
        }
    }

    fn trend(&self) -> Option<Trend> {
        let (Some(&oldest), Some(&newest)) = (self.window.front(), self.window.back()) else {
            return None;
        };
        let delta = newest - oldest;
        if self.window.len() < 2 || delta.abs() <= self.deadband {
            None
        } else if self.thresholds.toward_active(delta) {
            Some(Trend::TowardActive)
        } else {
            Some(Trend::TowardRest)
        }
    }

    /// No step inside the window moves toward the active threshold
    fn steady_rise(&self) -> bool {
        self.window
            .iter()
            .zip(self.window.iter().skip(1))
            .all(|(&older, &newer)| !self.thresholds.toward_active(newer - older))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Trend {
    TowardActive,
    TowardRest,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn push_up_tracker() -> PhaseTracker {
        PhaseTracker::new(PhaseThresholds::below(90.0, 160.0), 4, 5.0)
    }

    fn feed(tracker: &mut PhaseTracker, samples: &[f64]) -> u32 {
        samples
            .iter()
            .map(|&sample| u32::from(tracker.update(sample).rep_completed))
            .sum()
    }

    #[test]
    fn test_single_frame_crossings_count_one_rep() {
        let mut tracker = push_up_tracker();

        let down = tracker.update(80.0);
        assert!(down.phase_changed());
        assert_eq!(down.current, RepPhase::Down);
        assert!(!down.rep_completed);

        let up = tracker.update(170.0);
        assert_eq!(up.current, RepPhase::Up);
        assert!(up.rep_completed);
    }

    #[test]
    fn test_gradual_cycle_walks_through_every_phase() {
        let mut tracker = push_up_tracker();
        let mut phases = Vec::new();
        for sample in [170.0, 150.0, 120.0, 80.0, 85.0, 100.0, 140.0, 170.0] {
            phases.push(tracker.update(sample).current);
        }

        assert_eq!(
            phases,
            vec![
                RepPhase::Up,
                RepPhase::Descending,
                RepPhase::Descending,
                RepPhase::Down,
                RepPhase::Down,
                RepPhase::Down,
                RepPhase::Ascending,
                RepPhase::Up,
            ]
        );
    }

    #[test]
    fn test_jitter_around_one_threshold_counts_nothing() {
        let mut tracker = push_up_tracker();
        assert_eq!(feed(&mut tracker, &[95.0, 85.0, 95.0, 85.0, 95.0, 85.0]), 0);

        let mut tracker = push_up_tracker();
        assert_eq!(feed(&mut tracker, &[165.0, 155.0, 165.0, 155.0, 165.0]), 0);
    }

    #[test]
    fn test_abandoned_descent_counts_nothing() {
        let mut tracker = push_up_tracker();
        let reps = feed(&mut tracker, &[170.0, 150.0, 130.0, 150.0, 170.0]);

        assert_eq!(reps, 0);
        assert_eq!(tracker.phase(), RepPhase::Up);
    }

    #[test]
    fn test_dip_while_ascending_does_not_double_count() {
        let mut tracker = push_up_tracker();
        let reps = feed(
            &mut tracker,
            &[170.0, 80.0, 100.0, 120.0, 140.0, 85.0, 120.0, 170.0],
        );
        assert_eq!(reps, 1);
    }

    #[test]
    fn test_wobble_at_the_bottom_stays_down() {
        let mut tracker = push_up_tracker();
        tracker.update(170.0);

        let phases: Vec<RepPhase> = [85.0, 95.0, 85.0, 95.0, 85.0, 95.0]
            .into_iter()
            .map(|sample| tracker.update(sample).current)
            .collect();
        assert!(phases.iter().all(|&phase| phase == RepPhase::Down), "{phases:?}");
    }

    #[test]
    fn test_sinking_back_while_ascending_reenters_down() {
        let mut tracker = PhaseTracker::new(PhaseThresholds::below(120.0, 160.0), 4, 5.0);
        for sample in [170.0, 100.0, 100.0, 100.0] {
            tracker.update(sample);
        }
        assert_eq!(tracker.update(130.0).current, RepPhase::Ascending);

        let back = tracker.update(100.0);
        assert_eq!(back.current, RepPhase::Down);
        assert!(back.phase_changed());
        assert!(!back.rep_completed);

        for sample in [100.0, 100.0] {
            assert_eq!(tracker.update(sample).current, RepPhase::Down);
        }
        assert!(tracker.update(170.0).rep_completed);
    }

    #[test]
    fn test_rising_trigger_for_abduction() {
        let mut tracker = PhaseTracker::new(PhaseThresholds::above(120.0, 50.0), 4, 5.0);
        let reps = feed(&mut tracker, &[20.0, 90.0, 160.0, 90.0, 20.0, 160.0, 20.0]);
        assert_eq!(reps, 2);
    }

    #[test]
    fn test_reset_returns_to_rest() {
        let mut tracker = push_up_tracker();
        tracker.update(80.0);
        tracker.reset();

        assert_eq!(tracker.phase(), RepPhase::Up);
        assert_eq!(tracker.samples().count(), 0);
    }
}
