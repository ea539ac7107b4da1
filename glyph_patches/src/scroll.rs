// Copyright 2026 the Glyph Patches Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Marquee scrolling of laid out text.

/// Whether the text moves between frames.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ScrollState {
    /// The origin shift is fixed; layout runs once per mode switch.
    #[default]
    Static,
    /// The origin shift decreases every frame and wraps around.
    Scrolling,
}

/// Scroll parameters and the current horizontal offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollConfig {
    /// Whether [`ScrollConfig::advance`] moves the offset.
    pub state: ScrollState,
    /// The current origin shift.
    pub offset: f64,
    /// Speed multiplier, never below [`ScrollConfig::MIN_SPEED`].
    pub speed: f64,
    /// The offset never goes below this value.
    pub reset_threshold: f64,
    /// The offset the text restarts from once it reaches the threshold.
    pub restart: f64,
}

impl ScrollConfig {
    /// Speed of a fresh session.
    pub const DEFAULT_SPEED: f64 = 0.05;
    /// Lowest reachable speed.
    pub const MIN_SPEED: f64 = 0.01;
    /// Amount added or removed by one speed adjustment.
    pub const SPEED_STEP: f64 = 0.01;
    /// Offset distance per frame at speed `1.0`.
    pub const STEP_PER_SPEED: f64 = 0.1;
    /// Offset the text restarts from after wrapping.
    pub const RESTART: f64 = -0.3;

    /// A scroll config that keeps the text at `offset`.
    pub fn fixed(offset: f64, speed: f64) -> Self {
        Self {
            state: ScrollState::Static,
            offset,
            speed,
            reset_threshold: f64::NEG_INFINITY,
            restart: offset,
        }
    }

    /// A scroll config that starts at `offset` and wraps at `reset_threshold`.
    pub fn scrolling(offset: f64, speed: f64, reset_threshold: f64) -> Self {
        Self {
            state: ScrollState::Scrolling,
            offset,
            speed,
            reset_threshold,
            restart: Self::RESTART,
        }
    }

    /// Returns `true` while scrolling.
    pub fn is_scrolling(&self) -> bool {
        self.state == ScrollState::Scrolling
    }

    /// The config for the next frame.
    ///
    /// While scrolling the offset moves left by `0.1 * speed`. A step that
    /// would take it below the reset threshold snaps it to the restart value.
    #[must_use]
    pub fn advance(self) -> Self {
        if !self.is_scrolling() {
            return self;
        }
        let next = self.offset - Self::STEP_PER_SPEED * self.speed;
        let offset = if next < self.reset_threshold {
            self.restart
        } else {
            next
        };
        Self { offset, ..self }
    }

    /// Increases the speed by one step.
    #[must_use]
    pub fn speed_up(self) -> Self {
        Self {
            speed: self.speed + Self::SPEED_STEP,
            ..self
        }
    }

    /// Decreases the speed by one step, down to [`ScrollConfig::MIN_SPEED`].
    #[must_use]
    pub fn slow_down(self) -> Self {
        Self {
            speed: (self.speed - Self::SPEED_STEP).max(Self::MIN_SPEED),
            ..self
        }
    }
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self::fixed(0.0, Self::DEFAULT_SPEED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_offset_does_not_move() {
        let config = ScrollConfig::fixed(-2.7, 0.05);
        assert_eq!(config.advance(), config, "static is a fixed point");
    }

    #[test]
    fn scrolling_moves_left_by_a_tenth_of_the_speed() {
        let config = ScrollConfig::scrolling(-0.4, 0.05, -14.9499).advance();
        assert!((config.offset - -0.405).abs() < 1e-12, "{}", config.offset);
    }

    #[test]
    fn wraps_to_restart_without_crossing_the_threshold() {
        let threshold = -14.9499;
        let mut config = ScrollConfig::scrolling(-0.4, 0.05, threshold);
        let mut steps = 0;
        loop {
            config = config.advance();
            steps += 1;
            assert!(config.offset >= threshold, "below threshold at step {steps}");
            if config.offset == ScrollConfig::RESTART {
                break;
            }
            assert!(steps < 10_000, "never wrapped");
        }
        // 2909 steps reach -14.945; the next one would cross the threshold.
        assert!((2909..=2911).contains(&steps), "wrapped after {steps} steps");
        assert!((config.advance().offset - -0.305).abs() < 1e-9, "keeps scrolling");
    }

    #[test]
    fn speed_is_clamped() {
        let mut config = ScrollConfig::scrolling(-0.4, 0.05, -10.0);
        for _ in 0..10 {
            config = config.slow_down();
        }
        assert_eq!(config.speed, ScrollConfig::MIN_SPEED, "clamped at the floor");
        config = config.speed_up().speed_up();
        assert!((config.speed - 0.03).abs() < 1e-12, "{}", config.speed);
    }
}
