//! Pulse-timing skill check.
//!
//! A scale value sweeps between two bounds as a triangle wave driven only by
//! the time deltas passed to [`SkillCheckTimer::tick`]. The player commits
//! once; the commit passes if the scale sits inside the pass window at that
//! instant. No frame-rate or rendering dependency, so a sequence of ticks
//! followed by a commit always replays to the same outcome.

use serde::{Deserialize, Serialize};
use tracing::debug;

use motorika_core::constants::*;
use motorika_core::enums::{CatchOutcome, SkillCheckState, SweepDirection};
use motorika_core::error::SkillCheckError;

/// Bounds, pass window and sweep speed of a skill check.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SkillCheckConfig {
    pub min_scale: f64,
    pub max_scale: f64,
    /// Inclusive lower edge of the pass window.
    pub pass_low: f64,
    /// Inclusive upper edge of the pass window.
    pub pass_high: f64,
    /// Scale units per second.
    pub speed: f64,
}

impl Default for SkillCheckConfig {
    fn default() -> Self {
        Self::with_speed(DEFAULT_ROD_SPEED)
    }
}

impl SkillCheckConfig {
    /// Standard bounds and pass window with a rod-specific speed.
    pub fn with_speed(speed: f64) -> Self {
        Self {
            min_scale: SKILL_CHECK_MIN_SCALE,
            max_scale: SKILL_CHECK_MAX_SCALE,
            pass_low: SKILL_CHECK_PASS_MIN,
            pass_high: SKILL_CHECK_PASS_MAX,
            speed,
        }
    }

    pub fn validate(&self) -> Result<(), SkillCheckError> {
        let values = [
            self.min_scale,
            self.max_scale,
            self.pass_low,
            self.pass_high,
            self.speed,
        ];
        if values.iter().any(|v| !v.is_finite()) {
            return Err(SkillCheckError::InvalidConfig("values must be finite"));
        }
        if self.min_scale >= self.max_scale {
            return Err(SkillCheckError::InvalidConfig(
                "min_scale must be below max_scale",
            ));
        }
        if self.speed <= 0.0 {
            return Err(SkillCheckError::InvalidConfig("speed must be positive"));
        }
        if self.pass_low > self.pass_high {
            return Err(SkillCheckError::InvalidConfig(
                "pass_low must not exceed pass_high",
            ));
        }
        if self.pass_low < self.min_scale || self.pass_high > self.max_scale {
            return Err(SkillCheckError::InvalidConfig(
                "pass window must lie within the scale bounds",
            ));
        }
        Ok(())
    }

    /// Seconds for one full min → max → min sweep.
    pub fn period_secs(&self) -> f64 {
        2.0 * (self.max_scale - self.min_scale) / self.speed
    }
}

/// The oscillating gauge of the fishing challenge.
///
/// `tick` and `commit` are only valid while Running; in any other state they
/// fail with [`SkillCheckError::NotRunning`] and leave the timer untouched.
#[derive(Debug, Clone)]
pub struct SkillCheckTimer {
    config: SkillCheckConfig,
    scale: f64,
    direction: SweepDirection,
    state: SkillCheckState,
    outcome: Option<CatchOutcome>,
}

impl Default for SkillCheckTimer {
    fn default() -> Self {
        let config = SkillCheckConfig::default();
        Self {
            scale: config.min_scale,
            config,
            direction: SweepDirection::Growing,
            state: SkillCheckState::Idle,
            outcome: None,
        }
    }
}

impl SkillCheckTimer {
    /// Create an Idle timer with the given configuration.
    pub fn new(config: SkillCheckConfig) -> Result<Self, SkillCheckError> {
        let mut timer = Self::default();
        timer.set_config(config)?;
        Ok(timer)
    }

    /// Replace thresholds and speed. On success the timer returns to Idle;
    /// on failure it keeps its previous configuration and state.
    pub fn configure(
        &mut self,
        min_scale: f64,
        max_scale: f64,
        pass_low: f64,
        pass_high: f64,
        speed: f64,
    ) -> Result<(), SkillCheckError> {
        self.set_config(SkillCheckConfig {
            min_scale,
            max_scale,
            pass_low,
            pass_high,
            speed,
        })
    }

    pub fn set_config(&mut self, config: SkillCheckConfig) -> Result<(), SkillCheckError> {
        config.validate()?;
        self.config = config;
        self.reset();
        Ok(())
    }

    /// Begin (or restart) the sweep from the lower bound.
    pub fn start(&mut self) {
        self.scale = self.config.min_scale;
        self.direction = SweepDirection::Growing;
        self.state = SkillCheckState::Running;
        self.outcome = None;
    }

    /// Advance the sweep by `dt` seconds.
    ///
    /// Reaching the upper bound while Growing clamps there and flips to
    /// Shrinking; reaching the lower bound while Shrinking clamps and flips
    /// back. Travel left over after a bounce continues in the new direction,
    /// so the wave stays phase-exact regardless of how time is sliced.
    pub fn tick(&mut self, dt: f64) -> Result<(), SkillCheckError> {
        if self.state != SkillCheckState::Running {
            return Err(SkillCheckError::NotRunning);
        }
        if !dt.is_finite() || dt < 0.0 {
            return Err(SkillCheckError::InvalidDelta(dt));
        }

        let min = self.config.min_scale;
        let max = self.config.max_scale;
        // Whole periods leave the wave where it started.
        let mut travel = (self.config.speed * dt) % (2.0 * (max - min));

        while travel > 0.0 {
            match self.direction {
                SweepDirection::Growing => {
                    let room = max - self.scale;
                    if travel < room {
                        self.scale += travel;
                        travel = 0.0;
                    } else {
                        self.scale = max;
                        travel -= room;
                        self.direction = SweepDirection::Shrinking;
                    }
                }
                SweepDirection::Shrinking => {
                    let room = self.scale - min;
                    if travel < room {
                        self.scale -= travel;
                        travel = 0.0;
                    } else {
                        self.scale = min;
                        travel -= room;
                        self.direction = SweepDirection::Growing;
                    }
                }
            }
        }

        Ok(())
    }

    /// Stop the sweep and judge the current scale against the pass window.
    pub fn commit(&mut self) -> Result<CatchOutcome, SkillCheckError> {
        match self.state {
            SkillCheckState::Idle => return Err(SkillCheckError::NotRunning),
            SkillCheckState::Resolved => return Err(SkillCheckError::AlreadyResolved),
            SkillCheckState::Running => {}
        }

        let outcome = if self.in_pass_window() {
            CatchOutcome::Success
        } else {
            CatchOutcome::Failure
        };
        self.state = SkillCheckState::Resolved;
        self.outcome = Some(outcome);

        debug!(scale = self.scale, ?outcome, "skill check resolved");
        Ok(outcome)
    }

    /// Return to Idle from any state.
    pub fn reset(&mut self) {
        self.scale = self.config.min_scale;
        self.direction = SweepDirection::Growing;
        self.state = SkillCheckState::Idle;
        self.outcome = None;
    }

    pub fn config(&self) -> &SkillCheckConfig {
        &self.config
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn direction(&self) -> SweepDirection {
        self.direction
    }

    pub fn state(&self) -> SkillCheckState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == SkillCheckState::Running
    }

    /// Outcome of the last commit, until the next `start` or `reset`.
    pub fn outcome(&self) -> Option<CatchOutcome> {
        self.outcome
    }

    fn in_pass_window(&self) -> bool {
        self.config.pass_low <= self.scale && self.scale <= self.config.pass_high
    }
}
