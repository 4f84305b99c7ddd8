//! Spin physics
//!
//! A two-state machine. `start` kicks the wheel with a random angular velocity and
//! every `tick` advances the angle, then applies friction. The spin ends once the
//! velocity decays below `MIN_VELOCITY`. Termination depends only on that threshold
//! crossing, never on a fixed tick count.

use rand::Rng;

use crate::consts::*;
use crate::error::WheelError;
use crate::normalize_degrees;

/// Current phase of the wheel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpinPhase {
    #[default]
    Idle,
    Spinning,
}

/// Rotation state of the wheel
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SpinState {
    /// Current rotation (degrees, [0, 360))
    pub angle: f64,
    /// Degrees per tick, never negative
    pub angular_velocity: f64,
    pub phase: SpinPhase,
}

impl SpinState {
    pub fn is_spinning(&self) -> bool {
        self.phase == SpinPhase::Spinning
    }
}

/// Drives `SpinState` through start, tick and stop
#[derive(Debug, Clone, Default)]
pub struct SpinPhysics {
    state: SpinState,
    /// Ticks elapsed in the current (or last) spin
    ticks: u32,
}

impl SpinPhysics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SpinState {
        &self.state
    }

    pub fn angle(&self) -> f64 {
        self.state.angle
    }

    pub fn is_spinning(&self) -> bool {
        self.state.is_spinning()
    }

    /// Ticks taken by the current or most recent spin
    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    /// Start a spin with a velocity drawn uniformly from the initial range
    ///
    /// Returns the chosen velocity.
    pub fn start<R: Rng + ?Sized>(
        &mut self,
        option_count: usize,
        rng: &mut R,
    ) -> Result<f64, WheelError> {
        self.check_can_start(option_count)?;
        let velocity = rng.random_range(INITIAL_VELOCITY_MIN..=INITIAL_VELOCITY_MAX);
        self.launch(velocity);
        Ok(velocity)
    }

    /// Start a spin with a known velocity (replays, tests)
    ///
    /// Negative velocities launch at zero. Returns the velocity actually applied.
    pub fn start_with_velocity(
        &mut self,
        option_count: usize,
        velocity: f64,
    ) -> Result<f64, WheelError> {
        self.check_can_start(option_count)?;
        let velocity = velocity.max(0.0);
        self.launch(velocity);
        Ok(velocity)
    }

    fn check_can_start(&self, option_count: usize) -> Result<(), WheelError> {
        if self.is_spinning() {
            return Err(WheelError::AlreadySpinning);
        }
        if option_count == 0 {
            return Err(WheelError::EmptyWheel);
        }
        Ok(())
    }

    fn launch(&mut self, velocity: f64) {
        self.state.angular_velocity = velocity;
        self.state.phase = SpinPhase::Spinning;
        self.ticks = 0;
    }

    /// Advance one simulation step
    ///
    /// Returns the final angle on the tick the wheel stops, `None` otherwise.
    /// Ticking an idle wheel does nothing.
    pub fn tick(&mut self) -> Option<f64> {
        if !self.is_spinning() {
            return None;
        }

        let state = &mut self.state;
        state.angle = normalize_degrees(state.angle + state.angular_velocity);
        state.angular_velocity *= FRICTION;
        self.ticks += 1;

        if state.angular_velocity < MIN_VELOCITY {
            state.angular_velocity = 0.0;
            state.phase = SpinPhase::Idle;
            return Some(state.angle);
        }
        None
    }

    /// Set the resting angle directly (only while idle)
    pub fn set_angle(&mut self, angle: f64) {
        if !self.is_spinning() {
            self.state.angle = normalize_degrees(angle);
        }
    }
}
