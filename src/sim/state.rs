//! Wheel session state
//!
//! The single owner of the option list, its palette, the spin physics and the seeded
//! RNG. Front ends send commands, read state each frame and drain `WheelEvent`s.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::colors::{Color, generate_colors};
use super::layout::{Segment, segments_for};
use super::options::OptionList;
use super::physics::{SpinPhysics, SpinState};
use super::resolve::resolve;
use crate::error::WheelError;

/// The option picked by a finished spin
#[derive(Debug, Clone, PartialEq)]
pub struct Winner {
    pub index: usize,
    pub label: String,
    pub color: Color,
    /// Wheel rotation the spin came to rest at
    pub final_angle: f64,
}

/// Notifications for the front end
#[derive(Debug, Clone, PartialEq)]
pub enum WheelEvent {
    OptionAdded { index: usize, label: String },
    OptionsCleared,
    SpinStarted { velocity: f64 },
    SpinCompleted(Winner),
}

/// Complete wheel state (deterministic given the seed and the command sequence)
#[derive(Debug, Clone)]
pub struct Session {
    /// Seed the RNG was created from
    pub seed: u64,
    rng: Pcg32,
    options: OptionList,
    /// Always index-aligned with `options`
    colors: Vec<Color>,
    physics: SpinPhysics,
    last_winner: Option<Winner>,
    events: Vec<WheelEvent>,
}

impl Session {
    /// Create an empty session with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            options: OptionList::new(),
            colors: Vec::new(),
            physics: SpinPhysics::new(),
            last_winner: None,
            events: Vec::new(),
        }
    }

    pub fn options(&self) -> &OptionList {
        &self.options
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn spin_state(&self) -> &SpinState {
        self.physics.state()
    }

    pub fn angle(&self) -> f64 {
        self.physics.angle()
    }

    pub fn is_spinning(&self) -> bool {
        self.physics.is_spinning()
    }

    /// Spinning is possible (what a spin button's enabled state should follow)
    pub fn can_spin(&self) -> bool {
        !self.options.is_empty() && !self.is_spinning()
    }

    /// Ticks taken by the current or most recent spin
    pub fn spin_ticks(&self) -> u32 {
        self.physics.ticks()
    }

    pub fn last_winner(&self) -> Option<&Winner> {
        self.last_winner.as_ref()
    }

    /// Segment geometry at the current rotation
    pub fn segments(&self) -> Vec<Segment> {
        segments_for(self.options.len(), self.physics.angle())
    }

    /// Take all pending notifications
    pub fn drain_events(&mut self) -> Vec<WheelEvent> {
        std::mem::take(&mut self.events)
    }

    /// Add an option to the end of the wheel
    pub fn add_option(&mut self, label: &str) -> Result<usize, WheelError> {
        if self.is_spinning() {
            return Err(WheelError::Locked);
        }
        let index = self.options.add(label)?;
        self.refresh_colors();

        let label = self.options.get(index).unwrap_or_default().to_string();
        log::debug!("Added option {} ({:?})", index, label);
        self.events.push(WheelEvent::OptionAdded { index, label });
        Ok(index)
    }

    /// Remove every option (no-op when already empty)
    pub fn clear_options(&mut self) -> Result<(), WheelError> {
        if self.is_spinning() {
            return Err(WheelError::Locked);
        }
        if self.options.is_empty() {
            return Ok(());
        }
        self.options.clear();
        self.refresh_colors();
        self.last_winner = None;

        log::debug!("Cleared options");
        self.events.push(WheelEvent::OptionsCleared);
        Ok(())
    }

    /// Kick the wheel with a random velocity
    pub fn start_spin(&mut self) -> Result<f64, WheelError> {
        let velocity = self.physics.start(self.options.len(), &mut self.rng)?;
        self.on_spin_started(velocity);
        Ok(velocity)
    }

    /// Kick the wheel with a known velocity
    ///
    /// Returns the velocity the wheel was launched with (negative input launches at zero).
    pub fn start_spin_with_velocity(&mut self, velocity: f64) -> Result<f64, WheelError> {
        let velocity = self
            .physics
            .start_with_velocity(self.options.len(), velocity)?;
        self.on_spin_started(velocity);
        Ok(velocity)
    }

    fn on_spin_started(&mut self, velocity: f64) {
        self.last_winner = None;
        log::info!(
            "Spin started at {:.2}°/tick with {} options",
            velocity,
            self.options.len()
        );
        self.events.push(WheelEvent::SpinStarted { velocity });
    }

    /// Advance the spin by one frame
    ///
    /// Returns the winner on the tick the wheel comes to rest.
    pub fn tick(&mut self) -> Option<Winner> {
        let final_angle = self.physics.tick()?;
        let winner = self.winner_at(final_angle)?;

        log::info!(
            "Spin stopped after {} ticks at {:.2}°: {}",
            self.physics.ticks(),
            final_angle,
            winner.label
        );
        self.last_winner = Some(winner.clone());
        self.events.push(WheelEvent::SpinCompleted(winner.clone()));
        Some(winner)
    }

    /// Option under the pointer if the wheel rested at `angle`
    pub fn winner_at(&self, angle: f64) -> Option<Winner> {
        let index = resolve(angle, self.options.len())?;
        Some(Winner {
            index,
            label: self.options.get(index)?.to_string(),
            color: *self.colors.get(index)?,
            final_angle: angle,
        })
    }

    /// Rest the wheel at a given rotation (ignored while spinning)
    pub fn set_angle(&mut self, angle: f64) {
        self.physics.set_angle(angle);
    }

    fn refresh_colors(&mut self) {
        self.colors = generate_colors(self.options.len());
    }
}
