//! Wheel of Choices - a spinning wheel that picks one of your options
//!
//! Core modules:
//! - `sim`: Deterministic wheel core (options, colors, layout, spin physics, selection)
//! - `renderer`: Terminal canvas and wheel drawing
//! - `ui`: Line-oriented command handling for the terminal front end
//! - `settings`: Front-end preferences loaded from JSON

pub mod error;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod ui;

pub use error::WheelError;
pub use settings::Settings;

use glam::DVec2;

/// Wheel configuration constants
pub mod consts {
    /// Initial angular velocity range (degrees per tick)
    pub const INITIAL_VELOCITY_MIN: f64 = 15.0;
    pub const INITIAL_VELOCITY_MAX: f64 = 25.0;
    /// Per-tick multiplicative velocity decay
    pub const FRICTION: f64 = 0.98;
    /// Below this speed (degrees per tick) the wheel is considered stopped
    pub const MIN_VELOCITY: f64 = 0.5;
    /// Default presentation cadence (~60 Hz)
    pub const TICK_INTERVAL_MS: u64 = 16;

    /// Degrees in a full turn
    pub const FULL_TURN: f64 = 360.0;
    /// Pointer position in the wheel frame (top of the wheel)
    pub const POINTER_ANGLE: f64 = 270.0;

    /// Label tone switches to light text below this mean channel brightness
    pub const BRIGHTNESS_THRESHOLD: f64 = 128.0;

    /// Palette saturation cycles through BASE, BASE + STEP, BASE + 2 * STEP
    pub const SATURATION_BASE: f64 = 0.7;
    pub const SATURATION_STEP: f64 = 0.1;
    /// Palette value alternates between BASE and BASE + STEP
    pub const VALUE_BASE: f64 = 0.8;
    pub const VALUE_STEP: f64 = 0.2;
}

/// Normalize an angle in degrees to [0, 360)
#[inline]
pub fn normalize_degrees(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(consts::FULL_TURN);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= consts::FULL_TURN {
        0.0
    } else {
        wrapped
    }
}

/// Convert wheel-frame polar (r, degrees) to screen offsets (x right, y down)
///
/// The wheel frame measures from 3 o'clock towards 6 o'clock, so 270° is the top.
#[inline]
pub fn polar_to_screen(r: f64, degrees: f64) -> DVec2 {
    let theta = degrees.to_radians();
    DVec2::new(r * theta.cos(), r * theta.sin())
}

/// Convert screen offsets (x right, y down) to wheel-frame polar (r, degrees)
#[inline]
pub fn screen_to_polar(offset: DVec2) -> (f64, f64) {
    let degrees = offset.y.atan2(offset.x).to_degrees();
    (offset.length(), normalize_degrees(degrees))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_degrees() {
        assert_eq!(normalize_degrees(0.0), 0.0);
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert!((normalize_degrees(-90.0) - 270.0).abs() < 1e-9);
        assert!((normalize_degrees(725.0) - 5.0).abs() < 1e-9);
        assert!(normalize_degrees(-1e-20) < 360.0);
    }

    #[test]
    fn test_pointer_is_at_top_of_screen() {
        let p = polar_to_screen(10.0, consts::POINTER_ANGLE);
        assert!(p.x.abs() < 1e-9);
        assert!((p.y + 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_screen_polar_round_trip() {
        let (r, deg) = screen_to_polar(polar_to_screen(5.0, 135.0));
        assert!((r - 5.0).abs() < 1e-9);
        assert!((deg - 135.0).abs() < 1e-9);
    }
}
