//! Deterministic wheel core
//!
//! Everything that decides the outcome of a spin lives here. This module must stay pure:
//! - No timers (the front end calls `tick` at its own cadence)
//! - Seeded RNG only
//! - No rendering or terminal dependencies

pub mod colors;
pub mod layout;
pub mod options;
pub mod physics;
pub mod resolve;
pub mod state;

pub use colors::{Color, generate_colors};
pub use layout::{Segment, TextTone, index_at, segment_at, segments_for, text_tone_for};
pub use options::OptionList;
pub use physics::{SpinPhase, SpinPhysics, SpinState};
pub use resolve::resolve;
pub use state::{Session, WheelEvent, Winner};
