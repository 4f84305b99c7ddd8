//! Wheel segment geometry
//!
//! Segments are equal slices of the full turn that rotate rigidly with the wheel.
//! Segment `i` covers `[i * extent + rotation, (i + 1) * extent + rotation)` mod 360 in
//! the wheel frame (0° at 3 o'clock, 270° at the top). Membership is decided by
//! `index_at` alone, which the selection resolver also uses, so every position belongs
//! to exactly one segment, even at float boundaries.

use super::colors::Color;
use crate::consts::*;
use crate::normalize_degrees;

/// One option's slice of the wheel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// Index into the option list
    pub option_index: usize,
    /// Start angle (degrees, normalized to [0, 360))
    pub start_angle: f64,
    /// Angular size (degrees)
    pub extent_angle: f64,
    /// Wheel rotation this segment was laid out at
    pub rotation: f64,
    /// Number of segments on the wheel
    pub option_count: usize,
}

impl Segment {
    /// Angle halfway through the segment (label anchor direction)
    pub fn mid_angle(&self) -> f64 {
        normalize_degrees(self.start_angle + self.extent_angle / 2.0)
    }

    /// End angle (normalized, so may be smaller than the start)
    pub fn end_angle(&self) -> f64 {
        normalize_degrees(self.start_angle + self.extent_angle)
    }

    /// Check if a wheel-frame position falls inside this segment (start inclusive)
    pub fn contains(&self, position: f64) -> bool {
        index_at(position, self.rotation, self.option_count) == Some(self.option_index)
    }
}

/// Angular size of each segment for `count` options
#[inline]
pub fn segment_extent(count: usize) -> f64 {
    FULL_TURN / count as f64
}

/// Index of the segment covering a wheel-frame position at the given rotation
///
/// `floor(((position - rotation) mod 360) / extent)`, clamped to the last segment.
pub fn index_at(position: f64, rotation: f64, count: usize) -> Option<usize> {
    if count == 0 {
        return None;
    }
    let offset = normalize_degrees(position - rotation);
    let index = (offset / segment_extent(count)).floor() as usize;
    Some(index.min(count - 1))
}

/// Lay out `count` equal segments at the given wheel rotation
pub fn segments_for(count: usize, rotation: f64) -> Vec<Segment> {
    if count == 0 {
        return Vec::new();
    }
    let extent = segment_extent(count);
    (0..count)
        .map(|i| Segment {
            option_index: i,
            start_angle: normalize_degrees(i as f64 * extent + rotation),
            extent_angle: extent,
            rotation,
            option_count: count,
        })
        .collect()
}

/// Find the segment covering a wheel-frame position
pub fn segment_at(segments: &[Segment], position: f64) -> Option<&Segment> {
    segments.iter().find(|s| s.contains(position))
}

/// Label tone with the better contrast against a background
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextTone {
    Light,
    Dark,
}

impl TextTone {
    pub fn color(&self) -> Color {
        match self {
            TextTone::Light => Color::WHITE,
            TextTone::Dark => Color::BLACK,
        }
    }
}

/// Pick light text on dark backgrounds and dark text on light ones
pub fn text_tone_for(background: Color) -> TextTone {
    if background.brightness() < BRIGHTNESS_THRESHOLD {
        TextTone::Light
    } else {
        TextTone::Dark
    }
}
