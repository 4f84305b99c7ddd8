//! Selection resolver
//!
//! Maps the wheel's resting angle to the segment under the pointer: the segment that
//! contains `POINTER_ANGLE` when the wheel is rotated by the final angle. Goes through
//! `layout::index_at`, the same test the drawn segments use.

use super::layout::index_at;
use crate::consts::*;

/// Index of the winning option, or `None` for an empty wheel
pub fn resolve(final_angle: f64, option_count: usize) -> Option<usize> {
    index_at(POINTER_ANGLE, final_angle, option_count)
}
