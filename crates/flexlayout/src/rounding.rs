//! Pixel-grid snapping.

use crate::scalar::{floats_equal, is_defined, is_undefined};

/// Snap a layout value to the device pixel grid.
///
/// The value is scaled by `point_scale_factor`, its fractional remainder is
/// normalized into `[0, 1)` (negative values shift up by one so flooring is
/// consistent across zero), and the result is floored, ceiled, or rounded to
/// nearest with ties rounding up, then scaled back.
///
/// Callers snapping a span must round its two absolute edges and subtract
/// (`round(left + width) - round(left)`) rather than rounding the span
/// itself, otherwise adjacent boxes drift apart by a pixel.
pub fn round_value_to_pixel_grid(
    value: f32,
    point_scale_factor: f32,
    force_ceil: bool,
    force_floor: bool,
) -> f32 {
    let mut scaled = value * point_scale_factor;
    let mut fractial = scaled % 1.0;
    if fractial < 0.0 {
        fractial += 1.0;
    }
    if floats_equal(fractial, 0.0) {
        // Already on the grid.
        scaled -= fractial;
    } else if floats_equal(fractial, 1.0) {
        scaled = scaled - fractial + 1.0;
    } else if force_ceil {
        scaled = scaled - fractial + 1.0;
    } else if force_floor {
        scaled -= fractial;
    } else {
        let round_up = is_defined(fractial) && (fractial > 0.5 || floats_equal(fractial, 0.5));
        scaled = scaled - fractial + if round_up { 1.0 } else { 0.0 };
    }
    if is_undefined(scaled) || is_undefined(point_scale_factor) {
        f32::NAN
    } else {
        scaled / point_scale_factor
    }
}
