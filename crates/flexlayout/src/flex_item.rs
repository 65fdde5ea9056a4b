//! Per-item transient layout state.

use crate::axis::FlexDirection;
use crate::box_style::AlignItems;
use crate::dimension::{Dimension, Unit};
use crate::item_style::FlexItemStyle;
use crate::scalar::{constraint_min_max, float_max, is_defined, is_undefined};

/// An inclusive `[min, max]` measurement range along one axis. Either bound
/// may be undefined.
#[derive(Copy, Clone, Debug)]
pub(crate) struct SizeRange {
    pub min: f32,
    pub max: f32,
}

impl SizeRange {
    /// Both bounds unconstrained.
    pub(crate) const UNDEFINED: Self = Self {
        min: f32::NAN,
        max: f32::NAN,
    };

    /// A degenerate range pinning the size to one value.
    #[inline]
    pub(crate) const fn exact(value: f32) -> Self {
        Self {
            min: value,
            max: value,
        }
    }
}

/// Inputs for [`FlexItem::cross_size_range`] that are uniform across a line.
#[derive(Copy, Clone, Debug)]
pub(crate) struct CrossSizeContext {
    pub main_axis_is_row: bool,
    pub cross_axis: FlexDirection,
    pub align: AlignItems,
    pub available_inner_cross_dim: f32,
    pub available_inner_width: f32,
    pub exact_cross_dim: bool,
    pub single_line: bool,
    pub flex_basis_overflows: bool,
}

/// Transient algorithm state for one in-flow child. Created fresh per layout
/// call, mutated through the passes, and discarded with the call.
pub(crate) struct FlexItem<'item, Payload> {
    /// Back-reference into the original child sequence.
    pub index: usize,
    pub style: &'item FlexItemStyle<'item, Payload>,
    /// The style width with `min == max` collapsed to the fixed dimension.
    pub resolved_width: Dimension,
    /// The style height with `min == max` collapsed to the fixed dimension.
    pub resolved_height: Dimension,
    /// Hypothetical main size before flexing, set by the basis pass.
    pub computed_flex_basis: f32,
    /// Final main size, set by flexible-length resolution.
    pub target_main_size: f32,
}

impl<'item, Payload> FlexItem<'item, Payload> {
    pub(crate) fn new(index: usize, style: &'item FlexItemStyle<'item, Payload>) -> Self {
        let resolved_width = if style.max_width.is_defined() && style.min_width == style.max_width {
            style.max_width
        } else {
            style.width
        };
        let resolved_height =
            if style.max_height.is_defined() && style.min_height == style.max_height {
                style.max_height
            } else {
                style.height
            };
        Self {
            index,
            style,
            resolved_width,
            resolved_height,
            computed_flex_basis: f32::NAN,
            target_main_size: f32::NAN,
        }
    }

    /// The measurement range for the item's cross dimension given its
    /// resolved main size, treating auto as fit-content.
    ///
    /// In order of preference: an aspect ratio derives the cross size from
    /// the main size; an unresolvable percentage leaves the range open; an
    /// exact cross size pins it; a stretchable item fills the line; anything
    /// else is measured fit-content within the available space.
    pub(crate) fn cross_size_range(&self, ctx: &CrossSizeContext) -> SizeRange {
        let style = self.style;
        let cross_dimension = if ctx.main_axis_is_row {
            self.resolved_height
        } else {
            self.resolved_width
        };

        if is_defined(style.aspect_ratio) {
            let derived = if ctx.main_axis_is_row {
                if style.aspect_ratio > 0.0 {
                    self.target_main_size / style.aspect_ratio
                } else {
                    0.0
                }
            } else {
                self.target_main_size * style.aspect_ratio
            };
            return SizeRange::exact(derived);
        }

        if cross_dimension.unit == Unit::Percent && is_undefined(ctx.available_inner_cross_dim) {
            return SizeRange::UNDEFINED;
        }

        let resolved = cross_dimension.resolve(ctx.available_inner_cross_dim);
        if is_defined(resolved) {
            return SizeRange::exact(style.bound_axis(
                ctx.cross_axis,
                resolved,
                ctx.available_inner_cross_dim,
            ));
        }

        let margin = style.margin_for_axis(ctx.cross_axis, ctx.available_inner_width);
        if ctx.align == AlignItems::Stretch
            && !style.is_leading_margin_auto(ctx.cross_axis)
            && !style.is_trailing_margin_auto(ctx.cross_axis)
            && ctx.exact_cross_dim
            && (ctx.single_line || !ctx.flex_basis_overflows)
        {
            let stretched = float_max(0.0, ctx.available_inner_cross_dim - margin);
            return SizeRange::exact(style.bound_axis(
                ctx.cross_axis,
                stretched,
                ctx.available_inner_cross_dim,
            ));
        }

        // Fit-content: measure between zero and the space left in the line,
        // each bound filtered through the item's own cross constraints (the
        // lower bound by both, the upper bound by the maximum only).
        let min_cross = style
            .min_dimension(ctx.cross_axis)
            .resolve(ctx.available_inner_cross_dim);
        let max_cross = style
            .max_dimension(ctx.cross_axis)
            .resolve(ctx.available_inner_cross_dim);

        let min_raw = if is_defined(ctx.available_inner_cross_dim) {
            0.0
        } else {
            f32::NAN
        };
        let max_raw = if is_undefined(ctx.available_inner_cross_dim)
            || ctx.available_inner_cross_dim <= 0.0
        {
            f32::NAN
        } else {
            float_max(0.0, ctx.available_inner_cross_dim - margin)
        };

        SizeRange {
            min: constraint_min_max(min_raw, min_cross, max_cross),
            max: bound_by_max(max_raw, max_cross),
        }
    }
}

/// Clamp from above only; an undefined value snaps to a defined maximum.
#[inline]
fn bound_by_max(value: f32, max_value: f32) -> f32 {
    if is_defined(max_value) && (is_undefined(value) || value > max_value) {
        max_value
    } else {
        value
    }
}
