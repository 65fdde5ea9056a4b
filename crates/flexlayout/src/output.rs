//! Layout results and the embedded measurement cache.

use crate::axis::{FlexDirection, is_row};
use crate::item_style::MeasureOutput;
use crate::rounding::round_value_to_pixel_grid;
use crate::scalar::{floats_equal, is_defined, is_undefined};

/// The exact box constraints under which a measurement was taken. Doubles as
/// the cache key for measurement reuse.
#[derive(Copy, Clone, Debug)]
pub struct MeasureParams {
    pub min_width: f32,
    pub max_width: f32,
    pub min_height: f32,
    pub max_height: f32,
}

impl MeasureParams {
    /// Constraints that pin both axes to an exact size.
    #[inline]
    pub const fn exact(width: f32, height: f32) -> Self {
        Self {
            min_width: width,
            max_width: width,
            min_height: height,
            max_height: height,
        }
    }
}

/// Geometry and cached measurement of one child, positionally matching the
/// input child sequence.
#[derive(Clone, Debug)]
pub struct Child<Payload> {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
    /// Distance from the child's top edge to its baseline; NaN when never
    /// computed (absolute or hidden children).
    pub baseline: f32,
    pub enable_text_rounding: bool,
    /// Payload returned by the child's last measurement, if any.
    pub measure_result: Option<Payload>,
    /// Constraints of the last measurement, used by [`Self::can_be_reused_for`].
    pub last_measure_params: Option<MeasureParams>,
}

impl<Payload> Default for Child<Payload> {
    fn default() -> Self {
        Self {
            left: 0.0,
            top: 0.0,
            width: 0.0,
            height: 0.0,
            baseline: f32::NAN,
            enable_text_rounding: false,
            measure_result: None,
            last_measure_params: None,
        }
    }
}

impl<Payload> Child<Payload> {
    /// Record a measurement and the constraints it was taken under.
    pub fn set_measure_output(&mut self, output: MeasureOutput<Payload>, params: MeasureParams) {
        self.width = output.width;
        self.height = output.height;
        self.baseline = output.baseline;
        self.measure_result = Some(output.result);
        self.last_measure_params = Some(params);
    }

    /// Whether the cached measurement already answers a query under the given
    /// constraints.
    ///
    /// Per axis, the cache holds when the constraints are identical, when the
    /// new constraint is exact and equals the measured size, or when the new
    /// constraint tightens the upper bound and the measured size already fits
    /// under it. Exact-match-only would be simpler and wrong: the monotonic
    /// rule is what keeps re-measurement off the hot path when containers
    /// shrink.
    pub fn can_be_reused_for(&self, params: MeasureParams) -> bool {
        let Some(last) = self.last_measure_params else {
            return false;
        };
        axis_reusable(
            last.min_width,
            last.max_width,
            self.width,
            params.min_width,
            params.max_width,
        ) && axis_reusable(
            last.min_height,
            last.max_height,
            self.height,
            params.min_height,
            params.max_height,
        )
    }

    /// Write the start-edge position of the child along an axis. On a reverse
    /// axis the flow start is the higher physical coordinate, so the physical
    /// origin backs off by the child's size.
    pub fn set_start_position_on_axis(&mut self, value: f32, axis: FlexDirection) {
        match axis {
            FlexDirection::Row => self.left = value,
            FlexDirection::RowReverse => self.left = value - self.width,
            FlexDirection::Column => self.top = value,
            FlexDirection::ColumnReverse => self.top = value - self.height,
        }
    }

    /// Write the end-edge position of the child along an axis.
    pub fn set_end_position_on_axis(&mut self, value: f32, axis: FlexDirection) {
        match axis {
            FlexDirection::Row => self.left = value - self.width,
            FlexDirection::RowReverse => self.left = value,
            FlexDirection::Column => self.top = value - self.height,
            FlexDirection::ColumnReverse => self.top = value,
        }
    }
}

/// Output of one layout call: the container's own size and baseline plus one
/// [`Child`] per input child, in input order.
///
/// The caller owns the output. Passing it back into a subsequent layout call
/// over the same child sequence reuses its cached measurements; sharing one
/// instance between concurrent calls is not supported.
#[derive(Clone, Debug)]
pub struct LayoutOutput<Payload> {
    pub width: f32,
    pub height: f32,
    /// The container's exposed baseline, from the reference baseline child of
    /// the first line; NaN when there are no children.
    pub baseline: f32,
    pub children: Vec<Child<Payload>>,
}

impl<Payload> LayoutOutput<Payload> {
    pub(crate) fn new() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
            baseline: f32::NAN,
            children: Vec::new(),
        }
    }

    /// Assign the container size in main/cross terms.
    pub(crate) fn set_size(&mut self, main_axis: FlexDirection, main_size: f32, cross_size: f32) {
        if is_row(main_axis) {
            self.width = main_size;
            self.height = cross_size;
        } else {
            self.width = cross_size;
            self.height = main_size;
        }
    }

    /// Snap the container and every child to the device pixel grid.
    ///
    /// Child spans are rounded edge-wise so that two children sharing an edge
    /// before rounding still share it afterwards. Children flagged for text
    /// rounding never round a fractional size down.
    pub(crate) fn round_to_pixel_grid(&mut self, point_scale_factor: f32) {
        if point_scale_factor == 0.0 {
            return;
        }
        self.width = round_value_to_pixel_grid(self.width, point_scale_factor, false, false);
        self.height = round_value_to_pixel_grid(self.height, point_scale_factor, false, false);

        for child in &mut self.children {
            let text = child.enable_text_rounding;
            let left = child.left;
            let top = child.top;
            let right = left + child.width;
            let bottom = top + child.height;

            let fractional_width = has_fractional_pixels(child.width, point_scale_factor);
            let fractional_height = has_fractional_pixels(child.height, point_scale_factor);

            child.left = round_value_to_pixel_grid(left, point_scale_factor, false, text);
            child.top = round_value_to_pixel_grid(top, point_scale_factor, false, text);
            child.width = round_value_to_pixel_grid(
                right,
                point_scale_factor,
                text && fractional_width,
                text && !fractional_width,
            ) - round_value_to_pixel_grid(left, point_scale_factor, false, text);
            child.height = round_value_to_pixel_grid(
                bottom,
                point_scale_factor,
                text && fractional_height,
                text && !fractional_height,
            ) - round_value_to_pixel_grid(top, point_scale_factor, false, text);
        }
    }
}

/// Whether a span leaves the pixel grid once scaled.
#[inline]
fn has_fractional_pixels(size: f32, point_scale_factor: f32) -> bool {
    let remainder = (size * point_scale_factor) % 1.0;
    !floats_equal(remainder, 0.0) && !floats_equal(remainder, 1.0)
}

/// One axis of the cache-reuse predicate.
fn axis_reusable(
    last_min: f32,
    last_max: f32,
    last_measured: f32,
    new_min: f32,
    new_max: f32,
) -> bool {
    if floats_equal(last_min, new_min) && floats_equal(last_max, new_max) {
        return true;
    }
    // An exact constraint already answered by the measured size.
    if is_defined(new_min) && floats_equal(new_min, new_max) && floats_equal(new_min, last_measured)
    {
        return true;
    }
    // A tightened upper bound the measured size still fits under.
    is_defined(new_max)
        && (is_undefined(last_max) || new_max < last_max)
        && floats_equal(last_min, new_min)
        && (last_measured < new_max || floats_equal(last_measured, new_max))
}
