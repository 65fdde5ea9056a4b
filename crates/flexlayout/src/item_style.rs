//! Child-level style and the external measurement capability.

use crate::axis::{Edge, FlexDirection, is_row, leading_edge, trailing_edge};
use crate::box_style::{AlignSelf, edge_value};
use crate::dimension::{Dimension, Unit};
use crate::output::MeasureParams;
use crate::scalar::{constraint_min_max, is_defined, is_undefined};

/// Whether a child takes part in layout at all.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Display {
    Flex,
    /// Excluded from layout; output geometry is forced to zero.
    None,
}

/// Whether a child participates in normal flex flow.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum PositionType {
    Relative,
    /// Taken out of flow and positioned against the finished container.
    Absolute,
}

/// Result of measuring a child's content under a set of box constraints.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MeasureOutput<Payload> {
    pub width: f32,
    pub height: f32,
    /// Distance from the content's top edge to its first baseline; NaN when
    /// the content exposes no baseline.
    pub baseline: f32,
    /// Caller-defined payload carried into the layout output.
    pub result: Payload,
}

impl<Payload: Default> MeasureOutput<Payload> {
    /// A measurement with no baseline and a default payload.
    #[inline]
    pub fn sized(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            baseline: f32::NAN,
            result: Payload::default(),
        }
    }
}

/// External content measurement supplied per child.
///
/// `measure` must be a pure function of its inputs — the caching layer
/// assumes that identical constraints reproduce identical results. It may
/// recursively run layout for a nested container. `baseline` is optional;
/// when absent the algorithm falls back to the measured baseline and then to
/// the measured height.
pub trait Measurable<Payload> {
    fn measure(
        &self,
        constraints: MeasureParams,
        owner_width: f32,
        owner_height: f32,
    ) -> MeasureOutput<Payload>;

    fn baseline(&self, _width: f32, _height: f32) -> Option<f32> {
        None
    }
}

/// Style of one flex child, read-only during layout.
///
/// All `f32` fields use NaN for "unset". Children are identified positionally:
/// the output mirrors the input sequence by index.
pub struct FlexItemStyle<'content, Payload> {
    /// Shorthand flex factor; expands to grow/shrink defaults when the
    /// explicit factors are unset.
    pub flex: f32,
    pub flex_grow: f32,
    pub flex_shrink: f32,
    pub flex_basis: Dimension,
    /// Width-to-height ratio; NaN when unconstrained.
    pub aspect_ratio: f32,
    pub align_self: AlignSelf,
    pub position_type: PositionType,
    pub display: Display,
    pub width: Dimension,
    pub height: Dimension,
    pub min_width: Dimension,
    pub min_height: Dimension,
    pub max_width: Dimension,
    pub max_height: Dimension,
    /// Per-edge margin, indexed by [`Edge`].
    pub margin: [Dimension; 4],
    /// Per-edge inset, used only for absolute positioning.
    pub position: [Dimension; 4],
    /// Marks the child whose baseline becomes the container's baseline.
    pub is_reference_baseline: bool,
    /// Never round this child's measured size downward (text protection).
    pub enable_text_rounding: bool,
    /// The external measure/baseline capability for this child's content.
    pub content: &'content dyn Measurable<Payload>,
}

impl<Payload> Clone for FlexItemStyle<'_, Payload> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Payload> Copy for FlexItemStyle<'_, Payload> {}

impl<'content, Payload> FlexItemStyle<'content, Payload> {
    /// A relative, auto-sized item backed by the given content.
    pub fn new(content: &'content dyn Measurable<Payload>) -> Self {
        Self {
            flex: f32::NAN,
            flex_grow: f32::NAN,
            flex_shrink: f32::NAN,
            flex_basis: Dimension::AUTO,
            aspect_ratio: f32::NAN,
            align_self: AlignSelf::Auto,
            position_type: PositionType::Relative,
            display: Display::Flex,
            width: Dimension::UNDEFINED,
            height: Dimension::UNDEFINED,
            min_width: Dimension::UNDEFINED,
            min_height: Dimension::UNDEFINED,
            max_width: Dimension::UNDEFINED,
            max_height: Dimension::UNDEFINED,
            margin: [Dimension::UNDEFINED; 4],
            position: [Dimension::UNDEFINED; 4],
            is_reference_baseline: false,
            enable_text_rounding: false,
            content,
        }
    }

    /// The effective grow factor, expanding the `flex` shorthand.
    #[inline]
    pub fn resolved_flex_grow(&self) -> f32 {
        if is_defined(self.flex_grow) {
            return self.flex_grow;
        }
        if is_defined(self.flex) && self.flex > 0.0 {
            return self.flex;
        }
        0.0
    }

    /// The effective shrink factor, expanding the `flex` shorthand. Defaults
    /// to 1 per the CSS initial value.
    #[inline]
    pub fn resolved_flex_shrink(&self) -> f32 {
        if is_defined(self.flex_shrink) {
            return self.flex_shrink;
        }
        if is_defined(self.flex) && self.flex < 0.0 {
            return -self.flex;
        }
        1.0
    }

    /// True when the item can gain or lose main-axis space.
    #[inline]
    pub fn is_flexible(&self) -> bool {
        self.position_type == PositionType::Relative
            && (self.resolved_flex_grow() != 0.0 || self.resolved_flex_shrink() != 0.0)
    }

    /// Margin dimension on one edge.
    #[inline]
    pub const fn margin(&self, edge: Edge) -> Dimension {
        edge_value(&self.margin, edge)
    }

    /// Position inset on one edge.
    #[inline]
    pub const fn position(&self, edge: Edge) -> Dimension {
        edge_value(&self.position, edge)
    }

    /// True when the margin at the leading edge of `axis` is auto.
    #[inline]
    pub const fn is_leading_margin_auto(&self, axis: FlexDirection) -> bool {
        matches!(self.margin(leading_edge(axis)).unit, Unit::Auto)
    }

    /// True when the margin at the trailing edge of `axis` is auto.
    #[inline]
    pub const fn is_trailing_margin_auto(&self, axis: FlexDirection) -> bool {
        matches!(self.margin(trailing_edge(axis)).unit, Unit::Auto)
    }

    /// Resolved margin at the leading edge of an axis. Auto and unset margins
    /// resolve to zero here; a percentage of an undefined width stays
    /// undefined and must be guarded by the caller.
    #[inline]
    pub fn leading_margin(&self, axis: FlexDirection, width_size: f32) -> f32 {
        resolve_margin(self.margin(leading_edge(axis)), width_size)
    }

    /// Resolved margin at the trailing edge of an axis.
    #[inline]
    pub fn trailing_margin(&self, axis: FlexDirection, width_size: f32) -> f32 {
        resolve_margin(self.margin(trailing_edge(axis)), width_size)
    }

    /// Sum of both margins along an axis. Unresolvable components count as
    /// zero so the sum stays usable in arithmetic. Auto margins also count as
    /// zero — their share of free space is handed out during main-axis
    /// alignment, not here.
    pub fn margin_for_axis(&self, axis: FlexDirection, width_size: f32) -> f32 {
        defined_or_zero(self.leading_margin(axis, width_size))
            + defined_or_zero(self.trailing_margin(axis, width_size))
    }

    /// Offset applied to an in-flow item with explicit insets: the leading
    /// inset when defined, else the negated trailing inset, else zero.
    pub fn relative_position(&self, axis: FlexDirection, axis_size: f32) -> f32 {
        let leading = self.position(leading_edge(axis)).resolve(axis_size);
        if is_defined(leading) {
            return leading;
        }
        let trailing = self.position(trailing_edge(axis)).resolve(axis_size);
        if is_defined(trailing) {
            return -trailing;
        }
        0.0
    }

    /// Minimum size dimension along an axis.
    #[inline]
    pub const fn min_dimension(&self, axis: FlexDirection) -> Dimension {
        if is_row(axis) { self.min_width } else { self.min_height }
    }

    /// Maximum size dimension along an axis.
    #[inline]
    pub const fn max_dimension(&self, axis: FlexDirection) -> Dimension {
        if is_row(axis) { self.max_width } else { self.max_height }
    }

    /// Clamp a candidate size by the item's own min/max constraints along an
    /// axis, resolving percentages against `axis_size`.
    pub fn bound_axis(&self, axis: FlexDirection, value: f32, axis_size: f32) -> f32 {
        constraint_min_max(
            value,
            self.min_dimension(axis).resolve(axis_size),
            self.max_dimension(axis).resolve(axis_size),
        )
    }
}

/// Resolve a margin dimension: auto and unset become zero.
#[inline]
fn resolve_margin(margin: Dimension, width_size: f32) -> f32 {
    match margin.unit {
        Unit::Auto | Unit::Undefined => 0.0,
        Unit::Point | Unit::Percent => margin.resolve(width_size),
    }
}

/// Map an undefined value to zero.
#[inline]
fn defined_or_zero(value: f32) -> f32 {
    if is_undefined(value) { 0.0 } else { value }
}
