//! Container-level style: direction, wrapping, alignment, padding and border.

use crate::axis::{Direction, Edge, FlexDirection, cross_direction, leading_edge, resolve_direction, trailing_edge};
use crate::dimension::Dimension;
use crate::scalar::is_undefined;

/// Main-axis distribution of free space.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum JustifyContent {
    FlexStart,
    Center,
    FlexEnd,
    SpaceBetween,
    SpaceAround,
    SpaceEvenly,
}

/// Cross-axis alignment of items within their line.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum AlignItems {
    FlexStart,
    FlexEnd,
    Center,
    Stretch,
    Baseline,
}

/// Per-item override of the container's `align_items`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum AlignSelf {
    /// Defer to the container.
    Auto,
    FlexStart,
    FlexEnd,
    Center,
    Stretch,
    Baseline,
}

/// Cross-axis distribution of flex lines when wrapping.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum AlignContent {
    FlexStart,
    FlexEnd,
    Center,
    Stretch,
    SpaceBetween,
    SpaceAround,
    /// Accepted for completeness; line distribution treats it as `FlexStart`.
    Baseline,
}

/// Line wrapping behavior.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum FlexWrap {
    NoWrap,
    Wrap,
    WrapReverse,
}

/// Overflow behavior of the container's content box.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Overflow {
    Visible,
    Hidden,
    /// Scroll containers may grow intrinsically past an at-most constraint.
    Scroll,
}

/// Resolve an item's `align_self` against the container's `align_items`.
#[inline]
pub const fn resolve_alignment(align_self: AlignSelf, align_items: AlignItems) -> AlignItems {
    match align_self {
        AlignSelf::Auto => align_items,
        AlignSelf::FlexStart => AlignItems::FlexStart,
        AlignSelf::FlexEnd => AlignItems::FlexEnd,
        AlignSelf::Center => AlignItems::Center,
        AlignSelf::Stretch => AlignItems::Stretch,
        AlignSelf::Baseline => AlignItems::Baseline,
    }
}

/// Read one edge of a per-edge style array.
#[inline]
pub(crate) const fn edge_value(edges: &[Dimension; 4], edge: Edge) -> Dimension {
    edges[edge as usize]
}

/// Style of a flex container, read-only during layout.
#[derive(Copy, Clone, Debug)]
pub struct FlexBoxStyle {
    pub direction: Direction,
    pub flex_direction: FlexDirection,
    pub justify_content: JustifyContent,
    pub align_content: AlignContent,
    pub align_items: AlignItems,
    pub flex_wrap: FlexWrap,
    pub overflow: Overflow,
    /// Per-edge padding, indexed by [`Edge`].
    pub padding: [Dimension; 4],
    /// Per-edge border width, indexed by [`Edge`].
    pub border: [Dimension; 4],
    /// Device pixels per layout point, used by pixel-grid rounding. Zero
    /// disables rounding.
    pub point_scale_factor: f32,
}

impl Default for FlexBoxStyle {
    fn default() -> Self {
        Self {
            direction: Direction::Inherit,
            flex_direction: FlexDirection::Row,
            justify_content: JustifyContent::FlexStart,
            align_content: AlignContent::FlexStart,
            align_items: AlignItems::Stretch,
            flex_wrap: FlexWrap::NoWrap,
            overflow: Overflow::Visible,
            padding: [Dimension::UNDEFINED; 4],
            border: [Dimension::UNDEFINED; 4],
            point_scale_factor: 1.0,
        }
    }
}

impl FlexBoxStyle {
    /// The container's main axis: `flex_direction` mirrored for RTL layout.
    #[inline]
    pub const fn main_axis(&self) -> FlexDirection {
        resolve_direction(self.flex_direction, self.direction)
    }

    /// The container's cross axis.
    #[inline]
    pub const fn cross_axis(&self) -> FlexDirection {
        cross_direction(self.main_axis(), self.direction)
    }

    /// Padding dimension on one edge.
    #[inline]
    pub const fn padding(&self, edge: Edge) -> Dimension {
        edge_value(&self.padding, edge)
    }

    /// Border dimension on one edge.
    #[inline]
    pub const fn border(&self, edge: Edge) -> Dimension {
        edge_value(&self.border, edge)
    }

    /// Resolved padding plus border on one edge. Undefined components count
    /// as zero and negative resolutions are clamped away.
    pub fn padding_and_border(&self, edge: Edge, owner_width: f32) -> f32 {
        resolved_or_zero(self.padding(edge), owner_width) + resolved_or_zero(self.border(edge), owner_width)
    }

    /// Resolved padding plus border at the leading edge of an axis.
    #[inline]
    pub fn leading_padding_and_border(&self, axis: FlexDirection, owner_width: f32) -> f32 {
        self.padding_and_border(leading_edge(axis), owner_width)
    }

    /// Resolved padding plus border at the trailing edge of an axis.
    #[inline]
    pub fn trailing_padding_and_border(&self, axis: FlexDirection, owner_width: f32) -> f32 {
        self.padding_and_border(trailing_edge(axis), owner_width)
    }

    /// Resolved padding alone at the leading edge of an axis.
    #[inline]
    pub fn leading_padding(&self, axis: FlexDirection, owner_width: f32) -> f32 {
        resolved_or_zero(self.padding(leading_edge(axis)), owner_width)
    }
}

/// Resolve a dimension, mapping undefined and negative results to zero.
#[inline]
fn resolved_or_zero(dimension: Dimension, owner_size: f32) -> f32 {
    let resolved = dimension.resolve(owner_size);
    if is_undefined(resolved) || resolved < 0.0 {
        0.0
    } else {
        resolved
    }
}
