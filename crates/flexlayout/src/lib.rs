//! FlexLayout — a pure CSS Flexbox layout engine.
//! Spec: <https://www.w3.org/TR/css-flexbox-1/>
//!
//! Computes positions and sizes for a flat sequence of children inside one
//! flex container, given already-resolved style values and a per-child
//! measurement capability. Nested trees are laid out by recursion: a child's
//! [`Measurable`] runs [`calculate_layout`] for its own children.
//!
//! Missing numeric values are NaN throughout, never a wrapped option; the
//! algorithm is synchronous, reentrant, and keeps no state between calls
//! apart from the measurement cache a caller may carry in a retained
//! [`LayoutOutput`].

mod algorithm;
mod axis;
mod box_style;
mod dimension;
mod flex_item;
mod flex_line;
mod item_style;
mod output;
mod rounding;
mod scalar;

pub use algorithm::{calculate_layout, calculate_layout_with_cache};
pub use axis::{
    Direction, Edge, FlexDirection, cross_direction, is_reverse, is_row, leading_edge,
    resolve_direction, trailing_edge,
};
pub use box_style::{
    AlignContent, AlignItems, AlignSelf, FlexBoxStyle, FlexWrap, JustifyContent, Overflow,
    resolve_alignment,
};
pub use dimension::{Dimension, Unit};
pub use item_style::{Display, FlexItemStyle, Measurable, MeasureOutput, PositionType};
pub use output::{Child, LayoutOutput, MeasureParams};
pub use rounding::round_value_to_pixel_grid;
pub use scalar::{
    constraint_min, constraint_min_max, float_max, float_min, floats_equal, is_defined,
    is_undefined,
};
