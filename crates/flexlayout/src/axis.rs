//! Axis and edge mapping for flex directions.
//!
//! The main axis follows `flex-direction`, mirrored for right-to-left layout;
//! the cross axis is the perpendicular direction. A reversed axis swaps its
//! leading and trailing physical edges.

/// Physical box edge. The discriminant doubles as the index into per-edge
/// style arrays (padding, border, margin, position).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Edge {
    Left = 0,
    Top = 1,
    Right = 2,
    Bottom = 3,
}

/// Layout direction of the container's inline content.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Direction {
    /// Resolved by the host before layout; treated as left-to-right here.
    Inherit,
    Ltr,
    Rtl,
}

/// Main-axis orientation of a flex container.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum FlexDirection {
    Row,
    RowReverse,
    Column,
    ColumnReverse,
}

/// True when the axis runs horizontally.
#[inline]
pub const fn is_row(axis: FlexDirection) -> bool {
    matches!(axis, FlexDirection::Row | FlexDirection::RowReverse)
}

/// True when the axis runs against its natural flow direction.
#[inline]
pub const fn is_reverse(axis: FlexDirection) -> bool {
    matches!(
        axis,
        FlexDirection::RowReverse | FlexDirection::ColumnReverse
    )
}

/// The edge at which content starts flowing along the axis.
#[inline]
pub const fn leading_edge(axis: FlexDirection) -> Edge {
    match axis {
        FlexDirection::Row => Edge::Left,
        FlexDirection::RowReverse => Edge::Right,
        FlexDirection::Column => Edge::Top,
        FlexDirection::ColumnReverse => Edge::Bottom,
    }
}

/// The edge at which content stops flowing along the axis.
#[inline]
pub const fn trailing_edge(axis: FlexDirection) -> Edge {
    match axis {
        FlexDirection::Row => Edge::Right,
        FlexDirection::RowReverse => Edge::Left,
        FlexDirection::Column => Edge::Bottom,
        FlexDirection::ColumnReverse => Edge::Top,
    }
}

/// Mirror row axes for right-to-left layout. Column axes are unaffected by
/// the inline direction.
#[inline]
pub const fn resolve_direction(axis: FlexDirection, direction: Direction) -> FlexDirection {
    match direction {
        Direction::Rtl => match axis {
            FlexDirection::Row => FlexDirection::RowReverse,
            FlexDirection::RowReverse => FlexDirection::Row,
            FlexDirection::Column => FlexDirection::Column,
            FlexDirection::ColumnReverse => FlexDirection::ColumnReverse,
        },
        Direction::Inherit | Direction::Ltr => axis,
    }
}

/// The axis perpendicular to `main_axis`, with row orientation resolved
/// against the inline direction. The cross axis is never `ColumnReverse`.
#[inline]
pub const fn cross_direction(main_axis: FlexDirection, direction: Direction) -> FlexDirection {
    if is_row(main_axis) {
        FlexDirection::Column
    } else {
        resolve_direction(FlexDirection::Row, direction)
    }
}
