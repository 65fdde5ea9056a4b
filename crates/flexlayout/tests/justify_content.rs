//! Main-axis justification across the six distribution modes.

mod common;

use common::{FixedContent, assert_close, init_logging};
use flexlayout::{Dimension, Edge, FlexBoxStyle, FlexItemStyle, JustifyContent, calculate_layout};

const CONTENT: FixedContent = FixedContent::new(0.0, 40.0);

fn two_fixed_children() -> Vec<FlexItemStyle<'static, ()>> {
    let mut first = FlexItemStyle::new(&CONTENT);
    first.width = Dimension::points(50.0);
    let mut second = FlexItemStyle::new(&CONTENT);
    second.width = Dimension::points(50.0);
    vec![first, second]
}

fn row_container(justify: JustifyContent) -> FlexBoxStyle {
    FlexBoxStyle {
        justify_content: justify,
        ..FlexBoxStyle::default()
    }
}

fn lefts(justify: JustifyContent) -> Vec<f32> {
    let node = row_container(justify);
    let children = two_fixed_children();
    let output = calculate_layout(&node, &children, 300.0, 300.0, f32::NAN, f32::NAN, 300.0);
    assert_close(output.width, 300.0, "container width");
    output.children.iter().map(|child| child.left).collect()
}

#[test]
fn center_places_items_in_the_middle() {
    init_logging();
    let node = row_container(JustifyContent::Center);
    let children = two_fixed_children();
    let output = calculate_layout(&node, &children, 300.0, 300.0, f32::NAN, f32::NAN, 300.0);

    assert_close(output.width, 300.0, "container width");
    let positions: Vec<(f32, f32)> = output
        .children
        .iter()
        .map(|child| (child.left, child.width))
        .collect();
    assert_eq!(positions.len(), 2);
    for ((left, width), (expected_left, expected_width)) in
        positions.iter().zip([(100.0, 50.0), (150.0, 50.0)])
    {
        assert_close(*left, expected_left, "child left");
        assert_close(*width, expected_width, "child width");
    }
}

#[test]
fn flex_start_packs_at_the_leading_edge() {
    init_logging();
    let positions = lefts(JustifyContent::FlexStart);
    for (got, expected) in positions.iter().zip([0.0, 50.0]) {
        assert_close(*got, expected, "flex-start left");
    }
}

#[test]
fn flex_end_packs_at_the_trailing_edge() {
    init_logging();
    let positions = lefts(JustifyContent::FlexEnd);
    for (got, expected) in positions.iter().zip([200.0, 250.0]) {
        assert_close(*got, expected, "flex-end left");
    }
}

#[test]
fn space_between_pins_the_outer_items() {
    init_logging();
    let positions = lefts(JustifyContent::SpaceBetween);
    for (got, expected) in positions.iter().zip([0.0, 250.0]) {
        assert_close(*got, expected, "space-between left");
    }
}

#[test]
fn space_around_halves_the_edge_gaps() {
    init_logging();
    let positions = lefts(JustifyContent::SpaceAround);
    for (got, expected) in positions.iter().zip([50.0, 200.0]) {
        assert_close(*got, expected, "space-around left");
    }
}

#[test]
fn space_evenly_equalizes_all_gaps() {
    init_logging();
    let positions = lefts(JustifyContent::SpaceEvenly);
    for (got, expected) in positions.iter().zip([200.0 / 3.0, 200.0 / 3.0 + 50.0 + 200.0 / 3.0]) {
        assert_close(*got, expected, "space-evenly left");
    }
}

#[test]
fn auto_margin_absorbs_free_space_before_justification() {
    init_logging();
    let node = row_container(JustifyContent::Center);
    let mut children = two_fixed_children();
    if let Some(first) = children.first_mut() {
        first.margin[Edge::Left as usize] = Dimension::AUTO;
    }
    let output = calculate_layout(&node, &children, 300.0, 300.0, f32::NAN, f32::NAN, 300.0);

    // All 200 points of free space go to the one auto margin; justification
    // never sees any of it.
    let positions: Vec<f32> = output.children.iter().map(|child| child.left).collect();
    for (got, expected) in positions.iter().zip([200.0, 250.0]) {
        assert_close(*got, expected, "auto-margin left");
    }
}

#[test]
fn grow_consumes_free_space_before_justification() {
    init_logging();
    let node = row_container(JustifyContent::Center);
    let mut children = two_fixed_children();
    for child in &mut children {
        child.flex_grow = 1.0;
    }
    let output = calculate_layout(&node, &children, 300.0, 300.0, f32::NAN, f32::NAN, 300.0);

    let spans: Vec<(f32, f32)> = output
        .children
        .iter()
        .map(|child| (child.left, child.width))
        .collect();
    for ((left, width), (expected_left, expected_width)) in
        spans.iter().zip([(0.0, 150.0), (150.0, 150.0)])
    {
        assert_close(*left, expected_left, "grown child left");
        assert_close(*width, expected_width, "grown child width");
    }
}
