//! Absolutely positioned children against the finished container.

mod common;

use common::{FixedContent, assert_close, init_logging};
use flexlayout::{
    AlignItems, Dimension, Edge, FlexBoxStyle, FlexItemStyle, JustifyContent, PositionType,
    calculate_layout,
};

const CONTENT: FixedContent = FixedContent::new(50.0, 30.0);

fn absolute_child() -> FlexItemStyle<'static, ()> {
    let mut child = FlexItemStyle::new(&CONTENT);
    child.position_type = PositionType::Absolute;
    child.width = Dimension::points(50.0);
    child.height = Dimension::points(30.0);
    child
}

fn square_container() -> FlexBoxStyle {
    FlexBoxStyle::default()
}

fn layout_one(child: FlexItemStyle<'static, ()>) -> (f32, f32, f32, f32) {
    let node = square_container();
    let children = vec![child];
    let output = calculate_layout(&node, &children, 200.0, 200.0, 200.0, 200.0, 200.0);
    output
        .children
        .first()
        .map_or((f32::NAN, f32::NAN, f32::NAN, f32::NAN), |out_child| {
            (out_child.left, out_child.top, out_child.width, out_child.height)
        })
}

#[test]
fn leading_insets_win() {
    init_logging();
    let mut child = absolute_child();
    child.position[Edge::Left as usize] = Dimension::points(10.0);
    child.position[Edge::Top as usize] = Dimension::points(20.0);
    let (left, top, width, height) = layout_one(child);

    assert_close(left, 10.0, "absolute left");
    assert_close(top, 20.0, "absolute top");
    assert_close(width, 50.0, "absolute width");
    assert_close(height, 30.0, "absolute height");
}

#[test]
fn trailing_insets_measure_from_the_far_edge() {
    init_logging();
    let mut child = absolute_child();
    child.position[Edge::Right as usize] = Dimension::points(10.0);
    child.position[Edge::Bottom as usize] = Dimension::points(20.0);
    let (left, top, _, _) = layout_one(child);

    assert_close(left, 140.0, "right-inset left");
    assert_close(top, 150.0, "bottom-inset top");
}

#[test]
fn opposing_insets_derive_the_size() {
    init_logging();
    let mut child = FlexItemStyle::new(&CONTENT);
    child.position_type = PositionType::Absolute;
    child.position[Edge::Left as usize] = Dimension::points(10.0);
    child.position[Edge::Right as usize] = Dimension::points(10.0);
    child.position[Edge::Top as usize] = Dimension::points(0.0);
    child.position[Edge::Bottom as usize] = Dimension::points(0.0);
    let (left, top, width, height) = layout_one(child);

    assert_close(left, 10.0, "inset-derived left");
    assert_close(top, 0.0, "inset-derived top");
    assert_close(width, 180.0, "inset-derived width");
    assert_close(height, 200.0, "inset-derived height");
}

#[test]
fn aspect_ratio_completes_the_missing_axis() {
    init_logging();
    let mut child = FlexItemStyle::new(&CONTENT);
    child.position_type = PositionType::Absolute;
    child.width = Dimension::points(80.0);
    child.aspect_ratio = 2.0;
    child.position[Edge::Left as usize] = Dimension::points(0.0);
    child.position[Edge::Top as usize] = Dimension::points(0.0);
    let (_, _, width, height) = layout_one(child);

    assert_close(width, 80.0, "explicit width");
    assert_close(height, 40.0, "ratio-derived height");
}

#[test]
fn unset_insets_fall_back_to_container_alignment() {
    init_logging();
    let node = FlexBoxStyle {
        justify_content: JustifyContent::Center,
        align_items: AlignItems::Center,
        ..FlexBoxStyle::default()
    };
    let children = vec![absolute_child()];
    let output = calculate_layout(&node, &children, 200.0, 200.0, 200.0, 200.0, 200.0);

    let placements: Vec<(f32, f32)> = output
        .children
        .iter()
        .map(|out_child| (out_child.left, out_child.top))
        .collect();
    for (left, top) in placements {
        assert_close(left, 75.0, "centered absolute left");
        assert_close(top, 85.0, "centered absolute top");
    }
}

#[test]
fn absolute_children_do_not_affect_flow_siblings() {
    init_logging();
    let node = FlexBoxStyle {
        align_items: AlignItems::FlexStart,
        ..FlexBoxStyle::default()
    };
    let mut flow = FlexItemStyle::new(&CONTENT);
    flow.width = Dimension::points(60.0);
    flow.height = Dimension::points(30.0);
    let mut floating = absolute_child();
    floating.position[Edge::Left as usize] = Dimension::points(5.0);
    let mut second_flow = FlexItemStyle::new(&CONTENT);
    second_flow.width = Dimension::points(60.0);
    second_flow.height = Dimension::points(30.0);
    let children = vec![flow, floating, second_flow];
    let output = calculate_layout(&node, &children, 200.0, 200.0, 200.0, 200.0, 200.0);

    let lefts: Vec<f32> = output.children.iter().map(|child| child.left).collect();
    // The in-flow items pack as if the absolute child were not there; the
    // absolute child keeps its original index in the output.
    for (got, expected) in lefts.iter().zip([0.0, 5.0, 60.0]) {
        assert_close(*got, expected, "sibling left");
    }
}
