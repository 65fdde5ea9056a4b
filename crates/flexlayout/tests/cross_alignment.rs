//! Cross-axis alignment, stretching, and baseline handling.

mod common;

use common::{FixedContent, TextLikeContent, assert_close, init_logging};
use flexlayout::{
    AlignItems, AlignSelf, Dimension, Edge, FlexBoxStyle, FlexItemStyle, calculate_layout,
};

const CONTENT: FixedContent = FixedContent::new(0.0, 40.0);

fn fixed_child(width: f32, height: f32) -> FlexItemStyle<'static, ()> {
    let mut child = FlexItemStyle::new(&CONTENT);
    child.width = Dimension::points(width);
    child.height = Dimension::points(height);
    child
}

fn row_with_align(align: AlignItems) -> FlexBoxStyle {
    FlexBoxStyle {
        align_items: align,
        ..FlexBoxStyle::default()
    }
}

fn top_of_single_child(align: AlignItems) -> f32 {
    let node = row_with_align(align);
    let children = vec![fixed_child(50.0, 40.0)];
    let output = calculate_layout(&node, &children, 300.0, 300.0, 100.0, 100.0, 300.0);
    output.children.first().map_or(f32::NAN, |child| child.top)
}

#[test]
fn align_items_offsets() {
    init_logging();
    assert_close(top_of_single_child(AlignItems::FlexStart), 0.0, "flex-start top");
    assert_close(top_of_single_child(AlignItems::Center), 30.0, "center top");
    assert_close(top_of_single_child(AlignItems::FlexEnd), 60.0, "flex-end top");
}

#[test]
fn stretch_fills_the_container_cross_axis() {
    init_logging();
    let node = row_with_align(AlignItems::Stretch);
    let mut child = FlexItemStyle::new(&CONTENT);
    child.width = Dimension::points(50.0);
    // Height left open so stretch applies.
    let children = vec![child];
    let output = calculate_layout(&node, &children, 300.0, 300.0, 100.0, 100.0, 300.0);

    let sizes: Vec<(f32, f32)> = output
        .children
        .iter()
        .map(|out_child| (out_child.top, out_child.height))
        .collect();
    for (top, height) in sizes {
        assert_close(top, 0.0, "stretched top");
        assert_close(height, 100.0, "stretched height");
    }
}

#[test]
fn explicit_cross_size_defeats_stretch() {
    init_logging();
    let node = row_with_align(AlignItems::Stretch);
    let children = vec![fixed_child(50.0, 40.0)];
    let output = calculate_layout(&node, &children, 300.0, 300.0, 100.0, 100.0, 300.0);

    let heights: Vec<f32> = output.children.iter().map(|child| child.height).collect();
    for height in heights {
        assert_close(height, 40.0, "explicit height kept");
    }
}

#[test]
fn align_self_overrides_the_container() {
    init_logging();
    let node = row_with_align(AlignItems::FlexStart);
    let mut first = fixed_child(50.0, 40.0);
    first.align_self = AlignSelf::FlexEnd;
    let second = fixed_child(50.0, 40.0);
    let children = vec![first, second];
    let output = calculate_layout(&node, &children, 300.0, 300.0, 100.0, 100.0, 300.0);

    let tops: Vec<f32> = output.children.iter().map(|child| child.top).collect();
    for (got, expected) in tops.iter().zip([60.0, 0.0]) {
        assert_close(*got, expected, "align-self top");
    }
}

#[test]
fn auto_cross_margins_center_the_item() {
    init_logging();
    let node = row_with_align(AlignItems::FlexStart);
    let mut child = fixed_child(50.0, 40.0);
    child.margin[Edge::Top as usize] = Dimension::AUTO;
    child.margin[Edge::Bottom as usize] = Dimension::AUTO;
    let children = vec![child];
    let output = calculate_layout(&node, &children, 300.0, 300.0, 100.0, 100.0, 300.0);

    let tops: Vec<f32> = output.children.iter().map(|out_child| out_child.top).collect();
    for top in tops {
        assert_close(top, 30.0, "auto cross margins center");
    }
}

#[test]
fn baselines_align_across_the_line() {
    init_logging();
    let short = TextLikeContent {
        width: 50.0,
        height: 40.0,
        ascent: 30.0,
    };
    let tall = TextLikeContent {
        width: 50.0,
        height: 60.0,
        ascent: 50.0,
    };
    let node = row_with_align(AlignItems::Baseline);
    let children = vec![FlexItemStyle::new(&short), FlexItemStyle::new(&tall)];
    let output = calculate_layout(&node, &children, 300.0, 300.0, f32::NAN, f32::NAN, 300.0);

    // Both baselines land on the line reference of 50.
    let tops: Vec<f32> = output.children.iter().map(|child| child.top).collect();
    for (got, expected) in tops.iter().zip([20.0, 0.0]) {
        assert_close(*got, expected, "baseline-aligned top");
    }
    // The shared ascent of 50 plus the deepest descent of 10 sizes the line.
    assert_close(output.height, 60.0, "baseline line height");
    assert_close(output.baseline, 30.0, "container baseline");
}

#[test]
fn reference_baseline_child_sets_the_container_baseline() {
    init_logging();
    let first = TextLikeContent {
        width: 50.0,
        height: 40.0,
        ascent: 12.0,
    };
    let second = TextLikeContent {
        width: 50.0,
        height: 40.0,
        ascent: 33.0,
    };
    let node = row_with_align(AlignItems::FlexStart);
    let mut children = vec![FlexItemStyle::new(&first), FlexItemStyle::new(&second)];
    if let Some(reference) = children.get_mut(1) {
        reference.is_reference_baseline = true;
    }
    let output = calculate_layout(&node, &children, 300.0, 300.0, f32::NAN, f32::NAN, 300.0);

    assert_close(output.baseline, 33.0, "container baseline from reference child");
}
