//! Measurement caching and cross-call reuse.

mod common;

use common::{CountingContent, assert_close, init_logging};
use flexlayout::{
    AlignItems, FlexBoxStyle, FlexItemStyle, MeasureParams, calculate_layout,
    calculate_layout_with_cache,
};

fn constraints(max_width: f32) -> MeasureParams {
    MeasureParams {
        min_width: max_width,
        max_width,
        min_height: 100.0,
        max_height: 100.0,
    }
}

#[test]
fn unchanged_layout_never_remeasures() {
    init_logging();
    let content = CountingContent::new(120.0, 40.0);
    let node = FlexBoxStyle::default();
    let children = vec![FlexItemStyle::new(&content)];

    let first = calculate_layout(&node, &children, 300.0, 300.0, 100.0, 100.0, 300.0);
    let calls_after_first = content.calls();
    assert!(calls_after_first > 0, "first layout must measure");

    let second =
        calculate_layout_with_cache(&node, &children, constraints(300.0), 300.0, first);
    assert_eq!(
        content.calls(),
        calls_after_first,
        "unchanged layout must reuse every cached measurement"
    );
    assert_close(second.width, 300.0, "container width");
    let widths: Vec<f32> = second.children.iter().map(|child| child.width).collect();
    for width in widths {
        assert_close(width, 120.0, "cached child width");
    }
}

#[test]
fn tightened_bound_that_still_fits_reuses_the_cache() {
    init_logging();
    let content = CountingContent::new(120.0, 40.0);
    let node = FlexBoxStyle::default();
    let children = vec![FlexItemStyle::new(&content)];

    let first = calculate_layout(&node, &children, 300.0, 300.0, 100.0, 100.0, 300.0);
    let calls_after_first = content.calls();

    // 120 still fits under the tightened 250-point bound: the fit-content
    // measurement is monotonic and must not rerun.
    let second =
        calculate_layout_with_cache(&node, &children, constraints(250.0), 250.0, first);
    assert_eq!(
        content.calls(),
        calls_after_first,
        "tightened-but-satisfied constraints must not re-measure"
    );
    assert_close(second.width, 250.0, "tightened container width");
}

#[test]
fn loosened_bound_measures_again() {
    init_logging();
    let content = CountingContent::new(120.0, 40.0);
    let node = FlexBoxStyle::default();
    let children = vec![FlexItemStyle::new(&content)];

    let first = calculate_layout(&node, &children, 300.0, 300.0, 100.0, 100.0, 300.0);
    let calls_after_first = content.calls();

    let _second =
        calculate_layout_with_cache(&node, &children, constraints(400.0), 400.0, first);
    assert!(
        content.calls() > calls_after_first,
        "a loosened bound may change the answer and must re-measure"
    );
}

#[test]
fn within_call_cache_avoids_duplicate_measurement() {
    init_logging();
    // With no explicit sizes, the basis pass measures fit-content and the
    // cross pass asks for the exact measured size again: one call, not two.
    let content = CountingContent::new(120.0, 40.0);
    let node = FlexBoxStyle {
        align_items: AlignItems::FlexStart,
        ..FlexBoxStyle::default()
    };
    let children = vec![FlexItemStyle::new(&content)];

    let output = calculate_layout(&node, &children, 300.0, 300.0, 100.0, 100.0, 300.0);
    assert_eq!(content.calls(), 1, "basis measurement must be reused");
    let sizes: Vec<(f32, f32)> = output
        .children
        .iter()
        .map(|child| (child.width, child.height))
        .collect();
    for (width, height) in sizes {
        assert_close(width, 120.0, "measured width");
        assert_close(height, 40.0, "measured height");
    }
}
