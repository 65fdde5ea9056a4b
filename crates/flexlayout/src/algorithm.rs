//! The flexbox layout procedure.
//!
//! A single entry point drives an ordered sequence of passes: flex-basis
//! determination, line collection, flexible-length resolution, cross sizing,
//! stretch re-measurement, main- and cross-axis alignment, multi-line content
//! alignment, final container sizing, pixel-grid rounding, and absolute
//! positioning. No pass loops back to an earlier one.

use crate::axis::{Edge, FlexDirection, is_reverse, is_row};
use crate::box_style::{
    AlignContent, AlignItems, FlexBoxStyle, FlexWrap, JustifyContent, Overflow, resolve_alignment,
};
use crate::dimension::{Dimension, Unit};
use crate::flex_item::{CrossSizeContext, FlexItem};
use crate::flex_line::FlexLine;
use crate::item_style::{Display, FlexItemStyle, PositionType};
use crate::output::{Child, LayoutOutput, MeasureParams};
use crate::scalar::{
    constraint_min, constraint_min_max, float_max, float_min, floats_equal, is_defined,
    is_undefined,
};
use log::debug;

/// Compute the layout of `children` inside a container described by `node`.
///
/// The four constraint arguments bound the container's own size; NaN means
/// unconstrained, and an equal defined min/max pins the axis exactly.
/// `owner_width` resolves the container's own percentage padding and border.
///
/// The returned output mirrors `children` one to one by index, including
/// absolute and `Display::None` children.
pub fn calculate_layout<Payload>(
    node: &FlexBoxStyle,
    children: &[FlexItemStyle<'_, Payload>],
    min_width: f32,
    max_width: f32,
    min_height: f32,
    max_height: f32,
    owner_width: f32,
) -> LayoutOutput<Payload> {
    let constraints = MeasureParams {
        min_width,
        max_width,
        min_height,
        max_height,
    };
    calculate_layout_internal(node, children, constraints, owner_width, None)
}

/// Like [`calculate_layout`], but seeded with the output of a previous call
/// over the same child sequence.
///
/// Each child's cached measurement is carried over and consulted before any
/// measure invocation, so an unchanged subtree is never re-measured. The seed
/// is ignored when the child count does not match.
pub fn calculate_layout_with_cache<Payload>(
    node: &FlexBoxStyle,
    children: &[FlexItemStyle<'_, Payload>],
    constraints: MeasureParams,
    owner_width: f32,
    previous: LayoutOutput<Payload>,
) -> LayoutOutput<Payload> {
    calculate_layout_internal(node, children, constraints, owner_width, Some(previous))
}

/// Pass-wide read-only state shared by the layout steps.
struct PassContext<'pass, Payload> {
    node: &'pass FlexBoxStyle,
    children: &'pass [FlexItemStyle<'pass, Payload>],
    owner_width: f32,
    main_axis: FlexDirection,
    cross_axis: FlexDirection,
    main_axis_is_row: bool,
    single_line: bool,
    padding_border_main: f32,
    padding_border_cross: f32,
    available_inner_width: f32,
    available_inner_height: f32,
    available_inner_cross_dim: f32,
    exact_width: bool,
    exact_height: bool,
    exact_cross_dim: bool,
}

fn calculate_layout_internal<Payload>(
    node: &FlexBoxStyle,
    children: &[FlexItemStyle<'_, Payload>],
    constraints: MeasureParams,
    owner_width: f32,
    previous: Option<LayoutOutput<Payload>>,
) -> LayoutOutput<Payload> {
    let MeasureParams {
        min_width,
        max_width,
        min_height,
        max_height,
    } = constraints;

    let main_axis = node.main_axis();
    let cross_axis = node.cross_axis();
    let main_axis_is_row = is_row(main_axis);

    let padding_and_border = [
        node.padding_and_border(Edge::Left, owner_width),
        node.padding_and_border(Edge::Top, owner_width),
        node.padding_and_border(Edge::Right, owner_width),
        node.padding_and_border(Edge::Bottom, owner_width),
    ];
    let horizontal_padding_border =
        padding_and_border[Edge::Left as usize] + padding_and_border[Edge::Right as usize];
    let vertical_padding_border =
        padding_and_border[Edge::Top as usize] + padding_and_border[Edge::Bottom as usize];
    let padding_border_main = if main_axis_is_row {
        horizontal_padding_border
    } else {
        vertical_padding_border
    };
    let padding_border_cross = if main_axis_is_row {
        vertical_padding_border
    } else {
        horizontal_padding_border
    };

    let exact_width = is_defined(min_width) && is_defined(max_width) && min_width == max_width;
    let exact_height = is_defined(min_height) && is_defined(max_height) && min_height == max_height;
    let exact_main_dim = if main_axis_is_row { exact_width } else { exact_height };
    let exact_cross_dim = if main_axis_is_row { exact_height } else { exact_width };

    let mut min_main_dim = if main_axis_is_row { min_width } else { min_height };
    let min_cross_dim = if main_axis_is_row { min_height } else { min_width };
    let max_main_dim = if main_axis_is_row { max_width } else { max_height };
    let max_cross_dim = if main_axis_is_row { max_height } else { max_width };

    let mut output = LayoutOutput::new();

    // A container without children sizes to its padding and border, clamped
    // from below only.
    if children.is_empty() {
        let main_dim = if main_axis_is_row { max_width } else { max_height };
        let cross_dim = if main_axis_is_row { max_height } else { max_width };
        let main_final = constraint_min(
            if exact_main_dim { main_dim } else { padding_border_main },
            min_main_dim,
        );
        let cross_final = constraint_min(
            if exact_cross_dim { cross_dim } else { padding_border_cross },
            min_cross_dim,
        );
        output.set_size(
            main_axis,
            if is_undefined(main_final) { 0.0 } else { main_final },
            if is_undefined(cross_final) { 0.0 } else { cross_final },
        );
        return output;
    }

    let available_inner_width = floor_at_zero(max_width - horizontal_padding_border);
    let available_inner_height = floor_at_zero(max_height - vertical_padding_border);
    let mut available_inner_main_dim = if main_axis_is_row {
        available_inner_width
    } else {
        available_inner_height
    };
    let available_inner_cross_dim = if main_axis_is_row {
        available_inner_height
    } else {
        available_inner_width
    };

    debug!(
        target: "flexlayout::algorithm",
        "[LAYOUT] children={} main_axis={:?} available_main={:.3} available_cross={:.3} exact_main={} exact_cross={}",
        children.len(),
        main_axis,
        available_inner_main_dim,
        available_inner_cross_dim,
        exact_main_dim,
        exact_cross_dim
    );

    // Hidden children never participate; absolute children wait until the
    // container's size is final. Everything else becomes a flex item, keeping
    // its original index for the output.
    let mut previous_children = previous
        .filter(|seed| seed.children.len() == children.len())
        .map(|seed| seed.children.into_iter());
    let mut flex_items: Vec<FlexItem<'_, Payload>> = Vec::with_capacity(children.len());
    let mut single_flex_child_index: Option<usize> = None;
    let mut single_flex_child_possible = true;
    for (index, child) in children.iter().enumerate() {
        if child.display != Display::None && child.position_type != PositionType::Absolute {
            flex_items.push(FlexItem::new(index, child));

            if exact_main_dim && single_flex_child_possible && child.is_flexible() {
                if single_flex_child_index.is_some()
                    || floats_equal(child.resolved_flex_grow(), 0.0)
                    || floats_equal(child.resolved_flex_shrink(), 0.0)
                {
                    // More than one flexible child, or one that cannot both
                    // grow and shrink: the fast path is off the table.
                    single_flex_child_index = None;
                    single_flex_child_possible = false;
                } else {
                    single_flex_child_index = Some(index);
                }
            }
        }
        let mut out_child: Child<Payload> = previous_children
            .as_mut()
            .and_then(Iterator::next)
            .unwrap_or_default();
        out_child.enable_text_rounding = child.enable_text_rounding;
        output.children.push(out_child);
    }

    let ctx = PassContext {
        node,
        children,
        owner_width,
        main_axis,
        cross_axis,
        main_axis_is_row,
        single_line: node.flex_wrap == FlexWrap::NoWrap,
        padding_border_main,
        padding_border_cross,
        available_inner_width,
        available_inner_height,
        available_inner_cross_dim,
        exact_width,
        exact_height,
        exact_cross_dim,
    };

    // Flex basis and hypothetical main size per item.
    let mut total_outer_flex_basis = 0.0f32;
    for item in &mut flex_items {
        if single_flex_child_index == Some(item.index) {
            // The lone flexible child gets its size from flex resolution
            // alone; measuring a basis for it would be wasted work.
            item.computed_flex_basis = 0.0;
        } else {
            compute_flex_basis(&ctx, item, available_inner_main_dim, &mut output);
        }
        total_outer_flex_basis += item.computed_flex_basis
            + item
                .style
                .margin_for_axis(main_axis, available_inner_width);
    }

    let flex_basis_overflows = if is_undefined(min_main_dim) && is_undefined(max_main_dim) {
        false
    } else {
        total_outer_flex_basis > available_inner_main_dim
    };
    let is_at_most_main_dim = is_defined(max_main_dim)
        && (is_undefined(min_main_dim)
            || floats_equal(min_main_dim, 0.0)
            || min_main_dim != max_main_dim);

    // A wrapping container whose content overflows takes its full at-most
    // size instead of hugging the first line.
    if !ctx.single_line && flex_basis_overflows && is_at_most_main_dim {
        min_main_dim = max_main_dim;
    }

    // Collect lines greedily and lay each one out on both axes.
    let mut total_line_cross_dim = 0.0f32;
    let mut max_line_main_dim = 0.0f32;
    let mut flex_lines: Vec<FlexLine<'_, Payload>> = Vec::new();

    let mut remaining_items = flex_items;
    while !remaining_items.is_empty() {
        let (break_index, main_size_consumed) = line_break_index(
            &ctx,
            &remaining_items,
            available_inner_main_dim,
        );
        let rest = remaining_items.split_off(break_index);
        let mut line = FlexLine::new(remaining_items);
        remaining_items = rest;

        // When the container's main size depends on its content, clamp the
        // available space to the violated bound, or mark the line as
        // content-sized so nothing flexes.
        let mut size_based_on_content = false;
        if is_undefined(min_main_dim) && is_undefined(max_main_dim) {
            // Unconstrained: nothing to clamp against.
        } else if !(is_defined(min_main_dim)
            && is_defined(max_main_dim)
            && min_main_dim == max_main_dim)
        {
            if main_size_consumed < min_main_dim - padding_border_main {
                available_inner_main_dim = min_main_dim - padding_border_main;
            } else if main_size_consumed > max_main_dim - padding_border_main {
                available_inner_main_dim = max_main_dim - padding_border_main;
            } else {
                size_based_on_content = true;
            }
        }

        let remaining_free_space = line.resolve_flexible_lengths(
            main_axis,
            available_inner_main_dim,
            available_inner_width,
            size_based_on_content,
        );

        let first_line = flex_lines.is_empty();
        measure_line_cross_sizes(
            &ctx,
            &mut line,
            flex_basis_overflows,
            first_line,
            &mut output,
        );
        determine_line_cross_dim(&ctx, &mut line, &output);

        let container_cross_dim = if exact_cross_dim {
            available_inner_cross_dim
        } else {
            float_max(
                constraint_min_max(
                    line.cross_dim + padding_border_cross,
                    min_cross_dim,
                    max_cross_dim,
                ),
                padding_border_cross,
            ) - padding_border_cross
        };

        stretch_line_items(&ctx, &line, container_cross_dim, &mut output);
        position_line(
            &ctx,
            &mut line,
            remaining_free_space,
            container_cross_dim,
            total_line_cross_dim,
            &mut output,
        );

        total_line_cross_dim += line.cross_dim;
        max_line_main_dim = float_max(max_line_main_dim, line.main_dim);
        flex_lines.push(line);
    }

    // Distribute leftover cross space across lines.
    if node.flex_wrap != FlexWrap::NoWrap {
        let packed_cross_dim = if exact_cross_dim {
            available_inner_cross_dim
        } else {
            total_line_cross_dim
        };
        align_content_lines(
            &ctx,
            &flex_lines,
            packed_cross_dim,
            total_line_cross_dim,
            &mut output,
        );
    }

    // Final container dimensions, clamped per the earlier exact/at-most
    // classification. Scroll containers may keep intrinsic growth beyond the
    // owner-imposed maximum.
    let is_at_most_cross_dim = is_defined(max_cross_dim)
        && (is_undefined(min_cross_dim)
            || floats_equal(min_cross_dim, 0.0)
            || min_cross_dim != max_cross_dim);

    let final_main_dim = final_axis_dim(
        node.overflow,
        available_inner_main_dim + padding_border_main,
        max_line_main_dim,
        min_main_dim,
        max_main_dim,
        is_at_most_main_dim,
        padding_border_main,
    );
    let final_cross_dim = final_axis_dim(
        node.overflow,
        available_inner_cross_dim + padding_border_cross,
        total_line_cross_dim + padding_border_cross,
        min_cross_dim,
        max_cross_dim,
        is_at_most_cross_dim,
        padding_border_cross,
    );

    output.set_size(main_axis, final_main_dim, final_cross_dim);
    output.round_to_pixel_grid(node.point_scale_factor);
    debug!(
        target: "flexlayout::algorithm",
        "[LAYOUT] lines={} final {}x{}",
        flex_lines.len(),
        output.width,
        output.height
    );

    // Absolute children read the finished container size.
    for (index, child) in children.iter().enumerate() {
        if child.position_type != PositionType::Absolute || child.display == Display::None {
            continue;
        }
        layout_absolute_child(&ctx, index, final_main_dim, final_cross_dim, &mut output);
    }

    // Hidden children were never measured; their geometry must read as zero.
    for (child, out_child) in children.iter().zip(output.children.iter_mut()) {
        if child.display == Display::None {
            out_child.width = 0.0;
            out_child.height = 0.0;
        }
    }

    output
}

/// `max(value, 0)` that lets an undefined value pass through.
#[inline]
fn floor_at_zero(value: f32) -> f32 {
    if value < 0.0 { 0.0 } else { value }
}

/// One final container axis. Exact axes keep the available extent; at-most
/// axes clamp to the content, except on scroll containers, which may keep
/// intrinsic growth up to the clamped content size.
fn final_axis_dim(
    overflow: Overflow,
    available_extent: f32,
    content_extent: f32,
    min_dim: f32,
    max_dim: f32,
    is_at_most: bool,
    padding_border: f32,
) -> f32 {
    if is_undefined(max_dim) || (overflow != Overflow::Scroll && is_at_most) {
        constraint_min_max(content_extent, min_dim, max_dim)
    } else if is_at_most && overflow == Overflow::Scroll {
        float_max(
            float_min(
                available_extent,
                constraint_min_max(content_extent, min_dim, max_dim),
            ),
            padding_border,
        )
    } else {
        available_extent
    }
}

/// Map an undefined value to zero.
#[inline]
fn defined_or_zero(value: f32) -> f32 {
    if is_undefined(value) { 0.0 } else { value }
}

/// Determine one item's flex basis: explicit basis, main-axis size, aspect
/// ratio, or a content measurement, in that order of preference.
fn compute_flex_basis<Payload>(
    ctx: &PassContext<'_, Payload>,
    item: &mut FlexItem<'_, Payload>,
    available_inner_main_dim: f32,
    output: &mut LayoutOutput<Payload>,
) {
    let style = item.style;
    let resolved_flex_basis = style.flex_basis.resolve(available_inner_main_dim);
    let resolved_width = item.resolved_width.resolve(ctx.available_inner_width);
    let resolved_height = item.resolved_height.resolve(ctx.available_inner_height);
    let cross_size = if ctx.main_axis_is_row {
        resolved_height
    } else {
        resolved_width
    };

    if is_defined(resolved_flex_basis) && is_defined(available_inner_main_dim) {
        item.computed_flex_basis = resolved_flex_basis;
    } else if ctx.main_axis_is_row && is_defined(resolved_width) {
        item.computed_flex_basis = resolved_width;
    } else if !ctx.main_axis_is_row && is_defined(resolved_height) {
        item.computed_flex_basis = resolved_height;
    } else if is_defined(style.aspect_ratio)
        && is_defined(cross_size)
        && style.flex_basis == Dimension::AUTO
    {
        item.computed_flex_basis = if ctx.main_axis_is_row {
            cross_size * style.aspect_ratio
        } else if style.aspect_ratio > 0.0 {
            cross_size / style.aspect_ratio
        } else {
            0.0
        };
    } else {
        let params = basis_measure_constraints(ctx, item, resolved_width, resolved_height);
        let Some(out_child) = output.children.get_mut(item.index) else {
            return;
        };
        if !out_child.can_be_reused_for(params) {
            let measured = style.content.measure(
                params,
                ctx.available_inner_width,
                ctx.available_inner_height,
            );
            out_child.set_measure_output(measured, params);
        }
        item.computed_flex_basis = if ctx.main_axis_is_row {
            out_child.width
        } else {
            out_child.height
        };
    }
}

/// The box constraints under which a basis measurement runs: explicit sizes
/// pin an axis, open axes get fit-content bounds (subject to the overflow
/// exemptions browsers agree on), aspect ratio and stretch pin the remaining
/// axis, and the item's own min/max filter everything at the end.
fn basis_measure_constraints<Payload>(
    ctx: &PassContext<'_, Payload>,
    item: &FlexItem<'_, Payload>,
    resolved_width: f32,
    resolved_height: f32,
) -> MeasureParams {
    let style = item.style;
    let align = resolve_alignment(style.align_self, ctx.node.align_items);

    let mut child_min_width = f32::NAN;
    let mut child_max_width = f32::NAN;
    let mut child_min_height = f32::NAN;
    let mut child_max_height = f32::NAN;

    if is_defined(resolved_width) {
        child_min_width = resolved_width;
        child_max_width = resolved_width;
    }
    if is_defined(resolved_height) {
        child_min_height = resolved_height;
        child_max_height = resolved_height;
    }

    // The W3C text is silent on overflow here, but the major engines exempt
    // the scroll axis from fit-content bounds.
    let scroll = ctx.node.overflow == Overflow::Scroll;
    if ((!ctx.main_axis_is_row && scroll) || !scroll)
        && is_undefined(resolved_width)
        && is_defined(ctx.available_inner_width)
    {
        child_min_width = 0.0;
        child_max_width = if ctx.available_inner_width <= 0.0 {
            f32::NAN
        } else {
            float_max(
                0.0,
                ctx.available_inner_width
                    - style.margin_for_axis(FlexDirection::Row, ctx.available_inner_width),
            )
        };
    }
    if ((ctx.main_axis_is_row && scroll) || !scroll)
        && is_undefined(resolved_height)
        && is_defined(ctx.available_inner_height)
    {
        child_min_height = 0.0;
        child_max_height = if ctx.available_inner_height <= 0.0 {
            f32::NAN
        } else {
            float_max(
                0.0,
                ctx.available_inner_height
                    - style.margin_for_axis(FlexDirection::Column, ctx.available_inner_width),
            )
        };
    }

    if is_defined(style.aspect_ratio) {
        if !ctx.main_axis_is_row && is_defined(resolved_width) {
            child_min_height = resolved_width / style.aspect_ratio;
            child_max_height = child_min_height;
        } else if ctx.main_axis_is_row && is_defined(resolved_height) {
            child_min_width = resolved_height * style.aspect_ratio;
            child_max_width = child_min_width;
        }
    }

    // A stretchable open cross axis is measured at exactly the stretched
    // size.
    let width_stretches = align == AlignItems::Stretch
        && !(is_defined(child_max_width) && child_min_width == child_max_width);
    if !ctx.main_axis_is_row && is_undefined(resolved_width) && ctx.exact_width && width_stretches {
        child_min_width = float_max(
            0.0,
            ctx.available_inner_width
                - style.margin_for_axis(FlexDirection::Row, ctx.available_inner_width),
        );
        child_max_width = child_min_width;
        if is_defined(style.aspect_ratio) {
            child_min_height = child_min_width / style.aspect_ratio;
            child_max_height = child_min_height;
        }
    }
    let height_stretches = align == AlignItems::Stretch
        && !(is_defined(child_max_height) && child_min_height == child_max_height);
    if ctx.main_axis_is_row && is_undefined(resolved_height) && ctx.exact_height && height_stretches
    {
        child_min_height = float_max(
            0.0,
            ctx.available_inner_height
                - style.margin_for_axis(FlexDirection::Column, ctx.available_inner_width),
        );
        child_max_height = child_min_height;
        if is_defined(style.aspect_ratio) {
            child_min_width = child_min_height * style.aspect_ratio;
            child_max_width = child_min_width;
        }
    }

    let resolved_min_width = style.min_width.resolve(ctx.available_inner_width);
    let resolved_max_width = style.max_width.resolve(ctx.available_inner_width);
    child_min_width = constraint_min_max(child_min_width, resolved_min_width, resolved_max_width);
    child_max_width = constraint_min_max(child_max_width, resolved_min_width, resolved_max_width);

    let resolved_min_height = style.min_height.resolve(ctx.available_inner_height);
    let used_min_height = defined_or_zero(resolved_min_height);
    let resolved_max_height = style.max_height.resolve(ctx.available_inner_height);
    let used_max_height = if is_defined(resolved_max_height) {
        resolved_max_height
    } else {
        f32::INFINITY
    };
    if is_undefined(child_min_height) {
        child_min_height = resolved_min_height;
    } else {
        child_min_height = child_min_height.max(used_min_height).min(used_max_height);
    }
    if is_undefined(child_max_height) {
        child_max_height = resolved_max_height;
    } else {
        child_max_height = child_max_height.max(used_min_height).min(used_max_height);
    }

    MeasureParams {
        min_width: child_min_width,
        max_width: child_max_width,
        min_height: child_min_height,
        max_height: child_max_height,
    }
}

/// How many leading items fit on the next line, and the main size they
/// consume. An item whose outer hypothetical size lands exactly on the
/// available dimension stays on the line (the break test is strictly
/// greater-than); a line never breaks before its first item.
fn line_break_index<Payload>(
    ctx: &PassContext<'_, Payload>,
    items: &[FlexItem<'_, Payload>],
    available_inner_main_dim: f32,
) -> (usize, f32) {
    let mut consumed = 0.0f32;
    let mut count = 0usize;
    for item in items {
        let bound_basis = item.style.bound_axis(
            ctx.main_axis,
            item.computed_flex_basis,
            available_inner_main_dim,
        );
        let outer_size = bound_basis
            + item
                .style
                .margin_for_axis(ctx.main_axis, ctx.available_inner_width);
        if !ctx.single_line && consumed + outer_size > available_inner_main_dim && count > 0 {
            break;
        }
        consumed += outer_size;
        count += 1;
    }
    debug!(
        target: "flexlayout::algorithm",
        "[LINE] break after {count} items, consumed {consumed:.3} of {available_inner_main_dim:.3}"
    );
    (count, consumed)
}

/// Measure every item on the line at its used main size, record baselines,
/// and pick the line's (and on the first line, the container's) reference
/// baseline.
fn measure_line_cross_sizes<Payload>(
    ctx: &PassContext<'_, Payload>,
    line: &mut FlexLine<'_, Payload>,
    flex_basis_overflows: bool,
    first_line: bool,
    output: &mut LayoutOutput<Payload>,
) {
    let mut max_baseline = 0.0f32;
    let mut baseline_child_index: Option<usize> = None;
    let mut any_baseline_aligned = false;
    let mut cumulative_height = 0.0f32;

    for item in &line.items {
        let style = item.style;
        let align = resolve_alignment(style.align_self, ctx.node.align_items);
        let cross_range = item.cross_size_range(&CrossSizeContext {
            main_axis_is_row: ctx.main_axis_is_row,
            cross_axis: ctx.cross_axis,
            align,
            available_inner_cross_dim: ctx.available_inner_cross_dim,
            available_inner_width: ctx.available_inner_width,
            exact_cross_dim: ctx.exact_cross_dim,
            single_line: ctx.single_line,
            flex_basis_overflows,
        });

        let params = if ctx.main_axis_is_row {
            MeasureParams {
                min_width: item.target_main_size,
                max_width: item.target_main_size,
                min_height: cross_range.min,
                max_height: cross_range.max,
            }
        } else {
            MeasureParams {
                min_width: cross_range.min,
                max_width: cross_range.max,
                min_height: item.target_main_size,
                max_height: item.target_main_size,
            }
        };

        let Some(out_child) = output.children.get_mut(item.index) else {
            continue;
        };
        if !out_child.can_be_reused_for(params) {
            let measured = style.content.measure(
                params,
                ctx.available_inner_width,
                ctx.available_inner_height,
            );
            out_child.set_measure_output(measured, params);
        }
        let width = out_child.width;
        let height = out_child.height;

        // Baselines stack up in column layouts: each item's baseline is
        // offset by the content above it.
        let leading_column_margin = defined_or_zero(
            style.leading_margin(FlexDirection::Column, ctx.available_inner_width),
        );
        let measured_baseline = if is_defined(out_child.baseline) {
            out_child.baseline
        } else {
            height
        };
        let content_baseline = style
            .content
            .baseline(width, height)
            .unwrap_or(measured_baseline);
        let baseline = leading_column_margin + cumulative_height + content_baseline;
        out_child.baseline = baseline;
        if !ctx.main_axis_is_row {
            cumulative_height += height;
        }

        if align == AlignItems::Baseline || style.is_reference_baseline {
            max_baseline = float_max(max_baseline, baseline);
            if !any_baseline_aligned {
                baseline_child_index = Some(item.index);
            }
            any_baseline_aligned = true;
        }
        if baseline_child_index.is_none() {
            baseline_child_index = Some(item.index);
        }
    }

    line.max_baseline = max_baseline;

    // The container's own baseline comes from the first line only.
    if first_line && let Some(reference_index) = baseline_child_index {
        let reference_baseline = output
            .children
            .get(reference_index)
            .map_or(f32::NAN, |child| child.baseline);
        output.baseline =
            ctx.node.leading_padding(FlexDirection::Column, 0.0) + reference_baseline;
    }
}

/// The cross extent of a line: the container's cross size for a single
/// non-wrapping line with an exact cross dimension, otherwise the largest
/// outer cross size, with baseline-aligned items contributing their full
/// ascent plus descent.
fn determine_line_cross_dim<Payload>(
    ctx: &PassContext<'_, Payload>,
    line: &mut FlexLine<'_, Payload>,
    output: &LayoutOutput<Payload>,
) {
    if ctx.single_line && ctx.exact_cross_dim {
        line.cross_dim = ctx.available_inner_cross_dim;
        return;
    }
    let mut cross_dim = line.cross_dim;
    for item in &line.items {
        let style = item.style;
        let Some(out_child) = output.children.get(item.index) else {
            continue;
        };
        if is_baseline_node(ctx.node, style) {
            let extent = line.max_baseline - out_child.baseline
                + out_child.height
                + style.margin_for_axis(FlexDirection::Column, ctx.available_inner_width);
            cross_dim = float_max(cross_dim, extent);
        } else {
            let cross_size = if is_row(ctx.cross_axis) {
                out_child.width
            } else {
                out_child.height
            };
            cross_dim = float_max(
                cross_dim,
                cross_size
                    + style.leading_margin(ctx.cross_axis, ctx.available_inner_width)
                    + style.trailing_margin(ctx.cross_axis, ctx.available_inner_width),
            );
        }
    }
    line.cross_dim = cross_dim;
}

/// Whether baseline alignment applies to this child (row containers only).
fn is_baseline_node<Payload>(node: &FlexBoxStyle, style: &FlexItemStyle<'_, Payload>) -> bool {
    is_row(node.main_axis())
        && resolve_alignment(style.align_self, node.align_items) == AlignItems::Baseline
}

/// Re-measure stretchable items whose cross size is still open so they fill
/// the line's cross dimension (or follow their aspect ratio).
fn stretch_line_items<Payload>(
    ctx: &PassContext<'_, Payload>,
    line: &FlexLine<'_, Payload>,
    container_cross_dim: f32,
    output: &mut LayoutOutput<Payload>,
) {
    for item in &line.items {
        let style = item.style;
        let align = resolve_alignment(style.align_self, ctx.node.align_items);
        let cross_dimension = if is_row(ctx.cross_axis) {
            item.resolved_width
        } else {
            item.resolved_height
        };
        let needs_stretch = align == AlignItems::Stretch
            && !style.is_leading_margin_auto(ctx.cross_axis)
            && !style.is_trailing_margin_auto(ctx.cross_axis)
            && is_undefined(cross_dimension.resolve(ctx.available_inner_cross_dim));
        if !needs_stretch {
            continue;
        }

        let Some(out_child) = output.children.get_mut(item.index) else {
            continue;
        };
        let mut child_main_size = if ctx.main_axis_is_row {
            out_child.width
        } else {
            out_child.height
        };
        let child_cross_size = if is_undefined(style.aspect_ratio) {
            container_cross_dim
                - style.margin_for_axis(ctx.cross_axis, ctx.available_inner_width)
        } else if ctx.main_axis_is_row {
            child_main_size / style.aspect_ratio
        } else {
            child_main_size * style.aspect_ratio
        };

        let main_inner = if ctx.main_axis_is_row {
            ctx.available_inner_width
        } else {
            ctx.available_inner_height
        };
        let cross_inner = if ctx.main_axis_is_row {
            ctx.available_inner_height
        } else {
            ctx.available_inner_width
        };
        child_main_size = constraint_min_max(
            child_main_size,
            style.min_dimension(ctx.main_axis).resolve(main_inner),
            style.max_dimension(ctx.main_axis).resolve(main_inner),
        );
        let child_cross_size = constraint_min_max(
            child_cross_size,
            style.min_dimension(ctx.cross_axis).resolve(cross_inner),
            style.max_dimension(ctx.cross_axis).resolve(cross_inner),
        );

        let mut child_width = if ctx.main_axis_is_row {
            child_main_size
        } else {
            child_cross_size
        };
        let mut child_height = if ctx.main_axis_is_row {
            child_cross_size
        } else {
            child_main_size
        };

        // With multiple lines and no content stretching, the cross axis must
        // not grow past what the line measured.
        let cross_axis_does_not_grow =
            ctx.node.align_content != AlignContent::Stretch && !ctx.single_line;
        if is_undefined(child_width) || (!ctx.main_axis_is_row && cross_axis_does_not_grow) {
            child_width = f32::NAN;
        }
        if is_undefined(child_height) || (ctx.main_axis_is_row && cross_axis_does_not_grow) {
            child_height = f32::NAN;
        }

        let params = MeasureParams {
            min_width: child_width,
            max_width: child_width,
            min_height: child_height,
            max_height: child_height,
        };
        if !out_child.can_be_reused_for(params) {
            let measured = style.content.measure(
                params,
                ctx.available_inner_width,
                ctx.available_inner_height,
            );
            out_child.set_measure_output(measured, params);
        }
    }
}

/// Main-axis justification and cross-axis alignment for one line.
fn position_line<Payload>(
    ctx: &PassContext<'_, Payload>,
    line: &mut FlexLine<'_, Payload>,
    remaining_free_space: f32,
    container_cross_dim: f32,
    total_line_cross_dim: f32,
    output: &mut LayoutOutput<Payload>,
) {
    let auto_margin_count = line
        .items
        .iter()
        .map(|item| {
            usize::from(item.style.is_leading_margin_auto(ctx.main_axis))
                + usize::from(item.style.is_trailing_margin_auto(ctx.main_axis))
        })
        .sum::<usize>() as f32;

    let leading_padding_border_main = ctx
        .node
        .leading_padding_and_border(ctx.main_axis, ctx.owner_width);
    let leading_padding_border_cross = ctx
        .node
        .leading_padding_and_border(ctx.cross_axis, ctx.owner_width);

    let items_on_line = line.items.len() as f32;

    // Justification splits into the space before the first item and the
    // space between every two items. Auto margins absorb all positive free
    // space before justify-content sees any of it.
    let absorbed_by_auto_margins = remaining_free_space > 0.0 && auto_margin_count > 0.0;
    let leading_main_dim = if absorbed_by_auto_margins {
        0.0
    } else {
        match ctx.node.justify_content {
            JustifyContent::Center => remaining_free_space / 2.0,
            JustifyContent::FlexEnd => remaining_free_space,
            JustifyContent::SpaceEvenly => remaining_free_space / (items_on_line + 1.0),
            JustifyContent::SpaceAround => remaining_free_space / items_on_line / 2.0,
            JustifyContent::FlexStart | JustifyContent::SpaceBetween => 0.0,
        }
    };
    let between_main_dim = if absorbed_by_auto_margins {
        0.0
    } else {
        match ctx.node.justify_content {
            JustifyContent::SpaceBetween => {
                if items_on_line > 1.0 {
                    float_max(remaining_free_space, 0.0) / (items_on_line - 1.0)
                } else {
                    0.0
                }
            }
            JustifyContent::SpaceEvenly => remaining_free_space / (items_on_line + 1.0),
            JustifyContent::SpaceAround => remaining_free_space / items_on_line,
            JustifyContent::FlexStart | JustifyContent::Center | JustifyContent::FlexEnd => 0.0,
        }
    };
    debug!(
        target: "flexlayout::algorithm",
        "[JUSTIFY] {:?} free={:.3} leading={:.3} between={:.3} auto_margins={}",
        ctx.node.justify_content,
        remaining_free_space,
        leading_main_dim,
        between_main_dim,
        auto_margin_count
    );

    let mut main_dim = leading_padding_border_main + leading_main_dim;

    let used_size: f32 = line
        .items
        .iter()
        .map(|item| {
            let inner_size = output.children.get(item.index).map_or(0.0, |child| {
                if ctx.main_axis_is_row {
                    child.width
                } else {
                    child.height
                }
            });
            inner_size
                + item
                    .style
                    .margin_for_axis(ctx.main_axis, ctx.available_inner_width)
        })
        .sum();
    let container_main_dim = used_size + remaining_free_space;

    let flow_is_reverse = is_reverse(ctx.main_axis);

    for item in &line.items {
        let style = item.style;
        if style.is_leading_margin_auto(ctx.main_axis) {
            main_dim += remaining_free_space / auto_margin_count;
        }

        let relative_position_main =
            style.relative_position(ctx.main_axis, ctx.available_inner_width);
        let leading_main_margin =
            style.leading_margin(ctx.main_axis, ctx.available_inner_width);
        let offset_from_line_start =
            defined_or_zero(leading_main_margin) + relative_position_main + main_dim;

        // Reverse flows start at the container's far edge and push back
        // towards zero.
        let main_start_edge = if flow_is_reverse {
            container_main_dim + ctx.padding_border_main
        } else {
            0.0
        };
        let directional_offset = if flow_is_reverse {
            -offset_from_line_start
        } else {
            offset_from_line_start
        };
        let Some(out_child) = output.children.get_mut(item.index) else {
            continue;
        };
        out_child.set_start_position_on_axis(main_start_edge + directional_offset, ctx.main_axis);

        if style.is_trailing_margin_auto(ctx.main_axis) {
            main_dim += remaining_free_space / auto_margin_count;
        }

        let main_size = if ctx.main_axis_is_row {
            out_child.width
        } else {
            out_child.height
        };
        main_dim += between_main_dim
            + main_size
            + style.margin_for_axis(ctx.main_axis, ctx.available_inner_width);

        // Cross-axis placement within the line.
        let align = resolve_alignment(style.align_self, ctx.node.align_items);
        let cross_size = if ctx.main_axis_is_row {
            out_child.height
        } else {
            out_child.width
        };
        let child_baseline = out_child.baseline;

        let leading_cross_dim = leading_padding_border_cross
            + cross_alignment_offset(
                ctx,
                style,
                align,
                container_cross_dim,
                cross_size,
                line.max_baseline,
                child_baseline,
            );

        let relative_position_cross =
            style.relative_position(ctx.cross_axis, ctx.available_inner_width);
        let leading_cross_margin =
            style.leading_margin(ctx.cross_axis, ctx.available_inner_width);
        let offset_from_line_cross_start =
            defined_or_zero(leading_cross_margin) + relative_position_cross + leading_cross_dim;
        let offset_from_container = total_line_cross_dim + offset_from_line_cross_start;

        let cross_start_edge = if ctx.cross_axis == FlexDirection::RowReverse {
            container_cross_dim + ctx.padding_border_cross
        } else {
            0.0
        };
        let directional_cross_offset = if ctx.cross_axis == FlexDirection::RowReverse {
            -offset_from_container
        } else {
            offset_from_container
        };
        out_child.set_start_position_on_axis(
            cross_start_edge + directional_cross_offset,
            ctx.cross_axis,
        );
    }

    main_dim += ctx
        .node
        .trailing_padding_and_border(ctx.main_axis, ctx.owner_width);
    line.main_dim = main_dim;
}

/// The offset of an item from its line's cross start, honoring auto cross
/// margins before the alignment keyword.
fn cross_alignment_offset<Payload>(
    ctx: &PassContext<'_, Payload>,
    style: &FlexItemStyle<'_, Payload>,
    align: AlignItems,
    container_cross_dim: f32,
    cross_size: f32,
    line_max_baseline: f32,
    child_baseline: f32,
) -> f32 {
    let leading_auto = style.is_leading_margin_auto(ctx.cross_axis);
    let trailing_auto = style.is_trailing_margin_auto(ctx.cross_axis);

    if align == AlignItems::Stretch && !leading_auto && !trailing_auto {
        return 0.0;
    }

    let remaining_cross_dim = container_cross_dim
        - cross_size
        - style.margin_for_axis(ctx.cross_axis, ctx.available_inner_width);

    if leading_auto && trailing_auto {
        return float_max(0.0, remaining_cross_dim / 2.0);
    }
    if trailing_auto {
        return 0.0;
    }
    if leading_auto {
        return float_max(0.0, remaining_cross_dim);
    }

    match align {
        AlignItems::FlexStart | AlignItems::Stretch => 0.0,
        AlignItems::FlexEnd => remaining_cross_dim,
        AlignItems::Center => remaining_cross_dim / 2.0,
        AlignItems::Baseline => {
            if ctx.main_axis_is_row {
                line_max_baseline - child_baseline
            } else {
                0.0
            }
        }
    }
}

/// Distribute leftover cross space across wrapped lines per `align_content`
/// and re-derive each item's cross position, including WrapReverse mirroring
/// and late stretching.
fn align_content_lines<Payload>(
    ctx: &PassContext<'_, Payload>,
    flex_lines: &[FlexLine<'_, Payload>],
    packed_cross_dim: f32,
    total_line_cross_dim: f32,
    output: &mut LayoutOutput<Payload>,
) {
    let remaining_align_content_dim = packed_cross_dim - total_line_cross_dim;
    let line_count = flex_lines.len() as f32;
    let lines_underflow = packed_cross_dim > total_line_cross_dim;

    let cross_dim_lead = match ctx.node.align_content {
        AlignContent::SpaceBetween => {
            if lines_underflow && line_count > 1.0 {
                remaining_align_content_dim / (line_count - 1.0)
            } else {
                0.0
            }
        }
        AlignContent::SpaceAround => {
            if lines_underflow && line_count > 1.0 {
                remaining_align_content_dim / line_count
            } else {
                0.0
            }
        }
        AlignContent::Stretch => {
            if lines_underflow {
                remaining_align_content_dim / line_count
            } else {
                0.0
            }
        }
        AlignContent::FlexStart
        | AlignContent::Baseline
        | AlignContent::FlexEnd
        | AlignContent::Center => 0.0,
    };

    let mut current_lead = ctx
        .node
        .leading_padding_and_border(ctx.cross_axis, ctx.owner_width);
    match ctx.node.align_content {
        AlignContent::FlexEnd => current_lead += remaining_align_content_dim,
        AlignContent::Center => current_lead += remaining_align_content_dim / 2.0,
        AlignContent::SpaceAround => {
            current_lead += if lines_underflow {
                remaining_align_content_dim / (2.0 * line_count)
            } else {
                remaining_align_content_dim / 2.0
            };
        }
        AlignContent::SpaceBetween
        | AlignContent::Stretch
        | AlignContent::FlexStart
        | AlignContent::Baseline => {}
    }

    for line in flex_lines {
        let line_height = line.cross_dim + cross_dim_lead;
        for item in &line.items {
            let style = item.style;
            let align = resolve_alignment(style.align_self, ctx.node.align_items);

            let (mut cross_size, child_main_size) = output
                .children
                .get(item.index)
                .map_or((0.0, 0.0), |child| {
                    if ctx.main_axis_is_row {
                        (child.height, child.width)
                    } else {
                        (child.width, child.height)
                    }
                });

            let cross_axis_start = match align {
                AlignItems::FlexStart => {
                    current_lead
                        + style.leading_margin(ctx.cross_axis, ctx.available_inner_width)
                }
                AlignItems::FlexEnd => {
                    current_lead + line_height
                        - style.trailing_margin(ctx.cross_axis, ctx.available_inner_width)
                        - cross_size
                }
                AlignItems::Center => current_lead + (line_height - cross_size) / 2.0,
                AlignItems::Stretch => {
                    let start = current_lead
                        + style.leading_margin(ctx.cross_axis, ctx.available_inner_width);
                    // An item whose cross size is still open stretches to the
                    // packed line height, which may require one more
                    // measurement.
                    let defined_cross_size = if ctx.main_axis_is_row {
                        item.resolved_height.resolve(ctx.available_inner_height)
                    } else {
                        item.resolved_width.resolve(ctx.available_inner_width)
                    };
                    if is_undefined(defined_cross_size) {
                        let margin =
                            style.margin_for_axis(ctx.cross_axis, ctx.available_inner_width);
                        let mut width = if ctx.main_axis_is_row {
                            child_main_size
                        } else {
                            line_height - margin
                        };
                        let mut height = if ctx.main_axis_is_row {
                            line_height - margin
                        } else {
                            child_main_size
                        };
                        width = constraint_min_max(
                            width,
                            style.min_width.resolve(ctx.available_inner_width),
                            style.max_width.resolve(ctx.available_inner_width),
                        );
                        height = constraint_min_max(
                            height,
                            style.min_height.resolve(ctx.available_inner_height),
                            style.max_height.resolve(ctx.available_inner_height),
                        );
                        let main_matches = floats_equal(
                            if ctx.main_axis_is_row { width } else { height },
                            child_main_size,
                        );
                        let cross_matches = floats_equal(
                            if ctx.main_axis_is_row { height } else { width },
                            cross_size,
                        );
                        if !(main_matches && cross_matches)
                            && let Some(out_child) = output.children.get_mut(item.index)
                        {
                            let params = MeasureParams {
                                min_width: width,
                                max_width: width,
                                min_height: height,
                                max_height: height,
                            };
                            if !out_child.can_be_reused_for(params) {
                                let measured = style.content.measure(
                                    params,
                                    ctx.available_inner_width,
                                    ctx.available_inner_height,
                                );
                                out_child.set_measure_output(measured, params);
                            }
                            cross_size = if ctx.main_axis_is_row {
                                out_child.height
                            } else {
                                out_child.width
                            };
                        }
                    }
                    start
                }
                AlignItems::Baseline => 0.0,
            };

            let Some(out_child) = output.children.get_mut(item.index) else {
                continue;
            };

            if align != AlignItems::Baseline {
                if ctx.main_axis_is_row {
                    out_child.top = cross_axis_start;
                } else {
                    let cross_start_edge = if ctx.cross_axis == FlexDirection::RowReverse {
                        packed_cross_dim
                    } else {
                        0.0
                    };
                    let directional_offset = if ctx.cross_axis == FlexDirection::RowReverse {
                        -cross_axis_start
                    } else {
                        cross_axis_start
                    };
                    out_child.set_start_position_on_axis(
                        cross_start_edge + directional_offset,
                        ctx.cross_axis,
                    );
                }
            }

            if ctx.node.flex_wrap == FlexWrap::WrapReverse {
                if ctx.main_axis_is_row {
                    let top_position = out_child.top;
                    out_child.top = packed_cross_dim + ctx.padding_border_cross
                        - top_position
                        - (cross_axis_start + cross_size - top_position);
                } else {
                    let cross_end_edge = if ctx.cross_axis == FlexDirection::RowReverse {
                        0.0
                    } else {
                        packed_cross_dim
                    };
                    let directional_offset = if ctx.cross_axis == FlexDirection::RowReverse {
                        cross_axis_start
                    } else {
                        -cross_axis_start
                    };
                    out_child
                        .set_end_position_on_axis(cross_end_edge + directional_offset, ctx.cross_axis);
                }
            }
        }
        current_lead += line_height;
    }
}

/// Size and place one absolutely positioned child against the finished
/// container: explicit insets win, then explicit dimensions and aspect
/// ratio, then inset-derived sizes; with nothing defined, the container's
/// `justify_content` / `align_items` decide, as absolute items do not
/// participate in flexing.
fn layout_absolute_child<Payload>(
    ctx: &PassContext<'_, Payload>,
    index: usize,
    final_main_dim: f32,
    final_cross_dim: f32,
    output: &mut LayoutOutput<Payload>,
) {
    let Some(child) = ctx.children.get(index) else {
        return;
    };
    let node_width = if ctx.main_axis_is_row {
        final_main_dim
    } else {
        final_cross_dim
    };
    let node_height = if ctx.main_axis_is_row {
        final_cross_dim
    } else {
        final_main_dim
    };

    let width_dimension = if child.max_width.is_defined() && child.min_width == child.max_width {
        child.max_width
    } else {
        child.width
    };
    let height_dimension = if child.max_height.is_defined() && child.min_height == child.max_height
    {
        child.max_height
    } else {
        child.height
    };
    let explicit_width = width_dimension.resolve(node_width);
    let explicit_height = height_dimension.resolve(node_height);

    let left = child.position(Edge::Left).resolve(node_width);
    let right = child.position(Edge::Right).resolve(node_width);
    let top = child.position(Edge::Top).resolve(node_height);
    let bottom = child.position(Edge::Bottom).resolve(node_height);

    let start_main = match ctx.main_axis {
        FlexDirection::Row => left,
        FlexDirection::RowReverse => right,
        FlexDirection::Column => top,
        FlexDirection::ColumnReverse => bottom,
    };
    let end_main = match ctx.main_axis {
        FlexDirection::Row => right,
        FlexDirection::RowReverse => left,
        FlexDirection::Column => bottom,
        FlexDirection::ColumnReverse => top,
    };
    let start_cross = match ctx.cross_axis {
        FlexDirection::Row => left,
        FlexDirection::RowReverse => right,
        FlexDirection::Column | FlexDirection::ColumnReverse => top,
    };
    let end_cross = match ctx.cross_axis {
        FlexDirection::Row => right,
        FlexDirection::RowReverse => left,
        FlexDirection::Column | FlexDirection::ColumnReverse => bottom,
    };

    let border_left = defined_or_zero(ctx.node.border(Edge::Left).resolve(node_width));
    let border_top = defined_or_zero(ctx.node.border(Edge::Top).resolve(node_width));
    let border_right = defined_or_zero(ctx.node.border(Edge::Right).resolve(node_width));
    let border_bottom = defined_or_zero(ctx.node.border(Edge::Bottom).resolve(node_width));

    let border_start_main = if ctx.main_axis_is_row { border_left } else { border_top };
    let border_end_main = if ctx.main_axis_is_row { border_right } else { border_bottom };
    let border_start_cross = if ctx.main_axis_is_row { border_top } else { border_left };
    let border_end_cross = if ctx.main_axis_is_row { border_bottom } else { border_right };

    // Explicit size, else inset-derived, else content-measured below.
    let mut width = if is_defined(explicit_width) {
        explicit_width
    } else if is_defined(left) && is_defined(right) {
        node_width - border_left - border_right - left - right
    } else {
        f32::NAN
    };
    let mut height = if is_defined(explicit_height) {
        explicit_height
    } else if is_defined(top) && is_defined(bottom) {
        node_height - border_top - border_bottom - top - bottom
    } else {
        f32::NAN
    };

    if is_undefined(width) != is_undefined(height) && is_defined(child.aspect_ratio) {
        if is_undefined(width) {
            width = height * child.aspect_ratio;
        } else {
            height = width / child.aspect_ratio;
        }
    }

    let mut measure_min_width = width;
    let mut measure_max_width = width;
    if !ctx.main_axis_is_row && is_undefined(width) && is_defined(node_width) && node_width > 0.0 {
        measure_min_width = 0.0;
        measure_max_width = node_width;
    }

    let params = MeasureParams {
        min_width: measure_min_width,
        max_width: measure_max_width,
        min_height: height,
        max_height: height,
    };
    let Some(out_child) = output.children.get_mut(index) else {
        return;
    };
    if !out_child.can_be_reused_for(params) {
        let measured = child.content.measure(
            params,
            ctx.available_inner_width,
            ctx.available_inner_height,
        );
        out_child.set_measure_output(measured, params);
    }
    let measured_main_size = if ctx.main_axis_is_row {
        out_child.width
    } else {
        out_child.height
    };
    let measured_cross_size = if ctx.main_axis_is_row {
        out_child.height
    } else {
        out_child.width
    };

    let margin_left = resolved_margin_or_zero(child, Edge::Left, node_width);
    let margin_top = resolved_margin_or_zero(child, Edge::Top, node_width);
    let margin_right = resolved_margin_or_zero(child, Edge::Right, node_width);
    let margin_bottom = resolved_margin_or_zero(child, Edge::Bottom, node_width);

    let margin_start_main = match ctx.main_axis {
        FlexDirection::Row => margin_left,
        FlexDirection::RowReverse => margin_right,
        FlexDirection::Column => margin_top,
        FlexDirection::ColumnReverse => margin_bottom,
    };
    let margin_end_main = match ctx.main_axis {
        FlexDirection::Row => margin_right,
        FlexDirection::RowReverse => margin_left,
        FlexDirection::Column => margin_bottom,
        FlexDirection::ColumnReverse => margin_top,
    };
    let margin_start_cross = match ctx.cross_axis {
        FlexDirection::Row => margin_left,
        FlexDirection::RowReverse => margin_right,
        FlexDirection::Column | FlexDirection::ColumnReverse => margin_top,
    };
    let margin_end_cross = match ctx.cross_axis {
        FlexDirection::Row => margin_right,
        FlexDirection::RowReverse => margin_left,
        FlexDirection::Column | FlexDirection::ColumnReverse => margin_bottom,
    };

    let main_extent = if ctx.main_axis_is_row { node_width } else { node_height };
    let cross_extent = if ctx.main_axis_is_row { node_height } else { node_width };
    let free_main_space = main_extent - measured_main_size;
    let free_cross_space = cross_extent - measured_cross_size;

    let offset_main = if is_defined(start_main) {
        start_main + border_start_main + margin_start_main
    } else if is_defined(end_main) {
        free_main_space - end_main - border_end_main - margin_end_main
    } else {
        match ctx.node.justify_content {
            JustifyContent::FlexStart | JustifyContent::SpaceBetween => {
                margin_start_main
                    + if ctx.main_axis_is_row {
                        ctx.node.padding_and_border(Edge::Left, ctx.owner_width)
                    } else {
                        ctx.node.padding_and_border(Edge::Top, ctx.owner_width)
                    }
            }
            JustifyContent::FlexEnd => {
                free_main_space
                    - if ctx.main_axis_is_row {
                        ctx.node.padding_and_border(Edge::Right, ctx.owner_width)
                    } else {
                        ctx.node.padding_and_border(Edge::Bottom, ctx.owner_width)
                    }
            }
            JustifyContent::SpaceEvenly | JustifyContent::SpaceAround | JustifyContent::Center => {
                free_main_space / 2.0
            }
        }
    };

    let main_start_edge = if ctx.main_axis == FlexDirection::RowReverse {
        node_width
    } else {
        0.0
    };
    let directional_offset_main = if ctx.main_axis == FlexDirection::RowReverse {
        -offset_main
    } else {
        offset_main
    };
    out_child.set_start_position_on_axis(main_start_edge + directional_offset_main, ctx.main_axis);

    let wrap_reverse = ctx.node.flex_wrap == FlexWrap::WrapReverse;
    let offset_cross = if is_defined(start_cross) {
        start_cross + border_start_cross + margin_start_cross
    } else if is_defined(end_cross) {
        free_cross_space - end_cross - border_end_cross - margin_end_cross
    } else {
        match resolve_alignment(child.align_self, ctx.node.align_items) {
            // Absolute children are fixed-size, so stretch degrades to
            // flex-start per the CSS absolute-positioning rules.
            AlignItems::FlexStart | AlignItems::Stretch => {
                margin_start_cross
                    + if wrap_reverse {
                        free_cross_space
                            - ctx.node.trailing_padding_and_border(
                                ctx.cross_axis,
                                ctx.available_inner_width,
                            )
                    } else {
                        ctx.node
                            .leading_padding_and_border(ctx.cross_axis, ctx.available_inner_width)
                    }
            }
            AlignItems::FlexEnd => {
                if wrap_reverse {
                    ctx.node
                        .leading_padding_and_border(ctx.cross_axis, ctx.available_inner_width)
                } else {
                    free_cross_space
                        - ctx.node.trailing_padding_and_border(
                            ctx.cross_axis,
                            ctx.available_inner_width,
                        )
                }
            }
            AlignItems::Center | AlignItems::Baseline => free_cross_space / 2.0,
        }
    };

    let cross_start_edge = if ctx.cross_axis == FlexDirection::RowReverse {
        node_width
    } else {
        0.0
    };
    let directional_offset_cross = if ctx.cross_axis == FlexDirection::RowReverse {
        -offset_cross
    } else {
        offset_cross
    };
    out_child.set_start_position_on_axis(cross_start_edge + directional_offset_cross, ctx.cross_axis);
}

/// Resolve one margin edge for absolute positioning; auto and unresolvable
/// margins count as zero.
fn resolved_margin_or_zero<Payload>(
    child: &FlexItemStyle<'_, Payload>,
    edge: Edge,
    owner_size: f32,
) -> f32 {
    let margin = child.margin(edge);
    match margin.unit {
        Unit::Auto | Unit::Undefined => 0.0,
        Unit::Point | Unit::Percent => defined_or_zero(margin.resolve(owner_size)),
    }
}
