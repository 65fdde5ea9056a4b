//! Flex lines and the flexible-length resolution algorithm.
//!
//! <https://www.w3.org/TR/css-flexbox-1/#resolve-flexible-lengths>

use crate::axis::FlexDirection;
use crate::flex_item::FlexItem;
use crate::scalar::{float_max, floats_equal, is_undefined};
use log::debug;

/// One row (or column) of items collected during line breaking, plus the
/// accumulators filled in by the later passes.
pub(crate) struct FlexLine<'item, Payload> {
    pub items: Vec<FlexItem<'item, Payload>>,
    /// Cross-axis extent of the line.
    pub cross_dim: f32,
    /// Main-axis extent consumed by the line, including justification spacing
    /// and container padding/border.
    pub main_dim: f32,
    /// Largest baseline among baseline-aligned items on the line.
    pub max_baseline: f32,
}

impl<'item, Payload> FlexLine<'item, Payload> {
    pub(crate) fn new(items: Vec<FlexItem<'item, Payload>>) -> Self {
        Self {
            items,
            cross_dim: 0.0,
            main_dim: 0.0,
            max_baseline: 0.0,
        }
    }

    /// Assign every item its final main size and return the free space left
    /// over for justification.
    ///
    /// Implements the CSS "resolve flexible lengths" loop: freeze inflexible
    /// items at their clamped hypothetical size, then repeatedly distribute
    /// the remaining space proportionally and freeze items by the sign of the
    /// total min/max violation. Each iteration freezes at least one item (a
    /// zero total violation freezes everything), which bounds the loop.
    ///
    /// A line whose container is sized to its content, or whose available
    /// main dimension is undefined, does not flex at all: every item takes
    /// its clamped hypothetical size and no free space remains.
    pub(crate) fn resolve_flexible_lengths(
        &mut self,
        main_axis: FlexDirection,
        available_inner_main_dim: f32,
        available_inner_width: f32,
        size_based_on_content: bool,
    ) -> f32 {
        let margins: Vec<f32> = self
            .items
            .iter()
            .map(|item| item.style.margin_for_axis(main_axis, available_inner_width))
            .collect();
        let hypothetical: Vec<f32> = self
            .items
            .iter()
            .map(|item| {
                item.style
                    .bound_axis(main_axis, item.computed_flex_basis, available_inner_main_dim)
            })
            .collect();

        if size_based_on_content || is_undefined(available_inner_main_dim) {
            for (item, hypothetical_size) in self.items.iter_mut().zip(hypothetical.iter()) {
                item.target_main_size = *hypothetical_size;
            }
            return 0.0;
        }

        let sum_outer_hypothetical: f32 = hypothetical
            .iter()
            .zip(margins.iter())
            .map(|(size, margin)| size + margin)
            .sum();
        let use_grow = sum_outer_hypothetical < available_inner_main_dim;

        // Inflexible items freeze up front: zero factor, or a basis already
        // past its clamped hypothetical size in the flexing direction.
        let mut frozen: Vec<bool> = Vec::with_capacity(self.items.len());
        for (item, hypothetical_size) in self.items.iter_mut().zip(hypothetical.iter()) {
            let factor = if use_grow {
                item.style.resolved_flex_grow()
            } else {
                item.style.resolved_flex_shrink()
            };
            let basis_past_hypothetical = if use_grow {
                item.computed_flex_basis > *hypothetical_size
            } else {
                item.computed_flex_basis < *hypothetical_size
            };
            let freeze = floats_equal(factor, 0.0) || basis_past_hypothetical;
            item.target_main_size = if freeze {
                *hypothetical_size
            } else {
                item.computed_flex_basis
            };
            frozen.push(freeze);
        }

        let initial_free_space =
            remaining_space(&self.items, &frozen, &margins, available_inner_main_dim);
        debug!(
            target: "flexlayout::flex_line",
            "[FLEX] items={} outer_hypothetical={:.3} available={:.3} mode={} initial_free={:.3}",
            self.items.len(),
            sum_outer_hypothetical,
            available_inner_main_dim,
            if use_grow { "grow" } else { "shrink" },
            initial_free_space
        );

        while frozen.iter().any(|is_frozen| !is_frozen) {
            let mut remaining =
                remaining_space(&self.items, &frozen, &margins, available_inner_main_dim);

            let sum_factors: f32 = self
                .items
                .iter()
                .zip(frozen.iter())
                .filter(|(_, is_frozen)| !**is_frozen)
                .map(|(item, _)| {
                    if use_grow {
                        item.style.resolved_flex_grow()
                    } else {
                        item.style.resolved_flex_shrink()
                    }
                })
                .sum();
            // Few flexible items left: scale the distributable space down so
            // a lone fractional factor cannot overshoot.
            if sum_factors < 1.0 {
                let scaled = initial_free_space * sum_factors;
                if scaled.abs() < remaining.abs() {
                    remaining = scaled;
                }
            }

            let total_grow = sum_factors;
            let total_scaled_shrink: f32 = self
                .items
                .iter()
                .zip(frozen.iter())
                .filter(|(_, is_frozen)| !**is_frozen)
                .map(|(item, _)| item.style.resolved_flex_shrink() * item.computed_flex_basis)
                .sum();

            let mut total_violation = 0.0f32;
            let mut violations: Vec<f32> = vec![0.0; self.items.len()];
            for ((item, is_frozen), violation) in self
                .items
                .iter_mut()
                .zip(frozen.iter())
                .zip(violations.iter_mut())
            {
                if *is_frozen {
                    continue;
                }
                let candidate = if use_grow {
                    let share = if total_grow > 0.0 {
                        item.style.resolved_flex_grow() / total_grow
                    } else {
                        0.0
                    };
                    item.computed_flex_basis + remaining * share
                } else {
                    let scaled_shrink =
                        item.style.resolved_flex_shrink() * item.computed_flex_basis;
                    let share = if total_scaled_shrink > 0.0 {
                        scaled_shrink / total_scaled_shrink
                    } else {
                        0.0
                    };
                    item.computed_flex_basis - remaining.abs() * share
                };
                // Min/max clamp, with the content box floored at zero as the
                // CSS algorithm requires.
                let clamped = float_max(
                    item.style
                        .bound_axis(main_axis, candidate, available_inner_main_dim),
                    0.0,
                );
                item.target_main_size = clamped;
                *violation = clamped - candidate;
                total_violation += *violation;
            }

            if floats_equal(total_violation, 0.0) {
                for is_frozen in &mut frozen {
                    *is_frozen = true;
                }
            } else if total_violation > 0.0 {
                for (is_frozen, violation) in frozen.iter_mut().zip(violations.iter()) {
                    if *violation > 0.0 {
                        *is_frozen = true;
                    }
                }
            } else {
                for (is_frozen, violation) in frozen.iter_mut().zip(violations.iter()) {
                    if *violation < 0.0 {
                        *is_frozen = true;
                    }
                }
            }
        }

        let consumed: f32 = self
            .items
            .iter()
            .zip(margins.iter())
            .map(|(item, margin)| item.target_main_size + margin)
            .sum();
        available_inner_main_dim - consumed
    }
}

/// Free space left on the line: frozen items count at their target size,
/// unfrozen items at their flex base size.
fn remaining_space<Payload>(
    items: &[FlexItem<'_, Payload>],
    frozen: &[bool],
    margins: &[f32],
    available_inner_main_dim: f32,
) -> f32 {
    let consumed: f32 = items
        .iter()
        .zip(frozen.iter())
        .zip(margins.iter())
        .map(|((item, is_frozen), margin)| {
            let size = if *is_frozen {
                item.target_main_size
            } else {
                item.computed_flex_basis
            };
            size + margin
        })
        .sum();
    available_inner_main_dim - consumed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dimension::Dimension;
    use crate::item_style::{FlexItemStyle, Measurable, MeasureOutput};
    use crate::output::MeasureParams;
    use crate::scalar::floats_equal;

    struct NoContent;

    impl Measurable<()> for NoContent {
        fn measure(
            &self,
            _constraints: MeasureParams,
            _owner_width: f32,
            _owner_height: f32,
        ) -> MeasureOutput<()> {
            MeasureOutput::sized(0.0, 0.0)
        }
    }

    const CONTENT: NoContent = NoContent;

    fn grow_item<'item>(style: &'item FlexItemStyle<'item, ()>, basis: f32) -> FlexItem<'item, ()> {
        let mut item = FlexItem::new(0, style);
        item.computed_flex_basis = basis;
        item
    }

    #[test]
    /// # Panics
    /// Panics if grow distribution is not proportional to grow factors.
    fn grow_distributes_proportionally() {
        let mut style_one = FlexItemStyle::<()>::new(&CONTENT);
        style_one.flex_grow = 1.0;
        let mut style_two = FlexItemStyle::<()>::new(&CONTENT);
        style_two.flex_grow = 3.0;

        let mut line = FlexLine::new(vec![
            grow_item(&style_one, 20.0),
            grow_item(&style_two, 20.0),
        ]);
        let remaining =
            line.resolve_flexible_lengths(FlexDirection::Row, 240.0, 240.0, false);

        let targets: Vec<f32> = line.items.iter().map(|item| item.target_main_size).collect();
        assert_eq!(targets.len(), 2);
        // 200 free: 50 to the first item, 150 to the second.
        assert!(targets.iter().zip([70.0, 170.0]).all(|(got, expect)| floats_equal(*got, expect)));
        assert!(floats_equal(remaining, 0.0));
    }

    #[test]
    /// # Panics
    /// Panics if shrink is not weighted by scaled shrink factors.
    fn shrink_is_weighted_by_basis() {
        let mut style_one = FlexItemStyle::<()>::new(&CONTENT);
        style_one.flex_shrink = 1.0;
        let mut style_two = FlexItemStyle::<()>::new(&CONTENT);
        style_two.flex_shrink = 1.0;

        let mut line = FlexLine::new(vec![
            grow_item(&style_one, 120.0),
            grow_item(&style_two, 80.0),
        ]);
        let remaining =
            line.resolve_flexible_lengths(FlexDirection::Row, 160.0, 160.0, false);

        // 40 over: removed 24 from the larger item, 16 from the smaller.
        let targets: Vec<f32> = line.items.iter().map(|item| item.target_main_size).collect();
        assert!(targets.iter().zip([96.0, 64.0]).all(|(got, expect)| floats_equal(*got, expect)));
        assert!(floats_equal(remaining, 0.0));
    }

    #[test]
    /// # Panics
    /// Panics if a minimum violation is not clamped and redistributed.
    fn min_violation_clamps_and_refreezes() {
        let mut style = FlexItemStyle::<()>::new(&CONTENT);
        style.flex_grow = 1.0;
        style.flex_basis = Dimension::points(0.0);
        style.min_width = Dimension::points(250.0);

        let mut line = FlexLine::new(vec![grow_item(&style, 0.0)]);
        let remaining =
            line.resolve_flexible_lengths(FlexDirection::Row, 200.0, 200.0, false);

        let targets: Vec<f32> = line.items.iter().map(|item| item.target_main_size).collect();
        // The minimum wins over the container: 250, not 200.
        assert!(targets.iter().all(|target| floats_equal(*target, 250.0)));
        assert!(floats_equal(remaining, -50.0));
    }

    #[test]
    /// # Panics
    /// Panics if fractional factor sums are not scaled down.
    fn fractional_factor_sum_does_not_overshoot() {
        let mut style = FlexItemStyle::<()>::new(&CONTENT);
        style.flex_grow = 0.5;

        let mut line = FlexLine::new(vec![grow_item(&style, 50.0)]);
        let remaining =
            line.resolve_flexible_lengths(FlexDirection::Row, 250.0, 250.0, false);

        let targets: Vec<f32> = line.items.iter().map(|item| item.target_main_size).collect();
        // Only half of the 200 free space is handed out.
        assert!(targets.iter().all(|target| floats_equal(*target, 150.0)));
        assert!(floats_equal(remaining, 100.0));
    }

    #[test]
    /// # Panics
    /// Panics if zero-factor items do not freeze at their hypothetical size.
    fn zero_factors_freeze_immediately() {
        let mut style = FlexItemStyle::<()>::new(&CONTENT);
        style.flex_grow = 0.0;
        style.flex_shrink = 0.0;

        let mut line = FlexLine::new(vec![grow_item(&style, 70.0), grow_item(&style, 70.0)]);
        let remaining =
            line.resolve_flexible_lengths(FlexDirection::Row, 100.0, 100.0, false);

        let targets: Vec<f32> = line.items.iter().map(|item| item.target_main_size).collect();
        assert!(targets.iter().all(|target| floats_equal(*target, 70.0)));
        assert!(floats_equal(remaining, -40.0));
    }

    #[test]
    /// # Panics
    /// Panics if content-sized lines flex at all.
    fn content_sized_lines_do_not_flex() {
        let mut style = FlexItemStyle::<()>::new(&CONTENT);
        style.flex_grow = 1.0;

        let mut line = FlexLine::new(vec![grow_item(&style, 60.0)]);
        let remaining =
            line.resolve_flexible_lengths(FlexDirection::Row, 200.0, 200.0, true);

        let targets: Vec<f32> = line.items.iter().map(|item| item.target_main_size).collect();
        assert!(targets.iter().all(|target| floats_equal(*target, 60.0)));
        assert!(floats_equal(remaining, 0.0));

        let mut undefined_line = FlexLine::new(vec![grow_item(&style, 60.0)]);
        let undefined_remaining = undefined_line.resolve_flexible_lengths(
            FlexDirection::Row,
            f32::NAN,
            f32::NAN,
            false,
        );
        assert!(floats_equal(undefined_remaining, 0.0));
    }
}
