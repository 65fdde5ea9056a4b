//! Shared helpers for the integration suites.
#![allow(dead_code, reason = "each test binary uses its own subset of these helpers")]

use flexlayout::{Measurable, MeasureOutput, MeasureParams, constraint_min_max, is_defined};
use std::cell::Cell;

/// Install the test logger once per binary; sibling tests may already have
/// done so.
pub fn init_logging() {
    if env_logger::builder().is_test(true).try_init().is_ok() {
        log::debug!(target: "flexlayout::tests", "test logger installed");
    }
}

/// Assert two floats are equal within a layout-friendly tolerance.
pub fn assert_close(got: f32, expected: f32, what: &str) {
    assert!(
        (got - expected).abs() < 0.01,
        "{what}: got {got}, expected {expected}"
    );
}

/// Content with a natural size that yields to whatever constraints the
/// algorithm passes down, like a host view would.
pub struct FixedContent {
    pub width: f32,
    pub height: f32,
}

impl FixedContent {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl Measurable<()> for FixedContent {
    fn measure(
        &self,
        constraints: MeasureParams,
        _owner_width: f32,
        _owner_height: f32,
    ) -> MeasureOutput<()> {
        MeasureOutput::sized(
            constraint_min_max(self.width, constraints.min_width, constraints.max_width),
            constraint_min_max(self.height, constraints.min_height, constraints.max_height),
        )
    }
}

/// Fixed-size content that reports how often it was measured.
pub struct CountingContent {
    inner: FixedContent,
    calls: Cell<usize>,
}

impl CountingContent {
    pub const fn new(width: f32, height: f32) -> Self {
        Self {
            inner: FixedContent::new(width, height),
            calls: Cell::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl Measurable<()> for CountingContent {
    fn measure(
        &self,
        constraints: MeasureParams,
        owner_width: f32,
        owner_height: f32,
    ) -> MeasureOutput<()> {
        self.calls.set(self.calls.get() + 1);
        self.inner.measure(constraints, owner_width, owner_height)
    }
}

/// Content with an explicit baseline, like a text view.
pub struct TextLikeContent {
    pub width: f32,
    pub height: f32,
    pub ascent: f32,
}

impl Measurable<()> for TextLikeContent {
    fn measure(
        &self,
        constraints: MeasureParams,
        _owner_width: f32,
        _owner_height: f32,
    ) -> MeasureOutput<()> {
        let width = constraint_min_max(self.width, constraints.min_width, constraints.max_width);
        let height =
            constraint_min_max(self.height, constraints.min_height, constraints.max_height);
        MeasureOutput {
            width,
            height,
            baseline: self.ascent,
            result: (),
        }
    }

    fn baseline(&self, _width: f32, _height: f32) -> Option<f32> {
        is_defined(self.ascent).then_some(self.ascent)
    }
}
