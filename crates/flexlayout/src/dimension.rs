//! Tagged dimension values (point / percent / auto / undefined).

use crate::scalar::{floats_equal, is_undefined};

/// Unit tag for a [`Dimension`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Unit {
    /// No value was specified.
    Undefined,
    /// An absolute length in layout points.
    Point,
    /// A percentage of the owner's size.
    Percent,
    /// Content-derived sizing.
    Auto,
}

/// A style length: a magnitude paired with a unit.
///
/// Immutable value type; resolution against an owner size happens through
/// [`Dimension::resolve`], which maps unresolvable units to the undefined
/// sentinel (NaN).
#[derive(Copy, Clone, Debug)]
pub struct Dimension {
    pub value: f32,
    pub unit: Unit,
}

impl Dimension {
    /// An unspecified dimension.
    pub const UNDEFINED: Self = Self {
        value: f32::NAN,
        unit: Unit::Undefined,
    };

    /// A content-sized dimension.
    pub const AUTO: Self = Self {
        value: f32::NAN,
        unit: Unit::Auto,
    };

    /// An absolute length in points.
    #[inline]
    pub const fn points(value: f32) -> Self {
        Self {
            value,
            unit: Unit::Point,
        }
    }

    /// A percentage of the owner size.
    #[inline]
    pub const fn percent(value: f32) -> Self {
        Self {
            value,
            unit: Unit::Percent,
        }
    }

    /// Resolve against the owner's size.
    ///
    /// `Point` yields the stored magnitude, `Percent` scales the owner size,
    /// and `Undefined`/`Auto` yield NaN. A percent of an undefined owner size
    /// is itself undefined.
    #[inline]
    pub fn resolve(self, owner_size: f32) -> f32 {
        match self.unit {
            Unit::Undefined | Unit::Auto => f32::NAN,
            Unit::Point => self.value,
            Unit::Percent => self.value * owner_size / 100.0,
        }
    }

    /// True when resolving can produce a concrete value for some owner size.
    #[inline]
    pub const fn is_defined(self) -> bool {
        matches!(self.unit, Unit::Point | Unit::Percent)
    }
}

impl Default for Dimension {
    fn default() -> Self {
        Self::UNDEFINED
    }
}

impl PartialEq for Dimension {
    /// Two dimensions are equal when their units match and, for resolvable
    /// units, their magnitudes are approximately equal. `Undefined` and
    /// `Auto` values compare equal regardless of the stored magnitude.
    fn eq(&self, other: &Self) -> bool {
        if self.unit != other.unit {
            return false;
        }
        match self.unit {
            Unit::Undefined | Unit::Auto => true,
            Unit::Point | Unit::Percent => floats_equal(self.value, other.value),
        }
    }
}
