//! Quality score value object.

use serde::{Deserialize, Serialize};

/// Desirability score of a stocked item.
///
/// Ordinary items live inside `[Quality::MIN, Quality::MAX]`. The legendary
/// category carries a fixed out-of-band score ([`Quality::LEGENDARY`]) that is
/// never clamped. Construction is deliberately lenient: any raw value is
/// accepted, and out-of-range input is corrected by the next aging pass
/// rather than rejected up front.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Quality(i32);

impl Quality {
    /// Floor for ordinary items.
    pub const MIN: Quality = Quality(0);
    /// Ceiling for ordinary items.
    pub const MAX: Quality = Quality(50);
    /// Fixed score of legendary items; exempt from the bounds.
    pub const LEGENDARY: Quality = Quality(80);

    pub fn new(value: i32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i32 {
        self.0
    }

    /// Unclamped arithmetic. The daily pass accumulates deltas with this and
    /// clamps once at the end, so mid-pass overshoot is expected.
    #[must_use]
    pub fn plus(self, delta: i32) -> Self {
        Self(self.0 + delta)
    }

    /// Clamp into the ordinary-item bounds.
    #[must_use]
    pub fn clamped(self) -> Self {
        Self(self.0.clamp(Self::MIN.0, Self::MAX.0))
    }

    pub fn is_in_bounds(&self) -> bool {
        Self::MIN <= *self && *self <= Self::MAX
    }
}

impl core::fmt::Display for Quality {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<i32> for Quality {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl From<Quality> for i32 {
    fn from(value: Quality) -> Self {
        value.0
    }
}
