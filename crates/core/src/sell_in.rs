//! Sell-by day count value object.

use serde::{Deserialize, Serialize};

/// Days remaining before an item's sell-by date.
///
/// Signed on purpose: negative values mean "N days past sell-by" and keep
/// counting down forever.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct SellIn(i32);

impl SellIn {
    pub fn new(days: i32) -> Self {
        Self(days)
    }

    pub fn days(&self) -> i32 {
        self.0
    }

    /// One day closer to (or further past) the sell-by date.
    #[must_use]
    pub fn decremented(self) -> Self {
        Self(self.0 - 1)
    }

    /// True once the sell-by date has passed.
    pub fn is_past_due(&self) -> bool {
        self.0 < 0
    }

    /// True when strictly fewer than `days` days remain.
    pub fn is_within(&self, days: i32) -> bool {
        self.0 < days
    }
}

impl core::fmt::Display for SellIn {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<i32> for SellIn {
    fn from(days: i32) -> Self {
        Self(days)
    }
}

impl From<SellIn> for i32 {
    fn from(value: SellIn) -> Self {
        value.0
    }
}
