//! The nightly aging pass.
//!
//! One call to [`advance_day`] applies exactly one simulated day to every
//! item, in place, sequentially. Items do not interact; the pass holds no
//! state between calls and never fails.

use serde::{Deserialize, Serialize};
use tracing::debug;

use innkeeper_core::{Quality, SellIn};

use crate::category::ItemCategory;
use crate::item::Item;

/// Apply one simulated day to every item in the slice.
///
/// Per item: apply the category's pre-sell-by quality delta, decrement
/// `sell_in`, apply the past-due adjustment if the new `sell_in` is negative,
/// then clamp quality into `[0, 50]`. Legendary stock is skipped entirely,
/// clamp included.
pub fn advance_day(items: &mut [Item]) {
    for item in items.iter_mut() {
        age_item(item);
    }
}

fn age_item(item: &mut Item) {
    let category = item.category();
    if category == ItemCategory::Legendary {
        return;
    }

    item.quality = item.quality.plus(daily_delta(category, item.sell_in));
    item.sell_in = item.sell_in.decremented();

    if item.sell_in.is_past_due() {
        item.quality = match category {
            // The concert is over; the tiered gain just applied is overridden,
            // not subtracted from.
            ItemCategory::BackstagePass => Quality::MIN,
            _ => item.quality.plus(past_due_delta(category)),
        };
    }

    item.quality = item.quality.clamped();

    debug!(
        name = %item.name,
        ?category,
        sell_in = item.sell_in.days(),
        quality = item.quality.value(),
        "aged item"
    );
}

/// Quality delta applied before the sell-by decrement.
///
/// Concert pass tiers read the pre-decrement day count: strictly under 11
/// days out gains +2 total, strictly under 6 gains +3.
fn daily_delta(category: ItemCategory, sell_in: SellIn) -> i32 {
    match category {
        ItemCategory::Normal => -1,
        ItemCategory::AgedBrie => 1,
        ItemCategory::Conjured => -2,
        ItemCategory::BackstagePass => {
            let mut delta = 1;
            if sell_in.is_within(11) {
                delta += 1;
            }
            if sell_in.is_within(6) {
                delta += 1;
            }
            delta
        }
        ItemCategory::Legendary => 0,
    }
}

/// Additional delta once the sell-by date has passed (doubles the daily
/// movement for degrading and maturing stock alike).
fn past_due_delta(category: ItemCategory) -> i32 {
    match category {
        ItemCategory::Normal => -1,
        ItemCategory::AgedBrie => 1,
        ItemCategory::Conjured => -2,
        ItemCategory::BackstagePass | ItemCategory::Legendary => 0,
    }
}

/// Owned batch of items aged day by day.
///
/// Thin wrapper for callers that want the collection held for them; the
/// slice pass [`advance_day`] is the primitive and works on any exclusively
/// borrowed items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    items: Vec<Item>,
}

impl Inventory {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// Age every held item by one day.
    pub fn advance_day(&mut self) {
        advance_day(&mut self.items);
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn into_items(self) -> Vec<Item> {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
