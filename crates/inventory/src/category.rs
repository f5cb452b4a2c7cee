//! Closed set of aging categories, classified once from item names.

use serde::{Deserialize, Serialize};

/// Exact name of the legendary item.
pub const LEGENDARY_NAME: &str = "Sulfuras, Hand of Ragnaros";

/// Exact name of the maturing cheese.
pub const AGED_BRIE_NAME: &str = "Aged Brie";

/// Exact name of the concert pass.
pub const BACKSTAGE_PASS_NAME: &str = "Backstage passes to a TAFKAL80ETC concert";

/// Substring marking conjured goods.
pub const CONJURED_MARKER: &str = "Conjured";

/// Aging category of an item, derived from its name.
///
/// Categories form a closed set so the rule table stays exhaustively
/// checkable; there is no extension point.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemCategory {
    /// Never ages: `sell_in` and `quality` are frozen for life.
    Legendary,
    /// Degrades twice as fast as normal stock.
    Conjured,
    /// Gains quality with age instead of losing it.
    AgedBrie,
    /// Gains quality in tiers as the concert approaches, worthless after.
    BackstagePass,
    /// Standard linear degradation.
    Normal,
}

impl ItemCategory {
    /// Classify a name. Checked in precedence order, first match wins.
    ///
    /// Unrecognized names deliberately fall back to `Normal` rather than
    /// failing; that fallback is part of the contract, not a gap.
    pub fn of(name: &str) -> Self {
        if name == LEGENDARY_NAME {
            ItemCategory::Legendary
        } else if name.contains(CONJURED_MARKER) {
            ItemCategory::Conjured
        } else if name == AGED_BRIE_NAME {
            ItemCategory::AgedBrie
        } else if name == BACKSTAGE_PASS_NAME {
            ItemCategory::BackstagePass
        } else {
            ItemCategory::Normal
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_names_classify_exactly() {
        assert_eq!(ItemCategory::of(LEGENDARY_NAME), ItemCategory::Legendary);
        assert_eq!(ItemCategory::of(AGED_BRIE_NAME), ItemCategory::AgedBrie);
        assert_eq!(
            ItemCategory::of(BACKSTAGE_PASS_NAME),
            ItemCategory::BackstagePass
        );
    }

    #[test]
    fn conjured_matches_on_substring() {
        assert_eq!(
            ItemCategory::of("Conjured Mana Cake"),
            ItemCategory::Conjured
        );
        assert_eq!(
            ItemCategory::of("Slightly Conjured Biscuit"),
            ItemCategory::Conjured
        );
    }

    #[test]
    fn conjured_takes_precedence_over_exact_matches() {
        // A conjured variant of a known name degrades as conjured stock.
        assert_eq!(
            ItemCategory::of("Conjured Aged Brie"),
            ItemCategory::Conjured
        );
    }

    #[test]
    fn exact_matches_do_not_extend_to_variants() {
        assert_eq!(ItemCategory::of("Aged Brie Wheel"), ItemCategory::Normal);
        assert_eq!(
            ItemCategory::of("Backstage passes to a lute recital"),
            ItemCategory::Normal
        );
    }

    #[test]
    fn unknown_names_fall_back_to_normal() {
        assert_eq!(
            ItemCategory::of("+5 Dexterity Vest"),
            ItemCategory::Normal
        );
        assert_eq!(ItemCategory::of(""), ItemCategory::Normal);
    }
}
