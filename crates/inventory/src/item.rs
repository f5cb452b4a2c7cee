use core::str::FromStr;

use serde::{Deserialize, Serialize};

use innkeeper_core::{DomainError, Quality, SellIn};

use crate::category::ItemCategory;

/// One stock-keeping unit on the shop floor.
///
/// Construction is lenient by design: any name and any raw numbers are
/// accepted, and an out-of-range quality is corrected by the next aging pass
/// (or, for legendary stock, kept forever). Aging never creates or destroys
/// items; only `sell_in` and `quality` move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub(crate) name: String,
    pub(crate) sell_in: SellIn,
    pub(crate) quality: Quality,
}

impl Item {
    pub fn new(name: impl Into<String>, sell_in: i32, quality: i32) -> Self {
        Self {
            name: name.into(),
            sell_in: SellIn::new(sell_in),
            quality: Quality::new(quality),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sell_in(&self) -> SellIn {
        self.sell_in
    }

    pub fn quality(&self) -> Quality {
        self.quality
    }

    /// Aging category derived from the name.
    pub fn category(&self) -> ItemCategory {
        ItemCategory::of(&self.name)
    }
}

/// Ledger line format: `<name>, <sell_in>, <quality>`.
impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.sell_in, self.quality)
    }
}

/// Parse the ledger line format back into an item.
///
/// Names may themselves contain commas ("Sulfuras, Hand of Ragnaros"), so the
/// two numeric fields are taken from the right and everything before them is
/// the name.
impl FromStr for Item {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut fields = s.rsplitn(3, ',');
        let (Some(quality), Some(sell_in), Some(name)) =
            (fields.next(), fields.next(), fields.next())
        else {
            return Err(DomainError::malformed_line(s));
        };

        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::malformed_line(s));
        }

        let sell_in: i32 = sell_in
            .trim()
            .parse()
            .map_err(|_| DomainError::invalid_number("sell_in", sell_in.trim()))?;
        let quality: i32 = quality
            .trim()
            .parse()
            .map_err(|_| DomainError::invalid_number("quality", quality.trim()))?;

        Ok(Item::new(name, sell_in, quality))
    }
}
