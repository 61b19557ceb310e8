//! The closed set of item kinds and their nightly quality rules.

use gilded_rose_core::clamp_quality;

/// Name of the legendary item. It never ages and its quality never changes.
pub const LEGENDARY_NAME: &str = "Sulfuras, Hand of Ragnaros";

/// Name of the item that gains quality as it ages.
pub const AGED_BRIE_NAME: &str = "Aged Brie";

/// Name of the concert pass whose value peaks just before the event.
pub const BACKSTAGE_PASS_NAME: &str = "Backstage passes to a TAFKAL80ETC concert";

/// Name of the conjured item that degrades twice as fast as a standard one.
pub const CONJURED_NAME: &str = "Conjured Mana Cake";

/// Item kind, resolved once from the item's name.
///
/// Any name that is not one of the known names is `Standard`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ItemKind {
    Legendary,
    AgesPositively,
    EventPass,
    Conjured,
    Standard,
}

/// What a kind's rule does to quality for one day.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum QualityChange {
    /// Quality stays exactly as it is, bounds included.
    Frozen,
    /// Quality is replaced by this value.
    Set(i32),
    /// Quality moves by this amount and is then clamped.
    Shift(i32),
}

impl ItemKind {
    /// Resolve the kind from an exact item name.
    pub fn from_name(name: &str) -> Self {
        match name {
            LEGENDARY_NAME => ItemKind::Legendary,
            AGED_BRIE_NAME => ItemKind::AgesPositively,
            BACKSTAGE_PASS_NAME => ItemKind::EventPass,
            CONJURED_NAME => ItemKind::Conjured,
            _ => ItemKind::Standard,
        }
    }

    /// Stable label used in logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Legendary => "legendary",
            ItemKind::AgesPositively => "ages_positively",
            ItemKind::EventPass => "event_pass",
            ItemKind::Conjured => "conjured",
            ItemKind::Standard => "standard",
        }
    }

    /// Whether sell-in counts down for this kind.
    pub fn ages(&self) -> bool {
        !matches!(self, ItemKind::Legendary)
    }

    /// The quality change for a day, given the sell-in *before* it is
    /// decremented.
    pub fn quality_change(&self, sell_in: i32) -> QualityChange {
        match self {
            ItemKind::Legendary => QualityChange::Frozen,
            ItemKind::AgesPositively => QualityChange::Shift(1),
            ItemKind::EventPass => match sell_in {
                i32::MIN..=0 => QualityChange::Set(0),
                1..=5 => QualityChange::Shift(3),
                6..=10 => QualityChange::Shift(2),
                _ => QualityChange::Shift(1),
            },
            ItemKind::Conjured => QualityChange::Shift(-degradation(2, sell_in)),
            ItemKind::Standard => QualityChange::Shift(-degradation(1, sell_in)),
        }
    }

    /// Next quality for an item of this kind.
    pub fn next_quality(&self, sell_in: i32, quality: i32) -> i32 {
        match self.quality_change(sell_in) {
            QualityChange::Frozen => quality,
            QualityChange::Set(value) => value,
            QualityChange::Shift(delta) => clamp_quality(quality.saturating_add(delta)),
        }
    }
}

// Degradation doubles once the sell-by date has passed.
fn degradation(rate: i32, sell_in: i32) -> i32 {
    if sell_in <= 0 { rate * 2 } else { rate }
}
