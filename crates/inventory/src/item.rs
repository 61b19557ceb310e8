use serde::Serialize;
use tracing::trace;

use gilded_rose_core::{DomainError, DomainResult, clamp_quality};

use crate::kind::{ItemKind, QualityChange};

/// A stocked item.
///
/// `name` is fixed at construction and selects the item's [`ItemKind`].
/// `sell_in` and `quality` are plain fields the caller may read and write;
/// quality outside `[0, 50]` is accepted as-is and only pulled back into
/// range the next time the item's rule runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    name: String,
    #[serde(skip)]
    kind: ItemKind,
    pub sell_in: i32,
    pub quality: i32,
}

impl Item {
    pub fn new(name: impl Into<String>, sell_in: i32, quality: i32) -> Self {
        let name = name.into();
        let kind = ItemKind::from_name(&name);
        Self {
            name,
            kind,
            sell_in,
            quality,
        }
    }

    /// Like [`Item::new`], but rejects blank names.
    pub fn try_new(name: impl Into<String>, sell_in: i32, quality: i32) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        Ok(Self::new(name, sell_in, quality))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ItemKind {
        self.kind
    }

    /// Advance this item by one day.
    ///
    /// Quality is recomputed from the current (pre-decrement) sell-in, then
    /// sell-in counts down unless the item is legendary.
    pub fn advance_one_day(&mut self) {
        let next = match self.kind.quality_change(self.sell_in) {
            QualityChange::Frozen => self.quality,
            QualityChange::Set(value) => value,
            QualityChange::Shift(delta) => {
                let unclamped = self.quality.saturating_add(delta);
                let clamped = clamp_quality(unclamped);
                if unclamped != clamped {
                    trace!(
                        item = %self.name,
                        kind = self.kind.as_str(),
                        unclamped,
                        quality = clamped,
                        "quality clamped"
                    );
                }
                clamped
            }
        };

        self.quality = next;
        if self.kind.ages() {
            self.sell_in = self.sell_in.saturating_sub(1);
        }
    }
}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.sell_in, self.quality)
    }
}
