//! The nightly update engine.

use tracing::debug;

use crate::item::Item;

/// Advance every item by one day, in list order.
///
/// Items are independent; each one runs its own kind's rule. Total for any
/// input: unknown names use the standard rule and nothing here can fail.
pub fn advance_one_day(items: &mut [Item]) {
    for item in items.iter_mut() {
        item.advance_one_day();
    }
}

/// Engine over a caller-owned collection of items.
///
/// The engine borrows the items mutably for its lifetime; it never creates,
/// removes, or reorders them.
#[derive(Debug)]
pub struct UpdateEngine<'a> {
    items: &'a mut [Item],
    days_elapsed: u32,
}

impl<'a> UpdateEngine<'a> {
    pub fn new(items: &'a mut [Item]) -> Self {
        Self {
            items,
            days_elapsed: 0,
        }
    }

    pub fn items(&self) -> &[Item] {
        &*self.items
    }

    /// Number of times [`UpdateEngine::advance_one_day`] has run.
    pub fn days_elapsed(&self) -> u32 {
        self.days_elapsed
    }

    /// Advance all held items by one simulated day.
    pub fn advance_one_day(&mut self) {
        self.days_elapsed = self.days_elapsed.saturating_add(1);
        debug!(
            day = self.days_elapsed,
            items = self.items.len(),
            "advancing inventory one day"
        );
        advance_one_day(self.items);
    }
}
