//! Inventory quality rules.
//!
//! Each item's name resolves to a fixed [`ItemKind`] when the item is built;
//! the [`UpdateEngine`] advances a caller-owned list of items one day at a
//! time. Pure domain logic: no IO, no storage.

pub mod engine;
pub mod item;
pub mod kind;

pub use engine::{UpdateEngine, advance_one_day};
pub use item::Item;
pub use kind::{
    AGED_BRIE_NAME, BACKSTAGE_PASS_NAME, CONJURED_NAME, ItemKind, LEGENDARY_NAME, QualityChange,
};
