use dashmap::DashMap;

use vendo_core::{ItemId, Money};

use crate::item::Item;

/// Why a reservation did not commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReserveError {
    /// No item with the given id.
    NotFound,
    /// `stock < quantity`; stock left untouched.
    Insufficient { remaining: u32 },
}

/// In-memory catalog store.
///
/// Backed by a sharded map, so check-and-decrement on one item is a single
/// indivisible region under that item's shard lock while purchases of other
/// items proceed independently.
#[derive(Debug, Default)]
pub struct CatalogStore {
    items: DashMap<ItemId, Item>,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an item (seeding/admin path).
    pub fn insert(&self, item: Item) {
        self.items.insert(item.id.clone(), item);
    }

    /// Snapshot of all items, ordered by name for a stable listing.
    pub fn list_all(&self) -> Vec<Item> {
        let mut items: Vec<Item> = self.items.iter().map(|e| e.value().clone()).collect();
        items.sort_by(|a, b| a.name.cmp(&b.name));
        items
    }

    pub fn get(&self, id: &ItemId) -> Option<Item> {
        self.items.get(id).map(|e| e.value().clone())
    }

    /// Atomically check `stock >= quantity` and decrement.
    ///
    /// Returns the post-decrement stock on success. Two concurrent calls for
    /// the same item can never both succeed when only one has sufficient
    /// stock: the shard write lock is held across the check and the write.
    pub fn try_reserve(&self, id: &ItemId, quantity: u32) -> Result<u32, ReserveError> {
        let mut entry = self.items.get_mut(id).ok_or(ReserveError::NotFound)?;
        let item = entry.value_mut();
        if item.stock < quantity {
            return Err(ReserveError::Insufficient {
                remaining: item.stock,
            });
        }
        item.stock -= quantity;
        Ok(item.stock)
    }

    /// Re-price an item. Purchase records snapshot the price at commit time,
    /// so this never rewrites history.
    pub fn set_price(&self, id: &ItemId, price: Money) -> bool {
        match self.items.get_mut(id) {
            Some(mut entry) => {
                entry.value_mut().price = price;
                true
            }
            None => false,
        }
    }
}
