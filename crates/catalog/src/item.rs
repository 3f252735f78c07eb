use serde::{Deserialize, Serialize};

use vendo_core::{CategoryId, ItemId, Money};

/// A purchasable catalog entry.
///
/// `stock` is an unsigned count, so "never negative" holds by construction;
/// the store's reserve path guarantees no decrement is lost or doubled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub price: Money,
    pub stock: u32,
    pub category_id: Option<CategoryId>,
}

impl Item {
    pub fn new(
        id: ItemId,
        name: impl Into<String>,
        price: Money,
        stock: u32,
        category_id: Option<CategoryId>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            stock,
            category_id,
        }
    }
}
