//! `vendo-catalog` — the catalog store.
//!
//! Owns the mutable item records (price, stock). The transaction engine is
//! the only writer of stock; everything else reads snapshots.

pub mod item;
pub mod store;

pub use item::Item;
pub use store::{CatalogStore, ReserveError};
