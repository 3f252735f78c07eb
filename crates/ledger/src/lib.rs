//! `vendo-ledger` — append-only purchase history.
//!
//! The ledger owns the immutable purchase records; the query engine is the
//! read-only view over them (filter + sort, no shared mutable state).

pub mod query;
pub mod record;
pub mod store;

pub use query::{HistoryFilter, HistoryQueryEngine, SortField, SortOrder};
pub use record::PurchaseRecord;
pub use store::PurchaseLedger;
