//! `vendo-engine` — the purchase transaction engine.
//!
//! Orchestrates validation, the per-item cooldown, the atomic stock commit
//! and the ledger append. The engine is the only writer of the catalog store
//! and the purchase ledger.

pub mod cooldown;
pub mod transaction;

pub use cooldown::CooldownGuard;
pub use transaction::{
    EngineConfig, PurchaseOutcome, PurchaseRequest, TransactionEngine, LOW_STOCK_THRESHOLD,
};
