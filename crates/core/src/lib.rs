//! `vendo-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod error;
pub mod id;
pub mod money;

pub use error::{PurchaseError, PurchaseResult};
pub use id::{CategoryId, ItemId, MachineId, PurchaseId};
pub use money::Money;
