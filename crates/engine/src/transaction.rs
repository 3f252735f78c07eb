use std::sync::Arc;
use std::time::Duration as StdDuration;

use chrono::Utc;

use vendo_catalog::{CatalogStore, ReserveError};
use vendo_core::{ItemId, MachineId, Money, PurchaseError, PurchaseResult};
use vendo_ledger::{PurchaseLedger, PurchaseRecord};

use crate::cooldown::CooldownGuard;

/// Post-commit stock at or below this raises the low-stock advisory.
pub const LOW_STOCK_THRESHOLD: u32 = 2;

/// A purchase request as it enters the engine (already deserialized, not yet
/// validated).
#[derive(Debug, Clone)]
pub struct PurchaseRequest {
    pub item_id: ItemId,
    pub quantity: i64,
}

/// Successful purchase result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurchaseOutcome {
    pub item_name: String,
    pub quantity: u32,
    pub total_cost: Money,
    pub remaining: u32,
    pub low_stock: bool,
}

/// Engine tuning. The production values are fixed by the machine contract;
/// tests inject shorter ones.
#[derive(Debug, Clone, Copy)]
pub struct EngineConfig {
    /// Models physical dispensing time, applied before validation.
    pub dispense_delay: StdDuration,
    /// Re-entry window per item name.
    pub cooldown_window: chrono::Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            dispense_delay: StdDuration::from_secs(5),
            cooldown_window: CooldownGuard::default_window(),
        }
    }
}

/// The purchase transaction engine (spec'd state machine).
///
/// One purchase runs: simulated dispensing delay, payload validation, item
/// resolution, cooldown check, atomic stock commit, ledger append. Failures
/// are classified into [`PurchaseError`]; nothing leaks unclassified.
pub struct TransactionEngine {
    catalog: Arc<CatalogStore>,
    ledger: Arc<PurchaseLedger>,
    cooldown: CooldownGuard,
    dispense_delay: StdDuration,
}

impl TransactionEngine {
    pub fn new(catalog: Arc<CatalogStore>, ledger: Arc<PurchaseLedger>, config: EngineConfig) -> Self {
        Self {
            catalog,
            ledger,
            cooldown: CooldownGuard::new(config.cooldown_window),
            dispense_delay: config.dispense_delay,
        }
    }

    /// Run one purchase to completion.
    ///
    /// The dispensing delay is per-request latency: it holds no lock, so
    /// unrelated purchases proceed while this one is "dispensing".
    pub async fn purchase(
        &self,
        request: PurchaseRequest,
        machine_id: MachineId,
    ) -> PurchaseResult<PurchaseOutcome> {
        tokio::time::sleep(self.dispense_delay).await;

        let quantity = validate_quantity(request.quantity)?;

        let item = self
            .catalog
            .get(&request.item_id)
            .ok_or(PurchaseError::NotFound)?;

        // Price snapshot: the amount is fixed here, not re-read after commit.
        let total_cost = item
            .price
            .checked_mul(quantity)
            .ok_or_else(|| PurchaseError::invalid_request("total cost overflows"))?;

        let now = Utc::now();
        self.cooldown
            .try_arm(&item.name, now)
            .map_err(|retry_after| PurchaseError::RateLimited { retry_after })?;

        let remaining = self
            .catalog
            .try_reserve(&request.item_id, quantity)
            .map_err(|e| match e {
                ReserveError::NotFound => PurchaseError::NotFound,
                ReserveError::Insufficient { remaining } => PurchaseError::OutOfStock { remaining },
            })?;

        let record = PurchaseRecord::new(
            request.item_id,
            item.name.clone(),
            quantity,
            total_cost,
            now,
            machine_id,
        );
        let purchase_id = self.ledger.append(record);

        tracing::info!(
            %purchase_id,
            item = %item.name,
            quantity,
            remaining,
            "purchase committed"
        );

        Ok(PurchaseOutcome {
            item_name: item.name,
            quantity,
            total_cost,
            remaining,
            low_stock: remaining <= LOW_STOCK_THRESHOLD,
        })
    }
}

fn validate_quantity(quantity: i64) -> PurchaseResult<u32> {
    if quantity < 1 {
        return Err(PurchaseError::invalid_request(
            "quantity must be a positive integer",
        ));
    }
    u32::try_from(quantity)
        .map_err(|_| PurchaseError::invalid_request("quantity is out of range"))
}
