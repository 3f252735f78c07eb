use serde::{Deserialize, Serialize};

use vendo_core::{ItemId, Money};
use vendo_engine::PurchaseOutcome;

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseRequest {
    pub product_id: ItemId,
    pub quantity: i64,
}

/// History query parameters; every field independently optional.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryParams {
    pub search_term: Option<String>,
    pub machine_id: Option<String>,
    pub hours: Option<i64>,
    pub sort_field: Option<String>,
    pub sort_order: Option<String>,
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseResponse {
    pub success: bool,
    pub message: String,
    pub remaining: u32,
    pub quantity_purchased: u32,
    pub total_cost: Money,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

impl PurchaseResponse {
    pub fn committed(outcome: PurchaseOutcome) -> Self {
        let warning = outcome.low_stock.then(|| {
            format!(
                "Low stock: only {} {} left",
                outcome.remaining, outcome.item_name
            )
        });
        Self {
            success: true,
            message: format!(
                "Dispensed {} x {} for {}",
                outcome.quantity, outcome.item_name, outcome.total_cost
            ),
            remaining: outcome.remaining,
            quantity_purchased: outcome.quantity,
            total_cost: outcome.total_cost,
            warning,
        }
    }

    pub fn failed(message: impl Into<String>, remaining: u32) -> Self {
        Self {
            success: false,
            message: message.into(),
            remaining,
            quantity_purchased: 0,
            total_cost: Money::ZERO,
            warning: None,
        }
    }
}
