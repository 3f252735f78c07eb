use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use vendo_core::{ItemId, MachineId, Money, PurchaseId};

/// One committed purchase (immutable once created).
///
/// `item_name` and `amount` are snapshots taken at purchase time; they are
/// never recomputed from the catalog's current state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseRecord {
    pub id: PurchaseId,
    #[serde(rename = "productId")]
    pub item_id: ItemId,
    #[serde(rename = "productName")]
    pub item_name: String,
    pub quantity: u32,
    /// Total paid: unit price at purchase time × quantity.
    pub amount: Money,
    #[serde(rename = "purchaseTime")]
    pub timestamp: DateTime<Utc>,
    pub machine_id: MachineId,
}

impl PurchaseRecord {
    /// Build a record, assigning a fresh id.
    pub fn new(
        item_id: ItemId,
        item_name: impl Into<String>,
        quantity: u32,
        amount: Money,
        timestamp: DateTime<Utc>,
        machine_id: MachineId,
    ) -> Self {
        Self {
            id: PurchaseId::new(),
            item_id,
            item_name: item_name.into(),
            quantity,
            amount,
            timestamp,
            machine_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_wire_field_names() {
        let record = PurchaseRecord::new(
            ItemId::from("coke"),
            "Coke",
            3,
            Money::from_cents(450),
            Utc::now(),
            MachineId::default(),
        );

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["productId"], "coke");
        assert_eq!(json["productName"], "Coke");
        assert_eq!(json["quantity"], 3);
        assert_eq!(json["amount"], serde_json::json!(4.5));
        assert_eq!(json["machineId"], "unknown");
        assert!(json.get("purchaseTime").is_some());
    }
}
