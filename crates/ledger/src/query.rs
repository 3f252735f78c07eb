//! History query engine: predicate filtering + multi-field sort over the
//! ledger snapshot. Read-only; reads the snapshot once per query.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};

use crate::record::PurchaseRecord;
use crate::store::PurchaseLedger;

/// Sortable record fields. Unknown wire values fall back to purchase time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    Amount,
    Quantity,
    ProductName,
    #[default]
    PurchaseTime,
}

impl SortField {
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
            Some("amount") => Self::Amount,
            Some("quantity") => Self::Quantity,
            Some("productname") => Self::ProductName,
            Some("purchasetime") => Self::PurchaseTime,
            _ => Self::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Ascending,
    #[default]
    Descending,
}

impl SortOrder {
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
            Some("asc") => Self::Ascending,
            Some("desc") => Self::Descending,
            _ => Self::default(),
        }
    }
}

/// Optional history filter; fields are independently optional and compose
/// with logical AND. An empty-after-trim `search_term` counts as absent, as
/// does `hours <= 0`.
#[derive(Debug, Clone, Default)]
pub struct HistoryFilter {
    pub search_term: Option<String>,
    pub machine_id: Option<String>,
    pub hours: Option<i64>,
    pub sort_field: SortField,
    pub sort_order: SortOrder,
}

/// Read-only view over the purchase ledger.
#[derive(Debug, Clone)]
pub struct HistoryQueryEngine {
    ledger: Arc<PurchaseLedger>,
}

impl HistoryQueryEngine {
    pub fn new(ledger: Arc<PurchaseLedger>) -> Self {
        Self { ledger }
    }

    /// Filter and sort the current ledger snapshot. No filter means all
    /// records in the default order (time-descending).
    pub fn query(&self, filter: Option<&HistoryFilter>) -> Vec<PurchaseRecord> {
        run(self.ledger.snapshot(), filter, Utc::now())
    }
}

fn run(
    mut records: Vec<PurchaseRecord>,
    filter: Option<&HistoryFilter>,
    now: DateTime<Utc>,
) -> Vec<PurchaseRecord> {
    let Some(filter) = filter else {
        records.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        return records;
    };

    if let Some(term) = filter
        .search_term
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
    {
        let needle = term.to_lowercase();
        records.retain(|r| r.item_name.to_lowercase().contains(&needle));
    }

    if let Some(machine_id) = filter.machine_id.as_deref() {
        records.retain(|r| r.machine_id.as_str() == machine_id);
    }

    if let Some(hours) = filter.hours.filter(|h| *h > 0) {
        let cutoff = now - Duration::hours(hours);
        records.retain(|r| r.timestamp >= cutoff);
    }

    // `sort_by` is stable, so records comparing equal keep append order.
    records.sort_by(|a, b| {
        let ordering = match filter.sort_field {
            SortField::Amount => a.amount.cmp(&b.amount),
            SortField::Quantity => a.quantity.cmp(&b.quantity),
            SortField::ProductName => a.item_name.cmp(&b.item_name),
            SortField::PurchaseTime => a.timestamp.cmp(&b.timestamp),
        };
        match filter.sort_order {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    });

    records
}
