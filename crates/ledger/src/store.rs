use parking_lot::RwLock;

use vendo_core::PurchaseId;

use crate::record::PurchaseRecord;

/// Append-only, process-lifetime store of purchase records.
///
/// Append holds the write lock for the push, so readers never observe a
/// partially-appended record, and a record is visible to the very next
/// snapshot call.
#[derive(Debug, Default)]
pub struct PurchaseLedger {
    records: RwLock<Vec<PurchaseRecord>>,
}

impl PurchaseLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a record. Append-only and unbounded; no error condition.
    pub fn append(&self, record: PurchaseRecord) -> PurchaseId {
        let id = record.id;
        self.records.write().push(record);
        id
    }

    /// Full snapshot in append order, freshly materialized per call.
    pub fn snapshot(&self) -> Vec<PurchaseRecord> {
        self.records.read().clone()
    }

    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}
