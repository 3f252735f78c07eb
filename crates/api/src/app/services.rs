use std::sync::Arc;

use vendo_catalog::{CatalogStore, Item};
use vendo_core::{CategoryId, ItemId, Money};
use vendo_engine::{EngineConfig, TransactionEngine};
use vendo_ledger::{HistoryQueryEngine, PurchaseLedger};

/// Shared application services, constructed once per process.
pub struct AppServices {
    pub catalog: Arc<CatalogStore>,
    pub ledger: Arc<PurchaseLedger>,
    pub engine: TransactionEngine,
    pub history: HistoryQueryEngine,
}

/// Wire up stores and engines and seed the catalog.
pub fn build_services(config: EngineConfig) -> AppServices {
    let catalog = Arc::new(CatalogStore::new());
    seed_catalog(&catalog);

    let ledger = Arc::new(PurchaseLedger::new());
    let engine = TransactionEngine::new(catalog.clone(), ledger.clone(), config);
    let history = HistoryQueryEngine::new(ledger.clone());

    AppServices {
        catalog,
        ledger,
        engine,
        history,
    }
}

/// Initial machine load-out.
fn seed_catalog(catalog: &CatalogStore) {
    let drinks = CategoryId::generate();
    let snacks = CategoryId::generate();

    let items = [
        ("Coke", 150, 10, &drinks),
        ("Pepsi", 150, 2, &drinks),
        ("Water", 100, 15, &drinks),
        ("Chips", 200, 8, &snacks),
        ("Chocolate", 250, 1, &snacks),
        ("Cookies", 175, 12, &snacks),
    ];

    for (name, price_cents, stock, category) in items {
        catalog.insert(Item::new(
            ItemId::generate(),
            name,
            Money::from_cents(price_cents),
            stock,
            Some(category.clone()),
        ));
    }
}
