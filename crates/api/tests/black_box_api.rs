use std::time::Duration;

use reqwest::StatusCode;
use serde_json::json;

use vendo_engine::EngineConfig;

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        // Same router as prod, but an ephemeral port and fast engine timings.
        let config = EngineConfig {
            dispense_delay: Duration::ZERO,
            cooldown_window: chrono::Duration::milliseconds(300),
        };
        let app = vendo_api::app::build_app(config);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn product_named(
    client: &reqwest::Client,
    base_url: &str,
    name: &str,
) -> serde_json::Value {
    let products: Vec<serde_json::Value> = client
        .get(format!("{}/api/products", base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    products
        .into_iter()
        .find(|p| p["name"] == name)
        .unwrap_or_else(|| panic!("product {name} not in catalog"))
}

async fn buy(
    client: &reqwest::Client,
    base_url: &str,
    product_id: &str,
    quantity: i64,
    machine_id: Option<&str>,
) -> reqwest::Response {
    let mut req = client
        .post(format!("{}/api/products/purchase", base_url))
        .json(&json!({ "productId": product_id, "quantity": quantity }));
    if let Some(machine_id) = machine_id {
        req = req.header("X-Machine-Id", machine_id);
    }
    req.send().await.unwrap()
}

#[tokio::test]
async fn health_endpoint_is_up() {
    let srv = TestServer::spawn().await;
    let res = reqwest::get(format!("{}/health", srv.base_url)).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn catalog_listing_returns_the_seed() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let products: Vec<serde_json::Value> = client
        .get(format!("{}/api/products", srv.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(products.len(), 6);
    let coke = products.iter().find(|p| p["name"] == "Coke").unwrap();
    assert_eq!(coke["price"], json!(1.5));
    assert_eq!(coke["stock"], json!(10));
    assert!(coke["categoryId"].is_string());
}

#[tokio::test]
async fn purchase_then_cooldown_then_recovery() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();
    let coke = product_named(&client, &srv.base_url, "Coke").await;
    let coke_id = coke["id"].as_str().unwrap();

    // Scenario 1: Coke qty=3.
    let res = buy(&client, &srv.base_url, coke_id, 3, Some("machine-001")).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["remaining"], json!(7));
    assert_eq!(body["quantityPurchased"], json!(3));
    assert_eq!(body["totalCost"], json!(4.5));
    assert!(body.get("warning").is_none());

    // Scenario 2: immediate retry is rate limited; stock unchanged.
    let res = buy(&client, &srv.base_url, coke_id, 1, None).await;
    assert_eq!(res.status(), StatusCode::TOO_MANY_REQUESTS);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["success"], json!(false));
    let coke = product_named(&client, &srv.base_url, "Coke").await;
    assert_eq!(coke["stock"], json!(7));

    // Scenario 5: hours=1 right after scenario 1 returns exactly that record.
    let purchases: Vec<serde_json::Value> = client
        .get(format!("{}/api/products/purchases?hours=1", srv.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(purchases.len(), 1);
    assert_eq!(purchases[0]["productName"], "Coke");
    assert_eq!(purchases[0]["amount"], json!(4.5));
    assert_eq!(purchases[0]["machineId"], "machine-001");

    // Past the window, purchases of the same item are allowed again.
    tokio::time::sleep(Duration::from_millis(350)).await;
    let res = buy(&client, &srv.base_url, coke_id, 1, None).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["remaining"], json!(6));
}

#[tokio::test]
async fn out_of_stock_is_500_and_leaves_stock_alone() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();
    let chocolate = product_named(&client, &srv.base_url, "Chocolate").await;
    let chocolate_id = chocolate["id"].as_str().unwrap();

    let res = buy(&client, &srv.base_url, chocolate_id, 2, None).await;
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["remaining"], json!(1));

    let chocolate = product_named(&client, &srv.base_url, "Chocolate").await;
    assert_eq!(chocolate["stock"], json!(1));
}

#[tokio::test]
async fn unknown_product_is_404() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = buy(&client, &srv.base_url, "does-not-exist", 1, None).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["success"], json!(false));
}

#[tokio::test]
async fn malformed_purchase_requests_are_400() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    // No payload at all.
    let res = client
        .post(format!("{}/api/products/purchase", srv.base_url))
        .header("content-type", "application/json")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    // Non-positive quantity.
    let coke = product_named(&client, &srv.base_url, "Coke").await;
    let res = buy(&client, &srv.base_url, coke["id"].as_str().unwrap(), 0, None).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn low_stock_purchase_carries_a_warning() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();
    let pepsi = product_named(&client, &srv.base_url, "Pepsi").await;

    let res = buy(&client, &srv.base_url, pepsi["id"].as_str().unwrap(), 1, None).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["remaining"], json!(1));
    assert!(body["warning"].as_str().unwrap().contains("Low stock"));
}

#[tokio::test]
async fn history_filters_and_sorts() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    for (name, quantity, machine) in [
        ("Coke", 3, "machine-001"),
        ("Water", 1, "machine-002"),
        ("Chips", 4, "machine-001"),
    ] {
        let product = product_named(&client, &srv.base_url, name).await;
        let res = buy(
            &client,
            &srv.base_url,
            product["id"].as_str().unwrap(),
            quantity,
            Some(machine),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK, "seed purchase of {name}");
    }

    // Amount ascending: 1.00 (Water), 4.50 (Coke), 8.00 (Chips).
    let purchases: Vec<serde_json::Value> = client
        .get(format!(
            "{}/api/products/purchases?sortField=amount&sortOrder=asc",
            srv.base_url
        ))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let amounts: Vec<_> = purchases.iter().map(|p| p["amount"].clone()).collect();
    assert_eq!(amounts, vec![json!(1.0), json!(4.5), json!(8.0)]);

    // Machine filter is an exact match.
    let purchases: Vec<serde_json::Value> = client
        .get(format!(
            "{}/api/products/purchases?machineId=machine-001",
            srv.base_url
        ))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(purchases.len(), 2);

    // Case-insensitive substring search.
    let purchases: Vec<serde_json::Value> = client
        .get(format!(
            "{}/api/products/purchases?searchTerm=WAT",
            srv.base_url
        ))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(purchases.len(), 1);
    assert_eq!(purchases[0]["productName"], "Water");

    // Unknown sort field falls back to time-descending: last purchase first.
    let purchases: Vec<serde_json::Value> = client
        .get(format!(
            "{}/api/products/purchases?sortField=bogus",
            srv.base_url
        ))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(purchases[0]["productName"], "Chips");
}

#[tokio::test]
async fn balance_stub_stays_in_range() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    for _ in 0..10 {
        let res = client
            .get(format!("{}/api/products/balance", srv.base_url))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let body: serde_json::Value = res.json().await.unwrap();
        let balance = body["balance"].as_f64().unwrap();
        assert!((1.0..10.0).contains(&balance), "balance {balance} out of range");
    }
}
