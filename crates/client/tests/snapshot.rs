use client::{ApiClient, ClientError, fetch_snapshot};
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};

fn bearer_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer test-access"));
    headers
}

const ACCOUNTS_PLAIN: &str = r#"[
    {"id": 1, "name_account": "Checking", "balance": "100.00"},
    {"id": 2, "name_account": "Savings", "balance": "2500.50"}
]"#;

const TRANSACTIONS_PAGINATED: &str = r#"{"results": [
    {"id": 1, "amount": "30.00", "description": "Groceries",
     "date": "2026-08-01T10:15:00+02:00", "account": 1,
     "budget_category": 2, "budget_category_name": "Food", "type": "withdrawal"}
]}"#;

#[tokio::test]
async fn snapshot_normalizes_both_list_shapes() {
    let mut server = mockito::Server::new_async().await;
    let _accounts = server
        .mock("GET", "/accounts/")
        .match_header("authorization", "Bearer test-access")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(ACCOUNTS_PLAIN)
        .create_async()
        .await;
    let _transactions = server
        .mock("GET", "/transactions/")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(TRANSACTIONS_PAGINATED)
        .create_async()
        .await;
    let _budgets = server
        .mock("GET", "/budgets/")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("[]")
        .create_async()
        .await;
    let _categories = server
        .mock("GET", "/categories/")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"results": []}"#)
        .create_async()
        .await;

    let api = ApiClient::new(&server.url()).unwrap();
    let snapshot = fetch_snapshot(&api, &bearer_headers()).await.unwrap();

    assert_eq!(snapshot.accounts.len(), 2);
    assert_eq!(snapshot.transactions.len(), 1);
    assert_eq!(snapshot.transactions[0].amount.cents(), 3000);
    assert!(snapshot.budgets.is_empty());
    assert!(snapshot.categories.is_empty());
}

#[tokio::test]
async fn failed_collection_degrades_to_empty() {
    let mut server = mockito::Server::new_async().await;
    let _accounts = server
        .mock("GET", "/accounts/")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(ACCOUNTS_PLAIN)
        .create_async()
        .await;
    let _transactions = server
        .mock("GET", "/transactions/")
        .with_status(500)
        .with_body("internal error")
        .create_async()
        .await;
    let _budgets = server
        .mock("GET", "/budgets/")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("[]")
        .create_async()
        .await;
    let _categories = server
        .mock("GET", "/categories/")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("[]")
        .create_async()
        .await;

    let api = ApiClient::new(&server.url()).unwrap();
    let snapshot = fetch_snapshot(&api, &bearer_headers()).await.unwrap();

    // The failing collection is empty; the others still load.
    assert!(snapshot.transactions.is_empty());
    assert_eq!(snapshot.accounts.len(), 2);
}

#[tokio::test]
async fn unauthorized_propagates_instead_of_degrading() {
    let mut server = mockito::Server::new_async().await;
    for path in ["/accounts/", "/transactions/", "/budgets/", "/categories/"] {
        server
            .mock("GET", path)
            .with_status(401)
            .with_header("content-type", "application/json")
            .with_body(r#"{"detail": "Authentication credentials were not provided."}"#)
            .create_async()
            .await;
    }

    let api = ApiClient::new(&server.url()).unwrap();
    let err = fetch_snapshot(&api, &HeaderMap::new()).await.unwrap_err();
    assert!(matches!(err, ClientError::Unauthorized));
}

#[tokio::test]
async fn create_transaction_posts_wire_shape() {
    let mut server = mockito::Server::new_async().await;
    let _create = server
        .mock("POST", "/transactions/")
        .match_header("content-type", "application/json")
        .match_body(mockito::Matcher::Json(serde_json::json!({
            "amount": "12.50",
            "description": "Lunch",
            "account": 1,
            "type": "withdrawal"
        })))
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"id": 9, "amount": "12.50", "description": "Lunch",
                "date": "2026-08-30T12:00:00+02:00", "account": 1,
                "type": "withdrawal"}"#,
        )
        .create_async()
        .await;

    let api = ApiClient::new(&server.url()).unwrap();
    let new = api_types::transaction::TransactionNew {
        amount: api_types::Money::new(12_50),
        description: "Lunch".to_string(),
        account: 1,
        budget_category: None,
        kind: api_types::transaction::TransactionKind::Withdrawal,
    };

    let created = api
        .create_transaction(&bearer_headers(), &new)
        .await
        .unwrap();
    assert_eq!(created.id, 9);
    assert_eq!(created.amount.cents(), 12_50);
}
