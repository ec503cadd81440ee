use api_types::account::Account;
use api_types::budget::Budget;
use api_types::category::Category;
use api_types::transaction::Transaction;
use reqwest::header::HeaderMap;

use crate::api::ApiClient;
use crate::error::{ClientError, Result};

/// One mutually-fresh view of every collection.
///
/// Aggregation always runs against a whole snapshot, never a mix of stale
/// and fresh data.
#[derive(Debug, Default)]
pub struct Snapshot {
    pub accounts: Vec<Account>,
    pub transactions: Vec<Transaction>,
    pub budgets: Vec<Budget>,
    pub categories: Vec<Category>,
}

/// Fetches the four collections concurrently and merges them.
///
/// A collection that fails with a network or server error is logged and
/// degrades to empty; an `Unauthorized` answer propagates instead so the
/// caller can clear the session. There is deliberately no timeout, retry or
/// cancellation here.
pub async fn fetch_snapshot(api: &ApiClient, headers: &HeaderMap) -> Result<Snapshot> {
    let (accounts, transactions, budgets, categories) = tokio::join!(
        api.accounts(headers),
        api.transactions(headers),
        api.budgets(headers),
        api.categories(headers),
    );

    Ok(Snapshot {
        accounts: collection_or_empty("accounts", accounts)?,
        transactions: collection_or_empty("transactions", transactions)?,
        budgets: collection_or_empty("budgets", budgets)?,
        categories: collection_or_empty("categories", categories)?,
    })
}

fn collection_or_empty<T>(name: &str, result: Result<Vec<T>>) -> Result<Vec<T>> {
    match result {
        Ok(items) => Ok(items),
        Err(ClientError::Unauthorized) => Err(ClientError::Unauthorized),
        Err(err) => {
            tracing::warn!("failed to load {name}, rendering empty: {err}");
            Ok(Vec::new())
        }
    }
}
