use std::collections::HashMap;

use api_types::account::{Account, AccountNew};
use api_types::budget::{Budget, BudgetNew};
use api_types::category::{Category, CategoryNew};
use api_types::list::ListResponse;
use api_types::transaction::{Transaction, TransactionNew};
use reqwest::{Response, StatusCode, Url, header::HeaderMap};
use serde::{Serialize, de::DeserializeOwned};

use crate::error::{ClientError, Result};

/// Parses a base URL, guaranteeing a trailing slash so `Url::join` keeps the
/// `/api` prefix instead of treating it as a file segment.
pub(crate) fn parse_base_url(base_url: &str) -> Result<Url> {
    let normalized = if base_url.ends_with('/') {
        base_url.to_string()
    } else {
        format!("{base_url}/")
    };
    Url::parse(&normalized).map_err(|err| ClientError::BaseUrl(err.to_string()))
}

/// Typed client for the collection endpoints.
///
/// Authentication is not owned here: every call takes the header material
/// produced by [`SessionStore::auth_headers`], so pages decide when a request
/// is authenticated. List responses are normalized through [`ListResponse`]
/// before anything else sees them.
///
/// [`SessionStore::auth_headers`]: crate::SessionStore::auth_headers
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: Url,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self> {
        Ok(Self {
            base_url: parse_base_url(base_url)?,
            http: reqwest::Client::new(),
        })
    }

    pub async fn accounts(&self, headers: &HeaderMap) -> Result<Vec<Account>> {
        self.get_list("accounts/", headers).await
    }

    pub async fn transactions(&self, headers: &HeaderMap) -> Result<Vec<Transaction>> {
        self.get_list("transactions/", headers).await
    }

    pub async fn budgets(&self, headers: &HeaderMap) -> Result<Vec<Budget>> {
        self.get_list("budgets/", headers).await
    }

    pub async fn categories(&self, headers: &HeaderMap) -> Result<Vec<Category>> {
        self.get_list("categories/", headers).await
    }

    pub async fn create_account(&self, headers: &HeaderMap, new: &AccountNew) -> Result<Account> {
        self.post_json("accounts/", headers, new).await
    }

    pub async fn create_transaction(
        &self,
        headers: &HeaderMap,
        new: &TransactionNew,
    ) -> Result<Transaction> {
        self.post_json("transactions/", headers, new).await
    }

    pub async fn create_budget(&self, headers: &HeaderMap, new: &BudgetNew) -> Result<Budget> {
        self.post_json("budgets/", headers, new).await
    }

    pub async fn create_category(
        &self,
        headers: &HeaderMap,
        new: &CategoryNew,
    ) -> Result<Category> {
        self.post_json("categories/", headers, new).await
    }

    pub async fn update_transaction(
        &self,
        headers: &HeaderMap,
        id: i64,
        update: &TransactionNew,
    ) -> Result<Transaction> {
        self.put_json(&format!("transactions/{id}/"), headers, update)
            .await
    }

    pub async fn delete_transaction(&self, headers: &HeaderMap, id: i64) -> Result<()> {
        self.delete(&format!("transactions/{id}/"), headers).await
    }

    async fn get_list<T: DeserializeOwned>(
        &self,
        path: &str,
        headers: &HeaderMap,
    ) -> Result<Vec<T>> {
        let res = self
            .http
            .get(self.join(path)?)
            .headers(headers.clone())
            .send()
            .await?;

        if !res.status().is_success() {
            return Err(error_from_response(res).await);
        }

        let list: ListResponse<T> = res.json().await?;
        Ok(list.into_items())
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        headers: &HeaderMap,
        body: &B,
    ) -> Result<T> {
        let res = self
            .http
            .post(self.join(path)?)
            .headers(headers.clone())
            .json(body)
            .send()
            .await?;

        if !res.status().is_success() {
            return Err(error_from_response(res).await);
        }
        Ok(res.json().await?)
    }

    async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        headers: &HeaderMap,
        body: &B,
    ) -> Result<T> {
        let res = self
            .http
            .put(self.join(path)?)
            .headers(headers.clone())
            .json(body)
            .send()
            .await?;

        if !res.status().is_success() {
            return Err(error_from_response(res).await);
        }
        Ok(res.json().await?)
    }

    async fn delete(&self, path: &str, headers: &HeaderMap) -> Result<()> {
        let res = self
            .http
            .delete(self.join(path)?)
            .headers(headers.clone())
            .send()
            .await?;

        if !res.status().is_success() {
            return Err(error_from_response(res).await);
        }
        Ok(())
    }

    fn join(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|err| ClientError::BaseUrl(err.to_string()))
    }
}

/// Maps a non-2xx response to the error taxonomy.
async fn error_from_response(res: Response) -> ClientError {
    let status = res.status();
    let body = res.text().await.unwrap_or_default();

    match status {
        StatusCode::UNAUTHORIZED => ClientError::Unauthorized,
        StatusCode::NOT_FOUND => ClientError::NotFound,
        status if status.is_client_error() => {
            match serde_json::from_str::<HashMap<String, Vec<String>>>(&body) {
                Ok(map) => ClientError::Validation(map),
                Err(_) => ClientError::Server(format!("request failed with status {status}")),
            }
        }
        status => ClientError::Server(format!("request failed with status {status}")),
    }
}
