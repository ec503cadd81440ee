use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};

pub use money::{Money, ParseMoneyError};

mod money;

pub mod auth {
    use super::*;

    /// Request body for `POST /token/`.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct TokenRequest {
        pub username: String,
        pub password: String,
    }

    /// Response body from `POST /token/`.
    ///
    /// Both tokens are opaque bearer credentials. Only the access token is
    /// used by the observed flow; the refresh token is stored but never sent.
    #[derive(Debug, Clone, Serialize, Deserialize)]
    pub struct TokenPair {
        pub access: String,
        pub refresh: String,
    }

    /// Request body for `POST /register/`.
    #[derive(Debug, Clone, Serialize, Deserialize)]
    pub struct RegisterRequest {
        pub username: String,
        pub email: String,
        pub password: String,
        pub password2: String,
        pub first_name: String,
        pub last_name: String,
    }

    /// Error body carried by auth failures (`{"detail": "..."}`).
    #[derive(Debug, Deserialize)]
    pub struct ErrorDetail {
        pub detail: String,
    }
}

pub mod user {
    use super::*;

    /// The identity resolved from an access token via `GET /user/`.
    #[derive(Debug, Clone, Serialize, Deserialize)]
    pub struct User {
        pub id: i64,
        pub username: String,
        pub email: String,
        #[serde(default)]
        pub first_name: String,
        #[serde(default)]
        pub last_name: String,
    }
}

pub mod account {
    use super::*;

    #[derive(Debug, Clone, Serialize, Deserialize)]
    pub struct Account {
        pub id: i64,
        /// Account display name. The wire field is `name_account`.
        #[serde(rename = "name_account")]
        pub name: String,
        pub balance: Money,
    }

    /// Request body for creating an account.
    #[derive(Debug, Serialize)]
    pub struct AccountNew {
        #[serde(rename = "name_account")]
        pub name: String,
        pub balance: Money,
    }
}

pub mod transaction {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum TransactionKind {
        Deposit,
        Withdrawal,
    }

    impl TransactionKind {
        /// Returns the canonical kind string used on the wire.
        pub fn as_str(self) -> &'static str {
            match self {
                Self::Deposit => "deposit",
                Self::Withdrawal => "withdrawal",
            }
        }
    }

    #[derive(Debug, Clone, Serialize, Deserialize)]
    pub struct Transaction {
        pub id: i64,
        /// Monetary amount, always positive; the kind carries the direction.
        pub amount: Money,
        pub description: String,
        /// RFC3339 timestamp set by the server at creation.
        pub date: DateTime<FixedOffset>,
        /// Id of the account this transaction belongs to.
        pub account: i64,
        /// Optional category link.
        #[serde(default)]
        pub budget_category: Option<i64>,
        /// Category display name resolved by the server, absent when the
        /// transaction has no category.
        #[serde(default)]
        pub budget_category_name: Option<String>,
        #[serde(rename = "type")]
        pub kind: TransactionKind,
    }

    /// Request body for creating a transaction.
    #[derive(Debug, Serialize)]
    pub struct TransactionNew {
        pub amount: Money,
        pub description: String,
        pub account: i64,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub budget_category: Option<i64>,
        #[serde(rename = "type")]
        pub kind: TransactionKind,
    }
}

pub mod category {
    use super::*;

    #[derive(Debug, Clone, Serialize, Deserialize)]
    pub struct Category {
        pub id: i64,
        pub name: String,
        #[serde(default)]
        pub description: Option<String>,
        /// Optional budget link.
        #[serde(default)]
        pub budget: Option<i64>,
    }

    /// Request body for creating a category.
    #[derive(Debug, Serialize)]
    pub struct CategoryNew {
        pub name: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub description: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub budget: Option<i64>,
    }
}

pub mod budget {
    use super::*;

    #[derive(Debug, Clone, Serialize, Deserialize)]
    pub struct Budget {
        pub id: i64,
        pub name: String,
        pub total_amount: Money,
        /// Maintained by the server; the client never derives it.
        pub spent_amount: Money,
        /// Id of the associated account.
        pub account: i64,
        pub start_date: NaiveDate,
        pub end_date: NaiveDate,
    }

    /// Request body for creating a budget.
    #[derive(Debug, Serialize)]
    pub struct BudgetNew {
        pub name: String,
        pub total_amount: Money,
        pub account: i64,
        pub start_date: NaiveDate,
        pub end_date: NaiveDate,
    }
}

pub mod list {
    use super::*;

    /// Normalizes the two list shapes the API may return.
    ///
    /// Collection endpoints answer either a raw JSON array or a paginated
    /// object with a `results` array. Everything past the API boundary works
    /// on the canonical `Vec<T>` from [`into_items`].
    ///
    /// [`into_items`]: ListResponse::into_items
    #[derive(Debug, Deserialize)]
    #[serde(untagged)]
    pub enum ListResponse<T> {
        Paginated { results: Vec<T> },
        Plain(Vec<T>),
    }

    impl<T> ListResponse<T> {
        pub fn into_items(self) -> Vec<T> {
            match self {
                Self::Paginated { results } => results,
                Self::Plain(items) => items,
            }
        }
    }
}
