use api_types::Money;
use api_types::transaction::{Transaction, TransactionKind};

/// Display label for withdrawals with no linked category.
pub const UNCATEGORIZED_LABEL: &str = "Uncategorized";

/// Default number of entries returned by [`biggest_purchases`].
pub const DEFAULT_PURCHASE_LIMIT: usize = 5;

/// Total spent in one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySpend {
    pub category: String,
    pub total: Money,
}

/// Groups withdrawal amounts by category display name.
///
/// Only withdrawals count; `account` narrows the input to one account when
/// given. Transactions without a category fall back to
/// [`UNCATEGORIZED_LABEL`]. Groups keep insertion order: the first
/// transaction seen for a category fixes its position, so any chart derived
/// from the result renders deterministically.
#[must_use]
pub fn spending_by_category(
    transactions: &[Transaction],
    account: Option<i64>,
) -> Vec<CategorySpend> {
    let mut groups: Vec<CategorySpend> = Vec::new();

    for tx in withdrawals(transactions, account) {
        let label = tx
            .budget_category_name
            .as_deref()
            .unwrap_or(UNCATEGORIZED_LABEL);

        match groups.iter_mut().find(|group| group.category == label) {
            Some(group) => group.total += tx.amount,
            None => groups.push(CategorySpend {
                category: label.to_string(),
                total: tx.amount,
            }),
        }
    }

    groups
}

/// The `limit` largest withdrawals, sorted by amount descending.
///
/// The sort is stable: ties keep their original relative order.
#[must_use]
pub fn biggest_purchases(
    transactions: &[Transaction],
    account: Option<i64>,
    limit: usize,
) -> Vec<Transaction> {
    let mut purchases: Vec<Transaction> = withdrawals(transactions, account).cloned().collect();
    purchases.sort_by(|a, b| b.amount.cmp(&a.amount));
    purchases.truncate(limit);
    purchases
}

fn withdrawals(
    transactions: &[Transaction],
    account: Option<i64>,
) -> impl Iterator<Item = &Transaction> {
    transactions
        .iter()
        .filter(|tx| tx.kind == TransactionKind::Withdrawal)
        .filter(move |tx| account.is_none_or(|id| tx.account == id))
}
