use api_types::Money;
use api_types::account::Account;
use api_types::transaction::{Transaction, TransactionKind};

/// Sum of all account balances.
#[must_use]
pub fn total_balance(accounts: &[Account]) -> Money {
    accounts.iter().map(|account| account.balance).sum()
}

/// Sum of transaction amounts of the given kind.
#[must_use]
pub fn total_by_kind(transactions: &[Transaction], kind: TransactionKind) -> Money {
    transactions
        .iter()
        .filter(|tx| tx.kind == kind)
        .map(|tx| tx.amount)
        .sum()
}

/// Deposits minus withdrawals.
#[must_use]
pub fn net_flow(transactions: &[Transaction]) -> Money {
    total_by_kind(transactions, TransactionKind::Deposit)
        - total_by_kind(transactions, TransactionKind::Withdrawal)
}

/// First `limit` transactions in feed order.
#[must_use]
pub fn recent_transactions(transactions: &[Transaction], limit: usize) -> Vec<Transaction> {
    transactions.iter().take(limit).cloned().collect()
}
