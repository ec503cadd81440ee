//! Pure, stateless transforms over the raw collections fetched from the API.
//!
//! Every function here is a synchronous computation of its inputs: no hidden
//! state, no I/O, safe to call repeatedly and in any order. Pages fetch one
//! consistent snapshot of accounts/transactions/budgets/categories and derive
//! every view (totals, category breakdown, pie geometry, budget status) from
//! it instead of recomputing ad hoc.

pub use budgets::{BudgetProgress, BudgetStatus, budget_progress, budget_status};
pub use pie::{PieSlice, pie_slices};
pub use spending::{
    CategorySpend, DEFAULT_PURCHASE_LIMIT, UNCATEGORIZED_LABEL, biggest_purchases,
    spending_by_category,
};
pub use totals::{net_flow, recent_transactions, total_balance, total_by_kind};

mod budgets;
mod pie;
mod spending;
mod totals;
