use std::fmt::Write as _;

use api_types::Money;
use api_types::transaction::TransactionKind;
use api_types::user::User;
use chrono::NaiveDate;
use client::Snapshot;
use engine::{
    DEFAULT_PURCHASE_LIMIT, biggest_purchases, budget_progress, budget_status, net_flow,
    pie_slices, recent_transactions, spending_by_category, total_balance, total_by_kind,
};

const BAR_WIDTH: usize = 20;

/// Renders the derived dashboard views as plain text.
///
/// All numbers come out of the engine; this function only formats.
pub fn dashboard(snapshot: &Snapshot, user: &User, today: NaiveDate) -> String {
    let mut out = String::new();

    let name = if user.first_name.is_empty() {
        &user.username
    } else {
        &user.first_name
    };
    let _ = writeln!(out, "Dashboard for {name}");
    let _ = writeln!(out);

    summary(&mut out, snapshot);
    recent(&mut out, snapshot);
    purchases(&mut out, snapshot);
    categories(&mut out, snapshot);
    budgets(&mut out, snapshot, today);

    out
}

fn summary(out: &mut String, snapshot: &Snapshot) {
    let income = total_by_kind(&snapshot.transactions, TransactionKind::Deposit);
    let expenses = total_by_kind(&snapshot.transactions, TransactionKind::Withdrawal);

    let _ = writeln!(out, "Summary");
    let _ = writeln!(
        out,
        "  Total balance:  ${}",
        total_balance(&snapshot.accounts)
    );
    let _ = writeln!(out, "  Total income:   +${income}");
    let _ = writeln!(out, "  Total expenses: -${expenses}");
    let _ = writeln!(out, "  Net flow:       ${}", net_flow(&snapshot.transactions));
    let _ = writeln!(out);
}

fn recent(out: &mut String, snapshot: &Snapshot) {
    let _ = writeln!(out, "Recent transactions");
    let transactions = recent_transactions(&snapshot.transactions, DEFAULT_PURCHASE_LIMIT);
    if transactions.is_empty() {
        let _ = writeln!(out, "  (no transactions yet)");
    }
    for tx in &transactions {
        let sign = match tx.kind {
            TransactionKind::Deposit => '+',
            TransactionKind::Withdrawal => '-',
        };
        let _ = writeln!(
            out,
            "  {}  {:<30} {sign}${}",
            tx.date.format("%Y-%m-%d"),
            tx.description,
            tx.amount
        );
    }
    let _ = writeln!(out);
}

fn purchases(out: &mut String, snapshot: &Snapshot) {
    let _ = writeln!(out, "Biggest purchases");
    let purchases = biggest_purchases(&snapshot.transactions, None, DEFAULT_PURCHASE_LIMIT);
    if purchases.is_empty() {
        let _ = writeln!(out, "  (no purchases yet)");
    }
    for tx in &purchases {
        let _ = writeln!(out, "  {:<30} ${}", tx.description, tx.amount);
    }
    let _ = writeln!(out);
}

fn categories(out: &mut String, snapshot: &Snapshot) {
    let _ = writeln!(out, "Spending by category");
    let groups = spending_by_category(&snapshot.transactions, None);
    let slices = pie_slices(&groups);
    if slices.is_empty() {
        let _ = writeln!(out, "  (no categorized spending yet)");
    }
    for slice in &slices {
        let _ = writeln!(
            out,
            "  {:<16} ${:>10}  {} {:>5.1}%",
            slice.category,
            slice.amount.to_string(),
            percentage_bar(slice.percent),
            slice.percent
        );
    }
    let _ = writeln!(out);
}

fn budgets(out: &mut String, snapshot: &Snapshot, today: NaiveDate) {
    let _ = writeln!(out, "Budget progress");
    if snapshot.budgets.is_empty() {
        let _ = writeln!(out, "  (no budgets set up)");
    }
    for budget in &snapshot.budgets {
        let progress = budget_progress(budget);
        let status = budget_status(budget, today);
        let _ = writeln!(
            out,
            "  {:<16} ${} / ${}  {} {:>5.1}%  [{}]",
            budget.name,
            budget.spent_amount,
            budget.total_amount,
            percentage_bar(progress.percentage),
            progress.percentage,
            status.label()
        );
        if progress.remaining.is_negative() {
            let _ = writeln!(out, "  {:<16} overspent by ${}", "", -progress.remaining);
        }
    }
}

/// `████████░░░░░░░░░░░░` for a 0..=100 percentage.
fn percentage_bar(percent: f64) -> String {
    let ratio = (percent / 100.0).clamp(0.0, 1.0);
    let filled = ((ratio * BAR_WIDTH as f64) as usize).min(BAR_WIDTH);
    let empty = BAR_WIDTH.saturating_sub(filled);
    format!("{}{}", "█".repeat(filled), "░".repeat(empty))
}
