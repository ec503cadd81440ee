use api_types::Money;
use api_types::budget::Budget;
use chrono::NaiveDate;

/// Spend progress of a single budget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BudgetProgress {
    /// Spent share of the total, capped at 100.
    pub percentage: f64,
    /// Amount left to spend; negative when overspent.
    pub remaining: Money,
}

/// Health of a budget, derived from spend ratio and date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetStatus {
    OverBudget,
    Ended,
    Warning,
    OnTrack,
}

impl BudgetStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::OverBudget => "Over budget",
            Self::Ended => "Ended",
            Self::Warning => "Warning",
            Self::OnTrack => "On track",
        }
    }
}

/// Progress bar numbers for a budget.
///
/// `percentage` is defined as 0 for a zero-total budget; the ratio is
/// otherwise `spent / total`, capped at 100. `remaining` is uncapped and
/// goes negative on overspend.
#[must_use]
pub fn budget_progress(budget: &Budget) -> BudgetProgress {
    let percentage = if budget.total_amount.is_zero() {
        0.0
    } else {
        (budget.spent_amount.as_f64() / budget.total_amount.as_f64() * 100.0).min(100.0)
    };

    BudgetProgress {
        percentage,
        remaining: budget.total_amount - budget.spent_amount,
    }
}

/// Classifies a budget, first match wins:
///
/// 1. spent ratio above 1 → [`OverBudget`]
/// 2. end date in the past → [`Ended`]
/// 3. spent ratio above 0.8 → [`Warning`]
/// 4. otherwise → [`OnTrack`]
///
/// Ratio checks compare integer cents so the boundaries are exact.
///
/// [`OverBudget`]: BudgetStatus::OverBudget
/// [`Ended`]: BudgetStatus::Ended
/// [`Warning`]: BudgetStatus::Warning
/// [`OnTrack`]: BudgetStatus::OnTrack
#[must_use]
pub fn budget_status(budget: &Budget, today: NaiveDate) -> BudgetStatus {
    let spent = budget.spent_amount.cents();
    let total = budget.total_amount.cents();

    // spent/total > 1, covering the zero-total case (any spend overruns an
    // empty budget).
    let over_budget = spent > total || (total == 0 && spent > 0);
    if over_budget {
        return BudgetStatus::OverBudget;
    }

    if budget.end_date < today {
        return BudgetStatus::Ended;
    }

    // spent/total > 0.8, in integer cents.
    if total > 0 && spent * 10 > total * 8 {
        return BudgetStatus::Warning;
    }

    BudgetStatus::OnTrack
}

#[cfg(test)]
mod tests {
    use super::*;

    fn budget(spent: i64, total: i64, end_date: NaiveDate) -> Budget {
        Budget {
            id: 1,
            name: "Monthly".to_string(),
            total_amount: Money::new(total),
            spent_amount: Money::new(spent),
            account: 1,
            start_date: end_date - chrono::Days::new(30),
            end_date,
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn progress_halfway() {
        let progress = budget_progress(&budget(50_00, 100_00, date(2026, 9, 1)));
        assert_eq!(progress.percentage, 50.0);
        assert_eq!(progress.remaining, Money::new(50_00));
    }

    #[test]
    fn progress_caps_percentage_but_not_remaining() {
        let progress = budget_progress(&budget(150_00, 100_00, date(2026, 9, 1)));
        assert_eq!(progress.percentage, 100.0);
        assert_eq!(progress.remaining, Money::new(-50_00));
    }

    #[test]
    fn zero_total_budget_has_zero_percentage() {
        let progress = budget_progress(&budget(0, 0, date(2026, 9, 1)));
        assert_eq!(progress.percentage, 0.0);
        assert_eq!(progress.remaining, Money::ZERO);
    }

    #[test]
    fn over_budget_wins_over_ended() {
        let today = date(2026, 8, 30);
        let yesterday = date(2026, 8, 29);

        let status = budget_status(&budget(120_00, 100_00, yesterday), today);
        assert_eq!(status, BudgetStatus::OverBudget);
    }

    #[test]
    fn ended_wins_over_warning() {
        let today = date(2026, 8, 30);
        let yesterday = date(2026, 8, 29);

        let status = budget_status(&budget(90_00, 100_00, yesterday), today);
        assert_eq!(status, BudgetStatus::Ended);
    }

    #[test]
    fn warning_above_eighty_percent() {
        let today = date(2026, 8, 30);
        let next_week = date(2026, 9, 6);

        assert_eq!(
            budget_status(&budget(81_00, 100_00, next_week), today),
            BudgetStatus::Warning
        );
        // Exactly 80% is still on track (strictly greater).
        assert_eq!(
            budget_status(&budget(80_00, 100_00, next_week), today),
            BudgetStatus::OnTrack
        );
    }

    #[test]
    fn exactly_spent_budget_is_not_over() {
        let today = date(2026, 8, 30);
        let next_week = date(2026, 9, 6);

        // ratio == 1.0 is not "over"; it lands in Warning via the 0.8 rule.
        assert_eq!(
            budget_status(&budget(100_00, 100_00, next_week), today),
            BudgetStatus::Warning
        );
    }

    #[test]
    fn zero_total_with_spend_is_over_budget() {
        let today = date(2026, 8, 30);
        assert_eq!(
            budget_status(&budget(1, 0, date(2026, 9, 6)), today),
            BudgetStatus::OverBudget
        );
        assert_eq!(
            budget_status(&budget(0, 0, date(2026, 9, 6)), today),
            BudgetStatus::OnTrack
        );
    }
}
