use api_types::Money;

use crate::spending::CategorySpend;

/// One category's angular share of total categorized spending.
///
/// Angles are in degrees, measured cumulatively from 0 so slices can be drawn
/// back to back in the group order produced by
/// [`spending_by_category`](crate::spending_by_category).
#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub category: String,
    pub amount: Money,
    /// Share of the total, 0..=100.
    pub percent: f64,
    pub start_angle: f64,
    pub end_angle: f64,
}

/// Computes cumulative pie-chart geometry for an ordered category breakdown.
///
/// Each slice spans `percent * 3.6` degrees. The cumulative sum accumulates
/// floating-point drift, so the final slice's end angle is clamped to exactly
/// 360 — earlier boundaries are left untouched. An empty breakdown (or one
/// with a zero total) yields no slices rather than dividing by zero.
#[must_use]
pub fn pie_slices(totals: &[CategorySpend]) -> Vec<PieSlice> {
    let total: Money = totals.iter().map(|group| group.total).sum();
    if total.is_zero() {
        return Vec::new();
    }

    let mut slices = Vec::with_capacity(totals.len());
    let mut cumulative_percent = 0.0f64;

    for group in totals {
        let percent = group.total.as_f64() / total.as_f64() * 100.0;
        let start_angle = cumulative_percent * 3.6;
        cumulative_percent += percent;
        let end_angle = cumulative_percent * 3.6;

        slices.push(PieSlice {
            category: group.category.clone(),
            amount: group.total,
            percent,
            start_angle,
            end_angle,
        });
    }

    if let Some(last) = slices.last_mut() {
        last.end_angle = 360.0;
    }

    slices
}
