//! Pure derived metrics over debts and goals. Everything here is stateless
//! and deterministic given its inputs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{Debt, Goal};
use crate::errors::{FinanceError, Result};

/// Urgency classification of a debt relative to a reference date.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum DebtStatus {
    Paid,
    Overdue,
    DueSoon,
    Ok,
}

/// How long until a goal is reached at a given savings pace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeToGoal {
    Months(u32),
    /// Savings pace is zero or negative; the goal is never reached.
    Never,
}

/// Classifies a debt for `today`. A paid debt is `Paid` no matter its due
/// date; otherwise the whole-day distance to the due date decides: negative
/// is `Overdue`, zero through three days out is `DueSoon`, four or more is
/// `Ok`.
pub fn debt_status(debt: &Debt, today: NaiveDate) -> DebtStatus {
    if debt.is_paid {
        return DebtStatus::Paid;
    }
    let days = debt.due_date.signed_duration_since(today).num_days();
    if days < 0 {
        DebtStatus::Overdue
    } else if days <= 3 {
        DebtStatus::DueSoon
    } else {
        DebtStatus::Ok
    }
}

/// Percentage of the target already accumulated. A non-positive target yields
/// 0.0 rather than letting NaN or infinity escape.
pub fn goal_progress(goal: &Goal) -> f64 {
    if goal.target_amount <= 0.0 {
        return 0.0;
    }
    (goal.current_amount / goal.target_amount) * 100.0
}

/// Whole months until the goal is met at `monthly_savings` per month.
/// Non-positive savings never reach the goal; an already-met goal is 0 months.
pub fn months_to_goal(goal: &Goal, monthly_savings: f64) -> TimeToGoal {
    if monthly_savings <= 0.0 {
        return TimeToGoal::Never;
    }
    let remaining = goal.target_amount - goal.current_amount;
    if remaining <= 0.0 {
        return TimeToGoal::Months(0);
    }
    TimeToGoal::Months((remaining / monthly_savings).ceil() as u32)
}

/// Monthly amount required to meet the goal within `target_months`. An
/// already-met goal needs nothing; a zero horizon is rejected.
pub fn monthly_savings_needed(goal: &Goal, target_months: u32) -> Result<f64> {
    if target_months == 0 {
        return Err(FinanceError::Validation(
            "target months must be greater than zero".into(),
        ));
    }
    let remaining = goal.target_amount - goal.current_amount;
    Ok((remaining / f64::from(target_months)).max(0.0))
}
