//! Rule-based purchase and health recommendations. Both engines are total,
//! stateless functions: identical inputs always produce identical advice.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::metrics::{debt_status, DebtStatus};
use crate::domain::FinancialData;

/// Aggregated figures a purchase decision is made from.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseInput {
    pub item_name: String,
    pub item_price: f64,
    pub salary: f64,
    pub total_active_debt: f64,
    pub total_goal_remaining: f64,
    pub estimated_balance: f64,
}

/// Verdict classes for a purchase.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Recommendation {
    CanBuy,
    BetterWait,
    NotRecommended,
}

/// Verdict plus a payment suggestion and a human-readable rationale.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseAdvice {
    pub recommendation: Recommendation,
    pub payment_suggestion: String,
    pub reason: String,
}

impl PurchaseAdvice {
    fn new(
        recommendation: Recommendation,
        payment_suggestion: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            recommendation,
            payment_suggestion: payment_suggestion.into(),
            reason: reason.into(),
        }
    }
}

/// Evaluates the affordability decision list. The rules form an ordered
/// first-match-wins chain; reordering them moves the classification
/// boundaries, so the sequence below is part of the contract.
pub fn analyze_purchase(input: &PurchaseInput) -> PurchaseAdvice {
    if input.salary <= 0.0 {
        return PurchaseAdvice::new(
            Recommendation::NotRecommended,
            "Record your monthly salary first",
            "Affordability cannot be assessed without a recorded salary.",
        );
    }

    let debt_ratio = input.total_active_debt / input.salary;
    let price_ratio = input.item_price / input.salary;
    let balance_after = input.estimated_balance - input.item_price;

    if debt_ratio > 0.5 {
        return PurchaseAdvice::new(
            Recommendation::NotRecommended,
            "Focus on clearing your debts first",
            "Your active debts exceed 50% of your salary. Pay them down before taking on new purchases.",
        );
    }

    if balance_after < input.salary * 0.2 {
        return PurchaseAdvice::new(
            Recommendation::NotRecommended,
            "Wait until you have a larger financial reserve",
            "This purchase would leave you with less than 20% of your salary available. Keep an emergency reserve.",
        );
    }

    if price_ratio > 0.3 {
        return PurchaseAdvice::new(
            Recommendation::BetterWait,
            "Consider splitting into 2-3 credit installments",
            "The price is more than 30% of your salary. If possible, wait another month or split the payment.",
        );
    }

    if price_ratio > 0.15 {
        return PurchaseAdvice::new(
            Recommendation::CanBuy,
            "Debit, or 2 interest-free credit installments",
            "You can afford this purchase, but avoid committing too much of your monthly budget.",
        );
    }

    PurchaseAdvice::new(
        Recommendation::CanBuy,
        "Pay in full with debit",
        "Great choice! The price fits your budget and will not strain your finances.",
    )
}

/// Derives the aggregate inputs from a financial record and evaluates the
/// purchase.
pub fn analyze_purchase_for(
    data: &FinancialData,
    item_name: impl Into<String>,
    item_price: f64,
) -> PurchaseAdvice {
    analyze_purchase(&PurchaseInput {
        item_name: item_name.into(),
        item_price,
        salary: data.salary,
        total_active_debt: data.total_active_debt(),
        total_goal_remaining: data.total_goal_remaining(),
        estimated_balance: data.estimated_balance(),
    })
}

/// Narrative health report: independent observations, not a ranked list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HealthAnalysis {
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub recommendations: Vec<String>,
    pub monthly_plan: String,
}

/// The six-month plan is a fixed template, identical for every input. Kept
/// that way deliberately to preserve the observed behavior.
pub const MONTHLY_PLAN: &str = "\
Months 1-2: list every debt and prioritize the overdue ones.
Months 3-4: cut discretionary spending by 20% and direct it at your debts.
Months 5-6: start an emergency fund with 10% of your monthly salary.";

/// Ratio of active debt to salary. With no salary recorded the ratio is
/// infinite when debt exists and zero otherwise, so the threshold checks
/// below stay well defined.
fn debt_ratio(total_active_debt: f64, salary: f64) -> f64 {
    if salary > 0.0 {
        total_active_debt / salary
    } else if total_active_debt > 0.0 {
        f64::INFINITY
    } else {
        0.0
    }
}

/// Builds the three observation lists from a sequence of independent
/// conditionals. The checks are not mutually exclusive and carry no priority
/// order; only the fallbacks depend on whether anything else matched.
pub fn analyze_health(data: &FinancialData, today: NaiveDate) -> HealthAnalysis {
    let ratio = debt_ratio(data.total_active_debt(), data.salary);
    let has_goals = !data.goals.is_empty();
    let paid_debts = data.debts.iter().filter(|d| d.is_paid).count();
    let overdue_debts = data
        .debts
        .iter()
        .filter(|d| debt_status(d, today) == DebtStatus::Overdue)
        .count();

    let mut strengths = Vec::new();
    if has_goals {
        strengths.push("You have financial goals defined, which shows planning".to_string());
    }
    if ratio < 0.3 {
        strengths.push("Your debts are under control (less than 30% of your salary)".to_string());
    }
    if paid_debts > 0 {
        strengths.push("You have a history of debts paid on time".to_string());
    }
    if strengths.is_empty() {
        strengths.push("You are just starting your financial journey".to_string());
    }

    let mut weaknesses = Vec::new();
    if ratio > 0.5 {
        weaknesses.push("High debt load (more than 50% of your salary)".to_string());
    }
    if overdue_debts > 0 {
        weaknesses.push("There are overdue debts that need immediate attention".to_string());
    }
    if !has_goals {
        weaknesses.push("No long-term financial goals defined".to_string());
    }
    if weaknesses.is_empty() {
        weaknesses.push("Not enough data yet for a complete analysis".to_string());
    }

    let mut recommendations = Vec::new();
    if ratio > 0.4 {
        recommendations
            .push("Pay off the highest-interest debts first (avalanche method)".to_string());
    }
    if !has_goals {
        recommendations
            .push("Create an emergency fund goal (six months of expenses)".to_string());
    }
    recommendations
        .push("Set aside at least 10% of your salary for savings and investments".to_string());

    HealthAnalysis {
        strengths,
        weaknesses,
        recommendations,
        monthly_plan: MONTHLY_PLAN.to_string(),
    }
}
