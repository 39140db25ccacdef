use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Debt, Goal};

/// Per-user financial record: monthly salary plus owned debts and goals.
/// Absent until first write; callers receive the zeroed default meanwhile.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FinancialData {
    pub salary: f64,
    #[serde(default)]
    pub debts: Vec<Debt>,
    #[serde(default)]
    pub goals: Vec<Goal>,
}

impl FinancialData {
    pub fn with_salary(salary: f64) -> Self {
        Self {
            salary,
            ..Self::default()
        }
    }

    pub fn debt(&self, id: Uuid) -> Option<&Debt> {
        self.debts.iter().find(|d| d.id == id)
    }

    pub fn debt_mut(&mut self, id: Uuid) -> Option<&mut Debt> {
        self.debts.iter_mut().find(|d| d.id == id)
    }

    /// Removes the debt by id, returning it. No-op (`None`) when absent.
    pub fn remove_debt(&mut self, id: Uuid) -> Option<Debt> {
        let index = self.debts.iter().position(|d| d.id == id)?;
        Some(self.debts.remove(index))
    }

    pub fn goal(&self, id: Uuid) -> Option<&Goal> {
        self.goals.iter().find(|g| g.id == id)
    }

    pub fn goal_mut(&mut self, id: Uuid) -> Option<&mut Goal> {
        self.goals.iter_mut().find(|g| g.id == id)
    }

    pub fn remove_goal(&mut self, id: Uuid) -> Option<Goal> {
        let index = self.goals.iter().position(|g| g.id == id)?;
        Some(self.goals.remove(index))
    }

    pub fn active_debts(&self) -> impl Iterator<Item = &Debt> {
        self.debts.iter().filter(|d| !d.is_paid)
    }

    /// Sum of all unpaid debt amounts.
    pub fn total_active_debt(&self) -> f64 {
        self.active_debts().map(|d| d.amount).sum()
    }

    /// Sum of the amounts still missing across all goals.
    pub fn total_goal_remaining(&self) -> f64 {
        self.goals
            .iter()
            .map(|g| g.target_amount - g.current_amount)
            .sum()
    }

    /// Salary minus active debt, the rough monthly headroom the advisor and
    /// dashboard both work from.
    pub fn estimated_balance(&self) -> f64 {
        self.salary - self.total_active_debt()
    }

    /// Aggregate progress across all goals, 0 when no targets exist.
    pub fn overall_goal_progress(&self) -> f64 {
        let target: f64 = self.goals.iter().map(|g| g.target_amount).sum();
        if target > 0.0 {
            let current: f64 = self.goals.iter().map(|g| g.current_amount).sum();
            (current / target) * 100.0
        } else {
            0.0
        }
    }
}
