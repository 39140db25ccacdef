//! Synchronous repository over users, the signed-in session, and per-user
//! financial records. Every mutation is a whole-aggregate read-modify-write
//! through the key-value store; a single store write is the only atomicity
//! unit, and concurrent writers are last-writer-wins.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::advisor::{analyze_health, analyze_purchase_for, HealthAnalysis, PurchaseAdvice};
use crate::core::metrics::{debt_status, DebtStatus};
use crate::domain::{
    Debt, DebtPatch, FinancialData, Goal, GoalPatch, NewDebt, NewGoal, Plan, User, UserPatch,
};
use crate::errors::{FinanceError, Result};
use crate::storage::{
    financial_data_key, JsonFileStore, KeyValueStore, CURRENT_USER_KEY, USERS_KEY,
};

const MIN_PASSWORD_LEN: usize = 6;

/// Dashboard aggregate over one user's financial record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FinancialSummary {
    pub total_active_debt: f64,
    pub overdue_debts: usize,
    pub due_soon_debts: usize,
    pub total_goal_target: f64,
    pub total_goal_current: f64,
    pub overall_goal_progress: f64,
    pub estimated_balance: f64,
}

/// Facade that coordinates accounts, the session pointer, and financial data.
/// The session lives in the store under its own key; it is initialized on
/// signup/login and torn down only by an explicit logout.
pub struct FinanceRepository {
    store: Box<dyn KeyValueStore>,
}

impl FinanceRepository {
    pub fn new(store: Box<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Opens a repository over the default on-disk JSON store.
    pub fn open_default() -> Result<Self> {
        Ok(Self::new(Box::new(JsonFileStore::new_default()?)))
    }

    // -- accounts & session ------------------------------------------------

    /// Registers a new account on the lowest tier and signs it in.
    pub fn sign_up(&self, name: &str, email: &str, password: &str) -> Result<User> {
        if name.trim().is_empty() || email.trim().is_empty() || password.is_empty() {
            return Err(FinanceError::Validation("all fields are required".into()));
        }
        if password.len() < MIN_PASSWORD_LEN {
            return Err(FinanceError::Validation(format!(
                "password must be at least {MIN_PASSWORD_LEN} characters"
            )));
        }
        // Exact-match lookup: uniqueness is case-sensitive, matching the
        // observed behavior this core replaces.
        if self.find_user_by_email(email)?.is_some() {
            return Err(FinanceError::EmailTaken(email.to_string()));
        }

        let user = User::new(name, email, password);
        let mut users = self.load_users()?;
        users.push(user.clone());
        self.save_users(&users)?;
        self.set_session(&user)?;
        tracing::info!(user = %user.id, "account created");
        Ok(user)
    }

    /// Signs in with exact credentials. Unknown email and wrong password
    /// collapse into the same error so the message does not leak which one
    /// failed.
    pub fn log_in(&self, email: &str, password: &str) -> Result<User> {
        let user = self
            .find_user_by_email(email)?
            .filter(|u| u.password == password)
            .ok_or(FinanceError::InvalidCredentials)?;
        self.set_session(&user)?;
        tracing::info!(user = %user.id, "session opened");
        Ok(user)
    }

    pub fn find_user_by_email(&self, email: &str) -> Result<Option<User>> {
        Ok(self.load_users()?.into_iter().find(|u| u.email == email))
    }

    /// Returns the signed-in user, if any.
    pub fn current_user(&self) -> Result<Option<User>> {
        match self.store.get(CURRENT_USER_KEY)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    pub fn log_out(&self) -> Result<()> {
        self.store.remove(CURRENT_USER_KEY)?;
        tracing::info!("session closed");
        Ok(())
    }

    /// Merges the patch into the signed-in user, updating both the session
    /// pointer and the matching entry in the persisted user collection.
    pub fn update_current_user(&self, patch: &UserPatch) -> Result<User> {
        let mut user = self.current_user()?.ok_or(FinanceError::NoSession)?;
        patch.apply(&mut user);
        self.set_session(&user)?;

        let mut users = self.load_users()?;
        if let Some(entry) = users.iter_mut().find(|u| u.id == user.id) {
            *entry = user.clone();
            self.save_users(&users)?;
        }
        Ok(user)
    }

    /// Plan-selection step after signup.
    pub fn choose_plan(&self, plan: Plan) -> Result<User> {
        self.update_current_user(&UserPatch {
            plan: Some(plan),
            ..UserPatch::default()
        })
    }

    // -- financial data ----------------------------------------------------

    /// Loads the user's financial record, defaulting to a zeroed record. A
    /// legacy salary on the user account seeds the record until its first
    /// write.
    pub fn financial_data(&self, user_id: Uuid) -> Result<FinancialData> {
        match self.store.get(&financial_data_key(user_id))? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => {
                let salary = self
                    .load_users()?
                    .into_iter()
                    .find(|u| u.id == user_id)
                    .and_then(|u| u.salary)
                    .unwrap_or(0.0);
                Ok(FinancialData::with_salary(salary))
            }
        }
    }

    /// Full overwrite of the user's record.
    pub fn save_financial_data(&self, user_id: Uuid, data: &FinancialData) -> Result<()> {
        let raw = serde_json::to_string(data)?;
        self.store.set(&financial_data_key(user_id), &raw)?;
        tracing::debug!(user = %user_id, "financial record saved");
        Ok(())
    }

    fn update_data<T>(
        &self,
        user_id: Uuid,
        mutate: impl FnOnce(&mut FinancialData) -> Result<T>,
    ) -> Result<T> {
        let mut data = self.financial_data(user_id)?;
        let out = mutate(&mut data)?;
        self.save_financial_data(user_id, &data)?;
        Ok(out)
    }

    // -- debts -------------------------------------------------------------

    pub fn add_debt(&self, user_id: Uuid, new: NewDebt) -> Result<Debt> {
        self.update_data(user_id, |data| {
            let debt = Debt::from(new);
            data.debts.push(debt.clone());
            Ok(debt)
        })
    }

    /// Partial merge by id.
    pub fn update_debt(&self, user_id: Uuid, id: Uuid, patch: &DebtPatch) -> Result<Debt> {
        self.update_data(user_id, |data| {
            let debt = data.debt_mut(id).ok_or(FinanceError::DebtNotFound(id))?;
            patch.apply(debt);
            Ok(debt.clone())
        })
    }

    /// Removes the debt; silently does nothing when the id is unknown.
    pub fn delete_debt(&self, user_id: Uuid, id: Uuid) -> Result<()> {
        self.update_data(user_id, |data| {
            data.remove_debt(id);
            Ok(())
        })
    }

    /// Marks the debt paid, stamping `paid_at` through the update path so the
    /// paid flag and timestamp always move together.
    pub fn mark_debt_paid(&self, user_id: Uuid, id: Uuid) -> Result<Debt> {
        self.update_debt(
            user_id,
            id,
            &DebtPatch {
                is_paid: Some(true),
                paid_at: Some(Utc::now()),
                ..DebtPatch::default()
            },
        )
    }

    // -- goals -------------------------------------------------------------

    pub fn add_goal(&self, user_id: Uuid, new: NewGoal) -> Result<Goal> {
        self.update_data(user_id, |data| {
            let goal = Goal::from(new);
            data.goals.push(goal.clone());
            Ok(goal)
        })
    }

    pub fn update_goal(&self, user_id: Uuid, id: Uuid, patch: &GoalPatch) -> Result<Goal> {
        self.update_data(user_id, |data| {
            let goal = data.goal_mut(id).ok_or(FinanceError::GoalNotFound(id))?;
            patch.apply(goal);
            Ok(goal.clone())
        })
    }

    /// Increments the goal's accumulated amount.
    pub fn add_goal_progress(&self, user_id: Uuid, id: Uuid, amount: f64) -> Result<Goal> {
        self.update_data(user_id, |data| {
            let goal = data.goal_mut(id).ok_or(FinanceError::GoalNotFound(id))?;
            goal.current_amount += amount;
            Ok(goal.clone())
        })
    }

    pub fn delete_goal(&self, user_id: Uuid, id: Uuid) -> Result<()> {
        self.update_data(user_id, |data| {
            data.remove_goal(id);
            Ok(())
        })
    }

    // -- onboarding & aggregates -------------------------------------------

    /// Onboarding quiz: overwrites the record with the given salary, then
    /// appends the starter debts and goals.
    pub fn complete_quiz(
        &self,
        user_id: Uuid,
        salary: f64,
        debts: Vec<NewDebt>,
        goals: Vec<NewGoal>,
    ) -> Result<FinancialData> {
        let mut data = FinancialData::with_salary(salary);
        data.debts.extend(debts.into_iter().map(Debt::from));
        data.goals.extend(goals.into_iter().map(Goal::from));
        self.save_financial_data(user_id, &data)?;
        tracing::info!(user = %user_id, "onboarding quiz completed");
        Ok(data)
    }

    /// Dashboard aggregate for one user.
    pub fn summary(&self, user_id: Uuid, today: NaiveDate) -> Result<FinancialSummary> {
        let data = self.financial_data(user_id)?;
        let overdue_debts = data
            .debts
            .iter()
            .filter(|d| debt_status(d, today) == DebtStatus::Overdue)
            .count();
        let due_soon_debts = data
            .debts
            .iter()
            .filter(|d| debt_status(d, today) == DebtStatus::DueSoon)
            .count();
        Ok(FinancialSummary {
            total_active_debt: data.total_active_debt(),
            overdue_debts,
            due_soon_debts,
            total_goal_target: data.goals.iter().map(|g| g.target_amount).sum(),
            total_goal_current: data.goals.iter().map(|g| g.current_amount).sum(),
            overall_goal_progress: data.overall_goal_progress(),
            estimated_balance: data.estimated_balance(),
        })
    }

    /// Purchase advice derived from the user's current record.
    pub fn purchase_advice(
        &self,
        user_id: Uuid,
        item_name: &str,
        item_price: f64,
    ) -> Result<PurchaseAdvice> {
        let data = self.financial_data(user_id)?;
        Ok(analyze_purchase_for(&data, item_name, item_price))
    }

    /// Health analysis for the signed-in user; requires an open session.
    pub fn health_analysis(&self, today: NaiveDate) -> Result<HealthAnalysis> {
        let user = self.current_user()?.ok_or(FinanceError::NoSession)?;
        let data = self.financial_data(user.id)?;
        Ok(analyze_health(&data, today))
    }

    // -- plumbing ----------------------------------------------------------

    fn load_users(&self) -> Result<Vec<User>> {
        match self.store.get(USERS_KEY)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }

    fn save_users(&self, users: &[User]) -> Result<()> {
        let raw = serde_json::to_string(users)?;
        self.store.set(USERS_KEY, &raw)
    }

    fn set_session(&self, user: &User) -> Result<()> {
        let raw = serde_json::to_string(user)?;
        self.store.set(CURRENT_USER_KEY, &raw)
    }
}
