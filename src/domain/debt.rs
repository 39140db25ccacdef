use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A debt owed by the user, tracked against a calendar due date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Debt {
    pub id: Uuid,
    pub name: String,
    pub amount: f64,
    pub due_date: NaiveDate,
    pub is_paid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paid_at: Option<DateTime<Utc>>,
}

impl Debt {
    pub fn new(name: impl Into<String>, amount: f64, due_date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            amount,
            due_date,
            is_paid: false,
            paid_at: None,
        }
    }
}

/// Debt fields supplied by the caller; the repository assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDebt {
    pub name: String,
    pub amount: f64,
    pub due_date: NaiveDate,
}

impl From<NewDebt> for Debt {
    fn from(new: NewDebt) -> Self {
        Debt::new(new.name, new.amount, new.due_date)
    }
}

/// Partial merge applied to an existing debt.
#[derive(Debug, Clone, Default)]
pub struct DebtPatch {
    pub name: Option<String>,
    pub amount: Option<f64>,
    pub due_date: Option<NaiveDate>,
    pub is_paid: Option<bool>,
    pub paid_at: Option<DateTime<Utc>>,
}

impl DebtPatch {
    pub fn apply(&self, debt: &mut Debt) {
        if let Some(name) = &self.name {
            debt.name = name.clone();
        }
        if let Some(amount) = self.amount {
            debt.amount = amount;
        }
        if let Some(due_date) = self.due_date {
            debt.due_date = due_date;
        }
        if let Some(is_paid) = self.is_paid {
            debt.is_paid = is_paid;
        }
        if let Some(paid_at) = self.paid_at {
            debt.paid_at = Some(paid_at);
        }
    }
}
