use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Subscription tier gating which advisory screens the UI unlocks.
/// The core does not enforce gating; it only records the choice.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Plan {
    #[default]
    Essencial,
    Inteligente,
    Supremo,
}

/// Registered account. The password is stored verbatim; this mirrors the
/// prototype it replaces and is not a surface to harden here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password: String,
    pub plan: Plan,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<f64>,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Creates a new account on the lowest tier. Plan selection happens in a
    /// separate step after signup.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            email: email.into(),
            password: password.into(),
            plan: Plan::default(),
            salary: None,
            created_at: Utc::now(),
        }
    }
}

/// Partial update applied to the signed-in user.
#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    pub name: Option<String>,
    pub password: Option<String>,
    pub plan: Option<Plan>,
    pub salary: Option<f64>,
}

impl UserPatch {
    pub fn apply(&self, user: &mut User) {
        if let Some(name) = &self.name {
            user.name = name.clone();
        }
        if let Some(password) = &self.password {
            user.password = password.clone();
        }
        if let Some(plan) = self.plan {
            user.plan = plan;
        }
        if let Some(salary) = self.salary {
            user.salary = Some(salary);
        }
    }
}
