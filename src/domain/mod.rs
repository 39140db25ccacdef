pub mod debt;
pub mod financial_data;
pub mod goal;
pub mod user;

pub use debt::{Debt, DebtPatch, NewDebt};
pub use financial_data::FinancialData;
pub use goal::{Goal, GoalPatch, NewGoal};
pub use user::{Plan, User, UserPatch};
