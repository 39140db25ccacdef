pub mod advisor;
pub mod metrics;
pub mod repository;
pub mod utils;

pub use advisor::{
    analyze_health, analyze_purchase, analyze_purchase_for, HealthAnalysis, PurchaseAdvice,
    PurchaseInput, Recommendation, MONTHLY_PLAN,
};
pub use metrics::{
    debt_status, goal_progress, monthly_savings_needed, months_to_goal, DebtStatus, TimeToGoal,
};
pub use repository::{FinanceRepository, FinancialSummary};
