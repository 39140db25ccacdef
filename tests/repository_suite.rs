use chrono::NaiveDate;
use finmind_core::{
    core::{debt_status, goal_progress, DebtStatus, FinanceRepository},
    domain::{DebtPatch, NewDebt, NewGoal, Plan, UserPatch},
    errors::FinanceError,
    storage::MemoryStore,
};

fn repo() -> FinanceRepository {
    FinanceRepository::new(Box::new(MemoryStore::new()))
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 15).unwrap()
}

fn due(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, day).unwrap()
}

#[test]
fn signup_opens_a_session_on_the_lowest_tier() {
    let repo = repo();
    let user = repo.sign_up("Ana", "ana@example.com", "secret1").unwrap();
    assert_eq!(user.plan, Plan::Essencial);

    let session = repo.current_user().unwrap().expect("session");
    assert_eq!(session.id, user.id);
}

#[test]
fn duplicate_email_is_a_conflict() {
    let repo = repo();
    repo.sign_up("Ana", "ana@example.com", "secret1").unwrap();
    let err = repo
        .sign_up("Other", "ana@example.com", "secret2")
        .unwrap_err();
    assert!(matches!(err, FinanceError::EmailTaken(_)));
}

#[test]
fn email_uniqueness_is_case_sensitive() {
    // Preserved behavior: a differently-cased address registers separately.
    let repo = repo();
    repo.sign_up("Ana", "ana@example.com", "secret1").unwrap();
    assert!(repo.sign_up("Ana", "Ana@example.com", "secret1").is_ok());
}

#[test]
fn login_rejects_wrong_password_and_unknown_email_alike() {
    let repo = repo();
    repo.sign_up("Ana", "ana@example.com", "secret1").unwrap();
    repo.log_out().unwrap();

    let wrong = repo.log_in("ana@example.com", "nope").unwrap_err();
    assert!(matches!(wrong, FinanceError::InvalidCredentials));
    let unknown = repo.log_in("ghost@example.com", "secret1").unwrap_err();
    assert!(matches!(unknown, FinanceError::InvalidCredentials));

    assert!(repo.current_user().unwrap().is_none());
    repo.log_in("ana@example.com", "secret1").unwrap();
    assert!(repo.current_user().unwrap().is_some());
}

#[test]
fn plan_choice_survives_logout() {
    let repo = repo();
    repo.sign_up("Ana", "ana@example.com", "secret1").unwrap();
    repo.choose_plan(Plan::Supremo).unwrap();
    repo.log_out().unwrap();

    let user = repo.log_in("ana@example.com", "secret1").unwrap();
    assert_eq!(user.plan, Plan::Supremo);
}

#[test]
fn update_without_session_fails() {
    let repo = repo();
    let err = repo.update_current_user(&UserPatch::default()).unwrap_err();
    assert!(matches!(err, FinanceError::NoSession));
}

#[test]
fn added_debt_reads_back_with_a_fresh_id() {
    let repo = repo();
    let user = repo.sign_up("Ana", "ana@example.com", "secret1").unwrap();

    let debt = repo
        .add_debt(
            user.id,
            NewDebt {
                name: "Rent".into(),
                amount: 1200.0,
                due_date: due(20),
            },
        )
        .unwrap();

    let data = repo.financial_data(user.id).unwrap();
    let stored = data.debt(debt.id).expect("stored debt");
    assert_eq!(stored.name, "Rent");
    assert_eq!(stored.amount, 1200.0);
    assert_eq!(stored.due_date, due(20));
    assert!(!stored.is_paid);
    assert!(stored.paid_at.is_none());
}

#[test]
fn mark_paid_sets_flag_and_timestamp_together() {
    let repo = repo();
    let user = repo.sign_up("Ana", "ana@example.com", "secret1").unwrap();
    let debt = repo
        .add_debt(
            user.id,
            NewDebt {
                name: "Card".into(),
                amount: 300.0,
                due_date: due(1),
            },
        )
        .unwrap();

    let paid = repo.mark_debt_paid(user.id, debt.id).unwrap();
    assert!(paid.is_paid);
    assert!(paid.paid_at.is_some());
    assert_eq!(debt_status(&paid, today()), DebtStatus::Paid);
}

#[test]
fn debt_patch_merges_only_provided_fields() {
    let repo = repo();
    let user = repo.sign_up("Ana", "ana@example.com", "secret1").unwrap();
    let debt = repo
        .add_debt(
            user.id,
            NewDebt {
                name: "Loan".into(),
                amount: 500.0,
                due_date: due(25),
            },
        )
        .unwrap();

    let updated = repo
        .update_debt(
            user.id,
            debt.id,
            &DebtPatch {
                amount: Some(450.0),
                ..DebtPatch::default()
            },
        )
        .unwrap();
    assert_eq!(updated.amount, 450.0);
    assert_eq!(updated.name, "Loan");
    assert_eq!(updated.due_date, due(25));
}

#[test]
fn deleting_a_debt_removes_it_from_the_record() {
    let repo = repo();
    let user = repo.sign_up("Ana", "ana@example.com", "secret1").unwrap();
    let debt = repo
        .add_debt(
            user.id,
            NewDebt {
                name: "Loan".into(),
                amount: 500.0,
                due_date: due(25),
            },
        )
        .unwrap();

    repo.delete_debt(user.id, debt.id).unwrap();
    assert!(repo.financial_data(user.id).unwrap().debts.is_empty());
}

#[test]
fn goal_progress_accumulates_to_one_hundred_percent() {
    let repo = repo();
    let user = repo.sign_up("Ana", "ana@example.com", "secret1").unwrap();
    let goal = repo
        .add_goal(
            user.id,
            NewGoal {
                name: "Trip".into(),
                target_amount: 1000.0,
                current_amount: 400.0,
            },
        )
        .unwrap();

    let goal = repo.add_goal_progress(user.id, goal.id, 600.0).unwrap();
    assert_eq!(goal.current_amount, 1000.0);
    assert_eq!(goal_progress(&goal), 100.0);
}

#[test]
fn quiz_seeds_the_financial_record() {
    let repo = repo();
    let user = repo.sign_up("Ana", "ana@example.com", "secret1").unwrap();

    let data = repo
        .complete_quiz(
            user.id,
            3000.0,
            vec![NewDebt {
                name: "Card".into(),
                amount: 800.0,
                due_date: due(10),
            }],
            vec![NewGoal {
                name: "Emergency fund".into(),
                target_amount: 6000.0,
                current_amount: 0.0,
            }],
        )
        .unwrap();

    assert_eq!(data.salary, 3000.0);
    assert_eq!(data.debts.len(), 1);
    assert_eq!(data.goals.len(), 1);
    assert_eq!(repo.financial_data(user.id).unwrap(), data);
}

#[test]
fn legacy_user_salary_seeds_an_unwritten_record() {
    let repo = repo();
    let user = repo.sign_up("Ana", "ana@example.com", "secret1").unwrap();
    repo.update_current_user(&UserPatch {
        salary: Some(2500.0),
        ..UserPatch::default()
    })
    .unwrap();

    let data = repo.financial_data(user.id).unwrap();
    assert_eq!(data.salary, 2500.0);
    assert!(data.debts.is_empty());
}

#[test]
fn summary_classifies_debts_against_today() {
    let repo = repo();
    let user = repo.sign_up("Ana", "ana@example.com", "secret1").unwrap();
    repo.complete_quiz(
        user.id,
        3000.0,
        vec![
            NewDebt {
                name: "Overdue".into(),
                amount: 200.0,
                due_date: due(10),
            },
            NewDebt {
                name: "Soon".into(),
                amount: 300.0,
                due_date: due(17),
            },
            NewDebt {
                name: "Later".into(),
                amount: 400.0,
                due_date: due(30),
            },
        ],
        vec![NewGoal {
            name: "Trip".into(),
            target_amount: 2000.0,
            current_amount: 500.0,
        }],
    )
    .unwrap();

    let summary = repo.summary(user.id, today()).unwrap();
    assert_eq!(summary.total_active_debt, 900.0);
    assert_eq!(summary.overdue_debts, 1);
    assert_eq!(summary.due_soon_debts, 1);
    assert_eq!(summary.total_goal_target, 2000.0);
    assert_eq!(summary.total_goal_current, 500.0);
    assert_eq!(summary.overall_goal_progress, 25.0);
    assert_eq!(summary.estimated_balance, 2100.0);
}
