//! Budget and deadline health for projects.

use serde::Serialize;

use crate::types::Date;

/// Utilization above this percentage raises a budget warning.
pub const BUDGET_WARNING_PERCENT: f64 = 80.0;

/// Projects ending within this many days are near their deadline.
pub const NEAR_DEADLINE_DAYS: i64 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetState {
    Ok,
    Warning,
    OverBudget,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeadlineState {
    OnTrack,
    NearDeadline,
    DueToday,
    Overdue,
}

/// Derived budget and schedule health of one project.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectHealth {
    pub budget_utilization: f64,
    pub budget_state: BudgetState,
    pub days_remaining: i64,
    pub deadline_state: DeadlineState,
    pub deadline_text: String,
}

/// Spent budget as a percentage of the total. Zero when there is no budget.
pub fn budget_utilization(total_budget: f64, spent_budget: f64) -> f64 {
    if total_budget > 0.0 {
        spent_budget / total_budget * 100.0
    } else {
        0.0
    }
}

pub fn budget_state(utilization: f64) -> BudgetState {
    if utilization > 100.0 {
        BudgetState::OverBudget
    } else if utilization > BUDGET_WARNING_PERCENT {
        BudgetState::Warning
    } else {
        BudgetState::Ok
    }
}

pub fn deadline_state(days_remaining: i64) -> DeadlineState {
    match days_remaining {
        d if d < 0 => DeadlineState::Overdue,
        0 => DeadlineState::DueToday,
        d if d <= NEAR_DEADLINE_DAYS => DeadlineState::NearDeadline,
        _ => DeadlineState::OnTrack,
    }
}

/// Evaluate a project's budget and deadline as of `today`.
pub fn evaluate(total_budget: f64, spent_budget: f64, end_date: Date, today: Date) -> ProjectHealth {
    let budget_utilization = budget_utilization(total_budget, spent_budget);
    let days_remaining = (end_date - today).num_days();
    let deadline_text = match days_remaining {
        d if d < 0 => format!("{} days overdue", d.abs()),
        0 => "Due today".to_string(),
        d => format!("{d} days left"),
    };

    ProjectHealth {
        budget_utilization,
        budget_state: budget_state(budget_utilization),
        days_remaining,
        deadline_state: deadline_state(days_remaining),
        deadline_text,
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> Date {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn utilization_is_zero_without_budget() {
        assert_eq!(budget_utilization(0.0, 500.0), 0.0);
    }

    #[test]
    fn budget_thresholds() {
        assert_eq!(budget_state(80.0), BudgetState::Ok);
        assert_eq!(budget_state(80.5), BudgetState::Warning);
        assert_eq!(budget_state(100.0), BudgetState::Warning);
        assert_eq!(budget_state(100.1), BudgetState::OverBudget);
    }

    #[test]
    fn deadline_thresholds() {
        assert_eq!(deadline_state(-1), DeadlineState::Overdue);
        assert_eq!(deadline_state(0), DeadlineState::DueToday);
        assert_eq!(deadline_state(7), DeadlineState::NearDeadline);
        assert_eq!(deadline_state(8), DeadlineState::OnTrack);
    }

    #[test]
    fn evaluate_overdue_project() {
        let health = evaluate(1_000.0, 1_200.0, date(2025, 3, 1), date(2025, 3, 10));
        assert_eq!(health.budget_state, BudgetState::OverBudget);
        assert!((health.budget_utilization - 120.0).abs() < 1e-9);
        assert_eq!(health.days_remaining, -9);
        assert_eq!(health.deadline_state, DeadlineState::Overdue);
        assert_eq!(health.deadline_text, "9 days overdue");
    }

    #[test]
    fn evaluate_project_due_today() {
        let health = evaluate(1_000.0, 100.0, date(2025, 3, 10), date(2025, 3, 10));
        assert_eq!(health.deadline_text, "Due today");
        assert_eq!(health.budget_state, BudgetState::Ok);
    }

    #[test]
    fn evaluate_project_with_time_left() {
        let health = evaluate(1_000.0, 100.0, date(2025, 4, 9), date(2025, 3, 10));
        assert_eq!(health.days_remaining, 30);
        assert_eq!(health.deadline_text, "30 days left");
        assert_eq!(health.deadline_state, DeadlineState::OnTrack);
    }
}
