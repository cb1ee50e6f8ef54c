//! Project list filtering, ordering and dashboard aggregates.

use std::str::FromStr;

use serde::Serialize;
use sitetrack_core::error::CoreError;
use sitetrack_core::project_health::{evaluate, ProjectHealth};
use sitetrack_core::status::ProjectStatus;
use sitetrack_core::text::{compare_text, search_term};
use sitetrack_core::types::Date;

use crate::models::project::Project;

/// Criteria for [`filter_projects`]. `status: None` means "All".
#[derive(Debug, Clone, Default)]
pub struct ProjectFilter {
    pub status: Option<ProjectStatus>,
    /// Case-insensitive substring of the name, location or client name.
    pub search: Option<String>,
}

/// Parse a status selector where `All` (or an empty string) means any status.
pub fn parse_status_filter(raw: &str) -> Result<Option<ProjectStatus>, CoreError> {
    match raw.trim() {
        "" | "All" => Ok(None),
        other => other.parse().map(Some),
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProjectSort {
    /// Most recently created first.
    #[default]
    Newest,
    Oldest,
    Name,
    /// Earliest end date first.
    Deadline,
    /// Largest total budget first.
    Budget,
}

impl FromStr for ProjectSort {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "newest" => Ok(Self::Newest),
            "oldest" => Ok(Self::Oldest),
            "name" => Ok(Self::Name),
            "deadline" => Ok(Self::Deadline),
            "budget" => Ok(Self::Budget),
            _ => Err(CoreError::InvalidArgument(format!(
                "Invalid sort '{s}'. Must be one of: newest, oldest, name, deadline, budget"
            ))),
        }
    }
}

pub fn filter_projects(projects: &[Project], filter: &ProjectFilter, sort: ProjectSort) -> Vec<Project> {
    let search = search_term(filter.search.as_deref());
    let mut matched: Vec<Project> = projects
        .iter()
        .filter(|p| filter.status.is_none_or(|s| p.status == s))
        .filter(|p| match search.as_deref() {
            Some(term) => {
                p.name.to_lowercase().contains(term)
                    || p.location.to_lowercase().contains(term)
                    || p.client_name.to_lowercase().contains(term)
            }
            None => true,
        })
        .cloned()
        .collect();

    match sort {
        ProjectSort::Newest => matched.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        ProjectSort::Oldest => matched.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
        ProjectSort::Name => matched.sort_by(|a, b| compare_text(&a.name, &b.name)),
        ProjectSort::Deadline => matched.sort_by(|a, b| a.end_date.cmp(&b.end_date)),
        ProjectSort::Budget => matched.sort_by(|a, b| b.total_budget.total_cmp(&a.total_budget)),
    }
    matched
}

/// Portfolio-wide counts and budget totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total: usize,
    /// Projects currently `In Progress`.
    pub active: usize,
    pub completed: usize,
    pub on_hold: usize,
    pub total_budget: f64,
    pub total_spent: f64,
}

impl DashboardStats {
    pub fn from_projects(projects: &[Project]) -> Self {
        projects.iter().fold(Self::default(), |mut stats, p| {
            stats.total += 1;
            match p.status {
                ProjectStatus::InProgress => stats.active += 1,
                ProjectStatus::Completed => stats.completed += 1,
                ProjectStatus::OnHold => stats.on_hold += 1,
                ProjectStatus::Planning => {}
            }
            stats.total_budget += p.total_budget;
            stats.total_spent += p.spent_budget;
            stats
        })
    }
}

pub fn project_health(project: &Project, today: Date) -> ProjectHealth {
    evaluate(project.total_budget, project.spent_budget, project.end_date, today)
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate, TimeZone, Utc};
    use sitetrack_core::project_health::{BudgetState, DeadlineState};

    use super::*;

    fn project(id: i64, name: &str, status: ProjectStatus, budget: f64, end_day: u32) -> Project {
        Project {
            id,
            name: name.to_string(),
            location: "Austin, TX".to_string(),
            client_name: "Harbor Holdings".to_string(),
            description: None,
            status,
            start_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 12, end_day).unwrap(),
            total_budget: budget,
            spent_budget: budget / 2.0,
            progress: 10,
            created_at: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap() + Duration::days(id),
        }
    }

    fn ids(projects: &[Project]) -> Vec<i64> {
        projects.iter().map(|p| p.id).collect()
    }

    fn sample() -> Vec<Project> {
        vec![
            project(1, "Riverside Lofts", ProjectStatus::InProgress, 2_000_000.0, 20),
            project(2, "bayview Clinic", ProjectStatus::Planning, 5_000_000.0, 5),
            project(3, "Cedar School", ProjectStatus::InProgress, 750_000.0, 31),
        ]
    }

    #[test]
    fn all_selector_means_no_status_filter() {
        assert_eq!(parse_status_filter("All"), Ok(None));
        assert_eq!(parse_status_filter(""), Ok(None));
        assert_eq!(parse_status_filter("On Hold"), Ok(Some(ProjectStatus::OnHold)));
        assert!(parse_status_filter("on hold").is_err());
    }

    #[test]
    fn status_filter_is_exact() {
        let filter = ProjectFilter {
            status: Some(ProjectStatus::InProgress),
            search: None,
        };
        assert_eq!(ids(&filter_projects(&sample(), &filter, ProjectSort::Oldest)), vec![1, 3]);
    }

    #[test]
    fn search_covers_location_and_client() {
        let mut projects = sample();
        projects[2].location = "Denver, CO".to_string();
        projects[1].client_name = "Denver Health".to_string();
        let filter = ProjectFilter {
            status: None,
            search: Some("denver".to_string()),
        };
        assert_eq!(ids(&filter_projects(&projects, &filter, ProjectSort::Oldest)), vec![2, 3]);
    }

    #[test]
    fn sort_orders() {
        let projects = sample();
        let all = ProjectFilter::default();
        assert_eq!(ids(&filter_projects(&projects, &all, ProjectSort::Newest)), vec![3, 2, 1]);
        assert_eq!(ids(&filter_projects(&projects, &all, ProjectSort::Oldest)), vec![1, 2, 3]);
        assert_eq!(ids(&filter_projects(&projects, &all, ProjectSort::Name)), vec![2, 3, 1]);
        assert_eq!(ids(&filter_projects(&projects, &all, ProjectSort::Deadline)), vec![2, 1, 3]);
        assert_eq!(ids(&filter_projects(&projects, &all, ProjectSort::Budget)), vec![2, 1, 3]);
    }

    #[test]
    fn dashboard_stats_sum_budgets() {
        let mut projects = sample();
        projects.push(project(4, "Old Mill", ProjectStatus::Completed, 250_000.0, 1));
        let stats = DashboardStats::from_projects(&projects);
        assert_eq!(stats.total, 4);
        assert_eq!(stats.active, 2);
        assert_eq!(stats.completed, 1);
        assert_eq!(stats.on_hold, 0);
        assert_eq!(stats.total_budget, 8_000_000.0);
        assert_eq!(stats.total_spent, 4_000_000.0);
    }

    #[test]
    fn health_uses_project_budget_and_end_date() {
        let p = project(1, "Riverside Lofts", ProjectStatus::InProgress, 1_000.0, 20);
        let today = NaiveDate::from_ymd_opt(2025, 12, 15).unwrap();
        let health = project_health(&p, today);
        assert_eq!(health.budget_utilization, 50.0);
        assert_eq!(health.budget_state, BudgetState::Ok);
        assert_eq!(health.days_remaining, 5);
        assert_eq!(health.deadline_state, DeadlineState::NearDeadline);
    }

    #[test]
    fn unknown_sort_is_rejected() {
        assert!("cost".parse::<ProjectSort>().is_err());
        assert_eq!("deadline".parse::<ProjectSort>(), Ok(ProjectSort::Deadline));
    }
}
