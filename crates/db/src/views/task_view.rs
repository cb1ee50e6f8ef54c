//! Filtering, grouping and due-date annotation of tasks.

use std::collections::HashMap;

use serde::Serialize;
use sitetrack_core::schedule::{describe_due_date, DueDateInfo};
use sitetrack_core::status::{TaskPriority, TaskStatus};
use sitetrack_core::text::{compare_text, search_term};
use sitetrack_core::types::{Date, DbId};

use crate::models::task::{NamedRef, Task};

/// Criteria for [`filter_tasks`]. Absent fields impose no constraint.
#[derive(Debug, Clone, Default)]
pub struct TaskFilter {
    /// Case-insensitive substring of the name or description.
    pub search: Option<String>,
    pub status: Option<TaskStatus>,
    pub priority: Option<TaskPriority>,
    pub assignee_id: Option<DbId>,
    pub phase_id: Option<DbId>,
}

impl TaskFilter {
    fn matches(&self, task: &Task, search: Option<&str>) -> bool {
        if let Some(term) = search {
            let in_name = task.name.to_lowercase().contains(term);
            let in_description = task
                .description
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(term));
            if !in_name && !in_description {
                return false;
            }
        }
        self.status.is_none_or(|s| task.status == s)
            && self.priority.is_none_or(|p| task.priority == p)
            && self.assignee_id.is_none_or(|id| task.assignee_id == id)
            && self.phase_id.is_none_or(|id| task.phase_id == id)
    }
}

/// The tasks matching every active criterion, in their original order.
pub fn filter_tasks(tasks: &[Task], filter: &TaskFilter) -> Vec<Task> {
    let search = search_term(filter.search.as_deref());
    tasks
        .iter()
        .filter(|task| filter.matches(task, search.as_deref()))
        .cloned()
        .collect()
}

/// A task together with its derived due-date urgency.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskCard {
    #[serde(flatten)]
    pub task: Task,
    pub due: DueDateInfo,
}

/// Attach due-date urgency, computed against `today`, to each task.
pub fn annotate(tasks: Vec<Task>, today: Date) -> Vec<TaskCard> {
    tasks
        .into_iter()
        .map(|task| {
            let due = describe_due_date(task.status, task.due_date, task.completed_date, today);
            TaskCard { task, due }
        })
        .collect()
}

/// Tasks of one phase with their completion summary.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhaseGroup<T> {
    pub phase_name: String,
    pub completed: usize,
    pub total: usize,
    pub completion_percentage: u32,
    pub tasks: Vec<T>,
}

/// `round(completed / total * 100)`, zero for an empty group.
pub fn completion_percentage(completed: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (completed as f64 / total as f64 * 100.0).round() as u32
}

/// Partition tasks by phase name.
///
/// Groups appear in the order their phase is first seen; tasks keep their
/// relative order within a group.
pub fn group_by_phase(tasks: &[Task]) -> Vec<PhaseGroup<Task>> {
    group_by(tasks.to_vec(), |task| task)
}

/// [`group_by_phase`] over annotated tasks.
pub fn group_cards_by_phase(cards: Vec<TaskCard>) -> Vec<PhaseGroup<TaskCard>> {
    group_by(cards, |card| &card.task)
}

fn group_by<T>(items: Vec<T>, task_of: impl Fn(&T) -> &Task) -> Vec<PhaseGroup<T>> {
    let mut groups: Vec<PhaseGroup<T>> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for item in items {
        let task = task_of(&item);
        let done = task.status == TaskStatus::Completed;
        let slot = match index.get(&task.phase_name) {
            Some(&slot) => slot,
            None => {
                index.insert(task.phase_name.clone(), groups.len());
                groups.push(PhaseGroup {
                    phase_name: task.phase_name.clone(),
                    completed: 0,
                    total: 0,
                    completion_percentage: 0,
                    tasks: Vec::new(),
                });
                groups.len() - 1
            }
        };

        let group = &mut groups[slot];
        group.total += 1;
        if done {
            group.completed += 1;
        }
        group.tasks.push(item);
    }

    for group in &mut groups {
        group.completion_percentage = completion_percentage(group.completed, group.total);
    }
    groups
}

/// Unique assignees, sorted by name. The last name seen for an id wins.
pub fn assignees(tasks: &[Task]) -> Vec<NamedRef> {
    unique_refs(tasks.iter().map(|t| (t.assignee_id, &t.assignee_name)))
}

/// Unique phases, sorted by name. The last name seen for an id wins.
pub fn phases(tasks: &[Task]) -> Vec<NamedRef> {
    unique_refs(tasks.iter().map(|t| (t.phase_id, &t.phase_name)))
}

fn unique_refs<'a>(pairs: impl Iterator<Item = (DbId, &'a String)>) -> Vec<NamedRef> {
    let mut refs: Vec<NamedRef> = Vec::new();
    for (id, name) in pairs {
        match refs.iter_mut().find(|r| r.id == id) {
            Some(existing) => existing.name = name.clone(),
            None => refs.push(NamedRef {
                id,
                name: name.clone(),
            }),
        }
    }
    refs.sort_by(|a, b| compare_text(&a.name, &b.name));
    refs
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, Utc};

    use super::*;

    fn task(id: DbId, phase: (DbId, &str), status: TaskStatus) -> Task {
        Task {
            id,
            project_id: 1,
            phase_id: phase.0,
            phase_name: phase.1.to_string(),
            name: format!("Task {id}"),
            description: None,
            due_date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            priority: TaskPriority::Medium,
            status,
            assignee_id: 10,
            assignee_name: "Dana Ortiz".to_string(),
            estimated_duration: None,
            completed_date: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn empty_filter_keeps_everything() {
        let tasks = vec![
            task(1, (1, "Foundation"), TaskStatus::Completed),
            task(2, (2, "Framing"), TaskStatus::NotStarted),
        ];
        let filter = TaskFilter::default();
        assert_eq!(filter_tasks(&tasks, &filter), tasks);
    }

    #[test]
    fn status_filter_is_exact_and_keeps_order() {
        let tasks = vec![
            task(1, (1, "Foundation"), TaskStatus::Completed),
            task(2, (1, "Foundation"), TaskStatus::InProgress),
            task(3, (2, "Framing"), TaskStatus::Completed),
        ];
        let filter = TaskFilter {
            status: Some(TaskStatus::Completed),
            ..TaskFilter::default()
        };
        let ids: Vec<DbId> = filter_tasks(&tasks, &filter).iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn search_matches_name_or_description_case_insensitively() {
        let mut poured = task(1, (1, "Foundation"), TaskStatus::NotStarted);
        poured.name = "Pour footings".to_string();
        let mut inspected = task(2, (1, "Foundation"), TaskStatus::NotStarted);
        inspected.description = Some("Schedule FOOTING inspection".to_string());
        let other = task(3, (2, "Framing"), TaskStatus::NotStarted);

        let filter = TaskFilter {
            search: Some("  Footing ".to_string()),
            ..TaskFilter::default()
        };
        let ids: Vec<DbId> = filter_tasks(&[poured, inspected, other], &filter)
            .iter()
            .map(|t| t.id)
            .collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn criteria_are_anded() {
        let mut high = task(1, (1, "Foundation"), TaskStatus::InProgress);
        high.priority = TaskPriority::High;
        let mut high_other_phase = task(2, (2, "Framing"), TaskStatus::InProgress);
        high_other_phase.priority = TaskPriority::High;

        let filter = TaskFilter {
            priority: Some(TaskPriority::High),
            phase_id: Some(1),
            ..TaskFilter::default()
        };
        let ids: Vec<DbId> = filter_tasks(&[high, high_other_phase], &filter)
            .iter()
            .map(|t| t.id)
            .collect();
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn foundation_group_is_half_complete() {
        let tasks = vec![
            task(1, (1, "Foundation"), TaskStatus::Completed),
            task(2, (1, "Foundation"), TaskStatus::NotStarted),
        ];
        let groups = group_by_phase(&tasks);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].phase_name, "Foundation");
        assert_eq!(groups[0].total, 2);
        assert_eq!(groups[0].completed, 1);
        assert_eq!(groups[0].completion_percentage, 50);
    }

    #[test]
    fn groups_follow_first_appearance_and_keep_task_order() {
        let tasks = vec![
            task(1, (2, "Framing"), TaskStatus::NotStarted),
            task(2, (1, "Foundation"), TaskStatus::Completed),
            task(3, (2, "Framing"), TaskStatus::Completed),
        ];
        let groups = group_by_phase(&tasks);
        let names: Vec<&str> = groups.iter().map(|g| g.phase_name.as_str()).collect();
        assert_eq!(names, vec!["Framing", "Foundation"]);
        let framing: Vec<DbId> = groups[0].tasks.iter().map(|t| t.id).collect();
        assert_eq!(framing, vec![1, 3]);
    }

    #[test]
    fn percentage_rounds_to_nearest() {
        assert_eq!(completion_percentage(1, 3), 33);
        assert_eq!(completion_percentage(2, 3), 67);
        assert_eq!(completion_percentage(0, 0), 0);
        assert_eq!(completion_percentage(3, 3), 100);
    }

    #[test]
    fn grouping_nothing_yields_no_groups() {
        assert!(group_by_phase(&[]).is_empty());
    }

    #[test]
    fn annotated_groups_carry_due_info() {
        let today = NaiveDate::from_ymd_opt(2025, 5, 31).unwrap();
        let cards = annotate(vec![task(1, (1, "Foundation"), TaskStatus::NotStarted)], today);
        let groups = group_cards_by_phase(cards);
        assert_eq!(groups[0].tasks[0].due.text, "Due tomorrow");
    }

    #[test]
    fn assignees_are_unique_and_sorted() {
        let mut a = task(1, (1, "Foundation"), TaskStatus::NotStarted);
        a.assignee_id = 2;
        a.assignee_name = "Sam Lee".to_string();
        let mut b = task(2, (1, "Foundation"), TaskStatus::NotStarted);
        b.assignee_id = 1;
        b.assignee_name = "alex Kim".to_string();
        let mut c = task(3, (2, "Framing"), TaskStatus::NotStarted);
        c.assignee_id = 2;
        c.assignee_name = "Sam Lee".to_string();

        let refs = assignees(&[a, b, c]);
        let names: Vec<&str> = refs.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["alex Kim", "Sam Lee"]);
    }

    #[test]
    fn phases_are_unique_and_sorted() {
        let tasks = vec![
            task(1, (2, "Roofing"), TaskStatus::NotStarted),
            task(2, (1, "Foundation"), TaskStatus::NotStarted),
            task(3, (2, "Roofing"), TaskStatus::NotStarted),
        ];
        let refs = phases(&tasks);
        assert_eq!(
            refs,
            vec![
                NamedRef { id: 1, name: "Foundation".to_string() },
                NamedRef { id: 2, name: "Roofing".to_string() },
            ]
        );
    }
}
