//! Due-date urgency for tasks.
//!
//! Urgency is derived on every read from the task status and due date; it is
//! never stored on the task itself.

use serde::Serialize;

use crate::status::TaskStatus;
use crate::types::{Date, Timestamp};

/// Tasks due within this many days (inclusive) are flagged as due soon.
pub const DUE_SOON_DAYS: i64 = 2;

/// Display format for dates that are not yet urgent, e.g. `Mar 05, 2025`.
pub const DUE_DATE_FORMAT: &str = "%b %d, %Y";

/// Display format for completion stamps, e.g. `Mar 05`.
pub const COMPLETED_DATE_FORMAT: &str = "%b %d";

/// Urgency bucket of a task's due date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case", tag = "state")]
pub enum DueDateStatus {
    Completed,
    /// Due date has passed; `days` is how many days ago.
    Overdue { days: i64 },
    /// Due within [`DUE_SOON_DAYS`]; `days` is how many days remain.
    DueSoon { days: i64 },
    Normal,
}

impl DueDateStatus {
    /// Short state name: `completed`, `overdue`, `due-soon` or `normal`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::Overdue { .. } => "overdue",
            Self::DueSoon { .. } => "due-soon",
            Self::Normal => "normal",
        }
    }
}

/// Urgency plus the human-readable text shown next to a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DueDateInfo {
    #[serde(flatten)]
    pub status: DueDateStatus,
    pub text: String,
}

/// Classify a due date relative to `today`.
pub fn classify_due_date(status: TaskStatus, due_date: Date, today: Date) -> DueDateStatus {
    if status == TaskStatus::Completed {
        return DueDateStatus::Completed;
    }

    let days_until = (due_date - today).num_days();
    if days_until < 0 {
        DueDateStatus::Overdue {
            days: days_until.abs(),
        }
    } else if days_until <= DUE_SOON_DAYS {
        DueDateStatus::DueSoon { days: days_until }
    } else {
        DueDateStatus::Normal
    }
}

/// Classify a due date and render its display text.
pub fn describe_due_date(
    status: TaskStatus,
    due_date: Date,
    completed_date: Option<Timestamp>,
    today: Date,
) -> DueDateInfo {
    let status = classify_due_date(status, due_date, today);
    let text = match status {
        DueDateStatus::Completed => match completed_date {
            Some(at) => format!("Completed {}", at.format(COMPLETED_DATE_FORMAT)),
            None => "Completed".to_string(),
        },
        DueDateStatus::Overdue { days } => {
            let unit = if days > 1 { "days" } else { "day" };
            format!("{days} {unit} overdue")
        }
        DueDateStatus::DueSoon { days: 0 } => "Due today".to_string(),
        DueDateStatus::DueSoon { days: 1 } => "Due tomorrow".to_string(),
        DueDateStatus::DueSoon { days } => format!("Due in {days} days"),
        DueDateStatus::Normal => due_date.format(DUE_DATE_FORMAT).to_string(),
    };
    DueDateInfo { status, text }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, TimeZone, Utc};

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> Date {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn today() -> Date {
        date(2025, 3, 10)
    }

    #[test]
    fn completed_task_is_never_overdue() {
        let info = describe_due_date(TaskStatus::Completed, date(2025, 1, 1), None, today());
        assert_eq!(info.status, DueDateStatus::Completed);
        assert_eq!(info.text, "Completed");
    }

    #[test]
    fn completed_text_includes_completion_day() {
        let at = Utc.with_ymd_and_hms(2025, 3, 5, 14, 0, 0).unwrap();
        let info = describe_due_date(TaskStatus::Completed, date(2025, 3, 9), Some(at), today());
        assert_eq!(info.text, "Completed Mar 05");
    }

    #[test]
    fn past_due_date_is_overdue() {
        let info = describe_due_date(TaskStatus::InProgress, date(2025, 3, 7), None, today());
        assert_eq!(info.status, DueDateStatus::Overdue { days: 3 });
        assert_eq!(info.text, "3 days overdue");
    }

    #[test]
    fn one_day_overdue_is_singular() {
        let info = describe_due_date(TaskStatus::NotStarted, date(2025, 3, 9), None, today());
        assert_eq!(info.text, "1 day overdue");
    }

    #[test]
    fn due_today() {
        let info = describe_due_date(TaskStatus::NotStarted, today(), None, today());
        assert_eq!(info.status, DueDateStatus::DueSoon { days: 0 });
        assert_eq!(info.text, "Due today");
    }

    #[test]
    fn due_tomorrow() {
        let info = describe_due_date(TaskStatus::NotStarted, date(2025, 3, 11), None, today());
        assert_eq!(info.status.as_str(), "due-soon");
        assert_eq!(info.text, "Due tomorrow");
    }

    #[test]
    fn due_in_two_days_is_still_soon() {
        let info = describe_due_date(TaskStatus::InProgress, date(2025, 3, 12), None, today());
        assert_eq!(info.status, DueDateStatus::DueSoon { days: 2 });
        assert_eq!(info.text, "Due in 2 days");
    }

    #[test]
    fn three_days_out_is_normal_with_formatted_date() {
        let info = describe_due_date(TaskStatus::InProgress, date(2025, 3, 13), None, today());
        assert_eq!(info.status, DueDateStatus::Normal);
        assert_eq!(info.text, "Mar 13, 2025");
    }

    #[test]
    fn serializes_with_kebab_case_state() {
        let json = serde_json::to_value(describe_due_date(
            TaskStatus::NotStarted,
            date(2025, 3, 11),
            None,
            today(),
        ))
        .unwrap();
        assert_eq!(json["state"], "due-soon");
        assert_eq!(json["days"], 1);
        assert_eq!(json["text"], "Due tomorrow");
    }
}
