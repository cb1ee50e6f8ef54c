//! User-facing outcome messages for mutations.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sitetrack_core::types::DbId;

use crate::bus::PlatformEvent;

/// A one-line success or failure message for the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notice {
    pub success: bool,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            created_at: Utc::now(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            created_at: Utc::now(),
        }
    }
}

/// A mutation that produces a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Create,
    Update,
    Delete,
    Request,
    Advance,
}

impl Action {
    /// Past-tense suffix used in event names, e.g. `material.created`.
    pub fn event_suffix(self) -> &'static str {
        match self {
            Self::Create => "created",
            Self::Update => "updated",
            Self::Delete => "deleted",
            Self::Request => "requested",
            Self::Advance => "status_changed",
        }
    }

    /// Present-tense verb used in failure event names, e.g. `task.advance_failed`.
    pub fn verb(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::Request => "request",
            Self::Advance => "advance",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.event_suffix())
    }
}

/// `Material "Rebar" created successfully`.
pub fn success_message(entity: &str, name: &str, action: Action) -> String {
    match action {
        Action::Request => format!("Request for {entity} \"{name}\" submitted successfully"),
        Action::Advance => format!("{entity} \"{name}\" status updated"),
        _ => format!("{entity} \"{name}\" {} successfully", action.event_suffix()),
    }
}

/// `Failed to create material: Validation failed: name is required`.
pub fn failure_message(entity: &str, action: Action, error: &impl fmt::Display) -> String {
    let entity = entity.to_lowercase();
    match action {
        Action::Request => format!("Failed to submit {entity} request: {error}"),
        Action::Advance => format!("Failed to update {entity} status: {error}"),
        _ => format!("Failed to {} {entity}: {error}", action.verb()),
    }
}

/// The event published after a successful mutation.
pub fn success_event(entity: &str, id: DbId, name: &str, action: Action) -> PlatformEvent {
    let source = entity.to_lowercase();
    PlatformEvent::new(format!("{source}.{}", action.event_suffix()))
        .with_source(source, id)
        .with_notice(Notice::success(success_message(entity, name, action)))
}

/// The event published after a rejected mutation.
pub fn failure_event(entity: &str, action: Action, error: &impl fmt::Display) -> PlatformEvent {
    let source = entity.to_lowercase();
    PlatformEvent::new(format!("{source}.{}_failed", action.verb()))
        .with_notice(Notice::failure(failure_message(entity, action, error)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_messages_quote_the_name() {
        assert_eq!(
            success_message("Material", "Rebar", Action::Create),
            "Material \"Rebar\" created successfully"
        );
        assert_eq!(
            success_message("Subcontractor", "Volt Electric", Action::Delete),
            "Subcontractor \"Volt Electric\" deleted successfully"
        );
        assert_eq!(
            success_message("Task", "Pour slab", Action::Advance),
            "Task \"Pour slab\" status updated"
        );
    }

    #[test]
    fn failure_message_includes_the_error() {
        assert_eq!(
            failure_message("Task", Action::Update, &"Entity not found: Task with id 9"),
            "Failed to update task: Entity not found: Task with id 9"
        );
        assert_eq!(
            failure_message("Material", Action::Request, &"Invalid argument: Quantity must be greater than 0, got 0"),
            "Failed to submit material request: Invalid argument: Quantity must be greater than 0, got 0"
        );
    }

    #[test]
    fn events_are_named_by_entity_and_outcome() {
        let ok = success_event("Equipment", 3, "CAT 320", Action::Update);
        assert_eq!(ok.event_type, "equipment.updated");
        assert_eq!(ok.source_entity_id, Some(3));
        assert!(ok.notice.as_ref().is_some_and(|n| n.success));

        let failed = failure_event("Task", Action::Advance, &"boom");
        assert_eq!(failed.event_type, "task.advance_failed");
        assert!(failed.notice.as_ref().is_some_and(|n| !n.success));
        assert!(failed.source_entity_id.is_none());
    }
}
