//! Request handlers, one module per resource.
//!
//! Handlers delegate to the repositories in `sitetrack_db`, derive views with
//! `sitetrack_db::views`, publish an outcome event for every mutation and map
//! errors via [`AppError`](crate::error::AppError).

pub mod equipment;
pub mod material;
pub mod notice;
pub mod project;
pub mod subcontractor;
pub mod task;

use sitetrack_core::error::CoreError;
use sitetrack_core::ids::parse_id;
use sitetrack_core::types::DbId;
use sitetrack_events::notice::{failure_event, success_event};
use sitetrack_events::Action;

use crate::state::AppState;

/// Publish the success or failure event for a mutation result.
pub(crate) fn notify<T>(
    state: &AppState,
    entity: &'static str,
    action: Action,
    result: &Result<T, CoreError>,
    describe: impl FnOnce(&T) -> (DbId, &str),
) {
    let event = match result {
        Ok(record) => {
            let (id, name) = describe(record);
            success_event(entity, id, name, action)
        }
        Err(e) => failure_event(entity, action, e),
    };
    state.event_bus.publish(event);
}

/// Parse a path id, publishing a failure event when it is malformed.
pub(crate) fn path_id(
    state: &AppState,
    entity: &'static str,
    action: Option<Action>,
    raw: &str,
) -> Result<DbId, CoreError> {
    let parsed = parse_id(entity, raw);
    if let (Err(e), Some(action)) = (&parsed, action) {
        state.event_bus.publish(failure_event(entity, action, e));
    }
    parsed
}
