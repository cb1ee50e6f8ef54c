//! SiteTrack event bus and user-facing notices.
//!
//! - [`EventBus`]: in-process publish/subscribe hub backed by
//!   `tokio::sync::broadcast`.
//! - [`PlatformEvent`]: the domain event envelope, optionally carrying a
//!   [`Notice`].
//! - [`NoticeLog`]: background consumer that keeps the most recent notices
//!   and mirrors them into `tracing`.

pub mod bus;
pub mod notice;
pub mod notice_log;

pub use bus::{EventBus, PlatformEvent};
pub use notice::{Action, Notice};
pub use notice_log::NoticeLog;
