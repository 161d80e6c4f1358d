//! Notification module for lexi
//!
//! Provides transient messages that expire on their own, such as the
//! "no definition found" notice.

mod render;
mod state;

pub use render::render_notification;
pub use state::{Notification, NotificationKind, NotificationState};
