pub mod notification_store;
pub mod session_store;

pub use notification_store::{Notice, NoticeLevel, NotificationAction, NotificationStore};
pub use session_store::{login_with, Session, SessionAction};
