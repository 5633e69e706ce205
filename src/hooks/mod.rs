pub mod notification_context;
pub mod session_context;
pub mod use_form;
pub mod use_geolocation;
pub mod use_map;

pub use notification_context::{use_notifications, NotificationContext, NotificationProvider};
pub use session_context::{use_session_context, SessionContext, SessionContextProvider};
pub use use_form::{use_form, SubmissionTicket, SubmitRejected, UseFormHandle};
pub use use_geolocation::{use_geolocation, GeolocationState};
pub use use_map::{use_map, UseMapHandle};
