pub mod app;
pub mod directions_box;
pub mod form_fields;
pub mod login_prompt;
pub mod multimodal_map;
pub mod notifications;

pub use app::{App, AppProps};
pub use directions_box::DirectionsBox;
pub use form_fields::{CheckboxField, FormProvider, SelectField, SubmitButton, TextField};
pub use login_prompt::LoginPrompt;
pub use multimodal_map::MultimodalMap;
pub use notifications::Notifications;
