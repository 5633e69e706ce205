// Capa de estado de formularios: valores, meta por campo, validadores y
// protección contra envíos duplicados

pub mod guard;
pub mod state;
pub mod values;

pub use guard::{SubmitGuard, SubmitTicket};
pub use state::{required, FieldState, FieldValue, FormAction, FormState, FormValues};
pub use values::LoginValues;
