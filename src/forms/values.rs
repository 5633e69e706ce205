use crate::models::{OptimizationMode, RecommendationRequest};
use super::state::{FieldValue, FormState, FormValues};

/// Credenciales del formulario de login
#[derive(Clone, Default, PartialEq)]
pub struct LoginValues {
    pub username: String,
    pub password: String,
}

impl FormValues for LoginValues {
    fn to_fields(&self) -> Vec<(&'static str, FieldValue)> {
        vec![
            ("username", self.username.as_str().into()),
            ("password", self.password.as_str().into()),
        ]
    }

    fn from_form(form: &FormState) -> Option<Self> {
        Some(Self {
            username: form.text("username"),
            password: form.text("password"),
        })
    }
}

impl FormValues for RecommendationRequest {
    fn to_fields(&self) -> Vec<(&'static str, FieldValue)> {
        vec![
            ("origin", self.origin.as_str().into()),
            ("destination", self.destination.as_str().into()),
            ("mode", self.mode.as_str().into()),
            ("walk", self.walk.into()),
            ("car", self.car.into()),
            ("escooter", self.escooter.into()),
            ("sea_vessel", self.sea_vessel.into()),
        ]
    }

    fn from_form(form: &FormState) -> Option<Self> {
        Some(Self {
            origin: form.text("origin"),
            destination: form.text("destination"),
            mode: OptimizationMode::from_wire(form.text("mode").trim())?,
            walk: form.flag("walk"),
            car: form.flag("car"),
            escooter: form.flag("escooter"),
            sea_vessel: form.flag("sea_vessel"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::FormAction;

    #[test]
    fn login_values_come_back_unchanged() {
        let mut form = FormState::new(&LoginValues::default());
        form.apply(FormAction::Change { name: "username".to_string(), value: "leo".into() });
        let values: LoginValues = form.values().unwrap();
        assert_eq!(values.username, "leo");
        assert_eq!(values.password, "");
    }

    #[test]
    fn unknown_mode_makes_request_unbuildable() {
        let mut req = RecommendationRequest::default();
        req.walk = true;
        let mut form = FormState::new(&req);
        let back: RecommendationRequest = form.values().unwrap();
        assert_eq!(back, req);

        form.apply(FormAction::Change { name: "mode".to_string(), value: "teleport".into() });
        assert!(form.values::<RecommendationRequest>().is_none());
    }
}
