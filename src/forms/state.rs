// ============================================================================
// FORM STATE - Estado genérico de formulario (valores + meta por campo)
// ============================================================================
// Cada campo guarda su valor, si fue tocado (blur) y sus errores.
// Los validadores se registran por campo y se ejecutan en blur y en submit.
// ============================================================================

use std::collections::BTreeMap;
use std::rc::Rc;

use yew::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue {
    Text(String),
    Bool(bool),
}

impl FieldValue {
    pub fn as_text(&self) -> &str {
        match self {
            FieldValue::Text(s) => s,
            FieldValue::Bool(_) => "",
        }
    }

    pub fn as_bool(&self) -> bool {
        matches!(self, FieldValue::Bool(true))
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FieldState {
    pub value: FieldValue,
    pub touched: bool,
    pub errors: Vec<String>,
}

impl FieldState {
    fn new(value: FieldValue) -> Self {
        Self {
            value,
            touched: false,
            errors: Vec::new(),
        }
    }
}

/// Validador: texto no vacío (ignorando espacios)
pub fn required(message: &'static str) -> impl Fn(&FieldValue) -> Option<String> {
    move |value| {
        if value.as_text().trim().is_empty() {
            Some(message.to_string())
        } else {
            None
        }
    }
}

/// Valores de un formulario tipado ↔ campos genéricos
pub trait FormValues: Sized {
    fn to_fields(&self) -> Vec<(&'static str, FieldValue)>;

    /// `None` si algún campo no tiene un valor convertible
    fn from_form(form: &FormState) -> Option<Self>;
}

#[derive(Clone)]
pub struct FormState {
    fields: BTreeMap<String, FieldState>,
    validators: Rc<Vec<(String, Rc<dyn Fn(&FieldValue) -> Option<String>>)>>,
    pub submission_attempts: u32,
}

impl std::fmt::Debug for FormState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormState")
            .field("fields", &self.fields)
            .field("validators", &self.validators.len())
            .field("submission_attempts", &self.submission_attempts)
            .finish()
    }
}

impl PartialEq for FormState {
    fn eq(&self, other: &Self) -> bool {
        self.fields == other.fields
            && self.submission_attempts == other.submission_attempts
            && Rc::ptr_eq(&self.validators, &other.validators)
    }
}

pub enum FormAction {
    Change { name: String, value: FieldValue },
    Blur(String),
    /// Solo cambia el valor si el usuario no ha tocado el campo
    SeedDefault { name: String, value: FieldValue },
    /// Valida todos los campos (los marca como tocados)
    ValidateAll,
}

impl FormState {
    pub fn new<V: FormValues>(defaults: &V) -> Self {
        let fields = defaults
            .to_fields()
            .into_iter()
            .map(|(name, value)| (name.to_string(), FieldState::new(value)))
            .collect();
        Self {
            fields,
            validators: Rc::new(Vec::new()),
            submission_attempts: 0,
        }
    }

    pub fn with_validator<F>(mut self, name: &str, validator: F) -> Self
    where
        F: Fn(&FieldValue) -> Option<String> + 'static,
    {
        let mut validators = (*self.validators).clone();
        validators.push((name.to_string(), Rc::new(validator)));
        self.validators = Rc::new(validators);
        self
    }

    pub fn field(&self, name: &str) -> Option<&FieldState> {
        self.fields.get(name)
    }

    pub fn value(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name).map(|f| &f.value)
    }

    pub fn text(&self, name: &str) -> String {
        self.value(name).map(|v| v.as_text().to_string()).unwrap_or_default()
    }

    pub fn flag(&self, name: &str) -> bool {
        self.value(name).map(FieldValue::as_bool).unwrap_or(false)
    }

    pub fn errors(&self, name: &str) -> &[String] {
        self.fields.get(name).map(|f| f.errors.as_slice()).unwrap_or(&[])
    }

    pub fn has_errors(&self) -> bool {
        self.fields.values().any(|f| !f.errors.is_empty())
    }

    pub fn values<V: FormValues>(&self) -> Option<V> {
        V::from_form(self)
    }

    fn run_validators(&self, name: &str, value: &FieldValue) -> Vec<String> {
        self.validators
            .iter()
            .filter(|(field, _)| field == name)
            .filter_map(|(_, validate)| validate(value))
            .collect()
    }

    pub(crate) fn apply(&mut self, action: FormAction) {
        match action {
            FormAction::Change { name, value } => {
                if let Some(field) = self.fields.get_mut(&name) {
                    field.value = value;
                }
            }
            FormAction::Blur(name) => {
                if let Some(value) = self.value(&name).cloned() {
                    let errors = self.run_validators(&name, &value);
                    if let Some(field) = self.fields.get_mut(&name) {
                        field.touched = true;
                        field.errors = errors;
                    }
                }
            }
            FormAction::SeedDefault { name, value } => {
                if let Some(field) = self.fields.get_mut(&name) {
                    if !field.touched {
                        field.value = value;
                    }
                }
            }
            FormAction::ValidateAll => {
                self.submission_attempts += 1;
                let names: Vec<String> = self.fields.keys().cloned().collect();
                for name in names {
                    self.apply(FormAction::Blur(name));
                }
            }
        }
    }
}

impl Reducible for FormState {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Coordinates, OptimizationMode, RecommendationRequest};

    fn directions_form() -> FormState {
        FormState::new(&RecommendationRequest::default()).with_validator("mode", required("Mode is required"))
    }

    fn reduce(state: FormState, action: FormAction) -> FormState {
        (*Rc::new(state).reduce(action)).clone()
    }

    #[test]
    fn blank_mode_fails_on_blur() {
        let form = reduce(
            directions_form(),
            FormAction::Change { name: "mode".to_string(), value: "".into() },
        );
        assert!(!form.has_errors(), "validators only run on blur");

        let form = reduce(form, FormAction::Blur("mode".to_string()));
        assert_eq!(form.errors("mode"), ["Mode is required".to_string()]);
        assert!(form.field("mode").unwrap().touched);
        assert!(form.has_errors());
    }

    #[test]
    fn correcting_mode_clears_the_error() {
        let mut form = directions_form();
        form.apply(FormAction::Change { name: "mode".to_string(), value: "  ".into() });
        form.apply(FormAction::Blur("mode".to_string()));
        assert!(form.has_errors());

        form.apply(FormAction::Change { name: "mode".to_string(), value: "car_count".into() });
        form.apply(FormAction::Blur("mode".to_string()));
        assert!(!form.has_errors());
        let values: RecommendationRequest = form.values().unwrap();
        assert_eq!(values.mode, OptimizationMode::CarCount);
    }

    #[test]
    fn empty_origin_and_destination_are_accepted() {
        let mut form = directions_form();
        form.apply(FormAction::ValidateAll);
        assert!(!form.has_errors());
        assert_eq!(form.submission_attempts, 1);
        let values: RecommendationRequest = form.values().unwrap();
        assert_eq!(values.origin, "");
        assert_eq!(values.destination, "");
    }

    #[test]
    fn seeded_origin_does_not_overwrite_user_input() {
        let mut form = directions_form();
        form.apply(FormAction::SeedDefault {
            name: "origin".to_string(),
            value: Coordinates::new(59.33, 18.06).to_braced().into(),
        });
        assert_eq!(form.text("origin"), "{59.33, 18.06}");

        form.apply(FormAction::Change { name: "origin".to_string(), value: "home".into() });
        form.apply(FormAction::Blur("origin".to_string()));
        form.apply(FormAction::SeedDefault { name: "origin".to_string(), value: "{1, 2}".into() });
        assert_eq!(form.text("origin"), "home");
    }

    #[test]
    fn checkbox_fields_hold_booleans() {
        let mut form = directions_form();
        form.apply(FormAction::Change { name: "sea_vessel".to_string(), value: true.into() });
        assert!(form.flag("sea_vessel"));
        assert!(!form.flag("walk"));
        assert!(!form.flag("unknown"));
    }
}
