// ============================================================================
// USE FORM HOOK - Estado de formulario compartido por los campos vía Context
// ============================================================================

use yew::prelude::*;

use crate::forms::{FieldValue, FormAction, FormState, FormValues, SubmitGuard, SubmitTicket};

#[derive(Clone, PartialEq)]
pub struct UseFormHandle {
    pub state: UseReducerHandle<FormState>,
    pub guard: SubmitGuard,
    /// Copia del flag del guard para re-renderizar el botón de submit
    submitting: UseStateHandle<bool>,
}

impl UseFormHandle {
    pub fn on_change(&self, name: &str) -> Callback<FieldValue> {
        let state = self.state.clone();
        let name = name.to_string();
        Callback::from(move |value: FieldValue| {
            state.dispatch(FormAction::Change { name: name.clone(), value });
        })
    }

    pub fn on_blur(&self, name: &str) -> Callback<()> {
        let state = self.state.clone();
        let name = name.to_string();
        Callback::from(move |_| state.dispatch(FormAction::Blur(name.clone())))
    }

    pub fn seed_default(&self, name: &str, value: FieldValue) {
        self.state.dispatch(FormAction::SeedDefault { name: name.to_string(), value });
    }

    pub fn is_submitting(&self) -> bool {
        *self.submitting
    }

    /// Valida todo y, si no hay errores ni otro envío en curso, devuelve los
    /// valores tipados junto con el ticket del envío
    pub fn begin_submit<V: FormValues>(&self) -> Result<(V, SubmissionTicket), SubmitRejected> {
        // Se valida sobre una copia para decidir ya, sin esperar al re-render
        let mut validated = (*self.state).clone();
        validated.apply(FormAction::ValidateAll);
        self.state.dispatch(FormAction::ValidateAll);

        if validated.has_errors() {
            return Err(SubmitRejected::Invalid);
        }
        let values = validated.values::<V>().ok_or(SubmitRejected::Invalid)?;
        let ticket = self.guard.try_begin().ok_or(SubmitRejected::InFlight)?;
        self.submitting.set(true);

        Ok((
            values,
            SubmissionTicket {
                _ticket: ticket,
                submitting: self.submitting.clone(),
            },
        ))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitRejected {
    Invalid,
    InFlight,
}

impl SubmitRejected {
    /// Aviso para el usuario; `None` si los errores ya se ven junto a los campos
    pub fn notice(&self) -> Option<&'static str> {
        match self {
            SubmitRejected::InFlight => Some("A request is already in progress"),
            SubmitRejected::Invalid => None,
        }
    }
}

/// Al soltarse libera el guard y reactiva el botón
pub struct SubmissionTicket {
    _ticket: SubmitTicket,
    submitting: UseStateHandle<bool>,
}

impl Drop for SubmissionTicket {
    fn drop(&mut self) {
        self.submitting.set(false);
    }
}

#[hook]
pub fn use_form<F>(init: F) -> UseFormHandle
where
    F: FnOnce() -> FormState,
{
    let state = use_reducer(init);
    let guard = use_memo((), |_| SubmitGuard::new());
    let submitting = use_state(|| false);

    UseFormHandle {
        state,
        guard: (*guard).clone(),
        submitting,
    }
}
