// ============================================================================
// FORM FIELDS - Inputs genéricos ligados al UseFormHandle del Context
// ============================================================================

use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::forms::FieldValue;
use crate::hooks::UseFormHandle;

#[hook]
fn use_form_context() -> UseFormHandle {
    use_context::<UseFormHandle>().expect("form fields must be rendered inside a FormProvider")
}

#[derive(Properties, PartialEq)]
pub struct FormProviderProps {
    pub form: UseFormHandle,
    pub children: Children,
}

#[function_component(FormProvider)]
pub fn form_provider(props: &FormProviderProps) -> Html {
    html! {
        <ContextProvider<UseFormHandle> context={props.form.clone()}>
            {props.children.clone()}
        </ContextProvider<UseFormHandle>>
    }
}

#[derive(Properties, PartialEq)]
struct ErrorMessagesProps {
    errors: Vec<String>,
}

#[function_component(ErrorMessages)]
fn error_messages(props: &ErrorMessagesProps) -> Html {
    html! {
        <>
            { for props.errors.iter().map(|error| html! {
                <div key={error.clone()} class="field-error">{error.clone()}</div>
            }) }
        </>
    }
}

/// Errores visibles solo después del primer blur
fn visible_errors(form: &UseFormHandle, name: &str) -> Vec<String> {
    match form.state.field(name) {
        Some(field) if field.touched => field.errors.clone(),
        _ => Vec::new(),
    }
}

#[derive(Properties, PartialEq)]
pub struct TextFieldProps {
    pub name: AttrValue,
    pub label: AttrValue,
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
    #[prop_or(AttrValue::from("text"))]
    pub input_type: AttrValue,
}

#[function_component(TextField)]
pub fn text_field(props: &TextFieldProps) -> Html {
    let form = use_form_context();
    let value = form.state.text(&props.name);

    let oninput = {
        let on_change = form.on_change(&props.name);
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) {
                on_change.emit(FieldValue::Text(input.value()));
            }
        })
    };
    let onblur = form.on_blur(&props.name).reform(|_: FocusEvent| ());

    html! {
        <div class="form-group">
            <label for={props.name.clone()} class="field-label">{props.label.clone()}</label>
            <input
                id={props.name.clone()}
                name={props.name.clone()}
                type={props.input_type.clone()}
                value={value}
                placeholder={props.placeholder.clone()}
                {oninput}
                {onblur}
            />
            <ErrorMessages errors={visible_errors(&form, &props.name)} />
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SelectFieldProps {
    pub name: AttrValue,
    pub label: AttrValue,
    /// `(label, value)`
    pub options: Vec<(String, String)>,
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
}

#[function_component(SelectField)]
pub fn select_field(props: &SelectFieldProps) -> Html {
    let form = use_form_context();
    let current = form.state.text(&props.name);

    let onchange = {
        let on_change = form.on_change(&props.name);
        Callback::from(move |e: Event| {
            if let Some(select) = e.target().and_then(|t| t.dyn_into::<HtmlSelectElement>().ok()) {
                on_change.emit(FieldValue::Text(select.value()));
            }
        })
    };
    let onblur = form.on_blur(&props.name).reform(|_: FocusEvent| ());

    html! {
        <div class="form-group">
            <label for={props.name.clone()} class="field-label">{props.label.clone()}</label>
            <select id={props.name.clone()} name={props.name.clone()} {onchange} {onblur}>
                if let Some(placeholder) = &props.placeholder {
                    <option value="" selected={current.is_empty()}>{placeholder.clone()}</option>
                }
                <optgroup label={props.label.clone()}>
                    { for props.options.iter().map(|(label, value)| html! {
                        <option key={value.clone()} value={value.clone()} selected={*value == current}>
                            {label.clone()}
                        </option>
                    }) }
                </optgroup>
            </select>
            <ErrorMessages errors={visible_errors(&form, &props.name)} />
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct CheckboxFieldProps {
    pub name: AttrValue,
    /// Texto visible junto a la casilla
    pub label: AttrValue,
}

#[function_component(CheckboxField)]
pub fn checkbox_field(props: &CheckboxFieldProps) -> Html {
    let form = use_form_context();
    let checked = form.state.flag(&props.name);

    let onchange = {
        let on_change = form.on_change(&props.name);
        Callback::from(move |e: Event| {
            if let Some(input) = e.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) {
                on_change.emit(FieldValue::Bool(input.checked()));
            }
        })
    };

    html! {
        <div class="checkbox-field">
            <input type="checkbox" id={props.name.clone()} name={props.name.clone()} {checked} {onchange} />
            <label for={props.name.clone()}>{props.label.clone()}</label>
            <ErrorMessages errors={visible_errors(&form, &props.name)} />
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SubmitButtonProps {
    pub label: AttrValue,
}

/// Deshabilitado mientras hay un envío en curso
#[function_component(SubmitButton)]
pub fn submit_button(props: &SubmitButtonProps) -> Html {
    let form = use_form_context();
    let submitting = form.is_submitting();

    html! {
        <button type="submit" class="btn-submit" disabled={submitting}>
            if submitting {
                <span class="spinner" />
            }
            {props.label.clone()}
        </button>
    }
}
