use yew::prelude::*;

use crate::components::form_fields::{FormProvider, SubmitButton, TextField};
use crate::forms::{FormState, LoginValues};
use crate::hooks::{use_form, use_notifications, use_session_context};

#[function_component(LoginPrompt)]
pub fn login_prompt() -> Html {
    let session = use_session_context();
    let notifications = use_notifications();
    let form = use_form(|| FormState::new(&LoginValues::default()));

    let on_submit = {
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let (values, ticket) = match form.begin_submit::<LoginValues>() {
                Ok(ok) => ok,
                Err(rejected) => {
                    log::warn!("⚠️ Login rechazado: {:?}", rejected);
                    if let Some(notice) = rejected.notice() {
                        notifications.info(notice);
                    }
                    return;
                }
            };

            notifications.info(format!("Signing in as {}…", values.username));

            let session = session.clone();
            let notifications = notifications.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match session.login(values.username.clone(), values.password).await {
                    Ok(()) => notifications.success(format!("Welcome, {}", values.username)),
                    Err(e) => {
                        log::error!("❌ Error en login: {}", e);
                        notifications.error(format!("Login failed: {}", e.user_message()));
                    }
                }
                drop(ticket);
            });
        })
    };

    html! {
        <form class="leaflet-overlay-pane map-panel" onsubmit={on_submit}>
            <p class="panel-title">{"Please Login"}</p>
            <FormProvider form={form.clone()}>
                <TextField name="username" label="Username" />
                <TextField name="password" label="Password" input_type="password" />
                <div class="form-actions">
                    <SubmitButton label="Login" />
                </div>
            </FormProvider>
        </form>
    }
}
