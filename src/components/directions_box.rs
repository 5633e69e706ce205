use yew::prelude::*;

use crate::components::form_fields::{CheckboxField, FormProvider, SelectField, SubmitButton, TextField};
use crate::forms::{required, FormState};
use crate::hooks::{use_form, use_geolocation, use_notifications, use_session_context};
use crate::models::{OptimizationMode, RecommendationRequest};
use crate::services::request_recommendation;

#[derive(Properties, PartialEq)]
pub struct DirectionsBoxProps {
    /// Recibe el GeoJSON serializado de cada recomendación exitosa
    pub on_geojson: Callback<String>,
}

#[function_component(DirectionsBox)]
pub fn directions_box(props: &DirectionsBoxProps) -> Html {
    let session = use_session_context();
    let notifications = use_notifications();
    let geolocation = use_geolocation(false);

    let form = {
        let coords = geolocation.usable_coords();
        use_form(move || {
            FormState::new(&RecommendationRequest::with_origin(coords))
                .with_validator("mode", required("Mode is required"))
        })
    };

    // La posición suele llegar después del primer render
    {
        let form = form.clone();
        use_effect_with(geolocation.usable_coords(), move |coords| {
            if let Some(coords) = coords {
                form.seed_default("origin", coords.to_braced().into());
            }
            || ()
        });
    }

    let greeting = session
        .user()
        .map(|user| format!("Hi, {}", user.name))
        .unwrap_or_default();

    let on_submit = {
        let form = form.clone();
        let on_geojson = props.on_geojson.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let (request, ticket) = match form.begin_submit::<RecommendationRequest>() {
                Ok(ok) => ok,
                Err(rejected) => {
                    log::warn!("⚠️ Envío de direcciones rechazado: {:?}", rejected);
                    if let Some(notice) = rejected.notice() {
                        notifications.info(notice);
                    }
                    return;
                }
            };

            let token = session.access_token();
            let notifications = notifications.clone();
            let on_geojson = on_geojson.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let mode = request.mode;
                match request_recommendation(request, token).await {
                    Ok(geojson) => {
                        log::info!("✅ Recomendación recibida ({} bytes)", geojson.len());
                        on_geojson.emit(geojson);
                        notifications.success(format!(
                            "Route optimized for {} received at {}",
                            mode.label(),
                            chrono::Local::now().format("%H:%M:%S")
                        ));
                    }
                    Err(e) => {
                        log::error!("❌ Error pidiendo recomendación: {}", e);
                        notifications.error(format!("Route request failed: {}", e.user_message()));
                    }
                }
                drop(ticket);
            });
        })
    };

    html! {
        <form class="leaflet-overlay-pane map-panel" onsubmit={on_submit}>
            <p class="panel-title">{greeting}</p>
            <FormProvider form={form.clone()}>
                <TextField name="origin" label="Origin" placeholder="{latitude, longitude}" />
                <TextField name="destination" label="Destination" placeholder="{latitude, longitude}" />
                <SelectField
                    name="mode"
                    label="Focus on parameter"
                    options={OptimizationMode::select_options()}
                    placeholder="Select a Parameter"
                />
                <div class="exclusions">
                    <h2 class="panel-subtitle">{"Exclude vehicles"}</h2>
                    <CheckboxField name="walk" label="Walking" />
                    <CheckboxField name="car" label="Car" />
                    <CheckboxField name="escooter" label="E-Scooter" />
                    <CheckboxField name="sea_vessel" label="Sea Vessel" />
                </div>
                <div class="form-actions">
                    <SubmitButton label="Go" />
                </div>
            </FormProvider>
        </form>
    }
}
