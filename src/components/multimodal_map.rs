// ============================================================================
// MULTIMODAL MAP - Mapa a pantalla completa con el panel superpuesto
// ============================================================================
// Mientras no hay sesión el panel muestra el login; después, el formulario de
// direcciones. Cada GeoJSON recibido sustituye la ruta dibujada.
// ============================================================================

use yew::prelude::*;

use crate::components::directions_box::DirectionsBox;
use crate::components::login_prompt::LoginPrompt;
use crate::hooks::{use_geolocation, use_map, use_notifications, use_session_context};
use crate::maps::{apply_route, RouteUpdate};
use crate::utils::MAP_CONTAINER_ID;

#[function_component(MultimodalMap)]
pub fn multimodal_map() -> Html {
    let session = use_session_context();
    let notifications = use_notifications();
    let map = use_map(MAP_CONTAINER_ID);
    let geolocation = use_geolocation(true);
    let geojson = use_state(String::new);

    // Marcador de la posición del usuario
    {
        let map = map.clone();
        use_effect_with((map.ready, geolocation.usable_coords()), move |(_, coords)| {
            let result = map.with_renderer(|renderer| match coords {
                Some(coords) => renderer.set_user_location(*coords),
                None => renderer.clear_user_location(),
            });
            if let Some(Err(e)) = result {
                log::warn!("📍 No se pudo actualizar el marcador del usuario: {}", e);
            }
            || ()
        });
    }

    // Overlay de la ruta recomendada
    {
        let map = map.clone();
        let notifications = notifications.clone();
        use_effect_with((map.ready, (*geojson).clone()), move |(_, geojson)| {
            match map.with_renderer(|renderer| apply_route(renderer, geojson)) {
                Some(Ok(RouteUpdate::Rendered { markers, features })) => {
                    log::info!("🗺️ Ruta dibujada: {} marcadores, {} features", markers, features);
                }
                Some(Ok(RouteUpdate::Cleared)) | None => {}
                Some(Err(e)) => {
                    log::error!("❌ GeoJSON de la recomendación inválido: {}", e);
                    notifications.error(e.user_message());
                }
            }
            || ()
        });
    }

    let on_geojson = {
        let geojson = geojson.clone();
        Callback::from(move |text: String| geojson.set(text))
    };

    html! {
        <div class="map-shell">
            <div id={MAP_CONTAINER_ID} class="map-container"></div>
            <div class="map-overlay">
                if session.is_logged_in() {
                    <DirectionsBox on_geojson={on_geojson} />
                } else {
                    <LoginPrompt />
                }
            </div>
        </div>
    }
}
