// ============================================================================
// USE GEOLOCATION HOOK - Posición del dispositivo (lectura única o watch)
// ============================================================================
// Si la API no existe o el usuario la deniega no se lanza ningún error:
// simplemente no hay coordenadas.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Geolocation, Position, PositionError, PositionOptions};
use yew::prelude::*;

use crate::config::CONFIG;
use crate::models::Coordinates;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GeolocationState {
    pub available: bool,
    pub enabled: bool,
    pub coords: Option<Coordinates>,
}

impl GeolocationState {
    /// Coordenadas solo si la API existe, está permitida y ya respondió
    pub fn usable_coords(&self) -> Option<Coordinates> {
        if self.available && self.enabled {
            self.coords
        } else {
            None
        }
    }
}

fn browser_geolocation() -> Option<Geolocation> {
    web_sys::window()?.navigator().geolocation().ok()
}

fn position_options() -> PositionOptions {
    let options = PositionOptions::new();
    options.set_enable_high_accuracy(true);
    options.set_timeout(CONFIG.ui_config.geolocation_timeout_ms);
    options
}

fn on_position(state: &UseStateHandle<GeolocationState>, position: Position) {
    let coords = position.coords();
    state.set(GeolocationState {
        available: true,
        enabled: true,
        coords: Some(Coordinates::new(coords.latitude(), coords.longitude())),
    });
}

fn on_position_error(state: &UseStateHandle<GeolocationState>, error: PositionError) {
    if error.code() == PositionError::PERMISSION_DENIED {
        log::warn!("📍 Geolocalización denegada por el usuario");
        state.set(GeolocationState {
            available: true,
            enabled: false,
            coords: None,
        });
    } else {
        // Timeout o posición no disponible: se conserva la última posición
        log::warn!("📍 Geolocalización sin respuesta: {}", error.message());
    }
}

#[hook]
pub fn use_geolocation(watch: bool) -> GeolocationState {
    let state = use_state(|| GeolocationState {
        available: browser_geolocation().is_some(),
        enabled: false,
        coords: None,
    });

    {
        let state = state.clone();
        use_effect_with(watch, move |&watch| {
            let geolocation = browser_geolocation();
            let mut watch_id: Option<i32> = None;
            let mut callbacks = None;

            match &geolocation {
                None => log::info!("📍 Geolocalización no disponible en este navegador"),
                Some(geo) if watch => {
                    let success_state = state.clone();
                    let error_state = state.clone();
                    let on_success = Closure::<dyn FnMut(Position)>::new(move |p| {
                        on_position(&success_state, p)
                    });
                    let on_error = Closure::<dyn FnMut(PositionError)>::new(move |e| {
                        on_position_error(&error_state, e)
                    });

                    match geo.watch_position_with_error_callback_and_options(
                        on_success.as_ref().unchecked_ref(),
                        Some(on_error.as_ref().unchecked_ref()),
                        &position_options(),
                    ) {
                        Ok(id) => watch_id = Some(id),
                        Err(e) => log::error!("❌ watchPosition falló: {:?}", e),
                    }
                    callbacks = Some((on_success, on_error));
                }
                Some(geo) => {
                    let success_state = state.clone();
                    let error_state = state.clone();
                    // Lectura única: los callbacks se liberan al ser llamados
                    let on_success = Closure::once_into_js(move |p: Position| {
                        on_position(&success_state, p)
                    });
                    let on_error = Closure::once_into_js(move |e: PositionError| {
                        on_position_error(&error_state, e)
                    });
                    if let Err(e) = geo.get_current_position_with_error_callback_and_options(
                        on_success.unchecked_ref(),
                        Some(on_error.unchecked_ref()),
                        &position_options(),
                    ) {
                        log::error!("❌ getCurrentPosition falló: {:?}", e);
                    }
                }
            }

            move || {
                if let (Some(geo), Some(id)) = (geolocation, watch_id) {
                    geo.clear_watch(id);
                }
                drop(callbacks);
            }
        });
    }

    (*state).clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coords_are_hidden_when_permission_is_missing() {
        let coords = Some(Coordinates::new(59.33, 18.06));
        let denied = GeolocationState { available: true, enabled: false, coords };
        let unsupported = GeolocationState { available: false, enabled: true, coords };
        let granted = GeolocationState { available: true, enabled: true, coords };

        assert_eq!(denied.usable_coords(), None);
        assert_eq!(unsupported.usable_coords(), None);
        assert_eq!(granted.usable_coords(), coords);
    }
}
