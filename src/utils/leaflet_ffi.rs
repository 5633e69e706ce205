// ============================================================================
// LEAFLET FFI - Foreign Function Interface para JavaScript
// ============================================================================
// Solo wrappers para funciones de static/leaflet-bridge.js - Sin estado, sin lógica
// ============================================================================

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// Crea el mapa con su capa de teselas y el control de zoom abajo a la izquierda
    #[wasm_bindgen(js_name = initLeafletMap, catch)]
    pub fn init_leaflet_map(
        container_id: &str,
        center_lat: f64,
        center_lng: f64,
        zoom: f64,
        tile_url: &str,
        attribution: &str,
    ) -> Result<(), JsValue>;

    #[wasm_bindgen(js_name = destroyLeafletMap)]
    pub fn destroy_leaflet_map();

    #[wasm_bindgen(js_name = setUserLocationMarker)]
    pub fn set_user_location_marker(lat: f64, lng: f64);

    #[wasm_bindgen(js_name = clearUserLocationMarker)]
    pub fn clear_user_location_marker();

    /// `markers`: array de `{lat, lon, html, class_name}`; `features_json`: FeatureCollection
    #[wasm_bindgen(js_name = renderRouteOverlay, catch)]
    pub fn render_route_overlay(markers: JsValue, features_json: &str) -> Result<(), JsValue>;

    #[wasm_bindgen(js_name = clearRouteOverlay)]
    pub fn clear_route_overlay();
}
