use wasm_bindgen::JsValue;

use crate::models::Coordinates;
use crate::utils::leaflet_ffi;
use super::overlay::RouteOverlay;
use super::traits::{MapConfig, MapError, MapRenderer};

/// Renderizador de mapas para web usando Leaflet (static/leaflet-bridge.js)
pub struct LeafletMapRenderer {
    is_ready: bool,
}

impl LeafletMapRenderer {
    /// Inicializar el mapa en el contenedor `container_id`
    pub fn initialize(container_id: &str, config: &MapConfig) -> Result<Self, MapError> {
        log::info!("🗺️ Inicializando Leaflet en #{}...", container_id);

        leaflet_ffi::init_leaflet_map(
            container_id,
            config.center.latitude,
            config.center.longitude,
            config.zoom,
            &config.tile_url,
            &config.attribution,
        )
        .map_err(js_error)?;

        log::info!("✅ Mapa web inicializado correctamente");
        Ok(Self { is_ready: true })
    }

    fn ensure_ready(&self) -> Result<(), MapError> {
        if self.is_ready {
            Ok(())
        } else {
            Err(MapError::NotReady)
        }
    }
}

impl MapRenderer for LeafletMapRenderer {
    fn set_user_location(&mut self, coordinates: Coordinates) -> Result<(), MapError> {
        self.ensure_ready()?;
        if !coordinates.is_valid() {
            return Err(MapError::InvalidCoordinates);
        }
        leaflet_ffi::set_user_location_marker(coordinates.latitude, coordinates.longitude);
        Ok(())
    }

    fn clear_user_location(&mut self) -> Result<(), MapError> {
        self.ensure_ready()?;
        leaflet_ffi::clear_user_location_marker();
        Ok(())
    }

    fn show_route(&mut self, overlay: &RouteOverlay) -> Result<(), MapError> {
        self.ensure_ready()?;
        let markers = serde_wasm_bindgen::to_value(&overlay.markers)
            .map_err(|e| MapError::Bridge(e.to_string()))?;
        let features = overlay
            .features_json()
            .map_err(|e| MapError::Bridge(e.to_string()))?;

        log::info!(
            "🧭 Pintando ruta: {} marcadores, {} features",
            overlay.markers.len(),
            overlay.features.features.len()
        );
        leaflet_ffi::render_route_overlay(markers, &features).map_err(js_error)
    }

    fn clear_route(&mut self) -> Result<(), MapError> {
        self.ensure_ready()?;
        leaflet_ffi::clear_route_overlay();
        Ok(())
    }

    fn is_ready(&self) -> bool {
        self.is_ready
    }
}

impl Drop for LeafletMapRenderer {
    fn drop(&mut self) {
        if self.is_ready {
            leaflet_ffi::destroy_leaflet_map();
        }
    }
}

fn js_error(err: JsValue) -> MapError {
    MapError::Bridge(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
}
