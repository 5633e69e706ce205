// Módulo de mapas: renderizado del resultado GeoJSON sobre Leaflet

pub mod icons;
pub mod marker;
pub mod overlay;
pub mod traits;
pub mod web;

pub use marker::{point_to_marker, MarkerSpec};
pub use overlay::RouteOverlay;
pub use traits::{MapConfig, MapError, MapRenderer};
pub use web::LeafletMapRenderer;

use crate::error::AppError;

/// Resultado de aplicar el GeoJSON al mapa
#[derive(Debug, Clone, PartialEq)]
pub enum RouteUpdate {
    Cleared,
    Rendered { markers: usize, features: usize },
}

/// Aplica el string GeoJSON al renderer: vacío → sin overlay, inválido → error
/// (el overlay anterior se limpia en ambos casos)
pub fn apply_route<R: MapRenderer + ?Sized>(renderer: &mut R, geojson: &str) -> Result<RouteUpdate, AppError> {
    let map_err = |e: MapError| AppError::GeoJson(e.to_string());

    if geojson.trim().is_empty() {
        renderer.clear_route().map_err(map_err)?;
        return Ok(RouteUpdate::Cleared);
    }

    let overlay = match RouteOverlay::parse(geojson) {
        Ok(overlay) => overlay,
        Err(e) => {
            renderer.clear_route().map_err(map_err)?;
            return Err(e);
        }
    };
    renderer.show_route(&overlay).map_err(map_err)?;
    Ok(RouteUpdate::Rendered {
        markers: overlay.markers.len(),
        features: overlay.features.features.len(),
    })
}

#[cfg(test)]
pub mod testing {
    use super::*;
    use crate::models::Coordinates;

    /// Renderer que solo registra las llamadas
    #[derive(Default)]
    pub struct RecordingRenderer {
        pub user_location: Option<Coordinates>,
        pub shown: Vec<RouteOverlay>,
        pub clears: usize,
    }

    impl MapRenderer for RecordingRenderer {
        fn set_user_location(&mut self, coordinates: Coordinates) -> Result<(), MapError> {
            self.user_location = Some(coordinates);
            Ok(())
        }

        fn clear_user_location(&mut self) -> Result<(), MapError> {
            self.user_location = None;
            Ok(())
        }

        fn show_route(&mut self, overlay: &RouteOverlay) -> Result<(), MapError> {
            self.shown.push(overlay.clone());
            Ok(())
        }

        fn clear_route(&mut self) -> Result<(), MapError> {
            self.clears += 1;
            Ok(())
        }

        fn is_ready(&self) -> bool {
            true
        }
    }
}
