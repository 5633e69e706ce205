use crate::config::CONFIG;
use crate::models::Coordinates;
use super::overlay::RouteOverlay;

/// Renderizador de mapa; el componente de mapa solo habla con este trait
pub trait MapRenderer {
    /// Marcador de la posición del dispositivo (uno solo)
    fn set_user_location(&mut self, coordinates: Coordinates) -> Result<(), MapError>;

    fn clear_user_location(&mut self) -> Result<(), MapError>;

    /// Reemplaza el overlay anterior por completo
    fn show_route(&mut self, overlay: &RouteOverlay) -> Result<(), MapError>;

    fn clear_route(&mut self) -> Result<(), MapError>;

    fn is_ready(&self) -> bool;
}

/// Configuración del mapa
#[derive(Debug, Clone, PartialEq)]
pub struct MapConfig {
    pub center: Coordinates,
    pub zoom: f64,
    pub tile_url: String,
    pub attribution: String,
}

impl Default for MapConfig {
    fn default() -> Self {
        let map = &CONFIG.map_config;
        Self {
            center: Coordinates::new(map.default_center_lat, map.default_center_lng),
            zoom: map.default_zoom,
            tile_url: map.tile_url.clone(),
            attribution: map.tile_attribution.clone(),
        }
    }
}

/// Error del mapa
#[derive(Debug, Clone, PartialEq)]
pub enum MapError {
    NotReady,
    InvalidCoordinates,
    Bridge(String),
}

impl std::fmt::Display for MapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MapError::NotReady => write!(f, "Map is not ready"),
            MapError::InvalidCoordinates => write!(f, "Invalid coordinates"),
            MapError::Bridge(msg) => write!(f, "Leaflet bridge error: {}", msg),
        }
    }
}

impl std::error::Error for MapError {}
