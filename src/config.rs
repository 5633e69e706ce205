use serde::{Deserialize, Serialize};

use crate::utils::DEFAULT_RECOMMENDATION_USER_ID;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub backend_url: String,
    /// user_id fijo que se inyecta en cada petición de recomendación
    pub recommendation_user_id: String,
    pub enable_logging: bool,
    pub map_config: MapConfig,
    pub ui_config: UIConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: "http://localhost:8000".to_string(),
            recommendation_user_id: DEFAULT_RECOMMENDATION_USER_ID.to_string(),
            enable_logging: true,
            map_config: MapConfig::default(),
            ui_config: UIConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapConfig {
    pub default_center_lat: f64,
    pub default_center_lng: f64,
    pub default_zoom: f64,
    pub tile_url: String,
    pub tile_attribution: String,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            default_center_lat: 59.3293,
            default_center_lng: 18.0686,
            default_zoom: 13.0,
            tile_url: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            tile_attribution: OSM_ATTRIBUTION.to_string(),
        }
    }
}

const OSM_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UIConfig {
    pub notification_timeout_ms: u32,
    /// Timeout de la API de geolocalización (userDecisionTimeout)
    pub geolocation_timeout_ms: u32,
}

impl Default for UIConfig {
    fn default() -> Self {
        Self {
            notification_timeout_ms: 4000,
            geolocation_timeout_ms: 5000,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            backend_url: option_env!("BACKEND_URL")
                .map(|s| s.trim_end_matches('/').to_string())
                .unwrap_or(defaults.backend_url),
            recommendation_user_id: option_env!("RECOMMENDATION_USER_ID")
                .map(str::to_string)
                .unwrap_or(defaults.recommendation_user_id),
            enable_logging: parse_or(option_env!("ENABLE_LOGGING"), defaults.enable_logging),
            map_config: MapConfig {
                default_center_lat: parse_or(
                    option_env!("DEFAULT_MAP_CENTER_LAT"),
                    defaults.map_config.default_center_lat,
                ),
                default_center_lng: parse_or(
                    option_env!("DEFAULT_MAP_CENTER_LNG"),
                    defaults.map_config.default_center_lng,
                ),
                default_zoom: parse_or(
                    option_env!("DEFAULT_MAP_ZOOM"),
                    defaults.map_config.default_zoom,
                ),
                tile_url: option_env!("TILE_URL")
                    .map(str::to_string)
                    .unwrap_or(defaults.map_config.tile_url),
                tile_attribution: defaults.map_config.tile_attribution,
            },
            ui_config: UIConfig {
                notification_timeout_ms: parse_or(
                    option_env!("NOTIFICATION_TIMEOUT_MS"),
                    defaults.ui_config.notification_timeout_ms,
                ),
                geolocation_timeout_ms: defaults.ui_config.geolocation_timeout_ms,
            },
        }
    }

    pub fn backend_url(&self) -> &str {
        &self.backend_url
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }
}

fn parse_or<T: std::str::FromStr>(raw: Option<&str>, default: T) -> T {
    raw.and_then(|v| v.trim().parse().ok()).unwrap_or(default)
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_or_falls_back_on_garbage() {
        assert_eq!(parse_or::<u32>(Some("abc"), 7), 7);
        assert_eq!(parse_or::<u32>(None, 7), 7);
        assert_eq!(parse_or::<u32>(Some(" 12 "), 7), 12);
        assert!(!parse_or::<bool>(Some("false"), true));
    }

    #[test]
    fn default_map_is_centered_on_stockholm() {
        let config = AppConfig::default();
        assert_eq!(config.map_config.default_zoom, 13.0);
        assert!((config.map_config.default_center_lat - 59.33).abs() < 0.01);
        assert!(config.map_config.tile_url.contains("{z}/{x}/{y}"));
    }
}
