use serde::{Deserialize, Serialize};

use super::geo::Coordinates;

/// Parámetro que el motor de recomendación debe optimizar
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptimizationMode {
    Edges,
    TotalDistance,
    #[default]
    TotalDuration,
    TotalCost,
    WalkCount,
    WalkDistance,
    CarCount,
    CarDistance,
    EscooterCount,
    EscooterDistance,
    #[serde(rename = "se_vessel_count")]
    SeaVesselCount,
    #[serde(rename = "se_vessel_distance")]
    SeaVesselDistance,
}

impl OptimizationMode {
    pub const ALL: [OptimizationMode; 12] = [
        OptimizationMode::Edges,
        OptimizationMode::TotalDistance,
        OptimizationMode::TotalDuration,
        OptimizationMode::TotalCost,
        OptimizationMode::WalkCount,
        OptimizationMode::WalkDistance,
        OptimizationMode::CarCount,
        OptimizationMode::CarDistance,
        OptimizationMode::EscooterCount,
        OptimizationMode::EscooterDistance,
        OptimizationMode::SeaVesselCount,
        OptimizationMode::SeaVesselDistance,
    ];

    /// Nombre en el cable (valor del `<select>`)
    pub fn as_str(&self) -> &'static str {
        match self {
            OptimizationMode::Edges => "edges",
            OptimizationMode::TotalDistance => "total_distance",
            OptimizationMode::TotalDuration => "total_duration",
            OptimizationMode::TotalCost => "total_cost",
            OptimizationMode::WalkCount => "walk_count",
            OptimizationMode::WalkDistance => "walk_distance",
            OptimizationMode::CarCount => "car_count",
            OptimizationMode::CarDistance => "car_distance",
            OptimizationMode::EscooterCount => "escooter_count",
            OptimizationMode::EscooterDistance => "escooter_distance",
            OptimizationMode::SeaVesselCount => "se_vessel_count",
            OptimizationMode::SeaVesselDistance => "se_vessel_distance",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OptimizationMode::Edges => "Edges",
            OptimizationMode::TotalDistance => "Total Distance",
            OptimizationMode::TotalDuration => "Total Duration",
            OptimizationMode::TotalCost => "Total Cost",
            OptimizationMode::WalkCount => "Walk Count",
            OptimizationMode::WalkDistance => "Walk Distance",
            OptimizationMode::CarCount => "Car Count",
            OptimizationMode::CarDistance => "Car Distance",
            OptimizationMode::EscooterCount => "E-scooter Count",
            OptimizationMode::EscooterDistance => "E-scooter Distance",
            OptimizationMode::SeaVesselCount => "Sea Vessel Count",
            OptimizationMode::SeaVesselDistance => "Sea Vessel Distance",
        }
    }

    pub fn from_wire(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|m| m.as_str() == value)
    }

    /// Opciones `(label, value)` para el select del formulario
    pub fn select_options() -> Vec<(String, String)> {
        Self::ALL
            .iter()
            .map(|m| (m.label().to_string(), m.as_str().to_string()))
            .collect()
    }
}

/// Valores del formulario de direcciones
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RecommendationRequest {
    /// `{lat, lon}` o texto libre
    pub origin: String,
    pub destination: String,
    pub mode: OptimizationMode,
    pub walk: bool,
    pub car: bool,
    pub escooter: bool,
    pub sea_vessel: bool,
}

impl RecommendationRequest {
    /// Valores por defecto; el origen se rellena con la posición del dispositivo si la hay
    pub fn with_origin(coords: Option<Coordinates>) -> Self {
        Self {
            origin: coords.map(|c| c.to_braced()).unwrap_or_default(),
            destination: String::new(),
            mode: OptimizationMode::default(),
            walk: false,
            car: false,
            escooter: false,
            sea_vessel: false,
        }
    }

    pub fn into_payload(self, user_id: &str) -> RecommendationPayload {
        RecommendationPayload {
            user_id: user_id.to_string(),
            request: self,
        }
    }
}

impl Default for RecommendationRequest {
    fn default() -> Self {
        Self::with_origin(None)
    }
}

/// Cuerpo de `POST /recommendation/`
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RecommendationPayload {
    pub user_id: String,
    #[serde(flatten)]
    pub request: RecommendationRequest,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_origin_uses_device_position() {
        let req = RecommendationRequest::with_origin(Some(Coordinates::new(59.33, 18.06)));
        assert_eq!(req.origin, "{59.33, 18.06}");
        assert_eq!(req.mode, OptimizationMode::TotalDuration);
        assert!(!req.walk && !req.car && !req.escooter && !req.sea_vessel);
    }

    #[test]
    fn default_origin_is_empty_without_geolocation() {
        assert_eq!(RecommendationRequest::default().origin, "");
    }

    #[test]
    fn payload_injects_user_id_next_to_form_fields() {
        let mut req = RecommendationRequest::default();
        req.destination = "{59.4, 18.1}".to_string();
        req.car = true;
        let value = serde_json::to_value(req.into_payload("leonidas")).unwrap();
        assert_eq!(value["user_id"], "leonidas");
        assert_eq!(value["destination"], "{59.4, 18.1}");
        assert_eq!(value["mode"], "total_duration");
        assert_eq!(value["car"], true);
        assert_eq!(value["sea_vessel"], false);
        assert_eq!(value.as_object().unwrap().len(), 8);
    }

    #[test]
    fn sea_vessel_modes_keep_backend_spelling() {
        assert_eq!(
            serde_json::to_string(&OptimizationMode::SeaVesselCount).unwrap(),
            "\"se_vessel_count\""
        );
        assert_eq!(
            OptimizationMode::from_wire("se_vessel_distance"),
            Some(OptimizationMode::SeaVesselDistance)
        );
        assert_eq!(OptimizationMode::from_wire(""), None);
    }

    #[test]
    fn every_mode_round_trips_through_its_wire_name() {
        assert_eq!(OptimizationMode::select_options().len(), 12);
        for mode in OptimizationMode::ALL {
            let json = serde_json::to_string(&mode).unwrap();
            assert_eq!(json, format!("\"{}\"", mode.as_str()));
        }
    }
}
