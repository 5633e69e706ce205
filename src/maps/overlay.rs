// ============================================================================
// ROUTE OVERLAY - Resultado GeoJSON → marcadores + features para Leaflet
// ============================================================================

use std::str::FromStr;

use geojson::{Feature, FeatureCollection, GeoJson, Geometry, Value};

use super::marker::{point_to_marker, MarkerSpec};
use crate::error::{AppError, AppResult};

/// Overlay listo para pintar: los puntos ya convertidos en marcadores y el
/// resto de geometrías (líneas, polígonos) como FeatureCollection
#[derive(Clone, Debug, PartialEq)]
pub struct RouteOverlay {
    pub markers: Vec<MarkerSpec>,
    pub features: FeatureCollection,
}

impl RouteOverlay {
    pub fn parse(raw: &str) -> AppResult<Self> {
        let geojson = GeoJson::from_str(raw).map_err(|e| AppError::GeoJson(e.to_string()))?;

        let features = match geojson {
            GeoJson::FeatureCollection(fc) => fc.features,
            GeoJson::Feature(f) => vec![f],
            GeoJson::Geometry(g) => vec![Feature::from(g)],
        };

        let mut markers = Vec::new();
        let mut others = Vec::new();
        for feature in features {
            split_feature(feature, &mut markers, &mut others);
        }

        Ok(Self {
            markers,
            features: FeatureCollection {
                bbox: None,
                features: others,
                foreign_members: None,
            },
        })
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty() && self.features.features.is_empty()
    }

    pub fn features_json(&self) -> AppResult<String> {
        Ok(serde_json::to_string(&self.features)?)
    }
}

fn split_feature(feature: Feature, markers: &mut Vec<MarkerSpec>, others: &mut Vec<Feature>) {
    let props = feature.properties.as_ref();
    match feature.geometry.as_ref().map(|g| &g.value) {
        Some(Value::Point(position)) => {
            if let Some((lat, lon)) = lat_lon(position) {
                markers.push(point_to_marker(props, lat, lon));
            }
        }
        Some(Value::MultiPoint(positions)) => {
            markers.extend(
                positions
                    .iter()
                    .filter_map(|p| lat_lon(p))
                    .map(|(lat, lon)| point_to_marker(props, lat, lon)),
            );
        }
        Some(Value::GeometryCollection(geometries)) => {
            for geometry in geometries {
                let child = Feature {
                    bbox: None,
                    geometry: Some(Geometry::new(geometry.value.clone())),
                    id: None,
                    properties: feature.properties.clone(),
                    foreign_members: None,
                };
                split_feature(child, markers, others);
            }
        }
        Some(_) => others.push(feature),
        // Feature sin geometría: nada que pintar
        None => {}
    }
}

// GeoJSON usa [lon, lat]
fn lat_lon(position: &[f64]) -> Option<(f64, f64)> {
    match position {
        [lon, lat, ..] => Some((*lat, *lon)),
        _ => None,
    }
}
