// ============================================================================
// GEO MARKER - Punto GeoJSON → marcador del mapa
// ============================================================================
// Función pura: sin estado, sin efectos. El bridge JS solo crea el L.DivIcon.
// ============================================================================

use geojson::JsonObject;
use serde::Serialize;

use super::icons;

pub const DEFAULT_MARKER_COLOR: &str = "#fff";
pub const MARKER_CLASS_NAME: &str =
    "rounded-full border border-black bg-white w-5 h-5 align-center justify-items-center";

/// Marcador listo para `L.marker(latlng, {icon: L.divIcon({html, className})})`
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MarkerSpec {
    pub lat: f64,
    pub lon: f64,
    pub symbol: String,
    pub html: String,
    pub class_name: String,
}

pub fn point_to_marker(properties: Option<&JsonObject>, lat: f64, lon: f64) -> MarkerSpec {
    let symbol = properties
        .and_then(|p| p.get("marker-symbol"))
        .map(property_to_string)
        .unwrap_or_default();
    let color = properties
        .and_then(|p| p.get("marker-color"))
        .and_then(|v| v.as_str())
        .filter(|c| !c.is_empty())
        .unwrap_or(DEFAULT_MARKER_COLOR);

    let (resolved, svg) = icons::resolve(&symbol);
    if resolved != symbol && !symbol.is_empty() {
        log::warn!("⚠️ marker-symbol '{}' desconocido, usando '{}'", symbol, resolved);
    }

    MarkerSpec {
        lat,
        lon,
        symbol: resolved.to_string(),
        html: recolor_svg(svg, color),
        class_name: MARKER_CLASS_NAME.to_string(),
    }
}

/// Inyecta `fill` en cada `<path` del SVG
pub fn recolor_svg(svg: &str, color: &str) -> String {
    let escaped = color.replace('"', "&quot;");
    svg.replace("<path", &format!("<path fill=\"{}\"", escaped))
}

// "marker-symbol" puede venir como número (p.ej. 1 en los símbolos numéricos)
fn property_to_string(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn props(value: serde_json::Value) -> JsonObject {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn color_is_applied_to_every_path() {
        let p = props(json!({"marker-symbol": "car", "marker-color": "#ff0000"}));
        let marker = point_to_marker(Some(&p), 59.33, 18.06);
        let paths = marker.html.matches("<path").count();
        assert!(paths > 1);
        assert_eq!(marker.html.matches("<path fill=\"#ff0000\"").count(), paths);
        assert_eq!(marker.symbol, "car");
        assert_eq!((marker.lat, marker.lon), (59.33, 18.06));
    }

    #[test]
    fn missing_color_defaults_to_white() {
        let p = props(json!({"marker-symbol": "ferry"}));
        let marker = point_to_marker(Some(&p), 0.0, 0.0);
        assert!(marker.html.contains("<path fill=\"#fff\""));
    }

    #[test]
    fn unknown_or_missing_symbol_uses_fallback_icon() {
        let p = props(json!({"marker-symbol": "rocket"}));
        assert_eq!(point_to_marker(Some(&p), 0.0, 0.0).symbol, icons::FALLBACK_ICON);
        assert_eq!(point_to_marker(None, 0.0, 0.0).symbol, icons::FALLBACK_ICON);
    }

    #[test]
    fn numeric_symbol_does_not_panic() {
        let p = props(json!({"marker-symbol": 3}));
        assert_eq!(point_to_marker(Some(&p), 0.0, 0.0).symbol, icons::FALLBACK_ICON);
    }

    #[test]
    fn quotes_in_color_cannot_break_markup() {
        let html = recolor_svg("<svg><path d=\"M0 0\"/></svg>", "red\" onload=\"x");
        assert!(html.contains("fill=\"red&quot; onload=&quot;x\""));
    }
}
