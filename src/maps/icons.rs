// ============================================================================
// ICONOS - Set fijo de glifos SVG (15x15) para los marcadores del resultado
// ============================================================================

/// Icono usado cuando `marker-symbol` falta o no está en el set
pub const FALLBACK_ICON: &str = "marker";

const MARKER: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="15" height="15" viewBox="0 0 15 15"><path d="M7.5 0C5.068 0 2 1.486 2 5.5c0 2.8 4.5 8.5 5.5 9.5 1-1 5.5-6.7 5.5-9.5C13 1.486 9.932 0 7.5 0zm0 3.5a2 2 0 1 1 0 4 2 2 0 0 1 0-4z"/></svg>"#;

const CIRCLE: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="15" height="15" viewBox="0 0 15 15"><path d="M14 7.5a6.5 6.5 0 1 1-13 0 6.5 6.5 0 0 1 13 0z"/></svg>"#;

const STAR: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="15" height="15" viewBox="0 0 15 15"><path d="M7.5 0l2.1 4.9 5.4.5-4.1 3.5 1.2 5.3-4.6-2.8-4.6 2.8 1.2-5.3L0 5.4l5.4-.5z"/></svg>"#;

const PEDESTRIAN: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="15" height="15" viewBox="0 0 15 15"><path d="M9 2a1.5 1.5 0 1 1-3 0 1.5 1.5 0 0 1 3 0z"/><path d="M6 4.5h2.5l2 3.5-1 .5L8 6.5V9l1.5 5h-1.2L7 10l-1.3 4H4.5L6 9V6.5L5 8H4z"/></svg>"#;

const CAR: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="15" height="15" viewBox="0 0 15 15"><path d="M13.84 6.852L12.6 5.7l-1.5-2.8A1.7 1.7 0 0 0 9.6 2H5.4a1.7 1.7 0 0 0-1.5.9L2.4 5.7 1.16 6.852A.5.5 0 0 0 1 7.2V12.5a.5.5 0 0 0 .5.5h2a.5.5 0 0 0 .5-.5V11h7v1.5a.5.5 0 0 0 .5.5h2a.5.5 0 0 0 .5-.5V7.2a.5.5 0 0 0-.16-.348zM4.8 3.5h5.4l1.2 2.5H3.6z"/><path d="M3.5 9a1 1 0 1 1 0-2 1 1 0 0 1 0 2z"/><path d="M11.5 9a1 1 0 1 1 0-2 1 1 0 0 1 0 2z"/></svg>"#;

const BUS: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="15" height="15" viewBox="0 0 15 15"><path d="M4 0C2.6 0 2 .6 2 2v10c0 .6.4 1 1 1v1.5c0 .3.2.5.5.5h1c.3 0 .5-.2.5-.5V13h5v1.5c0 .3.2.5.5.5h1c.3 0 .5-.2.5-.5V13c.6 0 1-.4 1-1V2c0-1.4-.6-2-2-2zm0 3h7v4H4zm0 6.5a1 1 0 1 1 0 .01zm7 0a1 1 0 1 1 0 .01z"/></svg>"#;

const RAIL: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="15" height="15" viewBox="0 0 15 15"><path d="M4 0C3 0 2 1 2 2v8c0 1 1 2 2 2h7c1 0 2-1 2-2V2c0-1-1-2-2-2zm0 2h7v4H4zm.5 6a1 1 0 1 1 0 2 1 1 0 0 1 0-2zm6 0a1 1 0 1 1 0 2 1 1 0 0 1 0-2z"/><path d="M3 15l2-3h1.5L5 14h5l-1.5-2H10l2 3z"/></svg>"#;

const FERRY: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="15" height="15" viewBox="0 0 15 15"><path d="M5 1v2H3v4L1 8l2 4h9l2-4-2-1V3h-2V1zm-1 3h7v2.5L7.5 5 4 6.5z"/><path d="M1 13.5c1 .7 2 .7 3 0 1 .7 2.5.7 3.5 0 1 .7 2.5.7 3.5 0 1 .7 2 .7 3 0v1c-1 .7-2 .7-3 0-1 .7-2.5.7-3.5 0-1 .7-2.5.7-3.5 0-1 .7-2 .7-3 0z"/></svg>"#;

const HARBOR: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="15" height="15" viewBox="0 0 15 15"><path d="M7.5 0a2 2 0 0 0-.5 3.9V5H5v1.5h2v6.4C5 12.6 3.3 11.2 3 9.5l1 .5-1.5-3L1 10l1-.5C2.4 12.3 4.7 14.5 7.5 15c2.8-.5 5.1-2.7 5.5-5.5l1 .5-1.5-3-1.5 3 1-.5c-.3 1.7-2 3.1-4 3.4V6.5h2V5H8V3.9A2 2 0 0 0 7.5 0zm0 1a1 1 0 1 1 0 2 1 1 0 0 1 0-2z"/></svg>"#;

const BICYCLE: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="15" height="15" viewBox="0 0 15 15"><path d="M3 7a3 3 0 1 0 0 6 3 3 0 0 0 0-6zm0 1.2a1.8 1.8 0 1 1 0 3.6 1.8 1.8 0 0 1 0-3.6z"/><path d="M12 7a3 3 0 1 0 0 6 3 3 0 0 0 0-6zm0 1.2a1.8 1.8 0 1 1 0 3.6 1.8 1.8 0 0 1 0-3.6z"/><path d="M7 3h2v1H8.3l.6 1.5H11v1H9.3L12.2 10l-.9.5-1.6-2.6L7.5 10H6.4L4.8 7.2 3.5 10.2l-.9-.4L4.4 6h3.3z"/></svg>"#;

const SCOOTER: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="15" height="15" viewBox="0 0 15 15"><path d="M10 1h2v1h-1l1.8 8.1A2 2 0 1 1 11.2 12H5.8a2 2 0 1 1-1.9-2.6L9.8 10 11 9.6z"/><path d="M3.5 11.5a.5.5 0 1 0 1 0 .5.5 0 0 0-1 0z"/></svg>"#;

const PARKING: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="15" height="15" viewBox="0 0 15 15"><path d="M4 1h4.5a3.5 3.5 0 0 1 0 7H6v6H4zm2 2v3h2.5a1.5 1.5 0 0 0 0-3z"/></svg>"#;

const TRIANGLE: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="15" height="15" viewBox="0 0 15 15"><path d="M7.5 1L14 13H1z"/></svg>"#;

const SQUARE: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="15" height="15" viewBox="0 0 15 15"><path d="M2 2h11v11H2z"/></svg>"#;

const CHARGING_STATION: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="15" height="15" viewBox="0 0 15 15"><path d="M3 1h6a1 1 0 0 1 1 1v5h1a1.5 1.5 0 0 1 1.5 1.5V11a.5.5 0 0 0 1 0V6L12 4.5l.7-.7L15 6v5a1.5 1.5 0 0 1-3 0V8.5a.5.5 0 0 0-.5-.5H10v6H2V2a1 1 0 0 1 1-1zm1 2v3h4V3z"/><path d="M6.5 7L4 10.5h2L5.5 13 8 9.5H6z"/></svg>"#;

const ARROW: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="15" height="15" viewBox="0 0 15 15"><path d="M7.5 1L13 7H9.5v7h-4V7H2z"/></svg>"#;

const CIRCLE_STROKED: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="15" height="15" viewBox="0 0 15 15"><path d="M7.5 1a6.5 6.5 0 1 0 0 13 6.5 6.5 0 0 0 0-13zm0 2a4.5 4.5 0 1 1 0 9 4.5 4.5 0 0 1 0-9z"/></svg>"#;

/// `(nombre, svg)`, nombres compatibles con los de Maki
const ICONS: &[(&str, &str)] = &[
    ("marker", MARKER),
    ("circle", CIRCLE),
    ("star", STAR),
    ("pedestrian", PEDESTRIAN),
    ("car", CAR),
    ("bus", BUS),
    ("rail", RAIL),
    ("ferry", FERRY),
    ("harbor", HARBOR),
    ("bicycle", BICYCLE),
    ("scooter", SCOOTER),
    ("parking", PARKING),
    ("triangle", TRIANGLE),
    ("square", SQUARE),
    ("charging-station", CHARGING_STATION),
    ("arrow", ARROW),
    ("circle-stroked", CIRCLE_STROKED),
];

pub fn lookup(name: &str) -> Option<&'static str> {
    ICONS.iter().find(|(n, _)| *n == name).map(|(_, svg)| *svg)
}

/// Nunca falla: símbolo desconocido → `FALLBACK_ICON`
pub fn resolve(name: &str) -> (&'static str, &'static str) {
    ICONS
        .iter()
        .find(|(n, _)| *n == name)
        .or_else(|| ICONS.iter().find(|(n, _)| *n == FALLBACK_ICON))
        .map(|(n, svg)| (*n, *svg))
        .unwrap_or(("marker", MARKER))
}

pub fn names() -> impl Iterator<Item = &'static str> {
    ICONS.iter().map(|(n, _)| *n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_icon_is_an_svg_with_paths() {
        for name in names() {
            let svg = lookup(name).unwrap();
            assert!(svg.starts_with("<svg"), "{}", name);
            assert!(svg.contains("<path"), "{}", name);
        }
    }

    #[test]
    fn every_symbol_emitted_by_the_backend_has_its_own_icon() {
        let emitted = [
            "scooter",
            "car",
            "ferry",
            "harbor",
            "bus",
            "charging-station",
            "arrow",
            "circle-stroked",
        ];
        for symbol in emitted {
            assert_eq!(resolve(symbol).0, symbol);
            assert_ne!(resolve(symbol).0, FALLBACK_ICON);
        }
    }

    #[test]
    fn unknown_symbol_resolves_to_fallback() {
        assert_eq!(resolve("does-not-exist").0, FALLBACK_ICON);
        assert_eq!(resolve("").0, FALLBACK_ICON);
        assert_eq!(resolve("ferry").0, "ferry");
    }
}
