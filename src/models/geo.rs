use serde::{Deserialize, Serialize};

/// Posición en grados decimales (WGS84)
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Formato que espera el campo origin: `{lat, lon}`
    pub fn to_braced(&self) -> String {
        format!("{{{}, {}}}", self.latitude, self.longitude)
    }

    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn braced_format_matches_origin_field() {
        assert_eq!(Coordinates::new(59.33, 18.06).to_braced(), "{59.33, 18.06}");
        assert_eq!(Coordinates::new(-33.5, 151.0).to_braced(), "{-33.5, 151}");
    }

    #[test]
    fn out_of_range_coordinates_are_invalid() {
        assert!(Coordinates::new(59.33, 18.06).is_valid());
        assert!(!Coordinates::new(91.0, 0.0).is_valid());
        assert!(!Coordinates::new(0.0, f64::NAN).is_valid());
    }
}
