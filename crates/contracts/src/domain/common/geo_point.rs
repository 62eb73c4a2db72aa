use serde::{Deserialize, Serialize};
use std::fmt;

/// WGS84 coordinate pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}, {:.4}", self.lat, self.lng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_uses_four_decimals() {
        assert_eq!(GeoPoint::new(27.0238, 94.2179).to_string(), "27.0238, 94.2179");
        assert_eq!(GeoPoint::new(27.4728, 94.912).to_string(), "27.4728, 94.9120");
    }
}
