use serde::{Deserialize, Serialize};
use validator::Validate;

/// Already-geocoded query location.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
pub struct Location {
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,

    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
}

impl Location {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_coordinates() {
        assert!(Location::new(50.45, 30.52).validate().is_ok());
        assert!(Location::new(-90.0, 180.0).validate().is_ok());
    }

    #[test]
    fn test_out_of_range_coordinates() {
        assert!(Location::new(95.0, 30.52).validate().is_err());
        assert!(Location::new(50.45, -181.0).validate().is_err());
    }
}
