use serde::{Deserialize, Serialize};

/// Vehicle-level setup values. Persisted as `Vehicle_Setup.json`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct VehicleSetup {
    /// Longitudinal distance between front and rear suspension origins
    /// (the wheelbase), in millimeters. `null` when the workbook has none.
    #[serde(rename = "Reference distance", default)]
    pub reference_distance: Option<f64>,
}

impl VehicleSetup {
    pub fn new(reference_distance: Option<f64>) -> Self {
        Self { reference_distance }
    }

    /// Rear axle offset along the longitudinal axis. Missing means no
    /// separation.
    pub fn rear_offset(&self) -> f64 {
        self.reference_distance.unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_json_key() {
        let json = serde_json::to_string(&VehicleSetup::new(Some(1600.0))).unwrap();
        assert_eq!(json, r#"{"Reference distance":1600.0}"#);

        let none = serde_json::to_string(&VehicleSetup::default()).unwrap();
        assert_eq!(none, r#"{"Reference distance":null}"#);
    }

    #[test]
    fn test_missing_key_defaults_to_none() {
        let setup: VehicleSetup = serde_json::from_str("{}").unwrap();
        assert_eq!(setup.reference_distance, None);
        assert_eq!(setup.rear_offset(), 0.0);
    }
}
