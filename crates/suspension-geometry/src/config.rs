use serde::{Deserialize, Serialize};
use solid_kernel::Color;

/// A link drawn between two hardpoints. Point names carry no side suffix;
/// the link is drawn once per side with `_L` / `_R` appended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkSpec {
    pub name: String,
    pub from: String,
    pub to: String,
}

impl LinkSpec {
    pub fn new(name: &str, from: &str, to: &str) -> Self {
        Self {
            name: name.to_string(),
            from: from.to_string(),
            to: to.to_string(),
        }
    }
}

/// Tunables for scene construction. Every field has a default, so a partial
/// JSON document only needs to name what it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Radius of the sphere drawn at each hardpoint.
    pub marker_radius: f64,
    /// Radius of the small indicator sphere, as a fraction of `marker_radius`.
    pub indicator_ratio: f64,
    pub link_radius: f64,
    /// Links shorter than this are skipped.
    pub link_tolerance: f64,
    pub links: Vec<LinkSpec>,
    pub link_color: Color,
    pub wheel_color: Color,
    pub indicator_color: Color,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            marker_radius: 3.0,
            indicator_ratio: 0.3,
            link_radius: 2.0,
            link_tolerance: 1e-9,
            links: default_links(),
            link_color: Color::GRAY,
            wheel_color: Color::BLACK,
            indicator_color: Color::BLUE,
        }
    }
}

impl BuildConfig {
    pub fn indicator_radius(&self) -> f64 {
        self.marker_radius * self.indicator_ratio
    }
}

/// Double wishbone arms: each chassis pickup joined to its upright ball joint.
pub fn default_links() -> Vec<LinkSpec> {
    vec![
        LinkSpec::new("UpperFore", "CHAS_UppFor", "UPRI_UppPnt"),
        LinkSpec::new("UpperAft", "CHAS_UppAft", "UPRI_UppPnt"),
        LinkSpec::new("LowerFore", "CHAS_LowFor", "UPRI_LowPnt"),
        LinkSpec::new("LowerAft", "CHAS_LowAft", "UPRI_LowPnt"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BuildConfig::default();
        assert_eq!(config.marker_radius, 3.0);
        assert!((config.indicator_radius() - 0.9).abs() < 1e-12);
        assert_eq!(config.links.len(), 4);
        assert_eq!(config.wheel_color, Color::BLACK);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: BuildConfig =
            serde_json::from_str(r#"{"marker_radius": 5.0, "links": []}"#).unwrap();
        assert_eq!(config.marker_radius, 5.0);
        assert!(config.links.is_empty());
        assert_eq!(config.link_radius, 2.0);
        assert_eq!(config.link_color, Color::GRAY);
    }
}
