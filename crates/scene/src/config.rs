//! Scene configuration with fail-fast validation.

use glam::Vec3;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use crate::label::slug;

/// Errors raised by [`SceneConfig::validate`].
///
/// All of these are configuration mistakes that would otherwise surface as
/// a hung setup loop or a degenerate scene, so they abort before any GPU
/// work starts.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("segment count must be positive")]
    NoSegments,

    #[error("{labels} labels cannot be placed on {segments} segments")]
    TooManyLabels { labels: usize, segments: usize },

    #[error("label text must not be empty")]
    EmptyLabel,

    #[error("two labels share the destination '{0}'")]
    DuplicateSlug(String),

    #[error("segment length range [{min}, {max}) is not a positive range")]
    InvalidLengthRange { min: f32, max: f32 },

    #[error("stretch bounds must satisfy 0 < min <= 1 <= max, got [{min}, {max}]")]
    InvalidStretch { min: f32, max: f32 },

    #[error("base url '{url}' is not a valid URL")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

/// Which set of lights illuminates the sphere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LightRig {
    /// One warm directional light plus full ambient.
    Studio,
    /// Red/green point lights on opposite corners plus half ambient.
    Accent,
}

/// Orbit camera parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Vertical field of view in degrees.
    pub fov_deg: f32,
    /// Initial distance from the scene origin.
    pub distance: f32,
    /// Closest the orbit zoom may approach.
    pub min_distance: f32,
    /// Farthest the orbit zoom may recede.
    pub max_distance: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_deg: 75.0,
            distance: 10.0,
            min_distance: 7.5,
            max_distance: 12.5,
            near: 0.1,
            far: 1000.0,
        }
    }
}

/// Full scene configuration.
///
/// Defaults reproduce the shipped landing page: 40 lines, five labelled,
/// breathing amplitude 0.002, zoom clamped to ±25% of the start distance.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Number of radial segments.
    pub segment_count: usize,

    /// Lower bound (inclusive) of the random length draw.
    pub min_length: f32,

    /// Upper bound (exclusive) of the random length draw.
    pub max_length: f32,

    /// Display texts for the clickable labels, in placement order.
    pub labels: Vec<String>,

    /// Base address the lower-cased label text is appended to.
    pub base_url: String,

    /// Marker position as a multiple of the segment endpoint.
    pub marker_offset: f32,

    /// Radius of the marker sphere.
    pub marker_radius: f32,

    /// Offset of the text sprite relative to its marker.
    pub sprite_offset: Vec3,

    /// World-space width and height of a text sprite quad.
    pub sprite_size: [f32; 2],

    /// Dash length for labelled segments.
    pub dash_size: f32,

    /// Gap length between dashes.
    pub gap_size: f32,

    /// Cylinder radius used to render a line segment.
    pub line_radius: f32,

    /// Radius of the central sphere.
    pub sphere_radius: f32,

    /// Spin speed of the central sphere in radians per second.
    pub spin_speed: f32,

    /// Amplitude of the idle breathing oscillation.
    pub breathing_amplitude: f32,

    /// Angular frequency of the breathing oscillation in radians per second.
    pub breathing_frequency: f32,

    /// Upper clamp on breathing stretch, as a multiple of rest length.
    pub max_stretch: f32,

    /// Lower clamp on breathing stretch.
    pub min_stretch: f32,

    /// RNG seed; a random seed is drawn when absent.
    pub seed: Option<u64>,

    pub camera: CameraConfig,

    pub lighting: LightRig,

    /// Start with the inverted (dark) theme.
    pub dark: bool,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            segment_count: 40,
            min_length: 2.0,
            max_length: 5.0,
            labels: ["CLOTHING", "FILMS", "DESIGN", "CONTACT US", "ABOUT US"]
                .map(String::from)
                .to_vec(),
            base_url: "http://localhost".to_string(),
            marker_offset: 1.05,
            marker_radius: 0.1,
            sprite_offset: Vec3::new(0.2, 0.2, 0.0),
            sprite_size: [2.0, 1.0],
            dash_size: 0.2,
            gap_size: 0.1,
            line_radius: 0.012,
            sphere_radius: 1.0,
            spin_speed: 0.6,
            breathing_amplitude: 0.002,
            breathing_frequency: 1.0,
            max_stretch: 1.05,
            min_stretch: 0.95,
            seed: None,
            camera: CameraConfig::default(),
            lighting: LightRig::Studio,
            dark: false,
        }
    }
}

impl SceneConfig {
    /// Check the configuration before any scene work happens.
    ///
    /// An oversubscribed label list is rejected here instead of surfacing
    /// later as a placement loop that never finds a free segment.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.segment_count == 0 {
            return Err(ConfigError::NoSegments);
        }
        if self.labels.len() > self.segment_count {
            return Err(ConfigError::TooManyLabels {
                labels: self.labels.len(),
                segments: self.segment_count,
            });
        }
        let mut seen = Vec::with_capacity(self.labels.len());
        for text in &self.labels {
            if text.trim().is_empty() {
                return Err(ConfigError::EmptyLabel);
            }
            let dest = slug(text);
            if seen.contains(&dest) {
                return Err(ConfigError::DuplicateSlug(dest));
            }
            seen.push(dest);
        }
        if !(self.min_length > 0.0 && self.max_length > self.min_length) {
            return Err(ConfigError::InvalidLengthRange {
                min: self.min_length,
                max: self.max_length,
            });
        }
        if !(self.min_stretch > 0.0 && self.min_stretch <= 1.0 && self.max_stretch >= 1.0) {
            return Err(ConfigError::InvalidStretch {
                min: self.min_stretch,
                max: self.max_stretch,
            });
        }
        Url::parse(&self.base_url).map_err(|source| ConfigError::InvalidBaseUrl {
            url: self.base_url.clone(),
            source,
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        SceneConfig::default().validate().unwrap();
    }

    #[test]
    fn rejects_zero_segments() {
        let config = SceneConfig {
            segment_count: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::NoSegments)));
    }

    #[test]
    fn rejects_more_labels_than_segments() {
        let config = SceneConfig {
            segment_count: 3,
            labels: ["A", "B", "C", "D"].map(String::from).to_vec(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::TooManyLabels {
                labels: 4,
                segments: 3
            })
        ));
    }

    #[test]
    fn rejects_labels_differing_only_in_case() {
        let config = SceneConfig {
            labels: ["FILMS", "films"].map(String::from).to_vec(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::DuplicateSlug(s)) if s == "films"
        ));
    }

    #[test]
    fn rejects_empty_label() {
        let config = SceneConfig {
            labels: vec!["  ".to_string()],
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::EmptyLabel)));
    }

    #[test]
    fn rejects_bad_length_range() {
        let config = SceneConfig {
            min_length: 5.0,
            max_length: 2.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidLengthRange { .. })
        ));
    }

    #[test]
    fn rejects_bad_base_url() {
        let config = SceneConfig {
            base_url: "not a url".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidBaseUrl { .. })
        ));
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config: SceneConfig = serde_json::from_str(r#"{"segment_count": 12}"#).unwrap();
        assert_eq!(config.segment_count, 12);
        assert_eq!(config.labels.len(), 5);
        config.validate().unwrap();
    }
}
