//! Label site assignment.
//!
//! A label site is a marker sphere sitting just past a segment's tip plus
//! a floating text sprite, both navigating to the same destination when
//! clicked. Sites land on distinct segments chosen by shuffling the full
//! index list and taking a prefix. Unlike draw-until-unused rejection
//! sampling, this terminates for any valid label count, including one
//! label per segment.

use glam::Vec3;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::ConfigError;
use crate::segment::RadialSegment;

/// A clickable marker + text sprite pair anchored to one segment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelSite {
    /// Index of the segment this site occupies.
    pub segment_index: usize,
    /// Display text, as configured.
    pub text: String,
    /// Navigation destination, the lower-cased display text.
    pub slug: String,
    /// Marker center: segment endpoint pushed out past the line tip.
    pub marker_position: Vec3,
    /// Sprite center: marker plus a fixed offset.
    pub sprite_position: Vec3,
}

/// Destination identifier for a label text: the lower-cased text, exactly.
pub fn slug(text: &str) -> String {
    text.to_lowercase()
}

/// Destination URL for a slug under `base`.
pub fn destination_url(base: &str, slug: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), slug)
}

/// Place one site per label on distinct, randomly chosen segments.
///
/// Chosen segments get `has_label` set; the caller is expected to restyle
/// them dashed and stop breathing them. Fails when labels outnumber
/// segments, which [`crate::SceneConfig::validate`] already rejects.
pub fn assign_labels(
    segments: &mut [RadialSegment],
    labels: &[String],
    marker_offset: f32,
    sprite_offset: Vec3,
    rng: &mut impl Rng,
) -> Result<Vec<LabelSite>, ConfigError> {
    if labels.len() > segments.len() {
        return Err(ConfigError::TooManyLabels {
            labels: labels.len(),
            segments: segments.len(),
        });
    }

    let mut indices: Vec<usize> = (0..segments.len()).collect();
    indices.shuffle(rng);

    let sites = labels
        .iter()
        .zip(indices)
        .map(|(text, segment_index)| {
            let segment = &mut segments[segment_index];
            segment.has_label = true;

            let marker_position = segment.rest_endpoint() * marker_offset;
            LabelSite {
                segment_index,
                text: text.clone(),
                slug: slug(text),
                marker_position,
                sprite_position: marker_position + sprite_offset,
            }
        })
        .collect();

    Ok(sites)
}
