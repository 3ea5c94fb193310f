//! The composed scene: configuration, segments, label sites and animation
//! state in one aggregate.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

use crate::animation::{Breathing, SphereSpin};
use crate::config::{ConfigError, SceneConfig};
use crate::label::{assign_labels, destination_url, LabelSite};
use crate::segment::{generate_segments, RadialSegment};

/// The full scene model. One instance lives for the process lifetime.
#[derive(Debug)]
pub struct SceneModel {
    pub config: SceneConfig,
    pub segments: Vec<RadialSegment>,
    pub sites: Vec<LabelSite>,
    pub breathing: Breathing,
    pub spin: SphereSpin,
    /// The seed actually used, recorded so a pleasing layout can be replayed.
    pub seed: u64,
}

/// Serializable snapshot of a composed scene, for `--export`.
#[derive(Debug, Serialize)]
pub struct SceneSnapshot<'a> {
    pub seed: u64,
    pub segments: &'a [RadialSegment],
    pub sites: &'a [LabelSite],
    pub destinations: Vec<String>,
}

impl SceneModel {
    /// Validate the configuration and build the scene.
    pub fn compose(config: SceneConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let seed = config.seed.unwrap_or_else(rand::random);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        let mut segments = generate_segments(
            config.segment_count,
            config.min_length,
            config.max_length,
            &mut rng,
        );
        let sites = assign_labels(
            &mut segments,
            &config.labels,
            config.marker_offset,
            config.sprite_offset,
            &mut rng,
        )?;

        log::info!(
            "composed scene: {} segments, {} label sites, seed {}",
            segments.len(),
            sites.len(),
            seed
        );

        let breathing = Breathing::new(
            config.breathing_amplitude,
            config.breathing_frequency,
            config.min_stretch,
            config.max_stretch,
        );
        let spin = SphereSpin::new(config.spin_speed);

        Ok(Self {
            config,
            segments,
            sites,
            breathing,
            spin,
            seed,
        })
    }

    /// Compose with defaults, for tests and demos.
    pub fn sample() -> Self {
        Self::compose(SceneConfig {
            seed: Some(0),
            ..Default::default()
        })
        .expect("default configuration is valid")
    }

    /// Advance the idle animation: breathing lines, then the sphere spin.
    ///
    /// `time` is seconds since startup, `dt` seconds since the last frame.
    pub fn advance(&mut self, time: f32, dt: f32) {
        self.breathing.step(&mut self.segments, time);
        self.spin.step(dt);
    }

    /// Destination URL for a slug under the configured base address.
    pub fn destination_url(&self, slug: &str) -> String {
        destination_url(&self.config.base_url, slug)
    }

    /// All destination URLs, in label order.
    pub fn destinations(&self) -> Vec<String> {
        self.sites
            .iter()
            .map(|site| self.destination_url(&site.slug))
            .collect()
    }

    pub fn snapshot(&self) -> SceneSnapshot<'_> {
        SceneSnapshot {
            seed: self.seed,
            segments: &self.segments,
            sites: &self.sites,
            destinations: self.destinations(),
        }
    }
}
