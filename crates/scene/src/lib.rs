//! Aracne Scene Composer
//!
//! This crate contains the renderer-independent model of the landing scene:
//! a batch of lines radiating from the origin, a subset of which end in a
//! clickable marker and a floating text label.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                        SceneModel                            │
//! │  ┌──────────┐   ┌─────────────┐   ┌───────────────────────┐  │
//! │  │ Config   │──►│ Segments    │──►│ Label sites           │  │
//! │  │ (valid-  │   │ (spiral     │   │ (shuffled prefix,     │  │
//! │  │  ated)   │   │  directions)│   │  markers + sprites)   │  │
//! │  └──────────┘   └─────────────┘   └───────────────────────┘  │
//! │         breathing scale + sphere spin advanced per frame     │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything here is plain data and math; the binary crate mirrors it into
//! GPU objects and keeps the two in sync once per frame.

pub mod animation;
pub mod compose;
pub mod config;
pub mod dash;
pub mod label;
pub mod segment;
pub mod theme;

pub use animation::{Breathing, SphereSpin};
pub use compose::{SceneModel, SceneSnapshot};
pub use config::{CameraConfig, ConfigError, LightRig, SceneConfig};
pub use dash::{dash_runs, DashRun};
pub use label::{destination_url, slug, LabelSite};
pub use segment::RadialSegment;
pub use theme::{Rgb, Theme, ThemeMode};
