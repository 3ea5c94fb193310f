//! Aracne Interaction Layer
//!
//! Camera and picking math for the landing scene, kept free of any
//! renderer types so it can be tested headless. The binary rebuilds the
//! renderer's camera from [`OrbitCamera`] every frame, and click handling
//! turns a pixel into a [`PickRay`] and asks [`PickWorld`] for the nearest
//! clickable target under it.

pub mod billboard;
pub mod camera;
pub mod world;

pub use billboard::billboard_basis;
pub use camera::{OrbitCamera, PickRay};
pub use world::{PickHit, PickTarget, PickWorld, TargetShape};
