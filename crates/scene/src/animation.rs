//! Idle animation: breathing lines and the spinning sphere.

use std::f32::consts::TAU;

use crate::segment::RadialSegment;

/// Multiplicative breathing oscillation applied to unlabelled segments.
///
/// Each step multiplies the segment's stretch by `1 + A·sin(ωt)`, so the
/// stretch performs a slow bounded wander rather than tracking a fixed
/// sine. The clamp keeps every segment within
/// `[min_stretch, max_stretch]` of its rest length no matter how long the
/// page runs.
#[derive(Debug, Clone, Copy)]
pub struct Breathing {
    amplitude: f32,
    frequency: f32,
    min_stretch: f32,
    max_stretch: f32,
}

impl Breathing {
    pub fn new(amplitude: f32, frequency: f32, min_stretch: f32, max_stretch: f32) -> Self {
        Self {
            amplitude,
            frequency,
            min_stretch,
            max_stretch,
        }
    }

    /// Per-step multiplier at elapsed time `time` (seconds).
    pub fn factor(&self, time: f32) -> f32 {
        1.0 + self.amplitude * (self.frequency * time).sin()
    }

    /// Advance every unlabelled segment by one frame.
    pub fn step(&self, segments: &mut [RadialSegment], time: f32) {
        let factor = self.factor(time);
        for segment in segments.iter_mut().filter(|s| !s.has_label) {
            segment.scale = (segment.scale * factor).clamp(self.min_stretch, self.max_stretch);
        }
    }

    pub fn max_stretch(&self) -> f32 {
        self.max_stretch
    }
}

/// Accumulated rotation of the central sphere.
#[derive(Debug, Clone, Copy)]
pub struct SphereSpin {
    /// Current rotation about the Y axis, radians.
    pub angle: f32,
    speed: f32,
}

impl SphereSpin {
    pub fn new(speed: f32) -> Self {
        Self { angle: 0.0, speed }
    }

    /// Advance by `dt` seconds, wrapping to keep the angle small.
    pub fn step(&mut self, dt: f32) {
        self.angle = (self.angle + self.speed * dt) % TAU;
    }
}
