//! Nearest-hit ray picking over the scene's clickable targets.
//!
//! Targets are registered once at startup: a small sphere per marker and a
//! camera-facing quad per text sprite, both carrying the destination slug
//! of their label site. Ray/shape queries are delegated to `parry3d`.

use glam::Vec3;
use parry3d::math::{Isometry, Point, Real};
use parry3d::na::{Rotation3, Translation3, UnitQuaternion, Vector3};
use parry3d::query::{Ray, RayCast};
use parry3d::shape::{Ball, Cuboid};

use crate::billboard::billboard_basis;
use crate::camera::PickRay;

/// Shape of a clickable target.
#[derive(Debug, Clone, Copy)]
pub enum TargetShape {
    /// A marker sphere.
    Sphere { center: Vec3, radius: f32 },
    /// A text sprite quad; orientation is resolved toward the ray origin
    /// at pick time, mirroring how the sprite is drawn.
    Billboard {
        center: Vec3,
        half_width: f32,
        half_height: f32,
    },
}

/// One clickable object.
#[derive(Debug, Clone)]
pub struct PickTarget {
    pub id: u32,
    /// Destination slug this target navigates to.
    pub destination: String,
    pub shape: TargetShape,
}

/// Result of a successful pick.
#[derive(Debug, Clone, PartialEq)]
pub struct PickHit {
    pub destination: String,
    /// Distance from the ray origin to the hit point.
    pub distance: f32,
    pub point: Vec3,
}

/// All clickable targets of the scene.
#[derive(Debug, Default)]
pub struct PickWorld {
    targets: Vec<PickTarget>,
    next_id: u32,
}

/// Billboard quads get a token thickness so they are valid cuboids.
const QUAD_THICKNESS: f32 = 1e-3;

impl PickWorld {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_sphere(&mut self, destination: &str, center: Vec3, radius: f32) -> u32 {
        self.push(destination, TargetShape::Sphere { center, radius })
    }

    pub fn add_billboard(
        &mut self,
        destination: &str,
        center: Vec3,
        half_width: f32,
        half_height: f32,
    ) -> u32 {
        self.push(
            destination,
            TargetShape::Billboard {
                center,
                half_width,
                half_height,
            },
        )
    }

    fn push(&mut self, destination: &str, shape: TargetShape) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        self.targets.push(PickTarget {
            id,
            destination: destination.to_string(),
            shape,
        });
        id
    }

    pub fn target_count(&self) -> usize {
        self.targets.len()
    }

    pub fn clear(&mut self) {
        self.targets.clear();
    }

    /// Cast `ray` against every target and return the nearest hit.
    ///
    /// Overlapping targets resolve to the closest one only; a miss on
    /// everything returns `None`.
    pub fn pick(&self, ray: &PickRay, max_distance: f32) -> Option<PickHit> {
        let parry_ray = Ray::new(
            Point::new(ray.origin.x, ray.origin.y, ray.origin.z),
            Vector3::new(ray.direction.x, ray.direction.y, ray.direction.z),
        );

        let mut nearest: Option<(f32, &PickTarget)> = None;
        for target in &self.targets {
            let toi = match target.shape {
                TargetShape::Sphere { center, radius } => {
                    let transform: Isometry<Real> =
                        Isometry::translation(center.x, center.y, center.z);
                    Ball::new(radius).cast_ray(&transform, &parry_ray, max_distance, true)
                }
                TargetShape::Billboard {
                    center,
                    half_width,
                    half_height,
                } => {
                    let (right, up, normal) = billboard_basis(center, ray.origin, Vec3::Y);
                    let rotation = Rotation3::from_basis_unchecked(&[
                        Vector3::new(right.x, right.y, right.z),
                        Vector3::new(up.x, up.y, up.z),
                        Vector3::new(normal.x, normal.y, normal.z),
                    ]);
                    let transform = Isometry::from_parts(
                        Translation3::new(center.x, center.y, center.z),
                        UnitQuaternion::from_rotation_matrix(&rotation),
                    );
                    Cuboid::new(Vector3::new(half_width, half_height, QUAD_THICKNESS))
                        .cast_ray(&transform, &parry_ray, max_distance, true)
                }
            };

            if let Some(toi) = toi {
                if nearest.map_or(true, |(best, _)| toi < best) {
                    nearest = Some((toi, target));
                }
            }
        }

        nearest.map(|(distance, target)| {
            log::debug!(
                "pick hit '{}' at distance {distance:.2}",
                target.destination
            );
            PickHit {
                destination: target.destination.clone(),
                distance,
                point: ray.origin + ray.direction * distance,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ray_toward(origin: Vec3, at: Vec3) -> PickRay {
        PickRay {
            origin,
            direction: (at - origin).normalize(),
        }
    }

    #[test]
    fn hits_a_marker_sphere_at_the_expected_distance() {
        let mut world = PickWorld::new();
        world.add_sphere("clothing", Vec3::new(0.0, 0.0, -5.0), 0.1);

        let ray = ray_toward(Vec3::new(0.0, 0.0, 10.0), Vec3::new(0.0, 0.0, -5.0));
        let hit = world.pick(&ray, 1000.0).expect("ray aims at the marker");
        assert_eq!(hit.destination, "clothing");
        assert!((hit.distance - 14.9).abs() < 1e-3);
    }

    #[test]
    fn empty_space_returns_none() {
        let mut world = PickWorld::new();
        world.add_sphere("clothing", Vec3::new(0.0, 0.0, -5.0), 0.1);

        let ray = PickRay {
            origin: Vec3::new(0.0, 0.0, 10.0),
            direction: Vec3::Y,
        };
        assert!(world.pick(&ray, 1000.0).is_none());
    }

    #[test]
    fn overlapping_targets_resolve_to_the_nearest() {
        let mut world = PickWorld::new();
        world.add_sphere("far", Vec3::new(0.0, 0.0, -8.0), 0.5);
        world.add_sphere("near", Vec3::new(0.0, 0.0, -2.0), 0.5);

        let ray = ray_toward(Vec3::new(0.0, 0.0, 10.0), Vec3::new(0.0, 0.0, -8.0));
        let hit = world.pick(&ray, 1000.0).unwrap();
        assert_eq!(hit.destination, "near");
    }

    #[test]
    fn billboard_hits_inside_and_misses_outside_its_extent() {
        let mut world = PickWorld::new();
        world.add_billboard("films", Vec3::new(2.0, 1.0, 0.0), 1.0, 0.5);

        let viewer = Vec3::new(0.0, 0.0, 10.0);
        let hit = world.pick(&ray_toward(viewer, Vec3::new(2.0, 1.0, 0.0)), 1000.0);
        assert_eq!(hit.unwrap().destination, "films");

        // Aim well past the quad's right edge, in its own plane.
        let miss = world.pick(&ray_toward(viewer, Vec3::new(5.5, 1.0, 0.0)), 1000.0);
        assert!(miss.is_none());
    }

    #[test]
    fn marker_and_sprite_share_a_destination() {
        let mut world = PickWorld::new();
        let marker = Vec3::new(0.0, 2.0, -3.0);
        let sprite = marker + Vec3::new(0.2, 0.2, 0.0);
        world.add_sphere("about us", marker, 0.1);
        world.add_billboard("about us", sprite, 1.0, 0.5);

        let viewer = Vec3::new(0.0, 0.0, 10.0);
        let on_marker = world.pick(&ray_toward(viewer, marker), 1000.0).unwrap();
        let on_sprite = world.pick(&ray_toward(viewer, sprite), 1000.0).unwrap();
        assert_eq!(on_marker.destination, "about us");
        assert_eq!(on_sprite.destination, "about us");
    }

    #[test]
    fn respects_the_max_distance() {
        let mut world = PickWorld::new();
        world.add_sphere("clothing", Vec3::new(0.0, 0.0, -50.0), 0.1);
        let ray = ray_toward(Vec3::new(0.0, 0.0, 10.0), Vec3::new(0.0, 0.0, -50.0));
        assert!(world.pick(&ray, 10.0).is_none());
        assert!(world.pick(&ray, 100.0).is_some());
    }
}
