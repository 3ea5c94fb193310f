//! Billboard orientation for camera-facing quads.

use glam::Vec3;

/// Orthonormal basis for a quad at `center` facing `viewer`.
///
/// Returns `(right, up, normal)`: the quad spans `right`/`up` and `normal`
/// points at the viewer. Falls back to a Z-facing basis when the viewer
/// sits on top of the quad or directly above it.
pub fn billboard_basis(center: Vec3, viewer: Vec3, world_up: Vec3) -> (Vec3, Vec3, Vec3) {
    let to_viewer = viewer - center;
    let normal = if to_viewer.length_squared() > 1e-10 {
        to_viewer.normalize()
    } else {
        Vec3::Z
    };

    let mut right = world_up.cross(normal);
    if right.length_squared() < 1e-10 {
        // Viewer straight above or below: any horizontal right works.
        right = Vec3::X;
    }
    let right = right.normalize();
    let up = normal.cross(right);
    (right, up, normal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basis_is_orthonormal_and_faces_the_viewer() {
        let center = Vec3::new(3.0, 1.0, -2.0);
        let viewer = Vec3::new(0.0, 0.0, 10.0);
        let (right, up, normal) = billboard_basis(center, viewer, Vec3::Y);

        assert!((right.length() - 1.0).abs() < 1e-5);
        assert!((up.length() - 1.0).abs() < 1e-5);
        assert!((normal.length() - 1.0).abs() < 1e-5);
        assert!(right.dot(up).abs() < 1e-5);
        assert!(right.dot(normal).abs() < 1e-5);
        assert!(up.dot(normal).abs() < 1e-5);
        assert!(normal.dot((viewer - center).normalize()) > 0.999);
    }

    #[test]
    fn degenerate_viewer_positions_still_yield_a_basis() {
        let (right, up, normal) = billboard_basis(Vec3::ONE, Vec3::ONE, Vec3::Y);
        assert!((right.length() - 1.0).abs() < 1e-5);
        assert!((up.length() - 1.0).abs() < 1e-5);
        assert!((normal.length() - 1.0).abs() < 1e-5);

        // Viewer directly overhead.
        let (right, _, normal) =
            billboard_basis(Vec3::ZERO, Vec3::new(0.0, 5.0, 0.0), Vec3::Y);
        assert!((right.length() - 1.0).abs() < 1e-5);
        assert!((normal - Vec3::Y).length() < 1e-5);
    }
}
