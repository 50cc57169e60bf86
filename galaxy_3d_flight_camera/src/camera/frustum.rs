/// Frustum: six clipping planes derived from the camera's view-projection.
///
/// Each plane is represented as a Vec4 (A, B, C, D) where:
/// - (A, B, C) is the inward-pointing unit normal
/// - D is the signed distance
/// - A point P is inside the frustum if dot(plane, P_homogeneous) >= 0 for all planes
///
/// The camera rebuilds its frustum every time its view or projection matrix
/// is written, so a renderer can cull against `Camera::frustum()` right after
/// `Camera::update()`.

use glam::{Mat4, Vec3, Vec4};
use super::bounds::AABB;

/// Result of a 3-way frustum/AABB classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrustumTest {
    /// AABB is entirely outside the frustum
    Outside,
    /// AABB is entirely inside the frustum
    Inside,
    /// AABB partially overlaps the frustum
    Partial,
}

/// Frustum plane indices
pub const PLANE_LEFT: usize = 0;
pub const PLANE_RIGHT: usize = 1;
pub const PLANE_BOTTOM: usize = 2;
pub const PLANE_TOP: usize = 3;
pub const PLANE_NEAR: usize = 4;
pub const PLANE_FAR: usize = 5;

/// Six frustum planes for culling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frustum {
    /// Frustum planes: left, right, bottom, top, near, far
    pub planes: [Vec4; 6],
}

impl Frustum {
    /// Extract frustum planes from a view-projection matrix (`projection * view`).
    ///
    /// Gribb & Hartmann extraction for clip spaces with a `[0, 1]` depth
    /// range, which is what `Mat4::perspective_rh` produces.
    pub fn from_view_projection(vp: &Mat4) -> Self {
        let row0 = vp.row(0);
        let row1 = vp.row(1);
        let row2 = vp.row(2);
        let row3 = vp.row(3);

        let mut planes = [
            row3 + row0, // left
            row3 - row0, // right
            row3 + row1, // bottom
            row3 - row1, // top
            row2,        // near (z_clip >= 0)
            row3 - row2, // far
        ];

        for plane in &mut planes {
            let normal_len = plane.truncate().length();
            if normal_len > 0.0 {
                *plane /= normal_len;
            }
        }

        Self { planes }
    }

    /// Signed distance from a point to one plane (positive = inside).
    pub fn signed_distance(&self, plane: usize, point: Vec3) -> f32 {
        self.planes[plane].dot(point.extend(1.0))
    }

    /// Test if a point is inside (or on the boundary of) the frustum.
    pub fn contains_point(&self, point: Vec3) -> bool {
        (0..self.planes.len()).all(|i| self.signed_distance(i, point) >= 0.0)
    }

    /// Test if a sphere intersects the frustum (conservative).
    pub fn intersects_sphere(&self, center: Vec3, radius: f32) -> bool {
        (0..self.planes.len()).all(|i| self.signed_distance(i, center) >= -radius)
    }

    /// Test if an AABB intersects this frustum.
    ///
    /// Uses the "positive vertex" test: for each plane, find the AABB corner
    /// most in the direction of the plane normal. If that corner is outside,
    /// the AABB is fully outside. May return false positives, never false
    /// negatives.
    pub fn intersects_aabb(&self, aabb: &AABB) -> bool {
        self.planes.iter().all(|plane| {
            let normal = plane.truncate();
            normal.dot(positive_vertex(normal, aabb)) + plane.w >= 0.0
        })
    }

    /// Classify an AABB against the frustum (3-way test).
    ///
    /// - p-vertex outside any plane → `Outside`
    /// - n-vertex outside any plane → at least `Partial`
    /// - otherwise → `Inside`
    pub fn classify_aabb(&self, aabb: &AABB) -> FrustumTest {
        let mut all_inside = true;

        for plane in &self.planes {
            let normal = plane.truncate();

            if normal.dot(positive_vertex(normal, aabb)) + plane.w < 0.0 {
                return FrustumTest::Outside;
            }

            if normal.dot(negative_vertex(normal, aabb)) + plane.w < 0.0 {
                all_inside = false;
            }
        }

        if all_inside { FrustumTest::Inside } else { FrustumTest::Partial }
    }
}

/// Corner of the box furthest along `normal`.
fn positive_vertex(normal: Vec3, aabb: &AABB) -> Vec3 {
    Vec3::select(normal.cmpge(Vec3::ZERO), aabb.max, aabb.min)
}

/// Corner of the box furthest against `normal`.
fn negative_vertex(normal: Vec3, aabb: &AABB) -> Vec3 {
    Vec3::select(normal.cmpge(Vec3::ZERO), aabb.min, aabb.max)
}

#[cfg(test)]
#[path = "frustum_tests.rs"]
mod tests;
