//! Rigid placements (rotation + translation) of solids and scene nodes.

use nalgebra::{Isometry3, Point3, Translation3, Unit, UnitQuaternion, Vector3};

use crate::types::KernelError;

/// A rigid transform. Composition follows application order: `a.then(&b)`
/// applies `a` first.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement(Isometry3<f64>);

impl Default for Placement {
    fn default() -> Self {
        Self::identity()
    }
}

impl Placement {
    pub fn identity() -> Self {
        Placement(Isometry3::identity())
    }

    pub fn from_translation(offset: [f64; 3]) -> Self {
        Placement(Isometry3::translation(offset[0], offset[1], offset[2]))
    }

    /// Rotation by `angle` radians about the axis through `origin` along
    /// `direction`.
    pub fn rotation_about(
        origin: [f64; 3],
        direction: [f64; 3],
        angle: f64,
    ) -> Result<Self, KernelError> {
        let dir = Vector3::from(direction);
        if dir.norm() < 1e-12 {
            return Err(KernelError::InvalidParameter {
                reason: "rotation axis has zero length".to_string(),
            });
        }
        let rotation = UnitQuaternion::from_axis_angle(&Unit::new_normalize(dir), angle);
        let o = Vector3::from(origin);
        // p' = o + R(p - o) = R p + (o - R o)
        let translation = Translation3::from(o - rotation * o);
        Ok(Placement(Isometry3::from_parts(translation, rotation)))
    }

    /// This placement followed by `next`.
    pub fn then(&self, next: &Placement) -> Placement {
        Placement(next.0 * self.0)
    }

    pub fn translation(&self) -> [f64; 3] {
        let t = self.0.translation.vector;
        [t.x, t.y, t.z]
    }

    pub fn transform_point(&self, p: [f64; 3]) -> [f64; 3] {
        let q = self.0.transform_point(&Point3::from(p));
        [q.x, q.y, q.z]
    }

    pub fn transform_vector(&self, v: [f64; 3]) -> [f64; 3] {
        let w = self.0.transform_vector(&Vector3::from(v));
        [w.x, w.y, w.z]
    }

    /// Rotation angle in radians, in `[0, π]`.
    pub fn rotation_angle(&self) -> f64 {
        self.0.rotation.angle()
    }

    /// Homogeneous 4x4 matrix as four columns.
    pub fn columns(&self) -> [[f64; 4]; 4] {
        let m = self.0.to_homogeneous();
        let mut cols = [[0.0; 4]; 4];
        for (c, col) in cols.iter_mut().enumerate() {
            for (r, v) in col.iter_mut().enumerate() {
                *v = m[(r, c)];
            }
        }
        cols
    }

    pub fn is_identity(&self, eps: f64) -> bool {
        let t = self.0.translation.vector.norm();
        t <= eps && self.rotation_angle() <= eps
    }
}
