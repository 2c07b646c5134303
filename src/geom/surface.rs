//! Bounded faces with a normal field.
//!
//! A node's holder fixture is modeled as a face sampled parametrically; the
//! exclusion check only ever needs the representative normal at the middle of
//! the domain.

use super::core::{Point3, Vec3};

pub trait HolderFace {
    fn point_at(&self, u: f64, v: f64) -> Point3;

    /// Surface normal at `(u, v)`. `None` where the face is degenerate.
    fn normal_at(&self, u: f64, v: f64) -> Option<Vec3>;

    #[must_use]
    fn domain_u(&self) -> (f64, f64) {
        (0.0, 1.0)
    }

    #[must_use]
    fn domain_v(&self) -> (f64, f64) {
        (0.0, 1.0)
    }

    /// Representative normal: the normal sampled at the domain midpoint.
    #[must_use]
    fn mid_normal(&self) -> Option<Vec3> {
        let (u0, u1) = self.domain_u();
        let (v0, v1) = self.domain_v();
        self.normal_at((u0 + u1) * 0.5, (v0 + v1) * 0.5)
    }
}

/// A bounded planar face spanned by two (not necessarily unit) edge vectors.
/// The vectors carry the extent: `point_at(1, 1)` is the far corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanarFace {
    pub origin: Point3,
    pub u_axis: Vec3,
    pub v_axis: Vec3,
}

impl PlanarFace {
    #[must_use]
    pub const fn new(origin: Point3, u_axis: Vec3, v_axis: Vec3) -> Self {
        Self {
            origin,
            u_axis,
            v_axis,
        }
    }
}

impl HolderFace for PlanarFace {
    fn point_at(&self, u: f64, v: f64) -> Point3 {
        self.origin
            .add_vec(self.u_axis.mul_scalar(u))
            .add_vec(self.v_axis.mul_scalar(v))
    }

    fn normal_at(&self, _u: f64, _v: f64) -> Option<Vec3> {
        self.u_axis.cross(self.v_axis).normalized()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::Tolerance;

    #[test]
    fn test_planar_face_sampling() {
        let face = PlanarFace::new(
            Point3::new(1.0, 1.0, 0.0),
            Vec3::new(2.0, 0.0, 0.0),
            Vec3::new(0.0, 3.0, 0.0),
        );

        assert_eq!(face.point_at(0.0, 0.0), face.origin);
        assert_eq!(face.point_at(1.0, 1.0), Point3::new(3.0, 4.0, 0.0));
    }

    #[test]
    fn test_planar_face_normal_is_unit() {
        let face = PlanarFace::new(
            Point3::ORIGIN,
            Vec3::new(5.0, 0.0, 0.0),
            Vec3::new(0.0, 0.5, 0.0),
        );

        let n = face.mid_normal().unwrap();
        assert!(Tolerance::default_geom().approx_eq_vec3(n, Vec3::Z));
    }

    #[test]
    fn test_degenerate_face_has_no_normal() {
        // Collinear spans give a zero cross product.
        let face = PlanarFace::new(Point3::ORIGIN, Vec3::X, Vec3::X.mul_scalar(3.0));
        assert!(face.mid_normal().is_none());
    }
}
