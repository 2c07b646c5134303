//! Oriented planes.
//!
//! A `Plane` carries an origin, a unit normal and a unit in-plane axis pair,
//! with `normal = x_axis × y_axis`. The in-plane x-axis is the reference axis
//! downstream alignment operates on.

use super::core::{Point3, Tolerance, Transform, Vec3};

#[derive(Debug, thiserror::Error)]
pub enum PlaneError {
    #[error("plane normal is zero or non-finite")]
    DegenerateNormal,
    #[error("in-plane reference axis is parallel to the plane normal")]
    AxisParallelToNormal,
    #[error("transform collapsed the plane axes")]
    DegenerateTransform,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    pub origin: Point3,
    /// Unit in-plane reference axis.
    pub x_axis: Vec3,
    /// Unit in-plane axis completing the basis, `normal × x_axis`.
    pub y_axis: Vec3,
    /// Unit normal, `x_axis × y_axis`.
    pub normal: Vec3,
}

impl Plane {
    /// The world XY plane.
    #[must_use]
    pub const fn world_xy() -> Self {
        Self {
            origin: Point3::ORIGIN,
            x_axis: Vec3::X,
            y_axis: Vec3::Y,
            normal: Vec3::Z,
        }
    }

    /// Construct a plane through `origin` with the given normal, orienting the
    /// in-plane x-axis along `x_hint` (projected into the plane and
    /// normalized).
    ///
    /// # Errors
    /// `DegenerateNormal` if the normal is zero or non-finite,
    /// `AxisParallelToNormal` if `x_hint` has no in-plane component.
    pub fn from_normal_and_x_axis(
        origin: Point3,
        normal: Vec3,
        x_hint: Vec3,
    ) -> Result<Self, PlaneError> {
        let normal = normal.normalized().ok_or(PlaneError::DegenerateNormal)?;

        let in_plane = x_hint.sub(normal.mul_scalar(x_hint.dot(normal)));
        let x_axis = in_plane
            .normalized()
            .ok_or(PlaneError::AxisParallelToNormal)?;
        let y_axis = normal.cross(x_axis);

        Ok(Self {
            origin,
            x_axis,
            y_axis,
            normal,
        })
    }

    /// Rotate the plane about its own origin and normal by `angle` radians.
    ///
    /// The origin and normal are unchanged; only the in-plane axis pair
    /// spins. Axes stay orthonormal by construction.
    #[must_use]
    pub fn rotated_about_normal(&self, angle: f64) -> Self {
        let x_axis = rotate_about_unit_axis(self.x_axis, self.normal, angle);
        let y_axis = self.normal.cross(x_axis);

        Self {
            origin: self.origin,
            x_axis,
            y_axis,
            normal: self.normal,
        }
    }

    /// Express the plane under `t`.
    ///
    /// Axes are re-orthonormalized after mapping, so rigid transforms are
    /// exact and mildly shearing ones stay well-formed.
    ///
    /// # Errors
    /// `DegenerateTransform` if the transform collapses the normal or the
    /// reference axis.
    pub fn transformed(&self, t: Transform) -> Result<Self, PlaneError> {
        let origin = t.apply_point(self.origin);
        let normal = t
            .apply_vec(self.normal)
            .normalized()
            .ok_or(PlaneError::DegenerateTransform)?;

        let mapped_x = t.apply_vec(self.x_axis);
        let in_plane = mapped_x.sub(normal.mul_scalar(mapped_x.dot(normal)));
        let x_axis = in_plane
            .normalized()
            .ok_or(PlaneError::DegenerateTransform)?;
        let y_axis = normal.cross(x_axis);

        Ok(Self {
            origin,
            x_axis,
            y_axis,
            normal,
        })
    }

    #[must_use]
    pub fn approx_eq(&self, other: &Self, tol: Tolerance) -> bool {
        tol.approx_eq_point3(self.origin, other.origin)
            && tol.approx_eq_vec3(self.x_axis, other.x_axis)
            && tol.approx_eq_vec3(self.y_axis, other.y_axis)
            && tol.approx_eq_vec3(self.normal, other.normal)
    }
}

/// Rodrigues rotation. `axis` must be unit length.
fn rotate_about_unit_axis(v: Vec3, axis: Vec3, angle: f64) -> Vec3 {
    let cos_angle = angle.cos();
    let sin_angle = angle.sin();

    v.mul_scalar(cos_angle)
        .add(axis.cross(v).mul_scalar(sin_angle))
        .add(axis.mul_scalar(axis.dot(v) * (1.0 - cos_angle)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_normal_orthonormalizes() {
        let plane = Plane::from_normal_and_x_axis(
            Point3::new(1.0, 2.0, 3.0),
            Vec3::new(0.0, 0.0, 2.0),
            Vec3::new(1.0, 0.0, 0.5),
        )
        .unwrap();

        let tol = Tolerance::default_geom();
        assert!(tol.approx_eq_vec3(plane.normal, Vec3::Z));
        assert!(tol.approx_eq_vec3(plane.x_axis, Vec3::X));
        assert!(tol.approx_eq_vec3(plane.y_axis, Vec3::Y));
    }

    #[test]
    fn test_from_normal_rejects_degenerate_inputs() {
        let r = Plane::from_normal_and_x_axis(Point3::ORIGIN, Vec3::ZERO, Vec3::X);
        assert!(matches!(r, Err(PlaneError::DegenerateNormal)));

        let r = Plane::from_normal_and_x_axis(Point3::ORIGIN, Vec3::Z, Vec3::Z.mul_scalar(4.0));
        assert!(matches!(r, Err(PlaneError::AxisParallelToNormal)));
    }

    #[test]
    fn test_rotation_about_normal_keeps_normal() {
        let plane = Plane::world_xy();
        let rotated = plane.rotated_about_normal(std::f64::consts::FRAC_PI_2);

        let tol = Tolerance::default_geom();
        assert!(tol.approx_eq_vec3(rotated.normal, plane.normal));
        assert!(tol.approx_eq_vec3(rotated.x_axis, Vec3::Y));
        assert!(tol.approx_eq_vec3(rotated.y_axis, Vec3::X.reversed()));
        assert_eq!(rotated.origin, plane.origin);
    }

    #[test]
    fn test_full_turn_is_identity() {
        let plane = Plane::from_normal_and_x_axis(
            Point3::new(-2.0, 0.5, 1.0),
            Vec3::new(1.0, 1.0, 1.0),
            Vec3::X,
        )
        .unwrap();

        let spun = plane.rotated_about_normal(2.0 * std::f64::consts::PI);
        assert!(plane.approx_eq(&spun, Tolerance::default_geom()));
    }

    #[test]
    fn test_transform_roundtrip() {
        let plane = Plane::from_normal_and_x_axis(
            Point3::new(4.0, 5.0, 6.0),
            Vec3::new(0.0, 1.0, 1.0),
            Vec3::X,
        )
        .unwrap();

        let t = Transform::from_axes(
            Point3::new(10.0, 0.0, -3.0),
            Vec3::Y,
            Vec3::Z,
            Vec3::X,
        );
        let inv = t.inverse().unwrap();

        let there = plane.transformed(t).unwrap();
        let back = there.transformed(inv).unwrap();

        assert!(plane.approx_eq(&back, Tolerance::default_geom()));
    }

    #[test]
    fn test_singular_transform_is_error() {
        let collapse = Transform::from_axes(Point3::ORIGIN, Vec3::ZERO, Vec3::ZERO, Vec3::ZERO);
        let r = Plane::world_xy().transformed(collapse);
        assert!(matches!(r, Err(PlaneError::DegenerateTransform)));
    }
}
