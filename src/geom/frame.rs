//! Oriented coordinate systems embedded in world space.

use super::core::{Point3, Tolerance, Transform, Vec3};
use super::plane::Plane;

/// An orthonormal frame: an origin plus right-handed unit axes.
///
/// `local_to_world` places local coordinates into world space;
/// `world_to_local` is its inverse and is what normalizes geometry into a
/// node's own space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub origin: Point3,
    pub x_axis: Vec3,
    pub y_axis: Vec3,
    pub z_axis: Vec3,
}

impl Frame {
    /// The world frame.
    pub const WORLD: Self = Self {
        origin: Point3::ORIGIN,
        x_axis: Vec3::X,
        y_axis: Vec3::Y,
        z_axis: Vec3::Z,
    };

    /// Build a frame from axes assumed to be orthonormal and right-handed.
    /// No validation is performed; construction sites own the invariant.
    #[must_use]
    pub const fn new(origin: Point3, x_axis: Vec3, y_axis: Vec3, z_axis: Vec3) -> Self {
        Self {
            origin,
            x_axis,
            y_axis,
            z_axis,
        }
    }

    /// Coordinate system rooted at a plane: the plane's axis pair becomes
    /// x/y and its normal becomes z.
    #[must_use]
    pub const fn from_plane(plane: &Plane) -> Self {
        Self {
            origin: plane.origin,
            x_axis: plane.x_axis,
            y_axis: plane.y_axis,
            z_axis: plane.normal,
        }
    }

    /// Build a frame whose z-axis points along `z`, with x/y chosen by the
    /// stable reference-vector construction. Returns `None` for a degenerate
    /// `z`.
    #[must_use]
    pub fn from_z_axis(origin: Point3, z: Vec3) -> Option<Self> {
        let z_axis = z.normalized()?;

        let reference = if z_axis.x.abs() < 0.9 { Vec3::X } else { Vec3::Y };
        let y_axis = z_axis.cross(reference).normalized()?;
        let x_axis = y_axis.cross(z_axis);

        Some(Self {
            origin,
            x_axis,
            y_axis,
            z_axis,
        })
    }

    #[must_use]
    pub fn local_to_world(&self) -> Transform {
        Transform::from_axes(self.origin, self.x_axis, self.y_axis, self.z_axis)
    }

    /// Inverse placement transform.
    /// Returns `None` when the frame's axes are singular (a frame built via
    /// `new` with broken invariants).
    #[must_use]
    pub fn world_to_local(&self) -> Option<Transform> {
        self.local_to_world().inverse()
    }

    #[must_use]
    pub fn approx_eq(&self, other: &Self, tol: Tolerance) -> bool {
        tol.approx_eq_point3(self.origin, other.origin)
            && tol.approx_eq_vec3(self.x_axis, other.x_axis)
            && tol.approx_eq_vec3(self.y_axis, other.y_axis)
            && tol.approx_eq_vec3(self.z_axis, other.z_axis)
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::WORLD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_world_frame_transforms_are_identity() {
        let frame = Frame::WORLD;
        let p = Point3::new(1.0, 2.0, 3.0);

        assert_eq!(frame.local_to_world().apply_point(p), p);
        assert_eq!(frame.world_to_local().unwrap().apply_point(p), p);
    }

    #[test]
    fn test_local_world_roundtrip() {
        let frame = Frame::new(
            Point3::new(5.0, -2.0, 1.0),
            Vec3::Y,
            Vec3::Z,
            Vec3::X,
        );
        let to_world = frame.local_to_world();
        let to_local = frame.world_to_local().unwrap();

        let p = Point3::new(0.3, -1.7, 2.2);
        let roundtrip = to_local.apply_point(to_world.apply_point(p));

        assert!(Tolerance::default_geom().approx_eq_point3(roundtrip, p));
    }

    #[test]
    fn test_frame_origin_maps_to_local_zero() {
        let frame = Frame::from_z_axis(Point3::new(7.0, 7.0, 7.0), Vec3::new(1.0, 1.0, 0.0)).unwrap();
        let local = frame.world_to_local().unwrap().apply_point(frame.origin);

        assert!(Tolerance::default_geom().approx_eq_point3(local, Point3::ORIGIN));
    }

    #[test]
    fn test_from_z_axis_is_right_handed() {
        let frame = Frame::from_z_axis(Point3::ORIGIN, Vec3::new(0.2, -0.5, 0.8)).unwrap();
        let tol = Tolerance::default_geom();

        assert!(tol.approx_eq_vec3(frame.x_axis.cross(frame.y_axis), frame.z_axis));
        assert!(frame.x_axis.dot(frame.y_axis).abs() < 1e-12);
        assert!(frame.y_axis.dot(frame.z_axis).abs() < 1e-12);
    }

    #[test]
    fn test_from_z_axis_degenerate_is_none() {
        assert!(Frame::from_z_axis(Point3::ORIGIN, Vec3::ZERO).is_none());
    }

    #[test]
    fn test_from_plane_carries_axes() {
        let plane = Plane::world_xy();
        let frame = Frame::from_plane(&plane);

        assert_eq!(frame.origin, plane.origin);
        assert_eq!(frame.z_axis, plane.normal);
        assert_eq!(frame.x_axis, plane.x_axis);
    }
}
