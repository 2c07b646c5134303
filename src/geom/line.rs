//! Line segments and the oriented frames along them.
//!
//! A `Line3` is the wireframe edge primitive: directed for frame/plane
//! derivation (start → end fixes the parametrization), undirected for
//! spatial comparison (see `fab::dedupe`).

use super::core::{Point3, Tolerance, Vec3};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line3 {
    pub start: Point3,
    pub end: Point3,
}

impl Line3 {
    #[must_use]
    pub const fn new(start: Point3, end: Point3) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub const fn direction(self) -> Vec3 {
        self.end.sub_point(self.start)
    }

    #[must_use]
    pub fn length(self) -> f64 {
        self.direction().length()
    }

    /// Point at normalized parameter `t` (0 = start, 1 = end).
    #[must_use]
    pub fn point_at(self, t: f64) -> Point3 {
        self.start.add_vec(self.direction().mul_scalar(t))
    }

    /// The same segment traversed end → start.
    #[must_use]
    pub const fn reversed(self) -> Self {
        Self::new(self.end, self.start)
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.start.is_finite() && self.end.is_finite()
    }

    /// Degenerate means the endpoints coincide under `tol`.
    #[must_use]
    pub fn is_degenerate(self, tol: Tolerance) -> bool {
        tol.approx_eq_point3(self.start, self.end)
    }

    /// Oriented frame at normalized parameter `t`.
    ///
    /// The frame's x-axis is the tangent; normal and binormal are chosen with
    /// the stable reference-vector construction so the frame does not flip for
    /// nearby tangent directions. Returns `None` for degenerate lines.
    #[must_use]
    pub fn frame_at(self, t: f64) -> Option<CurveFrame> {
        let tangent = self.direction();
        CurveFrame::from_origin_tangent(self.point_at(t), tangent)
    }
}

/// Oriented coordinate frame at a point on a curve.
///
/// Follows the right-hand rule: `binormal = tangent × normal`. For a straight
/// segment the frame is constant along the curve, so `Line3::frame_at` just
/// translates the origin.
#[derive(Debug, Clone, Copy)]
pub struct CurveFrame {
    /// Point on the curve the frame is rooted at.
    pub origin: Point3,
    /// Unit vector along the curve direction (primary axis).
    pub tangent: Vec3,
    /// Unit vector perpendicular to the tangent (secondary axis).
    pub normal: Vec3,
    /// Unit vector completing the basis, `tangent × normal` (tertiary axis).
    pub binormal: Vec3,
}

impl CurveFrame {
    /// Build a frame from an origin and a (not necessarily unit) tangent.
    ///
    /// The perpendicular pair is derived from a reference vector chosen to
    /// avoid near-parallelism with the tangent: world X unless the tangent
    /// already leans along X, world Y otherwise.
    ///
    /// Returns `None` if the tangent is zero or cannot be normalized.
    #[must_use]
    pub fn from_origin_tangent(origin: Point3, tangent: Vec3) -> Option<Self> {
        let tangent = tangent.normalized()?;

        let reference = if tangent.x.abs() < 0.9 {
            Vec3::X
        } else {
            Vec3::Y
        };

        let normal = tangent.cross(reference).normalized()?;
        let binormal = tangent.cross(normal);

        Some(Self {
            origin,
            tangent,
            normal,
            binormal,
        })
    }

    #[must_use]
    pub fn approx_eq(&self, other: &Self, tol: Tolerance) -> bool {
        tol.approx_eq_point3(self.origin, other.origin)
            && tol.approx_eq_vec3(self.tangent, other.tangent)
            && tol.approx_eq_vec3(self.normal, other.normal)
            && tol.approx_eq_vec3(self.binormal, other.binormal)
    }
}
