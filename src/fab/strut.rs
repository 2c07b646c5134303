//! Struts: cylindrical members derived from wireframe edges.
//!
//! A strut binds one deduplicated edge to the node that owns its near end.
//! Construction validates the inputs and eagerly sweeps the cylinder solid;
//! the cut-plane family (`raw_cut_plane` → `node_cut_plane` → aligned
//! variants) is recomputed per call from the current strut and node state.

use rand::Rng;

use crate::geom::{
    Frame, Line3, Plane, PlaneError, SolidMesh, SweepError, SweepOptions, Tolerance, Vec3,
    sweep_cylinder_with_tolerance,
};

use super::align::{self, AlignedCut, AlignmentError, MarchOptions};
use super::hash;
use super::node::Node;

/// Identifier assigned by the external topology indexer.
pub type StrutId = u32;

/// Cut orientations steeper than this relative to the holder normal cannot
/// be finished through the holder fixture.
const HOLDER_EXCLUSION_ANGLE: f64 = std::f64::consts::FRAC_PI_6;

/// Slack for the exclusion comparison so a cut exactly on the boundary
/// still counts as reachable.
const EXCLUSION_ANGLE_SLACK: f64 = 1e-9;

#[derive(Debug, thiserror::Error)]
pub enum StrutError {
    #[error("strut axis is degenerate (zero length)")]
    DegenerateAxis,
    #[error("strut axis must have finite endpoints")]
    NonFiniteAxis,
    #[error("strut diameter must be finite and > 0")]
    InvalidDiameter,
    #[error("strut id has already been assigned")]
    IdAlreadyAssigned,
    #[error("owner node frame does not invert")]
    SingularNodeFrame,
    #[error("holder face has no well-defined normal")]
    DegenerateHolderFace,
    #[error(transparent)]
    Plane(#[from] PlaneError),
    #[error(transparent)]
    Sweep(#[from] SweepError),
    #[error(transparent)]
    Alignment(#[from] AlignmentError),
}

/// One fabrication member. Borrows its owner node; owns its axis and the
/// cached swept solid.
#[derive(Debug)]
pub struct Strut<'a> {
    axis: Line3,
    node: &'a Node,
    diameter: f64,
    id: Option<StrutId>,
    solid: SolidMesh,
}

impl<'a> Strut<'a> {
    /// Build a strut with default sweep options and geometry tolerance.
    ///
    /// # Errors
    /// Rejects zero-length or non-finite axes and non-positive or
    /// non-finite diameters.
    pub fn new(axis: Line3, diameter: f64, node: &'a Node) -> Result<Self, StrutError> {
        Self::with_options(
            axis,
            diameter,
            node,
            SweepOptions::default(),
            Tolerance::default_geom(),
        )
    }

    pub fn with_options(
        axis: Line3,
        diameter: f64,
        node: &'a Node,
        sweep_options: SweepOptions,
        tol: Tolerance,
    ) -> Result<Self, StrutError> {
        if !axis.is_finite() {
            return Err(StrutError::NonFiniteAxis);
        }
        if axis.is_degenerate(tol) {
            return Err(StrutError::DegenerateAxis);
        }
        if !diameter.is_finite() || diameter <= tol.eps {
            return Err(StrutError::InvalidDiameter);
        }

        // The one expensive derived value; swept once, kept for the
        // strut's lifetime.
        let (solid, _) = sweep_cylinder_with_tolerance(axis, diameter * 0.5, sweep_options, tol)?;

        Ok(Self {
            axis,
            node,
            diameter,
            id: None,
            solid,
        })
    }

    #[must_use]
    pub const fn axis(&self) -> Line3 {
        self.axis
    }

    #[must_use]
    pub fn node(&self) -> &Node {
        self.node
    }

    #[must_use]
    pub const fn diameter(&self) -> f64 {
        self.diameter
    }

    #[must_use]
    pub const fn id(&self) -> Option<StrutId> {
        self.id
    }

    /// Assign the externally indexed id. Assignable exactly once.
    ///
    /// # Errors
    /// `IdAlreadyAssigned` on a second call.
    pub fn set_id(&mut self, id: StrutId) -> Result<(), StrutError> {
        if self.id.is_some() {
            return Err(StrutError::IdAlreadyAssigned);
        }
        self.id = Some(id);
        Ok(())
    }

    /// The cylinder solid swept at construction.
    #[must_use]
    pub const fn solid(&self) -> &SolidMesh {
        &self.solid
    }

    /// Order-independent hash of the axis endpoints (see `fab::hash`).
    #[must_use]
    pub fn spatial_hash(&self, tol: Tolerance) -> u64 {
        hash::segment_hash(self.axis, tol)
    }

    /// Cut plane at the node end of the strut, in world space.
    ///
    /// Built from the frame at parameter 0 of the axis: the plane sits at
    /// the edge start with its normal along the reversed secondary
    /// (curve-normal) axis, so the normal points toward the node, and its
    /// in-plane x-axis along the tertiary (binormal) axis.
    pub fn raw_cut_plane(&self) -> Result<Plane, StrutError> {
        let frame = self.axis.frame_at(0.0).ok_or(StrutError::DegenerateAxis)?;

        Plane::from_normal_and_x_axis(frame.origin, frame.normal.reversed(), frame.binormal)
            .map_err(StrutError::from)
    }

    /// [`raw_cut_plane`](Self::raw_cut_plane) expressed in the owner node's
    /// local frame, so all struts at a node share one space regardless of
    /// the node's world placement.
    pub fn node_cut_plane(&self) -> Result<Plane, StrutError> {
        let raw = self.raw_cut_plane()?;
        let to_local = self
            .node
            .frame()
            .world_to_local()
            .ok_or(StrutError::SingularNodeFrame)?;

        raw.transformed(to_local).map_err(StrutError::from)
    }

    /// Closed-form guide alignment of the node-local cut plane.
    /// See `fab::align::align_to_guide_direct` for its limits.
    pub fn direct_aligned_cut_plane(&self, guide: Vec3) -> Result<Plane, StrutError> {
        let plane = self.node_cut_plane()?;
        align::align_to_guide_direct(&plane, guide).map_err(StrutError::from)
    }

    /// Marching guide alignment of the node-local cut plane, tested against
    /// the node frame's secondary axis. Guide defaults to the node-local X
    /// axis in [`aligned_cut_plane`](Self::aligned_cut_plane).
    pub fn aligned_cut_plane_toward(
        &self,
        guide: Vec3,
        options: &MarchOptions,
        rng: &mut impl Rng,
    ) -> Result<AlignedCut, StrutError> {
        let plane = self.node_cut_plane()?;
        align::march_align(&plane, guide, Vec3::Y, options, rng).map_err(StrutError::from)
    }

    pub fn aligned_cut_plane(
        &self,
        options: &MarchOptions,
        rng: &mut impl Rng,
    ) -> Result<AlignedCut, StrutError> {
        self.aligned_cut_plane_toward(Vec3::X, options, rng)
    }

    /// Coordinate system rooted at the marched cut plane, for robot
    /// targeting and preview.
    pub fn aligned_frame(
        &self,
        options: &MarchOptions,
        rng: &mut impl Rng,
    ) -> Result<Frame, StrutError> {
        let aligned = self.aligned_cut_plane(options, rng)?;
        Ok(Frame::from_plane(&aligned.plane))
    }

    /// Whether the cut orientation falls outside the holder's reachable
    /// cone: true iff the angle between the cut-plane normal and the
    /// holder-face normal exceeds 30°. A cut exactly on the boundary is
    /// reachable. Recomputed fresh per call; the node's geometry may change
    /// between calls.
    pub fn holder_excluded(&self) -> Result<bool, StrutError> {
        let holder_normal = self
            .node
            .holder_normal()
            .ok_or(StrutError::DegenerateHolderFace)?;
        let cut = self.raw_cut_plane()?;
        let angle = holder_normal
            .angle_to(cut.normal)
            .ok_or(StrutError::DegenerateHolderFace)?;

        Ok(angle > HOLDER_EXCLUSION_ANGLE + EXCLUSION_ANGLE_SLACK)
    }
}
