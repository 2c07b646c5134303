//! Sweeping a circular profile along a straight axis.
//!
//! This is the solid generator behind strut geometry: a circle of the strut
//! radius placed in the frame at the axis start, swept to the far endpoint
//! and capped at both ends. The rail is a single straight segment, so one
//! frame serves both rings and no parallel transport is needed.

use super::core::{Point3, Tolerance};
use super::line::Line3;
use super::mesh::SolidMesh;

/// Options for controlling swept-solid generation.
#[derive(Debug, Clone, Copy)]
pub struct SweepOptions {
    /// Number of segments around the circular cross-section.
    pub radial_segments: usize,
}

impl Default for SweepOptions {
    fn default() -> Self {
        Self {
            radial_segments: 24,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SweepError {
    #[error("sweep axis is degenerate (zero length)")]
    DegenerateAxis,
    #[error("sweep axis must have finite endpoints")]
    NonFiniteAxis,
    #[error("radius must be finite and > 0")]
    InvalidRadius,
    #[error("sweep requires at least 3 radial segments")]
    NotEnoughRadialSegments,
}

/// Per-sweep bookkeeping returned alongside the mesh.
#[derive(Debug, Clone, Default)]
pub struct SweepDiagnostics {
    pub vertex_count: usize,
    pub triangle_count: usize,
    pub open_edge_count: usize,
    pub warnings: Vec<String>,
}

#[must_use = "the swept solid is the result"]
pub fn sweep_cylinder(
    axis: Line3,
    radius: f64,
    options: SweepOptions,
) -> Result<(SolidMesh, SweepDiagnostics), SweepError> {
    sweep_cylinder_with_tolerance(axis, radius, options, Tolerance::default_geom())
}

pub fn sweep_cylinder_with_tolerance(
    axis: Line3,
    radius: f64,
    options: SweepOptions,
    tol: Tolerance,
) -> Result<(SolidMesh, SweepDiagnostics), SweepError> {
    if options.radial_segments < 3 {
        return Err(SweepError::NotEnoughRadialSegments);
    }
    if !axis.is_finite() {
        return Err(SweepError::NonFiniteAxis);
    }
    if axis.is_degenerate(tol) {
        return Err(SweepError::DegenerateAxis);
    }
    if !radius.is_finite() || radius <= tol.eps {
        return Err(SweepError::InvalidRadius);
    }

    let frame = axis.frame_at(0.0).ok_or(SweepError::DegenerateAxis)?;
    let segments = options.radial_segments;

    let mut warnings = Vec::new();
    if radius > 0.49 * axis.length() {
        warnings.push(format!(
            "radius {radius:.3} is large relative to axis length {:.3}",
            axis.length()
        ));
    }

    // Two rings of shared vertices, then the two cap centers.
    let mut positions: Vec<Point3> = Vec::with_capacity(segments * 2 + 2);
    for ring_origin in [axis.start, axis.end] {
        for seg in 0..segments {
            let angle = 2.0 * std::f64::consts::PI * seg as f64 / segments as f64;
            let radial = frame
                .normal
                .mul_scalar(radius * angle.cos())
                .add(frame.binormal.mul_scalar(radius * angle.sin()));
            positions.push(ring_origin.add_vec(radial));
        }
    }
    let start_center = positions.len() as u32;
    positions.push(axis.start);
    let end_center = positions.len() as u32;
    positions.push(axis.end);

    let mut indices: Vec<u32> = Vec::with_capacity(segments * 12);

    // Side wall, outward winding.
    for seg in 0..segments {
        let next = (seg + 1) % segments;
        let i0 = seg as u32;
        let i1 = next as u32;
        let i2 = (segments + next) as u32;
        let i3 = (segments + seg) as u32;

        indices.extend_from_slice(&[i0, i1, i2]);
        indices.extend_from_slice(&[i0, i2, i3]);
    }

    // Caps fan from the centers into the existing rings; cap edges pair
    // with wall edges, no welding pass needed.
    for seg in 0..segments {
        let next = (seg + 1) % segments;

        // Start cap faces along -tangent.
        indices.extend_from_slice(&[start_center, next as u32, seg as u32]);
        // End cap faces along +tangent.
        indices.extend_from_slice(&[end_center, (segments + seg) as u32, (segments + next) as u32]);
    }

    let mesh = SolidMesh { positions, indices };
    let diagnostics = SweepDiagnostics {
        vertex_count: mesh.vertex_count(),
        triangle_count: mesh.triangle_count(),
        open_edge_count: mesh.open_edge_count(),
        warnings,
    };

    Ok((mesh, diagnostics))
}
