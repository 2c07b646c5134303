//! Plain-data export records for the downstream assembly pipeline.
//!
//! Robot-path generation and the topology indexer consume struts as flat
//! values, not as live borrows into the node table.

use serde::Serialize;

use crate::geom::{Plane, Tolerance};

use super::strut::{Strut, StrutError, StrutId};

/// A plane flattened to arrays for serialization.
#[derive(Debug, Clone, Serialize)]
pub struct PlanePlacement {
    pub origin: [f64; 3],
    pub x_axis: [f64; 3],
    pub y_axis: [f64; 3],
    pub normal: [f64; 3],
}

impl From<&Plane> for PlanePlacement {
    fn from(plane: &Plane) -> Self {
        Self {
            origin: plane.origin.to_array(),
            x_axis: plane.x_axis.to_array(),
            y_axis: plane.y_axis.to_array(),
            normal: plane.normal.to_array(),
        }
    }
}

/// One strut, flattened for export.
#[derive(Debug, Clone, Serialize)]
pub struct StrutRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<StrutId>,
    pub start: [f64; 3],
    pub end: [f64; 3],
    pub diameter: f64,
    pub spatial_hash: u64,
    /// Node-local cut plane.
    pub cut_plane: PlanePlacement,
    pub holder_excluded: bool,
}

impl StrutRecord {
    /// Flatten a strut, evaluating its node-local cut plane and holder
    /// exclusion.
    ///
    /// # Errors
    /// Propagates any cut-plane or holder failure from the strut.
    pub fn from_strut(strut: &Strut<'_>, tol: Tolerance) -> Result<Self, StrutError> {
        let cut_plane = strut.node_cut_plane()?;

        Ok(Self {
            id: strut.id(),
            start: strut.axis().start.to_array(),
            end: strut.axis().end.to_array(),
            diameter: strut.diameter(),
            spatial_hash: strut.spatial_hash(tol),
            cut_plane: PlanePlacement::from(&cut_plane),
            holder_excluded: strut.holder_excluded()?,
        })
    }
}
