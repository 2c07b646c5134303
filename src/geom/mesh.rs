//! Triangle meshes for swept solids.

use std::collections::HashMap;

use super::core::Point3;

/// An indexed triangle mesh. Positions are shared between side walls and
/// caps, so a well-formed swept solid pairs every edge exactly twice.
#[derive(Debug, Clone, Default)]
pub struct SolidMesh {
    pub positions: Vec<Point3>,
    pub indices: Vec<u32>,
}

impl SolidMesh {
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Number of boundary edges: edges referenced by exactly one triangle.
    /// Zero for a watertight mesh.
    #[must_use]
    pub fn open_edge_count(&self) -> usize {
        let mut edge_uses: HashMap<(u32, u32), usize> = HashMap::new();

        for tri in self.indices.chunks_exact(3) {
            for (a, b) in [(tri[0], tri[1]), (tri[1], tri[2]), (tri[2], tri[0])] {
                let key = if a < b { (a, b) } else { (b, a) };
                *edge_uses.entry(key).or_insert(0) += 1;
            }
        }

        edge_uses.values().filter(|&&uses| uses == 1).count()
    }

    /// Signed enclosed volume via the divergence theorem. Positive for
    /// consistently outward-wound watertight meshes.
    #[must_use]
    pub fn signed_volume(&self) -> f64 {
        let mut six_volume = 0.0;

        for tri in self.indices.chunks_exact(3) {
            let a = self.positions[tri[0] as usize].to_vec3();
            let b = self.positions[tri[1] as usize].to_vec3();
            let c = self.positions[tri[2] as usize].to_vec3();
            six_volume += a.dot(b.cross(c));
        }

        six_volume / 6.0
    }
}
