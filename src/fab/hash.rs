//! Spatial hashing of edges by their endpoints.
//!
//! The hash is a cheap pre-identification key for grouping and duplicate
//! candidates, not an authoritative identifier (that arrives later via
//! `Strut::set_id` from the external topology indexer). Coordinates are
//! quantized to the comparison tolerance before hashing, so points on the
//! same tolerance-grid cell hash identically, and the two endpoint hashes
//! are combined with XOR so the key is independent of edge orientation.

use std::hash::{Hash, Hasher};

use crate::geom::{Line3, Point3, Tolerance};

/// Hash of a point quantized to the tolerance grid.
#[must_use]
pub fn point_hash(p: Point3, tol: Tolerance) -> u64 {
    // DefaultHasher with default keys is deterministic within a process.
    let mut hasher = std::collections::hash_map::DefaultHasher::new();
    quantize(p.x, tol).hash(&mut hasher);
    quantize(p.y, tol).hash(&mut hasher);
    quantize(p.z, tol).hash(&mut hasher);
    hasher.finish()
}

/// Order-independent hash of a segment's endpoint pair:
/// `segment_hash(A→B) == segment_hash(B→A)` by construction.
#[must_use]
pub fn segment_hash(line: Line3, tol: Tolerance) -> u64 {
    point_hash(line.start, tol) ^ point_hash(line.end, tol)
}

fn quantize(coordinate: f64, tol: Tolerance) -> i64 {
    (coordinate / tol.eps).round() as i64
}
