//! Wireframe edge deduplication.
//!
//! Edges that meet at shared endpoints frequently arrive duplicated from the
//! modeling host, sometimes with flipped orientation. Duplicates are removed
//! by tolerant endpoint comparison in either orientation; the first
//! occurrence wins and input order is preserved.

use crate::geom::{Line3, Tolerance};

/// Remove duplicate and degenerate edges, keeping first occurrences in order.
#[must_use]
pub fn dedupe_lines(lines: &[Line3]) -> Vec<Line3> {
    dedupe_lines_with_tolerance(lines, Tolerance::default_geom())
}

/// Tolerance-explicit variant of [`dedupe_lines`].
///
/// An edge is dropped when it is degenerate (endpoints coincide under `tol`)
/// or when an already-kept edge matches it endpoint-for-endpoint in either
/// orientation. The scan is quadratic against the kept list, which is fine
/// for wireframes of tens to low hundreds of edges.
#[must_use]
pub fn dedupe_lines_with_tolerance(lines: &[Line3], tol: Tolerance) -> Vec<Line3> {
    let mut kept: Vec<Line3> = Vec::with_capacity(lines.len());

    for &line in lines {
        if line.is_degenerate(tol) {
            continue;
        }
        if kept.iter().any(|&existing| same_segment(existing, line, tol)) {
            continue;
        }
        kept.push(line);
    }

    let removed = lines.len() - kept.len();
    if removed > 0 {
        log::debug!("dedupe dropped {removed} of {} edges", lines.len());
    }

    kept
}

/// Orientation-insensitive tolerant segment equality.
fn same_segment(a: Line3, b: Line3, tol: Tolerance) -> bool {
    let forward =
        tol.approx_eq_point3(a.start, b.start) && tol.approx_eq_point3(a.end, b.end);
    let flipped =
        tol.approx_eq_point3(a.end, b.start) && tol.approx_eq_point3(a.start, b.end);

    forward || flipped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::Point3;

    fn seg(ax: f64, ay: f64, az: f64, bx: f64, by: f64, bz: f64) -> Line3 {
        Line3::new(Point3::new(ax, ay, az), Point3::new(bx, by, bz))
    }

    #[test]
    fn test_exact_duplicate_removed() {
        let e = seg(0.0, 0.0, 0.0, 1.0, 0.0, 0.0);
        assert_eq!(dedupe_lines(&[e, e]).len(), 1);
    }

    #[test]
    fn test_reversed_duplicate_removed() {
        let e = seg(0.0, 0.0, 0.0, 1.0, 0.0, 0.0);
        let deduped = dedupe_lines(&[e, e.reversed()]);

        assert_eq!(deduped.len(), 1);
        assert_eq!(deduped[0], e);
    }

    #[test]
    fn test_near_duplicate_within_tolerance_removed() {
        let tol = Tolerance::LOOSE;
        let a = seg(0.0, 0.0, 0.0, 1.0, 0.0, 0.0);
        let b = seg(1e-8, 0.0, 0.0, 1.0, 1e-8, 0.0);

        assert_eq!(dedupe_lines_with_tolerance(&[a, b], tol).len(), 1);
    }

    #[test]
    fn test_degenerate_edge_removed() {
        let zero = seg(5.0, 5.0, 5.0, 5.0, 5.0, 5.0);
        let real = seg(0.0, 0.0, 0.0, 1.0, 0.0, 0.0);

        assert_eq!(dedupe_lines(&[zero, real]), vec![real]);
    }
}
