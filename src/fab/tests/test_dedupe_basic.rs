use crate::fab::{dedupe_lines, segment_hash};
use crate::geom::{Line3, Point3, Tolerance};

fn seg(a: [f64; 3], b: [f64; 3]) -> Line3 {
    Line3::new(
        Point3::new(a[0], a[1], a[2]),
        Point3::new(b[0], b[1], b[2]),
    )
}

#[test]
fn dedupe_preserves_first_seen_order() {
    let edges = [
        seg([0.0, 0.0, 0.0], [1.0, 0.0, 0.0]),
        seg([5.0, 5.0, 5.0], [6.0, 6.0, 6.0]),
        seg([1.0, 0.0, 0.0], [0.0, 0.0, 0.0]),
    ];

    let deduped = dedupe_lines(&edges);

    assert_eq!(deduped, vec![edges[0], edges[1]]);
}

#[test]
fn dedupe_is_idempotent() {
    let edges = [
        seg([0.0, 0.0, 0.0], [1.0, 0.0, 0.0]),
        seg([1.0, 0.0, 0.0], [0.0, 0.0, 0.0]),
        seg([0.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
        seg([0.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
        seg([2.0, 2.0, 2.0], [3.0, 3.0, 3.0]),
    ];

    let once = dedupe_lines(&edges);
    let twice = dedupe_lines(&once);

    assert_eq!(once, twice);
}

#[test]
fn dedupe_keeps_distinct_edges_sharing_an_endpoint() {
    let hub = [0.0, 0.0, 0.0];
    let edges = [
        seg(hub, [1.0, 0.0, 0.0]),
        seg(hub, [0.0, 1.0, 0.0]),
        seg(hub, [0.0, 0.0, 1.0]),
    ];

    assert_eq!(dedupe_lines(&edges).len(), 3);
}

#[test]
fn duplicate_candidates_share_a_spatial_hash() {
    let tol = Tolerance::default_geom();
    let e = seg([0.25, -1.0, 4.0], [3.0, 2.0, -0.5]);

    // A dropped duplicate also collides in the hash.
    assert_eq!(segment_hash(e, tol), segment_hash(e.reversed(), tol));
}
