use crate::fab::{Node, Strut, StrutError};
use crate::geom::{Frame, Line3, PlanarFace, Point3, Vec3};

/// Node whose holder-face normal sits at `offset_deg` from the cut-plane
/// normal of a +Z strut rooted at the origin (that cut normal is -Y).
fn node_with_holder_offset(offset_deg: f64) -> Node {
    let theta = offset_deg.to_radians();

    // u × v = (0, -cosθ, sinθ), i.e. -Y tilted by θ toward +Z.
    let u_axis = Vec3::new(1.0, 0.0, 0.0);
    let v_axis = Vec3::new(0.0, theta.sin(), theta.cos());

    Node::new(
        Frame::WORLD,
        Box::new(PlanarFace::new(Point3::ORIGIN, u_axis, v_axis)),
    )
}

fn excluded_at(offset_deg: f64) -> bool {
    let node = node_with_holder_offset(offset_deg);
    let axis = Line3::new(Point3::ORIGIN, Point3::new(0.0, 0.0, 50.0));
    let strut = Strut::new(axis, 8.0, &node).expect("valid strut");

    strut.holder_excluded().expect("holder check")
}

#[test]
fn holder_check_setup_is_calibrated() {
    let node = node_with_holder_offset(0.0);
    let axis = Line3::new(Point3::ORIGIN, Point3::new(0.0, 0.0, 50.0));
    let strut = Strut::new(axis, 8.0, &node).expect("valid strut");

    let cut_normal = strut.raw_cut_plane().expect("plane").normal;
    let holder_normal = node.holder_normal().expect("holder normal");

    let angle = holder_normal.angle_to(cut_normal).expect("angle");
    assert!(angle.abs() < 1e-9, "zero-offset fixture should align exactly");
}

#[test]
fn within_cone_is_not_excluded() {
    assert!(!excluded_at(0.0));
    assert!(!excluded_at(15.0));
    assert!(!excluded_at(29.0));
}

#[test]
fn boundary_is_not_excluded() {
    assert!(!excluded_at(30.0));
}

#[test]
fn beyond_cone_is_excluded() {
    assert!(excluded_at(31.0));
    assert!(excluded_at(90.0));
    assert!(excluded_at(179.0));
}

#[test]
fn degenerate_holder_face_is_an_error() {
    // Collinear spans: the face has no normal anywhere.
    let node = Node::new(
        Frame::WORLD,
        Box::new(PlanarFace::new(Point3::ORIGIN, Vec3::X, Vec3::X.mul_scalar(2.0))),
    );
    let axis = Line3::new(Point3::ORIGIN, Point3::new(0.0, 0.0, 50.0));
    let strut = Strut::new(axis, 8.0, &node).expect("valid strut");

    let result = strut.holder_excluded();
    assert!(matches!(result, Err(StrutError::DegenerateHolderFace)));
}
