//! Wireframe junctions.
//!
//! A node owns the junction's local frame and its holder face, the fixture
//! surface the fabrication cell grips the node by. Nodes are built by the
//! surrounding assembly pipeline and outlive the struts that borrow them.

use std::fmt;

use crate::geom::{Frame, HolderFace, Vec3};

pub struct Node {
    frame: Frame,
    holder: Box<dyn HolderFace>,
}

impl Node {
    #[must_use]
    pub fn new(frame: Frame, holder: Box<dyn HolderFace>) -> Self {
        Self { frame, holder }
    }

    /// The node's oriented local frame.
    #[must_use]
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    #[must_use]
    pub fn holder(&self) -> &dyn HolderFace {
        self.holder.as_ref()
    }

    /// Representative holder normal, sampled at the face's mid-parameter.
    /// `None` when the face is degenerate.
    #[must_use]
    pub fn holder_normal(&self) -> Option<Vec3> {
        self.holder.mid_normal()
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("frame", &self.frame)
            .field("holder_normal", &self.holder_normal())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::{PlanarFace, Point3, Tolerance};

    #[test]
    fn test_holder_normal_from_mid_parameter() {
        let node = Node::new(
            Frame::WORLD,
            Box::new(PlanarFace::new(
                Point3::new(0.0, 0.0, 1.0),
                Vec3::new(2.0, 0.0, 0.0),
                Vec3::new(0.0, 2.0, 0.0),
            )),
        );

        let n = node.holder_normal().unwrap();
        assert!(Tolerance::default_geom().approx_eq_vec3(n, Vec3::Z));
    }

    #[test]
    fn test_degenerate_holder_has_no_normal() {
        let node = Node::new(
            Frame::WORLD,
            Box::new(PlanarFace::new(Point3::ORIGIN, Vec3::X, Vec3::X)),
        );

        assert!(node.holder_normal().is_none());
    }
}
