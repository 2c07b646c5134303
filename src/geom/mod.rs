mod core;
mod frame;
mod line;
mod mesh;
mod plane;
mod surface;
mod sweep;

pub use core::{Point3, Tolerance, Transform, Vec3};
pub use frame::Frame;
pub use line::{CurveFrame, Line3};
pub use mesh::SolidMesh;
pub use plane::{Plane, PlaneError};
pub use surface::{HolderFace, PlanarFace};
pub use sweep::{
    SweepDiagnostics, SweepError, SweepOptions, sweep_cylinder, sweep_cylinder_with_tolerance,
};
