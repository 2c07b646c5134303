mod align;
mod dedupe;
mod hash;
mod node;
mod report;
mod strut;

pub use align::{
    AlignedCut, AlignmentError, MarchOptions, align_to_guide_direct, march_align,
    march_align_seeded,
};
pub use dedupe::{dedupe_lines, dedupe_lines_with_tolerance};
pub use hash::{point_hash, segment_hash};
pub use node::Node;
pub use report::{PlanePlacement, StrutRecord};
pub use strut::{Strut, StrutError, StrutId};

#[cfg(test)]
mod tests;
