//! Aligning a cut plane's in-plane axis with a guide direction.
//!
//! The closed-form rotation ([`align_to_guide_direct`]) solves the common
//! case in one shot but inherits the acos branch ambiguity near collinear
//! configurations. The marching search ([`march_align`]) instead spins the
//! plane about its own normal in small random increments until the axis
//! comes to rest: nearly perpendicular to the reference secondary axis and
//! pointing with (not against) the guide.

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::geom::{Plane, Vec3};

/// Tuning for the marching search.
#[derive(Debug, Clone, Copy)]
pub struct MarchOptions {
    /// Upper bound on rotation attempts before giving up.
    pub max_iterations: usize,
    /// Smallest random step, in degrees.
    pub min_step_deg: f64,
    /// Largest random step, in degrees.
    pub max_step_deg: f64,
    /// Rest threshold on `|axis · secondary|`.
    pub rest_dot: f64,
}

impl Default for MarchOptions {
    fn default() -> Self {
        Self {
            max_iterations: 10_000,
            min_step_deg: 1.0e-4,
            max_step_deg: 5.0,
            rest_dot: 0.01,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AlignmentError {
    #[error("guide vector is zero or non-finite")]
    DegenerateGuide,
    #[error("guide vector is parallel to the plane normal")]
    GuideParallelToNormal,
    #[error("alignment did not converge after {iterations} iterations")]
    DidNotConverge { best: Plane, iterations: usize },
}

/// A successfully aligned plane plus the number of rotations it took.
#[derive(Debug, Clone, Copy)]
pub struct AlignedCut {
    pub plane: Plane,
    pub iterations: usize,
}

/// Single-shot alignment: rotate the plane about its own normal by
/// `-acos(x̂ · ĝ)`.
///
/// Fast but unreliable near collinearity: acos loses the rotation sense, so
/// the result may point against the guide. Callers needing the full rest
/// condition use [`march_align`].
///
/// # Errors
/// `DegenerateGuide` / `GuideParallelToNormal` on unusable guide vectors.
pub fn align_to_guide_direct(plane: &Plane, guide: Vec3) -> Result<Plane, AlignmentError> {
    let guide_dir = checked_guide(plane, guide)?;

    let angle = -plane.x_axis.dot(guide_dir).clamp(-1.0, 1.0).acos();
    Ok(plane.rotated_about_normal(angle))
}

/// Randomized marching alignment.
///
/// Rotates the plane about its own origin and normal by angles drawn
/// uniformly from `[min_step_deg, max_step_deg]` until the in-plane axis
/// satisfies both rest conditions:
/// - `|axis · secondary| ≤ rest_dot`
/// - `axis · guide ≥ 0`
///
/// The RNG is injected so runs are reproducible under a seeded generator.
///
/// # Errors
/// `DegenerateGuide` / `GuideParallelToNormal` on unusable guide vectors;
/// `DidNotConverge` (carrying the last plane reached) once `max_iterations`
/// rotations have been spent.
pub fn march_align(
    plane: &Plane,
    guide: Vec3,
    secondary: Vec3,
    options: &MarchOptions,
    rng: &mut impl Rng,
) -> Result<AlignedCut, AlignmentError> {
    let guide_dir = checked_guide(plane, guide)?;
    let secondary_dir = secondary.normalized();

    let mut current = *plane;
    for iteration in 0..options.max_iterations {
        if at_rest(&current, guide_dir, secondary_dir, options.rest_dot) {
            return Ok(AlignedCut {
                plane: current,
                iterations: iteration,
            });
        }

        let step_deg = rng.random_range(options.min_step_deg..=options.max_step_deg);
        current = current.rotated_about_normal(step_deg.to_radians());
    }

    if at_rest(&current, guide_dir, secondary_dir, options.rest_dot) {
        return Ok(AlignedCut {
            plane: current,
            iterations: options.max_iterations,
        });
    }

    log::debug!(
        "marching alignment exhausted {} iterations (rest_dot={})",
        options.max_iterations,
        options.rest_dot
    );
    Err(AlignmentError::DidNotConverge {
        best: current,
        iterations: options.max_iterations,
    })
}

/// [`march_align`] with a seeded `StdRng`, for reproducible runs.
pub fn march_align_seeded(
    plane: &Plane,
    guide: Vec3,
    secondary: Vec3,
    options: &MarchOptions,
    seed: u64,
) -> Result<AlignedCut, AlignmentError> {
    let mut rng = StdRng::seed_from_u64(seed);
    march_align(plane, guide, secondary, options, &mut rng)
}

fn checked_guide(plane: &Plane, guide: Vec3) -> Result<Vec3, AlignmentError> {
    let guide_dir = guide.normalized().ok_or(AlignmentError::DegenerateGuide)?;
    if !guide_dir.is_finite() {
        return Err(AlignmentError::DegenerateGuide);
    }
    if guide_dir.dot(plane.normal).abs() >= 1.0 - 1e-9 {
        return Err(AlignmentError::GuideParallelToNormal);
    }
    Ok(guide_dir)
}

fn at_rest(plane: &Plane, guide_dir: Vec3, secondary_dir: Option<Vec3>, rest_dot: f64) -> bool {
    let perpendicular = secondary_dir
        .is_none_or(|secondary| plane.x_axis.dot(secondary).abs() <= rest_dot);

    perpendicular && plane.x_axis.dot(guide_dir) >= 0.0
}
