pub mod explain;
pub mod physics;
pub mod types;
pub mod verdicts;

pub use self::types::{AxisAssessment, CombinedVerdicts, DerivedScores, Evaluation};
pub use self::verdicts::{AxisVerdict, CombinedVerdict, Effect, Severity, ViabilityLabel};

use crate::config::PhysicalConstants;
use crate::error::FtResult;
use tracing::debug;

/// Validates the inputs, then scores them.
pub fn evaluate(constants: &PhysicalConstants) -> FtResult<Evaluation> {
    constants.validate()?;
    Ok(evaluate_unchecked(constants))
}

/// Scores inputs without range checks. Out-of-range values give meaningless
/// results: infinities at G·strong = 0, and a NaN life score whenever the
/// product of the three ratios is negative.
pub fn evaluate_unchecked(constants: &PhysicalConstants) -> Evaluation {
    let scores = physics::derived_scores(constants);

    let axis_verdicts = constants.axes().map(|(axis, value)| AxisAssessment {
        axis,
        value,
        verdict: verdicts::classify_axis(axis, value),
    });

    let combined_score = axis_verdicts
        .iter()
        .filter(|a| a.verdict.is_favorable())
        .count() as u8;

    let combined = CombinedVerdicts {
        star: verdicts::classify_star(scores.star_score),
        atom: verdicts::classify_atom(scores.atom_score),
        cosmos: verdicts::classify_cosmos(scores.cosmos_score),
        life: verdicts::classify_life(scores.life_score),
    };

    debug!(
        "evaluate: star={:.4} atom={:.4} cosmos={:.4} life={:.4} score={}/4",
        scores.star_score, scores.atom_score, scores.cosmos_score, scores.life_score, combined_score
    );

    Evaluation {
        constants: *constants,
        scores,
        axis_verdicts,
        combined_score,
        overall_label: ViabilityLabel::from_score(combined_score),
        combined,
    }
}

/// Convenience form taking the four scalars directly.
pub fn evaluate_scalars(
    gravity: f64,
    alpha: f64,
    strong_force: f64,
    lambda: f64,
) -> FtResult<Evaluation> {
    evaluate(&PhysicalConstants::new(gravity, alpha, strong_force, lambda))
}
