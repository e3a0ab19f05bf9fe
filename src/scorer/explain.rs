//! User-facing wording for verdicts.

use crate::config::Axis;
use crate::scorer::types::{DerivedScores, Evaluation};
use crate::scorer::verdicts::{self, AxisVerdict, CombinedVerdict, Effect};

pub fn axis_message(axis: Axis, verdict: AxisVerdict) -> &'static str {
    match (axis, verdict) {
        (_, AxisVerdict::TooWeak) => "Too weak: no stars or galaxies form.",
        (_, AxisVerdict::TooStrong) => "Too strong: stars collapse quickly.",
        (_, AxisVerdict::AtomsUnstable) => "Atoms unstable: chemistry fails.",
        (_, AxisVerdict::OrbitsCollapse) => "Electron orbits collapse.",
        (_, AxisVerdict::NoNuclei) => "No nuclei form: just protons.",
        (_, AxisVerdict::InstantFusion) => "Hydrogen fuses instantly: stars don't last.",
        (_, AxisVerdict::CollapsesEarly) => "Universe collapses early.",
        (_, AxisVerdict::ExpandsTooFast) => "Expands too fast: no galaxies form.",
        (Axis::Gravity, _) => "Gravity supports stable star formation.",
        (Axis::Electromagnetism, _) => "Supports stable atoms and chemistry.",
        (Axis::StrongForce, _) => "Enables atomic nuclei and fusion.",
        (Axis::CosmologicalConstant, _) => "Balanced cosmic expansion.",
    }
}

/// Background paragraph shown next to each axis.
pub fn axis_detail(axis: Axis) -> &'static str {
    match axis {
        Axis::Gravity => {
            "Gravity affects how matter clumps together. Too little, and stars never ignite. \
             Too much, and everything collapses rapidly."
        }
        Axis::Electromagnetism => {
            "This force holds atoms together. Tweak it too much, and atoms can't exist."
        }
        Axis::StrongForce => {
            "This force binds protons and neutrons. Without it, matter can't exist beyond hydrogen."
        }
        Axis::CosmologicalConstant => {
            "This controls the expansion of the universe. It must be finely tuned to allow \
             structure to form."
        }
    }
}

pub fn combined_message(effect: Effect, verdict: CombinedVerdict) -> &'static str {
    match (effect, verdict) {
        (_, CombinedVerdict::InsufficientStarFormation) => {
            "Too little star formation: gravity or fusion is failing."
        }
        (_, CombinedVerdict::StarsBurnOut) => "Stars form too rapidly and burn out instantly.",
        (_, CombinedVerdict::NoStableAtoms) => "No stable atoms: chemistry collapses.",
        (_, CombinedVerdict::ExtremeBonding) => "Extreme bonding: weird chemistry may dominate.",
        (_, CombinedVerdict::PrematureCollapse) => {
            "Universe collapses too soon: gravity dominates."
        }
        (_, CombinedVerdict::RunawayExpansion) => {
            "Universe expands too fast: no structures can form."
        }
        (_, CombinedVerdict::MaySupportLife) => "This universe might support life!",
        (_, CombinedVerdict::Unlikely) => {
            "Too many physical extremes: unlikely to be life-permitting."
        }
        (Effect::StarFormation, _) => "Star formation occurs at a stable, life-supporting rate.",
        (Effect::AtomicStability, _) => "Atoms can form stable, diverse chemical structures.",
        (Effect::CosmicExpansion, _) => "Expansion is balanced with gravitational pull.",
        (Effect::LifePotential, _) => "This universe might support life!",
    }
}

/// One sentence each for stars, atoms and cosmic structure.
pub fn narrative(scores: &DerivedScores) -> Vec<&'static str> {
    let star = match verdicts::classify_star(scores.star_score) {
        CombinedVerdict::InsufficientStarFormation => {
            "Gravity or the strong force is too weak: stars cannot form or sustain fusion."
        }
        CombinedVerdict::StarsBurnOut => {
            "Stars form too rapidly and burn out quickly due to overly strong gravity or fusion forces."
        }
        _ => "Star formation appears stable and sustained.",
    };

    let atom = match verdicts::classify_atom(scores.atom_score) {
        CombinedVerdict::NoStableAtoms => {
            "The electromagnetic force is too weak to bind electrons to nuclei: chemistry collapses."
        }
        CombinedVerdict::ExtremeBonding => "Bonding is too intense: exotic chemistry may dominate.",
        _ => "Atomic structure is stable, allowing for complex molecules.",
    };

    let cosmos = match verdicts::classify_cosmos(scores.cosmos_score) {
        CombinedVerdict::PrematureCollapse => {
            "Gravity overwhelms expansion: the universe collapses prematurely."
        }
        CombinedVerdict::RunawayExpansion => "Expansion dominates: matter never forms galaxies.",
        _ => "Cosmic expansion and gravitational attraction are well-balanced.",
    };

    vec![star, atom, cosmos]
}

/// Summary line, e.g. "🟢 Life-Permitting (4/4)".
pub fn headline(eval: &Evaluation) -> String {
    format!(
        "{} {} ({}/4)",
        eval.overall_label.indicator(),
        eval.overall_label,
        eval.combined_score
    )
}
