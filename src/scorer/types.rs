use crate::config::{Axis, PhysicalConstants};
use crate::scorer::verdicts::{AxisVerdict, CombinedVerdict, Effect, ViabilityLabel};
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedScores {
    pub star_score: f64,
    pub atom_score: f64,
    pub cosmos_score: f64,

    // Aggregate
    pub life_score: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisAssessment {
    pub axis: Axis,
    pub value: f64,
    pub verdict: AxisVerdict,
}

/// Verdicts evaluated on the derived scores rather than the raw inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CombinedVerdicts {
    pub star: CombinedVerdict,
    pub atom: CombinedVerdict,
    pub cosmos: CombinedVerdict,
    pub life: CombinedVerdict,
}

impl CombinedVerdicts {
    pub fn entries(&self) -> [(Effect, CombinedVerdict); 4] {
        [
            (Effect::StarFormation, self.star),
            (Effect::AtomicStability, self.atom),
            (Effect::CosmicExpansion, self.cosmos),
            (Effect::LifePotential, self.life),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Evaluation {
    pub constants: PhysicalConstants,
    pub scores: DerivedScores,

    // Raw-input classification
    pub axis_verdicts: [AxisAssessment; 4],
    pub combined_score: u8,
    pub overall_label: ViabilityLabel,

    // Derived-score classification
    pub combined: CombinedVerdicts,
}

impl Evaluation {
    pub fn verdict_for(&self, axis: Axis) -> AxisVerdict {
        // axis_verdicts follows Axis declaration order
        self.axis_verdicts[axis as usize].verdict
    }

    #[inline(always)]
    pub fn may_support_life(&self) -> bool {
        self.combined.life == CombinedVerdict::MaySupportLife
    }
}
