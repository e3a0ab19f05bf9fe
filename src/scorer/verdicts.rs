use crate::config::Axis;
use crate::consts::*;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Ok,
    Warning,
    Error,
}

/// Classification of one raw input against its own thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisVerdict {
    // Gravity
    #[strum(serialize = "too weak")]
    TooWeak,
    #[strum(serialize = "too strong")]
    TooStrong,

    // Electromagnetism
    #[strum(serialize = "atoms unstable")]
    AtomsUnstable,
    #[strum(serialize = "orbits collapse")]
    OrbitsCollapse,

    // Strong force
    #[strum(serialize = "no nuclei")]
    NoNuclei,
    #[strum(serialize = "instant fusion")]
    InstantFusion,

    // Cosmological constant
    #[strum(serialize = "collapses early")]
    CollapsesEarly,
    #[strum(serialize = "expands too fast")]
    ExpandsTooFast,

    #[strum(serialize = "stable")]
    Stable,
    #[strum(serialize = "balanced")]
    Balanced,
}

impl AxisVerdict {
    /// Whether this verdict counts toward the viability score.
    #[inline(always)]
    pub fn is_favorable(&self) -> bool {
        matches!(self, Self::Stable | Self::Balanced)
    }

    pub fn severity(&self) -> Severity {
        match self {
            Self::Stable | Self::Balanced => Severity::Ok,
            // Early collapse is reported softly but still fails the axis.
            Self::CollapsesEarly => Severity::Warning,
            _ => Severity::Error,
        }
    }
}

pub fn classify_axis(axis: Axis, value: f64) -> AxisVerdict {
    match axis {
        Axis::Gravity => {
            if value < GRAVITY_TOO_WEAK {
                AxisVerdict::TooWeak
            } else if value > GRAVITY_TOO_STRONG {
                AxisVerdict::TooStrong
            } else {
                AxisVerdict::Stable
            }
        }
        Axis::Electromagnetism => {
            if value < ALPHA_ATOMS_UNSTABLE {
                AxisVerdict::AtomsUnstable
            } else if value > ALPHA_ORBITS_COLLAPSE {
                AxisVerdict::OrbitsCollapse
            } else {
                AxisVerdict::Stable
            }
        }
        Axis::StrongForce => {
            if value < STRONG_NO_NUCLEI {
                AxisVerdict::NoNuclei
            } else if value > STRONG_INSTANT_FUSION {
                AxisVerdict::InstantFusion
            } else {
                AxisVerdict::Stable
            }
        }
        Axis::CosmologicalConstant => {
            if value < LAMBDA_COLLAPSES_EARLY {
                AxisVerdict::CollapsesEarly
            } else if value > LAMBDA_EXPANDS_TOO_FAST {
                AxisVerdict::ExpandsTooFast
            } else {
                AxisVerdict::Balanced
            }
        }
    }
}

/// Classification of a derived score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CombinedVerdict {
    // Star formation
    #[strum(serialize = "insufficient star formation")]
    InsufficientStarFormation,
    #[strum(serialize = "stars burn out instantly")]
    StarsBurnOut,

    // Atomic bonding
    #[strum(serialize = "no stable atoms")]
    NoStableAtoms,
    #[strum(serialize = "extreme bonding")]
    ExtremeBonding,

    // Cosmic expansion
    #[strum(serialize = "premature collapse")]
    PrematureCollapse,
    #[strum(serialize = "runaway expansion")]
    RunawayExpansion,

    // Life potential
    #[strum(serialize = "may support life")]
    MaySupportLife,
    #[strum(serialize = "unlikely")]
    Unlikely,

    #[strum(serialize = "stable")]
    Stable,
    #[strum(serialize = "balanced")]
    Balanced,
}

impl CombinedVerdict {
    pub fn severity(&self) -> Severity {
        match self {
            Self::Stable | Self::Balanced | Self::MaySupportLife => Severity::Ok,
            Self::ExtremeBonding | Self::Unlikely => Severity::Warning,
            _ => Severity::Error,
        }
    }
}

/// Which derived score a combined verdict was reached on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Effect {
    #[strum(serialize = "Star Formation & Stability")]
    StarFormation,
    #[strum(serialize = "Atomic & Chemical Stability")]
    AtomicStability,
    #[strum(serialize = "Cosmic Expansion Balance")]
    CosmicExpansion,
    #[strum(serialize = "Life Potential")]
    LifePotential,
}

pub fn classify_star(star_score: f64) -> CombinedVerdict {
    if star_score < STAR_INSUFFICIENT {
        CombinedVerdict::InsufficientStarFormation
    } else if star_score > STAR_BURNOUT {
        CombinedVerdict::StarsBurnOut
    } else {
        CombinedVerdict::Stable
    }
}

pub fn classify_atom(atom_score: f64) -> CombinedVerdict {
    if atom_score < ATOM_NO_STABLE {
        CombinedVerdict::NoStableAtoms
    } else if atom_score > ATOM_EXTREME_BONDING {
        CombinedVerdict::ExtremeBonding
    } else {
        CombinedVerdict::Stable
    }
}

pub fn classify_cosmos(cosmos_score: f64) -> CombinedVerdict {
    if cosmos_score < COSMOS_PREMATURE_COLLAPSE {
        CombinedVerdict::PrematureCollapse
    } else if cosmos_score > COSMOS_RUNAWAY {
        CombinedVerdict::RunawayExpansion
    } else {
        CombinedVerdict::Balanced
    }
}

#[inline(always)]
pub fn is_life_permitting(life_score: f64) -> bool {
    life_score > LIFE_LOWER && life_score < LIFE_UPPER
}

pub fn classify_life(life_score: f64) -> CombinedVerdict {
    if is_life_permitting(life_score) {
        CombinedVerdict::MaySupportLife
    } else {
        CombinedVerdict::Unlikely
    }
}

/// Overall label keyed by how many axes are favorable.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter, Display, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ViabilityLabel {
    #[strum(serialize = "Completely Inhospitable")]
    CompletelyInhospitable,
    #[strum(serialize = "Hostile")]
    Hostile,
    #[strum(serialize = "Highly Unstable")]
    HighlyUnstable,
    #[strum(serialize = "Marginally Habitable")]
    MarginallyHabitable,
    #[strum(serialize = "Life-Permitting")]
    LifePermitting,
}

impl ViabilityLabel {
    pub fn from_score(score: u8) -> Self {
        match score {
            0 => Self::CompletelyInhospitable,
            1 => Self::Hostile,
            2 => Self::HighlyUnstable,
            3 => Self::MarginallyHabitable,
            _ => Self::LifePermitting,
        }
    }

    pub fn score(&self) -> u8 {
        *self as u8
    }

    pub fn indicator(&self) -> &'static str {
        match self {
            Self::LifePermitting => "🟢",
            Self::MarginallyHabitable => "🟡",
            Self::HighlyUnstable => "🟠",
            Self::Hostile => "🔴",
            Self::CompletelyInhospitable => "💀",
        }
    }
}
