use crate::config::Axis;
use serde::Serialize;

/// Measured value of a constant in our universe and how finely tuned it is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceConstant {
    pub axis: Axis,
    pub name: &'static str,
    pub value: &'static str,
    pub significance: &'static str,
    pub viable_range: &'static str,
    /// Fractional tolerance before life becomes impossible.
    pub precision: f64,
}

impl ReferenceConstant {
    /// -log10(precision); zero for non-positive precision.
    pub fn log_precision(&self) -> f64 {
        if self.precision > 0.0 {
            -self.precision.log10()
        } else {
            0.0
        }
    }
}

pub const REFERENCE_CONSTANTS: [ReferenceConstant; 4] = [
    ReferenceConstant {
        axis: Axis::Gravity,
        name: "Gravitational Constant (G)",
        value: "6.674 × 10⁻¹¹ m³/kg·s²",
        significance: "Determines strength of gravity. If altered by just 1 part in 10³⁴, \
                       stars suitable for life couldn't exist.",
        viable_range: "±1 part in 10³⁴",
        precision: 1e-32,
    },
    ReferenceConstant {
        axis: Axis::Electromagnetism,
        name: "Fine Structure Constant (α)",
        value: "≈ 1/137 (0.007297)",
        significance: "Controls electromagnetic interactions. If changed by just 4%, \
                       stellar fusion would be impossible.",
        viable_range: "±1 part in 25",
        precision: 0.04,
    },
    ReferenceConstant {
        axis: Axis::StrongForce,
        name: "Strong Nuclear Force Coupling (αs)",
        value: "≈ 0.1181 at Z boson mass",
        significance: "Binds nuclei together. A 2% change would prevent stable elements \
                       needed for life.",
        viable_range: "±2%",
        precision: 0.02,
    },
    ReferenceConstant {
        axis: Axis::CosmologicalConstant,
        name: "Cosmological Constant (Λ)",
        value: "≈ 1.1056 × 10⁻⁵² m⁻²",
        significance: "Drives cosmic expansion. Fine-tuned to 1 part in 10¹²⁰, otherwise \
                       galaxies couldn't form.",
        viable_range: "±1 part in 10¹²⁰",
        precision: 1e-120,
    },
];

pub fn reference_for(axis: Axis) -> &'static ReferenceConstant {
    &REFERENCE_CONSTANTS[axis as usize]
}
