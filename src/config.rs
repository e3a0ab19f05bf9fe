use crate::consts::*;
use crate::error::{FinetuneError, FtResult};
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use strum_macros::{Display, EnumIter};

/// The four tunable constants, in the order every table and report uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Axis {
    #[strum(serialize = "Gravity (G)")]
    Gravity,
    #[strum(serialize = "Electromagnetism (α)")]
    Electromagnetism,
    #[strum(serialize = "Strong Force")]
    StrongForce,
    #[strum(serialize = "Cosmological Const. (Λ)")]
    CosmologicalConstant,
}

impl Axis {
    pub fn range(&self) -> ParamRange {
        match self {
            Self::Gravity => ParamRange::new(GRAVITY_MIN, GRAVITY_MAX),
            Self::Electromagnetism => ParamRange::new(ALPHA_MIN, ALPHA_MAX),
            Self::StrongForce => ParamRange::new(STRONG_FORCE_MIN, STRONG_FORCE_MAX),
            Self::CosmologicalConstant => ParamRange::new(LAMBDA_MIN, LAMBDA_MAX),
        }
    }
}

/// Closed interval of admissible values for one axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParamRange {
    pub min: f64,
    pub max: f64,
}

impl ParamRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    #[inline(always)]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.min;
        }
        value.clamp(self.min, self.max)
    }
}

#[derive(Args, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PhysicalConstants {
    /// Gravitational constant G, relative to our universe
    #[arg(short = 'g', long, default_value_t = 1.0)]
    pub gravity: f64,

    /// Electromagnetic coupling α, relative to our universe
    #[arg(short = 'a', long = "alpha", default_value_t = 1.0)]
    pub electromagnetic: f64,

    /// Strong nuclear force coupling, relative to our universe
    #[arg(short = 's', long, default_value_t = 1.0)]
    pub strong_force: f64,

    /// Cosmological constant Λ, relative to our universe
    #[arg(short = 'l', long = "lambda", default_value_t = 1.0)]
    pub cosmological_constant: f64,
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        Self::REALITY
    }
}

impl PhysicalConstants {
    pub const REALITY: Self = Self {
        gravity: REALITY_BASELINE,
        electromagnetic: REALITY_BASELINE,
        strong_force: REALITY_BASELINE,
        cosmological_constant: REALITY_BASELINE,
    };

    pub fn new(gravity: f64, electromagnetic: f64, strong_force: f64, lambda: f64) -> Self {
        Self {
            gravity,
            electromagnetic,
            strong_force,
            cosmological_constant: lambda,
        }
    }

    pub fn get(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Gravity => self.gravity,
            Axis::Electromagnetism => self.electromagnetic,
            Axis::StrongForce => self.strong_force,
            Axis::CosmologicalConstant => self.cosmological_constant,
        }
    }

    /// Signed distance of one axis from the value it has in our universe.
    pub fn deviation(&self, axis: Axis) -> f64 {
        self.get(axis) - REALITY_BASELINE
    }

    /// Rejects NaN and anything outside the documented per-axis range.
    pub fn validate(&self) -> FtResult<()> {
        for (axis, value) in self.axes() {
            check_axis(axis, value)?;
        }
        Ok(())
    }

    /// Pulls every axis into its range, the way a slider would.
    pub fn clamped(&self) -> Self {
        Self {
            gravity: Axis::Gravity.range().clamp(self.gravity),
            electromagnetic: Axis::Electromagnetism.range().clamp(self.electromagnetic),
            strong_force: Axis::StrongForce.range().clamp(self.strong_force),
            cosmological_constant: Axis::CosmologicalConstant
                .range()
                .clamp(self.cosmological_constant),
        }
    }

    pub fn axes(&self) -> [(Axis, f64); 4] {
        [
            (Axis::Gravity, self.gravity),
            (Axis::Electromagnetism, self.electromagnetic),
            (Axis::StrongForce, self.strong_force),
            (Axis::CosmologicalConstant, self.cosmological_constant),
        ]
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> FtResult<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Applies only the values the user typed on the command line.
    pub fn merge_from_cli(&mut self, cli: &PhysicalConstants, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($field:ident, $arg_name:expr) => {
                if matches.value_source($arg_name) == Some(ValueSource::CommandLine) {
                    self.$field = cli.$field;
                }
            };
        }

        update_if_present!(gravity, "gravity");
        update_if_present!(electromagnetic, "electromagnetic");
        update_if_present!(strong_force, "strong_force");
        update_if_present!(cosmological_constant, "cosmological_constant");
    }
}

#[derive(Args, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SweepParams {
    #[arg(long, default_value_t = SWEEP_SAMPLES)]
    pub g_samples: usize,
    #[arg(long, default_value_t = SWEEP_G_START)]
    pub g_start: f64,
    #[arg(long, default_value_t = SWEEP_G_END)]
    pub g_end: f64,

    #[arg(long, default_value_t = SWEEP_SAMPLES)]
    pub lambda_samples: usize,
    #[arg(long, default_value_t = SWEEP_LAMBDA_START)]
    pub lambda_start: f64,
    #[arg(long, default_value_t = SWEEP_LAMBDA_END)]
    pub lambda_end: f64,
}

impl Default for SweepParams {
    fn default() -> Self {
        Self {
            g_samples: SWEEP_SAMPLES,
            g_start: SWEEP_G_START,
            g_end: SWEEP_G_END,
            lambda_samples: SWEEP_SAMPLES,
            lambda_start: SWEEP_LAMBDA_START,
            lambda_end: SWEEP_LAMBDA_END,
        }
    }
}

impl SweepParams {
    pub const MAX_SAMPLES: usize = 4096;

    pub fn validate(&self) -> FtResult<()> {
        check_samples("g_samples", self.g_samples)?;
        check_samples("lambda_samples", self.lambda_samples)?;
        check_axis(Axis::Gravity, self.g_start)?;
        check_axis(Axis::Gravity, self.g_end)?;
        check_axis(Axis::CosmologicalConstant, self.lambda_start)?;
        check_axis(Axis::CosmologicalConstant, self.lambda_end)?;
        Ok(())
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> FtResult<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn merge_from_cli(&mut self, cli: &SweepParams, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($field:ident, $arg_name:expr) => {
                if matches.value_source($arg_name) == Some(ValueSource::CommandLine) {
                    self.$field = cli.$field;
                }
            };
        }

        update_if_present!(g_samples, "g_samples");
        update_if_present!(g_start, "g_start");
        update_if_present!(g_end, "g_end");
        update_if_present!(lambda_samples, "lambda_samples");
        update_if_present!(lambda_start, "lambda_start");
        update_if_present!(lambda_end, "lambda_end");
    }
}

fn check_samples(name: &str, samples: usize) -> FtResult<()> {
    if samples == 0 || samples > SweepParams::MAX_SAMPLES {
        return Err(FinetuneError::InvalidSweep(format!(
            "{} must be in 1..={}, got {}",
            name,
            SweepParams::MAX_SAMPLES,
            samples
        )));
    }
    Ok(())
}

pub(crate) fn check_axis(axis: Axis, value: f64) -> FtResult<()> {
    let range = axis.range();
    if !range.contains(value) {
        return Err(FinetuneError::InvalidInput {
            axis,
            value,
            min: range.min,
            max: range.max,
        });
    }
    Ok(())
}
