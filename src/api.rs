use crate::config::{Axis, PhysicalConstants, SweepParams};
use crate::error::FtResult;
use crate::reference::{self, ReferenceConstant};
use crate::scorer::{self, explain, Evaluation, Severity};
use crate::sweep::{self, SweepGrid};
use serde::Serialize;
use tracing::{info, warn};

/// Human-readable line for one verdict, ready to render as a coloured box.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VerdictMessage {
    pub title: String,
    pub verdict: String,
    pub severity: Severity,
    pub message: &'static str,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AxisComparison {
    pub axis: Axis,
    pub value: f64,
    pub reality: f64,
    pub deviation: f64,
    pub detail: &'static str,
    pub reference: ReferenceConstant,
}

/// Everything a presentation layer needs for one render.
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UniverseReport {
    pub evaluation: Evaluation,
    pub headline: String,
    pub axis_messages: Vec<VerdictMessage>,
    pub combined_messages: Vec<VerdictMessage>,
    pub narrative: Vec<&'static str>,
    pub comparison: Vec<AxisComparison>,
    pub sweep: SweepGrid,
}

/// Service: score the constants and build the (G, Λ) heatmap for them.
pub fn render_state(
    constants: &PhysicalConstants,
    params: &SweepParams,
) -> FtResult<UniverseReport> {
    let evaluation = scorer::evaluate(constants)?;
    let grid = sweep::sweep_with(constants.electromagnetic, constants.strong_force, params)?;

    info!(
        "API: {} | life score {:.3}",
        explain::headline(&evaluation),
        evaluation.scores.life_score
    );

    let axis_messages: Vec<VerdictMessage> = evaluation
        .axis_verdicts
        .iter()
        .map(|a| VerdictMessage {
            title: a.axis.to_string(),
            verdict: a.verdict.to_string(),
            severity: a.verdict.severity(),
            message: explain::axis_message(a.axis, a.verdict),
        })
        .collect();

    let combined_messages: Vec<VerdictMessage> = evaluation
        .combined
        .entries()
        .iter()
        .map(|&(effect, v)| VerdictMessage {
            title: effect.to_string(),
            verdict: v.to_string(),
            severity: v.severity(),
            message: explain::combined_message(effect, v),
        })
        .collect();

    for m in axis_messages.iter().chain(&combined_messages) {
        if m.severity == Severity::Warning {
            warn!("API: {} -> {}", m.title, m.verdict);
        }
    }

    let comparison = constants
        .axes()
        .iter()
        .map(|&(axis, value)| AxisComparison {
            axis,
            value,
            reality: PhysicalConstants::REALITY.get(axis),
            deviation: constants.deviation(axis),
            detail: explain::axis_detail(axis),
            reference: *reference::reference_for(axis),
        })
        .collect();

    Ok(UniverseReport {
        headline: explain::headline(&evaluation),
        narrative: explain::narrative(&evaluation.scores),
        axis_messages,
        combined_messages,
        comparison,
        evaluation,
        sweep: grid,
    })
}

/// Service: same as `render_state`, encoded as JSON.
pub fn render_state_json(constants: &PhysicalConstants, params: &SweepParams) -> FtResult<String> {
    let report = render_state(constants, params)?;
    Ok(serde_json::to_string_pretty(&report)?)
}
