mod heatmap;

pub use heatmap::{print_heatmap, print_sweep_summary};

use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use finetune::config::{Axis, PhysicalConstants};
use finetune::reference::REFERENCE_CONSTANTS;
use finetune::scorer::{explain, Evaluation, Severity};
use finetune::sim::Snapshot;
use strum::IntoEnumIterator;

fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Ok => Color::Green,
        Severity::Warning => Color::Yellow,
        Severity::Error => Color::Red,
    }
}

fn severity_mark(severity: Severity) -> &'static str {
    match severity {
        Severity::Ok => "✅",
        Severity::Warning => "⚠️",
        Severity::Error => "❌",
    }
}

pub fn print_axis_report(eval: &Evaluation) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Constant").add_attribute(Attribute::Bold),
        Cell::new("Value"),
        Cell::new("Verdict"),
        Cell::new("Effect"),
    ]);
    if let Some(col) = table.column_mut(1) {
        col.set_cell_alignment(CellAlignment::Right);
    }

    for a in &eval.axis_verdicts {
        let sev = a.verdict.severity();
        table.add_row(vec![
            Cell::new(a.axis.to_string()).add_attribute(Attribute::Bold),
            Cell::new(format!("{:.2}", a.value)),
            Cell::new(format!("{} {}", severity_mark(sev), a.verdict)).fg(severity_color(sev)),
            Cell::new(explain::axis_message(a.axis, a.verdict)),
        ]);
    }
    println!("\n{}", table);
}

/// "How far from home": each axis against the value in our universe.
pub fn print_comparison_report(constants: &PhysicalConstants) {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    table.set_header(vec![
        Cell::new("Constant").add_attribute(Attribute::Bold),
        Cell::new("Real Universe"),
        Cell::new("Your Universe").fg(Color::Cyan),
        Cell::new("Δ"),
    ]);
    for i in 1..=3 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for axis in Axis::iter() {
        let delta = constants.deviation(axis);
        table.add_row(vec![
            Cell::new(axis.to_string()),
            Cell::new(format!("{:.2}", PhysicalConstants::REALITY.get(axis))),
            Cell::new(format!("{:.2}", constants.get(axis))).fg(Color::Cyan),
            Cell::new(format!("{:+.2}", delta)),
        ]);
    }
    println!("\n📊 How Far From Home?\n{}", table);
}

pub fn print_combined_report(eval: &Evaluation) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Interdependent Effect").add_attribute(Attribute::Bold),
        Cell::new("Score"),
        Cell::new("Verdict"),
        Cell::new("Meaning"),
    ]);
    if let Some(col) = table.column_mut(1) {
        col.set_cell_alignment(CellAlignment::Right);
    }

    let s = &eval.scores;
    let marks = ["⭐", "🧪", "🌠", "🌱"];
    let scores = [s.star_score, s.atom_score, s.cosmos_score, s.life_score];

    let rows = marks.iter().zip(scores).zip(eval.combined.entries());

    for ((mark, score), (effect, verdict)) in rows {
        let sev = verdict.severity();
        table.add_row(vec![
            Cell::new(format!("{} {}", mark, effect)),
            Cell::new(format!("{:.3}", score)),
            Cell::new(format!("{} {}", severity_mark(sev), verdict)).fg(severity_color(sev)),
            Cell::new(explain::combined_message(effect, verdict)),
        ]);
    }
    println!("\n🔎 Interdependent Effects\n{}", table);
}

pub fn print_reference_table() {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Constant").add_attribute(Attribute::Bold),
        Cell::new("Value"),
        Cell::new("Significance"),
    ]);

    for r in &REFERENCE_CONSTANTS {
        table.add_row(vec![
            Cell::new(r.name).add_attribute(Attribute::Bold),
            Cell::new(r.value),
            Cell::new(r.significance),
        ]);
    }
    println!("\n📏 Real-World Physical Constants\n{}", table);
    println!("Sliders use relative values: 1.0 equals our universe's actual constants.");
}

/// Horizontal bars of -log10(precision), scaled to fit the terminal.
pub fn print_precision_chart() {
    const WIDTH: f64 = 40.0;
    let max = REFERENCE_CONSTANTS
        .iter()
        .map(|r| r.log_precision())
        .fold(0.0f64, f64::max);

    let mut table = Table::new();
    table.load_preset(ASCII_FULL);
    table.set_header(vec!["Constant", "Precision (log scale)", "Viable Range"]);

    for r in &REFERENCE_CONSTANTS {
        let len = if max > 0.0 {
            (r.log_precision() / max * WIDTH).round() as usize
        } else {
            0
        };
        table.add_row(vec![
            Cell::new(r.name),
            Cell::new(format!("{} {:.1}", "█".repeat(len), r.log_precision())),
            Cell::new(r.viable_range),
        ]);
    }
    println!("\n📊 Fine-Tuning Precision\n{}", table);
}

pub fn print_simulation_report(snapshots: &[Snapshot]) {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    table.set_header(vec![
        Cell::new("Frame").add_attribute(Attribute::Bold),
        Cell::new("Age"),
        Cell::new("Particles"),
        Cell::new("Stars").fg(Color::Yellow),
        Cell::new("Black Holes").fg(Color::Magenta),
        Cell::new("Formed"),
        Cell::new("Galaxy"),
        Cell::new("State"),
    ]);
    for i in 0..=5 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for s in snapshots {
        table.add_row(vec![
            Cell::new(s.frame),
            Cell::new(format!("{:.0}", s.age)),
            Cell::new(s.particles),
            Cell::new(s.stars).fg(Color::Yellow),
            Cell::new(s.black_holes).fg(Color::Magenta),
            Cell::new(s.stars_formed),
            Cell::new(if s.galaxy_formed { "yes" } else { "no" }),
            Cell::new(s.state.to_string()),
        ]);
    }
    println!("\n⚛️  Universe Simulation\n{}", table);
}
