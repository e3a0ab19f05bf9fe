use comfy_table::presets::ASCII_FULL;
use comfy_table::{Cell, CellAlignment, Table};
use finetune::sweep::SweepGrid;

const RAMP: &[u8] = b" .:-=+*#%@";

fn glyph(value: f64, min: f64, max: f64) -> char {
    let span = max - min;
    let t = if span > 0.0 { (value - min) / span } else { 0.5 };
    let idx = (t * (RAMP.len() - 1) as f64).round() as usize;
    RAMP[idx.min(RAMP.len() - 1)] as char
}

/// Life Potential across G (rows, high G on top) and Λ (columns).
pub fn print_heatmap(grid: &SweepGrid) {
    let (rows, _) = grid.shape();
    let (min, max) = (grid.min(), grid.max());

    println!("\n📈 Life Potential Across G and Λ");
    println!(
        "   α = {:.2}, strong = {:.2}   ('{}' = {:.3} .. '{}' = {:.3})",
        grid.alpha,
        grid.strong_force,
        RAMP[0] as char,
        min,
        RAMP[RAMP.len() - 1] as char,
        max
    );

    for i in (0..rows).rev() {
        let Some(row) = grid.row(i) else { continue };
        let line: String = row.iter().map(|&v| glyph(v, min, max)).collect();
        println!("{:>6.2} |{}|", grid.g_samples[i], line);
    }

    if let (Some(first), Some(last)) = (grid.lambda_samples.first(), grid.lambda_samples.last()) {
        println!("   G / Λ {:<.2} .. {:.2}", first, last);
    }
}

pub fn print_sweep_summary(grid: &SweepGrid) {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    let (rows, cols) = grid.shape();
    let mut add = |k: &str, v: String| {
        table.add_row(vec![
            Cell::new(k),
            Cell::new(v).set_alignment(CellAlignment::Right),
        ]);
    };

    add("Grid", format!("{} x {}", rows, cols));
    add("Min Life Score", format!("{:.4}", grid.min()));
    add("Max Life Score", format!("{:.4}", grid.max()));
    if let Some((i, j, v)) = grid.argmax() {
        add(
            "Peak At",
            format!(
                "G={:.2}, Λ={:.2} ({:.4})",
                grid.g_samples[i], grid.lambda_samples[j], v
            ),
        );
    }
    add(
        "Habitable Share",
        format!("{:.1}%", grid.habitable_fraction() * 100.0),
    );
    println!("{}", table);
}
