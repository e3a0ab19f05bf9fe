//! Two-dimensional sensitivity sweep of `life_score` over (G, Λ).

use crate::config::{check_axis, Axis, PhysicalConstants, SweepParams};
use crate::error::FtResult;
use crate::scorer::{physics, verdicts};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::debug;

/// Evenly spaced samples over `[start, end]`, both endpoints included.
/// A single sample yields `start`.
pub fn linspace(start: f64, end: f64, samples: usize) -> Vec<f64> {
    match samples {
        0 => Vec::new(),
        1 => vec![start],
        n => {
            let step = (end - start) / (n - 1) as f64;
            let mut out: Vec<f64> = (0..n).map(|i| start + i as f64 * step).collect();
            out[n - 1] = end;
            out
        }
    }
}

/// Row-major grid: row `i` is `g_samples[i]`, column `j` is `lambda_samples[j]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SweepGrid {
    pub alpha: f64,
    pub strong_force: f64,
    pub g_samples: Vec<f64>,
    pub lambda_samples: Vec<f64>,
    values: Vec<f64>,
}

#[derive(Serialize)]
struct CsvRow {
    g: f64,
    lambda: f64,
    life_score: f64,
}

impl SweepGrid {
    /// (rows, cols) = (G samples, Λ samples).
    pub fn shape(&self) -> (usize, usize) {
        (self.g_samples.len(), self.lambda_samples.len())
    }

    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        let (rows, cols) = self.shape();
        if i >= rows || j >= cols {
            return None;
        }
        Some(self.values[i * cols + j])
    }

    pub fn row(&self, i: usize) -> Option<&[f64]> {
        let cols = self.lambda_samples.len();
        self.values.get(i * cols..(i + 1) * cols)
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.values
            .chunks(self.lambda_samples.len())
            .map(|c| c.to_vec())
            .collect()
    }

    pub fn min(&self) -> f64 {
        self.values.iter().copied().fold(f64::INFINITY, f64::min)
    }

    pub fn max(&self) -> f64 {
        self.values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    /// Position and value of the highest cell. First occurrence wins on ties.
    pub fn argmax(&self) -> Option<(usize, usize, f64)> {
        let cols = self.lambda_samples.len();
        let mut best: Option<(usize, f64)> = None;
        for (idx, &v) in self.values.iter().enumerate() {
            let better = match best {
                None => true,
                Some((_, b)) => v > b,
            };
            if better {
                best = Some((idx, v));
            }
        }
        best.map(|(idx, v)| (idx / cols, idx % cols, v))
    }

    /// Share of cells where 0.5 < life_score < 5.0.
    pub fn habitable_fraction(&self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let hits = self
            .values
            .iter()
            .filter(|&&v| verdicts::is_life_permitting(v))
            .count();
        hits as f64 / self.values.len() as f64
    }

    /// Writes `g,lambda,life_score` rows, G-major.
    pub fn write_csv<W: Write>(&self, writer: W) -> FtResult<()> {
        let mut wtr = csv::Writer::from_writer(writer);
        for (i, &g) in self.g_samples.iter().enumerate() {
            for (j, &lambda) in self.lambda_samples.iter().enumerate() {
                wtr.serialize(CsvRow {
                    g,
                    lambda,
                    life_score: self.values[i * self.lambda_samples.len() + j],
                })?;
            }
        }
        wtr.flush()?;
        Ok(())
    }

    pub fn save_csv<P: AsRef<Path>>(&self, path: P) -> FtResult<()> {
        let file = File::create(path)?;
        self.write_csv(file)
    }
}

/// Standard 50×50 sweep over G ∈ [0.1, 10] and Λ ∈ [0.01, 2].
pub fn sweep(alpha: f64, strong_force: f64) -> FtResult<SweepGrid> {
    sweep_with(alpha, strong_force, &SweepParams::default())
}

pub fn sweep_with(alpha: f64, strong_force: f64, params: &SweepParams) -> FtResult<SweepGrid> {
    check_axis(Axis::Electromagnetism, alpha)?;
    check_axis(Axis::StrongForce, strong_force)?;
    params.validate()?;

    let g_samples = linspace(params.g_start, params.g_end, params.g_samples);
    let lambda_samples = linspace(params.lambda_start, params.lambda_end, params.lambda_samples);
    let cols = lambda_samples.len();

    debug!(
        "sweep: {}x{} grid, alpha={}, strong_force={}",
        g_samples.len(),
        cols,
        alpha,
        strong_force
    );

    let mut values = vec![0.0; g_samples.len() * cols];
    values
        .par_chunks_mut(cols)
        .zip(g_samples.par_iter())
        .for_each(|(row, &g)| {
            for (cell, &lambda) in row.iter_mut().zip(&lambda_samples) {
                let constants = PhysicalConstants::new(g, alpha, strong_force, lambda);
                *cell = physics::derived_scores(&constants).life_score;
            }
        });

    Ok(SweepGrid {
        alpha,
        strong_force,
        g_samples,
        lambda_samples,
        values,
    })
}
