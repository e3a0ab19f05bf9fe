use crate::config::PhysicalConstants;
use crate::consts::{ATOM_DENOM_OFFSET, COSMOS_DENOM_OFFSET};
use crate::scorer::types::DerivedScores;

/// Star formation & stability: gravity and fusion both shorten stellar life.
#[inline(always)]
pub fn star_score(gravity: f64, strong_force: f64) -> f64 {
    1.0 / (gravity * strong_force)
}

/// Atomic & chemical stability: EM binding against nuclear binding.
#[inline(always)]
pub fn atom_score(alpha: f64, strong_force: f64) -> f64 {
    alpha / (strong_force + ATOM_DENOM_OFFSET)
}

/// Cosmic expansion balance: gravitational pull against Λ.
#[inline(always)]
pub fn cosmos_score(gravity: f64, lambda: f64) -> f64 {
    gravity / (lambda + COSMOS_DENOM_OFFSET)
}

/// Geometric mean of the three ratios.
#[inline(always)]
pub fn life_score(star: f64, atom: f64, cosmos: f64) -> f64 {
    (star * atom * cosmos).powf(1.0 / 3.0)
}

/// Computes all derived scores. Assumes inputs are already in range; callers
/// that accept external input go through `scorer::evaluate`.
pub fn derived_scores(c: &PhysicalConstants) -> DerivedScores {
    let star = star_score(c.gravity, c.strong_force);
    let atom = atom_score(c.electromagnetic, c.strong_force);
    let cosmos = cosmos_score(c.gravity, c.cosmological_constant);

    DerivedScores {
        star_score: star,
        atom_score: atom,
        cosmos_score: cosmos,
        life_score: life_score(star, atom, cosmos),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reality_baseline_scores() {
        let s = derived_scores(&PhysicalConstants::REALITY);
        assert_eq!(s.star_score, 1.0);
        assert!((s.atom_score - 1.0 / 1.1).abs() < 1e-12);
        assert!((s.cosmos_score - 1.0 / 1.1).abs() < 1e-12);
        // cube root of (1/1.1)^2
        assert!((s.life_score - 0.938_403).abs() < 1e-5);
    }

    #[test]
    fn test_life_score_is_product_root() {
        let life = life_score(2.0, 4.0, 1.0);
        assert!((life - 2.0).abs() < 1e-12);
    }
}
