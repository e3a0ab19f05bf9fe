// === INPUT RANGES (relative units, 1.0 = our universe) ===
pub const GRAVITY_MIN: f64 = 0.1;
pub const GRAVITY_MAX: f64 = 10.0;
pub const ALPHA_MIN: f64 = 0.01;
pub const ALPHA_MAX: f64 = 2.0;
pub const STRONG_FORCE_MIN: f64 = 0.1;
pub const STRONG_FORCE_MAX: f64 = 10.0;
pub const LAMBDA_MIN: f64 = 0.0;
pub const LAMBDA_MAX: f64 = 2.0;

pub const REALITY_BASELINE: f64 = 1.0;

// === AXIS THRESHOLDS (raw inputs) ===
pub const GRAVITY_TOO_WEAK: f64 = 0.3;
pub const GRAVITY_TOO_STRONG: f64 = 3.0;
pub const ALPHA_ATOMS_UNSTABLE: f64 = 0.05;
pub const ALPHA_ORBITS_COLLAPSE: f64 = 1.5;
pub const STRONG_NO_NUCLEI: f64 = 0.3;
pub const STRONG_INSTANT_FUSION: f64 = 5.0;
pub const LAMBDA_COLLAPSES_EARLY: f64 = 0.01;
pub const LAMBDA_EXPANDS_TOO_FAST: f64 = 1.5;

// === DERIVED SCORE OFFSETS ===
pub const ATOM_DENOM_OFFSET: f64 = 0.1;
pub const COSMOS_DENOM_OFFSET: f64 = 0.1;

// === COMBINED THRESHOLDS (derived scores) ===
pub const STAR_INSUFFICIENT: f64 = 0.1;
pub const STAR_BURNOUT: f64 = 10.0;
pub const ATOM_NO_STABLE: f64 = 0.05;
pub const ATOM_EXTREME_BONDING: f64 = 5.0;
pub const COSMOS_PREMATURE_COLLAPSE: f64 = 0.2;
pub const COSMOS_RUNAWAY: f64 = 10.0;
pub const LIFE_LOWER: f64 = 0.5;
pub const LIFE_UPPER: f64 = 5.0;

// === SWEEP DEFAULTS ===
pub const SWEEP_SAMPLES: usize = 50;
pub const SWEEP_G_START: f64 = 0.1;
pub const SWEEP_G_END: f64 = 10.0;
pub const SWEEP_LAMBDA_START: f64 = 0.01;
pub const SWEEP_LAMBDA_END: f64 = 2.0;

// === SIMULATION ===
pub const SIM_WIDTH: f64 = 700.0;
pub const SIM_HEIGHT: f64 = 500.0;
pub const SIM_INITIAL_PARTICLES: usize = 80;
pub const SIM_BIG_BANG_PARTICLES: usize = 20;
pub const SIM_BIG_BANG_RADIUS: f64 = 50.0;
pub const SIM_AGE_PER_STEP: f64 = 0.2;
pub const SIM_BIG_BANG_AGE: f64 = 100.0;
pub const SIM_MIN_POPULATION: usize = 50;
pub const SIM_RESPAWN_INTERVAL: u64 = 30;
pub const SIM_MAX_SPEED: f64 = 5.0;
