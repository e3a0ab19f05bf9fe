//! Headless toy universe. Purely illustrative: the forces are qualitative
//! and only the constant-driven trends are meant to be visible.

pub mod bodies;

use self::bodies::{MatterPhase, Particle, ParticleKind, Star, StarKind, Vec2};
use crate::config::PhysicalConstants;
use crate::consts::*;
use crate::error::FtResult;
use serde::Serialize;
use std::f64::consts::TAU;
use strum_macros::Display;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UniverseState {
    #[strum(serialize = "Big Bang Phase")]
    BigBang,
    #[strum(serialize = "Rapid Expansion - Particles Too Dispersed")]
    RapidExpansion,
    #[strum(serialize = "Gravity Too Weak - No Structure Formation")]
    GravityTooWeak,
    #[strum(serialize = "Gravity Too Strong - Rapid Collapse")]
    GravityTooStrong,
    #[strum(serialize = "Unstable Matter - Chemistry Impossible")]
    UnstableMatter,
    #[strum(serialize = "Stable Universe - Life Permitting")]
    LifePermitting,
    #[strum(serialize = "Universe Evolving...")]
    Evolving,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub frame: u64,
    pub age: f64,
    pub particles: usize,
    pub stars: usize,
    pub black_holes: usize,
    pub stars_formed: usize,
    pub galaxy_formed: bool,
    pub state: UniverseState,
}

pub struct Universe {
    pub constants: PhysicalConstants,
    pub particles: Vec<Particle>,
    pub stars: Vec<Star>,
    pub age: f64,
    pub frame: u64,
    pub stars_formed: usize,
    pub galaxy_formed: bool,
    phase: MatterPhase,
    rng: fastrand::Rng,
}

impl Universe {
    pub fn new(constants: PhysicalConstants, seed: Option<u64>) -> FtResult<Self> {
        constants.validate()?;

        let mut rng = if let Some(s) = seed {
            fastrand::Rng::with_seed(s)
        } else {
            fastrand::Rng::new()
        };

        let mut particles = Vec::with_capacity(SIM_INITIAL_PARTICLES + SIM_BIG_BANG_PARTICLES);
        for _ in 0..SIM_INITIAL_PARTICLES {
            particles.push(Particle::random(&mut rng));
        }

        // Dense cluster at the centre for the big bang
        let center = Vec2::new(SIM_WIDTH / 2.0, SIM_HEIGHT / 2.0);
        for _ in 0..SIM_BIG_BANG_PARTICLES {
            let offset = Vec2::from_angle(rng.f64() * TAU) * (rng.f64() * SIM_BIG_BANG_RADIUS);
            particles.push(Particle::at(&mut rng, center + offset));
        }

        Ok(Self {
            constants,
            particles,
            stars: Vec::new(),
            age: 0.0,
            frame: 0,
            stars_formed: 0,
            galaxy_formed: false,
            phase: MatterPhase::from_constants(&constants),
            rng,
        })
    }

    pub fn phase(&self) -> MatterPhase {
        self.phase
    }

    pub fn step(&mut self) {
        let c = self.constants;
        self.frame += 1;
        self.age += SIM_AGE_PER_STEP;

        if self.stars.len() > 5
            && !self.galaxy_formed
            && c.gravity >= GRAVITY_TOO_WEAK
            && c.gravity <= GRAVITY_TOO_STRONG
        {
            self.galaxy_formed = true;
        }

        self.apply_forces();
        self.update_stars();
        self.update_particles();

        if self.particles.len() < SIM_MIN_POPULATION && self.frame % SIM_RESPAWN_INTERVAL == 0 {
            let p = Particle::random(&mut self.rng);
            self.particles.push(p);
        }
    }

    pub fn run(&mut self, steps: usize) -> Snapshot {
        for _ in 0..steps {
            self.step();
        }
        let snap = self.snapshot();
        debug!(
            "sim: frame={} particles={} stars={} state={}",
            snap.frame, snap.particles, snap.stars, snap.state
        );
        snap
    }

    fn apply_forces(&mut self) {
        let c = self.constants;
        let forces: Vec<Vec2> = self
            .particles
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let mut f = p.expansion(c.cosmological_constant, self.age);

                for s in &self.stars {
                    let pull = p.attraction(s.pos, s.mass, c.gravity);
                    f += match s.kind {
                        StarKind::BlackHole => pull * 3.0,
                        StarKind::Star => pull,
                    };
                }

                // Sampled particle-particle gravity
                if i % 10 == 0 {
                    for (j, other) in self.particles.iter().enumerate().step_by(10) {
                        if i != j {
                            f += p.attraction(other.pos, other.mass, c.gravity);
                        }
                    }
                }
                f
            })
            .collect();

        for (p, f) in self.particles.iter_mut().zip(forces) {
            p.apply_force(f);
        }
    }

    fn update_stars(&mut self) {
        let c = self.constants;
        let mut remnants = Vec::new();
        let mut debris = Vec::new();

        for s in self.stars.iter_mut() {
            s.age(&c);
            if s.is_dead() && s.kind == StarKind::Star {
                // Supernova
                for _ in 0..20 {
                    debris.push(Particle::debris(&mut self.rng, s.pos));
                }
                if c.gravity > 2.0 && self.rng.f64() < 0.3 {
                    remnants.push(Star::black_hole(s.pos));
                }
            }
        }

        self.stars.retain(|s| !s.is_dead());
        self.stars.extend(remnants);
        self.particles.extend(debris);
    }

    fn update_particles(&mut self) {
        let c = self.constants;
        let stable_gravity = c.gravity > GRAVITY_TOO_WEAK && c.gravity < GRAVITY_TOO_STRONG;
        let mut spawned = Vec::new();

        for p in self.particles.iter_mut() {
            p.integrate();
            if p.kind == ParticleKind::Debris || p.is_dead() {
                continue;
            }

            let roll = self.rng.f64();
            match self.phase {
                MatterPhase::Unstable => {
                    if roll < 0.01 {
                        p.lifespan = 0.0;
                        for _ in 0..5 {
                            spawned.push(Particle::debris(&mut self.rng, p.pos));
                        }
                    }
                }
                MatterPhase::Extreme | MatterPhase::Stable => {
                    let (chance, cap) = if self.phase == MatterPhase::Extreme {
                        (0.005, 15)
                    } else {
                        (0.002, 20)
                    };
                    if roll < chance && self.stars.len() < cap && stable_gravity {
                        self.stars.push(Star::new(&mut self.rng, p.pos));
                        self.stars_formed += 1;
                        p.lifespan = 0.0;
                    }
                }
            }
        }

        self.particles.retain(|p| !p.is_dead());
        self.particles.extend(spawned);
    }

    pub fn state(&self) -> UniverseState {
        let c = &self.constants;
        if self.age < SIM_BIG_BANG_AGE {
            UniverseState::BigBang
        } else if c.cosmological_constant > LAMBDA_EXPANDS_TOO_FAST {
            UniverseState::RapidExpansion
        } else if c.gravity < GRAVITY_TOO_WEAK {
            UniverseState::GravityTooWeak
        } else if c.gravity > GRAVITY_TOO_STRONG {
            UniverseState::GravityTooStrong
        } else if self.phase == MatterPhase::Unstable {
            UniverseState::UnstableMatter
        } else if self.stars_formed > 10 && self.galaxy_formed {
            UniverseState::LifePermitting
        } else {
            UniverseState::Evolving
        }
    }

    /// Constant-driven causes behind the current state.
    pub fn explanation(&self) -> Vec<&'static str> {
        let c = &self.constants;
        let mut lines = Vec::new();

        if c.gravity < GRAVITY_TOO_WEAK {
            lines.push("Low gravity prevents matter from clumping to form stars.");
        } else if c.gravity > GRAVITY_TOO_STRONG {
            lines.push("Extreme gravity causes rapid collapse of structures.");
        }
        if c.cosmological_constant > LAMBDA_EXPANDS_TOO_FAST {
            lines.push("High cosmological constant causes universe to expand too quickly.");
        }
        if c.strong_force < STRONG_NO_NUCLEI {
            lines.push("Weak nuclear force prevents stable atomic nuclei.");
        } else if c.strong_force > STRONG_INSTANT_FUSION {
            lines.push("Strong nuclear force causes rapid fusion and unstable stars.");
        }
        if c.electromagnetic < ALPHA_ATOMS_UNSTABLE {
            lines.push("Weak electromagnetic force prevents stable atoms.");
        } else if c.electromagnetic > ALPHA_ORBITS_COLLAPSE {
            lines.push("Strong electromagnetic force causes electron orbits to collapse.");
        }
        lines
    }

    pub fn snapshot(&self) -> Snapshot {
        let black_holes = self
            .stars
            .iter()
            .filter(|s| s.kind == StarKind::BlackHole)
            .count();
        Snapshot {
            frame: self.frame,
            age: self.age,
            particles: self.particles.len(),
            stars: self.stars.len() - black_holes,
            black_holes,
            stars_formed: self.stars_formed,
            galaxy_formed: self.galaxy_formed,
            state: self.state(),
        }
    }
}
