use crate::config::PhysicalConstants;
use crate::consts::*;
use std::f64::consts::TAU;
use std::ops::{Add, AddAssign, Mul, Sub};

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn from_angle(angle: f64) -> Self {
        Self::new(angle.cos(), angle.sin())
    }

    #[inline(always)]
    pub fn mag(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    pub fn normalized(&self) -> Self {
        let m = self.mag();
        if m > 0.0 {
            *self * (1.0 / m)
        } else {
            Self::ZERO
        }
    }

    pub fn limit(&self, max: f64) -> Self {
        if self.mag() > max {
            self.normalized() * max
        } else {
            *self
        }
    }
}

impl Add for Vec2 {
    type Output = Self;
    fn add(self, o: Self) -> Self {
        Self::new(self.x + o.x, self.y + o.y)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, o: Self) {
        self.x += o.x;
        self.y += o.y;
    }
}

impl Sub for Vec2 {
    type Output = Self;
    fn sub(self, o: Self) -> Self {
        Self::new(self.x - o.x, self.y - o.y)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Self;
    fn mul(self, s: f64) -> Self {
        Self::new(self.x * s, self.y * s)
    }
}

/// How matter behaves under the current α and strong force.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatterPhase {
    /// Chemistry works; matter slowly condenses into stars.
    Stable,
    /// Exotic bonding; stars ignite faster.
    Extreme,
    /// No nuclei or no atoms; matter disintegrates.
    Unstable,
}

impl MatterPhase {
    pub fn from_constants(c: &PhysicalConstants) -> Self {
        if c.strong_force < STRONG_NO_NUCLEI || c.electromagnetic < ALPHA_ATOMS_UNSTABLE {
            Self::Unstable
        } else if c.strong_force > STRONG_INSTANT_FUSION || c.electromagnetic > ALPHA_ORBITS_COLLAPSE
        {
            Self::Extreme
        } else {
            Self::Stable
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticleKind {
    Matter,
    /// Short-lived fragment from a disintegration or supernova.
    Debris,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub acc: Vec2,
    pub mass: f64,
    pub lifespan: f64,
    pub kind: ParticleKind,
}

impl Particle {
    pub fn random(rng: &mut fastrand::Rng) -> Self {
        let x = rng.f64() * SIM_WIDTH;
        let y = rng.f64() * SIM_HEIGHT;
        Self::at(rng, Vec2::new(x, y))
    }

    pub fn at(rng: &mut fastrand::Rng, pos: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::new(range(rng, -0.5, 0.5), range(rng, -0.5, 0.5)),
            acc: Vec2::ZERO,
            mass: range(rng, 0.5, 1.5),
            lifespan: 1000.0,
            kind: ParticleKind::Matter,
        }
    }

    pub fn debris(rng: &mut fastrand::Rng, pos: Vec2) -> Self {
        let dir = Vec2::from_angle(rng.f64() * TAU);
        Self {
            pos,
            vel: dir * range(rng, 1.0, 3.0),
            acc: Vec2::ZERO,
            mass: range(rng, 0.5, 1.5),
            lifespan: range(rng, 20.0, 60.0),
            kind: ParticleKind::Debris,
        }
    }

    #[inline(always)]
    pub fn apply_force(&mut self, force: Vec2) {
        self.acc += force * (1.0 / self.mass);
    }

    /// Newtonian pull toward `other`, distance clamped to [10, 1000].
    pub fn attraction(&self, other_pos: Vec2, other_mass: f64, gravity: f64) -> Vec2 {
        let delta = other_pos - self.pos;
        let distance = delta.mag().clamp(10.0, 1000.0);
        let strength = (gravity * self.mass * other_mass) / (distance * distance);
        delta.normalized() * strength
    }

    /// Outward push from the canvas centre, growing with universe age.
    pub fn expansion(&self, lambda: f64, age: f64) -> Vec2 {
        let center = Vec2::new(SIM_WIDTH / 2.0, SIM_HEIGHT / 2.0);
        let delta = self.pos - center;
        if delta.mag() < 1.0 {
            return Vec2::ZERO;
        }
        delta.normalized() * (lambda * 0.02 * (1.0 + age / 1000.0))
    }

    pub fn integrate(&mut self) {
        match self.kind {
            ParticleKind::Matter => {
                self.vel = (self.vel + self.acc).limit(SIM_MAX_SPEED);
                self.pos += self.vel;
                self.acc = Vec2::ZERO;
                self.wrap();
            }
            ParticleKind::Debris => {
                self.pos += self.vel;
            }
        }
        self.lifespan -= 1.0;
    }

    fn wrap(&mut self) {
        if self.pos.x < 0.0 {
            self.pos.x = SIM_WIDTH;
        }
        if self.pos.x > SIM_WIDTH {
            self.pos.x = 0.0;
        }
        if self.pos.y < 0.0 {
            self.pos.y = SIM_HEIGHT;
        }
        if self.pos.y > SIM_HEIGHT {
            self.pos.y = 0.0;
        }
    }

    #[inline(always)]
    pub fn is_dead(&self) -> bool {
        self.lifespan <= 0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StarKind {
    Star,
    BlackHole,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    pub pos: Vec2,
    pub mass: f64,
    pub lifespan: f64,
    pub kind: StarKind,
}

impl Star {
    pub fn new(rng: &mut fastrand::Rng, pos: Vec2) -> Self {
        Self {
            pos,
            mass: range(rng, 3.0, 8.0),
            lifespan: range(rng, 500.0, 2000.0),
            kind: StarKind::Star,
        }
    }

    pub fn black_hole(pos: Vec2) -> Self {
        Self {
            pos,
            mass: 10.0,
            lifespan: 5000.0,
            kind: StarKind::BlackHole,
        }
    }

    /// Stars burn faster under stronger gravity and fusion; black holes evaporate.
    pub fn age(&mut self, c: &PhysicalConstants) {
        match self.kind {
            StarKind::Star => self.lifespan -= c.gravity * c.strong_force,
            StarKind::BlackHole => self.lifespan -= 1.0,
        }
    }

    #[inline(always)]
    pub fn is_dead(&self) -> bool {
        self.lifespan <= 0.0
    }
}

#[inline(always)]
fn range(rng: &mut fastrand::Rng, lo: f64, hi: f64) -> f64 {
    lo + rng.f64() * (hi - lo)
}
