use finetune::config::PhysicalConstants;
use finetune::sim::bodies::{MatterPhase, Particle, ParticleKind, Star, StarKind, Vec2};
use finetune::sim::{Universe, UniverseState};
use rstest::rstest;

fn universe(g: f64, alpha: f64, strong: f64, lambda: f64) -> Universe {
    Universe::new(PhysicalConstants::new(g, alpha, strong, lambda), Some(42))
        .expect("constants in range")
}

#[test]
fn test_initial_population() {
    let u = universe(1.0, 1.0, 1.0, 1.0);
    assert_eq!(u.particles.len(), 100);
    assert!(u.stars.is_empty());
    assert_eq!(u.state(), UniverseState::BigBang);
}

#[test]
fn test_seeded_runs_are_reproducible() {
    let mut a = universe(1.0, 1.0, 1.0, 1.0);
    let mut b = universe(1.0, 1.0, 1.0, 1.0);
    assert_eq!(a.run(400), b.run(400));
    assert_eq!(a.particles, b.particles);
}

#[test]
fn test_big_bang_phase_ends() {
    let mut u = universe(1.0, 1.0, 1.0, 1.0);
    u.run(10);
    assert_eq!(u.state(), UniverseState::BigBang);
    u.run(600);
    assert_ne!(u.state(), UniverseState::BigBang);
}

// State precedence after the big bang
#[rstest]
#[case(0.2, 1.0, 1.0, 1.8, UniverseState::RapidExpansion)] // Λ beats weak gravity
#[case(0.2, 1.0, 1.0, 1.0, UniverseState::GravityTooWeak)]
#[case(5.0, 1.0, 0.2, 1.0, UniverseState::GravityTooStrong)] // gravity beats matter
#[case(1.0, 1.0, 0.2, 1.0, UniverseState::UnstableMatter)]
#[case(1.0, 0.02, 1.0, 1.0, UniverseState::UnstableMatter)]
fn test_state_precedence(
    #[case] g: f64,
    #[case] alpha: f64,
    #[case] strong: f64,
    #[case] lambda: f64,
    #[case] expected: UniverseState,
) {
    let mut u = universe(g, alpha, strong, lambda);
    u.run(600);
    assert_eq!(u.state(), expected);
}

#[test]
fn test_weak_gravity_forms_no_stars() {
    let mut u = universe(0.2, 1.0, 1.0, 1.0);
    let snap = u.run(800);
    assert_eq!(snap.stars_formed, 0);
    assert!(!snap.galaxy_formed);
}

#[test]
fn test_reality_forms_galaxy_and_permits_life() {
    let mut u = universe(1.0, 1.0, 1.0, 1.0);
    let snap = u.run(4000);

    assert!(snap.stars_formed > 10, "only {} stars formed", snap.stars_formed);
    assert!(snap.galaxy_formed);
    assert_eq!(snap.state, UniverseState::LifePermitting);
    assert!(u.explanation().is_empty());
}

#[test]
fn test_strong_gravity_leaves_black_holes() {
    let mut u = universe(2.5, 1.0, 1.0, 1.0);
    let peak = (0..40).map(|_| u.run(100).black_holes).max().unwrap();
    assert!(peak > 0);
}

fn dying_star(pos: Vec2) -> Star {
    Star {
        pos,
        mass: 5.0,
        lifespan: 0.5,
        kind: StarKind::Star,
    }
}

fn debris_count(u: &Universe) -> usize {
    u.particles
        .iter()
        .filter(|p| p.kind == ParticleKind::Debris)
        .count()
}

#[test]
fn test_supernova_scatters_debris() {
    let mut u = universe(1.0, 1.0, 1.0, 1.0);
    u.stars.push(dying_star(Vec2::new(350.0, 250.0)));

    u.step();

    assert_eq!(debris_count(&u), 20);
    // G = 1.0 never leaves a remnant
    assert!(u.stars.iter().all(|s| s.kind != StarKind::BlackHole));
}

#[test]
fn test_supernovae_under_strong_gravity_leave_remnants() {
    let mut u = universe(2.5, 1.0, 1.0, 1.0);
    for i in 0..30 {
        u.stars.push(dying_star(Vec2::new(10.0 * i as f64, 100.0)));
    }

    u.step();

    assert_eq!(debris_count(&u), 30 * 20);
    let holes: Vec<&Star> = u
        .stars
        .iter()
        .filter(|s| s.kind == StarKind::BlackHole)
        .collect();
    assert!(!holes.is_empty());
    assert!(holes.iter().all(|s| s.mass == 10.0 && s.lifespan == 5000.0));
}

#[test]
fn test_population_topped_up_every_30_frames() {
    // G below 0.3 keeps particles from turning into stars
    let mut u = universe(0.2, 1.0, 1.0, 1.0);
    u.particles.clear();

    u.run(29);
    assert!(u.particles.is_empty());
    u.run(1);
    assert_eq!(u.particles.len(), 1);
    u.run(30);
    assert_eq!(u.particles.len(), 2);
}

#[test]
fn test_explanation_lists_causes() {
    let u = universe(5.0, 1.8, 0.2, 1.8);
    let lines = u.explanation();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].contains("Extreme gravity"));
    assert!(lines[1].contains("expand too quickly"));
}

#[test]
fn test_invalid_constants_rejected() {
    let c = PhysicalConstants::new(20.0, 1.0, 1.0, 1.0);
    assert!(Universe::new(c, None).is_err());
}

// --- BODIES ---

#[rstest]
#[case(1.0, 1.0, MatterPhase::Stable)]
#[case(0.2, 1.0, MatterPhase::Unstable)]
#[case(1.0, 0.04, MatterPhase::Unstable)]
#[case(6.0, 1.0, MatterPhase::Extreme)]
#[case(1.0, 1.6, MatterPhase::Extreme)]
#[case(0.2, 1.6, MatterPhase::Unstable)] // instability wins
fn test_matter_phase(#[case] strong: f64, #[case] alpha: f64, #[case] expected: MatterPhase) {
    let c = PhysicalConstants::new(1.0, alpha, strong, 1.0);
    assert_eq!(MatterPhase::from_constants(&c), expected);
}

#[test]
fn test_vec2_limit() {
    let v = Vec2::new(30.0, 40.0).limit(5.0);
    assert!((v.mag() - 5.0).abs() < 1e-12);
    assert!((v.x - 3.0).abs() < 1e-12);
    assert_eq!(Vec2::new(1.0, 0.0).limit(5.0), Vec2::new(1.0, 0.0));
    assert_eq!(Vec2::ZERO.normalized(), Vec2::ZERO);
}

#[test]
fn test_attraction_distance_is_clamped() {
    let mut rng = fastrand::Rng::with_seed(1);
    let mut p = Particle::at(&mut rng, Vec2::new(100.0, 100.0));
    p.mass = 1.0;

    // 1 unit away behaves like 10 units away
    let near = p.attraction(Vec2::new(101.0, 100.0), 1.0, 1.0);
    let at_ten = p.attraction(Vec2::new(110.0, 100.0), 1.0, 1.0);
    assert!((near.x - at_ten.x).abs() < 1e-12);
    assert!((near.x - 0.01).abs() < 1e-12);
}
