use finetune::config::{Axis, PhysicalConstants};
use finetune::error::FinetuneError;
use finetune::scorer::{self, AxisVerdict, CombinedVerdict, Severity, ViabilityLabel};

fn close(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() < tol
}

// --- BOUNDARY SCENARIOS ---

#[test]
fn test_reality_is_life_permitting() {
    let eval = scorer::evaluate(&PhysicalConstants::REALITY).expect("reality is in range");

    for a in &eval.axis_verdicts {
        assert!(a.verdict.is_favorable(), "{} was {}", a.axis, a.verdict);
    }
    assert_eq!(eval.verdict_for(Axis::CosmologicalConstant), AxisVerdict::Balanced);
    assert_eq!(eval.combined_score, 4);
    assert_eq!(eval.overall_label, ViabilityLabel::LifePermitting);
    assert_eq!(eval.overall_label.to_string(), "Life-Permitting");

    assert_eq!(eval.scores.star_score, 1.0);
    assert!(close(eval.scores.atom_score, 0.909_09, 1e-4));
    assert!(close(eval.scores.cosmos_score, 0.909_09, 1e-4));
    // (1/1.1)^(2/3)
    assert!(close(eval.scores.life_score, 0.938_40, 1e-4));
    assert!(eval.may_support_life());
    assert_eq!(eval.combined.life.to_string(), "may support life");
}

#[test]
fn test_min_gravity_max_lambda() {
    let eval = scorer::evaluate_scalars(0.1, 1.0, 1.0, 2.0).unwrap();

    assert_eq!(eval.verdict_for(Axis::Gravity), AxisVerdict::TooWeak);
    assert_eq!(
        eval.verdict_for(Axis::CosmologicalConstant),
        AxisVerdict::ExpandsTooFast
    );
    assert!(close(eval.scores.cosmos_score, 0.1 / 2.1, 1e-12));
    assert!(close(eval.scores.cosmos_score, 0.0476, 1e-4));
    assert_eq!(eval.combined.cosmos, CombinedVerdict::PrematureCollapse);
    assert_eq!(eval.combined_score, 2);
    assert_eq!(eval.overall_label, ViabilityLabel::HighlyUnstable);
}

#[test]
fn test_max_strong_force_star_boundary_is_exclusive() {
    let eval = scorer::evaluate_scalars(1.0, 1.0, 10.0, 1.0).unwrap();

    assert_eq!(eval.verdict_for(Axis::StrongForce), AxisVerdict::InstantFusion);
    assert_eq!(eval.scores.star_score, 0.1);
    // star < 0.1 is strict, so exactly 0.1 still counts as stable
    assert_eq!(eval.combined.star, CombinedVerdict::Stable);
    assert_eq!(eval.combined_score, 3);
    assert_eq!(eval.overall_label, ViabilityLabel::MarginallyHabitable);
}

#[test]
fn test_lambda_zero_is_warning_not_balanced() {
    let eval = scorer::evaluate_scalars(1.0, 1.0, 1.0, 0.0).unwrap();
    let verdict = eval.verdict_for(Axis::CosmologicalConstant);

    assert_eq!(verdict, AxisVerdict::CollapsesEarly);
    assert_eq!(verdict.severity(), Severity::Warning);
    assert!(!verdict.is_favorable());
    assert_eq!(eval.combined_score, 3);
}

#[test]
fn test_every_axis_hostile() {
    let eval = scorer::evaluate_scalars(10.0, 0.01, 0.1, 2.0).unwrap();

    assert_eq!(eval.combined_score, 0);
    assert_eq!(eval.overall_label, ViabilityLabel::CompletelyInhospitable);
    assert_eq!(eval.verdict_for(Axis::Gravity), AxisVerdict::TooStrong);
    assert_eq!(eval.verdict_for(Axis::Electromagnetism), AxisVerdict::AtomsUnstable);
    assert_eq!(eval.verdict_for(Axis::StrongForce), AxisVerdict::NoNuclei);
}

#[test]
fn test_extreme_bonding_is_warning() {
    // atom = 2.0 / 0.2 = 10 > 5
    let eval = scorer::evaluate_scalars(1.0, 2.0, 0.1, 1.0).unwrap();
    assert_eq!(eval.combined.atom, CombinedVerdict::ExtremeBonding);
    assert_eq!(eval.combined.atom.severity(), Severity::Warning);
}

// --- INPUT VALIDATION ---

#[test]
fn test_out_of_range_rejected() {
    let err = scorer::evaluate_scalars(11.0, 1.0, 1.0, 1.0).unwrap_err();
    match err {
        FinetuneError::InvalidInput {
            axis, value, max, ..
        } => {
            assert_eq!(axis, Axis::Gravity);
            assert_eq!(value, 11.0);
            assert_eq!(max, 10.0);
        }
        other => panic!("unexpected error: {}", other),
    }

    assert!(scorer::evaluate_scalars(1.0, 0.0, 1.0, 1.0).is_err());
    assert!(scorer::evaluate_scalars(1.0, 1.0, 1.0, -0.01).is_err());
}

#[test]
fn test_nan_rejected() {
    let err = scorer::evaluate_scalars(1.0, 1.0, f64::NAN, 1.0).unwrap_err();
    assert!(matches!(
        err,
        FinetuneError::InvalidInput {
            axis: Axis::StrongForce,
            ..
        }
    ));
}

#[test]
fn test_range_endpoints_accepted() {
    assert!(scorer::evaluate_scalars(0.1, 0.01, 0.1, 0.0).is_ok());
    assert!(scorer::evaluate_scalars(10.0, 2.0, 10.0, 2.0).is_ok());
}

#[test]
fn test_unchecked_matches_checked() {
    let c = PhysicalConstants::new(2.5, 0.3, 4.0, 0.7);
    let checked = scorer::evaluate(&c).unwrap();
    let unchecked = scorer::evaluate_unchecked(&c);
    assert_eq!(checked, unchecked);
}

#[test]
fn test_evaluation_json_shape() {
    let eval = scorer::evaluate(&PhysicalConstants::REALITY).unwrap();
    let json = serde_json::to_value(eval).unwrap();

    assert_eq!(json["combinedScore"], 4);
    assert_eq!(json["overallLabel"], "life_permitting");
    assert_eq!(json["scores"]["starScore"], 1.0);
    assert_eq!(json["axisVerdicts"].as_array().unwrap().len(), 4);
    assert_eq!(json["axisVerdicts"][3]["verdict"], "balanced");
}
