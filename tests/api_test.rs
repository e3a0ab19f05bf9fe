use finetune::api;
use finetune::config::{PhysicalConstants, SweepParams};
use finetune::scorer::Severity;

#[test]
fn test_render_reality() {
    let report = api::render_state(&PhysicalConstants::REALITY, &SweepParams::default())
        .expect("render failed");

    assert_eq!(report.headline, "🟢 Life-Permitting (4/4)");
    assert_eq!(report.axis_messages.len(), 4);
    assert!(report
        .axis_messages
        .iter()
        .all(|m| m.severity == Severity::Ok));
    assert_eq!(report.combined_messages.len(), 4);
    assert_eq!(report.combined_messages[3].verdict, "may support life");
    let success: Vec<&str> = report.combined_messages[..3]
        .iter()
        .map(|m| m.message)
        .collect();
    assert_eq!(
        success,
        vec![
            "Star formation occurs at a stable, life-supporting rate.",
            "Atoms can form stable, diverse chemical structures.",
            "Expansion is balanced with gravitational pull.",
        ]
    );
    assert_eq!(report.combined_messages[0].title, "Star Formation & Stability");
    assert_eq!(report.narrative.len(), 3);
    assert_eq!(report.sweep.shape(), (50, 50));
    assert!(report.comparison.iter().all(|c| c.deviation == 0.0));
}

#[test]
fn test_render_uses_current_alpha_and_strong_force() {
    let c = PhysicalConstants::new(4.0, 0.3, 2.0, 0.0);
    let report = api::render_state(&c, &SweepParams::default()).unwrap();

    assert_eq!(report.sweep.alpha, 0.3);
    assert_eq!(report.sweep.strong_force, 2.0);
    assert_eq!(report.axis_messages[0].verdict, "too strong");
    assert_eq!(report.axis_messages[3].severity, Severity::Warning);
}

#[test]
fn test_render_rejects_invalid_input() {
    let c = PhysicalConstants::new(1.0, 1.0, 1.0, 2.5);
    assert!(api::render_state(&c, &SweepParams::default()).is_err());
}

#[test]
fn test_render_json() {
    let params = SweepParams {
        g_samples: 4,
        lambda_samples: 4,
        ..Default::default()
    };
    let json = api::render_state_json(&PhysicalConstants::REALITY, &params).unwrap();
    let v: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(v["evaluation"]["combinedScore"], 4);
    assert_eq!(v["sweep"]["gSamples"].as_array().unwrap().len(), 4);
    assert_eq!(v["sweep"]["values"].as_array().unwrap().len(), 16);
    assert_eq!(v["comparison"][0]["axis"], "gravity");
    assert!(v["comparison"][2]["detail"]
        .as_str()
        .unwrap()
        .contains("protons and neutrons"));
}
