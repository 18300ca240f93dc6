//! End-to-end sampling behaviour: statistics, determinism, reproducibility.

use psi_sim::compiler::{parse_json, Circuit, GateRecord, ValidationError};
use psi_sim::core::Simulator;
use psi_sim::runtime::{execute, execute_records, RunOptions};
use psi_sim::PsiError;

#[test]
fn uniform_superposition_is_balanced() {
    let result = execute(&Circuit::new().h(0), 1, RunOptions::seeded(100_000, 2024)).unwrap();
    let p0 = result.histogram.frequency("0");
    let p1 = result.histogram.frequency("1");
    assert!((p0 - 0.5).abs() < 0.02, "P(0) = {p0}");
    assert!((p1 - 0.5).abs() < 0.02, "P(1) = {p1}");
    assert_eq!(result.histogram.shots(), 100_000);
}

#[test]
fn bell_state_only_correlated_outcomes() {
    let circuit = parse_json(
        r#"[{"gate": "h", "target": [0]}, {"gate": "cx", "target": [0, 1]}]"#,
        2,
    )
    .unwrap();
    let result = execute(&circuit, 2, RunOptions::seeded(50_000, 17)).unwrap();
    let h = &result.histogram;

    assert_eq!(h.get("01"), 0);
    assert_eq!(h.get("10"), 0);
    assert_eq!(h.get("00") + h.get("11"), 50_000);
    assert!((h.frequency("00") - 0.5).abs() < 0.02);
    assert!((h.frequency("11") - 0.5).abs() < 0.02);
}

#[test]
fn x_gate_single_shot_is_deterministic() {
    for seed in 0..20 {
        let result = execute(&Circuit::new().x(0), 1, RunOptions::seeded(1, seed)).unwrap();
        assert_eq!(result.histogram.get("1"), 1);
        assert_eq!(result.histogram.get("0"), 0);
    }
}

#[test]
fn fixed_seed_reproduces_histogram() {
    let circuit = Circuit::new().h(0).u3(1, 0.4, 1.3, 2.2).cx(0, 2).t(2).h(2);
    let a = execute(&circuit, 3, RunOptions::seeded(4096, 99)).unwrap();
    let b = execute(&circuit, 3, RunOptions::seeded(4096, 99)).unwrap();
    assert_eq!(a.histogram, b.histogram);
}

#[test]
fn repeated_sampling_reads_same_distribution() {
    let mut sim = Simulator::new(2).unwrap();
    sim.run(&Circuit::new().h(0).cx(0, 1)).unwrap();
    let first = sim.sampler(Some(5)).unwrap().collect_counts(10_000);
    let second = sim.sampler(Some(6)).unwrap().collect_counts(10_000);
    for label in ["00", "11"] {
        assert!((first.frequency(label) - second.frequency(label)).abs() < 0.05);
    }
}

#[test]
fn histogram_keys_are_padded_and_ascending() {
    let result = execute(&Circuit::new().h(1).h(2), 3, RunOptions::seeded(2000, 3)).unwrap();
    let labels: Vec<String> = result.histogram.iter().map(|(label, _)| label).collect();
    assert_eq!(labels, vec!["000", "001", "010", "011"]);
}

#[test]
fn invalid_circuit_is_never_sampled() {
    let records = vec![
        GateRecord::new("h", vec![0]),
        GateRecord::new("u3", vec![0]),
    ];
    let err = execute_records(&records, 1, RunOptions::seeded(10, 0)).unwrap_err();
    assert!(matches!(
        err,
        PsiError::Validation(ValidationError::MissingParameterField { index: 1, .. })
    ));
}

#[test]
fn oversized_register_is_refused() {
    let err = execute(&Circuit::new().h(0), 64, RunOptions::default()).unwrap_err();
    assert!(matches!(err, PsiError::InvalidQubitCount { requested: 64, .. }));
}
