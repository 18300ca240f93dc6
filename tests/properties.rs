//! Property-based tests for state evolution.

use proptest::prelude::*;
use psi_sim::compiler::{Circuit, ControlledGate, Instruction, UnaryGate};
use psi_sim::core::Simulator;

const EPSILON: f64 = 1e-9;

fn unary_gate() -> impl Strategy<Value = UnaryGate> {
    let angle = -10.0f64..10.0;
    prop_oneof![
        Just(UnaryGate::X),
        Just(UnaryGate::H),
        Just(UnaryGate::Y),
        Just(UnaryGate::Z),
        Just(UnaryGate::S),
        Just(UnaryGate::T),
        angle.clone().prop_map(|phi| UnaryGate::R { phi }),
        (angle.clone(), angle.clone(), angle)
            .prop_map(|(phi, theta, lambda)| UnaryGate::U3 { phi, theta, lambda }),
    ]
}

fn controlled_gate() -> impl Strategy<Value = ControlledGate> {
    prop_oneof![
        Just(ControlledGate::Cx),
        Just(ControlledGate::Cy),
        Just(ControlledGate::Cz),
    ]
}

/// A register size and a valid circuit for it.
fn sized_circuit() -> impl Strategy<Value = (usize, Circuit)> {
    (2usize..=4).prop_flat_map(|n| {
        let unary = (unary_gate(), 0..n)
            .prop_map(|(gate, qubit)| Instruction::Unary { gate, qubit });
        let controlled = (controlled_gate(), 0..n, 1..n).prop_map(move |(gate, control, offset)| {
            Instruction::Controlled { gate, control, target: (control + offset) % n }
        });
        let instr = prop_oneof![unary, controlled];
        (Just(n), prop::collection::vec(instr, 0..12))
            .prop_map(|(n, instrs)| (n, instrs.into_iter().collect::<Circuit>()))
    })
}

proptest! {
    /// Property: Σ|αᵢ|² stays 1 for every valid circuit.
    #[test]
    fn evolution_preserves_normalization((n, circuit) in sized_circuit()) {
        let mut sim = Simulator::new(n).unwrap();
        sim.run(&circuit).unwrap();
        let total = sim.state().total_probability();
        prop_assert!((total - 1.0).abs() < EPSILON, "total probability {}", total);
    }

    /// Property: X·X and H·H are the identity on any reachable state.
    #[test]
    fn self_inverse_gates_restore_state(
        (n, circuit) in sized_circuit(),
        qubit_seed in 0usize..4,
        use_h in any::<bool>(),
    ) {
        let mut sim = Simulator::new(n).unwrap();
        sim.run(&circuit).unwrap();
        let before = sim.state().clone();

        let qubit = qubit_seed % n;
        let pair = if use_h {
            Circuit::new().h(qubit).h(qubit)
        } else {
            Circuit::new().x(qubit).x(qubit)
        };
        sim.run(&pair).unwrap();

        for (a, b) in sim.state().amplitudes().iter().zip(before.amplitudes()) {
            prop_assert!((a - b).norm() < EPSILON);
        }
    }

    /// Property: every sampled outcome has non-zero probability.
    #[test]
    fn samples_hit_supported_states((n, circuit) in sized_circuit(), seed in any::<u64>()) {
        let mut sim = Simulator::new(n).unwrap();
        sim.run(&circuit).unwrap();
        let probs = sim.probabilities();
        let counts = sim.sampler(Some(seed)).unwrap().collect_counts(64);
        for (index, _) in counts.indexed() {
            prop_assert!(probs[index] > 0.0);
        }
    }
}
