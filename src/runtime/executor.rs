/// One-shot executor.
///
/// Runs the whole pipeline on a fresh engine:
///   1. validate the circuit (records are parsed, typed circuits checked)
///   2. evolve |0…0⟩ gate by gate
///   3. draw `shots` independent samples from the final distribution
///
/// Nothing is sampled when validation fails; the error is returned instead.
use crate::compiler::{Circuit, GateRecord};
use crate::core::{Histogram, Simulator};
use crate::error::Result;
use serde::Serialize;

/// Shot count used when the caller does not choose one.
pub const DEFAULT_SHOTS: usize = 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOptions {
    pub shots: usize,
    /// `None` seeds the sampler from OS entropy.
    pub seed: Option<u64>,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            shots: DEFAULT_SHOTS,
            seed: None,
        }
    }
}

impl RunOptions {
    pub fn seeded(shots: usize, seed: u64) -> Self {
        Self {
            shots,
            seed: Some(seed),
        }
    }
}

// ── Result types ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct ExecutionResult {
    pub num_qubits: usize,
    /// Gate operations applied.
    pub gate_count: usize,
    /// Shots drawn; the denominator for percentages.
    pub shots: usize,
    /// Outcome counts in ascending basis order.
    pub histogram: Histogram,
    /// Exact |αᵢ|² of the final state.
    pub probabilities: Vec<f64>,
}

impl ExecutionResult {
    /// Basis states with probability above `threshold`.
    /// Returns `(binary_label, probability)` pairs sorted by index.
    pub fn significant_states(&self, threshold: f64) -> Vec<(String, f64)> {
        let n = self.num_qubits;
        self.probabilities
            .iter()
            .enumerate()
            .filter(|(_, &p)| p > threshold)
            .map(|(i, &p)| (format!("{i:0>n$b}"), p))
            .collect()
    }
}

// ── Execution ─────────────────────────────────────────────────────────────

/// Run a typed circuit on a fresh `num_qubits` register and sample it.
pub fn execute(circuit: &Circuit, num_qubits: usize, options: RunOptions) -> Result<ExecutionResult> {
    let mut sim = Simulator::new(num_qubits)?;
    sim.run(circuit)?;
    finish(&sim, options)
}

/// Run a circuit given as raw records on a fresh `num_qubits` register.
pub fn execute_records(
    records: &[GateRecord],
    num_qubits: usize,
    options: RunOptions,
) -> Result<ExecutionResult> {
    let mut sim = Simulator::new(num_qubits)?;
    sim.run_records(records)?;
    finish(&sim, options)
}

fn finish(sim: &Simulator, options: RunOptions) -> Result<ExecutionResult> {
    let histogram = sim.sampler(options.seed)?.collect_counts(options.shots);
    Ok(ExecutionResult {
        num_qubits: sim.num_qubits(),
        gate_count: sim.gates_applied(),
        shots: options.shots,
        histogram,
        probabilities: sim.probabilities(),
    })
}
