/// State-vector engine.
///
/// `Simulator` owns one register and evolves it gate by gate:
///   - every gate is expanded into a full 2^n × 2^n operator
///     (`operator::unary_operator` / `operator::controlled_operator`)
///     and multiplied into the amplitude vector
///   - a circuit is validated in full before its first gate is applied,
///     so a rejected circuit leaves the register untouched
///   - once evolved, the register is sampled through a borrowing `Sampler`,
///     which cannot mutate it
///
/// Lifecycle: `Ready(|0…0⟩)` → `Evolved` (circuit applied) or `Rejected`
/// (terminal, sampling refused).
use super::operator::{controlled_operator, unary_operator};
use super::sampler::Sampler;
use super::state::StateVector;
use crate::compiler::{
    ir::{Circuit, Instruction},
    record::GateRecord,
    validator, ValidationError,
};
use crate::error::{PsiError, Result};
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Register holds |0…0⟩ and no circuit has run.
    Ready,
    /// At least one circuit has been applied.
    Evolved,
    /// A circuit failed validation; the register is not sampleable.
    Rejected,
}

#[derive(Debug, Clone)]
pub struct Simulator {
    state: StateVector,
    phase: Phase,
    gates_applied: usize,
}

impl Simulator {
    /// Create an engine for `num_qubits` qubits, initialized to |0...0⟩.
    pub fn new(num_qubits: usize) -> Result<Self> {
        Ok(Self {
            state: StateVector::new(num_qubits)?,
            phase: Phase::Ready,
            gates_applied: 0,
        })
    }

    pub fn num_qubits(&self) -> usize {
        self.state.num_qubits()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn state(&self) -> &StateVector {
        &self.state
    }

    /// Total gates applied since construction.
    pub fn gates_applied(&self) -> usize {
        self.gates_applied
    }

    /// Basis-state probabilities |αᵢ|², without sampling.
    pub fn probabilities(&self) -> Vec<f64> {
        self.state.probabilities()
    }

    // ── Evolution ─────────────────────────────────────────────────────────

    /// Validate `circuit` against this register, then apply every gate in
    /// order. On a validation error nothing is applied and the engine moves
    /// to `Phase::Rejected`.
    pub fn run(&mut self, circuit: &Circuit) -> Result<&mut Self> {
        self.ensure_not_rejected()?;
        if let Err(err) = validator::check(circuit, self.num_qubits()) {
            return Err(self.reject(err));
        }
        self.evolve(circuit);
        Ok(self)
    }

    /// Validate and run a circuit given as raw records.
    pub fn run_records(&mut self, records: &[GateRecord]) -> Result<&mut Self> {
        self.ensure_not_rejected()?;
        match validator::parse(records, self.num_qubits()) {
            Ok(circuit) => {
                self.evolve(&circuit);
                Ok(self)
            }
            Err(err) => Err(self.reject(err)),
        }
    }

    /// Apply a single gate. The instruction is checked against the register
    /// like a one-gate circuit.
    pub fn apply_gate(&mut self, instruction: &Instruction) -> Result<&mut Self> {
        let circuit = Circuit::new().push(*instruction);
        self.run(&circuit)
    }

    // ── Measurement ───────────────────────────────────────────────────────

    /// Sampler over the current distribution. `seed = None` draws from
    /// entropy. The sampler borrows the register read-only, so any number
    /// of samplers can be created without changing the state.
    pub fn sampler(&self, seed: Option<u64>) -> Result<Sampler<'_>> {
        self.ensure_not_rejected()?;
        Sampler::new(&self.state, seed)
    }

    // ── Internal ──────────────────────────────────────────────────────────

    fn ensure_not_rejected(&self) -> Result<()> {
        match self.phase {
            Phase::Rejected => Err(PsiError::Rejected),
            Phase::Ready | Phase::Evolved => Ok(()),
        }
    }

    fn reject(&mut self, err: ValidationError) -> PsiError {
        warn!(rule = %err, "circuit rejected");
        self.phase = Phase::Rejected;
        err.into()
    }

    /// Apply an already validated circuit.
    fn evolve(&mut self, circuit: &Circuit) {
        for instr in circuit {
            self.apply_unchecked(instr);
        }
        self.phase = Phase::Evolved;
        info!(
            qubits = self.num_qubits(),
            gates = circuit.len(),
            total_probability = self.state.total_probability(),
            "circuit evolved"
        );
    }

    fn apply_unchecked(&mut self, instr: &Instruction) {
        let n = self.num_qubits();
        debug!(gate = %instr.kind(), qubits = ?instr.qubits(), "applying gate");

        let operator = match *instr {
            Instruction::Unary { gate, qubit } => unary_operator(n, &gate.matrix(), qubit),
            Instruction::Controlled { gate, control, target } => {
                controlled_operator(n, &gate.matrix(), control, target)
            }
        };
        let next = operator.apply(self.state.amplitudes());
        self.state.replace(next);
        self.gates_applied += 1;
    }
}
