/// Quantum register state.
///
/// An n-qubit register is a vector of 2^n complex amplitudes, one per basis
/// state. Qubit 0 is the most significant bit of a basis index, so the label
/// of index `i` reads qubit 0 first. The vector satisfies Σ|αᵢ|² = 1 after
/// every gate application.
use crate::error::{PsiError, Result};
use num_complex::Complex64;
use std::fmt;

/// Largest register the engine will allocate. A dense operator on n qubits
/// holds 4^n complex entries (16 MiB at n = 10).
pub const MAX_QUBITS: usize = 10;

/// Tolerance used for normalization checks.
pub const NORM_EPSILON: f64 = 1e-9;

#[derive(Debug, Clone, PartialEq)]
pub struct StateVector {
    num_qubits: usize,
    amplitudes: Vec<Complex64>,
}

impl StateVector {
    /// Create a register of `num_qubits` qubits initialized to |0...0⟩.
    pub fn new(num_qubits: usize) -> Result<Self> {
        if num_qubits == 0 || num_qubits > MAX_QUBITS {
            return Err(PsiError::InvalidQubitCount {
                requested: num_qubits,
                max: MAX_QUBITS,
            });
        }

        let dim = 1 << num_qubits;
        let mut amplitudes = vec![Complex64::new(0.0, 0.0); dim];
        amplitudes[0] = Complex64::new(1.0, 0.0);

        Ok(Self {
            num_qubits,
            amplitudes,
        })
    }

    #[inline(always)]
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Dimension of the state space: 2^n
    #[inline(always)]
    pub fn dim(&self) -> usize {
        self.amplitudes.len()
    }

    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amplitudes
    }

    /// Replace the amplitudes with the result of an operator application.
    pub(crate) fn replace(&mut self, amplitudes: Vec<Complex64>) {
        debug_assert_eq!(amplitudes.len(), self.amplitudes.len());
        self.amplitudes = amplitudes;
    }

    /// Probability of basis state `index`: |αᵢ|²
    #[inline(always)]
    pub fn probability(&self, index: usize) -> f64 {
        self.amplitudes[index].norm_sqr()
    }

    pub fn probabilities(&self) -> Vec<f64> {
        self.amplitudes.iter().map(|a| a.norm_sqr()).collect()
    }

    /// Total probability; ≈ 1.0 for any reachable state.
    pub fn total_probability(&self) -> f64 {
        self.amplitudes.iter().map(|a| a.norm_sqr()).sum()
    }

    pub fn is_normalized(&self) -> bool {
        (self.total_probability() - 1.0).abs() < NORM_EPSILON
    }

    /// Zero-padded binary label of basis state `index`, qubit 0 first.
    pub fn basis_label(&self, index: usize) -> String {
        basis_label(index, self.num_qubits)
    }
}

/// `index` as a binary string of width `num_qubits`, most significant bit first.
pub fn basis_label(index: usize, num_qubits: usize) -> String {
    format!("{index:0>num_qubits$b}")
}

impl fmt::Display for StateVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "StateVector ({} qubits, dim={}):", self.num_qubits, self.dim())?;
        for (i, amp) in self.amplitudes.iter().enumerate() {
            let prob = amp.norm_sqr();
            if prob > 1e-12 {
                writeln!(
                    f,
                    "  |{}⟩  amplitude: {:.6}  probability: {:.4}",
                    self.basis_label(i),
                    amp,
                    prob
                )?;
            }
        }
        Ok(())
    }
}
