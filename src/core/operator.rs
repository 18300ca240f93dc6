/// Full-register operators.
///
/// An `Operator` is a dense 2^n × 2^n complex matrix assembled from 2×2 gate
/// matrices by Kronecker products over qubit positions 0..n-1. Qubit 0 is the
/// leftmost factor, so it maps to the most significant bit of a basis index.
///
/// Construction and application are both O(4^n); operators are built per gate
/// application and dropped right after.
use super::gates::{self, Matrix2x2};
use num_complex::Complex64;
use std::ops::Add;

#[derive(Debug, Clone, PartialEq)]
pub struct Operator {
    dim: usize,
    /// Row-major, `dim * dim` entries.
    data: Vec<Complex64>,
}

impl Operator {
    /// The 1×1 identity: neutral seed for a Kronecker chain.
    pub fn scalar_one() -> Self {
        Self {
            dim: 1,
            data: vec![Complex64::new(1.0, 0.0)],
        }
    }

    /// Build an operator from a sequence of per-qubit factors, qubit 0 first.
    pub fn tensor<'a, I>(factors: I) -> Self
    where
        I: IntoIterator<Item = &'a Matrix2x2>,
    {
        factors
            .into_iter()
            .fold(Self::scalar_one(), |acc, factor| acc.kron(factor))
    }

    #[inline(always)]
    pub fn dim(&self) -> usize {
        self.dim
    }

    #[inline(always)]
    pub fn get(&self, row: usize, col: usize) -> Complex64 {
        self.data[row * self.dim + col]
    }

    /// Kronecker product `self ⊗ factor`.
    pub fn kron(&self, factor: &Matrix2x2) -> Self {
        let dim = self.dim * 2;
        let mut data = vec![Complex64::new(0.0, 0.0); dim * dim];
        for i in 0..self.dim {
            for j in 0..self.dim {
                let a = self.get(i, j);
                if a == Complex64::new(0.0, 0.0) {
                    continue;
                }
                for (r, factor_row) in factor.iter().enumerate() {
                    for (c, b) in factor_row.iter().enumerate() {
                        data[(i * 2 + r) * dim + (j * 2 + c)] = a * b;
                    }
                }
            }
        }
        Self { dim, data }
    }

    /// Matrix-vector product: returns `self · amplitudes`.
    pub fn apply(&self, amplitudes: &[Complex64]) -> Vec<Complex64> {
        assert_eq!(amplitudes.len(), self.dim, "operator/state dimension mismatch");
        self.data
            .chunks_exact(self.dim)
            .map(|row| {
                row.iter()
                    .zip(amplitudes)
                    .fold(Complex64::new(0.0, 0.0), |acc, (m, a)| acc + m * a)
            })
            .collect()
    }

    /// U†U ≈ I within `epsilon`.
    #[cfg(test)]
    fn is_unitary(&self, epsilon: f64) -> bool {
        for row in 0..self.dim {
            for col in 0..self.dim {
                let dot: Complex64 = (0..self.dim)
                    .map(|k| self.get(k, row).conj() * self.get(k, col))
                    .sum();
                let expected = if row == col { 1.0 } else { 0.0 };
                if (dot - Complex64::new(expected, 0.0)).norm() > epsilon {
                    return false;
                }
            }
        }
        true
    }
}

impl Add for Operator {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        assert_eq!(self.dim, rhs.dim, "operator dimension mismatch");
        for (lhs, rhs) in self.data.iter_mut().zip(rhs.data) {
            *lhs += rhs;
        }
        self
    }
}

// ── Operator assembly ──────────────────────────────────────────────────────

/// `gate` at `target`, identity on every other qubit.
pub fn unary_operator(num_qubits: usize, gate: &Matrix2x2, target: usize) -> Operator {
    let id = gates::identity();
    Operator::tensor((0..num_qubits).map(|q| if q == target { gate } else { &id }))
}

/// Controlled gate as the sum of its two control branches:
///
///   |0⟩⟨0|_control ⊗ I_target  +  |1⟩⟨1|_control ⊗ gate_target
///
/// with identity on every other qubit. The projectors are orthogonal and sum
/// to I, so the result is unitary exactly when `gate` is.
pub fn controlled_operator(
    num_qubits: usize,
    gate: &Matrix2x2,
    control: usize,
    target: usize,
) -> Operator {
    let id = gates::identity();
    let p0 = gates::projector_zero();
    let p1 = gates::projector_one();

    let branch0 = Operator::tensor((0..num_qubits).map(|q| if q == control { &p0 } else { &id }));
    let branch1 = Operator::tensor((0..num_qubits).map(|q| match q {
        q if q == control => &p1,
        q if q == target => gate,
        _ => &id,
    }));
    branch0 + branch1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::gates::{hadamard, pauli_x, pauli_z};
    use approx::assert_abs_diff_eq;

    fn basis(dim: usize, index: usize) -> Vec<Complex64> {
        let mut v = vec![Complex64::new(0.0, 0.0); dim];
        v[index] = Complex64::new(1.0, 0.0);
        v
    }

    #[test]
    fn test_kron_dimensions() {
        let op = Operator::tensor([&pauli_x(), &pauli_x(), &pauli_x()]);
        assert_eq!(op.dim(), 8);
    }

    #[test]
    fn test_kron_x_identity() {
        // X ⊗ I on |00⟩ → |10⟩ (qubit 0 is the high bit)
        let op = unary_operator(2, &pauli_x(), 0);
        let out = op.apply(&basis(4, 0));
        assert_abs_diff_eq!(out[2].re, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(out[0].norm(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_kron_identity_x() {
        // I ⊗ X on |00⟩ → |01⟩
        let op = unary_operator(2, &pauli_x(), 1);
        let out = op.apply(&basis(4, 0));
        assert_abs_diff_eq!(out[1].re, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_cnot_truth_table() {
        // control = qubit 0 (high bit), target = qubit 1 (low bit)
        let op = controlled_operator(2, &pauli_x(), 0, 1);
        let expected = [0, 1, 3, 2];
        for (input, &output) in expected.iter().enumerate() {
            let out = op.apply(&basis(4, input));
            assert_abs_diff_eq!(out[output].re, 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_reversed_cnot_truth_table() {
        // control = qubit 1 (low bit), target = qubit 0 (high bit)
        let op = controlled_operator(2, &pauli_x(), 1, 0);
        let expected = [0, 3, 2, 1];
        for (input, &output) in expected.iter().enumerate() {
            let out = op.apply(&basis(4, input));
            assert_abs_diff_eq!(out[output].re, 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_controlled_operators_unitary() {
        for (control, target) in [(0, 1), (1, 0), (0, 2), (2, 1)] {
            let op = controlled_operator(3, &pauli_z(), control, target);
            assert!(op.is_unitary(1e-10));
        }
    }

    #[test]
    fn test_unary_operator_unitary() {
        let op = unary_operator(3, &hadamard(), 1);
        assert!(op.is_unitary(1e-10));
    }

    #[test]
    fn test_cz_phase_on_11() {
        let op = controlled_operator(2, &pauli_z(), 0, 1);
        let out = op.apply(&basis(4, 3));
        assert_abs_diff_eq!(out[3].re, -1.0, epsilon = 1e-12);
    }
}
