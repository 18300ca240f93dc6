/// Gate library: the 2×2 unitary for every supported gate kind.
///
/// Fixed gates (x, h, y, z, s, t) are built once into a process-wide table
/// and only read afterwards. Parameterized gates (r, u3) are computed from
/// their angles on every request. Controlled gates (cx, cy, cz) resolve to
/// the base unitary of x, y and z; the control structure is added by
/// `operator::controlled_operator`.
use num_complex::Complex64;
use std::collections::HashMap;
use std::f64::consts::{FRAC_1_SQRT_2, PI};
use std::fmt;
use std::sync::LazyLock;

/// A 2×2 complex unitary matrix representing a single-qubit gate.
/// Row-major: matrix[row][col]
pub type Matrix2x2 = [[Complex64; 2]; 2];

const ZERO: Complex64 = Complex64::new(0.0, 0.0);
const ONE: Complex64 = Complex64::new(1.0, 0.0);
const I: Complex64 = Complex64::new(0.0, 1.0);

// ── Gate kinds ─────────────────────────────────────────────────────────────

/// Closed set of gate kinds accepted in a circuit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GateKind {
    X,
    H,
    Y,
    Z,
    S,
    T,
    U3,
    R,
    Cx,
    Cy,
    Cz,
}

impl GateKind {
    pub const ALL: [GateKind; 11] = [
        Self::X, Self::H, Self::Y, Self::Z, Self::S, Self::T,
        Self::U3, Self::R, Self::Cx, Self::Cy, Self::Cz,
    ];

    /// Look up a gate kind by its circuit name (`"x"`, `"cx"`, `"u3"`, ...).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.name() == name)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::X  => "x",
            Self::H  => "h",
            Self::Y  => "y",
            Self::Z  => "z",
            Self::S  => "s",
            Self::T  => "t",
            Self::U3 => "u3",
            Self::R  => "r",
            Self::Cx => "cx",
            Self::Cy => "cy",
            Self::Cz => "cz",
        }
    }

    /// True for the two-target (control, target) gates.
    pub fn is_controlled(&self) -> bool {
        matches!(self, Self::Cx | Self::Cy | Self::Cz)
    }

    /// Number of target indices the gate takes.
    pub fn arity(&self) -> usize {
        if self.is_controlled() { 2 } else { 1 }
    }

    /// True if the gate needs a `parameters` map.
    pub fn is_parameterized(&self) -> bool {
        matches!(self, Self::R | Self::U3)
    }
}

impl fmt::Display for GateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ── Standard Gate Matrices ─────────────────────────────────────────────────

/// Hadamard gate.
/// H = (1/√2) * [[1, 1], [1, -1]]
pub fn hadamard() -> Matrix2x2 {
    let h = Complex64::new(FRAC_1_SQRT_2, 0.0);
    [
        [h,  h],
        [h, -h],
    ]
}

/// Pauli-X gate, flips |0⟩ ↔ |1⟩.
pub fn pauli_x() -> Matrix2x2 {
    [
        [ZERO, ONE],
        [ONE,  ZERO],
    ]
}

/// Pauli-Y gate.
/// Y = [[0, -i], [i, 0]]
pub fn pauli_y() -> Matrix2x2 {
    [
        [ZERO, -I],
        [I,    ZERO],
    ]
}

/// Pauli-Z gate, |1⟩ → -|1⟩.
pub fn pauli_z() -> Matrix2x2 {
    [
        [ONE,  ZERO],
        [ZERO, -ONE],
    ]
}

/// S gate, π/2 phase.
pub fn s_gate() -> Matrix2x2 {
    [
        [ONE,  ZERO],
        [ZERO, I],
    ]
}

/// T gate, π/4 phase.
/// T = [[1, 0], [0, e^(iπ/4)]]
pub fn t_gate() -> Matrix2x2 {
    [
        [ONE,  ZERO],
        [ZERO, Complex64::from_polar(1.0, PI / 4.0)],
    ]
}

/// Phase rotation R(φ) = diag(1, e^(iφ)).
pub fn r_gate(phi: f64) -> Matrix2x2 {
    [
        [ONE,  ZERO],
        [ZERO, Complex64::from_polar(1.0, phi)],
    ]
}

/// General single-qubit rotation.
///
/// U3(φ, θ, λ) = [[cos(θ/2),          -e^(iλ)·sin(θ/2)],
///                [e^(iφ)·sin(θ/2),   e^(i(λ+φ))·cos(θ/2)]]
pub fn u3_gate(phi: f64, theta: f64, lambda: f64) -> Matrix2x2 {
    let (sin, cos) = (theta / 2.0).sin_cos();
    [
        [
            Complex64::new(cos, 0.0),
            -Complex64::from_polar(sin, lambda),
        ],
        [
            Complex64::from_polar(sin, phi),
            Complex64::from_polar(cos, lambda + phi),
        ],
    ]
}

pub fn identity() -> Matrix2x2 {
    [
        [ONE,  ZERO],
        [ZERO, ONE],
    ]
}

/// Projector |0⟩⟨0| = diag(1, 0).
pub fn projector_zero() -> Matrix2x2 {
    [
        [ONE,  ZERO],
        [ZERO, ZERO],
    ]
}

/// Projector |1⟩⟨1| = diag(0, 1).
pub fn projector_one() -> Matrix2x2 {
    [
        [ZERO, ZERO],
        [ZERO, ONE],
    ]
}

// ── Library lookup ─────────────────────────────────────────────────────────

/// Constant matrix for `kind`, or `None` for the parameterized gates.
/// Controlled kinds carry the base unitary of x, y or z.
fn fixed_matrix(kind: GateKind) -> Option<Matrix2x2> {
    match kind {
        GateKind::X | GateKind::Cx => Some(pauli_x()),
        GateKind::Y | GateKind::Cy => Some(pauli_y()),
        GateKind::Z | GateKind::Cz => Some(pauli_z()),
        GateKind::H                => Some(hadamard()),
        GateKind::S                => Some(s_gate()),
        GateKind::T                => Some(t_gate()),
        GateKind::R | GateKind::U3 => None,
    }
}

/// Every non-parameterized kind, built once from `GateKind::ALL`.
static FIXED_GATES: LazyLock<HashMap<GateKind, Matrix2x2>> = LazyLock::new(|| {
    GateKind::ALL
        .into_iter()
        .filter_map(|kind| fixed_matrix(kind).map(|m| (kind, m)))
        .collect()
});

/// Return the 2×2 unitary for `kind`.
///
/// Angles are ignored by fixed gates; `r` reads only `phi`. Controlled kinds
/// return their base matrix (x, y or z).
pub fn operator(kind: GateKind, phi: f64, theta: f64, lambda: f64) -> Matrix2x2 {
    match kind {
        GateKind::R  => r_gate(phi),
        GateKind::U3 => u3_gate(phi, theta, lambda),
        fixed        => FIXED_GATES[&fixed],
    }
}

/// U†U ≈ I within `epsilon`.
#[cfg(test)]
fn is_unitary(m: &Matrix2x2, epsilon: f64) -> bool {
    for row in 0..2 {
        for col in 0..2 {
            let dot = m[0][row].conj() * m[0][col] + m[1][row].conj() * m[1][col];
            let expected = if row == col { ONE } else { ZERO };
            if (dot - expected).norm() > epsilon {
                return false;
            }
        }
    }
    true
}
