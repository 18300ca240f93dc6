/// Typed circuit representation.
///
/// After validation a circuit is an ordered sequence of `Instruction`s. Each
/// gate variant carries exactly the parameters it needs, so an `r` without
/// `phi` or a `u3` without `theta` cannot be expressed, and no gate name is
/// looked up at run time.
///
/// Order is significant: gates do not commute in general.
use crate::core::gates::{self, GateKind, Matrix2x2};
use std::fmt;

// ── Gates ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UnaryGate {
    X,
    H,
    Y,
    Z,
    S,
    T,
    R  { phi: f64 },
    U3 { phi: f64, theta: f64, lambda: f64 },
}

impl UnaryGate {
    pub fn kind(&self) -> GateKind {
        match self {
            Self::X         => GateKind::X,
            Self::H         => GateKind::H,
            Self::Y         => GateKind::Y,
            Self::Z         => GateKind::Z,
            Self::S         => GateKind::S,
            Self::T         => GateKind::T,
            Self::R { .. }  => GateKind::R,
            Self::U3 { .. } => GateKind::U3,
        }
    }

    /// The gate's 2×2 unitary from the gate library.
    pub fn matrix(&self) -> Matrix2x2 {
        let (phi, theta, lambda) = match *self {
            Self::R { phi }                => (phi, 0.0, 0.0),
            Self::U3 { phi, theta, lambda } => (phi, theta, lambda),
            _                              => (0.0, 0.0, 0.0),
        };
        gates::operator(self.kind(), phi, theta, lambda)
    }
}

impl fmt::Display for UnaryGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::R { phi } => write!(f, "r({phi:.6})"),
            Self::U3 { phi, theta, lambda } => {
                write!(f, "u3({phi:.6}, {theta:.6}, {lambda:.6})")
            }
            other => f.write_str(other.kind().name()),
        }
    }
}

/// Two-qubit gates: the base gate acts on the target when the control is |1⟩.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlledGate {
    Cx,
    Cy,
    Cz,
}

impl ControlledGate {
    pub fn kind(&self) -> GateKind {
        match self {
            Self::Cx => GateKind::Cx,
            Self::Cy => GateKind::Cy,
            Self::Cz => GateKind::Cz,
        }
    }

    /// Matrix applied to the target qubit when the control is |1⟩.
    pub fn matrix(&self) -> Matrix2x2 {
        gates::operator(self.kind(), 0.0, 0.0, 0.0)
    }
}

// ── Instruction ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Instruction {
    Unary { gate: UnaryGate, qubit: usize },
    Controlled { gate: ControlledGate, control: usize, target: usize },
}

impl Instruction {
    pub fn kind(&self) -> GateKind {
        match self {
            Self::Unary { gate, .. }      => gate.kind(),
            Self::Controlled { gate, .. } => gate.kind(),
        }
    }

    /// Qubit indices referenced by this instruction, control first.
    pub fn qubits(&self) -> Vec<usize> {
        match *self {
            Self::Unary { qubit, .. }               => vec![qubit],
            Self::Controlled { control, target, .. } => vec![control, target],
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unary { gate, qubit } => write!(f, "{gate} {qubit}"),
            Self::Controlled { gate, control, target } => {
                write!(f, "{} {control} {target}", gate.kind())
            }
        }
    }
}

// ── Circuit ───────────────────────────────────────────────────────────────

/// An ordered gate sequence.
///
/// ```rust
/// use psi_sim::compiler::Circuit;
///
/// let bell = Circuit::new().h(0).cx(0, 1);
/// assert_eq!(bell.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Circuit {
    instructions: Vec<Instruction>,
}

impl Circuit {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Instruction> {
        self.instructions.iter()
    }

    pub fn push(mut self, instruction: Instruction) -> Self {
        self.instructions.push(instruction);
        self
    }

    pub fn unary(self, gate: UnaryGate, qubit: usize) -> Self {
        self.push(Instruction::Unary { gate, qubit })
    }

    pub fn controlled(self, gate: ControlledGate, control: usize, target: usize) -> Self {
        self.push(Instruction::Controlled { gate, control, target })
    }

    // ── Builder shorthands ──────────────────────────────────────────────

    pub fn x(self, qubit: usize) -> Self { self.unary(UnaryGate::X, qubit) }
    pub fn h(self, qubit: usize) -> Self { self.unary(UnaryGate::H, qubit) }
    pub fn y(self, qubit: usize) -> Self { self.unary(UnaryGate::Y, qubit) }
    pub fn z(self, qubit: usize) -> Self { self.unary(UnaryGate::Z, qubit) }
    pub fn s(self, qubit: usize) -> Self { self.unary(UnaryGate::S, qubit) }
    pub fn t(self, qubit: usize) -> Self { self.unary(UnaryGate::T, qubit) }

    pub fn r(self, qubit: usize, phi: f64) -> Self {
        self.unary(UnaryGate::R { phi }, qubit)
    }

    pub fn u3(self, qubit: usize, phi: f64, theta: f64, lambda: f64) -> Self {
        self.unary(UnaryGate::U3 { phi, theta, lambda }, qubit)
    }

    pub fn cx(self, control: usize, target: usize) -> Self {
        self.controlled(ControlledGate::Cx, control, target)
    }

    pub fn cy(self, control: usize, target: usize) -> Self {
        self.controlled(ControlledGate::Cy, control, target)
    }

    pub fn cz(self, control: usize, target: usize) -> Self {
        self.controlled(ControlledGate::Cz, control, target)
    }
}

impl FromIterator<Instruction> for Circuit {
    fn from_iter<I: IntoIterator<Item = Instruction>>(iter: I) -> Self {
        Self {
            instructions: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Circuit {
    type Item = &'a Instruction;
    type IntoIter = std::slice::Iter<'a, Instruction>;

    fn into_iter(self) -> Self::IntoIter {
        self.instructions.iter()
    }
}

impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for instr in &self.instructions {
            writeln!(f, "{instr}")?;
        }
        Ok(())
    }
}
