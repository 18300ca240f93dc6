/// Circuit validation.
///
/// Rules, checked per gate record in circuit order; the first failure wins:
///   1. `gate` present                              → MissingGateField
///   2. gate name is a supported kind               → UnknownGate
///   3. `target` present                            → MissingTargetField
///   4. every target in [0, num_qubits)             → TargetIndexOutOfRange
///   5. target count matches the gate's arity       → ArityTooFew / ArityTooMany
///      control differs from target                 → DuplicateTargets
///   6. parameterized gates carry `parameters`      → MissingParameterField
///      with `phi` (r, u3) and `theta`, `lamb` (u3) → MissingNamedParameter
///
/// Validation is a parse: a record that passes every rule becomes a typed
/// `Instruction`, so the engine never sees an unchecked gate.
use super::ir::{Circuit, ControlledGate, Instruction, UnaryGate};
use super::record::{GateRecord, ParameterRecord};
use super::ValidationError;
use crate::core::gates::GateKind;

// ── Public API ────────────────────────────────────────────────────────────

/// Check `records` against every rule without building a circuit.
pub fn verify(records: &[GateRecord], num_qubits: usize) -> Result<(), ValidationError> {
    for (index, record) in records.iter().enumerate() {
        parse_record(index, record, num_qubits)?;
    }
    Ok(())
}

/// Validate `records` and convert them into a typed `Circuit`.
pub fn parse(records: &[GateRecord], num_qubits: usize) -> Result<Circuit, ValidationError> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| parse_record(index, record, num_qubits))
        .collect()
}

/// Check a typed circuit against the register size.
///
/// Typed instructions already satisfy the name, arity and parameter rules;
/// only qubit ranges and control/target overlap remain.
pub fn check(circuit: &Circuit, num_qubits: usize) -> Result<(), ValidationError> {
    for (index, instr) in circuit.iter().enumerate() {
        for qubit in instr.qubits() {
            if qubit >= num_qubits {
                return Err(ValidationError::TargetIndexOutOfRange {
                    index,
                    qubit: i64::try_from(qubit).unwrap_or(i64::MAX),
                    num_qubits,
                });
            }
        }
        if let Instruction::Controlled { gate, control, target } = *instr {
            if control == target {
                return Err(ValidationError::DuplicateTargets {
                    index,
                    gate: gate.kind().name().to_string(),
                    qubit: control,
                });
            }
        }
    }
    Ok(())
}

// ── Per-record rules ──────────────────────────────────────────────────────

fn parse_record(
    index: usize,
    record: &GateRecord,
    num_qubits: usize,
) -> Result<Instruction, ValidationError> {
    // Rules 1–2
    let name = record
        .gate
        .as_deref()
        .ok_or(ValidationError::MissingGateField { index })?;
    let kind = GateKind::from_name(name).ok_or_else(|| ValidationError::UnknownGate {
        index,
        name: name.to_string(),
    })?;

    // Rule 3
    let targets = record
        .target
        .as_deref()
        .ok_or_else(|| ValidationError::MissingTargetField {
            index,
            gate: name.to_string(),
        })?;

    // Rule 4
    let qubits = targets
        .iter()
        .map(|&qubit| {
            usize::try_from(qubit)
                .ok()
                .filter(|&q| q < num_qubits)
                .ok_or(ValidationError::TargetIndexOutOfRange { index, qubit, num_qubits })
        })
        .collect::<Result<Vec<usize>, _>>()?;

    // Rule 5
    let expected = kind.arity();
    if qubits.len() < expected {
        return Err(ValidationError::ArityTooFew {
            index,
            gate: name.to_string(),
            expected,
            actual: qubits.len(),
        });
    }
    if qubits.len() > expected {
        return Err(ValidationError::ArityTooMany {
            index,
            gate: name.to_string(),
            expected,
            actual: qubits.len(),
        });
    }

    // Rule 6 happens while building the typed gate.
    let instr = match kind {
        GateKind::Cx | GateKind::Cy | GateKind::Cz => {
            let (control, target) = (qubits[0], qubits[1]);
            if control == target {
                return Err(ValidationError::DuplicateTargets {
                    index,
                    gate: name.to_string(),
                    qubit: control,
                });
            }
            let gate = match kind {
                GateKind::Cx => ControlledGate::Cx,
                GateKind::Cy => ControlledGate::Cy,
                _            => ControlledGate::Cz,
            };
            Instruction::Controlled { gate, control, target }
        }
        _ => Instruction::Unary {
            gate: unary_gate(index, kind, record.parameters.as_ref())?,
            qubit: qubits[0],
        },
    };
    Ok(instr)
}

fn unary_gate(
    index: usize,
    kind: GateKind,
    parameters: Option<&ParameterRecord>,
) -> Result<UnaryGate, ValidationError> {
    let gate = match kind {
        GateKind::X => UnaryGate::X,
        GateKind::H => UnaryGate::H,
        GateKind::Y => UnaryGate::Y,
        GateKind::Z => UnaryGate::Z,
        GateKind::S => UnaryGate::S,
        GateKind::T => UnaryGate::T,
        GateKind::R => {
            let params = require_parameters(index, kind, parameters)?;
            UnaryGate::R {
                phi: require(index, kind, "phi", params.phi)?,
            }
        }
        GateKind::U3 => {
            let params = require_parameters(index, kind, parameters)?;
            UnaryGate::U3 {
                phi: require(index, kind, "phi", params.phi)?,
                theta: require(index, kind, "theta", params.theta)?,
                lambda: require(index, kind, "lamb", params.lamb)?,
            }
        }
        GateKind::Cx | GateKind::Cy | GateKind::Cz => {
            unreachable!("controlled gates are built by parse_record")
        }
    };
    Ok(gate)
}

fn require_parameters(
    index: usize,
    kind: GateKind,
    parameters: Option<&ParameterRecord>,
) -> Result<&ParameterRecord, ValidationError> {
    parameters.ok_or_else(|| ValidationError::MissingParameterField {
        index,
        gate: kind.name().to_string(),
    })
}

fn require(
    index: usize,
    kind: GateKind,
    parameter: &'static str,
    value: Option<f64>,
) -> Result<f64, ValidationError> {
    value.ok_or_else(|| ValidationError::MissingNamedParameter {
        index,
        gate: kind.name().to_string(),
        parameter,
    })
}
