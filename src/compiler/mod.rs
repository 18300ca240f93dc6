/// Circuit front end.
///
/// Pipeline: JSON / records → validator → typed `Circuit` → engine
///
/// `record` holds the loosely-typed input shape, `ir` the typed circuit the
/// engine runs, and `validator` turns one into the other, stopping at the
/// first broken rule.
pub mod ir;
pub mod record;
pub mod validator;

pub use ir::{Circuit, ControlledGate, Instruction, UnaryGate};
pub use record::{GateRecord, ParameterRecord};
pub use validator::{check, parse, verify};

use thiserror::Error;

/// First rule a circuit breaks. `index` is the zero-based position of the
/// offending gate record.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("gate {index}: record has no 'gate' field")]
    MissingGateField { index: usize },

    #[error("gate {index}: '{name}' is not a supported gate")]
    UnknownGate { index: usize, name: String },

    #[error("gate {index} ({gate}): record has no 'target' field")]
    MissingTargetField { index: usize, gate: String },

    #[error("gate {index}: target qubit {qubit} does not exist in a {num_qubits}-qubit register")]
    TargetIndexOutOfRange { index: usize, qubit: i64, num_qubits: usize },

    #[error("gate {index} ({gate}): expects {expected} target(s), got {actual}")]
    ArityTooFew { index: usize, gate: String, expected: usize, actual: usize },

    #[error("gate {index} ({gate}): accepts {expected} target(s), got {actual}")]
    ArityTooMany { index: usize, gate: String, expected: usize, actual: usize },

    #[error("gate {index} ({gate}): control and target are both qubit {qubit}")]
    DuplicateTargets { index: usize, gate: String, qubit: usize },

    #[error("gate {index} ({gate}): record has no 'parameters' field")]
    MissingParameterField { index: usize, gate: String },

    #[error("gate {index} ({gate}): missing parameter '{parameter}'")]
    MissingNamedParameter { index: usize, gate: String, parameter: &'static str },
}

impl ValidationError {
    /// Position of the offending gate in the circuit.
    pub fn index(&self) -> usize {
        match self {
            Self::MissingGateField { index }
            | Self::UnknownGate { index, .. }
            | Self::MissingTargetField { index, .. }
            | Self::TargetIndexOutOfRange { index, .. }
            | Self::ArityTooFew { index, .. }
            | Self::ArityTooMany { index, .. }
            | Self::DuplicateTargets { index, .. }
            | Self::MissingParameterField { index, .. }
            | Self::MissingNamedParameter { index, .. } => *index,
        }
    }
}

/// One-shot: deserialize a JSON array of gate records and validate it.
pub fn parse_json(source: &str, num_qubits: usize) -> crate::Result<Circuit> {
    let records: Vec<GateRecord> = serde_json::from_str(source)?;
    Ok(validator::parse(&records, num_qubits)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PsiError;

    #[test]
    fn test_parse_json_bell() {
        let circuit = parse_json(
            r#"[{"gate": "h", "target": [0]}, {"gate": "cx", "target": [0, 1]}]"#,
            2,
        )
        .unwrap();
        assert_eq!(circuit.len(), 2);
        assert_eq!(
            circuit.instructions()[1],
            Instruction::Controlled { gate: ControlledGate::Cx, control: 0, target: 1 }
        );
    }

    #[test]
    fn test_parse_json_reports_validation() {
        let err = parse_json(r#"[{"target": [0]}]"#, 1).unwrap_err();
        assert!(matches!(
            err,
            PsiError::Validation(ValidationError::MissingGateField { index: 0 })
        ));
    }

    #[test]
    fn test_parse_json_malformed() {
        let err = parse_json("[{\"gate\": ", 1).unwrap_err();
        assert!(matches!(err, PsiError::Json(_)));
    }

    #[test]
    fn test_error_messages_name_the_gate() {
        let err = ValidationError::MissingNamedParameter {
            index: 2,
            gate: "u3".into(),
            parameter: "theta",
        };
        let msg = err.to_string();
        assert!(msg.contains("u3"));
        assert!(msg.contains("theta"));
        assert_eq!(err.index(), 2);
    }
}
