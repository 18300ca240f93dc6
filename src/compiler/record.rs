/// Input records: one loosely-typed entry per circuit step.
///
/// Every field is optional so that a missing `gate`, `target` or
/// `parameters` key survives deserialization and is reported by the
/// validator as a rule violation instead of a JSON error.
///
/// ```json
/// {"gate": "u3", "target": [2], "parameters": {"phi": 1.57, "theta": 1.57, "lamb": 3.14}}
/// ```
use serde::{Deserialize, Serialize};

use super::ir::{Instruction, UnaryGate};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GateRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gate: Option<String>,
    /// Qubit indices; for controlled gates the control comes first.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<Vec<i64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<ParameterRecord>,
}

/// Rotation angles in radians.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParameterRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phi: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theta: Option<f64>,
    #[serde(default, alias = "lambda", skip_serializing_if = "Option::is_none")]
    pub lamb: Option<f64>,
}

impl GateRecord {
    pub fn new(gate: impl Into<String>, target: Vec<i64>) -> Self {
        Self {
            gate: Some(gate.into()),
            target: Some(target),
            parameters: None,
        }
    }

    pub fn with_parameters(mut self, parameters: ParameterRecord) -> Self {
        self.parameters = Some(parameters);
        self
    }
}

impl ParameterRecord {
    pub fn phi(phi: f64) -> Self {
        Self { phi: Some(phi), ..Self::default() }
    }

    pub fn u3(phi: f64, theta: f64, lamb: f64) -> Self {
        Self {
            phi: Some(phi),
            theta: Some(theta),
            lamb: Some(lamb),
        }
    }
}

impl From<&Instruction> for GateRecord {
    fn from(instruction: &Instruction) -> Self {
        match *instruction {
            Instruction::Unary { gate, qubit } => {
                let record = GateRecord::new(gate.kind().name(), vec![qubit as i64]);
                match gate {
                    UnaryGate::R { phi } => record.with_parameters(ParameterRecord::phi(phi)),
                    UnaryGate::U3 { phi, theta, lambda } => {
                        record.with_parameters(ParameterRecord::u3(phi, theta, lambda))
                    }
                    _ => record,
                }
            }
            Instruction::Controlled { gate, control, target } => {
                GateRecord::new(gate.kind().name(), vec![control as i64, target as i64])
            }
        }
    }
}
