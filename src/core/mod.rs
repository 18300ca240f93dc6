pub mod gates;
pub mod histogram;
pub mod operator;
pub mod sampler;
pub mod simulator;
pub mod state;

// Convenience re-exports for library users
pub use gates::{GateKind, Matrix2x2};
pub use histogram::Histogram;
pub use operator::Operator;
pub use sampler::Sampler;
pub use simulator::{Phase, Simulator};
pub use state::{StateVector, MAX_QUBITS};
