//! # psi-sim
//!
//! Dense state-vector simulation of small quantum circuits with shot sampling.
//!
//! ## Quick Start
//!
//! ```rust
//! use psi_sim::compiler::Circuit;
//! use psi_sim::core::Simulator;
//!
//! // Build a Bell state: (|00⟩ + |11⟩) / √2
//! let mut sim = Simulator::new(2).unwrap();
//! sim.run(&Circuit::new().h(0).cx(0, 1)).unwrap();
//!
//! // Exact probabilities
//! let probs = sim.probabilities();
//! assert!((probs[0] - 0.5).abs() < 1e-10);
//!
//! // Shots never collapse the register
//! let counts = sim.sampler(Some(7)).unwrap().collect_counts(1000);
//! assert_eq!(counts.get("00") + counts.get("11"), 1000);
//! ```

pub mod compiler;
pub mod core;
pub mod error;
pub mod runtime;

pub use error::{PsiError, Result};

/// π
pub const PI: f64 = std::f64::consts::PI;
/// π/2
pub const HALF_PI: f64 = std::f64::consts::FRAC_PI_2;
/// π/4
pub const QUARTER_PI: f64 = std::f64::consts::FRAC_PI_4;
