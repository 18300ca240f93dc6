/// Runtime layer.
///
/// Sits above the engine and handles whole runs:
///   - one-shot execution (validate → evolve → sample)
///   - histogram rendering for display
///   - parameter sweeps over independent engine instances
pub mod executor;
pub mod render;
pub mod sweep;

pub use executor::{execute, execute_records, ExecutionResult, RunOptions, DEFAULT_SHOTS};
pub use render::{Renderer, TextRenderer};
pub use sweep::{run_sweep, SweepPoint};
