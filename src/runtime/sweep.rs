/// Parameter sweeps.
///
/// Gate order inside one circuit is fixed, but separate circuits share no
/// state, so a sweep builds one circuit per parameter value and runs each on
/// its own engine in parallel. Point `i` samples with `seed + i` when a seed
/// is given, so a seeded sweep is reproducible regardless of thread timing.
use super::executor::{execute, ExecutionResult, RunOptions};
use crate::compiler::Circuit;
use crate::error::Result;
use rayon::prelude::*;
use tracing::info;

#[derive(Debug, Clone)]
pub struct SweepPoint<P> {
    pub parameter: P,
    pub result: ExecutionResult,
}

/// Run `build(p)` for every `p` in `parameters`, in input order.
///
/// Fails with the first error in parameter order if any point fails.
pub fn run_sweep<P, F>(
    parameters: &[P],
    num_qubits: usize,
    options: RunOptions,
    build: F,
) -> Result<Vec<SweepPoint<P>>>
where
    P: Clone + Send + Sync,
    F: Fn(&P) -> Circuit + Sync,
{
    info!(points = parameters.len(), qubits = num_qubits, "starting sweep");
    parameters
        .par_iter()
        .enumerate()
        .map(|(i, parameter)| {
            let point_options = RunOptions {
                seed: options.seed.map(|seed| seed.wrapping_add(i as u64)),
                ..options
            };
            execute(&build(parameter), num_qubits, point_options).map(|result| SweepPoint {
                parameter: parameter.clone(),
                result,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PsiError;
    use std::f64::consts::PI;

    #[test]
    fn test_sweep_theta_matches_cos_squared() {
        let thetas: Vec<f64> = (0..=4).map(|k| k as f64 * PI / 4.0).collect();
        let points = run_sweep(&thetas, 1, RunOptions::seeded(10, 1), |&theta| {
            Circuit::new().u3(0, 0.0, theta, 0.0)
        })
        .unwrap();

        assert_eq!(points.len(), thetas.len());
        for point in &points {
            let expected = (point.parameter / 2.0).cos().powi(2);
            assert!((point.result.probabilities[0] - expected).abs() < 1e-10);
        }
    }

    #[test]
    fn test_sweep_is_reproducible() {
        let phis = [0.0, 0.5, 1.0, 1.5];
        let build = |&phi: &f64| Circuit::new().h(0).r(0, phi).h(0);
        let a = run_sweep(&phis, 1, RunOptions::seeded(200, 9), build).unwrap();
        let b = run_sweep(&phis, 1, RunOptions::seeded(200, 9), build).unwrap();
        for (pa, pb) in a.iter().zip(&b) {
            assert_eq!(pa.result.histogram, pb.result.histogram);
        }
    }

    #[test]
    fn test_sweep_propagates_errors() {
        let targets = [0usize, 5];
        let err = run_sweep(&targets, 2, RunOptions::seeded(1, 0), |&q| Circuit::new().x(q))
            .unwrap_err();
        assert!(matches!(err, PsiError::Validation(_)));
    }
}
