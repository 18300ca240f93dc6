/// Shot sampling.
///
/// Each shot is an independent draw of a basis index with probability
/// |αᵢ|² from the finished state. Drawing does not collapse the register:
/// every shot resamples the same distribution, unlike sequential hardware
/// measurement.
///
/// Randomness comes from a `StdRng` owned by the sampler. A fixed seed gives
/// the same sequence of outcomes on every run.
use super::histogram::Histogram;
use super::state::StateVector;
use crate::error::Result;
use rand::distributions::{Distribution, WeightedIndex};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

pub struct Sampler<'a> {
    state: &'a StateVector,
    distribution: WeightedIndex<f64>,
    rng: StdRng,
}

impl<'a> Sampler<'a> {
    /// Build a sampler over `state`. `seed = None` seeds from OS entropy.
    pub fn new(state: &'a StateVector, seed: Option<u64>) -> Result<Self> {
        let distribution = WeightedIndex::new(state.probabilities())?;
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Self {
            state,
            distribution,
            rng,
        })
    }

    /// Draw one basis index in [0, 2^n).
    pub fn measure_once(&mut self) -> usize {
        self.distribution.sample(&mut self.rng)
    }

    /// Draw `num_shots` independent outcomes and tally them.
    pub fn collect_counts(&mut self, num_shots: usize) -> Histogram {
        let mut histogram = Histogram::new(self.state.num_qubits());
        for _ in 0..num_shots {
            histogram.record(self.measure_once());
        }
        info!(
            qubits = self.state.num_qubits(),
            shots = num_shots,
            outcomes = histogram.len(),
            "counts collected"
        );
        histogram
    }
}
