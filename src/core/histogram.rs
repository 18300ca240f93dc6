/// Outcome histogram.
///
/// Counts are keyed by basis-state index and always iterate in ascending
/// index order; labels are zero-padded bitstrings of width n, qubit 0 first.
use super::state::basis_label;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    num_qubits: usize,
    shots: usize,
    counts: BTreeMap<usize, usize>,
}

impl Histogram {
    pub fn new(num_qubits: usize) -> Self {
        Self {
            num_qubits,
            shots: 0,
            counts: BTreeMap::new(),
        }
    }

    /// Record one draw of basis state `index`.
    pub fn record(&mut self, index: usize) {
        *self.counts.entry(index).or_insert(0) += 1;
        self.shots += 1;
    }

    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Number of draws recorded.
    pub fn shots(&self) -> usize {
        self.shots
    }

    /// Number of distinct outcomes observed.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Count for basis state `index`.
    pub fn count(&self, index: usize) -> usize {
        self.counts.get(&index).copied().unwrap_or(0)
    }

    /// Count for a bitstring label such as `"011"`. Labels of the wrong
    /// width or with non-binary characters count as zero.
    pub fn get(&self, label: &str) -> usize {
        if label.len() != self.num_qubits {
            return 0;
        }
        usize::from_str_radix(label, 2)
            .map(|index| self.count(index))
            .unwrap_or(0)
    }

    /// Fraction of shots that produced `label`.
    pub fn frequency(&self, label: &str) -> f64 {
        if self.shots == 0 {
            return 0.0;
        }
        self.get(label) as f64 / self.shots as f64
    }

    /// `(bitstring, count)` pairs in ascending index order.
    pub fn iter(&self) -> impl Iterator<Item = (String, usize)> + '_ {
        self.counts
            .iter()
            .map(|(&index, &count)| (basis_label(index, self.num_qubits), count))
    }

    /// `(basis index, count)` pairs in ascending index order.
    pub fn indexed(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.counts.iter().map(|(&index, &count)| (index, count))
    }

    /// `(bitstring, percent of shots)` pairs in ascending index order.
    pub fn percentages(&self) -> Vec<(String, f64)> {
        let shots = self.shots.max(1) as f64;
        self.iter()
            .map(|(label, count)| (label, count as f64 / shots * 100.0))
            .collect()
    }
}

impl Serialize for Histogram {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.counts.len()))?;
        for (label, count) in self.iter() {
            map.serialize_entry(&label, &count)?;
        }
        map.end()
    }
}

impl fmt::Display for Histogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (label, count) in self.iter() {
            writeln!(f, "{label}: {count}")?;
        }
        Ok(())
    }
}
