use crate::{ModelError, ModelResult, SpatialModel};
use trucker_structs::{
    config::FitnessMode,
    report::{HopReport, RouteReport},
};

/// An open path visiting every system of a [`SpatialModel`] exactly once.
///
/// The index sequence is always a permutation of `0..N`; the only mutation is
/// [`Route::swap`], which preserves that. Distance based methods must be given
/// the model the route was built for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    indices: Vec<usize>,
}

impl Route {
    pub(crate) fn new_unchecked(indices: Vec<usize>) -> Self {
        Self { indices }
    }

    pub fn from_indices(model: &SpatialModel, indices: Vec<usize>) -> ModelResult<Self> {
        if indices.len() != model.len() {
            return Err(ModelError::RouteLengthMismatch {
                expected: model.len(),
                actual: indices.len(),
            });
        }
        let mut seen = vec![false; model.len()];
        for &index in &indices {
            if index >= model.len() {
                return Err(ModelError::OutOfRange {
                    index,
                    num_systems: model.len(),
                });
            }
            if seen[index] {
                return Err(ModelError::DuplicateSystem { index });
            }
            seen[index] = true;
        }
        Ok(Self { indices })
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn total_length(&self, model: &SpatialModel) -> f64 {
        self.indices
            .windows(2)
            .map(|w| model.hop(w[0], w[1]))
            .sum()
    }

    /// Distance of the longest hop and the route position of that hop's destination.
    /// The first longest hop wins ties; a single-system route has no hops and yields `(0.0, 0)`.
    pub fn longest_hop(&self, model: &SpatialModel) -> (f64, usize) {
        let mut longest = (0.0, 0);
        for (position, w) in self.indices.windows(2).enumerate() {
            let distance = model.hop(w[0], w[1]);
            if distance > longest.0 {
                longest = (distance, position + 1);
            }
        }
        longest
    }

    pub fn fitness(&self, model: &SpatialModel, mode: FitnessMode) -> f64 {
        match mode {
            FitnessMode::ShortestTotal => self.total_length(model),
            FitnessMode::ShortestLongestHop => self.longest_hop(model).0,
        }
    }

    pub fn swap(&mut self, i: usize, j: usize) -> ModelResult<()> {
        let len = self.indices.len();
        for position in [i, j] {
            if position >= len {
                return Err(ModelError::IndexOutOfRange { position, len });
            }
        }
        self.indices.swap(i, j);
        Ok(())
    }

    pub fn report(&self, model: &SpatialModel) -> RouteReport {
        let hops: Vec<HopReport> = self
            .indices
            .windows(2)
            .map(|w| HopReport {
                destination: w[1],
                from: model.name(w[0]).to_string(),
                to: model.name(w[1]).to_string(),
                distance: model.hop(w[0], w[1]),
            })
            .collect();
        RouteReport {
            total_distance: hops.iter().map(|h| h.distance).sum(),
            longest_hop: self.longest_hop(model).0,
            hops,
            indices: self.indices.clone(),
            names: self
                .indices
                .iter()
                .map(|&i| model.name(i).to_string())
                .collect(),
        }
    }
}
