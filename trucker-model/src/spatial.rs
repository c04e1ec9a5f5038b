use crate::{ModelError, ModelResult};
use trucker_structs::catalog::{Position, StarRecord};

#[derive(Debug, Clone, PartialEq)]
pub struct System {
    pub index: usize,
    pub name: String,
    pub position: Position,
}

/// The fixed set of systems and every pairwise distance between them.
///
/// Built once from the catalog and never mutated afterwards. A system's index is
/// its position in the input records.
#[derive(Debug, Clone)]
pub struct SpatialModel {
    systems: Vec<System>,
    distance_matrix: Vec<Vec<f64>>,
    ordered_distances: Vec<Vec<(usize, f64)>>,
}

impl SpatialModel {
    pub fn new(records: &[StarRecord]) -> ModelResult<Self> {
        if records.is_empty() {
            return Err(ModelError::EmptyModel);
        }
        let systems: Vec<System> = records
            .iter()
            .enumerate()
            .map(|(index, record)| System {
                index,
                name: record.name.clone(),
                position: record.position(),
            })
            .collect();

        let distance_matrix: Vec<Vec<f64>> = systems
            .iter()
            .map(|from| {
                systems
                    .iter()
                    .map(|to| from.position.distance_to(&to.position))
                    .collect()
            })
            .collect();

        // Stable sort, so equally distant systems stay in index order.
        let ordered_distances = systems
            .iter()
            .map(|from| {
                let mut pairs: Vec<(usize, f64)> = systems
                    .iter()
                    .filter(|to| to.index != from.index)
                    .map(|to| (to.index, distance_matrix[from.index][to.index]))
                    .collect();
                pairs.sort_by(|a, b| a.1.total_cmp(&b.1));
                pairs
            })
            .collect();

        Ok(Self {
            systems,
            distance_matrix,
            ordered_distances,
        })
    }

    pub fn len(&self) -> usize {
        self.systems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.systems.is_empty()
    }

    pub fn systems(&self) -> &[System] {
        &self.systems
    }

    pub fn system(&self, index: usize) -> ModelResult<&System> {
        self.systems.get(index).ok_or(ModelError::OutOfRange {
            index,
            num_systems: self.systems.len(),
        })
    }

    pub fn position(&self, index: usize) -> ModelResult<Position> {
        Ok(self.system(index)?.position)
    }

    pub fn distance(&self, from: usize, to: usize) -> ModelResult<f64> {
        self.check_index(from)?;
        self.check_index(to)?;
        Ok(self.distance_matrix[from][to])
    }

    /// Every other system paired with its distance from `index`, nearest first.
    pub fn ordered_distances(&self, index: usize) -> ModelResult<&[(usize, f64)]> {
        self.check_index(index)?;
        Ok(&self.ordered_distances[index])
    }

    pub(crate) fn hop(&self, from: usize, to: usize) -> f64 {
        self.distance_matrix[from][to]
    }

    pub(crate) fn name(&self, index: usize) -> &str {
        &self.systems[index].name
    }

    fn check_index(&self, index: usize) -> ModelResult<()> {
        if index < self.systems.len() {
            Ok(())
        } else {
            Err(ModelError::OutOfRange {
                index,
                num_systems: self.systems.len(),
            })
        }
    }
}
