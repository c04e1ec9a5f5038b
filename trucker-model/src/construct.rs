use crate::{ModelResult, Route, SpatialModel};
use rand::{seq::SliceRandom, Rng};

/// Builds starting routes over a [`SpatialModel`].
pub struct Constructor<'a> {
    model: &'a SpatialModel,
}

impl<'a> Constructor<'a> {
    pub fn new(model: &'a SpatialModel) -> Self {
        Self { model }
    }

    /// Nearest-unvisited-first route starting at `start_index`.
    pub fn build_greedy_route(&self, start_index: usize) -> ModelResult<Route> {
        let num_systems = self.model.len();
        let mut visited = vec![false; num_systems];
        let mut indices = Vec::with_capacity(num_systems);

        let mut current = self.model.system(start_index)?.index;
        visited[current] = true;
        indices.push(current);
        while indices.len() < num_systems {
            let next = self
                .model
                .ordered_distances(current)?
                .iter()
                .map(|&(index, _)| index)
                .find(|&index| !visited[index]);
            match next {
                Some(next) => {
                    visited[next] = true;
                    indices.push(next);
                    current = next;
                }
                None => break,
            }
        }
        Ok(Route::new_unchecked(indices))
    }

    /// Runs [`Constructor::build_greedy_route`] from every system and keeps the shortest.
    /// Ties keep the lowest starting index.
    pub fn select_best_start(&self) -> ModelResult<Route> {
        let mut best_route = self.build_greedy_route(0)?;
        let mut best_distance = best_route.total_length(self.model);
        for start_index in 1..self.model.len() {
            let route = self.build_greedy_route(start_index)?;
            let distance = route.total_length(self.model);
            if distance < best_distance {
                log::debug!(
                    "New starter system gave a best route distance of {} for {:?}",
                    distance,
                    route.indices()
                );
                best_route = route;
                best_distance = distance;
            }
        }
        Ok(best_route)
    }

    pub fn random_route<R: Rng + ?Sized>(&self, rng: &mut R) -> Route {
        let mut indices: Vec<usize> = (0..self.model.len()).collect();
        indices.shuffle(rng);
        Route::new_unchecked(indices)
    }
}
