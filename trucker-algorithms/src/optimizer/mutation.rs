use rand::Rng;
use std::fmt::Write;
use trucker_model::{ModelResult, Route};

/// The transpositions applied to a copy of the best route to form one candidate.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MutationPlan {
    pub swaps: Vec<(usize, usize)>,
}

impl MutationPlan {
    pub fn new(swaps: Vec<(usize, usize)>) -> Self {
        Self { swaps }
    }

    /// Draws between 1 and `max_mutation_count` swaps for a route of `route_len`
    /// positions. Each swap moves a random position up or down the route by at most
    /// `max_mutation_distance`, never past either end. Routes shorter than two
    /// positions have nothing to swap and get an empty plan.
    pub fn random<R: Rng + ?Sized>(
        rng: &mut R,
        route_len: usize,
        max_mutation_count: usize,
        max_mutation_distance: usize,
    ) -> Self {
        if route_len < 2 {
            return Self::default();
        }
        let last = route_len - 1;
        let mutation_count = rng.gen_range(1..=max_mutation_count.max(1));
        let mut swaps = Vec::with_capacity(mutation_count);
        for _ in 0..mutation_count {
            let source = rng.gen_range(0..route_len);
            let mut upwards = rng.gen::<bool>();
            if source == 0 {
                upwards = true;
            } else if source == last {
                upwards = false;
            }
            let max_possible_distance = if upwards { last - source } else { source };
            let distance =
                rng.gen_range(1..=max_mutation_distance.max(1).min(max_possible_distance));
            let dest = if upwards {
                source + distance
            } else {
                source - distance
            };
            swaps.push((source, dest));
        }
        Self { swaps }
    }

    /// Encodes the exact swaps, e.g. `"3-5:12-11:"`.
    pub fn signature(&self) -> String {
        let mut signature = String::with_capacity(self.swaps.len() * 8);
        for (source, dest) in &self.swaps {
            let _ = write!(signature, "{}-{}:", source, dest);
        }
        signature
    }

    pub fn apply(&self, route: &mut Route) -> ModelResult<()> {
        for &(source, dest) in &self.swaps {
            route.swap(source, dest)?;
        }
        Ok(())
    }
}
