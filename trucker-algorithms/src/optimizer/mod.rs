mod mutation;
pub use mutation::MutationPlan;

use rand::rngs::SmallRng;
use std::time::Instant;
use trucker_model::{ModelError, ModelResult, Route, SpatialModel};
use trucker_structs::{
    config::{FitnessMode, OptimizerSettings},
    report::ProgressReport,
};
use trucker_utils::{seeded_hasher, HashSet};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AttemptOutcome {
    /// The mutation was already tried in the current neighbourhood; nothing was evaluated.
    Skipped,
    Rejected,
    Improved,
}

impl AttemptOutcome {
    /// Whether the attempt consumes mutation budget.
    pub fn counted(&self) -> bool {
        !matches!(self, AttemptOutcome::Skipped)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MutationBudget {
    pub desired_count: u64,
    pub max_mutation_count: usize,
    pub max_mutation_distance: usize,
}

impl MutationBudget {
    pub fn from_settings(settings: &OptimizerSettings) -> Self {
        Self {
            desired_count: settings.iterations,
            max_mutation_count: settings.max_mutation_count,
            max_mutation_distance: settings.max_mutation_distance,
        }
    }
}

#[derive(Debug)]
pub enum OptimizerEvent<'a> {
    Improved {
        attempt: u64,
        fitness: f64,
        route: &'a Route,
    },
    Progress(ProgressReport),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunStats {
    pub attempts: u64,
    pub successes: u64,
    pub skipped: u64,
    /// The run stopped early because the skip streak limit was reached.
    pub saturated: bool,
    pub best_fitness: f64,
}

/// Greedy local search over route permutations.
///
/// Holds the best route found so far and repeatedly compares it against a
/// randomly mutated copy, keeping the copy only when it is strictly fitter.
pub struct Optimizer<'a> {
    model: &'a SpatialModel,
    rng: SmallRng,
    fitness_mode: FitnessMode,
    best_route: Route,
    best_fitness: f64,
    skip_duplicate_mutations: bool,
    tried_mutations: HashSet<String>,
    total_attempts: u64,
    successes: u64,
    progress_interval: u64,
    max_skip_streak: Option<u64>,
}

impl<'a> Optimizer<'a> {
    pub fn new(
        model: &'a SpatialModel,
        initial_route: Route,
        settings: &OptimizerSettings,
        rng: SmallRng,
    ) -> ModelResult<Self> {
        if settings.fitness == FitnessMode::ShortestLongestHop
            && !settings.allow_experimental_fitness
        {
            return Err(ModelError::UnsupportedFitnessMode {
                mode: "shortest_longest_hop".to_string(),
            });
        }
        if initial_route.len() != model.len() {
            return Err(ModelError::RouteLengthMismatch {
                expected: model.len(),
                actual: initial_route.len(),
            });
        }
        let best_fitness = initial_route.fitness(model, settings.fitness);
        Ok(Self {
            model,
            rng,
            fitness_mode: settings.fitness,
            best_route: initial_route,
            best_fitness,
            skip_duplicate_mutations: settings.skip_duplicate_mutations,
            tried_mutations: HashSet::with_hasher(seeded_hasher(settings.seed)),
            total_attempts: 0,
            successes: 0,
            progress_interval: settings.progress_interval.max(1),
            max_skip_streak: settings.max_skip_streak,
        })
    }

    pub fn best_route(&self) -> &Route {
        &self.best_route
    }

    pub fn best_fitness(&self) -> f64 {
        self.best_fitness
    }

    pub fn fitness_mode(&self) -> FitnessMode {
        self.fitness_mode
    }

    /// Counted attempts over every run of this optimizer.
    pub fn total_attempts(&self) -> u64 {
        self.total_attempts
    }

    /// Accepted candidates in the current (or most recent) run.
    pub fn successes(&self) -> u64 {
        self.successes
    }

    pub fn tried_mutation_count(&self) -> usize {
        self.tried_mutations.len()
    }

    /// Replaces the best route with an externally supplied sequence.
    pub fn load_route(&mut self, indices: Vec<usize>) -> ModelResult<()> {
        let route = Route::from_indices(self.model, indices)?;
        self.assign_best_route(route);
        Ok(())
    }

    fn assign_best_route(&mut self, route: Route) {
        self.best_fitness = route.fitness(self.model, self.fitness_mode);
        self.best_route = route;
        self.tried_mutations.clear();
    }

    /// Evaluates `plan` against the best route and keeps the result if it is strictly fitter.
    pub fn try_plan(&mut self, plan: &MutationPlan) -> ModelResult<AttemptOutcome> {
        let signature = plan.signature();
        if self.skip_duplicate_mutations && self.tried_mutations.contains(&signature) {
            return Ok(AttemptOutcome::Skipped);
        }

        let mut candidate = self.best_route.clone();
        plan.apply(&mut candidate)?;
        let fitness = candidate.fitness(self.model, self.fitness_mode);
        let outcome = if fitness < self.best_fitness {
            log::debug!(
                "Mutation {} improved fitness {} -> {}",
                signature,
                self.best_fitness,
                fitness
            );
            self.assign_best_route(candidate);
            self.successes += 1;
            AttemptOutcome::Improved
        } else {
            AttemptOutcome::Rejected
        };

        if self.skip_duplicate_mutations {
            self.tried_mutations.insert(signature);
        }
        Ok(outcome)
    }

    pub fn attempt_mutation(
        &mut self,
        max_mutation_count: usize,
        max_mutation_distance: usize,
    ) -> ModelResult<AttemptOutcome> {
        let plan = MutationPlan::random(
            &mut self.rng,
            self.best_route.len(),
            max_mutation_count,
            max_mutation_distance,
        );
        self.try_plan(&plan)
    }

    /// Attempts mutations until `budget.desired_count` of them have been counted.
    /// Skipped duplicates do not count, so with duplicate skipping enabled and no
    /// `max_skip_streak` this keeps spinning on a fully explored neighbourhood.
    pub fn run(
        &mut self,
        budget: &MutationBudget,
        on_event: &mut dyn FnMut(OptimizerEvent),
    ) -> ModelResult<RunStats> {
        log::info!("Doing {} mutations", budget.desired_count);
        let mut attempts = 0;
        let mut skipped = 0;
        let mut skip_streak = 0;
        let mut saturated = false;
        self.successes = 0;
        let mut last_report = Instant::now();

        while attempts < budget.desired_count {
            let outcome =
                self.attempt_mutation(budget.max_mutation_count, budget.max_mutation_distance)?;
            if !outcome.counted() {
                skipped += 1;
                skip_streak += 1;
                if self.max_skip_streak.is_some_and(|limit| skip_streak >= limit) {
                    log::warn!(
                        "Stopping after {} consecutive duplicate mutations; the neighbourhood is exhausted",
                        skip_streak
                    );
                    saturated = true;
                    break;
                }
                continue;
            }

            skip_streak = 0;
            attempts += 1;
            self.total_attempts += 1;
            if outcome == AttemptOutcome::Improved {
                on_event(OptimizerEvent::Improved {
                    attempt: self.total_attempts,
                    fitness: self.best_fitness,
                    route: &self.best_route,
                });
            }
            if self.total_attempts % self.progress_interval == 0 {
                let now = Instant::now();
                let elapsed = now.duration_since(last_report).as_secs_f64();
                on_event(OptimizerEvent::Progress(ProgressReport {
                    attempts: self.total_attempts,
                    percent_complete: self.total_attempts as f64 / budget.desired_count as f64
                        * 100.0,
                    rate: if elapsed > 0.0 {
                        self.progress_interval as f64 / elapsed
                    } else {
                        f64::INFINITY
                    },
                    skipped,
                    successes: self.successes,
                    best_fitness: self.best_fitness,
                }));
                last_report = now;
            }
        }

        log::info!(
            "Finished doing {} mutations and {} were successful",
            attempts,
            self.successes
        );
        Ok(RunStats {
            attempts,
            successes: self.successes,
            skipped,
            saturated,
            best_fitness: self.best_fitness,
        })
    }
}
