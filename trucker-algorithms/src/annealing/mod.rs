use rand::{rngs::SmallRng, Rng};
use trucker_model::{ModelError, ModelResult, Route, SpatialModel};
use trucker_structs::{
    config::{AnnealingSettings, FitnessMode, OptimizerSettings},
    report::ProgressReport,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnnealingStats {
    pub steps: u64,
    pub accepted: u64,
    pub improvements: u64,
    pub final_temperature: f64,
    pub best_fitness: f64,
}

/// Simulated annealing over total route length.
///
/// Swaps two uniformly random positions of the current route and accepts the
/// result with probability `exp((current - candidate) / T)`, so worse routes are
/// sometimes taken while the temperature is high. The best route seen is kept
/// separately from the current one.
pub struct Annealer<'a> {
    model: &'a SpatialModel,
    rng: SmallRng,
    settings: AnnealingSettings,
    progress_interval: u64,
    temperature: f64,
    current_route: Route,
    current_length: f64,
    best_route: Route,
    best_length: f64,
}

impl<'a> Annealer<'a> {
    pub fn new(
        model: &'a SpatialModel,
        initial_route: Route,
        settings: &OptimizerSettings,
        rng: SmallRng,
    ) -> ModelResult<Self> {
        if settings.fitness != FitnessMode::ShortestTotal {
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
        let length = initial_route.total_length(model);
        Ok(Self {
            model,
            rng,
            settings: settings.annealing.clone(),
            progress_interval: settings.progress_interval.max(1),
            temperature: settings.annealing.initial_temperature,
            current_route: initial_route.clone(),
            current_length: length,
            best_route: initial_route,
            best_length: length,
        })
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    pub fn best_route(&self) -> &Route {
        &self.best_route
    }

    pub fn best_fitness(&self) -> f64 {
        self.best_length
    }

    pub fn current_fitness(&self) -> f64 {
        self.current_length
    }

    /// Number of cooling steps before the temperature reaches its final value.
    pub fn planned_levels(&self) -> u64 {
        let AnnealingSettings {
            initial_temperature,
            cooling_ratio,
            final_temperature,
            ..
        } = self.settings;
        if initial_temperature <= final_temperature {
            return 0;
        }
        ((final_temperature / initial_temperature).ln() / cooling_ratio.ln()).ceil() as u64
    }

    /// One swap-and-maybe-accept step at the current temperature.
    /// Returns whether the candidate was accepted.
    pub fn step(&mut self) -> ModelResult<bool> {
        let len = self.current_route.len();
        let mut candidate = self.current_route.clone();
        candidate.swap(self.rng.gen_range(0..len), self.rng.gen_range(0..len))?;
        let length = candidate.total_length(self.model);
        let accept_probability = ((self.current_length - length) / self.temperature).exp();
        if self.rng.gen::<f64>() >= accept_probability {
            return Ok(false);
        }
        if length < self.best_length {
            self.best_route = candidate.clone();
            self.best_length = length;
        }
        self.current_route = candidate;
        self.current_length = length;
        Ok(true)
    }

    pub fn run(
        &mut self,
        on_progress: &mut dyn FnMut(ProgressReport),
    ) -> ModelResult<AnnealingStats> {
        let planned_steps = self.planned_levels() * self.settings.steps_per_temperature;
        log::info!(
            "Annealing from T={} to T={} over {} steps",
            self.temperature,
            self.settings.final_temperature,
            planned_steps
        );
        let mut steps = 0;
        let mut accepted = 0;
        let mut improvements = 0;
        let mut last_report = std::time::Instant::now();

        while self.temperature > self.settings.final_temperature {
            for _ in 0..self.settings.steps_per_temperature {
                let previous_best = self.best_length;
                if self.step()? {
                    accepted += 1;
                    if self.best_length < previous_best {
                        improvements += 1;
                    }
                }
                steps += 1;
                if steps % self.progress_interval == 0 {
                    let now = std::time::Instant::now();
                    let elapsed = now.duration_since(last_report).as_secs_f64();
                    on_progress(ProgressReport {
                        attempts: steps,
                        percent_complete: steps as f64 / planned_steps.max(1) as f64 * 100.0,
                        rate: if elapsed > 0.0 {
                            self.progress_interval as f64 / elapsed
                        } else {
                            f64::INFINITY
                        },
                        skipped: 0,
                        successes: improvements,
                        best_fitness: self.best_length,
                    });
                    last_report = now;
                }
            }
            self.temperature *= self.settings.cooling_ratio;
            log::trace!(
                "T={:.3} current={} best={}",
                self.temperature,
                self.current_length,
                self.best_length
            );
        }

        log::info!(
            "Annealing finished after {} steps, {} accepted, {} improvements",
            steps,
            accepted,
            improvements
        );
        Ok(AnnealingStats {
            steps,
            accepted,
            improvements,
            final_temperature: self.temperature,
            best_fitness: self.best_length,
        })
    }
}
