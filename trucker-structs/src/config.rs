use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use trucker_utils::{dejsonify, read_json_arg};

#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum FitnessMode {
    /// Sum of every hop distance along the route.
    #[default]
    ShortestTotal,
    /// The single longest hop. Experimental: mutations are not aimed at the
    /// longest hop, so the search is not expected to converge.
    ShortestLongestHop,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum StartStrategy {
    /// Uniformly shuffled permutation.
    #[default]
    Random,
    /// Best nearest-neighbour route over every possible starting system.
    Greedy,
    /// Nearest-neighbour route from one given starting system.
    GreedyFrom { index: usize },
}

#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SearchStrategy {
    #[default]
    LocalSearch,
    Annealing,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AnnealingSettings {
    pub initial_temperature: f64,
    pub cooling_ratio: f64,
    pub final_temperature: f64,
    pub steps_per_temperature: u64,
}

impl Default for AnnealingSettings {
    fn default() -> Self {
        Self {
            initial_temperature: 300.0,
            cooling_ratio: 0.997,
            final_temperature: 1.0,
            steps_per_temperature: 1000,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct OptimizerSettings {
    pub seed: u64,
    pub iterations: u64,
    pub max_mutation_count: usize,
    pub max_mutation_distance: usize,
    pub skip_duplicate_mutations: bool,
    pub fitness: FitnessMode,
    pub allow_experimental_fitness: bool,
    pub start: StartStrategy,
    pub route: Option<Vec<usize>>,
    pub progress_interval: u64,
    pub max_skip_streak: Option<u64>,
    pub strategy: SearchStrategy,
    pub annealing: AnnealingSettings,
}

impl Default for OptimizerSettings {
    fn default() -> Self {
        Self {
            seed: 1,
            iterations: 100_000,
            max_mutation_count: 1,
            max_mutation_distance: 40,
            skip_duplicate_mutations: false,
            fitness: FitnessMode::ShortestTotal,
            allow_experimental_fitness: false,
            start: StartStrategy::Random,
            route: None,
            progress_interval: 500_000,
            max_skip_streak: None,
            strategy: SearchStrategy::LocalSearch,
            annealing: AnnealingSettings::default(),
        }
    }
}

impl OptimizerSettings {
    /// Loads settings from a json string, or from a file when `settings` ends in `.json`.
    pub fn load(settings: &str) -> Result<Self> {
        let settings = read_json_arg(settings)?;
        let settings = dejsonify::<OptimizerSettings>(&settings)
            .map_err(|e| anyhow!("Failed to parse settings: {}", e))?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_mutation_count == 0 {
            return Err(anyhow!("max_mutation_count must be at least 1"));
        }
        if self.max_mutation_distance == 0 {
            return Err(anyhow!("max_mutation_distance must be at least 1"));
        }
        if self.progress_interval == 0 {
            return Err(anyhow!("progress_interval must be at least 1"));
        }
        let annealing = &self.annealing;
        if !(annealing.cooling_ratio > 0.0 && annealing.cooling_ratio < 1.0) {
            return Err(anyhow!(
                "annealing.cooling_ratio ({}) must be between 0 and 1",
                annealing.cooling_ratio
            ));
        }
        if !(annealing.final_temperature > 0.0) {
            return Err(anyhow!("annealing.final_temperature must be positive"));
        }
        if !(annealing.initial_temperature > 0.0) {
            return Err(anyhow!("annealing.initial_temperature must be positive"));
        }
        if annealing.steps_per_temperature == 0 {
            return Err(anyhow!("annealing.steps_per_temperature must be at least 1"));
        }
        Ok(())
    }
}
