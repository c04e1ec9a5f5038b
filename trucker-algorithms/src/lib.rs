pub mod annealing;
pub mod optimizer;

pub use annealing::{Annealer, AnnealingStats};
pub use optimizer::{
    AttemptOutcome, MutationBudget, MutationPlan, Optimizer, OptimizerEvent, RunStats,
};
