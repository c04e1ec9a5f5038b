use rand::{rngs::SmallRng, SeedableRng};
use trucker_algorithms::*;
use trucker_model::*;
use trucker_structs::{
    catalog::StarRecord,
    config::{AnnealingSettings, FitnessMode, OptimizerSettings},
};

fn scattered(num_systems: usize) -> SpatialModel {
    let records: Vec<StarRecord> = (0..num_systems)
        .map(|i| {
            let t = i as f64;
            StarRecord::new(
                &format!("S{}", i),
                (t * 17.3) % 23.0,
                (t * t * 0.61) % 19.0,
                (t * 5.9) % 7.0,
            )
        })
        .collect();
    SpatialModel::new(&records).unwrap()
}

fn quick_settings() -> OptimizerSettings {
    OptimizerSettings {
        seed: 5,
        annealing: AnnealingSettings {
            initial_temperature: 10.0,
            cooling_ratio: 0.5,
            final_temperature: 1.0,
            steps_per_temperature: 250,
        },
        progress_interval: 100,
        ..Default::default()
    }
}

fn annealer<'a>(model: &'a SpatialModel, settings: &OptimizerSettings) -> Annealer<'a> {
    let mut rng = SmallRng::seed_from_u64(settings.seed);
    let route = Constructor::new(model).random_route(&mut rng);
    Annealer::new(model, route, settings, rng).unwrap()
}

#[test]
fn test_planned_levels() {
    let model = scattered(5);
    assert_eq!(annealer(&model, &quick_settings()).planned_levels(), 4);
    assert_eq!(
        annealer(&model, &OptimizerSettings::default()).planned_levels(),
        1899
    );
}

#[test]
fn test_run_cools_to_final_temperature() {
    let model = scattered(25);
    let settings = quick_settings();
    let mut annealer = annealer(&model, &settings);
    let initial = annealer.best_fitness();
    let mut reports = Vec::new();
    let stats = annealer.run(&mut |report| reports.push(report)).unwrap();

    assert_eq!(stats.steps, 1000);
    assert_eq!(stats.final_temperature, 0.625);
    assert_eq!(reports.len(), 10);
    assert_eq!(reports[9].percent_complete, 100.0);
    assert!(stats.best_fitness <= initial);
    assert!(annealer.best_fitness() <= annealer.current_fitness());
    assert_eq!(
        annealer.best_route().total_length(&model),
        annealer.best_fitness()
    );
}

#[test]
fn test_run_is_deterministic() {
    let model = scattered(25);
    let settings = quick_settings();
    let run = || {
        let mut annealer = annealer(&model, &settings);
        annealer.run(&mut |_| {}).unwrap();
        annealer.best_route().clone()
    };
    assert_eq!(run(), run());
}

#[test]
fn test_longest_hop_is_rejected() {
    let model = scattered(5);
    let settings = OptimizerSettings {
        fitness: FitnessMode::ShortestLongestHop,
        allow_experimental_fitness: true,
        ..Default::default()
    };
    let route = Constructor::new(&model).build_greedy_route(0).unwrap();
    assert!(Annealer::new(&model, route, &settings, SmallRng::seed_from_u64(1)).is_err());
}
