use trucker_structs::config::*;

#[test]
fn test_empty_settings_use_reference_defaults() {
    let settings = OptimizerSettings::load("{}").unwrap();
    assert_eq!(settings, OptimizerSettings::default());
    assert_eq!(settings.seed, 1);
    assert_eq!(settings.iterations, 100_000);
    assert_eq!(settings.max_mutation_count, 1);
    assert_eq!(settings.max_mutation_distance, 40);
    assert_eq!(settings.fitness, FitnessMode::ShortestTotal);
    assert_eq!(settings.start, StartStrategy::Random);
}

#[test]
fn test_load_settings() {
    let settings = OptimizerSettings::load(
        r#"{
            "seed": 7,
            "skip_duplicate_mutations": true,
            "fitness": "shortest_longest_hop",
            "start": {"greedy_from": {"index": 3}},
            "route": [2, 0, 1],
            "strategy": "annealing",
            "annealing": {"cooling_ratio": 0.5}
        }"#,
    )
    .unwrap();
    assert_eq!(settings.seed, 7);
    assert!(settings.skip_duplicate_mutations);
    assert_eq!(settings.fitness, FitnessMode::ShortestLongestHop);
    assert_eq!(settings.start, StartStrategy::GreedyFrom { index: 3 });
    assert_eq!(settings.route, Some(vec![2, 0, 1]));
    assert_eq!(settings.strategy, SearchStrategy::Annealing);
    assert_eq!(settings.annealing.cooling_ratio, 0.5);
    assert_eq!(settings.annealing.initial_temperature, 300.0);
}

#[test]
fn test_invalid_settings() {
    assert!(OptimizerSettings::load(r#"{"max_mutation_count": 0}"#).is_err());
    assert!(OptimizerSettings::load(r#"{"max_mutation_distance": 0}"#).is_err());
    assert!(OptimizerSettings::load(r#"{"progress_interval": 0}"#).is_err());
    assert!(OptimizerSettings::load(r#"{"annealing": {"cooling_ratio": 1.0}}"#).is_err());
    assert!(OptimizerSettings::load(r#"{"fitness": "fastest"}"#).is_err());
}
