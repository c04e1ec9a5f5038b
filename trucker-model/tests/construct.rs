use rand::{rngs::SmallRng, SeedableRng};
use trucker_model::*;
use trucker_structs::catalog::StarRecord;

fn triangle() -> SpatialModel {
    SpatialModel::new(&[
        StarRecord::new("A", 0.0, 0.0, 0.0),
        StarRecord::new("B", 3.0, 0.0, 0.0),
        StarRecord::new("C", 3.0, 4.0, 0.0),
    ])
    .unwrap()
}

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

fn assert_permutation(route: &Route, num_systems: usize) {
    let mut sorted = route.indices().to_vec();
    sorted.sort();
    assert_eq!(sorted, (0..num_systems).collect::<Vec<_>>());
}

#[test]
fn test_greedy_triangle() {
    let model = triangle();
    let constructor = Constructor::new(&model);

    let from_a = constructor.build_greedy_route(0).unwrap();
    assert_eq!(from_a.indices(), &[0, 1, 2]);
    assert_eq!(from_a.total_length(&model), 7.0);

    let from_c = constructor.build_greedy_route(2).unwrap();
    assert_eq!(from_c.indices(), &[2, 1, 0]);
    assert_eq!(from_c.total_length(&model), 7.0);

    // B's nearest is A (3), then C is the only one left.
    let from_b = constructor.build_greedy_route(1).unwrap();
    assert_eq!(from_b.indices(), &[1, 0, 2]);
    assert_eq!(from_b.total_length(&model), 8.0);

    let best = constructor.select_best_start().unwrap();
    assert_eq!(best.total_length(&model), 7.0);
    assert_eq!(best.indices(), &[0, 1, 2]);
}

#[test]
fn test_greedy_invalid_start() {
    let model = triangle();
    assert_eq!(
        Constructor::new(&model).build_greedy_route(3),
        Err(ModelError::OutOfRange {
            index: 3,
            num_systems: 3
        })
    );
}

#[test]
fn test_greedy_routes_are_complete() {
    let model = scattered(35);
    let constructor = Constructor::new(&model);
    for start in 0..model.len() {
        let route = constructor.build_greedy_route(start).unwrap();
        assert_eq!(route.indices()[0], start);
        assert_permutation(&route, model.len());
    }
}

#[test]
fn test_best_start_is_no_worse_than_any_start() {
    let model = scattered(35);
    let constructor = Constructor::new(&model);
    let best = constructor.select_best_start().unwrap().total_length(&model);
    for start in 0..model.len() {
        let route = constructor.build_greedy_route(start).unwrap();
        assert!(best <= route.total_length(&model));
    }
}

#[test]
fn test_random_route() {
    let model = scattered(20);
    let constructor = Constructor::new(&model);
    let a = constructor.random_route(&mut SmallRng::seed_from_u64(9));
    let b = constructor.random_route(&mut SmallRng::seed_from_u64(9));
    assert_eq!(a, b);
    assert_permutation(&a, model.len());
}
