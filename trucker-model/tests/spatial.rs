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
                (t * 7.3) % 11.0,
                (t * t * 0.37) % 13.0,
                (t * 2.9) % 5.0 - 2.5,
            )
        })
        .collect();
    SpatialModel::new(&records).unwrap()
}

#[test]
fn test_indices_follow_input_order() {
    let model = triangle();
    assert_eq!(model.len(), 3);
    for (i, name) in ["A", "B", "C"].iter().enumerate() {
        let system = model.system(i).unwrap();
        assert_eq!(system.index, i);
        assert_eq!(&system.name, name);
    }
    assert_eq!(model.position(2).unwrap().y, 4.0);
}

#[test]
fn test_triangle_distances() {
    let model = triangle();
    assert_eq!(model.distance(0, 1).unwrap(), 3.0);
    assert_eq!(model.distance(1, 2).unwrap(), 4.0);
    assert_eq!(model.distance(0, 2).unwrap(), 5.0);
}

#[test]
fn test_distance_symmetry() {
    let model = scattered(25);
    for i in 0..model.len() {
        for j in 0..model.len() {
            if i != j {
                assert_eq!(model.distance(i, j).unwrap(), model.distance(j, i).unwrap());
            }
        }
    }
}

#[test]
fn test_out_of_range() {
    let model = triangle();
    assert_eq!(
        model.distance(0, 3),
        Err(ModelError::OutOfRange {
            index: 3,
            num_systems: 3
        })
    );
    assert!(model.distance(7, 0).is_err());
    assert!(model.system(3).is_err());
    assert!(model.ordered_distances(3).is_err());
}

#[test]
fn test_ordered_distances() {
    let model = triangle();
    assert_eq!(model.ordered_distances(0).unwrap(), &[(1, 3.0), (2, 5.0)]);
    assert_eq!(model.ordered_distances(2).unwrap(), &[(1, 4.0), (0, 5.0)]);

    let model = scattered(30);
    for i in 0..model.len() {
        let ordered = model.ordered_distances(i).unwrap();
        assert_eq!(ordered.len(), model.len() - 1);
        assert!(ordered.iter().all(|&(j, _)| j != i));
        assert!(ordered.windows(2).all(|w| w[0].1 <= w[1].1));
    }
}

#[test]
fn test_ordered_distances_ties_keep_index_order() {
    let model = SpatialModel::new(&[
        StarRecord::new("Centre", 0.0, 0.0, 0.0),
        StarRecord::new("East", 1.0, 0.0, 0.0),
        StarRecord::new("West", -1.0, 0.0, 0.0),
        StarRecord::new("Up", 0.0, 0.0, 1.0),
    ])
    .unwrap();
    assert_eq!(
        model.ordered_distances(0).unwrap(),
        &[(1, 1.0), (2, 1.0), (3, 1.0)]
    );
}

#[test]
fn test_empty_model() {
    assert_eq!(SpatialModel::new(&[]).unwrap_err(), ModelError::EmptyModel);
}
