//! Edge case integration tests.

use approx::assert_abs_diff_eq;
use kvote_knn::{DataPoint, KnnConfig, classify, evaluate, rank_neighbors};

/// Single reference point: always the prediction.
#[test]
fn single_reference_point() {
    let reference = vec![DataPoint::new(vec![99.0], 7)];
    let query = DataPoint::new(vec![0.0], 0);
    let prediction = classify(&reference, &query, 1).unwrap();
    assert_eq!(prediction.label(), 7);
    assert_abs_diff_eq!(prediction.distances()[0], 99.0, epsilon = 1e-12);
}

/// Exact distance tie at the k-th position: earlier reference point votes.
#[test]
fn tie_at_kth_position_uses_reference_order() {
    // Both candidates for the 2nd slot sit at distance 1 from the query
    let reference = vec![
        DataPoint::new(vec![0.0], 0),
        DataPoint::new(vec![-1.0], 1),
        DataPoint::new(vec![1.0], 2),
    ];
    let query = DataPoint::new(vec![0.0], 0);
    let ranked = rank_neighbors(&reference, &query).unwrap();
    assert_eq!(ranked[1].index(), 1);
    assert_eq!(ranked[2].index(), 2);

    // k=2: votes {0:1, 1:1}; label 0 seen first
    assert_eq!(classify(&reference, &query, 2).unwrap().label(), 0);
}

/// k=1 with exact duplicates carrying different labels: first one wins.
#[test]
fn duplicate_points_different_labels() {
    let reference = vec![
        DataPoint::new(vec![2.0, 2.0], 5),
        DataPoint::new(vec![2.0, 2.0], 3),
    ];
    let query = DataPoint::new(vec![2.0, 2.0], 3);
    assert_eq!(classify(&reference, &query, 1).unwrap().label(), 5);
}

/// All identical points: distances all zero.
#[test]
fn identical_points() {
    let reference = vec![DataPoint::new(vec![5.0, 5.0], 1); 10];
    let query = DataPoint::new(vec![5.0, 5.0], 1);
    let prediction = classify(&reference, &query, 5).unwrap();
    assert_eq!(prediction.label(), 1);
    for d in prediction.distances() {
        assert!(d.abs() < 1e-12, "expected 0 distance, got {}", d);
    }
}

/// A point whose distance is undefined (inf - inf) never outranks a real one.
#[test]
fn undefined_distance_does_not_win_vote() {
    let reference = vec![
        DataPoint::new(vec![0.0], 0),
        DataPoint::new(vec![f64::INFINITY], 1),
    ];
    let query = DataPoint::new(vec![f64::INFINITY], 0);

    let ranked = rank_neighbors(&reference, &query).unwrap();
    assert_eq!(ranked[0].index(), 0);
    assert_eq!(ranked[0].distance(), f64::INFINITY);
    assert!(ranked[1].distance().is_nan());

    assert_eq!(classify(&reference, &query, 1).unwrap().label(), 0);
}

/// Negative labels are ordinary labels.
#[test]
fn negative_labels() {
    let reference = vec![
        DataPoint::new(vec![0.0], -1),
        DataPoint::new(vec![0.1], -1),
        DataPoint::new(vec![0.2], 1),
    ];
    let query = DataPoint::new(vec![0.15], -1);
    assert_eq!(classify(&reference, &query, 3).unwrap().label(), -1);
}

/// High-dimensional points take the general path.
#[test]
fn eight_dimensional() {
    let reference: Vec<DataPoint> = (0..20)
        .map(|i| DataPoint::new(vec![i as f64; 8], (i / 10) as i64))
        .collect();
    let query = DataPoint::new(vec![3.0; 8], 0);
    let prediction = classify(&reference, &query, 1).unwrap();
    assert_eq!(prediction.neighbors()[0].index(), 3);
    assert_eq!(prediction.label(), 0);
}

/// k equal to the reference size on a one-query batch.
#[test]
fn k_equals_reference_size() {
    let reference: Vec<DataPoint> = (0..6)
        .map(|i| DataPoint::new(vec![i as f64], i64::from(i < 4)))
        .collect();
    let queries = vec![DataPoint::new(vec![100.0], 1)];
    let eval = evaluate(&reference, &queries, &KnnConfig::new(6)).unwrap();
    assert_eq!(eval.results()[0].predicted_label(), 1);
    assert_eq!(eval.results()[0].distances().len(), 6);
}
