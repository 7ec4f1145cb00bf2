//! Integration tests for KnnError variants.

use kvote_knn::{DataPoint, KnnConfig, KnnError, classify, evaluate, rank_neighbors};

fn reference() -> Vec<DataPoint> {
    vec![
        DataPoint::new(vec![0.0, 0.0], 0),
        DataPoint::new(vec![1.0, 1.0], 1),
    ]
}

#[test]
fn error_classify_k_zero() {
    let query = DataPoint::new(vec![0.0, 0.0], 0);
    let reference = reference();
    let result = classify(&reference, &query, 0);
    assert!(matches!(
        result,
        Err(KnnError::InvalidK {
            k: 0,
            n_reference: 2
        })
    ));
}

#[test]
fn error_classify_k_exceeds_reference() {
    let query = DataPoint::new(vec![0.0, 0.0], 0);
    let reference = reference();
    let result = classify(&reference, &query, 3);
    assert!(matches!(
        result,
        Err(KnnError::InvalidK {
            k: 3,
            n_reference: 2
        })
    ));
}

#[test]
fn error_classify_empty_reference() {
    let query = DataPoint::new(vec![0.0], 0);
    assert!(matches!(
        classify(&[], &query, 1),
        Err(KnnError::EmptyReferenceSet)
    ));
}

#[test]
fn error_rank_dimension_mismatch() {
    let query = DataPoint::new(vec![0.0, 0.0, 0.0], 0);
    assert!(matches!(
        rank_neighbors(&reference(), &query),
        Err(KnnError::DimensionMismatch {
            expected: 2,
            got: 3
        })
    ));
}

#[test]
fn error_ragged_reference_is_caught() {
    // Loader normally prevents this; ranking still refuses to guess
    let reference = vec![
        DataPoint::new(vec![0.0, 0.0], 0),
        DataPoint::new(vec![1.0], 1),
    ];
    let query = DataPoint::new(vec![0.0, 0.0], 0);
    assert!(matches!(
        classify(&reference, &query, 1),
        Err(KnnError::DimensionMismatch {
            expected: 1,
            got: 2
        })
    ));
}

#[test]
fn error_evaluate_empty_queries() {
    let result = evaluate(&reference(), &[], &KnnConfig::new(1));
    assert!(matches!(result, Err(KnnError::EmptyQuerySet)));
}

#[test]
fn error_evaluate_empty_reference() {
    let queries = vec![DataPoint::new(vec![0.0], 0)];
    let result = evaluate(&[], &queries, &KnnConfig::new(1));
    assert!(matches!(result, Err(KnnError::EmptyReferenceSet)));
}

#[test]
fn error_evaluate_invalid_k_aborts_batch() {
    let queries = vec![DataPoint::new(vec![0.0, 0.0], 0); 5];
    let result = evaluate(&reference(), &queries, &KnnConfig::new(0));
    assert!(matches!(result, Err(KnnError::InvalidK { k: 0, .. })));
}

#[test]
fn error_evaluate_one_bad_query_fails_whole_run() {
    let mut queries = vec![DataPoint::new(vec![0.0, 0.0], 0); 10];
    queries.push(DataPoint::new(vec![0.0], 0));
    let result = evaluate(&reference(), &queries, &KnnConfig::new(1));
    assert!(matches!(result, Err(KnnError::DimensionMismatch { .. })));
}
