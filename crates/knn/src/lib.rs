//! Brute-force k-nearest-neighbor classification by majority vote.
//!
//! Every query is compared against every reference point under Euclidean
//! distance. The `k` closest points vote with their labels and the label
//! with the most votes wins.
//!
//! | Step | Rule |
//! |------|------|
//! | Ranking | Ascending distance; equal distances keep reference order |
//! | Vote | Strictly greatest count wins |
//! | Tie | Label first seen among the k neighbors wins |
//!
//! # Quick start
//!
//! ```
//! use kvote_knn::{DataPoint, KnnConfig, evaluate};
//!
//! let reference = vec![
//!     DataPoint::new(vec![0.0, 0.0], 0),
//!     DataPoint::new(vec![0.0, 1.0], 0),
//!     DataPoint::new(vec![5.0, 5.0], 1),
//! ];
//! let queries = vec![DataPoint::new(vec![0.0, 0.5], 0)];
//!
//! let eval = evaluate(&reference, &queries, &KnnConfig::new(3)).unwrap();
//! assert_eq!(eval.results()[0].predicted_label(), 0);
//! assert_eq!(eval.accuracy(), 1.0);
//! ```
//!
//! # Architecture
//!
//! ```text
//! evaluate()                    (evaluate.rs)
//!   ├─ validate k, queries, dimensions
//!   └─ per query: classify()    (classify.rs)
//!        ├─ rank_neighbors()    (index.rs, distance.rs)
//!        └─ VoteTally::winner() (vote.rs)
//! ```

pub mod classify;
pub mod config;
pub mod distance;
pub mod error;
pub mod evaluate;
pub mod index;
pub mod point;
pub mod result;

pub(crate) mod vote;

pub use classify::{Prediction, classify};
pub use config::KnnConfig;
pub use distance::euclidean_distance;
pub use error::KnnError;
pub use evaluate::{Evaluation, evaluate};
pub use index::{NeighborDistance, rank_neighbors};
pub use point::{DataPoint, Label};
pub use result::{ClassificationResult, EvaluationSummary};
