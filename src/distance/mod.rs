//! Distance matrices.
//!
//! Provides a dense Euclidean distance matrix over tour cities.

mod matrix;

pub use matrix::DistanceMatrix;
