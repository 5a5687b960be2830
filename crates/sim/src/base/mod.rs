//! Scalar value types shared across the crate.

pub mod fitness;

pub use fitness::FitnessValue;
