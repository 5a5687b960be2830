//! Configuration loading and the validated model built from it.

pub mod configs;
mod model;

pub use configs::Configuration;
pub use model::Model;
