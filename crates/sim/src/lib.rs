//! # Simulation Crate
//!
//! The `sim` crate models parasite genotypes for drug-resistance simulation.
//! It includes modules for the locus table and immutable genotypes, drug and
//! therapy resistance, EC50 lookup, point mutation, and loading a validated
//! model from configuration.

pub mod base;
pub mod errors;
pub mod evolution;
pub mod genome;
pub mod prelude;
pub mod simulation;
pub mod therapy;

#[cfg(test)]
mod testing;

pub use base::FitnessValue;
pub use genome::{Genotype, GenotypeInfo, GenotypeRegistry};
pub use parasim_codec::GenotypeId;
