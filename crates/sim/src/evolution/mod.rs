//! Evolutionary operators on genotypes.
//!
//! Mutation moves a genotype to a neighbour that differs at exactly one
//! locus, following the allele's declared mutation targets.

pub mod mutation;

pub use mutation::{mutate_at, mutate_random_locus, MutationEvent};
