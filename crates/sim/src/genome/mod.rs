//! Genotype model: loci and alleles, the immutable genotype, and the
//! registry that hands out one shared instance per genotype id.

mod genotype;
mod locus;
mod registry;

pub use genotype::{Genotype, WithId};
pub use locus::{Allele, GenotypeInfo, Locus, MAX_GENOTYPES};
pub use registry::GenotypeRegistry;
