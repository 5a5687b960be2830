use thiserror::Error;

/// Error type for mixed-radix codec operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    #[error("Genotype id {id} out of range (total combinations = {total})")]
    OutOfRange { id: usize, total: usize },
    #[error("Dimension mismatch: expected {expected} loci, found {found}")]
    DimensionMismatch { expected: usize, found: usize },
    #[error("Allele {allele} out of range at locus {locus} (radix = {radix})")]
    AlleleOutOfRange {
        locus: usize,
        allele: usize,
        radix: usize,
    },
    #[error("Locus {0} has no alleles")]
    EmptyLocus(usize),
    #[error("Weight mismatch at locus {locus}: expected {expected}, found {found}")]
    WeightMismatch {
        locus: usize,
        expected: usize,
        found: usize,
    },
    #[error("Genotype space overflows usize at locus {0}")]
    Overflow(usize),
}
