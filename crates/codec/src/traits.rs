use crate::error::CodecError;
use crate::GenotypeId;

/// Core trait for genotype codecs.
///
/// A codec is a bijection between the genotype id space `[0, total)` and the
/// per-locus allele-index vectors it describes:
/// 1.  `encode`: Take an allele-index vector and turn it into its id.
/// 2.  `decode`: Take an id and turn it back into the allele-index vector.
///
/// `decode(encode(v)) == v` and `encode(decode(id)) == id` must hold for
/// every valid input.
pub trait Codec {
    fn encode(&self, alleles: &[usize]) -> Result<GenotypeId, CodecError>;
    fn decode(&self, id: GenotypeId) -> Result<Vec<usize>, CodecError>;
}
