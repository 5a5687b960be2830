//! Mixed-radix genotype encoding.
//!
//! A multi-locus genotype is identified by a single integer: every locus is a
//! digit whose base is the number of alleles at that locus. This crate provides
//! the bijection between that id and the per-locus allele-index vector.

mod batch;
mod error;
mod mixed_radix;
mod traits;
mod utils;

pub use error::CodecError as Error;
pub use error::CodecError;
pub use mixed_radix::MixedRadix;
pub use traits::Codec;
pub use utils::{check_weights, compute_weights};

/// Canonical identifier of a genotype, in `[0, Π radix)`.
pub type GenotypeId = usize;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codec_trait_round_trip() {
        let codec: Box<dyn Codec> = Box::new(MixedRadix::new(vec![3, 2, 5]).unwrap());
        let alleles = vec![2, 1, 4];
        let id = codec.encode(&alleles).unwrap();
        assert_eq!(id, 29);
        assert_eq!(codec.decode(id).unwrap(), alleles);
    }
}
