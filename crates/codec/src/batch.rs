use crate::error::CodecError;
use crate::mixed_radix::MixedRadix;
use crate::GenotypeId;
use rayon::prelude::*;

/// Below this many items the batch helpers stay on the calling thread.
const PARALLEL_THRESHOLD: usize = 4096;

impl MixedRadix {
    /// Decode many ids at once.
    ///
    /// Large batches are split across the rayon pool. The first failing id
    /// aborts the whole batch.
    pub fn decode_many(&self, ids: &[GenotypeId]) -> Result<Vec<Vec<usize>>, CodecError> {
        if ids.len() < PARALLEL_THRESHOLD {
            return ids.iter().map(|&id| self.decode(id)).collect();
        }
        ids.par_iter().map(|&id| self.decode(id)).collect()
    }

    /// Encode many allele vectors at once.
    pub fn encode_many(&self, alleles: &[Vec<usize>]) -> Result<Vec<GenotypeId>, CodecError> {
        if alleles.len() < PARALLEL_THRESHOLD {
            return alleles.iter().map(|v| self.encode(v)).collect();
        }
        alleles.par_iter().map(|v| self.encode(v)).collect()
    }
}
