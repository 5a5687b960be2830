use crate::error::CodecError;
use crate::traits::Codec;
use crate::utils::{check_weights, compute_weights};
use crate::GenotypeId;
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Mixed-radix positional codec over an ordered list of loci.
///
/// # How it works
///
/// Each locus contributes `allele_index * weight` to the id, where the weight
/// of a locus is the product of the radices (allele counts) of every locus
/// after it. The first locus is the most significant digit, exactly like the
/// leftmost digit of a decimal number, except every position has its own base.
///
/// With radices `[2, 3, 4]` the weights are `[12, 4, 1]`, so the allele vector
/// `[1, 2, 3]` is id `1*12 + 2*4 + 3*1 = 23`, the last of the 24 combinations.
///
/// Serialized as its radix list; weights and total are rederived on load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<usize>", into = "Vec<usize>")]
pub struct MixedRadix {
    radices: Vec<usize>,
    weights: Vec<usize>,
    total: usize,
}

impl MixedRadix {
    /// Build a codec from the allele count of every locus.
    ///
    /// # Errors
    /// `EmptyLocus` if any radix is zero, `Overflow` if the number of
    /// combinations does not fit in a `usize`.
    pub fn new(radices: Vec<usize>) -> Result<Self, CodecError> {
        let (weights, total) = compute_weights(&radices)?;
        Ok(Self {
            radices,
            weights,
            total,
        })
    }

    /// Build a codec from radices and a precomputed weight vector.
    ///
    /// The weights must have one entry per locus and must match the weights
    /// derived from the radices.
    pub fn with_weights(radices: Vec<usize>, weights: Vec<usize>) -> Result<Self, CodecError> {
        let total = check_weights(&radices, &weights)?;
        Ok(Self {
            radices,
            weights,
            total,
        })
    }

    #[inline]
    pub fn radices(&self) -> &[usize] {
        &self.radices
    }

    #[inline]
    pub fn weights(&self) -> &[usize] {
        &self.weights
    }

    /// Number of loci (digits).
    #[inline]
    pub fn num_loci(&self) -> usize {
        self.radices.len()
    }

    /// Total number of combinations, `Π radix`.
    #[inline]
    pub fn total(&self) -> usize {
        self.total
    }

    /// Whether `id` is a valid genotype id for this codec.
    #[inline]
    pub fn contains(&self, id: GenotypeId) -> bool {
        id < self.total
    }

    /// All valid ids.
    #[inline]
    pub fn ids(&self) -> Range<GenotypeId> {
        0..self.total
    }

    fn check_id(&self, id: GenotypeId) -> Result<(), CodecError> {
        if self.contains(id) {
            Ok(())
        } else {
            Err(CodecError::OutOfRange {
                id,
                total: self.total,
            })
        }
    }

    fn check_locus(&self, locus: usize) -> Result<(), CodecError> {
        if locus < self.radices.len() {
            Ok(())
        } else {
            Err(CodecError::DimensionMismatch {
                expected: self.radices.len(),
                found: locus + 1,
            })
        }
    }

    fn check_allele(&self, locus: usize, allele: usize) -> Result<(), CodecError> {
        let radix = self.radices[locus];
        if allele < radix {
            Ok(())
        } else {
            Err(CodecError::AlleleOutOfRange {
                locus,
                allele,
                radix,
            })
        }
    }

    /// Decode `id` into `out`, reusing its allocation.
    pub fn decode_into(&self, id: GenotypeId, out: &mut Vec<usize>) -> Result<(), CodecError> {
        self.check_id(id)?;
        out.clear();
        out.reserve(self.weights.len());

        let mut rest = id;
        for &weight in &self.weights {
            out.push(rest / weight);
            rest %= weight;
        }
        Ok(())
    }

    /// Decode `id` into its allele-index vector (most significant locus first).
    pub fn decode(&self, id: GenotypeId) -> Result<Vec<usize>, CodecError> {
        let mut out = Vec::with_capacity(self.weights.len());
        self.decode_into(id, &mut out)?;
        Ok(out)
    }

    /// Encode an allele-index vector into its id.
    pub fn encode(&self, alleles: &[usize]) -> Result<GenotypeId, CodecError> {
        if alleles.len() != self.radices.len() {
            return Err(CodecError::DimensionMismatch {
                expected: self.radices.len(),
                found: alleles.len(),
            });
        }

        let mut id = 0;
        for (locus, (&allele, &weight)) in alleles.iter().zip(&self.weights).enumerate() {
            self.check_allele(locus, allele)?;
            id += allele * weight;
        }
        Ok(id)
    }

    /// The allele index at a single locus, without decoding the rest.
    pub fn digit(&self, id: GenotypeId, locus: usize) -> Result<usize, CodecError> {
        self.check_id(id)?;
        self.check_locus(locus)?;
        Ok((id / self.weights[locus]) % self.radices[locus])
    }

    /// Replace the allele at `locus` and return the resulting id.
    ///
    /// Only that locus's contribution to the sum changes:
    /// `id - old * weight[locus] + allele * weight[locus]`.
    pub fn substitute(
        &self,
        id: GenotypeId,
        locus: usize,
        allele: usize,
    ) -> Result<GenotypeId, CodecError> {
        let old = self.digit(id, locus)?;
        self.check_allele(locus, allele)?;

        let weight = self.weights[locus];
        Ok(id - old * weight + allele * weight)
    }
}

impl Codec for MixedRadix {
    fn encode(&self, alleles: &[usize]) -> Result<GenotypeId, CodecError> {
        MixedRadix::encode(self, alleles)
    }

    fn decode(&self, id: GenotypeId) -> Result<Vec<usize>, CodecError> {
        MixedRadix::decode(self, id)
    }
}

impl TryFrom<Vec<usize>> for MixedRadix {
    type Error = CodecError;

    fn try_from(radices: Vec<usize>) -> Result<Self, Self::Error> {
        Self::new(radices)
    }
}

impl From<MixedRadix> for Vec<usize> {
    fn from(codec: MixedRadix) -> Self {
        codec.radices
    }
}
