//! Locus and allele tables.
//!
//! A [`GenotypeInfo`] is the ordered list of loci monitored by the simulation,
//! loaded once from configuration and shared read-only for the whole run. The
//! mixed-radix codec used to number genotypes is derived from it.

use crate::errors::ConfigError;
use parasim_codec::{GenotypeId, MixedRadix};
use serde::{Deserialize, Serialize};

/// One possible value at a locus.
///
/// The allele's index is its position in [`Locus::alleles`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Allele {
    /// Token used when printing a genotype (e.g. `"K"`, `"76T"`).
    pub short_name: String,
    /// Descriptive name; falls back to the short name when empty.
    #[serde(default)]
    pub name: String,
    /// Fraction of daily fitness lost by carrying this allele, in [0, 1).
    #[serde(default)]
    pub daily_cost_of_resistance: f64,
    /// Weight added to the resistance-position score.
    #[serde(default)]
    pub mutation_level: u32,
    /// Allele indices (within the same locus) reachable by one mutation.
    #[serde(default)]
    pub mutation_values: Vec<usize>,
}

impl Allele {
    pub fn new(short_name: impl Into<String>) -> Self {
        Self {
            short_name: short_name.into(),
            name: String::new(),
            daily_cost_of_resistance: 0.0,
            mutation_level: 0,
            mutation_values: Vec::new(),
        }
    }

    pub fn with_cost(mut self, daily_cost_of_resistance: f64) -> Self {
        self.daily_cost_of_resistance = daily_cost_of_resistance;
        self
    }

    pub fn with_mutation_level(mut self, mutation_level: u32) -> Self {
        self.mutation_level = mutation_level;
        self
    }

    pub fn with_mutation_values(mut self, mutation_values: Vec<usize>) -> Self {
        self.mutation_values = mutation_values;
        self
    }

    /// The descriptive name, or the short name if none was given.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.short_name
        } else {
            &self.name
        }
    }
}

/// A genetic position with a fixed, ordered set of alleles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Locus {
    #[serde(default)]
    pub name: String,
    pub alleles: Vec<Allele>,
}

impl Locus {
    pub fn new(name: impl Into<String>, alleles: Vec<Allele>) -> Self {
        Self {
            name: name.into(),
            alleles,
        }
    }

    /// Number of alleles, i.e. this locus's digit base in the genotype id.
    #[inline]
    pub fn radix(&self) -> usize {
        self.alleles.len()
    }
}

#[derive(Serialize, Deserialize)]
struct LociTable {
    loci: Vec<Locus>,
}

/// Largest genotype space a model may declare.
///
/// Registries and EC50 tables allocate one slot per genotype up front.
pub const MAX_GENOTYPES: usize = i32::MAX as usize;

/// Ordered loci of the genotype model together with the derived codec.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "LociTable", into = "LociTable")]
pub struct GenotypeInfo {
    loci: Vec<Locus>,
    codec: MixedRadix,
}

impl GenotypeInfo {
    /// Validate the loci and derive their weight vector.
    ///
    /// # Errors
    /// Returns an error if:
    /// - a locus has no alleles, or the genotype space overflows `usize`
    /// - the genotype space is larger than [`MAX_GENOTYPES`]
    /// - a cost of resistance lies outside [0, 1)
    /// - a mutation target is not an allele of the same locus
    pub fn new(loci: Vec<Locus>) -> Result<Self, ConfigError> {
        let codec = MixedRadix::new(loci.iter().map(Locus::radix).collect())?;
        Self::validated(loci, codec)
    }

    /// Like [`GenotypeInfo::new`], but checks a precomputed weight vector
    /// against the loci instead of deriving it.
    pub fn with_weights(loci: Vec<Locus>, weights: Vec<usize>) -> Result<Self, ConfigError> {
        let codec = MixedRadix::with_weights(loci.iter().map(Locus::radix).collect(), weights)?;
        Self::validated(loci, codec)
    }

    fn validated(loci: Vec<Locus>, codec: MixedRadix) -> Result<Self, ConfigError> {
        if codec.total() > MAX_GENOTYPES {
            return Err(ConfigError::Validation(format!(
                "{} genotypes exceed the limit of {MAX_GENOTYPES}",
                codec.total()
            )));
        }
        for (l, locus) in loci.iter().enumerate() {
            let radix = locus.radix();
            for (a, allele) in locus.alleles.iter().enumerate() {
                let cost = allele.daily_cost_of_resistance;
                if !(0.0..1.0).contains(&cost) {
                    return Err(ConfigError::Validation(format!(
                        "locus {l} allele {a}: daily cost of resistance {cost} not in [0, 1)"
                    )));
                }
                if let Some(&bad) = allele.mutation_values.iter().find(|&&v| v >= radix) {
                    return Err(ConfigError::Validation(format!(
                        "locus {l} allele {a}: mutation target {bad} exceeds allele count {radix}"
                    )));
                }
            }
        }

        log::debug!(
            "genotype table: {} loci, radices {:?}, {} genotypes",
            loci.len(),
            codec.radices(),
            codec.total()
        );

        Ok(Self { loci, codec })
    }

    #[inline]
    pub fn loci(&self) -> &[Locus] {
        &self.loci
    }

    #[inline]
    pub fn num_loci(&self) -> usize {
        self.loci.len()
    }

    pub fn locus(&self, index: usize) -> Option<&Locus> {
        self.loci.get(index)
    }

    pub fn allele(&self, locus: usize, allele: usize) -> Option<&Allele> {
        self.loci.get(locus)?.alleles.get(allele)
    }

    /// The mixed-radix codec over these loci.
    #[inline]
    pub fn codec(&self) -> &MixedRadix {
        &self.codec
    }

    /// Positional weights, most significant locus first.
    #[inline]
    pub fn weights(&self) -> &[usize] {
        self.codec.weights()
    }

    /// Number of distinct genotypes, `Π radix`.
    #[inline]
    pub fn total_genotypes(&self) -> usize {
        self.codec.total()
    }

    #[inline]
    pub fn contains(&self, id: GenotypeId) -> bool {
        self.codec.contains(id)
    }
}

impl TryFrom<LociTable> for GenotypeInfo {
    type Error = ConfigError;

    fn try_from(table: LociTable) -> Result<Self, Self::Error> {
        Self::new(table.loci)
    }
}

impl From<GenotypeInfo> for LociTable {
    fn from(info: GenotypeInfo) -> Self {
        LociTable { loci: info.loci }
    }
}
