use crate::errors::{ConfigError, GenotypeError};
use crate::genome::GenotypeInfo;
use serde::{Deserialize, Serialize};

/// Identifier of a drug, also its column in the EC50 table.
pub type DrugId = usize;

fn default_hill_coefficient() -> f64 {
    1.0
}

/// An antimalarial-style drug and the markers that confer resistance to it.
///
/// `affecting_loci[i]` is a monitored locus and `selecting_alleles[i]` the
/// alleles at that locus that resist the drug. A genotype carrying any one of
/// these markers is resistant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrugType {
    pub id: DrugId,
    #[serde(default)]
    pub name: String,
    /// Hill coefficient `n`; the EC50 table stores `EC50^n`.
    #[serde(default = "default_hill_coefficient")]
    pub n: f64,
    affecting_loci: Vec<usize>,
    selecting_alleles: Vec<Vec<usize>>,
}

impl DrugType {
    /// Build a drug from parallel marker lists.
    ///
    /// Only the list lengths are checked, and only in debug builds. Loci and
    /// alleles are not looked up, so a drug must pass [`DrugType::validate`]
    /// (or [`DrugDatabase::validate`]) against the genotype table before
    /// [`Genotype::resist_to`](crate::genome::Genotype::resist_to) is used with it.
    pub fn new(
        id: DrugId,
        name: impl Into<String>,
        affecting_loci: Vec<usize>,
        selecting_alleles: Vec<Vec<usize>>,
    ) -> Self {
        debug_assert_eq!(
            affecting_loci.len(),
            selecting_alleles.len(),
            "affecting loci and selecting allele sets must be parallel"
        );
        Self {
            id,
            name: name.into(),
            n: default_hill_coefficient(),
            affecting_loci,
            selecting_alleles,
        }
    }

    pub fn with_hill_coefficient(mut self, n: f64) -> Self {
        self.n = n;
        self
    }

    /// Ordered loci targeted by this drug.
    #[inline]
    pub fn affecting_loci(&self) -> &[usize] {
        &self.affecting_loci
    }

    /// Per affecting locus, the alleles that confer resistance.
    #[inline]
    pub fn selecting_alleles(&self) -> &[Vec<usize>] {
        &self.selecting_alleles
    }

    /// Iterate the monitored `(locus, resistant alleles)` pairs.
    pub fn markers(&self) -> impl Iterator<Item = (usize, &[usize])> + '_ {
        self.affecting_loci
            .iter()
            .copied()
            .zip(self.selecting_alleles.iter().map(Vec::as_slice))
    }

    /// Check the marker lists against the genotype table.
    pub fn validate(&self, info: &GenotypeInfo) -> Result<(), ConfigError> {
        if self.affecting_loci.len() != self.selecting_alleles.len() {
            return Err(ConfigError::Validation(format!(
                "drug {}: {} affecting loci but {} selecting allele sets",
                self.id,
                self.affecting_loci.len(),
                self.selecting_alleles.len()
            )));
        }
        if !(self.n.is_finite() && self.n > 0.0) {
            return Err(ConfigError::Validation(format!(
                "drug {}: Hill coefficient must be positive, got {}",
                self.id, self.n
            )));
        }

        for (locus, alleles) in self.markers() {
            let Some(l) = info.locus(locus) else {
                return Err(ConfigError::Validation(format!(
                    "drug {}: affecting locus {locus} does not exist ({} loci)",
                    self.id,
                    info.num_loci()
                )));
            };
            if let Some(&bad) = alleles.iter().find(|&&a| a >= l.radix()) {
                return Err(ConfigError::Validation(format!(
                    "drug {}: selecting allele {bad} at locus {locus} exceeds allele count {}",
                    self.id,
                    l.radix()
                )));
            }
        }
        Ok(())
    }
}

/// Drug table indexed by [`DrugId`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrugDatabase {
    drugs: Vec<DrugType>,
}

impl DrugDatabase {
    /// Build the table. Drug ids must be exactly `0..drugs.len()`, in any order.
    pub fn new(mut drugs: Vec<DrugType>) -> Result<Self, ConfigError> {
        drugs.sort_by_key(|d| d.id);
        for (expected, drug) in drugs.iter().enumerate() {
            if drug.id != expected {
                return Err(ConfigError::Validation(format!(
                    "drug ids must be contiguous from 0; expected {expected}, found {}",
                    drug.id
                )));
            }
        }
        Ok(Self { drugs })
    }

    /// Check every drug against the genotype table.
    pub fn validate(&self, info: &GenotypeInfo) -> Result<(), ConfigError> {
        self.drugs.iter().try_for_each(|d| d.validate(info))
    }

    pub fn get(&self, id: DrugId) -> Result<&DrugType, GenotypeError> {
        self.drugs
            .get(id)
            .ok_or_else(|| GenotypeError::LookupMiss(format!("drug {id} not in drug table")))
    }

    pub fn len(&self) -> usize {
        self.drugs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drugs.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DrugType> {
        self.drugs.iter()
    }
}

impl<'a> IntoIterator for &'a DrugDatabase {
    type Item = &'a DrugType;
    type IntoIter = std::slice::Iter<'a, DrugType>;

    fn into_iter(self) -> Self::IntoIter {
        self.drugs.iter()
    }
}
