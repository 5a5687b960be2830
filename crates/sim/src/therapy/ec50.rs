//! Drug potency per genotype.
//!
//! The simulation reads potency as `EC50^n`, where `n` is the drug's Hill
//! coefficient. The table is computed once, for every genotype id and every
//! drug, so any lookup within range is a plain read.

use super::drug::{DrugDatabase, DrugId};
use crate::errors::{ConfigError, GenotypeError};
use crate::genome::GenotypeInfo;
use parasim_codec::GenotypeId;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// One allele pattern with its EC50.
///
/// `alleles` has one entry per locus; `None` matches any allele.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ec50Override {
    pub alleles: Vec<Option<usize>>,
    pub ec50: f64,
}

impl Ec50Override {
    pub fn matches(&self, gene_expression: &[usize]) -> bool {
        self.alleles.len() == gene_expression.len()
            && self
                .alleles
                .iter()
                .zip(gene_expression)
                .all(|(pattern, &allele)| pattern.map_or(true, |p| p == allele))
    }
}

/// EC50 configuration of one drug: a default value and ordered overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ec50Config {
    pub drug_id: DrugId,
    pub default: f64,
    #[serde(default)]
    pub overrides: Vec<Ec50Override>,
}

impl Ec50Config {
    /// EC50 of a genotype: the first matching override, else the default.
    pub fn ec50_for(&self, gene_expression: &[usize]) -> f64 {
        self.overrides
            .iter()
            .find(|o| o.matches(gene_expression))
            .map_or(self.default, |o| o.ec50)
    }

    fn validate(&self, info: &GenotypeInfo) -> Result<(), ConfigError> {
        let positive = |v: f64| v.is_finite() && v > 0.0;
        if !positive(self.default) {
            return Err(ConfigError::Validation(format!(
                "EC50 of drug {} must be positive, got {}",
                self.drug_id, self.default
            )));
        }
        for o in &self.overrides {
            if o.alleles.len() != info.num_loci() {
                return Err(ConfigError::Validation(format!(
                    "EC50 override of drug {} has {} entries for {} loci",
                    self.drug_id,
                    o.alleles.len(),
                    info.num_loci()
                )));
            }
            for (locus, (allele, l)) in o.alleles.iter().zip(info.loci()).enumerate() {
                if let Some(a) = *allele {
                    if a >= l.radix() {
                        return Err(ConfigError::Validation(format!(
                            "EC50 override of drug {}: allele {a} at locus {locus} exceeds allele count {}",
                            self.drug_id,
                            l.radix()
                        )));
                    }
                }
            }
            if !positive(o.ec50) {
                return Err(ConfigError::Validation(format!(
                    "EC50 override of drug {} must be positive, got {}",
                    self.drug_id, o.ec50
                )));
            }
        }
        Ok(())
    }
}

/// Dense `(genotype id, drug id) -> EC50^n` table.
#[derive(Debug, Clone, PartialEq)]
pub struct Ec50Table {
    num_drugs: usize,
    values: Vec<f64>,
}

impl Ec50Table {
    /// Fill a table from a function of `(genotype, drug)`.
    pub fn from_fn<F>(num_genotypes: usize, num_drugs: usize, f: F) -> Self
    where
        F: Fn(GenotypeId, DrugId) -> f64 + Sync,
    {
        let values = (0..num_genotypes * num_drugs)
            .into_par_iter()
            .map(|i| f(i / num_drugs.max(1), i % num_drugs.max(1)))
            .collect();
        Self { num_drugs, values }
    }

    /// Build a table from one row per genotype.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, ConfigError> {
        let num_drugs = rows.first().map_or(0, Vec::len);
        if let Some(bad) = rows.iter().position(|r| r.len() != num_drugs) {
            return Err(ConfigError::Validation(format!(
                "EC50 row {bad} has {} entries, expected {num_drugs}",
                rows[bad].len()
            )));
        }
        Ok(Self {
            num_drugs,
            values: rows.into_iter().flatten().collect(),
        })
    }

    /// Compute `EC50^n` for every genotype and drug.
    ///
    /// Every drug in `drugs` needs exactly one entry in `configs`.
    pub fn build(
        info: &GenotypeInfo,
        drugs: &DrugDatabase,
        configs: &[Ec50Config],
    ) -> Result<Self, ConfigError> {
        let mut by_drug: Vec<Option<&Ec50Config>> = vec![None; drugs.len()];
        for config in configs {
            config.validate(info)?;
            let slot = by_drug.get_mut(config.drug_id).ok_or_else(|| {
                ConfigError::Validation(format!("EC50 given for unknown drug {}", config.drug_id))
            })?;
            if slot.replace(config).is_some() {
                return Err(ConfigError::Validation(format!(
                    "EC50 given twice for drug {}",
                    config.drug_id
                )));
            }
        }
        let by_drug = by_drug
            .into_iter()
            .enumerate()
            .map(|(id, c)| {
                c.ok_or_else(|| ConfigError::Validation(format!("no EC50 given for drug {id}")))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let codec = info.codec();
        let num_drugs = drugs.len();
        let rows = codec
            .ids()
            .into_par_iter()
            .map(|id| -> Result<Vec<f64>, ConfigError> {
                let expression = codec.decode(id)?;
                Ok(drugs
                    .iter()
                    .zip(&by_drug)
                    .map(|(drug, config)| config.ec50_for(&expression).powf(drug.n))
                    .collect::<Vec<f64>>())
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        log::debug!(
            "EC50 table: {} genotypes x {num_drugs} drugs",
            rows.len()
        );

        Ok(Self {
            num_drugs,
            values: rows.into_iter().flatten().collect(),
        })
    }

    pub fn num_genotypes(&self) -> usize {
        if self.num_drugs == 0 {
            0
        } else {
            self.values.len() / self.num_drugs
        }
    }

    pub fn num_drugs(&self) -> usize {
        self.num_drugs
    }

    /// All drug values of one genotype.
    pub fn row(&self, genotype: GenotypeId) -> Option<&[f64]> {
        let start = genotype.checked_mul(self.num_drugs)?;
        self.values.get(start..start.checked_add(self.num_drugs)?)
    }

    /// Read `table[genotype][drug]`.
    ///
    /// A miss means the table was built for a different genotype or drug
    /// table; it is reported, never substituted.
    pub fn get(&self, genotype: GenotypeId, drug: DrugId) -> Result<f64, GenotypeError> {
        if drug >= self.num_drugs {
            return Err(GenotypeError::LookupMiss(format!(
                "EC50 table has no drug {drug} ({} drugs)",
                self.num_drugs
            )));
        }
        self.row(genotype)
            .map(|row| row[drug])
            .ok_or_else(|| {
                GenotypeError::LookupMiss(format!(
                    "EC50 table has no genotype {genotype} ({} genotypes)",
                    self.num_genotypes()
                ))
            })
    }
}
