//! Model configuration.
//!
//! A [`Configuration`] is the serializable description of a genotype model:
//! the loci, the drugs and therapies, and the EC50 of every drug. It can be
//! loaded from JSON and turned into a validated [`Model`] with
//! [`Configuration::build`].

use super::model::Model;
use crate::errors::ConfigError;
use crate::genome::{GenotypeInfo, GenotypeRegistry};
use crate::therapy::{DrugDatabase, DrugType, Ec50Config, Ec50Table, Therapy, TherapyConfig};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

/// The master configuration struct.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Configuration {
    /// Ordered loci and their alleles.
    pub genotype_info: GenotypeInfo,
    /// Drug table; ids must be `0..drugs.len()`.
    #[serde(default)]
    pub drugs: Vec<DrugType>,
    #[serde(default)]
    pub therapies: Vec<TherapyConfig>,
    /// One entry per drug.
    #[serde(default)]
    pub ec50: Vec<Ec50Config>,
    /// Optional RNG seed for reproducibility
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Configuration {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        log::info!("loading configuration from {}", path.display());
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate the configuration and precompute everything a run needs.
    ///
    /// # Errors
    /// `ConfigError::Validation` if drug ids are not contiguous, a drug or
    /// therapy refers to something that does not exist, therapy ids repeat,
    /// or the EC50 entries do not cover every drug exactly once.
    pub fn build(&self) -> Result<Model, ConfigError> {
        let info = Arc::new(self.genotype_info.clone());

        let drugs = DrugDatabase::new(self.drugs.clone())?;
        drugs.validate(&info)?;
        validate_therapies(&self.therapies, &drugs)?;

        let ec50 = Ec50Table::build(&info, &drugs, &self.ec50)?;
        let registry = Arc::new(GenotypeRegistry::new(Arc::clone(&info)));

        log::info!(
            "model: {} loci, {} genotypes, {} drugs, {} therapies",
            info.num_loci(),
            info.total_genotypes(),
            drugs.len(),
            self.therapies.len()
        );

        Ok(Model::new(
            info,
            registry,
            drugs,
            self.therapies.clone(),
            ec50,
            self.seed,
        ))
    }
}

fn validate_therapies(therapies: &[TherapyConfig], drugs: &DrugDatabase) -> Result<(), ConfigError> {
    let mut ids = HashSet::with_capacity(therapies.len());
    for therapy in therapies {
        if !ids.insert(therapy.id()) {
            return Err(ConfigError::Validation(format!(
                "therapy id {} is used twice",
                therapy.id()
            )));
        }
    }

    for therapy in therapies {
        match therapy {
            TherapyConfig::Compound(t) => {
                if let Some(&bad) = t.drug_ids.iter().find(|&&d| d >= drugs.len()) {
                    return Err(ConfigError::Validation(format!(
                        "therapy {}: drug {bad} not in drug table",
                        t.id
                    )));
                }
            }
            TherapyConfig::MultiCourse(t) => {
                if t.therapy_ids.len() != t.start_days.len() {
                    return Err(ConfigError::Validation(format!(
                        "therapy {}: {} courses but {} start days",
                        t.id,
                        t.therapy_ids.len(),
                        t.start_days.len()
                    )));
                }
                if let Some(&bad) = t.therapy_ids.iter().find(|id| !ids.contains(*id)) {
                    return Err(ConfigError::Validation(format!(
                        "therapy {}: course {bad} is not a known therapy",
                        t.id
                    )));
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const PANEL: &str = r#"{
        "genotype_info": {
            "loci": [
                { "name": "crt", "alleles": [
                    { "short_name": "K", "mutation_values": [1] },
                    { "short_name": "T", "daily_cost_of_resistance": 0.1,
                      "mutation_level": 1, "mutation_values": [0] }
                ]},
                { "name": "k13", "alleles": [
                    { "short_name": "C", "mutation_values": [1] },
                    { "short_name": "Y", "daily_cost_of_resistance": 0.2,
                      "mutation_level": 1, "mutation_values": [0] }
                ]}
            ]
        },
        "drugs": [
            { "id": 0, "name": "CQ", "affecting_loci": [0], "selecting_alleles": [[1]] },
            { "id": 1, "name": "ART", "n": 2.0, "affecting_loci": [1], "selecting_alleles": [[1]] }
        ],
        "therapies": [
            { "kind": "compound", "id": 0, "drug_ids": [0, 1], "dosing_days": 3 },
            { "kind": "multi_course", "id": 1, "therapy_ids": [0], "start_days": [0] }
        ],
        "ec50": [
            { "drug_id": 0, "default": 0.5,
              "overrides": [ { "alleles": [1, null], "ec50": 1.5 } ] },
            { "drug_id": 1, "default": 0.6 }
        ],
        "seed": 42
    }"#;

    #[test]
    fn test_build_from_json() {
        let config = Configuration::from_json_str(PANEL).unwrap();
        assert_eq!(config.seed, Some(42));

        let model = config.build().unwrap();
        assert_eq!(model.info().total_genotypes(), 4);
        assert_eq!(model.drugs().len(), 2);
        assert_eq!(model.ec50().get(2, 0).unwrap(), 1.5);
        assert!((model.ec50().get(0, 1).unwrap() - 0.36).abs() < 1e-12);
    }

    #[test]
    fn test_json_round_trip() {
        let config = Configuration::from_json_str(PANEL).unwrap();
        let json = config.to_json_string().unwrap();
        assert_eq!(Configuration::from_json_str(&json).unwrap(), config);
    }

    #[test]
    fn test_invalid_locus_table_is_rejected_at_parse() {
        let json = PANEL.replace("\"daily_cost_of_resistance\": 0.1", "\"daily_cost_of_resistance\": 1.5");
        assert!(matches!(
            Configuration::from_json_str(&json),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_oversized_genotype_space_is_rejected_at_parse() {
        let locus = r#"{ "name": "l", "alleles": [ { "short_name": "w" }, { "short_name": "m" } ] }"#;
        let loci = vec![locus; 62].join(",");
        let json = format!(
            r#"{{ "genotype_info": {{ "loci": [{loci}] }}, "drugs": [], "therapies": [], "ec50": [] }}"#
        );
        assert!(matches!(
            Configuration::from_json_str(&json),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_unknown_therapy_drug() {
        let mut config = Configuration::from_json_str(PANEL).unwrap();
        config.therapies[0] = TherapyConfig::Compound(crate::therapy::CompoundTherapy::new(0, vec![0, 5], 3));
        assert!(matches!(config.build(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_duplicate_therapy_id() {
        let mut config = Configuration::from_json_str(PANEL).unwrap();
        let copy = config.therapies[0].clone();
        config.therapies.push(copy);
        assert!(matches!(config.build(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_multi_course_refers_to_known_therapies() {
        let mut config = Configuration::from_json_str(PANEL).unwrap();
        config.therapies[1] = TherapyConfig::MultiCourse(crate::therapy::MultiCourseTherapy::new(
            1,
            vec![9],
            vec![0],
        ));
        assert!(config.build().is_err());
    }

    #[test]
    fn test_missing_ec50_entry() {
        let mut config = Configuration::from_json_str(PANEL).unwrap();
        config.ec50.pop();
        assert!(matches!(config.build(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.json");
        std::fs::write(&path, PANEL).unwrap();
        let config = Configuration::from_path(&path).unwrap();
        assert_eq!(config.drugs.len(), 2);

        assert!(matches!(
            Configuration::from_path(dir.path().join("missing.json")),
            Err(ConfigError::Io(_))
        ));
    }
}
