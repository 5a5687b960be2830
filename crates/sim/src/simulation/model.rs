use crate::errors::GenotypeError;
use crate::genome::{Genotype, GenotypeInfo, GenotypeRegistry};
use crate::therapy::{DrugDatabase, DrugId, Ec50Table, Therapy, TherapyConfig, TherapyId};
use parasim_codec::GenotypeId;
use std::sync::Arc;

/// A validated, ready-to-run genotype model.
///
/// Built by [`Configuration::build`](super::Configuration::build). Every
/// table here is complete for the genotype space, so lookups within range
/// cannot miss.
#[derive(Debug)]
pub struct Model {
    info: Arc<GenotypeInfo>,
    registry: Arc<GenotypeRegistry>,
    drugs: DrugDatabase,
    therapies: Vec<TherapyConfig>,
    ec50: Ec50Table,
    seed: Option<u64>,
}

impl Model {
    pub(super) fn new(
        info: Arc<GenotypeInfo>,
        registry: Arc<GenotypeRegistry>,
        drugs: DrugDatabase,
        therapies: Vec<TherapyConfig>,
        ec50: Ec50Table,
        seed: Option<u64>,
    ) -> Self {
        Self {
            info,
            registry,
            drugs,
            therapies,
            ec50,
            seed,
        }
    }

    pub fn info(&self) -> &Arc<GenotypeInfo> {
        &self.info
    }

    pub fn registry(&self) -> &Arc<GenotypeRegistry> {
        &self.registry
    }

    pub fn drugs(&self) -> &DrugDatabase {
        &self.drugs
    }

    pub fn therapies(&self) -> &[TherapyConfig] {
        &self.therapies
    }

    pub fn ec50(&self) -> &Ec50Table {
        &self.ec50
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn therapy(&self, id: TherapyId) -> Result<&TherapyConfig, GenotypeError> {
        self.therapies
            .iter()
            .find(|t| t.id() == id)
            .ok_or_else(|| GenotypeError::LookupMiss(format!("therapy {id} not configured")))
    }

    /// Canonical genotype for `id`.
    pub fn genotype(&self, id: GenotypeId) -> Result<Arc<Genotype>, GenotypeError> {
        self.registry.get_or_create(id)
    }

    /// Whether genotype `id` resists therapy `therapy`.
    pub fn resists(&self, id: GenotypeId, therapy: TherapyId) -> Result<bool, GenotypeError> {
        let therapy = self.therapy(therapy)?;
        self.genotype(id)?.resist_to_therapy(therapy, &self.drugs)
    }

    /// Every genotype resistant to `drug`, in id order.
    pub fn resistant_to(&self, drug: DrugId) -> Result<Vec<Arc<Genotype>>, GenotypeError> {
        let drug = self.drugs.get(drug)?;
        self.registry.populate()?;
        Ok(self
            .registry
            .iter()
            .filter(|g| g.resist_to(drug))
            .cloned()
            .collect())
    }
}
