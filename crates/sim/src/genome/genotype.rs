use crate::base::FitnessValue;
use crate::errors::GenotypeError;
use crate::genome::{GenotypeInfo, GenotypeRegistry};
use crate::therapy::{DrugDatabase, DrugId, DrugType, Ec50Table, Therapy};
use parasim_codec::{check_weights, GenotypeId};
use rand::Rng;
use std::fmt;
use std::sync::Arc;

/// A multi-locus pathogen genotype.
///
/// A `Genotype` is fully determined by its id: the allele expressed at every
/// locus is decoded from the id, and the fitness multiplier and
/// resistance-position score are derived from those alleles once, at
/// construction. Instances are immutable; the canonical instance for an id is
/// handed out by [`GenotypeRegistry`] and shared through `Arc`.
///
/// `Display` prints the short names of the expressed alleles in locus order.
/// Short names need not be fixed-width, so the printed form is for humans; the
/// id is the canonical representation.
#[derive(Debug)]
pub struct Genotype {
    id: GenotypeId,
    gene_expression: Vec<usize>,
    fitness_multiplier: FitnessValue,
    resistance_position_score: u32,
    info: Arc<GenotypeInfo>,
}

impl Genotype {
    /// Decode `id` against `info` and derive fitness and score.
    ///
    /// # Errors
    /// `OutOfRange` if `id` is not below the number of genotypes.
    pub fn new(id: GenotypeId, info: Arc<GenotypeInfo>) -> Result<Self, GenotypeError> {
        let gene_expression = info.codec().decode(id)?;

        let expressed = || {
            info.loci()
                .iter()
                .zip(&gene_expression)
                .map(|(locus, &allele)| &locus.alleles[allele])
        };
        let fitness_multiplier =
            FitnessValue::from_costs(expressed().map(|a| a.daily_cost_of_resistance));
        let resistance_position_score = expressed().map(|a| a.mutation_level).sum();

        Ok(Self {
            id,
            gene_expression,
            fitness_multiplier,
            resistance_position_score,
            info,
        })
    }

    /// Like [`Genotype::new`], with a caller-supplied weight vector that must
    /// agree with `info`.
    ///
    /// # Errors
    /// `DimensionMismatch` if the weights do not describe `info`'s loci.
    pub fn with_weights(
        id: GenotypeId,
        info: Arc<GenotypeInfo>,
        weights: &[usize],
    ) -> Result<Self, GenotypeError> {
        check_weights(info.codec().radices(), weights).map_err(|e| {
            GenotypeError::DimensionMismatch(format!("weight vector does not match loci: {e}"))
        })?;
        Self::new(id, info)
    }

    #[inline]
    pub fn id(&self) -> GenotypeId {
        self.id
    }

    /// Expressed allele index per locus.
    #[inline]
    pub fn gene_expression(&self) -> &[usize] {
        &self.gene_expression
    }

    /// `Π (1 - daily_cost_of_resistance)` over the expressed alleles.
    #[inline]
    pub fn fitness_multiplier(&self) -> FitnessValue {
        self.fitness_multiplier
    }

    /// Sum of `mutation_level` over the expressed alleles.
    #[inline]
    pub fn resistance_position_score(&self) -> u32 {
        self.resistance_position_score
    }

    #[inline]
    pub fn info(&self) -> &Arc<GenotypeInfo> {
        &self.info
    }

    /// Allele expressed at `locus`.
    pub fn allele_at(&self, locus: usize) -> Option<usize> {
        self.gene_expression.get(locus).copied()
    }

    /// True if any single marker monitored by `drug` is expressed.
    ///
    /// One resistant allele at one affecting locus is enough; markers at the
    /// other loci are not required. Expects a drug that passed
    /// [`DrugType::validate`] against this genotype's table.
    pub fn resist_to(&self, drug: &DrugType) -> bool {
        drug.markers().any(|(locus, alleles)| {
            self.allele_at(locus)
                .is_some_and(|expressed| alleles.contains(&expressed))
        })
    }

    /// True if the genotype resists any drug of a compound therapy.
    ///
    /// Stops at the first resisted drug. Therapies that do not expose a drug
    /// list are never resisted.
    ///
    /// # Errors
    /// `LookupMiss` if the therapy names a drug missing from `drugs`.
    pub fn resist_to_therapy<T>(&self, therapy: &T, drugs: &DrugDatabase) -> Result<bool, GenotypeError>
    where
        T: Therapy + ?Sized,
    {
        let Some(drug_ids) = therapy.drug_ids() else {
            return Ok(false);
        };
        for &drug_id in drug_ids {
            if self.resist_to(drugs.get(drug_id)?) {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// The genotype that differs from this one only by expressing `allele` at
    /// `locus`.
    ///
    /// Returns this very instance if the allele is already expressed,
    /// otherwise the registry's canonical instance for the new id. The
    /// receiver is never modified, and an invalid locus or allele leaves the
    /// registry untouched.
    ///
    /// # Errors
    /// `DimensionMismatch` for an invalid locus or a foreign registry;
    /// `AlleleOutOfRange` if `allele` is not an allele of `locus`.
    pub fn combine_mutation_to(
        self: &Arc<Self>,
        locus: usize,
        allele: usize,
        registry: &GenotypeRegistry,
    ) -> Result<Arc<Genotype>, GenotypeError> {
        let current = self.allele_at(locus).ok_or_else(|| {
            GenotypeError::DimensionMismatch(format!(
                "locus {locus} out of range ({} loci)",
                self.gene_expression.len()
            ))
        })?;
        if current == allele {
            return Ok(Arc::clone(self));
        }
        if !registry.serves(&self.info) {
            return Err(GenotypeError::DimensionMismatch(
                "registry was built for a different genotype table".to_string(),
            ));
        }

        let new_id = self.info.codec().substitute(self.id, locus, allele)?;
        registry.get_or_create(new_id)
    }

    /// `EC50^n` of this genotype for `drug_id`.
    ///
    /// # Errors
    /// `LookupMiss` if the table has no such entry.
    pub fn get_ec50(&self, drug_id: DrugId, table: &Ec50Table) -> Result<f64, GenotypeError> {
        table.get(self.id, drug_id)
    }

    /// Same as [`Genotype::get_ec50`], keyed by the drug itself.
    pub fn get_ec50_power_n(&self, drug: &DrugType, table: &Ec50Table) -> Result<f64, GenotypeError> {
        self.get_ec50(drug.id, table)
    }

    /// Pick, uniformly at random, one of the declared mutation targets of the
    /// allele expressed at `locus`.
    ///
    /// # Errors
    /// `DimensionMismatch` for an invalid locus; `NoMutationTarget` if the
    /// expressed allele declares no targets.
    pub fn select_mutation_allele<R: Rng + ?Sized>(
        &self,
        locus: usize,
        rng: &mut R,
    ) -> Result<usize, GenotypeError> {
        let current = self.allele_at(locus).ok_or_else(|| {
            GenotypeError::DimensionMismatch(format!(
                "locus {locus} out of range ({} loci)",
                self.gene_expression.len()
            ))
        })?;
        let targets = &self.info.loci()[locus].alleles[current].mutation_values;
        if targets.is_empty() {
            return Err(GenotypeError::NoMutationTarget {
                locus,
                allele: current,
            });
        }
        Ok(targets[rng.random_range(0..targets.len())])
    }

    /// Display adapter printing `"<id>\t<short names>"`.
    pub fn with_id(&self) -> WithId<'_> {
        WithId(self)
    }
}

impl PartialEq for Genotype {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && Arc::ptr_eq(&self.info, &other.info)
    }
}

impl Eq for Genotype {}

impl fmt::Display for Genotype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (locus, &allele) in self.info.loci().iter().zip(&self.gene_expression) {
            f.write_str(&locus.alleles[allele].short_name)?;
        }
        Ok(())
    }
}

/// See [`Genotype::with_id`].
pub struct WithId<'a>(&'a Genotype);

impl fmt::Display for WithId<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}", self.0.id, self.0)
    }
}
