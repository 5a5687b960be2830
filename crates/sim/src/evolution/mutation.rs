//! Point mutation of genotypes.
//!
//! A mutation picks one locus, draws the new allele uniformly from the
//! expressed allele's mutation targets, and resolves the resulting genotype
//! through the registry so the returned instance is canonical.

use crate::errors::GenotypeError;
use crate::genome::{Genotype, GenotypeRegistry};
use rand::Rng;
use std::fmt;
use std::sync::Arc;

/// Outcome of one mutation.
#[derive(Debug, Clone)]
pub struct MutationEvent {
    /// Mutated locus.
    pub locus: usize,
    /// Allele before the mutation.
    pub from: usize,
    /// Allele after the mutation.
    pub to: usize,
    /// Canonical genotype after the mutation.
    pub genotype: Arc<Genotype>,
}

impl MutationEvent {
    /// True if the drawn target equals the current allele.
    pub fn is_silent(&self) -> bool {
        self.from == self.to
    }
}

impl fmt::Display for MutationEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let locus = &self.genotype.info().loci()[self.locus];
        write!(
            f,
            "{}: {} -> {} ({})",
            locus.name,
            locus.alleles[self.from].display_name(),
            locus.alleles[self.to].display_name(),
            self.genotype.with_id()
        )
    }
}

/// Mutate `genotype` at `locus`.
///
/// # Errors
/// `DimensionMismatch` for an invalid locus or a foreign registry;
/// `NoMutationTarget` if the expressed allele declares no targets.
pub fn mutate_at<R: Rng + ?Sized>(
    genotype: &Arc<Genotype>,
    locus: usize,
    registry: &GenotypeRegistry,
    rng: &mut R,
) -> Result<MutationEvent, GenotypeError> {
    let to = genotype.select_mutation_allele(locus, rng)?;
    let from = genotype.gene_expression()[locus];
    let mutated = genotype.combine_mutation_to(locus, to, registry)?;
    log::trace!(
        "mutation at locus {locus}: {} -> {}",
        genotype.id(),
        mutated.id()
    );
    Ok(MutationEvent {
        locus,
        from,
        to,
        genotype: mutated,
    })
}

/// Mutate `genotype` at a locus drawn uniformly.
pub fn mutate_random_locus<R: Rng + ?Sized>(
    genotype: &Arc<Genotype>,
    registry: &GenotypeRegistry,
    rng: &mut R,
) -> Result<MutationEvent, GenotypeError> {
    let num_loci = genotype.gene_expression().len();
    if num_loci == 0 {
        return Err(GenotypeError::DimensionMismatch(
            "genotype has no loci to mutate".to_string(),
        ));
    }
    let locus = rng.random_range(0..num_loci);
    mutate_at(genotype, locus, registry, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genome::{Allele, GenotypeInfo, Locus};
    use crate::testing;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;

    #[test]
    fn test_mutate_at_follows_targets() {
        let info = testing::panel();
        let registry = testing::registry(&info);
        let wild = registry.get_or_create(0).unwrap();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);

        for _ in 0..50 {
            let event = mutate_at(&wild, 1, &registry, &mut rng).unwrap();
            assert_eq!(event.locus, 1);
            assert_eq!(event.from, 0);
            assert!(event.to == 1 || event.to == 2);
            assert!(!event.is_silent());
            assert_eq!(event.genotype.id(), event.to * 2);
            assert!(Arc::ptr_eq(
                &event.genotype,
                &registry.get(event.genotype.id()).unwrap()
            ));
        }
    }

    #[test]
    fn test_mutate_at_reaches_every_target() {
        let info = testing::panel();
        let registry = testing::registry(&info);
        let wild = registry.get_or_create(0).unwrap();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(7);

        let mut seen = [false; 3];
        for _ in 0..200 {
            seen[mutate_at(&wild, 1, &registry, &mut rng).unwrap().to] = true;
        }
        assert_eq!(seen, [false, true, true]);
    }

    #[test]
    fn test_mutate_at_is_deterministic_under_seed() {
        let info = testing::panel();
        let registry = testing::registry(&info);
        let wild = registry.get_or_create(0).unwrap();

        let run = |seed| {
            let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
            (0..20)
                .map(|_| mutate_random_locus(&wild, &registry, &mut rng).unwrap().genotype.id())
                .collect::<Vec<_>>()
        };
        assert_eq!(run(3), run(3));
    }

    #[test]
    fn test_mutate_random_locus_changes_one_locus() {
        let info = testing::panel();
        let registry = testing::registry(&info);
        let start = registry.get_or_create(7).unwrap();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(11);

        for _ in 0..100 {
            let event = mutate_random_locus(&start, &registry, &mut rng).unwrap();
            let before = start.gene_expression();
            let after = event.genotype.gene_expression();
            let changed: Vec<_> = (0..3).filter(|&i| before[i] != after[i]).collect();
            assert_eq!(changed, vec![event.locus]);
            assert_eq!(after[event.locus], event.to);
        }
    }

    #[test]
    fn test_mutate_invalid_locus() {
        let info = testing::panel();
        let registry = testing::registry(&info);
        let wild = registry.get_or_create(0).unwrap();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(1);
        assert!(matches!(
            mutate_at(&wild, 3, &registry, &mut rng),
            Err(GenotypeError::DimensionMismatch(_))
        ));
    }

    #[test]
    fn test_mutate_without_targets() {
        let info = Arc::new(
            GenotypeInfo::new(vec![Locus::new("fixed", vec![Allele::new("x"), Allele::new("y")])])
                .unwrap(),
        );
        let registry = GenotypeRegistry::new(Arc::clone(&info));
        let g = registry.get_or_create(1).unwrap();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(1);
        assert_eq!(
            mutate_random_locus(&g, &registry, &mut rng).unwrap_err(),
            GenotypeError::NoMutationTarget { locus: 0, allele: 1 }
        );
    }

    #[test]
    fn test_event_display() {
        let info = testing::two_loci();
        let registry = testing::registry(&info);
        let g = registry.get_or_create(0).unwrap();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(5);
        let event = mutate_at(&g, 1, &registry, &mut rng).unwrap();
        assert_eq!(event.to_string(), "b: b -> B (1\taB)");
    }
}
