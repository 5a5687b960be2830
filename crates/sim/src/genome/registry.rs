use crate::errors::GenotypeError;
use crate::genome::{Genotype, GenotypeInfo};
use parasim_codec::GenotypeId;
use rayon::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, OnceLock};

/// Flyweight store of canonical genotypes.
///
/// The registry owns one slot per genotype id, so lookups are a plain index.
/// A slot is filled at most once: when several threads ask for the same new
/// id concurrently, exactly one instance wins and every caller receives it.
/// Slots are never cleared, so an `Arc` handed out stays canonical for the
/// registry's lifetime.
#[derive(Debug)]
pub struct GenotypeRegistry {
    info: Arc<GenotypeInfo>,
    slots: Box<[OnceLock<Arc<Genotype>>]>,
    created: AtomicUsize,
}

impl GenotypeRegistry {
    /// Create an empty registry with one slot per genotype of `info`.
    pub fn new(info: Arc<GenotypeInfo>) -> Self {
        let slots = (0..info.total_genotypes()).map(|_| OnceLock::new()).collect();
        log::debug!("genotype registry: {} slots", info.total_genotypes());
        Self {
            info,
            slots,
            created: AtomicUsize::new(0),
        }
    }

    #[inline]
    pub fn info(&self) -> &Arc<GenotypeInfo> {
        &self.info
    }

    /// True if genotypes of `info` can be looked up here.
    pub fn serves(&self, info: &Arc<GenotypeInfo>) -> bool {
        Arc::ptr_eq(&self.info, info) || *self.info == **info
    }

    /// Number of slots, i.e. of valid ids.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of genotypes created so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.created.load(Ordering::Acquire)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The canonical genotype for `id`, if it has been created.
    pub fn get(&self, id: GenotypeId) -> Option<Arc<Genotype>> {
        self.slots.get(id)?.get().cloned()
    }

    /// The canonical genotype for `id`, creating it on first request.
    ///
    /// # Errors
    /// `OutOfRange` if `id` is not a valid genotype id; nothing is stored.
    pub fn get_or_create(&self, id: GenotypeId) -> Result<Arc<Genotype>, GenotypeError> {
        let slot = self.slots.get(id).ok_or(GenotypeError::OutOfRange {
            id,
            total: self.slots.len(),
        })?;
        if let Some(existing) = slot.get() {
            return Ok(Arc::clone(existing));
        }

        // Build outside the slot so a failure leaves it empty.
        let candidate = Genotype::new(id, Arc::clone(&self.info))?;
        let mut inserted = false;
        let canonical = slot.get_or_init(|| {
            inserted = true;
            Arc::new(candidate)
        });
        if inserted {
            self.created.fetch_add(1, Ordering::AcqRel);
            log::trace!("created genotype {}", canonical.with_id());
        }
        Ok(Arc::clone(canonical))
    }

    /// The canonical genotype expressing `alleles`.
    pub fn get_or_create_from_alleles(
        &self,
        alleles: &[usize],
    ) -> Result<Arc<Genotype>, GenotypeError> {
        let id = self.info.codec().encode(alleles)?;
        self.get_or_create(id)
    }

    /// Create every genotype, in parallel.
    pub fn populate(&self) -> Result<(), GenotypeError> {
        (0..self.slots.len())
            .into_par_iter()
            .try_for_each(|id| self.get_or_create(id).map(drop))?;
        log::debug!("genotype registry populated: {} genotypes", self.len());
        Ok(())
    }

    /// Created genotypes in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Genotype>> + '_ {
        self.slots.iter().filter_map(OnceLock::get)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing;
    use std::thread;

    #[test]
    fn test_get_or_create_is_canonical() {
        let registry = testing::registry(&testing::panel());
        let a = registry.get_or_create(5).unwrap();
        let b = registry.get_or_create(5).unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(registry.len(), 1);
        assert!(Arc::ptr_eq(&registry.get(5).unwrap(), &a));
    }

    #[test]
    fn test_get_before_create_is_none() {
        let registry = testing::registry(&testing::panel());
        assert!(registry.get(3).is_none());
        assert!(registry.get(99).is_none());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_out_of_range_is_not_stored() {
        let registry = testing::registry(&testing::panel());
        assert_eq!(registry.capacity(), 12);
        assert_eq!(
            registry.get_or_create(12).unwrap_err(),
            GenotypeError::OutOfRange { id: 12, total: 12 }
        );
        assert!(registry.is_empty());
    }

    #[test]
    fn test_from_alleles() {
        let registry = testing::registry(&testing::panel());
        let g = registry.get_or_create_from_alleles(&[1, 2, 1]).unwrap();
        assert_eq!(g.id(), 11);
        assert!(matches!(
            registry.get_or_create_from_alleles(&[1, 3, 1]),
            Err(GenotypeError::AlleleOutOfRange { locus: 1, allele: 3, radix: 3 })
        ));
        assert!(registry.get_or_create_from_alleles(&[1, 2]).is_err());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_populate_creates_all() {
        let registry = testing::registry(&testing::panel());
        registry.populate().unwrap();
        assert_eq!(registry.len(), 12);
        let ids: Vec<_> = registry.iter().map(|g| g.id()).collect();
        assert_eq!(ids, (0..12).collect::<Vec<_>>());
    }

    #[test]
    fn test_concurrent_first_access_yields_one_instance() {
        let registry = Arc::new(testing::registry(&testing::panel()));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let registry = Arc::clone(&registry);
                thread::spawn(move || registry.get_or_create(7).unwrap())
            })
            .collect();
        let results: Vec<Arc<Genotype>> = handles.into_iter().map(|h| h.join().unwrap()).collect();

        for g in &results {
            assert!(Arc::ptr_eq(g, &results[0]));
        }
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_parallel_requests_across_ids() {
        let registry = testing::registry(&testing::panel());
        let ids: Vec<usize> = (0..1200).map(|i| i % 12).collect();
        let got: Vec<Arc<Genotype>> = ids
            .par_iter()
            .map(|&id| registry.get_or_create(id).unwrap())
            .collect();

        assert_eq!(registry.len(), 12);
        for (g, &id) in got.iter().zip(&ids) {
            assert!(Arc::ptr_eq(g, &registry.get(id).unwrap()));
        }
    }
}
