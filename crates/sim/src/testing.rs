//! Fixtures shared by the unit tests.

use crate::genome::{Allele, GenotypeInfo, GenotypeRegistry, Locus};
use crate::therapy::{DrugDatabase, DrugType};
use std::sync::Arc;

/// A biallelic locus whose alleles mutate into each other.
pub(crate) fn biallelic(name: &str, wild: &str, mutant: &str, cost: f64) -> Locus {
    Locus::new(
        name,
        vec![
            Allele::new(wild).with_mutation_values(vec![1]),
            Allele::new(mutant)
                .with_cost(cost)
                .with_mutation_level(1)
                .with_mutation_values(vec![0]),
        ],
    )
}

/// Three loci with costs `[0.1, 0, 0.2]` on their second allele; the middle
/// locus is triallelic (`N`, `Y`, `F`) with `N -> {Y, F}`.
pub(crate) fn panel() -> Arc<GenotypeInfo> {
    let loci = vec![
        biallelic("crt", "K", "T", 0.1),
        Locus::new(
            "mdr1",
            vec![
                Allele::new("N").with_mutation_values(vec![1, 2]),
                Allele::new("Y")
                    .with_mutation_level(1)
                    .with_mutation_values(vec![0]),
                Allele::new("F")
                    .with_mutation_level(2)
                    .with_mutation_values(vec![0]),
            ],
        ),
        biallelic("k13", "C", "Y", 0.2),
    ];
    Arc::new(GenotypeInfo::new(loci).unwrap())
}

/// Two biallelic loci, radices `[2, 2]`.
pub(crate) fn two_loci() -> Arc<GenotypeInfo> {
    Arc::new(
        GenotypeInfo::new(vec![
            biallelic("a", "a", "A", 0.0),
            biallelic("b", "b", "B", 0.0),
        ])
        .unwrap(),
    )
}

pub(crate) fn registry(info: &Arc<GenotypeInfo>) -> GenotypeRegistry {
    GenotypeRegistry::new(Arc::clone(info))
}

/// Drug 0 selects allele 1 at locus 0; drug 1 selects allele 1 at locus 1.
pub(crate) fn drugs_for_two_loci() -> DrugDatabase {
    DrugDatabase::new(vec![
        DrugType::new(0, "A", vec![0], vec![vec![1]]),
        DrugType::new(1, "B", vec![1], vec![vec![1]]),
    ])
    .unwrap()
}
