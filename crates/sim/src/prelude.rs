//! Commonly used imports for convenience.
//!
//! # Example
//!
//! ```
//! use parasim_sim::prelude::*;
//! use std::sync::Arc;
//!
//! let info = Arc::new(
//!     GenotypeInfo::new(vec![Locus::new(
//!         "k13",
//!         vec![Allele::new("C"), Allele::new("Y").with_cost(0.1)],
//!     )])
//!     .unwrap(),
//! );
//! let registry = GenotypeRegistry::new(info);
//! assert_eq!(registry.get_or_create(1).unwrap().to_string(), "Y");
//! ```

pub use crate::base::FitnessValue;
pub use crate::errors::{ConfigError, GenotypeError};
pub use crate::evolution::{mutate_at, mutate_random_locus, MutationEvent};
pub use crate::genome::{Allele, Genotype, GenotypeInfo, GenotypeRegistry, Locus};
pub use crate::simulation::{Configuration, Model};
pub use crate::therapy::{
    CompoundTherapy, DrugDatabase, DrugId, DrugType, Ec50Table, MultiCourseTherapy, Therapy,
    TherapyConfig, TherapyId,
};
pub use parasim_codec::GenotypeId;
