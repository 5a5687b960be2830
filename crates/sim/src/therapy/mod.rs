//! Drugs, therapies and drug potency.
//!
//! - **Drugs**: which loci a drug monitors and which alleles resist it
//! - **Therapies**: courses of drugs; only compound courses expose drug ids
//! - **EC50**: precomputed potency per genotype and drug

mod course;
mod drug;
mod ec50;

pub use course::{CompoundTherapy, MultiCourseTherapy, Therapy, TherapyConfig, TherapyId};
pub use drug::{DrugDatabase, DrugId, DrugType};
pub use ec50::{Ec50Config, Ec50Override, Ec50Table};
