use super::drug::DrugId;
use serde::{Deserialize, Serialize};

/// Identifier of a therapy.
pub type TherapyId = usize;

/// A treatment that can be handed to an infected host.
///
/// Resistance is only defined for therapies that expose their component
/// drugs. The default implementation of [`Therapy::drug_ids`] returns `None`,
/// and genotypes are never resistant to such therapies.
pub trait Therapy {
    fn id(&self) -> TherapyId;

    /// Component drugs, if this therapy is a compound course of drugs.
    fn drug_ids(&self) -> Option<&[DrugId]> {
        None
    }
}

/// A single course combining one or more drugs taken together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompoundTherapy {
    pub id: TherapyId,
    pub drug_ids: Vec<DrugId>,
    /// Length of the course in days.
    #[serde(default)]
    pub dosing_days: u32,
}

impl CompoundTherapy {
    pub fn new(id: TherapyId, drug_ids: Vec<DrugId>, dosing_days: u32) -> Self {
        Self {
            id,
            drug_ids,
            dosing_days,
        }
    }
}

impl Therapy for CompoundTherapy {
    fn id(&self) -> TherapyId {
        self.id
    }

    fn drug_ids(&self) -> Option<&[DrugId]> {
        Some(&self.drug_ids)
    }
}

/// A schedule of other therapies started on given days.
///
/// It does not expose drugs of its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiCourseTherapy {
    pub id: TherapyId,
    pub therapy_ids: Vec<TherapyId>,
    pub start_days: Vec<u32>,
}

impl MultiCourseTherapy {
    pub fn new(id: TherapyId, therapy_ids: Vec<TherapyId>, start_days: Vec<u32>) -> Self {
        Self {
            id,
            therapy_ids,
            start_days,
        }
    }
}

impl Therapy for MultiCourseTherapy {
    fn id(&self) -> TherapyId {
        self.id
    }
}

/// Therapy variants as they appear in configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TherapyConfig {
    Compound(CompoundTherapy),
    MultiCourse(MultiCourseTherapy),
}

impl Therapy for TherapyConfig {
    fn id(&self) -> TherapyId {
        match self {
            Self::Compound(t) => t.id(),
            Self::MultiCourse(t) => t.id(),
        }
    }

    fn drug_ids(&self) -> Option<&[DrugId]> {
        match self {
            Self::Compound(t) => t.drug_ids(),
            Self::MultiCourse(t) => t.drug_ids(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compound_exposes_drugs() {
        let t = CompoundTherapy::new(3, vec![0, 2], 3);
        assert_eq!(t.id(), 3);
        assert_eq!(t.drug_ids(), Some(&[0, 2][..]));
    }

    #[test]
    fn test_multi_course_has_no_drugs() {
        let t = MultiCourseTherapy::new(4, vec![0, 1], vec![0, 7]);
        assert_eq!(t.drug_ids(), None);
    }

    #[test]
    fn test_config_tagged_by_kind() {
        let json = r#"[
            { "kind": "compound", "id": 0, "drug_ids": [0, 1], "dosing_days": 3 },
            { "kind": "multi_course", "id": 1, "therapy_ids": [0], "start_days": [0] }
        ]"#;
        let therapies: Vec<TherapyConfig> = serde_json::from_str(json).unwrap();
        assert_eq!(therapies[0].drug_ids(), Some(&[0, 1][..]));
        assert_eq!(therapies[1].id(), 1);
        assert_eq!(therapies[1].drug_ids(), None);
    }
}
