//! Deal pipeline: four ordered buckets of company references.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{CompanyId, Timestamp, ValidationError};

/// Named pipeline bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PipelineStage {
    Applicants,
    UnderReview,
    DueDiligence,
    Invested,
}

impl PipelineStage {
    pub fn all() -> &'static [PipelineStage] {
        &[
            PipelineStage::Applicants,
            PipelineStage::UnderReview,
            PipelineStage::DueDiligence,
            PipelineStage::Invested,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PipelineStage::Applicants => "applicants",
            PipelineStage::UnderReview => "underReview",
            PipelineStage::DueDiligence => "dueDiligence",
            PipelineStage::Invested => "invested",
        }
    }
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PipelineStage {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PipelineStage::all()
            .iter()
            .copied()
            .find(|stage| stage.as_str() == s)
            .ok_or_else(|| {
                ValidationError::invalid_format(
                    "stage",
                    format!(
                        "unknown pipeline stage '{}'; expected applicants, underReview, dueDiligence or invested",
                        s
                    ),
                )
            })
    }
}

/// A company reference sitting in one bucket.
///
/// Extra fields written by clients are carried through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineEntry {
    pub id: CompanyId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub moved_at: Option<Timestamp>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PipelineEntry {
    pub fn new(id: CompanyId, moved_at: Timestamp) -> Self {
        Self {
            id,
            moved_at: Some(moved_at),
            extra: Map::new(),
        }
    }
}

/// The four buckets. A company id appears in at most one bucket.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Pipeline {
    pub applicants: Vec<PipelineEntry>,
    pub under_review: Vec<PipelineEntry>,
    pub due_diligence: Vec<PipelineEntry>,
    pub invested: Vec<PipelineEntry>,
}

impl Pipeline {
    pub fn bucket(&self, stage: PipelineStage) -> &[PipelineEntry] {
        match stage {
            PipelineStage::Applicants => &self.applicants,
            PipelineStage::UnderReview => &self.under_review,
            PipelineStage::DueDiligence => &self.due_diligence,
            PipelineStage::Invested => &self.invested,
        }
    }

    fn bucket_mut(&mut self, stage: PipelineStage) -> &mut Vec<PipelineEntry> {
        match stage {
            PipelineStage::Applicants => &mut self.applicants,
            PipelineStage::UnderReview => &mut self.under_review,
            PipelineStage::DueDiligence => &mut self.due_diligence,
            PipelineStage::Invested => &mut self.invested,
        }
    }

    /// Which bucket currently holds the company, if any.
    pub fn stage_of(&self, id: &CompanyId) -> Option<PipelineStage> {
        PipelineStage::all()
            .iter()
            .copied()
            .find(|stage| self.bucket(*stage).iter().any(|e| &e.id == id))
    }

    /// Appends an entry to a bucket after dropping any copy held elsewhere.
    pub fn place(&mut self, stage: PipelineStage, entry: PipelineEntry) {
        for other in PipelineStage::all() {
            self.bucket_mut(*other).retain(|e| e.id != entry.id);
        }
        self.bucket_mut(stage).push(entry);
    }

    /// Removes the company from `from` and appends it to `to` with a fresh
    /// `movedAt`. Returns `None` (and changes nothing) when `from` does not
    /// hold the company.
    pub fn move_entry(
        &mut self,
        id: &CompanyId,
        from: PipelineStage,
        to: PipelineStage,
        at: Timestamp,
    ) -> Option<&PipelineEntry> {
        let source = self.bucket_mut(from);
        let position = source.iter().position(|e| &e.id == id)?;
        let mut entry = source.remove(position);
        entry.moved_at = Some(at);

        let destination = self.bucket_mut(to);
        destination.retain(|e| &e.id != id);
        destination.push(entry);
        destination.last()
    }

    pub fn len(&self, stage: PipelineStage) -> usize {
        self.bucket(stage).len()
    }
}
