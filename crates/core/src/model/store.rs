use std::collections::HashMap;

use crate::model::{QuestionRecord, RegionName};

/// Read-only mapping from region name to its question.
///
/// Built once when the question document loads and shared for the rest of the
/// session; there is no mutation API.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionStore {
    records: HashMap<RegionName, QuestionRecord>,
}

impl QuestionStore {
    #[must_use]
    pub fn from_records(records: impl IntoIterator<Item = (RegionName, QuestionRecord)>) -> Self {
        Self {
            records: records.into_iter().collect(),
        }
    }

    /// Exact-match lookup. Unknown regions return `None`.
    #[must_use]
    pub fn lookup(&self, region: &str) -> Option<&QuestionRecord> {
        self.records.get(region)
    }

    /// Resolves a raw name to the stored key, if the store knows it.
    #[must_use]
    pub fn resolve(&self, region: &str) -> Option<&RegionName> {
        self.records.get_key_value(region).map(|(name, _)| name)
    }

    #[must_use]
    pub fn contains(&self, region: &str) -> bool {
        self.records.contains_key(region)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Region names in sorted order.
    #[must_use]
    pub fn region_names(&self) -> Vec<&RegionName> {
        let mut names: Vec<_> = self.records.keys().collect();
        names.sort();
        names
    }

    pub fn iter(&self) -> impl Iterator<Item = (&RegionName, &QuestionRecord)> {
        self.records.iter()
    }
}
