use std::collections::HashSet;

use crate::model::RegionName;

/// Regions answered correctly during the current session.
///
/// Grows monotonically: there is no removal API. Insertion order is kept so
/// the lit-region series can be replayed in the order regions were answered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegionState {
    answered: HashSet<RegionName>,
    order: Vec<RegionName>,
}

impl RegionState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `region`; returns `true` only when it was not already present.
    pub fn insert(&mut self, region: RegionName) -> bool {
        if self.answered.contains(&region) {
            return false;
        }
        self.answered.insert(region.clone());
        self.order.push(region);
        true
    }

    #[must_use]
    pub fn contains(&self, region: &str) -> bool {
        self.answered.contains(region)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    #[must_use]
    pub fn lit_order(&self) -> &[RegionName] {
        &self.order
    }
}
