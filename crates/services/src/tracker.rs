use std::sync::Arc;

use quiz_core::model::{QuestionStore, RegionName, RegionState};

/// Tracks which regions have been answered and gates question eligibility.
#[derive(Debug, Clone)]
pub struct RegionTracker {
    store: Arc<QuestionStore>,
    answered: RegionState,
}

impl RegionTracker {
    #[must_use]
    pub fn new(store: Arc<QuestionStore>) -> Self {
        Self {
            store,
            answered: RegionState::new(),
        }
    }

    #[must_use]
    pub fn is_answered(&self, region: &str) -> bool {
        self.answered.contains(region)
    }

    /// Record a correct answer. Returns `true` only the first time, so callers
    /// can fire side effects exactly once.
    pub fn mark_answered(&mut self, region: RegionName) -> bool {
        self.answered.insert(region)
    }

    /// A region may open a question only if the store knows it and it is unanswered.
    #[must_use]
    pub fn eligible_for_question(&self, region: &str) -> bool {
        self.store.contains(region) && !self.is_answered(region)
    }

    #[must_use]
    pub fn answered(&self) -> &RegionState {
        &self.answered
    }

    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.answered.len()
    }

    #[must_use]
    pub fn total_regions(&self) -> usize {
        self.store.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::QuestionRecord;

    fn tracker() -> RegionTracker {
        let record = QuestionRecord::new("Q", vec!["A".into(), "B".into()], "A", "K", "i.png");
        let store = QuestionStore::from_records([
            (RegionName::new("湖南").unwrap(), record.clone()),
            (RegionName::new("江西").unwrap(), record),
        ]);
        RegionTracker::new(Arc::new(store))
    }

    #[test]
    fn unanswered_known_region_is_eligible() {
        let tracker = tracker();
        assert!(tracker.eligible_for_question("湖南"));
        assert!(!tracker.is_answered("湖南"));
    }

    #[test]
    fn unknown_region_is_never_eligible() {
        let tracker = tracker();
        assert!(!tracker.eligible_for_question("南海诸岛"));
    }

    #[test]
    fn answered_region_stays_ineligible() {
        let mut tracker = tracker();
        let region = RegionName::new("江西").unwrap();

        assert!(tracker.mark_answered(region.clone()));
        assert!(!tracker.mark_answered(region));

        for _ in 0..3 {
            assert!(!tracker.eligible_for_question("江西"));
        }
        assert!(tracker.eligible_for_question("湖南"));
        assert_eq!(tracker.answered_count(), 1);
        assert_eq!(tracker.total_regions(), 2);
    }
}
