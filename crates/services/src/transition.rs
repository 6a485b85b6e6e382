use std::time::Duration;

use quiz_core::model::RegionName;

/// Name of the deferred hand-off from the quiz dialog to the knowledge dialog.
pub const QUIZ_TO_KNOWLEDGE: &str = "quiz-to-knowledge";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TransitionId(u64);

impl TransitionId {
    #[must_use]
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// A named task the event loop should fire after `delay`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScheduledTransition {
    pub id: TransitionId,
    pub name: &'static str,
    pub region: RegionName,
    pub delay: Duration,
}

/// Holds at most one pending transition.
///
/// Firing is keyed by id: once cancelled or replaced, an older id no longer matches.
#[derive(Debug, Default)]
pub struct TransitionSlot {
    next_id: u64,
    pending: Option<ScheduledTransition>,
}

impl TransitionSlot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, region: RegionName, delay: Duration) -> ScheduledTransition {
        self.next_id = self.next_id.wrapping_add(1);
        let transition = ScheduledTransition {
            id: TransitionId(self.next_id),
            name: QUIZ_TO_KNOWLEDGE,
            region,
            delay,
        };
        self.pending = Some(transition.clone());
        transition
    }

    pub fn cancel(&mut self) -> Option<ScheduledTransition> {
        self.pending.take()
    }

    /// Remove and return the pending transition if it matches `id`.
    pub fn take_if(&mut self, id: TransitionId) -> Option<ScheduledTransition> {
        if self.pending.as_ref().is_some_and(|pending| pending.id == id) {
            return self.pending.take();
        }
        None
    }

    #[must_use]
    pub fn pending(&self) -> Option<&ScheduledTransition> {
        self.pending.as_ref()
    }
}
