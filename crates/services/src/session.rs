use std::sync::Arc;

use tracing::{debug, info};

use quiz_core::model::{QuestionStore, QuizSettings, RegionName};

use crate::error::InteractionError;
use crate::knowledge_dialog::KnowledgeDialog;
use crate::map_adapter::{MapAdapter, MapClick, MapSurface};
use crate::quiz_dialog::{QuizDialog, Verdict};
use crate::tracker::RegionTracker;
use crate::transition::{ScheduledTransition, TransitionId, TransitionSlot};

/// Which dialog's backdrop received a click.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Backdrop {
    Quiz,
    Knowledge,
}

/// Every trigger the event loop can deliver to a session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    RegionClicked(MapClick),
    SelectOption(String),
    CloseQuiz,
    CloseKnowledge,
    BackdropClicked(Backdrop),
    TransitionElapsed(TransitionId),
}

/// What the event loop should do, or render, after an intent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizEffect {
    None,
    QuizOpened(RegionName),
    Answered(Verdict),
    /// The answer was correct; fire `TransitionElapsed` after the delay.
    ScheduleTransition(ScheduledTransition),
    KnowledgeOpened(RegionName),
    Closed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuizProgress {
    pub answered: usize,
    pub total: usize,
}

/// Everything one loaded quiz needs, owned in one place.
///
/// A session only exists after the question store has loaded, so no event can
/// reach it earlier.
pub struct QuizSession {
    store: Arc<QuestionStore>,
    settings: QuizSettings,
    tracker: RegionTracker,
    quiz: QuizDialog,
    knowledge: KnowledgeDialog,
    map: MapAdapter,
    transition: TransitionSlot,
}

impl QuizSession {
    /// Build a session and hand the initial map option to `surface`.
    #[must_use]
    pub fn new(
        store: Arc<QuestionStore>,
        settings: QuizSettings,
        surface: Box<dyn MapSurface>,
    ) -> Self {
        let mut map = MapAdapter::new(
            Arc::clone(&store),
            settings.theme().clone(),
            settings.map_name(),
            surface,
        );
        map.configure_surface();

        Self {
            tracker: RegionTracker::new(Arc::clone(&store)),
            store,
            settings,
            quiz: QuizDialog::new(),
            knowledge: KnowledgeDialog::new(),
            map,
            transition: TransitionSlot::new(),
        }
    }

    #[must_use]
    pub fn store(&self) -> &QuestionStore {
        &self.store
    }

    #[must_use]
    pub fn settings(&self) -> &QuizSettings {
        &self.settings
    }

    #[must_use]
    pub fn tracker(&self) -> &RegionTracker {
        &self.tracker
    }

    #[must_use]
    pub fn quiz(&self) -> &QuizDialog {
        &self.quiz
    }

    #[must_use]
    pub fn knowledge(&self) -> &KnowledgeDialog {
        &self.knowledge
    }

    #[must_use]
    pub fn map(&self) -> &MapAdapter {
        &self.map
    }

    #[must_use]
    pub fn pending_transition(&self) -> Option<&ScheduledTransition> {
        self.transition.pending()
    }

    #[must_use]
    pub fn progress(&self) -> QuizProgress {
        QuizProgress {
            answered: self.tracker.answered_count(),
            total: self.tracker.total_regions(),
        }
    }

    /// Single entry point for UI events. Benign failures are absorbed.
    pub fn dispatch(&mut self, intent: QuizIntent) -> QuizEffect {
        let result = match intent {
            QuizIntent::RegionClicked(click) => self.handle_click(&click),
            QuizIntent::SelectOption(option) => self.submit(&option),
            QuizIntent::CloseQuiz | QuizIntent::BackdropClicked(Backdrop::Quiz) => {
                Ok(self.close_quiz())
            }
            QuizIntent::CloseKnowledge | QuizIntent::BackdropClicked(Backdrop::Knowledge) => {
                Ok(self.close_knowledge())
            }
            QuizIntent::TransitionElapsed(id) => self.complete_transition(id),
        };

        result.unwrap_or_else(|err| {
            debug!(error = %err, "ignored quiz event");
            QuizEffect::None
        })
    }

    /// Resolve a map click and open its question when eligible.
    ///
    /// # Errors
    ///
    /// Returns `InteractionError` when the region is unknown, already answered,
    /// or a dialog is covering the map.
    pub fn handle_click(&mut self, click: &MapClick) -> Result<QuizEffect, InteractionError> {
        if self.quiz.is_visible() || self.knowledge.is_visible() {
            return Err(InteractionError::DialogOpen);
        }
        let region = self
            .map
            .resolve_click(click)
            .ok_or_else(|| InteractionError::LookupMiss(click.name.clone()))?;
        self.open_quiz(region)
    }

    /// Open the quiz dialog for `region`.
    ///
    /// # Errors
    ///
    /// Returns `InteractionError` if the region is not eligible for a question.
    pub fn open_quiz(&mut self, region: RegionName) -> Result<QuizEffect, InteractionError> {
        if !self.tracker.eligible_for_question(region.as_str()) {
            return Err(if self.tracker.is_answered(region.as_str()) {
                InteractionError::AlreadyAnswered(region)
            } else {
                InteractionError::LookupMiss(region.into())
            });
        }
        let record = self
            .store
            .lookup(region.as_str())
            .cloned()
            .ok_or_else(|| InteractionError::LookupMiss(region.to_string()))?;

        debug!(%region, "opening question");
        self.quiz.open(region.clone(), record);
        Ok(QuizEffect::QuizOpened(region))
    }

    /// Check the selected option for the active question.
    ///
    /// A correct answer marks the region, lights it on the map once, and
    /// schedules the hand-off to the knowledge dialog.
    ///
    /// # Errors
    ///
    /// Returns `InteractionError::InvalidSubmission` when no question is active.
    pub fn submit(&mut self, selected: &str) -> Result<QuizEffect, InteractionError> {
        let verdict = self.quiz.submit(selected)?;
        if !verdict.is_correct() {
            debug!(region = %verdict.region(), "incorrect answer");
            return Ok(QuizEffect::Answered(verdict));
        }

        let region = verdict.region();
        if self.tracker.mark_answered(region.clone()) {
            self.map.apply_answered_visual(region);
            info!(%region, answered = self.tracker.answered_count(), "region answered");
        }

        let scheduled = self
            .transition
            .schedule(region.clone(), self.settings.transition_delay());
        Ok(QuizEffect::ScheduleTransition(scheduled))
    }

    /// Fire a scheduled transition: close the quiz and show the knowledge dialog.
    ///
    /// # Errors
    ///
    /// Returns `InteractionError::StaleTransition` if `id` was cancelled or replaced.
    pub fn complete_transition(&mut self, id: TransitionId) -> Result<QuizEffect, InteractionError> {
        let transition = self
            .transition
            .take_if(id)
            .ok_or(InteractionError::StaleTransition)?;
        if !self.quiz.finish_transition(&transition.region) {
            // A quiz opened after the answer gives way to the knowledge dialog.
            self.quiz.close();
        }
        self.open_knowledge(transition.region)
    }

    /// Drop the pending transition, if any, without firing it. Nothing in the
    /// quiz flow calls this; closing the quiz leaves the transition pending.
    pub fn cancel_transition(&mut self) -> Option<ScheduledTransition> {
        self.transition.cancel()
    }

    /// Show the knowledge dialog for `region`, independent of the quiz dialog.
    ///
    /// # Errors
    ///
    /// Returns `InteractionError::LookupMiss` if the region has no record.
    pub fn open_knowledge(&mut self, region: RegionName) -> Result<QuizEffect, InteractionError> {
        let record = self
            .store
            .lookup(region.as_str())
            .ok_or_else(|| InteractionError::LookupMiss(region.to_string()))?;
        let title = self.settings.knowledge_title(region.as_str());
        self.knowledge.open(region.clone(), title, record);
        Ok(QuizEffect::KnowledgeOpened(region))
    }

    /// Hide the quiz dialog. The answered set and any pending transition are
    /// left alone, so the knowledge dialog still opens when the delay elapses.
    pub fn close_quiz(&mut self) -> QuizEffect {
        if self.quiz.close().is_none() {
            return QuizEffect::None;
        }
        if let Some(pending) = self.transition.pending() {
            debug!(
                region = %pending.region,
                id = pending.id.value(),
                "quiz closed with transition pending"
            );
        }
        QuizEffect::Closed
    }

    pub fn close_knowledge(&mut self) -> QuizEffect {
        if self.knowledge.close() {
            QuizEffect::Closed
        } else {
            QuizEffect::None
        }
    }
}
