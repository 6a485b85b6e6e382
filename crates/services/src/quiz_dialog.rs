use quiz_core::model::{QuestionRecord, RegionName};

use crate::error::InteractionError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Feedback {
    Success,
    Failure,
}

/// Result of checking one selected option.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    Correct { region: RegionName },
    Incorrect { region: RegionName },
}

impl Verdict {
    #[must_use]
    pub fn is_correct(&self) -> bool {
        matches!(self, Verdict::Correct { .. })
    }

    #[must_use]
    pub fn region(&self) -> &RegionName {
        match self {
            Verdict::Correct { region } | Verdict::Incorrect { region } => region,
        }
    }
}

/// The question currently shown, with its last feedback.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizPrompt {
    region: RegionName,
    record: QuestionRecord,
    feedback: Option<Feedback>,
}

impl QuizPrompt {
    #[must_use]
    pub fn region(&self) -> &RegionName {
        &self.region
    }

    #[must_use]
    pub fn question(&self) -> &str {
        self.record.question()
    }

    /// Options exactly as the source listed them.
    #[must_use]
    pub fn options(&self) -> &[String] {
        self.record.options()
    }

    #[must_use]
    pub fn feedback(&self) -> Option<Feedback> {
        self.feedback
    }
}

//
// ─── STATE MACHINE ─────────────────────────────────────────────────────────────
//

/// `Closed → Open → (Open | Transitioning) → Closed`.
///
/// `Transitioning` keeps the success feedback visible until the scheduled
/// hand-off to the knowledge dialog fires or the dialog is closed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum QuizPhase {
    #[default]
    Closed,
    Open(QuizPrompt),
    Transitioning(QuizPrompt),
}

#[derive(Clone, Debug, Default)]
pub struct QuizDialog {
    phase: QuizPhase,
}

impl QuizDialog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn phase(&self) -> &QuizPhase {
        &self.phase
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        !matches!(self.phase, QuizPhase::Closed)
    }

    #[must_use]
    pub fn prompt(&self) -> Option<&QuizPrompt> {
        match &self.phase {
            QuizPhase::Closed => None,
            QuizPhase::Open(prompt) | QuizPhase::Transitioning(prompt) => Some(prompt),
        }
    }

    #[must_use]
    pub fn active_region(&self) -> Option<&RegionName> {
        self.prompt().map(QuizPrompt::region)
    }

    /// Show `record` for `region` with cleared feedback.
    ///
    /// Eligibility is checked by the caller.
    pub fn open(&mut self, region: RegionName, record: QuestionRecord) {
        self.phase = QuizPhase::Open(QuizPrompt {
            region,
            record,
            feedback: None,
        });
    }

    /// Check `selected` against the stored answer by exact text equality.
    ///
    /// # Errors
    ///
    /// Returns `InteractionError::InvalidSubmission` when no question is awaiting an answer.
    pub fn submit(&mut self, selected: &str) -> Result<Verdict, InteractionError> {
        let QuizPhase::Open(prompt) = &mut self.phase else {
            return Err(InteractionError::InvalidSubmission);
        };

        if prompt.record.is_correct(selected) {
            prompt.feedback = Some(Feedback::Success);
            let prompt = prompt.clone();
            let region = prompt.region.clone();
            self.phase = QuizPhase::Transitioning(prompt);
            Ok(Verdict::Correct { region })
        } else {
            prompt.feedback = Some(Feedback::Failure);
            Ok(Verdict::Incorrect {
                region: prompt.region.clone(),
            })
        }
    }

    /// Close the transition for `region`, if it is still the one pending.
    pub fn finish_transition(&mut self, region: &RegionName) -> bool {
        match &self.phase {
            QuizPhase::Transitioning(prompt) if prompt.region == *region => {
                self.phase = QuizPhase::Closed;
                true
            }
            _ => false,
        }
    }

    /// Hide the dialog and drop any selection or feedback.
    pub fn close(&mut self) -> Option<RegionName> {
        let previous = std::mem::take(&mut self.phase);
        match previous {
            QuizPhase::Closed => None,
            QuizPhase::Open(prompt) | QuizPhase::Transitioning(prompt) => Some(prompt.region),
        }
    }
}
