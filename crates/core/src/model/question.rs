use serde::{Deserialize, Serialize};

/// One multiple-choice question attached to a map region.
///
/// Records are immutable once loaded. Options keep the order and duplicates of
/// the source document; the data author owns their correctness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    question: String,
    options: Vec<String>,
    answer: String,
    knowledge: String,
    image: String,
}

impl QuestionRecord {
    #[must_use]
    pub fn new(
        question: impl Into<String>,
        options: Vec<String>,
        answer: impl Into<String>,
        knowledge: impl Into<String>,
        image: impl Into<String>,
    ) -> Self {
        Self {
            question: question.into(),
            options,
            answer: answer.into(),
            knowledge: knowledge.into(),
            image: image.into(),
        }
    }

    #[must_use]
    pub fn question(&self) -> &str {
        &self.question
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn answer(&self) -> &str {
        &self.answer
    }

    #[must_use]
    pub fn knowledge(&self) -> &str {
        &self.knowledge
    }

    #[must_use]
    pub fn image(&self) -> &str {
        &self.image
    }

    /// Exact text comparison against the stored answer.
    #[must_use]
    pub fn is_correct(&self, selected: &str) -> bool {
        self.answer == selected
    }

    /// True when the stored answer is one of the options.
    #[must_use]
    pub fn answer_is_offered(&self) -> bool {
        self.options.iter().any(|option| option == &self.answer)
    }
}
