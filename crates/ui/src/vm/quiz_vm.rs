use services::{Feedback, QuizPhase, QuizProgress, QuizSession};

pub const SUCCESS_TEXT: &str = "回答正确！";
pub const FAILURE_TEXT: &str = "回答错误，请再试一次！";
const FAILURE_COLOR: &str = "red";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedbackVm {
    pub text: &'static str,
    pub color: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizModalVm {
    pub region: String,
    pub question: String,
    pub options: Vec<String>,
    pub feedback: Option<FeedbackVm>,
    /// Options stop accepting input once the answer is accepted.
    pub locked: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KnowledgeModalVm {
    pub title: String,
    pub body: String,
    pub image: String,
}

#[must_use]
pub fn map_quiz_modal(session: &QuizSession) -> Option<QuizModalVm> {
    let (prompt, locked) = match session.quiz().phase() {
        QuizPhase::Closed => return None,
        QuizPhase::Open(prompt) => (prompt, false),
        QuizPhase::Transitioning(prompt) => (prompt, true),
    };

    let feedback = prompt.feedback().map(|feedback| match feedback {
        Feedback::Success => FeedbackVm {
            text: SUCCESS_TEXT,
            color: session.settings().theme().hover_area().to_string(),
        },
        Feedback::Failure => FeedbackVm {
            text: FAILURE_TEXT,
            color: FAILURE_COLOR.to_string(),
        },
    });

    Some(QuizModalVm {
        region: prompt.region().to_string(),
        question: prompt.question().to_string(),
        options: prompt.options().to_vec(),
        feedback,
        locked,
    })
}

#[must_use]
pub fn map_knowledge_modal(session: &QuizSession) -> Option<KnowledgeModalVm> {
    session.knowledge().card().map(|card| KnowledgeModalVm {
        title: card.title.clone(),
        body: card.body.clone(),
        image: card.image.clone(),
    })
}

#[must_use]
pub fn progress_label(progress: QuizProgress) -> String {
    format!("已点亮 {} / {}", progress.answered, progress.total)
}
