mod quiz_vm;

pub use quiz_vm::{
    FAILURE_TEXT, FeedbackVm, KnowledgeModalVm, QuizModalVm, SUCCESS_TEXT, map_knowledge_modal,
    map_quiz_modal, progress_label,
};
