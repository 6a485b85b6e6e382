#![forbid(unsafe_code)]

pub mod error;
pub mod knowledge_dialog;
pub mod loader;
pub mod map_adapter;
pub mod quiz_dialog;
pub mod session;
pub mod tracker;
pub mod transition;

pub use error::InteractionError;
pub use knowledge_dialog::{KnowledgeCard, KnowledgeDialog};
pub use loader::QuizLoader;
pub use map_adapter::{MapAdapter, MapClick, MapOption, MapSurface, SeriesItem};
pub use quiz_dialog::{Feedback, QuizDialog, QuizPhase, QuizPrompt, Verdict};
pub use session::{Backdrop, QuizEffect, QuizIntent, QuizProgress, QuizSession};
pub use storage::LoadError;
pub use tracker::RegionTracker;
pub use transition::{QUIZ_TO_KNOWLEDGE, ScheduledTransition, TransitionId, TransitionSlot};
