//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::model::RegionName;

/// Benign interaction failures.
///
/// These reflect stray or out-of-order UI events rather than faults;
/// `QuizSession::dispatch` absorbs them.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InteractionError {
    #[error("no question for region {0:?}")]
    LookupMiss(String),
    #[error("region {0} is already answered")]
    AlreadyAnswered(RegionName),
    #[error("a dialog is already open")]
    DialogOpen,
    #[error("no active question to answer")]
    InvalidSubmission,
    #[error("transition is no longer pending")]
    StaleTransition,
}
