#![forbid(unsafe_code)]

pub mod document;
mod loader;
pub mod source;

pub use document::{QuestionDocument, QuestionEntry};
pub use loader::load;
pub use source::{
    FileSource, HttpSource, InMemorySource, LoadError, QuestionSource, SourceRef,
    source_from_location,
};
