use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use quiz_core::model::{QuestionRecord, QuestionStore, RegionName};

use crate::source::LoadError;

/// Wire shape of a single question, exactly as it appears in the document.
///
/// Every field is required; a missing one makes the whole document malformed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionEntry {
    pub question: String,
    pub options: Vec<String>,
    pub answer: String,
    pub knowledge: String,
    pub image: String,
}

impl QuestionEntry {
    #[must_use]
    pub fn from_record(record: &QuestionRecord) -> Self {
        Self {
            question: record.question().to_owned(),
            options: record.options().to_vec(),
            answer: record.answer().to_owned(),
            knowledge: record.knowledge().to_owned(),
            image: record.image().to_owned(),
        }
    }

    #[must_use]
    pub fn into_record(self) -> QuestionRecord {
        QuestionRecord::new(
            self.question,
            self.options,
            self.answer,
            self.knowledge,
            self.image,
        )
    }
}

/// The question document: a JSON object keyed by region name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionDocument {
    pub regions: BTreeMap<String, QuestionEntry>,
}

impl QuestionDocument {
    /// Parse raw bytes fetched from `location`.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::Malformed` if the bytes are not a valid document.
    pub fn parse(location: &str, bytes: &[u8]) -> Result<Self, LoadError> {
        serde_json::from_slice(bytes).map_err(|e| LoadError::Malformed {
            location: location.to_string(),
            reason: e.to_string(),
        })
    }

    /// Convert the document into the session's question store.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::Malformed` if a region key is blank.
    pub fn into_store(self, location: &str) -> Result<QuestionStore, LoadError> {
        let mut records = Vec::with_capacity(self.regions.len());
        for (name, entry) in self.regions {
            let region = RegionName::new(name).map_err(|e| LoadError::Malformed {
                location: location.to_string(),
                reason: e.to_string(),
            })?;
            records.push((region, entry.into_record()));
        }
        Ok(QuestionStore::from_records(records))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"{
        "北京": {
            "question": "Q1",
            "options": ["A", "B", "C"],
            "answer": "B",
            "knowledge": "K1",
            "image": "images/beijing.jpg"
        }
    }"#;

    #[test]
    fn parses_a_valid_document() {
        let doc = QuestionDocument::parse("fixture", DOC.as_bytes()).unwrap();
        let entry = &doc.regions["北京"];
        assert_eq!(entry.options, ["A", "B", "C"]);
        assert_eq!(entry.image, "images/beijing.jpg");
    }

    #[test]
    fn missing_field_is_malformed() {
        let doc = r#"{ "北京": { "question": "Q", "options": [], "answer": "A", "image": "" } }"#;
        let err = QuestionDocument::parse("fixture", doc.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::Malformed { .. }));
    }

    #[test]
    fn non_object_is_malformed() {
        let err = QuestionDocument::parse("fixture", b"[1, 2, 3]").unwrap_err();
        assert!(matches!(err, LoadError::Malformed { .. }));
    }

    #[test]
    fn blank_region_key_is_malformed() {
        let doc = r#"{ " ": { "question": "Q", "options": ["A"], "answer": "A", "knowledge": "", "image": "" } }"#;
        let parsed = QuestionDocument::parse("fixture", doc.as_bytes()).unwrap();
        let err = parsed.into_store("fixture").unwrap_err();
        assert!(matches!(err, LoadError::Malformed { .. }));
    }

    #[test]
    fn entry_record_conversion_is_lossless() {
        let doc = QuestionDocument::parse("fixture", DOC.as_bytes()).unwrap();
        let entry = doc.regions["北京"].clone();
        let record = entry.clone().into_record();
        assert_eq!(QuestionEntry::from_record(&record), entry);
    }
}
