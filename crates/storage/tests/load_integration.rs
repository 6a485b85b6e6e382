use std::collections::BTreeMap;

use storage::{FileSource, InMemorySource, LoadError, QuestionDocument, QuestionEntry, load};

fn entry(question: &str, options: &[&str], answer: &str) -> QuestionEntry {
    QuestionEntry {
        question: question.to_string(),
        options: options.iter().map(|o| (*o).to_string()).collect(),
        answer: answer.to_string(),
        knowledge: format!("{question} background"),
        image: format!("images/{answer}.jpg"),
    }
}

fn sample_document() -> QuestionDocument {
    let mut regions = BTreeMap::new();
    regions.insert(
        "北京".to_string(),
        entry("Where was the founding ceremony held?", &["天安门", "故宫", "天坛"], "天安门"),
    );
    regions.insert(
        "广东".to_string(),
        entry("Which city became a special economic zone?", &["深圳", "深圳", "珠海"], "深圳"),
    );
    regions.insert(
        "台湾".to_string(),
        entry("Options are kept in source order", &["Z", "A", "M"], "M"),
    );
    QuestionDocument { regions }
}

#[tokio::test]
async fn load_round_trips_every_record() {
    let document = sample_document();
    let bytes = serde_json::to_vec(&document).unwrap();

    let store = load(&InMemorySource::new(bytes)).await.unwrap();

    assert_eq!(store.len(), document.regions.len());
    for (name, entry) in &document.regions {
        let record = store.lookup(name).expect("region present");
        assert_eq!(&QuestionEntry::from_record(record), entry);
    }
}

#[tokio::test]
async fn load_reads_from_a_file() {
    let path = std::env::temp_dir().join(format!(
        "map-quiz-questions-{}.json",
        std::process::id()
    ));
    let bytes = serde_json::to_vec(&sample_document()).unwrap();
    tokio::fs::write(&path, bytes).await.unwrap();

    let store = load(&FileSource::new(&path)).await.unwrap();
    let _ = tokio::fs::remove_file(&path).await;

    assert_eq!(store.lookup("台湾").unwrap().options(), ["Z", "A", "M"]);
}

#[tokio::test]
async fn load_keeps_records_with_unoffered_answers() {
    let doc = r#"{ "西藏": { "question": "Q", "options": ["A", "B"], "answer": "C", "knowledge": "K", "image": "i.png" } }"#;
    let store = load(&InMemorySource::new(doc)).await.unwrap();
    assert_eq!(store.lookup("西藏").unwrap().answer(), "C");
}

#[tokio::test]
async fn empty_document_yields_empty_store() {
    let store = load(&InMemorySource::new("{}")).await.unwrap();
    assert!(store.is_empty());
}

#[tokio::test]
async fn unreachable_source_fails() {
    let err = load(&InMemorySource::unreachable("network down"))
        .await
        .unwrap_err();
    assert!(matches!(err, LoadError::Unreachable { .. }));
}

#[tokio::test]
async fn malformed_document_fails() {
    let err = load(&InMemorySource::new("{ not json")).await.unwrap_err();
    assert!(matches!(err, LoadError::Malformed { .. }));
}
