use doc_similarity::{evaluate_by_name, ComparisonRecord, ScanParams, Severity};
use pretty_assertions::assert_eq;

fn sample() -> ComparisonRecord {
    evaluate_by_name(
        "Traits define shared behavior across types.",
        "Traits describe behavior shared by many types.",
        "Bogus",
        &ScanParams::default(),
    )
    .unwrap()
}

#[test]
fn cbor_round_trip_is_exact() {
    let record = sample();
    let bytes = record.to_cbor().unwrap();
    assert_eq!(ComparisonRecord::from_cbor(&bytes).unwrap(), record);
}

#[test]
fn json_round_trip() {
    let record = sample();
    let json = serde_json::to_string(&record).unwrap();
    let decoded: ComparisonRecord = serde_json::from_str(&json).unwrap();

    assert_eq!(decoded.strategy_name(), record.strategy_name());
    assert_eq!(decoded.verdict(), record.verdict());
    assert_eq!(decoded.word_counts(), record.word_counts());
    assert_eq!(decoded.similar_word_count(), record.similar_word_count());
    for (x, y) in [
        (decoded.jaccard_word(), record.jaccard_word()),
        (decoded.jaccard_lemma(), record.jaccard_lemma()),
        (decoded.cosine_tfidf(), record.cosine_tfidf()),
        (decoded.similarity_percentage(), record.similarity_percentage()),
    ] {
        assert!((x - y).abs() < 1e-12);
    }
}

#[test]
fn json_field_names() {
    let value = serde_json::to_value(sample()).unwrap();
    assert_eq!(value["strategy_name"], "No algorithm selected");
    assert_eq!(value["strategy_match_count"], 0);
    assert_eq!(value["word_count_a"], 6);
    assert_eq!(value["word_count_b"], 7);
    assert_eq!(value["verdict"]["severity"], "moderate");
    assert_eq!(
        value["verdict"]["description"],
        Severity::Moderate.description()
    );
}
