use std::io::Write;

use quizzy_domain::{
    catalog::{resolve_attempt, Directory},
    seed::{load_seed, sample_catalog, CatalogSeed},
    Error,
};
use serde_json::json;
use tempfile::NamedTempFile;

fn write_seed(value: &serde_json::Value) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    write!(file, "{}", value).expect("write seed");
    file
}

#[test]
fn loads_quizzes_attempts_and_selections() {
    let file = write_seed(&json!({
        "quizzes": [{
            "id": 1,
            "name": "Sample",
            "questions": [{
                "id": 2,
                "text": "Pick one",
                "answers": [
                    { "id": 3, "question_id": 2, "text": "A", "is_correct": true },
                    { "id": 4, "question_id": 2, "text": "B" }
                ]
            }]
        }],
        "attempts": [
            { "id": 1, "quiz_id": 1, "start_time": "2024-09-01T12:00:00+01:00",
              "end_time": "2024-09-01T12:03:00+01:00" },
            { "id": 2, "quiz_id": 1, "start_time": "2024-09-02T12:00:00+01:00" }
        ],
        "selections": [{ "attempt_id": 1, "question_id": 2, "answer_id": 3 }]
    }));

    let catalog = load_seed(file.path()).expect("load");

    let finished = catalog.attempt(1).unwrap();
    let open = catalog.attempt(2).unwrap();
    assert!(finished.is_finished());
    assert!(!open.is_finished());
    assert_eq!(resolve_attempt(&catalog, open).unwrap().quiz.name, "Sample");
    assert_eq!(catalog.answer(3).map(|a| a.is_correct), Some(true));
    assert_eq!(catalog.selections_for_attempt(1).count(), 1);
}

#[test]
fn empty_object_is_an_empty_catalog() {
    let file = write_seed(&json!({}));
    let catalog = load_seed(file.path()).expect("load");
    assert!(catalog.is_empty());
}

#[test]
fn malformed_seed_is_a_json_error() {
    let file = write_seed(&json!({ "quizzes": [{ "id": "one" }] }));
    let err = load_seed(file.path()).unwrap_err();
    assert!(matches!(err, Error::Json(_)));
}

#[test]
fn missing_seed_is_an_io_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = load_seed(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn snapshot_of_sample_reloads_identically() {
    let snapshot = CatalogSeed::snapshot(&sample_catalog());
    let file = write_seed(&serde_json::to_value(&snapshot).unwrap());

    let reloaded = load_seed(file.path()).expect("load");
    assert_eq!(CatalogSeed::snapshot(&reloaded), snapshot);
}
