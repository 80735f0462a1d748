use std::io::Write;

use geoquiz_core::model::{PromptCatalog, QuestionBank};
use storage::{BankFileError, load_bank};
use tempfile::NamedTempFile;

#[test]
fn loads_bank_from_disk() {
    let mut file = NamedTempFile::new().expect("temp file");
    write!(
        file,
        r#"[
            {{"prompt": "question_oceans", "answer": true}},
            {{"prompt": "question_africa", "answer": false}},
            {{"prompt": "Mount Kilimanjaro is in Tanzania.", "answer": true}}
        ]"#
    )
    .unwrap();

    let bank = load_bank(file.path()).expect("load bank");
    assert_eq!(bank.len(), 3);

    let catalog = PromptCatalog::geography();
    let texts: Vec<&str> = bank.iter().map(|q| catalog.resolve(q.prompt())).collect();
    assert_eq!(
        texts,
        vec![
            "The Pacific Ocean is larger than the Atlantic Ocean.",
            "The source of the Nile River is in Egypt.",
            "Mount Kilimanjaro is in Tanzania.",
        ]
    );
}

#[test]
fn built_in_bank_survives_a_file_round_trip() {
    let entries: Vec<storage::BankEntry> = QuestionBank::geography()
        .iter()
        .map(|q| storage::BankEntry {
            prompt: q.prompt().as_str().to_string(),
            answer: q.answer(),
        })
        .collect();

    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(serde_json::to_string(&entries).unwrap().as_bytes())
        .unwrap();

    let bank = load_bank(file.path()).expect("load bank");
    assert_eq!(bank, QuestionBank::geography());
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = load_bank(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, BankFileError::Io(_)));
}
