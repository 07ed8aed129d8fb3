use engine::{run, RunOptions};
use freqsearch_core::RelativeIndex;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn write_fixture(dir: &Path, max_responses: Option<usize>) {
    let docs = [
        "milk milk milk milk water water water",
        "milk water water",
        "milk milk milk milk milk water water water water water",
        "americano cappuccino",
    ];
    fs::create_dir_all(dir.join("resources")).unwrap();
    let mut files = Vec::new();
    for (i, text) in docs.iter().enumerate() {
        let name = format!("resources/file{:03}.txt", i + 1);
        fs::write(dir.join(&name), text).unwrap();
        files.push(name);
    }
    let mut section = serde_json::json!({ "name": "freqsearch", "version": "0.1" });
    if let Some(n) = max_responses {
        section["max_responses"] = n.into();
    }
    let config = serde_json::json!({ "config": section, "files": files });
    fs::write(dir.join("config.json"), config.to_string()).unwrap();
    fs::write(dir.join("requests.json"), r#"{"requests": ["milk water", "sugar", "..."]}"#).unwrap();
}

fn options(dir: &Path, max_responses: Option<usize>) -> RunOptions {
    RunOptions {
        config: dir.join("config.json"),
        requests: dir.join("requests.json"),
        answers: dir.join("answers.json"),
        max_responses,
    }
}

#[test]
fn run_writes_ranked_answers() {
    let dir = tempdir().unwrap();
    write_fixture(dir.path(), None);

    let answers = run(&options(dir.path(), None)).unwrap();
    assert_eq!(
        answers[0],
        vec![
            RelativeIndex { doc_id: 2, rank: 1.0 },
            RelativeIndex { doc_id: 0, rank: 0.7 },
            RelativeIndex { doc_id: 1, rank: 0.3 },
        ]
    );
    assert!(answers[1].is_empty());
    assert!(answers[2].is_empty());

    let json: Value = serde_json::from_str(&fs::read_to_string(dir.path().join("answers.json")).unwrap()).unwrap();
    let request0 = &json["answers"]["request0"];
    assert_eq!(request0["result"], "true");
    let relevance = request0["relevance"].as_array().unwrap();
    let ids: Vec<u64> = relevance.iter().map(|r| r["docid"].as_u64().unwrap()).collect();
    assert_eq!(ids, vec![2, 0, 1]);
    assert_eq!(json["answers"]["request1"]["result"], "false");
    assert_eq!(json["answers"]["request2"]["result"], "false");
}

#[test]
fn config_limit_applies_and_flag_overrides_it() {
    let dir = tempdir().unwrap();
    write_fixture(dir.path(), Some(1));

    let from_config = run(&options(dir.path(), None)).unwrap();
    assert_eq!(from_config[0], vec![RelativeIndex { doc_id: 2, rank: 1.0 }]);

    let overridden = run(&options(dir.path(), Some(2))).unwrap();
    assert_eq!(overridden[0].len(), 2);
}

#[test]
fn missing_requests_file_is_an_error() {
    let dir = tempdir().unwrap();
    write_fixture(dir.path(), None);
    fs::remove_file(dir.path().join("requests.json")).unwrap();

    let err = run(&options(dir.path(), None)).unwrap_err();
    assert!(err.to_string().contains("requests file is missing"));
    assert!(!dir.path().join("answers.json").exists());
}
