//! JSON files around the search core: `config.json` (document list and
//! response limit), `requests.json` (queries) and `answers.json` (results).

use crate::{DocId, RelativeIndex};
use anyhow::{bail, Context, Result};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

pub const DEFAULT_MAX_RESPONSES: usize = 5;

fn default_max_responses() -> usize { DEFAULT_MAX_RESPONSES }

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigSection {
    pub name: String,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default = "default_max_responses")]
    pub max_responses: usize,
}

#[derive(Debug, Deserialize)]
struct RawConfigFile {
    config: Option<ConfigSection>,
    #[serde(default)]
    files: Vec<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct ConfigFile {
    pub config: ConfigSection,
    pub files: Vec<PathBuf>,
    /// Directory relative document paths are resolved against.
    pub base_dir: PathBuf,
}

#[derive(Debug, Deserialize)]
struct RequestsFile {
    #[serde(default)]
    requests: Vec<String>,
}

pub fn load_config(path: &Path) -> Result<ConfigFile> {
    let f = File::open(path).with_context(|| format!("config file is missing: {}", path.display()))?;
    let raw: RawConfigFile = serde_json::from_reader(BufReader::new(f))
        .with_context(|| format!("malformed config file: {}", path.display()))?;
    let Some(config) = raw.config else {
        bail!("config file is empty: {}", path.display());
    };
    let base_dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
    Ok(ConfigFile { config, files: raw.files, base_dir })
}

impl ConfigFile {
    pub fn get_responses_limit(&self) -> usize { self.config.max_responses }

    /// Read every listed document in order, so a document's position is its id.
    /// Unreadable files become empty documents to keep later ids aligned.
    pub fn get_text_documents(&self) -> Vec<String> {
        self.files
            .iter()
            .map(|file| {
                let path = self.base_dir.join(file);
                fs::read_to_string(&path).unwrap_or_else(|err| {
                    tracing::warn!(path = %path.display(), %err, "document unreadable, indexing as empty");
                    String::new()
                })
            })
            .collect()
    }
}

pub fn get_requests(path: &Path) -> Result<Vec<String>> {
    let f = File::open(path).with_context(|| format!("requests file is missing: {}", path.display()))?;
    let file: RequestsFile = serde_json::from_reader(BufReader::new(f))
        .with_context(|| format!("malformed requests file: {}", path.display()))?;
    Ok(file.requests)
}

#[derive(Serialize)]
struct Relevance {
    docid: DocId,
    rank: f32,
}

#[derive(Serialize)]
struct RequestAnswer {
    result: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    relevance: Option<Vec<Relevance>>,
}

impl From<&Vec<RelativeIndex>> for RequestAnswer {
    fn from(answer: &Vec<RelativeIndex>) -> Self {
        if answer.is_empty() {
            return Self { result: "false", relevance: None };
        }
        let relevance = answer.iter().map(|r| Relevance { docid: r.doc_id, rank: r.rank }).collect();
        Self { result: "true", relevance: Some(relevance) }
    }
}

// Serialized by hand so keys keep request order.
struct Answers<'a>(&'a [Vec<RelativeIndex>]);

impl Serialize for Answers<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (i, answer) in self.0.iter().enumerate() {
            map.serialize_entry(&format!("request{i}"), &RequestAnswer::from(answer))?;
        }
        map.end()
    }
}

#[derive(Serialize)]
struct AnswersFile<'a> {
    answers: Answers<'a>,
}

/// Truncate `path` and write one `request<i>` entry per answer list.
pub fn put_answers(path: &Path, answers: &[Vec<RelativeIndex>]) -> Result<()> {
    let f = File::create(path).with_context(|| format!("cannot create answers file: {}", path.display()))?;
    let mut w = BufWriter::new(f);
    serde_json::to_writer_pretty(&mut w, &AnswersFile { answers: Answers(answers) })?;
    w.flush()?;
    Ok(())
}
