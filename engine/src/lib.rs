use anyhow::Result;
use freqsearch_core::converter::{get_requests, load_config, put_answers};
use freqsearch_core::tokenizer::tokenize;
use freqsearch_core::{InvertedIndex, RelativeIndex, SearchServer};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct RunOptions {
    pub config: PathBuf,
    pub requests: PathBuf,
    pub answers: PathBuf,
    /// Overrides `max_responses` from the config file.
    pub max_responses: Option<usize>,
}

/// Index the configured documents, answer every request and write `answers.json`.
///
/// Returns the answers in request order, one list per request.
pub fn run(opts: &RunOptions) -> Result<Vec<Vec<RelativeIndex>>> {
    let config = load_config(&opts.config)?;
    tracing::info!(name = %config.config.name, version = ?config.config.version, files = config.files.len(), "loaded config");

    let docs = config.get_text_documents();
    let mut index = InvertedIndex::new();
    index.update_document_base(docs);
    tracing::info!(num_docs = index.doc_count(), num_terms = index.term_count(), "index built");

    let requests = get_requests(&opts.requests)?;
    let limit = opts.max_responses.unwrap_or_else(|| config.get_responses_limit());
    let answers = answer_requests(&index, &requests, limit);
    tracing::info!(requests = requests.len(), limit, "requests answered");

    put_answers(&opts.answers, &answers)?;
    tracing::info!(answers = %opts.answers.display(), "answers written");
    Ok(answers)
}

/// Search all requests that contain at least one word; the rest get an empty answer.
pub fn answer_requests(index: &InvertedIndex, requests: &[String], limit: usize) -> Vec<Vec<RelativeIndex>> {
    let mut valid: Vec<&str> = Vec::new();
    let mut slots: Vec<Option<usize>> = Vec::with_capacity(requests.len());
    for (i, request) in requests.iter().enumerate() {
        if tokenize(request).is_empty() {
            tracing::warn!(request = i, "request has no words, skipping");
            slots.push(None);
        } else {
            slots.push(Some(valid.len()));
            valid.push(request);
        }
    }

    let mut found = SearchServer::new(index).search(&valid, limit).into_iter().map(Some).collect::<Vec<_>>();
    slots
        .into_iter()
        .map(|slot| slot.and_then(|pos| found[pos].take()).unwrap_or_default())
        .collect()
}
