pub mod converter;
pub mod index;
pub mod search;
pub mod tokenizer;

pub use index::InvertedIndex;
pub use search::SearchServer;

use serde::{Deserialize, Serialize};

/// Zero-based position of a document in the list handed to the index.
pub type DocId = usize;

/// Occurrences of one term in one document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub doc_id: DocId,
    pub count: usize,
}

/// A document's normalized relevance for one query, in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RelativeIndex {
    pub doc_id: DocId,
    pub rank: f32,
}
