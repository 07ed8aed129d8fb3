use crate::tokenizer::tokenize;
use crate::{DocId, Entry};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::thread;

/// Term -> postings map over a fixed document base.
///
/// The index is rebuilt from scratch by [`InvertedIndex::update_document_base`];
/// there is no incremental update. Reads borrow the index immutably, so they
/// can only happen once a build has returned.
#[derive(Debug, Default)]
pub struct InvertedIndex {
    docs: Vec<String>,
    freq_dictionary: HashMap<String, Vec<Entry>>, // postings sorted by doc_id
}

impl InvertedIndex {
    pub fn new() -> Self { Self::default() }

    /// Replace the document base and rebuild the frequency dictionary.
    ///
    /// Each document is tokenized on its own thread. All threads write into a
    /// single map behind one mutex, taken per posting update rather than per
    /// document. Every thread is joined before this returns.
    pub fn update_document_base(&mut self, docs: Vec<String>) {
        self.freq_dictionary.clear();
        self.docs = docs;

        let dictionary: Mutex<HashMap<String, Vec<Entry>>> = Mutex::new(HashMap::new());
        thread::scope(|s| {
            for (doc_id, text) in self.docs.iter().enumerate() {
                let dictionary = &dictionary;
                s.spawn(move || {
                    for word in tokenize(text) {
                        let mut dict = dictionary.lock();
                        add_occurrence(&mut dict, word, doc_id);
                    }
                });
            }
        });

        let mut freq_dictionary = dictionary.into_inner();
        for postings in freq_dictionary.values_mut() {
            postings.sort_by_key(|e| e.doc_id);
        }
        self.freq_dictionary = freq_dictionary;

        tracing::debug!(num_docs = self.docs.len(), num_terms = self.freq_dictionary.len(), "document base indexed");
    }

    /// Postings for `word`, or an empty slice if it never occurred.
    pub fn get_word_count(&self, word: &str) -> &[Entry] {
        self.freq_dictionary.get(word).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn docs(&self) -> &[String] { &self.docs }

    pub fn doc_count(&self) -> usize { self.docs.len() }

    pub fn term_count(&self) -> usize { self.freq_dictionary.len() }
}

// Create-or-increment must happen under one lock acquisition.
fn add_occurrence(dict: &mut HashMap<String, Vec<Entry>>, word: &str, doc_id: DocId) {
    let postings = dict.entry(word.to_string()).or_default();
    match postings.iter_mut().find(|e| e.doc_id == doc_id) {
        Some(entry) => entry.count += 1,
        None => postings.push(Entry { doc_id, count: 1 }),
    }
}
