use crate::tokenizer::tokenize;
use crate::{DocId, Entry, InvertedIndex, RelativeIndex};
use std::cmp::Ordering;
use std::collections::HashMap;

/// Ranks documents of a built [`InvertedIndex`] against batches of queries.
pub struct SearchServer<'a> {
    index: &'a InvertedIndex,
}

impl<'a> SearchServer<'a> {
    pub fn new(index: &'a InvertedIndex) -> Self {
        Self { index }
    }

    /// Answer a batch of queries, returning one ranked list per query in input order.
    ///
    /// Relevance is the sum of term counts over the words of *every* query in the
    /// batch, pooled into one accumulator, and normalized by the batch maximum.
    /// Candidates for a query are the postings of its single word with the longest
    /// posting list (earliest word on ties). Each list holds at most `limit`
    /// entries, ordered by rank descending, then doc_id ascending.
    pub fn search<S: AsRef<str>>(&self, queries: &[S], limit: usize) -> Vec<Vec<RelativeIndex>> {
        let ranks = self.batch_ranks(queries);

        queries
            .iter()
            .map(|query| {
                let words = tokenize(query.as_ref());
                let candidates = self.candidates(&words);

                let mut answer: Vec<RelativeIndex> = candidates
                    .iter()
                    .map(|e| RelativeIndex { doc_id: e.doc_id, rank: ranks.get(&e.doc_id).copied().unwrap_or(0.0) })
                    .collect();
                answer.sort_by(by_rank_then_doc);
                answer.truncate(limit);
                answer.sort_by(by_rank_then_doc);
                answer
            })
            .collect()
    }

    // Pooled over the whole batch, not per query.
    fn batch_ranks<S: AsRef<str>>(&self, queries: &[S]) -> HashMap<DocId, f32> {
        let mut relevance: HashMap<DocId, usize> = HashMap::new();
        for query in queries {
            for word in tokenize(query.as_ref()) {
                for e in self.index.get_word_count(word) {
                    *relevance.entry(e.doc_id).or_insert(0) += e.count;
                }
            }
        }

        let max_relevance = relevance.values().copied().max().unwrap_or(0);
        tracing::debug!(queries = queries.len(), docs = relevance.len(), max_relevance, "accumulated batch relevance");
        if max_relevance == 0 {
            return HashMap::new();
        }
        relevance
            .into_iter()
            .map(|(doc_id, r)| (doc_id, r as f32 / max_relevance as f32))
            .collect()
    }

    fn candidates(&self, words: &[&str]) -> &'a [Entry] {
        let mut best: &'a [Entry] = &[];
        for word in words {
            let postings = self.index.get_word_count(word);
            if postings.len() > best.len() {
                best = postings;
            }
        }
        best
    }
}

fn by_rank_then_doc(a: &RelativeIndex, b: &RelativeIndex) -> Ordering {
    b.rank
        .partial_cmp(&a.rank)
        .unwrap_or(Ordering::Equal)
        .then(a.doc_id.cmp(&b.doc_id))
}
