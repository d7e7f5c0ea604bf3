//! Query layer: single-word search and phrase search.
//!
//! Phrase search works in two phases. Candidate sentences are found by
//! intersecting per-word sentence sets, represented as bitsets over the
//! sentence arena; survivors are then checked for positional adjacency by
//! stemming the sentence's whitespace-split surface text and looking for
//! the stemmed query as a contiguous window. Results come back in
//! ascending [`SentenceId`] order (ingestion order), which the bitset
//! representation yields for free.

use bitvec::prelude::*;
use corpus_analysis::Analyzer;
use corpus_types::SentenceId;

use crate::corpus::Corpus;
use crate::registry::Word;
use crate::tree::WordTree;

type SentenceSet = BitVec<usize, Lsb0>;

/// Exact single-word lookup: stem the surface form and resolve it through
/// the tree. `None` when the stem is absent.
pub fn word<'a>(
    corpus: &'a Corpus,
    tree: &WordTree,
    analyzer: &Analyzer,
    surface: &str,
) -> Option<&'a Word> {
    let stem = analyzer.stem(surface);
    let id = tree.lookup_stem(&stem)?;
    corpus.registry().get(id)
}

/// Every sentence containing any form of `word`, ascending, each listed
/// once even when it carries several forms of the stem.
pub fn word_sentences(corpus: &Corpus, word: &Word) -> Vec<SentenceId> {
    ids(&sentence_set(corpus, word))
}

/// Sentences containing the whole phrase as adjacent words, in query
/// order.
///
/// Any token failing exact lookup empties the result immediately; there
/// are no partial matches. A single-token phrase degenerates to
/// [`word_sentences`] with no adjacency check.
pub fn phrase<T: AsRef<str>>(
    corpus: &Corpus,
    tree: &WordTree,
    analyzer: &Analyzer,
    tokens: &[T],
) -> Vec<SentenceId> {
    if tokens.is_empty() {
        return Vec::new();
    }

    let mut words = Vec::with_capacity(tokens.len());
    for token in tokens {
        match word(corpus, tree, analyzer, token.as_ref()) {
            Some(found) => words.push(found),
            None => return Vec::new(),
        }
    }

    if let [only] = words.as_slice() {
        return word_sentences(corpus, only);
    }

    let mut candidates = sentence_set(corpus, words[0]);
    for other in &words[1..] {
        let set = sentence_set(corpus, other);
        candidates &= &set;
        if candidates.not_any() {
            return Vec::new();
        }
    }

    let stemmed_query: Vec<String> = tokens
        .iter()
        .map(|token| analyzer.stem(token.as_ref()))
        .collect();
    ids(&candidates)
        .into_iter()
        .filter(|&id| contains_adjacent(corpus.sentence(id).text(), &stemmed_query, analyzer))
        .collect()
}

/// Flatten every form of `word` into one set over the sentence arena.
fn sentence_set(corpus: &Corpus, word: &Word) -> SentenceSet {
    let mut set = bitvec![usize, Lsb0; 0; corpus.sentences().len()];
    for entry in word.forms() {
        for sentence in &entry.sentences {
            set.set(sentence.as_usize(), true);
        }
    }
    set
}

fn ids(set: &SentenceSet) -> Vec<SentenceId> {
    set.iter_ones().map(|i| SentenceId(i as u32)).collect()
}

/// Does the stemmed query occur as a contiguous run of the sentence's
/// stemmed surface tokens, in query order?
fn contains_adjacent(text: &str, stemmed_query: &[String], analyzer: &Analyzer) -> bool {
    let stems: Vec<String> = text
        .split_whitespace()
        .map(|token| analyzer.stem(token))
        .collect();
    stems
        .windows(stemmed_query.len())
        .any(|window| window == stemmed_query)
}
