//! The concordance core: corpus model, word registry, stem trie and
//! phrase search.
//!
//! Ingestion flows one way: article text is normalized, split into
//! sentences, each sentence is cleaned and tokenized, and every token is
//! stemmed and registered in the [`WordRegistry`], which keeps exactly one
//! [`Word`] record per stem and aggregates all inflected forms and their
//! occurrence sentences. Once every article is in, a [`WordTree`] is built
//! over the registry snapshot; it answers exact-word lookups and powers
//! character-by-character traversal via [`TreeCursor`]. [`search`] layers
//! phrase queries on top: per-word sentence sets are intersected and the
//! survivors checked for positional adjacency.
//!
//! Everything is arena-based: articles, sentences and words are stored in
//! flat vectors inside [`Corpus`] and referenced by id, so back-links
//! (sentence → article, trie node → parent) never form ownership cycles.
//!
//! ```rust
//! use corpus_analysis::{AnalyzerConfig, Language};
//! use corpus_index::{Corpus, WordTree, search};
//!
//! # fn main() -> Result<(), corpus_analysis::ConfigError> {
//! let analyzer = AnalyzerConfig::new(Language::Russian).build()?;
//! let mut corpus = Corpus::new();
//! corpus.add_article(
//!     vec!["И.И. Иванов".into()],
//!     "О КОТАХ",
//!     "Кот сидит на окне. Кот спит.",
//!     &analyzer,
//! );
//! let tree = WordTree::build(corpus.registry());
//! let hits = search::phrase(&corpus, &tree, &analyzer, &["кот", "сидит"]);
//! assert_eq!(hits.len(), 1);
//! # Ok(()) }
//! ```

mod corpus;
mod loader;
mod registry;
pub mod search;
mod tree;

pub use corpus::{Article, ArticleOccurrences, Corpus, Sentence};
pub use loader::{ArticleRecord, CorpusLoader};
pub use registry::{FormEntry, Word, WordRegistry};
pub use tree::{TraverseError, TreeCursor, WordTree};
