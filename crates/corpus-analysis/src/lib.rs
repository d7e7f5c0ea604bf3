//! Text analysis services consumed by the corpus index.
//!
//! The index treats everything here as a black box behind small traits:
//! [`Tokenizer`] turns text into sentences and surface tokens, [`Stem`]
//! maps a surface token to its stem, [`Morphology`] guesses a grammatical
//! category, and [`StopwordFilter`] answers membership queries against the
//! built-in Russian and English stop-word lists. [`Analyzer`] bundles the
//! default implementations together with the normalization pipeline and is
//! what ingestion code actually passes around.
//!
//! # Example
//! ```rust
//! use corpus_analysis::{AnalyzerConfig, Language};
//!
//! # fn main() -> Result<(), corpus_analysis::ConfigError> {
//! let analyzer = AnalyzerConfig::new(Language::Russian).build()?;
//! assert_eq!(analyzer.stem("сидит"), "сид");
//! assert!(analyzer.is_stop_word("на"));
//! # Ok(()) }
//! ```

mod analyzer;
mod morphology;
mod normalize;
mod stem;
mod stopwords;
mod tokenize;

pub use analyzer::{Analyzer, AnalyzerConfig, ConfigError};
pub use morphology::{Morphology, SuffixMorphology};
pub use normalize::Alphabet;
pub use stem::{Language, SnowballStemmer, Stem};
pub use stopwords::StopwordFilter;
pub use tokenize::{Tokenizer, UnicodeTokenizer};
