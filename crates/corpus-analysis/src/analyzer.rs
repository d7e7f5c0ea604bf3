use regex::Regex;
use thiserror::Error;

use crate::morphology::{Morphology, SuffixMorphology};
use crate::normalize::{self, Alphabet};
use crate::stem::{Language, SnowballStemmer, Stem};
use crate::stopwords::StopwordFilter;
use crate::tokenize::{Tokenizer, UnicodeTokenizer};

/// Default inline figure reference patterns, per language.
const FIGURE_PATTERN_RU: &str = r"рис\.\s?\d\.?";
const FIGURE_PATTERN_EN: &str = r"fig\.\s?\d\.?";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid figure reference pattern: {0}")]
    InvalidFigurePattern(#[from] regex::Error),
}

/// Configuration for building an [`Analyzer`].
///
/// `filter_stop_words` decides whether ingestion drops stop words; both
/// behaviors are in active use, so this is a flag rather than a constant.
#[derive(Clone, Debug)]
pub struct AnalyzerConfig {
    pub language: Language,
    pub alphabet: Alphabet,
    pub filter_stop_words: bool,
    /// Overrides the language's default figure reference pattern.
    pub figure_pattern: Option<String>,
}

impl AnalyzerConfig {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            alphabet: Alphabet::default(),
            filter_stop_words: true,
            figure_pattern: None,
        }
    }

    pub fn keep_stop_words(mut self) -> Self {
        self.filter_stop_words = false;
        self
    }

    pub fn figure_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.figure_pattern = Some(pattern.into());
        self
    }

    /// Compile the configuration into an analyzer.
    ///
    /// Fails only on a malformed figure pattern override; nothing is
    /// partially constructed on error.
    pub fn build(self) -> Result<Analyzer, ConfigError> {
        let pattern = match &self.figure_pattern {
            Some(custom) => custom.as_str(),
            None => match self.language {
                Language::Russian => FIGURE_PATTERN_RU,
                Language::English => FIGURE_PATTERN_EN,
            },
        };
        let figure_re = Regex::new(pattern)?;
        Ok(Analyzer {
            tokenizer: Box::new(UnicodeTokenizer),
            stemmer: Box::new(SnowballStemmer::new(self.language)),
            morphology: Box::new(SuffixMorphology::new(self.language)),
            stopwords: StopwordFilter::new(),
            filter_stop_words: self.filter_stop_words,
            alphabet: self.alphabet,
            figure_re,
        })
    }
}

/// Bundle of analysis services handed to ingestion and query code.
///
/// The tokenizer, stemmer and morphology oracle are boxed trait objects so
/// tests and callers can substitute their own.
pub struct Analyzer {
    tokenizer: Box<dyn Tokenizer + Send + Sync>,
    stemmer: Box<dyn Stem + Send + Sync>,
    morphology: Box<dyn Morphology + Send + Sync>,
    stopwords: StopwordFilter,
    filter_stop_words: bool,
    alphabet: Alphabet,
    figure_re: Regex,
}

impl Analyzer {
    /// Assemble an analyzer from explicit parts. `AnalyzerConfig::build`
    /// is the usual entry point; this one exists for substituting custom
    /// collaborators.
    pub fn from_parts(
        tokenizer: Box<dyn Tokenizer + Send + Sync>,
        stemmer: Box<dyn Stem + Send + Sync>,
        morphology: Box<dyn Morphology + Send + Sync>,
        filter_stop_words: bool,
    ) -> Self {
        Self {
            tokenizer,
            stemmer,
            morphology,
            stopwords: StopwordFilter::new(),
            filter_stop_words,
            alphabet: Alphabet::default(),
            figure_re: Regex::new(FIGURE_PATTERN_RU).expect("default pattern is valid"),
        }
    }

    pub fn normalize_title(&self, title: &str) -> String {
        normalize::normalize_title(title)
    }

    pub fn normalize_body(&self, body: &str) -> String {
        normalize::normalize_body(body, &self.figure_re)
    }

    pub fn clean_sentence(&self, sentence: &str) -> String {
        normalize::clean_sentence(sentence, self.alphabet)
    }

    pub fn split_sentences(&self, text: &str) -> Vec<String> {
        self.tokenizer.split_sentences(text)
    }

    pub fn split_words(&self, text: &str) -> Vec<String> {
        self.tokenizer.split_words(text)
    }

    pub fn stem(&self, token: &str) -> String {
        self.stemmer.stem(token)
    }

    pub fn part_of_speech(&self, form: &str) -> corpus_types::PartOfSpeech {
        self.morphology.part_of_speech(form)
    }

    pub fn morphology(&self) -> &dyn Morphology {
        self.morphology.as_ref()
    }

    pub fn filters_stop_words(&self) -> bool {
        self.filter_stop_words
    }

    pub fn is_stop_word(&self, token: &str) -> bool {
        self.stopwords.contains(token)
    }
}
