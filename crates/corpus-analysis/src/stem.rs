use rust_stemmers::{Algorithm, Stemmer};

/// Corpus language; selects the Snowball algorithm, the default figure
/// reference pattern and the morphology rule tables.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Language {
    #[default]
    Russian,
    English,
}

/// Maps a surface token to its stem. Must be deterministic: the same
/// token always yields the same stem, because stems are registry keys.
pub trait Stem {
    fn stem(&self, token: &str) -> String;
}

/// Snowball stemmer for the configured language.
pub struct SnowballStemmer {
    inner: Stemmer,
}

impl SnowballStemmer {
    pub fn new(language: Language) -> Self {
        let algorithm = match language {
            Language::Russian => Algorithm::Russian,
            Language::English => Algorithm::English,
        };
        Self {
            inner: Stemmer::create(algorithm),
        }
    }
}

impl Stem for SnowballStemmer {
    fn stem(&self, token: &str) -> String {
        self.inner.stem(token).into_owned()
    }
}
