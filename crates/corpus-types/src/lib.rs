//! Shared types for the concordance crates.
//!
//! The corpus is stored in flat arenas; [`ArticleId`], [`SentenceId`] and
//! [`WordId`] are indices into those arenas rather than owning references,
//! which keeps back-links (sentence → article, trie node → parent) free of
//! ownership cycles. [`PartOfSpeech`] is the closed set of grammatical
//! categories the morphology layer can report; external tag strings are
//! folded into it with [`PartOfSpeech::from_tag`], which maps anything it
//! does not recognize to [`PartOfSpeech::Unknown`] instead of failing.
//!
//! ```rust
//! use corpus_types::PartOfSpeech;
//!
//! assert_eq!(PartOfSpeech::from_tag("NOUN"), PartOfSpeech::Noun);
//! assert_eq!(PartOfSpeech::from_tag("ADJF"), PartOfSpeech::Adjective);
//! assert_eq!(PartOfSpeech::from_tag("???"), PartOfSpeech::Unknown);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Index of an article in the corpus arena.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArticleId(pub u32);

/// Index of a sentence in the corpus arena.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SentenceId(pub u32);

/// Index of a word record in the registry.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WordId(pub u32);

impl ArticleId {
    pub fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl SentenceId {
    pub fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl WordId {
    pub fn as_usize(self) -> usize {
        self.0 as usize
    }
}

/// Grammatical category of a surface form.
///
/// Covers the categories emitted by morphological analyzers in the
/// pymorphy tradition, collapsed to the distinctions the search layer
/// actually filters on (full and short adjectives are both `Adjective`,
/// participles and gerunds count as `Verb`).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartOfSpeech {
    Noun,
    Adjective,
    Adverb,
    Verb,
    Numeral,
    Pronoun,
    Preposition,
    Conjunction,
    Particle,
    Interjection,
    Unknown,
}

impl PartOfSpeech {
    /// Fold an analyzer tag into the closed category set.
    ///
    /// Accepts pymorphy-style abbreviations (`NOUN`, `ADJF`, `INFN`, ...)
    /// as well as plain English names, case-insensitively. Unrecognized
    /// tags become [`PartOfSpeech::Unknown`]; this never fails.
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_uppercase().as_str() {
            "NOUN" => PartOfSpeech::Noun,
            "ADJF" | "ADJS" | "COMP" | "ADJ" | "ADJECTIVE" => PartOfSpeech::Adjective,
            "ADVB" | "PRED" | "ADV" | "ADVERB" => PartOfSpeech::Adverb,
            "VERB" | "INFN" | "GRND" | "PRTF" | "PRTS" => PartOfSpeech::Verb,
            "NUMR" | "NUMERAL" => PartOfSpeech::Numeral,
            "NPRO" | "PRONOUN" => PartOfSpeech::Pronoun,
            "PREP" | "PREPOSITION" => PartOfSpeech::Preposition,
            "CONJ" | "CONJUNCTION" => PartOfSpeech::Conjunction,
            "PRCL" | "PARTICLE" => PartOfSpeech::Particle,
            "INTJ" | "INTERJECTION" => PartOfSpeech::Interjection,
            _ => PartOfSpeech::Unknown,
        }
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PartOfSpeech::Noun => "noun",
            PartOfSpeech::Adjective => "adjective",
            PartOfSpeech::Adverb => "adverb",
            PartOfSpeech::Verb => "verb",
            PartOfSpeech::Numeral => "numeral",
            PartOfSpeech::Pronoun => "pronoun",
            PartOfSpeech::Preposition => "preposition",
            PartOfSpeech::Conjunction => "conjunction",
            PartOfSpeech::Particle => "particle",
            PartOfSpeech::Interjection => "interjection",
            PartOfSpeech::Unknown => "unknown",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_pymorphy_tags() {
        assert_eq!(PartOfSpeech::from_tag("NOUN"), PartOfSpeech::Noun);
        assert_eq!(PartOfSpeech::from_tag("adjf"), PartOfSpeech::Adjective);
        assert_eq!(PartOfSpeech::from_tag("PRTS"), PartOfSpeech::Verb);
        assert_eq!(PartOfSpeech::from_tag(" infn "), PartOfSpeech::Verb);
        assert_eq!(PartOfSpeech::from_tag("NPRO"), PartOfSpeech::Pronoun);
    }

    #[test]
    fn unknown_tags_never_fail() {
        assert_eq!(PartOfSpeech::from_tag(""), PartOfSpeech::Unknown);
        assert_eq!(PartOfSpeech::from_tag("GERUNDIVE-ISH"), PartOfSpeech::Unknown);
    }

    #[test]
    fn ids_serialize_transparently() {
        let id = SentenceId(7);
        assert_eq!(serde_json::to_string(&id).unwrap(), "7");
        let back: SentenceId = serde_json::from_str("7").unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn pos_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&PartOfSpeech::Adjective).unwrap(),
            "\"adjective\""
        );
    }
}
