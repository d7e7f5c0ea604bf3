use corpus_types::PartOfSpeech;

use crate::stem::Language;

/// Classifies a surface form into a grammatical category.
///
/// Implementations report [`PartOfSpeech::Unknown`] for anything they
/// cannot classify; classification never fails.
pub trait Morphology {
    fn part_of_speech(&self, form: &str) -> PartOfSpeech;
}

/// Suffix-table classifier.
///
/// A lightweight stand-in for a full morphological analyzer: each language
/// carries an ordered rule table, longest suffixes first, and the first
/// matching rule decides the category. Forms shorter than the suffix plus
/// one letter never match, so bare endings ("ет") stay `Unknown`.
#[derive(Clone, Copy, Debug)]
pub struct SuffixMorphology {
    language: Language,
}

impl SuffixMorphology {
    pub fn new(language: Language) -> Self {
        Self { language }
    }
}

impl Morphology for SuffixMorphology {
    fn part_of_speech(&self, form: &str) -> PartOfSpeech {
        let form = form.trim();
        for (suffix, pos) in rules_for(self.language) {
            if form.chars().count() > suffix.chars().count()
                && form.ends_with(suffix)
            {
                return *pos;
            }
        }
        PartOfSpeech::Unknown
    }
}

fn rules_for(language: Language) -> &'static [(&'static str, PartOfSpeech)] {
    match language {
        Language::Russian => &[
            ("ться", PartOfSpeech::Verb),
            ("ется", PartOfSpeech::Verb),
            ("ится", PartOfSpeech::Verb),
            ("ость", PartOfSpeech::Noun),
            ("ование", PartOfSpeech::Noun),
            ("ение", PartOfSpeech::Noun),
            ("ация", PartOfSpeech::Noun),
            ("ого", PartOfSpeech::Adjective),
            ("его", PartOfSpeech::Adjective),
            ("ому", PartOfSpeech::Adjective),
            ("ему", PartOfSpeech::Adjective),
            ("ыми", PartOfSpeech::Adjective),
            ("ими", PartOfSpeech::Adjective),
            ("ать", PartOfSpeech::Verb),
            ("ять", PartOfSpeech::Verb),
            ("еть", PartOfSpeech::Verb),
            ("ить", PartOfSpeech::Verb),
            ("уть", PartOfSpeech::Verb),
            ("ый", PartOfSpeech::Adjective),
            ("ий", PartOfSpeech::Adjective),
            ("ой", PartOfSpeech::Adjective),
            ("ая", PartOfSpeech::Adjective),
            ("яя", PartOfSpeech::Adjective),
            ("ое", PartOfSpeech::Adjective),
            ("ее", PartOfSpeech::Adjective),
            ("ые", PartOfSpeech::Adjective),
            ("ие", PartOfSpeech::Adjective),
            ("ет", PartOfSpeech::Verb),
            ("ит", PartOfSpeech::Verb),
            ("ют", PartOfSpeech::Verb),
            ("ят", PartOfSpeech::Verb),
            ("ски", PartOfSpeech::Adverb),
        ],
        Language::English => &[
            ("ization", PartOfSpeech::Noun),
            ("ation", PartOfSpeech::Noun),
            ("ment", PartOfSpeech::Noun),
            ("ness", PartOfSpeech::Noun),
            ("ity", PartOfSpeech::Noun),
            ("able", PartOfSpeech::Adjective),
            ("ible", PartOfSpeech::Adjective),
            ("ous", PartOfSpeech::Adjective),
            ("ful", PartOfSpeech::Adjective),
            ("ive", PartOfSpeech::Adjective),
            ("ly", PartOfSpeech::Adverb),
            ("ing", PartOfSpeech::Verb),
            ("ed", PartOfSpeech::Verb),
        ],
    }
}
