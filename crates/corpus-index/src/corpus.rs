use std::collections::HashMap;
use std::time::Instant;

use corpus_analysis::{Analyzer, Morphology};
use corpus_types::{ArticleId, PartOfSpeech, SentenceId, WordId};
use tracing::info;

use crate::registry::{FormEntry, Word, WordRegistry};

/// An article of the corpus: authors, flattened title and preprocessed
/// body text, plus its sentences in reading order.
///
/// Article identity for grouping purposes is the (title, authors) pair;
/// two arena entries with equal titles and author lists are treated as the
/// same article even when their body texts differ.
#[derive(Clone, Debug)]
pub struct Article {
    authors: Vec<String>,
    title: String,
    text: String,
    sentences: Vec<SentenceId>,
}

impl Article {
    pub fn authors(&self) -> &[String] {
        &self.authors
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn sentences(&self) -> &[SentenceId] {
        &self.sentences
    }

    fn identity(&self) -> (&str, &[String]) {
        (self.title.as_str(), self.authors.as_slice())
    }
}

/// A preprocessed sentence: cleaned text, owning article, and the words
/// occurring in it (deduplicated by word identity, first-occurrence
/// order). Immutable once built.
#[derive(Clone, Debug)]
pub struct Sentence {
    article: ArticleId,
    text: String,
    words: Vec<WordId>,
}

impl Sentence {
    pub fn article(&self) -> ArticleId {
        self.article
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn words(&self) -> &[WordId] {
        &self.words
    }
}

/// Occurrences of one word inside one article, grouped per form.
///
/// Produced by [`Corpus::occurrences`]; (article, form, sentence) triples
/// are deduplicated, everything else keeps first-seen order.
#[derive(Clone, Debug)]
pub struct ArticleOccurrences<'a> {
    pub article: ArticleId,
    pub forms: Vec<(&'a str, Vec<SentenceId>)>,
}

/// The ingested corpus: article and sentence arenas plus the word
/// registry they populate.
///
/// Each test or session constructs its own `Corpus`; there is no process
/// global. Ingestion is strictly sequential (articles, then sentences,
/// then tokens) because registry append order is observable.
#[derive(Debug, Default)]
pub struct Corpus {
    articles: Vec<Article>,
    sentences: Vec<Sentence>,
    registry: WordRegistry,
}

impl Corpus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ingest one article: normalize the title and body, split the body
    /// into sentences, and register every token of every sentence.
    ///
    /// Empty or letter-free input produces an article with zero
    /// sentences, not an error.
    pub fn add_article(
        &mut self,
        authors: Vec<String>,
        title: &str,
        body: &str,
        analyzer: &Analyzer,
    ) -> ArticleId {
        let start = Instant::now();
        let title = analyzer.normalize_title(title);
        let body = analyzer.normalize_body(body);
        let article_id = ArticleId(self.articles.len() as u32);

        let mut sentence_ids = Vec::new();
        let mut word_count = 0usize;
        for raw in analyzer.split_sentences(&body) {
            let text = analyzer.clean_sentence(&raw);
            if text.is_empty() {
                continue;
            }
            let sentence_id = SentenceId(self.sentences.len() as u32);
            let mut words = Vec::new();
            for token in analyzer.split_words(&text) {
                if analyzer.filters_stop_words() && analyzer.is_stop_word(&token) {
                    continue;
                }
                let stem = analyzer.stem(&token);
                let word_id = self.registry.get_or_insert(&stem, &token, sentence_id);
                if !words.contains(&word_id) {
                    words.push(word_id);
                }
            }
            word_count += words.len();
            self.sentences.push(Sentence {
                article: article_id,
                text,
                words,
            });
            sentence_ids.push(sentence_id);
        }

        info!(
            title = %title,
            sentences = sentence_ids.len(),
            words = word_count,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "article ingested"
        );

        self.articles.push(Article {
            authors,
            title,
            text: body,
            sentences: sentence_ids,
        });
        article_id
    }

    pub fn article(&self, id: ArticleId) -> &Article {
        &self.articles[id.as_usize()]
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn sentence(&self, id: SentenceId) -> &Sentence {
        &self.sentences[id.as_usize()]
    }

    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    pub fn registry(&self) -> &WordRegistry {
        &self.registry
    }

    /// Group every (form, sentence) occurrence of `word` by owning
    /// article.
    ///
    /// Articles with identical (title, authors) collapse under one key;
    /// the reported id is the first arena entry seen for that identity.
    pub fn occurrences<'a>(&'a self, word: &'a Word) -> Vec<ArticleOccurrences<'a>> {
        self.group_by_article(word.forms().iter())
    }

    /// Like [`Corpus::occurrences`], but restricted to forms the
    /// morphology oracle classifies as `pos`.
    pub fn occurrences_with_pos<'a>(
        &'a self,
        word: &'a Word,
        pos: PartOfSpeech,
        morphology: &dyn Morphology,
    ) -> Vec<ArticleOccurrences<'a>> {
        self.group_by_article(
            word.forms()
                .iter()
                .filter(|entry| morphology.part_of_speech(&entry.form) == pos),
        )
    }

    fn group_by_article<'a>(
        &'a self,
        forms: impl Iterator<Item = &'a FormEntry>,
    ) -> Vec<ArticleOccurrences<'a>> {
        let mut groups: Vec<ArticleOccurrences<'a>> = Vec::new();
        let mut by_identity: HashMap<(&str, &[String]), usize> = HashMap::new();
        for entry in forms {
            for &sentence_id in &entry.sentences {
                let article_id = self.sentences[sentence_id.as_usize()].article;
                let identity = self.articles[article_id.as_usize()].identity();
                let slot = *by_identity.entry(identity).or_insert_with(|| {
                    groups.push(ArticleOccurrences {
                        article: article_id,
                        forms: Vec::new(),
                    });
                    groups.len() - 1
                });
                let group = &mut groups[slot];
                match group.forms.iter_mut().find(|(form, _)| *form == entry.form) {
                    Some((_, sentences)) => {
                        if !sentences.contains(&sentence_id) {
                            sentences.push(sentence_id);
                        }
                    }
                    None => group.forms.push((entry.form.as_str(), vec![sentence_id])),
                }
            }
        }
        groups
    }
}
