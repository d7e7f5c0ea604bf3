use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use corpus_analysis::Analyzer;
use regex::Regex;
use tracing::{info, warn};

use crate::corpus::Corpus;

/// Article header: a page-number line, the author/affiliation block, the
/// UDC classification line, the title block, then the annotation marker.
/// The body runs from right after the marker to the next header.
const HEADER_PATTERN: &str =
    r"(?m)^\d+[ \t]*\n((?:.+\n){1,5}?)УДК[^\n]*\n((?:.+\n){1,5}?)Аннотация\.?:?";

/// Author names in "И.О. Фамилия" form inside the header block.
const AUTHORS_PATTERN: &str = r"[А-ЯA-Z]\.\s?[А-ЯA-Z]\.?\s[А-Яа-я]+";

/// Everything from this marker to the end of an article is dropped.
const REFERENCES_MARKER: &str = "СПИСОК ЛИТЕРАТУРЫ";

/// One article as cut out of the raw corpus text, before any
/// normalization.
#[derive(Clone, Debug)]
pub struct ArticleRecord {
    pub authors: Vec<String>,
    pub title: String,
    pub body: String,
}

/// Splits a raw corpus dump (one text file, many articles) into
/// [`ArticleRecord`]s and feeds them to a [`Corpus`].
pub struct CorpusLoader {
    header: Regex,
    authors: Regex,
    references_marker: String,
}

impl Default for CorpusLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl CorpusLoader {
    pub fn new() -> Self {
        Self {
            header: Regex::new(HEADER_PATTERN).expect("default header pattern is valid"),
            authors: Regex::new(AUTHORS_PATTERN).expect("default authors pattern is valid"),
            references_marker: REFERENCES_MARKER.to_string(),
        }
    }

    /// Build a loader with custom patterns, for corpora with a different
    /// page layout. Fails on a malformed pattern before anything is read.
    pub fn with_patterns(
        header: &str,
        authors: &str,
        references_marker: impl Into<String>,
    ) -> Result<Self> {
        Ok(Self {
            header: Regex::new(header).context("header pattern")?,
            authors: Regex::new(authors).context("authors pattern")?,
            references_marker: references_marker.into(),
        })
    }

    /// Cut the raw text into per-article records, in file order.
    pub fn split(&self, text: &str) -> Result<Vec<ArticleRecord>> {
        let headers: Vec<_> = self.header.captures_iter(text).collect();
        if headers.is_empty() {
            bail!("corpus text does not match the article header pattern");
        }

        let mut records = Vec::with_capacity(headers.len());
        for (i, captures) in headers.iter().enumerate() {
            let whole = captures
                .get(0)
                .context("header match has no overall capture")?;
            let body_end = headers
                .get(i + 1)
                .and_then(|next| next.get(0))
                .map_or(text.len(), |m| m.start());
            let raw_body = &text[whole.end()..body_end];
            let body = match raw_body.split_once(self.references_marker.as_str()) {
                Some((before, _)) => before,
                None => raw_body,
            };

            let authors = self
                .authors
                .find_iter(&captures[1])
                .map(|m| m.as_str().to_string())
                .collect::<Vec<_>>();
            if authors.is_empty() {
                warn!(header = %captures[1].trim(), "no author names recognized");
            }

            records.push(ArticleRecord {
                authors,
                title: captures[2].to_string(),
                body: body.to_string(),
            });
        }
        Ok(records)
    }

    /// Read a corpus file and ingest every article it contains.
    ///
    /// The text is split before anything is ingested, so a file that
    /// fails to split leaves the corpus untouched.
    pub fn load_file(
        &self,
        path: impl AsRef<Path>,
        corpus: &mut Corpus,
        analyzer: &Analyzer,
    ) -> Result<usize> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("read corpus file {}", path.display()))?;
        let records = self
            .split(&text)
            .with_context(|| format!("split corpus file {}", path.display()))?;

        let count = records.len();
        for record in records {
            corpus.add_article(record.authors, &record.title, &record.body, analyzer);
        }
        info!("ingested {} articles from {}", count, path.display());
        Ok(count)
    }
}
