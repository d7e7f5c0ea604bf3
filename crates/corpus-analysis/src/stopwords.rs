use std::collections::HashSet;

/// High-frequency Russian function words.
const RUSSIAN: &[&str] = &[
    "и", "в", "во", "не", "что", "он", "на", "я", "с", "со", "как", "а", "то", "все", "она",
    "так", "его", "но", "да", "ты", "к", "у", "же", "вы", "за", "бы", "по", "только", "ее",
    "мне", "было", "вот", "от", "меня", "еще", "нет", "о", "из", "ему", "теперь", "когда",
    "даже", "ну", "ли", "если", "уже", "или", "ни", "быть", "был", "него", "до", "вас", "них",
    "там", "потом", "себя", "может", "они", "тут", "где", "есть", "надо", "ней", "для", "мы",
    "тебя", "их", "чем", "была", "сам", "чтобы", "без", "будто", "чего", "раз", "тоже", "себе",
    "под", "будет", "тогда", "кто", "этот", "того", "какой", "при", "об", "это", "эти",
];

/// Standard English stopwords (Lucene's default set).
const ENGLISH: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "but", "by", "for", "if", "in", "into", "is",
    "it", "no", "not", "of", "on", "or", "such", "that", "the", "their", "then", "there",
    "these", "they", "this", "to", "was", "will", "with",
];

/// Membership test over the combined Russian and English stop-word lists.
///
/// The corpus mixes both languages inside one article, so the filter always
/// carries the union; whether it is applied at all is decided by
/// [`AnalyzerConfig::filter_stop_words`](crate::AnalyzerConfig).
#[derive(Clone, Debug)]
pub struct StopwordFilter {
    words: HashSet<&'static str>,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl StopwordFilter {
    pub fn new() -> Self {
        let words = RUSSIAN.iter().chain(ENGLISH).copied().collect();
        Self { words }
    }

    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn covers_both_languages() {
        let filter = StopwordFilter::new();
        assert!(filter.contains("на"));
        assert!(filter.contains("the"));
        assert!(!filter.contains("кот"));
        assert!(!filter.contains("window"));
    }

    #[test]
    fn lookup_is_exact() {
        let filter = StopwordFilter::new();
        // Tokens are lowercased before filtering; the list stores
        // lowercase only.
        assert!(!filter.contains("На"));
    }
}
