use regex::Regex;

/// Which letters survive sentence cleanup.
///
/// The corpus mixes Cyrillic article bodies with Latin terminology, so the
/// default keeps both scripts. Everything outside the selected alphabets
/// (digits, punctuation, math) is stripped before tokenization.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Alphabet {
    Cyrillic,
    Latin,
    #[default]
    CyrillicLatin,
}

impl Alphabet {
    pub fn contains(self, c: char) -> bool {
        let cyrillic = matches!(c, 'а'..='я' | 'А'..='Я' | 'ё' | 'Ё');
        let latin = c.is_ascii_alphabetic();
        match self {
            Alphabet::Cyrillic => cyrillic,
            Alphabet::Latin => latin,
            Alphabet::CyrillicLatin => cyrillic || latin,
        }
    }
}

/// Flatten an article title: no newlines, single spaces, trimmed.
pub(crate) fn normalize_title(title: &str) -> String {
    let mut out = String::with_capacity(title.len());
    let mut pending_space = false;
    for c in title.chars() {
        if c == '\n' || c == '\r' {
            continue;
        }
        if c.is_whitespace() {
            pending_space = !out.is_empty();
            continue;
        }
        if pending_space {
            out.push(' ');
            pending_space = false;
        }
        out.push(c);
    }
    out
}

/// Normalize an article body: lowercase, drop newlines, remove inline
/// figure references ("рис. 1." and friends) via the configured pattern.
pub(crate) fn normalize_body(body: &str, figure_re: &Regex) -> String {
    let lowered = body.to_lowercase();
    let flat: String = lowered.chars().filter(|c| *c != '\n' && *c != '\r').collect();
    figure_re.replace_all(&flat, "").into_owned()
}

/// Strip a raw sentence down to letters of the configured alphabets and
/// single spaces.
pub(crate) fn clean_sentence(sentence: &str, alphabet: Alphabet) -> String {
    let mut out = String::with_capacity(sentence.len());
    let mut pending_space = false;
    for c in sentence.chars() {
        if alphabet.contains(c) {
            if pending_space {
                out.push(' ');
                pending_space = false;
            }
            out.push(c);
        } else {
            // Any stripped run acts as a word boundary.
            pending_space = !out.is_empty();
        }
    }
    out
}
