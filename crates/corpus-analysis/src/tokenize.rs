use unicode_segmentation::UnicodeSegmentation;

/// Splits text into sentences and sentences into surface tokens.
///
/// The index only ever calls these two methods; swapping in a different
/// segmentation strategy is a matter of implementing this trait.
pub trait Tokenizer {
    fn split_sentences(&self, text: &str) -> Vec<String>;
    fn split_words(&self, text: &str) -> Vec<String>;
}

/// Default tokenizer.
///
/// Word boundaries follow UAX#29 (`unicode_words`), which handles Cyrillic
/// and Latin alike. Sentence boundaries are rule-based on final punctuation
/// (`.`, `!`, `?`, `…`) followed by whitespace; article bodies are
/// lowercased before splitting, which defeats the capitalization cues
/// UAX#29 sentence rules rely on.
#[derive(Clone, Copy, Debug, Default)]
pub struct UnicodeTokenizer;

impl Tokenizer for UnicodeTokenizer {
    fn split_sentences(&self, text: &str) -> Vec<String> {
        let mut sentences = Vec::new();
        let mut current = String::new();
        let mut chars = text.chars().peekable();
        while let Some(c) = chars.next() {
            current.push(c);
            if matches!(c, '.' | '!' | '?' | '…') {
                // Consume any run of closing punctuation, then break on
                // whitespace or end of text.
                while let Some(&next) = chars.peek() {
                    if matches!(next, '.' | '!' | '?' | '…' | ')' | '"' | '»') {
                        current.push(next);
                        chars.next();
                    } else {
                        break;
                    }
                }
                if chars.peek().is_none_or(|next| next.is_whitespace()) {
                    flush(&mut sentences, &mut current);
                }
            }
        }
        flush(&mut sentences, &mut current);
        sentences
    }

    fn split_words(&self, text: &str) -> Vec<String> {
        text.unicode_words().map(str::to_string).collect()
    }
}

fn flush(sentences: &mut Vec<String>, current: &mut String) {
    let trimmed = current.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed.to_string());
    }
    current.clear();
}
