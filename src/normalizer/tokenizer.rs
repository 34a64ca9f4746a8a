use once_cell::sync::Lazy;
use regex::Regex;

/// A word (letters, digits, underscore, inner apostrophes) or a run of punctuation.
static WORD_OR_PUNCT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\w+(?:'\w+)*|[^\w\s]+").expect("static tokenizer pattern")
});

/// Terms used by the TF-IDF vectorizer: two or more word characters.
static TFIDF_TERM: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b\w\w+\b").expect("static term pattern")
});

/// Clitics split off the end of a word, longest first.
const CLITICS: &[&str] = &["n't", "'ll", "'re", "'ve", "'s", "'d", "'m"];

/// Split on Unicode whitespace.
/// No punctuation handling: `"cat."` stays `"cat."`.
pub fn whitespace_tokenize(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}

/// Word-boundary tokenizer.
///
/// Words and punctuation runs become separate tokens and
/// contractions are split into stem and clitic (`don't` -> `do`, `n't`).
pub fn word_tokenize(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    for m in WORD_OR_PUNCT.find_iter(text) {
        let piece = m.as_str();
        match split_clitic(piece) {
            Some((stem, clitic)) => {
                tokens.push(stem.to_string());
                tokens.push(clitic.to_string());
            }
            None => tokens.push(piece.to_string()),
        }
    }
    tokens
}

/// Terms of a document as seen by the TF-IDF vectorizer.
pub fn tfidf_terms(text: &str) -> Vec<&str> {
    TFIDF_TERM.find_iter(text).map(|m| m.as_str()).collect()
}

fn split_clitic(piece: &str) -> Option<(&str, &str)> {
    if !piece.contains('\'') {
        return None;
    }
    CLITICS.iter().find_map(|clitic| {
        piece
            .strip_suffix(clitic)
            .filter(|stem| !stem.is_empty())
            .map(|stem| (stem, &piece[stem.len()..]))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_keeps_punctuation_attached() {
        assert_eq!(whitespace_tokenize("the cat.  sat\n"), vec!["the", "cat.", "sat"]);
        assert!(whitespace_tokenize("   ").is_empty());
    }

    #[test]
    fn word_tokenize_splits_punctuation_and_clitics() {
        assert_eq!(
            word_tokenize("don't stop, it's fine..."),
            vec!["do", "n't", "stop", ",", "it", "'s", "fine", "..."]
        );
        assert_eq!(word_tokenize("rock'n'roll"), vec!["rock'n'roll"]);
    }

    #[test]
    fn tfidf_terms_drop_single_characters() {
        assert_eq!(tfidf_terms("a cat, x dog."), vec!["cat", "dog"]);
    }
}
