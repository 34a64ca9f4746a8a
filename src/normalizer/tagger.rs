use serde::{Deserialize, Serialize};

use super::lemmatizer;

/// Coarse part-of-speech classes understood by the lemmatizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PosTag {
    Noun,
    Verb,
    Adjective,
    Adverb,
    /// Numbers, punctuation, symbols. Never lemmatized.
    Other,
}

/// `-ing` words that are nouns far more often than verb forms.
const ING_NOUNS: &[&str] = &[
    "morning", "evening", "building", "ceiling", "wedding", "nothing", "something",
    "anything", "everything", "pudding", "clothing", "spring", "string", "thing", "king",
    "ring", "wing", "sibling", "darling",
];

const ADJECTIVE_SUFFIXES: &[&str] = &["ous", "ful", "ive", "able", "ible", "less", "ish", "ical"];

/// Rule-based tagger.
///
/// Closed lists first (irregular forms), then suffix heuristics.
/// Anything unrecognized is a noun.
pub fn tag(token: &str) -> PosTag {
    if !token.chars().any(char::is_alphabetic) {
        return PosTag::Other;
    }
    if lemmatizer::is_irregular_verb(token) {
        return PosTag::Verb;
    }
    if lemmatizer::is_irregular_adjective(token) {
        return PosTag::Adjective;
    }
    if lemmatizer::is_irregular_noun(token) {
        return PosTag::Noun;
    }

    let len = token.chars().count();
    if len > 4 && token.ends_with("ly") {
        return PosTag::Adverb;
    }
    if len > 5
        && token.ends_with("ing")
        && !ING_NOUNS.contains(&token)
        && has_vowel(&token[..token.len() - 3])
    {
        return PosTag::Verb;
    }
    if len > 4 && token.ends_with("ed") && has_vowel(&token[..token.len() - 2]) {
        return PosTag::Verb;
    }
    if len > 5 && is_superlative(token) {
        return PosTag::Adjective;
    }
    if len > 5 && ADJECTIVE_SUFFIXES.iter().any(|s| token.ends_with(s)) {
        return PosTag::Adjective;
    }
    PosTag::Noun
}

fn has_vowel(s: &str) -> bool {
    s.chars().any(|c| matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y'))
}

/// `happiest`, `biggest`. Plain `-est` is left alone (`forest`, `interest`).
fn is_superlative(token: &str) -> bool {
    if token.ends_with("iest") {
        return true;
    }
    match token.strip_suffix("est") {
        Some(stem) => lemmatizer::ends_with_double_consonant(stem),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_by_suffix() {
        assert_eq!(tag("running"), PosTag::Verb);
        assert_eq!(tag("jumped"), PosTag::Verb);
        assert_eq!(tag("quickly"), PosTag::Adverb);
        assert_eq!(tag("famous"), PosTag::Adjective);
        assert_eq!(tag("biggest"), PosTag::Adjective);
        assert_eq!(tag("cats"), PosTag::Noun);
    }

    #[test]
    fn closed_lists_win_over_suffixes() {
        assert_eq!(tag("went"), PosTag::Verb);
        assert_eq!(tag("better"), PosTag::Adjective);
        assert_eq!(tag("children"), PosTag::Noun);
        assert_eq!(tag("morning"), PosTag::Noun);
        assert_eq!(tag("forest"), PosTag::Noun);
    }

    #[test]
    fn non_words_are_other() {
        assert_eq!(tag("..."), PosTag::Other);
        assert_eq!(tag("1984"), PosTag::Other);
    }
}
