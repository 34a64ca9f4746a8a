use ahash::RandomState;
use once_cell::sync::Lazy;
use std::collections::HashMap;

use super::tagger::PosTag;

type ExceptionTable = HashMap<&'static str, &'static str, RandomState>;

static NOUN_EXCEPTIONS: Lazy<ExceptionTable> = Lazy::new(|| {
    [
        ("children", "child"), ("men", "man"), ("women", "woman"), ("feet", "foot"),
        ("teeth", "tooth"), ("mice", "mouse"), ("geese", "goose"), ("people", "person"),
        ("oxen", "ox"), ("lice", "louse"), ("dice", "die"), ("wolves", "wolf"),
        ("knives", "knife"), ("wives", "wife"), ("lives", "life"), ("leaves", "leaf"),
        ("halves", "half"), ("shelves", "shelf"), ("thieves", "thief"), ("criteria", "criterion"),
        ("phenomena", "phenomenon"), ("analyses", "analysis"), ("theses", "thesis"),
        ("crises", "crisis"), ("series", "series"), ("species", "species"), ("news", "news"),
    ]
    .into_iter()
    .collect()
});

static VERB_EXCEPTIONS: Lazy<ExceptionTable> = Lazy::new(|| {
    [
        ("went", "go"), ("gone", "go"), ("goes", "go"), ("ran", "run"), ("ate", "eat"),
        ("eaten", "eat"), ("saw", "see"), ("seen", "see"), ("took", "take"), ("taken", "take"),
        ("made", "make"), ("said", "say"), ("told", "tell"), ("came", "come"), ("knew", "know"),
        ("known", "know"), ("thought", "think"), ("bought", "buy"), ("brought", "bring"),
        ("wrote", "write"), ("written", "write"), ("spoke", "speak"), ("spoken", "speak"),
        ("began", "begin"), ("begun", "begin"), ("sat", "sit"), ("stood", "stand"),
        ("understood", "understand"), ("found", "find"), ("gave", "give"), ("given", "give"),
        ("got", "get"), ("gotten", "get"), ("held", "hold"), ("kept", "keep"), ("left", "leave"),
        ("lost", "lose"), ("meant", "mean"), ("met", "meet"), ("paid", "pay"), ("sent", "send"),
        ("slept", "sleep"), ("sold", "sell"), ("spent", "spend"), ("taught", "teach"),
        ("felt", "feel"), ("fell", "fall"), ("fought", "fight"), ("flew", "fly"), ("flown", "fly"),
        ("grew", "grow"), ("grown", "grow"), ("hid", "hide"), ("hidden", "hide"), ("led", "lead"),
        ("rode", "ride"), ("rose", "rise"), ("sang", "sing"), ("sung", "sing"), ("shook", "shake"),
        ("drank", "drink"), ("drove", "drive"), ("driven", "drive"), ("broke", "break"),
        ("broken", "break"), ("chose", "choose"), ("chosen", "choose"), ("forgot", "forget"),
        ("forgotten", "forget"), ("froze", "freeze"), ("frozen", "freeze"), ("wore", "wear"),
        ("worn", "wear"), ("threw", "throw"), ("thrown", "throw"), ("became", "become"),
        ("built", "build"), ("caught", "catch"), ("drew", "draw"), ("drawn", "draw"),
        ("fed", "feed"), ("fled", "flee"), ("heard", "hear"), ("laid", "lay"), ("lent", "lend"),
        ("sought", "seek"), ("shot", "shoot"), ("stole", "steal"), ("stolen", "steal"),
        ("struck", "strike"), ("swam", "swim"), ("tore", "tear"), ("torn", "tear"),
        ("woke", "wake"), ("woken", "wake"), ("wept", "weep"), ("used", "use"),
        ("using", "use"), ("caused", "cause"), ("causing", "cause"), ("based", "base"),
        ("closed", "close"), ("raised", "raise"), ("pleased", "please"),
        ("increased", "increase"), ("released", "release"), ("refused", "refuse"),
        ("supposed", "suppose"), ("proposed", "propose"), ("purchased", "purchase"),
    ]
    .into_iter()
    .collect()
});

static ADJECTIVE_EXCEPTIONS: Lazy<ExceptionTable> = Lazy::new(|| {
    [
        ("better", "good"), ("best", "good"), ("worse", "bad"), ("worst", "bad"),
        ("less", "little"), ("least", "little"), ("elder", "old"), ("eldest", "old"),
        ("farther", "far"), ("farthest", "far"),
    ]
    .into_iter()
    .collect()
});

/// Stems shorter than this are never produced by suffix rules.
const MIN_STEM_LEN: usize = 2;

pub fn is_irregular_verb(token: &str) -> bool {
    VERB_EXCEPTIONS.contains_key(token)
}

pub fn is_irregular_adjective(token: &str) -> bool {
    ADJECTIVE_EXCEPTIONS.contains_key(token)
}

pub fn is_irregular_noun(token: &str) -> bool {
    NOUN_EXCEPTIONS.contains_key(token)
}

/// Reduce a lower-cased token to its dictionary base form.
///
/// The tag picks the exception table and suffix rules. Adverbs and
/// `Other` come back unchanged.
pub fn lemmatize(token: &str, tag: PosTag) -> String {
    match tag {
        PosTag::Noun => lemmatize_noun(token),
        PosTag::Verb => lemmatize_verb(token),
        PosTag::Adjective => lemmatize_adjective(token),
        PosTag::Adverb | PosTag::Other => token.to_string(),
    }
}

fn lemmatize_noun(token: &str) -> String {
    if let Some(lemma) = NOUN_EXCEPTIONS.get(token) {
        return lemma.to_string();
    }
    if token.chars().count() <= 3 {
        return token.to_string();
    }
    if token.ends_with("ss") || token.ends_with("us") || token.ends_with("is") {
        return token.to_string();
    }
    if let Some(stem) = token.strip_suffix("ies") {
        if stem.len() >= MIN_STEM_LEN {
            return format!("{stem}y");
        }
    }
    for suffix in ["sses", "ches", "shes", "xes", "zes"] {
        if token.ends_with(suffix) {
            return token[..token.len() - 2].to_string();
        }
    }
    match token.strip_suffix('s') {
        Some(stem) => stem.to_string(),
        None => token.to_string(),
    }
}

fn lemmatize_verb(token: &str) -> String {
    if let Some(lemma) = VERB_EXCEPTIONS.get(token) {
        return lemma.to_string();
    }
    if let Some(stem) = token.strip_suffix("ies") {
        if stem.len() >= MIN_STEM_LEN {
            return format!("{stem}y");
        }
    }
    if let Some(stem) = token.strip_suffix("ing") {
        if stem.len() >= MIN_STEM_LEN && contains_vowel(stem) {
            return restore_stem(stem);
        }
        return token.to_string();
    }
    if let Some(stem) = token.strip_suffix("eed") {
        // agreed -> agree, but speed stays speed
        if measure(stem) > 0 {
            return format!("{stem}ee");
        }
        return token.to_string();
    }
    if let Some(stem) = token.strip_suffix("ied") {
        if stem.len() >= MIN_STEM_LEN {
            return format!("{stem}y");
        }
        return token[..token.len() - 1].to_string();
    }
    if let Some(stem) = token.strip_suffix("ed") {
        if stem.len() >= MIN_STEM_LEN && contains_vowel(stem) {
            return restore_stem(stem);
        }
        return token.to_string();
    }
    for suffix in ["sses", "ches", "shes", "xes", "zes", "oes"] {
        if token.ends_with(suffix) {
            return token[..token.len() - 2].to_string();
        }
    }
    if token.ends_with("ss") {
        return token.to_string();
    }
    match token.strip_suffix('s') {
        Some(stem) if stem.len() >= MIN_STEM_LEN => stem.to_string(),
        _ => token.to_string(),
    }
}

fn lemmatize_adjective(token: &str) -> String {
    if let Some(lemma) = ADJECTIVE_EXCEPTIONS.get(token) {
        return lemma.to_string();
    }
    for (suffix, replacement) in [("iest", "y"), ("ier", "y")] {
        if let Some(stem) = token.strip_suffix(suffix) {
            if stem.len() >= MIN_STEM_LEN {
                return format!("{stem}{replacement}");
            }
        }
    }
    for suffix in ["est", "er"] {
        if let Some(stem) = token.strip_suffix(suffix) {
            if ends_with_double_consonant(stem) {
                return drop_last_char(stem);
            }
        }
    }
    token.to_string()
}

/// Repair a stem left behind by `-ing` / `-ed` removal.
fn restore_stem(stem: &str) -> String {
    if stem.ends_with("at") || stem.ends_with("bl") || stem.ends_with("iz") {
        return format!("{stem}e");
    }
    if ends_with_double_consonant(stem) && !stem.ends_with(['l', 's', 'z']) {
        return drop_last_char(stem);
    }
    // no English word ends in v; -nce/-rce/-uce lose their e
    if stem.ends_with('v') || stem.ends_with("nc") || stem.ends_with("rc") || stem.ends_with("uc") {
        return format!("{stem}e");
    }
    if measure(stem) == 1 && ends_cvc(stem) {
        return format!("{stem}e");
    }
    stem.to_string()
}

/// `s` without its last character. Stems may end in multi-byte letters.
fn drop_last_char(s: &str) -> String {
    let mut out = s.to_string();
    out.pop();
    out
}

/// Porter consonant test for every character, left to right:
/// y counts as a vowel after a consonant.
fn consonant_flags(s: &str) -> Vec<bool> {
    let mut flags: Vec<bool> = Vec::with_capacity(s.len());
    for c in s.chars() {
        let consonant = match c {
            'a' | 'e' | 'i' | 'o' | 'u' => false,
            'y' => flags.last().map_or(true, |&prev| !prev),
            _ => true,
        };
        flags.push(consonant);
    }
    flags
}

fn contains_vowel(s: &str) -> bool {
    consonant_flags(s).iter().any(|&consonant| !consonant)
}

/// Number of vowel-consonant sequences, the Porter `m`.
fn measure(s: &str) -> usize {
    let mut m = 0;
    let mut prev_vowel = false;
    for consonant in consonant_flags(s) {
        if consonant && prev_vowel {
            m += 1;
        }
        prev_vowel = !consonant;
    }
    m
}

/// consonant-vowel-consonant ending where the last consonant is not w, x or y.
fn ends_cvc(s: &str) -> bool {
    let flags = consonant_flags(s);
    let n = flags.len();
    if n < 3 {
        return false;
    }
    flags[n - 3]
        && !flags[n - 2]
        && flags[n - 1]
        && !s.ends_with(['w', 'x', 'y'])
}

pub(crate) fn ends_with_double_consonant(s: &str) -> bool {
    let mut tail = s.chars().rev();
    match (tail.next(), tail.next()) {
        (Some(last), Some(prev)) => {
            last == prev && last.is_alphabetic() && consonant_flags(s).last().copied().unwrap_or(false)
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nouns() {
        assert_eq!(lemmatize("cats", PosTag::Noun), "cat");
        assert_eq!(lemmatize("studies", PosTag::Noun), "study");
        assert_eq!(lemmatize("boxes", PosTag::Noun), "box");
        assert_eq!(lemmatize("classes", PosTag::Noun), "class");
        assert_eq!(lemmatize("children", PosTag::Noun), "child");
        assert_eq!(lemmatize("status", PosTag::Noun), "status");
        assert_eq!(lemmatize("gas", PosTag::Noun), "gas");
    }

    #[test]
    fn verbs() {
        assert_eq!(lemmatize("running", PosTag::Verb), "run");
        assert_eq!(lemmatize("walking", PosTag::Verb), "walk");
        assert_eq!(lemmatize("making", PosTag::Verb), "make");
        assert_eq!(lemmatize("created", PosTag::Verb), "create");
        assert_eq!(lemmatize("stopped", PosTag::Verb), "stop");
        assert_eq!(lemmatize("played", PosTag::Verb), "play");
        assert_eq!(lemmatize("agreed", PosTag::Verb), "agree");
        assert_eq!(lemmatize("studied", PosTag::Verb), "study");
        assert_eq!(lemmatize("loved", PosTag::Verb), "love");
        assert_eq!(lemmatize("went", PosTag::Verb), "go");
        assert_eq!(lemmatize("watches", PosTag::Verb), "watch");
    }

    #[test]
    fn adjectives() {
        assert_eq!(lemmatize("better", PosTag::Adjective), "good");
        assert_eq!(lemmatize("happiest", PosTag::Adjective), "happy");
        assert_eq!(lemmatize("biggest", PosTag::Adjective), "big");
        assert_eq!(lemmatize("famous", PosTag::Adjective), "famous");
    }

    #[test]
    fn untouched_classes() {
        assert_eq!(lemmatize("quickly", PosTag::Adverb), "quickly");
        assert_eq!(lemmatize("...", PosTag::Other), "...");
    }

    #[test]
    fn porter_measure() {
        assert_eq!(measure("tr"), 0);
        assert_eq!(measure("trouble"), 1);
        assert_eq!(measure("agr"), 1);
        assert_eq!(measure("oaten"), 2);
        assert!(ends_cvc("mak"));
        assert!(!ends_cvc("play"));
        assert_eq!(measure("syzygy"), 2);
    }

    #[test]
    fn doubled_non_ascii_consonants() {
        assert_eq!(lemmatize("aßßing", PosTag::Verb), "aß");
        assert_eq!(lemmatize("aßßed", PosTag::Verb), "aß");
        assert_eq!(lemmatize("grüßßest", PosTag::Adjective), "grüß");
        assert_eq!(lemmatize("бнннing", PosTag::Verb), "бнннing");
        assert!(ends_with_double_consonant("stałł"));
    }

    #[test]
    fn long_runs_of_y() {
        let token = format!("{}ing", "y".repeat(1_000_000));
        let lemma = lemmatize(&token, PosTag::Verb);
        assert_eq!(lemma.len(), 1_000_000);
        assert_eq!(measure(&"y".repeat(1_000_001)), 500_000);
    }
}
