/// Conjugator: finite verb forms for every (verb, subject, tense, type).
///
/// Pure functions only. Missing irregular forms fall back to the regular
/// "+s" / "+ed" rules instead of failing.

use crate::schema::lexicon::LexiconEntry;
use crate::schema::selection::{SentenceType, Subject, Tense};

/// The verb being conjugated: a lexical verb taking do-support, or the copula.
#[derive(Debug, Clone, Copy)]
pub enum Verb<'a> {
    Lexical(&'a LexiconEntry),
    Copula,
}

/// Finite surface forms of a predicate.
///
/// `auxiliary` is the word that fronts in questions and carries "not" in
/// negatives; when it is absent, `verb` itself (a copula) plays that role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conjugation {
    pub auxiliary: Option<&'static str>,
    pub verb: String,
    pub negation: Option<&'static str>,
}

impl Conjugation {
    /// The word that inverts with the subject or takes "not".
    pub fn finite(&self) -> &str {
        match self.auxiliary {
            Some(aux) => aux,
            None => &self.verb,
        }
    }
}

pub fn conjugate(
    verb: Verb<'_>,
    subject: Subject,
    tense: Tense,
    sentence_type: SentenceType,
) -> Conjugation {
    let negation = match sentence_type {
        SentenceType::Negative => Some("not"),
        SentenceType::Positive | SentenceType::Question => None,
    };
    match verb {
        Verb::Lexical(entry) => conjugate_lexical(entry, subject, tense, sentence_type, negation),
        Verb::Copula => conjugate_copula(subject, tense, negation),
    }
}

fn conjugate_lexical(
    entry: &LexiconEntry,
    subject: Subject,
    tense: Tense,
    sentence_type: SentenceType,
    negation: Option<&'static str>,
) -> Conjugation {
    let base = || entry.base.clone();
    let (auxiliary, verb) = match (tense, sentence_type) {
        (Tense::Future, _) => (Some("will"), base()),
        (Tense::Present, SentenceType::Positive) => {
            if subject.is_third_singular() {
                (None, third_person_form(entry))
            } else {
                (None, base())
            }
        }
        (Tense::Present, SentenceType::Negative | SentenceType::Question) => {
            let aux = if subject.is_third_singular() { "does" } else { "do" };
            (Some(aux), base())
        }
        (Tense::Past, SentenceType::Positive) => (None, past_form(entry)),
        (Tense::Past, SentenceType::Negative | SentenceType::Question) => (Some("did"), base()),
    };
    Conjugation {
        auxiliary,
        verb,
        negation,
    }
}

fn conjugate_copula(subject: Subject, tense: Tense, negation: Option<&'static str>) -> Conjugation {
    let (auxiliary, verb) = match tense {
        Tense::Present => (None, present_copula(subject)),
        Tense::Past => (None, past_copula(subject)),
        Tense::Future => (Some("will"), "be"),
    };
    Conjugation {
        auxiliary,
        verb: verb.to_string(),
        negation,
    }
}

fn present_copula(subject: Subject) -> &'static str {
    match subject {
        Subject::FirstSingular => "am",
        Subject::ThirdSingular => "is",
        Subject::FirstPlural | Subject::Second | Subject::ThirdPlural => "are",
    }
}

fn past_copula(subject: Subject) -> &'static str {
    match subject {
        Subject::FirstSingular | Subject::ThirdSingular => "was",
        Subject::FirstPlural | Subject::Second | Subject::ThirdPlural => "were",
    }
}

pub fn third_person_form(entry: &LexiconEntry) -> String {
    match &entry.third_person_form {
        Some(form) => form.clone(),
        None => {
            log::debug!("no third-person form for '{}', using regular rule", entry.id);
            regular_third_person(&entry.base)
        }
    }
}

pub fn past_form(entry: &LexiconEntry) -> String {
    match &entry.past_form {
        Some(form) => form.clone(),
        None => {
            log::debug!("no past form for '{}', using regular rule", entry.id);
            regular_past(&entry.base)
        }
    }
}

/// "watch" → "watches", "study" → "studies", "play" → "plays".
pub fn regular_third_person(base: &str) -> String {
    if ends_with_consonant_y(base) {
        format!("{}ies", &base[..base.len() - 1])
    } else if ["ch", "sh", "s", "x", "o"].iter().any(|s| base.ends_with(s)) {
        format!("{base}es")
    } else {
        format!("{base}s")
    }
}

/// "live" → "lived", "study" → "studied", "talk" → "talked".
pub fn regular_past(base: &str) -> String {
    if ends_with_consonant_y(base) {
        format!("{}ied", &base[..base.len() - 1])
    } else if base.ends_with('e') {
        format!("{base}d")
    } else {
        format!("{base}ed")
    }
}

pub(crate) fn ends_with_consonant_y(word: &str) -> bool {
    let mut rev = word.chars().rev();
    match (rev.next(), rev.next()) {
        (Some('y'), Some(prev)) => !is_vowel(prev),
        _ => false,
    }
}

pub(crate) fn is_vowel(c: char) -> bool {
    matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u')
}
