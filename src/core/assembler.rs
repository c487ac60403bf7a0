/// Sentence assembler: word order, negation, inversion and punctuation
/// for the five clause patterns, plus the Japanese gloss.

use serde::{Deserialize, Serialize};

use crate::core::conjugator::Conjugation;
use crate::schema::selection::{SentencePattern, SentenceType, Subject, Tense};

/// The generated sentence pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    pub english: String,
    pub japanese: String,
}

/// An English phrase with its Japanese gloss.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phrase {
    pub text: String,
    pub gloss: String,
}

impl Phrase {
    pub fn new(text: &str, gloss: &str) -> Self {
        Self {
            text: text.to_string(),
            gloss: gloss.to_string(),
        }
    }
}

/// Everything after the predicate, shaped by the sentence pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tail {
    Sv { adverbial: Option<Phrase> },
    Svo { object: Phrase },
    Svc { complement: Phrase },
    Svoo { recipient: Subject, object: Phrase },
    Svoc { object: Phrase, complement: Phrase },
}

impl Tail {
    pub fn pattern(&self) -> SentencePattern {
        match self {
            Self::Sv { .. } => SentencePattern::Sv,
            Self::Svo { .. } => SentencePattern::Svo,
            Self::Svc { .. } => SentencePattern::Svc,
            Self::Svoo { .. } => SentencePattern::Svoo,
            Self::Svoc { .. } => SentencePattern::Svoc,
        }
    }

    fn words(&self) -> Vec<&str> {
        match self {
            Self::Sv { adverbial } => adverbial.iter().map(|p| p.text.as_str()).collect(),
            Self::Svo { object } => vec![object.text.as_str()],
            Self::Svc { complement } => vec![complement.text.as_str()],
            Self::Svoo { recipient, object } => {
                vec![recipient.object_pronoun(), object.text.as_str()]
            }
            Self::Svoc { object, complement } => {
                vec![object.text.as_str(), complement.text.as_str()]
            }
        }
    }

    // Japanese is verb-final: arguments with their particles come first.
    fn gloss(&self) -> String {
        match self {
            Self::Sv { adverbial } => adverbial
                .as_ref()
                .map(|p| p.gloss.clone())
                .unwrap_or_default(),
            Self::Svo { object } => format!("{}を", object.gloss),
            Self::Svc { complement } => complement.gloss.clone(),
            Self::Svoo { recipient, object } => {
                format!("{}に{}を", recipient.gloss(), object.gloss)
            }
            Self::Svoc { object, complement } => {
                format!("{}を{}に", object.gloss, complement.gloss)
            }
        }
    }
}

/// Compose subject, predicate and tail into the final sentence pair.
///
/// Negatives put the negation marker right after the finite word
/// (auxiliary or copula); questions front it before the subject.
pub fn assemble(
    subject: Subject,
    conjugation: &Conjugation,
    tense: Tense,
    sentence_type: SentenceType,
    verb_gloss: &str,
    tail: &Tail,
) -> Sentence {
    let mut words: Vec<&str> = Vec::new();
    let subject_text = subject.pronoun();
    let non_finite = conjugation.auxiliary.map(|_| conjugation.verb.as_str());

    match sentence_type {
        SentenceType::Positive => {
            words.push(subject_text);
            words.push(conjugation.finite());
            words.extend(non_finite);
        }
        SentenceType::Negative => {
            words.push(subject_text);
            words.push(conjugation.finite());
            words.extend(conjugation.negation);
            words.extend(non_finite);
        }
        SentenceType::Question => {
            words.push(conjugation.finite());
            words.push(subject_text);
            words.extend(non_finite);
        }
    }
    words.extend(tail.words());

    let mut english = capitalize_first(&words.join(" "));
    english.push(sentence_type.punctuation());

    Sentence {
        english,
        japanese: japanese_gloss(subject, tense, sentence_type, verb_gloss, tail),
    }
}

fn japanese_gloss(
    subject: Subject,
    tense: Tense,
    sentence_type: SentenceType,
    verb_gloss: &str,
    tail: &Tail,
) -> String {
    let mut out = format!("{}は{}{}", subject.gloss(), tail.gloss(), verb_gloss);
    let markers: Vec<&str> = [tense.gloss_marker(), sentence_type.gloss_marker()]
        .into_iter()
        .flatten()
        .collect();
    if !markers.is_empty() {
        out.push('（');
        out.push_str(&markers.join("・"));
        out.push('）');
    }
    out.push(match sentence_type {
        SentenceType::Positive | SentenceType::Negative => '。',
        SentenceType::Question => '？',
    });
    out
}

pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
