/// Complement selector: which objects and complements a (pattern, number
/// form) pair admits, and how the chosen one is written out.

use serde::{Deserialize, Serialize};

use crate::core::assembler::Phrase;
use crate::core::conjugator::{ends_with_consonant_y, is_vowel};
use crate::schema::lexicon::LexiconEntry;
use crate::schema::selection::{NumberForm, SentencePattern};

/// Pronoun sentinel that determiner forms never offer.
pub const SOMETHING: &str = "something";

/// Locative/stative phrases (with glosses) that complete SV sentences.
pub const SV_ADVERBIALS: &[(&str, &str)] = &[
    ("at home", "家に"),
    ("at school", "学校に"),
    ("here", "ここに"),
    ("in the kitchen", "台所に"),
    ("in the park", "公園に"),
    ("there", "そこに"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateKind {
    Noun,
    Adjective,
    Adverbial,
}

/// One selectable object or complement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: String,
    pub value: String,
    pub gloss: String,
    /// The noun's own tag; `Adjective` for adjectives, unset for adverbials.
    pub number_form: Option<NumberForm>,
    pub kind: CandidateKind,
}

impl Candidate {
    pub fn noun(entry: &LexiconEntry) -> Self {
        Self {
            id: entry.id.clone(),
            value: entry.base.clone(),
            gloss: entry.gloss.clone(),
            number_form: entry.number_form,
            kind: CandidateKind::Noun,
        }
    }

    pub fn adjective(entry: &LexiconEntry) -> Self {
        Self {
            id: entry.id.clone(),
            value: entry.base.clone(),
            gloss: entry.gloss.clone(),
            number_form: Some(NumberForm::Adjective),
            kind: CandidateKind::Adjective,
        }
    }

    pub fn adverbial(text: &str, gloss: &str) -> Self {
        Self {
            id: text.to_string(),
            value: text.to_string(),
            gloss: gloss.to_string(),
            number_form: None,
            kind: CandidateKind::Adverbial,
        }
    }

    pub fn is_something(&self) -> bool {
        self.value == SOMETHING
    }
}

pub fn adverbial_candidates() -> Vec<Candidate> {
    let mut candidates: Vec<_> = SV_ADVERBIALS
        .iter()
        .map(|(text, gloss)| Candidate::adverbial(text, gloss))
        .collect();
    sort_candidates(&mut candidates);
    candidates
}

/// Look up an SV adverbial by its phrase.
pub fn find_adverbial(text: &str) -> Option<Candidate> {
    SV_ADVERBIALS
        .iter()
        .find(|(phrase, _)| *phrase == text)
        .map(|(phrase, gloss)| Candidate::adverbial(phrase, gloss))
}

/// Candidates for the complement slot, sorted by surface form.
///
/// SV ignores the number form and offers the fixed adverbial set. Every
/// other pattern draws from nouns and adjectives through the number-form
/// filter.
pub fn eligible_complements(
    pattern: SentencePattern,
    number_form: NumberForm,
    nouns: &[LexiconEntry],
    adjectives: &[LexiconEntry],
) -> Vec<Candidate> {
    let mut candidates: Vec<Candidate> = match pattern {
        SentencePattern::Sv => return adverbial_candidates(),
        SentencePattern::Svo
        | SentencePattern::Svc
        | SentencePattern::Svoo
        | SentencePattern::Svoc => nouns
            .iter()
            .map(Candidate::noun)
            .chain(adjectives.iter().map(Candidate::adjective))
            .filter(|c| passes_number_filter(number_form, c))
            .collect(),
    };
    sort_candidates(&mut candidates);
    candidates
}

/// Candidates for the object slot: nouns only, same number-form filter.
pub fn eligible_objects(number_form: NumberForm, nouns: &[LexiconEntry]) -> Vec<Candidate> {
    let mut candidates: Vec<Candidate> = nouns
        .iter()
        .map(Candidate::noun)
        .filter(|c| passes_number_filter(number_form, c))
        .collect();
    sort_candidates(&mut candidates);
    candidates
}

/// Whether `candidate` belongs in `eligible_complements(pattern, number_form, ..)`.
pub fn is_eligible(pattern: SentencePattern, number_form: NumberForm, candidate: &Candidate) -> bool {
    match pattern {
        SentencePattern::Sv => {
            candidate.kind == CandidateKind::Adverbial && find_adverbial(&candidate.value).is_some()
        }
        SentencePattern::Svo
        | SentencePattern::Svc
        | SentencePattern::Svoo
        | SentencePattern::Svoc => {
            candidate.kind != CandidateKind::Adverbial && passes_number_filter(number_form, candidate)
        }
    }
}

pub fn is_eligible_object(number_form: NumberForm, candidate: &Candidate) -> bool {
    candidate.kind == CandidateKind::Noun && passes_number_filter(number_form, candidate)
}

fn passes_number_filter(number_form: NumberForm, candidate: &Candidate) -> bool {
    if number_form.shows_all_except_something() {
        !candidate.is_something()
    } else {
        candidate.number_form == Some(number_form)
    }
}

fn sort_candidates(candidates: &mut [Candidate]) {
    candidates.sort_by_cached_key(|c| c.value.to_lowercase());
}

/// Keep `current` if it is still offered, otherwise fall back to the first
/// eligible candidate (or nothing when none are offered).
pub fn reconcile_choice(current: Option<&str>, eligible: &[Candidate]) -> Option<String> {
    match current {
        Some(id) if eligible.iter().any(|c| c.id == id) => Some(id.to_string()),
        _ => eligible.first().map(|c| c.id.clone()),
    }
}

/// Write out a chosen candidate under `number_form`.
///
/// Singular countable nouns are pluralized when `plural_subject` is set
/// ("We are teachers."). Adjectives, adverbials and "something" never take
/// a determiner.
pub fn render(candidate: &Candidate, number_form: NumberForm, plural_subject: bool) -> Phrase {
    if candidate.kind != CandidateKind::Noun || candidate.is_something() {
        return Phrase::new(&candidate.value, &candidate.gloss);
    }

    let singular_countable = candidate
        .number_form
        .is_some_and(|tag| tag.is_singular_countable());
    let pluralize = plural_subject && singular_countable;
    let noun = if pluralize {
        regular_plural(&candidate.value)
    } else {
        candidate.value.clone()
    };

    if let Some(determiner) = number_form.determiner() {
        let gloss = format!(
            "{}{}",
            number_form.determiner_gloss().unwrap_or_default(),
            candidate.gloss
        );
        return Phrase::new(&format!("{determiner} {noun}"), &gloss);
    }

    match number_form {
        // The entry's own tag decides the article ("an hour").
        NumberForm::A | NumberForm::An if singular_countable && !pluralize => {
            Phrase::new(&format!("{} {noun}", number_form.label()), &candidate.gloss)
        }
        _ => Phrase::new(&noun, &candidate.gloss),
    }
}

/// "a" or "an" by the first letter of `word`.
pub fn indefinite_article(word: &str) -> &'static str {
    match word.chars().next() {
        Some(c) if is_vowel(c) => "an",
        _ => "a",
    }
}

/// "teacher" → "teachers", "butterfly" → "butterflies", "box" → "boxes".
pub fn regular_plural(noun: &str) -> String {
    if ends_with_consonant_y(noun) {
        format!("{}ies", &noun[..noun.len() - 1])
    } else if ["ch", "sh", "s", "x"].iter().any(|s| noun.ends_with(s)) {
        format!("{noun}es")
    } else {
        format!("{noun}s")
    }
}
