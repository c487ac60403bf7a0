/// The sentence generation engine: Selection × Lexicon → Sentence.
///
/// Stateless. Resolves the chosen words, checks that they are eligible for
/// the pattern and number form, conjugates, and assembles.

use std::fmt;
use thiserror::Error;

use crate::core::assembler::{assemble, Phrase, Sentence, Tail};
use crate::core::complement::{
    self, eligible_complements, eligible_objects, find_adverbial, is_eligible,
    is_eligible_object, reconcile_choice, Candidate,
};
use crate::core::conjugator::{conjugate, Verb};
use crate::schema::lexicon::{Lexicon, LexiconEntry, WordClass};
use crate::schema::selection::{NumberForm, SentencePattern, Selection, Subject, VerbType};

/// Japanese gloss of the copula in SV ("be somewhere") sentences.
const COPULA_LOCATIVE_GLOSS: &str = "いる";
/// Japanese gloss of the copula in SVC sentences.
const COPULA_PREDICATIVE_GLOSS: &str = "だ";

/// A selectable argument slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Verb,
    Object,
    Complement,
    Recipient,
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Verb => "verb",
            Self::Object => "object",
            Self::Complement => "complement",
            Self::Recipient => "recipient",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("unresolved {slot} reference: {id}")]
    UnresolvedReference { slot: Slot, id: String },
    #[error("'{id}' is not an eligible {slot} for {pattern} with number form {number_form}")]
    IneligibleComplement {
        slot: Slot,
        id: String,
        pattern: SentencePattern,
        number_form: NumberForm,
    },
    #[error("{pattern} sentences need a {slot}")]
    MissingArgument { slot: Slot, pattern: SentencePattern },
    #[error("be-verbs cannot form {0} sentences")]
    InvalidPattern(SentencePattern),
    #[error("verb '{verb}' only forms {allowed} sentences")]
    PatternRestricted {
        verb: String,
        allowed: SentencePattern,
    },
}

/// Generate the sentence pair for `selection` against a lexicon snapshot.
pub fn generate(selection: &Selection, lexicon: &Lexicon) -> Result<Sentence, GenerationError> {
    let pattern = selection.pattern;
    if !pattern.allows(selection.verb_type) {
        return Err(GenerationError::InvalidPattern(pattern));
    }

    let verb = resolve_verb(selection, lexicon)?;
    let tail = resolve_tail(selection, lexicon, verb)?;

    let conjugation = conjugate(
        verb,
        selection.subject,
        selection.tense,
        selection.sentence_type,
    );
    let verb_gloss = match verb {
        Verb::Lexical(entry) => entry.gloss.as_str(),
        Verb::Copula => match pattern {
            SentencePattern::Sv => COPULA_LOCATIVE_GLOSS,
            _ => COPULA_PREDICATIVE_GLOSS,
        },
    };

    let sentence = assemble(
        selection.subject,
        &conjugation,
        selection.tense,
        selection.sentence_type,
        verb_gloss,
        &tail,
    );
    log::debug!("generated {:?} from {:?}", sentence.english, selection);
    Ok(sentence)
}

/// Re-pick the object and complement after the pattern or number form
/// changed: a choice that is still offered is kept, otherwise the first
/// eligible candidate replaces it.
pub fn reconcile(selection: &Selection, lexicon: &Lexicon) -> Selection {
    let pattern = selection.pattern;
    let mut next = selection.clone();

    if pattern.has_object() {
        let objects = eligible_objects(selection.number_form, lexicon.nouns());
        next.object = reconcile_choice(selection.object.as_deref(), &objects);
    }

    let wants_complement = match (pattern, selection.verb_type) {
        (SentencePattern::Sv, VerbType::Be) => true,
        // A do-verb SV adverbial is optional; keep it only while valid.
        (SentencePattern::Sv, VerbType::Do) => {
            if selection.complement.as_deref().and_then(find_adverbial).is_none() {
                next.complement = None;
            }
            false
        }
        (p, _) => p.has_complement(),
    };
    if wants_complement {
        let complements =
            eligible_complements(pattern, selection.number_form, lexicon.nouns(), lexicon.adjectives());
        next.complement = reconcile_choice(selection.complement.as_deref(), &complements);
    }

    if pattern == SentencePattern::Svoo && next.recipient.is_none() {
        next.recipient = Some(default_recipient(selection.subject));
    }

    if next != *selection {
        log::debug!("reconciled selection for {} / {}", pattern, selection.number_form);
    }
    next
}

/// Someone other than the subject to receive the object of an SVOO sentence.
pub fn default_recipient(subject: Subject) -> Subject {
    match subject {
        Subject::FirstSingular | Subject::FirstPlural => Subject::Second,
        Subject::Second | Subject::ThirdSingular | Subject::ThirdPlural => Subject::FirstSingular,
    }
}

fn resolve_verb<'a>(selection: &Selection, lexicon: &'a Lexicon) -> Result<Verb<'a>, GenerationError> {
    match selection.verb_type {
        VerbType::Be => Ok(Verb::Copula),
        VerbType::Do => {
            let id = selection.verb.as_deref().ok_or(GenerationError::MissingArgument {
                slot: Slot::Verb,
                pattern: selection.pattern,
            })?;
            let entry = lexicon
                .find(WordClass::Verb, id)
                .ok_or_else(|| unresolved(Slot::Verb, id))?;
            match entry.pattern {
                Some(allowed) if allowed != selection.pattern => {
                    Err(GenerationError::PatternRestricted {
                        verb: entry.id.clone(),
                        allowed,
                    })
                }
                _ => Ok(Verb::Lexical(entry)),
            }
        }
    }
}

fn resolve_tail(
    selection: &Selection,
    lexicon: &Lexicon,
    verb: Verb<'_>,
) -> Result<Tail, GenerationError> {
    let pattern = selection.pattern;
    let number_form = selection.number_form;

    let tail = match pattern {
        SentencePattern::Sv => {
            let adverbial = match (selection.complement.as_deref(), verb) {
                (Some(id), _) => {
                    let candidate = find_adverbial(id).ok_or_else(|| match lexicon.get(id) {
                        // A complement left over from another pattern.
                        Some(entry) if matches!(entry.class, WordClass::Noun | WordClass::Adjective) => {
                            ineligible(Slot::Complement, id, selection)
                        }
                        _ => unresolved(Slot::Complement, id),
                    })?;
                    Some(Phrase::new(&candidate.value, &candidate.gloss))
                }
                (None, Verb::Lexical(entry)) => verb_adverb(entry, lexicon),
                (None, Verb::Copula) => {
                    return Err(GenerationError::MissingArgument {
                        slot: Slot::Complement,
                        pattern,
                    })
                }
            };
            Tail::Sv { adverbial }
        }
        SentencePattern::Svo => Tail::Svo {
            object: resolve_object(selection, lexicon)?,
        },
        SentencePattern::Svc => Tail::Svc {
            complement: resolve_complement(selection, lexicon, selection.subject.is_plural())?,
        },
        SentencePattern::Svoo => {
            let recipient = selection.recipient.ok_or(GenerationError::MissingArgument {
                slot: Slot::Recipient,
                pattern,
            })?;
            Tail::Svoo {
                recipient,
                object: resolve_object(selection, lexicon)?,
            }
        }
        SentencePattern::Svoc => {
            let object = resolve_object(selection, lexicon)?;
            let complement = resolve_complement(selection, lexicon, false)?;
            Tail::Svoc { object, complement }
        }
    };
    debug_assert_eq!(tail.pattern(), pattern);
    log::trace!("resolved {} tail with number form {}", pattern, number_form);
    Ok(tail)
}

fn resolve_object(selection: &Selection, lexicon: &Lexicon) -> Result<Phrase, GenerationError> {
    let id = selection.object.as_deref().ok_or(GenerationError::MissingArgument {
        slot: Slot::Object,
        pattern: selection.pattern,
    })?;
    let entry = lexicon
        .find(WordClass::Noun, id)
        .ok_or_else(|| unresolved(Slot::Object, id))?;
    let candidate = Candidate::noun(entry);
    if !is_eligible_object(selection.number_form, &candidate) {
        return Err(ineligible(Slot::Object, id, selection));
    }
    Ok(complement::render(&candidate, selection.number_form, false))
}

fn resolve_complement(
    selection: &Selection,
    lexicon: &Lexicon,
    plural_subject: bool,
) -> Result<Phrase, GenerationError> {
    let id = selection.complement.as_deref().ok_or(GenerationError::MissingArgument {
        slot: Slot::Complement,
        pattern: selection.pattern,
    })?;
    let candidate = match lexicon.get(id) {
        Some(entry) if entry.class == WordClass::Noun => Candidate::noun(entry),
        Some(entry) if entry.class == WordClass::Adjective => Candidate::adjective(entry),
        _ if find_adverbial(id).is_some() => return Err(ineligible(Slot::Complement, id, selection)),
        _ => return Err(unresolved(Slot::Complement, id)),
    };
    if !is_eligible(selection.pattern, selection.number_form, &candidate) {
        return Err(ineligible(Slot::Complement, id, selection));
    }
    Ok(complement::render(&candidate, selection.number_form, plural_subject))
}

// The gloss comes from a matching adverb entry or adverbial phrase, if any.
fn verb_adverb(entry: &LexiconEntry, lexicon: &Lexicon) -> Option<Phrase> {
    let adverb = entry.adverb.as_deref()?;
    let gloss = lexicon
        .adverbs()
        .iter()
        .find(|a| a.base == adverb)
        .map(|a| a.gloss.clone())
        .or_else(|| find_adverbial(adverb).map(|c| c.gloss))
        .unwrap_or_default();
    Some(Phrase::new(adverb, &gloss))
}

fn unresolved(slot: Slot, id: &str) -> GenerationError {
    GenerationError::UnresolvedReference {
        slot,
        id: id.to_string(),
    }
}

fn ineligible(slot: Slot, id: &str, selection: &Selection) -> GenerationError {
    GenerationError::IneligibleComplement {
        slot,
        id: id.to_string(),
        pattern: selection.pattern,
        number_form: selection.number_form,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::selection::{SentenceType, Tense};

    fn lexicon() -> Lexicon {
        Lexicon::parse_ron(
            r#"Lexicon(
                verbs: [
                    (id: "do", base: "do", gloss: "する", past_form: Some("did"), third_person_form: Some("does")),
                    (id: "live", base: "live", gloss: "住む", adverb: Some("here"), pattern: Some(SV)),
                    (id: "have", base: "have", gloss: "持つ", past_form: Some("had"), third_person_form: Some("has"), pattern: Some(SVO)),
                    (id: "give", base: "give", gloss: "あげる", past_form: Some("gave"), pattern: Some(SVOO)),
                    (id: "make", base: "make", gloss: "する", past_form: Some("made")),
                ],
                nouns: [
                    (id: "something", base: "something", gloss: "何か", number_form: Some(none)),
                    (id: "dog", base: "dog", gloss: "犬", number_form: Some(a)),
                    (id: "dogs", base: "dogs", gloss: "犬", number_form: Some(plural)),
                    (id: "teacher", base: "teacher", gloss: "先生", number_form: Some(a)),
                ],
                adjectives: [
                    (id: "happy", base: "happy", gloss: "幸せ"),
                ],
                adverbs: [
                    (id: "here", base: "here", gloss: "ここに"),
                ],
            )"#,
        )
        .unwrap()
    }

    #[test]
    fn i_do() {
        let sel = Selection::do_verb(Subject::FirstSingular, "do", SentencePattern::Sv);
        assert_eq!(generate(&sel, &lexicon()).unwrap().english, "I do.");
    }

    #[test]
    fn subject_toggle_changes_agreement() {
        let lex = lexicon();
        let she = Selection::do_verb(Subject::ThirdSingular, "do", SentencePattern::Sv);
        assert_eq!(generate(&she, &lex).unwrap().english, "She does.");
        let we = she.with_subject(Subject::FirstPlural);
        assert_eq!(generate(&we, &lex).unwrap().english, "We do.");
    }

    #[test]
    fn are_you_happy() {
        let sel = Selection::be_verb(Subject::Second, SentencePattern::Svc)
            .with_sentence_type(SentenceType::Question)
            .with_number_form(NumberForm::Adjective)
            .with_complement("happy");
        assert_eq!(generate(&sel, &lexicon()).unwrap().english, "Are you happy?");
    }

    #[test]
    fn verb_adverb_fills_sv() {
        let sel = Selection::do_verb(Subject::ThirdSingular, "live", SentencePattern::Sv)
            .with_tense(Tense::Past);
        let s = generate(&sel, &lexicon()).unwrap();
        assert_eq!(s.english, "She lived here.");
        assert_eq!(s.japanese, "彼女はここに住む（過去）。");
    }

    #[test]
    fn svo_with_article() {
        let sel = Selection::do_verb(Subject::ThirdSingular, "have", SentencePattern::Svo)
            .with_object("dog")
            .with_sentence_type(SentenceType::Negative);
        let s = generate(&sel, &lexicon()).unwrap();
        assert_eq!(s.english, "She does not have a dog.");
        assert_eq!(s.japanese, "彼女は犬を持つ（否定）。");
    }

    #[test]
    fn svc_pluralizes_for_plural_subject() {
        let sel = Selection::be_verb(Subject::ThirdPlural, SentencePattern::Svc).with_complement("teacher");
        assert_eq!(generate(&sel, &lexicon()).unwrap().english, "They are teachers.");
    }

    #[test]
    fn svoo_and_svoc() {
        let lex = lexicon();
        let give = Selection::do_verb(Subject::FirstSingular, "give", SentencePattern::Svoo)
            .with_recipient(Subject::ThirdSingular)
            .with_number_form(NumberForm::The)
            .with_object("dog")
            .with_tense(Tense::Future);
        assert_eq!(generate(&give, &lex).unwrap().english, "I will give her the dog.");

        let make = Selection::do_verb(Subject::FirstPlural, "make", SentencePattern::Svoc)
            .with_number_form(NumberForm::The)
            .with_object("dog")
            .with_complement("happy")
            .with_tense(Tense::Past);
        assert_eq!(generate(&make, &lex).unwrap().english, "We made the dog happy.");
    }

    #[test]
    fn unresolved_reference() {
        let sel = Selection::do_verb(Subject::FirstSingular, "fly", SentencePattern::Sv);
        assert_eq!(
            generate(&sel, &lexicon()),
            Err(GenerationError::UnresolvedReference {
                slot: Slot::Verb,
                id: "fly".to_string()
            })
        );
        // A noun id is not a verb.
        let sel = Selection::do_verb(Subject::FirstSingular, "dog", SentencePattern::Sv);
        assert!(matches!(
            generate(&sel, &lexicon()),
            Err(GenerationError::UnresolvedReference { .. })
        ));
    }

    #[test]
    fn ineligible_complement_is_not_substituted() {
        let sel = Selection::be_verb(Subject::FirstSingular, SentencePattern::Svc)
            .with_number_form(NumberForm::The)
            .with_complement("something");
        assert!(matches!(
            generate(&sel, &lexicon()),
            Err(GenerationError::IneligibleComplement { slot: Slot::Complement, .. })
        ));
    }

    #[test]
    fn complement_from_another_pattern_is_ineligible() {
        let lex = lexicon();
        let happy = Selection::be_verb(Subject::Second, SentencePattern::Svc)
            .with_number_form(NumberForm::Adjective)
            .with_complement("happy")
            .with_pattern(SentencePattern::Sv);
        assert_eq!(
            generate(&happy, &lex),
            Err(GenerationError::IneligibleComplement {
                slot: Slot::Complement,
                id: "happy".to_string(),
                pattern: SentencePattern::Sv,
                number_form: NumberForm::Adjective,
            })
        );

        let at_home = Selection::be_verb(Subject::Second, SentencePattern::Sv)
            .with_complement("at home")
            .with_pattern(SentencePattern::Svc);
        assert!(matches!(
            generate(&at_home, &lex),
            Err(GenerationError::IneligibleComplement { slot: Slot::Complement, .. })
        ));

        // Ids the lexicon has never heard of stay unresolved.
        let unknown = Selection::be_verb(Subject::Second, SentencePattern::Sv).with_complement("on mars");
        assert!(matches!(
            generate(&unknown, &lex),
            Err(GenerationError::UnresolvedReference { slot: Slot::Complement, .. })
        ));
    }

    #[test]
    fn be_verb_rejects_object_patterns() {
        let sel = Selection::be_verb(Subject::FirstSingular, SentencePattern::Svo);
        assert_eq!(
            generate(&sel, &lexicon()),
            Err(GenerationError::InvalidPattern(SentencePattern::Svo))
        );
    }

    #[test]
    fn restricted_verb() {
        let sel = Selection::do_verb(Subject::FirstSingular, "live", SentencePattern::Svo).with_object("dog");
        assert!(matches!(
            generate(&sel, &lexicon()),
            Err(GenerationError::PatternRestricted { allowed: SentencePattern::Sv, .. })
        ));
    }

    #[test]
    fn missing_arguments() {
        let lex = lexicon();
        let be_sv = Selection::be_verb(Subject::FirstSingular, SentencePattern::Sv);
        assert!(matches!(
            generate(&be_sv, &lex),
            Err(GenerationError::MissingArgument { slot: Slot::Complement, .. })
        ));
        let svoo = Selection::do_verb(Subject::FirstSingular, "give", SentencePattern::Svoo).with_object("dog");
        assert!(matches!(
            generate(&svoo, &lex),
            Err(GenerationError::MissingArgument { slot: Slot::Recipient, .. })
        ));
    }

    #[test]
    fn reconcile_repairs_selection() {
        let lex = lexicon();
        let sel = Selection::be_verb(Subject::FirstSingular, SentencePattern::Svc)
            .with_number_form(NumberForm::A)
            .with_complement("happy");
        let fixed = reconcile(&sel, &lex);
        assert_eq!(fixed.complement.as_deref(), Some("dog"));
        assert_eq!(generate(&fixed, &lex).unwrap().english, "I am a dog.");

        let sv = fixed.with_pattern(SentencePattern::Sv);
        let fixed_sv = reconcile(&sv, &lex);
        assert_eq!(fixed_sv.complement.as_deref(), Some("at home"));
        assert_eq!(generate(&fixed_sv, &lex).unwrap().english, "I am at home.");

        // Already valid selections are left alone.
        assert_eq!(reconcile(&fixed_sv, &lex), fixed_sv);
    }

    #[test]
    fn reconcile_fills_svoo_recipient() {
        let sel = Selection::do_verb(Subject::FirstSingular, "give", SentencePattern::Svoo);
        let fixed = reconcile(&sel, &lexicon());
        assert_eq!(fixed.recipient, Some(Subject::Second));
        assert_eq!(fixed.object.as_deref(), Some("dog"));
        assert_eq!(generate(&fixed, &lexicon()).unwrap().english, "I give you a dog.");
    }

    #[test]
    fn generation_is_idempotent() {
        let lex = lexicon();
        let sel = Selection::do_verb(Subject::ThirdSingular, "have", SentencePattern::Svo).with_object("dogs")
            .with_number_form(NumberForm::Plural);
        assert_eq!(generate(&sel, &lex), generate(&sel, &lex));
    }
}
