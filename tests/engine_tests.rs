/// Engine integration tests: generation over the built-in lexicon.

use sentence_engine::core::complement::{eligible_complements, is_eligible, SOMETHING};
use sentence_engine::core::conjugator::{conjugate, third_person_form, Verb};
use sentence_engine::core::engine::{generate, reconcile, GenerationError};
use sentence_engine::schema::lexicon::Lexicon;
use sentence_engine::schema::selection::{
    NumberForm, SentencePattern, SentenceType, Selection, Subject, Tense, VerbType,
};

fn builtin() -> Lexicon {
    Lexicon::builtin().unwrap()
}

/// Every (verb, subject, tense, type) combination, with slots filled by
/// reconciliation under "the".
fn do_verb_selections(lexicon: &Lexicon) -> Vec<Selection> {
    let mut out = Vec::new();
    for verb in lexicon.verbs() {
        let pattern = verb.pattern.unwrap_or(SentencePattern::Svo);
        for subject in Subject::ALL {
            for tense in Tense::ALL {
                for sentence_type in SentenceType::ALL {
                    let sel = Selection::do_verb(subject, &verb.id, pattern)
                        .with_number_form(NumberForm::The)
                        .with_tense(tense)
                        .with_sentence_type(sentence_type);
                    out.push(reconcile(&sel, lexicon));
                }
            }
        }
    }
    out
}

fn words(english: &str) -> Vec<String> {
    english
        .trim_end_matches(['.', '?'])
        .split_whitespace()
        .map(|w| w.to_lowercase())
        .collect()
}

#[test]
fn i_do() {
    let sel = Selection::do_verb(Subject::FirstSingular, "do", SentencePattern::Sv);
    let sentence = generate(&sel, &builtin()).unwrap();
    assert_eq!(sentence.english, "I do.");
    assert_eq!(sentence.japanese, "私はする。");
}

#[test]
fn toggling_subject_to_we() {
    let lexicon = builtin();
    let she = Selection::do_verb(Subject::ThirdSingular, "do", SentencePattern::Sv);
    assert_eq!(generate(&she, &lexicon).unwrap().english, "She does.");

    let we = she.with_subject(Subject::FirstPlural);
    assert_eq!(generate(&we, &lexicon).unwrap().english, "We do.");
}

#[test]
fn are_you_happy() {
    let sel = Selection::be_verb(Subject::Second, SentencePattern::Svc)
        .with_sentence_type(SentenceType::Question)
        .with_number_form(NumberForm::Adjective)
        .with_complement("happy");
    let sentence = generate(&sel, &builtin()).unwrap();
    assert_eq!(sentence.english, "Are you happy?");
    assert_eq!(sentence.japanese, "あなたは幸せだ（疑問）？");
}

#[test]
fn the_lists_everything_but_something() {
    let lexicon = builtin();
    let candidates = eligible_complements(
        SentencePattern::Svc,
        NumberForm::The,
        lexicon.nouns(),
        lexicon.adjectives(),
    );

    assert!(candidates.iter().all(|c| c.value != SOMETHING));
    assert_eq!(
        candidates.len(),
        lexicon.nouns().len() - 1 + lexicon.adjectives().len()
    );
    assert!(candidates.iter().any(|c| c.id == "happy"));
    assert!(candidates.iter().any(|c| c.id == "teacher"));
}

#[test]
fn present_agreement_only_for_third_singular() {
    let lexicon = builtin();
    for entry in lexicon.verbs() {
        for subject in Subject::ALL {
            for tense in Tense::ALL {
                let c = conjugate(Verb::Lexical(entry), subject, tense, SentenceType::Positive);
                let agrees = c.verb == third_person_form(entry) && c.verb != entry.base;
                let expected = tense == Tense::Present && subject.is_third_singular();
                assert_eq!(agrees, expected, "{} / {:?} / {:?}", entry.id, subject, tense);
            }
        }
    }
}

#[test]
fn negatives_have_one_auxiliary_and_a_bare_verb() {
    let lexicon = builtin();
    for sel in do_verb_selections(&lexicon)
        .into_iter()
        .filter(|s| s.sentence_type == SentenceType::Negative)
    {
        let english = generate(&sel, &lexicon).unwrap().english;
        let w = words(&english);
        let negations: Vec<usize> = (1..w.len())
            .filter(|&i| w[i] == "not" && ["do", "does", "did", "will"].contains(&w[i - 1].as_str()))
            .collect();
        assert_eq!(negations.len(), 1, "{english}");

        let verb = lexicon.get(sel.verb.as_deref().unwrap()).unwrap();
        assert_eq!(w[negations[0] + 1], verb.base, "{english}");
    }
}

#[test]
fn be_verbs_never_take_do_support() {
    let lexicon = builtin();
    for pattern in [SentencePattern::Sv, SentencePattern::Svc] {
        for nf in NumberForm::ALL {
            for subject in Subject::ALL {
                for tense in Tense::ALL {
                    for sentence_type in SentenceType::ALL {
                        let sel = Selection::be_verb(subject, pattern)
                            .with_number_form(nf)
                            .with_tense(tense)
                            .with_sentence_type(sentence_type);
                        let sel = reconcile(&sel, &lexicon);
                        let english = generate(&sel, &lexicon).unwrap().english;
                        let w = words(&english);
                        assert!(
                            !w.iter().any(|x| x == "do" || x == "does" || x == "did"),
                            "{english}"
                        );
                    }
                }
            }
        }
    }
}

#[test]
fn reconciled_selections_always_generate() {
    let lexicon = builtin();
    for sel in do_verb_selections(&lexicon) {
        assert!(generate(&sel, &lexicon).is_ok(), "{sel:?}");
    }

    // Adjective tags never match a noun, so object patterns get no object.
    let sel = Selection::do_verb(Subject::FirstSingular, "have", SentencePattern::Svo)
        .with_number_form(NumberForm::Adjective);
    let sel = reconcile(&sel, &lexicon);
    assert_eq!(sel.object, None);
    assert!(matches!(
        generate(&sel, &lexicon),
        Err(GenerationError::MissingArgument { .. })
    ));
}

#[test]
fn generation_is_idempotent() {
    let lexicon = builtin();
    for sel in do_verb_selections(&lexicon).iter().step_by(7) {
        assert_eq!(generate(sel, &lexicon), generate(sel, &lexicon));
    }
}

#[test]
fn every_candidate_is_eligible() {
    let lexicon = builtin();
    for pattern in SentencePattern::ALL {
        for nf in NumberForm::ALL {
            for c in eligible_complements(pattern, nf, lexicon.nouns(), lexicon.adjectives()) {
                assert!(is_eligible(pattern, nf, &c), "{pattern} {nf} {}", c.id);
            }
        }
    }
}

#[test]
fn number_form_change_reselects_complement() {
    let lexicon = builtin();
    let sel = Selection::be_verb(Subject::ThirdSingular, SentencePattern::Svc)
        .with_number_form(NumberForm::The)
        .with_complement("teacher");
    assert_eq!(generate(&sel, &lexicon).unwrap().english, "She is the teacher.");

    // "teacher" is tagged "a", so it survives the switch.
    let a = reconcile(&sel.with_number_form(NumberForm::A), &lexicon);
    assert_eq!(a.complement.as_deref(), Some("teacher"));
    assert_eq!(generate(&a, &lexicon).unwrap().english, "She is a teacher.");

    // Without reconciliation the stale choice is reported, not replaced.
    let adj = sel.with_number_form(NumberForm::Adjective);
    assert!(matches!(
        generate(&adj, &lexicon),
        Err(GenerationError::IneligibleComplement { .. })
    ));
    let adj = reconcile(&adj, &lexicon);
    assert_eq!(adj.complement.as_deref(), Some("angry"));
    assert_eq!(generate(&adj, &lexicon).unwrap().english, "She is angry.");
}

#[test]
fn pattern_change_reselects_complement() {
    let lexicon = builtin();

    // SVC -> SV: an adjective is no place to be.
    let svc = Selection::be_verb(Subject::Second, SentencePattern::Svc)
        .with_number_form(NumberForm::Adjective)
        .with_complement("happy");
    assert_eq!(generate(&svc, &lexicon).unwrap().english, "You are happy.");
    let sv = svc.with_pattern(SentencePattern::Sv);
    assert!(matches!(
        generate(&sv, &lexicon),
        Err(GenerationError::IneligibleComplement { id, pattern: SentencePattern::Sv, .. }) if id == "happy"
    ));
    let sv = reconcile(&sv, &lexicon);
    assert_eq!(sv.complement.as_deref(), Some("at home"));
    assert_eq!(generate(&sv, &lexicon).unwrap().english, "You are at home.");

    // SV -> SVC: the adverbial gives way to the first adjective.
    let svc = sv.with_pattern(SentencePattern::Svc);
    assert!(matches!(
        generate(&svc, &lexicon),
        Err(GenerationError::IneligibleComplement { id, pattern: SentencePattern::Svc, .. }) if id == "at home"
    ));
    let svc = reconcile(&svc, &lexicon);
    assert_eq!(svc.complement.as_deref(), Some("angry"));
    assert_eq!(generate(&svc, &lexicon).unwrap().english, "You are angry.");

    // A do-verb's SV adverbial is optional, so the stale choice is dropped.
    let talk = Selection::do_verb(Subject::Second, "talk", SentencePattern::Sv).with_complement("happy");
    assert!(matches!(
        generate(&talk, &lexicon),
        Err(GenerationError::IneligibleComplement { .. })
    ));
    let talk = reconcile(&talk, &lexicon);
    assert_eq!(talk.complement, None);
    assert_eq!(generate(&talk, &lexicon).unwrap().english, "You talk.");
}

#[test]
fn irregular_and_regular_morphology() {
    let lexicon = builtin();
    let past = |verb: &str, subject: Subject| {
        let pattern = lexicon.get(verb).and_then(|v| v.pattern).unwrap_or(SentencePattern::Svo);
        let sel = Selection::do_verb(subject, verb, pattern)
            .with_number_form(NumberForm::My)
            .with_tense(Tense::Past);
        generate(&reconcile(&sel, &lexicon), &lexicon).unwrap().english
    };
    assert_eq!(past("go", Subject::FirstSingular), "I went home.");
    assert_eq!(past("live", Subject::ThirdPlural), "They lived here.");
    assert_eq!(past("talk", Subject::Second), "You talked.");

    let she_studies = Selection::do_verb(Subject::ThirdSingular, "study", SentencePattern::Svo)
        .with_number_form(NumberForm::None)
        .with_object("english");
    assert_eq!(
        generate(&she_studies, &lexicon).unwrap().english,
        "She studies English."
    );
}

#[test]
fn full_pattern_sentences() {
    let lexicon = builtin();

    let svo = Selection::do_verb(Subject::ThirdSingular, "have", SentencePattern::Svo)
        .with_number_form(NumberForm::An)
        .with_object("umbrella")
        .with_sentence_type(SentenceType::Question);
    let s = generate(&svo, &lexicon).unwrap();
    assert_eq!(s.english, "Does she have an umbrella?");
    assert_eq!(s.japanese, "彼女は傘を持っている（疑問）？");

    let svc = Selection::be_verb(Subject::FirstPlural, SentencePattern::Svc)
        .with_complement("nurse")
        .with_tense(Tense::Future);
    assert_eq!(generate(&svc, &lexicon).unwrap().english, "We will be nurses.");

    let svoo = Selection::do_verb(Subject::FirstSingular, "send", SentencePattern::Svoo)
        .with_recipient(Subject::ThirdPlural)
        .with_number_form(NumberForm::Plural)
        .with_object("letters")
        .with_tense(Tense::Past);
    let s = generate(&svoo, &lexicon).unwrap();
    assert_eq!(s.english, "I sent them letters.");
    assert_eq!(s.japanese, "私は彼らに手紙を送る（過去）。");

    let svoc = Selection::do_verb(Subject::Second, "keep", SentencePattern::Svoc)
        .with_number_form(NumberForm::Your)
        .with_object("car")
        .with_complement("clean")
        .with_sentence_type(SentenceType::Negative);
    assert_eq!(
        generate(&svoc, &lexicon).unwrap().english,
        "You do not keep your car clean."
    );

    let be_sv = Selection::be_verb(Subject::ThirdSingular, SentencePattern::Sv)
        .with_complement("in the park")
        .with_tense(Tense::Past);
    let s = generate(&be_sv, &lexicon).unwrap();
    assert_eq!(s.english, "She was in the park.");
    assert_eq!(s.japanese, "彼女は公園にいる（過去）。");
}

#[test]
fn rotate_subject_round_trips() {
    let sel = Selection::be_verb(Subject::FirstSingular, SentencePattern::Svc);
    assert_eq!(sel.rotate_subject().subject, Subject::FirstPlural);
    assert_eq!(sel.rotate_subject().rotate_subject(), sel);
    assert_eq!(sel.verb_type, VerbType::Be);
}
