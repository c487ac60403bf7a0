/// Drill Session example: builds sentences by toggling one axis at a time,
/// then plays a level-3 quest with a scripted learner.
///
/// Run with: cargo run --example drill_session

use sentence_engine::core::complement::eligible_complements;
use sentence_engine::core::drill::QuestStatus;
use sentence_engine::core::pipeline::DrillEngine;
use sentence_engine::schema::selection::{
    NumberForm, SentencePattern, SentenceType, Selection, Subject, Tense,
};

fn main() {
    let mut engine = DrillEngine::builder()
        .seed(2026)
        .lexicon_path("lexicon_data/default.ron")
        .build()
        .expect("Failed to build drill engine");

    // --- Walk through the axes ---
    println!("=== Building a sentence ===\n");

    let steps: Vec<(&str, Selection)> = {
        let start = Selection::do_verb(Subject::FirstSingular, "do", SentencePattern::Sv);
        let she = start.with_subject(Subject::ThirdSingular);
        let past = she.with_tense(Tense::Past);
        let negative = past.with_sentence_type(SentenceType::Negative);
        let have = Selection::do_verb(Subject::ThirdSingular, "have", SentencePattern::Svo)
            .with_number_form(NumberForm::An)
            .with_sentence_type(SentenceType::Question);
        let their = have.with_number_form(NumberForm::Their);
        let be = Selection::be_verb(Subject::FirstPlural, SentencePattern::Svc)
            .with_tense(Tense::Future);
        let happy = be.with_number_form(NumberForm::Adjective);
        vec![
            ("start", start),
            ("subject → she", she),
            ("tense → past", past),
            ("type → negative", negative),
            ("verb → have (SVO, an)", have),
            ("number form → their", their),
            ("be-verb, SVC, future", be),
            ("number form → adjective", happy),
        ]
    };

    for (label, selection) in &steps {
        let selection = engine.reconcile(selection);
        match engine.generate(&selection) {
            Ok(sentence) => {
                println!("[{}]", label);
                println!("  {}", sentence.english);
                println!("  {}\n", sentence.japanese);
            }
            Err(e) => println!("[{}] no sentence: {}\n", label, e),
        }
    }

    // --- What "the" offers ---
    let the = eligible_complements(
        SentencePattern::Svc,
        NumberForm::The,
        engine.lexicon().nouns(),
        engine.lexicon().adjectives(),
    );
    println!("SVC + the offers {} complements (\"something\" excluded)\n", the.len());

    // --- Play a quest ---
    println!("=== Level 3 quest ===\n");

    let mut session = engine.build_quest(3).expect("Failed to build quest");
    println!("{} drills, {}s each\n", session.drills().len(), session.time_limit());

    let mut turn = 0;
    while session.status() == QuestStatus::Playing {
        let drill = session.current_drill().expect("playing session has a drill");
        // The scripted learner fumbles every fourth answer.
        let answer = if turn % 4 == 3 {
            "I do not know.".to_string()
        } else {
            drill.english.to_lowercase()
        };
        let correct = session.is_correct(&answer);
        println!(
            "{} {}\n    → {}",
            if correct { "✓" } else { "✗" },
            drill.japanese,
            drill.english
        );
        session = session.submit_answer(correct).next_drill();
        turn += 1;
    }

    println!(
        "\nResult: {:?} ({}/{} correct)",
        session.status(),
        session.correct_count(),
        session.drills().len()
    );
}
