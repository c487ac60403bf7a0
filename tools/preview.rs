/// Preview: interactive generation shell for trying selections against a lexicon.
///
/// Usage: preview [--lexicon <path>]... [--seed <n>]
///
/// Commands:
///   subject <first_s|first_p|second|third_s|third_p>
///   tense <past|present|future>
///   type <positive|negative|question>
///   verb <id>                  switch to a do-verb
///   be                         switch to the be-verb
///   pattern <SV|SVO|SVC|SVOO|SVOC>
///   number <form>              e.g. a, an, the, my, plural, none, adjective
///   object <id> / complement <id> / recipient <subject>
///   rotate                     singular/plural partner of the subject
///   options                    list eligible objects and complements
///   random                     draw a random drill
///   quest <level>              play a quest in the shell
///   help                       list commands
///   quit                       exit

use sentence_engine::core::complement::{adverbial_candidates, eligible_complements, eligible_objects};
use sentence_engine::core::drill::QuestStatus;
use sentence_engine::core::pipeline::DrillEngine;
use sentence_engine::schema::lexicon::{Lexicon, WordClass};
use sentence_engine::schema::selection::{
    NumberForm, SentencePattern, SentenceType, Selection, Subject, Tense, VerbType,
};
use std::io::{self, BufRead, Write};

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 && (args[1] == "--help" || args[1] == "-h") {
        print_usage();
        return;
    }

    let mut lexicon_paths = Vec::new();
    let mut seed: u64 = 42;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--lexicon" if i + 1 < args.len() => {
                i += 1;
                lexicon_paths.push(args[i].clone());
            }
            "--seed" if i + 1 < args.len() => {
                i += 1;
                seed = args[i].parse().unwrap_or(42);
            }
            _ => {
                eprintln!("Unknown argument: {}", args[i]);
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let mut builder = DrillEngine::builder().seed(seed);
    if lexicon_paths.is_empty() {
        match Lexicon::builtin() {
            Ok(lexicon) => builder = builder.with_lexicon(lexicon),
            Err(e) => {
                eprintln!("ERROR: built-in lexicon failed to load: {}", e);
                std::process::exit(1);
            }
        }
    }
    for path in &lexicon_paths {
        builder = builder.lexicon_path(path);
    }
    let mut engine = match builder.build() {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("ERROR: {}", e);
            std::process::exit(1);
        }
    };

    println!("Loaded {} lexicon entries", engine.lexicon().len());
    println!("Seed: {}", seed);
    println!("Type 'help' for commands.\n");

    let mut selection = engine.reconcile(&Selection::do_verb(
        Subject::FirstSingular,
        "do",
        SentencePattern::Sv,
    ));
    show(&engine, &selection);

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("preview> ");
        stdout.flush().ok();

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).is_err() || line.is_empty() {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        let cmd = parts[0].to_lowercase();
        let arg = parts[1..].join(" ");

        let next = match cmd.as_str() {
            "quit" | "exit" | "q" => {
                println!("Goodbye.");
                break;
            }
            "help" | "h" | "?" => {
                print_help();
                continue;
            }
            "options" => {
                print_options(&engine, &selection);
                continue;
            }
            "random" => {
                match engine.random_drill() {
                    Ok((drawn, drill)) => {
                        println!("  [{}] {}", drill.id, drill.english);
                        println!("  {}", drill.japanese);
                        selection = drawn;
                    }
                    Err(e) => println!("  Error: {}", e),
                }
                continue;
            }
            "quest" => {
                let level = arg.parse().unwrap_or(1);
                run_quest(&mut engine, level);
                continue;
            }
            "show" => Some(selection.clone()),
            "rotate" => Some(selection.rotate_subject()),
            "be" => Some(Selection {
                verb_type: VerbType::Be,
                verb: None,
                pattern: if selection.pattern.allows(VerbType::Be) {
                    selection.pattern
                } else {
                    SentencePattern::Svc
                },
                ..selection.clone()
            }),
            "subject" => parse_subject(&arg).map(|s| selection.with_subject(s)),
            "tense" => parse_tense(&arg).map(|t| selection.with_tense(t)),
            "type" => parse_sentence_type(&arg).map(|t| selection.with_sentence_type(t)),
            "pattern" => SentencePattern::parse(&arg).map(|p| selection.with_pattern(p)),
            "number" => NumberForm::parse(&arg).map(|nf| selection.with_number_form(nf)),
            "recipient" => parse_subject(&arg).map(|s| selection.with_recipient(s)),
            "object" => Some(selection.with_object(&arg)),
            "complement" => Some(selection.with_complement(&arg)),
            "verb" => engine
                .lexicon()
                .find(WordClass::Verb, &arg)
                .map(|verb| Selection {
                    verb_type: VerbType::Do,
                    verb: Some(verb.id.clone()),
                    pattern: verb.pattern.unwrap_or(selection.pattern),
                    ..selection.clone()
                }),
            _ => {
                println!("Unknown command: {}. Type 'help' for commands.", cmd);
                continue;
            }
        };

        match next {
            Some(next) => {
                // Explicit word choices are shown as-is so ineligible picks surface.
                selection = match cmd.as_str() {
                    "object" | "complement" => next,
                    _ => engine.reconcile(&next),
                };
                show(&engine, &selection);
            }
            None => println!("  Invalid value: '{}'", arg),
        }
    }
}

fn show(engine: &DrillEngine, selection: &Selection) {
    let verb = match selection.verb_type {
        VerbType::Be => "be".to_string(),
        VerbType::Do => selection.verb.clone().unwrap_or_default(),
    };
    println!(
        "  [{:?} | {:?} | {:?} | {} | {} | {}]",
        selection.subject, selection.tense, selection.sentence_type, verb, selection.pattern, selection.number_form
    );
    match engine.generate(selection) {
        Ok(sentence) => {
            println!("  {}", sentence.english);
            println!("  {}", sentence.japanese);
        }
        Err(e) => println!("  (no sentence: {})", e),
    }
}

fn print_options(engine: &DrillEngine, selection: &Selection) {
    let lexicon = engine.lexicon();
    if selection.pattern.has_object() {
        let objects = eligible_objects(selection.number_form, lexicon.nouns());
        let ids: Vec<&str> = objects.iter().map(|c| c.id.as_str()).collect();
        println!("  objects: {}", ids.join(", "));
    }
    let complements = match selection.pattern {
        SentencePattern::Sv => adverbial_candidates(),
        pattern if pattern.has_complement() => eligible_complements(
            pattern,
            selection.number_form,
            lexicon.nouns(),
            lexicon.adjectives(),
        ),
        _ => Vec::new(),
    };
    if !complements.is_empty() {
        let ids: Vec<&str> = complements.iter().map(|c| c.id.as_str()).collect();
        println!("  complements: {}", ids.join(", "));
    }
}

fn run_quest(engine: &mut DrillEngine, level: u32) {
    let mut session = match engine.build_quest(level) {
        Ok(session) => session,
        Err(e) => {
            println!("  Error: {}", e);
            return;
        }
    };
    println!(
        "  Level {} quest: {} drills, {}s each",
        level,
        session.drills().len(),
        session.time_limit()
    );

    let stdin = io::stdin();
    while session.status() == QuestStatus::Playing {
        let Some(drill) = session.current_drill() else {
            break;
        };
        println!("  {}", drill.japanese);
        print!("  answer> ");
        io::stdout().flush().ok();

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).is_err() || line.is_empty() {
            return;
        }
        let correct = session.is_correct(line.trim());
        if correct {
            println!("  Correct!");
        } else {
            println!("  Wrong: {}", drill.english);
        }
        session = session.submit_answer(correct).next_drill();
    }

    println!(
        "  {:?}: {}/{} correct",
        session.status(),
        session.correct_count(),
        session.drills().len()
    );
}

fn print_usage() {
    println!("Usage: preview [--lexicon <path>]... [--seed <n>]");
    println!("  Without --lexicon the built-in word list is used.");
}

fn print_help() {
    println!("Commands:");
    println!("  subject <first_s|first_p|second|third_s|third_p>");
    println!("  tense <past|present|future>");
    println!("  type <positive|negative|question>");
    println!("  verb <id>            switch to a do-verb");
    println!("  be                   switch to the be-verb");
    println!("  pattern <SV|SVO|SVC|SVOO|SVOC>");
    println!("  number <form>        none, a, an, plural, the, my, our, your, his, her, their, no_article, adjective");
    println!("  object <id>          choose the object");
    println!("  complement <id>      choose the complement or SV adverbial");
    println!("  recipient <subject>  choose the SVOO recipient");
    println!("  rotate               toggle singular/plural subject");
    println!("  options              list eligible objects and complements");
    println!("  show                 regenerate the current sentence");
    println!("  random               draw a random drill");
    println!("  quest <level>        play a quest (1-10)");
    println!("  help                 this list");
    println!("  quit                 exit");
}

fn parse_subject(s: &str) -> Option<Subject> {
    match s {
        "first_s" | "i" => Some(Subject::FirstSingular),
        "first_p" | "we" => Some(Subject::FirstPlural),
        "second" | "you" => Some(Subject::Second),
        "third_s" | "she" => Some(Subject::ThirdSingular),
        "third_p" | "they" => Some(Subject::ThirdPlural),
        _ => None,
    }
}

fn parse_tense(s: &str) -> Option<Tense> {
    match s {
        "past" => Some(Tense::Past),
        "present" => Some(Tense::Present),
        "future" => Some(Tense::Future),
        _ => None,
    }
}

fn parse_sentence_type(s: &str) -> Option<SentenceType> {
    match s {
        "positive" => Some(SentenceType::Positive),
        "negative" => Some(SentenceType::Negative),
        "question" => Some(SentenceType::Question),
        _ => None,
    }
}
