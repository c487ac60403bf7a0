/// Lexicon Linter: validates lexicon coverage and tagging.
///
/// Usage: lexicon_linter <lexicon_path_or_dir>

use sentence_engine::core::complement::{eligible_complements, eligible_objects, indefinite_article};
use sentence_engine::core::engine::{generate, reconcile};
use sentence_engine::schema::lexicon::Lexicon;
use sentence_engine::schema::selection::{NumberForm, SentencePattern, Selection, Subject};
use std::path::Path;
use std::process;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        println!("Usage: lexicon_linter <lexicon_path_or_dir>");
        process::exit(0);
    }

    let lexicon_path = Path::new(&args[1]);
    let mut lexicon = Lexicon::default();

    if lexicon_path.is_file() {
        match Lexicon::load_from_ron(lexicon_path) {
            Ok(lex) => lexicon.merge(lex),
            Err(e) => {
                eprintln!("ERROR: Failed to load lexicon file: {}", e);
                process::exit(1);
            }
        }
    } else if lexicon_path.is_dir() {
        load_lexicons_recursive(lexicon_path, &mut lexicon);
    } else {
        eprintln!("ERROR: Path '{}' does not exist", args[1]);
        process::exit(1);
    }

    println!(
        "Loaded {} entries ({} verbs, {} nouns, {} adjectives, {} adverbs)",
        lexicon.len(),
        lexicon.verbs().len(),
        lexicon.nouns().len(),
        lexicon.adjectives().len(),
        lexicon.adverbs().len()
    );

    let (errors, warnings) = lint_lexicon(&lexicon);

    println!("\n=== Lexicon Lint Report ===\n");

    if errors.is_empty() && warnings.is_empty() {
        println!("All checks passed!");
    }

    for warning in &warnings {
        println!("WARNING: {}", warning);
    }

    for error in &errors {
        println!("ERROR: {}", error);
    }

    println!(
        "\nSummary: {} errors, {} warnings",
        errors.len(),
        warnings.len()
    );

    if errors.is_empty() {
        process::exit(0);
    } else {
        process::exit(1);
    }
}

fn load_lexicons_recursive(dir: &Path, lexicon: &mut Lexicon) {
    if let Ok(entries) = std::fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                load_lexicons_recursive(&path, lexicon);
            } else if path.extension().and_then(|s| s.to_str()) == Some("ron") {
                match Lexicon::load_from_ron(&path) {
                    Ok(lex) => {
                        println!("  Loaded: {}", path.display());
                        lexicon.merge(lex);
                    }
                    Err(e) => {
                        eprintln!("  ERROR loading {}: {}", path.display(), e);
                    }
                }
            }
        }
    }
}

fn lint_lexicon(lexicon: &Lexicon) -> (Vec<String>, Vec<String>) {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    if lexicon.verbs().is_empty() {
        errors.push("Lexicon has no verbs".to_string());
    }
    if !lexicon.nouns().iter().any(|n| n.is_something()) {
        warnings.push("No 'something' noun; the none form has no pronoun object".to_string());
    }

    for entry in lexicon.iter() {
        if entry.base.trim().is_empty() {
            errors.push(format!("{:?} '{}' has an empty base form", entry.class, entry.id));
        }
        if entry.gloss.trim().is_empty() {
            warnings.push(format!("{:?} '{}' has no gloss", entry.class, entry.id));
        }
    }

    for noun in lexicon.nouns() {
        let Some(tag) = noun.number_form else {
            errors.push(format!("Noun '{}' has no number_form", noun.id));
            continue;
        };
        match tag {
            NumberForm::A | NumberForm::An => {
                let article = indefinite_article(&noun.base);
                if article != tag.label() {
                    warnings.push(format!(
                        "Noun '{}' is written '{} {}'; check the tag unless the first letter is silent or voiced",
                        noun.id,
                        tag.label(),
                        noun.base
                    ));
                }
            }
            NumberForm::None | NumberForm::Plural => {}
            other => {
                errors.push(format!(
                    "Noun '{}' has number_form '{}', which is not a noun tag",
                    noun.id, other
                ));
            }
        }
    }

    for verb in lexicon.verbs() {
        if let Some(adverb) = &verb.adverb {
            if !lexicon.adverbs().iter().any(|a| &a.base == adverb) {
                warnings.push(format!(
                    "Verb '{}' uses adverb '{}' with no adverb entry (no gloss)",
                    verb.id, adverb
                ));
            }
        }

        // Every verb must produce a sentence in each pattern it allows.
        let patterns: Vec<SentencePattern> = match verb.pattern {
            Some(pattern) => vec![pattern],
            None => SentencePattern::ALL.to_vec(),
        };
        for pattern in patterns {
            let sel = Selection::do_verb(Subject::ThirdSingular, &verb.id, pattern)
                .with_number_form(NumberForm::The);
            if let Err(e) = generate(&reconcile(&sel, lexicon), lexicon) {
                errors.push(format!("Verb '{}' fails in {}: {}", verb.id, pattern, e));
            }
        }
    }

    // Coverage: a number form with no candidates leaves the slot empty.
    for nf in NumberForm::ALL {
        if nf != NumberForm::Adjective && eligible_objects(nf, lexicon.nouns()).is_empty() {
            warnings.push(format!("Number form '{}' offers no objects", nf));
        }
        let complements =
            eligible_complements(SentencePattern::Svc, nf, lexicon.nouns(), lexicon.adjectives());
        if complements.is_empty() {
            warnings.push(format!("Number form '{}' offers no SVC complements", nf));
        }
    }

    (errors, warnings)
}
