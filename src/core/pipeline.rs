/// The drill pipeline: a lexicon snapshot, the generation engine and a
/// seeded random source for drawing practice sentences.
///
/// `generate` stays pure; only drill drawing advances internal state.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::path::Path;
use thiserror::Error;

use crate::core::assembler::Sentence;
use crate::core::complement::{adverbial_candidates, eligible_complements, eligible_objects};
use crate::core::drill::{DrillError, QuestSession, SentenceDrill, DEFAULT_PASS_MARK};
use crate::core::engine::{self, GenerationError};
use crate::schema::lexicon::{Lexicon, LexiconError};
use crate::schema::selection::{
    NumberForm, SentencePattern, SentenceType, Selection, Subject, Tense, VerbType,
};

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("lexicon error: {0}")]
    Lexicon(#[from] LexiconError),
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),
    #[error("drill error: {0}")]
    Drill(#[from] DrillError),
    #[error("no lexicon configured")]
    NoLexicon,
    #[error("lexicon has no {0}")]
    EmptyLexicon(&'static str),
    #[error("drill generation failed after {0} retries")]
    GenerationFailed(u32),
}

/// Number forms a random drill may use for its noun slots.
const DRILL_NUMBER_FORMS: [NumberForm; 7] = [
    NumberForm::None,
    NumberForm::A,
    NumberForm::An,
    NumberForm::Plural,
    NumberForm::The,
    NumberForm::My,
    NumberForm::Their,
];

/// The top-level drill engine. Built via `DrillEngine::builder()`.
pub struct DrillEngine {
    lexicon: Lexicon,
    seed: u64,
    generation_count: u64,
    quest_size: usize,
    pass_mark: usize,
}

/// Builder for constructing a `DrillEngine`.
pub struct DrillEngineBuilder {
    lexicon_paths: Vec<String>,
    seed: u64,
    quest_size: usize,
    pass_mark: usize,
    /// Directly provided lexicon (for testing without files).
    lexicon: Option<Lexicon>,
}

impl DrillEngine {
    pub fn builder() -> DrillEngineBuilder {
        DrillEngineBuilder {
            lexicon_paths: Vec::new(),
            seed: 0,
            quest_size: 10,
            pass_mark: DEFAULT_PASS_MARK,
            lexicon: None,
        }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Generate the sentence for a selection against this engine's lexicon.
    pub fn generate(&self, selection: &Selection) -> Result<Sentence, PipelineError> {
        Ok(engine::generate(selection, &self.lexicon)?)
    }

    pub fn reconcile(&self, selection: &Selection) -> Selection {
        engine::reconcile(selection, &self.lexicon)
    }

    /// Draw a random, fully valid selection from the lexicon.
    pub fn random_selection(&mut self) -> Result<Selection, PipelineError> {
        let max_retries = 8u32;

        for retry in 0..max_retries {
            let mut rng = StdRng::seed_from_u64(
                self.seed
                    .wrapping_add(self.generation_count)
                    .wrapping_add(retry as u64 * 7919),
            );
            if let Some(selection) = self.draw_selection(&mut rng)? {
                self.generation_count += 1;
                return Ok(selection);
            }
        }

        Err(PipelineError::GenerationFailed(max_retries))
    }

    /// Draw a random selection and turn it into a target drill.
    pub fn random_drill(&mut self) -> Result<(Selection, SentenceDrill), PipelineError> {
        let selection = self.random_selection()?;
        let sentence = self.generate(&selection)?;
        let drill = SentenceDrill {
            id: format!("drill-{}-{}", self.seed, self.generation_count),
            english: sentence.english,
            japanese: sentence.japanese,
            sort_order: self.generation_count as u32,
        };
        Ok((selection, drill))
    }

    /// Start a quest at `level` with freshly drawn drills.
    pub fn build_quest(&mut self, level: u32) -> Result<QuestSession, PipelineError> {
        let mut drills = Vec::with_capacity(self.quest_size);
        for _ in 0..self.quest_size {
            let (_, drill) = self.random_drill()?;
            drills.push(drill);
        }
        Ok(QuestSession::start_with_pass_mark(level, drills, self.pass_mark)?)
    }

    // Returns Ok(None) when the draw hit an empty candidate set and should be retried.
    fn draw_selection(&self, rng: &mut StdRng) -> Result<Option<Selection>, PipelineError> {
        let subject = *pick(&Subject::ALL, rng);
        let tense = *pick(&Tense::ALL, rng);
        let sentence_type = *pick(&SentenceType::ALL, rng);
        let number_form = *pick(&DRILL_NUMBER_FORMS, rng);

        let mut selection = if rng.gen_bool(0.5) {
            let pattern = *pick(&[SentencePattern::Sv, SentencePattern::Svc], rng);
            Selection::be_verb(subject, pattern)
        } else {
            let verb = self
                .lexicon
                .verbs()
                .choose(rng)
                .ok_or(PipelineError::EmptyLexicon("verbs"))?;
            let pattern = match verb.pattern {
                Some(pattern) => pattern,
                None => *pick(&SentencePattern::ALL, rng),
            };
            Selection::do_verb(subject, &verb.id, pattern)
        };
        selection.tense = tense;
        selection.sentence_type = sentence_type;
        selection.number_form = number_form;

        let pattern = selection.pattern;
        if pattern.has_object() {
            let objects = eligible_objects(number_form, self.lexicon.nouns());
            match objects.choose(rng) {
                Some(object) => selection.object = Some(object.id.clone()),
                None => return Ok(None),
            }
        }
        let needs_complement = match (pattern, selection.verb_type) {
            (SentencePattern::Sv, VerbType::Be) => true,
            (SentencePattern::Sv, VerbType::Do) => false,
            (p, _) => p.has_complement(),
        };
        if needs_complement {
            let complements = match pattern {
                SentencePattern::Sv => adverbial_candidates(),
                _ => eligible_complements(
                    pattern,
                    number_form,
                    self.lexicon.nouns(),
                    self.lexicon.adjectives(),
                ),
            };
            match complements.choose(rng) {
                Some(complement) => selection.complement = Some(complement.id.clone()),
                None => return Ok(None),
            }
        }
        if pattern == SentencePattern::Svoo {
            let others: Vec<Subject> = Subject::ALL
                .into_iter()
                .filter(|s| s.person() != subject.person())
                .collect();
            selection.recipient = Some(*pick(&others, rng));
        }

        log::debug!("drew {} drill selection {:?}", pattern, selection);
        Ok(Some(selection))
    }
}

// Only called with non-empty constant slices.
fn pick<'a, T>(items: &'a [T], rng: &mut StdRng) -> &'a T {
    &items[rng.gen_range(0..items.len())]
}

impl DrillEngineBuilder {
    /// Add a lexicon RON file. Later files override earlier ids.
    pub fn lexicon_path(mut self, path: &str) -> Self {
        self.lexicon_paths.push(path.to_string());
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Drills drawn per quest.
    pub fn quest_size(mut self, size: usize) -> Self {
        self.quest_size = size;
        self
    }

    /// Correct answers needed to pass a quest.
    pub fn pass_mark(mut self, pass_mark: usize) -> Self {
        self.pass_mark = pass_mark;
        self
    }

    /// Provide a lexicon directly (bypasses file loading).
    pub fn with_lexicon(mut self, lexicon: Lexicon) -> Self {
        self.lexicon = Some(lexicon);
        self
    }

    pub fn build(self) -> Result<DrillEngine, PipelineError> {
        let mut lexicon = match (self.lexicon, self.lexicon_paths.is_empty()) {
            (Some(lexicon), _) => lexicon,
            (None, false) => Lexicon::default(),
            (None, true) => return Err(PipelineError::NoLexicon),
        };
        for path in &self.lexicon_paths {
            lexicon.merge(Lexicon::load_from_ron(Path::new(path))?);
        }
        if lexicon.verbs().is_empty() {
            return Err(PipelineError::EmptyLexicon("verbs"));
        }
        log::debug!(
            "drill engine ready: {} entries, seed {}",
            lexicon.len(),
            self.seed
        );

        Ok(DrillEngine {
            lexicon,
            seed: self.seed,
            generation_count: 0,
            quest_size: self.quest_size,
            pass_mark: self.pass_mark,
        })
    }
}
