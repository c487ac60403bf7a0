//! WASM bindings for sentence-engine: powers the browser drill game.

use wasm_bindgen::prelude::*;

use sentence_engine::core::complement::{
    adverbial_candidates, eligible_complements, eligible_objects, Candidate,
};
use sentence_engine::core::drill::{self, QuestSession, QuestStatus};
use sentence_engine::core::pipeline::DrillEngine;
use sentence_engine::schema::lexicon::{Lexicon, LexiconEntry};
use sentence_engine::schema::selection::{
    NumberForm, SentencePattern, SentenceType, Selection, Subject, Tense,
};

// ---------------------------------------------------------------------------
// JSON helper types for communication across the WASM boundary
// ---------------------------------------------------------------------------
#[derive(serde::Serialize)]
struct VerbInfo {
    id: String,
    base: String,
    gloss: String,
    pattern: Option<SentencePattern>,
}

#[derive(serde::Serialize)]
struct DrawnDrill {
    selection: Selection,
    english: String,
    japanese: String,
}

#[derive(serde::Serialize)]
struct QuestState {
    level: u32,
    status: QuestStatus,
    current_index: usize,
    total: usize,
    correct: usize,
    wrong: usize,
    time_limit: u32,
    /// Japanese prompt of the drill being played, if any.
    prompt: Option<String>,
}

#[derive(serde::Serialize)]
struct AnswerOutcome {
    correct: bool,
    target: String,
    state: QuestState,
}

fn js_error(context: &str, e: impl std::fmt::Display) -> JsError {
    JsError::new(&format!("{context}: {e}"))
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, JsError> {
    serde_json::to_string(value).map_err(|e| js_error("Serialization error", e))
}

fn parse_selection(selection_json: &str) -> Result<Selection, JsError> {
    serde_json::from_str(selection_json).map_err(|e| js_error("Invalid selection JSON", e))
}

fn quest_state(session: &QuestSession) -> QuestState {
    QuestState {
        level: session.level(),
        status: session.status(),
        current_index: session.current_index(),
        total: session.drills().len(),
        correct: session.correct_count(),
        wrong: session.wrong_count(),
        time_limit: session.time_limit(),
        prompt: match session.status() {
            QuestStatus::Playing => session.current_drill().map(|d| d.japanese.clone()),
            _ => None,
        },
    }
}

fn verb_info(entry: &LexiconEntry) -> VerbInfo {
    VerbInfo {
        id: entry.id.clone(),
        base: entry.base.clone(),
        gloss: entry.gloss.clone(),
        pattern: entry.pattern,
    }
}

// ---------------------------------------------------------------------------
// SentenceDemo: the main exported struct
// ---------------------------------------------------------------------------
#[wasm_bindgen]
pub struct SentenceDemo {
    engine: DrillEngine,
    quest: Option<QuestSession>,
}

#[wasm_bindgen]
impl SentenceDemo {
    /// Create a demo over the built-in lexicon with the given seed.
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u64) -> Result<SentenceDemo, JsError> {
        let lexicon = Lexicon::builtin().map_err(|e| js_error("Lexicon parse error", e))?;
        let engine = DrillEngine::builder()
            .seed(seed)
            .with_lexicon(lexicon)
            .build()
            .map_err(|e| js_error("Engine build error", e))?;
        Ok(SentenceDemo {
            engine,
            quest: None,
        })
    }

    /// Generate the sentence for a selection.
    ///
    /// Expected JSON shape:
    /// ```json
    /// {
    ///   "subject": "third_s",
    ///   "tense": "present",
    ///   "sentence_type": "question",
    ///   "verb_type": "do",
    ///   "verb": "have",
    ///   "pattern": "SVO",
    ///   "object": "dog",
    ///   "number_form": "a"
    /// }
    /// ```
    /// Returns `{"english": ..., "japanese": ...}`.
    pub fn generate(&self, selection_json: &str) -> Result<String, JsError> {
        let selection = parse_selection(selection_json)?;
        let sentence = self
            .engine
            .generate(&selection)
            .map_err(|e| js_error("Generation error", e))?;
        to_json(&sentence)
    }

    /// Re-pick stale object/complement choices. Returns the fixed selection JSON.
    pub fn reconcile(&self, selection_json: &str) -> Result<String, JsError> {
        let selection = parse_selection(selection_json)?;
        to_json(&self.engine.reconcile(&selection))
    }

    /// JSON array of complement candidates for a pattern and number form.
    pub fn complements(&self, pattern: &str, number_form: &str) -> Result<String, JsError> {
        let pattern = SentencePattern::parse(pattern)
            .ok_or_else(|| JsError::new(&format!("Unknown pattern: {pattern}")))?;
        let number_form = NumberForm::parse(number_form)
            .ok_or_else(|| JsError::new(&format!("Unknown number form: {number_form}")))?;
        let lexicon = self.engine.lexicon();
        let candidates: Vec<Candidate> = match pattern {
            SentencePattern::Sv => adverbial_candidates(),
            _ => eligible_complements(pattern, number_form, lexicon.nouns(), lexicon.adjectives()),
        };
        to_json(&candidates)
    }

    /// JSON array of object candidates for a number form.
    pub fn objects(&self, number_form: &str) -> Result<String, JsError> {
        let number_form = NumberForm::parse(number_form)
            .ok_or_else(|| JsError::new(&format!("Unknown number form: {number_form}")))?;
        to_json(&eligible_objects(number_form, self.engine.lexicon().nouns()))
    }

    /// JSON array of verbs with their pattern restriction.
    pub fn verbs(&self) -> Result<String, JsError> {
        let verbs: Vec<VerbInfo> = self.engine.lexicon().verbs().iter().map(verb_info).collect();
        to_json(&verbs)
    }

    /// Draw a random drill. Returns its selection and sentence pair.
    pub fn random_drill(&mut self) -> Result<String, JsError> {
        let (selection, drill) = self
            .engine
            .random_drill()
            .map_err(|e| js_error("Drill error", e))?;
        to_json(&DrawnDrill {
            selection,
            english: drill.english,
            japanese: drill.japanese,
        })
    }

    /// Compare a built sentence with a target, ignoring case and punctuation.
    pub fn check_answer(generated: &str, target: &str) -> bool {
        drill::check_answer(generated, target)
    }

    /// Start a quest at `level` (1-10). Returns the quest state JSON.
    pub fn start_quest(&mut self, level: u32) -> Result<String, JsError> {
        let session = self
            .engine
            .build_quest(level)
            .map_err(|e| js_error("Quest error", e))?;
        let state = quest_state(&session);
        self.quest = Some(session);
        to_json(&state)
    }

    /// Submit the learner's sentence for the current drill and advance.
    pub fn answer(&mut self, generated: &str) -> Result<String, JsError> {
        let session = self
            .quest
            .take()
            .ok_or_else(|| JsError::new("No quest in progress"))?;
        let target = session
            .current_drill()
            .map(|d| d.english.clone())
            .unwrap_or_default();
        let correct = session.is_correct(generated);
        let session = session.submit_answer(correct).next_drill();
        let outcome = AnswerOutcome {
            correct,
            target,
            state: quest_state(&session),
        };
        self.quest = Some(session);
        to_json(&outcome)
    }

    /// Current quest state JSON, or `null` when no quest was started.
    pub fn quest_state(&self) -> Result<String, JsError> {
        to_json(&self.quest.as_ref().map(quest_state))
    }

    /// Return JSON array of subject identifiers.
    pub fn subjects() -> String {
        serde_json::to_string(&Subject::ALL).unwrap_or_else(|_| "[]".to_string())
    }

    /// Return JSON array of tense identifiers.
    pub fn tenses() -> String {
        serde_json::to_string(&Tense::ALL).unwrap_or_else(|_| "[]".to_string())
    }

    /// Return JSON array of sentence type identifiers.
    pub fn sentence_types() -> String {
        serde_json::to_string(&SentenceType::ALL).unwrap_or_else(|_| "[]".to_string())
    }

    /// Return JSON array of sentence patterns.
    pub fn patterns() -> String {
        serde_json::to_string(&SentencePattern::ALL).unwrap_or_else(|_| "[]".to_string())
    }

    /// Return JSON array of number forms.
    pub fn number_forms() -> String {
        serde_json::to_string(&NumberForm::ALL).unwrap_or_else(|_| "[]".to_string())
    }
}
