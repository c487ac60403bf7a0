/// Lexicon: word entries with grammatical metadata, loaded from RON.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use super::selection::{NumberForm, SentencePattern};

/// RON source of the built-in lexicon.
pub const BUILTIN_LEXICON: &str = include_str!("../../lexicon_data/default.ron");

#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON deserialization error: {0}")]
    Ron(#[from] ron::error::SpannedError),
    #[error("duplicate lexicon id: {0}")]
    DuplicateId(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WordClass {
    Noun,
    Verb,
    Adjective,
    Adverb,
}

/// One word and everything the engine needs to inflect and place it.
///
/// Optional forms that are absent fall back to the regular rules at
/// generation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexiconEntry {
    pub id: String,
    pub base: String,
    pub gloss: String,
    pub class: WordClass,
    pub past_form: Option<String>,
    pub third_person_form: Option<String>,
    /// Adverbial a do-verb takes in an SV sentence: "live" → "here".
    pub adverb: Option<String>,
    pub number_form: Option<NumberForm>,
    /// Restricts a verb to a single sentence pattern.
    pub pattern: Option<SentencePattern>,
    pub sort_order: u32,
}

impl LexiconEntry {
    pub fn is_something(&self) -> bool {
        self.base == crate::core::complement::SOMETHING
    }
}

/// An immutable snapshot of every word available to the engine,
/// grouped by word class and kept in display order.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    nouns: Vec<LexiconEntry>,
    verbs: Vec<LexiconEntry>,
    adjectives: Vec<LexiconEntry>,
    adverbs: Vec<LexiconEntry>,
    index: FxHashMap<String, (WordClass, usize)>,
}

// RON files group entries by class, so the class is implied by the
// section and omitted from each entry.
#[derive(Debug, Deserialize)]
struct RonEntry {
    id: String,
    base: String,
    gloss: String,
    #[serde(default)]
    past_form: Option<String>,
    #[serde(default)]
    third_person_form: Option<String>,
    #[serde(default)]
    adverb: Option<String>,
    #[serde(default)]
    number_form: Option<NumberForm>,
    #[serde(default)]
    pattern: Option<SentencePattern>,
    #[serde(default)]
    sort_order: u32,
}

impl RonEntry {
    fn into_entry(self, class: WordClass) -> LexiconEntry {
        LexiconEntry {
            id: self.id,
            base: self.base,
            gloss: self.gloss,
            class,
            past_form: self.past_form,
            third_person_form: self.third_person_form,
            adverb: self.adverb,
            number_form: self.number_form,
            pattern: self.pattern,
            sort_order: self.sort_order,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename = "Lexicon")]
struct RonLexicon {
    #[serde(default)]
    nouns: Vec<RonEntry>,
    #[serde(default)]
    verbs: Vec<RonEntry>,
    #[serde(default)]
    adjectives: Vec<RonEntry>,
    #[serde(default)]
    adverbs: Vec<RonEntry>,
}

impl Lexicon {
    /// Load a lexicon from a RON file.
    pub fn load_from_ron(path: &Path) -> Result<Lexicon, LexiconError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse_ron(&contents)
    }

    /// Parse a lexicon from a RON string.
    pub fn parse_ron(input: &str) -> Result<Lexicon, LexiconError> {
        let raw: RonLexicon = ron::from_str(input)?;
        let entries = raw
            .nouns
            .into_iter()
            .map(|e| e.into_entry(WordClass::Noun))
            .chain(raw.verbs.into_iter().map(|e| e.into_entry(WordClass::Verb)))
            .chain(
                raw.adjectives
                    .into_iter()
                    .map(|e| e.into_entry(WordClass::Adjective)),
            )
            .chain(raw.adverbs.into_iter().map(|e| e.into_entry(WordClass::Adverb)));
        Self::from_entries(entries)
    }

    /// The word list shipped with the crate.
    pub fn builtin() -> Result<Lexicon, LexiconError> {
        Self::parse_ron(BUILTIN_LEXICON)
    }

    /// Build a lexicon from loose entries. Ids must be unique across classes.
    pub fn from_entries<I>(entries: I) -> Result<Lexicon, LexiconError>
    where
        I: IntoIterator<Item = LexiconEntry>,
    {
        let mut lexicon = Lexicon::default();
        for entry in entries {
            if lexicon.index.contains_key(&entry.id) {
                return Err(LexiconError::DuplicateId(entry.id));
            }
            if entry.class == WordClass::Noun && entry.number_form.is_none() {
                log::warn!("noun '{}' has no number form and will only match determiner filters", entry.id);
            }
            lexicon.insert(entry);
        }
        lexicon.sort();
        Ok(lexicon)
    }

    /// Merge another lexicon into this one. Entries from `other` replace
    /// entries in `self` with the same id.
    pub fn merge(&mut self, other: Lexicon) {
        for entry in other.into_entries() {
            if let Some((class, pos)) = self.index.get(&entry.id).copied() {
                self.group_mut(class).remove(pos);
                self.reindex();
            }
            self.insert(entry);
        }
        self.sort();
    }

    pub fn get(&self, id: &str) -> Option<&LexiconEntry> {
        let (class, pos) = self.index.get(id)?;
        self.group(*class).get(*pos)
    }

    /// Look up an id, requiring it to belong to `class`.
    pub fn find(&self, class: WordClass, id: &str) -> Option<&LexiconEntry> {
        self.get(id).filter(|entry| entry.class == class)
    }

    pub fn nouns(&self) -> &[LexiconEntry] {
        &self.nouns
    }

    pub fn verbs(&self) -> &[LexiconEntry] {
        &self.verbs
    }

    pub fn adjectives(&self) -> &[LexiconEntry] {
        &self.adjectives
    }

    pub fn adverbs(&self) -> &[LexiconEntry] {
        &self.adverbs
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LexiconEntry> {
        self.nouns
            .iter()
            .chain(&self.verbs)
            .chain(&self.adjectives)
            .chain(&self.adverbs)
    }

    fn into_entries(self) -> impl Iterator<Item = LexiconEntry> {
        self.nouns
            .into_iter()
            .chain(self.verbs)
            .chain(self.adjectives)
            .chain(self.adverbs)
    }

    fn group(&self, class: WordClass) -> &Vec<LexiconEntry> {
        match class {
            WordClass::Noun => &self.nouns,
            WordClass::Verb => &self.verbs,
            WordClass::Adjective => &self.adjectives,
            WordClass::Adverb => &self.adverbs,
        }
    }

    fn group_mut(&mut self, class: WordClass) -> &mut Vec<LexiconEntry> {
        match class {
            WordClass::Noun => &mut self.nouns,
            WordClass::Verb => &mut self.verbs,
            WordClass::Adjective => &mut self.adjectives,
            WordClass::Adverb => &mut self.adverbs,
        }
    }

    fn insert(&mut self, entry: LexiconEntry) {
        let class = entry.class;
        let group = self.group_mut(class);
        group.push(entry);
        let pos = group.len() - 1;
        let id = group[pos].id.clone();
        self.index.insert(id, (class, pos));
    }

    fn sort(&mut self) {
        for group in [
            &mut self.nouns,
            &mut self.verbs,
            &mut self.adjectives,
            &mut self.adverbs,
        ] {
            group.sort_by_key(|entry| entry.sort_order);
        }
        self.reindex();
    }

    fn reindex(&mut self) {
        let Self {
            nouns,
            verbs,
            adjectives,
            adverbs,
            index,
        } = self;
        index.clear();
        for (class, group) in [
            (WordClass::Noun, &*nouns),
            (WordClass::Verb, &*verbs),
            (WordClass::Adjective, &*adjectives),
            (WordClass::Adverb, &*adverbs),
        ] {
            for (pos, entry) in group.iter().enumerate() {
                index.insert(entry.id.clone(), (class, pos));
            }
        }
    }
}
