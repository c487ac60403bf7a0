/// Drills and quest sessions: target sentences, answer checking and the
/// in-memory progression through one quest.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Correct answers needed to clear a quest.
pub const DEFAULT_PASS_MARK: usize = 8;
/// Clearing this level ends the game.
pub const FINAL_LEVEL: u32 = 10;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DrillError {
    #[error("a quest needs at least one drill")]
    EmptyQuest,
    #[error("level {0} is outside 1..=10")]
    InvalidLevel(u32),
}

/// A target sentence the learner has to build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentenceDrill {
    pub id: String,
    pub english: String,
    pub japanese: String,
    pub sort_order: u32,
}

/// Compare a generated sentence with a target, ignoring case, `.,?!` and
/// runs of whitespace.
pub fn check_answer(generated: &str, target: &str) -> bool {
    normalize(generated) == normalize(target)
}

fn normalize(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter(|c| !matches!(c, '.' | ',' | '?' | '!'))
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestStatus {
    Playing,
    /// Passed; the next level is open.
    Result,
    Failed,
    AllCleared,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerResult {
    Correct,
    Wrong,
}

/// One run through a list of drills at a given level.
///
/// Transitions consume the session and return the next one; once the
/// status leaves `Playing` every transition is a no-op.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestSession {
    level: u32,
    drills: Vec<SentenceDrill>,
    results: Vec<Option<AnswerResult>>,
    current_index: usize,
    status: QuestStatus,
    pass_mark: usize,
}

impl QuestSession {
    pub fn start(level: u32, drills: Vec<SentenceDrill>) -> Result<Self, DrillError> {
        Self::start_with_pass_mark(level, drills, DEFAULT_PASS_MARK)
    }

    pub fn start_with_pass_mark(
        level: u32,
        drills: Vec<SentenceDrill>,
        pass_mark: usize,
    ) -> Result<Self, DrillError> {
        if !(1..=FINAL_LEVEL).contains(&level) {
            return Err(DrillError::InvalidLevel(level));
        }
        if drills.is_empty() {
            return Err(DrillError::EmptyQuest);
        }
        Ok(Self {
            level,
            results: vec![None; drills.len()],
            drills,
            current_index: 0,
            status: QuestStatus::Playing,
            pass_mark,
        })
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn drills(&self) -> &[SentenceDrill] {
        &self.drills
    }

    pub fn results(&self) -> &[Option<AnswerResult>] {
        &self.results
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn status(&self) -> QuestStatus {
        self.status
    }

    pub fn current_drill(&self) -> Option<&SentenceDrill> {
        self.drills.get(self.current_index)
    }

    pub fn correct_count(&self) -> usize {
        self.count(AnswerResult::Correct)
    }

    pub fn wrong_count(&self) -> usize {
        self.count(AnswerResult::Wrong)
    }

    pub fn is_last_drill(&self) -> bool {
        self.current_index + 1 == self.drills.len()
    }

    /// Seconds allowed per drill.
    pub fn time_limit(&self) -> u32 {
        match self.level {
            FINAL_LEVEL => 10,
            level if level < 4 => 30,
            level => 30u32.saturating_sub(level * 2).max(5),
        }
    }

    /// Whether `generated` matches the current drill's target sentence.
    pub fn is_correct(&self, generated: &str) -> bool {
        self.current_drill()
            .is_some_and(|drill| check_answer(generated, &drill.english))
    }

    pub fn submit_answer(mut self, correct: bool) -> Self {
        if self.status != QuestStatus::Playing {
            return self;
        }
        if let Some(slot) = self.results.get_mut(self.current_index) {
            *slot = Some(if correct {
                AnswerResult::Correct
            } else {
                AnswerResult::Wrong
            });
        }
        self
    }

    /// Advance to the next drill, or settle the quest after the last one.
    pub fn next_drill(mut self) -> Self {
        if self.status != QuestStatus::Playing {
            return self;
        }
        if !self.is_last_drill() {
            self.current_index += 1;
            return self;
        }
        self.status = if self.correct_count() < self.pass_mark {
            QuestStatus::Failed
        } else if self.level == FINAL_LEVEL {
            QuestStatus::AllCleared
        } else {
            QuestStatus::Result
        };
        log::debug!(
            "quest level {} finished: {}/{} correct, {:?}",
            self.level,
            self.correct_count(),
            self.drills.len(),
            self.status
        );
        self
    }

    fn count(&self, wanted: AnswerResult) -> usize {
        self.results.iter().filter(|r| **r == Some(wanted)).count()
    }
}
