//! Interactive security-knowledge quiz.
//!
//! This module provides:
//! - A static question bank with explanations
//! - [`QuizSession`], a linear state machine over answers
//! - [`SessionStore`], explicit per-session progress keyed by session id
//! - [`run_quiz`], which drives a whole quiz from an answer source and
//!   returns the transcript as lines
//!
//! Progress is never held in ambient global state; the store is passed to
//! whoever drives the quiz.

mod questions;

pub use questions::{QuizQuestion, QUESTION_BANK, READ_MORE_URL, RECOMMENDATIONS};

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

/// Result of submitting one answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerOutcome {
    Correct {
        explanation: &'static str,
    },
    Incorrect {
        explanation: &'static str,
        correct_option: &'static str,
    },
    /// The choice did not name an option; the question is asked again.
    OutOfRange {
        option_count: usize,
    },
    AlreadyFinished,
}

impl AnswerOutcome {
    /// Renders the outcome as user-facing lines.
    pub fn lines(&self) -> Vec<String> {
        match self {
            AnswerOutcome::Correct { explanation } => {
                vec!["✅ Correct!".to_string(), (*explanation).to_string()]
            }
            AnswerOutcome::Incorrect {
                explanation,
                correct_option,
            } => vec![
                format!("❌ Wrong! The correct answer was: {correct_option}"),
                (*explanation).to_string(),
            ],
            AnswerOutcome::OutOfRange { option_count } => {
                vec![format!(
                    "Please answer with a number between 1 and {option_count}"
                )]
            }
            AnswerOutcome::AlreadyFinished => vec!["The quiz is already finished.".to_string()],
        }
    }
}

/// Linear progress through the question bank.
///
/// An out-of-range answer never advances the session; a finished session
/// only reports [`AnswerOutcome::AlreadyFinished`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSession {
    current: usize,
    correct_answers: usize,
}

impl QuizSession {
    pub fn new() -> Self {
        QuizSession {
            current: 0,
            correct_answers: 0,
        }
    }

    pub fn current_question(&self) -> Option<&'static QuizQuestion> {
        QUESTION_BANK.get(self.current)
    }

    pub fn is_finished(&self) -> bool {
        self.current >= QUESTION_BANK.len()
    }

    /// Fraction of answered questions that were correct, over the whole bank.
    pub fn score(&self) -> f64 {
        self.correct_answers as f64 / QUESTION_BANK.len() as f64
    }

    /// Submits a zero-based choice for the current question.
    pub fn answer(&mut self, choice: usize) -> AnswerOutcome {
        let question = match self.current_question() {
            Some(question) => question,
            None => return AnswerOutcome::AlreadyFinished,
        };
        if choice >= question.options.len() {
            return AnswerOutcome::OutOfRange {
                option_count: question.options.len(),
            };
        }

        self.current += 1;
        if choice == question.correct {
            self.correct_answers += 1;
            AnswerOutcome::Correct {
                explanation: question.explanation,
            }
        } else {
            AnswerOutcome::Incorrect {
                explanation: question.explanation,
                correct_option: question.options[question.correct],
            }
        }
    }

    /// Renders the current question with numbered options, or `None` once
    /// the session is finished.
    pub fn question_lines(&self) -> Option<Vec<String>> {
        let question = self.current_question()?;
        let mut lines = vec![
            format!("Question {}/{}", self.current + 1, QUESTION_BANK.len()),
            String::new(),
            question.prompt.to_string(),
            String::new(),
        ];
        for (idx, option) in question.options.iter().enumerate() {
            lines.push(format!("  {}) {}", idx + 1, option));
        }
        Some(lines)
    }

    /// Renders the final score, feedback tier and recommendations, or `None`
    /// while questions remain.
    pub fn completion_lines(&self) -> Option<Vec<String>> {
        if !self.is_finished() {
            return None;
        }

        let feedback = if self.score() >= 1.0 {
            "🎉 Excellent result! You know your security basics cold!"
        } else if self.score() >= 0.7 {
            "👍 Good, but there is room to grow:"
        } else {
            "⚠️ Time to brush up:"
        };

        let mut lines = vec![
            "Quiz complete!".to_string(),
            format!(
                "Correct answers: {}/{}",
                self.correct_answers,
                QUESTION_BANK.len()
            ),
            String::new(),
            feedback.to_string(),
        ];
        lines.extend(RECOMMENDATIONS.iter().map(|line| (*line).to_string()));
        lines.push(String::new());
        lines.push(format!("Read more: {READ_MORE_URL}"));
        Some(lines)
    }
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-session quiz progress keyed by an opaque session id.
pub struct SessionStore {
    sessions: Mutex<HashMap<String, QuizSession>>,
}

impl SessionStore {
    pub fn new() -> Self {
        SessionStore {
            sessions: Mutex::new(HashMap::new()),
        }
    }

    // A poisoned lock only means another session panicked mid-update; the
    // map itself is still usable.
    fn sessions(&self) -> MutexGuard<'_, HashMap<String, QuizSession>> {
        match self.sessions.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// Starts (or restarts) the quiz for `session_id` and returns the first
    /// question's lines.
    pub fn begin(&self, session_id: &str) -> Vec<String> {
        let session = QuizSession::new();
        let lines = session.question_lines().unwrap_or_default();
        self.sessions().insert(session_id.to_string(), session);
        lines
    }

    /// Submits an answer for `session_id`; `None` when no session exists.
    pub fn answer(&self, session_id: &str, choice: usize) -> Option<AnswerOutcome> {
        self.sessions()
            .get_mut(session_id)
            .map(|session| session.answer(choice))
    }

    pub fn question_lines(&self, session_id: &str) -> Option<Vec<String>> {
        self.sessions()
            .get(session_id)
            .and_then(QuizSession::question_lines)
    }

    pub fn completion_lines(&self, session_id: &str) -> Option<Vec<String>> {
        self.sessions()
            .get(session_id)
            .and_then(QuizSession::completion_lines)
    }

    /// Drops the session; returns whether one existed.
    pub fn end(&self, session_id: &str) -> bool {
        self.sessions().remove(session_id).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions().is_empty()
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Drives a whole quiz from an answer source, emitting output in batches.
///
/// Answers are read as one-based option numbers, matching how the options
/// are displayed. Unparsable input is treated as out of range, so it
/// re-prompts without advancing. Each batch is emitted before the next
/// answer is pulled, so an interactive caller sees the question before the
/// user types. When the source runs out before the last question, the
/// session is left in the store so it can be resumed.
pub fn run_quiz_with<I, F>(store: &SessionStore, session_id: &str, answers: I, mut emit: F)
where
    I: IntoIterator<Item = String>,
    F: FnMut(&[String]),
{
    emit(&["Starting the quiz!".to_string(), String::new()]);
    emit(&store.begin(session_id));

    for raw in answers {
        let choice = raw
            .trim()
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .unwrap_or(usize::MAX);

        let outcome = match store.answer(session_id, choice) {
            Some(outcome) => outcome,
            None => break,
        };

        let mut batch = vec![String::new()];
        batch.extend(outcome.lines());

        match outcome {
            AnswerOutcome::Correct { .. } | AnswerOutcome::Incorrect { .. } => {
                if let Some(lines) = store.completion_lines(session_id) {
                    batch.push(String::new());
                    batch.extend(lines);
                    emit(&batch);
                    store.end(session_id);
                    return;
                }
                if let Some(lines) = store.question_lines(session_id) {
                    batch.push(String::new());
                    batch.extend(lines);
                }
                emit(&batch);
            }
            AnswerOutcome::OutOfRange { .. } | AnswerOutcome::AlreadyFinished => emit(&batch),
        }
    }
}

/// Runs a whole quiz against an answer source and returns the transcript.
pub fn run_quiz<I>(store: &SessionStore, session_id: &str, answers: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut transcript = Vec::new();
    run_quiz_with(store, session_id, answers, |lines| {
        transcript.extend_from_slice(lines);
    });
    transcript
}
