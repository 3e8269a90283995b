//! Quiz-taking view model: walks a fixed question list, records one answer
//! per question and summarises the outcome.

pub mod sample;

pub use sample::{sample_questions, SAMPLE_QUIZ_ID};

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct QuizOption {
    pub id: String,
    pub label: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub id: String,
    pub prompt: String,
    pub options: Vec<QuizOption>,
    pub correct_option_id: String,
}

/// Question id -> chosen option id. Unanswered questions have no entry.
pub type AnswerMap = BTreeMap<String, String>;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionStatus {
    InProgress { index: usize },
    Completed,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct QuizResults {
    pub correct: usize,
    pub wrong: usize,
    pub unanswered: usize,
    pub total: usize,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SessionError {
    #[error("Quiz has no questions")]
    NoQuestions,
    #[error("Quiz is already completed")]
    AlreadyCompleted,
    #[error("Option {option_id} is not offered by question {question_id}")]
    UnknownOption { question_id: String, option_id: String },
}

/// Payload a client hands to a backend: current position, an entry per
/// question (`None` when unanswered), and results once completed.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub quiz_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_question_id: Option<String>,
    pub answers: BTreeMap<String, Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<QuizResults>,
}

pub fn compute_results(questions: &[QuizQuestion], answers: &AnswerMap) -> QuizResults {
    let mut results = QuizResults {
        total: questions.len(),
        ..QuizResults::default()
    };

    for question in questions {
        match answers.get(&question.id) {
            None => results.unanswered += 1,
            Some(selected) if *selected == question.correct_option_id => results.correct += 1,
            Some(_) => results.wrong += 1,
        }
    }

    results
}

#[derive(Debug, Clone)]
pub struct QuizSession {
    quiz_id: String,
    questions: Vec<QuizQuestion>,
    answers: AnswerMap,
    status: SessionStatus,
}

impl QuizSession {
    pub fn new(quiz_id: impl Into<String>, questions: Vec<QuizQuestion>) -> Result<Self, SessionError> {
        if questions.is_empty() {
            return Err(SessionError::NoQuestions);
        }

        Ok(Self {
            quiz_id: quiz_id.into(),
            questions,
            answers: AnswerMap::new(),
            status: SessionStatus::InProgress { index: 0 },
        })
    }

    /// Session over the built-in practice questions.
    pub fn sample() -> Self {
        Self {
            quiz_id: SAMPLE_QUIZ_ID.to_string(),
            questions: sample_questions(),
            answers: AnswerMap::new(),
            status: SessionStatus::InProgress { index: 0 },
        }
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn is_completed(&self) -> bool {
        self.status == SessionStatus::Completed
    }

    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    pub fn answers(&self) -> &AnswerMap {
        &self.answers
    }

    pub fn current(&self) -> Option<&QuizQuestion> {
        match self.status {
            SessionStatus::InProgress { index } => self.questions.get(index),
            SessionStatus::Completed => None,
        }
    }

    /// Option chosen for the current question, if any.
    pub fn selected(&self) -> Option<&str> {
        let current = self.current()?;
        self.answers.get(&current.id).map(String::as_str)
    }

    /// One-based position and question count, e.g. `(2, 5)` for "Question 2 of 5".
    pub fn progress(&self) -> Option<(usize, usize)> {
        match self.status {
            SessionStatus::InProgress { index } => Some((index + 1, self.questions.len())),
            SessionStatus::Completed => None,
        }
    }

    pub fn is_last_question(&self) -> bool {
        matches!(self.status, SessionStatus::InProgress { index } if index + 1 == self.questions.len())
    }

    /// Records the choice for the current question, replacing any earlier
    /// choice. Does not move to the next question.
    pub fn select_option(&mut self, option_id: &str) -> Result<(), SessionError> {
        let current = self.current().ok_or(SessionError::AlreadyCompleted)?;

        if !current.options.iter().any(|option| option.id == option_id) {
            return Err(SessionError::UnknownOption {
                question_id: current.id.clone(),
                option_id: option_id.to_string(),
            });
        }

        let question_id = current.id.clone();
        self.answers.insert(question_id, option_id.to_string());
        Ok(())
    }

    /// Moves forward one question, finishing the quiz from the last one.
    pub fn next(&mut self) {
        if let SessionStatus::InProgress { index } = self.status {
            self.status = if index + 1 < self.questions.len() {
                SessionStatus::InProgress { index: index + 1 }
            } else {
                SessionStatus::Completed
            };
        }
    }

    pub fn back(&mut self) {
        if let SessionStatus::InProgress { index } = self.status {
            self.status = SessionStatus::InProgress {
                index: index.saturating_sub(1),
            };
        }
    }

    pub fn reset(&mut self) {
        self.answers.clear();
        self.status = SessionStatus::InProgress { index: 0 };
    }

    pub fn results(&self) -> QuizResults {
        compute_results(&self.questions, &self.answers)
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            quiz_id: self.quiz_id.clone(),
            current_question_id: self.current().map(|question| question.id.clone()),
            answers: self
                .questions
                .iter()
                .map(|question| (question.id.clone(), self.answers.get(&question.id).cloned()))
                .collect(),
            results: self.is_completed().then(|| self.results()),
        }
    }
}
