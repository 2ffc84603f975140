//! Feedback captured against a specific answer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One chunk of feedback concerning a specific answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feedback {
    pub id: Uuid,
    pub user_id: i64,
    pub question_id: String,
    pub answer_id: i64,
    /// Rated impact, small integer scale.
    pub impact: i32,
    /// Rated accuracy, small integer scale.
    pub accuracy: i32,
    pub notes: String,
    pub timestamp: DateTime<Utc>,
}

impl Feedback {
    pub fn new(
        user_id: i64,
        question_id: impl Into<String>,
        answer_id: i64,
        impact: i32,
        accuracy: i32,
        notes: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            question_id: question_id.into(),
            answer_id,
            impact,
            accuracy,
            notes: notes.into(),
            timestamp: Utc::now(),
        }
    }
}

/// In-memory feedback view. Durable storage lives behind the external
/// persistence service; this holds what the current session displays.
#[derive(Debug, Clone, Default)]
pub struct FeedbackLog {
    entries: Vec<Feedback>,
}

impl FeedbackLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, feedback: Feedback) {
        self.entries.push(feedback);
    }

    pub fn entries(&self) -> &[Feedback] {
        &self.entries
    }

    pub fn by_question(&self, question_id: &str) -> Vec<&Feedback> {
        self.entries
            .iter()
            .filter(|entry| entry.question_id == question_id)
            .collect()
    }

    pub fn by_answer(&self, answer_id: i64) -> Vec<&Feedback> {
        self.entries
            .iter()
            .filter(|entry| entry.answer_id == answer_id)
            .collect()
    }
}
