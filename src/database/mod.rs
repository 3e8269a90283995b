pub mod postgres;
pub mod models;
pub mod memory;
pub mod schema;

pub use postgres::DatabaseManager;
pub use memory::MemoryStore;
pub use models::{
    Difficulty, Gloss, GlossName, NewGloss, NewQuiz, QuestionType,
    QuizContent, QuizRecord, QuizSummary, StoredQuestion,
};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
    #[error("Invalid quiz content: {0}")]
    InvalidContent(String),
}

pub type Result<T> = std::result::Result<T, DatabaseError>;
