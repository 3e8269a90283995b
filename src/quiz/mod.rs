pub mod hydrate;

pub use hydrate::{
    get_quiz_by_id, get_quizzes_list, gloss_image_url, hydrate_questions, GlossDisplay,
    HydratedQuestion, HydratedQuiz, ImageOption, SignOption, UNKNOWN_GLOSS_NAME,
};

use std::future::Future;
use uuid::Uuid;

use crate::database::{GlossName, QuizRecord, QuizSummary, Result};

/// Read access to the quiz and gloss tables.
///
/// The hydration query only ever talks to the store through this trait, so
/// it runs the same against Postgres and against the in-memory store.
pub trait QuizStore: Send + Sync {
    /// All quizzes reduced to their listing metadata, in store order.
    fn list_quizzes(&self) -> impl Future<Output = Result<Vec<QuizSummary>>> + Send;

    /// A single quiz row, or `None` when no row has this id.
    fn get_quiz(&self, id: Uuid) -> impl Future<Output = Result<Option<QuizRecord>>> + Send;

    /// Id and name of every gloss in `ids` that exists. Missing ids are
    /// simply absent from the result.
    fn get_glosses(&self, ids: &[i64]) -> impl Future<Output = Result<Vec<GlossName>>> + Send;
}
