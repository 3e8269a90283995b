use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use uuid::Uuid;

use super::models::{Gloss, GlossName, QuizRecord, QuizSummary};
use super::{DatabaseError, Result};
use crate::quiz::QuizStore;

/// Quiz store held entirely in memory.
///
/// Counts gloss lookups and can be switched to an unavailable state, which
/// makes it a stand-in for Postgres when exercising the query layer.
#[derive(Debug, Default)]
pub struct MemoryStore {
    quizzes: RwLock<Vec<QuizRecord>>,
    glosses: RwLock<BTreeMap<i64, Gloss>>,
    gloss_lookups: AtomicUsize,
    unavailable: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_quiz(&self, quiz: QuizRecord) {
        let mut quizzes = self.quizzes.write();
        quizzes.retain(|existing| existing.id != quiz.id);
        quizzes.push(quiz);
    }

    pub fn insert_gloss(&self, gloss: Gloss) {
        self.glosses.write().insert(gloss.id, gloss);
    }

    /// Number of batched gloss lookups served so far.
    pub fn gloss_lookups(&self) -> usize {
        self.gloss_lookups.load(Ordering::SeqCst)
    }

    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn check_available(&self) -> Result<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(DatabaseError::ConnectionFailed("store is unavailable".to_string()));
        }
        Ok(())
    }
}

impl QuizStore for MemoryStore {
    async fn list_quizzes(&self) -> Result<Vec<QuizSummary>> {
        self.check_available()?;
        Ok(self.quizzes.read().iter().map(QuizRecord::summary).collect())
    }

    async fn get_quiz(&self, id: Uuid) -> Result<Option<QuizRecord>> {
        self.check_available()?;
        Ok(self.quizzes.read().iter().find(|quiz| quiz.id == id).cloned())
    }

    async fn get_glosses(&self, ids: &[i64]) -> Result<Vec<GlossName>> {
        self.check_available()?;
        self.gloss_lookups.fetch_add(1, Ordering::SeqCst);

        let glosses = self.glosses.read();
        Ok(ids
            .iter()
            .filter_map(|id| glosses.get(id))
            .map(|gloss| GlossName {
                id: gloss.id,
                name: gloss.gloss_name.clone(),
            })
            .collect())
    }
}
