use signlearn_quiz_lib::database::{
    Difficulty, Gloss, MemoryStore, QuestionType, QuizContent, QuizRecord, StoredQuestion,
};
use uuid::Uuid;

pub fn gloss(id: i64, name: &str) -> Gloss {
    Gloss {
        id,
        gloss_name: name.to_string(),
        // never used for hydration, the id-derived path is
        image_url: Some(format!("/Glosses/{}.jpg", name)),
        gloss_descr: None,
        gloss_tags: None,
        created_at: None,
    }
}

pub fn question(q_no: i32, q_type: Option<QuestionType>, target: i64, options: &[i64]) -> StoredQuestion {
    StoredQuestion {
        q_no: Some(q_no),
        q_type,
        q_text: Some("Identify the correct sign".to_string()),
        q_gloss_id: target,
        options: options.to_vec(),
    }
}

pub fn quiz(title: &str, questions: Vec<StoredQuestion>) -> QuizRecord {
    QuizRecord {
        id: Uuid::new_v4(),
        title: title.to_string(),
        description: Some("Practice session".to_string()),
        difficulty: Some(Difficulty::Easy),
        created_by: None,
        content: QuizContent { questions },
        created_at: None,
    }
}

/// Glosses 1-9 named after their digit, plus 7 renamed to "Hello".
pub fn store_with_glosses() -> MemoryStore {
    let store = MemoryStore::new();
    for id in 1..=9 {
        let name = if id == 7 { "Hello".to_string() } else { id.to_string() };
        store.insert_gloss(gloss(id, &name));
    }
    store
}
