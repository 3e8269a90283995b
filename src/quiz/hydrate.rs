use serde::{Deserialize, Serialize};
use log::{debug, info};
use std::collections::{BTreeSet, HashMap};
use uuid::Uuid;

use super::QuizStore;
use crate::database::{Difficulty, QuestionType, QuizSummary, Result, StoredQuestion};

pub const UNKNOWN_GLOSS_NAME: &str = "Unknown";

/// Public asset path of a gloss image. Clients build image requests from
/// this exact format.
pub fn gloss_image_url(id: i64) -> String {
    format!("/glosses/{}.jpg", id)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlossDisplay {
    pub name: String,
    pub image_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HydratedQuiz {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub difficulty: Option<Difficulty>,
    #[serde(rename = "type")]
    pub quiz_type: QuestionType,
    pub questions: Vec<HydratedQuestion>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HydratedQuestion {
    ImageMcq {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        q_no: Option<i32>,
        q_text: String,
        correct_id: i64,
        options: Vec<ImageOption>,
    },
    SignMcq {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        q_no: Option<i32>,
        question_image: String,
        correct_id: i64,
        options: Vec<SignOption>,
    },
}

impl HydratedQuestion {
    pub fn q_no(&self) -> Option<i32> {
        match self {
            HydratedQuestion::ImageMcq { q_no, .. } | HydratedQuestion::SignMcq { q_no, .. } => *q_no,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageOption {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignOption {
    pub id: i64,
    pub name: String,
}

/// Listing of every quiz, metadata only.
pub async fn get_quizzes_list<S: QuizStore>(store: &S) -> Result<Vec<QuizSummary>> {
    let quizzes = store.list_quizzes().await?;
    debug!("Listed {} quizzes", quizzes.len());
    Ok(quizzes)
}

/// Fetches a quiz and expands its stored gloss ids into names and image
/// paths. Returns `Ok(None)` when the quiz does not exist, including when
/// `id` is not a well-formed quiz id.
pub async fn get_quiz_by_id<S: QuizStore>(store: &S, id: &str) -> Result<Option<HydratedQuiz>> {
    let quiz_id = match Uuid::parse_str(id) {
        Ok(quiz_id) => quiz_id,
        Err(_) => {
            debug!("Quiz id {} is not a uuid, treating as not found", id);
            return Ok(None);
        }
    };

    let record = match store.get_quiz(quiz_id).await? {
        Some(record) => record,
        None => return Ok(None),
    };

    let questions = &record.content.questions;
    let quiz_type = questions
        .first()
        .and_then(|question| question.q_type)
        .unwrap_or_default();

    let gloss_ids = collect_gloss_ids(questions);

    if gloss_ids.is_empty() {
        return Ok(Some(HydratedQuiz {
            id: record.id,
            title: record.title,
            description: record.description,
            difficulty: record.difficulty,
            quiz_type,
            questions: Vec::new(),
        }));
    }

    let ids: Vec<i64> = gloss_ids.into_iter().collect();
    let found = store.get_glosses(&ids).await?;

    let glosses: HashMap<i64, GlossDisplay> = found
        .into_iter()
        .map(|gloss| {
            let display = GlossDisplay {
                name: gloss.name,
                image_url: gloss_image_url(gloss.id),
            };
            (gloss.id, display)
        })
        .collect();

    if glosses.len() < ids.len() {
        info!(
            "Quiz {} references {} gloss(es) missing from the glosses table",
            record.id,
            ids.len() - glosses.len()
        );
    }

    let questions = hydrate_questions(questions, &glosses);

    Ok(Some(HydratedQuiz {
        id: record.id,
        title: record.title,
        description: record.description,
        difficulty: record.difficulty,
        quiz_type,
        questions,
    }))
}

fn collect_gloss_ids(questions: &[StoredQuestion]) -> BTreeSet<i64> {
    let mut ids = BTreeSet::new();
    for question in questions {
        ids.insert(question.q_gloss_id);
        ids.extend(question.options.iter().copied());
    }
    ids
}

/// Turns stored questions into their renderable form using a gloss lookup
/// table. Ids absent from `glosses` fall back to placeholder values.
pub fn hydrate_questions(
    questions: &[StoredQuestion],
    glosses: &HashMap<i64, GlossDisplay>,
) -> Vec<HydratedQuestion> {
    let fallback_type = questions
        .first()
        .and_then(|question| question.q_type)
        .unwrap_or_default();

    let name_of = |id: i64| {
        glosses
            .get(&id)
            .map(|gloss| gloss.name.clone())
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| UNKNOWN_GLOSS_NAME.to_string())
    };
    let image_of = |id: i64| glosses.get(&id).map(|gloss| gloss.image_url.clone());

    questions
        .iter()
        .map(|question| {
            let q_type = question.q_type.unwrap_or(fallback_type);

            match q_type {
                QuestionType::ImageMcq => HydratedQuestion::ImageMcq {
                    q_no: question.q_no,
                    q_text: format!(
                        "Identify the correct sign for '{}'",
                        name_of(question.q_gloss_id)
                    ),
                    correct_id: question.q_gloss_id,
                    options: question
                        .options
                        .iter()
                        .map(|&id| ImageOption {
                            id,
                            name: name_of(id),
                            image_url: image_of(id),
                        })
                        .collect(),
                },
                QuestionType::SignMcq | QuestionType::SignLive => HydratedQuestion::SignMcq {
                    q_no: question.q_no,
                    question_image: image_of(question.q_gloss_id).unwrap_or_default(),
                    correct_id: question.q_gloss_id,
                    options: question
                        .options
                        .iter()
                        .map(|&id| SignOption { id, name: name_of(id) })
                        .collect(),
                },
            }
        })
        .collect()
}
