use serde::{Deserialize, Deserializer, Serialize};
use chrono::{DateTime, Utc};
use log::warn;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "EASY",
            Difficulty::Medium => "MEDIUM",
            Difficulty::Hard => "HARD",
        }
    }

    /// Reads the free-text `difficulty` column. Values outside the enum are
    /// logged and dropped rather than failing the whole row.
    pub fn from_column(value: Option<String>) -> Option<Self> {
        let value = value?;
        match value.parse() {
            Ok(difficulty) => Some(difficulty),
            Err(()) => {
                warn!("Ignoring unrecognised quiz difficulty: {}", value);
                None
            }
        }
    }
}

impl FromStr for Difficulty {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "EASY" => Ok(Difficulty::Easy),
            "MEDIUM" => Ok(Difficulty::Medium),
            "HARD" => Ok(Difficulty::Hard),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mirrors the `quiz_type` enum of the database.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    #[default]
    ImageMcq,
    SignMcq,
    SignLive,
}

impl QuestionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionType::ImageMcq => "image_mcq",
            QuestionType::SignMcq => "sign_mcq",
            QuestionType::SignLive => "sign_live",
        }
    }
}

impl FromStr for QuestionType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "image_mcq" => Ok(QuestionType::ImageMcq),
            "sign_mcq" => Ok(QuestionType::SignMcq),
            "sign_live" => Ok(QuestionType::SignLive),
            _ => Err(()),
        }
    }
}

// Empty, unknown or non-string `q_type` values read as absent so the
// quiz-level fallback applies.
fn lenient_question_type<'de, D>(deserializer: D) -> Result<Option<QuestionType>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;

    Ok(match value {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::String(s)) if s.is_empty() => None,
        Some(serde_json::Value::String(s)) => match s.parse() {
            Ok(q_type) => Some(q_type),
            Err(()) => {
                warn!("Ignoring unrecognised question type: {}", s);
                None
            }
        },
        Some(other) => {
            warn!("Ignoring non-string question type: {}", other);
            None
        }
    })
}

// Shape of the jsonb `content` column
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuizContent {
    #[serde(default)]
    pub questions: Vec<StoredQuestion>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredQuestion {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub q_no: Option<i32>,
    #[serde(
        default,
        deserialize_with = "lenient_question_type",
        skip_serializing_if = "Option::is_none"
    )]
    pub q_type: Option<QuestionType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub q_text: Option<String>,
    pub q_gloss_id: i64,
    #[serde(default)]
    pub options: Vec<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizRecord {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub difficulty: Option<Difficulty>,
    pub created_by: Option<Uuid>,
    pub content: QuizContent,
    pub created_at: Option<DateTime<Utc>>,
}

impl QuizRecord {
    pub fn summary(&self) -> QuizSummary {
        QuizSummary {
            id: self.id,
            title: self.title.clone(),
            description: self.description.clone(),
            difficulty: self.difficulty,
        }
    }
}

// Listing payload, content left out
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizSummary {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub difficulty: Option<Difficulty>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Gloss {
    pub id: i64,
    pub gloss_name: String,
    pub image_url: Option<String>,
    pub gloss_descr: Option<String>,
    pub gloss_tags: Option<Vec<String>>,
    pub created_at: Option<DateTime<Utc>>,
}

/// The two columns the hydration lookup needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlossName {
    pub id: i64,
    pub name: String,
}

// Insert payloads used by the seeding tool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewGloss {
    pub gloss_name: String,
    pub image_url: Option<String>,
    pub gloss_tags: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewQuiz {
    pub title: String,
    pub description: Option<String>,
    pub difficulty: Option<Difficulty>,
    pub created_by: Option<Uuid>,
    pub content: QuizContent,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stored_question_tolerates_missing_type() {
        let content: QuizContent = serde_json::from_value(serde_json::json!({
            "questions": [
                {"q_no": 1, "q_gloss_id": 9007199254740993i64, "options": [9007199254740993i64, 2]}
            ]
        }))
        .unwrap();

        let question = &content.questions[0];
        assert_eq!(question.q_type, None);
        assert_eq!(question.q_gloss_id, 9_007_199_254_740_993);
        assert_eq!(question.options, vec![9_007_199_254_740_993, 2]);
    }

    #[test]
    fn test_malformed_question_type_reads_as_absent() {
        let content: QuizContent = serde_json::from_value(serde_json::json!({
            "questions": [
                {"q_no": 1, "q_type": "", "q_gloss_id": 1, "options": [1]},
                {"q_no": 2, "q_type": "video_mcq", "q_gloss_id": 2, "options": [2]},
                {"q_no": 3, "q_type": null, "q_gloss_id": 3, "options": [3]},
                {"q_no": 4, "q_type": 4, "q_gloss_id": 4, "options": [4]},
                {"q_no": 5, "q_type": "sign_live", "q_gloss_id": 5, "options": [5]}
            ]
        }))
        .unwrap();

        let types: Vec<Option<QuestionType>> = content.questions.iter().map(|q| q.q_type).collect();
        assert_eq!(types, vec![None, None, None, None, Some(QuestionType::SignLive)]);
    }

    #[test]
    fn test_missing_question_number_is_tolerated() {
        let content: QuizContent = serde_json::from_value(serde_json::json!({
            "questions": [{"q_type": "image_mcq", "q_gloss_id": 7, "options": [7, 8]}]
        }))
        .unwrap();

        assert_eq!(content.questions[0].q_no, None);
        let json = serde_json::to_value(&content.questions[0]).unwrap();
        assert!(json.get("q_no").is_none());
    }

    #[test]
    fn test_content_without_questions_is_empty() {
        let content: QuizContent = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(content.questions.is_empty());
    }

    #[test]
    fn test_difficulty_column() {
        assert_eq!(Difficulty::from_column(Some("HARD".to_string())), Some(Difficulty::Hard));
        assert_eq!(Difficulty::from_column(Some("extreme".to_string())), None);
        assert_eq!(Difficulty::from_column(None), None);
        assert_eq!(serde_json::to_value(Difficulty::Medium).unwrap(), "MEDIUM");
    }

    #[test]
    fn test_question_type_names() {
        let parsed: QuestionType = serde_json::from_str("\"sign_mcq\"").unwrap();
        assert_eq!(parsed, QuestionType::SignMcq);
        assert_eq!(QuestionType::default().as_str(), "image_mcq");
        assert_eq!("sign_live".parse::<QuestionType>(), Ok(QuestionType::SignLive));
    }
}
