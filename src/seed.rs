use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;

use crate::database::{Difficulty, NewGloss, NewQuiz, QuestionType, QuizContent, StoredQuestion};

const WRONG_OPTIONS_PER_QUESTION: usize = 3;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SeedError {
    #[error("Need at least {needed} glosses to build {count} questions, found {available}")]
    NotEnoughGlosses {
        needed: usize,
        count: usize,
        available: usize,
    },
}

/// Digits 1-9 followed by letters A-Z.
pub fn alphanumeric_glosses() -> Vec<NewGloss> {
    let numbers = (1..=9).map(|n| (n.to_string(), ["number", "digit"]));
    let letters = ('A'..='Z').map(|c| (c.to_string(), ["alphabet", "letter"]));

    numbers
        .chain(letters)
        .map(|(name, tags)| NewGloss {
            image_url: Some(format!("/Glosses/{}.jpg", name)),
            gloss_name: name,
            gloss_tags: tags.iter().map(|tag| tag.to_string()).collect(),
        })
        .collect()
}

/// Builds `count` questions over distinct target glosses. Each question
/// offers its target plus three other glosses in random order.
pub fn generate_questions<R: Rng + ?Sized>(
    rng: &mut R,
    q_type: QuestionType,
    count: usize,
    gloss_ids: &[i64],
) -> Result<Vec<StoredQuestion>, SeedError> {
    let needed = count.max(WRONG_OPTIONS_PER_QUESTION + 1);
    if gloss_ids.len() < needed {
        return Err(SeedError::NotEnoughGlosses {
            needed,
            count,
            available: gloss_ids.len(),
        });
    }

    let targets: Vec<i64> = gloss_ids.choose_multiple(rng, count).copied().collect();

    let questions = targets
        .into_iter()
        .enumerate()
        .map(|(i, target)| {
            let others: Vec<i64> = gloss_ids.iter().copied().filter(|&id| id != target).collect();
            let mut options: Vec<i64> = others
                .choose_multiple(rng, WRONG_OPTIONS_PER_QUESTION)
                .copied()
                .collect();
            options.push(target);
            options.shuffle(rng);

            StoredQuestion {
                q_no: Some(i as i32 + 1),
                q_type: Some(q_type),
                q_text: Some("Identify the correct sign".to_string()),
                q_gloss_id: target,
                options,
            }
        })
        .collect();

    Ok(questions)
}

#[derive(Debug, Clone, Copy)]
pub struct QuizPlan {
    pub title: &'static str,
    pub difficulty: Difficulty,
    pub q_type: QuestionType,
}

pub const DEFAULT_QUESTIONS_PER_QUIZ: usize = 6;

pub fn default_quiz_plan() -> Vec<QuizPlan> {
    let plan = |title, q_type| QuizPlan {
        title,
        difficulty: Difficulty::Easy,
        q_type,
    };

    vec![
        plan("Number Quiz 1", QuestionType::ImageMcq),
        plan("Number Quiz 2", QuestionType::ImageMcq),
        plan("Alpha Mix", QuestionType::ImageMcq),
        plan("Sign Matcher 1", QuestionType::SignMcq),
        plan("Sign Matcher 2", QuestionType::SignMcq),
        plan("Foundational Mix", QuestionType::SignMcq),
    ]
}

pub fn build_quizzes<R: Rng + ?Sized>(
    rng: &mut R,
    plan: &[QuizPlan],
    questions_per_quiz: usize,
    gloss_ids: &[i64],
) -> Result<Vec<NewQuiz>, SeedError> {
    plan.iter()
        .map(|entry| {
            let questions = generate_questions(rng, entry.q_type, questions_per_quiz, gloss_ids)?;
            Ok(NewQuiz {
                title: entry.title.to_string(),
                description: Some("Practice session".to_string()),
                difficulty: Some(entry.difficulty),
                created_by: None,
                content: QuizContent { questions },
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_alphanumeric_glosses() {
        let glosses = alphanumeric_glosses();
        assert_eq!(glosses.len(), 35);
        assert_eq!(glosses[0].gloss_name, "1");
        assert_eq!(glosses[0].gloss_tags, vec!["number", "digit"]);
        assert_eq!(glosses[9].gloss_name, "A");
        assert_eq!(glosses[9].image_url.as_deref(), Some("/Glosses/A.jpg"));
        assert_eq!(glosses[34].gloss_name, "Z");
    }

    #[test]
    fn test_generated_questions_are_well_formed() {
        let mut rng = StdRng::seed_from_u64(42);
        let ids: Vec<i64> = (1..=35).collect();

        let questions = generate_questions(&mut rng, QuestionType::SignMcq, 6, &ids).unwrap();
        assert_eq!(questions.len(), 6);

        let targets: HashSet<i64> = questions.iter().map(|q| q.q_gloss_id).collect();
        assert_eq!(targets.len(), 6);

        for (i, question) in questions.iter().enumerate() {
            assert_eq!(question.q_no, Some(i as i32 + 1));
            assert_eq!(question.q_type, Some(QuestionType::SignMcq));
            assert_eq!(question.options.len(), 4);

            let distinct: HashSet<i64> = question.options.iter().copied().collect();
            assert_eq!(distinct.len(), 4);
            assert_eq!(question.options.iter().filter(|&&id| id == question.q_gloss_id).count(), 1);
        }
    }

    #[test]
    fn test_too_few_glosses() {
        let mut rng = StdRng::seed_from_u64(7);
        let err = generate_questions(&mut rng, QuestionType::ImageMcq, 2, &[1, 2, 3]).unwrap_err();
        assert_eq!(err, SeedError::NotEnoughGlosses { needed: 4, count: 2, available: 3 });
    }

    #[test]
    fn test_default_plan() {
        let mut rng = StdRng::seed_from_u64(1);
        let ids: Vec<i64> = (1..=35).collect();
        let quizzes = build_quizzes(&mut rng, &default_quiz_plan(), DEFAULT_QUESTIONS_PER_QUIZ, &ids).unwrap();

        assert_eq!(quizzes.len(), 6);
        assert_eq!(quizzes[3].title, "Sign Matcher 1");
        assert_eq!(quizzes[3].content.questions[0].q_type, Some(QuestionType::SignMcq));
        assert!(quizzes.iter().all(|q| q.difficulty == Some(Difficulty::Easy)));
        assert!(quizzes.iter().all(|q| q.content.questions.len() == 6));
    }
}
