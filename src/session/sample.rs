use once_cell::sync::Lazy;

use super::{QuizOption, QuizQuestion};

pub const SAMPLE_QUIZ_ID: &str = "dummy-quiz-1";

static SAMPLE_QUESTIONS: Lazy<Vec<QuizQuestion>> = Lazy::new(|| {
    vec![
        question(
            "q1",
            "Which sign best matches the word \u{201c}Hello\u{201d}?",
            ["Wave hand near head", "Tap chin twice", "Point upward", "Cross arms"],
            "a",
        ),
        question(
            "q2",
            "Which option is most likely the sign for \u{201c}Thank you\u{201d}?",
            ["Thumbs up", "Hand from chin outward", "Clap twice", "Tap shoulder"],
            "b",
        ),
        question(
            "q3",
            "Pick the best match for the sign meaning \u{201c}Yes\u{201d} (ASL).",
            ["Open palm forward", "Closed fist nodding", "Point to ear", "Finger snap"],
            "b",
        ),
        question(
            "q4",
            "Which is closest to the sign for \u{201c}No\u{201d} (ASL)?",
            ["Index finger wag", "Closed fist nod", "Thumbs up", "Tap forehead"],
            "a",
        ),
        question(
            "q5",
            "Choose the best match for \u{201c}Help\u{201d}.",
            [
                "Hand from chin outward",
                "Thumb-up on palm, lift upward",
                "Wave near head",
                "Tap shoulder twice",
            ],
            "b",
        ),
    ]
});

fn question(id: &str, prompt: &str, labels: [&str; 4], correct: &str) -> QuizQuestion {
    QuizQuestion {
        id: id.to_string(),
        prompt: prompt.to_string(),
        options: ["a", "b", "c", "d"]
            .iter()
            .zip(labels)
            .map(|(option_id, label)| QuizOption {
                id: option_id.to_string(),
                label: label.to_string(),
            })
            .collect(),
        correct_option_id: correct.to_string(),
    }
}

/// The fixed five-question practice set.
pub fn sample_questions() -> Vec<QuizQuestion> {
    SAMPLE_QUESTIONS.clone()
}
