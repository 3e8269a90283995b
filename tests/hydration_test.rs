mod common;

use common::{question, quiz, store_with_glosses};
use serde_json::json;
use signlearn_quiz_lib::database::{MemoryStore, QuestionType};
use signlearn_quiz_lib::quiz::{get_quiz_by_id, get_quizzes_list, HydratedQuestion};
use uuid::Uuid;

#[tokio::test]
async fn test_unknown_quiz_is_none() {
    let store = store_with_glosses();

    assert!(get_quiz_by_id(&store, &Uuid::new_v4().to_string()).await.unwrap().is_none());
    assert!(get_quiz_by_id(&store, "abc").await.unwrap().is_none());
    assert_eq!(store.gloss_lookups(), 0);
}

#[tokio::test]
async fn test_empty_quiz_skips_gloss_lookup() {
    let store = store_with_glosses();
    let record = quiz("Empty", Vec::new());
    let id = record.id;
    store.insert_quiz(record);

    let hydrated = get_quiz_by_id(&store, &id.to_string()).await.unwrap().unwrap();

    assert!(hydrated.questions.is_empty());
    assert_eq!(hydrated.title, "Empty");
    assert_eq!(hydrated.quiz_type, QuestionType::ImageMcq);
    assert_eq!(store.gloss_lookups(), 0);
}

#[tokio::test]
async fn test_image_mcq_scenario() {
    let store = store_with_glosses();
    let record = quiz("Greetings", vec![question(1, Some(QuestionType::ImageMcq), 7, &[7, 80])]);
    let id = record.id;
    store.insert_quiz(record);

    let hydrated = get_quiz_by_id(&store, &id.to_string()).await.unwrap().unwrap();
    let json = serde_json::to_value(&hydrated).unwrap();

    assert_eq!(
        json,
        json!({
            "id": id,
            "title": "Greetings",
            "description": "Practice session",
            "difficulty": "EASY",
            "type": "image_mcq",
            "questions": [{
                "q_no": 1,
                "q_text": "Identify the correct sign for 'Hello'",
                "correct_id": 7,
                "options": [
                    {"id": 7, "name": "Hello", "image_url": "/glosses/7.jpg"},
                    {"id": 80, "name": "Unknown"}
                ]
            }]
        })
    );
    assert_eq!(store.gloss_lookups(), 1);
}

#[tokio::test]
async fn test_sign_mcq_never_carries_option_images() {
    let store = store_with_glosses();
    let record = quiz(
        "Sign Matcher",
        vec![
            question(1, Some(QuestionType::SignMcq), 3, &[1, 2, 3, 4]),
            question(2, Some(QuestionType::SignMcq), 99, &[99, 5]),
        ],
    );
    let id = record.id;
    store.insert_quiz(record);

    let hydrated = get_quiz_by_id(&store, &id.to_string()).await.unwrap().unwrap();
    assert_eq!(hydrated.quiz_type, QuestionType::SignMcq);

    let json = serde_json::to_value(&hydrated.questions).unwrap();
    assert_eq!(json[0]["question_image"], "/glosses/3.jpg");
    assert_eq!(json[1]["question_image"], "");
    assert_eq!(json[1]["options"][0], json!({"id": 99, "name": "Unknown"}));

    for question in json.as_array().unwrap() {
        for option in question["options"].as_array().unwrap() {
            assert!(option.get("image_url").is_none());
        }
    }
}

#[tokio::test]
async fn test_shared_ids_use_one_lookup() {
    let store = store_with_glosses();
    let questions = (1..=6)
        .map(|n| question(n, Some(QuestionType::ImageMcq), n as i64, &[1, 2, 3, n as i64]))
        .collect();
    let record = quiz("Numbers", questions);
    let id = record.id;
    store.insert_quiz(record);

    let hydrated = get_quiz_by_id(&store, &id.to_string()).await.unwrap().unwrap();
    assert_eq!(hydrated.questions.len(), 6);
    assert_eq!(store.gloss_lookups(), 1);

    let numbers: Vec<Option<i32>> = hydrated.questions.iter().map(HydratedQuestion::q_no).collect();
    assert_eq!(numbers, (1..=6).map(Some).collect::<Vec<_>>());
}

#[tokio::test]
async fn test_hydration_is_idempotent() {
    let store = store_with_glosses();
    let record = quiz(
        "Mixed",
        vec![
            question(1, Some(QuestionType::SignMcq), 2, &[2, 3]),
            question(2, None, 4, &[4, 42]),
        ],
    );
    let id = record.id.to_string();
    store.insert_quiz(record);

    let first = get_quiz_by_id(&store, &id).await.unwrap();
    let second = get_quiz_by_id(&store, &id).await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_listing_omits_content() {
    let store = MemoryStore::new();
    store.insert_quiz(quiz("One", vec![question(1, None, 1, &[1])]));
    store.insert_quiz(quiz("Two", Vec::new()));

    let listed = get_quizzes_list(&store).await.unwrap();
    let titles: Vec<&str> = listed.iter().map(|q| q.title.as_str()).collect();
    assert_eq!(titles, vec!["One", "Two"]);

    let json = serde_json::to_value(&listed[0]).unwrap();
    let keys: Vec<&String> = json.as_object().unwrap().keys().collect();
    assert_eq!(keys.len(), 4);
    assert!(json.get("content").is_none());
}

#[tokio::test]
async fn test_store_failure_propagates() {
    let store = store_with_glosses();
    store.set_unavailable(true);

    assert!(get_quizzes_list(&store).await.is_err());
    assert!(get_quiz_by_id(&store, &Uuid::new_v4().to_string()).await.is_err());
}
