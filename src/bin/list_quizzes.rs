use anyhow::Result;
use signlearn_quiz_lib::settings::Settings;
use signlearn_quiz_lib::database::DatabaseManager;
use signlearn_quiz_lib::quiz::{get_quiz_by_id, get_quizzes_list};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let settings = Settings::load()?;
    let db = DatabaseManager::new(&settings.database).await?;

    println!("--- FETCHING QUIZZES LIST ---");
    let quizzes = get_quizzes_list(&db).await?;

    println!("\n📋 Found {} quizzes:", quizzes.len());
    println!("{:-<100}", "");
    println!("{:<38} {:<30} {:<10} {:<20}", "Quiz ID", "Title", "Difficulty", "Description");
    println!("{:-<100}", "");
    for quiz in &quizzes {
        println!(
            "{:<38} {:<30} {:<10} {:<20}",
            quiz.id.to_string(),
            quiz.title.chars().take(28).collect::<String>(),
            quiz.difficulty.map(|d| d.as_str()).unwrap_or("-"),
            quiz.description.as_deref().unwrap_or("").chars().take(18).collect::<String>()
        );
    }
    println!("{:-<100}", "");

    if let Some(first) = quizzes.first() {
        println!("\n--- FETCHING FULLY HYDRATED QUIZ ---");
        match get_quiz_by_id(&db, &first.id.to_string()).await? {
            Some(quiz) => println!("{}", serde_json::to_string_pretty(&quiz)?),
            None => println!("❌ Quiz {} disappeared before it could be hydrated", first.id),
        }
    }

    Ok(())
}
