use anyhow::Result;
use log::info;
use signlearn_quiz_lib::settings::Settings;
use signlearn_quiz_lib::database::DatabaseManager;
use signlearn_quiz_lib::seed::{
    alphanumeric_glosses, build_quizzes, default_quiz_plan, DEFAULT_QUESTIONS_PER_QUIZ,
};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = Settings::load()?;
    let db = DatabaseManager::new(&settings.database).await?;
    db.apply_schema().await?;

    let glosses = alphanumeric_glosses();
    let mut gloss_ids = Vec::with_capacity(glosses.len());
    for gloss in &glosses {
        gloss_ids.push(db.insert_gloss(gloss).await?);
    }
    info!("Inserted {} glosses", gloss_ids.len());

    let quizzes = build_quizzes(
        &mut rand::thread_rng(),
        &default_quiz_plan(),
        DEFAULT_QUESTIONS_PER_QUIZ,
        &gloss_ids,
    )?;
    for quiz in &quizzes {
        db.insert_quiz(quiz).await?;
    }

    println!("✅ Seeded {} glosses and {} quizzes", gloss_ids.len(), quizzes.len());
    Ok(())
}
