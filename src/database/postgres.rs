use deadpool_postgres::{Config, ManagerConfig, Pool, PoolConfig, RecyclingMethod, Runtime};
use tokio_postgres::{NoTls, Row};
use uuid::Uuid;
use log::{info, error, debug};

use super::{DatabaseError, Result};
use super::models::*;
use super::schema::SCHEMA;
use crate::settings::DatabaseSettings;
use crate::quiz::QuizStore;

#[derive(Debug, Clone)]
pub struct DatabaseManager {
    pool: Pool,
}

impl DatabaseManager {
    pub async fn new(settings: &DatabaseSettings) -> Result<Self> {
        info!("Connecting to database: {}", settings.redacted());

        let mut cfg = Config::new();
        cfg.host = Some(settings.host.clone());
        cfg.port = Some(settings.port);
        cfg.dbname = Some(settings.name.clone());
        cfg.user = Some(settings.user.clone());
        cfg.password = Some(settings.password.clone());
        cfg.manager = Some(ManagerConfig {
            recycling_method: RecyclingMethod::Fast,
        });
        cfg.pool = Some(PoolConfig::new(settings.pool_size));

        let pool = cfg.create_pool(Some(Runtime::Tokio1), NoTls)
            .map_err(|e| DatabaseError::ConnectionFailed(format!("Pool creation failed: {}", e)))?;

        // Test connection
        let _client = pool.get().await
            .map_err(|e| DatabaseError::ConnectionFailed(format!("Connection test failed: {}", e)))?;

        info!("Database connection established successfully");

        Ok(DatabaseManager { pool })
    }

    async fn client(&self) -> Result<deadpool_postgres::Client> {
        self.pool.get().await
            .map_err(|e| DatabaseError::ConnectionFailed(e.to_string()))
    }

    /// Creates any missing tables.
    pub async fn apply_schema(&self) -> Result<()> {
        let client = self.client().await?;

        client.batch_execute(SCHEMA).await.map_err(|e| {
            error!("Failed to apply schema: {}", e);
            DatabaseError::QueryFailed(format!("Failed to apply schema: {}", e))
        })?;

        info!("Database schema is up to date");
        Ok(())
    }

    pub async fn count_rows(&self, table: &str) -> Result<i64> {
        if !super::schema::TABLES.contains(&table) {
            return Err(DatabaseError::QueryFailed(format!("Unknown table: {}", table)));
        }

        let client = self.client().await?;
        let row = client
            .query_one(format!("SELECT COUNT(*) FROM {}", table).as_str(), &[])
            .await
            .map_err(|e| DatabaseError::QueryFailed(format!("Failed to count {}: {}", table, e)))?;

        Ok(row.get(0))
    }

    pub async fn insert_gloss(&self, gloss: &NewGloss) -> Result<i64> {
        let client = self.client().await?;

        let row = client
            .query_one(
                r#"
                INSERT INTO glosses (gloss_name, image_url, gloss_tags)
                VALUES ($1, $2, $3)
                RETURNING id
                "#,
                &[&gloss.gloss_name, &gloss.image_url, &gloss.gloss_tags],
            )
            .await
            .map_err(|e| {
                error!("Failed to insert gloss {}: {}", gloss.gloss_name, e);
                DatabaseError::QueryFailed(format!("Failed to insert gloss: {}", e))
            })?;

        Ok(row.get(0))
    }

    pub async fn insert_quiz(&self, quiz: &NewQuiz) -> Result<Uuid> {
        let client = self.client().await?;

        let content = serde_json::to_value(&quiz.content)
            .map_err(|e| DatabaseError::InvalidContent(e.to_string()))?;
        let difficulty = quiz.difficulty.map(|d| d.as_str());

        let row = client
            .query_one(
                r#"
                INSERT INTO quiz (title, description, difficulty, content, created_by)
                VALUES ($1, $2, $3, $4, $5)
                RETURNING id
                "#,
                &[&quiz.title, &quiz.description, &difficulty, &content, &quiz.created_by],
            )
            .await
            .map_err(|e| {
                error!("Failed to insert quiz {}: {}", quiz.title, e);
                DatabaseError::QueryFailed(format!("Failed to insert quiz: {}", e))
            })?;

        let id: Uuid = row.get(0);
        info!("Inserted quiz {} ({})", quiz.title, id);
        Ok(id)
    }
}

fn quiz_from_row(row: &Row) -> Result<QuizRecord> {
    let raw_content: serde_json::Value = row.get("content");
    let content: QuizContent = serde_json::from_value(raw_content)
        .map_err(|e| DatabaseError::InvalidContent(e.to_string()))?;

    Ok(QuizRecord {
        id: row.get("id"),
        title: row.get("title"),
        description: row.get("description"),
        difficulty: Difficulty::from_column(row.get("difficulty")),
        created_by: row.get("created_by"),
        content,
        created_at: row.get("created_at"),
    })
}

impl QuizStore for DatabaseManager {
    async fn list_quizzes(&self) -> Result<Vec<QuizSummary>> {
        let client = self.client().await?;

        let rows = client
            .query("SELECT id, title, description, difficulty FROM quiz", &[])
            .await
            .map_err(|e| {
                error!("Failed to list quizzes: {}", e);
                DatabaseError::QueryFailed(format!("Failed to list quizzes: {}", e))
            })?;

        Ok(rows
            .iter()
            .map(|row| QuizSummary {
                id: row.get(0),
                title: row.get(1),
                description: row.get(2),
                difficulty: Difficulty::from_column(row.get(3)),
            })
            .collect())
    }

    async fn get_quiz(&self, id: Uuid) -> Result<Option<QuizRecord>> {
        let client = self.client().await?;

        let row = client
            .query_opt(
                r#"
                SELECT id, title, description, difficulty, created_by, content, created_at
                FROM quiz
                WHERE id = $1
                LIMIT 1
                "#,
                &[&id],
            )
            .await
            .map_err(|e| {
                error!("Failed to fetch quiz {}: {}", id, e);
                DatabaseError::QueryFailed(format!("Failed to fetch quiz: {}", e))
            })?;

        row.as_ref().map(quiz_from_row).transpose()
    }

    async fn get_glosses(&self, ids: &[i64]) -> Result<Vec<GlossName>> {
        let client = self.client().await?;

        let rows = client
            .query(
                "SELECT id, gloss_name FROM glosses WHERE id = ANY($1)",
                &[&ids],
            )
            .await
            .map_err(|e| {
                error!("Failed to fetch glosses: {}", e);
                DatabaseError::QueryFailed(format!("Failed to fetch glosses: {}", e))
            })?;

        debug!("Gloss lookup: {} requested, {} found", ids.len(), rows.len());

        Ok(rows
            .iter()
            .map(|row| GlossName {
                id: row.get(0),
                name: row.get(1),
            })
            .collect())
    }
}
