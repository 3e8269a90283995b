use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use log::{error, info};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;

use crate::database::{DatabaseError, QuizSummary};
use crate::quiz::{self, HydratedQuiz, QuizStore};

pub struct AppState<S> {
    pub store: Arc<S>,
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Quiz not found")]
    QuizNotFound,
    #[error("Not Found")]
    RouteNotFound,
    #[error("Internal Server Error")]
    Internal(#[from] DatabaseError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::QuizNotFound | ApiError::RouteNotFound => StatusCode::NOT_FOUND,
            ApiError::Internal(e) => {
                error!("Request failed: {}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        // Display is fixed per variant, never the underlying cause
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

/// Builds the quiz API around an explicitly passed store.
pub fn router<S: QuizStore + 'static>(store: Arc<S>) -> Router {
    Router::new()
        .route("/api/quiz", get(list_quizzes::<S>))
        .route("/api/quiz/:id", get(get_quiz::<S>))
        .fallback(fallback)
        .with_state(AppState { store })
}

async fn list_quizzes<S: QuizStore>(
    State(state): State<AppState<S>>,
) -> Result<Json<Vec<QuizSummary>>, ApiError> {
    let quizzes = quiz::get_quizzes_list(state.store.as_ref()).await?;
    Ok(Json(quizzes))
}

async fn get_quiz<S: QuizStore>(
    Path(id): Path<String>,
    State(state): State<AppState<S>>,
) -> Result<Json<HydratedQuiz>, ApiError> {
    match quiz::get_quiz_by_id(state.store.as_ref(), &id).await? {
        Some(quiz) => Ok(Json(quiz)),
        None => {
            info!("Quiz {} not found", id);
            Err(ApiError::QuizNotFound)
        }
    }
}

async fn fallback() -> ApiError {
    ApiError::RouteNotFound
}
