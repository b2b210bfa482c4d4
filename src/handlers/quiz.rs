// src/handlers/quiz.rs

use axum::{Json, extract::State, response::IntoResponse};
use sqlx::AnyPool;

use crate::{
    error::AppError,
    models::{
        question::Question,
        quiz::{QuizRequest, QuizResponse},
    },
    utils::{extract::ValidatedJson, random::SharedRng},
};

/// Serves the next quiz question.
///
/// * Category `0` draws from every question; any other id restricts the pool
///   to that category.
/// * Ids in `previous_questions` are never served again.
/// * An exhausted pool returns `question: null`.
pub async fn next_question(
    State(pool): State<AnyPool>,
    State(rng): State<SharedRng>,
    ValidatedJson(req): ValidatedJson<QuizRequest>,
) -> Result<impl IntoResponse, AppError> {
    let category_id = req.quiz_category.id;

    let candidates = candidate_ids(&pool, category_id).await.map_err(|e| {
        tracing::error!("Failed to fetch quiz candidates: {:?}", e);
        AppError::InternalServerError(e.to_string())
    })?;

    let picked = rng.pick_unseen(&candidates, &req.previous_questions)?;

    let question = match picked {
        Some(id) => {
            sqlx::query_as::<_, Question>(
                r#"
                SELECT id, question, answer, category, difficulty
                FROM questions
                WHERE id = $1
                "#,
            )
            .bind(id)
            .fetch_optional(&pool)
            .await?
        }
        None => None,
    };

    tracing::debug!(
        "Quiz category {}: {} candidates, {} previous, served {:?}",
        category_id,
        candidates.len(),
        req.previous_questions.len(),
        question.as_ref().map(|q| q.id)
    );

    Ok(Json(QuizResponse {
        success: true,
        question,
    }))
}

/// Ids of every question eligible for the category, before exclusion.
async fn candidate_ids(pool: &AnyPool, category_id: i64) -> Result<Vec<i64>, sqlx::Error> {
    if category_id == 0 {
        sqlx::query_scalar("SELECT id FROM questions ORDER BY id")
            .fetch_all(pool)
            .await
    } else {
        sqlx::query_scalar("SELECT id FROM questions WHERE category = $1 ORDER BY id")
            .bind(category_id.to_string())
            .fetch_all(pool)
            .await
    }
}
