// src/handlers/question.rs

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
    response::IntoResponse,
};
use sqlx::AnyPool;

use crate::{
    config::Config,
    error::AppError,
    handlers::category::fetch_categories,
    models::question::{CreateQuestionRequest, ListParams, Question, QuestionList, QuestionPage, SearchRequest},
    utils::{
        extract::{IdPath, ValidatedJson},
        pagination::Page,
    },
};

/// Lists one page of questions together with every category.
///
/// * `page` is 1-indexed and defaults to 1.
/// * Pages past the end (or below 1) are empty; `total_questions` is always
///   the full count.
pub async fn list_questions(
    State(pool): State<AnyPool>,
    State(config): State<Config>,
    params: Result<Query<ListParams>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(params) = params?;
    let page = Page::from_query(params.page.as_deref(), config.questions_per_page);

    let total_questions: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM questions")
        .fetch_one(&pool)
        .await?;

    let questions = match page.window() {
        Some((limit, offset)) => {
            sqlx::query_as::<_, Question>(
                r#"
                SELECT id, question, answer, category, difficulty
                FROM questions
                ORDER BY id
                LIMIT $1 OFFSET $2
                "#,
            )
            .bind(limit)
            .bind(offset)
            .fetch_all(&pool)
            .await?
        }
        None => Vec::new(),
    };

    let categories = fetch_categories(&pool).await?;

    Ok(Json(QuestionPage {
        success: true,
        questions,
        total_questions,
        categories,
        current_category: 0,
    }))
}

/// Creates a new question.
pub async fn create_question(
    State(pool): State<AnyPool>,
    ValidatedJson(payload): ValidatedJson<CreateQuestionRequest>,
) -> Result<impl IntoResponse, AppError> {
    let id: i64 = sqlx::query_scalar(
        r#"
        INSERT INTO questions (question, answer, category, difficulty)
        VALUES ($1, $2, $3, $4)
        RETURNING id
        "#,
    )
    .bind(&payload.question)
    .bind(&payload.answer)
    .bind(payload.category.to_string())
    .bind(payload.difficulty)
    .fetch_one(&pool)
    .await
    .map_err(|e| {
        tracing::error!("Failed to create question: {:?}", e);
        AppError::InternalServerError(e.to_string())
    })?;

    tracing::info!("Created question {} in category {}", id, payload.category);

    Ok(Json(serde_json::json!({
        "success": true,
        "created": id,
    })))
}

/// Deletes a question by ID.
/// Missing ids are a no-op and still report success.
pub async fn delete_question(
    State(pool): State<AnyPool>,
    IdPath(id): IdPath,
) -> Result<impl IntoResponse, AppError> {
    let result = sqlx::query("DELETE FROM questions WHERE id = $1")
        .bind(id)
        .execute(&pool)
        .await?;

    if result.rows_affected() == 0 {
        tracing::debug!("Delete of missing question {} ignored", id);
    }

    Ok(Json(serde_json::json!({
        "deleted": id,
        "success": true,
    })))
}

/// Case-insensitive substring search over question text. Not paginated.
pub async fn search_questions(
    State(pool): State<AnyPool>,
    ValidatedJson(payload): ValidatedJson<SearchRequest>,
) -> Result<impl IntoResponse, AppError> {
    let pattern = format!("%{}%", escape_like(&payload.search_term.to_lowercase()));

    let questions = sqlx::query_as::<_, Question>(
        r#"
        SELECT id, question, answer, category, difficulty
        FROM questions
        WHERE LOWER(question) LIKE $1 ESCAPE '\'
        ORDER BY id
        "#,
    )
    .bind(pattern)
    .fetch_all(&pool)
    .await?;

    Ok(Json(QuestionList::new(questions, 0)))
}

/// Escapes LIKE metacharacters so the term matches literally.
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
