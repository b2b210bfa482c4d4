// src/handlers/category.rs

use axum::{Json, extract::State, response::IntoResponse};
use sqlx::AnyPool;

use crate::{
    error::AppError,
    models::{
        category::{CategoriesResponse, Category, CreateCategoryRequest},
        question::{Question, QuestionList},
    },
    utils::extract::{IdPath, ValidatedJson},
};

/// Loads every category ordered by id.
pub async fn fetch_categories(pool: &AnyPool) -> Result<Vec<Category>, sqlx::Error> {
    sqlx::query_as::<_, Category>("SELECT id, type FROM categories ORDER BY id")
        .fetch_all(pool)
        .await
}

/// Lists all categories.
pub async fn list_categories(State(pool): State<AnyPool>) -> Result<impl IntoResponse, AppError> {
    let categories = fetch_categories(&pool).await.map_err(|e| {
        tracing::error!("Failed to list categories: {:?}", e);
        AppError::InternalServerError(e.to_string())
    })?;

    Ok(Json(CategoriesResponse {
        success: true,
        categories,
    }))
}

/// Creates a new category. Duplicate labels are allowed.
pub async fn create_category(
    State(pool): State<AnyPool>,
    ValidatedJson(payload): ValidatedJson<CreateCategoryRequest>,
) -> Result<impl IntoResponse, AppError> {
    let id: i64 = sqlx::query_scalar("INSERT INTO categories (type) VALUES ($1) RETURNING id")
        .bind(&payload.category_type)
        .fetch_one(&pool)
        .await?;

    tracing::info!("Created category {} ({})", id, payload.category_type);

    Ok(Json(serde_json::json!({
        "success": true,
        "created": id,
    })))
}

/// Lists the questions filed under a category.
///
/// The category itself is not looked up: an unknown id yields an empty list.
pub async fn list_questions_by_category(
    State(pool): State<AnyPool>,
    IdPath(category_id): IdPath,
) -> Result<impl IntoResponse, AppError> {
    let questions = sqlx::query_as::<_, Question>(
        r#"
        SELECT id, question, answer, category, difficulty
        FROM questions
        WHERE category = $1
        ORDER BY id
        "#,
    )
    .bind(category_id.to_string())
    .fetch_all(&pool)
    .await?;

    Ok(Json(QuestionList::new(questions, category_id)))
}
