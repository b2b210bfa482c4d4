// src/models/question.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::{models::category::Category, utils::deserializers::deserialize_int_or_numeric_string};

/// Represents the 'questions' table in the database.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize, PartialEq, Eq)]
pub struct Question {
    pub id: i64,

    /// The prompt shown to the player.
    pub question: String,

    pub answer: String,

    /// Category id in its stored text form (e.g. "3").
    /// No foreign key backs this column.
    pub category: String,

    pub difficulty: i64,
}

/// DTO for creating a new question.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateQuestionRequest {
    #[validate(length(min = 1))]
    pub question: String,
    #[validate(length(min = 1))]
    pub answer: String,
    /// Accepts `3` or `"3"`; persisted as `"3"`.
    #[serde(deserialize_with = "deserialize_int_or_numeric_string")]
    #[validate(range(min = 0))]
    pub category: i64,
    #[serde(deserialize_with = "deserialize_int_or_numeric_string")]
    pub difficulty: i64,
}

#[derive(Debug, Deserialize, Validate)]
pub struct SearchRequest {
    #[serde(rename = "searchTerm")]
    pub search_term: String,
}

/// Raw query parameters of `GET /questions`.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub page: Option<String>,
}

/// One page of questions plus the category sidebar.
#[derive(Debug, Serialize)]
pub struct QuestionPage {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: i64,
    pub categories: Vec<Category>,
    pub current_category: i64,
}

/// Unpaginated question list (search results, category filter).
#[derive(Debug, Serialize)]
pub struct QuestionList {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: i64,
}

impl QuestionList {
    pub fn new(questions: Vec<Question>, current_category: i64) -> Self {
        Self {
            success: true,
            total_questions: questions.len(),
            questions,
            current_category,
        }
    }
}
