// src/models/quiz.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{models::question::Question, utils::deserializers::deserialize_int_or_numeric_string};

/// Category selected on the play screen. `id == 0` means "All".
#[derive(Debug, Deserialize, Validate)]
pub struct QuizCategory {
    #[serde(deserialize_with = "deserialize_int_or_numeric_string")]
    #[validate(range(min = 0))]
    pub id: i64,
}

/// DTO for requesting the next quiz question.
#[derive(Debug, Deserialize, Validate)]
pub struct QuizRequest {
    #[validate(nested)]
    pub quiz_category: QuizCategory,

    /// Ids already served in this quiz session, tracked by the client.
    pub previous_questions: Vec<i64>,
}

#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub success: bool,
    /// `None` once every eligible question has been served.
    pub question: Option<Question>,
}
