// src/routes.rs

use axum::{
    Router,
    http::{Method, header},
    routing::{delete, get, post},
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    error::{method_not_allowed, not_found, panic_response},
    handlers::{category, question, quiz},
    state::AppState,
};

/// Assembles the main application router.
///
/// * Category, question and quiz routes share the database pool via state.
/// * Unknown paths and unsupported methods render the JSON error contract.
/// * Applies global middleware (panic catching, Trace, CORS).
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    let category_routes = Router::new()
        .route(
            "/categories",
            get(category::list_categories).post(category::create_category),
        )
        .route(
            "/categories/{category_id}/questions",
            get(category::list_questions_by_category),
        );

    let question_routes = Router::new()
        .route(
            "/questions",
            get(question::list_questions).post(question::create_question),
        )
        .route("/questions/search", post(question::search_questions))
        .route("/questions/{question_id}", delete(question::delete_question));

    let quiz_routes = Router::new().route("/quizzes", post(quiz::next_question));

    Router::new()
        .merge(category_routes)
        .merge(question_routes)
        .merge(quiz_routes)
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        // Global Middleware (applied from outside in)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
