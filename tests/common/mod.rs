// tests/common/mod.rs

#![allow(dead_code)]

use std::time::Duration;

use sqlx::{AnyPool, any::AnyPoolOptions};
use trivia_api::{config::Config, routes, state::AppState};

pub struct TestApp {
    /// Base URL (e.g., "http://127.0.0.1:12345").
    pub address: String,
    /// Handle on the same in-memory database the server uses.
    pub pool: AnyPool,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }
}

pub const CATEGORIES: [&str; 6] = ["Science", "Art", "Geography", "History", "Entertainment", "Sports"];

/// (question, answer, category, difficulty); ids are assigned 1..=12 in order.
pub const QUESTIONS: [(&str, &str, &str, i64); 12] = [
    (
        "What is the title of the 1990 fantasy directed by Tim Burton about a young man with multi-bladed appendages?",
        "Edward Scissorhands",
        "5",
        3,
    ),
    ("Who invented Peanut Butter?", "George Washington Carver", "4", 2),
    ("What boxer's original name is Cassius Clay?", "Muhammad Ali", "4", 1),
    ("Which is the only team to play in every soccer World Cup tournament?", "Brazil", "6", 3),
    ("Which country won the first ever soccer World Cup in 1930?", "Uruguay", "6", 4),
    ("What is the largest lake in Africa?", "Lake Victoria", "3", 2),
    ("The Taj Mahal is located in which Indian city?", "Agra", "3", 2),
    ("Which Dutch graphic artist, initials M C, was a creator of optical illusions?", "Escher", "2", 1),
    ("La Giaconda is better known as what?", "Mona Lisa", "2", 3),
    ("What is the heaviest organ in the human body?", "The Liver", "1", 4),
    ("Who discovered penicillin?", "Alexander Fleming", "1", 3),
    ("Hematology is a branch of medicine involving the study of what?", "Blood", "1", 4),
];

pub async fn spawn_app() -> TestApp {
    spawn_app_with_page_size(10).await
}

/// Spawns the app on a random port, backed by a seeded in-memory SQLite database.
pub async fn spawn_app_with_page_size(questions_per_page: i64) -> TestApp {
    sqlx::any::install_default_drivers();

    // A single, never-recycled connection keeps the in-memory database alive.
    let pool = AnyPoolOptions::new()
        .max_connections(1)
        .idle_timeout(None::<Duration>)
        .max_lifetime(None::<Duration>)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory SQLite database");

    create_schema(&pool).await;
    seed(&pool).await;

    let config = Config {
        database_url: "sqlite::memory:".to_string(),
        rust_log: "error".to_string(),
        bind_addr: "127.0.0.1:0".parse().unwrap(),
        questions_per_page,
        quiz_seed: Some(42),
        log_dir: "logs".to_string(),
        db_max_connections: 1,
    };

    let state = AppState::new(pool.clone(), config);
    let app = routes::create_router(state);

    // Bind to port 0 to get a random available port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");

    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    TestApp { address, pool }
}

async fn create_schema(pool: &AnyPool) {
    sqlx::query(
        "CREATE TABLE categories (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            type TEXT NOT NULL
        )",
    )
    .execute(pool)
    .await
    .unwrap();

    sqlx::query(
        "CREATE TABLE questions (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            question TEXT NOT NULL,
            answer TEXT NOT NULL,
            category TEXT NOT NULL,
            difficulty INTEGER NOT NULL
        )",
    )
    .execute(pool)
    .await
    .unwrap();
}

async fn seed(pool: &AnyPool) {
    for label in CATEGORIES {
        sqlx::query("INSERT INTO categories (type) VALUES ($1)")
            .bind(label)
            .execute(pool)
            .await
            .unwrap();
    }

    for (question, answer, category, difficulty) in QUESTIONS {
        sqlx::query("INSERT INTO questions (question, answer, category, difficulty) VALUES ($1, $2, $3, $4)")
            .bind(question)
            .bind(answer)
            .bind(category)
            .bind(difficulty)
            .execute(pool)
            .await
            .unwrap();
    }
}

/// Asserts the fixed `{success, error, message}` error body.
pub async fn assert_error_contract(response: reqwest::Response, code: u16, message: &str) {
    assert_eq!(response.status().as_u16(), code);
    let body: serde_json::Value = response.json().await.expect("error body is not JSON");
    assert_eq!(
        body,
        serde_json::json!({"success": false, "error": code, "message": message})
    );
}

pub fn ids(body: &serde_json::Value) -> Vec<i64> {
    body["questions"]
        .as_array()
        .expect("questions array")
        .iter()
        .map(|q| q["id"].as_i64().unwrap())
        .collect()
}
