use axum::extract::FromRef;
use sqlx::AnyPool;

use crate::{config::Config, utils::random::SharedRng};

#[derive(Clone)]
pub struct AppState {
    pub pool: AnyPool,
    pub config: Config,
    pub rng: SharedRng,
}

impl AppState {
    /// Builds the state, seeding the quiz RNG from `config.quiz_seed`.
    pub fn new(pool: AnyPool, config: Config) -> Self {
        let rng = SharedRng::new(config.quiz_seed);
        Self { pool, config, rng }
    }
}

impl FromRef<AppState> for AnyPool {
    fn from_ref(state: &AppState) -> Self {
        state.pool.clone()
    }
}

impl FromRef<AppState> for Config {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}

impl FromRef<AppState> for SharedRng {
    fn from_ref(state: &AppState) -> Self {
        state.rng.clone()
    }
}
