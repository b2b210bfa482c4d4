// src/utils/random.rs

use std::{
    collections::HashSet,
    sync::{Arc, Mutex},
};

use rand::{Rng, SeedableRng, rngs::StdRng, seq::SliceRandom};

use crate::error::AppError;

/// Process-wide quiz RNG, cloned into every handler through `AppState`.
#[derive(Clone)]
pub struct SharedRng(Arc<Mutex<StdRng>>);

impl SharedRng {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self(Arc::new(Mutex::new(rng)))
    }

    /// Locks the RNG just long enough to draw one id.
    pub fn pick_unseen(&self, candidates: &[i64], previous: &[i64]) -> Result<Option<i64>, AppError> {
        let mut rng = self
            .0
            .lock()
            .map_err(|_| AppError::InternalServerError("quiz rng mutex poisoned".to_string()))?;

        Ok(pick_unseen(candidates, previous, &mut *rng))
    }
}

/// Picks one id uniformly at random from `candidates`, skipping every id in
/// `previous`. Returns `None` once the pool is exhausted.
pub fn pick_unseen<R: Rng + ?Sized>(candidates: &[i64], previous: &[i64], rng: &mut R) -> Option<i64> {
    let seen: HashSet<i64> = previous.iter().copied().collect();

    let pool: Vec<i64> = candidates
        .iter()
        .copied()
        .filter(|id| !seen.contains(id))
        .collect();

    pool.choose(rng).copied()
}
