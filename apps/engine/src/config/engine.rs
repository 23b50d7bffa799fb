use std::env;

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::domain::rules::{MAX_SEATED, MIN_SEATED};
use crate::error::AppError;

const DEFAULT_LOG_FILTER: &str = "info";

/// Engine settings read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Fixed dealing seed; `None` deals from an OS-seeded generator.
    pub deal_seed: Option<u64>,
    pub max_players: usize,
    pub log_filter: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            deal_seed: None,
            max_players: MAX_SEATED,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl EngineConfig {
    /// Read `DOKO_DEAL_SEED`, `DOKO_MAX_PLAYERS` and `DOKO_LOG`.
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            deal_seed: deal_seed()?,
            max_players: max_players()?,
            log_filter: env::var("DOKO_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string()),
        })
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.deal_seed = Some(seed);
        self
    }

    /// Generator for the next deal.
    pub fn dealing_rng(&self) -> ChaCha20Rng {
        match self.deal_seed {
            Some(seed) => ChaCha20Rng::seed_from_u64(seed),
            None => ChaCha20Rng::from_os_rng(),
        }
    }
}

fn deal_seed() -> Result<Option<u64>, AppError> {
    match optional_var("DOKO_DEAL_SEED")? {
        None => Ok(None),
        Some(raw) => raw.trim().parse::<u64>().map(Some).map_err(|_| {
            AppError::config(format!("DOKO_DEAL_SEED must be an unsigned integer, got '{raw}'"))
        }),
    }
}

fn max_players() -> Result<usize, AppError> {
    let Some(raw) = optional_var("DOKO_MAX_PLAYERS")? else {
        return Ok(MAX_SEATED);
    };
    let value = raw.trim().parse::<usize>().map_err(|_| {
        AppError::config(format!("DOKO_MAX_PLAYERS must be a number, got '{raw}'"))
    })?;
    if !(MIN_SEATED..=MAX_SEATED).contains(&value) {
        return Err(AppError::config(format!(
            "DOKO_MAX_PLAYERS must be between {MIN_SEATED} and {MAX_SEATED}, got {value}"
        )));
    }
    Ok(value)
}

/// Unset is fine; non-unicode content is not.
fn optional_var(name: &str) -> Result<Option<String>, AppError> {
    match env::var(name) {
        Ok(value) => Ok(Some(value)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(err) => Err(err.into()),
    }
}
