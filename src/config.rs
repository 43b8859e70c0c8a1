// src/config.rs
use std::net::SocketAddr;
use std::time::Duration;

use crate::error::AppError;

/// Runtime configuration, read once at startup from the environment (and `.env`).
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    /// Request body cap for the upload route. The UI advertises the same number.
    pub max_upload_mb: u64,
    /// Delay between decorative progress-bar increments.
    pub progress_tick: Duration,
    /// Sessions untouched for longer than this are dropped by the sweeper.
    pub session_ttl: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            max_upload_mb: 200,
            progress_tick: Duration::from_millis(10),
            session_ttl: Duration::from_secs(120 * 60),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        let defaults = Self::default();

        let bind_addr = match std::env::var("BIND_ADDR") {
            Ok(raw) => raw.parse().map_err(|e| {
                AppError::Config(format!("BIND_ADDR '{raw}' is not a valid socket address: {e}"))
            })?,
            Err(_) => defaults.bind_addr,
        };

        let max_upload_mb = parse_u64("MAX_UPLOAD_MB")?.unwrap_or(defaults.max_upload_mb);
        if max_upload_mb == 0 {
            return Err(AppError::Config("MAX_UPLOAD_MB must be greater than zero".into()));
        }

        let progress_tick = parse_u64("PROGRESS_TICK_MS")?
            .map(Duration::from_millis)
            .unwrap_or(defaults.progress_tick);

        let session_ttl = match parse_u64("SESSION_TTL_MINUTES")? {
            Some(minutes) => ttl_from_minutes(minutes)?,
            None => defaults.session_ttl,
        };

        Ok(Self {
            bind_addr,
            max_upload_mb,
            progress_tick,
            session_ttl,
        })
    }

    pub fn max_upload_bytes(&self) -> usize {
        (self.max_upload_mb as usize).saturating_mul(1024 * 1024)
    }
}

fn ttl_from_minutes(minutes: u64) -> Result<Duration, AppError> {
    minutes
        .checked_mul(60)
        .map(Duration::from_secs)
        .ok_or_else(|| AppError::Config(format!("SESSION_TTL_MINUTES '{minutes}' is too large")))
}

fn parse_u64(key: &str) -> Result<Option<u64>, AppError> {
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<u64>()
            .map(Some)
            .map_err(|e| AppError::Config(format!("{key} '{raw}' is not a valid number: {e}"))),
        Err(_) => Ok(None),
    }
}
