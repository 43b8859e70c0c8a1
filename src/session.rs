// src/session.rs
//! In-memory session store for the generator page.
//!
//! Each browser tab that opens `/generator` gets its own session id. State is
//! initialised empty, mutated by the intake/settings/processing handlers and
//! dropped when the user reloads `/generator` (new id) or the idle sweep
//! removes it.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::intake::InputSource;
use crate::models::settings::ContentSettings;
use crate::services::processing::ProcessingState;

pub type SessionId = Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Success,
    Info,
    Error,
}

/// One-shot message shown on the next render of the generator page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Success, message: message.into() }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Info, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Error, message: message.into() }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionState {
    pub id: SessionId,
    pub input: InputSource,
    pub settings: ContentSettings,
    pub processing: ProcessingState,
    /// Bumped whenever a run starts or the input changes. A progress task
    /// only writes while the generation it was spawned with is current.
    #[serde(skip)]
    pub processing_run: u64,
    #[serde(skip)]
    pub flash: Option<Notice>,
    pub created_at: DateTime<Utc>,
    pub last_seen: DateTime<Utc>,
}

impl SessionState {
    fn new() -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            input: InputSource::None,
            settings: ContentSettings::default(),
            processing: ProcessingState::Idle,
            processing_run: 0,
            flash: None,
            created_at: now,
            last_seen: now,
        }
    }

    /// Replaces the active input. Any previous processing run belongs to the
    /// old input and is reset.
    pub fn set_input(&mut self, input: InputSource) {
        self.input = input;
        self.processing = ProcessingState::Idle;
        self.processing_run += 1;
    }

    pub fn results_visible(&self) -> bool {
        self.input.is_present()
    }
}

#[derive(Clone, Default)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<SessionId, SessionState>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn create(&self) -> SessionState {
        let state = SessionState::new();
        self.sessions.write().await.insert(state.id, state.clone());
        tracing::debug!(session_id = %state.id, "session created");
        state
    }

    /// Returns a snapshot of the session and marks it as seen.
    pub async fn get(&self, id: &SessionId) -> Option<SessionState> {
        let mut sessions = self.sessions.write().await;
        let state = sessions.get_mut(id)?;
        state.last_seen = Utc::now();
        Some(state.clone())
    }

    /// Snapshot for rendering. The pending flash notice is handed out once.
    pub async fn take_for_render(&self, id: &SessionId) -> Option<SessionState> {
        let mut sessions = self.sessions.write().await;
        let state = sessions.get_mut(id)?;
        state.last_seen = Utc::now();
        let snapshot = state.clone();
        state.flash = None;
        Some(snapshot)
    }

    /// Applies `f` to the session under the write lock.
    pub async fn update<F, R>(&self, id: &SessionId, f: F) -> Option<R>
    where
        F: FnOnce(&mut SessionState) -> R,
    {
        let mut sessions = self.sessions.write().await;
        let state = sessions.get_mut(id)?;
        state.last_seen = Utc::now();
        Some(f(state))
    }

    /// Drops sessions not seen for longer than `ttl`. Returns how many went.
    pub async fn prune_idle(&self, ttl: std::time::Duration) -> usize {
        let ttl = chrono::Duration::from_std(ttl).unwrap_or_else(|_| chrono::Duration::days(36_500));
        let cutoff = Utc::now() - ttl;
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, state| state.last_seen >= cutoff);
        before - sessions.len()
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}
