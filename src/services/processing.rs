// src/services/processing.rs
//! Decorative processing pipeline. The progress bar is driven by a timer and
//! is unrelated to any real work.

use serde::Serialize;
use std::time::Duration;

use crate::error::AppError;
use crate::session::{SessionId, SessionStore};

pub const PIPELINE_STEPS: [&str; 5] = [
    "🎵 Audio Upload",
    "📝 Transcription",
    "🧠 Content Analysis",
    "✍️ Content Generation",
    "✅ Ready for Download",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ProcessingState {
    #[default]
    Idle,
    Running {
        percent: u8,
    },
    Complete,
}

impl ProcessingState {
    pub fn percent(self) -> u8 {
        match self {
            ProcessingState::Idle => 0,
            ProcessingState::Running { percent } => percent,
            ProcessingState::Complete => 100,
        }
    }

    pub fn status_label(self) -> &'static str {
        match self {
            ProcessingState::Idle => "idle",
            ProcessingState::Running { .. } => "running",
            ProcessingState::Complete => "complete",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StepStatus {
    Done,
    /// Waiting for the user to press "Start Processing".
    Actionable,
    Running,
    Pending,
}

#[derive(Debug, Clone, Serialize)]
pub struct PipelineStep {
    pub label: &'static str,
    pub status: StepStatus,
}

/// Step statuses for a session that has an input. Only the transcription
/// step ever moves; the later steps stay pending.
pub fn pipeline(state: ProcessingState) -> Vec<PipelineStep> {
    PIPELINE_STEPS
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let status = match (i, state) {
                (0, _) => StepStatus::Done,
                (1, ProcessingState::Idle) => StepStatus::Actionable,
                (1, ProcessingState::Running { .. }) => StepStatus::Running,
                (1, ProcessingState::Complete) => StepStatus::Done,
                _ => StepStatus::Pending,
            };
            PipelineStep { label, status }
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartOutcome {
    Started,
    AlreadyRunning,
    NoInput,
}

/// Starts the progress animation for a session. The bar advances one percent
/// per `tick` in a background task.
pub async fn start(
    store: &SessionStore,
    session_id: SessionId,
    tick: Duration,
) -> Result<StartOutcome, AppError> {
    let (outcome, run) = store
        .update(&session_id, |s| {
            if !s.input.is_present() {
                (StartOutcome::NoInput, s.processing_run)
            } else if matches!(s.processing, ProcessingState::Running { .. }) {
                (StartOutcome::AlreadyRunning, s.processing_run)
            } else {
                s.processing_run += 1;
                s.processing = ProcessingState::Running { percent: 0 };
                (StartOutcome::Started, s.processing_run)
            }
        })
        .await
        .ok_or(AppError::SessionNotFound(session_id))?;

    if outcome == StartOutcome::Started {
        tracing::info!(session_id = %session_id, run, "processing animation started");
        tokio::spawn(advance(store.clone(), session_id, tick, run));
    }
    Ok(outcome)
}

async fn advance(store: SessionStore, session_id: SessionId, tick: Duration, run: u64) {
    for percent in 1..=100u8 {
        tokio::time::sleep(tick).await;
        let still_running = store
            .update(&session_id, |s| match s.processing {
                ProcessingState::Running { .. } if s.processing_run == run => {
                    s.processing = if percent == 100 {
                        ProcessingState::Complete
                    } else {
                        ProcessingState::Running { percent }
                    };
                    true
                }
                // Input was replaced, cleared or restarted mid-run.
                _ => false,
            })
            .await
            .unwrap_or(false);

        if !still_running {
            tracing::debug!(session_id = %session_id, percent, "processing animation abandoned");
            return;
        }
    }
    tracing::info!(session_id = %session_id, "processing animation complete");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::intake::{InputSource, VideoLinkReference};

    async fn session_with_input(store: &SessionStore) -> SessionId {
        let id = store.create().await.id;
        store
            .update(&id, |s| {
                s.set_input(InputSource::Link(VideoLinkReference {
                    url: "https://youtu.be/abc123".into(),
                }))
            })
            .await
            .unwrap();
        id
    }

    #[test]
    fn idle_pipeline_offers_transcription() {
        let steps = pipeline(ProcessingState::Idle);
        let statuses: Vec<_> = steps.iter().map(|s| s.status).collect();
        assert_eq!(
            statuses,
            vec![
                StepStatus::Done,
                StepStatus::Actionable,
                StepStatus::Pending,
                StepStatus::Pending,
                StepStatus::Pending
            ]
        );
    }

    #[test]
    fn complete_pipeline_only_finishes_transcription() {
        let steps = pipeline(ProcessingState::Complete);
        assert_eq!(steps[1].status, StepStatus::Done);
        assert_eq!(steps[2].status, StepStatus::Pending);
        assert_eq!(steps[4].label, "✅ Ready for Download");
    }

    #[tokio::test]
    async fn start_runs_to_completion() {
        let store = SessionStore::new();
        let id = session_with_input(&store).await;

        let outcome = start(&store, id, Duration::from_millis(1)).await.unwrap();
        assert_eq!(outcome, StartOutcome::Started);

        let mut state = store.get(&id).await.unwrap().processing;
        for _ in 0..500 {
            if state == ProcessingState::Complete {
                break;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
            state = store.get(&id).await.unwrap().processing;
        }
        assert_eq!(state, ProcessingState::Complete);
        assert_eq!(state.percent(), 100);
    }

    #[tokio::test]
    async fn second_start_while_running_is_a_no_op() {
        let store = SessionStore::new();
        let id = session_with_input(&store).await;

        assert_eq!(
            start(&store, id, Duration::from_secs(60)).await.unwrap(),
            StartOutcome::Started
        );
        assert_eq!(
            start(&store, id, Duration::from_secs(60)).await.unwrap(),
            StartOutcome::AlreadyRunning
        );
    }

    #[tokio::test]
    async fn start_without_input_does_nothing() {
        let store = SessionStore::new();
        let id = store.create().await.id;
        assert_eq!(
            start(&store, id, Duration::from_millis(1)).await.unwrap(),
            StartOutcome::NoInput
        );
        assert_eq!(store.get(&id).await.unwrap().processing, ProcessingState::Idle);
    }

    #[tokio::test]
    async fn clearing_input_abandons_the_run() {
        let store = SessionStore::new();
        let id = session_with_input(&store).await;
        start(&store, id, Duration::from_millis(20)).await.unwrap();
        store.update(&id, |s| s.set_input(InputSource::None)).await.unwrap();

        tokio::time::sleep(Duration::from_millis(60)).await;
        assert_eq!(store.get(&id).await.unwrap().processing, ProcessingState::Idle);
    }

    #[tokio::test]
    async fn restarted_run_is_not_advanced_by_the_old_task() {
        let store = SessionStore::new();
        let id = session_with_input(&store).await;
        start(&store, id, Duration::from_millis(20)).await.unwrap();
        tokio::time::sleep(Duration::from_millis(50)).await;

        store
            .update(&id, |s| {
                s.set_input(InputSource::Link(VideoLinkReference {
                    url: "https://youtu.be/xyz789".into(),
                }))
            })
            .await
            .unwrap();
        assert_eq!(
            start(&store, id, Duration::from_secs(60)).await.unwrap(),
            StartOutcome::Started
        );

        // The first task keeps ticking every 20ms but must not touch the new run.
        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(
            store.get(&id).await.unwrap().processing,
            ProcessingState::Running { percent: 0 }
        );
    }

    #[tokio::test]
    async fn unknown_session_is_an_error() {
        let store = SessionStore::new();
        let err = start(&store, uuid::Uuid::new_v4(), Duration::from_millis(1))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::SessionNotFound(_)));
    }
}
