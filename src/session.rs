// src/session.rs

//! Per-session form state and the controller that moves it between the
//! collecting and submitted phases.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Local, TimeDelta};
use serde::Serialize;
use thiserror::Error;
use tokio::sync::{Mutex, RwLock};
use uuid::Uuid;

use crate::{
    builder::{self, ValidationError},
    models::survey::{RawSurveyFields, SurveyRecord},
    storage::{RecordStore, StorageError},
    views::{FormView, Page, SummaryView},
};

/// Where a session currently is in the collect → submit → display flow.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum SessionPhase {
    #[default]
    Collecting,
    Submitted {
        record: SurveyRecord,
        location: String,
    },
}

/// State owned by one respondent for the lifetime of their session.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SurveySession {
    #[serde(flatten)]
    phase: SessionPhase,
}

impl SurveySession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> &SessionPhase {
        &self.phase
    }

    pub fn is_submitted(&self) -> bool {
        matches!(self.phase, SessionPhase::Submitted { .. })
    }

    pub fn record(&self) -> Option<&SurveyRecord> {
        match &self.phase {
            SessionPhase::Submitted { record, .. } => Some(record),
            SessionPhase::Collecting => None,
        }
    }

    pub fn location(&self) -> Option<&str> {
        match &self.phase {
            SessionPhase::Submitted { location, .. } => Some(location),
            SessionPhase::Collecting => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("survey already submitted; reset before submitting again")]
    AlreadySubmitted,

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Sequences validation and persistence for a session.
/// Holds no state of its own.
#[derive(Clone)]
pub struct FormController {
    store: Arc<dyn RecordStore>,
}

impl FormController {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Handles the submit event.
    ///
    /// The session only moves to `Submitted` once the record is built and
    /// written. Any failure leaves it untouched.
    pub async fn submit(
        &self,
        session: &mut SurveySession,
        raw: RawSurveyFields,
    ) -> Result<(), SubmitError> {
        if session.is_submitted() {
            return Err(SubmitError::AlreadySubmitted);
        }

        let record = builder::build(raw)?;
        let location = self.store.write(&record).await?;

        tracing::info!(
            "Survey from '{}' stored at {}",
            record.personal_info.name,
            location
        );

        session.phase = SessionPhase::Submitted { record, location };
        Ok(())
    }

    /// Re-reads the session's record from storage, confirming the write.
    /// `None` while collecting.
    pub async fn stored_record(
        &self,
        session: &SurveySession,
    ) -> Option<Result<SurveyRecord, StorageError>> {
        let location = session.location()?;
        Some(self.store.load(location).await)
    }

    /// Handles the reset event. Always ends in `Collecting`.
    pub fn reset(&self, session: &mut SurveySession) {
        if session.is_submitted() {
            tracing::debug!("Session reset to collecting");
        }
        session.phase = SessionPhase::Collecting;
    }

    /// One render pass: a pure function of the session and the latest input.
    pub fn render(
        &self,
        session: &SurveySession,
        draft: Option<&RawSurveyFields>,
        error: Option<String>,
    ) -> Page {
        match &session.phase {
            SessionPhase::Collecting => Page::Form(FormView::new(
                draft.cloned().unwrap_or_default(),
                error,
            )),
            SessionPhase::Submitted { record, location } => {
                Page::Summary(SummaryView::new(record, location))
            }
        }
    }
}

struct SessionSlot {
    session: Arc<Mutex<SurveySession>>,
    last_seen: DateTime<Local>,
}

/// All live sessions, keyed by the id carried in the session cookie.
///
/// A session is only stored once something changes it. Sessions idle for
/// longer than `idle` are dropped on the next access to the registry.
#[derive(Clone)]
pub struct SessionRegistry {
    sessions: Arc<RwLock<HashMap<Uuid, SessionSlot>>>,
    idle: TimeDelta,
}

impl SessionRegistry {
    pub fn new(idle: TimeDelta) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            idle,
        }
    }

    /// Returns the stored session for `id`, if there is one.
    pub async fn get(&self, id: Uuid) -> Option<Arc<Mutex<SurveySession>>> {
        self.get_at(id, Local::now()).await
    }

    /// Returns the session for `id`, storing a fresh one on first use.
    pub async fn get_or_create(&self, id: Uuid) -> Arc<Mutex<SurveySession>> {
        self.get_or_create_at(id, Local::now()).await
    }

    /// A copy of the session for `id`. Unknown ids read as a new session
    /// and nothing is stored.
    pub async fn snapshot(&self, id: Uuid) -> SurveySession {
        match self.get(id).await {
            Some(session) => session.lock().await.clone(),
            None => SurveySession::new(),
        }
    }

    async fn get_at(
        &self,
        id: Uuid,
        now: DateTime<Local>,
    ) -> Option<Arc<Mutex<SurveySession>>> {
        let mut sessions = self.sessions.write().await;
        self.drop_idle(&mut sessions, now);

        let slot = sessions.get_mut(&id)?;
        slot.last_seen = now;
        Some(slot.session.clone())
    }

    async fn get_or_create_at(
        &self,
        id: Uuid,
        now: DateTime<Local>,
    ) -> Arc<Mutex<SurveySession>> {
        let mut sessions = self.sessions.write().await;
        self.drop_idle(&mut sessions, now);

        let slot = sessions.entry(id).or_insert_with(|| {
            tracing::debug!("New survey session {}", id);
            SessionSlot {
                session: Arc::new(Mutex::new(SurveySession::new())),
                last_seen: now,
            }
        });
        slot.last_seen = now;
        slot.session.clone()
    }

    fn drop_idle(&self, sessions: &mut HashMap<Uuid, SessionSlot>, now: DateTime<Local>) {
        let before = sessions.len();
        sessions.retain(|_, slot| now - slot.last_seen < self.idle);
        if sessions.len() < before {
            tracing::debug!("Dropped {} idle survey sessions", before - sessions.len());
        }
    }

    #[cfg(test)]
    pub(crate) async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}
