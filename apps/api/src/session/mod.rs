//! In-memory chat sessions. Guests get a random id; logged-in users are keyed by username.

pub mod handlers;

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

pub const GUEST_USER: &str = "guest";
pub const DEFAULT_MAX_SESSIONS: usize = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    User,
    Elix,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub sender: Sender,
    pub msg: String,
    pub at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub user: String,
    pub history: Vec<ChatMessage>,
    pub created_at: DateTime<Utc>,
}

impl Session {
    fn new(user: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            history: Vec::new(),
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LoginStatus {
    Ok,
    Guest,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginOutcome {
    pub status: LoginStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    pub message: String,
}

/// Shared session map. Cloning shares the underlying store.
///
/// The map is bounded: once `max_sessions` are held, the oldest session is
/// evicted before a new one is added.
#[derive(Debug, Clone)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<String, Session>>>,
    max_sessions: usize,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    pub fn new() -> Self {
        Self::with_max_sessions(DEFAULT_MAX_SESSIONS)
    }

    pub fn with_max_sessions(max_sessions: usize) -> Self {
        Self {
            inner: Arc::new(RwLock::new(HashMap::new())),
            max_sessions: max_sessions.max(1),
        }
    }

    /// Inserts or replaces `id`, evicting the oldest sessions when a new id would
    /// exceed the cap.
    fn insert(&self, sessions: &mut HashMap<String, Session>, id: &str, session: Session) {
        if !sessions.contains_key(id) {
            while sessions.len() >= self.max_sessions {
                let Some(oldest) = sessions
                    .iter()
                    .min_by_key(|(_, s)| s.created_at)
                    .map(|(id, _)| id.clone())
                else {
                    break;
                };
                sessions.remove(&oldest);
                debug!("Evicted session {oldest}");
            }
        }
        sessions.insert(id.to_string(), session);
    }

    /// Empty credentials start a guest session. Valid credentials (re)start the
    /// user's session under their username. Anything else creates nothing.
    pub async fn login(
        &self,
        username: &str,
        password: &str,
        users: &HashMap<String, String>,
    ) -> LoginOutcome {
        if username.is_empty() || password.is_empty() {
            let session_id = self.create_guest().await;
            return LoginOutcome {
                status: LoginStatus::Guest,
                session_id: Some(session_id),
                message: "Guest session started".to_string(),
            };
        }

        if users.get(username).is_some_and(|expected| expected == password) {
            let mut sessions = self.inner.write().await;
            self.insert(&mut sessions, username, Session::new(username));
            drop(sessions);
            info!("User {username} logged in");
            return LoginOutcome {
                status: LoginStatus::Ok,
                session_id: Some(username.to_string()),
                message: format!("Welcome {username}"),
            };
        }

        info!("Rejected login for {username}");
        LoginOutcome {
            status: LoginStatus::Error,
            session_id: None,
            message: "Invalid credentials".to_string(),
        }
    }

    pub async fn create_guest(&self) -> String {
        let session_id = Uuid::new_v4().to_string();
        let mut sessions = self.inner.write().await;
        self.insert(&mut sessions, &session_id, Session::new(GUEST_USER));
        drop(sessions);
        debug!("Guest session {session_id} created");
        session_id
    }

    /// Returns a usable session id: a fresh guest session when none is given,
    /// or a guest session adopted under an unknown id.
    pub async fn ensure(&self, session_id: Option<&str>) -> String {
        match session_id.map(str::trim).filter(|id| !id.is_empty()) {
            None => self.create_guest().await,
            Some(id) => {
                let mut sessions = self.inner.write().await;
                if !sessions.contains_key(id) {
                    self.insert(&mut sessions, id, Session::new(GUEST_USER));
                }
                id.to_string()
            }
        }
    }

    /// Appends a message, creating a guest session if the id is unknown.
    pub async fn append(&self, session_id: &str, sender: Sender, msg: impl Into<String>) {
        let message = ChatMessage {
            sender,
            msg: msg.into(),
            at: Utc::now(),
        };
        let mut sessions = self.inner.write().await;
        if let Some(session) = sessions.get_mut(session_id) {
            session.history.push(message);
            return;
        }
        let mut session = Session::new(GUEST_USER);
        session.history.push(message);
        self.insert(&mut sessions, session_id, session);
    }

    pub async fn get(&self, session_id: &str) -> Option<Session> {
        self.inner.read().await.get(session_id).cloned()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }
}
