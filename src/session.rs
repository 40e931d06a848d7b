use rand::Rng;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Mutex, MutexGuard};
use std::time::{Duration, Instant};

use crate::selection::SelectionState;

pub const SESSION_COOKIE: &str = "atoms_session";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionId(String);

impl SessionId {
    fn generate() -> Self {
        let token: u128 = rand::thread_rng().gen();
        SessionId(format!("{token:032x}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `Set-Cookie` value binding the browser to this session.
    pub fn cookie(&self) -> String {
        format!("{SESSION_COOKIE}={}; Path=/; HttpOnly; SameSite=Strict", self.0)
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Pull the session token out of a raw `Cookie` header.
pub fn session_token(cookie_header: &str) -> Option<&str> {
    cookie_header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .map(|(_, value)| value.trim())
        .filter(|value| !value.is_empty())
}

/// Sessions idle longer than this are dropped.
pub const DEFAULT_IDLE_TTL: Duration = Duration::from_secs(30 * 60);
/// Upper bound on live sessions; the least recently seen one is evicted past it.
pub const DEFAULT_MAX_SESSIONS: usize = 1024;

#[derive(Debug)]
struct Session {
    selection: SelectionState,
    last_seen: Instant,
}

impl Session {
    fn new() -> Self {
        Session {
            selection: SelectionState::new(),
            last_seen: Instant::now(),
        }
    }
}

/// Owner of every browser session's selection.
#[derive(Debug)]
pub struct SessionStore {
    sessions: Mutex<HashMap<SessionId, Session>>,
    max_sessions: usize,
    idle_ttl: Duration,
}

impl Default for SessionStore {
    fn default() -> Self {
        SessionStore::with_limits(DEFAULT_MAX_SESSIONS, DEFAULT_IDLE_TTL)
    }
}

impl SessionStore {
    pub fn new() -> Self {
        SessionStore::default()
    }

    pub fn with_limits(max_sessions: usize, idle_ttl: Duration) -> Self {
        SessionStore {
            sessions: Mutex::new(HashMap::new()),
            max_sessions: max_sessions.max(1),
            idle_ttl,
        }
    }

    /// Find the session named by the cookie header, or open a new empty one.
    /// The flag is true when a new session was created.
    pub fn resolve(&self, cookie_header: Option<&str>) -> (SessionId, bool) {
        let now = Instant::now();
        let mut sessions = self.lock();
        self.expire(&mut sessions, now);

        if let Some(token) = cookie_header.and_then(session_token) {
            let id = SessionId(token.to_string());
            if let Some(session) = sessions.get_mut(&id) {
                session.last_seen = now;
                return (id, false);
            }
        }

        while sessions.len() >= self.max_sessions {
            let oldest = sessions
                .iter()
                .min_by_key(|(_, session)| session.last_seen)
                .map(|(id, _)| id.clone());
            match oldest {
                Some(id) => {
                    sessions.remove(&id);
                    log::debug!("Evicted session {id}.");
                }
                None => break,
            }
        }

        let mut id = SessionId::generate();
        while sessions.contains_key(&id) {
            id = SessionId::generate();
        }
        sessions.insert(id.clone(), Session::new());
        log::debug!("Opened session {id}.");
        (id, true)
    }

    /// Run `f` against the selection of session `id` while holding the lock.
    pub fn with_selection<T>(&self, id: &SessionId, f: impl FnOnce(&mut SelectionState) -> T) -> T {
        let mut sessions = self.lock();
        let session = sessions.entry(id.clone()).or_insert_with(Session::new);
        session.last_seen = Instant::now();
        f(&mut session.selection)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn expire(&self, sessions: &mut HashMap<SessionId, Session>, now: Instant) {
        let before = sessions.len();
        sessions.retain(|_, session| now.duration_since(session.last_seen) <= self.idle_ttl);
        let dropped = before - sessions.len();
        if dropped > 0 {
            log::debug!("Expired {dropped} idle session(s).");
        }
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<SessionId, Session>> {
        // selections are plain vectors, a panicked holder cannot leave one half-written
        self.sessions.lock().unwrap_or_else(|e| e.into_inner())
    }
}
