//! Session state and its durable copy.

use std::cell::RefCell;
use std::rc::Rc;

/// Storage keys shared by every `SessionStorage` backed by a key/value store
pub const TOKEN_KEY: &str = "token";
pub const EMAIL_KEY: &str = "email";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Session {
    #[default]
    Anonymous,
    Authenticated { token: String, email: String },
}

impl Session {
    pub fn authenticated(token: impl Into<String>, email: impl Into<String>) -> Self {
        let token = token.into();
        if token.is_empty() {
            return Session::Anonymous;
        }
        Session::Authenticated {
            token,
            email: email.into(),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated { .. })
    }

    pub fn token(&self) -> Option<&str> {
        match self {
            Session::Authenticated { token, .. } => Some(token),
            Session::Anonymous => None,
        }
    }

    pub fn email(&self) -> &str {
        match self {
            Session::Authenticated { email, .. } => email,
            Session::Anonymous => "",
        }
    }
}

/// Token + email as persisted across reloads
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredSession {
    pub token: String,
    pub email: String,
}

impl From<StoredSession> for Session {
    fn from(stored: StoredSession) -> Self {
        Session::authenticated(stored.token, stored.email)
    }
}

/// Durable session storage (browser localStorage in the web UI)
pub trait SessionStorage {
    fn load(&self) -> Option<StoredSession>;
    fn save(&self, session: &StoredSession);
    fn clear(&self);
}

/// In-memory storage; clones share the same slot.
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStorage {
    slot: Rc<RefCell<Option<StoredSession>>>,
}

impl MemorySessionStorage {
    pub fn with_session(token: &str, email: &str) -> Self {
        let storage = Self::default();
        storage.save(&StoredSession {
            token: token.to_string(),
            email: email.to_string(),
        });
        storage
    }
}

impl SessionStorage for MemorySessionStorage {
    fn load(&self) -> Option<StoredSession> {
        self.slot.borrow().clone()
    }

    fn save(&self, session: &StoredSession) {
        *self.slot.borrow_mut() = Some(session.clone());
    }

    fn clear(&self) {
        self.slot.borrow_mut().take();
    }
}
