//! Signed-in session. Passed explicitly to everything that talks to the
//! backend instead of living in a global.

use super::UserInfo;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: UserInfo,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
}

impl Session {
    /// Value for the `Authorization` header.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }

    pub fn user_id(&self) -> &str {
        &self.user.id
    }

    /// Sessions without an expiry are valid until the backend says otherwise.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.map_or(false, |exp| now >= exp)
    }
}

/// Persistent mirror of the session (browser storage in the console).
pub trait SessionStore {
    fn load(&self) -> Option<Session>;
    fn save(&self, session: &Session);
    fn clear(&self);

    /// Loads the stored session, dropping it when it has expired.
    fn restore(&self, now: DateTime<Utc>) -> Option<Session> {
        match self.load() {
            Some(s) if s.is_expired(now) => {
                log::info!("stored session expired at {:?}, clearing", s.expires_at);
                self.clear();
                None
            }
            other => other,
        }
    }
}

#[derive(Debug, Default)]
pub struct MemorySessionStore {
    inner: RefCell<Option<Session>>,
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Option<Session> {
        self.inner.borrow().clone()
    }

    fn save(&self, session: &Session) {
        *self.inner.borrow_mut() = Some(session.clone());
    }

    fn clear(&self) {
        *self.inner.borrow_mut() = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::auth::{PartnerRole, SignInResponse};
    use chrono::{Duration, TimeZone};

    fn user() -> UserInfo {
        UserInfo {
            id: "u-1".into(),
            email: "ops@partner.vn".into(),
            full_name: None,
            role: PartnerRole::Underwriter,
            partner_id: Some("p-1".into()),
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 8, 0, 0).unwrap()
    }

    #[test]
    fn test_expires_in_becomes_absolute() {
        let resp = SignInResponse {
            token: "t".into(),
            user: user(),
            expires_at: None,
            expires_in: Some(3600),
        };
        let session = resp.into_session(now());
        assert_eq!(session.expires_at, Some(now() + Duration::hours(1)));
        assert_eq!(session.bearer(), "Bearer t");
        assert!(!session.is_expired(now()));
        assert!(session.is_expired(now() + Duration::hours(1)));
    }

    #[test]
    fn test_restore_clears_expired_session() {
        let store = MemorySessionStore::default();
        store.save(&Session {
            token: "old".into(),
            user: user(),
            expires_at: Some(now() - Duration::minutes(1)),
        });
        assert_eq!(store.restore(now()), None);
        assert_eq!(store.load(), None);
    }

    #[test]
    fn test_restore_keeps_open_ended_session() {
        let store = MemorySessionStore::default();
        let session = Session {
            token: "tok".into(),
            user: user(),
            expires_at: None,
        };
        store.save(&session);
        assert_eq!(store.restore(now()), Some(session));
    }
}
