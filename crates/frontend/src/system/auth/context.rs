use chrono::Utc;
use contracts::shared::envelope::ApiFailure;
use contracts::system::auth::{PartnerRole, Session, SessionStore, UserInfo};
use leptos::prelude::*;

use super::storage::LocalStorageSessionStore;
use crate::shared::api_utils::ApiClient;

/// The signed-in session, provided once at the root.
///
/// Network code never reads the session from a global: it asks the context
/// for an [`ApiClient`] and passes that along.
#[derive(Clone, Copy)]
pub struct AuthContext {
    session: RwSignal<Option<Session>>,
}

impl AuthContext {
    /// Restores the persisted session, dropping it if it has expired.
    pub fn restore() -> Self {
        let session = LocalStorageSessionStore.restore(Utc::now());
        if let Some(s) = &session {
            log::info!("restored session for {}", s.user.email);
        }
        Self {
            session: RwSignal::new(session),
        }
    }

    pub fn session(&self) -> Option<Session> {
        self.session.get()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.with(|s| s.is_some())
    }

    /// For background tasks that may outlive the owning view.
    pub fn is_signed_in_untracked(&self) -> bool {
        self.session
            .try_with_untracked(|s| s.is_some())
            .unwrap_or(false)
    }

    pub fn user(&self) -> Option<UserInfo> {
        self.session.with(|s| s.as_ref().map(|s| s.user.clone()))
    }

    pub fn role(&self) -> Option<PartnerRole> {
        self.session.with(|s| s.as_ref().map(|s| s.user.role))
    }

    /// Client bound to the current session. Fails like a 401 when signed out
    /// or when the token has expired since it was issued.
    pub fn client(&self) -> Result<ApiClient, ApiFailure> {
        let session = self.session.get_untracked().ok_or_else(ApiFailure::unauthenticated)?;
        if session.is_expired(Utc::now()) {
            self.expire();
            return Err(ApiFailure::unauthenticated());
        }
        Ok(ApiClient::for_session(session))
    }

    pub fn sign_in(&self, session: Session) {
        LocalStorageSessionStore.save(&session);
        self.session.set(Some(session));
    }

    pub fn sign_out(&self) {
        LocalStorageSessionStore.clear();
        self.session.set(None);
    }

    /// The backend rejected the token.
    pub fn expire(&self) {
        if self.session.with_untracked(|s| s.is_some()) {
            log::info!("session rejected or expired, signing out");
            self.sign_out();
        }
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    provide_context(AuthContext::restore());
    children()
}

/// Hook to access auth state
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthProvider not found in component tree")
}
