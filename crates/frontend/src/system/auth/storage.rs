use contracts::system::auth::{Session, SessionStore};
use web_sys::window;

const SESSION_KEY: &str = "partner_console_session";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Mirrors the session into `localStorage` as JSON so it survives reloads.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageSessionStore;

impl SessionStore for LocalStorageSessionStore {
    fn load(&self) -> Option<Session> {
        let raw = get_local_storage()?.get_item(SESSION_KEY).ok()??;
        match serde_json::from_str(&raw) {
            Ok(session) => Some(session),
            Err(e) => {
                log::warn!("discarding unreadable stored session: {}", e);
                self.clear();
                None
            }
        }
    }

    fn save(&self, session: &Session) {
        let Some(storage) = get_local_storage() else {
            return;
        };
        match serde_json::to_string(session) {
            Ok(json) => {
                let _ = storage.set_item(SESSION_KEY, &json);
            }
            Err(e) => log::error!("failed to persist session: {}", e),
        }
    }

    fn clear(&self) {
        if let Some(storage) = get_local_storage() {
            let _ = storage.remove_item(SESSION_KEY);
        }
    }
}
