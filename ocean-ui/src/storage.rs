//! Session persistence in `localStorage`.

use dioxus_logger::tracing::warn;
use ocean::session::{EMAIL_KEY, TOKEN_KEY};
use ocean::{SessionStorage, StoredSession};

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LocalSessionStorage;

impl SessionStorage for LocalSessionStorage {
    fn load(&self) -> Option<StoredSession> {
        let storage = local_storage()?;
        let token = storage.get_item(TOKEN_KEY).ok().flatten()?;
        let email = storage
            .get_item(EMAIL_KEY)
            .ok()
            .flatten()
            .unwrap_or_default();
        Some(StoredSession { token, email })
    }

    fn save(&self, session: &StoredSession) {
        let Some(storage) = local_storage() else {
            warn!("LocalStorage not available, session will not survive reload");
            return;
        };
        if storage.set_item(TOKEN_KEY, &session.token).is_err()
            || storage.set_item(EMAIL_KEY, &session.email).is_err()
        {
            warn!("Failed to persist session");
        }
    }

    fn clear(&self) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(TOKEN_KEY);
            let _ = storage.remove_item(EMAIL_KEY);
        }
    }
}
