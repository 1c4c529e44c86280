use gloo_storage::{LocalStorage, Storage};

/// Durable localStorage slot holding the bearer credential.
pub const TOKEN_KEY: &str = "chronos_token";

/// Dumb, durable string slot for the credential. No expiry or validation
/// logic lives here; callers decide when a token is stale.
pub struct CredentialStore;

impl CredentialStore {
    /// Current token, or `None` when signed out or storage is unavailable.
    #[must_use]
    pub fn get() -> Option<String> {
        LocalStorage::get::<String>(TOKEN_KEY)
            .ok()
            .filter(|token| !token.is_empty())
    }

    /// Persist a token, replacing any prior value.
    pub fn set(token: &str) {
        if let Err(err) = LocalStorage::set(TOKEN_KEY, token) {
            log::warn!("failed to persist credential: {err}");
        }
    }

    /// Remove the token; subsequent reads return `None`.
    pub fn clear() {
        LocalStorage::delete(TOKEN_KEY);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn set_get_clear_round_trip() {
        CredentialStore::set("tok1");
        assert_eq!(CredentialStore::get().as_deref(), Some("tok1"));

        CredentialStore::set("tok2");
        assert_eq!(CredentialStore::get().as_deref(), Some("tok2"));

        CredentialStore::clear();
        assert_eq!(CredentialStore::get(), None);
    }
}
