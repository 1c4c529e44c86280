//! Session context: the credential slot, the identity cache and the pieces
//! of shell state every component reads. Constructed once at boot through
//! [`use_session_state`] and passed by reference; all mutation goes through
//! the handler functions, never direct field writes.

pub mod credential;

pub use credential::CredentialStore;

use yew::prelude::*;

use chronos_core::error::ApiError;
use chronos_core::gate::{GateDecision, evaluate};
use chronos_core::identity::{Identity, RawProfile};

use crate::api::ApiClient;

/// Resolution state of the support contact link.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SupportChannel {
    #[default]
    Unknown,
    Configured(String),
    Unconfigured,
}

/// Shared shell state, one handle per concern.
#[derive(Clone)]
pub struct SessionState {
    /// Last-fetched profile record, replaced wholesale per fetch.
    pub identity: UseStateHandle<Option<Identity>>,
    /// Result of the boot health probe; `None` while still probing.
    pub api_live: UseStateHandle<Option<bool>>,
    pub support: UseStateHandle<SupportChannel>,
    /// Narrow-viewport navigation overlay.
    pub sidebar_open: UseStateHandle<bool>,
    /// Form-scoped status lines; errors never escape to a global handler.
    pub auth_toast: UseStateHandle<String>,
    pub account_toast: UseStateHandle<String>,
    pub admin_toast: UseStateHandle<String>,
    /// Pretty-printed body of the last admin response.
    pub admin_output: UseStateHandle<String>,
    /// Ban/unban target, filled by a successful lookup.
    pub admin_target: UseStateHandle<String>,
}

#[hook]
pub fn use_session_state() -> SessionState {
    SessionState {
        identity: use_state(|| None::<Identity>),
        api_live: use_state(|| None::<bool>),
        support: use_state(SupportChannel::default),
        sidebar_open: use_state(|| false),
        auth_toast: use_state(String::new),
        account_toast: use_state(String::new),
        admin_toast: use_state(String::new),
        admin_output: use_state(String::new),
        admin_target: use_state(String::new),
    }
}

impl SessionState {
    /// Gate decision for the current identity; derived, never cached.
    #[must_use]
    pub fn gate(&self) -> GateDecision {
        evaluate((*self.identity).as_ref())
    }
}

/// What a completed profile fetch means for the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// Fresh identity to store.
    Updated(Identity),
    /// The credential is invalid; drop it and the identity.
    SignedOut,
    /// Transient failure; the previous identity stays untouched.
    Failed(ApiError),
}

/// Classify a profile-fetch result.
///
/// Only authentication-class failures invalidate the session; a network or
/// server error must never silently clear a valid credential.
#[must_use]
pub fn refresh_decision(result: Result<RawProfile, ApiError>) -> RefreshOutcome {
    match result {
        Ok(raw) => RefreshOutcome::Updated(raw.normalize()),
        Err(err) if err.is_auth_failure() => RefreshOutcome::SignedOut,
        Err(err) => RefreshOutcome::Failed(err),
    }
}

/// Refresh the identity cache from `/me`.
///
/// Resolves to `None` without a network call when no credential is stored.
/// A logout (or credential replacement) that lands while the request is in
/// flight supersedes the response, which is then dropped.
///
/// # Errors
/// Returns the underlying [`ApiError`] for non-authentication failures; the
/// cached identity is left untouched in that case.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn refresh_identity(
    identity: UseStateHandle<Option<Identity>>,
) -> Result<Option<Identity>, ApiError> {
    let Some(token) = CredentialStore::get() else {
        identity.set(None);
        return Ok(None);
    };

    let result = ApiClient::new(Some(token.clone())).profile().await;

    if CredentialStore::get().as_deref() != Some(token.as_str()) {
        return Ok(None);
    }

    match refresh_decision(result) {
        RefreshOutcome::Updated(fresh) => {
            identity.set(Some(fresh.clone()));
            Ok(Some(fresh))
        }
        RefreshOutcome::SignedOut => {
            CredentialStore::clear();
            identity.set(None);
            Ok(None)
        }
        RefreshOutcome::Failed(err) => Err(err),
    }
}

/// Explicit logout: destroy the credential and the cached identity.
pub fn sign_out(identity: &UseStateHandle<Option<Identity>>) {
    CredentialStore::clear();
    identity.set(None);
}
