#[cfg(target_arch = "wasm32")]
use yew::prelude::*;

#[cfg(target_arch = "wasm32")]
use crate::api::ApiClient;
#[cfg(target_arch = "wasm32")]
use crate::session::{CredentialStore, SessionState, refresh_identity};

/// One-shot boot sequence: probe the API for the status pill, then restore
/// the session from a persisted credential when one exists.
#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_bootstrap(session: &SessionState) {
    let api_live = session.api_live.clone();
    let identity = session.identity.clone();

    use_effect_with((), move |()| {
        wasm_bindgen_futures::spawn_local(async move {
            let live = ApiClient::anonymous().health().await.is_ok();
            api_live.set(Some(live));

            if CredentialStore::get().is_some() {
                if let Err(err) = refresh_identity(identity).await {
                    // Transient failure: keep the stored credential and let
                    // the account view surface the error on demand.
                    log::warn!("boot profile refresh failed: {err}");
                }
            }
        });
        || {}
    });
}
