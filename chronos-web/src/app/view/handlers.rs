#[cfg(target_arch = "wasm32")]
use serde::Serialize;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen_futures::spawn_local;
#[cfg(target_arch = "wasm32")]
use yew::prelude::*;
#[cfg(target_arch = "wasm32")]
use yew_router::prelude::Navigator;

#[cfg(target_arch = "wasm32")]
use chronos_core::api::{BanRequest, CredentialRequest, LookupRequest, PlanActivateRequest};
#[cfg(target_arch = "wasm32")]
use chronos_core::view::ViewId;

#[cfg(target_arch = "wasm32")]
use crate::api::ApiClient;
#[cfg(target_arch = "wasm32")]
use crate::router::Route;
#[cfg(target_arch = "wasm32")]
use crate::session::{CredentialStore, SessionState, SupportChannel, refresh_identity, sign_out};

/// Every user action in the shell, one callback per operation. Handlers
/// catch at the boundary and write failures into the form-scoped toast for
/// the view that triggered them.
#[cfg(target_arch = "wasm32")]
#[derive(Clone)]
pub struct AppHandlers {
    pub navigate: Callback<ViewId>,
    pub toggle_sidebar: Callback<()>,
    pub login: Callback<(String, String)>,
    pub register: Callback<(String, String)>,
    pub logout: Callback<()>,
    pub refresh_profile: Callback<()>,
    pub copy_token: Callback<()>,
    pub resolve_support: Callback<()>,
    pub open_docs: Callback<()>,
    pub admin_lookup: Callback<LookupRequest>,
    pub admin_activate: Callback<PlanActivateRequest>,
    pub admin_ban: Callback<(String, BanRequest)>,
    pub admin_unban: Callback<String>,
}

#[cfg(target_arch = "wasm32")]
impl AppHandlers {
    #[must_use]
    pub fn new(session: &SessionState, navigator: Option<Navigator>) -> Self {
        Self {
            navigate: build_navigate(navigator.clone()),
            toggle_sidebar: build_toggle_sidebar(session),
            login: build_credentials(session, navigator.clone(), AuthKind::Login),
            register: build_credentials(session, navigator.clone(), AuthKind::Register),
            logout: build_logout(session, navigator),
            refresh_profile: build_refresh_profile(session),
            copy_token: build_copy_token(session),
            resolve_support: build_resolve_support(session),
            open_docs: Callback::from(|()| crate::dom::open_in_new_tab("/docs")),
            admin_lookup: build_admin_lookup(session),
            admin_activate: build_admin_activate(session),
            admin_ban: build_admin_ban(session),
            admin_unban: build_admin_unban(session),
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn build_navigate(navigator: Option<Navigator>) -> Callback<ViewId> {
    Callback::from(move |view: ViewId| {
        if let Some(nav) = navigator.as_ref() {
            nav.push(&Route::from_view(view));
        }
    })
}

#[cfg(target_arch = "wasm32")]
fn build_toggle_sidebar(session: &SessionState) -> Callback<()> {
    let sidebar_open = session.sidebar_open.clone();
    Callback::from(move |()| sidebar_open.set(!*sidebar_open))
}

#[cfg(target_arch = "wasm32")]
#[derive(Clone, Copy)]
enum AuthKind {
    Login,
    Register,
}

#[cfg(target_arch = "wasm32")]
fn build_credentials(
    session: &SessionState,
    navigator: Option<Navigator>,
    kind: AuthKind,
) -> Callback<(String, String)> {
    let toast = session.auth_toast.clone();
    let identity = session.identity.clone();
    Callback::from(move |(email, password): (String, String)| {
        toast.set(String::new());
        let request = CredentialRequest::new(&email, &password);
        if let Err(err) = request.validate() {
            toast.set(format!("Error: {err}"));
            return;
        }

        let toast = toast.clone();
        let identity = identity.clone();
        let navigator = navigator.clone();
        spawn_local(async move {
            let client = ApiClient::anonymous();
            let granted = match kind {
                AuthKind::Login => client.login(&request).await,
                AuthKind::Register => client.register(&request).await,
            };
            match granted {
                Ok(grant) => {
                    CredentialStore::set(&grant.access_token);
                    toast.set(String::from("Token stored."));
                    if let Err(err) = refresh_identity(identity).await {
                        toast.set(format!("Error: {err}"));
                        return;
                    }
                    if let Some(nav) = navigator.as_ref() {
                        nav.push(&Route::Account);
                    }
                }
                Err(err) => toast.set(format!("Error: {err}")),
            }
        });
    })
}

#[cfg(target_arch = "wasm32")]
fn build_logout(session: &SessionState, navigator: Option<Navigator>) -> Callback<()> {
    let identity = session.identity.clone();
    let auth_toast = session.auth_toast.clone();
    let sidebar_open = session.sidebar_open.clone();
    Callback::from(move |()| {
        sign_out(&identity);
        auth_toast.set(String::from("Signed out."));
        sidebar_open.set(false);
        if let Some(nav) = navigator.as_ref() {
            nav.push(&Route::Login);
        }
    })
}

#[cfg(target_arch = "wasm32")]
fn build_refresh_profile(session: &SessionState) -> Callback<()> {
    let identity = session.identity.clone();
    let toast = session.account_toast.clone();
    Callback::from(move |()| {
        toast.set(String::new());
        let identity = identity.clone();
        let toast = toast.clone();
        spawn_local(async move {
            // Transient failures surface here and only here; the session
            // itself is left intact.
            if let Err(err) = refresh_identity(identity).await {
                toast.set(format!("Error: {err}"));
            }
        });
    })
}

#[cfg(target_arch = "wasm32")]
fn build_copy_token(session: &SessionState) -> Callback<()> {
    let toast = session.account_toast.clone();
    Callback::from(move |()| {
        let toast = toast.clone();
        let token = CredentialStore::get();
        spawn_local(async move {
            match token.as_deref() {
                Some(value) => match crate::dom::clipboard_write(value).await {
                    Ok(()) => toast.set(String::from("Token copied.")),
                    Err(_) => toast.set(format!("Copy failed. Token: {}", masked_token(token.as_deref()))),
                },
                None => toast.set(format!("Copy failed. Token: {}", masked_token(None))),
            }
        });
    })
}

#[cfg(target_arch = "wasm32")]
fn build_resolve_support(session: &SessionState) -> Callback<()> {
    let support = session.support.clone();
    Callback::from(move |()| {
        let support = support.clone();
        spawn_local(async move {
            match ApiClient::anonymous().support_link().await {
                Ok(link) => match link.configured() {
                    Some(url) => support.set(SupportChannel::Configured(url.to_string())),
                    None => support.set(SupportChannel::Unconfigured),
                },
                Err(err) => {
                    // An unconfigured channel is a valid state, not an error.
                    log::warn!("support link resolution failed: {err}");
                    support.set(SupportChannel::Unconfigured);
                }
            }
        });
    })
}

#[cfg(target_arch = "wasm32")]
fn admin_call<T, F>(session: &SessionState, run: F)
where
    T: Serialize + 'static,
    F: std::future::Future<Output = Result<T, chronos_core::ApiError>> + 'static,
{
    let toast = session.admin_toast.clone();
    let output = session.admin_output.clone();
    toast.set(String::new());
    output.set(String::from("{}"));
    spawn_local(async move {
        match run.await {
            Ok(body) => {
                output.set(serde_json::to_string_pretty(&body).unwrap_or_default());
            }
            Err(err) => toast.set(format!("Error: {err}")),
        }
    });
}

#[cfg(target_arch = "wasm32")]
fn build_admin_lookup(session: &SessionState) -> Callback<LookupRequest> {
    let session = session.clone();
    Callback::from(move |request: LookupRequest| {
        let toast = session.admin_toast.clone();
        if let Err(err) = request.validate() {
            toast.set(format!("Error: {err}"));
            return;
        }
        let target = session.admin_target.clone();
        let output = session.admin_output.clone();
        toast.set(String::new());
        output.set(String::from("{}"));
        spawn_local(async move {
            match ApiClient::new(CredentialStore::get()).lookup_user(&request).await {
                Ok(found) => {
                    target.set(found.user_id.clone());
                    output.set(serde_json::to_string_pretty(&found).unwrap_or_default());
                }
                Err(err) => toast.set(format!("Error: {err}")),
            }
        });
    })
}

#[cfg(target_arch = "wasm32")]
fn build_admin_activate(session: &SessionState) -> Callback<PlanActivateRequest> {
    let session = session.clone();
    Callback::from(move |request: PlanActivateRequest| {
        if let Err(err) = request.validate() {
            session.admin_toast.set(format!("Error: {err}"));
            return;
        }
        admin_call(&session, async move {
            ApiClient::new(CredentialStore::get())
                .activate_plan(&request)
                .await
        });
    })
}

#[cfg(target_arch = "wasm32")]
fn build_admin_ban(session: &SessionState) -> Callback<(String, BanRequest)> {
    let session = session.clone();
    Callback::from(move |(user_id, request): (String, BanRequest)| {
        let user_id = user_id.trim().to_string();
        if user_id.is_empty() {
            session.admin_toast.set(String::from("Error: Provide a user id"));
            return;
        }
        admin_call(&session, async move {
            ApiClient::new(CredentialStore::get())
                .ban_user(&user_id, &request)
                .await
        });
    })
}

#[cfg(target_arch = "wasm32")]
fn build_admin_unban(session: &SessionState) -> Callback<String> {
    let session = session.clone();
    Callback::from(move |user_id: String| {
        let user_id = user_id.trim().to_string();
        if user_id.is_empty() {
            session.admin_toast.set(String::from("Error: Provide a user id"));
            return;
        }
        admin_call(&session, async move {
            ApiClient::new(CredentialStore::get()).unban_user(&user_id).await
        });
    })
}

/// Clipboard fallback text: enough of the token to recognize it, never the
/// whole credential.
#[must_use]
pub fn masked_token(token: Option<&str>) -> String {
    match token {
        Some(value) if !value.is_empty() => {
            let head: String = value.chars().take(20).collect();
            if value.chars().count() > 20 {
                format!("{head}…")
            } else {
                head
            }
        }
        _ => String::from("(empty)"),
    }
}

#[cfg(test)]
mod tests {
    use super::masked_token;

    #[test]
    fn masked_token_truncates_long_credentials() {
        let token = "a".repeat(40);
        assert_eq!(masked_token(Some(&token)), format!("{}…", "a".repeat(20)));
    }

    #[test]
    fn masked_token_keeps_short_values_whole() {
        assert_eq!(masked_token(Some("tok1")), "tok1");
    }

    #[test]
    fn masked_token_reports_an_empty_slot() {
        assert_eq!(masked_token(None), "(empty)");
        assert_eq!(masked_token(Some("")), "(empty)");
    }
}
