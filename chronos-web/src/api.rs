//! HTTP transport for the Chronos backend.
//!
//! One authenticated-fetch primitive mediates every call: it attaches the
//! bearer credential, bounds the request with a timeout and normalizes all
//! failure shapes into [`ApiError`]. Response decoding is delegated to
//! `chronos-core` so it stays natively testable.

use std::pin::pin;

use futures::future::{Either, select};
use gloo_net::http::{Request, RequestBuilder, Response};
use gloo_timers::future::TimeoutFuture;
use serde::Serialize;
use serde::de::DeserializeOwned;

use chronos_core::api::{
    AdminActionOutcome, BanRequest, CredentialRequest, LookupRequest, LookupResult,
    PlanActivateRequest, SupportLink, TokenGrant, decode_error_body, decode_json,
};
use chronos_core::error::ApiError;
use chronos_core::identity::RawProfile;

/// Outbound calls are abandoned after this bound.
pub const REQUEST_TIMEOUT_MS: u32 = 10_000;

/// Canonical profile endpoint. `/auth/me` is a deprecated alias some older
/// deployments still mount; the client only ever calls the canonical path.
pub const PROFILE_PATH: &str = "/me";

/// Issues JSON requests against the backend with a snapshot of the bearer
/// credential. The client never mutates credential or identity state;
/// callers decide what to do with results.
#[derive(Debug, Clone, Default)]
pub struct ApiClient {
    token: Option<String>,
}

impl ApiClient {
    #[must_use]
    pub const fn new(token: Option<String>) -> Self {
        Self { token }
    }

    /// Unauthenticated client for public endpoints.
    #[must_use]
    pub const fn anonymous() -> Self {
        Self { token: None }
    }

    /// Liveness probe driving the header status pill.
    ///
    /// # Errors
    /// Returns [`ApiError::Network`] when the API is unreachable.
    pub async fn health(&self) -> Result<(), ApiError> {
        let response = self.execute(Request::get("/health").build()).await?;
        if response.ok() {
            return Ok(());
        }
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        Err(decode_error_body(status, &text))
    }

    /// # Errors
    /// Propagates the normalized [`ApiError`] for the register call.
    pub async fn register(&self, request: &CredentialRequest) -> Result<TokenGrant, ApiError> {
        self.post_json("/auth/register", request, false).await
    }

    /// # Errors
    /// Propagates the normalized [`ApiError`] for the login call.
    pub async fn login(&self, request: &CredentialRequest) -> Result<TokenGrant, ApiError> {
        self.post_json("/auth/login", request, false).await
    }

    /// Fetch the profile/entitlement record behind the bearer credential.
    ///
    /// # Errors
    /// Propagates the normalized [`ApiError`]; a 401/403 here means the
    /// stored credential is no longer valid.
    pub async fn profile(&self) -> Result<RawProfile, ApiError> {
        self.get_json(PROFILE_PATH, true).await
    }

    /// Resolve the support contact link; an unconfigured channel decodes to
    /// an empty [`SupportLink`], which is a valid state.
    ///
    /// # Errors
    /// Propagates the normalized [`ApiError`].
    pub async fn support_link(&self) -> Result<SupportLink, ApiError> {
        self.get_json("/api/whatsapp", false).await
    }

    /// # Errors
    /// Propagates the normalized [`ApiError`] for the admin lookup.
    pub async fn lookup_user(&self, request: &LookupRequest) -> Result<LookupResult, ApiError> {
        self.post_json("/admin/users/lookup", request, true).await
    }

    /// # Errors
    /// Propagates the normalized [`ApiError`] for the plan activation.
    pub async fn activate_plan(
        &self,
        request: &PlanActivateRequest,
    ) -> Result<AdminActionOutcome, ApiError> {
        self.post_json("/admin/plan/activate", request, true).await
    }

    /// # Errors
    /// Propagates the normalized [`ApiError`] for the ban call.
    pub async fn ban_user(
        &self,
        user_id: &str,
        request: &BanRequest,
    ) -> Result<AdminActionOutcome, ApiError> {
        self.post_json(&format!("/admin/users/{user_id}/ban"), request, true)
            .await
    }

    /// # Errors
    /// Propagates the normalized [`ApiError`] for the unban call.
    pub async fn unban_user(&self, user_id: &str) -> Result<AdminActionOutcome, ApiError> {
        let request = self
            .authorize(Request::post(&format!("/admin/users/{user_id}/unban")), true)
            .build();
        let response = self.execute(request).await?;
        Self::decode(response).await
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        requires_auth: bool,
    ) -> Result<T, ApiError> {
        let request = self.authorize(Request::get(path), requires_auth).build();
        let response = self.execute(request).await?;
        Self::decode(response).await
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        requires_auth: bool,
    ) -> Result<T, ApiError> {
        let request = self
            .authorize(Request::post(path), requires_auth)
            .header("Content-Type", "application/json")
            .body(
                serde_json::to_string(body)
                    .map_err(|err| ApiError::Validation(err.to_string()))?,
            );
        let response = self.execute(request).await?;
        Self::decode(response).await
    }

    fn authorize(&self, builder: RequestBuilder, requires_auth: bool) -> RequestBuilder {
        match bearer_header(self.token.as_deref(), requires_auth) {
            Some(value) => builder.header("Authorization", &value),
            None => builder,
        }
    }

    async fn execute(
        &self,
        request: Result<Request, gloo_net::Error>,
    ) -> Result<Response, ApiError> {
        let request = request.map_err(|err| ApiError::Network(err.to_string()))?;
        let send = pin!(request.send());
        let timeout = pin!(TimeoutFuture::new(REQUEST_TIMEOUT_MS));
        match select(send, timeout).await {
            Either::Left((result, _)) => {
                result.map_err(|err| ApiError::Network(err.to_string()))
            }
            Either::Right(((), _)) => Err(ApiError::Network(String::from("request timed out"))),
        }
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let status = response.status();
        let ok = response.ok();
        let text = response
            .text()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        if ok {
            decode_json(&text)
        } else {
            Err(decode_error_body(status, &text))
        }
    }
}

/// `Authorization` header value for a call, when one should be attached.
/// Public endpoints and anonymous clients send no credential.
fn bearer_header(token: Option<&str>, requires_auth: bool) -> Option<String> {
    match (token, requires_auth) {
        (Some(token), true) => Some(format!("Bearer {token}")),
        _ => None,
    }
}
