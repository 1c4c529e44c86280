//! Wire schema for the Chronos backend and the decode half of the API
//! client. Transport lives in the web crate; everything here is pure and
//! natively testable.

use serde::{Deserialize, Serialize};
use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::identity::Plan;

/// Body shared by `POST /auth/register` and `POST /auth/login`.
#[derive(Debug, Clone, Serialize)]
pub struct CredentialRequest {
    pub email: String,
    pub password: String,
}

impl CredentialRequest {
    #[must_use]
    pub fn new(email: &str, password: &str) -> Self {
        Self {
            email: email.trim().to_string(),
            password: password.to_string(),
        }
    }

    /// Local pre-network check mirroring the form's required fields.
    ///
    /// # Errors
    /// Returns [`ApiError::Validation`] when email or password is empty.
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.email.is_empty() {
            return Err(ApiError::Validation(String::from("Email is required")));
        }
        if self.password.is_empty() {
            return Err(ApiError::Validation(String::from("Password is required")));
        }
        Ok(())
    }
}

/// Successful auth response carrying the bearer credential.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenGrant {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
}

/// `POST /admin/users/lookup` body; one of the two selectors is required.
#[derive(Debug, Clone, Default, Serialize)]
pub struct LookupRequest {
    pub email: Option<String>,
    pub telegram_id: Option<i64>,
}

impl LookupRequest {
    /// # Errors
    /// Returns [`ApiError::Validation`] when neither selector is present.
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.email.as_deref().is_none_or(str::is_empty) && self.telegram_id.is_none() {
            return Err(ApiError::Validation(String::from(
                "Provide an email or a telegram id",
            )));
        }
        Ok(())
    }
}

/// Subset of the lookup response the admin panel operates on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookupResult {
    #[serde(default)]
    pub ok: bool,
    pub user_id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub telegram_id: Option<i64>,
    #[serde(default)]
    pub telegram_username: Option<String>,
    #[serde(default)]
    pub plan: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// `POST /admin/plan/activate` body. The server only activates paid tiers;
/// free is a trial it manages itself.
#[derive(Debug, Clone, Serialize)]
pub struct PlanActivateRequest {
    pub email: Option<String>,
    pub telegram_id: Option<i64>,
    pub plan: Plan,
    pub days: u32,
}

impl PlanActivateRequest {
    pub const DEFAULT_DAYS: u32 = 30;

    /// # Errors
    /// Returns [`ApiError::Validation`] when no selector is present or the
    /// tier is not a paid one.
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.email.as_deref().is_none_or(str::is_empty) && self.telegram_id.is_none() {
            return Err(ApiError::Validation(String::from(
                "Provide an email or a telegram id",
            )));
        }
        if !self.plan.is_paid() {
            return Err(ApiError::Validation(String::from("Use plus or premium")));
        }
        Ok(())
    }
}

/// `POST /admin/users/{id}/ban` body.
#[derive(Debug, Clone, Serialize)]
pub struct BanRequest {
    pub permanent: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl BanRequest {
    #[must_use]
    pub const fn permanent() -> Self {
        Self {
            permanent: true,
            days: None,
            reason: None,
        }
    }

    #[must_use]
    pub const fn temporary(days: u32) -> Self {
        Self {
            permanent: false,
            days: Some(days),
            reason: None,
        }
    }
}

/// Generic `{ok, ...}` acknowledgement for admin mutations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminActionOutcome {
    #[serde(default)]
    pub ok: bool,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub plan: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// `GET /api/whatsapp` response. An empty or missing url is the valid
/// "support channel not configured" state, not an error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SupportLink {
    #[serde(default)]
    pub url: String,
}

impl SupportLink {
    #[must_use]
    pub fn configured(&self) -> Option<&str> {
        let url = self.url.trim();
        (!url.is_empty()).then_some(url)
    }
}

/// Tagged error payload the backend uses for non-2xx responses.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Normalize a non-2xx response into [`ApiError::Request`].
///
/// Extracts a human-readable message from the body's `detail` or `message`
/// field; any other body shape falls back to `"HTTP <status>"`.
#[must_use]
pub fn decode_error_body(status: u16, body: &str) -> ApiError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.detail.or(parsed.message))
        .unwrap_or_else(|| format!("HTTP {status}"));
    ApiError::Request { status, message }
}

/// Decode a 2xx body into the expected type.
///
/// # Errors
/// Returns [`ApiError::MalformedResponse`] with a raw-text excerpt when the
/// body is not the expected JSON, so a broken payload degrades instead of
/// crashing the call.
pub fn decode_json<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|err| {
        let excerpt: String = body.chars().take(120).collect();
        ApiError::MalformedResponse(format!("{err}: {excerpt}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_message_prefers_detail_then_message() {
        let err = decode_error_body(409, r#"{"detail":"Email already registered"}"#);
        assert_eq!(
            err,
            ApiError::Request {
                status: 409,
                message: String::from("Email already registered"),
            }
        );

        let err = decode_error_body(400, r#"{"message":"Bad request"}"#);
        assert_eq!(
            err,
            ApiError::Request {
                status: 400,
                message: String::from("Bad request"),
            }
        );
    }

    #[test]
    fn unknown_error_shapes_fall_back_to_the_status() {
        let err = decode_error_body(502, "<html>bad gateway</html>");
        assert_eq!(
            err,
            ApiError::Request {
                status: 502,
                message: String::from("HTTP 502"),
            }
        );
        let err = decode_error_body(500, r#"{"oops":true}"#);
        assert_eq!(
            err,
            ApiError::Request {
                status: 500,
                message: String::from("HTTP 500"),
            }
        );
    }

    #[test]
    fn malformed_success_body_degrades_to_raw_text() {
        let result = decode_json::<TokenGrant>("not json at all");
        match result {
            Err(ApiError::MalformedResponse(msg)) => assert!(msg.contains("not json at all")),
            other => panic!("expected MalformedResponse, got {other:?}"),
        }
    }

    #[test]
    fn token_grant_decodes_the_auth_response() {
        let grant: TokenGrant =
            decode_json(r#"{"access_token":"tok1","token_type":"bearer"}"#).expect("decode");
        assert_eq!(grant.access_token, "tok1");
    }

    #[test]
    fn credential_request_requires_both_fields() {
        assert!(CredentialRequest::new("a@x.com", "p").validate().is_ok());
        assert!(CredentialRequest::new("  ", "p").validate().is_err());
        assert!(CredentialRequest::new("a@x.com", "").validate().is_err());
    }

    #[test]
    fn lookup_requires_a_selector() {
        assert!(LookupRequest::default().validate().is_err());
        let by_email = LookupRequest {
            email: Some(String::from("a@x.com")),
            telegram_id: None,
        };
        assert!(by_email.validate().is_ok());
        let by_tg = LookupRequest {
            email: None,
            telegram_id: Some(42),
        };
        assert!(by_tg.validate().is_ok());
    }

    #[test]
    fn activation_rejects_unpaid_tiers() {
        let req = PlanActivateRequest {
            email: Some(String::from("a@x.com")),
            telegram_id: None,
            plan: Plan::Free,
            days: PlanActivateRequest::DEFAULT_DAYS,
        };
        assert!(req.validate().is_err());

        let req = PlanActivateRequest {
            plan: Plan::Premium,
            ..req
        };
        assert!(req.validate().is_ok());
        let body = serde_json::to_value(&req).expect("serialize");
        assert_eq!(body["plan"], "premium");
        assert_eq!(body["days"], 30);
    }

    #[test]
    fn ban_bodies_match_the_admin_contract() {
        let body = serde_json::to_value(BanRequest::temporary(7)).expect("serialize");
        assert_eq!(body["permanent"], false);
        assert_eq!(body["days"], 7);

        let body = serde_json::to_value(BanRequest::permanent()).expect("serialize");
        assert_eq!(body["permanent"], true);
        assert!(body.get("days").is_none());
    }

    #[test]
    fn support_link_treats_empty_url_as_unconfigured() {
        assert!(SupportLink::default().configured().is_none());
        let link = SupportLink {
            url: String::from("  "),
        };
        assert!(link.configured().is_none());
        let link = SupportLink {
            url: String::from("https://wa.me/123"),
        };
        assert_eq!(link.configured(), Some("https://wa.me/123"));
    }
}
