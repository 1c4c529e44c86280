use serde::{Deserialize, Serialize};

/// Subscription tier controlling feature gates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Plan {
    Guest,
    Free,
    Plus,
    Premium,
}

impl Plan {
    /// Parse a wire value, falling back to `Free` for unknown or missing tiers.
    #[must_use]
    pub fn from_key(key: Option<&str>) -> Self {
        match key {
            Some("guest") => Self::Guest,
            Some("plus") => Self::Plus,
            Some("premium") => Self::Premium,
            _ => Self::Free,
        }
    }

    #[must_use]
    pub const fn as_key(self) -> &'static str {
        match self {
            Self::Guest => "guest",
            Self::Free => "free",
            Self::Plus => "plus",
            Self::Premium => "premium",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Guest => "Guest",
            Self::Free => "Free",
            Self::Plus => "Plus",
            Self::Premium => "Premium",
        }
    }

    /// Paid tiers see the full radar feed.
    #[must_use]
    pub const fn is_paid(self) -> bool {
        matches!(self, Self::Plus | Self::Premium)
    }
}

/// Account standing as reported by the backend.
///
/// The `/me` payload carries either a raw `status` or a server-computed
/// `account_state`; the latter adds a `trial` variant which normalizes to
/// `Active` with [`Identity::trial`] set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    Active,
    Inactive,
    Banned,
}

impl AccountStatus {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
            Self::Banned => "Banned",
        }
    }
}

/// Visual tone for the status pill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Ok,
    Warn,
    Danger,
}

impl StatusTone {
    /// CSS class suffix used by the status pill.
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Ok => "tone-ok",
            Self::Warn => "tone-warn",
            Self::Danger => "tone-danger",
        }
    }
}

/// Profile payload as the backend sends it.
///
/// Kept loose on purpose: tier and state arrive as free-form strings and are
/// normalized in [`RawProfile::normalize`] so a new server-side value cannot
/// fail the whole profile decode.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawProfile {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub plan: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    /// Server-computed standing; takes precedence over `status` when present.
    #[serde(default)]
    pub account_state: Option<String>,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default)]
    pub telegram_id: Option<i64>,
    #[serde(default)]
    pub telegram_username: Option<String>,
}

impl RawProfile {
    /// Collapse the wire shape into the canonical [`Identity`].
    #[must_use]
    pub fn normalize(&self) -> Identity {
        let state = self
            .account_state
            .as_deref()
            .or(self.status.as_deref())
            .unwrap_or("active");
        let (status, trial) = match state {
            "banned" => (AccountStatus::Banned, false),
            "inactive" => (AccountStatus::Inactive, false),
            "trial" => (AccountStatus::Active, true),
            _ => (AccountStatus::Active, false),
        };

        Identity {
            email: self.email.clone(),
            plan: Plan::from_key(self.plan.as_deref()),
            status,
            trial,
            is_admin: self.is_admin,
        }
    }
}

/// Cached profile/entitlement record derived from the latest `/me` fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub email: String,
    pub plan: Plan,
    pub status: AccountStatus,
    pub trial: bool,
    pub is_admin: bool,
}

impl Identity {
    /// Status pill text, e.g. `"Active · Premium"` or `"Trial · Free"`.
    #[must_use]
    pub fn pill_label(&self) -> String {
        let status = if self.trial {
            "Trial"
        } else {
            self.status.label()
        };
        format!("{status} · {}", self.plan.label())
    }

    #[must_use]
    pub const fn tone(&self) -> StatusTone {
        match self.status {
            AccountStatus::Active => StatusTone::Ok,
            AccountStatus::Inactive => StatusTone::Warn,
            AccountStatus::Banned => StatusTone::Danger,
        }
    }

    /// Banned accounts keep a readable dashboard but cannot mutate state.
    #[must_use]
    pub const fn is_read_only(&self) -> bool {
        matches!(self.status, AccountStatus::Banned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(plan: Option<&str>, state: Option<&str>) -> RawProfile {
        RawProfile {
            email: String::from("a@x.com"),
            plan: plan.map(String::from),
            account_state: state.map(String::from),
            ..RawProfile::default()
        }
    }

    #[test]
    fn plan_defaults_to_free_for_unknown_or_missing() {
        assert_eq!(Plan::from_key(None), Plan::Free);
        assert_eq!(Plan::from_key(Some("enterprise")), Plan::Free);
        assert_eq!(Plan::from_key(Some("premium")), Plan::Premium);
    }

    #[test]
    fn account_state_takes_precedence_over_status() {
        let mut profile = raw(Some("plus"), Some("banned"));
        profile.status = Some(String::from("active"));
        let identity = profile.normalize();
        assert_eq!(identity.status, AccountStatus::Banned);
        assert!(identity.is_read_only());
        assert_eq!(identity.tone(), StatusTone::Danger);
    }

    #[test]
    fn trial_state_normalizes_to_active_with_marker() {
        let identity = raw(Some("free"), Some("trial")).normalize();
        assert_eq!(identity.status, AccountStatus::Active);
        assert!(identity.trial);
        assert_eq!(identity.pill_label(), "Trial · Free");
    }

    #[test]
    fn missing_state_defaults_to_active() {
        let identity = raw(Some("premium"), None).normalize();
        assert_eq!(identity.status, AccountStatus::Active);
        assert!(!identity.trial);
        assert_eq!(identity.pill_label(), "Active · Premium");
    }

    #[test]
    fn profile_decodes_from_the_me_payload() {
        let body = r#"{
            "_id": "65f0",
            "email": "a@x.com",
            "plan": "free",
            "status": "active",
            "account_state": "trial",
            "is_admin": false,
            "telegram_linked": false,
            "created_at": "2026-01-01T00:00:00Z"
        }"#;
        let profile: RawProfile = serde_json::from_str(body).expect("profile should decode");
        let identity = profile.normalize();
        assert_eq!(identity.email, "a@x.com");
        assert_eq!(identity.plan, Plan::Free);
        assert!(identity.trial);
        assert!(!identity.is_admin);
    }
}
