//! Chronos Session Core
//!
//! Platform-agnostic session logic for the Chronos dashboard client.
//! This crate provides the identity model, gate evaluation, view identifiers
//! and wire-schema decoding without UI or platform-specific dependencies.

pub mod api;
pub mod error;
pub mod gate;
pub mod identity;
pub mod view;

// Re-export commonly used types
pub use api::{
    AdminActionOutcome, BanRequest, CredentialRequest, ErrorBody, LookupRequest, LookupResult,
    PlanActivateRequest, SupportLink, TokenGrant, decode_error_body, decode_json,
};
pub use error::ApiError;
pub use gate::{GateDecision, ViewGate, evaluate};
pub use identity::{AccountStatus, Identity, Plan, RawProfile, StatusTone};
pub use view::{ViewId, parse_fragment};
