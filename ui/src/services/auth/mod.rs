//! Authentication collaborator
//!
//! The wizard hands the finished [`SignUpPayload`] to an [`AuthService`] and
//! only cares whether a session came back. [`HttpAuthService`] talks to the
//! platform's auth API; tests substitute in-memory fakes.

pub mod errors;
pub mod http_auth;
pub mod session;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::registration::payload::SignUpPayload;

pub use errors::{SessionStoreError, SignUpError};
pub use http_auth::{classify_failure, parse_session, HttpAuthService};
pub use session::{SessionStore, SESSION_STORAGE_KEY};

/// Session context returned by a successful sign-up
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SignUpSession {
    pub user_id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub refresh_token: Option<String>,
}

#[async_trait(?Send)]
pub trait AuthService {
    /// Create the account described by `payload`
    async fn sign_up(&self, payload: &SignUpPayload) -> Result<SignUpSession, SignUpError>;
}
