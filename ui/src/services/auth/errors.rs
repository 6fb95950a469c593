use thiserror::Error;

/// Why a sign-up attempt failed
///
/// The wizard always shows the same banner text for a failed submission;
/// the variant is kept alongside it so the page can add a specific hint.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SignUpError {
    #[error("Network error: {message}")]
    Network { message: String },

    #[error("An account with these details already exists")]
    DuplicateAccount,

    #[error("Sign-up details were rejected: {message}")]
    InvalidCredentials { message: String },

    #[error("Sign-up rejected with status {status}: {message}")]
    Rejected { status: u16, message: String },

    #[error("Invalid response format: {message}")]
    InvalidResponse { message: String },
}

impl SignUpError {
    /// Secondary line shown under the generic failure banner
    pub fn hint(&self) -> &'static str {
        match self {
            SignUpError::Network { .. } => {
                "We couldn't reach the server. Check your connection and try again."
            }
            SignUpError::DuplicateAccount => {
                "An account with this email or username already exists."
            }
            SignUpError::InvalidCredentials { .. } => {
                "Some of your details were not accepted. Please review them."
            }
            SignUpError::Rejected { .. } | SignUpError::InvalidResponse { .. } => {
                "The server could not complete your registration."
            }
        }
    }

    pub fn is_temporary(&self) -> bool {
        match self {
            SignUpError::Network { .. } => true,
            SignUpError::Rejected { status, .. } => *status >= 500,
            _ => false,
        }
    }
}

#[derive(Debug, Error)]
pub enum SessionStoreError {
    #[error("Failed to store session under {key}: {message}")]
    Storage { key: String, message: String },
}
