use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReferenceDataError {
    #[error("Invalid reference data URL: {url}")]
    InvalidUrl { url: String },

    #[error("Network error: {message}")]
    Network { message: String },

    #[error("Reference data request failed with status {status}")]
    Status { status: u16 },

    #[error("Failed to decode reference data: {message}")]
    Decode { message: String },
}

pub type ReferenceResult<T> = Result<T, ReferenceDataError>;
