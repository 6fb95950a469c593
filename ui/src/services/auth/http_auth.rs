use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use tracing::{info, instrument, warn};

use super::{AuthService, SignUpError, SignUpSession};
use crate::registration::payload::SignUpPayload;

/// Auth API client that creates accounts with `POST {base}/signup`
#[derive(Clone)]
pub struct HttpAuthService {
    pub(crate) http_client: Client,
    signup_url: String,
}

impl HttpAuthService {
    pub fn new(base_url: &str) -> Self {
        Self {
            http_client: Client::new(),
            signup_url: format!("{}/signup", base_url.trim_end_matches('/')),
        }
    }

    pub fn signup_url(&self) -> &str {
        &self.signup_url
    }

    fn signup_request(&self, payload: &SignUpPayload) -> RequestBuilder {
        self.http_client.post(&self.signup_url).json(payload)
    }
}

#[async_trait(?Send)]
impl AuthService for HttpAuthService {
    #[instrument(skip(self, payload), fields(username = %payload.username), err)]
    async fn sign_up(&self, payload: &SignUpPayload) -> Result<SignUpSession, SignUpError> {
        info!("Creating account for role {}", payload.role.as_str());

        let response = self
            .signup_request(payload)
            .send()
            .await
            .map_err(|e| SignUpError::Network {
                message: format!("Failed to call signup: {}", e),
            })?;

        let status = response.status();
        if status.is_success() {
            let body = response.text().await.map_err(|e| SignUpError::InvalidResponse {
                message: format!("Failed to read signup response: {}", e),
            })?;
            let session = parse_session(&body)?;

            info!("Account created for user {}", session.user_id);
            Ok(session)
        } else {
            let body = response.text().await.unwrap_or_default();
            let error = classify_failure(status.as_u16(), &body);
            warn!("Signup failed with status {}: {}", status, error);
            Err(error)
        }
    }
}

/// Decode the body of a successful signup response
pub fn parse_session(body: &str) -> Result<SignUpSession, SignUpError> {
    serde_json::from_str(body).map_err(|e| SignUpError::InvalidResponse {
        message: format!("Failed to parse signup response: {}", e),
    })
}

/// Map a non-success signup response onto a [`SignUpError`]
pub fn classify_failure(status: u16, body: &str) -> SignUpError {
    let message = extract_message(body).unwrap_or_else(|| format!("HTTP {}", status));

    match status {
        409 => SignUpError::DuplicateAccount,
        400 | 401 | 422 => {
            // Auth backends commonly report duplicates as a validation failure
            let lowered = message.to_lowercase();
            if lowered.contains("already registered") || lowered.contains("already exists") {
                SignUpError::DuplicateAccount
            } else {
                SignUpError::InvalidCredentials { message }
            }
        }
        _ => SignUpError::Rejected { status, message },
    }
}

fn extract_message(body: &str) -> Option<String> {
    let json: serde_json::Value = serde_json::from_str(body).ok()?;
    ["message", "msg", "error_description", "error"]
        .iter()
        .find_map(|key| json.get(*key).and_then(|v| v.as_str()))
        .map(|s| s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signup_url_trims_trailing_slash() {
        let service = HttpAuthService::new("https://auth.example.edu/v1/");
        assert_eq!(service.signup_url(), "https://auth.example.edu/v1/signup");
    }

    #[test]
    fn test_conflict_is_duplicate_account() {
        assert_eq!(classify_failure(409, ""), SignUpError::DuplicateAccount);
    }

    #[test]
    fn test_duplicate_reported_as_validation_error() {
        let body = r#"{"msg":"User already registered"}"#;
        assert_eq!(classify_failure(422, body), SignUpError::DuplicateAccount);
    }

    #[test]
    fn test_rejected_details_keep_server_message() {
        let body = r#"{"error":"invalid_email","error_description":"Email address is invalid"}"#;
        assert_eq!(
            classify_failure(400, body),
            SignUpError::InvalidCredentials {
                message: "Email address is invalid".to_string()
            }
        );
    }

    #[test]
    fn test_server_error_without_json_body() {
        let error = classify_failure(503, "<html>Service Unavailable</html>");
        assert_eq!(
            error,
            SignUpError::Rejected {
                status: 503,
                message: "HTTP 503".to_string()
            }
        );
        assert!(error.is_temporary());
    }

    #[test]
    fn test_session_optional_fields_default_to_none() {
        let session = parse_session(r#"{"user_id":"user-1"}"#).unwrap();

        assert_eq!(session.user_id, "user-1");
        assert_eq!(session.email, None);
        assert_eq!(session.access_token, None);
        assert_eq!(session.refresh_token, None);
    }

    #[test]
    fn test_session_with_tokens() {
        let body = r#"{"user_id":"user-1","email":"ada@example.edu","access_token":"at","refresh_token":"rt"}"#;
        let session = parse_session(body).unwrap();

        assert_eq!(session.email.as_deref(), Some("ada@example.edu"));
        assert_eq!(session.access_token.as_deref(), Some("at"));
        assert_eq!(session.refresh_token.as_deref(), Some("rt"));
    }

    #[test]
    fn test_session_without_user_id_is_invalid_response() {
        let error = parse_session(r#"{"email":"ada@example.edu"}"#).unwrap_err();
        assert!(matches!(error, SignUpError::InvalidResponse { .. }));
        assert!(!error.is_temporary());

        assert!(matches!(
            parse_session("not json"),
            Err(SignUpError::InvalidResponse { .. })
        ));
    }

    #[test]
    fn test_signup_request_sends_single_json_content_type() {
        use crate::registration::payload::build_payload;
        use crate::registration::types::RegistrationForm;

        let service = HttpAuthService::new("https://auth.example.edu/v1");
        let payload = build_payload(&RegistrationForm::default(), &[], &[], "/one.jpeg".to_string());
        let request = service.signup_request(&payload).build().unwrap();

        let content_types: Vec<_> = request.headers().get_all("content-type").iter().collect();
        assert_eq!(content_types, vec!["application/json"]);
        assert_eq!(request.url().as_str(), "https://auth.example.edu/v1/signup");
    }
}
