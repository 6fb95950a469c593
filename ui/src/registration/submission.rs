use crate::registration::navigation::NavigationRequest;
use crate::registration::payload::{build_payload, SignUpPayload};
use crate::registration::types::SignUpState;
use crate::services::auth::{AuthService, SignUpError, SignUpSession};

pub const REGISTRATION_FAILED_MESSAGE: &str = "Registration failed. Please try again.";
pub const WELCOME_MESSAGE: &str = "Account created successfully! Welcome to Pineappl.";

/// What a successful registration hands back to the page
#[derive(Clone, Debug, PartialEq)]
pub struct RegistrationReceipt {
    pub session: SignUpSession,
    pub navigation: NavigationRequest,
}

/// Build the payload from `state` and create the account
///
/// Call only after [`SignUpState::begin_submission`] succeeded; the state
/// transitions for the outcome are left to the caller.
pub async fn submit_registration(
    state: &SignUpState,
    auth: &dyn AuthService,
    avatar_url: String,
) -> Result<RegistrationReceipt, SignUpError> {
    let payload: SignUpPayload = build_payload(
        &state.form,
        &state.faculties,
        &state.departments,
        avatar_url,
    );

    let session = auth.sign_up(&payload).await?;

    Ok(RegistrationReceipt {
        session,
        navigation: NavigationRequest::home_with_message(WELCOME_MESSAGE),
    })
}
