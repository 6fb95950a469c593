//! Pineappl sign-up wizard
//!
//! The registration flow collects a new user's details over three steps and
//! hands them to the auth service:
//!
//! - **Identity**: name, email, username and password
//! - **Contact**: date of birth, phone and an optional address
//! - **Affiliation**: role, faculty, department and the role's identifier
//!
//! State lives in [`SignUpState`] and only changes through
//! [`SignUpAction`]s, so every rule here is testable without rendering.
//! Validation is a pure function of the step and the form.

pub mod avatar;
pub mod navigation;
pub mod payload;
pub mod requests;
pub mod submission;
pub mod types;
pub mod validation;
pub mod wizard;

pub use navigation::{FlashMessage, NavigationRequest, HOME_PATH};
pub use submission::{submit_registration, RegistrationReceipt};
pub use types::*;
pub use validation::{validate_step, ValidationError};
pub use wizard::WizardStep;
