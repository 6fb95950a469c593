use thiserror::Error;

use crate::registration::types::{RegistrationForm, Role};
use crate::registration::wizard::WizardStep;

pub const MIN_PASSWORD_LENGTH: usize = 6;

/// First rule a step failed; the message is shown to the user verbatim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in all required fields")]
    MissingRequiredFields,

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Password must be at least 6 characters")]
    PasswordTooShort,

    #[error("Please select faculty and department")]
    MissingAffiliation,

    #[error("Matriculation number is required for students")]
    MissingMatricNumber,

    #[error("Staff ID is required for lecturers and admins")]
    MissingStaffId,
}

/// Check the fields owned by `step`
pub fn validate_step(step: WizardStep, form: &RegistrationForm) -> Result<(), ValidationError> {
    match step {
        WizardStep::Identity => validate_identity(form),
        WizardStep::Contact => validate_contact(form),
        WizardStep::Affiliation => validate_affiliation(form),
    }
}

pub fn validate_identity(form: &RegistrationForm) -> Result<(), ValidationError> {
    let required = [
        &form.full_name,
        &form.email,
        &form.username,
        &form.password,
        &form.confirm_password,
    ];
    if required.iter().any(|value| value.is_empty()) {
        return Err(ValidationError::MissingRequiredFields);
    }

    if form.password != form.confirm_password {
        return Err(ValidationError::PasswordMismatch);
    }

    // Length in UTF-16 code units, the unit browsers report for input values
    if form.password.encode_utf16().count() < MIN_PASSWORD_LENGTH {
        return Err(ValidationError::PasswordTooShort);
    }

    Ok(())
}

pub fn validate_contact(form: &RegistrationForm) -> Result<(), ValidationError> {
    // Address is optional
    if form.date_of_birth.is_empty() || form.phone.is_empty() {
        return Err(ValidationError::MissingRequiredFields);
    }
    Ok(())
}

pub fn validate_affiliation(form: &RegistrationForm) -> Result<(), ValidationError> {
    if form.faculty_id.is_empty() || form.department_id.is_empty() {
        return Err(ValidationError::MissingAffiliation);
    }

    match form.role {
        Role::Student if form.matric_number.is_empty() => {
            Err(ValidationError::MissingMatricNumber)
        }
        Role::Lecturer | Role::Admin if form.staff_id.is_empty() => {
            Err(ValidationError::MissingStaffId)
        }
        _ => Ok(()),
    }
}

/// Live feedback for the confirm-password field
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PasswordMatch {
    None,
    Match,
    NoMatch,
}

pub fn password_match(form: &RegistrationForm) -> PasswordMatch {
    if form.confirm_password.is_empty() {
        PasswordMatch::None
    } else if form.password == form.confirm_password {
        PasswordMatch::Match
    } else {
        PasswordMatch::NoMatch
    }
}
