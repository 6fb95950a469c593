// Core types for the sign-up wizard - no dioxus imports needed here
use serde::Serialize;

use crate::registration::requests::{DepartmentRequests, DepartmentTicket};
use crate::registration::submission::REGISTRATION_FAILED_MESSAGE;
use crate::registration::validation::{validate_step, ValidationError};
use crate::registration::wizard::WizardStep;
use crate::services::auth::SignUpError;
use crate::services::reference_data::{find_department, find_faculty, Department, Faculty};

pub const FACULTIES_UNAVAILABLE_MESSAGE: &str = "Could not load faculties. Please try again.";
pub const DEPARTMENTS_UNAVAILABLE_MESSAGE: &str = "Could not load departments. Please try again.";

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Student,
    Lecturer,
    Admin,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Student, Role::Lecturer, Role::Admin];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Lecturer => "lecturer",
            Role::Admin => "admin",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Student => "Student",
            Role::Lecturer => "Lecturer",
            Role::Admin => "Admin",
        }
    }

    pub fn parse(value: &str) -> Option<Role> {
        Role::ALL.into_iter().find(|role| role.as_str() == value)
    }

    pub fn is_staff(&self) -> bool {
        matches!(self, Role::Lecturer | Role::Admin)
    }
}

/// Every field the wizard collects
///
/// Both role identifiers are kept so switching role and back never loses
/// what was typed; only the one matching `role` is validated.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct RegistrationForm {
    // Step 1
    pub full_name: String,
    pub email: String,
    pub username: String,
    pub password: String,
    pub confirm_password: String,
    // Step 2
    pub date_of_birth: String,
    pub phone: String,
    pub address: String,
    // Step 3
    pub role: Role,
    pub faculty_id: String,
    pub department_id: String,
    pub matric_number: String,
    pub staff_id: String,
}

impl RegistrationForm {
    /// Matriculation number or staff id, whichever the current role requires
    pub fn role_identifier(&self) -> &str {
        if self.role.is_staff() {
            &self.staff_id
        } else {
            &self.matric_number
        }
    }
}

// Action enum for state mutations
#[derive(Clone, Debug)]
pub enum SignUpAction {
    // Step 1 actions
    SetFullName(String),
    SetEmail(String),
    SetUsername(String),
    SetPassword(String),
    SetConfirmPassword(String),
    TogglePasswordVisible,
    ToggleConfirmPasswordVisible,

    // Step 2 actions
    SetDateOfBirth(String),
    SetPhone(String),
    SetAddress(String),

    // Step 3 actions
    SetRole(Role),
    SetFacultyId(String),
    SetDepartmentId(String),
    SetMatricNumber(String),
    SetStaffId(String),

    // Reference data
    FacultiesLoaded(Vec<Faculty>),
    FacultiesFailed,
    DepartmentsLoaded {
        ticket: DepartmentTicket,
        departments: Vec<Department>,
    },
    DepartmentsFailed {
        ticket: DepartmentTicket,
    },

    // Wizard navigation
    NextStep,
    PreviousStep,

    // Submission
    SubmissionStarted,
    SubmissionFailed(SignUpError),
    SubmissionSucceeded,
}

/// Why a submit request was not started
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SubmitRejection {
    AlreadySubmitting,
    NotOnFinalStep,
    Invalid(ValidationError),
}

#[derive(Clone, PartialEq, Debug, Default)]
pub struct SignUpState {
    pub current_step: WizardStep,
    pub form: RegistrationForm,
    pub faculties: Vec<Faculty>,
    pub departments: Vec<Department>,
    pub department_requests: DepartmentRequests,
    pub password_visible: bool,
    pub confirm_password_visible: bool,
    pub is_loading: bool,
    pub registered: bool,
    /// Step validation or submission message shown above the form
    pub error: Option<String>,
    /// Detail behind a failed submission
    pub failure: Option<SignUpError>,
    /// Reference data could not be loaded
    pub reference_error: Option<String>,
}

impl SignUpState {
    /// Reduces the state based on an action in-place (preserves Dioxus Signal reactivity)
    pub fn reduce_in_place(&mut self, action: SignUpAction) {
        match action {
            // Step 1 actions
            SignUpAction::SetFullName(value) => {
                self.form.full_name = value;
            }
            SignUpAction::SetEmail(value) => {
                self.form.email = value;
            }
            SignUpAction::SetUsername(value) => {
                self.form.username = value;
            }
            SignUpAction::SetPassword(value) => {
                self.form.password = value;
            }
            SignUpAction::SetConfirmPassword(value) => {
                self.form.confirm_password = value;
            }
            SignUpAction::TogglePasswordVisible => {
                self.password_visible = !self.password_visible;
            }
            SignUpAction::ToggleConfirmPasswordVisible => {
                self.confirm_password_visible = !self.confirm_password_visible;
            }

            // Step 2 actions
            SignUpAction::SetDateOfBirth(value) => {
                self.form.date_of_birth = value;
            }
            SignUpAction::SetPhone(value) => {
                self.form.phone = value;
            }
            SignUpAction::SetAddress(value) => {
                self.form.address = value;
            }

            // Step 3 actions
            SignUpAction::SetRole(role) => {
                self.form.role = role;
            }
            SignUpAction::SetFacultyId(faculty_id) => {
                self.select_faculty(faculty_id);
            }
            SignUpAction::SetDepartmentId(value) => {
                self.form.department_id = value;
            }
            SignUpAction::SetMatricNumber(value) => {
                self.form.matric_number = value;
            }
            SignUpAction::SetStaffId(value) => {
                self.form.staff_id = value;
            }

            // Reference data
            SignUpAction::FacultiesLoaded(faculties) => {
                self.faculties = faculties;
            }
            SignUpAction::FacultiesFailed => {
                self.reference_error = Some(FACULTIES_UNAVAILABLE_MESSAGE.to_string());
            }
            SignUpAction::DepartmentsLoaded {
                ticket,
                departments,
            } => {
                if self.department_requests.complete(&ticket) {
                    self.departments = departments;
                }
            }
            SignUpAction::DepartmentsFailed { ticket } => {
                if self.department_requests.complete(&ticket) {
                    self.departments.clear();
                    self.reference_error = Some(DEPARTMENTS_UNAVAILABLE_MESSAGE.to_string());
                }
            }

            // Wizard navigation
            SignUpAction::NextStep => {
                let _ = self.advance();
            }
            SignUpAction::PreviousStep => {
                self.go_back();
            }

            // Submission
            SignUpAction::SubmissionStarted => {
                let _ = self.begin_submission();
            }
            SignUpAction::SubmissionFailed(failure) => {
                self.is_loading = false;
                self.error = Some(REGISTRATION_FAILED_MESSAGE.to_string());
                self.failure = Some(failure);
            }
            SignUpAction::SubmissionSucceeded => {
                self.registered = true;
            }
        }
    }

    fn select_faculty(&mut self, faculty_id: String) {
        if self.form.faculty_id == faculty_id {
            return;
        }

        self.form.department_id.clear();
        self.departments.clear();
        self.reference_error = None;

        if faculty_id.is_empty() {
            self.department_requests.cancel();
        } else {
            self.department_requests.begin(&faculty_id);
        }
        self.form.faculty_id = faculty_id;
    }

    /// Validate the current step and move forward if it passes
    pub fn advance(&mut self) -> Result<(), ValidationError> {
        match validate_step(self.current_step, &self.form) {
            Ok(()) => {
                self.error = None;
                if let Some(next) = self.current_step.next() {
                    self.current_step = next;
                }
                Ok(())
            }
            Err(error) => {
                self.error = Some(error.to_string());
                Err(error)
            }
        }
    }

    pub fn go_back(&mut self) {
        if let Some(previous) = self.current_step.previous() {
            self.current_step = previous;
            self.error = None;
        }
    }

    /// Gate a submit request: final step only, one at a time, step 3 must validate
    pub fn begin_submission(&mut self) -> Result<(), SubmitRejection> {
        if self.is_loading || self.registered {
            return Err(SubmitRejection::AlreadySubmitting);
        }
        if self.current_step != WizardStep::Affiliation {
            return Err(SubmitRejection::NotOnFinalStep);
        }
        if let Err(error) = validate_step(WizardStep::Affiliation, &self.form) {
            self.error = Some(error.to_string());
            return Err(SubmitRejection::Invalid(error));
        }

        self.is_loading = true;
        self.error = None;
        self.failure = None;
        Ok(())
    }

    /// Helper methods for common state queries
    pub fn selected_faculty(&self) -> Option<&Faculty> {
        find_faculty(&self.faculties, &self.form.faculty_id)
    }

    pub fn selected_department(&self) -> Option<&Department> {
        find_department(&self.departments, &self.form.department_id)
    }

    pub fn is_loading_departments(&self) -> bool {
        self.department_requests.is_loading()
    }

    pub fn should_show_previous(&self) -> bool {
        !self.current_step.is_first()
    }

    pub fn should_show_next(&self) -> bool {
        !self.current_step.is_last()
    }

    pub fn should_show_submit(&self) -> bool {
        self.current_step.is_last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::reference_data::StaticReferenceData;

    fn reduce(state: &mut SignUpState, actions: Vec<SignUpAction>) {
        for action in actions {
            state.reduce_in_place(action);
        }
    }

    fn fill_identity(state: &mut SignUpState) {
        reduce(
            state,
            vec![
                SignUpAction::SetFullName("Ada Obi".to_string()),
                SignUpAction::SetEmail("ada@example.edu".to_string()),
                SignUpAction::SetUsername("adaobi".to_string()),
                SignUpAction::SetPassword("secret123".to_string()),
                SignUpAction::SetConfirmPassword("secret123".to_string()),
            ],
        );
    }

    fn fill_contact(state: &mut SignUpState) {
        reduce(
            state,
            vec![
                SignUpAction::SetDateOfBirth("2001-04-12".to_string()),
                SignUpAction::SetPhone("+2348012345678".to_string()),
            ],
        );
    }

    fn state_on_last_step() -> SignUpState {
        let mut state = SignUpState::default();
        fill_identity(&mut state);
        state.reduce_in_place(SignUpAction::NextStep);
        fill_contact(&mut state);
        state.reduce_in_place(SignUpAction::NextStep);
        assert_eq!(state.current_step, WizardStep::Affiliation);
        state
    }

    fn load_departments(state: &mut SignUpState, faculty_id: &str) {
        state.reduce_in_place(SignUpAction::SetFacultyId(faculty_id.to_string()));
        let ticket = state.department_requests.latest().cloned().unwrap();
        state.reduce_in_place(SignUpAction::DepartmentsLoaded {
            ticket,
            departments: StaticReferenceData::new().departments_for(faculty_id),
        });
    }

    #[test]
    fn test_new_state_is_empty_on_first_step() {
        let state = SignUpState::default();

        assert_eq!(state.current_step, WizardStep::Identity);
        assert_eq!(state.form.role, Role::Student);
        assert!(state.form.full_name.is_empty());
        assert!(!state.should_show_previous());
        assert!(state.should_show_next());
        assert!(!state.should_show_submit());
    }

    #[test]
    fn test_next_blocked_by_validation() {
        let mut state = SignUpState::default();
        state.reduce_in_place(SignUpAction::NextStep);

        assert_eq!(state.current_step, WizardStep::Identity);
        assert_eq!(state.error.as_deref(), Some("Please fill in all required fields"));

        fill_identity(&mut state);
        state.reduce_in_place(SignUpAction::SetConfirmPassword("secret12".to_string()));
        state.reduce_in_place(SignUpAction::NextStep);
        assert_eq!(state.error.as_deref(), Some("Passwords do not match"));
    }

    #[test]
    fn test_next_clears_error_and_advances() {
        let mut state = SignUpState::default();
        state.reduce_in_place(SignUpAction::NextStep);
        assert!(state.error.is_some());

        fill_identity(&mut state);
        state.reduce_in_place(SignUpAction::NextStep);

        assert_eq!(state.current_step, WizardStep::Contact);
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_steps_never_leave_range() {
        let mut state = SignUpState::default();
        state.reduce_in_place(SignUpAction::PreviousStep);
        assert_eq!(state.current_step, WizardStep::Identity);

        let mut state = state_on_last_step();
        load_departments(&mut state, "1");
        reduce(
            &mut state,
            vec![
                SignUpAction::SetDepartmentId("2".to_string()),
                SignUpAction::SetMatricNumber("CSC/2020/001".to_string()),
                SignUpAction::NextStep,
            ],
        );
        assert_eq!(state.current_step, WizardStep::Affiliation);
        assert!(state.should_show_submit());
        assert!(!state.should_show_next());
    }

    #[test]
    fn test_previous_clears_error() {
        let mut state = state_on_last_step();
        state.reduce_in_place(SignUpAction::NextStep);
        assert_eq!(state.error.as_deref(), Some("Please select faculty and department"));

        state.reduce_in_place(SignUpAction::PreviousStep);
        assert_eq!(state.current_step, WizardStep::Contact);
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_faculty_change_clears_department() {
        let mut state = SignUpState::default();
        load_departments(&mut state, "1");
        state.reduce_in_place(SignUpAction::SetDepartmentId("3".to_string()));
        assert_eq!(state.selected_department().map(|d| d.name.as_str()), Some("Software Engineering"));

        state.reduce_in_place(SignUpAction::SetFacultyId("2".to_string()));
        assert!(state.form.department_id.is_empty());
        assert!(state.departments.is_empty());
        assert!(state.is_loading_departments());
    }

    #[test]
    fn test_clearing_faculty_empties_departments() {
        let mut state = SignUpState::default();
        load_departments(&mut state, "5");
        assert_eq!(state.departments.len(), 2);

        state.reduce_in_place(SignUpAction::SetFacultyId(String::new()));
        assert!(state.departments.is_empty());
        assert_eq!(state.department_requests.latest(), None);
    }

    #[test]
    fn test_stale_department_response_is_discarded() {
        let mut state = SignUpState::default();
        let source = StaticReferenceData::new();

        state.reduce_in_place(SignUpAction::SetFacultyId("1".to_string()));
        let stale = state.department_requests.latest().cloned().unwrap();
        state.reduce_in_place(SignUpAction::SetFacultyId("4".to_string()));
        let current = state.department_requests.latest().cloned().unwrap();

        state.reduce_in_place(SignUpAction::DepartmentsLoaded {
            ticket: current,
            departments: source.departments_for("4"),
        });
        state.reduce_in_place(SignUpAction::DepartmentsLoaded {
            ticket: stale,
            departments: source.departments_for("1"),
        });

        assert!(state.departments.iter().all(|d| d.faculty_id == "4"));
        assert_eq!(state.departments.len(), 2);
    }

    #[test]
    fn test_department_failure_surfaces_message() {
        let mut state = SignUpState::default();
        state.reduce_in_place(SignUpAction::SetFacultyId("2".to_string()));
        let ticket = state.department_requests.latest().cloned().unwrap();

        state.reduce_in_place(SignUpAction::DepartmentsFailed { ticket });
        assert_eq!(state.reference_error.as_deref(), Some(DEPARTMENTS_UNAVAILABLE_MESSAGE));
        assert!(!state.is_loading_departments());

        // Picking another faculty retries and clears the message
        state.reduce_in_place(SignUpAction::SetFacultyId("3".to_string()));
        assert_eq!(state.reference_error, None);
    }

    #[test]
    fn test_role_switch_keeps_both_identifiers() {
        let mut state = SignUpState::default();
        reduce(
            &mut state,
            vec![
                SignUpAction::SetMatricNumber("CSC/1".to_string()),
                SignUpAction::SetRole(Role::Lecturer),
                SignUpAction::SetStaffId("S123".to_string()),
                SignUpAction::SetRole(Role::Admin),
            ],
        );
        assert_eq!(state.form.role_identifier(), "S123");

        state.reduce_in_place(SignUpAction::SetRole(Role::Student));
        assert_eq!(state.form.role_identifier(), "CSC/1");
        assert_eq!(state.form.staff_id, "S123");
    }

    #[test]
    fn test_student_without_matric_number_cannot_submit() {
        let mut state = state_on_last_step();
        load_departments(&mut state, "1");
        state.reduce_in_place(SignUpAction::SetDepartmentId("1".to_string()));

        assert_eq!(
            state.begin_submission(),
            Err(SubmitRejection::Invalid(ValidationError::MissingMatricNumber))
        );
        assert_eq!(
            state.error.as_deref(),
            Some("Matriculation number is required for students")
        );
        assert!(!state.is_loading);
    }

    #[test]
    fn test_submission_guarded_while_loading() {
        let mut state = state_on_last_step();
        load_departments(&mut state, "1");
        reduce(
            &mut state,
            vec![
                SignUpAction::SetRole(Role::Lecturer),
                SignUpAction::SetDepartmentId("2".to_string()),
                SignUpAction::SetStaffId("S123".to_string()),
            ],
        );

        assert_eq!(state.begin_submission(), Ok(()));
        assert!(state.is_loading);
        assert_eq!(state.begin_submission(), Err(SubmitRejection::AlreadySubmitting));
    }

    #[test]
    fn test_submission_only_from_last_step() {
        let mut state = SignUpState::default();
        fill_identity(&mut state);
        assert_eq!(state.begin_submission(), Err(SubmitRejection::NotOnFinalStep));
    }

    #[test]
    fn test_failed_submission_resets_loading() {
        let mut state = state_on_last_step();
        load_departments(&mut state, "1");
        reduce(
            &mut state,
            vec![
                SignUpAction::SetDepartmentId("2".to_string()),
                SignUpAction::SetMatricNumber("CSC/2020/001".to_string()),
                SignUpAction::SubmissionStarted,
            ],
        );
        assert!(state.is_loading);

        state.reduce_in_place(SignUpAction::SubmissionFailed(SignUpError::DuplicateAccount));

        assert!(!state.is_loading);
        assert_eq!(state.error.as_deref(), Some("Registration failed. Please try again."));
        assert_eq!(state.failure, Some(SignUpError::DuplicateAccount));
        assert_eq!(state.current_step, WizardStep::Affiliation);

        // The user can resubmit by hand
        assert_eq!(state.begin_submission(), Ok(()));
        assert_eq!(state.failure, None);
    }

    #[test]
    fn test_role_parse_round_trips_labels() {
        assert_eq!(Role::parse("lecturer"), Some(Role::Lecturer));
        assert_eq!(Role::parse("Lecturer"), None);
        assert!(Role::Admin.is_staff());
        assert!(!Role::Student.is_staff());
    }
}
