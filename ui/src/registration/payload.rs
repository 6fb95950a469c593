use serde::Serialize;

use crate::registration::types::{RegistrationForm, Role};
use crate::services::reference_data::{find_department, find_faculty, Department, Faculty};

/// Record sent to the auth service when the wizard is submitted
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct SignUpPayload {
    pub full_name: String,
    pub email: String,
    pub username: String,
    pub password: String,
    #[serde(rename = "confirmPassword")]
    pub confirm_password: String,
    pub date_of_birth: String,
    pub phone: String,
    pub address: String,
    pub role: Role,
    pub faculty_id: String,
    pub department_id: String,
    /// Both identifiers are sent; the one the role does not use may be empty
    pub matric_number: String,
    pub staff_id: String,
    pub avatar_url: String,
    /// Short faculty name, `None` when the selection no longer matches the loaded list
    pub faculty_name: Option<String>,
    pub department_name: Option<String>,
}

pub fn build_payload(
    form: &RegistrationForm,
    faculties: &[Faculty],
    departments: &[Department],
    avatar_url: String,
) -> SignUpPayload {
    SignUpPayload {
        full_name: form.full_name.clone(),
        email: form.email.clone(),
        username: form.username.clone(),
        password: form.password.clone(),
        confirm_password: form.confirm_password.clone(),
        date_of_birth: form.date_of_birth.clone(),
        phone: form.phone.clone(),
        address: form.address.clone(),
        role: form.role,
        faculty_id: form.faculty_id.clone(),
        department_id: form.department_id.clone(),
        matric_number: form.matric_number.clone(),
        staff_id: form.staff_id.clone(),
        avatar_url,
        faculty_name: find_faculty(faculties, &form.faculty_id).map(|f| f.name.clone()),
        department_name: find_department(departments, &form.department_id)
            .map(|d| d.name.clone()),
    }
}
