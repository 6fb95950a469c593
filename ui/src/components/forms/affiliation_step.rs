use dioxus::prelude::*;

use crate::components::display::LoadingIndicator;
use crate::components::forms::{OptionSelect, SelectOption};
use crate::components::inputs::{InputType, ValidatedInput};
use crate::registration::{Role, SignUpAction, SignUpState};

#[derive(Props, PartialEq, Clone)]
pub struct AffiliationStepProps {
    pub state: Signal<SignUpState>,
    pub dispatch: EventHandler<SignUpAction>,
}

#[component]
pub fn AffiliationStep(props: AffiliationStepProps) -> Element {
    let state = props.state;
    let dispatch = props.dispatch;
    let current = state();
    let role = current.form.role;

    let role_options: Vec<SelectOption> = Role::ALL
        .iter()
        .map(|role| SelectOption::new(role.as_str(), role.label()))
        .collect();
    let faculty_options: Vec<SelectOption> = current
        .faculties
        .iter()
        .map(|faculty| SelectOption::new(&faculty.id, &faculty.name))
        .collect();
    let department_options: Vec<SelectOption> = current
        .departments
        .iter()
        .map(|department| SelectOption::new(&department.id, &department.name))
        .collect();

    rsx! {
        div {
            class: "signup-step step-3",

            div {
                class: "input-section",
                label { class: "input-label", "Role" }
                OptionSelect {
                    name: "role".to_string(),
                    options: role_options,
                    selected: role.as_str().to_string(),
                    placeholder: None,
                    disabled: current.is_loading,
                    on_change: move |value: String| {
                        if let Some(role) = Role::parse(&value) {
                            dispatch.call(SignUpAction::SetRole(role));
                        }
                    }
                }
            }

            div {
                class: "input-section",
                label { class: "input-label", "Faculty" }
                OptionSelect {
                    name: "faculty_id".to_string(),
                    options: faculty_options,
                    selected: current.form.faculty_id.clone(),
                    placeholder: Some("Select Faculty".to_string()),
                    disabled: current.is_loading,
                    on_change: move |value: String| dispatch.call(SignUpAction::SetFacultyId(value))
                }
                if let Some(faculty) = current.selected_faculty() {
                    div { class: "field-hint", "{faculty.full_name}" }
                }
            }

            div {
                class: "input-section",
                label { class: "input-label", "Department" }
                if current.is_loading_departments() {
                    LoadingIndicator { message: "Loading departments...".to_string() }
                } else {
                    OptionSelect {
                        name: "department_id".to_string(),
                        options: department_options,
                        selected: current.form.department_id.clone(),
                        placeholder: Some("Select Department".to_string()),
                        disabled: current.is_loading,
                        on_change: move |value: String| dispatch.call(SignUpAction::SetDepartmentId(value))
                    }
                }
            }

            if let Some(message) = current.reference_error.clone() {
                div { class: "reference-error", "⚠ {message}" }
            }

            if role.is_staff() {
                div {
                    class: "input-section",
                    label { class: "input-label", "Staff ID" }
                    ValidatedInput {
                        name: "staff_id".to_string(),
                        value: current.form.staff_id.clone(),
                        placeholder: "Staff ID".to_string(),
                        input_type: InputType::Text,
                        input_class: "input-field".to_string(),
                        input_style: "".to_string(),
                        disabled: current.is_loading,
                        on_change: move |value: String| dispatch.call(SignUpAction::SetStaffId(value))
                    }
                }
            } else {
                div {
                    class: "input-section",
                    label { class: "input-label", "Matric Number" }
                    ValidatedInput {
                        name: "matric_number".to_string(),
                        value: current.form.matric_number.clone(),
                        placeholder: "Matric Number".to_string(),
                        input_type: InputType::Text,
                        input_class: "input-field".to_string(),
                        input_style: "".to_string(),
                        disabled: current.is_loading,
                        on_change: move |value: String| dispatch.call(SignUpAction::SetMatricNumber(value))
                    }
                }
            }
        }
    }
}
