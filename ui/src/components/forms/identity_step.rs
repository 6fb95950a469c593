use dioxus::prelude::*;

use crate::components::inputs::{
    InputType, PasswordInput, PasswordMatchFeedback, ValidatedInput,
};
use crate::registration::validation::password_match;
use crate::registration::{SignUpAction, SignUpState};
use crate::utils::validation::{password_match_class, password_match_style, required_field_class};

#[derive(Props, PartialEq, Clone)]
pub struct IdentityStepProps {
    pub state: Signal<SignUpState>,
    pub dispatch: EventHandler<SignUpAction>,
}

#[component]
pub fn IdentityStep(props: IdentityStepProps) -> Element {
    let state = props.state;
    let dispatch = props.dispatch;
    let current = state();
    let show_errors = current.error.is_some();
    let matching = password_match(&current.form);

    rsx! {
        div {
            class: "signup-step step-1",

            div {
                class: "input-section",
                label { class: "input-label", "Full Name" }
                ValidatedInput {
                    name: "full_name".to_string(),
                    value: current.form.full_name.clone(),
                    placeholder: "Full Name".to_string(),
                    input_type: InputType::Text,
                    input_class: required_field_class(&current.form.full_name, show_errors).to_string(),
                    input_style: "".to_string(),
                    disabled: current.is_loading,
                    on_change: move |value: String| dispatch.call(SignUpAction::SetFullName(value))
                }
            }

            div {
                class: "input-section",
                label { class: "input-label", "Email" }
                ValidatedInput {
                    name: "email".to_string(),
                    value: current.form.email.clone(),
                    placeholder: "Email".to_string(),
                    input_type: InputType::Email,
                    input_class: required_field_class(&current.form.email, show_errors).to_string(),
                    input_style: "".to_string(),
                    disabled: current.is_loading,
                    on_change: move |value: String| dispatch.call(SignUpAction::SetEmail(value))
                }
            }

            div {
                class: "input-section",
                label { class: "input-label", "Username" }
                ValidatedInput {
                    name: "username".to_string(),
                    value: current.form.username.clone(),
                    placeholder: "Username".to_string(),
                    input_type: InputType::Text,
                    input_class: required_field_class(&current.form.username, show_errors).to_string(),
                    input_style: "".to_string(),
                    disabled: current.is_loading,
                    on_change: move |value: String| dispatch.call(SignUpAction::SetUsername(value))
                }
            }

            div {
                class: "input-section",
                label { class: "input-label", "Password" }
                PasswordInput {
                    name: "password".to_string(),
                    value: current.form.password.clone(),
                    placeholder: "Password".to_string(),
                    visible: current.password_visible,
                    input_class: required_field_class(&current.form.password, show_errors).to_string(),
                    input_style: "".to_string(),
                    disabled: current.is_loading,
                    on_change: move |value: String| dispatch.call(SignUpAction::SetPassword(value)),
                    on_toggle_visible: move |_| dispatch.call(SignUpAction::TogglePasswordVisible)
                }
            }

            div {
                class: "input-section",
                label { class: "input-label", "Confirm Password" }
                PasswordInput {
                    name: "confirmPassword".to_string(),
                    value: current.form.confirm_password.clone(),
                    placeholder: "Confirm Password".to_string(),
                    visible: current.confirm_password_visible,
                    input_class: password_match_class(&matching).to_string(),
                    input_style: password_match_style(&matching).to_string(),
                    disabled: current.is_loading,
                    on_change: move |value: String| dispatch.call(SignUpAction::SetConfirmPassword(value)),
                    on_toggle_visible: move |_| dispatch.call(SignUpAction::ToggleConfirmPasswordVisible)
                }

                PasswordMatchFeedback {
                    validation: matching
                }
            }
        }
    }
}
