use dioxus::prelude::*;

use crate::components::inputs::{InputType, ValidatedInput};
use crate::registration::{SignUpAction, SignUpState};
use crate::utils::validation::required_field_class;

#[derive(Props, PartialEq, Clone)]
pub struct ContactStepProps {
    pub state: Signal<SignUpState>,
    pub dispatch: EventHandler<SignUpAction>,
}

#[component]
pub fn ContactStep(props: ContactStepProps) -> Element {
    let state = props.state;
    let dispatch = props.dispatch;
    let current = state();
    let show_errors = current.error.is_some();

    rsx! {
        div {
            class: "signup-step step-2",

            div {
                class: "input-section",
                label { class: "input-label", "Date of Birth" }
                ValidatedInput {
                    name: "date_of_birth".to_string(),
                    value: current.form.date_of_birth.clone(),
                    placeholder: "".to_string(),
                    input_type: InputType::Date,
                    input_class: required_field_class(&current.form.date_of_birth, show_errors).to_string(),
                    input_style: "".to_string(),
                    disabled: current.is_loading,
                    on_change: move |value: String| dispatch.call(SignUpAction::SetDateOfBirth(value))
                }
            }

            div {
                class: "input-section",
                label { class: "input-label", "Phone" }
                ValidatedInput {
                    name: "phone".to_string(),
                    value: current.form.phone.clone(),
                    placeholder: "Phone".to_string(),
                    input_type: InputType::Tel,
                    input_class: required_field_class(&current.form.phone, show_errors).to_string(),
                    input_style: "".to_string(),
                    disabled: current.is_loading,
                    on_change: move |value: String| dispatch.call(SignUpAction::SetPhone(value))
                }
            }

            div {
                class: "input-section",
                label { class: "input-label", "Address" }
                ValidatedInput {
                    name: "address".to_string(),
                    value: current.form.address.clone(),
                    placeholder: "Address (Optional)".to_string(),
                    input_type: InputType::Text,
                    input_class: "input-field".to_string(),
                    input_style: "".to_string(),
                    disabled: current.is_loading,
                    on_change: move |value: String| dispatch.call(SignUpAction::SetAddress(value))
                }
            }
        }
    }
}
