//! Input components for form entry and live feedback

use crate::registration::validation::PasswordMatch;
use dioxus::prelude::*;

#[derive(PartialEq, Clone, Debug)]
pub enum InputType {
    Text,
    Password,
    Email,
    Date,
    Tel,
}

impl InputType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputType::Text => "text",
            InputType::Password => "password",
            InputType::Email => "email",
            InputType::Date => "date",
            InputType::Tel => "tel",
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct ValidatedInputProps {
    pub name: String,
    pub value: String,
    pub placeholder: String,
    pub input_type: InputType,
    pub input_class: String,
    pub input_style: String,
    pub disabled: bool,
    pub on_change: EventHandler<String>,
}

#[component]
pub fn ValidatedInput(props: ValidatedInputProps) -> Element {
    rsx! {
        input {
            name: "{props.name}",
            class: "{props.input_class}",
            style: "{props.input_style}",
            r#type: "{props.input_type.as_str()}",
            value: "{props.value}",
            placeholder: "{props.placeholder}",
            disabled: props.disabled,
            oninput: move |event| props.on_change.call(event.value())
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct PasswordInputProps {
    pub name: String,
    pub value: String,
    pub placeholder: String,
    pub visible: bool,
    pub input_class: String,
    pub input_style: String,
    pub disabled: bool,
    pub on_change: EventHandler<String>,
    pub on_toggle_visible: EventHandler<()>,
}

/// Password field with a show/hide toggle
#[component]
pub fn PasswordInput(props: PasswordInputProps) -> Element {
    let input_type = if props.visible {
        InputType::Text
    } else {
        InputType::Password
    };

    rsx! {
        div {
            class: "password-input-container",
            ValidatedInput {
                name: props.name,
                value: props.value,
                placeholder: props.placeholder,
                input_type: input_type,
                input_class: props.input_class,
                input_style: props.input_style,
                disabled: props.disabled,
                on_change: props.on_change
            }
            button {
                r#type: "button",
                class: "visibility-toggle",
                title: if props.visible { "Hide password" } else { "Show password" },
                onclick: move |_| props.on_toggle_visible.call(()),
                if props.visible { "Hide" } else { "Show" }
            }
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct PasswordMatchFeedbackProps {
    pub validation: PasswordMatch,
}

#[component]
pub fn PasswordMatchFeedback(props: PasswordMatchFeedbackProps) -> Element {
    match props.validation {
        PasswordMatch::Match => rsx! {
            div {
                class: "validation-feedback match",
                "✓ Passwords match"
            }
        },
        PasswordMatch::NoMatch => rsx! {
            div {
                class: "validation-feedback no-match",
                "⚠ Passwords do not match"
            }
        },
        PasswordMatch::None => rsx! { div {} },
    }
}
