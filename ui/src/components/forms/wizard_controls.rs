use dioxus::prelude::*;

use crate::registration::WizardStep;

#[derive(Props, PartialEq, Clone)]
pub struct WizardControlsProps {
    pub step: WizardStep,
    pub is_loading: bool,
    pub on_previous: EventHandler<()>,
    pub on_next: EventHandler<()>,
}

/// Previous/Next buttons, with the submit button on the last step
#[component]
pub fn WizardControls(props: WizardControlsProps) -> Element {
    let on_previous = props.on_previous;
    let on_next = props.on_next;

    rsx! {
        div {
            class: "button-section wizard-controls",
            if !props.step.is_first() {
                button {
                    r#type: "button",
                    class: "secondary-button",
                    disabled: props.is_loading,
                    onclick: move |_| on_previous.call(()),
                    "Previous"
                }
            }
            if props.step.is_last() {
                button {
                    r#type: "submit",
                    class: "primary-button",
                    disabled: props.is_loading,
                    if props.is_loading { "Creating..." } else { "Create Account" }
                }
            } else {
                button {
                    r#type: "button",
                    class: "primary-button",
                    onclick: move |_| on_next.call(()),
                    "Next"
                }
            }
        }
    }
}
