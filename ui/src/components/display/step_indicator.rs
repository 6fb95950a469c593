use dioxus::prelude::*;

use crate::registration::WizardStep;

#[derive(Props, PartialEq, Clone)]
pub struct StepIndicatorProps {
    pub current: WizardStep,
}

#[component]
pub fn StepIndicator(props: StepIndicatorProps) -> Element {
    let current = props.current;

    rsx! {
        div {
            class: "step-indicator",
            for step in WizardStep::ALL {
                div {
                    key: "{step.number()}",
                    class: "{step_dot_class(step, current)}",
                    "{step.number()}"
                }
            }
            div {
                class: "step-title",
                "Step {current.number()} of 3: {current.title()}"
            }
        }
    }
}

fn step_dot_class(step: WizardStep, current: WizardStep) -> &'static str {
    if step == current {
        "step-dot active"
    } else if step.number() < current.number() {
        "step-dot done"
    } else {
        "step-dot"
    }
}
