use dioxus::prelude::*;

#[derive(PartialEq, Clone, Debug)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: &str, label: &str) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct OptionSelectProps {
    pub name: String,
    pub options: Vec<SelectOption>,
    pub selected: String,
    /// Leading empty option, e.g. "Select Faculty"
    #[props(!optional)]
    pub placeholder: Option<String>,
    pub disabled: bool,
    pub on_change: EventHandler<String>,
}

#[component]
pub fn OptionSelect(props: OptionSelectProps) -> Element {
    let selected = props.selected;
    let on_change = props.on_change;

    rsx! {
        select {
            name: "{props.name}",
            class: "input-field option-select",
            value: "{selected}",
            disabled: props.disabled,
            onchange: move |evt| {
                on_change.call(evt.value());
            },
            if let Some(placeholder) = props.placeholder {
                option {
                    value: "",
                    selected: selected.is_empty(),
                    "{placeholder}"
                }
            }
            for choice in props.options {
                option {
                    key: "{choice.value}",
                    value: "{choice.value}",
                    selected: choice.value == selected,
                    "{choice.label}"
                }
            }
        }
    }
}
