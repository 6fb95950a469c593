use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct ErrorBannerProps {
    pub message: String,
    /// Optional second line with more specific guidance
    #[props(!optional)]
    pub hint: Option<String>,
}

#[component]
pub fn ErrorBanner(props: ErrorBannerProps) -> Element {
    rsx! {
        div {
            class: "error-banner",
            role: "alert",
            div { class: "error-message", "{props.message}" }
            if let Some(hint) = props.hint {
                div { class: "error-hint", "{hint}" }
            }
        }
    }
}
