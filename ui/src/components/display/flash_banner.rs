use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

const FLASH_DISMISS_MS: u32 = 6_000;

#[derive(Props, PartialEq, Clone)]
pub struct FlashBannerProps {
    pub message: String,
}

/// Success notice that hides itself after a few seconds or on click
#[component]
pub fn FlashBanner(props: FlashBannerProps) -> Element {
    let mut visible = use_signal(|| true);

    use_effect(move || {
        spawn(async move {
            TimeoutFuture::new(FLASH_DISMISS_MS).await;
            visible.set(false);
        });
    });

    if !visible() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "flash-banner success",
            role: "status",
            "✓ {props.message}"
            button {
                r#type: "button",
                class: "flash-dismiss",
                onclick: move |_| visible.set(false),
                "×"
            }
        }
    }
}
