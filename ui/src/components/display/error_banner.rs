use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct ErrorBannerProps {
    pub message: String,
}

/// Surfaces the single active error message under the form.
#[component]
pub fn ErrorBanner(props: ErrorBannerProps) -> Element {
    rsx! {
        div {
            class: "error-banner",
            "✗ {props.message}"
        }
    }
}
