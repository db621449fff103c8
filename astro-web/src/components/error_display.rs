//! Error display component.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
}

/// Displays the submission error in a styled box.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            style: "padding: 12px 16px; margin: 16px 0; background: rgba(127, 29, 29, 0.2); color: #f87171; border-radius: 8px; border: 1px solid #991b1b;",
            "{props.message}"
        }
    }
}
