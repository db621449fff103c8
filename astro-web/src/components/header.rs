//! Page header.

use dioxus::prelude::*;

#[component]
pub fn Header() -> Element {
    rsx! {
        div {
            style: "text-align: center; margin-bottom: 32px;",
            h1 {
                style: "margin: 0 0 8px 0; font-size: 32px; color: #a78bfa;",
                "Бесплатный краткий астропрогноз на 2026 год по вашей карте"
            }
            p {
                style: "margin: 0; color: #94a3b8; font-size: 18px;",
                "Для подписчиков Берта Маковера"
            }
        }
    }
}
