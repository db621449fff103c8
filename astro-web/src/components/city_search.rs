//! City typeahead with busy indicator and suggestion list.

use crate::state::{AppState, Backend};
use astro_session::render::{render_candidates, CandidateRow};
use dioxus::prelude::*;

#[component]
pub fn CitySearch() -> Element {
    let state = use_context::<AppState>();
    let backend = use_context::<Backend>();
    let (text, searching, rows) = {
        let session = state.session.read();
        (
            session.search_text().to_string(),
            session.is_searching(),
            render_candidates(session.candidates()),
        )
    };

    let on_input = move |evt: Event<FormData>| {
        state.search(backend.clone(), evt.value());
    };

    rsx! {
        div {
            style: "position: relative; display: flex; flex-direction: column; gap: 6px; margin: 16px 0;",
            label {
                r#for: "citySearch",
                style: "color: #cbd5e1;",
                "Место рождения (город)"
            }
            input {
                id: "citySearch",
                r#type: "text",
                value: "{text}",
                placeholder: "Начните вводить название города...",
                autocomplete: "off",
                style: "background: #1e293b; border: 1px solid #334155; color: #f1f5f9; padding: 8px; border-radius: 4px;",
                oninput: on_input,
            }
            if searching {
                span {
                    style: "position: absolute; right: 12px; top: 38px; color: #a78bfa; font-size: 12px;",
                    "Поиск..."
                }
            }
            if !rows.is_empty() {
                div {
                    style: "position: absolute; top: 100%; z-index: 10; width: 100%; max-height: 240px; overflow-y: auto; background: #1e293b; border: 1px solid #334155; border-radius: 6px;",
                    for row in rows {
                        CandidateButton { key: "{row.index}", row: row.clone() }
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct CandidateButtonProps {
    pub row: CandidateRow,
}

/// One suggestion; clicking it binds the city into the form.
#[component]
pub fn CandidateButton(props: CandidateButtonProps) -> Element {
    let mut state = use_context::<AppState>();
    let index = props.row.index;

    let on_click = move |_: Event<MouseData>| {
        state.session.write().select_index(index);
    };

    rsx! {
        button {
            r#type: "button",
            style: "display: block; width: 100%; text-align: left; padding: 10px 16px; background: transparent; border: none; border-bottom: 1px solid #334155; cursor: pointer;",
            onclick: on_click,
            div {
                style: "color: #f1f5f9;",
                "{props.row.title}"
            }
            div {
                style: "color: #94a3b8; font-size: 13px;",
                "{props.row.detail}"
            }
        }
    }
}
