//! Labelled input bound to one form field.

use crate::state::AppState;
use astro_core::birth::FormField;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct FieldInputProps {
    pub field: FormField,
    pub label: String,
    /// HTML input type: "date", "time" or "number"
    pub input_type: String,
    #[props(default = "any".to_string())]
    pub step: String,
}

/// Input whose value is read from and written to the session form.
#[component]
pub fn FieldInput(props: FieldInputProps) -> Element {
    let mut state = use_context::<AppState>();
    let field = props.field;
    let value = state.session.read().field(field).to_string();

    let on_input = move |evt: Event<FormData>| {
        state.session.write().set_field(field, evt.value());
    };

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 6px; flex: 1;",
            label {
                r#for: field.name(),
                style: "color: #cbd5e1;",
                "{props.label}"
            }
            input {
                id: field.name(),
                name: field.name(),
                r#type: "{props.input_type}",
                step: "{props.step}",
                value: "{value}",
                required: true,
                style: "background: #1e293b; border: 1px solid #334155; color: #f1f5f9; padding: 8px; border-radius: 4px;",
                oninput: on_input,
            }
        }
    }
}
