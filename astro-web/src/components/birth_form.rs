//! Birth data form: date, time, city typeahead, coordinates and submit.

use super::{CitySearch, FieldInput, CARD_STYLE};
use crate::state::{AppState, Backend};
use astro_core::birth::FormField;
use dioxus::prelude::*;

#[component]
pub fn BirthForm() -> Element {
    let state = use_context::<AppState>();
    let backend = use_context::<Backend>();
    let loading = state.session.read().is_loading();

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();
        state.submit(backend.clone());
    };

    rsx! {
        div {
            style: "{CARD_STYLE}",
            h2 {
                style: "margin: 0 0 16px 0; color: #f1f5f9;",
                "Данные рождения"
            }
            form {
                onsubmit: on_submit,
                div {
                    style: "display: flex; gap: 16px; flex-wrap: wrap;",
                    FieldInput {
                        field: FormField::BirthDate,
                        label: "Дата рождения".to_string(),
                        input_type: "date".to_string(),
                    }
                    FieldInput {
                        field: FormField::BirthTime,
                        label: "Время рождения".to_string(),
                        input_type: "time".to_string(),
                    }
                }

                CitySearch {}

                div {
                    style: "display: flex; gap: 16px; flex-wrap: wrap;",
                    FieldInput {
                        field: FormField::Latitude,
                        label: "Широта".to_string(),
                        input_type: "number".to_string(),
                        step: "0.0001".to_string(),
                    }
                    FieldInput {
                        field: FormField::Longitude,
                        label: "Долгота".to_string(),
                        input_type: "number".to_string(),
                        step: "0.0001".to_string(),
                    }
                    FieldInput {
                        field: FormField::Timezone,
                        label: "Часовой пояс (GMT+/-)".to_string(),
                        input_type: "number".to_string(),
                        step: "0.5".to_string(),
                    }
                }

                button {
                    r#type: "submit",
                    disabled: loading,
                    style: "width: 100%; margin-top: 20px; padding: 14px; font-size: 18px; font-weight: 600; color: white; background: linear-gradient(to right, #7c3aed, #4f46e5); border: none; border-radius: 6px; cursor: pointer;",
                    if loading {
                        "Получение прогноза..."
                    } else {
                        "Получить прогноз на 2026 год"
                    }
                }
            }
        }
    }
}
