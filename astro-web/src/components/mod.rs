//! RSX components of the forecast page.

mod birth_form;
mod city_search;
mod error_display;
mod field_input;
mod header;
mod result_view;

pub use birth_form::BirthForm;
pub use city_search::CitySearch;
pub use error_display::ErrorDisplay;
pub use field_input::FieldInput;
pub use header::Header;
pub use result_view::ResultView;

pub(crate) const CARD_STYLE: &str = "background: #0f172a; border: 1px solid #1e293b; border-radius: 8px; padding: 20px; margin: 16px 0;";
pub(crate) const TILE_STYLE: &str = "background: #1e293b; border: 1px solid #334155; border-radius: 6px; padding: 12px;";
