//! Widget styles: palette-driven buttons, containers and inputs.

#![allow(clippy::needless_update)] // Explicit struct updates for clarity

mod buttons;
mod containers;
mod inputs;
pub mod palette;
mod shadows;

pub use palette::*;

pub use containers::{
    alert_style, app_bar_style, backdrop_style, body_box_style, card_style, chip_style,
    dialog_style, page_style, row_border_style, table_header_style, toast_style,
};

pub use buttons::{
    primary_button_style, row_button_style, secondary_button_style, tab_button_style,
};

pub use inputs::{field_editor_style, field_input_style, scrollable_style};
