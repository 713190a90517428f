//! Turns application state into a display tree and the tree into text.

pub mod table;
pub mod text;
pub mod view;

pub use text::{progress_bar, render_table, render_view, RenderOptions};
pub use view::{
    render, Control, FieldView, FormView, SelectorOption, SelectorView, TableRow, TableView,
    View, APP_TITLE, DROPDOWN_PLACEHOLDER, SELECTOR_PLACEHOLDER,
};
