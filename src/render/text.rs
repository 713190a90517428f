//! Plain-text rendering of a [`View`] for the terminal.

use crate::form::Progress;
use crate::render::table::{Alignment, Table, TableColumn};
use crate::render::view::{
    Control, FormView, SelectorView, TableView, View, DROPDOWN_PLACEHOLDER, SELECTOR_PLACEHOLDER,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// ASCII-only rules and bars.
    pub plain: bool,
    pub progress_width: usize,
    pub max_column_width: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            plain: false,
            progress_width: 20,
            max_column_width: 24,
        }
    }
}

/// Fixed-width bar followed by the rounded percentage, e.g. `[#####-----] 50%`.
pub fn progress_bar(progress: Progress, width: usize, plain: bool) -> String {
    let filled = ((progress.percent() / 100.0) * width as f64).round() as usize;
    let filled = filled.min(width);
    let (full, empty) = if plain { ('#', '-') } else { ('█', '░') };
    format!(
        "[{}{}] {}",
        full.to_string().repeat(filled),
        empty.to_string().repeat(width - filled),
        progress
    )
}

pub fn render_selector(selector: &SelectorView) -> String {
    let mut lines = vec!["Select Form Type:".to_string()];
    let none_marker = if selector.selected.is_none() { '>' } else { ' ' };
    lines.push(format!("  {none_marker} {SELECTOR_PLACEHOLDER}"));
    for option in &selector.options {
        let marker = if option.selected { '>' } else { ' ' };
        lines.push(format!("  {marker} {:<12} {}", option.key, option.title));
    }
    lines.join("\n")
}

pub fn render_form(form: &FormView, options: &RenderOptions) -> String {
    let heading = form.title.unwrap_or(form.form_type.as_str());
    let mut lines = vec![format!("{heading} ({})", form.form_type)];

    if form.fields.is_empty() {
        lines.push("  (this form has no fields)".to_string());
    }

    let label_width = form
        .fields
        .iter()
        .map(|field| field.label.chars().count() + usize::from(field.required) * 2)
        .max()
        .unwrap_or(0);

    for field in &form.fields {
        let label = if field.required {
            format!("{} *", field.label)
        } else {
            field.label.to_string()
        };
        let control = match &field.control {
            Control::Dropdown { options, selected } => {
                let value = selected.as_deref().unwrap_or(DROPDOWN_PLACEHOLDER);
                format!("[{value}] ({})", options.join(" | "))
            }
            other => format!("[{}]", other.display_value()),
        };
        lines.push(format!(
            "  {label:<label_width$}  {control}  <{}: {}>",
            field.name,
            kind_hint(&field.control)
        ));
    }

    lines.push(format!(
        "  {}",
        progress_bar(form.progress, options.progress_width, options.plain)
    ));
    lines.join("\n")
}

fn kind_hint(control: &Control) -> &'static str {
    match control {
        Control::Text { .. } => "text",
        Control::Number { .. } => "number",
        Control::Date { .. } => "date YYYY-MM-DD",
        Control::Password { .. } => "password",
        Control::Dropdown { .. } => "dropdown",
    }
}

/// Submissions table with a leading row number and a trailing delete action.
pub fn render_table(table: &TableView, options: &RenderOptions) -> String {
    let mut columns = vec![TableColumn::new("#").with_alignment(Alignment::Right)];
    columns.extend(
        table
            .columns
            .iter()
            .map(|header| TableColumn::new(header.clone()).with_max_width(options.max_column_width)),
    );
    columns.push(TableColumn::new("Actions"));

    let rows = table
        .rows
        .iter()
        .map(|row| {
            let number = row.index + 1;
            let mut cells = Vec::with_capacity(row.cells.len() + 2);
            cells.push(number.to_string());
            cells.extend(row.cells.iter().cloned());
            cells.push(format!("delete {number}"));
            cells
        })
        .collect();

    let mut rendered = Table::new(columns, rows);
    rendered.plain = options.plain;
    rendered.render()
}

pub fn render_view(view: &View, options: &RenderOptions) -> String {
    let mut sections = vec![format!("=== {} ===", view.title), render_selector(&view.selector)];
    if let Some(form) = &view.form {
        sections.push(render_form(form, options));
    }
    match &view.table {
        Some(table) => sections.push(render_table(table, options)),
        None => sections.push("No submissions yet.".to_string()),
    }
    sections.join("\n\n")
}
