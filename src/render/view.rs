//! Display tree derived from the controller and the submission list.
//!
//! [`render`] is a pure function: the same state always yields the same
//! tree, and nothing in the tree refers back into the state.

use crate::form::{FormController, FormValues, Progress};
use crate::schema::{FieldDescriptor, FieldKind};
use crate::submissions::{SubmissionList, SubmissionRecord};

pub const APP_TITLE: &str = "Dynamic Form";
pub const SELECTOR_PLACEHOLDER: &str = "-- Choose --";
pub const DROPDOWN_PLACEHOLDER: &str = "-- Select --";

#[derive(Debug, Clone, PartialEq)]
pub struct View {
    pub title: &'static str,
    pub selector: SelectorView,
    pub form: Option<FormView>,
    pub table: Option<TableView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorView {
    pub options: Vec<SelectorOption>,
    pub selected: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorOption {
    pub key: &'static str,
    pub title: &'static str,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormView {
    pub form_type: String,
    pub title: Option<&'static str>,
    pub fields: Vec<FieldView>,
    pub progress: Progress,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    pub name: &'static str,
    pub label: &'static str,
    pub required: bool,
    pub control: Control,
}

/// Kind-specific input control with its current content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Control {
    Text { value: String },
    Number { value: String },
    Date { value: String },
    Password { masked: String },
    Dropdown {
        options: Vec<String>,
        selected: Option<String>,
    },
}

impl Control {
    fn build(kind: &FieldKind, value: &str) -> Self {
        match kind {
            FieldKind::Text => Control::Text {
                value: value.to_string(),
            },
            FieldKind::Number => Control::Number {
                value: value.to_string(),
            },
            FieldKind::Date => Control::Date {
                value: value.to_string(),
            },
            FieldKind::Password => Control::Password {
                masked: "*".repeat(value.chars().count()),
            },
            FieldKind::Dropdown(options) => Control::Dropdown {
                options: options.clone(),
                selected: (!value.is_empty()).then(|| value.to_string()),
            },
        }
    }

    /// Text shown for the control's current content.
    pub fn display_value(&self) -> &str {
        match self {
            Control::Text { value } | Control::Number { value } | Control::Date { value } => value,
            Control::Password { masked } => masked,
            Control::Dropdown { selected, .. } => {
                selected.as_deref().unwrap_or(DROPDOWN_PLACEHOLDER)
            }
        }
    }
}

/// Submissions table. Columns are the union of record keys in order of
/// first appearance; every cell is looked up by its column's key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    pub columns: Vec<String>,
    pub rows: Vec<TableRow>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    /// Zero-based position, the argument of the row's delete action.
    pub index: usize,
    pub cells: Vec<String>,
}

impl TableView {
    pub fn build(records: &[SubmissionRecord]) -> Option<Self> {
        if records.is_empty() {
            return None;
        }

        let mut columns: Vec<String> = Vec::new();
        for key in records.iter().flat_map(|record| record.keys()) {
            if !columns.iter().any(|column| column == key) {
                columns.push(key.to_string());
            }
        }

        let rows = records
            .iter()
            .enumerate()
            .map(|(index, record)| TableRow {
                index,
                cells: columns
                    .iter()
                    .map(|column| record.get(column).unwrap_or_default().to_string())
                    .collect(),
            })
            .collect();

        Some(Self { columns, rows })
    }
}

pub fn render(controller: &FormController<'_>, submissions: &SubmissionList) -> View {
    let schema = controller.schema();
    let selected = controller.form_type().map(str::to_string);

    let options = schema
        .form_types()
        .into_iter()
        .map(|(key, title)| SelectorOption {
            key,
            title,
            selected: selected.as_deref() == Some(key),
        })
        .collect();

    let form = controller.form_type().map(|form_type| {
        let empty = FormValues::new();
        let values = controller.values().unwrap_or(&empty);
        FormView {
            form_type: form_type.to_string(),
            title: schema.title(form_type),
            fields: field_views(controller.fields(), values),
            progress: controller.progress(),
        }
    });

    View {
        title: APP_TITLE,
        selector: SelectorView { options, selected },
        form,
        table: TableView::build(submissions.as_slice()),
    }
}

fn field_views(fields: &[FieldDescriptor], values: &FormValues) -> Vec<FieldView> {
    fields
        .iter()
        .map(|field| FieldView {
            name: field.name,
            label: field.label,
            required: field.required,
            control: Control::build(&field.kind, values.get(field.name).unwrap_or_default()),
        })
        .collect()
}
