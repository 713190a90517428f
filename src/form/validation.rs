//! Per-kind input constraints, mirroring what a native input control of the
//! same type would accept. Presence of required values is checked at submit
//! time, not here.

use chrono::NaiveDate;

use crate::errors::FormError;
use crate::schema::{FieldDescriptor, FieldKind};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Normalizes `raw` for `field`, or explains why the control would reject it.
///
/// An empty value is always accepted and clears the field. Text and
/// password values are stored verbatim, whitespace included; the other kinds
/// are trimmed first, so blank input clears them.
pub fn normalize(field: &FieldDescriptor, raw: &str) -> Result<String, FormError> {
    if raw.is_empty() {
        return Ok(String::new());
    }

    let trimmed = raw.trim();
    match &field.kind {
        FieldKind::Text | FieldKind::Password => Ok(raw.to_string()),
        _ if trimmed.is_empty() => Ok(String::new()),
        FieldKind::Number => trimmed
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .map(|_| trimmed.to_string())
            .ok_or_else(|| FormError::InvalidNumber {
                field: field.label.to_string(),
                value: raw.to_string(),
            }),
        FieldKind::Date => NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
            .map(|date| date.format(DATE_FORMAT).to_string())
            .map_err(|_| FormError::InvalidDate {
                field: field.label.to_string(),
                value: raw.to_string(),
            }),
        FieldKind::Dropdown(options) => options
            .iter()
            .find(|option| option.eq_ignore_ascii_case(trimmed))
            .cloned()
            .ok_or_else(|| FormError::InvalidChoice {
                field: field.label.to_string(),
                value: raw.to_string(),
                options: options.clone(),
            }),
    }
}
