//! Submitted form snapshots kept for the lifetime of the session.

use chrono::{DateTime, Utc};
use serde::{ser::Serializer, Serialize};
use uuid::Uuid;

use crate::form::FormValues;
use crate::schema::FieldDescriptor;

/// Immutable snapshot of form values captured at submit time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionRecord {
    pub id: Uuid,
    pub form_type: String,
    pub submitted_at: DateTime<Utc>,
    #[serde(serialize_with = "serialize_entries")]
    values: Vec<(String, String)>,
}

impl SubmissionRecord {
    /// Copies `values`, ordered by the schema's field order. Keys outside
    /// `fields` are not carried over.
    pub fn capture(form_type: &str, fields: &[FieldDescriptor], values: &FormValues) -> Self {
        let values = fields
            .iter()
            .filter_map(|field| {
                values
                    .get(field.name)
                    .map(|value| (field.name.to_string(), value.to_string()))
            })
            .collect();
        Self {
            id: Uuid::new_v4(),
            form_type: form_type.to_string(),
            submitted_at: Utc::now(),
            values,
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Field names in capture order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(|(key, _)| key.as_str())
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

fn serialize_entries<S: Serializer>(
    entries: &[(String, String)],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_map(entries.iter().map(|(key, value)| (key, value)))
}

/// Ordered list of submitted records.
#[derive(Debug, Clone, Default)]
pub struct SubmissionList {
    records: Vec<SubmissionRecord>,
}

impl SubmissionList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `record` at the end. Duplicates are allowed.
    pub fn append(&mut self, record: SubmissionRecord) -> &SubmissionRecord {
        tracing::info!(
            id = %record.id,
            form_type = %record.form_type,
            position = self.records.len(),
            "submission appended"
        );
        self.records.push(record);
        &self.records[self.records.len() - 1]
    }

    /// Removes the record at `index`, shifting later records down. Returns
    /// `None` without touching the list when `index` is out of range.
    pub fn remove_at(&mut self, index: usize) -> Option<SubmissionRecord> {
        if index >= self.records.len() {
            tracing::warn!(index, len = self.records.len(), "ignored out-of-range removal");
            return None;
        }
        let record = self.records.remove(index);
        tracing::info!(id = %record.id, index, "submission removed");
        Some(record)
    }

    pub fn get(&self, index: usize) -> Option<&SubmissionRecord> {
        self.records.get(index)
    }

    pub fn first(&self) -> Option<&SubmissionRecord> {
        self.records.first()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SubmissionRecord> {
        self.records.iter()
    }

    pub fn as_slice(&self) -> &[SubmissionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }
}
