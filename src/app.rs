//! Top-level application state: the form controller plus the submissions it
//! has produced. Owned by the caller and passed around by reference.

use crate::errors::FormError;
use crate::form::{FormController, Progress};
use crate::render::{self, View};
use crate::schema::SchemaStore;
use crate::submissions::{SubmissionList, SubmissionRecord};

pub const SUBMIT_ACK: &str = "Form submitted successfully!";
pub const DELETE_ACK: &str = "Entry deleted successfully.";

pub struct App<'a> {
    controller: FormController<'a>,
    submissions: SubmissionList,
}

impl App<'static> {
    pub fn builtin() -> Self {
        Self::new(SchemaStore::builtin())
    }
}

impl<'a> App<'a> {
    pub fn new(schema: &'a SchemaStore) -> Self {
        Self {
            controller: FormController::new(schema),
            submissions: SubmissionList::new(),
        }
    }

    pub fn controller(&self) -> &FormController<'a> {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut FormController<'a> {
        &mut self.controller
    }

    pub fn submissions(&self) -> &SubmissionList {
        &self.submissions
    }

    pub fn select_form_type(&mut self, key: &str) {
        self.controller.select_form_type(key);
    }

    pub fn set_field(&mut self, name: &str, value: &str) -> Result<Progress, FormError> {
        self.controller.set_field(name, value)
    }

    /// Submits the current form and appends the snapshot to the list.
    pub fn submit(&mut self) -> Result<&SubmissionRecord, FormError> {
        let record = self.controller.submit()?;
        Ok(self.submissions.append(record))
    }

    /// Deletes the submission at the zero-based `index`.
    pub fn delete(&mut self, index: usize) -> Option<SubmissionRecord> {
        self.submissions.remove_at(index)
    }

    pub fn view(&self) -> View {
        render::render(&self.controller, &self.submissions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_appends_and_returns_to_idle() {
        let mut app = App::builtin();
        app.select_form_type("userInfo");
        app.set_field("firstName", "Ann").unwrap();
        app.set_field("lastName", "Lee").unwrap();

        let record = app.submit().unwrap();
        assert_eq!(record.get("firstName"), Some("Ann"));
        assert_eq!(app.submissions().len(), 1);
        assert!(!app.controller().is_editing());
    }

    #[test]
    fn refused_submit_appends_nothing() {
        let mut app = App::builtin();
        app.select_form_type("userInfo");
        assert!(app.submit().is_err());
        assert!(app.submissions().is_empty());
    }

    #[test]
    fn delete_out_of_range_is_ignored() {
        let mut app = App::builtin();
        assert!(app.delete(0).is_none());
    }
}
