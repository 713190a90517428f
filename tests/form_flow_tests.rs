mod common;

use dynamic_form::app::App;
use dynamic_form::errors::FormError;
use dynamic_form::form::{FormController, FormState, Progress};
use dynamic_form::schema::{FieldDescriptor, FieldKind, FormDescriptor, SchemaStore};

use common::submit_form;

#[test]
fn user_info_reaches_full_progress_and_submits() {
    let mut app = App::builtin();
    app.select_form_type("userInfo");
    assert_eq!(app.controller().progress().rounded(), 0);

    app.set_field("firstName", "Ann").unwrap();
    assert_eq!(app.controller().progress().rounded(), 50);
    let progress = app.set_field("lastName", "Lee").unwrap();
    assert_eq!(progress.rounded(), 100);
    assert!(progress.is_complete());

    let record = app.submit().unwrap();
    assert_eq!(record.form_type, "userInfo");
    assert_eq!(record.get("firstName"), Some("Ann"));
    assert!(matches!(app.controller().state(), FormState::Idle));
}

#[test]
fn address_info_one_of_three_is_thirty_three_percent() {
    let mut app = App::builtin();
    app.select_form_type("addressInfo");
    let progress = app.set_field("city", "Austin").unwrap();
    assert_eq!(
        progress,
        Progress {
            completed: 1,
            required: 3
        }
    );
    assert_eq!(progress.to_string(), "33%");
}

#[test]
fn optional_fields_do_not_move_progress() {
    let mut app = App::builtin();
    app.select_form_type("userInfo");
    let progress = app.set_field("age", "41").unwrap();
    assert_eq!(progress.rounded(), 0);
}

#[test]
fn switching_forms_discards_unsaved_values() {
    let mut app = App::builtin();
    app.select_form_type("userInfo");
    app.set_field("firstName", "Ann").unwrap();
    app.select_form_type("paymentInfo");
    app.select_form_type("userInfo");
    assert_eq!(app.controller().value("firstName"), None);
    assert_eq!(app.controller().progress().rounded(), 0);
}

#[test]
fn delete_removes_only_the_chosen_row() {
    let mut app = App::builtin();
    submit_form(&mut app, "userInfo", &[("firstName", "Ann"), ("lastName", "Lee")]);
    submit_form(
        &mut app,
        "addressInfo",
        &[("street", "1 Main St"), ("city", "Austin"), ("state", "Texas")],
    );

    let removed = app.delete(0).unwrap();
    assert_eq!(removed.form_type, "userInfo");
    assert_eq!(app.submissions().len(), 1);
    assert_eq!(
        app.submissions().first().unwrap().form_type,
        "addressInfo"
    );
    assert!(app.delete(3).is_none());
}

#[test]
fn invalid_values_are_rejected_without_changing_state() {
    let mut app = App::builtin();
    app.select_form_type("paymentInfo");
    assert!(matches!(
        app.set_field("expiryDate", "next year"),
        Err(FormError::InvalidDate { .. })
    ));
    app.select_form_type("addressInfo");
    assert!(matches!(
        app.set_field("state", "Ohio"),
        Err(FormError::InvalidChoice { .. })
    ));
    assert_eq!(app.set_field("state", "texas").unwrap().rounded(), 33);
    assert_eq!(app.controller().value("state"), Some("Texas"));
    assert!(matches!(
        app.set_field("country", "US"),
        Err(FormError::UnknownField { .. })
    ));
}

#[test]
fn custom_schema_drives_the_controller() {
    let schema = SchemaStore::new(vec![FormDescriptor::new(
        "survey",
        "Survey",
        vec![
            FieldDescriptor::new("score", "Score", FieldKind::Number),
            FieldDescriptor::new("notes", "Notes", FieldKind::Text).with_optional(),
        ],
    )]);
    let mut controller = FormController::new(&schema);
    controller.select_form_type("survey");
    assert_eq!(controller.fields().len(), 2);
    assert!(controller.set_field("score", "seven").is_err());
    assert_eq!(controller.set_field("score", "7").unwrap().rounded(), 100);

    let record = controller.submit().unwrap();
    assert_eq!(record.keys().collect::<Vec<_>>(), vec!["score"]);
}

#[test]
fn unknown_form_type_has_no_fields_and_no_progress() {
    let mut controller = FormController::builtin();
    controller.select_form_type("surveyInfo");
    assert!(controller.is_editing());
    assert!(controller.fields().is_empty());
    assert_eq!(controller.progress().percent(), 0.0);
}
