use std::sync::Mutex;

use dynamic_form::app::App;
use dynamic_form::config::ConfigManager;
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Config manager backed by a unique directory for each test.
#[allow(dead_code)]
pub fn temp_config_manager() -> ConfigManager {
    let temp = TempDir::new().expect("create temp dir");
    let manager = ConfigManager::with_base_dir(temp.path());
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    manager
}

/// Selects `form_type`, applies `values`, and submits.
#[allow(dead_code)]
pub fn submit_form(app: &mut App<'_>, form_type: &str, values: &[(&str, &str)]) {
    app.select_form_type(form_type);
    for (name, value) in values {
        app.set_field(name, value).expect("valid field value");
    }
    app.submit().expect("form complete");
}
