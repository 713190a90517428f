//! Static form schemas keyed by form type.
//!
//! The schema is built once on first use and never changes afterwards. An
//! unknown form type is not an error: it simply has no fields.

use once_cell::sync::Lazy;

/// Input control rendered for a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Number,
    Dropdown(Vec<String>),
    Date,
    Password,
}

impl FieldKind {
    pub fn label(&self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Number => "number",
            FieldKind::Dropdown(_) => "dropdown",
            FieldKind::Date => "date",
            FieldKind::Password => "password",
        }
    }

    pub fn options(&self) -> Option<&[String]> {
        match self {
            FieldKind::Dropdown(options) => Some(options),
            _ => None,
        }
    }
}

/// Declarative description of a single form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldDescriptor {
    pub fn new(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            kind,
            required: true,
        }
    }

    pub fn with_optional(mut self) -> Self {
        self.required = false;
        self
    }
}

/// A selectable form type and its ordered fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormDescriptor {
    pub key: &'static str,
    pub title: &'static str,
    pub fields: Vec<FieldDescriptor>,
}

impl FormDescriptor {
    pub fn new(key: &'static str, title: &'static str, fields: Vec<FieldDescriptor>) -> Self {
        Self { key, title, fields }
    }
}

/// Read-only mapping from form-type key to field descriptors.
#[derive(Debug, Clone, Default)]
pub struct SchemaStore {
    forms: Vec<FormDescriptor>,
}

impl SchemaStore {
    pub fn new(forms: Vec<FormDescriptor>) -> Self {
        Self { forms }
    }

    /// Shared store holding the built-in form types.
    pub fn builtin() -> &'static SchemaStore {
        &BUILTIN
    }

    /// Fields for `key`, or an empty slice when the key is unknown.
    pub fn lookup(&self, key: &str) -> &[FieldDescriptor] {
        self.form(key)
            .map(|form| form.fields.as_slice())
            .unwrap_or(&[])
    }

    pub fn form(&self, key: &str) -> Option<&FormDescriptor> {
        self.forms.iter().find(|form| form.key == key)
    }

    pub fn field(&self, key: &str, name: &str) -> Option<&FieldDescriptor> {
        self.lookup(key).iter().find(|field| field.name == name)
    }

    pub fn title(&self, key: &str) -> Option<&'static str> {
        self.form(key).map(|form| form.title)
    }

    /// `(key, title)` pairs in selector order.
    pub fn form_types(&self) -> Vec<(&'static str, &'static str)> {
        self.forms.iter().map(|form| (form.key, form.title)).collect()
    }

    /// Resolves user input to a known key, ignoring ASCII case.
    pub fn resolve_key(&self, input: &str) -> Option<&'static str> {
        let needle = input.trim();
        self.forms
            .iter()
            .find(|form| form.key.eq_ignore_ascii_case(needle))
            .map(|form| form.key)
    }
}

static BUILTIN: Lazy<SchemaStore> = Lazy::new(|| SchemaStore::new(builtin_forms()));

fn builtin_forms() -> Vec<FormDescriptor> {
    let states = ["California", "Texas", "New York"]
        .iter()
        .map(|state| state.to_string())
        .collect();

    vec![
        FormDescriptor::new(
            "userInfo",
            "User Information",
            vec![
                FieldDescriptor::new("firstName", "First Name", FieldKind::Text),
                FieldDescriptor::new("lastName", "Last Name", FieldKind::Text),
                FieldDescriptor::new("age", "Age", FieldKind::Number).with_optional(),
            ],
        ),
        FormDescriptor::new(
            "addressInfo",
            "Address Information",
            vec![
                FieldDescriptor::new("street", "Street", FieldKind::Text),
                FieldDescriptor::new("city", "City", FieldKind::Text),
                FieldDescriptor::new("state", "State", FieldKind::Dropdown(states)),
                FieldDescriptor::new("zipCode", "Zip Code", FieldKind::Text).with_optional(),
            ],
        ),
        FormDescriptor::new(
            "paymentInfo",
            "Payment Information",
            vec![
                FieldDescriptor::new("cardNumber", "Card Number", FieldKind::Text),
                FieldDescriptor::new("expiryDate", "Expiry Date", FieldKind::Date),
                FieldDescriptor::new("cvv", "CVV", FieldKind::Password),
                FieldDescriptor::new("cardholderName", "Cardholder Name", FieldKind::Text),
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn builtin_lists_form_types_in_selector_order() {
        let keys: Vec<_> = SchemaStore::builtin()
            .form_types()
            .into_iter()
            .map(|(key, _)| key)
            .collect();
        assert_eq!(keys, vec!["userInfo", "addressInfo", "paymentInfo"]);
    }

    #[test]
    fn unknown_key_has_no_fields() {
        let store = SchemaStore::builtin();
        assert!(store.lookup("shippingInfo").is_empty());
        assert!(store.lookup("").is_empty());
        assert!(store.title("shippingInfo").is_none());
    }

    #[test]
    fn field_names_are_unique_per_form() {
        for (key, _) in SchemaStore::builtin().form_types() {
            let fields = SchemaStore::builtin().lookup(key);
            let names: HashSet<_> = fields.iter().map(|field| field.name).collect();
            assert_eq!(names.len(), fields.len(), "duplicate field in {key}");
        }
    }

    #[test]
    fn only_dropdowns_carry_options() {
        let store = SchemaStore::builtin();
        let state = store.field("addressInfo", "state").unwrap();
        assert_eq!(
            state.kind.options().unwrap(),
            &["California", "Texas", "New York"]
        );
        let city = store.field("addressInfo", "city").unwrap();
        assert!(city.kind.options().is_none());
    }

    #[test]
    fn resolve_key_ignores_case() {
        let store = SchemaStore::builtin();
        assert_eq!(store.resolve_key("USERINFO"), Some("userInfo"));
        assert_eq!(store.resolve_key(" paymentinfo "), Some("paymentInfo"));
        assert_eq!(store.resolve_key("nope"), None);
    }
}
