use thiserror::Error;

/// Failures raised while editing or submitting a form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("No form selected. Use `select <form>` first.")]
    NoFormSelected,
    #[error("Form `{form}` has no field named `{field}`")]
    UnknownField { form: String, field: String },
    #[error("{field} must be a number (got `{value}`)")]
    InvalidNumber { field: String, value: String },
    #[error("{field} must use YYYY-MM-DD format (got `{value}`)")]
    InvalidDate { field: String, value: String },
    #[error("{field} must be one of: {} (got `{value}`)", .options.join(", "))]
    InvalidChoice {
        field: String,
        value: String,
        options: Vec<String>,
    },
    #[error("Required fields are empty: {}", .0.join(", "))]
    MissingRequired(Vec<String>),
}

/// Failures raised while loading, saving, or editing the configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Configuration format error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Unknown configuration key `{0}`")]
    UnknownKey(String),
    #[error("Invalid value for `{key}`: {message}")]
    InvalidValue { key: String, message: String },
}

/// Fatal shell error; anything else is reported and the loop continues.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Line editor failed: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
    #[error("Prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_required_lists_labels() {
        let err = FormError::MissingRequired(vec!["First Name".into(), "Last Name".into()]);
        assert_eq!(
            err.to_string(),
            "Required fields are empty: First Name, Last Name"
        );
    }

    #[test]
    fn invalid_choice_lists_options() {
        let err = FormError::InvalidChoice {
            field: "State".into(),
            value: "Ohio".into(),
            options: vec!["California".into(), "Texas".into()],
        };
        assert_eq!(
            err.to_string(),
            "State must be one of: California, Texas (got `Ohio`)"
        );
    }
}
