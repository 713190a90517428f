//! Form editing: value storage, progress tracking, the controller state
//! machine, and the step-by-step wizard that drives it.

pub mod controller;
pub mod progress;
pub mod validation;
pub mod values;
pub mod wizard;

pub use controller::{FormController, FormState};
pub use progress::Progress;
pub use values::FormValues;
pub use wizard::{
    ConfirmationResponse, FormInteraction, FormWizard, PromptContext, PromptResponse,
    WizardOutcome,
};
