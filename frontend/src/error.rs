use crate::forms::FormField;

/// A problem with what the visitor typed. Shown inline, never logged as a fault.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingField(FormField),

    #[error("Please enter a valid email address")]
    InvalidEmail,
}

/// Failures talking to the hosted data store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SinkError {
    #[error("Data store is not configured")]
    NotConfigured,

    #[error("Failed to encode record: {0}")]
    Encode(String),

    #[error("Request failed: {0}")]
    Network(String),

    #[error("Data store rejected the request ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    Decode(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WizardError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Submission failed: {0}")]
    Submission(#[from] SinkError),

    #[error("Only the final step can be submitted")]
    NotOnFinalStep,

    #[error("A submission is already in progress")]
    AlreadySubmitting,

    #[error("The wizard has already finished")]
    Finished,
}

/// Errors from the standalone contact form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Submission failed: {0}")]
    Submission(#[from] SinkError),
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to parse question catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("{flow} has {found} question steps, expected {expected}")]
    WrongStepCount {
        flow: String,
        expected: usize,
        found: usize,
    },

    #[error("Step \"{prompt}\" offers no options")]
    EmptyOptions { prompt: String },

    #[error("Step \"{prompt}\" requires {min_selected} selections but offers {offered}")]
    UnsatisfiableMinimum {
        prompt: String,
        min_selected: usize,
        offered: usize,
    },

    #[error("{flow} must end with exactly one contact form step")]
    MisplacedContactForm { flow: String },
}

/// Banner text for any failed submission. The details go to the console.
pub const SUBMISSION_ERROR_MESSAGE: &str =
    "There was an error submitting your form. Please try again.";
