pub mod catalog;
pub mod records;
pub mod sequencer;

pub use catalog::{AnswerKey, Category, QuestionCatalog, WizardKind, WizardStep};
pub use sequencer::{Wizard, WizardStatus};
