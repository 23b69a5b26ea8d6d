//! Question sets for the lead wizards.
//!
//! The table lives in `assets/question_sets.json` and is embedded at build
//! time. It is parsed once when the app starts; every wizard borrows the same
//! [`QuestionCatalog`] afterwards.

use log::warn;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::CatalogError;

const BUILTIN_CATALOG: &str = include_str!("../../assets/question_sets.json");

/// Every category question set has this many question steps before the contact form.
pub const QUESTIONS_PER_SET: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    LifeInsurance,
    InvestmentSolutions,
    CreditRepair,
    InsuranceAndInvestments,
    MultipleServices,
    NotSureYet,
}

impl Category {
    /// In the order the first wizard step lists them.
    pub const ALL: [Category; 6] = [
        Category::LifeInsurance,
        Category::InvestmentSolutions,
        Category::CreditRepair,
        Category::InsuranceAndInvestments,
        Category::MultipleServices,
        Category::NotSureYet,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::LifeInsurance => "Life Insurance",
            Category::InvestmentSolutions => "Investment Solutions",
            Category::CreditRepair => "Credit Repair",
            Category::InsuranceAndInvestments => "Insurance & Investments",
            Category::MultipleServices => "Multiple Services",
            Category::NotSureYet => "Not Sure Yet",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.label() == label)
    }
}

/// Which answer a step writes to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerKey {
    Interest,
    Timeline,
    CurrentCoverage,
    Budget,
    CurrentCreditScore,
    CreditConcerns,
    FinancialGoals,
}

fn default_min_selected() -> usize {
    1
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WizardStep {
    SingleChoice {
        prompt: String,
        #[serde(default)]
        hint: Option<String>,
        options: Vec<String>,
        target: AnswerKey,
    },
    MultiChoice {
        prompt: String,
        #[serde(default)]
        hint: Option<String>,
        options: Vec<String>,
        target: AnswerKey,
        #[serde(default = "default_min_selected")]
        min_selected: usize,
    },
    ContactForm {
        prompt: String,
        #[serde(default)]
        hint: Option<String>,
    },
}

impl WizardStep {
    pub fn prompt(&self) -> &str {
        match self {
            WizardStep::SingleChoice { prompt, .. }
            | WizardStep::MultiChoice { prompt, .. }
            | WizardStep::ContactForm { prompt, .. } => prompt,
        }
    }

    pub fn hint(&self) -> Option<&str> {
        match self {
            WizardStep::SingleChoice { hint, .. }
            | WizardStep::MultiChoice { hint, .. }
            | WizardStep::ContactForm { hint, .. } => hint.as_deref(),
        }
    }

    pub fn target(&self) -> Option<AnswerKey> {
        match self {
            WizardStep::SingleChoice { target, .. } | WizardStep::MultiChoice { target, .. } => {
                Some(*target)
            }
            WizardStep::ContactForm { .. } => None,
        }
    }

    pub fn options(&self) -> &[String] {
        match self {
            WizardStep::SingleChoice { options, .. } | WizardStep::MultiChoice { options, .. } => {
                options
            }
            WizardStep::ContactForm { .. } => &[],
        }
    }

    pub fn offers(&self, value: &str) -> bool {
        self.options().iter().any(|option| option == value)
    }

    pub fn is_contact_form(&self) -> bool {
        matches!(self, WizardStep::ContactForm { .. })
    }

    fn check(&self) -> Result<(), CatalogError> {
        match self {
            WizardStep::SingleChoice { prompt, options, .. } if options.is_empty() => {
                Err(CatalogError::EmptyOptions { prompt: prompt.clone() })
            }
            WizardStep::MultiChoice { prompt, options, min_selected, .. } => {
                if options.is_empty() {
                    Err(CatalogError::EmptyOptions { prompt: prompt.clone() })
                } else if *min_selected > options.len() {
                    Err(CatalogError::UnsatisfiableMinimum {
                        prompt: prompt.clone(),
                        min_selected: *min_selected,
                        offered: options.len(),
                    })
                } else {
                    Ok(())
                }
            }
            _ => Ok(()),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WizardKind {
    /// General assessment, optionally seeded with a category.
    Lead,
    CreditRepair,
}

/// Wording around the steps that differs between the two wizards.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct FlowCopy {
    pub title: String,
    pub success_heading: String,
    pub success_message: String,
    pub submit_label: String,
    pub disclaimer: String,
    pub message_label: String,
    pub message_placeholder: String,
}

#[derive(Deserialize)]
struct CatalogFile {
    lead: LeadFlowFile,
    credit_repair: CreditRepairFlowFile,
}

#[derive(Deserialize)]
struct LeadFlowFile {
    copy: FlowCopy,
    category_prompt: String,
    question_sets: Vec<QuestionSetFile>,
    default_questions: Vec<WizardStep>,
    contact: WizardStep,
}

#[derive(Deserialize)]
struct QuestionSetFile {
    category: Category,
    questions: Vec<WizardStep>,
}

#[derive(Deserialize)]
struct CreditRepairFlowFile {
    copy: FlowCopy,
    steps: Vec<WizardStep>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct QuestionCatalog {
    lead_copy: FlowCopy,
    category_step: WizardStep,
    /// Full sequences, contact form included.
    question_sets: HashMap<Category, Vec<WizardStep>>,
    default_set: Vec<WizardStep>,
    credit_repair_copy: FlowCopy,
    credit_repair_steps: Vec<WizardStep>,
}

fn question_set(
    flow: String,
    questions: Vec<WizardStep>,
    contact: &WizardStep,
) -> Result<Vec<WizardStep>, CatalogError> {
    if questions.len() != QUESTIONS_PER_SET {
        return Err(CatalogError::WrongStepCount {
            flow,
            expected: QUESTIONS_PER_SET,
            found: questions.len(),
        });
    }
    if questions.iter().any(WizardStep::is_contact_form) {
        return Err(CatalogError::MisplacedContactForm { flow });
    }
    for step in &questions {
        step.check()?;
    }

    let mut steps = questions;
    steps.push(contact.clone());
    Ok(steps)
}

impl QuestionCatalog {
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_CATALOG)
    }

    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(raw)?;
        let lead = file.lead;

        if !lead.contact.is_contact_form() {
            return Err(CatalogError::MisplacedContactForm { flow: "lead".to_string() });
        }

        let category_step = WizardStep::SingleChoice {
            prompt: lead.category_prompt,
            hint: None,
            options: Category::ALL.iter().map(|c| c.label().to_string()).collect(),
            target: AnswerKey::Interest,
        };

        let mut question_sets = HashMap::new();
        for set in lead.question_sets {
            let steps = question_set(
                format!("{} question set", set.category.label()),
                set.questions,
                &lead.contact,
            )?;
            question_sets.insert(set.category, steps);
        }
        let default_set = question_set(
            "default question set".to_string(),
            lead.default_questions,
            &lead.contact,
        )?;

        let credit_repair_steps = file.credit_repair.steps;
        let contact_forms = credit_repair_steps
            .iter()
            .filter(|step| step.is_contact_form())
            .count();
        let ends_with_contact = credit_repair_steps
            .last()
            .map_or(false, WizardStep::is_contact_form);
        if contact_forms != 1 || !ends_with_contact {
            return Err(CatalogError::MisplacedContactForm {
                flow: "credit repair".to_string(),
            });
        }
        for step in &credit_repair_steps {
            step.check()?;
        }

        Ok(Self {
            lead_copy: lead.copy,
            category_step,
            question_sets,
            default_set,
            credit_repair_copy: file.credit_repair.copy,
            credit_repair_steps,
        })
    }

    /// Steps that follow the category choice. Categories without their own set,
    /// and no category at all, get the default set.
    pub fn resolve(&self, category: Option<Category>) -> &[WizardStep] {
        category
            .and_then(|category| self.question_sets.get(&category))
            .unwrap_or(&self.default_set)
    }

    pub fn resolve_label(&self, label: &str) -> &[WizardStep] {
        let category = Category::from_label(label);
        if category.is_none() {
            warn!("Unknown service category {:?}, using default questions", label);
        }
        self.resolve(category)
    }

    /// The "what are you interested in" step shown when no category was preselected.
    pub fn category_step(&self) -> &WizardStep {
        &self.category_step
    }

    pub fn credit_repair_steps(&self) -> &[WizardStep] {
        &self.credit_repair_steps
    }

    pub fn copy(&self, kind: WizardKind) -> &FlowCopy {
        match kind {
            WizardKind::Lead => &self.lead_copy,
            WizardKind::CreditRepair => &self.credit_repair_copy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> QuestionCatalog {
        QuestionCatalog::builtin().expect("embedded catalog parses")
    }

    #[test]
    fn every_category_resolves_to_three_questions_and_contact() {
        let catalog = catalog();
        for category in Category::ALL {
            let steps = catalog.resolve(Some(category));
            assert_eq!(steps.len(), 4, "{:?}", category);
            assert!(steps[..3].iter().all(|s| !s.is_contact_form()));
            assert!(steps[3].is_contact_form());
        }
        assert_eq!(catalog.resolve(None).len(), 4);
    }

    #[test]
    fn unrecognised_labels_fall_back_to_default_set() {
        let catalog = catalog();
        let default = catalog.resolve(None).to_vec();
        for label in ["", "life insurance", "Life Insurence", "Mortgages"] {
            assert_eq!(catalog.resolve_label(label), default.as_slice());
        }
        assert_eq!(
            catalog.resolve(Some(Category::MultipleServices)),
            default.as_slice()
        );
    }

    #[test]
    fn dedicated_sets_differ_from_default() {
        let catalog = catalog();
        let life = catalog.resolve_label("Life Insurance");
        assert_eq!(
            life[0].prompt(),
            "What type of life insurance are you interested in?"
        );
        assert_ne!(life, catalog.resolve(None));
        assert_eq!(
            catalog.resolve(Some(Category::CreditRepair))[0].prompt(),
            "What is your current credit score range?"
        );
    }

    #[test]
    fn lead_questions_write_the_shared_columns() {
        let catalog = catalog();
        for category in Category::ALL {
            let targets: Vec<_> = catalog
                .resolve(Some(category))
                .iter()
                .filter_map(WizardStep::target)
                .collect();
            assert_eq!(
                targets,
                [AnswerKey::Timeline, AnswerKey::CurrentCoverage, AnswerKey::Budget]
            );
        }
    }

    #[test]
    fn category_step_lists_every_category() {
        let catalog = catalog();
        let step = catalog.category_step();
        assert_eq!(step.target(), Some(AnswerKey::Interest));
        assert_eq!(step.options().len(), Category::ALL.len());
        for category in Category::ALL {
            assert!(step.offers(category.label()));
            assert_eq!(Category::from_label(category.label()), Some(category));
        }
    }

    #[test]
    fn credit_repair_flow_has_two_multi_choice_steps() {
        let catalog = catalog();
        let steps = catalog.credit_repair_steps();
        assert_eq!(steps.len(), 5);
        assert!(matches!(
            steps[1],
            WizardStep::MultiChoice { target: AnswerKey::CreditConcerns, min_selected: 1, .. }
        ));
        assert!(matches!(
            steps[2],
            WizardStep::MultiChoice { target: AnswerKey::FinancialGoals, min_selected: 1, .. }
        ));
        assert!(steps[4].is_contact_form());
        assert_eq!(catalog.copy(WizardKind::CreditRepair).title, "Free Credit Repair Assessment");
    }

    #[test]
    fn unknown_category_tag_fails_to_load() {
        let raw = BUILTIN_CATALOG.replace("\"investment_solutions\"", "\"investmnet_solutions\"");
        assert!(matches!(
            QuestionCatalog::from_json(&raw),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn short_question_set_is_rejected() {
        let mut value: serde_json::Value = serde_json::from_str(BUILTIN_CATALOG).unwrap();
        value["lead"]["default_questions"]
            .as_array_mut()
            .unwrap()
            .pop();
        let err = QuestionCatalog::from_json(&value.to_string()).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::WrongStepCount { expected: 3, found: 2, .. }
        ));
    }

    #[test]
    fn unsatisfiable_minimum_is_rejected() {
        let mut value: serde_json::Value = serde_json::from_str(BUILTIN_CATALOG).unwrap();
        value["credit_repair"]["steps"][1]["min_selected"] = serde_json::json!(50);
        let err = QuestionCatalog::from_json(&value.to_string()).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::UnsatisfiableMinimum { min_selected: 50, offered: 11, .. }
        ));
    }

    #[test]
    fn credit_repair_flow_must_end_with_contact() {
        let mut value: serde_json::Value = serde_json::from_str(BUILTIN_CATALOG).unwrap();
        value["credit_repair"]["steps"].as_array_mut().unwrap().pop();
        assert!(matches!(
            QuestionCatalog::from_json(&value.to_string()),
            Err(CatalogError::MisplacedContactForm { .. })
        ));
    }
}
