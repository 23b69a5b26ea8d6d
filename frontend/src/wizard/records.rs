use serde::Serialize;
use serde_json::Value;

use super::catalog::{AnswerKey, WizardKind};
use super::sequencer::WizardAnswers;
use crate::supabase::{CREDIT_REPAIR_LEADS_TABLE, LEADS_TABLE};

/// Row for the `leads` table. Column names are fixed by the table schema.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LeadRecord {
    pub interest: String,
    pub timeline: String,
    pub current_coverage: String,
    pub budget: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

/// Row for the `credit_repair_leads` table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CreditRepairLeadRecord {
    pub current_credit_score: String,
    pub credit_concerns: Vec<String>,
    pub financial_goals: Vec<String>,
    pub timeline: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl LeadRecord {
    pub fn from_answers(answers: &WizardAnswers) -> Self {
        let contact = &answers.contact;
        Self {
            interest: answers
                .selected_category
                .map(|category| category.label().to_string())
                .unwrap_or_default(),
            timeline: answers.single(AnswerKey::Timeline).unwrap_or_default().to_string(),
            current_coverage: answers
                .single(AnswerKey::CurrentCoverage)
                .unwrap_or_default()
                .to_string(),
            budget: answers.single(AnswerKey::Budget).unwrap_or_default().to_string(),
            name: contact.name.trim().to_string(),
            email: contact.email.trim().to_string(),
            phone: contact.phone.trim().to_string(),
            message: contact.message.clone(),
        }
    }
}

impl CreditRepairLeadRecord {
    pub fn from_answers(answers: &WizardAnswers) -> Self {
        let contact = &answers.contact;
        Self {
            current_credit_score: answers
                .single(AnswerKey::CurrentCreditScore)
                .unwrap_or_default()
                .to_string(),
            credit_concerns: answers.multi(AnswerKey::CreditConcerns).to_vec(),
            financial_goals: answers.multi(AnswerKey::FinancialGoals).to_vec(),
            timeline: answers.single(AnswerKey::Timeline).unwrap_or_default().to_string(),
            name: contact.name.trim().to_string(),
            email: contact.email.trim().to_string(),
            phone: contact.phone.trim().to_string(),
            message: contact.message.clone(),
        }
    }
}

/// One insert, ready to hand to a sink.
#[derive(Clone, Debug, PartialEq)]
pub struct SubmissionRequest {
    pub table: &'static str,
    pub record: Value,
}

impl WizardKind {
    pub fn table(self) -> &'static str {
        match self {
            WizardKind::Lead => LEADS_TABLE,
            WizardKind::CreditRepair => CREDIT_REPAIR_LEADS_TABLE,
        }
    }
}

pub fn build_submission(
    kind: WizardKind,
    answers: &WizardAnswers,
) -> Result<SubmissionRequest, serde_json::Error> {
    let record = match kind {
        WizardKind::Lead => serde_json::to_value(LeadRecord::from_answers(answers))?,
        WizardKind::CreditRepair => {
            serde_json::to_value(CreditRepairLeadRecord::from_answers(answers))?
        }
    };
    Ok(SubmissionRequest {
        table: kind.table(),
        record,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::ContactDetails;
    use crate::wizard::catalog::Category;
    use crate::wizard::sequencer::AnswerValue;
    use serde_json::json;

    fn contact() -> ContactDetails {
        ContactDetails {
            name: " Jane Doe ".into(),
            email: "jane@x.com".into(),
            phone: "555-1212".into(),
            message: "Evenings are best".into(),
        }
    }

    #[test]
    fn lead_record_uses_category_label_and_shared_columns() {
        let mut answers = WizardAnswers {
            selected_category: Some(Category::InvestmentSolutions),
            contact: contact(),
            ..Default::default()
        };
        answers
            .answers
            .insert(AnswerKey::Timeline, AnswerValue::Single("RRSP".into()));
        answers.answers.insert(
            AnswerKey::CurrentCoverage,
            AnswerValue::Single("Retirement savings".into()),
        );
        answers
            .answers
            .insert(AnswerKey::Budget, AnswerValue::Single("$250-$500".into()));

        let request = build_submission(WizardKind::Lead, &answers).unwrap();
        assert_eq!(request.table, "leads");
        assert_eq!(
            request.record,
            json!({
                "interest": "Investment Solutions",
                "timeline": "RRSP",
                "current_coverage": "Retirement savings",
                "budget": "$250-$500",
                "name": "Jane Doe",
                "email": "jane@x.com",
                "phone": "555-1212",
                "message": "Evenings are best",
            })
        );
    }

    #[test]
    fn credit_repair_record_keeps_selection_order() {
        let mut answers = WizardAnswers {
            contact: contact(),
            ..Default::default()
        };
        answers.answers.insert(
            AnswerKey::CurrentCreditScore,
            AnswerValue::Single("580-619 (Fair)".into()),
        );
        answers.answers.insert(
            AnswerKey::CreditConcerns,
            AnswerValue::Multi(vec!["Collections".into(), "Late Payments".into()]),
        );
        answers.answers.insert(
            AnswerKey::FinancialGoals,
            AnswerValue::Multi(vec!["Buy a Home".into()]),
        );
        answers.answers.insert(
            AnswerKey::Timeline,
            AnswerValue::Single("Within 3-6 months".into()),
        );

        let request = build_submission(WizardKind::CreditRepair, &answers).unwrap();
        assert_eq!(request.table, "credit_repair_leads");
        assert_eq!(
            request.record,
            json!({
                "current_credit_score": "580-619 (Fair)",
                "credit_concerns": ["Collections", "Late Payments"],
                "financial_goals": ["Buy a Home"],
                "timeline": "Within 3-6 months",
                "name": "Jane Doe",
                "email": "jane@x.com",
                "phone": "555-1212",
                "message": "Evenings are best",
            })
        );
    }

    #[test]
    fn unanswered_fields_are_sent_empty() {
        let record = LeadRecord::from_answers(&WizardAnswers::default());
        assert_eq!(record.interest, "");
        assert_eq!(record.budget, "");
    }
}
