use log::{debug, error, info};
use std::collections::BTreeMap;
use std::rc::Rc;

use super::catalog::{AnswerKey, Category, QuestionCatalog, WizardKind, WizardStep};
use super::records::{build_submission, SubmissionRequest};
use crate::error::{SinkError, WizardError};
use crate::forms::{ContactDetails, FormField};
use crate::supabase::SubmissionSink;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AnswerValue {
    Single(String),
    /// Kept in the order the options were picked.
    Multi(Vec<String>),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WizardAnswers {
    pub selected_category: Option<Category>,
    pub answers: BTreeMap<AnswerKey, AnswerValue>,
    pub contact: ContactDetails,
}

impl WizardAnswers {
    pub fn single(&self, key: AnswerKey) -> Option<&str> {
        match self.answers.get(&key) {
            Some(AnswerValue::Single(value)) => Some(value),
            _ => None,
        }
    }

    pub fn multi(&self, key: AnswerKey) -> &[String] {
        match self.answers.get(&key) {
            Some(AnswerValue::Multi(values)) => values,
            _ => &[],
        }
    }

    pub fn is_selected(&self, key: AnswerKey, value: &str) -> bool {
        match key {
            AnswerKey::Interest => self
                .selected_category
                .map_or(false, |category| category.label() == value),
            _ => match self.answers.get(&key) {
                Some(AnswerValue::Single(chosen)) => chosen == value,
                Some(AnswerValue::Multi(chosen)) => chosen.iter().any(|v| v == value),
                None => false,
            },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WizardStatus {
    Answering,
    /// Waiting on the sink. Nothing but closing is accepted.
    Submitting,
    Success,
    Closed,
}

/// Linear step cursor over a fixed list of steps, plus everything answered so far.
///
/// `step` is 1-based and always within `1..=total_steps()`. The step list of a
/// lead wizard is rebuilt whenever the category changes; its length does not.
#[derive(Clone, Debug)]
pub struct Wizard {
    kind: WizardKind,
    catalog: Rc<QuestionCatalog>,
    category_preselected: bool,
    steps: Vec<WizardStep>,
    step: usize,
    answers: WizardAnswers,
    status: WizardStatus,
}

impl Wizard {
    pub fn lead(catalog: Rc<QuestionCatalog>, preselected: Option<Category>) -> Self {
        let mut wizard = Self {
            kind: WizardKind::Lead,
            catalog,
            category_preselected: preselected.is_some(),
            steps: Vec::new(),
            step: 1,
            answers: WizardAnswers {
                selected_category: preselected,
                ..Default::default()
            },
            status: WizardStatus::Answering,
        };
        wizard.rebuild_steps();
        wizard
    }

    pub fn credit_repair(catalog: Rc<QuestionCatalog>) -> Self {
        let steps = catalog.credit_repair_steps().to_vec();
        Self {
            kind: WizardKind::CreditRepair,
            catalog,
            category_preselected: false,
            steps,
            step: 1,
            answers: WizardAnswers::default(),
            status: WizardStatus::Answering,
        }
    }

    fn rebuild_steps(&mut self) {
        let mut steps = Vec::with_capacity(5);
        if !self.category_preselected {
            steps.push(self.catalog.category_step().clone());
        }
        steps.extend_from_slice(self.catalog.resolve(self.answers.selected_category));
        self.steps = steps;
    }

    pub fn kind(&self) -> WizardKind {
        self.kind
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn total_steps(&self) -> usize {
        self.steps.len()
    }

    pub fn current_step(&self) -> &WizardStep {
        &self.steps[self.step - 1]
    }

    pub fn is_final_step(&self) -> bool {
        self.step == self.total_steps()
    }

    /// Fraction of the wizard reached, for the progress bar.
    pub fn progress(&self) -> f64 {
        self.step as f64 / self.total_steps() as f64
    }

    pub fn answers(&self) -> &WizardAnswers {
        &self.answers
    }

    pub fn contact(&self) -> &ContactDetails {
        &self.answers.contact
    }

    pub fn status(&self) -> WizardStatus {
        self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.status == WizardStatus::Submitting
    }

    pub fn can_go_back(&self) -> bool {
        self.status == WizardStatus::Answering && self.step > 1
    }

    fn is_answered(&self, step: &WizardStep) -> bool {
        match step.target() {
            Some(AnswerKey::Interest) => self.answers.selected_category.is_some(),
            Some(key) => self.answers.answers.contains_key(&key),
            None => false,
        }
    }

    /// Records a single-choice answer without moving. Pair with [`Wizard::advance_from`].
    pub fn record_single(&mut self, key: AnswerKey, value: &str) -> bool {
        if self.status != WizardStatus::Answering {
            return false;
        }
        let step = self.current_step();
        if !matches!(step, WizardStep::SingleChoice { target, .. } if *target == key)
            || !step.offers(value)
        {
            return false;
        }

        if key == AnswerKey::Interest {
            // The step only offers category labels, so this always parses.
            let category = Category::from_label(value);
            if category != self.answers.selected_category {
                self.answers.selected_category = category;
                self.rebuild_steps();
            }
        } else {
            self.answers
                .answers
                .insert(key, AnswerValue::Single(value.to_string()));
        }
        debug!("Step {}: {:?} = {:?}", self.step, key, value);
        true
    }

    /// Moves past an answered single-choice step, if the wizard is still on `step`.
    pub fn advance_from(&mut self, step: usize) -> bool {
        if self.status != WizardStatus::Answering || self.step != step || self.is_final_step() {
            return false;
        }
        let current = self.current_step();
        if !matches!(current, WizardStep::SingleChoice { .. }) || !self.is_answered(current) {
            return false;
        }
        self.step += 1;
        true
    }

    pub fn select_single(&mut self, key: AnswerKey, value: &str) -> bool {
        let from = self.step;
        self.record_single(key, value) && self.advance_from(from)
    }

    pub fn toggle_multi(&mut self, key: AnswerKey, value: &str) -> bool {
        if self.status != WizardStatus::Answering {
            return false;
        }
        let step = self.current_step();
        if !matches!(step, WizardStep::MultiChoice { target, .. } if *target == key)
            || !step.offers(value)
        {
            return false;
        }

        let entry = self
            .answers
            .answers
            .entry(key)
            .or_insert_with(|| AnswerValue::Multi(Vec::new()));
        if let AnswerValue::Multi(values) = entry {
            if let Some(index) = values.iter().position(|v| v == value) {
                values.remove(index);
            } else {
                values.push(value.to_string());
            }
        }
        true
    }

    pub fn selected_count(&self, key: AnswerKey) -> usize {
        self.answers.multi(key).len()
    }

    /// Whether the current multi-choice step has enough selections to continue.
    pub fn can_confirm(&self) -> bool {
        match self.current_step() {
            WizardStep::MultiChoice { target, min_selected, .. } => {
                self.status == WizardStatus::Answering
                    && !self.is_final_step()
                    && self.selected_count(*target) >= *min_selected
            }
            _ => false,
        }
    }

    pub fn confirm_multi(&mut self, key: AnswerKey) -> bool {
        if self.current_step().target() != Some(key) || !self.can_confirm() {
            return false;
        }
        self.step += 1;
        true
    }

    /// Steps back one screen. Answers for later steps are kept.
    pub fn go_back(&mut self) -> bool {
        if !self.can_go_back() {
            return false;
        }
        self.step -= 1;
        true
    }

    pub fn set_contact_field(&mut self, field: FormField, value: String) -> bool {
        if self.status != WizardStatus::Answering {
            return false;
        }
        self.answers.contact.set(field, value)
    }

    /// Validates the contact form and moves to `Submitting`. The caller sends
    /// the returned request and reports back through [`Wizard::finish_submit`].
    pub fn begin_submit(&mut self) -> Result<SubmissionRequest, WizardError> {
        match self.status {
            WizardStatus::Submitting => return Err(WizardError::AlreadySubmitting),
            WizardStatus::Success | WizardStatus::Closed => return Err(WizardError::Finished),
            WizardStatus::Answering => {}
        }
        if !self.is_final_step() {
            return Err(WizardError::NotOnFinalStep);
        }
        self.answers.contact.validate()?;

        let request = build_submission(self.kind, &self.answers)
            .map_err(|e| SinkError::Encode(e.to_string()))?;
        self.status = WizardStatus::Submitting;
        info!("Submitting {:?} wizard to {}", self.kind, request.table);
        Ok(request)
    }

    /// Applies the sink's answer. A failure returns the wizard to the final
    /// step with everything intact and is reported once; results arriving
    /// when no submission is pending are ignored.
    pub fn finish_submit(&mut self, result: Result<(), SinkError>) -> Result<(), WizardError> {
        if self.status != WizardStatus::Submitting {
            debug!("Ignoring submission result in status {:?}", self.status);
            return Ok(());
        }
        match result {
            Ok(()) => {
                info!("{:?} wizard submitted", self.kind);
                self.status = WizardStatus::Success;
                Ok(())
            }
            Err(e) => {
                error!("Error submitting form: {}", e);
                self.status = WizardStatus::Answering;
                Err(WizardError::Submission(e))
            }
        }
    }

    pub async fn submit<S>(&mut self, sink: &S, contact: ContactDetails) -> Result<(), WizardError>
    where
        S: SubmissionSink + ?Sized,
    {
        if self.status == WizardStatus::Answering {
            self.answers.contact = contact;
        }
        let request = self.begin_submit()?;
        let result = sink.insert(request.table, request.record).await;
        self.finish_submit(result)
    }

    /// Ends the wizard and drops everything collected.
    pub fn close(&mut self) {
        self.status = WizardStatus::Closed;
        self.answers = WizardAnswers::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use futures::executor::block_on;
    use serde_json::{json, Value};
    use std::cell::{Cell, RefCell};

    #[derive(Default)]
    struct RecordingSink {
        inserts: RefCell<Vec<(String, Value)>>,
        fail: Cell<bool>,
    }

    impl RecordingSink {
        fn failing() -> Self {
            let sink = Self::default();
            sink.fail.set(true);
            sink
        }
    }

    #[async_trait(?Send)]
    impl SubmissionSink for RecordingSink {
        async fn insert(&self, table: &str, record: Value) -> Result<(), SinkError> {
            if self.fail.get() {
                return Err(SinkError::Rejected {
                    status: 503,
                    message: "service unavailable".into(),
                });
            }
            self.inserts.borrow_mut().push((table.to_string(), record));
            Ok(())
        }
    }

    fn catalog() -> Rc<QuestionCatalog> {
        Rc::new(QuestionCatalog::builtin().unwrap())
    }

    fn jane() -> ContactDetails {
        ContactDetails {
            name: "Jane Doe".into(),
            email: "jane@x.com".into(),
            phone: "555-1212".into(),
            message: String::new(),
        }
    }

    #[test]
    fn generic_set_path_via_not_sure_yet_submits_one_record() {
        let mut wizard = Wizard::lead(catalog(), None);
        assert_eq!((wizard.step(), wizard.total_steps()), (1, 5));

        assert!(wizard.select_single(AnswerKey::Interest, "Not Sure Yet"));
        assert_eq!(wizard.step(), 2);
        assert!(wizard.select_single(AnswerKey::Timeline, "Immediately"));
        assert_eq!(wizard.step(), 3);
        assert!(wizard.select_single(AnswerKey::CurrentCoverage, "No coverage"));
        assert_eq!(wizard.step(), 4);
        assert!(wizard.select_single(AnswerKey::Budget, "$100-$250/month"));
        assert_eq!(wizard.step(), 5);
        assert!(wizard.current_step().is_contact_form());

        let sink = RecordingSink::default();
        block_on(wizard.submit(&sink, jane())).unwrap();

        assert_eq!(wizard.status(), WizardStatus::Success);
        let inserts = sink.inserts.borrow();
        assert_eq!(inserts.len(), 1);
        assert_eq!(inserts[0].0, "leads");
        assert_eq!(
            inserts[0].1,
            json!({
                "interest": "Not Sure Yet",
                "timeline": "Immediately",
                "current_coverage": "No coverage",
                "budget": "$100-$250/month",
                "name": "Jane Doe",
                "email": "jane@x.com",
                "phone": "555-1212",
                "message": "",
            })
        );
    }

    #[test]
    fn life_insurance_asks_its_own_questions() {
        let mut wizard = Wizard::lead(catalog(), None);
        assert!(wizard.select_single(AnswerKey::Interest, "Life Insurance"));
        assert_eq!(wizard.step(), 2);

        // Generic options are not on offer once a dedicated set is chosen.
        assert!(!wizard.select_single(AnswerKey::Timeline, "Immediately"));
        assert_eq!(wizard.step(), 2);

        assert!(wizard.select_single(AnswerKey::Timeline, "Term Life"));
        assert!(wizard.select_single(AnswerKey::CurrentCoverage, "No coverage"));
        assert!(wizard.select_single(AnswerKey::Budget, "$250K-$500K"));
        assert_eq!(wizard.step(), 5);

        let sink = RecordingSink::default();
        block_on(wizard.submit(&sink, jane())).unwrap();
        let inserts = sink.inserts.borrow();
        assert_eq!(inserts[0].1["interest"], "Life Insurance");
        assert_eq!(inserts[0].1["timeline"], "Term Life");
        assert_eq!(inserts[0].1["budget"], "$250K-$500K");
    }

    #[test]
    fn preselected_category_skips_category_step() {
        let mut wizard = Wizard::lead(catalog(), Some(Category::CreditRepair));
        assert_eq!((wizard.step(), wizard.total_steps()), (1, 4));
        assert_eq!(
            wizard.current_step().prompt(),
            "What is your current credit score range?"
        );
        assert!(!wizard.can_go_back());

        assert!(wizard.select_single(AnswerKey::Timeline, "500-599"));
        assert!(wizard.select_single(AnswerKey::CurrentCoverage, "Late payments"));
        assert!(wizard.select_single(AnswerKey::Budget, "3-6 months"));
        assert_eq!(wizard.step(), 4);
        assert!(wizard.is_final_step());
        assert_eq!(wizard.progress(), 1.0);

        let sink = RecordingSink::default();
        block_on(wizard.submit(&sink, jane())).unwrap();
        assert_eq!(sink.inserts.borrow()[0].1["interest"], "Credit Repair");
    }

    #[test]
    fn interest_is_not_offered_twice_when_preselected() {
        let mut wizard = Wizard::lead(catalog(), Some(Category::LifeInsurance));
        assert!(!wizard.select_single(AnswerKey::Interest, "Credit Repair"));
        assert_eq!(
            wizard.answers().selected_category,
            Some(Category::LifeInsurance)
        );
    }

    #[test]
    fn going_back_and_reselecting_is_idempotent() {
        let mut wizard = Wizard::lead(catalog(), None);
        wizard.select_single(AnswerKey::Interest, "Investment Solutions");
        wizard.select_single(AnswerKey::Timeline, "TFSA");
        let before = wizard.answers().clone();

        assert!(wizard.go_back());
        assert_eq!(wizard.step(), 2);
        assert_eq!(wizard.answers(), &before);

        assert!(wizard.select_single(AnswerKey::Timeline, "TFSA"));
        assert_eq!(wizard.step(), 3);
        assert_eq!(wizard.answers(), &before);
    }

    #[test]
    fn going_back_keeps_later_answers_until_overwritten() {
        let mut wizard = Wizard::lead(catalog(), None);
        wizard.select_single(AnswerKey::Interest, "Not Sure Yet");
        wizard.select_single(AnswerKey::Timeline, "Within 6 months");
        wizard.select_single(AnswerKey::CurrentCoverage, "Not sure");

        wizard.go_back();
        wizard.go_back();
        assert_eq!(wizard.step(), 2);
        assert_eq!(
            wizard.answers().single(AnswerKey::CurrentCoverage),
            Some("Not sure")
        );

        wizard.select_single(AnswerKey::Timeline, "Immediately");
        assert_eq!(wizard.answers().single(AnswerKey::Timeline), Some("Immediately"));
        assert_eq!(
            wizard.answers().single(AnswerKey::CurrentCoverage),
            Some("Not sure")
        );
    }

    #[test]
    fn changing_category_swaps_following_questions() {
        let mut wizard = Wizard::lead(catalog(), None);
        wizard.select_single(AnswerKey::Interest, "Life Insurance");
        wizard.go_back();
        assert!(wizard.select_single(AnswerKey::Interest, "Investment Solutions"));
        assert_eq!(wizard.total_steps(), 5);
        assert_eq!(
            wizard.current_step().prompt(),
            "Which investment product interests you most?"
        );
    }

    #[test]
    fn cannot_go_back_from_first_step() {
        let mut wizard = Wizard::credit_repair(catalog());
        assert!(!wizard.go_back());
        assert_eq!(wizard.step(), 1);
    }

    #[test]
    fn delayed_advance_only_applies_to_its_own_step() {
        let mut wizard = Wizard::lead(catalog(), None);
        assert!(wizard.record_single(AnswerKey::Interest, "Credit Repair"));
        assert_eq!(wizard.step(), 1);

        assert!(wizard.advance_from(1));
        // A second timer from a double click lands on a step that has moved on.
        assert!(!wizard.advance_from(1));
        assert_eq!(wizard.step(), 2);

        // Unanswered single-choice steps never advance.
        assert!(!wizard.advance_from(2));
    }

    #[test]
    fn confirm_with_no_selection_is_a_no_op() {
        let mut wizard = Wizard::credit_repair(catalog());
        wizard.select_single(AnswerKey::CurrentCreditScore, "I don't know");
        assert_eq!(wizard.step(), 2);

        assert!(!wizard.can_confirm());
        assert!(!wizard.confirm_multi(AnswerKey::CreditConcerns));
        assert_eq!(wizard.step(), 2);

        assert!(wizard.toggle_multi(AnswerKey::CreditConcerns, "Collections"));
        assert_eq!(wizard.step(), 2);
        assert!(wizard.confirm_multi(AnswerKey::CreditConcerns));
        assert_eq!(wizard.step(), 3);
    }

    #[test]
    fn toggling_twice_restores_selection() {
        let mut wizard = Wizard::credit_repair(catalog());
        wizard.select_single(AnswerKey::CurrentCreditScore, "500-579 (Poor)");
        wizard.toggle_multi(AnswerKey::CreditConcerns, "Late Payments");
        let before = wizard.answers().multi(AnswerKey::CreditConcerns).to_vec();

        wizard.toggle_multi(AnswerKey::CreditConcerns, "Identity Theft");
        wizard.toggle_multi(AnswerKey::CreditConcerns, "Identity Theft");
        assert_eq!(wizard.answers().multi(AnswerKey::CreditConcerns), before.as_slice());

        wizard.toggle_multi(AnswerKey::CreditConcerns, "Late Payments");
        assert_eq!(wizard.selected_count(AnswerKey::CreditConcerns), 0);
        assert!(!wizard.confirm_multi(AnswerKey::CreditConcerns));
    }

    #[test]
    fn toggle_rejects_other_keys_and_unknown_options() {
        let mut wizard = Wizard::credit_repair(catalog());
        wizard.select_single(AnswerKey::CurrentCreditScore, "500-579 (Poor)");
        assert!(!wizard.toggle_multi(AnswerKey::FinancialGoals, "Buy a Home"));
        assert!(!wizard.toggle_multi(AnswerKey::CreditConcerns, "Parking tickets"));
        assert!(!wizard.select_single(AnswerKey::CreditConcerns, "Collections"));
        assert_eq!(wizard.selected_count(AnswerKey::CreditConcerns), 0);
    }

    #[test]
    fn credit_repair_flow_end_to_end() {
        let mut wizard = Wizard::credit_repair(catalog());
        assert_eq!(wizard.total_steps(), 5);
        wizard.select_single(AnswerKey::CurrentCreditScore, "620-679 (Fair)");
        wizard.toggle_multi(AnswerKey::CreditConcerns, "Collections");
        wizard.toggle_multi(AnswerKey::CreditConcerns, "Charge-Offs");
        wizard.confirm_multi(AnswerKey::CreditConcerns);
        wizard.toggle_multi(AnswerKey::FinancialGoals, "Buy a Home");
        wizard.confirm_multi(AnswerKey::FinancialGoals);
        wizard.select_single(AnswerKey::Timeline, "Within 6-12 months");
        assert_eq!(wizard.step(), 5);

        let sink = RecordingSink::default();
        block_on(wizard.submit(&sink, jane())).unwrap();
        let inserts = sink.inserts.borrow();
        assert_eq!(inserts.len(), 1);
        assert_eq!(inserts[0].0, "credit_repair_leads");
        assert_eq!(inserts[0].1["credit_concerns"], json!(["Collections", "Charge-Offs"]));
        assert_eq!(inserts[0].1["financial_goals"], json!(["Buy a Home"]));
        assert_eq!(inserts[0].1["timeline"], "Within 6-12 months");
    }

    fn at_contact_step() -> Wizard {
        let mut wizard = Wizard::lead(catalog(), Some(Category::NotSureYet));
        wizard.select_single(AnswerKey::Timeline, "Immediately");
        wizard.select_single(AnswerKey::CurrentCoverage, "No coverage");
        wizard.select_single(AnswerKey::Budget, "Over $500/month");
        wizard
    }

    #[test]
    fn sink_failure_keeps_wizard_on_final_step() {
        let mut wizard = at_contact_step();
        let sink = RecordingSink::failing();

        let err = block_on(wizard.submit(&sink, jane())).unwrap_err();
        assert!(matches!(err, WizardError::Submission(SinkError::Rejected { status: 503, .. })));
        assert_eq!(wizard.status(), WizardStatus::Answering);
        assert!(wizard.is_final_step());
        assert_eq!(wizard.contact(), &jane());
        assert_eq!(wizard.answers().single(AnswerKey::Budget), Some("Over $500/month"));

        // Retrying is up to the visitor, and works once the sink recovers.
        sink.fail.set(false);
        block_on(wizard.submit(&sink, wizard.contact().clone())).unwrap();
        assert_eq!(wizard.status(), WizardStatus::Success);
        assert_eq!(sink.inserts.borrow().len(), 1);
    }

    #[test]
    fn failure_is_reported_once_per_attempt() {
        let mut wizard = at_contact_step();
        wizard.set_contact_field(FormField::Name, "Jane Doe".into());
        wizard.set_contact_field(FormField::Email, "jane@x.com".into());
        wizard.set_contact_field(FormField::Phone, "555-1212".into());

        wizard.begin_submit().unwrap();
        let outage = SinkError::Network("offline".into());
        assert!(wizard.finish_submit(Err(outage.clone())).is_err());
        // A stray duplicate result is not a second failure.
        assert_eq!(wizard.finish_submit(Err(outage)), Ok(()));
    }

    #[test]
    fn validation_failure_is_not_sent() {
        let mut wizard = at_contact_step();
        let sink = RecordingSink::default();
        let mut contact = jane();
        contact.phone.clear();

        let err = block_on(wizard.submit(&sink, contact)).unwrap_err();
        assert_eq!(
            err,
            WizardError::Validation(crate::error::ValidationError::MissingField(FormField::Phone))
        );
        assert_eq!(wizard.status(), WizardStatus::Answering);
        assert!(sink.inserts.borrow().is_empty());
    }

    #[test]
    fn submit_is_refused_while_in_flight() {
        let mut wizard = at_contact_step();
        wizard.answers.contact = jane();

        let request = wizard.begin_submit().unwrap();
        assert_eq!(request.table, "leads");
        assert!(wizard.is_submitting());
        assert_eq!(wizard.begin_submit(), Err(WizardError::AlreadySubmitting));
        assert!(!wizard.go_back());
        assert!(!wizard.set_contact_field(FormField::Name, "Someone Else".into()));

        wizard.finish_submit(Ok(())).unwrap();
        assert_eq!(wizard.begin_submit(), Err(WizardError::Finished));
    }

    #[test]
    fn submit_before_final_step_is_refused() {
        let mut wizard = Wizard::lead(catalog(), None);
        let sink = RecordingSink::default();
        assert_eq!(
            block_on(wizard.submit(&sink, jane())),
            Err(WizardError::NotOnFinalStep)
        );
        assert!(sink.inserts.borrow().is_empty());
    }

    #[test]
    fn closing_discards_answers_and_ignores_late_results() {
        let mut wizard = at_contact_step();
        wizard.answers.contact = jane();
        wizard.begin_submit().unwrap();

        wizard.close();
        assert_eq!(wizard.status(), WizardStatus::Closed);
        assert_eq!(wizard.answers(), &WizardAnswers::default());

        assert_eq!(wizard.finish_submit(Ok(())), Ok(()));
        assert_eq!(wizard.status(), WizardStatus::Closed);
    }

    #[test]
    fn progress_tracks_step() {
        let mut wizard = Wizard::lead(catalog(), None);
        assert_eq!(wizard.progress(), 0.2);
        wizard.select_single(AnswerKey::Interest, "Multiple Services");
        assert_eq!(wizard.progress(), 0.4);
    }
}
