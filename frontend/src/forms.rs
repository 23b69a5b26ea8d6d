use log::info;
use serde::Serialize;
use std::fmt;

use crate::error::{FormError, SinkError, ValidationError};
use crate::supabase::{SubmissionSink, CONTACT_INQUIRIES_TABLE};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Phone,
    Subject,
    Message,
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FormField::Name => "Full name",
            FormField::Email => "Email",
            FormField::Phone => "Phone number",
            FormField::Subject => "Subject",
            FormField::Message => "Message",
        };
        f.write_str(label)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitStatus {
    Idle,
    Sending,
    Success,
    Error,
}

fn require(field: FormField, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::MissingField(field));
    }
    Ok(())
}

/// Same bar as a browser `type="email"` input: something on both sides of one `@`,
/// and no whitespace.
pub fn is_plausible_email(email: &str) -> bool {
    let email = email.trim();
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    }
}

fn require_email(value: &str) -> Result<(), ValidationError> {
    require(FormField::Email, value)?;
    if !is_plausible_email(value) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

/// Contact block collected on the last step of a wizard.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactDetails {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl ContactDetails {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require(FormField::Name, &self.name)?;
        require_email(&self.email)?;
        require(FormField::Phone, &self.phone)?;
        Ok(())
    }

    /// Returns false for fields the wizard contact form does not have.
    pub fn set(&mut self, field: FormField, value: String) -> bool {
        match field {
            FormField::Name => self.name = value,
            FormField::Email => self.email = value,
            FormField::Phone => self.phone = value,
            FormField::Message => self.message = value,
            FormField::Subject => return false,
        }
        true
    }
}

/// The general enquiry form in the contact section. Field names match the
/// `contact_inquiries` table.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ContactInquiry {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
}

impl ContactInquiry {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require(FormField::Name, &self.name)?;
        require_email(&self.email)?;
        require(FormField::Subject, &self.subject)?;
        require(FormField::Message, &self.message)?;
        Ok(())
    }

    pub fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::Name => self.name = value,
            FormField::Email => self.email = value,
            FormField::Phone => self.phone = value,
            FormField::Subject => self.subject = value,
            FormField::Message => self.message = value,
        }
    }

    /// Contact fields trimmed the same way wizard records are.
    pub fn normalized(&self) -> ContactInquiry {
        ContactInquiry {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            subject: self.subject.clone(),
            message: self.message.clone(),
        }
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Phone => &self.phone,
            FormField::Subject => &self.subject,
            FormField::Message => &self.message,
        }
    }
}

/// Numbers each contact form send so a delayed banner reset from an earlier
/// send can tell it has been overtaken.
#[derive(Debug, Default)]
pub struct SendGeneration(u64);

impl SendGeneration {
    pub fn begin(&mut self) -> u64 {
        self.0 += 1;
        self.0
    }

    pub fn is_current(&self, token: u64) -> bool {
        self.0 == token
    }
}

/// Validates and writes one general enquiry.
pub async fn send_inquiry<S>(sink: &S, inquiry: &ContactInquiry) -> Result<(), FormError>
where
    S: SubmissionSink + ?Sized,
{
    inquiry.validate()?;
    let record = serde_json::to_value(inquiry.normalized())
        .map_err(|e| SinkError::Encode(e.to_string()))?;
    sink.insert(CONTACT_INQUIRIES_TABLE, record).await?;
    info!("Contact inquiry sent");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use futures::executor::block_on;
    use serde_json::Value;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingSink {
        inserts: RefCell<Vec<(String, Value)>>,
    }

    #[async_trait(?Send)]
    impl SubmissionSink for RecordingSink {
        async fn insert(&self, table: &str, record: Value) -> Result<(), SinkError> {
            self.inserts.borrow_mut().push((table.to_string(), record));
            Ok(())
        }
    }

    struct DownSink;

    #[async_trait(?Send)]
    impl SubmissionSink for DownSink {
        async fn insert(&self, _table: &str, _record: Value) -> Result<(), SinkError> {
            Err(SinkError::Network("connection refused".into()))
        }
    }

    fn sam() -> ContactInquiry {
        ContactInquiry {
            name: "Sam".into(),
            email: "sam@example.com".into(),
            phone: String::new(),
            subject: "RESP question".into(),
            message: "Do you offer RESPs?".into(),
        }
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
    fn wizard_contact_message_is_optional() {
        assert_eq!(jane().validate(), Ok(()));
    }

    #[test]
    fn wizard_contact_requires_name_email_and_phone() {
        let mut contact = jane();
        contact.name = "   ".into();
        assert_eq!(
            contact.validate(),
            Err(ValidationError::MissingField(FormField::Name))
        );

        let mut contact = jane();
        contact.email.clear();
        assert_eq!(
            contact.validate(),
            Err(ValidationError::MissingField(FormField::Email))
        );

        let mut contact = jane();
        contact.phone.clear();
        assert_eq!(
            contact.validate(),
            Err(ValidationError::MissingField(FormField::Phone))
        );
    }

    #[test]
    fn malformed_email_is_rejected() {
        let mut contact = jane();
        contact.email = "jane.x.com".into();
        assert_eq!(contact.validate(), Err(ValidationError::InvalidEmail));

        assert!(!is_plausible_email("@x.com"));
        assert!(!is_plausible_email("jane@"));
        assert!(!is_plausible_email("jane doe@x.com"));
        assert!(!is_plausible_email("a@b@c"));
        assert!(is_plausible_email(" jane@x.com "));
    }

    #[test]
    fn wizard_contact_has_no_subject() {
        let mut contact = jane();
        assert!(!contact.set(FormField::Subject, "Hello".into()));
        assert!(contact.set(FormField::Message, "Call after 5".into()));
        assert_eq!(contact.message, "Call after 5");
    }

    #[test]
    fn inquiry_phone_is_optional_but_subject_is_not() {
        let mut inquiry = ContactInquiry {
            name: "Sam".into(),
            email: "sam@example.com".into(),
            phone: String::new(),
            subject: String::new(),
            message: "Do you offer RESPs?".into(),
        };
        assert_eq!(
            inquiry.validate(),
            Err(ValidationError::MissingField(FormField::Subject))
        );

        inquiry.set(FormField::Subject, "RESP question".into());
        assert_eq!(inquiry.validate(), Ok(()));
        assert_eq!(inquiry.get(FormField::Subject), "RESP question");
    }

    #[test]
    fn inquiry_serializes_with_table_column_names() {
        let inquiry = ContactInquiry {
            name: "Sam".into(),
            email: "sam@example.com".into(),
            phone: "416-555-0100".into(),
            subject: "Hi".into(),
            message: "Hello".into(),
        };
        let value = serde_json::to_value(&inquiry).unwrap();
        let mut keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        keys.sort();
        assert_eq!(keys, ["email", "message", "name", "phone", "subject"]);
    }

    #[test]
    fn inquiry_is_written_to_contact_table() {
        let sink = RecordingSink::default();
        block_on(send_inquiry(&sink, &sam())).unwrap();

        let inserts = sink.inserts.borrow();
        assert_eq!(inserts.len(), 1);
        assert_eq!(inserts[0].0, "contact_inquiries");
        assert_eq!(inserts[0].1["subject"], "RESP question");
        assert_eq!(inserts[0].1["phone"], "");
    }

    #[test]
    fn invalid_inquiry_never_reaches_the_sink() {
        let sink = RecordingSink::default();
        let mut inquiry = sam();
        inquiry.message = " ".into();

        let result = block_on(send_inquiry(&sink, &inquiry));
        assert_eq!(
            result,
            Err(FormError::Validation(ValidationError::MissingField(FormField::Message)))
        );
        assert!(sink.inserts.borrow().is_empty());
    }

    #[test]
    fn sink_failure_is_reported_as_submission_error() {
        let result = block_on(send_inquiry(&DownSink, &sam()));
        assert!(matches!(result, Err(FormError::Submission(SinkError::Network(_)))));
    }

    #[test]
    fn inquiry_contact_fields_are_trimmed_like_wizard_records() {
        let sink = RecordingSink::default();
        let mut inquiry = sam();
        inquiry.name = "  Sam  ".into();
        inquiry.email = " sam@example.com\n".into();
        inquiry.phone = " 416-555-0100 ".into();
        block_on(send_inquiry(&sink, &inquiry)).unwrap();

        let inserts = sink.inserts.borrow();
        assert_eq!(inserts[0].1["name"], "Sam");
        assert_eq!(inserts[0].1["email"], "sam@example.com");
        assert_eq!(inserts[0].1["phone"], "416-555-0100");
        assert_eq!(inserts[0].1["message"], "Do you offer RESPs?");
    }

    #[test]
    fn stale_status_reset_is_ignored_after_a_newer_send() {
        let mut generation = SendGeneration::default();
        let first = generation.begin();
        assert!(generation.is_current(first));

        // Second send starts before the first send's reset timer fires.
        let second = generation.begin();
        assert!(!generation.is_current(first));
        assert!(generation.is_current(second));
    }
}
