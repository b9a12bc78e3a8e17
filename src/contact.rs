//! Contact form state and submission.
//!
//! The form moves `Idle -> Sending -> {Success, Error} -> Idle`. Only one message can be in
//! flight at a time; a submit while sending is refused before the mailer is touched.

use std::future::Future;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const SUCCESS_MESSAGE: &str = "Message sent successfully! I'll get back to you soon.";
pub const FAILURE_MESSAGE: &str =
    "Failed to send message. Please try again or contact me directly.";
/// How long a notification stays up before hiding itself.
pub const NOTIFICATION_TIMEOUT_MS: u64 = 6000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Your Name",
            Field::Email => "Your Email",
            Field::Subject => "Subject",
            Field::Message => "Your Message",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactFields {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        subject: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            subject: subject.into(),
            message: message.into(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        };
        *slot = value.into();
    }

    pub fn validate(&self) -> Result<(), SubmissionError> {
        if let Some(field) = Field::ALL
            .into_iter()
            .find(|f| self.get(*f).trim().is_empty())
        {
            return Err(SubmissionError::MissingField(field));
        }
        if !is_plausible_email(&self.email) {
            return Err(SubmissionError::InvalidEmail);
        }
        Ok(())
    }
}

/// Roughly what a browser accepts for `type="email"`: one `@` with a non-empty local part and
/// a dotted-or-bare domain, no whitespace.
pub fn is_plausible_email(email: &str) -> bool {
    let email = email.trim();
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && !email.chars().any(char::is_whitespace)
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !domain.contains("..")
}

/// What gets handed to the email collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailParams {
    pub from_name: String,
    pub from_email: String,
    pub subject: String,
    pub message: String,
    pub to_name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContactStatus {
    #[default]
    Idle,
    Sending,
    Success,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notification {
    pub severity: Severity,
    pub message: &'static str,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MailerError {
    #[error("mail delivery is not configured")]
    NotConfigured,
    #[error("could not reach mail service: {0}")]
    Transport(String),
    #[error("mail service rejected the message ({status}): {body}")]
    Rejected { status: u16, body: String },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    #[error("a message is already being sent")]
    Busy,
    #[error("{} is required", .0.label())]
    MissingField(Field),
    #[error("email address does not look valid")]
    InvalidEmail,
    #[error("failed to send message")]
    Delivery(#[from] MailerError),
}

/// The outbound email collaborator.
pub trait Mailer {
    fn send(&self, params: EmailParams) -> impl Future<Output = Result<(), MailerError>> + Send;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactForm {
    fields: ContactFields,
    status: ContactStatus,
    recipient: String,
}

impl ContactForm {
    pub fn new(recipient: impl Into<String>) -> Self {
        Self {
            fields: ContactFields::default(),
            status: ContactStatus::Idle,
            recipient: recipient.into(),
        }
    }

    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    pub fn status(&self) -> ContactStatus {
        self.status
    }

    pub fn is_sending(&self) -> bool {
        self.status == ContactStatus::Sending
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.fields.set(field, value);
    }

    /// Moves to `Sending` and returns the message to deliver.
    ///
    /// Refused while a send is in flight. Starting from a shown notification dismisses it
    /// first, so clicking submit again after a failure is the retry.
    pub fn begin(&mut self) -> Result<EmailParams, SubmissionError> {
        match self.status {
            ContactStatus::Sending => return Err(SubmissionError::Busy),
            ContactStatus::Success | ContactStatus::Error => self.dismiss(),
            ContactStatus::Idle => {}
        }
        self.fields.validate()?;
        self.status = ContactStatus::Sending;
        Ok(EmailParams {
            from_name: self.fields.name.trim().to_string(),
            from_email: self.fields.email.trim().to_string(),
            subject: self.fields.subject.trim().to_string(),
            message: self.fields.message.clone(),
            to_name: self.recipient.clone(),
        })
    }

    /// Records the collaborator's answer. Ignored unless a send is in flight.
    pub fn finish(&mut self, outcome: Result<(), MailerError>) -> bool {
        if self.status != ContactStatus::Sending {
            return false;
        }
        match outcome {
            Ok(()) => {
                self.fields = ContactFields::default();
                self.status = ContactStatus::Success;
            }
            Err(e) => {
                log::warn!("contact message was not delivered: {e}");
                self.status = ContactStatus::Error;
            }
        }
        true
    }

    pub fn dismiss(&mut self) {
        if matches!(self.status, ContactStatus::Success | ContactStatus::Error) {
            self.status = ContactStatus::Idle;
        }
    }

    pub fn notification(&self) -> Option<Notification> {
        match self.status {
            ContactStatus::Success => Some(Notification {
                severity: Severity::Success,
                message: SUCCESS_MESSAGE,
            }),
            ContactStatus::Error => Some(Notification {
                severity: Severity::Error,
                message: FAILURE_MESSAGE,
            }),
            ContactStatus::Idle | ContactStatus::Sending => None,
        }
    }

    /// Runs one full submission against `mailer`.
    pub async fn submit<M: Mailer>(&mut self, mailer: &M) -> Result<(), SubmissionError> {
        let params = self.begin()?;
        let outcome = mailer.send(params).await;
        let result = outcome.clone().map_err(SubmissionError::from);
        self.finish(outcome);
        result
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Mutex,
    };

    use super::*;

    struct RecordingMailer {
        calls: AtomicUsize,
        sent: Mutex<Vec<EmailParams>>,
        fail: bool,
    }

    impl RecordingMailer {
        fn new(fail: bool) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                sent: Mutex::new(Vec::new()),
                fail,
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl Mailer for RecordingMailer {
        async fn send(&self, params: EmailParams) -> Result<(), MailerError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.sent.lock().expect("mailer lock").push(params);
            if self.fail {
                Err(MailerError::Rejected {
                    status: 400,
                    body: "The Public Key is invalid".to_string(),
                })
            } else {
                Ok(())
            }
        }
    }

    fn ada() -> ContactFields {
        ContactFields::new("Ada", "ada@example.com", "Hi", "Hello")
    }

    fn filled_form() -> ContactForm {
        let mut form = ContactForm::new("Site Owner");
        let fields = ada();
        for field in Field::ALL {
            form.set_field(field, fields.get(field));
        }
        form
    }

    #[tokio::test]
    async fn test_success_clears_form() {
        let mailer = RecordingMailer::new(false);
        let mut form = filled_form();

        assert_eq!(form.submit(&mailer).await, Ok(()));
        assert_eq!(mailer.calls(), 1);
        assert_eq!(form.status(), ContactStatus::Success);
        assert_eq!(form.fields(), &ContactFields::new("", "", "", ""));

        let notification = form.notification().expect("should show a notification");
        assert_eq!(notification.severity, Severity::Success);
        assert!(notification.message.starts_with("Message sent successfully"));

        let sent = mailer.sent.lock().unwrap();
        assert_eq!(
            sent[0],
            EmailParams {
                from_name: "Ada".to_string(),
                from_email: "ada@example.com".to_string(),
                subject: "Hi".to_string(),
                message: "Hello".to_string(),
                to_name: "Site Owner".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_failure_preserves_input() {
        let mailer = RecordingMailer::new(true);
        let mut form = filled_form();

        let res = form.submit(&mailer).await;
        assert!(matches!(res, Err(SubmissionError::Delivery(_))));
        assert_eq!(mailer.calls(), 1);
        assert_eq!(form.status(), ContactStatus::Error);
        assert_eq!(form.fields(), &ada());

        let notification = form.notification().expect("should show a notification");
        assert_eq!(notification.severity, Severity::Error);
        assert!(notification.message.starts_with("Failed to send"));
        // no detail from the mail service reaches the visitor
        assert!(!notification.message.contains("Public Key"));

        form.dismiss();
        assert_eq!(form.status(), ContactStatus::Idle);
        assert_eq!(form.notification(), None);
        assert_eq!(form.fields(), &ada());
    }

    #[tokio::test]
    async fn test_submit_while_sending_is_a_no_op() {
        let mailer = RecordingMailer::new(false);
        let mut form = filled_form();

        let params = form.begin().expect("first submit should start");
        assert!(form.is_sending());

        // double click
        assert_eq!(form.submit(&mailer).await, Err(SubmissionError::Busy));
        assert_eq!(form.begin(), Err(SubmissionError::Busy));
        assert_eq!(mailer.calls(), 0);
        assert!(form.is_sending());

        // the original send completes
        let outcome = mailer.send(params).await;
        assert!(form.finish(outcome));
        assert_eq!(mailer.calls(), 1);
        assert_eq!(form.status(), ContactStatus::Success);
    }

    #[tokio::test]
    async fn test_retry_after_failure() {
        let failing = RecordingMailer::new(true);
        let working = RecordingMailer::new(false);
        let mut form = filled_form();

        assert!(form.submit(&failing).await.is_err());
        // clicking submit again dismisses the error and resends the same input
        assert_eq!(form.submit(&working).await, Ok(()));
        assert_eq!(working.sent.lock().unwrap()[0].from_name, "Ada");
        assert_eq!(form.status(), ContactStatus::Success);
    }

    #[test]
    fn test_validation() {
        let mut form = ContactForm::new("Site Owner");
        assert_eq!(form.begin(), Err(SubmissionError::MissingField(Field::Name)));
        assert_eq!(form.status(), ContactStatus::Idle);

        form.set_field(Field::Name, "Ada");
        form.set_field(Field::Email, "ada");
        form.set_field(Field::Subject, "Hi");
        form.set_field(Field::Message, "   ");
        assert_eq!(
            form.begin(),
            Err(SubmissionError::MissingField(Field::Message))
        );

        form.set_field(Field::Message, "Hello");
        assert_eq!(form.begin(), Err(SubmissionError::InvalidEmail));
        assert_eq!(form.status(), ContactStatus::Idle);

        form.set_field(Field::Email, " ada@example.com ");
        let params = form.begin().expect("should be valid now");
        assert_eq!(params.from_email, "ada@example.com");
    }

    #[test]
    fn test_email_plausibility() {
        assert!(is_plausible_email("ada@example.com"));
        assert!(is_plausible_email("ada@localhost"));
        assert!(!is_plausible_email("ada"));
        assert!(!is_plausible_email("@example.com"));
        assert!(!is_plausible_email("ada@"));
        assert!(!is_plausible_email("ada@@example.com"));
        assert!(!is_plausible_email("a da@example.com"));
        assert!(!is_plausible_email("ada@example..com"));
    }

    #[test]
    fn test_late_completion_is_ignored() {
        let mut form = filled_form();
        // nothing in flight
        assert!(!form.finish(Ok(())));
        assert_eq!(form.status(), ContactStatus::Idle);
        assert_eq!(form.fields(), &ada());
    }
}
