//! Contact form capture and validation.
//!
//! The site collects contact messages but does not deliver them itself: an
//! accepted submission is handed to a [`ContactSink`], and the shipped sink
//! writes it to the application log. Wiring up a mailer or CRM means
//! implementing the trait, nothing else changes.

use regex::Regex;
use serde::{Deserialize, Deserializer};
use std::sync::OnceLock;
use tracing::info;

/// Enumerated subjects offered by the contact form's select control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactSubject {
    General,
    Prayer,
    Pastoral,
    Events,
    Volunteer,
    Other,
}

impl ContactSubject {
    /// Every subject, in the order the form lists them.
    pub fn all() -> [ContactSubject; 6] {
        [
            Self::General,
            Self::Prayer,
            Self::Pastoral,
            Self::Events,
            Self::Volunteer,
            Self::Other,
        ]
    }

    /// Parse the form's option value.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "general" => Some(Self::General),
            "prayer" => Some(Self::Prayer),
            "pastoral" => Some(Self::Pastoral),
            "events" => Some(Self::Events),
            "volunteer" => Some(Self::Volunteer),
            "other" => Some(Self::Other),
            _ => None,
        }
    }

    /// The option value posted by the form.
    pub fn code(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Prayer => "prayer",
            Self::Pastoral => "pastoral",
            Self::Events => "events",
            Self::Volunteer => "volunteer",
            Self::Other => "other",
        }
    }

    /// Bundle key for the localized subject label.
    pub fn label_key(&self) -> &'static str {
        match self {
            Self::General => "contact.form.subjects.general",
            Self::Prayer => "contact.form.subjects.prayer",
            Self::Pastoral => "contact.form.subjects.pastoral",
            Self::Events => "contact.form.subjects.events",
            Self::Volunteer => "contact.form.subjects.volunteer",
            Self::Other => "contact.form.subjects.other",
        }
    }
}

/// Raw payload as posted by the contact page.
///
/// Everything is optional at this layer; required-field enforcement happens
/// in [`ContactForm::validate`] so an empty `<select>` becomes a field error
/// rather than a deserialization failure.
#[derive(Debug, Clone, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub phone: String,

    #[serde(default)]
    pub subject: String,

    #[serde(default)]
    pub message: String,

    #[serde(default, rename = "prayerRequest", deserialize_with = "checkbox")]
    pub prayer_request: bool,
}

/// A validated submission ready for delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: ContactSubject,
    pub message: String,
    pub prayer_request: bool,
}

impl ContactForm {
    /// Validate required fields and produce a submission.
    ///
    /// Name, email, subject and message are required; the phone number is
    /// optional. On failure the names of the offending fields are returned
    /// so the caller can map them onto localized messages.
    pub fn validate(self) -> Result<ContactSubmission, Vec<&'static str>> {
        let mut invalid = Vec::new();

        let name = self.name.trim();
        if name.is_empty() {
            invalid.push("name");
        }

        let email = self.email.trim();
        if !is_valid_email(email) {
            invalid.push("email");
        }

        let subject = ContactSubject::from_code(self.subject.trim());
        if subject.is_none() {
            invalid.push("subject");
        }

        let message = self.message.trim();
        if message.is_empty() {
            invalid.push("message");
        }

        if let (Some(subject), true) = (subject, invalid.is_empty()) {
            let phone = self.phone.trim();
            Ok(ContactSubmission {
                name: name.to_string(),
                email: email.to_string(),
                phone: (!phone.is_empty()).then(|| phone.to_string()),
                subject,
                message: message.to_string(),
                prayer_request: self.prayer_request,
            })
        } else {
            Err(invalid)
        }
    }
}

/// Minimal shape check for an email address (something@domain.tld).
fn is_valid_email(email: &str) -> bool {
    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = EMAIL_REGEX.get_or_init(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap());
    regex.is_match(email)
}

/// HTML checkboxes post a value only when ticked, so the field deserializes
/// from an optional string rather than a bool.
fn checkbox<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(matches!(value.as_deref(), Some("true") | Some("on") | Some("1")))
}

/// Integration point for delivering accepted submissions.
///
/// A backend or email service is out of scope for the site itself; the
/// default sink records the captured values in the application log.
pub trait ContactSink: Send + Sync {
    fn deliver(&self, submission: &ContactSubmission);
}

/// Sink that writes submissions to the application log.
#[derive(Debug, Default)]
pub struct LogSink;

impl ContactSink for LogSink {
    fn deliver(&self, submission: &ContactSubmission) {
        info!(
            "Contact submission from {} <{}> (subject: {}, prayer request: {})",
            submission.name,
            submission.email,
            submission.subject.code(),
            submission.prayer_request
        );
        info!("Contact message ({} chars): {}", submission.message.len(), submission.message);
    }
}
