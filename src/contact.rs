use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MOCK_SUCCESS_STATUS: &str = "Message sent successfully! (This is a mock submission)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Message,
}

impl FormField {
    pub fn input_name(self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Message => "message",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown form field `{0}`")]
pub struct UnknownField(pub String);

impl FromStr for FormField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(FormField::Name),
            "email" => Ok(FormField::Email),
            "message" => Ok(FormField::Message),
            x => Err(UnknownField(x.to_string())),
        }
    }
}

/// What gets handed to a [`MessageDelivery`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ack {
    pub bytes: usize,
}

#[derive(Error, Debug)]
pub enum DeliveryError {
    #[error("couldn't encode message: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("delivery rejected: {0}")]
    Rejected(String),
}

pub trait MessageDelivery {
    fn send(&self, message: &ContactMessage) -> Result<Ack, DeliveryError>;
}

/// Encodes the message as it would go over the wire, logs it, and reports
/// success. Nothing leaves the page.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockDelivery;

impl MessageDelivery for MockDelivery {
    fn send(&self, message: &ContactMessage) -> Result<Ack, DeliveryError> {
        let body = serde_json::to_string(message)?;
        log::info!("mock contact submission: {body}");
        Ok(Ack { bytes: body.len() })
    }
}

/// Contact form fields plus the status line shown under the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    fields: ContactMessage,
    status: Option<String>,
}

impl ContactForm {
    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.fields.name,
            FormField::Email => &self.fields.email,
            FormField::Message => &self.fields.message,
        }
    }

    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        let slot = match field {
            FormField::Name => &mut self.fields.name,
            FormField::Email => &mut self.fields.email,
            FormField::Message => &mut self.fields.message,
        };
        *slot = value.into();
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Required-ness is enforced by the inputs, so empty fields are sent
    /// as-is.
    pub fn submit<D: MessageDelivery>(&mut self, delivery: &D) {
        match delivery.send(&self.fields) {
            Ok(_) => {
                self.fields = ContactMessage::default();
                self.status = Some(MOCK_SUCCESS_STATUS.to_string());
            }
            Err(e) => {
                log::warn!("contact submission failed: {e}");
                self.status = Some(format!("Message could not be sent: {e}"));
            }
        }
    }
}
