/******************************************************************************
   Author: unsent-client contributors
   Date: 18/10/26
******************************************************************************/

use chrono::{DateTime, Utc};
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Payload for `POST /domains`
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Eq)]
pub struct DomainCreate {
    /// Domain name to register
    pub name: String,
    /// Sending region, e.g. "us-east-1"
    pub region: String,
}

impl DomainCreate {
    /// Create a new payload
    pub fn new(name: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            region: region.into(),
        }
    }
}

/// Payload for `POST /contactBooks/{book_id}/contacts`
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ContactCreate {
    /// Email address
    pub email: String,
    /// First name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// Last name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Free-form attributes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<HashMap<String, Value>>,
    /// Whether the contact receives campaigns
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscribed: Option<bool>,
}

impl ContactCreate {
    /// Create new parameters with just the email (required field)
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            ..Default::default()
        }
    }

    /// Set the first name
    pub fn with_first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self
    }

    /// Set the last name
    pub fn with_last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = Some(last_name.into());
        self
    }

    /// Add one property
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Set the subscription flag
    pub fn with_subscribed(mut self, subscribed: bool) -> Self {
        self.subscribed = Some(subscribed);
        self
    }
}

/// Payload for `PATCH /contactBooks/{book_id}/contacts/{contact_id}`
///
/// Only the fields that are set are sent.
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ContactUpdate {
    /// New email address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// New first name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// New last name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Properties to set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<HashMap<String, Value>>,
    /// New subscription flag
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscribed: Option<bool>,
}

/// Payload for `PUT /contactBooks/{book_id}/contacts/{contact_id}`
///
/// Creates the contact when the id is unknown, updates it otherwise.
pub type ContactUpsert = ContactCreate;

/// Query for `GET /contactBooks/{book_id}/contacts`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ContactListQuery {
    /// Comma separated email filter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emails: Option<String>,
    /// Page number, starting at 1
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Page size
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

/// Payload for `POST /campaigns`
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CampaignCreate {
    /// Internal name
    pub name: String,
    /// Sender address
    pub from: String,
    /// Subject line
    pub subject: String,
    /// Target contact book
    pub contact_book_id: String,
    /// Preview text shown by mail clients
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview_text: Option<String>,
    /// Editor content
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// HTML body
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    /// Reply-to addresses
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<Vec<String>>,
    /// Carbon copy addresses
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cc: Option<Vec<String>>,
    /// Blind carbon copy addresses
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bcc: Option<Vec<String>>,
    /// Start sending immediately after creation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_now: Option<bool>,
    /// Start sending at this time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_at: Option<DateTime<Utc>>,
    /// Number of emails per batch
    #[serde(skip_serializing_if = "Option::is_none")]
    pub batch_size: Option<u32>,
}

/// Payload for `POST /campaigns/{campaign_id}/schedule`
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CampaignSchedule {
    /// When to start sending; the server sends now when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_at: Option<DateTime<Utc>>,
    /// Number of emails per batch
    #[serde(skip_serializing_if = "Option::is_none")]
    pub batch_size: Option<u32>,
}

/// Recipient list accepted by the email endpoints: one address or several
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum Recipients {
    /// A single address
    One(String),
    /// Several addresses
    Many(Vec<String>),
}

impl Default for Recipients {
    fn default() -> Self {
        Recipients::Many(Vec::new())
    }
}

impl From<&str> for Recipients {
    fn from(value: &str) -> Self {
        Recipients::One(value.to_string())
    }
}

impl From<String> for Recipients {
    fn from(value: String) -> Self {
        Recipients::One(value)
    }
}

impl From<Vec<String>> for Recipients {
    fn from(value: Vec<String>) -> Self {
        Recipients::Many(value)
    }
}

/// A file attached to an email
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Attachment {
    /// File name shown to the recipient
    pub filename: String,
    /// Base64 encoded content
    pub content: String,
}

/// Payload for `POST /emails` and one entry of `POST /emails/batch`
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct EmailCreate {
    /// Recipients
    pub to: Recipients,
    /// Sender address
    pub from: String,
    /// Subject line, optional when a template is used
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    /// Template to render
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,
    /// Template variables
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<HashMap<String, String>>,
    /// HTML body
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    /// Plain text body
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Reply-to addresses
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<Recipients>,
    /// Carbon copy addresses
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cc: Option<Recipients>,
    /// Blind carbon copy addresses
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bcc: Option<Recipients>,
    /// Send at this time instead of immediately
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_at: Option<DateTime<Utc>>,
    /// Attachments
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Vec<Attachment>>,
    /// Extra headers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<HashMap<String, String>>,
}

impl EmailCreate {
    /// Create a new email with sender, recipients and subject
    pub fn new(
        from: impl Into<String>,
        to: impl Into<Recipients>,
        subject: impl Into<String>,
    ) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            subject: Some(subject.into()),
            ..Default::default()
        }
    }

    /// Set the HTML body
    pub fn with_html(mut self, html: impl Into<String>) -> Self {
        self.html = Some(html.into());
        self
    }

    /// Set the plain text body
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Schedule the email
    pub fn with_scheduled_at(mut self, scheduled_at: DateTime<Utc>) -> Self {
        self.scheduled_at = Some(scheduled_at);
        self
    }
}

/// Payload for `PATCH /emails/{email_id}`
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EmailUpdate {
    /// New send time
    pub scheduled_at: DateTime<Utc>,
}
