use chrono::{DateTime, Utc};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Lifecycle status of a campaign, as reported by the server
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CampaignStatus {
    /// Created but not scheduled
    #[default]
    Draft,
    /// Scheduled for a future send
    Scheduled,
    /// Currently sending
    Running,
    /// Sending paused
    Paused,
    /// All emails sent
    Sent,
    /// Any status this client does not know about yet
    #[serde(other)]
    Unknown,
}

/// An email campaign sent to a contact book
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct Campaign {
    /// Unique identifier
    pub id: String,
    /// Internal name
    pub name: String,
    /// Sender address
    #[serde(default)]
    pub from: String,
    /// Subject line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    /// Preview text shown by mail clients
    #[serde(rename = "previewText", default, skip_serializing_if = "Option::is_none")]
    pub preview_text: Option<String>,
    /// Target contact book
    #[serde(rename = "contactBookId", default, skip_serializing_if = "Option::is_none")]
    pub contact_book_id: Option<String>,
    /// Rendered HTML body
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    /// Editor content the HTML was rendered from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Current status
    #[serde(default)]
    pub status: CampaignStatus,
    /// Reply-to addresses
    #[serde(rename = "replyTo", default, skip_serializing_if = "Vec::is_empty")]
    pub reply_to: Vec<String>,
    /// Carbon copy addresses
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cc: Vec<String>,
    /// Blind carbon copy addresses
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bcc: Vec<String>,
    /// When sending starts, if scheduled
    #[serde(rename = "scheduledAt", default, skip_serializing_if = "Option::is_none")]
    pub scheduled_at: Option<DateTime<Utc>>,
    /// Number of emails sent per batch
    #[serde(rename = "batchSize", default, skip_serializing_if = "Option::is_none")]
    pub batch_size: Option<u32>,
    /// Total number of recipients
    #[serde(default)]
    pub total: u64,
    /// Emails sent so far
    #[serde(default)]
    pub sent: u64,
    /// Emails delivered
    #[serde(default)]
    pub delivered: u64,
    /// Emails opened
    #[serde(default)]
    pub opened: u64,
    /// Emails with at least one click
    #[serde(default)]
    pub clicked: u64,
    /// Recipients that unsubscribed
    #[serde(default)]
    pub unsubscribed: u64,
    /// Emails that bounced
    #[serde(default)]
    pub bounced: u64,
    /// Emails marked as spam
    #[serde(default)]
    pub complained: u64,
    /// Creation time
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Last update time
    #[serde(rename = "updatedAt", default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}
