/******************************************************************************
   Author: unsent-client contributors
   Date: 18/10/26
******************************************************************************/

use chrono::{DateTime, Utc};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Delivery status of an email
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EmailStatus {
    /// Waiting for its scheduled time
    Scheduled,
    /// Accepted and queued
    #[default]
    Queued,
    /// Handed to the mail provider
    Sent,
    /// Delivery postponed by the receiving server
    DeliveryDelayed,
    /// Bounced
    Bounced,
    /// Rejected before sending
    Rejected,
    /// Failed to render
    RenderingFailure,
    /// Delivered to the recipient's server
    Delivered,
    /// Opened by the recipient
    Opened,
    /// A link was clicked
    Clicked,
    /// Marked as spam
    Complained,
    /// Failed to send
    Failed,
    /// Scheduled send was cancelled
    Cancelled,
    /// Suppressed by the suppression list
    Suppressed,
    /// Any status this client does not know about yet
    #[serde(other)]
    Unknown,
}

/// One entry in an email's event history
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmailEvent {
    /// Email the event belongs to
    #[serde(rename = "emailId")]
    pub email_id: String,
    /// Status reached with this event
    pub status: EmailStatus,
    /// When the event happened
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Provider specific payload
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

/// A sent or scheduled email
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct Email {
    /// Unique identifier
    pub id: String,
    /// Owning team
    #[serde(rename = "teamId", default, skip_serializing_if = "Option::is_none")]
    pub team_id: Option<i64>,
    /// Recipients
    #[serde(default)]
    pub to: Vec<String>,
    /// Reply-to addresses
    #[serde(rename = "replyTo", default, skip_serializing_if = "Vec::is_empty")]
    pub reply_to: Vec<String>,
    /// Carbon copy addresses
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cc: Vec<String>,
    /// Blind carbon copy addresses
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bcc: Vec<String>,
    /// Sender address
    pub from: String,
    /// Subject line
    #[serde(default)]
    pub subject: String,
    /// HTML body
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    /// Plain text body
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Most recent status
    #[serde(rename = "latestStatus", default, skip_serializing_if = "Option::is_none")]
    pub latest_status: Option<EmailStatus>,
    /// When the email is or was due to be sent
    #[serde(rename = "scheduledAt", default, skip_serializing_if = "Option::is_none")]
    pub scheduled_at: Option<DateTime<Utc>>,
    /// Creation time
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Last update time
    #[serde(rename = "updatedAt", default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    /// Event history, oldest first
    #[serde(rename = "emailEvents", default, skip_serializing_if = "Vec::is_empty")]
    pub email_events: Vec<EmailEvent>,
}
