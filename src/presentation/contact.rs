use chrono::{DateTime, Utc};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// A contact stored in a contact book
///
/// Identity is the pair `(contact_book_id, id)`.
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct Contact {
    /// Unique identifier within the contact book
    pub id: String,
    /// Contact book the contact belongs to
    #[serde(rename = "contactBookId", default)]
    pub contact_book_id: String,
    /// Email address
    pub email: String,
    /// First name
    #[serde(rename = "firstName", default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// Last name
    #[serde(rename = "lastName", default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Whether the contact receives campaigns
    #[serde(default = "default_subscribed")]
    pub subscribed: bool,
    /// Free-form attributes
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub properties: HashMap<String, Value>,
    /// Creation time
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Last update time
    #[serde(rename = "updatedAt", default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

fn default_subscribed() -> bool {
    true
}
