use crate::presentation::serialization::string_or_number_opt;
use chrono::{DateTime, Utc};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Verification status of a domain or of one of its DNS records
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DomainStatus {
    /// Verification has not been requested yet
    #[default]
    NotStarted,
    /// DNS records are being checked
    Pending,
    /// Domain is verified and can send
    Success,
    /// Verification failed
    Failed,
    /// Verification failed but will be retried by the server
    TemporaryFailure,
    /// Any status this client does not know about yet
    #[serde(other)]
    Unknown,
}

/// A DNS record the domain owner must publish
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DnsRecord {
    /// Record type, e.g. "TXT" or "MX"
    #[serde(rename = "type")]
    pub record_type: String,
    /// Host name of the record
    pub name: String,
    /// Expected record value
    pub value: String,
    /// Time to live, as sent by the server
    #[serde(
        default,
        deserialize_with = "string_or_number_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub ttl: Option<String>,
    /// Priority, only set for MX records
    #[serde(
        default,
        deserialize_with = "string_or_number_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub priority: Option<String>,
    /// Verification status of this record
    #[serde(default)]
    pub status: DomainStatus,
    /// Whether the record is recommended rather than required
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommended: Option<bool>,
}

/// A sending domain
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct Domain {
    /// Unique identifier
    pub id: i64,
    /// Domain name, e.g. "example.com"
    pub name: String,
    /// Owning team
    #[serde(rename = "teamId", default, skip_serializing_if = "Option::is_none")]
    pub team_id: Option<i64>,
    /// Overall verification status
    #[serde(default)]
    pub status: DomainStatus,
    /// Sending region, e.g. "us-east-1"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// Whether link clicks are tracked
    #[serde(rename = "clickTracking", default)]
    pub click_tracking: bool,
    /// Whether opens are tracked
    #[serde(rename = "openTracking", default)]
    pub open_tracking: bool,
    /// DKIM public key
    #[serde(rename = "publicKey", default, skip_serializing_if = "Option::is_none")]
    pub public_key: Option<String>,
    /// DKIM verification status
    #[serde(rename = "dkimStatus", default, skip_serializing_if = "Option::is_none")]
    pub dkim_status: Option<String>,
    /// SPF verification details
    #[serde(rename = "spfDetails", default, skip_serializing_if = "Option::is_none")]
    pub spf_details: Option<String>,
    /// Whether a DMARC record was found
    #[serde(rename = "dmarcAdded", default)]
    pub dmarc_added: bool,
    /// Whether a verification run is in progress
    #[serde(rename = "isVerifying", default)]
    pub is_verifying: bool,
    /// Last verification error, if any
    #[serde(rename = "errorMessage", default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    /// Sending subdomain, if one is used
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subdomain: Option<String>,
    /// DNS records to publish
    #[serde(rename = "dnsRecords", default, skip_serializing_if = "Vec::is_empty")]
    pub dns_records: Vec<DnsRecord>,
    /// Creation time
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Last update time
    #[serde(rename = "updatedAt", default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Domain {
    /// True once the server reports the domain as verified
    #[must_use]
    pub fn is_verified(&self) -> bool {
        self.status == DomainStatus::Success
    }
}
