/******************************************************************************
   Author: unsent-client contributors
   Date: 18/10/26
******************************************************************************/

use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Response of `PUT /domains/{domain_id}/verify`
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct DomainVerifyResponse {
    /// Server message describing the verification outcome
    #[serde(default)]
    pub message: String,
}

/// Response of `DELETE /domains/{domain_id}`
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct DomainDeleteResponse {
    /// Id of the deleted domain
    #[serde(default)]
    pub id: i64,
    /// Whether the domain was deleted
    #[serde(default)]
    pub success: bool,
    /// Server message
    #[serde(default)]
    pub message: String,
}

/// Response of contact create, update and upsert calls
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ContactIdResponse {
    /// Id of the created or modified contact
    #[serde(rename = "contactId", default)]
    pub contact_id: String,
}

/// Response of `POST /contactBooks/{book_id}/contacts`
pub type ContactCreateResponse = ContactIdResponse;
/// Response of `PATCH /contactBooks/{book_id}/contacts/{contact_id}`
pub type ContactUpdateResponse = ContactIdResponse;
/// Response of `PUT /contactBooks/{book_id}/contacts/{contact_id}`
pub type ContactUpsertResponse = ContactIdResponse;

/// Response of calls that only report success: contact deletion and
/// campaign schedule, pause and resume
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct SuccessResponse {
    /// Whether the server applied the change
    #[serde(default)]
    pub success: bool,
}

/// Response of `DELETE /contactBooks/{book_id}/contacts/{contact_id}`
pub type ContactDeleteResponse = SuccessResponse;
/// Response of campaign schedule, pause and resume calls
pub type CampaignActionResponse = SuccessResponse;

/// Response of single email calls: send, update and cancel
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct EmailIdResponse {
    /// Id of the email
    #[serde(rename = "emailId", default)]
    pub email_id: String,
}

/// Response of `POST /emails/batch`
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct EmailBatchResponse {
    /// One entry per email, in request order
    #[serde(default)]
    pub data: Vec<EmailIdResponse>,
}

impl EmailBatchResponse {
    /// Returns the number of emails accepted
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if no email was accepted
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
