use crate::error::UnsentResult;
use crate::model::requests::{EmailCreate, EmailUpdate};
use crate::model::responses::{EmailBatchResponse, EmailIdResponse};
use crate::presentation::email::Email;
use async_trait::async_trait;

/// Interface for the `/emails` endpoints
#[async_trait]
pub trait EmailService: Send + Sync {
    /// Sends, or schedules, one email
    async fn send(&self, payload: &EmailCreate) -> UnsentResult<EmailIdResponse>;

    /// Sends several emails in one request
    async fn batch(&self, payload: &[EmailCreate]) -> UnsentResult<EmailBatchResponse>;

    /// Gets one email with its event history
    async fn get(&self, email_id: &str) -> UnsentResult<Email>;

    /// Reschedules a scheduled email
    async fn update(&self, email_id: &str, payload: &EmailUpdate) -> UnsentResult<EmailIdResponse>;

    /// Cancels a scheduled email
    async fn cancel(&self, email_id: &str) -> UnsentResult<EmailIdResponse>;
}
