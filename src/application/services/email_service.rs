use crate::application::interfaces::email::EmailService;
use crate::error::UnsentResult;
use crate::model::http::HttpClient;
use crate::model::requests::{EmailCreate, EmailUpdate};
use crate::model::responses::{EmailBatchResponse, EmailIdResponse};
use crate::presentation::email::Email;
use async_trait::async_trait;
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, info};

/// Client for the `/emails` endpoints
#[derive(Debug, Clone)]
pub struct Emails {
    http_client: Arc<HttpClient>,
}

impl Emails {
    /// Creates an email client on top of a shared transport
    pub fn new(http_client: Arc<HttpClient>) -> Self {
        Self { http_client }
    }
}

#[async_trait]
impl EmailService for Emails {
    async fn send(&self, payload: &EmailCreate) -> UnsentResult<EmailIdResponse> {
        info!("Sending email from {}", payload.from);
        let response: EmailIdResponse = self.http_client.post("/emails", payload).await?;
        debug!("Email accepted with id {}", response.email_id);
        Ok(response)
    }

    async fn batch(&self, payload: &[EmailCreate]) -> UnsentResult<EmailBatchResponse> {
        info!("Sending batch of {} emails", payload.len());
        let response: EmailBatchResponse =
            self.http_client.post("/emails/batch", payload).await?;
        debug!("{} emails accepted", response.len());
        Ok(response)
    }

    async fn get(&self, email_id: &str) -> UnsentResult<Email> {
        let path = format!("/emails/{email_id}");
        info!("Getting email: {}", email_id);
        self.http_client.get(&path).await
    }

    async fn update(&self, email_id: &str, payload: &EmailUpdate) -> UnsentResult<EmailIdResponse> {
        let path = format!("/emails/{email_id}");
        info!("Rescheduling email {} to {}", email_id, payload.scheduled_at);
        self.http_client.patch(&path, payload).await
    }

    async fn cancel(&self, email_id: &str) -> UnsentResult<EmailIdResponse> {
        let path = format!("/emails/{email_id}/cancel");
        info!("Cancelling email: {}", email_id);
        self.http_client.post(&path, json!({})).await
    }
}
