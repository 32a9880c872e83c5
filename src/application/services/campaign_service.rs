use crate::application::interfaces::campaign::CampaignService;
use crate::error::UnsentResult;
use crate::model::http::HttpClient;
use crate::model::requests::{CampaignCreate, CampaignSchedule};
use crate::model::responses::CampaignActionResponse;
use crate::presentation::campaign::Campaign;
use async_trait::async_trait;
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, info};

/// Client for the `/campaigns` endpoints
#[derive(Debug, Clone)]
pub struct Campaigns {
    http_client: Arc<HttpClient>,
}

impl Campaigns {
    /// Creates a campaign client on top of a shared transport
    pub fn new(http_client: Arc<HttpClient>) -> Self {
        Self { http_client }
    }
}

#[async_trait]
impl CampaignService for Campaigns {
    async fn create(&self, payload: &CampaignCreate) -> UnsentResult<Campaign> {
        info!("Creating campaign: {}", payload.name);
        let campaign: Campaign = self.http_client.post("/campaigns", payload).await?;
        debug!("Campaign created with id {}", campaign.id);
        Ok(campaign)
    }

    async fn get(&self, campaign_id: &str) -> UnsentResult<Campaign> {
        let path = format!("/campaigns/{campaign_id}");
        info!("Getting campaign: {}", campaign_id);
        self.http_client.get(&path).await
    }

    async fn schedule(
        &self,
        campaign_id: &str,
        payload: &CampaignSchedule,
    ) -> UnsentResult<CampaignActionResponse> {
        let path = format!("/campaigns/{campaign_id}/schedule");
        info!("Scheduling campaign: {}", campaign_id);
        self.http_client.post(&path, payload).await
    }

    async fn pause(&self, campaign_id: &str) -> UnsentResult<CampaignActionResponse> {
        let path = format!("/campaigns/{campaign_id}/pause");
        info!("Pausing campaign: {}", campaign_id);
        self.http_client.post(&path, json!({})).await
    }

    async fn resume(&self, campaign_id: &str) -> UnsentResult<CampaignActionResponse> {
        let path = format!("/campaigns/{campaign_id}/resume");
        info!("Resuming campaign: {}", campaign_id);
        self.http_client.post(&path, json!({})).await
    }
}
