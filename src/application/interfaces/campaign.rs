use crate::error::UnsentResult;
use crate::model::requests::{CampaignCreate, CampaignSchedule};
use crate::model::responses::CampaignActionResponse;
use crate::presentation::campaign::Campaign;
use async_trait::async_trait;

/// Interface for the `/campaigns` endpoints
#[async_trait]
pub trait CampaignService: Send + Sync {
    /// Creates a campaign
    async fn create(&self, payload: &CampaignCreate) -> UnsentResult<Campaign>;

    /// Gets one campaign, including its delivery counters
    async fn get(&self, campaign_id: &str) -> UnsentResult<Campaign>;

    /// Schedules a campaign, or starts it now when no time is given
    async fn schedule(
        &self,
        campaign_id: &str,
        payload: &CampaignSchedule,
    ) -> UnsentResult<CampaignActionResponse>;

    /// Pauses a running or scheduled campaign
    async fn pause(&self, campaign_id: &str) -> UnsentResult<CampaignActionResponse>;

    /// Resumes a paused campaign
    async fn resume(&self, campaign_id: &str) -> UnsentResult<CampaignActionResponse>;
}
