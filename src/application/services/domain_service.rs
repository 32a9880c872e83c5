use crate::application::interfaces::domain::DomainService;
use crate::error::UnsentResult;
use crate::model::http::HttpClient;
use crate::model::requests::DomainCreate;
use crate::model::responses::{DomainDeleteResponse, DomainVerifyResponse};
use crate::presentation::domain::Domain;
use async_trait::async_trait;
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, info};

/// Client for the `/domains` endpoints
#[derive(Debug, Clone)]
pub struct Domains {
    http_client: Arc<HttpClient>,
}

impl Domains {
    /// Creates a domain client on top of a shared transport
    pub fn new(http_client: Arc<HttpClient>) -> Self {
        Self { http_client }
    }
}

#[async_trait]
impl DomainService for Domains {
    async fn list(&self) -> UnsentResult<Vec<Domain>> {
        info!("Listing domains");
        let domains: Vec<Domain> = self.http_client.get("/domains").await?;
        debug!("{} domains obtained", domains.len());
        Ok(domains)
    }

    async fn create(&self, payload: &DomainCreate) -> UnsentResult<Domain> {
        info!("Creating domain: {}", payload.name);
        let domain: Domain = self.http_client.post("/domains", payload).await?;
        debug!("Domain created with id {}", domain.id);
        Ok(domain)
    }

    async fn verify(&self, domain_id: i64) -> UnsentResult<DomainVerifyResponse> {
        let path = format!("/domains/{domain_id}/verify");
        info!("Verifying domain: {}", domain_id);
        self.http_client.put(&path, json!({})).await
    }

    async fn get(&self, domain_id: i64) -> UnsentResult<Domain> {
        let path = format!("/domains/{domain_id}");
        info!("Getting domain: {}", domain_id);
        let domain: Domain = self.http_client.get(&path).await?;
        debug!("Domain {} status: {:?}", domain.id, domain.status);
        Ok(domain)
    }

    async fn delete(&self, domain_id: i64) -> UnsentResult<DomainDeleteResponse> {
        let path = format!("/domains/{domain_id}");
        info!("Deleting domain: {}", domain_id);
        self.http_client.delete(&path).await
    }
}
