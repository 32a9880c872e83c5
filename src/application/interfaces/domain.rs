use crate::error::UnsentResult;
use crate::model::requests::DomainCreate;
use crate::model::responses::{DomainDeleteResponse, DomainVerifyResponse};
use crate::presentation::domain::Domain;
use async_trait::async_trait;

/// Interface for the `/domains` endpoints
#[async_trait]
pub trait DomainService: Send + Sync {
    /// Lists all domains of the team
    async fn list(&self) -> UnsentResult<Vec<Domain>>;

    /// Registers a new sending domain
    ///
    /// # Returns
    /// * The created domain, including the DNS records to publish
    async fn create(&self, payload: &DomainCreate) -> UnsentResult<Domain>;

    /// Asks the server to check the domain's DNS records
    ///
    /// Safe to call repeatedly: verifying an already verified domain
    /// reports the same outcome again.
    async fn verify(&self, domain_id: i64) -> UnsentResult<DomainVerifyResponse>;

    /// Gets one domain
    async fn get(&self, domain_id: i64) -> UnsentResult<Domain>;

    /// Deletes a domain
    async fn delete(&self, domain_id: i64) -> UnsentResult<DomainDeleteResponse>;
}
