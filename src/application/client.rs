/******************************************************************************
   Author: unsent-client contributors
   Date: 18/10/26
******************************************************************************/

use crate::application::config::Config;
use crate::application::services::{Campaigns, Contacts, Domains, Emails};
use crate::error::UnsentResult;
use crate::model::http::HttpClient;
use std::sync::Arc;
use tracing::debug;

/// Entry point of the library
///
/// Builds the shared transport once and hands a handle to it to every
/// resource client. Cloning is cheap and clones share the transport.
///
/// # Example
/// ```ignore
/// use unsent::prelude::*;
///
/// let client = Client::with_api_key("un_xxx")?;
/// let domains = client.domains().list().await?;
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    http_client: Arc<HttpClient>,
    domains: Domains,
    contacts: Contacts,
    campaigns: Campaigns,
    emails: Emails,
}

impl Client {
    /// Creates a client from an explicit configuration
    ///
    /// # Returns
    /// * `Ok(Client)` - Client ready to use
    /// * `Err(ApiError)` - If the API key is blank or the HTTP client cannot be built
    pub fn new(config: Config) -> UnsentResult<Self> {
        let http_client = Arc::new(HttpClient::new(config)?);
        debug!("Client created for {}", http_client.config().base_url());

        Ok(Self {
            domains: Domains::new(http_client.clone()),
            contacts: Contacts::new(http_client.clone()),
            campaigns: Campaigns::new(http_client.clone()),
            emails: Emails::new(http_client.clone()),
            http_client,
        })
    }

    /// Creates a client from `UNSENT_API_KEY` and `UNSENT_BASE_URL`
    pub fn from_env() -> UnsentResult<Self> {
        Self::new(Config::new())
    }

    /// Creates a client for the given key and the default base URL
    pub fn with_api_key(api_key: impl Into<String>) -> UnsentResult<Self> {
        Self::new(Config::with_api_key(api_key))
    }

    /// Domain endpoints
    pub fn domains(&self) -> &Domains {
        &self.domains
    }

    /// Contact endpoints
    pub fn contacts(&self) -> &Contacts {
        &self.contacts
    }

    /// Campaign endpoints
    pub fn campaigns(&self) -> &Campaigns {
        &self.campaigns
    }

    /// Email endpoints
    pub fn emails(&self) -> &Emails {
        &self.emails
    }

    /// Underlying transport, for endpoints without a typed wrapper
    pub fn http_client(&self) -> &HttpClient {
        &self.http_client
    }
}
