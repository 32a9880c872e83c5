/******************************************************************************
   Author: unsent-client contributors
   Date: 18/10/26
******************************************************************************/

//! # Prelude
//!
//! Brings the root client, the resource traits and the payload types into
//! scope with a single import.
//!
//! ```rust
//! use unsent::prelude::*;
//!
//! let config = Config::with_api_key("un_test");
//! assert_eq!(config.base_url(), DEFAULT_BASE_URL);
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Root client
pub use crate::application::client::Client;

/// Configuration for the client
pub use crate::application::config::{Config, Credentials, RestApiConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Error type and result alias
pub use crate::error::{ApiError, UnsentResult};

// ============================================================================
// RESOURCE INTERFACES AND CLIENTS
// ============================================================================

/// Resource traits; must be in scope to call resource methods
pub use crate::application::interfaces::{
    campaign::CampaignService, contact::ContactService, domain::DomainService,
    email::EmailService,
};

/// Resource clients
pub use crate::application::services::{Campaigns, Contacts, Domains, Emails};

// ============================================================================
// TRANSPORT
// ============================================================================

/// HTTP transport
pub use crate::model::http::HttpClient;

// ============================================================================
// MODELS
// ============================================================================

/// Request payloads
pub use crate::model::requests::{
    Attachment, CampaignCreate, CampaignSchedule, ContactCreate, ContactListQuery, ContactUpdate,
    ContactUpsert, DomainCreate, EmailCreate, EmailUpdate, Recipients,
};

/// Response payloads
pub use crate::model::responses::{
    CampaignActionResponse, ContactCreateResponse, ContactDeleteResponse, ContactIdResponse,
    ContactUpdateResponse, ContactUpsertResponse, DomainDeleteResponse, DomainVerifyResponse,
    EmailBatchResponse, EmailIdResponse, SuccessResponse,
};

/// Resource models
pub use crate::presentation::{
    Campaign, CampaignStatus, Contact, DnsRecord, Domain, DomainStatus, Email, EmailEvent,
    EmailStatus,
};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

/// Re-export commonly used external types
pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use std::sync::Arc;
pub use tracing::{debug, error, info, warn};

/// Re-export chrono for date/time handling
pub use chrono::{DateTime, Utc};

/// Re-export reqwest for raw calls through `HttpClient::request`
pub use reqwest::{Method, StatusCode};
