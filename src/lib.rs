//! # unsent
//!
//! A typed async client for the unsent email API.
//!
//! Every resource client maps one-to-one onto REST endpoints and returns
//! `Result<T, ApiError>`: a decoded response on success, a normalized
//! [`error::ApiError`] on any failure (network, serialization or a non-2xx
//! status). There is no retry, caching or pagination logic; each call is
//! exactly one HTTP request.
//!
//! | Resource  | Accessor             | Endpoints                                 |
//! |-----------|----------------------|-------------------------------------------|
//! | Domains   | `client.domains()`   | `/domains`, `/domains/{id}`, `/domains/{id}/verify` |
//! | Contacts  | `client.contacts()`  | `/contactBooks/{book}/contacts[/{id}]`    |
//! | Campaigns | `client.campaigns()` | `/campaigns/{id}[/schedule,/pause,/resume]` |
//! | Emails    | `client.emails()`    | `/emails`, `/emails/batch`, `/emails/{id}[/cancel]` |
//!
//! ## Example
//!
//! ```ignore
//! use unsent::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), ApiError> {
//!     setup_logger();
//!     let client = Client::from_env()?;
//!
//!     let domain = client
//!         .domains()
//!         .create(&DomainCreate::new("example.com", "us-east-1"))
//!         .await?;
//!     let outcome = client.domains().verify(domain.id).await?;
//!     info!("{}", outcome.message);
//!
//!     let created = client
//!         .contacts()
//!         .create("book_1", &ContactCreate::new("ada@example.com"))
//!         .await?;
//!     info!("Contact id: {}", created.contact_id);
//!     Ok(())
//! }
//! ```
//!
//! ## Configuration
//!
//! `Config::new()` reads a `.env` file when present, then:
//!
//! * `UNSENT_API_KEY` - API key sent as a bearer token (required)
//! * `UNSENT_BASE_URL` - Base URL, defaults to `https://api.unsent.dev/v1`
//! * `LOGLEVEL` - Level used by `setup_logger` (default `INFO`)

/// Root client, configuration, resource interfaces and their implementations
pub mod application;
/// Global constants
pub mod constants;
/// Error type shared by every call
pub mod error;
/// Transport and request/response payloads
pub mod model;
/// Commonly used types, re-exported in one place
pub mod prelude;
/// Resource models returned by the API
pub mod presentation;
/// Environment and logging helpers
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
pub fn version() -> &'static str {
    VERSION
}
