/// Module containing the campaign resource client
pub mod campaign_service;
/// Module containing the contact resource client
pub mod contact_service;
/// Module containing the domain resource client
pub mod domain_service;
/// Module containing the email resource client
pub mod email_service;

pub use crate::application::interfaces::campaign::*;
pub use crate::application::interfaces::contact::*;
pub use crate::application::interfaces::domain::*;
pub use crate::application::interfaces::email::*;
pub use campaign_service::*;
pub use contact_service::*;
pub use domain_service::*;
pub use email_service::*;
