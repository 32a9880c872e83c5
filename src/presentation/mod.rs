/// Campaign models
pub mod campaign;
/// Contact and contact book models
pub mod contact;
/// Domain and DNS record models
pub mod domain;
/// Email and delivery event models
pub mod email;
/// Serialization utilities for API responses
pub mod serialization;

pub use campaign::*;
pub use contact::*;
pub use domain::*;
pub use email::*;
