/// Campaign service interface
pub mod campaign;
/// Contact service interface
pub mod contact;
/// Domain service interface
pub mod domain;
/// Email service interface
pub mod email;
