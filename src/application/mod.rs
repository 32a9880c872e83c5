/// Root client exposing the resource clients
pub mod client;
/// Application configuration module
pub mod config;
/// Resource interfaces, one trait per endpoint group
pub mod interfaces;
/// Resource client implementations
pub mod services;
