/// Default base URL of the unsent REST API, including the version prefix
pub const DEFAULT_BASE_URL: &str = "https://api.unsent.dev/v1";
/// Environment variable holding the API key
pub const API_KEY_ENV: &str = "UNSENT_API_KEY";
/// Environment variable overriding the base URL
pub const BASE_URL_ENV: &str = "UNSENT_BASE_URL";
/// Environment variable selecting the log level used by `setup_logger`
pub const LOG_LEVEL_ENV: &str = "LOGLEVEL";
/// User agent string sent with every request
pub const USER_AGENT: &str = concat!("unsent-rust/", env!("CARGO_PKG_VERSION"));
