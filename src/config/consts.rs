// src/config/consts.rs

// Net config
pub const API_URL: &str = "https://catfact.ninja/facts";
pub const PAGE_PARAM: &str = "page";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

// Logging
pub const LOG_ENV: &str = "CATFACTS_LOG";
pub const DEFAULT_LOG_FILTER: &str = "warn";
