//! Infrastructure: outbound HTTP, HTML extraction, configuration, logging.

pub mod config;
pub mod http_client;
pub mod logging;
pub mod parsing;
