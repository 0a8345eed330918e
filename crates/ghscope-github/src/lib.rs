#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

mod config;
mod error;
mod http;
mod url;

// ============================================================================
// Public API
// ============================================================================

pub use config::GithubClientConfig;
pub use error::{GatewayError, GatewayResult};
pub use http::ReqwestGateway;
