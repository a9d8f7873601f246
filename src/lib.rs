//! Edge Deployment Demo Service Library

pub mod config;
pub mod geo;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod skew;

pub use config::AppConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use skew::{add_skew_protection_headers, with_skew_protection, DeploymentIdentity};
