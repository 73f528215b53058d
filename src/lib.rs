//! # cloudinary-dispatch
//!
//! Request construction and dispatch for the Cloudinary REST surfaces.
//!
//! The Admin API (`{prefix}/v1_1/{cloud}/...`) and the Media Optimizer API
//! (`{prefix}/{cloud}/...`) share one set of credentials. This crate resolves
//! per-call overrides against a [`Config`], validates the credentials, builds
//! the URL and hands the request to a [`Transport`].
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use cloudinary_dispatch::{ApiClient, CallOptions, Config, HttpTransport};
//! use cloudinary_dispatch::api::media_optimizer;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!     let client = ApiClient::new(config, HttpTransport::new()?);
//!
//!     media_optimizer::ping(&client, CallOptions::new())?;
//!
//!     let urls = vec!["https://res.cloudinary.com/demo/image/upload/sample.jpg"];
//!     let responses = media_optimizer::invalidate(&client, &urls, CallOptions::new())?;
//!     println!("{} invalidation requests sent", responses.len());
//!
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]

pub mod api;
pub mod config;
pub mod core;
pub mod utils;

// Re-export main types
pub use config::{Config, ConfigBuilder};
pub use core::{
    ApiClient, ApiResponse, ApiSurface, CallOptions, Credentials, HttpMethod, HttpTransport,
    Params, RequestDescriptor, Transport, TransportError,
};
pub use utils::error::{Error, Result};
pub use utils::logging::init_logging;

/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
