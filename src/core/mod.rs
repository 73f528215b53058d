//! Core dispatch layer
//!
//! Leaf-first: credential validation, URL composition, chunking, the request
//! descriptor and the transport seam, then the client that ties them together.

pub mod auth;
pub mod chunk;
pub mod client;
pub mod options;
pub mod request;
pub mod transport;
pub mod url;

pub use auth::Credentials;
pub use chunk::chunked;
pub use client::{ApiClient, METADATA_FIELDS_SEGMENT};
pub use options::CallOptions;
pub use request::{Headers, HttpMethod, Params, RequestDescriptor, TransportOptions};
pub use transport::{ApiResponse, HttpTransport, Transport, TransportConfig, TransportError};
pub use url::{ApiSurface, build_api_url};
