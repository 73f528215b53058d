//! Endpoint helpers built on [`ApiClient`](crate::ApiClient)

pub mod media_optimizer;

pub use media_optimizer::{INVALIDATE_BATCH_SIZE, invalidate, ping, warm_up};
