//! Media Optimizer API
//!
//! Calls against the unversioned surface: liveness, cache warm-up and batched
//! cache invalidation.

use crate::core::chunk::chunked;
use crate::core::client::ApiClient;
use crate::core::options::CallOptions;
use crate::core::request::{HttpMethod, Params};
use crate::core::transport::Transport;
use crate::utils::error::Result;
use serde::Serialize;
use tracing::{debug, warn};

/// URLs sent per `cache_invalidate` request
pub const INVALIDATE_BATCH_SIZE: usize = 20;

#[derive(Serialize)]
struct InvalidateBody<'a> {
    urls: &'a [&'a str],
}

#[derive(Serialize)]
struct WarmUpBody<'a> {
    url: &'a str,
}

/// Liveness probe
pub fn ping<T: Transport>(client: &ApiClient<T>, options: CallOptions) -> Result<T::Response> {
    client.call_api(
        HttpMethod::GET,
        &["ping"],
        Params::new(),
        options.media_optimizer(),
    )
}

/// Pre-populate the cache for a single URL
pub fn warm_up<T: Transport>(
    client: &ApiClient<T>,
    url: &str,
    options: CallOptions,
) -> Result<T::Response> {
    client.call_json_api(
        HttpMethod::POST,
        &["cache_warm_up"],
        &WarmUpBody { url },
        options.media_optimizer(),
    )
}

/// Invalidate cached URLs, [`INVALIDATE_BATCH_SIZE`] per request.
///
/// Batches are sent one after another. The first failure is returned
/// immediately: remaining batches are not sent and responses already received
/// are dropped.
pub fn invalidate<T, S>(
    client: &ApiClient<T>,
    urls: &[S],
    options: CallOptions,
) -> Result<Vec<T::Response>>
where
    T: Transport,
    S: AsRef<str>,
{
    let options = options.media_optimizer();
    let batches = chunked(urls, INVALIDATE_BATCH_SIZE)?;
    let mut results = Vec::with_capacity(urls.len().div_ceil(INVALIDATE_BATCH_SIZE));

    for (index, batch) in batches.enumerate() {
        debug!("Invalidating batch {} ({} urls)", index + 1, batch.len());

        let batch: Vec<&str> = batch.iter().map(AsRef::as_ref).collect();
        let response = client
            .call_json_api(
                HttpMethod::POST,
                &["cache_invalidate"],
                &InvalidateBody { urls: &batch },
                options.clone(),
            )
            .inspect_err(|e| {
                warn!(
                    "Cache invalidation aborted at batch {} after {} succeeded: {}",
                    index + 1,
                    results.len(),
                    e
                )
            })?;
        results.push(response);
    }

    Ok(results)
}
