//! Order-preserving fixed-size batching

use crate::utils::error::{Error, Result};
use std::slice::Chunks;

/// Split `items` into consecutive chunks of `size`; the last may be shorter.
///
/// Chunks are produced lazily and borrow from `items`. A `size` of zero is
/// rejected up front.
pub fn chunked<T>(items: &[T], size: usize) -> Result<Chunks<'_, T>> {
    if size == 0 {
        return Err(Error::InvalidChunkSize);
    }
    Ok(items.chunks(size))
}
