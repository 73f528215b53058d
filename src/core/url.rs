//! API URL composition
//!
//! Both REST surfaces live under the same prefix and share credentials. The
//! Admin API carries the version segment, the Media Optimizer API does not.

use serde::{Deserialize, Serialize};

/// Which REST surface a call targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiSurface {
    /// Versioned surface: `{prefix}/{version}/{cloud}/...`
    #[default]
    Admin,
    /// Unversioned surface: `{prefix}/{cloud}/...`
    MediaOptimizer,
}

impl ApiSurface {
    pub fn is_versioned(self) -> bool {
        matches!(self, ApiSurface::Admin)
    }
}

/// Join the URL components with `/`.
///
/// Segments are literal path components and are not escaped.
pub fn build_api_url<S: AsRef<str>>(
    prefix: &str,
    cloud_name: &str,
    segments: &[S],
    surface: ApiSurface,
    api_version: &str,
) -> String {
    let mut components: Vec<&str> = Vec::with_capacity(segments.len() + 3);
    components.push(prefix);
    if surface.is_versioned() {
        components.push(api_version);
    }
    components.push(cloud_name);
    components.extend(segments.iter().map(AsRef::as_ref));

    components.join("/")
}
