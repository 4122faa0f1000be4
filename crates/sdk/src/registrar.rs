//! The host platform's registration seam.

use anyhow::Result;
use serde_json::Value;

/// Host-platform registration interface.
///
/// Builders invoke exactly one of these per [`register`] call, with the
/// finished record serialized as a JSON mapping. No pre-flight existence
/// checks are performed and no retries are attempted; a host failure
/// propagates to the caller unchanged.
///
/// [`register`]: crate::content_type::ContentType::register
pub trait Registrar {
    /// Register a content type under `slug`.
    fn register_content_type(&mut self, slug: &str, args: Value) -> Result<()>;

    /// Register a taxonomy under `slug`, attached to `object_types`.
    fn register_taxonomy(
        &mut self,
        slug: &str,
        object_types: &[String],
        args: Value,
    ) -> Result<()>;
}
