//! Localization seam for default label text.
//!
//! [`Labels`](crate::labels::Labels) seeds its placeholder defaults through
//! a [`Translator`], so a host-backed implementation can localize them.
//! Callers that set every label explicitly never need one.

/// Text domain the default label strings are looked up under.
pub const TEXT_DOMAIN: &str = "training-language";

/// Interface-string translation lookup.
///
/// The result is treated as an opaque display string; no validation is
/// performed on it.
pub trait Translator {
    /// Translate a source string, optionally disambiguated by a context.
    fn translate(&self, text: &str, context: Option<&str>, domain: &str) -> String;
}

/// Translator that returns the source string unchanged.
///
/// Mirrors the host's fallback behavior when no translation is loaded.
#[derive(Debug, Clone, Copy, Default)]
pub struct Passthrough;

impl Translator for Passthrough {
    fn translate(&self, text: &str, _context: Option<&str>, _domain: &str) -> String {
        text.to_string()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn passthrough_returns_source() {
        let t = Passthrough;
        assert_eq!(
            t.translate("Add New", Some("button"), TEXT_DOMAIN),
            "Add New"
        );
        assert_eq!(t.translate("Not found", None, TEXT_DOMAIN), "Not found");
    }
}
