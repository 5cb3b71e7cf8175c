//! Request path resolution for locale-prefixed routing.
//!
//! Every page URL carries a locale prefix (`/en/about`, `/pt/contact`).
//! This module decides, for any incoming path, which locale applies and
//! whether the client must be redirected to the canonical locale-prefixed
//! form of the path.

use crate::i18n::Locale;

/// Outcome of resolving a request path against the supported locales.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// The locale that applies to this request
    pub locale: Locale,

    /// The locale-prefixed form of the path that the router treats as
    /// authoritative
    pub canonical_path: String,

    /// Whether the client must be redirected to `canonical_path`
    pub redirect_needed: bool,
}

/// Resolve a request path to a locale and its canonical locale-prefixed form.
///
/// The first path segment is compared against the enabled locales in the
/// registry. An exact match resolves to that locale with no redirect needed.
/// Anything else, including the root path and unrecognized segments such as
/// `/fr/...`, resolves to the default locale with the default locale's code
/// prepended to the original path. Unrecognized segments are kept as-is, so
/// `/fr/anything` canonicalizes to `/en/fr/anything`.
///
/// The function is total over any string input: malformed paths simply fail
/// the segment match and fall through to the default locale.
pub fn resolve(path: &str) -> Resolution {
    let normalized = if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    };

    let first_segment = normalized[1..].split('/').next().unwrap_or("");
    if let Ok(locale) = Locale::from_code(first_segment) {
        return Resolution {
            locale,
            canonical_path: normalized,
            redirect_needed: false,
        };
    }

    let default = Locale::default_locale();
    let canonical_path = if normalized == "/" {
        // Root collapses to the bare default-locale path
        format!("/{}", default.code())
    } else {
        format!("/{}{}", default.code(), normalized)
    };

    Resolution {
        locale: default,
        canonical_path,
        redirect_needed: true,
    }
}
