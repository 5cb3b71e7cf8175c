//! Locale type: Flexible, validated locale representation.
//!
//! This module provides the `Locale` type, a small copyable value that is
//! guaranteed to refer to a supported, enabled locale in the registry.

use crate::i18n::{LocaleConfig, LocaleRegistry};
use anyhow::{bail, Result};
use std::fmt;

/// A validated locale.
///
/// This type represents a locale that has been validated against the registry.
/// It ensures that only supported, enabled locales can be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Locale {
    /// ISO 639-1 language code (e.g., "en", "pt")
    code: &'static str,
}

impl Locale {
    /// English locale constant.
    pub const ENGLISH: Locale = Locale { code: "en" };

    /// Portuguese locale constant.
    pub const PORTUGUESE: Locale = Locale { code: "pt" };

    /// Create a Locale from a language code string.
    ///
    /// # Arguments
    /// * `code` - The ISO 639-1 language code (e.g., "en", "pt")
    ///
    /// # Returns
    /// * `Ok(Locale)` if the code is valid and the locale is enabled
    /// * `Err` if the code is not found or the locale is disabled
    ///
    /// # Example
    /// ```ignore
    /// let portuguese = Locale::from_code("pt")?;
    /// ```
    pub fn from_code(code: &str) -> Result<Locale> {
        let registry = LocaleRegistry::get();

        match registry.get_by_code(code) {
            Some(config) if config.enabled => Ok(Locale {
                code: config.code, // Use the static str from the registry
            }),
            Some(_) => bail!("Locale '{}' is not enabled", code),
            None => bail!("Unknown locale code: '{}'", code),
        }
    }

    /// Get the default locale.
    ///
    /// This is the locale requests without a valid prefix are redirected to,
    /// and the one whose bundle backs every fallback.
    pub fn default_locale() -> Locale {
        let config = LocaleRegistry::get().default_locale();
        Locale { code: config.code }
    }

    /// Get the ISO 639-1 language code.
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Get the full locale configuration from the registry.
    ///
    /// # Panics
    /// Panics if the locale code is not found in the registry. This should
    /// never happen if the Locale was constructed properly (via `from_code`
    /// or constants).
    pub fn config(&self) -> &'static LocaleConfig {
        LocaleRegistry::get()
            .get_by_code(self.code)
            .expect("Locale code should always be valid")
    }

    /// Get the English name of the locale (e.g., "English", "Portuguese").
    pub fn name(&self) -> &'static str {
        self.config().name
    }

    /// Get the native name of the locale (e.g., "English", "Português").
    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    /// Check if this is the default locale.
    pub fn is_default(&self) -> bool {
        self.config().is_default
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}
