//! Locale registry: Single source of truth for all supported locales.
//!
//! This module provides a centralized registry of all locales the site can
//! serve. It uses a singleton pattern with `OnceLock` to ensure thread-safe
//! initialization and access.

use std::sync::OnceLock;

/// Configuration for a supported locale.
///
/// Contains all metadata and settings for a specific locale, including
/// its code, names, enabled status, and whether it's the default locale.
#[derive(Debug, Clone)]
pub struct LocaleConfig {
    /// ISO 639-1 language code (e.g., "en", "pt")
    pub code: &'static str,

    /// English name of the language (e.g., "English", "Portuguese")
    pub name: &'static str,

    /// Native name of the language (e.g., "English", "Português")
    pub native_name: &'static str,

    /// Whether this is the default locale (only one should be true).
    /// Requests without a locale prefix redirect here, and its bundle
    /// is the fallback when another locale's bundle fails to load.
    pub is_default: bool,

    /// Whether this locale is enabled for routing
    pub enabled: bool,
}

/// Global locale registry singleton.
///
/// This registry contains all supported locales and provides methods to query
/// and access them. It's initialized once on first access and remains immutable
/// thereafter.
pub struct LocaleRegistry {
    locales: Vec<LocaleConfig>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LocaleRegistry> = OnceLock::new();

impl LocaleRegistry {
    /// Get the global locale registry instance.
    ///
    /// This method initializes the registry on first call and returns a reference
    /// to the singleton instance on subsequent calls.
    pub fn get() -> &'static LocaleRegistry {
        REGISTRY.get_or_init(|| LocaleRegistry {
            locales: default_locales(),
        })
    }

    /// Get a locale configuration by its code.
    ///
    /// # Arguments
    /// * `code` - The ISO 639-1 language code (e.g., "en", "pt")
    ///
    /// # Returns
    /// * `Some(&LocaleConfig)` if the locale exists
    /// * `None` if the locale is not found
    pub fn get_by_code(&self, code: &str) -> Option<&LocaleConfig> {
        self.locales.iter().find(|locale| locale.code == code)
    }

    /// Get all enabled locales.
    pub fn list_enabled(&self) -> Vec<&LocaleConfig> {
        self.locales.iter().filter(|locale| locale.enabled).collect()
    }

    /// Get all locales (including disabled ones).
    pub fn list_all(&self) -> Vec<&LocaleConfig> {
        self.locales.iter().collect()
    }

    /// Get the default locale configuration.
    ///
    /// The default locale is the redirect target for unprefixed paths and the
    /// fallback bundle source. There should be exactly one default locale.
    ///
    /// # Panics
    /// Panics if no default locale is found or if multiple default locales
    /// are defined (this indicates a configuration error).
    pub fn default_locale(&self) -> &LocaleConfig {
        let defaults: Vec<_> = self
            .locales
            .iter()
            .filter(|locale| locale.is_default)
            .collect();

        match defaults.len() {
            0 => panic!("No default locale found in registry"),
            1 => defaults[0],
            _ => panic!("Multiple default locales found in registry"),
        }
    }

    /// Check if a locale code is supported and enabled.
    pub fn is_enabled(&self, code: &str) -> bool {
        self.get_by_code(code)
            .map(|locale| locale.enabled)
            .unwrap_or(false)
    }
}

/// Default locale configurations.
///
/// This function returns the set of locales the site serves.
/// Currently English (default) and Portuguese.
fn default_locales() -> Vec<LocaleConfig> {
    vec![
        LocaleConfig {
            code: "en",
            name: "English",
            native_name: "English",
            is_default: true,
            enabled: true,
        },
        LocaleConfig {
            code: "pt",
            name: "Portuguese",
            native_name: "Português",
            is_default: false,
            enabled: true,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_get_returns_singleton() {
        let registry1 = LocaleRegistry::get();
        let registry2 = LocaleRegistry::get();

        // Should return the same instance (same memory address)
        assert!(std::ptr::eq(registry1, registry2));
    }

    #[test]
    fn test_get_by_code_english() {
        let registry = LocaleRegistry::get();
        let config = registry.get_by_code("en");

        assert!(config.is_some());
        let config = config.unwrap();
        assert_eq!(config.code, "en");
        assert_eq!(config.name, "English");
        assert_eq!(config.native_name, "English");
        assert!(config.is_default);
        assert!(config.enabled);
    }

    #[test]
    fn test_get_by_code_portuguese() {
        let registry = LocaleRegistry::get();
        let config = registry.get_by_code("pt");

        assert!(config.is_some());
        let config = config.unwrap();
        assert_eq!(config.code, "pt");
        assert_eq!(config.name, "Portuguese");
        assert_eq!(config.native_name, "Português");
        assert!(!config.is_default);
        assert!(config.enabled);
    }

    #[test]
    fn test_get_by_code_nonexistent() {
        let registry = LocaleRegistry::get();
        let config = registry.get_by_code("fr");
        assert!(config.is_none());
    }

    #[test]
    fn test_get_by_code_is_case_sensitive() {
        let registry = LocaleRegistry::get();
        assert!(registry.get_by_code("EN").is_none());
        assert!(registry.get_by_code("Pt").is_none());
    }

    #[test]
    fn test_list_enabled_contains_english_and_portuguese() {
        let registry = LocaleRegistry::get();
        let enabled = registry.list_enabled();

        assert_eq!(enabled.len(), 2);
        assert!(enabled.iter().any(|locale| locale.code == "en"));
        assert!(enabled.iter().any(|locale| locale.code == "pt"));
    }

    #[test]
    fn test_list_all_contains_english_and_portuguese() {
        let registry = LocaleRegistry::get();
        let all = registry.list_all();

        assert_eq!(all.len(), 2);
        assert!(all.iter().any(|locale| locale.code == "en"));
        assert!(all.iter().any(|locale| locale.code == "pt"));
    }

    #[test]
    fn test_default_locale_is_english() {
        let registry = LocaleRegistry::get();
        let default = registry.default_locale();

        assert_eq!(default.code, "en");
        assert!(default.is_default);
    }

    #[test]
    fn test_default_locale_is_member_of_enabled_set() {
        let registry = LocaleRegistry::get();
        let default = registry.default_locale();

        assert!(registry.is_enabled(default.code));
    }

    #[test]
    fn test_is_enabled_english() {
        let registry = LocaleRegistry::get();
        assert!(registry.is_enabled("en"));
    }

    #[test]
    fn test_is_enabled_portuguese() {
        let registry = LocaleRegistry::get();
        assert!(registry.is_enabled("pt"));
    }

    #[test]
    fn test_is_enabled_nonexistent() {
        let registry = LocaleRegistry::get();
        assert!(!registry.is_enabled("fr"));
    }

    #[test]
    fn test_locale_config_clone() {
        let config = LocaleConfig {
            code: "en",
            name: "English",
            native_name: "English",
            is_default: true,
            enabled: true,
        };

        let cloned = config.clone();
        assert_eq!(config.code, cloned.code);
        assert_eq!(config.name, cloned.name);
    }
}
