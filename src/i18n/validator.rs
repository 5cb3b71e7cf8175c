//! Translation bundle validation.
//!
//! Every page renders whatever the bundle returns, so a missing key means a
//! blank section in production. This module turns that class of bug into a
//! startup failure: each enabled locale's bundle is checked against the full
//! set of keys the pages require, and `{placeholder}` tokens are compared
//! against the default bundle so translations keep the same substitution
//! points.

use crate::i18n::{BundleCache, Locale, LocaleRegistry, StringBundle};
use regex::Regex;
use std::sync::OnceLock;

/// Validation report containing errors and warnings about a bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Problems that must block startup (missing or empty required keys)
    pub errors: Vec<String>,

    /// Non-critical findings (placeholder drift between translations)
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Create a new empty validation report
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Check if the report has any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Check if the report has any warnings
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }

    /// Fold another report into this one.
    pub fn merge(&mut self, other: ValidationReport) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for translation bundles.
pub struct BundleValidator;

// Placeholder pattern (cached for performance)
static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();

impl BundleValidator {
    /// Validate one locale's bundle.
    ///
    /// Checks that every key required by every page is present and non-blank,
    /// and that `{placeholder}` tokens match the default bundle for keys the
    /// two have in common.
    ///
    /// # Arguments
    /// * `locale` - The locale being validated (for report messages)
    /// * `bundle` - The bundle under validation
    /// * `reference` - The default locale's bundle
    pub fn validate(
        locale: Locale,
        bundle: &StringBundle,
        reference: &StringBundle,
    ) -> ValidationReport {
        let mut report = ValidationReport::new();

        for (page, keys) in required_keys() {
            for key in *keys {
                match bundle.get(key) {
                    None => report.errors.push(format!(
                        "[{}] page '{}' requires missing key '{}'",
                        locale, page, key
                    )),
                    Some(value) if value.trim().is_empty() => report.errors.push(format!(
                        "[{}] page '{}' key '{}' is blank",
                        locale, page, key
                    )),
                    Some(_) => {}
                }
            }
        }

        report
            .warnings
            .extend(Self::placeholder_warnings(locale, bundle, reference));

        report
    }

    /// Validate every enabled locale in a loaded cache.
    ///
    /// The default locale's bundle serves as the placeholder reference for
    /// all the others.
    pub fn validate_cache(cache: &BundleCache, registry: &LocaleRegistry) -> ValidationReport {
        let reference = cache.default_bundle();
        let mut report = ValidationReport::new();

        for config in registry.list_enabled() {
            let Ok(locale) = Locale::from_code(config.code) else {
                continue;
            };
            let bundle = cache.bundle(locale);
            report.merge(Self::validate(locale, &bundle, &reference));
        }

        report
    }

    /// Compare `{placeholder}` tokens against the reference bundle.
    ///
    /// A translation that drops or renames a placeholder would render the
    /// raw token (or lose the substituted value), so drift is reported per
    /// key. Only keys present in both bundles are compared.
    fn placeholder_warnings(
        locale: Locale,
        bundle: &StringBundle,
        reference: &StringBundle,
    ) -> Vec<String> {
        let mut warnings = Vec::new();

        for key in reference.keys() {
            let (Some(reference_text), Some(text)) = (reference.get(key), bundle.get(key)) else {
                continue;
            };

            let mut expected = Self::extract_placeholders(reference_text);
            let mut found = Self::extract_placeholders(text);
            expected.sort_unstable();
            found.sort_unstable();

            if expected != found {
                warnings.push(format!(
                    "[{}] key '{}' placeholder mismatch: expected {:?}, found {:?}",
                    locale, key, expected, found
                ));
            }
        }

        warnings
    }

    /// Extract all `{placeholder}` tokens from a string.
    fn extract_placeholders(text: &str) -> Vec<String> {
        let regex =
            PLACEHOLDER_REGEX.get_or_init(|| Regex::new(r"\{([a-zA-Z0-9_]+)\}").unwrap());

        regex
            .captures_iter(text)
            .filter_map(|cap| cap.get(0).map(|m| m.as_str().to_string()))
            .collect()
    }
}

/// The dotted keys each page needs to render.
///
/// The shell entry covers the navigation and footer shared by every page.
pub fn required_keys() -> &'static [(&'static str, &'static [&'static str])] {
    &[
        (
            "shell",
            &[
                "navigation.home",
                "navigation.about",
                "navigation.services",
                "navigation.events",
                "navigation.contact",
                "common.siteName",
                "common.tagline",
                "common.footer.quickLinks",
                "common.footer.contact",
                "common.footer.rights",
            ],
        ),
        (
            "home",
            &[
                "homepage.hero.title",
                "homepage.hero.subtitle",
                "homepage.hero.description",
                "homepage.hero.cta",
                "homepage.mission.description",
                "homepage.pillars.title",
                "homepage.pillars.worship",
                "homepage.pillars.evangelism",
                "homepage.pillars.discipleship",
                "homepage.pillars.family",
                "homepage.pillars.ministry",
            ],
        ),
        (
            "about",
            &[
                "about.title",
                "about.subtitle",
                "about.mission.title",
                "about.mission.description",
                "about.vision.title",
                "about.vision.description",
                "about.pillars.title",
                "about.pillars.subtitle",
                "about.leadership.title",
                "about.leadership.subtitle",
                "about.cta.title",
                "about.cta.description",
                "about.cta.button",
            ],
        ),
        (
            "services",
            &[
                "services.title",
                "services.subtitle",
                "services.weekly.title",
                "services.weekly.subtitle",
                "services.sunday.title",
                "services.sunday.time",
                "services.sunday.description",
                "services.sunday.worship",
                "services.sunday.preaching",
                "services.sunday.prayer",
                "services.sunday.fellowship",
                "services.tuesday.title",
                "services.tuesday.time",
                "services.tuesday.description",
                "services.tuesday.intercession",
                "services.tuesday.healing",
                "services.tuesday.breakthrough",
                "services.tuesday.community",
                "services.thursday.title",
                "services.thursday.time",
                "services.thursday.description",
                "services.thursday.study",
                "services.thursday.discussion",
                "services.thursday.application",
                "services.thursday.growth",
                "services.expect.title",
                "services.expect.subtitle",
                "services.special.title",
                "services.special.subtitle",
                "services.cta.title",
                "services.cta.description",
                "services.cta.button",
            ],
        ),
        (
            "events",
            &[
                "events.title",
                "events.subtitle",
                "events.learnMore",
                "events.register",
                "events.categories.all",
                "events.categories.worship",
                "events.categories.conference",
                "events.categories.community",
                "events.categories.youth",
                "events.categories.special",
                "events.featured.title",
                "events.featured.subtitle",
                "events.upcoming.title",
                "events.upcoming.subtitle",
                "events.upcoming.event1.title",
                "events.upcoming.event1.description",
                "events.upcoming.event1.location",
                "events.upcoming.event2.title",
                "events.upcoming.event2.description",
                "events.upcoming.event2.location",
                "events.upcoming.event3.title",
                "events.upcoming.event3.description",
                "events.upcoming.event3.location",
                "events.upcoming.event4.title",
                "events.upcoming.event4.description",
                "events.upcoming.event4.location",
                "events.regular.title",
                "events.regular.subtitle",
                "events.regular.sunday.title",
                "events.regular.sunday.time",
                "events.regular.sunday.description",
                "events.regular.tuesday.title",
                "events.regular.tuesday.time",
                "events.regular.tuesday.description",
                "events.regular.thursday.title",
                "events.regular.thursday.time",
                "events.regular.thursday.description",
                "events.cta.title",
                "events.cta.description",
                "events.cta.subscribe",
                "events.cta.contact",
            ],
        ),
        (
            "contact",
            &[
                "contact.title",
                "contact.subtitle",
                "contact.info.title",
                "contact.info.subtitle",
                "contact.info.address.title",
                "contact.info.address.line1",
                "contact.info.address.line2",
                "contact.info.address.line3",
                "contact.info.phone.title",
                "contact.info.email.title",
                "contact.info.hours.title",
                "contact.info.hours.weekdays",
                "contact.info.hours.saturday",
                "contact.info.hours.sunday",
                "contact.form.title",
                "contact.form.subtitle",
                "contact.form.name",
                "contact.form.namePlaceholder",
                "contact.form.email",
                "contact.form.emailPlaceholder",
                "contact.form.phone",
                "contact.form.phonePlaceholder",
                "contact.form.subject",
                "contact.form.selectSubject",
                "contact.form.subjects.general",
                "contact.form.subjects.prayer",
                "contact.form.subjects.pastoral",
                "contact.form.subjects.events",
                "contact.form.subjects.volunteer",
                "contact.form.subjects.other",
                "contact.form.message",
                "contact.form.messagePlaceholder",
                "contact.form.prayerRequest",
                "contact.form.submit",
                "contact.form.success",
                "contact.form.validationError",
                "contact.location.title",
                "contact.location.subtitle",
                "contact.location.mapPlaceholder",
                "contact.location.mapNote",
                "contact.directions.tube.title",
                "contact.directions.tube.description",
                "contact.directions.bus.title",
                "contact.directions.bus.description",
                "contact.directions.car.title",
                "contact.directions.car.description",
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn bundle_from(value: serde_json::Value) -> StringBundle {
        StringBundle::from_json("test.json", &value).expect("valid bundle")
    }

    // ==================== Placeholder Extraction Tests ====================

    #[test]
    fn test_extract_placeholders_single() {
        let placeholders = BundleValidator::extract_placeholders("© {year} CAP London Church");
        assert_eq!(placeholders, vec!["{year}"]);
    }

    #[test]
    fn test_extract_placeholders_multiple() {
        let placeholders = BundleValidator::extract_placeholders("{name} <{email}>");
        assert_eq!(placeholders, vec!["{name}", "{email}"]);
    }

    #[test]
    fn test_extract_placeholders_none() {
        let placeholders = BundleValidator::extract_placeholders("No tokens here");
        assert!(placeholders.is_empty());
    }

    // ==================== Placeholder Warning Tests ====================

    #[test]
    fn test_placeholder_match_is_clean() {
        let reference = bundle_from(json!({ "footer": { "rights": "© {year} Church" } }));
        let bundle = bundle_from(json!({ "footer": { "rights": "© {year} Igreja" } }));

        let warnings =
            BundleValidator::placeholder_warnings(Locale::PORTUGUESE, &bundle, &reference);
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_placeholder_dropped_in_translation() {
        let reference = bundle_from(json!({ "footer": { "rights": "© {year} Church" } }));
        let bundle = bundle_from(json!({ "footer": { "rights": "© Igreja" } }));

        let warnings =
            BundleValidator::placeholder_warnings(Locale::PORTUGUESE, &bundle, &reference);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("footer.rights"));
        assert!(warnings[0].contains("{year}"));
    }

    #[test]
    fn test_placeholder_renamed_in_translation() {
        let reference = bundle_from(json!({ "greeting": "Hello {name}" }));
        let bundle = bundle_from(json!({ "greeting": "Olá {nome}" }));

        let warnings =
            BundleValidator::placeholder_warnings(Locale::PORTUGUESE, &bundle, &reference);
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn test_placeholder_keys_missing_from_bundle_are_skipped() {
        // Missing keys are reported by the required-key check, not here
        let reference = bundle_from(json!({ "greeting": "Hello {name}" }));
        let bundle = bundle_from(json!({}));

        let warnings =
            BundleValidator::placeholder_warnings(Locale::PORTUGUESE, &bundle, &reference);
        assert!(warnings.is_empty());
    }

    // ==================== Required Key Tests ====================

    #[test]
    fn test_missing_required_key_is_an_error() {
        let bundle = bundle_from(json!({ "navigation": { "home": "Home" } }));
        let report = BundleValidator::validate(Locale::ENGLISH, &bundle, &bundle);

        assert!(report.has_errors());
        assert!(report
            .errors
            .iter()
            .any(|error| error.contains("homepage.hero.title")));
    }

    #[test]
    fn test_blank_required_key_is_an_error() {
        let mut document: serde_json::Value =
            serde_json::from_str(include_str!("../../messages/en.json")).expect("parse en.json");
        document["contact"]["form"]["title"] = json!("   ");

        let bundle = bundle_from(document);
        let report = BundleValidator::validate(Locale::ENGLISH, &bundle, &bundle);

        assert!(report.has_errors());
        assert!(report
            .errors
            .iter()
            .any(|error| error.contains("contact.form.title") && error.contains("blank")));
    }

    #[test]
    fn test_error_names_locale_and_page() {
        let bundle = bundle_from(json!({}));
        let report = BundleValidator::validate(Locale::PORTUGUESE, &bundle, &bundle);

        assert!(report.errors.iter().any(|error| error.contains("[pt]")));
        assert!(report
            .errors
            .iter()
            .any(|error| error.contains("page 'contact'")));
    }

    // ==================== Shipped Bundle Completeness Tests ====================

    #[test]
    fn test_shipped_english_bundle_is_complete() {
        let document = serde_json::from_str(include_str!("../../messages/en.json"))
            .expect("parse en.json");
        let bundle = bundle_from(document);

        let report = BundleValidator::validate(Locale::ENGLISH, &bundle, &bundle);
        assert!(report.is_clean(), "en.json should validate: {:?}", report);
    }

    #[test]
    fn test_shipped_portuguese_bundle_is_complete() {
        let reference = bundle_from(
            serde_json::from_str(include_str!("../../messages/en.json")).expect("parse en.json"),
        );
        let bundle = bundle_from(
            serde_json::from_str(include_str!("../../messages/pt.json")).expect("parse pt.json"),
        );

        let report = BundleValidator::validate(Locale::PORTUGUESE, &bundle, &reference);
        assert!(report.is_clean(), "pt.json should validate: {:?}", report);
    }

    // ==================== Report Tests ====================

    #[test]
    fn test_validation_report_new() {
        let report = ValidationReport::new();
        assert!(report.is_clean());
        assert!(!report.has_errors());
        assert!(!report.has_warnings());
    }

    #[test]
    fn test_validation_report_with_warning() {
        let mut report = ValidationReport::new();
        report.warnings.push("Test warning".to_string());

        assert!(!report.is_clean());
        assert!(!report.has_errors());
        assert!(report.has_warnings());
    }

    #[test]
    fn test_validation_report_with_error() {
        let mut report = ValidationReport::new();
        report.errors.push("Test error".to_string());

        assert!(!report.is_clean());
        assert!(report.has_errors());
        assert!(!report.has_warnings());
    }

    #[test]
    fn test_validation_report_merge() {
        let mut report = ValidationReport::new();
        report.errors.push("first".to_string());

        let mut other = ValidationReport::new();
        other.errors.push("second".to_string());
        other.warnings.push("warned".to_string());

        report.merge(other);
        assert_eq!(report.errors.len(), 2);
        assert_eq!(report.warnings.len(), 1);
    }
}
