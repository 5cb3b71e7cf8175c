//! Server-rendered multilingual website for CAP London Church.
//!
//! English and Portuguese variants of the site share one routing scheme:
//! every page URL carries a locale prefix, requests without one are
//! redirected to the default locale, and all display copy comes from
//! per-locale string bundles that are loaded and validated at startup.

pub mod config;
pub mod contact;
pub mod events;
pub mod i18n;
pub mod pages;
pub mod server;
