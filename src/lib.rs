//! Export Piwik translations into the language files shipped with Piwik Mobile.
//!
//! The run asks a Piwik server which languages it has, fetches the
//! translations for each, keeps only the keys in the [`allowlist`] and writes
//! `Resources/i18n/<code>.js` for the mobile client to load.

pub mod allowlist;
pub mod api;
pub mod config;
pub mod error;
pub mod export;
pub mod payload;
pub mod retry;
