use anyhow::{bail, Context, Result};
use std::path::PathBuf;
use std::str::FromStr;

pub const DEFAULT_API_URL: &str = "http://demo.piwik.org/";
pub const DEFAULT_OUTPUT_DIR: &str = "Resources/i18n";

/// What to do when a single language fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Stop the whole run at the first failing language.
    #[default]
    Abort,
    /// Log the failure and continue with the next language.
    Skip,
}

impl FromStr for FailurePolicy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "abort" => Ok(FailurePolicy::Abort),
            "skip" => Ok(FailurePolicy::Skip),
            other => bail!("Unknown failure policy '{}' (expected 'abort' or 'skip')", other),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    // Piwik API
    pub api_url: String,
    pub token_auth: String,
    pub http_timeout_secs: u64,

    // Output
    pub output_dir: PathBuf,

    // Failure handling
    pub max_attempts: u32,
    pub on_error: FailurePolicy,

    // Restrict the export to these codes (None = every discovered language)
    pub languages: Option<Vec<String>>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            token_auth: "anonymous".to_string(),
            http_timeout_secs: 120,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            max_attempts: 3,
            on_error: FailurePolicy::Abort,
            languages: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let max_attempts: u32 = parse_env("EXPORT_MAX_ATTEMPTS")?.unwrap_or(defaults.max_attempts);
        if max_attempts == 0 {
            bail!("EXPORT_MAX_ATTEMPTS must be at least 1");
        }

        Ok(Self {
            // Piwik API
            api_url: std::env::var("PIWIK_API_URL").unwrap_or(defaults.api_url),
            token_auth: std::env::var("PIWIK_TOKEN_AUTH").unwrap_or(defaults.token_auth),
            http_timeout_secs: parse_env("HTTP_TIMEOUT_SECS")?
                .unwrap_or(defaults.http_timeout_secs),

            // Output
            output_dir: std::env::var("I18N_OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.output_dir),

            // Failure handling
            max_attempts,
            on_error: parse_env("EXPORT_ON_ERROR")?.unwrap_or(defaults.on_error),

            languages: std::env::var("EXPORT_LANGUAGES")
                .ok()
                .map(|v| parse_language_list(&v))
                .filter(|codes| !codes.is_empty()),
        })
    }
}

/// Read and parse an optional environment variable.
fn parse_env<T>(name: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| anyhow::anyhow!("{}", e))
            .with_context(|| format!("Invalid value for {}: '{}'", name, raw)),
        Err(_) => Ok(None),
    }
}

/// Split a comma-separated list of language codes, dropping blanks.
fn parse_language_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|code| !code.is_empty())
        .map(str::to_string)
        .collect()
}
