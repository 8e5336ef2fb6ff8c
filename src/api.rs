//! Client for the Piwik `LanguagesManager` API.

use crate::config::Config;
use crate::error::ExportError;
use crate::retry::{with_retry_if, RetryConfig};
use anyhow::{Context, Result};
use regex::Regex;
use serde::Deserialize;
use serde_json::Value;
use std::sync::OnceLock;
use std::time::Duration;
use tracing::debug;

pub const GET_AVAILABLE_LANGUAGES: &str = "LanguagesManager.getAvailableLanguages";
pub const GET_TRANSLATIONS_FOR_LANGUAGE: &str = "LanguagesManager.getTranslationsForLanguage";

static LANGUAGE_CODE_REGEX: OnceLock<Regex> = OnceLock::new();

/// One translated string as returned by `getTranslationsForLanguage`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TranslationRecord {
    pub label: String,
    pub value: String,
}

/// Whether a language code is safe to use as a file name.
pub fn is_valid_language_code(code: &str) -> bool {
    let regex = LANGUAGE_CODE_REGEX.get_or_init(|| Regex::new(r"^[A-Za-z0-9_-]+$").unwrap());
    regex.is_match(code)
}

#[derive(Debug, Clone)]
pub struct PiwikClient {
    http: reqwest::Client,
    api_url: String,
    token_auth: String,
    retry: RetryConfig,
}

impl PiwikClient {
    pub fn new(config: &Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.http_timeout_secs))
            .user_agent(concat!("piwik-i18n-export/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            api_url: config.api_url.clone(),
            token_auth: config.token_auth.clone(),
            retry: RetryConfig::api_call(config.max_attempts),
        })
    }

    /// Replace the retry schedule (tests use millisecond delays).
    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    /// List the language codes the Piwik server has translations for.
    ///
    /// Each item of the response is either `["de", ...]` (the code is the first
    /// element) or a bare `"de"`. Codes are returned as-is; callers check
    /// them with [`is_valid_language_code`] before using one as a file name.
    pub async fn list_languages(&self) -> Result<Vec<String>, ExportError> {
        let value = self.call(GET_AVAILABLE_LANGUAGES, &[]).await?;

        let items = value.as_array().ok_or_else(|| ExportError::Decode {
            method: GET_AVAILABLE_LANGUAGES.to_string(),
            reason: format!("expected a JSON array, got {}", json_type(&value)),
        })?;

        items
            .iter()
            .map(|item| {
                let code = language_code(item).ok_or_else(|| ExportError::Decode {
                    method: GET_AVAILABLE_LANGUAGES.to_string(),
                    reason: format!("no language code in item {}", item),
                })?;
                Ok(code.to_string())
            })
            .collect()
    }

    /// Fetch every translation Piwik has for one language.
    pub async fn fetch_translations(
        &self,
        language_code: &str,
    ) -> Result<Vec<TranslationRecord>, ExportError> {
        let value = self
            .call(
                GET_TRANSLATIONS_FOR_LANGUAGE,
                &[("languageCode", language_code)],
            )
            .await?;

        serde_json::from_value(value).map_err(|e| ExportError::Decode {
            method: GET_TRANSLATIONS_FOR_LANGUAGE.to_string(),
            reason: e.to_string(),
        })
    }

    /// Call an API method, retrying transient faults.
    async fn call(&self, method: &str, params: &[(&str, &str)]) -> Result<Value, ExportError> {
        with_retry_if(
            &self.retry,
            method,
            || self.call_once(method, params),
            ExportError::is_transient,
        )
        .await
    }

    async fn call_once(&self, method: &str, params: &[(&str, &str)]) -> Result<Value, ExportError> {
        debug!("Calling {} at {}", method, self.api_url);

        let response = self
            .http
            .get(&self.api_url)
            .query(&[
                ("module", "API"),
                ("method", method),
                ("format", "JSON"),
                ("token_auth", self.token_auth.as_str()),
            ])
            .query(params)
            .send()
            .await
            .map_err(|source| ExportError::Request {
                method: method.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ExportError::Status {
                method: method.to_string(),
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await.map_err(|source| ExportError::Request {
            method: method.to_string(),
            source,
        })?;

        let value: Value = serde_json::from_str(&body).map_err(|e| ExportError::Decode {
            method: method.to_string(),
            reason: e.to_string(),
        })?;

        // Piwik reports failures as 200 with {"result":"error","message":"..."}
        if let Some(message) = api_error_message(&value) {
            return Err(ExportError::Api {
                method: method.to_string(),
                message,
            });
        }

        Ok(value)
    }
}

fn language_code(item: &Value) -> Option<&str> {
    match item {
        Value::Array(fields) => fields.first().and_then(Value::as_str),
        Value::String(code) => Some(code),
        _ => None,
    }
}

fn api_error_message(value: &Value) -> Option<String> {
    let object = value.as_object()?;
    if object.get("result").and_then(Value::as_str) != Some("error") {
        return None;
    }
    Some(
        object
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or("unknown error")
            .to_string(),
    )
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
