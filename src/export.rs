//! The export run: discover languages, fetch, filter and write one file each.

use crate::allowlist::AllowList;
use crate::api::{is_valid_language_code, PiwikClient};
use crate::config::{Config, FailurePolicy};
use crate::error::{ExportError, FaultKind};
use crate::payload::{filter_translations, output_path, render};
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, trace, warn};

/// A language file that was written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFile {
    pub language: String,
    pub path: PathBuf,
    pub keys: usize,
    /// Allow-listed keys the language lacks; the client shows the English default.
    pub missing: usize,
}

/// A language that failed under [`FailurePolicy::Skip`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLanguage {
    pub language: String,
    pub kind: FaultKind,
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportSummary {
    pub written: Vec<WrittenFile>,
    pub skipped: Vec<SkippedLanguage>,
}

impl ExportSummary {
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }
}

pub struct Exporter<'a> {
    client: PiwikClient,
    allow_list: &'a AllowList,
    output_dir: PathBuf,
    on_error: FailurePolicy,
    languages: Option<Vec<String>>,
}

impl<'a> Exporter<'a> {
    pub fn new(config: &Config, client: PiwikClient, allow_list: &'a AllowList) -> Self {
        Self {
            client,
            allow_list,
            output_dir: config.output_dir.clone(),
            on_error: config.on_error,
            languages: config.languages.clone(),
        }
    }

    /// Run the whole export.
    ///
    /// Failing to list languages always aborts. Per-language faults abort or
    /// are recorded as skipped, depending on the failure policy.
    pub async fn run(&self) -> Result<ExportSummary> {
        let discovered = self
            .client
            .list_languages()
            .await
            .context("Failed to list available languages")?;

        let languages = self.select_languages(discovered);
        let mut summary = ExportSummary::default();

        for language in &languages {
            info!(language = %language, "Found language");

            match self.export_language(language).await {
                Ok(written) => {
                    info!(
                        language = %written.language,
                        keys = written.keys,
                        missing = written.missing,
                        path = %written.path.display(),
                        "Language processed"
                    );
                    summary.written.push(written);
                }
                Err(e) if self.on_error == FailurePolicy::Skip => {
                    warn!(language = %language, kind = %e.kind(), "Skipping language: {}", e);
                    summary.skipped.push(SkippedLanguage {
                        language: language.clone(),
                        kind: e.kind(),
                        reason: e.to_string(),
                    });
                }
                Err(e) => {
                    return Err(e).with_context(|| format!("Failed to export language '{}'", language));
                }
            }
        }

        info!(
            written = summary.written.len(),
            skipped = summary.skipped.len(),
            "Export finished"
        );

        Ok(summary)
    }

    /// Fetch, filter and write a single language.
    ///
    /// The code becomes a file name, so anything that is not a plain
    /// identifier is rejected before any request is made.
    pub async fn export_language(&self, language: &str) -> Result<WrittenFile, ExportError> {
        if !is_valid_language_code(language) {
            return Err(ExportError::InvalidLanguageCode(language.to_string()));
        }

        let records = self.client.fetch_translations(language).await?;
        let translations = filter_translations(&records, self.allow_list);

        let mut missing = 0;
        for key in self.allow_list.keys() {
            if !translations.contains_key(key) {
                missing += 1;
                trace!(
                    language = %language,
                    key,
                    fallback = self.allow_list.default_value(key).unwrap_or_default(),
                    "No translation, client falls back to default"
                );
            }
        }

        let path = output_path(&self.output_dir, language);
        write_language_file(&path, &render(&translations))?;

        Ok(WrittenFile {
            language: language.to_string(),
            path,
            keys: translations.len(),
            missing,
        })
    }

    /// Apply the optional `EXPORT_LANGUAGES` restriction, keeping API order.
    fn select_languages(&self, discovered: Vec<String>) -> Vec<String> {
        let Some(wanted) = &self.languages else {
            return discovered;
        };

        for code in wanted {
            if !discovered.contains(code) {
                warn!(language = %code, "Requested language is not available on the server");
            }
        }

        discovered
            .into_iter()
            .filter(|code| wanted.contains(code))
            .collect()
    }
}

/// Create or truncate the language file. The parent directory is created if missing.
pub fn write_language_file(path: &Path, payload: &str) -> Result<(), ExportError> {
    let to_write_error = |source| ExportError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(to_write_error)?;
    }
    fs::write(path, payload).map_err(to_write_error)
}
