//! Build the per-language translation file contents.

use crate::allowlist::AllowList;
use crate::api::TranslationRecord;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

/// Assignment the mobile client evaluates when it loads a language file.
pub const PAYLOAD_PREFIX: &str = "Piwik.Locale.Translation.translations = ";
pub const PAYLOAD_SUFFIX: &str = ";";

/// Keep the records whose label is allow-listed.
///
/// The map keeps response order. A repeated label keeps its first position
/// but takes the later value.
pub fn filter_translations(records: &[TranslationRecord], allow_list: &AllowList) -> Map<String, Value> {
    let mut translations = Map::new();
    for record in records {
        if allow_list.contains(&record.label) {
            translations.insert(record.label.clone(), Value::String(record.value.clone()));
        }
    }
    translations
}

/// Render the JavaScript file body for a filtered mapping.
pub fn render(translations: &Map<String, Value>) -> String {
    // A map of strings always serializes
    let json = Value::Object(translations.clone()).to_string();
    // U+2028/U+2029 are valid in JSON strings but end the line in pre-ES2019 JavaScript
    let json = json.replace('\u{2028}', "\\u2028").replace('\u{2029}', "\\u2029");
    format!("{}{}{}", PAYLOAD_PREFIX, json, PAYLOAD_SUFFIX)
}

/// Path of the language file for `language_code` inside `output_dir`.
pub fn output_path(output_dir: &Path, language_code: &str) -> PathBuf {
    output_dir.join(format!("{}.js", language_code))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn record(label: &str, value: &str) -> TranslationRecord {
        TranslationRecord {
            label: label.to_string(),
            value: value.to_string(),
        }
    }

    // ==================== filter_translations Tests ====================

    #[test]
    fn test_filter_drops_unknown_labels() {
        let records = vec![record("General_Ok", "OK"), record("Unknown_Key", "X")];

        let translations = filter_translations(&records, AllowList::get());

        assert_eq!(translations.len(), 1);
        assert_eq!(translations["General_Ok"], "OK");
        assert!(!translations.contains_key("Unknown_Key"));
    }

    #[test]
    fn test_filter_keeps_response_order() {
        let records = vec![
            record("General_Save", "Gem"),
            record("General_Ok", "OK"),
            record("CoreHome_PeriodDay", "Dag"),
        ];

        let translations = filter_translations(&records, AllowList::get());
        let keys: Vec<_> = translations.keys().map(String::as_str).collect();

        assert_eq!(keys, vec!["General_Save", "General_Ok", "CoreHome_PeriodDay"]);
    }

    #[test]
    fn test_filter_last_duplicate_wins() {
        let records = vec![
            record("General_Ok", "first"),
            record("General_Save", "Gem"),
            record("General_Ok", "second"),
        ];

        let translations = filter_translations(&records, AllowList::get());

        assert_eq!(translations.len(), 2);
        assert_eq!(translations["General_Ok"], "second");
        // position of the first occurrence is kept
        assert_eq!(translations.keys().next().map(String::as_str), Some("General_Ok"));
    }

    #[test]
    fn test_filter_empty_input() {
        let translations = filter_translations(&[], AllowList::get());
        assert!(translations.is_empty());
    }

    #[test]
    fn test_filter_with_custom_allow_list() {
        let allow_list = AllowList::from_entries(&[("Only_This", "default")]);
        let records = vec![record("General_Ok", "OK"), record("Only_This", "yes")];

        let translations = filter_translations(&records, &allow_list);

        assert_eq!(translations.len(), 1);
        assert_eq!(translations["Only_This"], "yes");
    }

    // ==================== render Tests ====================

    #[test]
    fn test_render_wraps_json_in_assignment() {
        let records = vec![record("General_Ok", "OK"), record("Unknown_Key", "X")];
        let payload = render(&filter_translations(&records, AllowList::get()));

        assert_eq!(payload, r#"Piwik.Locale.Translation.translations = {"General_Ok":"OK"};"#);
        assert!(payload.contains(r#""General_Ok":"OK""#));
        assert!(!payload.contains("Unknown_Key"));
    }

    #[test]
    fn test_render_empty_mapping() {
        assert_eq!(render(&Map::new()), "Piwik.Locale.Translation.translations = {};");
    }

    #[test]
    fn test_render_escapes_quotes_and_keeps_unicode() {
        let records = vec![
            record("SitesManager_ExceptionInvalidUrl", "L'url \"%s\" n'est pas valide."),
            record("Mobile_NetworkNotReachable", "Netværk ikke tilgængeligt"),
        ];
        let payload = render(&filter_translations(&records, AllowList::get()));

        assert!(payload.contains(r#"L'url \"%s\" n'est pas valide."#));
        assert!(payload.contains("Netværk ikke tilgængeligt"));
    }

    #[test]
    fn test_render_escapes_javascript_line_terminators() {
        let records = vec![
            record("General_Ok", "a\u{2028}b"),
            record("General_Save", "c\u{2029}d"),
        ];
        let payload = render(&filter_translations(&records, AllowList::get()));

        assert!(!payload.contains('\u{2028}'));
        assert!(!payload.contains('\u{2029}'));
        assert!(payload.contains(r#""General_Ok":"a\u2028b""#));
        assert!(payload.contains(r#""General_Save":"c\u2029d""#));

        // Still the same strings once parsed back as JSON
        let body = payload
            .strip_prefix(PAYLOAD_PREFIX)
            .and_then(|rest| rest.strip_suffix(PAYLOAD_SUFFIX))
            .expect("payload should be wrapped");
        let parsed: Value = serde_json::from_str(body).expect("body should be JSON");
        assert_eq!(parsed["General_Ok"], "a\u{2028}b");
    }

    #[test]
    fn test_render_body_is_valid_json() {
        let records = vec![record("General_Ok", "OK"), record("General_Save", "Gem")];
        let payload = render(&filter_translations(&records, AllowList::get()));

        let body = payload
            .strip_prefix(PAYLOAD_PREFIX)
            .and_then(|rest| rest.strip_suffix(PAYLOAD_SUFFIX))
            .expect("payload should be wrapped");
        let parsed: Value = serde_json::from_str(body).expect("body should be JSON");

        assert_eq!(parsed["General_Save"], "Gem");
    }

    // ==================== output_path Tests ====================

    #[test]
    fn test_output_path() {
        assert_eq!(
            output_path(Path::new("Resources/i18n"), "de"),
            PathBuf::from("Resources/i18n/de.js")
        );
        assert_eq!(
            output_path(Path::new("Resources/i18n"), "pt-br"),
            PathBuf::from("Resources/i18n/pt-br.js")
        );
    }

    // ==================== Properties ====================

    fn label_strategy() -> impl Strategy<Value = String> {
        prop_oneof![
            prop::sample::select(vec![
                "General_Ok",
                "General_Save",
                "Mobile_Refresh",
                "CoreHome_PeriodDay",
            ])
            .prop_map(str::to_string),
            "[A-Z][a-z]{1,8}_[A-Za-z]{1,12}",
        ]
    }

    fn records_strategy() -> impl Strategy<Value = Vec<TranslationRecord>> {
        prop::collection::vec(
            (label_strategy(), ".{0,20}").prop_map(|(label, value)| TranslationRecord { label, value }),
            0..40,
        )
    }

    proptest! {
        #[test]
        fn prop_output_only_contains_allowed_labels(records in records_strategy()) {
            let allow_list = AllowList::get();
            let translations = filter_translations(&records, allow_list);

            for key in translations.keys() {
                prop_assert!(allow_list.contains(key));
            }
        }

        #[test]
        fn prop_every_allowed_label_is_kept_with_last_value(records in records_strategy()) {
            let allow_list = AllowList::get();
            let translations = filter_translations(&records, allow_list);

            for record in records.iter().filter(|r| allow_list.contains(&r.label)) {
                let last = records
                    .iter()
                    .rev()
                    .find(|r| r.label == record.label)
                    .map(|r| r.value.as_str());
                prop_assert_eq!(translations.get(&record.label).and_then(Value::as_str), last);
            }
        }
    }
}
