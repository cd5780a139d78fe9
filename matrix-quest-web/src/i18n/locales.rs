use serde_json::Value;

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct LocaleMeta {
    pub code: &'static str,
    pub name: &'static str,
}

pub const LOCALE_META: &[LocaleMeta] = &[
    LocaleMeta {
        code: "en",
        name: "English",
    },
    LocaleMeta {
        code: "ru",
        name: "Русский",
    },
];

const LOCALE_TABLE: &[(&str, &str)] = &[
    ("en", include_str!("../../i18n/en.json")),
    ("ru", include_str!("../../i18n/ru.json")),
];

/// Supported locales with their native names.
#[must_use]
pub const fn locales() -> &'static [LocaleMeta] {
    LOCALE_META
}

#[must_use]
pub fn is_supported(lang: &str) -> bool {
    LOCALE_META.iter().any(|meta| meta.code == lang)
}

/// Parsed bundle for `lang`, or English for unknown codes.
pub fn load_translations(lang: &str) -> Option<Value> {
    let bundle = LOCALE_TABLE
        .iter()
        .find_map(|(code, data)| (*code == lang).then_some(*data))
        .unwrap_or(LOCALE_TABLE[0].1);

    serde_json::from_str(bundle).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_bundle_parses_and_unknown_falls_back() {
        for meta in locales() {
            let value = load_translations(meta.code).expect("bundle parses");
            assert!(value.is_object(), "{} bundle is an object", meta.code);
        }
        assert_eq!(load_translations("xx"), load_translations("en"));
        assert!(is_supported("ru"));
        assert!(!is_supported("de"));
    }

    fn leaf_keys(value: &Value, prefix: &str, out: &mut Vec<String>) {
        if let Value::Object(map) = value {
            let plural = map.contains_key("one") && map.contains_key("other");
            if plural {
                out.push(prefix.to_string());
                return;
            }
            for (key, child) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                leaf_keys(child, &path, out);
            }
        } else {
            out.push(prefix.to_string());
        }
    }

    #[test]
    fn russian_bundle_covers_every_english_key() {
        let mut en = Vec::new();
        let mut ru = Vec::new();
        leaf_keys(&load_translations("en").unwrap(), "", &mut en);
        leaf_keys(&load_translations("ru").unwrap(), "", &mut ru);
        en.sort();
        ru.sort();
        assert_eq!(en, ru);
    }
}
