use std::collections::{BTreeSet, HashSet};

/// Translation completeness test.
/// The presentation layer assumes every key exists in every locale, so the
/// three FTL tables must define *identical* key sets (checked both ways, not
/// just "locale covers fallback").
///
/// This is a lightweight parser:
/// - Ignores comment lines starting with `#`
/// - Treats any line of the form `key =` or `key=` as a message definition
/// - Skips blank / attribute / continuation lines
///
/// If you add a new locale:
/// 1. Create `ui/i18n/<locale>/climafarma-ui.ftl`
/// 2. Copy all keys from `es/climafarma-ui.ftl`
/// 3. Run `cargo test -p climafarma-ui` to confirm completeness.
#[test]
fn all_locales_define_the_same_key_set() {
    // Embed the FTL sources at compile time.
    // (If you add a new locale, register it here.)
    const ES: &str = include_str!("../i18n/es/climafarma-ui.ftl");
    const EN: &str = include_str!("../i18n/en/climafarma-ui.ftl");
    const CA: &str = include_str!("../i18n/ca/climafarma-ui.ftl");

    let locales: &[(&str, &str)] = &[("es", ES), ("en", EN), ("ca", CA)];

    let reference_keys = extract_keys(ES);
    assert!(!reference_keys.is_empty(), "Fallback (es) contains no keys.");

    let mut failures = Vec::new();

    for (locale, src) in locales {
        assert_no_dup_keys(src, locale);

        let keys = extract_keys(src);

        let missing: BTreeSet<&String> = reference_keys.difference(&keys).collect();
        let extra: BTreeSet<&String> = keys.difference(&reference_keys).collect();

        if !missing.is_empty() {
            failures.push(format!(
                "Locale {locale} is missing {} key(s):\n  {}",
                missing.len(),
                missing
                    .into_iter()
                    .cloned()
                    .collect::<Vec<_>>()
                    .join("\n  ")
            ));
        }
        if !extra.is_empty() {
            failures.push(format!(
                "Locale {locale} defines {} key(s) absent from es:\n  {}",
                extra.len(),
                extra.into_iter().cloned().collect::<Vec<_>>().join("\n  ")
            ));
        }
    }

    if !failures.is_empty() {
        panic!(
            "Translation completeness check failed:\n\n{}\n\nHint: copy the missing keys from es, then translate.",
            failures.join("\n\n")
        );
    }
}

/// Extract message keys from a Fluent file (simple heuristic).
fn extract_keys(src: &str) -> HashSet<String> {
    let mut keys = HashSet::new();

    for line in src.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        // Skip attribute or continuation lines (start with '.').
        if line.starts_with('.') {
            continue;
        }
        // Basic pattern: key [space]* '='
        if let Some(eq_pos) = line.find('=') {
            let (left, _right) = line.split_at(eq_pos);
            let key = left.trim();
            if !key.is_empty()
                && !key.contains(' ')
                && !key.contains('\t')
                && !key.starts_with('[')
                && !key.starts_with('@')
            {
                keys.insert(key.to_string());
            }
        }
    }

    keys
}

/// Assert no duplicate key definitions in a single FTL file (rudimentary).
fn assert_no_dup_keys(src: &str, locale: &str) {
    let mut seen = HashSet::new();
    let mut dups = BTreeSet::new();

    for line in src.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('.') {
            continue;
        }
        if let Some(eq_pos) = line.find('=') {
            let key = line[..eq_pos].trim();
            if !key.is_empty()
                && !key.contains(' ')
                && !key.contains('\t')
                && !key.starts_with('[')
                && !key.starts_with('@')
                && !seen.insert(key.to_string())
            {
                dups.insert(key.to_string());
            }
        }
    }

    assert!(
        dups.is_empty(),
        "Locale {locale} defines duplicate key(s): {}",
        dups.into_iter().collect::<Vec<_>>().join(", ")
    );
}
