//! Internationalization (i18n) support for `climafarma-ui`.
//!
//! This module wires together:
//! - `i18n-embed` (language selection + asset loading)
//! - `fluent` (message formatting)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `i18n-embed-fl` (`fl!` macro for compile-time checked lookups)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   es/climafarma-ui.ftl   (fallback/reference)
//!   en/climafarma-ui.ftl   (additional locale)
//!   ca/climafarma-ui.ftl   (additional locale)
//! ```
//!
//! Language resolution on startup (see [`resolve_initial_language`]):
//! 1. persisted choice under the `climafarma-language` storage key, when it is
//!    one of the supported codes;
//! 2. first browser/OS locale whose primary subtag matches a supported code;
//! 3. Spanish.
//!
//! Storage or locale lookups that fail degrade silently to the next rule.
//!
//! Public API surface:
//! - `Lang` – the closed set of supported languages.
//! - `init()` – resolve and select the initial language (idempotent).
//! - `set_language(lang)` – switch language at runtime and persist the choice.
//! - `active_language()` – currently selected language.
//! - `translate(key)` – runtime lookup for dynamically keyed strings; returns
//!   the key itself when no table defines it.
//! - `t!` / `fl` – compile-time checked lookup for literal keys.
//! - `LOADER` – global `FluentLanguageLoader` consumed by the macros.
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Once;

use i18n_embed::fluent::FluentLanguageLoader;
use i18n_embed::LanguageLoader as _;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

use crate::core::storage;

pub use i18n_embed_fl::fl; // Re-export for convenience.

/// Ergonomic translation macro for literal keys.
/// Examples:
///     t!("nav-home")
///
/// This expands to `fl!(&*LOADER, ...)` keeping callsites short while
/// ensuring all lookups route through the shared loader. Keys are checked
/// at compile time against the fallback (es) table.
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent "domain" (matches the crate / the fallback FTL filename).
///
/// Fallback file path must be: `i18n/es/{DOMAIN}.ftl`
const DOMAIN: &str = "climafarma-ui";

/// Storage key holding the visitor's persisted language choice.
pub const STORAGE_KEY: &str = "climafarma-language";

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Global language loader used with the `fl!` macro.
pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = "es".parse().expect("valid fallback language identifier");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();
static READY: AtomicBool = AtomicBool::new(false);

/// Supported languages. Fixed closed set, no dynamic extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lang {
    En,
    Es,
    Ca,
}

impl Lang {
    pub const ALL: [Lang; 3] = [Lang::En, Lang::Es, Lang::Ca];

    pub fn code(self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Es => "es",
            Lang::Ca => "ca",
        }
    }

    /// Native display name, for the header language picker.
    pub fn native_name(self) -> &'static str {
        match self {
            Lang::En => "English",
            Lang::Es => "Español",
            Lang::Ca => "Català",
        }
    }

    /// Exact code match. Used for persisted values, which are only ever
    /// written by [`set_language`] and therefore always lowercase codes.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Lang::En),
            "es" => Some(Lang::Es),
            "ca" => Some(Lang::Ca),
            _ => None,
        }
    }

    /// Match a browser/OS locale tag by primary subtag, case-insensitive
    /// ("en-US", "es_ES" and "CA" all resolve).
    pub fn from_locale_tag(tag: &str) -> Option<Self> {
        let primary = tag
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        Self::from_code(&primary)
    }

    fn lang_id(self) -> LanguageIdentifier {
        self.code().parse().expect("valid language identifier")
    }
}

/// Initialize i18n (idempotent): resolve the initial language and select it
/// on the global loader.
pub fn init() {
    INIT.call_once(|| {
        let initial = resolve_initial_language();
        if let Err(err) = i18n_embed::select(&*LOADER, &Localizations, &[initial.lang_id()]) {
            eprintln!(
                "[i18n] failed selecting {} ({err}); continuing with fallback",
                initial.code()
            );
        }
        READY.store(true, Ordering::Release);
    });
}

/// Resolution order: persisted choice, then browser locale, then Spanish.
pub fn resolve_initial_language() -> Lang {
    let persisted = storage::get(STORAGE_KEY);
    resolve_from(persisted.as_deref(), &requested_tags())
}

fn resolve_from(persisted: Option<&str>, requested: &[String]) -> Lang {
    if let Some(lang) = persisted.and_then(Lang::from_code) {
        return lang;
    }
    for tag in requested {
        if let Some(lang) = Lang::from_locale_tag(tag) {
            return lang;
        }
    }
    Lang::Es
}

/// Switch language at runtime and persist the choice for future visits.
/// Persisting the same value twice has no additional effect.
pub fn set_language(lang: Lang) {
    match i18n_embed::select(&*LOADER, &Localizations, &[lang.lang_id()]) {
        Ok(_) => storage::set(STORAGE_KEY, lang.code()),
        Err(err) => eprintln!("[i18n] failed switching to {} ({err})", lang.code()),
    }
}

/// Currently selected language.
pub fn active_language() -> Lang {
    Lang::from_locale_tag(&LOADER.current_language().to_string()).unwrap_or(Lang::Es)
}

/// Runtime lookup for dynamically keyed strings (e.g. plan feature lists).
///
/// A key absent from every table comes back unchanged, acting as a visible
/// missing-translation marker. Calling this before [`init`] is an
/// initialization-order bug and panics.
pub fn translate(key: &str) -> String {
    assert!(
        READY.load(Ordering::Acquire),
        "i18n::translate called before i18n::init"
    );
    if LOADER.has(key) {
        LOADER.get(key)
    } else {
        key.to_string()
    }
}

#[cfg(target_arch = "wasm32")]
fn requested_tags() -> Vec<String> {
    i18n_embed::WebLanguageRequester::requested_languages()
        .iter()
        .map(|l| l.to_string())
        .collect()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_tags() -> Vec<String> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
        .iter()
        .map(|l| l.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn persisted_choice_wins_over_browser_locale() {
        assert_eq!(resolve_from(Some("en"), &tags(&["ca-ES", "es"])), Lang::En);
        assert_eq!(resolve_from(Some("ca"), &tags(&["en-US"])), Lang::Ca);
    }

    #[test]
    fn unsupported_persisted_value_falls_through() {
        assert_eq!(resolve_from(Some("fr"), &tags(&["en-US"])), Lang::En);
        assert_eq!(resolve_from(Some("EN"), &tags(&["de-DE"])), Lang::Es);
    }

    #[test]
    fn browser_locale_matches_on_primary_subtag() {
        assert_eq!(resolve_from(None, &tags(&["en-US"])), Lang::En);
        assert_eq!(resolve_from(None, &tags(&["de-DE", "ca-ES"])), Lang::Ca);
        assert_eq!(resolve_from(None, &tags(&["EN-us"])), Lang::En);
    }

    #[test]
    fn defaults_to_spanish() {
        assert_eq!(resolve_from(None, &tags(&["de-DE", "fr-FR"])), Lang::Es);
        assert_eq!(resolve_from(None, &[]), Lang::Es);
    }

    #[test]
    fn locale_tag_parsing() {
        assert_eq!(Lang::from_locale_tag("es_ES"), Some(Lang::Es));
        assert_eq!(Lang::from_locale_tag("CA"), Some(Lang::Ca));
        assert_eq!(Lang::from_locale_tag("de-DE"), None);
        assert_eq!(Lang::from_locale_tag(""), None);
    }

    #[test]
    fn runtime_lookup_falls_back_to_key() {
        init();
        set_language(Lang::En);
        assert_eq!(translate("nav-home"), "Home");
        assert_eq!(translate("no-such-key"), "no-such-key");
        assert_eq!(active_language(), Lang::En);
    }
}
