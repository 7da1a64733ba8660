use dioxus::prelude::*;

use crate::core::browser;
use crate::i18n::{self, Lang};
use crate::t;

const HEADER_CSS: Asset = asset!("/assets/styling/header.css");

/// Sticky site header: brand, section navigation (smooth scroll) and the
/// language picker.
///
/// The picker switches the global loader via `i18n::set_language` (which
/// persists the choice) and then writes the new code into the global
/// `Signal<String>` language context, if the platform crate provided one.
/// Every subscriber re-renders and pulls fresh localized strings.
#[component]
pub fn AppHeader() -> Element {
    i18n::init();

    let mut current_lang = use_signal(|| i18n::active_language().code().to_string());
    // Global language code signal, provided by the platform crate.
    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();
    // Establish a reactive dependency on the global language code (if provided)
    let _lang_marker = lang_code_ctx.as_ref().map(|c| c()).unwrap_or_default();

    #[cfg(debug_assertions)]
    {
        if let Some(code) = lang_code_ctx.as_ref() {
            println!("[i18n] AppHeader render lang={}", code());
        } else {
            println!("[i18n] AppHeader render lang=<none>");
        }
    }

    let on_change = move |evt: dioxus::events::FormEvent| {
        let val = evt.value();
        if let Some(lang) = Lang::from_code(&val) {
            i18n::set_language(lang);
            current_lang.set(val.clone());
            if let Some(mut code) = lang_code_ctx {
                code.set(val);
            }
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: HEADER_CSS }

        header {
            id: "site-header",
            class: "header",
            // Hidden marker ensures the header re-renders when the global
            // language signal changes.
            div { style: "display:none", "{_lang_marker}" }
            div { class: "header__inner",
                button {
                    class: "header__brand",
                    onclick: move |_| browser::scroll_to_top(),
                    span { class: "header__brand-mark", "CF" }
                    span { class: "header__brand-name", "ClimaFarma" }
                }

                nav { class: "header__nav",
                    button {
                        class: "header__link",
                        onclick: move |_| browser::scroll_to_top(),
                        {t!("nav-home")}
                    }
                    button {
                        class: "header__link",
                        onclick: move |_| browser::scroll_to_element("features"),
                        {t!("nav-features")}
                    }
                    button {
                        class: "header__link",
                        onclick: move |_| browser::scroll_to_element("pricing"),
                        {t!("nav-pricing")}
                    }
                }

                div { class: "header__locale",
                    label {
                        class: "visually-hidden",
                        r#for: "locale-select",
                        {t!("nav-language-label")}
                    }
                    select {
                        id: "locale-select",
                        value: "{current_lang()}",
                        oninput: on_change,
                        { Lang::ALL.iter().map(|lang| {
                            let code = lang.code();
                            rsx! {
                                option { key: "{code}", value: "{code}", {lang.native_name()} }
                            }
                        })}
                    }
                }
            }
        }
    }
}
