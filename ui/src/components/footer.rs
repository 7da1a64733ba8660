use dioxus::prelude::*;

use crate::t;

const FOOTER_CSS: Asset = asset!("/assets/styling/footer.css");

fn current_year() -> u32 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::new_0().get_full_year()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        2026
    }
}

#[component]
pub fn Footer() -> Element {
    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = lang_code_ctx.as_ref().map(|c| c()).unwrap_or_default();

    let year = current_year();

    rsx! {
        document::Link { rel: "stylesheet", href: FOOTER_CSS }

        footer { class: "footer",
            div { style: "display:none", "{_lang_marker}" }
            div { class: "footer__inner",
                div { class: "footer__columns",
                    div { class: "footer__brand",
                        div { class: "footer__brand-row",
                            span { class: "footer__brand-mark", "CF" }
                            span { class: "footer__brand-name", "ClimaFarma" }
                        }
                        p { class: "footer__blurb", {t!("hero-subtitle")} }
                    }

                    div { class: "footer__column",
                        h3 { {t!("footer-company")} }
                        ul {
                            li { a { href: "#", {t!("footer-about")} } }
                            li { a { href: "#", {t!("footer-careers")} } }
                            li { a { href: "#", {t!("footer-contact")} } }
                        }
                    }

                    div { class: "footer__column",
                        h3 { {t!("footer-support")} }
                        ul {
                            li { a { href: "#", {t!("footer-documentation")} } }
                            li { a { href: "#", {t!("footer-help")} } }
                        }
                    }

                    div { class: "footer__column",
                        h3 { {t!("footer-legal")} }
                        ul {
                            li { a { href: "#", {t!("footer-privacy")} } }
                            li { a { href: "#", {t!("footer-terms")} } }
                        }
                    }
                }

                div { class: "footer__rights",
                    p { "© {year} ClimaFarma. " {t!("footer-rights")} }
                }
            }
        }
    }
}
