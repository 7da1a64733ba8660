use dioxus::prelude::*;

use crate::components::OrderDialog;
use crate::core::browser;
use crate::core::checkout::{self, CheckoutAction};
use crate::core::plans::{self, Plan, PlanId};
use crate::core::pricing::{self, BillingCycle, PriceQuote};
use crate::i18n;
use crate::t;

const LANDING_CSS: Asset = asset!("/assets/styling/landing.css");

const FEATURES: [(&str, &str); 6] = [
    ("feature-realtime-title", "feature-realtime-description"),
    ("feature-alerts-title", "feature-alerts-description"),
    ("feature-export-title", "feature-export-description"),
    ("feature-dashboard-title", "feature-dashboard-description"),
    ("feature-reliable-title", "feature-reliable-description"),
    ("feature-support-title", "feature-support-description"),
];

const BENEFITS: [(&str, &str); 3] = [
    ("benefits-compliance", "benefits-compliance-desc"),
    ("benefits-safety", "benefits-safety-desc"),
    ("benefits-efficiency", "benefits-efficiency-desc"),
];

#[cfg(debug_assertions)]
fn log_home_render(lang: &str) {
    // Lightweight render trace for diagnosing i18n refresh issues.
    println!("[i18n] Home render (lang_marker={lang})");
}

#[component]
pub fn Home() -> Element {
    // Subscribe to the global language code (if provided) so we re-render on change.
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = lang_code.as_ref().map(|s| s()).unwrap_or_default();

    #[cfg(debug_assertions)]
    {
        log_home_render(&_lang_marker);
    }

    let mut billing = use_signal(|| BillingCycle::Monthly);
    let mut selected = use_signal(|| None::<PlanId>);
    let mut submitted = use_signal(|| false);

    let order_click = move |plan_id: PlanId| match checkout::action(plan_id, billing()) {
        CheckoutAction::Navigate(url) => browser::navigate(url),
        CheckoutAction::OpenOrderForm => selected.set(Some(plan_id)),
    };

    rsx! {
        document::Link { rel: "stylesheet", href: LANDING_CSS }
        div { style: "display:none", "{_lang_marker}" }

        // Hero
        section { class: "hero",
            div { class: "hero__inner",
                h1 { {t!("hero-title")} }
                p { class: "hero__subtitle", {t!("hero-subtitle")} }
                div { class: "hero__cta-row",
                    button {
                        class: "btn btn--primary btn--lg",
                        onclick: move |_| browser::scroll_to_element("pricing"),
                        {t!("hero-cta-primary")}
                    }
                    button {
                        class: "btn btn--lg",
                        onclick: move |_| browser::scroll_to_element("features"),
                        {t!("hero-cta-secondary")}
                    }
                }
            }
        }

        // Feature grid
        section { id: "features", class: "features",
            div { class: "section-heading",
                h2 { {t!("features-title")} }
                p { {t!("features-subtitle")} }
            }
            div { class: "features__grid",
                for (title_key, desc_key) in FEATURES {
                    div { key: "{title_key}", class: "feature-card",
                        h3 { {i18n::translate(title_key)} }
                        p { {i18n::translate(desc_key)} }
                    }
                }
            }
        }

        // Benefits
        section { class: "benefits",
            h2 { {t!("benefits-title")} }
            div { class: "benefits__list",
                for (title_key, desc_key) in BENEFITS {
                    div { key: "{title_key}", class: "benefit",
                        span { class: "benefit__check", aria_hidden: "true", "✓" }
                        div {
                            h3 { {i18n::translate(title_key)} }
                            p { {i18n::translate(desc_key)} }
                        }
                    }
                }
            }
        }

        // Pricing
        section { id: "pricing", class: "pricing",
            div { class: "section-heading",
                h2 { {t!("portal-title")} }
                p { {t!("portal-subtitle")} }
            }

            div { class: "billing-toggle", role: "group",
                button {
                    class: if billing() == BillingCycle::Monthly { "toggle toggle--active" } else { "toggle" },
                    onclick: move |_| billing.set(BillingCycle::Monthly),
                    {t!("portal-billing-monthly")}
                }
                button {
                    class: if billing() == BillingCycle::Yearly { "toggle toggle--active" } else { "toggle" },
                    onclick: move |_| billing.set(BillingCycle::Yearly),
                    {t!("portal-billing-yearly")}
                }
            }
            if billing() == BillingCycle::Yearly {
                p { class: "billing-toggle__note", {t!("portal-billing-yearly-discount")} }
            }

            div { class: "plan-grid",
                for plan in plans::catalog() {
                    {plan_card(&plan, billing(), order_click)}
                }
            }
        }

        // Closing CTA band
        section { class: "cta-band",
            h2 { {t!("cta-title")} }
            p { {t!("cta-subtitle")} }
            button {
                class: "btn btn--secondary btn--lg",
                onclick: move |_| browser::scroll_to_element("pricing"),
                {t!("cta-button")}
            }
        }

        if let Some(plan_id) = selected() {
            OrderDialog {
                plan: plans::plan(plan_id),
                cycle: billing(),
                on_close: move |_| selected.set(None),
                on_submitted: move |_| {
                    selected.set(None);
                    submitted.set(true);
                },
            }
        }

        if submitted() {
            div { class: "toast", role: "status",
                div {
                    strong { {t!("portal-success")} }
                    p { {t!("portal-success-message")} }
                }
                button {
                    class: "toast__dismiss",
                    onclick: move |_| submitted.set(false),
                    "×"
                }
            }
        }
    }
}

fn plan_card(
    plan: &Plan,
    cycle: BillingCycle,
    order_click: impl FnMut(PlanId) + Copy + 'static,
) -> Element {
    let id = plan.id;
    let mut order_click = order_click;

    let price_block = match pricing::quote(plan.monthly_price, plan.yearly_discount, cycle) {
        PriceQuote::ContactSales => rsx! {
            div { class: "plan-card__contact", {t!("portal-contact-sales")} }
        },
        PriceQuote::Monthly { monthly } => {
            let amount = pricing::format_eur(monthly);
            rsx! {
                div { class: "plan-card__price",
                    span { class: "plan-card__amount", "€{amount}" }
                    span { class: "plan-card__per", "/ " {t!("portal-month")} }
                }
                p { class: "plan-card__note", {t!("portal-billing-commitment")} }
            }
        }
        PriceQuote::Yearly {
            monthly_equivalent,
            base_monthly,
            annual_total,
        } => {
            let amount = pricing::format_eur(monthly_equivalent);
            let base = pricing::format_eur(base_monthly);
            let annual = pricing::format_eur(annual_total);
            rsx! {
                div { class: "plan-card__price",
                    s { class: "plan-card__strike", "€{base}" }
                    span { class: "plan-card__amount", "€{amount}" }
                    span { class: "plan-card__per", "/ " {t!("portal-month")} }
                }
                p { class: "plan-card__note",
                    {t!("portal-billing-billed-annually")}
                    ": €{annual}"
                }
            }
        }
    };

    rsx! {
        div {
            key: "{id.slug()}",
            class: if plan.badge.is_some() { "plan-card plan-card--featured" } else { "plan-card" },
            if let Some(badge) = plan.badge.as_ref() {
                span { class: "plan-card__badge", "{badge}" }
            }
            h3 { class: "plan-card__name", "{plan.name}" }
            p { class: "plan-card__desc", "{plan.description}" }
            {price_block}
            ul { class: "plan-card__features",
                for feature in plan.features.iter() {
                    li { key: "{feature}",
                        span { class: "plan-card__check", aria_hidden: "true", "✓" }
                        "{feature}"
                    }
                }
            }
            button {
                class: if plan.badge.is_some() { "btn btn--primary btn--block" } else { "btn btn--block" },
                onclick: move |_| order_click(id),
                if id == PlanId::Enterprise {
                    {t!("portal-contact-sales")}
                } else {
                    {t!("portal-order")}
                }
            }
        }
    }
}
