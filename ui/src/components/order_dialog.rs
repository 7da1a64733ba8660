use dioxus::prelude::*;

use crate::core::order::OrderForm;
use crate::core::plans::Plan;
use crate::core::pricing::{self, BillingCycle, PriceQuote};
use crate::t;

const DIALOG_CSS: Asset = asset!("/assets/styling/dialog.css");

/// Lead-capture dialog shown when a plan has no self-serve checkout.
///
/// Five required fields; submission is intercepted locally: a complete form
/// clears itself and raises `on_submitted` (the parent closes the dialog and
/// shows the acknowledgement), an incomplete one stays open. Cancel clears
/// without acknowledgement. Nothing is sent anywhere.
#[component]
pub fn OrderDialog(
    plan: Plan,
    cycle: BillingCycle,
    on_close: EventHandler<()>,
    on_submitted: EventHandler<()>,
) -> Element {
    let mut form = use_signal(OrderForm::default);

    // Summary line under the title; uses the plan's own discount factor.
    let summary = match pricing::quote(plan.monthly_price, plan.yearly_discount, cycle) {
        PriceQuote::ContactSales => {
            format!("{} — {}", plan.name, t!("portal-contact-sales"))
        }
        PriceQuote::Monthly { monthly } => format!(
            "{} — €{}/{}",
            plan.name,
            pricing::format_eur(monthly),
            t!("portal-month")
        ),
        PriceQuote::Yearly {
            monthly_equivalent, ..
        } => format!(
            "{} — €{}/{} · {}",
            plan.name,
            pricing::format_eur(monthly_equivalent),
            t!("portal-month"),
            t!("portal-billing-billed-annually")
        ),
    };

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if form().is_complete() {
            form.write().clear();
            on_submitted.call(());
        }
    };

    let on_cancel = move |_| {
        form.write().clear();
        on_close.call(());
    };

    rsx! {
        document::Link { rel: "stylesheet", href: DIALOG_CSS }

        div { class: "dialog-backdrop",
            div { class: "dialog", role: "dialog", aria_modal: "true",
                h2 { class: "dialog__title", {t!("portal-form-title")} }
                p { class: "dialog__summary", "{summary}" }

                form { onsubmit: on_submit,
                    div { class: "dialog__field",
                        label { r#for: "order-pharmacy", {t!("portal-form-pharmacy")} }
                        input {
                            id: "order-pharmacy",
                            required: true,
                            value: "{form().pharmacy_name}",
                            oninput: move |evt| form.write().pharmacy_name = evt.value(),
                        }
                    }
                    div { class: "dialog__field",
                        label { r#for: "order-contact", {t!("portal-form-contact")} }
                        input {
                            id: "order-contact",
                            required: true,
                            value: "{form().contact_person}",
                            oninput: move |evt| form.write().contact_person = evt.value(),
                        }
                    }
                    div { class: "dialog__field",
                        label { r#for: "order-email", {t!("portal-form-email")} }
                        input {
                            id: "order-email",
                            r#type: "email",
                            required: true,
                            value: "{form().email}",
                            oninput: move |evt| form.write().email = evt.value(),
                        }
                    }
                    div { class: "dialog__field",
                        label { r#for: "order-phone", {t!("portal-form-phone")} }
                        input {
                            id: "order-phone",
                            r#type: "tel",
                            required: true,
                            value: "{form().phone}",
                            oninput: move |evt| form.write().phone = evt.value(),
                        }
                    }
                    div { class: "dialog__field",
                        label { r#for: "order-address", {t!("portal-form-address")} }
                        textarea {
                            id: "order-address",
                            rows: 3,
                            required: true,
                            value: "{form().address}",
                            oninput: move |evt| form.write().address = evt.value(),
                        }
                    }

                    div { class: "dialog__footer",
                        button {
                            r#type: "button",
                            class: "btn",
                            onclick: on_cancel,
                            {t!("portal-form-cancel")}
                        }
                        button {
                            r#type: "submit",
                            class: "btn btn--primary",
                            {t!("portal-form-submit")}
                        }
                    }
                }
            }
        }
    }
}
