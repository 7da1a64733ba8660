//! Checkout dispatch: plan × billing cycle either resolves to an external
//! checkout URL or falls back to the lead-capture form.

use super::plans::PlanId;
use super::pricing::BillingCycle;

// Hosted checkout pages, one per self-serve plan × cycle combination.
// The only contract with the provider is "navigate to exactly this URL".
const STARTER_MONTHLY_URL: &str = "https://buy.stripe.com/9AQ3cv0aK1xM4ha288";
const STARTER_YEARLY_URL: &str = "https://buy.stripe.com/5kAaEX6z82BQgZW145";
const PROFESSIONAL_MONTHLY_URL: &str = "https://buy.stripe.com/eVa8wPczw8Wa9Bu3cd";
const PROFESSIONAL_YEARLY_URL: &str = "https://buy.stripe.com/14k8wP5v4cco9Bu9AC";

/// Outcome of pressing a plan's order button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutAction {
    /// Navigate the browser to the hosted checkout page.
    Navigate(&'static str),
    /// No self-serve checkout for this combination; open the lead form.
    OpenOrderForm,
}

pub fn checkout_url(plan: PlanId, cycle: BillingCycle) -> Option<&'static str> {
    match (plan, cycle) {
        (PlanId::Starter, BillingCycle::Monthly) => Some(STARTER_MONTHLY_URL),
        (PlanId::Starter, BillingCycle::Yearly) => Some(STARTER_YEARLY_URL),
        (PlanId::Professional, BillingCycle::Monthly) => Some(PROFESSIONAL_MONTHLY_URL),
        (PlanId::Professional, BillingCycle::Yearly) => Some(PROFESSIONAL_YEARLY_URL),
        (PlanId::Enterprise, _) => None,
    }
}

pub fn action(plan: PlanId, cycle: BillingCycle) -> CheckoutAction {
    match checkout_url(plan, cycle) {
        Some(url) => CheckoutAction::Navigate(url),
        None => CheckoutAction::OpenOrderForm,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn self_serve_plans_navigate_for_both_cycles() {
        for plan in [PlanId::Starter, PlanId::Professional] {
            for cycle in [BillingCycle::Monthly, BillingCycle::Yearly] {
                assert!(matches!(action(plan, cycle), CheckoutAction::Navigate(_)));
            }
        }
    }

    #[test]
    fn each_self_serve_combination_has_its_own_url() {
        let urls = [
            checkout_url(PlanId::Starter, BillingCycle::Monthly).unwrap(),
            checkout_url(PlanId::Starter, BillingCycle::Yearly).unwrap(),
            checkout_url(PlanId::Professional, BillingCycle::Monthly).unwrap(),
            checkout_url(PlanId::Professional, BillingCycle::Yearly).unwrap(),
        ];
        for (i, a) in urls.iter().enumerate() {
            for b in &urls[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn enterprise_always_opens_the_lead_form() {
        assert_eq!(
            action(PlanId::Enterprise, BillingCycle::Monthly),
            CheckoutAction::OpenOrderForm
        );
        assert_eq!(
            action(PlanId::Enterprise, BillingCycle::Yearly),
            CheckoutAction::OpenOrderForm
        );
    }
}
