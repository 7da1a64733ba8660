//! Price computation for the pricing section and the order dialog.
//!
//! Display formatting only: amounts are rounded half-up at two decimals for
//! presentation, no money moves through this code.

pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Payment frequency selected in the pricing section. Transient UI state,
/// never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BillingCycle {
    Monthly,
    Yearly,
}

/// What the price block of a plan card shows for a given billing cycle.
#[derive(Debug, Clone, PartialEq)]
pub enum PriceQuote {
    /// No self-serve price (base monthly price of 0).
    ContactSales,
    Monthly {
        monthly: f64,
    },
    Yearly {
        /// Discounted per-month figure (`base × factor`).
        monthly_equivalent: f64,
        /// Undiscounted price, shown struck through.
        base_monthly: f64,
        /// Total charged per year (`base × 12 × factor`).
        annual_total: f64,
    },
}

/// Quote a plan's displayed price. `yearly_discount` is a fraction in (0, 1]
/// and only applies when the base price is positive.
pub fn quote(base_monthly: f64, yearly_discount: f64, cycle: BillingCycle) -> PriceQuote {
    if base_monthly <= 0.0 {
        return PriceQuote::ContactSales;
    }
    match cycle {
        BillingCycle::Monthly => PriceQuote::Monthly {
            monthly: base_monthly,
        },
        BillingCycle::Yearly => PriceQuote::Yearly {
            monthly_equivalent: round2(base_monthly * yearly_discount),
            base_monthly,
            annual_total: round2(base_monthly * MONTHS_PER_YEAR * yearly_discount),
        },
    }
}

/// Round half-up at two decimal places.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Format an amount for display: whole amounts without decimals ("49"),
/// fractional amounts with exactly two ("41.65").
pub fn format_eur(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("{amount:.0}")
    } else {
        format!("{amount:.2}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn monthly_cycle_uses_base_price_unchanged() {
        assert_eq!(
            quote(49.0, 0.85, BillingCycle::Monthly),
            PriceQuote::Monthly { monthly: 49.0 }
        );
        assert_eq!(format_eur(49.0), "49");
    }

    #[test]
    fn yearly_cycle_applies_the_discount_factor() {
        let PriceQuote::Yearly {
            monthly_equivalent,
            base_monthly,
            annual_total,
        } = quote(49.0, 0.85, BillingCycle::Yearly)
        else {
            panic!("expected a yearly quote");
        };
        assert_eq!(format_eur(monthly_equivalent), "41.65");
        assert_eq!(format_eur(base_monthly), "49");
        assert_eq!(format_eur(annual_total), "499.80");
    }

    #[test]
    fn professional_tier_yearly_figures() {
        let PriceQuote::Yearly {
            monthly_equivalent,
            annual_total,
            ..
        } = quote(89.0, 0.85, BillingCycle::Yearly)
        else {
            panic!("expected a yearly quote");
        };
        assert_eq!(format_eur(monthly_equivalent), "75.65");
        assert_eq!(format_eur(annual_total), "907.80");
    }

    #[test]
    fn zero_price_means_contact_sales_under_both_cycles() {
        assert_eq!(
            quote(0.0, 0.85, BillingCycle::Monthly),
            PriceQuote::ContactSales
        );
        assert_eq!(
            quote(0.0, 0.85, BillingCycle::Yearly),
            PriceQuote::ContactSales
        );
    }

    #[test]
    fn whole_discounted_amounts_drop_the_decimals() {
        let PriceQuote::Yearly {
            monthly_equivalent, ..
        } = quote(80.0, 0.85, BillingCycle::Yearly)
        else {
            panic!("expected a yearly quote");
        };
        assert_eq!(format_eur(monthly_equivalent), "68");
    }
}
