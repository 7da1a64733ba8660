//! The three purchasable tiers and their static pricing constants.

use crate::i18n;

pub const STARTER_MONTHLY_EUR: f64 = 49.0;
pub const PROFESSIONAL_MONTHLY_EUR: f64 = 89.0;

/// Yearly billing charges this fraction of the nominal monthly price
/// (0.85 ⇒ 15% off). Applied uniformly, including in the order dialog
/// summary.
pub const YEARLY_DISCOUNT: f64 = 0.85;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlanId {
    Starter,
    Professional,
    Enterprise,
}

impl PlanId {
    pub const ALL: [PlanId; 3] = [PlanId::Starter, PlanId::Professional, PlanId::Enterprise];

    pub fn slug(self) -> &'static str {
        match self {
            PlanId::Starter => "starter",
            PlanId::Professional => "professional",
            PlanId::Enterprise => "enterprise",
        }
    }
}

/// A purchasable tier as rendered on a pricing card. Built per render from
/// the translation tables and the constants above, never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct Plan {
    pub id: PlanId,
    pub name: String,
    pub description: String,
    /// 0 signifies "contact sales, no self-serve price".
    pub monthly_price: f64,
    pub yearly_discount: f64,
    pub features: Vec<String>,
    pub badge: Option<String>,
}

/// Localized plan catalog in display order.
pub fn catalog() -> Vec<Plan> {
    PlanId::ALL.iter().copied().map(plan).collect()
}

pub fn plan(id: PlanId) -> Plan {
    let feature_keys: &[&str] = match id {
        PlanId::Starter => &[
            "portal-starter-gateway",
            "portal-starter-sensors",
            "portal-starter-support",
            "portal-starter-warranty",
        ],
        PlanId::Professional => &[
            "portal-professional-gateway",
            "portal-professional-sensors",
            "portal-professional-support",
            "portal-professional-warranty",
        ],
        PlanId::Enterprise => &[
            "portal-enterprise-gateway",
            "portal-enterprise-sensors",
            "portal-enterprise-support",
            "portal-enterprise-warranty",
            "portal-enterprise-custom",
        ],
    };

    Plan {
        id,
        name: i18n::translate(&format!("portal-{}", id.slug())),
        description: i18n::translate(&format!("portal-{}-desc", id.slug())),
        monthly_price: match id {
            PlanId::Starter => STARTER_MONTHLY_EUR,
            PlanId::Professional => PROFESSIONAL_MONTHLY_EUR,
            PlanId::Enterprise => 0.0,
        },
        yearly_discount: YEARLY_DISCOUNT,
        features: feature_keys.iter().map(|k| i18n::translate(k)).collect(),
        badge: match id {
            PlanId::Professional => Some(i18n::translate("portal-professional-badge")),
            _ => None,
        },
    }
}
