//! Presentation-free logic for the landing site: plan catalog, pricing,
//! checkout dispatch, lead-capture form state and browser glue.

pub mod browser;
pub mod checkout;
pub mod order;
pub mod plans;
pub mod pricing;
pub mod storage;
