//! Shared UI crate for the ClimaFarma landing site. Views, components,
//! localization and the presentational domain logic all live here; the
//! platform crate only mounts the router.

pub mod core;
pub mod i18n;
pub mod views;

pub mod components {
    // Sticky localized site header with the language picker (components/app_header.rs)
    pub mod app_header;
    pub use app_header::AppHeader;

    pub mod footer;
    pub use footer::Footer;

    // Lead-capture dialog for plans without a self-serve checkout
    pub mod order_dialog;
    pub use order_dialog::OrderDialog;
}
