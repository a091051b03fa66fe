//! Shared UI crate for Maydan. Cross-platform components, views, and core
//! plumbing (CMS client, content types, i18n, toast store) live here.

pub mod core;
pub mod i18n;
pub mod views;

pub mod components {
    // Hero banner + media-gated slider (components/hero/)
    pub mod hero;
    pub use hero::HeroBanner;
    pub use hero::HeroSlider;

    // Site chrome
    pub mod site_footer;
    pub mod site_header;
    pub use site_footer::SiteFooter;
    pub use site_header::register_nav;
    pub use site_header::NavBuilder;
    pub use site_header::SiteHeader;

    // Locale / theme controls (components/switchers.rs)
    pub mod switchers;
    pub use switchers::LanguageSwitcher;
    pub use switchers::ThemeSwitcher;

    // Paginated list controls
    pub mod pagination;
    pub use pagination::PaginationControls;

    // Service catalogue backing the header dropdown and /services/:slug
    pub mod services;

    // Toast notifications (state lives in core/toast.rs)
    pub mod toast_host;
    pub use toast_host::use_toasts;
    pub use toast_host::ToastProvider;
}
