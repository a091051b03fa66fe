//! The service catalogue behind the header dropdown and `/services/:slug`.
//!
//! Slugs are stable URL segments; labels come from the translation bundle so
//! the dropdown follows the active locale.

use crate::t;

/// One practice area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Service {
    pub slug: &'static str,
}

pub const SERVICES: &[Service] = &[
    Service { slug: "legal-consultation" },
    Service { slug: "foreign-investment" },
    Service { slug: "contracts" },
    Service { slug: "notarization" },
    Service { slug: "insurance" },
    Service { slug: "defense-cases" },
    Service { slug: "banks-financial" },
    Service { slug: "corporate-governance" },
    Service { slug: "companies-liquidation" },
    Service { slug: "internal-regulations" },
    Service { slug: "company-services" },
    Service { slug: "arbitration" },
    Service { slug: "intellectual-property" },
    Service { slug: "corporate-restructuring" },
    Service { slug: "establishing-companies" },
    Service { slug: "commercial-agencies" },
    Service { slug: "vision-2030" },
    Service { slug: "estates" },
];

/// Localized display name for a service slug. `None` for unknown slugs, which
/// the service page treats as not found.
pub fn service_label(slug: &str) -> Option<String> {
    let label = match slug {
        "legal-consultation" => t!("service-legal-consultation"),
        "foreign-investment" => t!("service-foreign-investment"),
        "contracts" => t!("service-contracts"),
        "notarization" => t!("service-notarization"),
        "insurance" => t!("service-insurance"),
        "defense-cases" => t!("service-defense-cases"),
        "banks-financial" => t!("service-banks-financial"),
        "corporate-governance" => t!("service-corporate-governance"),
        "companies-liquidation" => t!("service-companies-liquidation"),
        "internal-regulations" => t!("service-internal-regulations"),
        "company-services" => t!("service-company-services"),
        "arbitration" => t!("service-arbitration"),
        "intellectual-property" => t!("service-intellectual-property"),
        "corporate-restructuring" => t!("service-corporate-restructuring"),
        "establishing-companies" => t!("service-establishing-companies"),
        "commercial-agencies" => t!("service-commercial-agencies"),
        "vision-2030" => t!("service-vision-2030"),
        "estates" => t!("service-estates"),
        _ => return None,
    };
    Some(label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_catalogue_entry_has_a_label() {
        crate::i18n::init();
        for service in SERVICES {
            let label = service_label(service.slug);
            assert!(
                label.as_deref().is_some_and(|l| !l.is_empty()),
                "missing label for {}",
                service.slug
            );
        }
    }

    #[test]
    fn unknown_slugs_have_no_label() {
        crate::i18n::init();
        assert_eq!(service_label("time-travel"), None);
    }

    #[test]
    fn slugs_are_unique_url_segments() {
        let mut seen = std::collections::HashSet::new();
        for service in SERVICES {
            assert!(seen.insert(service.slug), "duplicate slug {}", service.slug);
            assert!(
                service
                    .slug
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'),
                "slug {} is not url-safe",
                service.slug
            );
        }
    }
}
