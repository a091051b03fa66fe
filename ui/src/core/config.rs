//! Deployment configuration for reaching the headless CMS.
//!
//! The CMS base URL comes from `MAYDAN_CMS_URL`: read from the process
//! environment on native targets (server rendering), baked in at compile time
//! for wasm builds where no runtime environment exists. Local development
//! falls back to the CMS dev server default.

/// Default CMS origin used when nothing is configured.
pub const DEFAULT_CMS_URL: &str = "http://localhost:1337";

/// Resolve the CMS base URL (origin, no trailing slash).
pub fn cms_base_url() -> String {
    let configured = std::env::var("MAYDAN_CMS_URL")
        .ok()
        .filter(|value| !value.is_empty())
        .or_else(|| option_env!("MAYDAN_CMS_URL").map(str::to_owned))
        .unwrap_or_else(|| DEFAULT_CMS_URL.to_owned());

    configured.trim_end_matches('/').to_owned()
}

/// Join a media path onto the CMS origin. Upload URLs usually arrive as
/// `/uploads/...`; absolute URLs (external providers) pass through untouched.
pub fn media_url(base: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_owned();
    }
    format!("{}{}", base.trim_end_matches('/'), path)
}

/// Whether the deployment serves media straight from a local CMS. Local
/// uploads skip the resized renditions and are displayed as-is.
pub fn serves_unoptimized_media(base: &str) -> bool {
    base.contains("localhost")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn media_url_joins_relative_paths() {
        assert_eq!(
            media_url("http://localhost:1337", "/uploads/hero.jpg"),
            "http://localhost:1337/uploads/hero.jpg"
        );
        assert_eq!(
            media_url("http://localhost:1337/", "/uploads/hero.jpg"),
            "http://localhost:1337/uploads/hero.jpg"
        );
    }

    #[test]
    fn media_url_passes_absolute_urls_through() {
        let absolute = "https://cdn.example.com/hero.jpg";
        assert_eq!(media_url("http://localhost:1337", absolute), absolute);
    }

    #[test]
    fn localhost_deployments_skip_optimization() {
        assert!(serves_unoptimized_media("http://localhost:1337"));
        assert!(!serves_unoptimized_media("https://cms.maydan.example"));
    }
}
