//! Typed views of the CMS content documents consumed by the site.
//!
//! Field names follow the wire format (camelCase, plus the CMS quirk of a
//! capitalized `Title` on team services). Unknown fields are ignored so the
//! CMS can grow its schema without breaking the frontend.

use serde::{Deserialize, Serialize};

use super::config;

/// One resized rendition of an uploaded asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageFormat {
    pub url: String,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
}

/// Renditions the CMS generates for images. Videos carry none.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageFormats {
    #[serde(default)]
    pub thumbnail: Option<ImageFormat>,
    #[serde(default)]
    pub small: Option<ImageFormat>,
    #[serde(default)]
    pub medium: Option<ImageFormat>,
    #[serde(default)]
    pub large: Option<ImageFormat>,
}

/// An uploaded media asset (image or video).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaItem {
    pub id: i64,
    #[serde(default)]
    pub document_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub alternative_text: Option<String>,
    #[serde(default)]
    pub mime: String,
    pub url: String,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default)]
    pub formats: Option<ImageFormats>,
}

impl MediaItem {
    pub fn alt_text(&self) -> &str {
        self.alternative_text.as_deref().unwrap_or("")
    }

    /// Absolute URL for displaying this asset. When remote-image optimization
    /// applies (non-local deployments) the large rendition is preferred; local
    /// uploads and assets without renditions use the raw URL.
    pub fn display_url(&self, base: &str, unoptimized: bool) -> String {
        if !unoptimized {
            if let Some(large) = self.formats.as_ref().and_then(|f| f.large.as_ref()) {
                return config::media_url(base, &large.url);
            }
        }
        config::media_url(base, &self.url)
    }
}

/// Which background field is authoritative for a slide.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundKind {
    #[default]
    Image,
    Video,
}

/// One hero carousel entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slide {
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub background_type: BackgroundKind,
    #[serde(default)]
    pub button_text: String,
    #[serde(default)]
    pub button_link: String,
    #[serde(default)]
    pub background_image: Option<MediaItem>,
    #[serde(default)]
    pub background_video: Option<MediaItem>,
    #[serde(default)]
    pub foreground_image: Option<MediaItem>,
}

impl Slide {
    /// The background asset selected by `background_type`, if present.
    pub fn background_media(&self) -> Option<&MediaItem> {
        match self.background_type {
            BackgroundKind::Image => self.background_image.as_ref(),
            BackgroundKind::Video => self.background_video.as_ref(),
        }
    }
}

/// The hero banner single-type document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroDocument {
    pub id: i64,
    #[serde(default)]
    pub document_id: String,
    #[serde(default)]
    pub slides: Vec<Slide>,
}

/// One team service entry. The CMS stores the title field capitalized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamService {
    pub id: i64,
    #[serde(default)]
    pub document_id: String,
    #[serde(rename = "Title", default)]
    pub title: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
    #[serde(default)]
    pub published_at: String,
}

/// Collection pagination metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: usize,
    pub page_size: usize,
    pub page_count: usize,
    pub total: usize,
}

/// One page of a paginated collection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub pagination: Pagination,
}

#[cfg(test)]
mod tests {
    use super::*;

    const SLIDE_JSON: &str = r#"{
        "id": 3,
        "title": "Trusted counsel",
        "description": "Advisory across every practice area.",
        "backgroundType": "video",
        "buttonText": "Read more",
        "buttonLink": "https://maydan.example/about",
        "backgroundImage": null,
        "backgroundVideo": {
            "id": 12,
            "documentId": "v1",
            "name": "skyline.mp4",
            "alternativeText": null,
            "mime": "video/mp4",
            "url": "/uploads/skyline.mp4",
            "provider": "local"
        },
        "foregroundImage": {
            "id": 13,
            "documentId": "f1",
            "name": "scales.png",
            "alternativeText": "Scales of justice",
            "mime": "image/png",
            "url": "/uploads/scales.png",
            "formats": {
                "large": { "url": "/uploads/large_scales.png", "width": 1000, "height": 800 }
            }
        }
    }"#;

    #[test]
    fn slide_decodes_from_wire_format() {
        let slide: Slide = serde_json::from_str(SLIDE_JSON).expect("slide decodes");
        assert_eq!(slide.background_type, BackgroundKind::Video);
        assert_eq!(
            slide.background_media().map(|m| m.url.as_str()),
            Some("/uploads/skyline.mp4")
        );
        assert_eq!(
            slide.foreground_image.as_ref().map(|m| m.alt_text()),
            Some("Scales of justice")
        );
    }

    #[test]
    fn background_media_follows_background_type() {
        let mut slide: Slide = serde_json::from_str(SLIDE_JSON).expect("slide decodes");
        // Kind says video, so a stray image is not authoritative.
        slide.background_image = slide.background_video.clone();
        slide.background_video = None;
        assert!(slide.background_media().is_none());
    }

    #[test]
    fn display_url_prefers_large_rendition_when_optimized() {
        let slide: Slide = serde_json::from_str(SLIDE_JSON).expect("slide decodes");
        let media = slide.foreground_image.expect("foreground present");
        assert_eq!(
            media.display_url("https://cms.maydan.example", false),
            "https://cms.maydan.example/uploads/large_scales.png"
        );
        assert_eq!(
            media.display_url("http://localhost:1337", true),
            "http://localhost:1337/uploads/scales.png"
        );
    }

    #[test]
    fn team_service_title_is_capitalized_on_the_wire() {
        let service: TeamService = serde_json::from_str(
            r#"{ "id": 1, "documentId": "t1", "Title": "Arbitration", "publishedAt": "2025-05-01T10:00:00.000Z" }"#,
        )
        .expect("service decodes");
        assert_eq!(service.title, "Arbitration");
    }
}
