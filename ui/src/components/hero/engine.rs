//! State machine behind the hero slider.
//!
//! The slider reveals nothing until every slide's background asset has
//! settled (loaded or errored), then cycles automatically with manual
//! override. The pieces here are pure so the gating and classification rules
//! stay testable away from the DOM:
//!
//! - [`PreloadTracker`] — append-only settled set with a monotonic reveal
//!   flag. A slide whose required background reference is missing never
//!   produces a preload task, so its index never settles and the reveal
//!   stalls; that matches the shipped behavior and is pinned by a test below
//!   rather than patched over.
//! - [`plan_preloads`] — turns the slide list into concrete load tasks.
//!   Foreground images load best-effort and never gate the reveal.
//! - [`SlidePhase`] — active / adjacent / hidden classification driving the
//!   layer transitions.

use std::collections::BTreeSet;

use crate::core::config;
use crate::core::content::{BackgroundKind, Slide};

/// Auto-advance period.
pub const AUTO_ADVANCE_MS: u64 = 7000;
/// How long the entrance/exit animation window stays open after a manual
/// slide change.
pub const TRANSITION_MS: u64 = 600;

/// Tracks which slides' background media has settled and whether the slider
/// may reveal. Mutated only from the component's event loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreloadTracker {
    slide_count: usize,
    settled: BTreeSet<usize>,
    revealed: bool,
}

impl PreloadTracker {
    pub fn new(slide_count: usize) -> Self {
        Self {
            slide_count,
            settled: BTreeSet::new(),
            revealed: false,
        }
    }

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    /// Record that a slide's background finished loading (or failing).
    /// Out-of-range indices are ignored. Returns the reveal state so callers
    /// can react to the transition without re-reading.
    pub fn settle(&mut self, index: usize) -> bool {
        if index < self.slide_count {
            self.settled.insert(index);
            if !self.revealed && self.settled.len() == self.slide_count {
                self.revealed = true;
            }
        }
        self.revealed
    }

    /// True once every slide index has settled. Monotonic: never reverts for
    /// the lifetime of the tracker.
    pub fn revealed(&self) -> bool {
        self.revealed
    }

    /// Loading progress in percent, rounded to the nearest integer. Empty
    /// slide lists report 0 instead of dividing by zero.
    pub fn progress_percent(&self) -> u8 {
        if self.slide_count == 0 {
            return 0;
        }
        let ratio = self.settled.len() as f64 / self.slide_count as f64;
        (ratio * 100.0).round() as u8
    }
}

/// Visual tier of one slide layer relative to the active index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlidePhase {
    /// Fully visible.
    Active,
    /// Immediate neighbor (wrapping), staged for the next transition.
    Adjacent,
    /// Everything else.
    Hidden,
}

impl SlidePhase {
    pub fn classify(index: usize, current: usize, count: usize) -> SlidePhase {
        if index == current {
            return SlidePhase::Active;
        }
        if count > 0 {
            let next = (current + 1) % count;
            let prev = (current + count - 1) % count;
            if index == next || index == prev {
                return SlidePhase::Adjacent;
            }
        }
        SlidePhase::Hidden
    }

    /// Modifier class for the background layer.
    pub fn css_class(self) -> &'static str {
        match self {
            SlidePhase::Active => "hero__layer--active",
            SlidePhase::Adjacent => "hero__layer--adjacent",
            SlidePhase::Hidden => "hero__layer--hidden",
        }
    }
}

/// Next slide index, wrapping. Guarded against empty slide lists so the
/// auto-advance handler is safe even if it fires with nothing to show.
pub fn next_index(current: usize, count: usize) -> usize {
    if count == 0 {
        0
    } else {
        (current + 1) % count
    }
}

/// What a single preload task loads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind {
    BackgroundImage,
    BackgroundVideo,
    /// Foreground overlays warm the cache but never gate the reveal.
    Foreground,
}

impl TaskKind {
    /// Whether this task's settlement counts toward the reveal gate.
    pub fn gates_reveal(self) -> bool {
        !matches!(self, TaskKind::Foreground)
    }

    pub fn is_video(self) -> bool {
        matches!(self, TaskKind::BackgroundVideo)
    }
}

/// One concrete asset load to issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreloadTask {
    pub slide_index: usize,
    pub url: String,
    pub kind: TaskKind,
}

/// Plan the preload fan-out for a slide list. A slide contributes a gating
/// task only when the background field its kind points at is present; a
/// missing reference contributes nothing and therefore stalls the reveal.
pub fn plan_preloads(slides: &[Slide], base_url: &str) -> Vec<PreloadTask> {
    let mut tasks = Vec::new();

    for (index, slide) in slides.iter().enumerate() {
        match slide.background_type {
            BackgroundKind::Image => {
                if let Some(media) = &slide.background_image {
                    tasks.push(PreloadTask {
                        slide_index: index,
                        url: config::media_url(base_url, &media.url),
                        kind: TaskKind::BackgroundImage,
                    });
                }
            }
            BackgroundKind::Video => {
                if let Some(media) = &slide.background_video {
                    tasks.push(PreloadTask {
                        slide_index: index,
                        url: config::media_url(base_url, &media.url),
                        kind: TaskKind::BackgroundVideo,
                    });
                }
            }
        }

        if let Some(media) = &slide.foreground_image {
            tasks.push(PreloadTask {
                slide_index: index,
                url: config::media_url(base_url, &media.url),
                kind: TaskKind::Foreground,
            });
        }
    }

    tasks
}
