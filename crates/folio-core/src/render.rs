//! App-level view models and animation metadata.

use crate::{content::Section, reveal::RevealView};

/// Half period of the typing cursor blink.
pub const CURSOR_BLINK_HALF_MS: u64 = 500;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct VisualStyle {
    pub dark: bool,
}

impl Default for VisualStyle {
    fn default() -> Self {
        Self { dark: true }
    }
}

/// Blink slot for `now_ms`; even slots show the cursor.
pub const fn cursor_blink_slot(now_ms: u64) -> u64 {
    now_ms / CURSOR_BLINK_HALF_MS
}

pub const fn cursor_blink_on(now_ms: u64) -> bool {
    cursor_blink_slot(now_ms) % 2 == 0
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AnimationKind {
    SlideLeft,
    SlideRight,
    Fade,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AnimationFrame {
    pub kind: AnimationKind,
    /// 0..=100
    pub progress_pct: u8,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AnimationSpec {
    pub kind: AnimationKind,
    pub start_ms: u64,
    pub duration_ms: u16,
}

impl AnimationSpec {
    pub const fn new(kind: AnimationKind, start_ms: u64, duration_ms: u16) -> Self {
        Self {
            kind,
            start_ms,
            duration_ms,
        }
    }

    pub fn frame(self, now_ms: u64) -> Option<AnimationFrame> {
        let duration = self.duration_ms.max(1) as u64;
        let elapsed = now_ms.saturating_sub(self.start_ms);
        if elapsed >= duration {
            return None;
        }

        let progress = ((elapsed * 100) / duration).min(100) as u8;
        Some(AnimationFrame {
            kind: self.kind,
            progress_pct: progress,
        })
    }
}

/// One typewriter surface as the renderer sees it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PanelView<'a> {
    pub title: &'a str,
    pub reveal: RevealView<'a>,
    /// Cursor drawn this frame: sequence still running and blink phase on.
    pub cursor_on: bool,
}

impl<'a> PanelView<'a> {
    pub fn new(title: &'a str, reveal: RevealView<'a>, now_ms: u64) -> Self {
        Self {
            title,
            reveal,
            cursor_on: reveal.cursor_visible() && cursor_blink_on(now_ms),
        }
    }
}

/// App-level view model consumed by the host renderer.
#[derive(Clone, Copy, Debug)]
pub struct Screen<'a> {
    pub owner: &'a str,
    pub section: Section,
    pub sections: &'a [Section],
    pub style: VisualStyle,
    /// Present while the about section is shown.
    pub code_panel: Option<PanelView<'a>>,
    /// Present while the terminal overlay is open; drawn on top.
    pub terminal: Option<PanelView<'a>>,
    pub animation: Option<AnimationFrame>,
}
