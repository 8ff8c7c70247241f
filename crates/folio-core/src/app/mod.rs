//! Application state machine for the portfolio surface and its typewriters.

use log::{debug, info, warn};

use crate::{
    content::{SITE_OWNER, Section},
    input::{InputEvent, InputProvider},
    render::{
        AnimationFrame, AnimationKind, AnimationSpec, CURSOR_BLINK_HALF_MS, Screen, VisualStyle,
        cursor_blink_slot,
    },
    reveal::TimingConfig,
};

mod panels;

pub use panels::{BootTerminal, SnippetPanel};

const ANIM_SECTION_MS: u16 = 160;
const ANIM_OVERLAY_MS: u16 = 200;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TickResult {
    NoRender,
    RenderRequested,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AppConfig {
    pub snippet: TimingConfig,
    pub boot: TimingConfig,
    pub start_section: Section,
    pub style: VisualStyle,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            snippet: TimingConfig::snippet(),
            boot: TimingConfig::boot(),
            start_section: Section::Home,
            style: VisualStyle::default(),
        }
    }
}

pub struct PortfolioApp<IN>
where
    IN: InputProvider,
{
    input: IN,
    section: Section,
    style: VisualStyle,
    code_panel: SnippetPanel,
    terminal: BootTerminal,
    pending_redraw: bool,
    transition: Option<AnimationSpec>,
    last_blink_slot: Option<u64>,
    quit: bool,
}

include!("view.rs");
include!("input.rs");
include!("runtime.rs");
