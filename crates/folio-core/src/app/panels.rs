//! Presentation adapters binding a [`Sequencer`] to a visible surface.

use log::{debug, warn};

use crate::{
    content::{
        boot::{BOOT_SCRIPTS, BOOT_TERMINAL_TITLE},
        snippets::{CODE_SNIPPETS, SNIPPET_PANEL_TITLE},
    },
    render::PanelView,
    reveal::{ChangeFlag, Script, Sequencer, TimerWheel, TimingConfig},
};

const TIMER_SLOTS: usize = 8;
/// Upper bound on steps fired per pump, so a zero-delay loop cannot stall the host.
const MAX_STEPS_PER_PUMP: usize = 512;

/// A sequencer plus the timer queue it runs on.
#[derive(Debug)]
struct Surface {
    title: &'static str,
    scripts: &'static [Script<'static>],
    config: TimingConfig,
    sequencer: Sequencer<'static>,
    timers: TimerWheel<TIMER_SLOTS>,
}

impl Surface {
    fn new(title: &'static str, scripts: &'static [Script<'static>], config: TimingConfig) -> Self {
        Self {
            title,
            scripts,
            config: config.sanitized(),
            sequencer: Sequencer::new(),
            timers: TimerWheel::new(),
        }
    }

    fn activate(&mut self, now_ms: u64) {
        debug!("surface {}: activate", self.title);
        self.sequencer.activate(
            self.scripts,
            self.config,
            now_ms,
            &mut self.timers,
            &mut ChangeFlag::default(),
        );
    }

    fn deactivate(&mut self) {
        debug!("surface {}: deactivate", self.title);
        self.sequencer.deactivate();
    }

    fn pump(&mut self, now_ms: u64) -> bool {
        let mut flag = ChangeFlag::default();
        let mut steps = 0usize;

        while let Some(token) = self.timers.pop_due(now_ms) {
            self.sequencer
                .on_timer(token, now_ms, &mut self.timers, &mut flag);
            steps += 1;
            if steps >= MAX_STEPS_PER_PUMP {
                warn!(
                    "surface {}: step budget exhausted at {}ms",
                    self.title, now_ms
                );
                break;
            }
        }

        flag.changed
    }

    fn view(&self, now_ms: u64) -> PanelView<'_> {
        PanelView::new(self.title, self.sequencer.view(), now_ms)
    }
}

/// Looping code panel of the about section.
#[derive(Debug)]
pub struct SnippetPanel {
    surface: Surface,
}

impl SnippetPanel {
    pub fn new(config: TimingConfig) -> Self {
        Self::with_scripts(&CODE_SNIPPETS, config)
    }

    pub fn with_scripts(scripts: &'static [Script<'static>], config: TimingConfig) -> Self {
        Self {
            surface: Surface::new(SNIPPET_PANEL_TITLE, scripts, config),
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.surface.sequencer.is_active()
    }

    pub fn is_finished(&self) -> bool {
        self.surface.sequencer.is_finished()
    }

    /// Starts from the first snippet unless already mounted.
    pub fn mount(&mut self, now_ms: u64) -> bool {
        if self.is_mounted() {
            return false;
        }
        self.surface.activate(now_ms);
        true
    }

    pub fn unmount(&mut self) -> bool {
        if !self.is_mounted() {
            return false;
        }
        self.surface.deactivate();
        true
    }

    /// Fires due timers; `true` when the revealed text changed.
    pub fn pump(&mut self, now_ms: u64) -> bool {
        self.surface.pump(now_ms)
    }

    pub fn next_due(&self) -> Option<u64> {
        self.surface.timers.next_due()
    }

    pub fn view(&self, now_ms: u64) -> PanelView<'_> {
        self.surface.view(now_ms)
    }

    pub fn drain_revealed_chars(&mut self) -> u32 {
        self.surface.sequencer.drain_revealed_chars()
    }
}

/// One-shot boot transcript shown in the terminal overlay.
///
/// Every open starts the transcript from its first character.
#[derive(Debug)]
pub struct BootTerminal {
    surface: Surface,
}

impl BootTerminal {
    pub fn new(config: TimingConfig) -> Self {
        Self::with_scripts(&BOOT_SCRIPTS, config)
    }

    pub fn with_scripts(scripts: &'static [Script<'static>], config: TimingConfig) -> Self {
        Self {
            surface: Surface::new(BOOT_TERMINAL_TITLE, scripts, config),
        }
    }

    pub fn is_open(&self) -> bool {
        self.surface.sequencer.is_active()
    }

    pub fn is_finished(&self) -> bool {
        self.surface.sequencer.is_finished()
    }

    pub fn open(&mut self, now_ms: u64) -> bool {
        if self.is_open() {
            return false;
        }
        self.surface.activate(now_ms);
        true
    }

    pub fn close(&mut self) -> bool {
        if !self.is_open() {
            return false;
        }
        self.surface.deactivate();
        true
    }

    pub fn pump(&mut self, now_ms: u64) -> bool {
        self.surface.pump(now_ms)
    }

    pub fn next_due(&self) -> Option<u64> {
        self.surface.timers.next_due()
    }

    pub fn view(&self, now_ms: u64) -> PanelView<'_> {
        self.surface.view(now_ms)
    }

    pub fn drain_revealed_chars(&mut self) -> u32 {
        self.surface.sequencer.drain_revealed_chars()
    }
}
