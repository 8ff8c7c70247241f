//! Drives a [`RevealEngine`] through an ordered list of scripts.

use log::debug;

use super::{
    engine::{EngineEvent, RevealEngine},
    state::{RevealObserver, RevealView, Script, ScriptSlot, TimingConfig},
    timer::{TimerQueue, TimerToken},
};

#[derive(Debug)]
pub struct Sequencer<'s> {
    scripts: &'s [Script<'s>],
    config: TimingConfig,
    engine: RevealEngine<'s>,
    script_index: usize,
    active: bool,
    empty: bool,
}

impl Default for Sequencer<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'s> Sequencer<'s> {
    pub const fn new() -> Self {
        Self {
            scripts: &[],
            config: TimingConfig::boot(),
            engine: RevealEngine::new(),
            script_index: 0,
            active: false,
            empty: false,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn script_index(&self) -> usize {
        self.script_index
    }

    /// The sequence ended and will not emit again until re-activated.
    pub fn is_finished(&self) -> bool {
        self.active && (self.empty || self.engine.is_finished())
    }

    /// Starts `scripts` from script 0, line 0, char 0.
    ///
    /// A previous run, finished or not, is discarded. A list with nothing to
    /// type settles in the terminal empty state without scheduling anything.
    pub fn activate<Q, O>(
        &mut self,
        scripts: &'s [Script<'s>],
        config: TimingConfig,
        now_ms: u64,
        timers: &mut Q,
        observer: &mut O,
    ) where
        Q: TimerQueue,
        O: RevealObserver,
    {
        self.deactivate();
        self.scripts = scripts;
        self.config = config.sanitized();
        self.active = true;

        if scripts.iter().all(|script| script.is_empty()) {
            debug!("sequencer: nothing to show scripts={}", scripts.len());
            self.empty = true;
            observer.on_reveal(&self.view());
            return;
        }

        self.start_script(0, now_ms, timers, observer);
    }

    /// Cancels the engine and forgets all progress. No-op when inactive.
    pub fn deactivate(&mut self) {
        if !self.active {
            return;
        }

        debug!(
            "sequencer: deactivate script={} gen={}",
            self.script_index,
            self.engine.generation()
        );
        self.engine.clear();
        self.scripts = &[];
        self.script_index = 0;
        self.active = false;
        self.empty = false;
    }

    /// Feeds a fired timer token through the engine.
    pub fn on_timer<Q, O>(
        &mut self,
        token: TimerToken,
        now_ms: u64,
        timers: &mut Q,
        observer: &mut O,
    ) -> EngineEvent
    where
        Q: TimerQueue,
        O: RevealObserver,
    {
        if !self.active {
            return EngineEvent::Stale;
        }

        let event = self.engine.on_timer(token, now_ms, timers, observer);
        match event {
            EngineEvent::ScriptComplete => self.after_script(now_ms, timers),
            EngineEvent::Handoff => {
                let next = (self.script_index + 1) % self.scripts.len();
                self.start_script(next, now_ms, timers, observer);
            }
            EngineEvent::Stale | EngineEvent::Advanced => {}
        }
        event
    }

    pub fn view(&self) -> RevealView<'_> {
        if !self.active {
            return RevealView::EMPTY;
        }

        if self.empty {
            return RevealView {
                script_count: self.scripts.len(),
                finished: true,
                ..RevealView::EMPTY
            };
        }

        self.engine.view()
    }

    pub fn drain_revealed_chars(&mut self) -> u32 {
        self.engine.drain_revealed_chars()
    }

    fn start_script<Q, O>(&mut self, index: usize, now_ms: u64, timers: &mut Q, observer: &mut O)
    where
        Q: TimerQueue,
        O: RevealObserver,
    {
        self.script_index = index;
        let slot = ScriptSlot {
            index,
            count: self.scripts.len(),
        };

        let event = self.engine.start(
            self.scripts[index],
            self.config,
            slot,
            now_ms,
            timers,
            observer,
        );
        if event == EngineEvent::ScriptComplete {
            self.after_script(now_ms, timers);
        }
    }

    fn after_script<Q>(&mut self, now_ms: u64, timers: &mut Q)
    where
        Q: TimerQueue,
    {
        if self.engine.is_finished() {
            debug!("sequencer: one-shot sequence finished");
            return;
        }

        self.engine.hold(self.config.script_delay_ms, now_ms, timers);
    }
}
