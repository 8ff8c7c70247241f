//! Character-by-character reveal of a single script.

use log::{debug, trace};

use super::{
    state::{RevealObserver, RevealState, RevealView, Script, ScriptSlot, TimingConfig},
    timer::{TimerQueue, TimerToken},
};
use crate::text_policy::{char_count, char_prefix};

/// Outcome of one engine call.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EngineEvent {
    /// Token belonged to a cancelled run or nothing was pending.
    Stale,
    /// State moved forward and the next step is scheduled.
    Advanced,
    /// Every line of the script is committed.
    ScriptComplete,
    /// The post-script hold elapsed; the caller picks what runs next.
    Handoff,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Step {
    TypeChar,
    CommitLine,
    NextLine,
    Handoff,
}

/// Reveal state machine for one presentation surface.
///
/// Every scheduled step carries the generation it was issued under. `cancel`
/// bumps the generation, so tokens still sitting in the host queue fall
/// through [`RevealEngine::on_timer`] without touching state.
#[derive(Debug)]
pub struct RevealEngine<'s> {
    script: Script<'s>,
    config: TimingConfig,
    slot: ScriptSlot,
    state: RevealState,
    generation: u32,
    pending: Option<Step>,
    chars_since_drain: u32,
}

impl Default for RevealEngine<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'s> RevealEngine<'s> {
    pub const fn new() -> Self {
        Self {
            script: &[],
            config: TimingConfig::boot(),
            slot: ScriptSlot { index: 0, count: 0 },
            state: RevealState::at_script(0),
            generation: 0,
            pending: None,
            chars_since_drain: 0,
        }
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Terminal state of a one-shot sequence: last script done, no loop.
    pub fn is_finished(&self) -> bool {
        self.state.done && !self.config.looping && self.slot.is_last()
    }

    /// Restarts from the zero position of `script`.
    ///
    /// Any earlier run is cancelled first; its progress is discarded.
    pub fn start<Q, O>(
        &mut self,
        script: Script<'s>,
        config: TimingConfig,
        slot: ScriptSlot,
        now_ms: u64,
        timers: &mut Q,
        observer: &mut O,
    ) -> EngineEvent
    where
        Q: TimerQueue,
        O: RevealObserver,
    {
        self.cancel();
        self.script = script;
        self.config = config.sanitized();
        self.slot = slot;
        self.state = RevealState::at_script(slot.index);

        debug!(
            "reveal: start script={}/{} lines={} gen={}",
            slot.index + 1,
            slot.count,
            script.len(),
            self.generation
        );

        self.enter_line(now_ms, timers, observer)
    }

    /// Stops all scheduled work. Idempotent.
    pub fn cancel(&mut self) {
        if self.pending.is_some() {
            trace!("reveal: cancel gen={}", self.generation);
        }
        self.generation = self.generation.wrapping_add(1);
        self.pending = None;
    }

    /// Cancels and forgets the current script.
    pub fn clear(&mut self) {
        self.cancel();
        self.script = &[];
        self.slot = ScriptSlot::default();
        self.state = RevealState::at_script(0);
    }

    /// Schedules a hand-off step `delay_ms` after a completed script.
    ///
    /// The hold shares the run's generation, so `cancel` also covers it.
    pub fn hold<Q>(&mut self, delay_ms: u32, now_ms: u64, timers: &mut Q)
    where
        Q: TimerQueue,
    {
        if !self.state.done {
            return;
        }
        self.schedule(Step::Handoff, now_ms + delay_ms as u64, timers);
    }

    /// Runs the step behind `token`.
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
        if token.generation != self.generation {
            trace!(
                "reveal: stale token gen={} current={}",
                token.generation, self.generation
            );
            return EngineEvent::Stale;
        }

        let Some(step) = self.pending.take() else {
            return EngineEvent::Stale;
        };

        match step {
            Step::TypeChar => {
                self.state.char_index += 1;
                self.chars_since_drain = self.chars_since_drain.saturating_add(1);
                self.emit(observer);

                if self.state.char_index >= char_count(self.current_line()) {
                    self.schedule(Step::CommitLine, now_ms, timers);
                } else {
                    self.schedule(
                        Step::TypeChar,
                        now_ms + self.config.char_interval_ms as u64,
                        timers,
                    );
                }
                EngineEvent::Advanced
            }
            Step::CommitLine => {
                self.commit_line(observer);
                self.schedule(
                    Step::NextLine,
                    now_ms + self.config.line_delay_ms as u64,
                    timers,
                );
                EngineEvent::Advanced
            }
            Step::NextLine => self.enter_line(now_ms, timers, observer),
            Step::Handoff => {
                trace!("reveal: hand-off after script={}", self.slot.index + 1);
                EngineEvent::Handoff
            }
        }
    }

    pub fn view(&self) -> RevealView<'_> {
        let line_index = self.state.line_index.min(self.script.len());
        RevealView {
            script_index: self.state.script_index,
            script_count: self.slot.count,
            line_index,
            char_index: self.state.char_index,
            lines: &self.script[..line_index],
            active_prefix: char_prefix(self.current_line(), self.state.char_index),
            script_done: self.state.done,
            finished: self.is_finished(),
        }
    }

    /// Characters revealed since the previous call.
    pub fn drain_revealed_chars(&mut self) -> u32 {
        core::mem::take(&mut self.chars_since_drain)
    }

    fn enter_line<Q, O>(&mut self, now_ms: u64, timers: &mut Q, observer: &mut O) -> EngineEvent
    where
        Q: TimerQueue,
        O: RevealObserver,
    {
        // Blank lines commit on entry: no character beats, no post-line pause.
        while let Some(line) = self.script.get(self.state.line_index) {
            if line.is_empty() {
                self.commit_line(observer);
                continue;
            }

            self.schedule(
                Step::TypeChar,
                now_ms + self.config.char_interval_ms as u64,
                timers,
            );
            return EngineEvent::Advanced;
        }

        self.complete_script(observer)
    }

    fn commit_line<O>(&mut self, observer: &mut O)
    where
        O: RevealObserver,
    {
        self.state.line_index += 1;
        self.state.char_index = 0;
        self.emit(observer);
    }

    fn complete_script<O>(&mut self, observer: &mut O) -> EngineEvent
    where
        O: RevealObserver,
    {
        self.state.done = true;
        if self.is_finished() {
            self.state.script_index = self.slot.count;
        }

        debug!(
            "reveal: script={}/{} complete finished={}",
            self.slot.index + 1,
            self.slot.count,
            self.is_finished()
        );
        self.emit(observer);
        EngineEvent::ScriptComplete
    }

    fn current_line(&self) -> &'s str {
        self.script.get(self.state.line_index).copied().unwrap_or("")
    }

    fn schedule<Q>(&mut self, step: Step, due_ms: u64, timers: &mut Q)
    where
        Q: TimerQueue,
    {
        self.pending = Some(step);
        timers.schedule(
            due_ms,
            TimerToken {
                generation: self.generation,
            },
        );
    }

    fn emit<O>(&self, observer: &mut O)
    where
        O: RevealObserver,
    {
        observer.on_reveal(&self.view());
    }
}
