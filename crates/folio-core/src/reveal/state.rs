//! Reveal state, timing presets and the snapshot handed to observers.

/// Character cadence shared by both call sites.
pub const DEFAULT_CHAR_INTERVAL_MS: u32 = 50;
/// Pause after each committed boot-transcript line.
pub const BOOT_LINE_DELAY_MS: u32 = 300;
/// A snippet line break costs one character beat.
pub const SNIPPET_LINE_DELAY_MS: u32 = DEFAULT_CHAR_INTERVAL_MS;
/// Pause between whole snippets.
pub const SNIPPET_SCRIPT_DELAY_MS: u32 = 3_000;

/// One ordered list of lines revealed as a unit.
pub type Script<'a> = &'a [&'a str];

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TimingConfig {
    pub char_interval_ms: u32,
    pub line_delay_ms: u32,
    pub script_delay_ms: u32,
    pub looping: bool,
}

impl TimingConfig {
    /// Looping code-snippet cadence.
    pub const fn snippet() -> Self {
        Self {
            char_interval_ms: DEFAULT_CHAR_INTERVAL_MS,
            line_delay_ms: SNIPPET_LINE_DELAY_MS,
            script_delay_ms: SNIPPET_SCRIPT_DELAY_MS,
            looping: true,
        }
    }

    /// One-shot boot transcript cadence.
    pub const fn boot() -> Self {
        Self {
            char_interval_ms: DEFAULT_CHAR_INTERVAL_MS,
            line_delay_ms: BOOT_LINE_DELAY_MS,
            script_delay_ms: 0,
            looping: false,
        }
    }

    /// Clamps values that would make the engine spin without advancing time.
    pub fn sanitized(mut self) -> Self {
        self.char_interval_ms = self.char_interval_ms.max(1);
        self
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self::boot()
    }
}

/// Position of a script inside its sequence.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ScriptSlot {
    pub index: usize,
    pub count: usize,
}

impl ScriptSlot {
    pub const fn is_last(self) -> bool {
        self.index + 1 >= self.count
    }
}

/// Mutable progress of one engine through one script.
///
/// Committed lines and the active prefix are not stored: they are always the
/// first `line_index` lines of the script and the first `char_index`
/// characters of the current line.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct RevealState {
    pub script_index: usize,
    pub line_index: usize,
    pub char_index: usize,
    pub done: bool,
}

impl RevealState {
    pub const fn at_script(script_index: usize) -> Self {
        Self {
            script_index,
            line_index: 0,
            char_index: 0,
            done: false,
        }
    }
}

/// Snapshot of revealed text, borrowed from the active script.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RevealView<'a> {
    pub script_index: usize,
    pub script_count: usize,
    pub line_index: usize,
    pub char_index: usize,
    /// Lines of the current script committed so far.
    pub lines: &'a [&'a str],
    /// Typed part of the line in progress; empty right after a commit.
    pub active_prefix: &'a str,
    /// The current script has been fully revealed.
    pub script_done: bool,
    /// A one-shot sequence reached its terminal state (or had nothing to show).
    pub finished: bool,
}

impl RevealView<'static> {
    pub const EMPTY: Self = RevealView {
        script_index: 0,
        script_count: 0,
        line_index: 0,
        char_index: 0,
        lines: &[],
        active_prefix: "",
        script_done: false,
        finished: false,
    };
}

impl RevealView<'_> {
    pub const fn cursor_visible(&self) -> bool {
        !self.finished
    }
}

/// Receives a snapshot after every committed transition.
pub trait RevealObserver {
    fn on_reveal(&mut self, view: &RevealView<'_>);
}

/// Observer for callers that only pump timers.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl RevealObserver for NoopObserver {
    fn on_reveal(&mut self, _view: &RevealView<'_>) {}
}

/// Observer that only remembers whether anything was emitted.
#[derive(Clone, Copy, Debug, Default)]
pub struct ChangeFlag {
    pub changed: bool,
}

impl RevealObserver for ChangeFlag {
    fn on_reveal(&mut self, _view: &RevealView<'_>) {
        self.changed = true;
    }
}
