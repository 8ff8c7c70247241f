use super::*;

#[derive(Clone, Debug, Eq, PartialEq)]
struct Snapshot {
    at_ms: u64,
    script_index: usize,
    line_index: usize,
    char_index: usize,
    lines: Vec<String>,
    prefix: String,
    script_done: bool,
    finished: bool,
}

#[derive(Default)]
struct Recorder {
    now_ms: u64,
    snapshots: Vec<Snapshot>,
}

impl RevealObserver for Recorder {
    fn on_reveal(&mut self, view: &RevealView<'_>) {
        self.snapshots.push(Snapshot {
            at_ms: self.now_ms,
            script_index: view.script_index,
            line_index: view.line_index,
            char_index: view.char_index,
            lines: view.lines.iter().map(|line| line.to_string()).collect(),
            prefix: view.active_prefix.to_string(),
            script_done: view.script_done,
            finished: view.finished,
        });
    }
}

struct Harness<'s> {
    sequencer: Sequencer<'s>,
    wheel: TimerWheel<8>,
    recorder: Recorder,
    now_ms: u64,
    stale_fired: usize,
}

impl<'s> Harness<'s> {
    fn new() -> Self {
        Self {
            sequencer: Sequencer::new(),
            wheel: TimerWheel::new(),
            recorder: Recorder::default(),
            now_ms: 0,
            stale_fired: 0,
        }
    }

    fn activate(&mut self, scripts: &'s [Script<'s>], config: TimingConfig) {
        self.recorder.now_ms = self.now_ms;
        self.sequencer.activate(
            scripts,
            config,
            self.now_ms,
            &mut self.wheel,
            &mut self.recorder,
        );
    }

    /// Fires every token due up to `target_ms`, each at its own deadline.
    fn advance_to(&mut self, target_ms: u64) {
        while let Some(due_ms) = self.wheel.next_due() {
            if due_ms > target_ms {
                break;
            }
            self.now_ms = self.now_ms.max(due_ms);
            self.recorder.now_ms = self.now_ms;
            let Some(token) = self.wheel.pop_due(self.now_ms) else {
                break;
            };
            let event = self.sequencer.on_timer(
                token,
                self.now_ms,
                &mut self.wheel,
                &mut self.recorder,
            );
            if event == EngineEvent::Stale {
                self.stale_fired += 1;
            }
        }
        self.now_ms = target_ms;
    }

    fn snapshots(&self) -> &[Snapshot] {
        &self.recorder.snapshots
    }
}

const fn config(char_ms: u32, line_ms: u32, script_ms: u32, looping: bool) -> TimingConfig {
    TimingConfig {
        char_interval_ms: char_ms,
        line_delay_ms: line_ms,
        script_delay_ms: script_ms,
        looping,
    }
}

fn lines(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

#[test]
fn blank_line_scenario_emits_in_order() {
    const SCRIPTS: &[Script<'static>] = &[&["ab", "", "c"]];
    let mut harness = Harness::new();
    harness.activate(SCRIPTS, config(50, 300, 0, false));
    harness.advance_to(5_000);

    let observed: Vec<(u64, Vec<String>, &str, bool)> = harness
        .snapshots()
        .iter()
        .map(|s| (s.at_ms, s.lines.clone(), s.prefix.as_str(), s.script_done))
        .collect();

    assert_eq!(
        observed,
        vec![
            (50, lines(&[]), "a", false),
            (100, lines(&[]), "ab", false),
            (100, lines(&["ab"]), "", false),
            (400, lines(&["ab", ""]), "", false),
            (450, lines(&["ab", ""]), "c", false),
            (450, lines(&["ab", "", "c"]), "", false),
            (750, lines(&["ab", "", "c"]), "", true),
        ]
    );

    let view = harness.sequencer.view();
    assert_eq!(view.lines, &["ab", "", "c"]);
    assert_eq!(view.active_prefix, "");
    assert!(view.finished);
    assert!(!view.cursor_visible());
}

#[test]
fn non_blank_line_takes_one_step_per_char() {
    const SCRIPTS: &[Script<'static>] = &[&["hello"]];
    let mut harness = Harness::new();
    harness.activate(SCRIPTS, config(40, 100, 0, false));

    for k in 0..5 {
        harness.advance_to(k as u64 * 40);
        let view = harness.sequencer.view();
        assert_eq!(view.active_prefix, &"hello"[..k]);
        assert_eq!(view.char_index, k);
        assert!(view.lines.is_empty());
    }

    // The last character and the commit share a beat.
    harness.advance_to(200);
    let typed: Vec<&str> = harness
        .snapshots()
        .iter()
        .filter(|s| s.lines.is_empty())
        .map(|s| s.prefix.as_str())
        .collect();
    assert_eq!(typed, vec!["h", "he", "hel", "hell", "hello"]);
    assert_eq!(harness.snapshots()[5].lines, lines(&["hello"]));
    assert_eq!(harness.snapshots()[5].at_ms, 200);
}

#[test]
fn blank_lines_skip_char_and_line_delays() {
    const SCRIPTS: &[Script<'static>] = &[&["x", "", "", "y"]];
    let mut harness = Harness::new();
    harness.activate(SCRIPTS, config(50, 300, 0, false));
    harness.advance_to(2_000);

    let commits: Vec<(u64, usize)> = harness
        .snapshots()
        .iter()
        .filter(|s| s.prefix.is_empty() && !s.script_done)
        .map(|s| (s.at_ms, s.line_index))
        .collect();

    assert_eq!(commits, vec![(50, 1), (350, 2), (350, 3), (400, 4)]);

    let first_y = harness
        .snapshots()
        .iter()
        .find(|s| s.prefix == "y")
        .map(|s| s.at_ms);
    assert_eq!(first_y, Some(400));
}

#[test]
fn blank_first_line_commits_on_activation() {
    const SCRIPTS: &[Script<'static>] = &[&["", "z"]];
    let mut harness = Harness::new();
    harness.activate(SCRIPTS, config(50, 300, 0, false));

    assert_eq!(harness.snapshots().len(), 1);
    assert_eq!(harness.snapshots()[0].lines, lines(&[""]));
    assert_eq!(harness.snapshots()[0].at_ms, 0);

    harness.advance_to(50);
    assert_eq!(harness.snapshots()[1].prefix, "z");
    assert_eq!(harness.snapshots()[1].at_ms, 50);
}

#[test]
fn one_shot_sequence_stays_terminal() {
    const SCRIPTS: &[Script<'static>] = &[&["a"], &["b"]];
    let mut harness = Harness::new();
    harness.activate(SCRIPTS, config(10, 20, 500, false));

    harness.advance_to(1_000);
    let view = harness.sequencer.view();
    assert!(view.finished);
    assert_eq!(view.script_index, 2);
    assert_eq!(view.script_count, 2);
    assert_eq!(view.lines, &["b"]);
    assert!(harness.sequencer.is_finished());

    let emitted = harness.snapshots().len();
    let terminal: Vec<&Snapshot> = harness
        .snapshots()
        .iter()
        .filter(|s| s.script_index == 2)
        .collect();
    assert_eq!(terminal.len(), 1);
    assert!(terminal[0].finished);

    harness.advance_to(1_000_000);
    assert_eq!(harness.snapshots().len(), emitted);
    assert!(harness.wheel.is_empty());
}

#[test]
fn one_shot_sequence_visits_every_script() {
    const SCRIPTS: &[Script<'static>] = &[&["a"], &["b"], &["c"]];
    let mut harness = Harness::new();
    harness.activate(SCRIPTS, config(10, 0, 100, false));
    harness.advance_to(10_000);

    let starts: Vec<(u64, usize)> = harness
        .snapshots()
        .iter()
        .filter(|s| s.char_index == 1)
        .map(|s| (s.at_ms, s.script_index))
        .collect();
    assert_eq!(starts, vec![(10, 0), (120, 1), (230, 2)]);

    let done_but_running = harness
        .snapshots()
        .iter()
        .filter(|s| s.script_done && !s.finished)
        .count();
    assert_eq!(done_but_running, 2);
}

#[test]
fn looping_sequence_cycles_back_to_first_script() {
    const SCRIPTS: &[Script<'static>] = &[&["ab"], &["c"]];
    let mut harness = Harness::new();
    harness.activate(SCRIPTS, config(10, 20, 100, true));
    harness.advance_to(900);

    let restarts: Vec<u64> = harness
        .snapshots()
        .iter()
        .filter(|s| s.script_index == 0 && s.line_index == 0 && s.char_index == 1)
        .map(|s| s.at_ms)
        .collect();
    assert_eq!(restarts, vec![10, 280, 550, 820]);

    let script_one: Vec<u64> = harness
        .snapshots()
        .iter()
        .filter(|s| s.script_index == 1 && s.char_index == 1)
        .map(|s| s.at_ms)
        .collect();
    assert_eq!(script_one, vec![150, 420, 690]);

    assert!(harness.snapshots().iter().all(|s| !s.finished));
    assert!(harness.sequencer.view().cursor_visible());
}

#[test]
fn restarted_script_begins_with_nothing_revealed() {
    const SCRIPTS: &[Script<'static>] = &[&["ab"], &["c"]];
    let mut harness = Harness::new();
    harness.activate(SCRIPTS, config(10, 20, 100, true));
    harness.advance_to(279);

    let view = harness.sequencer.view();
    assert_eq!(view.script_index, 0);
    assert_eq!(view.line_index, 0);
    assert_eq!(view.char_index, 0);
    assert!(view.lines.is_empty());
    assert!(!view.script_done);
}

#[test]
fn deactivate_silences_pending_ticks() {
    const SCRIPTS: &[Script<'static>] = &[&["typing away", "second"]];
    let mut harness = Harness::new();
    harness.activate(SCRIPTS, config(50, 300, 0, false));
    harness.advance_to(120);

    let emitted = harness.snapshots().len();
    assert_eq!(emitted, 2);
    assert!(!harness.wheel.is_empty());

    harness.sequencer.deactivate();
    harness.advance_to(60_000);

    assert_eq!(harness.snapshots().len(), emitted);
    assert_eq!(harness.stale_fired, 1);
    assert_eq!(harness.sequencer.view(), RevealView::EMPTY);
}

#[test]
fn deactivate_during_script_hold_prevents_next_script() {
    const SCRIPTS: &[Script<'static>] = &[&["a"], &["b"]];
    let mut harness = Harness::new();
    harness.activate(SCRIPTS, config(10, 0, 3_000, true));
    harness.advance_to(500);
    assert!(harness.sequencer.view().script_done);

    let emitted = harness.snapshots().len();
    harness.sequencer.deactivate();
    harness.advance_to(10_000);

    assert_eq!(harness.snapshots().len(), emitted);
    assert_eq!(harness.stale_fired, 1);
}

#[test]
fn reactivation_starts_from_zero() {
    const SCRIPTS: &[Script<'static>] = &[&["abc", "def"], &["ghi"]];
    let mut harness = Harness::new();
    harness.activate(SCRIPTS, config(10, 50, 100, true));
    harness.advance_to(95);
    assert_eq!(harness.sequencer.view().line_index, 1);

    harness.sequencer.deactivate();
    harness.activate(SCRIPTS, config(10, 50, 100, true));

    let view = harness.sequencer.view();
    assert_eq!(
        (view.script_index, view.line_index, view.char_index),
        (0, 0, 0)
    );
    assert!(view.lines.is_empty());

    let before = harness.snapshots().len();
    harness.advance_to(105);
    let next = &harness.snapshots()[before];
    assert_eq!(next.prefix, "a");
    assert_eq!(next.at_ms, 105);
    assert_eq!(next.script_index, 0);
}

#[test]
fn activate_while_running_discards_old_chain() {
    const SCRIPTS: &[Script<'static>] = &[&["xy"]];
    let mut harness = Harness::new();
    harness.activate(SCRIPTS, config(50, 0, 0, false));
    harness.advance_to(60);
    assert_eq!(harness.sequencer.view().active_prefix, "x");

    harness.activate(SCRIPTS, config(50, 0, 0, false));
    let before = harness.snapshots().len();

    harness.advance_to(105);
    assert_eq!(harness.snapshots().len(), before);
    assert_eq!(harness.stale_fired, 1);

    harness.advance_to(110);
    assert_eq!(harness.snapshots().len(), before + 1);
    assert_eq!(harness.sequencer.view().active_prefix, "x");
}

#[test]
fn empty_script_list_is_terminal_without_timers() {
    const SCRIPTS: &[Script<'static>] = &[];
    let mut harness = Harness::new();
    harness.activate(SCRIPTS, config(50, 300, 0, true));

    assert!(harness.wheel.is_empty());
    assert_eq!(harness.snapshots().len(), 1);
    let view = harness.sequencer.view();
    assert!(view.finished);
    assert_eq!(view.script_index, view.script_count);
    assert!(harness.sequencer.is_finished());
}

#[test]
fn scripts_without_lines_count_as_empty() {
    const SCRIPTS: &[Script<'static>] = &[&[], &[]];
    let mut harness = Harness::new();
    harness.activate(SCRIPTS, config(50, 300, 0, true));

    assert!(harness.wheel.is_empty());
    assert!(harness.sequencer.view().finished);
}

#[test]
fn empty_script_inside_loop_is_skipped() {
    const SCRIPTS: &[Script<'static>] = &[&["a"], &[]];
    let mut harness = Harness::new();
    harness.activate(SCRIPTS, config(10, 0, 0, true));
    harness.advance_to(45);

    let firsts: Vec<u64> = harness
        .snapshots()
        .iter()
        .filter(|s| s.char_index == 1)
        .map(|s| s.at_ms)
        .collect();
    assert_eq!(firsts, vec![10, 20, 30, 40]);
}

#[test]
fn multibyte_characters_reveal_one_at_a_time() {
    const SCRIPTS: &[Script<'static>] = &[&["é→"]];
    let mut harness = Harness::new();
    harness.activate(SCRIPTS, config(10, 0, 0, false));
    harness.advance_to(100);

    let prefixes: Vec<&str> = harness
        .snapshots()
        .iter()
        .filter(|s| !s.prefix.is_empty())
        .map(|s| s.prefix.as_str())
        .collect();
    assert_eq!(prefixes, vec!["é", "é→"]);
}

#[test]
fn engine_cancel_is_idempotent_and_drops_tokens() {
    let mut engine = RevealEngine::new();
    let mut wheel = TimerWheel::<4>::new();
    let mut flag = ChangeFlag::default();

    let event = engine.start(
        &["abc"],
        config(10, 0, 0, false),
        ScriptSlot { index: 0, count: 1 },
        0,
        &mut wheel,
        &mut flag,
    );
    assert_eq!(event, EngineEvent::Advanced);
    assert!(engine.is_pending());

    engine.cancel();
    engine.cancel();
    assert!(!engine.is_pending());

    let token = wheel.pop_due(10).expect("queued token");
    let event = engine.on_timer(token, 10, &mut wheel, &mut flag);
    assert_eq!(event, EngineEvent::Stale);
    assert!(!flag.changed);
    assert_eq!(engine.state().char_index, 0);
}

#[test]
fn engine_counts_revealed_chars() {
    let mut engine = RevealEngine::new();
    let mut wheel = TimerWheel::<4>::new();

    engine.start(
        &["abc", "de"],
        config(10, 0, 0, false),
        ScriptSlot { index: 0, count: 1 },
        0,
        &mut wheel,
        &mut NoopObserver,
    );
    for now_ms in 0..=200 {
        while let Some(token) = wheel.pop_due(now_ms) {
            engine.on_timer(token, now_ms, &mut wheel, &mut NoopObserver);
        }
    }

    assert!(engine.is_finished());
    assert_eq!(engine.drain_revealed_chars(), 5);
    assert_eq!(engine.drain_revealed_chars(), 0);
}
