impl<IN> PortfolioApp<IN>
where
    IN: InputProvider,
{
    pub fn new(input: IN, config: AppConfig, now_ms: u64) -> Self {
        let mut code_panel = SnippetPanel::new(config.snippet);
        if config.start_section.shows_code_panel() {
            code_panel.mount(now_ms);
        }

        info!(
            "portfolio: start section={} dark={}",
            config.start_section.label(),
            config.style.dark
        );

        Self {
            input,
            section: config.start_section,
            style: config.style,
            code_panel,
            terminal: BootTerminal::new(config.boot),
            pending_redraw: true,
            transition: None,
            last_blink_slot: None,
            quit: false,
        }
    }

    pub fn tick(&mut self, now_ms: u64) -> TickResult {
        self.process_inputs(now_ms);

        let panel_changed = self.code_panel.pump(now_ms);
        let terminal_changed = self.terminal.pump(now_ms);
        let blink_changed = self.track_blink(now_ms);

        let rendered = if self.pending_redraw || panel_changed || terminal_changed || blink_changed
        {
            self.pending_redraw = false;
            TickResult::RenderRequested
        } else {
            TickResult::NoRender
        };

        if self.transition_frame(now_ms).is_some() {
            TickResult::RenderRequested
        } else {
            self.transition = None;
            rendered
        }
    }

    pub fn with_screen<F>(&self, now_ms: u64, f: F)
    where
        F: FnOnce(Screen<'_>),
    {
        let code_panel = self
            .code_panel
            .is_mounted()
            .then(|| self.code_panel.view(now_ms));
        let terminal = self
            .terminal
            .is_open()
            .then(|| self.terminal.view(now_ms));

        f(Screen {
            owner: SITE_OWNER,
            section: self.section,
            sections: &Section::ALL,
            style: self.style,
            code_panel,
            terminal,
            animation: self.transition_frame(now_ms),
        });
    }

    pub fn section(&self) -> Section {
        self.section
    }

    pub fn style(&self) -> VisualStyle {
        self.style
    }

    pub fn terminal_open(&self) -> bool {
        self.terminal.is_open()
    }

    pub fn code_panel_mounted(&self) -> bool {
        self.code_panel.is_mounted()
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    pub fn input_mut(&mut self) -> &mut IN {
        &mut self.input
    }

    /// Earliest time at which `tick` has work to do, if any is scheduled.
    pub fn next_deadline(&self, now_ms: u64) -> Option<u64> {
        let blink = self
            .cursor_visible()
            .then(|| (cursor_blink_slot(now_ms) + 1) * CURSOR_BLINK_HALF_MS);
        let transition = self
            .transition
            .map(|spec| spec.start_ms + spec.duration_ms as u64);

        [
            self.code_panel.next_due(),
            self.terminal.next_due(),
            blink,
            transition,
        ]
        .into_iter()
        .flatten()
        .min()
    }

    /// Characters revealed by both surfaces since the previous call.
    pub fn drain_revealed_chars(&mut self) -> u32 {
        self.code_panel
            .drain_revealed_chars()
            .saturating_add(self.terminal.drain_revealed_chars())
    }

    fn cursor_visible(&self) -> bool {
        let panel = self.code_panel.is_mounted() && !self.code_panel.is_finished();
        let terminal = self.terminal.is_open() && !self.terminal.is_finished();
        panel || terminal
    }

    fn transition_frame(&self, now_ms: u64) -> Option<AnimationFrame> {
        self.transition.and_then(|spec| spec.frame(now_ms))
    }

    fn start_transition(&mut self, kind: AnimationKind, now_ms: u64, duration_ms: u16) {
        self.transition = Some(AnimationSpec::new(kind, now_ms, duration_ms));
    }
}
