impl<IN> PortfolioApp<IN>
where
    IN: InputProvider,
{
    fn process_inputs(&mut self, now_ms: u64) {
        loop {
            match self.input.poll_event() {
                Ok(Some(event)) => self.apply_input_event(event, now_ms),
                Ok(None) => break,
                Err(_) => {
                    warn!("input provider failed; skipping remaining events this tick");
                    break;
                }
            }
        }
    }

    fn apply_input_event(&mut self, event: InputEvent, now_ms: u64) {
        debug!("input: {:?}", event);

        match event {
            InputEvent::NextSection => {
                self.show_section(self.section.next(), AnimationKind::SlideLeft, now_ms)
            }
            InputEvent::PrevSection => {
                self.show_section(self.section.previous(), AnimationKind::SlideRight, now_ms)
            }
            InputEvent::ShowSection(section) => {
                self.show_section(section, AnimationKind::Fade, now_ms)
            }
            InputEvent::OpenTerminal => self.open_terminal(now_ms),
            InputEvent::CloseTerminal => self.close_terminal(),
            InputEvent::ToggleTerminal => {
                if self.terminal.is_open() {
                    self.close_terminal();
                } else {
                    self.open_terminal(now_ms);
                }
            }
            InputEvent::ToggleTheme => {
                self.style.dark = !self.style.dark;
                self.pending_redraw = true;
            }
            InputEvent::Quit => {
                info!("portfolio: quit requested");
                self.quit = true;
            }
        }
    }

    fn show_section(&mut self, target: Section, kind: AnimationKind, now_ms: u64) {
        if target == self.section {
            return;
        }

        // The code panel lives inside the about section: leaving it unmounts
        // the panel and returning mounts a fresh one.
        if target.shows_code_panel() {
            self.code_panel.mount(now_ms);
        } else {
            self.code_panel.unmount();
        }

        self.section = target;
        self.start_transition(kind, now_ms, ANIM_SECTION_MS);
        self.pending_redraw = true;
    }

    fn open_terminal(&mut self, now_ms: u64) {
        if self.terminal.open(now_ms) {
            self.start_transition(AnimationKind::Fade, now_ms, ANIM_OVERLAY_MS);
            self.pending_redraw = true;
        }
    }

    fn close_terminal(&mut self) {
        if self.terminal.close() {
            self.pending_redraw = true;
        }
    }
}
