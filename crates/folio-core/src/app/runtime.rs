impl<IN> PortfolioApp<IN>
where
    IN: InputProvider,
{
    /// `true` when the cursor blink phase flipped since the last tick.
    fn track_blink(&mut self, now_ms: u64) -> bool {
        if !self.cursor_visible() {
            self.last_blink_slot = None;
            return false;
        }

        let slot = cursor_blink_slot(now_ms);
        if self.last_blink_slot == Some(slot) {
            return false;
        }

        self.last_blink_slot = Some(slot);
        true
    }
}
