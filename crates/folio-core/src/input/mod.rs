//! Input abstraction layer.

mod mock;

pub use mock::MockInput;

use crate::content::Section;

/// Host events consumed by the portfolio app.
///
/// Section changes double as the mount signal for the code panel; terminal
/// events open and close the boot overlay.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InputEvent {
    NextSection,
    PrevSection,
    ShowSection(Section),
    OpenTerminal,
    CloseTerminal,
    ToggleTerminal,
    ToggleTheme,
    Quit,
}

/// Polled input provider.
pub trait InputProvider {
    type Error;

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error>;
}
