//! Typewriter reveal: engine, sequencer and the timer queue they run on.

pub mod engine;
pub mod sequencer;
pub mod state;
pub mod timer;

pub use engine::{EngineEvent, RevealEngine};
pub use sequencer::Sequencer;
pub use state::{
    ChangeFlag, NoopObserver, RevealObserver, RevealState, RevealView, Script, ScriptSlot,
    TimingConfig,
};
pub use timer::{TimerQueue, TimerToken, TimerWheel};

#[cfg(test)]
mod tests;
