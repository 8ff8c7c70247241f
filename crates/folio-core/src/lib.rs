#![cfg_attr(not(test), no_std)]

//! Portable core for the folio portfolio surface.
//!
//! Everything with timing or state lives here: the typewriter reveal engine,
//! the script sequencer, the two presentation adapters and the application
//! state machine that drives them. Hosts feed input events and a millisecond
//! clock through [`app::PortfolioApp::tick`] and draw the [`render::Screen`]
//! handed out by [`app::PortfolioApp::with_screen`].

pub mod app;
pub mod content;
pub mod input;
pub mod render;
pub mod reveal;
pub mod text_policy;
