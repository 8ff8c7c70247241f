use core::fmt::Write as _;
use std::io::{self, Stdout, Write};

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    execute, queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use folio_core::{
    render::{AnimationKind, PanelView, Screen, VisualStyle},
    text_policy::{char_count, char_prefix, char_tail},
};
use heapless::String as HeaplessString;

const CURSOR_GLYPH: char = '▌';
const PANEL_MAX_WIDTH: u16 = 72;
const OVERLAY_MAX_WIDTH: u16 = 96;
const OVERLAY_MAX_HEIGHT: u16 = 24;
const HEADER_BYTES: usize = 160;
const KEY_HINTS: &str = "←/→ sections  1-7 jump  t terminal  esc close  d theme  q quit";

#[derive(Clone, Copy)]
struct Palette {
    accent: Color,
    text: Color,
    muted: Color,
    code: Color,
    cursor: Color,
}

impl Palette {
    const fn for_style(style: VisualStyle) -> Self {
        if style.dark {
            Self {
                accent: Color::Cyan,
                text: Color::White,
                muted: Color::DarkGrey,
                code: Color::Green,
                cursor: Color::Cyan,
            }
        } else {
            Self {
                accent: Color::Blue,
                text: Color::Black,
                muted: Color::Grey,
                code: Color::DarkGrey,
                cursor: Color::Blue,
            }
        }
    }
}

#[derive(Clone, Copy)]
struct Rect {
    x: u16,
    y: u16,
    width: u16,
    height: u16,
}

/// Alternate-screen renderer. Restores the terminal when dropped.
pub(super) struct TerminalScreen {
    out: Stdout,
    active: bool,
}

impl TerminalScreen {
    pub(super) fn enter() -> io::Result<Self> {
        let mut out = io::stdout();
        terminal::enable_raw_mode()?;
        execute!(out, EnterAlternateScreen, Hide)?;
        Ok(Self { out, active: true })
    }

    pub(super) fn leave(&mut self) -> io::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        execute!(self.out, ResetColor, Show, LeaveAlternateScreen)?;
        terminal::disable_raw_mode()
    }

    pub(super) fn draw(&mut self, screen: Screen<'_>) -> io::Result<()> {
        let (cols, rows) = terminal::size()?;
        let palette = Palette::for_style(screen.style);

        queue!(self.out, ResetColor, Clear(ClearType::All))?;
        self.draw_header(&screen, palette, cols)?;

        let slide = slide_offset(&screen);
        queue!(
            self.out,
            MoveTo(2 + slide, 3),
            SetForegroundColor(palette.text),
            Print(char_prefix(
                screen.section.blurb(),
                cols.saturating_sub(4 + slide) as usize
            ))
        )?;

        if let Some(panel) = screen.code_panel {
            let width = cols.saturating_sub(4).min(PANEL_MAX_WIDTH);
            let height = rows.saturating_sub(8).min(14);
            let area = Rect {
                x: 2 + slide,
                y: 5,
                width: width.saturating_sub(slide),
                height,
            };
            self.draw_panel(panel, area, palette, palette.code)?;
        }

        if let Some(panel) = screen.terminal {
            let width = cols.saturating_sub(4).min(OVERLAY_MAX_WIDTH);
            let height = rows.saturating_sub(4).min(OVERLAY_MAX_HEIGHT);
            let area = Rect {
                x: cols.saturating_sub(width) / 2,
                y: rows.saturating_sub(height) / 2,
                width,
                height,
            };
            let fading = matches!(
                screen.animation,
                Some(frame) if frame.kind == AnimationKind::Fade && frame.progress_pct < 50
            );
            let text = if fading { palette.muted } else { Color::Green };
            self.clear_rect(area)?;
            self.draw_panel(panel, area, palette, text)?;
        }

        queue!(
            self.out,
            MoveTo(2, rows.saturating_sub(1)),
            SetForegroundColor(palette.muted),
            Print(char_prefix(KEY_HINTS, cols.saturating_sub(4) as usize)),
            ResetColor
        )?;

        self.out.flush()
    }

    fn draw_header(&mut self, screen: &Screen<'_>, palette: Palette, cols: u16) -> io::Result<()> {
        queue!(
            self.out,
            MoveTo(2, 1),
            SetForegroundColor(palette.accent),
            SetAttribute(Attribute::Bold),
            Print(screen.owner),
            SetAttribute(Attribute::Reset)
        )?;

        let mut nav = HeaplessString::<HEADER_BYTES>::new();
        for section in screen.sections {
            let marker = if *section == screen.section { '*' } else { ' ' };
            if write!(nav, " {}{}", marker, section.label()).is_err() {
                break;
            }
        }

        let start = 4 + char_count(screen.owner) as u16;
        queue!(
            self.out,
            MoveTo(start, 1),
            SetForegroundColor(palette.text),
            Print(char_prefix(&nav, cols.saturating_sub(start) as usize))
        )
    }

    fn draw_panel(
        &mut self,
        panel: PanelView<'_>,
        area: Rect,
        palette: Palette,
        text: Color,
    ) -> io::Result<()> {
        if area.width < 4 || area.height < 3 {
            return Ok(());
        }

        let inner_width = (area.width - 2) as usize;
        let inner_height = (area.height - 2) as usize;
        let horizontal: String = "─".repeat(inner_width);

        queue!(
            self.out,
            SetForegroundColor(palette.muted),
            MoveTo(area.x, area.y),
            Print(format!("┌{horizontal}┐")),
            MoveTo(area.x + 2, area.y),
            SetForegroundColor(palette.accent),
            Print(char_prefix(panel.title, inner_width.saturating_sub(2))),
            SetForegroundColor(palette.muted),
            MoveTo(area.x, area.y + area.height - 1),
            Print(format!("└{horizontal}┘"))
        )?;

        // Committed lines plus the line in progress, scrolled to the bottom.
        let reveal = panel.reveal;
        let show_active = !reveal.script_done;
        let total = reveal.lines.len() + usize::from(show_active);
        let skip = total.saturating_sub(inner_height);

        for row in 0..inner_height {
            let y = area.y + 1 + row as u16;
            queue!(
                self.out,
                SetForegroundColor(palette.muted),
                MoveTo(area.x, y),
                Print('│'),
                MoveTo(area.x + area.width - 1, y),
                Print('│')
            )?;

            let index = skip + row;
            let (content, is_active) = match reveal.lines.get(index) {
                Some(line) => (*line, false),
                None if show_active && index == reveal.lines.len() => (reveal.active_prefix, true),
                None => continue,
            };

            // Long lines keep their newest characters in view while typing.
            let budget = inner_width.saturating_sub(2);
            let visible = if is_active {
                char_tail(content, budget)
            } else {
                char_prefix(content, budget)
            };
            queue!(
                self.out,
                MoveTo(area.x + 1, y),
                SetForegroundColor(text),
                Print(visible)
            )?;
            if is_active && panel.cursor_on {
                queue!(self.out, SetForegroundColor(palette.cursor), Print(CURSOR_GLYPH))?;
            }
        }

        if reveal.script_done && panel.cursor_on && reveal.lines.len() < inner_height {
            let y = area.y + 1 + (reveal.lines.len() - skip) as u16;
            queue!(
                self.out,
                MoveTo(area.x + 1, y),
                SetForegroundColor(palette.cursor),
                Print(CURSOR_GLYPH)
            )?;
        }

        queue!(self.out, ResetColor)
    }

    fn clear_rect(&mut self, area: Rect) -> io::Result<()> {
        let blank = " ".repeat(area.width as usize);
        for row in 0..area.height {
            queue!(self.out, MoveTo(area.x, area.y + row), Print(&blank))?;
        }
        Ok(())
    }
}

impl Drop for TerminalScreen {
    fn drop(&mut self) {
        let _ = self.leave();
    }
}

fn slide_offset(screen: &Screen<'_>) -> u16 {
    match screen.animation {
        Some(frame) if matches!(frame.kind, AnimationKind::SlideLeft | AnimationKind::SlideRight) => {
            (100u16.saturating_sub(frame.progress_pct as u16)) / 10
        }
        _ => 0,
    }
}
