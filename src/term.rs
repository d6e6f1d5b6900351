//! Crossterm terminal backend
//!
//! Owns the terminal for the lifetime of one [`TermCanvas`]: raw mode,
//! alternate screen and a hidden cursor on entry, everything restored
//! on drop so a panic or an early error still leaves the shell usable.
//! Draw commands are queued into a buffered writer and hit the wire
//! only on present; cursor moves and color changes are elided while
//! consecutive cells continue the current run.
//!
//! Author: Moroya Sakamoto

use std::io::{self, BufWriter, Stdout, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal,
};

use crate::render::{Canvas, DrawCommand, Input, InputSource};

/// Foreground colors for the three normal channels, plus the background
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Channel colors, indexed by `DrawCommand::color - 1`
    pub channels: [Color; 3],
    /// Background color behind every glyph
    pub background: Color,
}

impl Palette {
    /// Build a palette from explicit colors
    pub fn new(channels: [Color; 3], background: Color) -> Self {
        Palette {
            channels,
            background,
        }
    }

    /// One of the numbered presets; the index wraps modulo 5
    ///
    /// 0 is red/green/blue, the classic look. 1 and 3 are the warm
    /// yellow/magenta/cyan set, 2 is blue/green/white, 4 is all white.
    pub fn numbered(index: u8) -> Self {
        let channels = match index % 5 {
            1 | 3 => [Color::Yellow, Color::Magenta, Color::Cyan],
            2 => [Color::Blue, Color::Green, Color::White],
            4 => [Color::White, Color::White, Color::White],
            _ => [Color::Red, Color::Green, Color::Blue],
        };
        Palette {
            channels,
            background: Color::Black,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Palette::numbered(0)
    }
}

/// The live terminal as a [`Canvas`] and [`InputSource`]
pub struct TermCanvas {
    out: BufWriter<Stdout>,
    palette: Palette,
    // Cache of where the terminal cursor is and which color is active,
    // so runs of adjacent same-color cells become bare glyph writes
    cursor: Option<(u16, u16)>,
    color: Option<u8>,
}

impl TermCanvas {
    /// Take over the terminal: raw mode, alternate screen, hidden cursor
    pub fn new(palette: Palette) -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut out = BufWriter::new(io::stdout());
        if let Err(e) = queue!(
            out,
            terminal::EnterAlternateScreen,
            terminal::Clear(terminal::ClearType::All),
            cursor::Hide,
        )
        .and_then(|_| out.flush())
        {
            let _ = terminal::disable_raw_mode();
            return Err(e);
        }
        Ok(TermCanvas {
            out,
            palette,
            cursor: None,
            color: None,
        })
    }

    fn channel_color(&self, channel: u8) -> Color {
        match channel {
            1..=3 => self.palette.channels[(channel - 1) as usize],
            _ => self.palette.background,
        }
    }
}

impl Canvas for TermCanvas {
    fn size(&self) -> io::Result<(u16, u16)> {
        // crossterm reports (cols, rows); the driver wants (rows, cols)
        let (cols, rows) = terminal::size()?;
        Ok((rows, cols))
    }

    fn draw(&mut self, command: DrawCommand) -> io::Result<()> {
        if self.cursor != Some((command.row, command.col)) {
            queue!(self.out, cursor::MoveTo(command.col, command.row))?;
        }
        if self.color != Some(command.color) {
            let color = self.channel_color(command.color);
            queue!(self.out, SetForegroundColor(color))?;
            self.color = Some(command.color);
        }
        queue!(self.out, Print(command.glyph))?;
        // Printing advances the cursor one cell to the right; the next
        // cell of the scanline needs no explicit move
        self.cursor = Some((command.row, command.col.saturating_add(1)));
        Ok(())
    }

    fn present(&mut self) -> io::Result<()> {
        self.out.flush()?;
        // A resize between frames may have scrolled or reflowed; drop
        // the caches rather than trust them across the flush
        self.cursor = None;
        self.color = None;
        Ok(())
    }
}

impl InputSource for TermCanvas {
    fn poll(&mut self) -> io::Result<Option<Input>> {
        if !event::poll(Duration::ZERO)? {
            return Ok(None);
        }
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                return Ok(None);
            }
            let input = match key.code {
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Input::Quit),
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    Some(Input::Quit)
                }
                KeyCode::Char(' ') => Some(Input::TogglePause),
                _ => None,
            };
            return Ok(input);
        }
        Ok(None)
    }
}

impl Drop for TermCanvas {
    fn drop(&mut self) {
        let _ = queue!(
            self.out,
            ResetColor,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = self.out.flush();
        let _ = terminal::disable_raw_mode();
    }
}
