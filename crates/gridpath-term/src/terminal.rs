//! Crossterm output for [`Scene`]s.

use std::io::{self, Stdout, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    queue,
    style::{Color as CtColor, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, ClearType},
};

use crate::scene::Scene;
use crate::style::{Color, tile_glyph};

/// Maps a [`Color`] to a [`crossterm::style::Color`].
fn to_ct_color(c: Color) -> CtColor {
    if c == Color::DEFAULT {
        CtColor::Reset
    } else {
        CtColor::Rgb {
            r: c.r(),
            g: c.g(),
            b: c.b(),
        }
    }
}

/// Keys the demo reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Skip the current animation.
    Skip,
    /// Leave the program.
    Quit,
    /// Any other key.
    Other,
}

fn to_key(code: KeyCode) -> Key {
    match code {
        KeyCode::Char('q') | KeyCode::Esc => Key::Quit,
        KeyCode::Char(' ') | KeyCode::Enter | KeyCode::Char('s') => Key::Skip,
        _ => Key::Other,
    }
}

/// A full-screen terminal session.
///
/// [`open`](Self::open) switches to the alternate screen in raw mode;
/// [`close`](Self::close), also run on drop, restores the terminal.
pub struct Terminal {
    out: Stdout,
    active: bool,
}

impl Terminal {
    /// Enter raw mode and the alternate screen.
    pub fn open() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut out = io::stdout();
        queue!(
            out,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            SetBackgroundColor(to_ct_color(Color::BACKGROUND)),
            terminal::Clear(ClearType::All)
        )?;
        out.flush()?;
        Ok(Self { out, active: true })
    }

    /// Draw `scene` with its top-left corner at `(x, y)`. Each cell takes
    /// two columns so that cells look roughly square.
    pub fn draw_scene(&mut self, scene: &Scene<'_>, x: u16, y: u16) -> io::Result<()> {
        queue!(self.out, SetBackgroundColor(to_ct_color(Color::BACKGROUND)))?;
        for r in 0..scene.grid().rows() {
            queue!(self.out, cursor::MoveTo(x, offset(y, r)?))?;
            for tile in scene.row(r) {
                let (ch, fg) = tile_glyph(tile);
                queue!(self.out, SetForegroundColor(to_ct_color(fg)), Print(ch), Print(' '))?;
            }
        }
        self.out.flush()
    }

    /// Draw lines of text starting at `(x, y)`, each in its own colour.
    pub fn draw_text(&mut self, x: u16, y: u16, lines: &[(String, Color)]) -> io::Result<()> {
        for (i, (text, color)) in lines.iter().enumerate() {
            queue!(
                self.out,
                cursor::MoveTo(x, offset(y, i)?),
                terminal::Clear(ClearType::UntilNewLine),
                SetForegroundColor(to_ct_color(*color)),
                Print(text)
            )?;
        }
        self.out.flush()
    }

    /// Return a pending key press without blocking.
    pub fn poll_key(&mut self) -> io::Result<Option<Key>> {
        while event::poll(Duration::ZERO)? {
            if let Some(key) = read_key()? {
                return Ok(Some(key));
            }
        }
        Ok(None)
    }

    /// Block until a key is pressed.
    pub fn wait_key(&mut self) -> io::Result<Key> {
        loop {
            if let Some(key) = read_key()? {
                return Ok(key);
            }
        }
    }

    /// Restore the terminal. Safe to call more than once.
    pub fn close(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;
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

/// `base + n` as a terminal coordinate.
pub fn offset(base: u16, n: usize) -> io::Result<u16> {
    u16::try_from(n)
        .ok()
        .and_then(|n| base.checked_add(n))
        .ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("coordinate {base} + {n} does not fit the terminal"),
            )
        })
}

fn read_key() -> io::Result<Option<Key>> {
    match event::read()? {
        Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) => Ok(Some(to_key(code))),
        _ => Ok(None),
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        self.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_rejects_overflow() {
        assert_eq!(offset(3, 4).unwrap(), 7);
        assert_eq!(offset(0, u16::MAX as usize).unwrap(), u16::MAX);
        assert!(offset(1, u16::MAX as usize).is_err());
        assert!(offset(0, usize::MAX).is_err());
    }

    #[test]
    fn default_color_maps_to_reset() {
        assert_eq!(to_ct_color(Color::DEFAULT), CtColor::Reset);
        assert_eq!(
            to_ct_color(Color::from_rgb(1, 2, 3)),
            CtColor::Rgb { r: 1, g: 2, b: 3 }
        );
    }

    #[test]
    fn key_mapping() {
        assert_eq!(to_key(KeyCode::Char('q')), Key::Quit);
        assert_eq!(to_key(KeyCode::Esc), Key::Quit);
        assert_eq!(to_key(KeyCode::Enter), Key::Skip);
        assert_eq!(to_key(KeyCode::Char('x')), Key::Other);
    }
}
