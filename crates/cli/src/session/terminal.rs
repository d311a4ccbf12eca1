use std::io::{stdout, Write};

use crossterm::cursor::{self, MoveTo};
use crossterm::style::{Attribute, Color, Print, SetAttribute, SetForegroundColor};
use crossterm::terminal::{
    self, disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::{execute, queue};
use hyprsetup_core::error::Result;

use super::view::{LineStyle, View};

/// Light salmon, used for log lines
const LOG_COLOR: Color = Color::Rgb {
    r: 0xFF,
    g: 0xA0,
    b: 0x7A,
};
const PADDING_TOP: u16 = 1;
const PADDING_LEFT: u16 = 2;

/// Full-screen raw mode for the lifetime of the guard.
pub struct RawModeGuard;

impl RawModeGuard {
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be switched to raw mode.
    pub fn enter() -> Result<Self> {
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        // Leaves the alternate screen even if raw mode cannot be enabled
        let guard = RawModeGuard;
        enable_raw_mode()?;
        Ok(guard)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(stdout(), cursor::Show, LeaveAlternateScreen);
    }
}

/// Clears the screen and paints `view`.
///
/// Only the newest rows that fit below the top padding are painted.
///
/// # Errors
///
/// Returns an error if writing to the terminal fails.
pub fn draw(view: &View) -> Result<()> {
    let mut stdout = stdout();
    let (_, height) = terminal::size()?;

    queue!(stdout, Clear(ClearType::All))?;

    let visible = view.visible_lines(usize::from(height.saturating_sub(PADDING_TOP)));
    for (row, line) in (PADDING_TOP..).zip(visible) {
        queue!(stdout, MoveTo(PADDING_LEFT, row))?;

        match line.style {
            LineStyle::Title | LineStyle::SelectedMenuEntry => {
                queue!(stdout, SetAttribute(Attribute::Bold))?;
            }
            LineStyle::Log => queue!(stdout, SetForegroundColor(LOG_COLOR))?,
            LineStyle::Progress => queue!(stdout, SetForegroundColor(Color::Yellow))?,
            LineStyle::Notice => queue!(stdout, SetForegroundColor(Color::DarkGrey))?,
            LineStyle::MenuEntry | LineStyle::Plain => {}
        }

        queue!(
            stdout,
            Print(&line.text),
            SetAttribute(Attribute::Reset)
        )?;
    }

    stdout.flush()?;
    Ok(())
}

/// Writes `view` as plain text to the normal screen.
///
/// Call after the [`RawModeGuard`] is dropped.
///
/// # Errors
///
/// Returns an error if writing to stdout fails.
pub fn print_plain(view: &View) -> Result<()> {
    let mut stdout = stdout();
    writeln!(stdout, "{}", view.to_plain_text())?;
    stdout.flush()?;
    Ok(())
}
