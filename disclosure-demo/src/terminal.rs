use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    queue,
    style::Print,
    terminal::{self, ClearType},
};
use viewdom::Element;
use viewdom::text::{display_width, render_lines};

/// Raw-mode, alternate-screen terminal that draws an element tree as text.
pub struct Terminal {
    stdout: io::Stdout,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        let mut stdout = io::stdout();

        terminal::enable_raw_mode()?;
        crossterm::execute!(stdout, terminal::EnterAlternateScreen, cursor::Hide)?;

        Ok(Self { stdout })
    }

    pub fn render(&mut self, root: &Element) -> io::Result<()> {
        let (width, height) = terminal::size()?;

        queue!(self.stdout, terminal::Clear(ClearType::All))?;
        for (y, line) in render_lines(root).iter().take(height as usize).enumerate() {
            queue!(self.stdout, cursor::MoveTo(0, y as u16))?;
            if display_width(line) > width as usize {
                log::debug!("line {y} wider than terminal ({width} cells)");
            }
            queue!(self.stdout, Print(line))?;
        }
        self.stdout.flush()
    }

    /// Block up to `timeout` for the next key press.
    pub fn next_key(&self, timeout: Duration) -> io::Result<Option<KeyCode>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }

        match event::read()? {
            Event::Key(KeyEvent {
                code,
                kind: KeyEventKind::Press,
                ..
            }) => Ok(Some(code)),
            _ => Ok(None),
        }
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = crossterm::execute!(self.stdout, cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}
