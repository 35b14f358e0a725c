//! Full-screen terminal surface and keyboard input for the countdown.

use std::io::{self, Stdout};
use std::thread;

use anyhow::{Context, Result, bail};
use countdown_engine::{Key, RenderSurface};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use is_terminal::IsTerminal;
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};
use tokio::sync::mpsc::UnboundedSender;
use tracing::debug;

/// Render surface backed by the real terminal.
///
/// Opening it takes over the screen (raw mode, alternate screen, hidden
/// cursor). `close` hands the terminal back; dropping an unclosed surface does
/// the same so an early return never leaves the shell in raw mode.
pub struct TerminalSurface {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    closed: bool,
}

impl TerminalSurface {
    pub fn open() -> Result<Self> {
        if !io::stdout().is_terminal() {
            bail!("stdout is not a terminal");
        }

        enable_raw_mode().context("Failed to enable raw mode")?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen, cursor::Hide) {
            let _ = disable_raw_mode();
            return Err(e).context("Failed to enter alternate screen");
        }

        let terminal = match Terminal::new(CrosstermBackend::new(io::stdout())) {
            Ok(terminal) => terminal,
            Err(e) => {
                let _ = restore();
                return Err(e).context("Failed to initialize terminal");
            }
        };

        debug!("terminal initialized");
        Ok(Self {
            terminal,
            closed: false,
        })
    }
}

impl RenderSurface for TerminalSurface {
    fn size(&mut self) -> io::Result<(u16, u16)> {
        let size = self.terminal.size()?;
        Ok((size.width, size.height))
    }

    fn clear(&mut self) -> io::Result<()> {
        self.terminal.autoresize()?;
        self.terminal.current_buffer_mut().reset();
        Ok(())
    }

    fn paint(&mut self, glyph: char, x: i32, y: i32) {
        let (Ok(x), Ok(y)) = (u16::try_from(x), u16::try_from(y)) else {
            return;
        };
        if let Some(cell) = self.terminal.current_buffer_mut().cell_mut((x, y)) {
            cell.set_char(glyph);
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        self.terminal.flush()?;
        self.terminal.swap_buffers();
        self.terminal.backend_mut().flush()
    }

    fn close(&mut self) -> io::Result<()> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;
        debug!("restoring terminal");
        restore()
    }
}

impl Drop for TerminalSurface {
    fn drop(&mut self) {
        if !self.closed {
            let _ = restore();
        }
    }
}

fn restore() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, cursor::Show)
}

/// Hand the terminal back and exit if SIGINT arrives from outside the session.
///
/// Raw mode delivers Ctrl-C as a key press, so this only fires for signals sent
/// by other processes.
pub fn install_interrupt_handler() -> Result<()> {
    ctrlc::set_handler(|| {
        let _ = restore();
        std::process::exit(1);
    })
    .context("Failed to install interrupt handler")
}

/// Start a background thread that forwards key presses to `tx`.
///
/// The thread is never joined: it blocks on the terminal until the process
/// exits, or stops early once the receiver is gone or input fails.
pub fn spawn_input_reader(tx: UnboundedSender<Key>) -> Result<()> {
    thread::Builder::new()
        .name("countdown-input".to_string())
        .spawn(move || forward_keys(event::read, &tx))
        .context("Failed to spawn input thread")?;
    Ok(())
}

/// Pump events from `read` into `tx` until the receiver is gone or reading fails.
///
/// Runs while the clock owns the screen, so nothing here logs above `debug`:
/// stderr output would be drawn over the clock.
fn forward_keys<R>(mut read: R, tx: &UnboundedSender<Key>)
where
    R: FnMut() -> io::Result<Event>,
{
    loop {
        match read() {
            Ok(Event::Key(key_event)) => {
                let Some(key) = map_key(key_event) else {
                    continue;
                };
                if tx.send(key).is_err() {
                    debug!("input receiver gone");
                    break;
                }
            }
            Ok(_) => {}
            Err(e) => {
                debug!(error = %e, "terminal input failed");
                break;
            }
        }
    }
}

/// Translate a crossterm key event. Releases and repeats are dropped.
pub fn map_key(event: KeyEvent) -> Option<Key> {
    if event.kind != KeyEventKind::Press {
        return None;
    }

    let key = match event.code {
        KeyCode::Esc => Key::Esc,
        KeyCode::Char('c' | 'C') if event.modifiers.contains(KeyModifiers::CONTROL) => Key::CtrlC,
        KeyCode::Char(c) => Key::Char(c),
        _ => Key::Other,
    };
    Some(key)
}
