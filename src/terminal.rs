use std::io::{self, Write};

use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use tracing::warn;

/// Raw mode, alternate screen and mouse capture for the lifetime of the guard.
///
/// Dropping the guard puts the terminal back, so a failure anywhere after
/// `enter` still hands the user a usable shell.
pub struct TerminalGuard<W: Write> {
    out: W,
    raw_mode: bool,
    restored: bool,
}

impl<W: Write> TerminalGuard<W> {
    pub fn enter(out: W) -> io::Result<Self> {
        enable_raw_mode()?;
        let mut guard = Self {
            out,
            raw_mode: true,
            restored: false,
        };
        execute!(guard.out, EnterAlternateScreen, EnableMouseCapture)?;
        Ok(guard)
    }

    /// Restores the terminal now. Later calls and the drop are no-ops.
    pub fn restore(&mut self) -> io::Result<()> {
        if self.restored {
            return Ok(());
        }
        self.restored = true;

        if self.raw_mode {
            disable_raw_mode()?;
        }
        execute!(self.out, LeaveAlternateScreen, DisableMouseCapture, Show)
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        if let Err(e) = self.restore() {
            warn!(error = %e, "terminal restore failed");
        }
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    const LEAVE_ALTERNATE: &str = "\x1b[?1049l";
    const MOUSE_OFF: &str = "\x1b[?1000l";

    fn guard(out: &mut Vec<u8>) -> TerminalGuard<&mut Vec<u8>> {
        // raw mode needs a tty; the escape sequences do not
        TerminalGuard {
            out,
            raw_mode: false,
            restored: false,
        }
    }

    #[test]
    fn drop_restores_the_screen() {
        let mut out = Vec::new();
        drop(guard(&mut out));

        let written = String::from_utf8(out).unwrap();
        assert!(written.contains(LEAVE_ALTERNATE));
        assert!(written.contains(MOUSE_OFF));
    }

    #[test]
    fn early_exit_still_restores() {
        fn failing_setup(out: &mut Vec<u8>) -> io::Result<()> {
            let _guard = guard(out);
            Err(io::Error::new(io::ErrorKind::Other, "backend failed"))
        }

        let mut out = Vec::new();
        assert!(failing_setup(&mut out).is_err());
        assert!(String::from_utf8(out).unwrap().contains(LEAVE_ALTERNATE));
    }

    #[test]
    fn restore_runs_once() {
        let mut out = Vec::new();
        {
            let mut g = guard(&mut out);
            g.restore().unwrap();
        }

        let written = String::from_utf8(out).unwrap();
        assert_eq!(written.matches(LEAVE_ALTERNATE).count(), 1);
    }
}
