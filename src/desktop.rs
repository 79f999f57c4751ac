//! Operating-system side effects: browser, terminal.

use crossterm::{cursor, execute, terminal};
use std::process::{Command, Stdio};
use tracing::{debug, warn};

/// Desktop actions the assistant can take.
///
/// Everything here is fire-and-forget: failures are logged, never surfaced.
pub trait Desktop: Send {
    /// Open `url` in the default browser.
    fn open_url(&mut self, url: &str);

    /// Clear the terminal and move the cursor home.
    fn clear_screen(&mut self);

    /// Terminal width in columns, if stdout is a terminal.
    fn terminal_width(&self) -> Option<usize>;
}

/// The real desktop.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemDesktop;

/// Program and leading arguments that open a URL on this platform.
fn opener() -> (&'static str, &'static [&'static str]) {
    if cfg!(target_os = "macos") {
        ("open", &[])
    } else if cfg!(windows) {
        // `start` treats the first quoted argument as a window title.
        ("cmd", &["/C", "start", ""])
    } else {
        ("xdg-open", &[])
    }
}

impl Desktop for SystemDesktop {
    fn open_url(&mut self, url: &str) {
        let (program, args) = opener();
        let spawned = Command::new(program)
            .args(args)
            .arg(url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();
        match spawned {
            Ok(mut child) => {
                debug!("opened {url} with {program} (pid {})", child.id());
                // Reap the opener without blocking the caller.
                std::thread::spawn(move || {
                    let _ = child.wait();
                });
            }
            Err(e) => warn!("failed to open {url} with {program}: {e}"),
        }
    }

    fn clear_screen(&mut self) {
        let mut stdout = std::io::stdout();
        if let Err(e) = execute!(
            stdout,
            terminal::Clear(terminal::ClearType::All),
            cursor::MoveTo(0, 0)
        ) {
            warn!("failed to clear screen: {e}");
        }
    }

    fn terminal_width(&self) -> Option<usize> {
        terminal::size()
            .ok()
            .map(|(cols, _)| usize::from(cols))
            .filter(|&cols| cols > 0)
    }
}
