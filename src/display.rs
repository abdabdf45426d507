//! Display surfaces that reveal sessions and list commands render onto.

use std::io::Write;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

/// Receives progressive text updates from a reveal session
///
/// `render` is called with the full revealed prefix after every appended
/// character; `clear` is called once when a session takes over the surface.
#[async_trait]
pub trait DisplaySurface: Send + Sync {
    /// Wipes the surface before a new reveal starts.
    async fn clear(&self);

    /// Presents the currently revealed prefix.
    async fn render(&self, text: &str);
}

/// Renders reveals as typewriter output on stdout.
///
/// `render` receives the whole revealed prefix, but only the suffix appended
/// since the previous call is written and flushed, so the output reads as
/// characters arriving one at a time.
pub struct TerminalSurface {
    /// Characters already written for the current session.
    written: Mutex<usize>,
}

impl TerminalSurface {
    pub fn new() -> Self {
        Self {
            written: Mutex::new(0),
        }
    }
}

impl Default for TerminalSurface {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DisplaySurface for TerminalSurface {
    async fn clear(&self) {
        let mut written = self.written.lock().unwrap();
        if *written > 0 {
            // Terminal output is append-only; a superseded reveal stays on
            // screen and the new one starts on a fresh line.
            println!();
        }
        *written = 0;
    }

    async fn render(&self, text: &str) {
        let mut written = self.written.lock().unwrap();
        let suffix = unwritten_suffix(text, *written);
        *written = text.chars().count();
        drop(written);

        print!("{suffix}");
        std::io::stdout().flush().ok();
    }
}

/// Returns the part of `text` past the first `written` characters.
fn unwritten_suffix(text: &str, written: usize) -> String {
    text.chars().skip(written).collect()
}

/// Prints rows one at a time with a fixed delay between them, giving lists
/// a staggered entrance.
pub async fn print_staggered(rows: &[String], delay: Duration) {
    for (index, row) in rows.iter().enumerate() {
        if index > 0 {
            tokio::time::sleep(delay).await;
        }
        println!("{row}");
    }
}
