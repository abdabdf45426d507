//! Character-by-character text reveal with cooperative cancellation.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::task::JoinHandle;

use crate::display::DisplaySurface;

/// Default pacing between revealed characters.
pub const DEFAULT_CHAR_DELAY: Duration = Duration::from_millis(20);

/// Lifecycle of the most recent reveal session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealPhase {
    /// No reveal has been requested yet.
    Idle,
    /// A session is currently appending characters.
    Revealing,
    /// The running session was cut short by [`RevealController::interrupt`].
    Superseded,
    /// The session revealed its full text.
    Completed,
}

struct RevealState {
    /// Token of the session that owns the surface. Strictly increasing.
    epoch: u64,
    /// Text revealed so far by the owning session.
    buffer: String,
    phase: RevealPhase,
}

/// Drives the progressive reveal of a string onto a display surface.
///
/// Each call to [`RevealController::reveal`] starts a new session under a
/// token strictly greater than every previous one. The reveal loop re-checks
/// that token at every resumption, so starting a new session is also how an
/// old one is cancelled: the superseded loop notices the newer token at its
/// next wake-up and stops silently. Characters already on the surface are
/// never retracted; the old session simply appends no more.
///
/// A controller owns exactly one surface. Independent surfaces get their own
/// controller instances; there is no process-wide state.
#[derive(Clone)]
pub struct RevealController {
    surface: Arc<dyn DisplaySurface>,
    state: Arc<Mutex<RevealState>>,
    /// Serializes surface calls so a superseded session can never paint
    /// after its successor's first write.
    gate: Arc<tokio::sync::Mutex<()>>,
    char_delay: Duration,
}

impl RevealController {
    /// Creates a controller with the default character delay.
    pub fn new(surface: Arc<dyn DisplaySurface>) -> Self {
        Self::with_delay(surface, DEFAULT_CHAR_DELAY)
    }

    /// Creates a controller with a custom delay between characters.
    pub fn with_delay(surface: Arc<dyn DisplaySurface>, char_delay: Duration) -> Self {
        Self {
            surface,
            state: Arc::new(Mutex::new(RevealState {
                epoch: 0,
                buffer: String::new(),
                phase: RevealPhase::Idle,
            })),
            gate: Arc::new(tokio::sync::Mutex::new(())),
            char_delay,
        }
    }

    /// Starts revealing `text` at the controller's configured pace.
    ///
    /// Fire-and-forget: the reveal runs as a background task, and any session
    /// still in progress is superseded by this call. The returned handle can
    /// be awaited to observe completion; dropping it does not cancel the
    /// reveal.
    pub fn reveal(&self, text: impl Into<String>) -> JoinHandle<()> {
        self.reveal_paced(text, self.char_delay)
    }

    /// Starts revealing `text` with an explicit per-character delay.
    pub fn reveal_paced(&self, text: impl Into<String>, delay: Duration) -> JoinHandle<()> {
        let text = text.into();
        let token = {
            let mut state = self.state.lock().unwrap();
            state.epoch += 1;
            state.buffer.clear();
            state.phase = RevealPhase::Revealing;
            state.epoch
        };

        let state = Arc::clone(&self.state);
        let surface = Arc::clone(&self.surface);
        let gate = Arc::clone(&self.gate);
        tokio::spawn(run_session(state, surface, gate, token, text, delay))
    }

    /// Cancels the session in progress without starting a new one.
    ///
    /// Used while a fresh request is in flight: the revealed text is wiped
    /// and the running loop stops at its next wake-up. A later
    /// [`RevealController::reveal`] call has the same cancelling effect; this
    /// method exists for the window where the replacement text is not known
    /// yet.
    pub async fn interrupt(&self) {
        let _gate = self.gate.lock().await;
        {
            let mut state = self.state.lock().unwrap();
            state.epoch += 1;
            state.buffer.clear();
            if state.phase == RevealPhase::Revealing {
                state.phase = RevealPhase::Superseded;
            }
        }
        self.surface.clear().await;
    }

    /// Text revealed so far by the current session.
    pub fn displayed(&self) -> String {
        self.state.lock().unwrap().buffer.clone()
    }

    /// Phase of the most recent session.
    pub fn phase(&self) -> RevealPhase {
        self.state.lock().unwrap().phase
    }
}

async fn run_session(
    state: Arc<Mutex<RevealState>>,
    surface: Arc<dyn DisplaySurface>,
    gate: Arc<tokio::sync::Mutex<()>>,
    token: u64,
    text: String,
    delay: Duration,
) {
    {
        let _gate = gate.lock().await;
        if state.lock().unwrap().epoch != token {
            // Superseded before the first tick; the newer session owns the
            // surface now.
            return;
        }
        surface.clear().await;
    }

    for ch in text.chars() {
        {
            let _gate = gate.lock().await;
            let snapshot = {
                let mut state = state.lock().unwrap();
                if state.epoch != token {
                    return;
                }
                state.buffer.push(ch);
                state.buffer.clone()
            };
            surface.render(&snapshot).await;
        }
        tokio::time::sleep(delay).await;
    }

    let mut state = state.lock().unwrap();
    if state.epoch == token {
        state.phase = RevealPhase::Completed;
    }
}
