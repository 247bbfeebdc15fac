//! Cooperative cancellation shared between a running scan and its host.

use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use std::sync::Arc;

/// Lifecycle of a single period search run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunPhase {
    Idle,
    Validating,
    Scanning,
    /// The scan visited every trial point.
    Complete,
    /// The scan stopped early on request; results are partial but usable.
    Interrupted,
    /// Parameter collection was cancelled; nothing was scanned.
    Cancelled,
}

impl RunPhase {
    /// True for phases a run ends in.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            RunPhase::Complete | RunPhase::Interrupted | RunPhase::Cancelled
        )
    }

    fn to_u8(self) -> u8 {
        match self {
            RunPhase::Idle => 0,
            RunPhase::Validating => 1,
            RunPhase::Scanning => 2,
            RunPhase::Complete => 3,
            RunPhase::Interrupted => 4,
            RunPhase::Cancelled => 5,
        }
    }

    fn from_u8(value: u8) -> Self {
        match value {
            1 => RunPhase::Validating,
            2 => RunPhase::Scanning,
            3 => RunPhase::Complete,
            4 => RunPhase::Interrupted,
            5 => RunPhase::Cancelled,
            _ => RunPhase::Idle,
        }
    }
}

#[derive(Debug, Default)]
struct Flags {
    cancelled: AtomicBool,
    interrupted: AtomicBool,
    phase: AtomicU8,
}

/// Handle to the cancellation flags of one run.
///
/// Clones share the same flags, so a host can keep one clone and call
/// [`interrupt`](Self::interrupt) from another thread while the scan polls
/// [`is_interrupted`](Self::is_interrupted) once per trial point.
#[derive(Debug, Clone, Default)]
pub struct RunState {
    flags: Arc<Flags>,
}

impl RunState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask a running scan to stop before its next trial point.
    pub fn interrupt(&self) {
        self.flags.interrupted.store(true, Ordering::Release);
    }

    pub fn is_interrupted(&self) -> bool {
        self.flags.interrupted.load(Ordering::Acquire)
    }

    /// Record that parameter collection was abandoned.
    pub fn cancel(&self) {
        self.flags.cancelled.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flags.cancelled.load(Ordering::Acquire)
    }

    /// Current phase of the run using this handle.
    pub fn phase(&self) -> RunPhase {
        RunPhase::from_u8(self.flags.phase.load(Ordering::Acquire))
    }

    pub(crate) fn set_phase(&self, phase: RunPhase) {
        self.flags.phase.store(phase.to_u8(), Ordering::Release);
    }

    /// Clear both flags and return to [`RunPhase::Idle`].
    pub fn reset(&self) {
        self.flags.cancelled.store(false, Ordering::Release);
        self.flags.interrupted.store(false, Ordering::Release);
        self.set_phase(RunPhase::Idle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_flags() {
        let state = RunState::new();
        let host = state.clone();
        assert!(!state.is_interrupted());

        host.interrupt();
        assert!(state.is_interrupted());
        assert!(!state.is_cancelled());

        host.cancel();
        assert!(state.is_cancelled());
    }

    #[test]
    fn reset_clears_everything() {
        let state = RunState::new();
        state.interrupt();
        state.cancel();
        state.set_phase(RunPhase::Interrupted);

        state.reset();
        assert!(!state.is_interrupted());
        assert!(!state.is_cancelled());
        assert_eq!(state.phase(), RunPhase::Idle);
    }

    #[test]
    fn phase_round_trips_through_handle() {
        let state = RunState::new();
        for phase in [
            RunPhase::Idle,
            RunPhase::Validating,
            RunPhase::Scanning,
            RunPhase::Complete,
            RunPhase::Interrupted,
            RunPhase::Cancelled,
        ] {
            state.set_phase(phase);
            assert_eq!(state.phase(), phase);
        }
        assert!(RunPhase::Cancelled.is_terminal());
        assert!(!RunPhase::Scanning.is_terminal());
    }

    #[test]
    fn interrupt_from_another_thread() {
        let state = RunState::new();
        let host = state.clone();
        std::thread::spawn(move || host.interrupt())
            .join()
            .unwrap();
        assert!(state.is_interrupted());
    }
}
