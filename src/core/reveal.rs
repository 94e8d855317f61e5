//! One-shot visibility reveal
//!
//! A revealable block starts `Hidden`, flips to `Revealed` the first time the
//! viewport reports it visible and never goes back for the rest of the mount.

/// Reveal state of a single block.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealState {
    #[default]
    Hidden,
    Revealed,
}

impl RevealState {
    /// Feed a visibility report.
    ///
    /// Returns the next state and whether the entrance should play now.
    /// The entrance plays exactly on the first `true` report.
    pub fn observe(self, visible: bool) -> (Self, bool) {
        match (self, visible) {
            (RevealState::Hidden, true) => (RevealState::Revealed, true),
            (state, _) => (state, false),
        }
    }

    pub fn is_revealed(self) -> bool {
        self == RevealState::Revealed
    }
}

/// What starts a block's entrance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealTrigger {
    /// First time the block enters the viewport
    #[default]
    Visible,
    /// As soon as the block is mounted, wherever the page is scrolled
    Mount,
}

impl RevealTrigger {
    /// Whether the block needs a viewport observer.
    pub fn needs_observer(self) -> bool {
        self == RevealTrigger::Visible
    }
}

/// Tracks a block's reveal state.
#[derive(Clone, Copy, Debug, Default)]
pub struct RevealTracker {
    state: RevealState,
}

impl RevealTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a visibility report; returns true if the entrance fired.
    pub fn report(&mut self, visible: bool) -> bool {
        let (next, fire) = self.state.observe(visible);
        self.state = next;
        fire
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    /// Once revealed, nothing else needs to be observed.
    pub fn wants_updates(&self) -> bool {
        !self.state.is_revealed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_hidden() {
        let tracker = RevealTracker::new();
        assert_eq!(tracker.state(), RevealState::Hidden);
        assert!(tracker.wants_updates());
    }

    #[test]
    fn test_invisible_reports_do_nothing() {
        let mut tracker = RevealTracker::new();
        assert!(!tracker.report(false));
        assert!(!tracker.report(false));
        assert_eq!(tracker.state(), RevealState::Hidden);
    }

    #[test]
    fn test_first_visible_report_fires() {
        let mut tracker = RevealTracker::new();
        assert!(tracker.report(true));
        assert_eq!(tracker.state(), RevealState::Revealed);
        assert!(!tracker.wants_updates());
    }

    #[test]
    fn test_fires_at_most_once() {
        let mut tracker = RevealTracker::new();
        let reports = [false, true, false, true, true, false, true];
        let fired = reports.into_iter().filter(|v| tracker.report(*v)).count();
        assert_eq!(fired, 1);
        assert_eq!(tracker.state(), RevealState::Revealed);
    }

    #[test]
    fn test_scrolling_out_keeps_revealed() {
        let (state, _) = RevealState::Hidden.observe(true);
        let (state, fired) = state.observe(false);
        assert_eq!(state, RevealState::Revealed);
        assert!(!fired);
    }

    #[test]
    fn test_trigger_defaults_to_visibility() {
        assert_eq!(RevealTrigger::default(), RevealTrigger::Visible);
        assert!(RevealTrigger::Visible.needs_observer());
    }

    #[test]
    fn test_mount_trigger_skips_observer() {
        assert!(!RevealTrigger::Mount.needs_observer());
    }
}
