//! Edit Session
//!
//! Explicit state for one deployment's configuration edit, independent
//! of any UI binding. Gates re-submission: a save cannot begin while a
//! previous one is in flight.

use tracing::debug;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditState {
    /// Viewing; no unsaved changes.
    Idle,
    /// Form has unsaved changes.
    Dirty,
    /// A save is in flight; re-entry is refused.
    Saving,
}

#[derive(Debug)]
pub struct EditSession {
    state: EditState,
}

impl EditSession {
    pub fn new() -> Self {
        Self {
            state: EditState::Idle,
        }
    }

    pub fn state(&self) -> EditState {
        self.state
    }

    pub fn is_dirty(&self) -> bool {
        self.state == EditState::Dirty
    }

    pub fn is_saving(&self) -> bool {
        self.state == EditState::Saving
    }

    /// Record a form edit. Ignored while a save is in flight.
    pub fn mark_dirty(&mut self) {
        if self.state != EditState::Saving {
            self.state = EditState::Dirty;
        }
    }

    /// Transition to `Saving`. Returns `false` (and changes nothing)
    /// if a save is already in flight.
    pub fn begin_save(&mut self) -> bool {
        if self.state == EditState::Saving {
            debug!("save already in flight, refusing re-entry");
            return false;
        }
        self.state = EditState::Saving;
        true
    }

    /// Unconditional return to `Idle`. Called on save success AND
    /// failure so no error can leave the session stuck.
    pub fn finish(&mut self) {
        self.state = EditState::Idle;
    }

    /// Discard unsaved changes after the user confirmed.
    pub fn cancel(&mut self) {
        self.state = EditState::Idle;
    }
}

impl Default for EditSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_save_cycle() {
        let mut session = EditSession::new();
        assert_eq!(session.state(), EditState::Idle);

        session.mark_dirty();
        assert!(session.is_dirty());

        assert!(session.begin_save());
        assert!(session.is_saving());

        session.finish();
        assert_eq!(session.state(), EditState::Idle);
    }

    #[test]
    fn test_begin_save_refuses_reentry() {
        let mut session = EditSession::new();
        session.mark_dirty();
        assert!(session.begin_save());
        assert!(!session.begin_save());
        assert!(session.is_saving());
    }

    #[test]
    fn test_mark_dirty_ignored_while_saving() {
        let mut session = EditSession::new();
        session.mark_dirty();
        session.begin_save();
        session.mark_dirty();
        assert!(session.is_saving());
    }

    #[test]
    fn test_cancel_discards_changes() {
        let mut session = EditSession::new();
        session.mark_dirty();
        session.cancel();
        assert_eq!(session.state(), EditState::Idle);
    }
}
