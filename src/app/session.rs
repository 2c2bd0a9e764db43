use crate::engine::{PlaybackController, Snapshot};
use crate::input::LoadedDocument;
use crossbeam_channel::Receiver;

/// One open document: its playback controller and the display's view of it.
///
/// The display side only ever reads `latest`, which is refreshed from the
/// controller's update channel by [`Session::sync`].
pub struct Session {
    name: String,
    controller: PlaybackController,
    updates: Receiver<Snapshot>,
    latest: Snapshot,
}

impl Session {
    pub fn new(document: LoadedDocument, rate: u32) -> Self {
        let mut controller = PlaybackController::new(document.words, rate);
        let updates = controller.subscribe();
        let latest = controller.snapshot();
        Self {
            name: document.name,
            controller,
            updates,
            latest,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn controller(&self) -> &PlaybackController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut PlaybackController {
        &mut self.controller
    }

    pub fn latest(&self) -> &Snapshot {
        &self.latest
    }

    /// Drains pending updates, keeping the newest. Returns whether anything
    /// changed since the last call.
    pub fn sync(&mut self) -> bool {
        let mut changed = false;
        for snapshot in self.updates.try_iter() {
            self.latest = snapshot;
            changed = true;
        }
        changed
    }

    pub fn close(self) {
        self.controller.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reading::WordSequence;
    use std::time::Instant;

    fn session() -> Session {
        let document = LoadedDocument {
            words: WordSequence::from_words(["alpha", "beta", "gamma"]).unwrap(),
            name: "greek.txt".to_string(),
            pages: 1,
        };
        Session::new(document, 300)
    }

    #[test]
    fn test_initial_snapshot() {
        let session = session();
        assert_eq!(session.name(), "greek.txt");
        assert_eq!(session.latest().current_word, "alpha");
        assert_eq!(session.latest().length, 3);
    }

    #[test]
    fn test_sync_picks_up_latest_change() {
        let mut session = session();
        assert!(!session.sync());

        session.controller_mut().skip(1);
        session.controller_mut().skip(1);
        assert!(session.sync());
        assert_eq!(session.latest().current_word, "gamma");
        assert!(!session.sync());
    }

    #[test]
    fn test_display_lags_until_sync() {
        let mut session = session();
        session.controller_mut().toggle_play(Instant::now());
        assert!(!session.latest().is_playing());
        session.sync();
        assert!(session.latest().is_playing());
    }
}
