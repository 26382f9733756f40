//! Folds raw key events into per-frame input snapshots.
//!
//! The `InputProcessor` owns all transient keyboard state (which actions
//! are held, which presses arrived since the last frame) and the key map.
//! It is the only thing between raw window/DOM events and the camera
//! update step.

use rustc_hash::FxHashSet;

use super::event::InputEvent;
use super::keyboard::CameraAction;
use super::snapshot::InputSnapshot;
use crate::options::KeyMap;

/// Converts raw key events into [`InputSnapshot`]s.
///
/// # Usage
///
/// ```ignore
/// // From the event handler, at any time:
/// processor.handle_key("ArrowLeft", true);
///
/// // Once per frame:
/// let snapshot = processor.snapshot();
/// camera.update(&snapshot, delta_time);
/// ```
#[derive(Debug, Clone)]
pub struct InputProcessor {
    /// Actions whose key is currently down.
    held: FxHashSet<CameraAction>,
    /// Key-down events not yet consumed by a frame; `None` if unbound.
    pending: Vec<Option<CameraAction>>,
    /// Key string → action mapping.
    key_map: KeyMap,
}

impl InputProcessor {
    /// Create a processor with the given key map.
    #[must_use]
    pub fn new(key_map: KeyMap) -> Self {
        Self {
            held: FxHashSet::default(),
            pending: Vec::new(),
            key_map,
        }
    }

    /// Read-only access to the key map.
    #[must_use]
    pub fn key_map(&self) -> &KeyMap {
        &self.key_map
    }

    /// Replace the key map. Held state is dropped.
    pub fn set_key_map(&mut self, key_map: KeyMap) {
        self.key_map = key_map;
        self.clear();
    }

    /// Record a key state change.
    ///
    /// Returns `true` if the key is bound (the event was consumed).
    /// Repeated key-down events while held each queue another press. An
    /// unbound key-down is not consumed but is still queued as `None`.
    pub fn handle_key(&mut self, key: &str, pressed: bool) -> bool {
        let action = self.key_map.lookup(key);
        if pressed {
            self.pending.push(action);
        }
        let Some(action) = action else {
            return false;
        };
        if pressed {
            let _ = self.held.insert(action);
        } else {
            let _ = self.held.remove(&action);
        }
        true
    }

    /// Process a platform-agnostic event. Returns `true` if consumed.
    pub fn handle_event(&mut self, event: &InputEvent) -> bool {
        match event {
            InputEvent::Key { key, pressed } => self.handle_key(key, *pressed),
            InputEvent::FocusLost => {
                self.clear();
                true
            }
        }
    }

    /// Release every key and drop queued presses.
    pub fn clear(&mut self) {
        self.held.clear();
        self.pending.clear();
    }

    /// Whether `action` is currently held.
    #[must_use]
    pub fn is_held(&self, action: CameraAction) -> bool {
        self.held.contains(&action)
    }

    /// Sample input for one frame.
    ///
    /// The held set is copied; queued presses are drained so each press is
    /// seen by exactly one frame.
    pub fn snapshot(&mut self) -> InputSnapshot {
        InputSnapshot::new(self.held.clone(), std::mem::take(&mut self.pending))
    }
}

impl Default for InputProcessor {
    fn default() -> Self {
        Self::new(KeyMap::free_fly())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unbound_keys_are_not_consumed() {
        let mut input = InputProcessor::default();
        assert!(!input.handle_key("KeyZ", true));
        assert!(!input.handle_key("KeyZ", false));
        let snap = input.snapshot();
        assert_eq!(snap.presses().count(), 0);
        assert_eq!(snap.key_downs(), &[None]);
        assert!(input.snapshot().is_empty());
    }

    #[test]
    fn unbound_key_downs_keep_their_place() {
        let mut input = InputProcessor::new(KeyMap::orbit());
        let _ = input.handle_key("KeyA", true);
        let _ = input.handle_key("ShiftLeft", true);
        let _ = input.handle_key("ArrowUp", true);
        assert_eq!(
            input.snapshot().key_downs(),
            &[
                Some(CameraAction::ToggleAutoRotate),
                None,
                Some(CameraAction::PitchUp)
            ]
        );
    }

    #[test]
    fn held_keys_persist_across_frames() {
        let mut input = InputProcessor::default();
        assert!(input.handle_key("KeyW", true));
        assert!(input.handle_key("KeyD", true));

        let first = input.snapshot();
        assert!(first.is_held(CameraAction::MoveForward));
        assert!(first.is_held(CameraAction::StrafeRight));

        let second = input.snapshot();
        assert!(second.is_held(CameraAction::MoveForward));
        assert_eq!(second.presses().count(), 0);

        let _ = input.handle_key("KeyW", false);
        let third = input.snapshot();
        assert!(!third.is_held(CameraAction::MoveForward));
        assert!(third.is_held(CameraAction::StrafeRight));
    }

    #[test]
    fn presses_drain_once_in_order() {
        let mut input = InputProcessor::new(KeyMap::orbit());
        let _ = input.handle_key("ArrowLeft", true);
        let _ = input.handle_key("ArrowLeft", true);
        let _ = input.handle_key("ArrowLeft", false);
        let _ = input.handle_key("KeyP", true);

        let snap = input.snapshot();
        assert_eq!(
            snap.presses().collect::<Vec<_>>(),
            [
                CameraAction::YawLeft,
                CameraAction::YawLeft,
                CameraAction::PanMode
            ]
        );
        assert!(!snap.is_held(CameraAction::YawLeft));
        assert_eq!(input.snapshot().presses().count(), 0);
    }

    #[test]
    fn press_and_release_between_frames_still_counts() {
        let mut input = InputProcessor::new(KeyMap::orbit());
        let _ = input.handle_key("KeyA", true);
        let _ = input.handle_key("KeyA", false);
        let snap = input.snapshot();
        assert_eq!(
            snap.presses().collect::<Vec<_>>(),
            [CameraAction::ToggleAutoRotate]
        );
        assert!(!snap.is_held(CameraAction::ToggleAutoRotate));
    }

    #[test]
    fn focus_loss_releases_everything() {
        let mut input = InputProcessor::default();
        let _ = input.handle_event(&InputEvent::Key {
            key: "KeyW".into(),
            pressed: true,
        });
        assert!(input.is_held(CameraAction::MoveForward));
        assert!(input.handle_event(&InputEvent::FocusLost));
        assert!(input.snapshot().is_empty());
    }

    #[test]
    fn swapping_key_map_clears_state() {
        let mut input = InputProcessor::default();
        let _ = input.handle_key("KeyA", true);
        input.set_key_map(KeyMap::orbit());
        assert!(input.snapshot().is_empty());
        assert_eq!(
            input.key_map().lookup("KeyA"),
            Some(CameraAction::ToggleAutoRotate)
        );
    }
}
