use rustc_hash::FxHashSet;

use super::keyboard::CameraAction;

/// Input as seen by one frame.
///
/// `held` is the set of actions whose keys are down when the frame is
/// sampled; continuous cameras scale those by the frame's delta time.
/// Key-downs are the events since the previous frame, in arrival order,
/// for cameras that step discretely. Keys with no binding are kept as
/// `None` so a camera can still react to "some key went down".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    held: FxHashSet<CameraAction>,
    key_downs: Vec<Option<CameraAction>>,
}

impl InputSnapshot {
    /// Snapshot with `actions` held and no presses.
    #[must_use]
    pub fn from_held(actions: impl IntoIterator<Item = CameraAction>) -> Self {
        Self {
            held: actions.into_iter().collect(),
            key_downs: Vec::new(),
        }
    }

    /// Snapshot with the given presses and nothing held.
    #[must_use]
    pub fn from_presses(
        actions: impl IntoIterator<Item = CameraAction>,
    ) -> Self {
        Self {
            held: FxHashSet::default(),
            key_downs: actions.into_iter().map(Some).collect(),
        }
    }

    pub(super) fn new(
        held: FxHashSet<CameraAction>,
        key_downs: Vec<Option<CameraAction>>,
    ) -> Self {
        Self { held, key_downs }
    }

    /// Whether `action` is held this frame.
    #[must_use]
    pub fn is_held(&self, action: CameraAction) -> bool {
        self.held.contains(&action)
    }

    /// Bound key-down events since the last frame.
    pub fn presses(&self) -> impl Iterator<Item = CameraAction> + '_ {
        self.key_downs.iter().flatten().copied()
    }

    /// Every key-down since the last frame, `None` for unbound keys.
    #[must_use]
    pub fn key_downs(&self) -> &[Option<CameraAction>] {
        &self.key_downs
    }

    /// Nothing held and nothing pressed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.held.is_empty() && self.key_downs.is_empty()
    }
}
