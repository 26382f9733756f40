/// Platform-agnostic input events.
///
/// These are fed into an [`InputProcessor`](super::InputProcessor), which
/// folds them into the held-action set sampled once per frame.
///
/// # Example
///
/// ```ignore
/// processor.handle_event(&InputEvent::Key {
///     key: "KeyW".into(),
///     pressed: true,
/// });
/// let snapshot = processor.snapshot();
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// Physical key changed state.
    Key {
        /// Key string in `winit::keyboard::KeyCode` debug format
        /// (`"KeyW"`, `"ArrowUp"`, `"Equal"`).
        key: String,
        /// `true` for press (including auto-repeat), `false` for release.
        pressed: bool,
    },
    /// The canvas/window lost keyboard focus; every key counts as released.
    FocusLost,
}
