use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::input::CameraAction;

/// Maps actions to physical key strings (`winit::keyboard::KeyCode` debug
/// format: `"KeyW"`, `"ArrowUp"`, `"Equal"`).
///
/// Serialized as a flat table, `action = "Key"`. A table in a preset
/// replaces the whole map, so unlisted actions become unbound.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct KeyMap {
    bindings: BTreeMap<CameraAction, String>,
}

impl KeyMap {
    /// Map with no bindings.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            bindings: BTreeMap::new(),
        }
    }

    /// WASD + Q/E translation, arrow keys look.
    #[must_use]
    pub fn free_fly() -> Self {
        Self::from_pairs([
            (CameraAction::MoveForward, "KeyW"),
            (CameraAction::MoveBackward, "KeyS"),
            (CameraAction::StrafeLeft, "KeyA"),
            (CameraAction::StrafeRight, "KeyD"),
            (CameraAction::MoveUp, "KeyE"),
            (CameraAction::MoveDown, "KeyQ"),
            (CameraAction::YawLeft, "ArrowLeft"),
            (CameraAction::YawRight, "ArrowRight"),
            (CameraAction::PitchUp, "ArrowUp"),
            (CameraAction::PitchDown, "ArrowDown"),
        ])
    }

    /// Arrow keys orbit/pan, +/- zoom, A turntable, O/P mode.
    #[must_use]
    pub fn orbit() -> Self {
        Self::from_pairs([
            (CameraAction::ToggleAutoRotate, "KeyA"),
            (CameraAction::OrbitMode, "KeyO"),
            (CameraAction::PanMode, "KeyP"),
            (CameraAction::ZoomIn, "Equal"),
            (CameraAction::ZoomOut, "Minus"),
            (CameraAction::YawLeft, "ArrowLeft"),
            (CameraAction::YawRight, "ArrowRight"),
            (CameraAction::PitchUp, "ArrowUp"),
            (CameraAction::PitchDown, "ArrowDown"),
        ])
    }

    fn from_pairs<const N: usize>(pairs: [(CameraAction, &str); N]) -> Self {
        Self {
            bindings: pairs
                .into_iter()
                .map(|(action, key)| (action, key.to_owned()))
                .collect(),
        }
    }

    /// Bind `action` to `key`, returning the previous key if any.
    pub fn bind(&mut self, action: CameraAction, key: &str) -> Option<String> {
        self.bindings.insert(action, key.to_owned())
    }

    /// Remove the binding for `action`.
    pub fn unbind(&mut self, action: CameraAction) -> Option<String> {
        self.bindings.remove(&action)
    }

    /// Key bound to `action`.
    #[must_use]
    pub fn key_for(&self, action: CameraAction) -> Option<&str> {
        self.bindings.get(&action).map(String::as_str)
    }

    /// Look up the action for a key string. If several actions share a
    /// key, the one that sorts first wins.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<CameraAction> {
        self.bindings
            .iter()
            .find(|(_, bound)| bound.as_str() == key)
            .map(|(action, _)| *action)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Keyboard bindings for each camera style.
pub struct KeybindingOptions {
    /// Bindings used by free-fly scenes.
    pub free_fly: KeyMap,
    /// Bindings used by orbit scenes.
    pub orbit: KeyMap,
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        Self {
            free_fly: KeyMap::free_fly(),
            orbit: KeyMap::orbit(),
        }
    }
}
