//! Keyboard state shared between the window layer and the lessons.

use fxhash::FxHashSet;

/// Keys the lessons react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Escape,
    Space,
}

/// The current state of the keyboard plus the window close request.
#[derive(Debug, Default)]
pub struct InputState {
    pub down: FxHashSet<Key>,
    pub pressed: FxHashSet<Key>,
    pub released: FxHashSet<Key>,
    pub quit_requested: bool,
}

impl InputState {
    /// Clears the per-frame sets. Held keys stay down.
    pub fn begin_frame(&mut self) {
        self.pressed.clear();
        self.released.clear();
    }

    pub fn key_down(&mut self, key: Key) {
        if self.down.insert(key) {
            self.pressed.insert(key);
        }
    }

    pub fn key_up(&mut self, key: Key) {
        if self.down.remove(&key) {
            self.released.insert(key);
        }
    }

    /// Whether `key` went down during this frame.
    pub fn was_pressed(&self, key: Key) -> bool {
        self.pressed.contains(&key)
    }

    pub fn is_down(&self, key: Key) -> bool {
        self.down.contains(&key)
    }

    /// Whether the window should close: a close request or Escape.
    pub fn wants_close(&self) -> bool {
        self.quit_requested || self.is_down(Key::Escape)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_is_reported_once() {
        let mut input = InputState::default();
        input.key_down(Key::Space);
        assert!(input.was_pressed(Key::Space));

        input.begin_frame();
        // A repeated key-down while held is not a new press.
        input.key_down(Key::Space);
        assert!(!input.was_pressed(Key::Space));
        assert!(input.is_down(Key::Space));

        input.key_up(Key::Space);
        assert!(input.released.contains(&Key::Space));
        assert!(!input.is_down(Key::Space));
    }

    #[test]
    fn escape_or_quit_closes() {
        let mut input = InputState::default();
        assert!(!input.wants_close());
        input.key_down(Key::Escape);
        assert!(input.wants_close());

        let mut input = InputState::default();
        input.quit_requested = true;
        assert!(input.wants_close());
    }
}
