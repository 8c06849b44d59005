//! Module trait for interactive panes

use crossterm::event::KeyEvent;

use super::Action;

/// Trait for panes that own local state and handle their own input
pub trait Module {
    /// Handle keyboard input
    /// Returns an Action describing what should happen
    fn handle_key(&mut self, key: KeyEvent) -> Action;
}
