//! Module trait for dashboard panels

use crossterm::event::KeyEvent;
use ratatui::layout::Rect;
use ratatui::Frame;

use super::Action;

/// A dashboard panel that owns its highlight state and draws one view
pub trait Module {
    /// Handle keyboard input routed to the active panel.
    /// Returns an Action describing what should happen
    fn handle_key(&mut self, key: KeyEvent) -> Action;

    /// Draw the panel into `area`
    fn render(&mut self, frame: &mut Frame, area: Rect);
}
