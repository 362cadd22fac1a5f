/// Which piece is being dragged now, and which was released last.
///
/// A new drag-start overwrites any active drag; the last writer wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DragState {
    active_drag_id: Option<String>,
    last_dragged_id: Option<String>,
}

impl DragState {
    pub fn on_drag_start(&mut self, id: &str) {
        self.active_drag_id = Some(id.to_string());
    }

    /// Clears the active drag and records `id` as last dragged, even when
    /// `id` is not a piece of the current layout.
    pub fn on_drag_end(&mut self, id: &str) {
        self.active_drag_id = None;
        self.last_dragged_id = Some(id.to_string());
    }

    pub fn clear(&mut self) {
        self.active_drag_id = None;
        self.last_dragged_id = None;
    }

    pub fn active_drag_id(&self) -> Option<&str> {
        self.active_drag_id.as_deref()
    }

    pub fn last_dragged_id(&self) -> Option<&str> {
        self.last_dragged_id.as_deref()
    }

    pub fn is_dragging(&self) -> bool {
        self.active_drag_id.is_some()
    }

    /// The piece under the pointer while dragging, otherwise the piece
    /// released last.
    pub fn is_relevant(&self, id: &str) -> bool {
        match self.active_drag_id.as_deref() {
            Some(active) => active == id,
            None => self.last_dragged_id.as_deref() == Some(id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let state = DragState::default();
        assert!(!state.is_dragging());
        assert!(state.last_dragged_id().is_none());
        assert!(!state.is_relevant("a"));
    }

    #[test]
    fn start_then_end_moves_id_to_last_dragged() {
        let mut state = DragState::default();
        state.on_drag_start("a");
        assert_eq!(state.active_drag_id(), Some("a"));
        assert!(state.is_relevant("a"));

        state.on_drag_end("a");
        assert!(!state.is_dragging());
        assert_eq!(state.last_dragged_id(), Some("a"));
        assert!(state.is_relevant("a"));
    }

    #[test]
    fn active_drag_shadows_last_dragged() {
        let mut state = DragState::default();
        state.on_drag_start("a");
        state.on_drag_end("a");
        state.on_drag_start("b");

        assert!(state.is_relevant("b"));
        assert!(!state.is_relevant("a"));
        assert_eq!(state.last_dragged_id(), Some("a"));
    }

    #[test]
    fn second_start_overwrites_first() {
        let mut state = DragState::default();
        state.on_drag_start("a");
        state.on_drag_start("b");
        assert_eq!(state.active_drag_id(), Some("b"));
    }

    #[test]
    fn clear_resets_both_fields() {
        let mut state = DragState::default();
        state.on_drag_start("a");
        state.on_drag_end("a");
        state.on_drag_start("b");
        state.clear();
        assert_eq!(state, DragState::default());
    }
}
