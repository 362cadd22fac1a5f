use bevy::color::Color;
use constants::render_settings::ALERT_COLOUR;

use super::collision::CollisionReport;
use super::drag_state::DragState;
use super::furniture::PlacedFurniture;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlight {
    Normal,
    Alert,
}

impl Highlight {
    pub fn colour(self, item: &PlacedFurniture) -> Color {
        match self {
            Highlight::Alert => ALERT_COLOUR,
            Highlight::Normal => item.colour(),
        }
    }
}

/// Only the piece being manipulated is ever flagged: the active drag, or
/// the last released piece when nothing is being dragged. Other pieces
/// keep their colour even when they overlap something.
pub fn resolve(id: &str, report: &CollisionReport, drag: &DragState) -> Highlight {
    let colliding = report.has_any_collision() && report.involves(id);
    if colliding && drag.is_relevant(id) {
        Highlight::Alert
    } else {
        Highlight::Normal
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::collision::detect;
    use crate::layout::furniture::parse_colour;
    use crate::layout::furniture::tests::record;
    use layout_store::ShapeKind;

    fn overlapping_pair() -> Vec<PlacedFurniture> {
        let mut a = record("A", ShapeKind::Box, [-3.0, 0.0, 0.0], [5.0, 1.0, 5.0]);
        a.color = "#6a4c93".to_string();
        let mut b = record("B", ShapeKind::Box, [-2.0, 0.0, 0.0], [5.0, 1.0, 5.0]);
        b.color = "#8a5a44".to_string();
        vec![PlacedFurniture::from_record(a), PlacedFurniture::from_record(b)]
    }

    #[test]
    fn only_the_dragged_piece_is_flagged() {
        let items = overlapping_pair();
        let report = detect(&items);
        let mut drag = DragState::default();
        drag.on_drag_start("A");

        assert_eq!(resolve("A", &report, &drag).colour(&items[0]), ALERT_COLOUR);
        assert_eq!(resolve("B", &report, &drag).colour(&items[1]), parse_colour("#8a5a44").unwrap());
    }

    #[test]
    fn released_piece_stays_flagged() {
        let items = overlapping_pair();
        let report = detect(&items);
        let mut drag = DragState::default();
        drag.on_drag_start("A");
        drag.on_drag_end("A");

        assert_eq!(resolve("A", &report, &drag), Highlight::Alert);
        assert_eq!(resolve("B", &report, &drag), Highlight::Normal);
    }

    #[test]
    fn no_drag_history_means_no_highlight() {
        let items = overlapping_pair();
        let report = detect(&items);
        let drag = DragState::default();
        assert_eq!(resolve("A", &report, &drag), Highlight::Normal);
        assert_eq!(resolve("B", &report, &drag), Highlight::Normal);
    }

    #[test]
    fn dragged_piece_without_overlap_keeps_colour() {
        let mut items = overlapping_pair();
        items[1].position.x = 3.0;
        let report = detect(&items);
        let mut drag = DragState::default();
        drag.on_drag_start("B");

        assert_eq!(resolve("B", &report, &drag), Highlight::Normal);
        assert_eq!(resolve("B", &report, &drag).colour(&items[1]), items[1].colour());
    }
}
