use bevy::prelude::*;

use super::state::{DisplayedColour, FrameCollisions, FurnitureEntities};
use crate::layout::{CollisionReport, LayoutSession};
use crate::rpc::web_rpc::WebRpcInterface;

/// Per-frame tick: detect collisions over the current pieces, resolve each
/// piece's colour and write it into its material when it differs from what
/// is shown.
pub fn apply_frame_highlights(
    session: Res<LayoutSession>,
    furniture_entities: Res<FurnitureEntities>,
    mut frame: ResMut<FrameCollisions>,
    mut displayed: Query<(&mut DisplayedColour, &MeshMaterial3d<StandardMaterial>)>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut rpc_interface: ResMut<WebRpcInterface>,
) {
    let outcome = session.tick();

    for (resolved, entity) in outcome.colours.iter().zip(furniture_entities.entities()) {
        let Ok((mut shown, material)) = displayed.get_mut(entity) else {
            continue;
        };
        if shown.0 == resolved.colour {
            continue;
        }
        if let Some(material) = materials.get_mut(&material.0) {
            material.base_color = resolved.colour;
            shown.0 = resolved.colour;
        }
    }

    if outcome.report != frame.report {
        info!("Collisions: {}", describe_pairs(&outcome.report));
        rpc_interface.send_notification(
            "collision_state_changed",
            serde_json::json!({ "pairs": pairs_json(&outcome.report) }),
        );
        frame.report = outcome.report;
    }
}

/// `[["a", "b"], ...]` in canonical pair order.
pub fn pairs_json(report: &CollisionReport) -> serde_json::Value {
    report
        .pairs()
        .map(|pair| serde_json::json!([pair.first(), pair.second()]))
        .collect()
}

pub fn describe_pairs(report: &CollisionReport) -> String {
    if report.is_empty() {
        return "none".to_string();
    }
    report
        .pairs()
        .map(|pair| format!("{} <-> {}", pair.first(), pair.second()))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::collision::detect;
    use crate::layout::furniture::tests::record;
    use crate::layout::PlacedFurniture;
    use layout_store::ShapeKind;

    fn report() -> CollisionReport {
        let items: Vec<PlacedFurniture> = [
            record("sofa", ShapeKind::Box, [0.0; 3], [2.0; 3]),
            record("bed", ShapeKind::Box, [1.0, 0.0, 0.0], [2.0; 3]),
            record("lamp", ShapeKind::Cylinder, [9.0, 0.0, 0.0], [1.0; 3]),
        ]
        .into_iter()
        .map(PlacedFurniture::from_record)
        .collect();
        detect(&items)
    }

    #[test]
    fn pairs_serialise_in_canonical_order() {
        assert_eq!(pairs_json(&report()), serde_json::json!([["bed", "sofa"]]));
        assert_eq!(pairs_json(&CollisionReport::default()), serde_json::json!([]));
    }

    #[test]
    fn pair_description_for_logs() {
        assert_eq!(describe_pairs(&report()), "bed <-> sofa");
        assert_eq!(describe_pairs(&CollisionReport::default()), "none");
    }
}
