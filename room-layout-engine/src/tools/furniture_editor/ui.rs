use bevy::prelude::*;

use super::highlight::describe_pairs;
use super::state::FrameCollisions;
use crate::layout::{CollisionReport, DragState, LayoutSession};

#[derive(Component)]
pub struct LayoutStatusText;

pub fn spawn_status_overlay(mut commands: Commands) {
    commands.spawn((
        LayoutStatusText,
        Name::new("LayoutStatus"),
        Text::new("Loading layout..."),
        TextFont {
            font_size: 16.0,
            ..default()
        },
        TextColor(Color::srgb(1.0, 1.0, 1.0)),
        BackgroundColor(Color::srgba(0.10, 0.11, 0.13, 0.8)),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(12.0),
            left: Val::Px(12.0),
            padding: UiRect::all(Val::Px(8.0)),
            ..default()
        },
    ));
}

pub fn update_status_overlay(
    session: Res<LayoutSession>,
    frame: Res<FrameCollisions>,
    mut texts: Query<&mut Text, With<LayoutStatusText>>,
) {
    if !session.is_changed() && !frame.is_changed() {
        return;
    }

    let line = status_line(session.layout_name(), &frame.report, session.drag_state());
    for mut text in &mut texts {
        if text.0 != line {
            text.0 = line.clone();
        }
    }
}

pub fn status_line(name: Option<&str>, report: &CollisionReport, drag: &DragState) -> String {
    let name = match name {
        Some("") | None => "(untitled)",
        Some(name) => name,
    };
    let mut line = format!("Layout: {}\nCollisions: {}", name, describe_pairs(report));
    if let Some(active) = drag.active_drag_id() {
        line.push_str(&format!("\nDragging: {}", active));
    }
    line.push_str("\nCtrl+S to save");
    line
}
