use bevy::prelude::*;

use crate::engine::loading::layout_loader::LayoutLibraryLoader;

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum AppState {
    #[default]
    Loading,
    Running,
}

#[derive(Component)]
pub struct FpsText;

// Move on once the first layout has been chosen and queued.
pub fn transition_to_running(
    loader: Res<LayoutLibraryLoader>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if loader.initial_layout_sent() {
        println!("→ Layout selected, transitioning to Running state");
        next_state.set(AppState::Running);
    }
}
