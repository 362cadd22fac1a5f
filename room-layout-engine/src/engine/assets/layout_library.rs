use bevy::prelude::*;
use layout_store::AppData;
use serde::Deserialize;

/// The whole layout data file as a bevy asset. Mirrors the JSON document exactly.
#[derive(Asset, TypePath, Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct LayoutLibrary(pub AppData);

impl LayoutLibrary {
    pub fn data(&self) -> &AppData {
        &self.0
    }
}
