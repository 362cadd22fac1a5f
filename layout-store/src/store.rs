use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use constants::room::{DEFAULT_LAYOUT_NAME, LAYOUT_ID_PREFIX};

use crate::error::StoreError;
use crate::model::{AppData, Layout, LayoutPatch};

/// JSON file holding every layout, user and furniture type.
///
/// Each operation reads the whole document, applies its change and writes
/// the document back.
#[derive(Debug, Clone)]
pub struct LayoutStore {
    path: PathBuf,
    report: fn(&str),
}

fn print_notice(message: &str) {
    eprintln!("{}", message);
}

impl LayoutStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            report: print_notice,
        }
    }

    /// Route recoverable problems (such as recreating the data file) to
    /// `report` instead of stderr.
    pub fn with_reporter(mut self, report: fn(&str)) -> Self {
        self.report = report;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse the data file. A missing file, or one that is not JSON at all,
    /// is replaced with an empty document. A JSON document that does not fit
    /// the model is an error and the file is left untouched.
    pub fn read_data(&self) -> Result<AppData, StoreError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return self.recreate(&err.to_string());
            }
            Err(err) => return Err(err.into()),
        };

        let document = match serde_json::from_str::<serde_json::Value>(&text) {
            Ok(document) => document,
            Err(err) => return self.recreate(&err.to_string()),
        };

        Ok(serde_json::from_value(document)?)
    }

    fn recreate(&self, reason: &str) -> Result<AppData, StoreError> {
        (self.report)(&format!(
            "Layout data at {} missing or not JSON ({}), creating empty document",
            self.path.display(),
            reason
        ));
        let data = AppData::default();
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        self.write_data(&data)?;
        Ok(data)
    }

    pub fn write_data(&self, data: &AppData) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(data)?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    /// All layouts, or only those owned by `user_id`.
    pub fn list_layouts(&self, user_id: Option<&str>) -> Result<Vec<Layout>, StoreError> {
        let data = self.read_data()?;
        Ok(match user_id {
            Some(user_id) => data.layouts_for_user(user_id).cloned().collect(),
            None => data.layouts,
        })
    }

    pub fn get_layout(&self, id: &str) -> Result<Layout, StoreError> {
        let data = self.read_data()?;
        data.find_layout(id)
            .cloned()
            .ok_or_else(|| StoreError::LayoutNotFound(id.to_string()))
    }

    pub fn create_layout(&self, patch: LayoutPatch) -> Result<Layout, StoreError> {
        let Some(user_id) = patch.user_id else {
            return Err(StoreError::MissingUserId);
        };

        let mut data = self.read_data()?;
        let timestamp = now_millis();
        let layout = Layout {
            id: unique_layout_id(&data, timestamp),
            user_id,
            name: patch.name.unwrap_or_else(|| DEFAULT_LAYOUT_NAME.to_string()),
            timestamp,
            room_dimensions: patch.room_dimensions.unwrap_or_default(),
            furnitures: patch.furnitures.unwrap_or_default(),
        };

        data.layouts.push(layout.clone());
        self.write_data(&data)?;
        Ok(layout)
    }

    /// Merge `patch` over the stored layout and refresh its timestamp.
    pub fn update_layout(&self, id: &str, patch: LayoutPatch) -> Result<Layout, StoreError> {
        let mut data = self.read_data()?;
        let Some(layout) = data.layouts.iter_mut().find(|l| l.id == id) else {
            return Err(StoreError::LayoutNotFound(id.to_string()));
        };

        layout.apply_patch(patch);
        layout.timestamp = now_millis();
        let updated = layout.clone();

        self.write_data(&data)?;
        Ok(updated)
    }

    pub fn delete_layout(&self, id: &str) -> Result<(), StoreError> {
        let mut data = self.read_data()?;
        let before = data.layouts.len();
        data.layouts.retain(|l| l.id != id);

        if data.layouts.len() == before {
            return Err(StoreError::LayoutNotFound(id.to_string()));
        }

        self.write_data(&data)
    }
}

pub fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

// Ids are `layout{millis}`; bump the suffix when two layouts land in the same millisecond.
fn unique_layout_id(data: &AppData, timestamp: u64) -> String {
    let mut suffix = timestamp;
    loop {
        let id = format!("{}{}", LAYOUT_ID_PREFIX, suffix);
        if data.find_layout(&id).is_none() {
            return id;
        }
        suffix += 1;
    }
}
