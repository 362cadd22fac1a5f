/// Layout library, relative to the engine's asset directory.
pub const LAYOUT_DATA_ASSET_PATH: &str = "data/layout_data.json";

/// Asset directory of the engine crate, relative to the crate root.
pub const ENGINE_ASSET_DIR: &str = "assets";

/// User whose layouts are listed when no user is configured.
pub const DEFAULT_USER_ID: &str = "user456";
