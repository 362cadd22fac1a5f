// build.rs
use std::error::Error;
use std::{env, fs, path::PathBuf};

// Seeds the engine's asset directory with a small layout library so a fresh
// checkout opens a furnished room. An existing file is never overwritten.
fn main() -> Result<(), Box<dyn Error>> {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=assets/data/layout_data.json");

    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let data_path = manifest_dir.join("assets").join("data").join("layout_data.json");
    if data_path.exists() {
        return Ok(());
    }

    let sample = serde_json::json!({
        "layouts": [
            {
                "id": "layout1",
                "userId": "user456",
                "name": "Living Room",
                "timestamp": 1_700_000_000_000u64,
                "roomDimensions": { "width": 10, "height": 8, "depth": 10 },
                "furnitures": [
                    { "id": "sofa", "type": "box", "position": [-3.3, -3.7, 0], "size": [5, 0.6, 6.6], "color": "#6a4c93" },
                    { "id": "table", "type": "box", "position": [3.3, -3.2, 3.3], "size": [3.3, 0.1, 3.3], "color": "#8a5a44" },
                    { "id": "table-leg", "type": "box", "position": [3.3, -3.6, 3.3], "size": [3.1, 0.8, 0.1], "color": "#8a5a44" },
                    { "id": "lamp", "type": "cylinder", "position": [-3.5, -2.5, -4], "size": [0.8, 3, 0.8], "color": "#f2c14e" }
                ]
            },
            {
                "id": "layout2",
                "userId": "user456",
                "name": "Study",
                "timestamp": 1_700_000_100_000u64,
                "roomDimensions": { "width": 6, "height": 5, "depth": 6 },
                "furnitures": [
                    { "id": "desk", "type": "box", "position": [0, -2, -2], "size": [2.4, 1, 1.2], "color": "#8a5a44" },
                    { "id": "chair", "type": "box", "position": [0, -2, -1], "rotation": [0, 0.3, 0], "size": [0.8, 1, 0.8], "color": "#2a9d8f" }
                ]
            }
        ],
        "furnitureTypes": [
            { "id": "sofa", "name": "Sofa", "defaultSize": [2, 0.8, 0.9], "defaultColor": "#6a4c93", "type": "box" },
            { "id": "lamp", "name": "Floor Lamp", "defaultSize": [0.4, 1.6, 0.4], "defaultColor": "#f2c14e", "type": "cylinder" }
        ],
        "users": [
            { "id": "user456", "username": "demo", "email": "demo@example.com", "layoutIds": ["layout1", "layout2"] }
        ]
    });

    if let Some(dir) = data_path.parent() {
        fs::create_dir_all(dir)?;
    }
    fs::write(&data_path, serde_json::to_string_pretty(&sample)?)?;

    println!("cargo:warning=Generated sample layout library in assets/data/layout_data.json");
    Ok(())
}
