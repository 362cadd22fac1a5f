mod engine;
mod layout;
mod rpc;
mod tools;

use engine::core::app_setup::create_app;
use engine::core::config::{EditorConfig, USAGE};

fn main() {
    let config = match EditorConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}\n{}", err, USAGE);
            std::process::exit(1);
        }
    };

    let mut app = create_app(config);

    #[cfg(target_arch = "wasm32")]
    {
        wasm_bindgen_futures::spawn_local(async move {
            app.run();
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        app.run();
    }
}
