//! Hex Bounce entry point

use std::path::Path;

use hex_bounce::Settings;

fn main() {
    env_logger::init();
    log::info!("Hex Bounce starting...");

    let settings = Settings::load(Path::new(Settings::FILE_NAME));
    if let Err(e) = hex_bounce::app::run(settings) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
