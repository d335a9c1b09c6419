use log::{error, info};
use prompt_mirror::MirrorApp;
use prompt_mirror::config::GatewayConfig;
use prompt_mirror::data::LevelCatalog;
use prompt_mirror::gateway::Gateways;

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = GatewayConfig::from_env();
    let catalog = match LevelCatalog::embedded() {
        Ok(catalog) => catalog,
        Err(err) => {
            error!("embedded level catalog is invalid: {err}");
            std::process::exit(1);
        }
    };
    let gateways = match Gateways::from_config(&config) {
        Ok(gateways) => gateways,
        Err(err) => {
            error!("could not set up external services: {err}");
            std::process::exit(1);
        }
    };
    info!("loaded {} challenges", catalog.len());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1024.0, 768.0])
            .with_title("Prompt Mirror"),
        ..Default::default()
    };
    eframe::run_native(
        "Prompt Mirror",
        options,
        Box::new(|_cc| Ok(Box::new(MirrorApp::new(catalog, gateways)))),
    )
}
