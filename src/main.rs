use std::sync::Arc;

use image_gallery::config::{self, AppState, Config};
use image_gallery::{gallery, logger, server};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| config::DEFAULT_CONFIG_PATH.to_string());
    let cfg = Config::load_from(&config_path)?;
    logger::init(&cfg)?;

    prepare_gallery(&cfg)?;

    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();
    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }
    let runtime = runtime_builder.build()?;

    runtime.block_on(async_main(cfg))
}

/// Create the image directory and the stats file if they are missing
fn prepare_gallery(cfg: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let image_dir = &cfg.gallery.image_dir;
    if !image_dir.exists() {
        std::fs::create_dir_all(image_dir)?;
        logger::log_image_dir_created(image_dir);
    }

    let counter = gallery::VisitorCounter::new(gallery::JsonFileStore::new(&cfg.gallery.stats_file));
    let stats = counter.init()?;
    logger::log_info(&format!(
        "Visitor stats loaded: {} visits, {} unique visitors (since {})",
        stats.total_visits, stats.unique_visitors, stats.last_reset
    ));
    Ok(())
}

async fn async_main(cfg: Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.get_socket_addr()?;
    let listener = server::create_listener(addr)?;
    let state = Arc::new(AppState::new(&cfg));

    logger::log_server_start(&addr, &cfg);

    let local = tokio::task::LocalSet::new();
    local.run_until(server::run_server(listener, state)).await
}
