mod backend_bridge;
mod controller;
mod ui;

use clap::Parser;
use crossbeam_channel::bounded;
use eframe::egui;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::ui::{CatalogApp, StartupConfig, DEFAULT_PRODUCTS_URL};

/// Desktop catalog browser over a remote product feed.
#[derive(Parser, Debug)]
struct Args {
    /// Product source endpoint returning a JSON array of products.
    #[arg(long, default_value = DEFAULT_PRODUCTS_URL)]
    products_url: String,
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();
    let args = Args::parse();

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(64);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(256);
    backend_bridge::runtime::launch(cmd_rx, ui_tx);

    let startup = StartupConfig {
        products_url: args.products_url,
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Shopfront Catalog")
            .with_inner_size([960.0, 640.0])
            .with_min_inner_size([720.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Shopfront Catalog",
        options,
        Box::new(move |_cc| Ok(Box::new(CatalogApp::bootstrap(cmd_tx, ui_rx, startup)))),
    )
}
