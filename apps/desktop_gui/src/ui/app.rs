use std::{sync::Arc, thread, time::Duration};

use crossbeam_channel::{Receiver, Sender};
use eframe::egui;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::controller::orchestration::dispatch_backend_command;
use client_core::{
    catalog::{self, FilterState},
    spawn_delayed_load, HttpProductSource, PendingLoad, ProductSource, CATALOG_FETCH_DELAY,
};
use shared::domain::{Product, SortDirection};

pub const DEFAULT_PRODUCTS_URL: &str = "https://fakestoreapi.com/products";

#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub products_url: String,
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            products_url: DEFAULT_PRODUCTS_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StatusBannerSeverity {
    Error,
}

#[derive(Debug, Clone)]
struct StatusBanner {
    severity: StatusBannerSeverity,
    message: String,
}

fn sort_direction_label(direction: SortDirection) -> &'static str {
    match direction {
        SortDirection::None => "None",
        SortDirection::Ascending => "Price Low to High",
        SortDirection::Descending => "Price High to Low",
    }
}

fn price_label(price: f64) -> String {
    format!("${price:.2}")
}

/// The catalog view: one immutable raw collection once loaded, three
/// control values, and a row set that is always re-derived from the two.
pub struct CatalogApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,

    products_url: String,
    raw_products: Vec<Product>,
    rows: Vec<Product>,
    categories: Vec<String>,
    filter: FilterState,
    search_input: String,

    ready: bool,
    status: String,
    status_banner: Option<StatusBanner>,
}

impl CatalogApp {
    pub fn bootstrap(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        startup: StartupConfig,
    ) -> Self {
        let mut app = Self {
            cmd_tx,
            ui_rx,
            products_url: startup.products_url,
            raw_products: Vec::new(),
            rows: Vec::new(),
            categories: Vec::new(),
            filter: FilterState::default(),
            search_input: String::new(),
            ready: false,
            status: "Loading product catalog".to_string(),
            status_banner: None,
        };
        // One read per view session, issued at initialization.
        app.request_catalog_load();
        app
    }

    fn request_catalog_load(&mut self) {
        dispatch_backend_command(
            &self.cmd_tx,
            BackendCommand::LoadCatalog {
                products_url: self.products_url.clone(),
            },
            &mut self.status,
        );
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::Info(message) => {
                    self.status = message;
                }
                UiEvent::CatalogLoaded { products } => {
                    self.categories = catalog::distinct_categories(&products);
                    self.raw_products = products;
                    self.ready = true;
                    self.status_banner = None;
                    self.status = format!("Loaded {} products", self.raw_products.len());
                    self.refresh_rows();
                }
                UiEvent::CatalogLoadFailed { reason } => {
                    self.raw_products.clear();
                    self.categories.clear();
                    self.ready = true;
                    self.status = format!("Catalog unavailable: {reason}");
                    self.status_banner = Some(StatusBanner {
                        severity: StatusBannerSeverity::Error,
                        message: self.status.clone(),
                    });
                    self.refresh_rows();
                }
            }
        }
    }

    fn refresh_rows(&mut self) {
        self.rows = catalog::derive_rows(&self.raw_products, &self.filter);
    }

    // Control handlers. Each replaces one piece of FilterState, then
    // re-derives the row set from the raw collection.

    fn on_search_changed(&mut self) {
        self.filter.search_term = self.search_input.clone();
        self.refresh_rows();
    }

    fn on_sort_selected(&mut self, direction: SortDirection) {
        self.filter.sort_direction = direction;
        self.refresh_rows();
    }

    fn on_category_selected(&mut self, category: String) {
        self.filter.selected_category = category;
        self.refresh_rows();
    }

    fn on_reset(&mut self) {
        self.filter.reset();
        self.search_input.clear();
        self.refresh_rows();
    }

    fn show_loading_screen(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(ui.available_height() * 0.4);
                ui.spinner();
                ui.label("Loading products...");
            });
        });
    }

    fn show_catalog_screen(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(format!(
                    "{} of {} products",
                    self.rows.len(),
                    self.raw_products.len()
                ));
                ui.separator();
                ui.label(&self.status);
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.show_status_banner(ui);
            self.show_controls(ui);
            ui.separator();
            self.show_product_table(ui);
        });
    }

    fn show_status_banner(&mut self, ui: &mut egui::Ui) {
        if let Some(banner) = self.status_banner.clone() {
            let (fill, stroke) = match banner.severity {
                StatusBannerSeverity::Error => (
                    egui::Color32::from_rgb(111, 53, 53),
                    egui::Stroke::new(1.0, egui::Color32::from_rgb(175, 96, 96)),
                ),
            };

            egui::Frame::NONE
                .fill(fill)
                .stroke(stroke)
                .corner_radius(8.0)
                .inner_margin(egui::Margin::symmetric(10, 8))
                .show(ui, |ui| {
                    ui.horizontal_wrapped(|ui| {
                        ui.label(egui::RichText::new(&banner.message).color(egui::Color32::WHITE));
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui.button("Dismiss").clicked() {
                                self.status_banner = None;
                            }
                        });
                    });
                });
        }
    }

    fn show_controls(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let response = ui.add(
                egui::TextEdit::singleline(&mut self.search_input)
                    .id_salt("catalog_search")
                    .hint_text("Search products...")
                    .desired_width(220.0),
            );
            if response.changed() {
                self.on_search_changed();
            }

            let mut sort_direction = self.filter.sort_direction;
            egui::ComboBox::from_id_salt("sort_direction")
                .selected_text(format!("Sort by: {}", sort_direction_label(sort_direction)))
                .show_ui(ui, |ui| {
                    for direction in [
                        SortDirection::None,
                        SortDirection::Ascending,
                        SortDirection::Descending,
                    ] {
                        ui.selectable_value(
                            &mut sort_direction,
                            direction,
                            sort_direction_label(direction),
                        );
                    }
                });
            if sort_direction != self.filter.sort_direction {
                self.on_sort_selected(sort_direction);
            }

            let mut selected_category = self.filter.selected_category.clone();
            egui::ComboBox::from_id_salt("category_filter")
                .selected_text(if selected_category.is_empty() {
                    "All Categories".to_string()
                } else {
                    selected_category.clone()
                })
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut selected_category, String::new(), "All Categories");
                    for category in &self.categories {
                        ui.selectable_value(
                            &mut selected_category,
                            category.clone(),
                            category.as_str(),
                        );
                    }
                });
            if selected_category != self.filter.selected_category {
                self.on_category_selected(selected_category);
            }

            if ui.button("Reset").clicked() {
                self.on_reset();
            }
        });
    }

    fn show_product_table(&mut self, ui: &mut egui::Ui) {
        if self.rows.is_empty() {
            ui.label("No products match the current filters.");
            return;
        }

        egui::ScrollArea::vertical().show(ui, |ui| {
            egui::Grid::new("product_rows")
                .striped(true)
                .num_columns(4)
                .spacing([16.0, 6.0])
                .show(ui, |ui| {
                    ui.strong("Image");
                    ui.strong("Title");
                    ui.strong("Price");
                    ui.strong("Category");
                    ui.end_row();

                    for product in &self.rows {
                        // Row identity for the UI is the product id.
                        ui.push_id(product.id.0, |ui| {
                            ui.hyperlink_to("image", &product.image);
                        });
                        ui.label(&product.title);
                        ui.label(price_label(product.price));
                        ui.label(&product.category);
                        ui.end_row();
                    }
                });
        });
    }
}

impl eframe::App for CatalogApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        if self.ready {
            self.show_catalog_screen(ctx);
        } else {
            self.show_loading_screen(ctx);
        }

        // Bridge events arrive over a channel; keep polling at a modest
        // cadence even while nothing is animating.
        ctx.request_repaint_after(Duration::from_millis(100));
    }
}

pub fn start_backend_bridge(cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>) {
    thread::spawn(move || {
        let _ = ui_tx.try_send(UiEvent::Info("Backend worker starting...".to_string()));
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                tracing::error!("failed to build backend runtime: {err}");
                let _ = ui_tx.try_send(UiEvent::CatalogLoadFailed {
                    reason: format!("backend worker startup failure: {err}"),
                });
                return;
            }
        };

        runtime.block_on(async move {
            let _ = ui_tx.try_send(UiEvent::Info("Backend worker ready".to_string()));
            let mut pending_load: Option<PendingLoad> = None;

            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    BackendCommand::LoadCatalog { products_url } => {
                        tracing::info!(url = %products_url, "backend: load_catalog");
                        if let Some(pending) = pending_load.take() {
                            pending.abort();
                        }

                        let source: Arc<dyn ProductSource> =
                            Arc::new(HttpProductSource::new(products_url));
                        let ui_tx = ui_tx.clone();
                        pending_load = Some(spawn_delayed_load(
                            source,
                            CATALOG_FETCH_DELAY,
                            move |outcome| match outcome {
                                Ok(products) => {
                                    let _ = ui_tx.try_send(UiEvent::CatalogLoaded { products });
                                }
                                Err(failure) => {
                                    tracing::error!(%failure, "catalog load failed");
                                    let _ = ui_tx.try_send(UiEvent::CatalogLoadFailed {
                                        reason: failure.to_string(),
                                    });
                                }
                            },
                        ));
                    }
                }
            }

            // The UI side hung up: the view is gone, so discard any load
            // still in flight instead of letting it resolve.
            if let Some(pending) = pending_load.take() {
                pending.abort();
            }
        });
    });
}
