//! Trimline - clip-trim timeline demo
//!
//! Entry point and main application loop.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use eframe::egui;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};
use trimline_core::TrimlineConfig;
use trimline_ui::{Theme, TimelineView};

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Trimline starting...");

    // Optional JSON config as first argument
    let config = match std::env::args().nth(1).map(PathBuf::from) {
        Some(path) => load_config(&path)?,
        None => TrimlineConfig::default(),
    };
    let view = TimelineView::new(config).context("Failed to build timeline")?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([720.0, 320.0])
            .with_title("Trimline"),
        ..Default::default()
    };

    eframe::run_native(
        "Trimline",
        options,
        Box::new(move |cc| Ok(Box::new(TrimlineApp::new(cc, view)))),
    )
    .map_err(|e| anyhow::anyhow!("eframe error: {}", e))?;

    Ok(())
}

fn load_config(path: &Path) -> Result<TrimlineConfig> {
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {:?}", path))?;
    let config = TrimlineConfig::from_json(&data)?;
    info!("Loaded config: {:?}", path);
    Ok(config)
}

struct TrimlineApp {
    view: TimelineView,
}

impl TrimlineApp {
    fn new(cc: &eframe::CreationContext<'_>, view: TimelineView) -> Self {
        Theme::apply(&cc.egui_ctx);
        Self { view }
    }
}

impl eframe::App for TrimlineApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let widget = self.view.widget();
                let range = widget.range();
                ui.label(format!("Trim {:.2} – {:.2}", range.start(), range.end()));
                ui.separator();
                ui.label(format!("Items: {}", widget.track().item_count()));
                ui.separator();
                match widget.selection().selected() {
                    Some(index) => ui.label(format!("Selected: {}", index + 1)),
                    None => ui.label("Selected: none"),
                };
                ui.separator();
                ui.label(format!("Zoom: {:.2}×", widget.zoom().overlay_scale()));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Deselect").clicked() {
                        self.view.widget_mut().deselect_item();
                    }
                });
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(Theme::ROW_PADDING);
            self.view.show(ui);
            ui.add_space(Theme::ROW_PADDING);
            ui.label("Drag the handles to trim, pinch or ctrl+scroll to zoom, tap an item to select it.");
        });
    }
}
