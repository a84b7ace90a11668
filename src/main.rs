#![deny(missing_docs)]

//! Entry point for the egui-based placement predictor.
#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]
use eframe::egui;
use placement::config::{self, AppConfig};
use placement::egui_app::ui::{EguiApp, WINDOW_TITLE};
use placement::logging;
use placement::ml::{self, ModelArtifact};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let loaded = config::load_or_create();
    let log_settings = loaded
        .as_ref()
        .map(|config| config.logging.clone())
        .unwrap_or_default();
    if let Err(err) = logging::init(&log_settings) {
        eprintln!("Logging disabled: {err}");
    }

    let (config, startup) = match loaded {
        Ok(config) => {
            if let Ok(path) = config::config_path() {
                tracing::info!(
                    config = %path.display(),
                    model = %config.model_path.display(),
                    "Configuration loaded"
                );
            }
            let model = load_model(&config);
            (config, model)
        }
        Err(err) => (AppConfig::default(), Err(err.to_string())),
    };

    let size = egui::vec2(config.window.width, config.window.height);
    let viewport = egui::ViewportBuilder::default()
        .with_title(WINDOW_TITLE)
        .with_inner_size(size)
        .with_min_inner_size(size)
        .with_resizable(true);
    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        WINDOW_TITLE,
        native_options,
        Box::new(move |cc| {
            let app: Box<dyn eframe::App> = match startup {
                Ok((model, label)) => Box::new(EguiApp::new(cc, Box::new(model), label, &config)),
                Err(message) => {
                    tracing::error!("Startup failed: {message}");
                    Box::new(LaunchError { message })
                }
            };
            Ok(app)
        }),
    )?;
    Ok(())
}

fn load_model(config: &AppConfig) -> Result<(ModelArtifact, String), String> {
    let model = ml::load_classifier(&config.model_path).map_err(|err| err.to_string())?;
    let label = format!(
        "{} v{} ({})",
        model.model.name(),
        model.model_version,
        config.model_path.display()
    );
    Ok((model, label))
}

/// Minimal fallback app to display initialization errors.
struct LaunchError {
    message: String,
}

impl eframe::App for LaunchError {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("Failed to start Placement Prediction");
                ui.label(&self.message);
            });
        });
    }
}
