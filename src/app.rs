use eframe::egui;

use crate::config::ViewerConfig;
use crate::error::{Error, Result};
use crate::figure::Figure;
use crate::state::AppState;
use crate::ui::figure::{empty_view, figure_view, spike_plot, FigureTexture};
use crate::ui::panels;

// ---------------------------------------------------------------------------
// Dataset browser
// ---------------------------------------------------------------------------

pub struct ViewerApp {
    pub state: AppState,
    pub config: ViewerConfig,
    texture: FigureTexture,
}

impl ViewerApp {
    pub fn new(state: AppState, config: ViewerConfig) -> Self {
        Self {
            state,
            config,
            texture: FigureTexture::default(),
        }
    }
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: split / index ----
        egui::SidePanel::left("stimulus_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Bottom panel: spike responses ----
        if self.config.show_spikes {
            if let Some(responses) = self.state.current_spikes() {
                egui::TopBottomPanel::bottom("spike_panel")
                    .default_height(180.0)
                    .resizable(true)
                    .show(ctx, |ui| spike_plot(ui, responses));
            }
        }

        // ---- Central panel: figure ----
        egui::CentralPanel::default().show(ctx, |ui| match &self.state.figure {
            Some(figure) => {
                let texture = self
                    .texture
                    .get(ctx, self.state.figure_revision, figure);
                figure_view(ui, figure, &texture, self.config.image_scale);
            }
            None if self.state.dataset.is_none() => {
                empty_view(ui, "Open a data folder to view stimuli  (File → Open data folder…)")
            }
            None => empty_view(ui, "Nothing to show"),
        });
    }
}

pub fn run_viewer(state: AppState, config: ViewerConfig) -> Result<()> {
    let options = config.native_options();
    eframe::run_native(
        "IT Viewer",
        options,
        Box::new(|_cc| Ok(Box::new(ViewerApp::new(state, config)))),
    )
    .map_err(|e| Error::Display(e.to_string()))
}

// ---------------------------------------------------------------------------
// Single figure window
// ---------------------------------------------------------------------------

struct FigureApp {
    figure: Figure,
    scale: f32,
    texture: FigureTexture,
}

impl eframe::App for FigureApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let texture = self.texture.get(ctx, 0, &self.figure);
            figure_view(ui, &self.figure, &texture, self.scale);
        });
    }
}

/// Open a window showing `figure` and block until it is closed.
pub fn show_figure(figure: Figure, config: &ViewerConfig) -> Result<()> {
    let title = format!("Figure – {}", figure.title);
    let app = FigureApp {
        figure,
        scale: config.image_scale,
        texture: FigureTexture::default(),
    };
    eframe::run_native(
        &title,
        config.native_options(),
        Box::new(|_cc| Ok(Box::new(app))),
    )
    .map_err(|e| {
        log::error!("Figure window failed: {e}");
        Error::Display(e.to_string())
    })
}
