use eframe::egui::{self, Color32, ColorImage, TextureHandle, TextureOptions, Ui};
use egui_plot::{Bar, BarChart, Plot};
use ndarray::ArrayView1;

use crate::figure::Figure;

// ---------------------------------------------------------------------------
// Texture cache
// ---------------------------------------------------------------------------

/// GPU copy of the current figure, re-uploaded only when its revision changes.
#[derive(Default)]
pub struct FigureTexture {
    revision: Option<u64>,
    handle: Option<TextureHandle>,
}

impl FigureTexture {
    pub fn get(&mut self, ctx: &egui::Context, revision: u64, figure: &Figure) -> TextureHandle {
        match &self.handle {
            Some(handle) if self.revision == Some(revision) => handle.clone(),
            _ => {
                log::debug!(
                    "Uploading figure {} ({}x{})",
                    figure.index,
                    figure.image.width(),
                    figure.image.height()
                );
                let pixels = ColorImage::from_rgb(figure.size(), figure.image.as_raw());
                // Nearest keeps stimulus pixels crisp when scaled up.
                let handle = ctx.load_texture("stimulus", pixels, TextureOptions::NEAREST);
                self.revision = Some(revision);
                self.handle = Some(handle.clone());
                handle
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Figure view (central panel)
// ---------------------------------------------------------------------------

/// Render a figure: object label as heading, image below it.
pub fn figure_view(ui: &mut Ui, figure: &Figure, texture: &TextureHandle, scale: f32) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading(&figure.title);
        ui.add_space(6.0);

        let [w, h] = figure.size();
        let wanted = egui::vec2(w as f32, h as f32) * scale;
        // Shrink to fit, keeping the aspect ratio.
        let fit = (ui.available_width() / wanted.x)
            .min(ui.available_height() / wanted.y)
            .min(1.0);
        let size = wanted * fit.max(0.0);

        ui.add(egui::Image::from_texture(egui::load::SizedTexture::new(
            texture.id(),
            size,
        )));
    });
}

/// Placeholder shown when there is nothing to draw.
pub fn empty_view(ui: &mut Ui, message: &str) {
    ui.centered_and_justified(|ui: &mut Ui| {
        ui.heading(message);
    });
}

// ---------------------------------------------------------------------------
// Spike responses (bottom panel)
// ---------------------------------------------------------------------------

/// Bar chart of one stimulus' response, one bar per neuron.
pub fn spike_plot(ui: &mut Ui, responses: ArrayView1<'_, f32>) {
    let bars: Vec<Bar> = responses
        .iter()
        .enumerate()
        .map(|(neuron, &rate)| Bar::new(neuron as f64, rate as f64).width(0.8))
        .collect();

    Plot::new("spike_plot")
        .x_axis_label("Neuron")
        .y_axis_label("Response")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(false)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(
                BarChart::new(bars)
                    .name("spikes")
                    .color(Color32::LIGHT_BLUE),
            );
        });
}
