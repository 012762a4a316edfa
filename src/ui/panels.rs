use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::data::model::{ItDataset, Split};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – split and stimulus selection
// ---------------------------------------------------------------------------

/// Render the left navigation panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Stimuli");
    ui.separator();

    let Some(dataset) = &state.dataset else {
        ui.label("No dataset loaded.");
        return;
    };
    let split_lens = Split::ALL.map(|s| dataset.len(s));

    // ---- Split selector ----
    ui.strong("Split");
    let mut split = state.split;
    egui::ComboBox::from_id_salt("split")
        .selected_text(format!("{split}"))
        .show_ui(ui, |ui: &mut Ui| {
            for (s, n) in Split::ALL.into_iter().zip(split_lens) {
                ui.selectable_value(&mut split, s, format!("{s}  ({n})"));
            }
        });
    state.select_split(split);

    let len = state.split_len();
    if len == 0 {
        ui.label("This split is empty.");
        return;
    }

    // ---- Index slider + stepping ----
    ui.add_space(4.0);
    let mut index = state.index;
    ui.add(egui::Slider::new(&mut index, 0..=len - 1).text("index"));
    ui.horizontal(|ui: &mut Ui| {
        if ui.small_button("◀ Prev").clicked() {
            index = index.saturating_sub(1);
        }
        if ui.small_button("Next ▶").clicked() {
            index += 1;
        }
    });
    state.set_index(index);
    ui.separator();

    // ---- Label list (only visible rows are laid out) ----
    let row_height = ui.text_style_height(&egui::TextStyle::Body);
    let mut clicked = None;
    if let Some(dataset) = &state.dataset {
        let objects = dataset.objects(state.split);
        ScrollArea::vertical()
            .auto_shrink([false, false])
            .show_rows(ui, row_height, objects.len(), |ui: &mut Ui, rows| {
                for i in rows {
                    let text = format!("{i:>5}  {}", objects[i]);
                    if ui.selectable_label(i == state.index, text).clicked() {
                        clicked = Some(i);
                    }
                }
            });
    }
    if let Some(i) = clicked {
        state.set_index(i);
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open data folder…").clicked() {
                open_folder_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(summary(ds));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

fn summary(ds: &ItDataset) -> String {
    format!(
        "{} train / {} val / {} test stimuli, {} neurons",
        ds.len(Split::Train),
        ds.len(Split::Val),
        ds.len(Split::Test),
        ds.neuron_count()
    )
}

// ---------------------------------------------------------------------------
// Folder dialog
// ---------------------------------------------------------------------------

pub fn open_folder_dialog(state: &mut AppState) {
    let dir = rfd::FileDialog::new()
        .set_title("Open folder containing IT_data.h5")
        .pick_folder();

    if let Some(dir) = dir {
        match ItDataset::load(&dir) {
            Ok(dataset) => state.set_dataset(dataset, dir),
            Err(e) => {
                log::error!("Failed to load {}: {e}", dir.display());
                state.status_message = Some(format!("Error: {e}"));
            }
        }
    }
}
