use std::path::PathBuf;

use ndarray::{ArrayView1, Axis};

use crate::data::model::{ItDataset, Split};
use crate::figure::Figure;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full browser state, independent of rendering.
#[derive(Default)]
pub struct AppState {
    /// Loaded dataset (None until the user opens a data folder).
    pub dataset: Option<ItDataset>,

    /// Directory the dataset was loaded from.
    pub data_dir: Option<PathBuf>,

    /// Split being browsed.
    pub split: Split,

    /// Selected stimulus within `split`.
    pub index: usize,

    /// Reconstruction of the selected stimulus (cached).
    pub figure: Option<Figure>,

    /// Bumped whenever `figure` changes, so the UI knows to re-upload it.
    pub figure_revision: u64,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    /// Selection `figure` was last built for, whether or not that succeeded.
    shown: Option<(Split, usize)>,
}

impl AppState {
    /// Ingest a newly loaded dataset and show its first training stimulus.
    pub fn set_dataset(&mut self, dataset: ItDataset, data_dir: PathBuf) {
        self.dataset = Some(dataset);
        self.data_dir = Some(data_dir);
        self.split = Split::Train;
        self.index = 0;
        self.status_message = None;
        self.shown = None;
        self.refresh_figure();
    }

    /// Number of stimuli in the current split (0 without a dataset).
    pub fn split_len(&self) -> usize {
        self.dataset.as_ref().map_or(0, |ds| ds.len(self.split))
    }

    /// Switch split and go back to its first stimulus.
    pub fn select_split(&mut self, split: Split) {
        if split == self.split {
            return;
        }
        self.split = split;
        self.index = 0;
        self.refresh_figure();
    }

    /// Select a stimulus, clamped to the current split.
    pub fn set_index(&mut self, index: usize) {
        let clamped = index.min(self.split_len().saturating_sub(1));
        if self.shown == Some((self.split, clamped)) {
            return;
        }
        self.index = clamped;
        self.refresh_figure();
    }

    /// Move the selection by `delta`, stopping at either end.
    pub fn step(&mut self, delta: isize) {
        self.set_index(self.index.saturating_add_signed(delta));
    }

    /// Object label of the selected stimulus.
    pub fn current_label(&self) -> Option<&str> {
        let ds = self.dataset.as_ref()?;
        ds.objects(self.split).get(self.index).map(String::as_str)
    }

    /// Recorded response of every neuron to the selected stimulus.
    /// `None` for the test split, which has no responses.
    pub fn current_spikes(&self) -> Option<ArrayView1<'_, f32>> {
        let spikes = self.dataset.as_ref()?.spikes(self.split)?;
        (self.index < spikes.nrows()).then(|| spikes.index_axis(Axis(0), self.index))
    }

    /// Rebuild `figure` for the current selection.
    pub fn refresh_figure(&mut self) {
        let Some(ds) = &self.dataset else {
            self.figure = None;
            return;
        };
        self.figure_revision += 1;
        self.shown = Some((self.split, self.index));
        match Figure::from_stimulus(ds.stimulus(self.split), ds.objects(self.split), self.index) {
            Ok(figure) => {
                self.figure = Some(figure);
                self.status_message = None;
            }
            Err(e) => {
                log::error!("Cannot show {} stimulus {}: {e}", self.split, self.index);
                self.figure = None;
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }
}
