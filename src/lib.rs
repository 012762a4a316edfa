//! Loader and viewer for inferior-temporal (IT) cortex recordings.
//!
//! [`load_it_data`] reads the stimuli, object labels and spike responses
//! stored in `IT_data.h5`; [`visualize_img`] shows one stimulus with its
//! label. The `it-viewer` binary wraps both in an egui browser.

pub mod app;
pub mod config;
pub mod data;
pub mod error;
pub mod figure;
pub mod state;
pub mod stimulus;
pub mod ui;

pub use config::ViewerConfig;
pub use data::loader::{load_it_data, DATA_FILE_NAME};
pub use data::model::{ItDataTuple, ItDataset, Spikes, Split, Stimuli};
pub use error::{Error, Result};
pub use figure::{visualize_img, Figure};
