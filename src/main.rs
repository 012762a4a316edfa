use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use it_viewer::app::run_viewer;
use it_viewer::state::AppState;
use it_viewer::{ItDataset, Split, ViewerConfig};

/// Browse the stimuli, labels and spike responses of an IT dataset.
#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Directory containing IT_data.h5 (can also be opened from the File menu)
    data_dir: Option<PathBuf>,

    /// Split to show first
    #[arg(long, default_value_t = Split::Train)]
    split: Split,

    /// Stimulus to show first
    #[arg(long, default_value_t = 0)]
    index: usize,

    /// JSON viewer configuration
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => ViewerConfig::from_path(path)?,
        None => ViewerConfig::default(),
    };

    let mut state = AppState::default();
    if let Some(dir) = cli.data_dir {
        let dataset = ItDataset::load(&dir)
            .with_context(|| format!("loading dataset from {}", dir.display()))?;
        state.set_dataset(dataset, dir);
        state.select_split(cli.split);
        state.set_index(cli.index);
    }

    run_viewer(state, config).context("running viewer")
}
