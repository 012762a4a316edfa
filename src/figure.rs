use image::RgbImage;
use ndarray::{Array4, Axis};

use crate::config::ViewerConfig;
use crate::error::{Error, Result};
use crate::stimulus;

// ---------------------------------------------------------------------------
// Figure – a reconstructed stimulus with its caption
// ---------------------------------------------------------------------------

/// What one call to [`visualize_img`] puts on screen.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    /// Object label of the stimulus, shown as the heading.
    pub title: String,
    /// Position of the stimulus in its set.
    pub index: usize,
    pub image: RgbImage,
}

impl Figure {
    /// Reconstruct stimulus `index` of a `[sample, channel, height, width]`
    /// batch, captioned with `objects[index]`.
    pub fn from_stimulus(stimulus: &Array4<f32>, objects: &[String], index: usize) -> Result<Self> {
        let len = stimulus.len_of(Axis(0)).min(objects.len());
        if index >= len {
            return Err(Error::IndexOutOfRange { index, len });
        }

        let image = stimulus::reconstruct(stimulus.index_axis(Axis(0), index))?;
        Ok(Figure {
            title: objects[index].clone(),
            index,
            image,
        })
    }

    /// `[width, height]` in pixels.
    pub fn size(&self) -> [usize; 2] {
        [self.image.width() as usize, self.image.height() as usize]
    }
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Show stimulus `stim_idx` in a new window titled with its object label.
///
/// Blocks until the window is closed. Index errors are reported before any
/// window is created.
pub fn visualize_img(stimulus: &Array4<f32>, objects: &[String], stim_idx: usize) -> Result<()> {
    let figure = Figure::from_stimulus(stimulus, objects, stim_idx)?;
    crate::app::show_figure(figure, &ViewerConfig::default())
}
