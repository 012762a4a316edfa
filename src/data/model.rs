use std::fmt;
use std::str::FromStr;

use ndarray::{Array2, Array4, Axis};
use thiserror::Error;

// ---------------------------------------------------------------------------
// Split – which partition of the recording a sample belongs to
// ---------------------------------------------------------------------------

/// One of the three disjoint partitions stored in `IT_data.h5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Split {
    #[default]
    Train,
    Val,
    Test,
}

impl Split {
    pub const ALL: [Split; 3] = [Split::Train, Split::Val, Split::Test];

    pub fn as_str(self) -> &'static str {
        match self {
            Split::Train => "train",
            Split::Val => "val",
            Split::Test => "test",
        }
    }
}

impl fmt::Display for Split {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown split '{0}' (expected train, val or test)")]
pub struct ParseSplitError(pub String);

impl FromStr for Split {
    type Err = ParseSplitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "train" => Ok(Split::Train),
            "val" | "validation" => Ok(Split::Val),
            "test" => Ok(Split::Test),
            _ => Err(ParseSplitError(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// ItDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// Normalized images, `[sample, channel, height, width]`.
pub type Stimuli = Array4<f32>;

/// Recorded responses, `[sample, neuron]`.
pub type Spikes = Array2<f32>;

/// The eight values returned by [`crate::load_it_data`], in their fixed order:
/// stimulus train/val/test, objects train/val/test, spikes train/val.
pub type ItDataTuple = (
    Stimuli,
    Stimuli,
    Stimuli,
    Vec<String>,
    Vec<String>,
    Vec<String>,
    Spikes,
    Spikes,
);

/// Fully materialized contents of an `IT_data.h5` container.
///
/// There are no ground-truth responses for the test split.
#[derive(Debug, Clone, PartialEq)]
pub struct ItDataset {
    pub stimulus_train: Stimuli,
    pub stimulus_val: Stimuli,
    pub stimulus_test: Stimuli,
    pub objects_train: Vec<String>,
    pub objects_val: Vec<String>,
    pub objects_test: Vec<String>,
    pub spikes_train: Spikes,
    pub spikes_val: Spikes,
}

impl ItDataset {
    pub fn stimulus(&self, split: Split) -> &Stimuli {
        match split {
            Split::Train => &self.stimulus_train,
            Split::Val => &self.stimulus_val,
            Split::Test => &self.stimulus_test,
        }
    }

    pub fn objects(&self, split: Split) -> &[String] {
        match split {
            Split::Train => &self.objects_train,
            Split::Val => &self.objects_val,
            Split::Test => &self.objects_test,
        }
    }

    pub fn spikes(&self, split: Split) -> Option<&Spikes> {
        match split {
            Split::Train => Some(&self.spikes_train),
            Split::Val => Some(&self.spikes_val),
            Split::Test => None,
        }
    }

    /// Number of stimuli in a split.
    pub fn len(&self, split: Split) -> usize {
        self.stimulus(split).len_of(Axis(0))
    }

    /// Whether a split holds no stimuli.
    pub fn is_empty(&self, split: Split) -> bool {
        self.len(split) == 0
    }

    /// Number of recorded neurons (0 if there are no training responses).
    pub fn neuron_count(&self) -> usize {
        self.spikes_train.ncols()
    }

    pub fn into_tuple(self) -> ItDataTuple {
        (
            self.stimulus_train,
            self.stimulus_val,
            self.stimulus_test,
            self.objects_train,
            self.objects_val,
            self.objects_test,
            self.spikes_train,
            self.spikes_val,
        )
    }
}
