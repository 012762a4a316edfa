use std::path::Path;

use hdf5::types::{FixedAscii, FixedUnicode, TypeDescriptor, VarLenAscii, VarLenUnicode};
use ndarray::{Array, Dimension, Ix2, Ix4};

use super::latin1;
use super::model::{ItDataTuple, ItDataset, Split};
use crate::error::{Error, Result};

/// Name of the container file expected inside the data directory.
pub const DATA_FILE_NAME: &str = "IT_data.h5";

/// Widest fixed-length label the loader accepts, in bytes.
pub const MAX_LABEL_LEN: usize = 1024;

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load `IT_data.h5` from `path_to_data` and return its eight fields in the
/// fixed order: stimulus train/val/test, objects train/val/test,
/// spikes train/val.
pub fn load_it_data(path_to_data: impl AsRef<Path>) -> Result<ItDataTuple> {
    ItDataset::load(path_to_data).map(ItDataset::into_tuple)
}

impl ItDataset {
    /// Read the whole container into memory.
    ///
    /// Expected layout:
    /// - `stimulus_{train,val,test}`: float `[sample, channel, height, width]`
    /// - `spikes_{train,val}`: float `[sample, neuron]`
    /// - `object_{train,val,test}`: 1-D byte strings, Latin-1 encoded
    ///
    /// Numeric fields come back as `f32` whatever their stored type, so
    /// `float64` data is rounded to single precision.
    ///
    /// Any missing or malformed field aborts the load.
    pub fn load(path_to_data: impl AsRef<Path>) -> Result<Self> {
        let path = path_to_data.as_ref().join(DATA_FILE_NAME);
        if !path.is_file() {
            return Err(Error::NotFound { path });
        }
        let file = hdf5::File::open(&path).map_err(|source| Error::Open {
            path: path.clone(),
            source,
        })?;

        let stimulus_train = read_array::<Ix4>(&file, "stimulus_train")?;
        let spikes_train = read_array::<Ix2>(&file, "spikes_train")?;
        let objects_train = read_labels(&file, "object_train")?;

        let stimulus_val = read_array::<Ix4>(&file, "stimulus_val")?;
        let spikes_val = read_array::<Ix2>(&file, "spikes_val")?;
        let objects_val = read_labels(&file, "object_val")?;

        let stimulus_test = read_array::<Ix4>(&file, "stimulus_test")?;
        let objects_test = read_labels(&file, "object_test")?;

        let dataset = ItDataset {
            stimulus_train,
            stimulus_val,
            stimulus_test,
            objects_train,
            objects_val,
            objects_test,
            spikes_train,
            spikes_val,
        };

        log::info!(
            "Loaded {} ({} train / {} val / {} test stimuli, {} neurons)",
            path.display(),
            dataset.len(Split::Train),
            dataset.len(Split::Val),
            dataset.len(Split::Test),
            dataset.neuron_count()
        );
        Ok(dataset)
    }
}

// ---------------------------------------------------------------------------
// HDF5 helpers
// ---------------------------------------------------------------------------

fn open_field(file: &hdf5::File, field: &'static str) -> Result<hdf5::Dataset> {
    if !file.link_exists(field) {
        return Err(Error::MissingField { field });
    }
    file.dataset(field)
        .map_err(|source| Error::Read { field, source })
}

/// Read a numeric field with a fixed rank `D`, converted to `f32` by HDF5.
fn read_array<D: Dimension>(file: &hdf5::File, field: &'static str) -> Result<Array<f32, D>> {
    let ds = open_field(file, field)?;
    let shape = ds.shape();
    let rank = D::NDIM.unwrap_or(shape.len());
    if shape.len() != rank {
        return Err(Error::Rank {
            field,
            expected: rank,
            found: shape.len(),
        });
    }

    let data: Vec<f32> = ds
        .read_raw()
        .map_err(|source| Error::Read { field, source })?;
    Array::from_shape_vec(shape, data)
        .map_err(|source| Error::Shape { field, source })?
        .into_dimensionality::<D>()
        .map_err(|source| Error::Shape { field, source })
}

/// Read a 1-D string field and decode every entry as Latin-1.
///
/// Fixed-length strings are widened to [`MAX_LABEL_LEN`] by HDF5 during the
/// read; trailing NUL padding is dropped. The declared character set is
/// ignored, the raw bytes are always Latin-1.
fn read_labels(file: &hdf5::File, field: &'static str) -> Result<Vec<String>> {
    let ds = open_field(file, field)?;
    let descriptor = ds
        .dtype()
        .and_then(|dtype| dtype.to_descriptor())
        .map_err(|source| Error::Read { field, source })?;
    let read_err = |source| Error::Read { field, source };

    let labels = match descriptor {
        TypeDescriptor::FixedAscii(len) | TypeDescriptor::FixedUnicode(len)
            if len > MAX_LABEL_LEN =>
        {
            return Err(Error::LabelTooLong {
                field,
                len,
                max: MAX_LABEL_LEN,
            });
        }
        TypeDescriptor::FixedAscii(_) => ds
            .read_raw::<FixedAscii<MAX_LABEL_LEN>>()
            .map_err(read_err)?
            .iter()
            .map(|s| latin1::decode(s.as_bytes()))
            .collect(),
        TypeDescriptor::FixedUnicode(_) => ds
            .read_raw::<FixedUnicode<MAX_LABEL_LEN>>()
            .map_err(read_err)?
            .iter()
            .map(|s| latin1::decode(s.as_bytes()))
            .collect(),
        TypeDescriptor::VarLenAscii => ds
            .read_raw::<VarLenAscii>()
            .map_err(read_err)?
            .iter()
            .map(|s| latin1::decode(s.as_bytes()))
            .collect(),
        TypeDescriptor::VarLenUnicode => ds
            .read_raw::<VarLenUnicode>()
            .map_err(read_err)?
            .iter()
            .map(|s| latin1::decode(s.as_bytes()))
            .collect(),
        other => {
            return Err(Error::LabelType {
                field,
                found: format!("{other:?}"),
            })
        }
    };
    Ok(labels)
}
