#![allow(dead_code)]

use std::path::Path;

use hdf5::types::{FixedAscii, FixedUnicode, VarLenAscii, VarLenUnicode};
use hdf5::H5Type;
use it_viewer::data::latin1;
use it_viewer::DATA_FILE_NAME;
use ndarray::{Array, Array2, Array4, Dimension};

pub const FIELDS: [&str; 8] = [
    "stimulus_train",
    "spikes_train",
    "object_train",
    "stimulus_val",
    "spikes_val",
    "object_val",
    "stimulus_test",
    "object_test",
];

/// How object labels are stored in the fixture.
#[derive(Clone, Copy)]
pub enum LabelStorage {
    /// numpy `S` dtype, what h5py writes for `np.array([b"cat", ...])`.
    Fixed,
    /// h5py `string_dtype('ascii')`.
    VarLen,
    /// Fixed-length, UTF-8 character set.
    FixedUtf8,
    /// h5py `string_dtype('utf-8')`.
    VarLenUtf8,
}

pub fn write_array<T: H5Type + Copy, D: Dimension>(
    file: &hdf5::File,
    name: &str,
    data: &Array<T, D>,
) {
    let flat: Vec<T> = data.iter().copied().collect();
    file.new_dataset::<T>()
        .shape(data.shape().to_vec())
        .create(name)
        .unwrap()
        .write_raw(flat.as_slice())
        .unwrap();
}

pub fn write_labels(file: &hdf5::File, name: &str, labels: &[&str], storage: LabelStorage) {
    match storage {
        LabelStorage::Fixed => {
            let values: Vec<FixedAscii<16>> = labels
                .iter()
                .map(|s| {
                    let bytes = latin1::encode(s).unwrap();
                    // SAFETY: HDF5 stores the bytes as-is; bytes above 0x7F are Latin-1, as h5py writes them.
                    unsafe { FixedAscii::<16>::from_ascii_unchecked(&bytes) }
                })
                .collect();
            file.new_dataset::<FixedAscii<16>>()
                .shape(values.len())
                .create(name)
                .unwrap()
                .write_raw(values.as_slice())
                .unwrap();
        }
        LabelStorage::FixedUtf8 => {
            let values: Vec<FixedUnicode<16>> = labels
                .iter()
                .map(|s| s.parse().unwrap())
                .collect();
            file.new_dataset::<FixedUnicode<16>>()
                .shape(values.len())
                .create(name)
                .unwrap()
                .write_raw(values.as_slice())
                .unwrap();
        }
        LabelStorage::VarLenUtf8 => {
            let values: Vec<VarLenUnicode> = labels.iter().map(|s| s.parse().unwrap()).collect();
            file.new_dataset::<VarLenUnicode>()
                .shape(values.len())
                .create(name)
                .unwrap()
                .write_raw(values.as_slice())
                .unwrap();
        }
        LabelStorage::VarLen => {
            let values: Vec<VarLenAscii> = labels
                .iter()
                .map(|s| VarLenAscii::from_ascii(s).unwrap())
                .collect();
            file.new_dataset::<VarLenAscii>()
                .shape(values.len())
                .create(name)
                .unwrap()
                .write_raw(values.as_slice())
                .unwrap();
        }
    }
}

/// Write `IT_data.h5` into `dir`, leaving out the fields in `skip`.
///
/// Train: 2 stimuli (3x4x4) labelled cat/dog, 10 neurons.
/// Val: 3 stimuli, 10 neurons. Test: 1 stimulus.
pub fn write_fixture(dir: &Path, storage: LabelStorage, skip: &[&str]) {
    let file = hdf5::File::create(dir.join(DATA_FILE_NAME)).unwrap();
    let want = |name: &str| !skip.contains(&name);

    let stimulus = |n: usize, offset: f32| {
        Array4::<f32>::from_shape_fn((n, 3, 4, 4), |(s, c, h, w)| {
            offset + (s * 100 + c * 16 + h * 4 + w) as f32 / 100.0
        })
    };
    let spikes = |n: usize| Array2::<f32>::from_shape_fn((n, 10), |(s, k)| (s * 10 + k) as f32);

    if want("stimulus_train") {
        write_array(&file, "stimulus_train", &stimulus(2, 0.0));
    }
    if want("spikes_train") {
        write_array(&file, "spikes_train", &spikes(2));
    }
    if want("object_train") {
        write_labels(&file, "object_train", &["cat", "dog"], storage);
    }
    if want("stimulus_val") {
        write_array(&file, "stimulus_val", &stimulus(3, 1.0));
    }
    if want("spikes_val") {
        write_array(&file, "spikes_val", &spikes(3));
    }
    if want("object_val") {
        write_labels(&file, "object_val", &["car", "face", "boat"], storage);
    }
    if want("stimulus_test") {
        write_array(&file, "stimulus_test", &stimulus(1, -1.0));
    }
    if want("object_test") {
        write_labels(&file, "object_test", &["chair"], storage);
    }
}
