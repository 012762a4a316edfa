mod common;

use common::{write_fixture, LabelStorage};
use it_viewer::stimulus::NORMALIZE_MEAN;
use it_viewer::{load_it_data, visualize_img, Error, Figure};
use ndarray::Array4;
use tempfile::tempdir;

#[test]
fn zero_stimulus_shows_the_mean_colour() {
    let stim = Array4::<f32>::zeros((1, 3, 8, 6));
    let fig = Figure::from_stimulus(&stim, &["grey".to_string()], 0).unwrap();

    let expected = NORMALIZE_MEAN.map(|m| (m * 255.0) as u8);
    assert_eq!(fig.image.dimensions(), (6, 8));
    assert!(fig.image.pixels().all(|px| px.0 == expected));
}

#[test]
fn figure_from_loaded_dataset() {
    let dir = tempdir().unwrap();
    write_fixture(dir.path(), LabelStorage::Fixed, &[]);
    let (stim_train, _, _, obj_train, ..) = load_it_data(dir.path()).unwrap();

    let fig = Figure::from_stimulus(&stim_train, &obj_train, 1).unwrap();
    assert_eq!(fig.title, "dog");
    assert_eq!(fig.size(), [4, 4]);
}

#[test]
fn out_of_range_index_fails_before_display() {
    let dir = tempdir().unwrap();
    write_fixture(dir.path(), LabelStorage::Fixed, &[]);
    let (_, _, stim_test, _, _, obj_test, ..) = load_it_data(dir.path()).unwrap();

    let err = visualize_img(&stim_test, &obj_test, obj_test.len()).unwrap_err();
    assert!(matches!(err, Error::IndexOutOfRange { index: 1, len: 1 }));
}
