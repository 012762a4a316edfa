//! egui widgets for the browser and the single-figure window.

pub mod figure;
pub mod panels;
