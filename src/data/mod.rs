/// Data layer: core types, loading, and label decoding.
///
/// Architecture:
/// ```text
///   <dir>/IT_data.h5
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  read named fields → ItDataset
///   └──────────┘   (labels through latin1::decode)
///        │
///        ▼
///   ┌───────────┐
///   │ ItDataset  │  stimuli / objects / spikes per Split
///   └───────────┘
/// ```

pub mod latin1;
pub mod loader;
pub mod model;
