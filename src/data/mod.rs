pub mod dataset;

pub use dataset::{QueryScaling, SprintDataset, TARGET_SCALE};
