pub mod math;
pub mod activation;
pub mod data;
pub mod loss;
pub mod model;
pub mod train;

// Convenience re-exports
pub use math::matrix::Matrix;
pub use activation::sigmoid::{sigmoid, sigmoid_prime};
pub use data::dataset::{QueryScaling, SprintDataset, TARGET_SCALE};
pub use loss::mse::MseLoss;
pub use model::regressor::Regressor;
pub use train::loop_fn::train_loop;
pub use train::train_config::TrainConfig;
