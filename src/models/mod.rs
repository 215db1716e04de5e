// src/models/mod.rs
pub mod model;
pub mod ou_process;
pub mod gbm;

pub use model::{SDEModel, SdeFunctions};
pub use ou_process::OuProcess;
pub use gbm::Gbm;
