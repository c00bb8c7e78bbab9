pub mod catalog;
pub mod classifier;
pub mod engine;
pub mod formatter;
pub mod library;
pub mod session;

pub use crate::domain::model::{BodyRegion, ClassificationResult, ExerciseRecord};
pub use crate::domain::ports::{Assistant, Classifier, ConfigProvider, Storage};
pub use crate::utils::error::Result;
