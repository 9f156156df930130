//! Pattern and morphology signal fusion, target-layer extraction,
//! temperature detection, and priority-matrix classification for the
//! PIVOT pipeline.

pub mod classifier;
pub mod layers;
pub mod pattern;
pub mod priority_matrix;
pub mod temperature;

pub use classifier::PIVOTClassifier;
pub use layers::LayerExtractor;
pub use pattern::{PatternClassifier, PatternVerdict};
pub use priority_matrix::build as build_priority_matrix;
pub use temperature::TemperatureDetector;
