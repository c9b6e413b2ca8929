//! JSON configuration of the command-line tools.

pub mod batch;

pub use batch::{load_config, BatchConfig, DatasetConfig, OutputConfig};
