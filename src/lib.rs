pub mod logger;

pub mod batch;
pub mod cli;
pub mod codec;
pub mod config;
pub mod constants;
pub mod error;
pub mod processing;
pub mod report;

pub use batch::{exceeds_threshold, is_candidate_file, optimize_tree, run_sweep};
pub use codec::{ImageCodec, WebpCodec};
pub use config::OptimizerConfig;
pub use error::{CompressionError, Result};
pub use processing::{optimize_file, output_path_for, target_dimensions};
pub use report::{BatchReport, FileOutcome};
